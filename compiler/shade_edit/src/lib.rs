//! Incremental edit session for Shade.
//!
//! An [`EditSession`] owns two generations of classified tokens. Every call
//! to [`EditSession::parse`] splices one edit into the document, re-lexes
//! it, re-indents it, diffs the new generation against the previous one and
//! carries the caret across:
//!
//! ```text
//! text + Edit ──▶ lex/classify ──▶ indent pass ──▶ diff ──▶ caret remap
//! ```
//!
//! The host only redraws the [`TokenDiff`] range and moves its caret to the
//! returned [`CaretPosition`].
//!
//! # Modules
//!
//! - [`token`]: [`ClassifiedToken`] and the reusable [`TokenArray`] storage
//! - `classify`: lexing, categories, identifier links, diagnostic flags
//! - [`indent`]: the frame-stack indentation and bracket-linking pass
//! - [`diff`]: prefix/suffix token diff with margin
//! - [`caret`]: offset → (token, offset) remapping
//! - [`diagnostics`]: compiler errors per line
//! - [`highlight`]: link-chain highlighting and caret status positions

pub mod caret;
mod classify;
mod config;
pub mod diagnostics;
pub mod diff;
pub mod highlight;
pub mod indent;
mod session;
pub mod token;

pub use caret::{locate_caret, CaretPosition};
pub use config::{ConfigError, EditorConfig, MAX_INDENT_UNIT};
pub use diagnostics::{LineError, LineErrors, ParsedShaderLog};
pub use diff::{diff_tokens, DiffOptions, TokenDiff};
pub use indent::{reindent, IndentOutcome};
pub use session::{format_source, Edit, EditSession, ParseOutcome};
pub use token::{ClassifiedToken, TokenArray, TokenFlags};
