//! Shade command-line front end.
//!
//! The `shade` binary is a thin layer over the library crates:
//!
//! - `shade lex` prints the classified (or raw) token stream
//! - `shade fmt` runs the indentation pass over a file
//! - `shade edit` replays one edit through an [`EditSession`] and reports
//!   the diff range and caret, the way an editor host would see them
//!
//! [`EditSession`]: shade_edit::EditSession

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=shade_edit=debug` for one summary per parse.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
