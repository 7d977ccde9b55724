//! Auto-indentation and bracket linking.
//!
//! One left-to-right pass over a generation with a stack of open frames.
//! Frames are opened by brackets, assignment operators and control keywords
//! (`if`, `while`, `return`, ...). Control keywords and assignments are
//! *pending* frames: they have no closer of their own and are popped by the
//! next `;`, `)` or `}` ("cleanup").
//!
//! Stack effects per token:
//!
//! | token | effect |
//! |-------|--------|
//! | control keyword | push, replacing a pending `else` (`else if`) |
//! | `{` | replace a control keyword on top, else push |
//! | `}` | cleanup, pop `{` and link, cleanup |
//! | `(` | push |
//! | `)` | cleanup, pop `(` and link |
//! | assignment | push |
//! | `;` | cleanup, link with the innermost frame popped |
//!
//! A closer that finds the wrong frame on top is flagged as an error and
//! leaves the stack untouched.
//!
//! `else` is what makes this interesting. When the next significant token
//! after a closer is `else`, a `}` does no cleanup at all (the `if` was
//! already replaced by its block), and other closers stop popping right
//! after the `if`, so the `else` can take its place.
//!
//! The first significant token of every line except the first is then
//! re-indented by rewriting the trailing spaces of the whitespace token in
//! front of it. Columns of the rest of the line move with it, so alignment
//! under `(` and `=` is measured in the rewritten text and a second pass
//! changes nothing.

use shade_lang::{Category, LanguageTable};
use shade_lexer_core::SymbolClass;
use smallvec::SmallVec;

use crate::token::{ClassifiedToken, TokenFlags};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum FrameKind {
    Brace,
    Paren,
    Assign,
    If,
    Else,
    /// Any other control keyword.
    Control,
}

impl FrameKind {
    fn is_control(self) -> bool {
        matches!(self, FrameKind::If | FrameKind::Else | FrameKind::Control)
    }

    /// Popped by cleanup.
    fn is_pending(self) -> bool {
        self == FrameKind::Assign || self.is_control()
    }
}

/// What a token does to the frame stack.
#[derive(Copy, Clone, Debug)]
enum Action {
    Control(FrameKind),
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Assign,
    Terminator,
}

impl Action {
    fn of(token: &ClassifiedToken, table: &LanguageTable) -> Option<Action> {
        match token.category {
            Category::Reserved if table.is_control_keyword(&token.text) => {
                Some(Action::Control(match token.text.as_str() {
                    "if" => FrameKind::If,
                    "else" => FrameKind::Else,
                    _ => FrameKind::Control,
                }))
            }
            Category::Symbol => match (token.text.as_str(), token.symbol) {
                ("{", _) => Some(Action::OpenBrace),
                ("}", _) => Some(Action::CloseBrace),
                ("(", _) => Some(Action::OpenParen),
                (")", _) => Some(Action::CloseParen),
                (_, Some(SymbolClass::Assign)) => Some(Action::Assign),
                (_, Some(SymbolClass::Terminator)) => Some(Action::Terminator),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Frame {
    index: usize,
    kind: FrameKind,
}

/// Summary of one indentation pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IndentOutcome {
    /// Caret offset after the rewrites.
    pub caret: usize,
    /// Lines whose leading whitespace changed.
    pub lines_changed: u32,
    /// Closers flagged as unmatched.
    pub unmatched: u32,
}

/// Re-indent `tokens` in place and link brackets and terminators.
///
/// `caret` is a byte offset into the concatenated text; every rewrite at or
/// before it moves it by the rewrite's length change.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len(), unit))]
pub fn reindent(
    tokens: &mut [ClassifiedToken],
    table: &LanguageTable,
    unit: u32,
    caret: usize,
) -> IndentOutcome {
    let mut pass = IndentPass {
        stack: SmallVec::new(),
        unit,
        outcome: IndentOutcome {
            caret,
            ..IndentOutcome::default()
        },
    };

    // Start of the current token in the rewritten text.
    let mut pos = 0usize;
    let mut prev_end_line = 0u32;
    let mut shift_line = 0u32;
    let mut shift = 0isize;

    for ix in 0..tokens.len() {
        if shift != 0 && tokens[ix].line == shift_line {
            tokens[ix].col = shift_col(tokens[ix].col, shift);
        }
        if tokens[ix].category == Category::Whitespace {
            pos += tokens[ix].len();
            continue;
        }

        pass.stack_effect(tokens, ix, table);

        let line = tokens[ix].line;
        if line > prev_end_line && ix > 0 && tokens[ix - 1].category == Category::Whitespace {
            let target = pass.target_column(tokens, ix);
            let ws_start = pos - tokens[ix - 1].len();
            pass.expand_caret_tabs(&tokens[ix - 1].text, ws_start);
            let rewrite = rewrite_indent(&mut tokens[ix - 1].text, target, unit);
            if rewrite.changed {
                pass.outcome.lines_changed += 1;
            }
            pos = pos.saturating_add_signed(rewrite.before_break);
            if rewrite.indent != 0 {
                let indent_start = pos - rewrite.indent_len;
                pass.move_caret(indent_start, pos, rewrite.indent);
                pos = pos.saturating_add_signed(rewrite.indent);
                tokens[ix].col = shift_col(tokens[ix].col, rewrite.indent);
                shift_line = line;
                shift = rewrite.indent;
            }
        }

        prev_end_line = tokens[ix].end_line();
        pos += tokens[ix].len();
    }

    tracing::debug!(
        lines_changed = pass.outcome.lines_changed,
        unmatched = pass.outcome.unmatched,
        open_frames = pass.stack.len(),
        "indent pass done"
    );
    pass.outcome
}

struct IndentPass {
    stack: SmallVec<[Frame; 32]>,
    unit: u32,
    outcome: IndentOutcome,
}

impl IndentPass {
    fn stack_effect(&mut self, tokens: &mut [ClassifiedToken], ix: usize, table: &LanguageTable) {
        let Some(action) = Action::of(&tokens[ix], table) else {
            return;
        };
        match action {
            Action::Control(kind) => {
                if self.top_is(|top| top == FrameKind::Else) {
                    self.stack.pop();
                }
                self.stack.push(Frame { index: ix, kind });
            }
            Action::OpenBrace => {
                if self.top_is(FrameKind::is_control) {
                    self.stack.pop();
                }
                self.stack.push(Frame {
                    index: ix,
                    kind: FrameKind::Brace,
                });
            }
            Action::CloseBrace => {
                self.cleanup(tokens, ix);
                self.close(tokens, ix, FrameKind::Brace);
                self.cleanup(tokens, ix);
            }
            Action::OpenParen => self.stack.push(Frame {
                index: ix,
                kind: FrameKind::Paren,
            }),
            Action::CloseParen => {
                self.cleanup(tokens, ix);
                self.close(tokens, ix, FrameKind::Paren);
            }
            Action::Assign => self.stack.push(Frame {
                index: ix,
                kind: FrameKind::Assign,
            }),
            Action::Terminator => self.cleanup(tokens, ix),
        }
    }

    fn top_is(&self, pred: impl FnOnce(FrameKind) -> bool) -> bool {
        self.stack.last().is_some_and(|top| pred(top.kind))
    }

    /// Pop the frame `closer` ends, or flag `closer` when the top frame is
    /// something else.
    fn close(&mut self, tokens: &mut [ClassifiedToken], closer: usize, expected: FrameKind) {
        match self.stack.last() {
            Some(top) if top.kind == expected => {
                let opener = top.index;
                self.stack.pop();
                link(tokens, opener, closer);
            }
            _ => {
                tracing::trace!(index = closer, "unmatched closer");
                tokens[closer].flags |= TokenFlags::ERROR;
                self.outcome.unmatched += 1;
            }
        }
    }

    /// Pop pending frames ended by `closer`.
    fn cleanup(&mut self, tokens: &mut [ClassifiedToken], closer: usize) {
        let else_next = else_follows(tokens, closer);
        if else_next && tokens[closer].text == "}" {
            return;
        }

        let mut innermost = None;
        while let Some(&top) = self.stack.last() {
            if !top.kind.is_pending() {
                break;
            }
            self.stack.pop();
            innermost.get_or_insert(top.index);
            if else_next && top.kind == FrameKind::If {
                break;
            }
        }

        if tokens[closer].symbol == Some(SymbolClass::Terminator) {
            if let Some(frame) = innermost {
                link(tokens, frame, closer);
            }
        }
    }

    /// Indentation column for the first significant token of a line.
    fn target_column(&self, tokens: &[ClassifiedToken], ix: usize) -> u32 {
        if tokens[ix].category == Category::PreProcess {
            return 0;
        }
        let Some(top) = self.stack.last() else {
            return 0;
        };
        let depth = u32::try_from(self.stack.len()).unwrap_or(u32::MAX);
        if top.index == ix {
            return (depth - 1) * self.unit;
        }
        if matches!(top.kind, FrameKind::Paren | FrameKind::Assign) {
            let opener = &tokens[top.index];
            let wraps = tokens
                .get(top.index + 1)
                .is_some_and(ClassifiedToken::is_line_break);
            if !wraps {
                let width = u32::try_from(opener.len()).unwrap_or(u32::MAX);
                return opener.col.saturating_add(width).saturating_add(1);
            }
        }
        depth * self.unit
    }

    /// Move a caret that sits after tabs on the line-break side of `ws`,
    /// which starts at `ws_start`, by their expansion.
    fn expand_caret_tabs(&mut self, ws: &str, ws_start: usize) {
        let caret = &mut self.outcome.caret;
        let Some(offset) = caret.checked_sub(ws_start).filter(|&o| o > 0) else {
            return;
        };
        let break_end = ws.rfind('\n').map_or(0, |lf| lf + 1);
        let tabs = ws.as_bytes()[..offset.min(break_end)]
            .iter()
            .filter(|&&b| b == b'\t')
            .count();
        *caret += tabs * (self.unit as usize).saturating_sub(1);
    }

    /// Apply a rewrite of the indentation `[indent_start, token_start)` to
    /// the caret.
    fn move_caret(&mut self, indent_start: usize, token_start: usize, delta: isize) {
        let caret = &mut self.outcome.caret;
        let new_token_start = token_start.saturating_add_signed(delta);
        if *caret > indent_start && *caret < token_start && *caret > new_token_start {
            // Inside indentation that shrank past it.
            *caret = new_token_start;
        } else if token_start <= *caret {
            *caret = caret.saturating_add_signed(delta);
        }
    }
}

fn link(tokens: &mut [ClassifiedToken], a: usize, b: usize) {
    tokens[a].link = u32::try_from(b).ok();
    tokens[b].link = u32::try_from(a).ok();
}

/// First token after `ix` that is not whitespace or a comment.
pub fn next_significant(tokens: &[ClassifiedToken], ix: usize) -> Option<&ClassifiedToken> {
    tokens
        .get(ix + 1..)?
        .iter()
        .find(|token| !token.category.is_trivia())
}

/// Whether the next significant token after `ix` is the keyword `else`.
pub fn else_follows(tokens: &[ClassifiedToken], ix: usize) -> bool {
    next_significant(tokens, ix)
        .is_some_and(|token| token.category == Category::Reserved && token.text == "else")
}

/// Length changes of one indentation rewrite.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct IndentRewrite {
    changed: bool,
    /// Change of the run up to and including the last line feed.
    before_break: isize,
    /// Change of the indentation after it.
    indent: isize,
    /// Length of the indentation before the rewrite.
    indent_len: usize,
}

/// Expand tabs to `unit` spaces, then replace the trailing spaces with
/// `target` spaces.
///
/// Only the part after the last line feed is indentation; expanding tabs
/// before it does not move anything on the new line.
fn rewrite_indent(ws: &mut String, target: u32, unit: u32) -> IndentRewrite {
    let break_end = ws.rfind('\n').map_or(0, |lf| lf + 1);
    let indent_len = ws.len() - break_end;
    let target = target as usize;
    let trailing = ws.len() - ws.trim_end_matches(' ').len().max(break_end);
    if !ws.contains('\t') && trailing == target {
        return IndentRewrite {
            changed: false,
            before_break: 0,
            indent: 0,
            indent_len,
        };
    }

    let tab = " ".repeat(unit as usize);
    let mut rewritten = ws[..break_end].replace('\t', &tab);
    let before_break = signed_diff(rewritten.len(), break_end);
    let indent_from = rewritten.len();
    rewritten.push_str(&ws[break_end..].replace('\t', &tab));
    let kept = rewritten.trim_end_matches(' ').len().max(indent_from);
    rewritten.truncate(kept);
    rewritten.extend(std::iter::repeat(' ').take(target));
    let indent = signed_diff(rewritten.len() - indent_from, indent_len);
    let changed = rewritten != *ws;
    *ws = rewritten;
    IndentRewrite {
        changed,
        before_break,
        indent,
        indent_len,
    }
}

fn signed_diff(new: usize, old: usize) -> isize {
    if new >= old {
        isize::try_from(new - old).unwrap_or(isize::MAX)
    } else {
        isize::try_from(old - new).map_or(isize::MIN, |d| -d)
    }
}

fn shift_col(col: u32, delta: isize) -> u32 {
    let col = usize::try_from(col)
        .unwrap_or(usize::MAX)
        .saturating_add_signed(delta);
    u32::try_from(col).unwrap_or(u32::MAX)
}
