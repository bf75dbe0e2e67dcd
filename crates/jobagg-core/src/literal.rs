//! Parser for sequence literals of quoted strings.
//!
//! Some providers flatten list-valued columns to their textual form before
//! handing rows over, so an `emails` cell can arrive as
//! `"['hr@acme.io', 'jobs@acme.io']"`. [`parse_string_list`] turns such text
//! back into its strings.
//!
//! Accepted grammar:
//!
//! ```text
//! list    := ws open ws ( string ws ( ',' ws string ws )* ( ',' ws )? )? close ws
//! open    := '[' | '('          (close must match)
//! string  := '\'' chars '\'' | '"' chars '"'
//! ```
//!
//! Escapes `\\`, `\'`, `\"`, `\n`, `\t` and `\r` are decoded; any other
//! escaped character is kept verbatim together with its backslash.

use std::iter::Peekable;
use std::str::CharIndices;

/// Why a piece of text is not a sequence literal. Offsets are byte offsets
/// into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("expected `[` or `(` at offset {0}")]
    NotASequence(usize),
    #[error("expected a quoted string at offset {0}")]
    ExpectedString(usize),
    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),
    #[error("expected `,` or `{close}` at offset {offset}")]
    ExpectedSeparator { offset: usize, close: char },
    #[error("unexpected trailing input at offset {0}")]
    TrailingInput(usize),
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

/// Parse a bracketed or parenthesised list of quoted strings.
pub fn parse_string_list(input: &str) -> Result<Vec<String>, LiteralError> {
    let mut cur = Cursor::new(input);

    cur.skip_ws();
    let close = match cur.next() {
        Some((_, '[')) => ']',
        Some((_, '(')) => ')',
        Some((offset, _)) => return Err(LiteralError::NotASequence(offset)),
        None => return Err(LiteralError::UnexpectedEnd),
    };

    let mut items = Vec::new();
    loop {
        cur.skip_ws();
        match cur.peek() {
            Some((_, c)) if c == close => {
                cur.next();
                break;
            }
            Some((offset, quote @ ('\'' | '"'))) => {
                cur.next();
                items.push(cur.string_body(offset, quote)?);
            }
            Some((offset, _)) => return Err(LiteralError::ExpectedString(offset)),
            None => return Err(LiteralError::UnexpectedEnd),
        }

        cur.skip_ws();
        match cur.next() {
            Some((_, ',')) => continue,
            Some((_, c)) if c == close => break,
            Some((offset, _)) => return Err(LiteralError::ExpectedSeparator { offset, close }),
            None => return Err(LiteralError::UnexpectedEnd),
        }
    }

    cur.skip_ws();
    match cur.peek() {
        Some((offset, _)) => Err(LiteralError::TrailingInput(offset)),
        None => Ok(items),
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

struct Cursor<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some((_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    /// Read up to and including the closing `quote`. The opening quote has
    /// already been consumed; `start` is its offset.
    fn string_body(&mut self, start: usize, quote: char) -> Result<String, LiteralError> {
        let mut out = String::new();
        loop {
            match self.next() {
                None => return Err(LiteralError::UnterminatedString(start)),
                Some((_, c)) if c == quote => return Ok(out),
                Some((_, '\\')) => match self.next() {
                    None => return Err(LiteralError::UnterminatedString(start)),
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 't')) => out.push('\t'),
                    Some((_, 'r')) => out.push('\r'),
                    Some((_, c @ ('\\' | '\'' | '"'))) => out.push(c),
                    Some((_, other)) => {
                        out.push('\\');
                        out.push(other);
                    }
                },
                Some((_, c)) => out.push(c),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
