//! Delimiter scanning for inline query literals.
//!
//! A source file is cut at every occurrence of [`LITERAL_OPEN`]. The scanner
//! walks those pieces with two states: before the first opening tag nothing
//! is a literal, and once inside, each piece starts with a literal body that
//! runs to the next backtick. The line right before an opening tag is kept
//! as the literal's context line.

use std::{mem, str::Split};

/// Tag that opens a query literal.
pub const LITERAL_OPEN: &str = "gql`";

/// Character that closes a query literal.
pub const LITERAL_CLOSE: char = '`';

/// One literal occurrence, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLiteral<'a> {
    /// 1-based position of the literal within its file.
    pub index: usize,
    /// Trimmed text between the opening tag and the closing backtick.
    pub body: &'a str,
    /// Source line immediately preceding the opening tag, up to the tag.
    pub context_line: &'a str,
}

#[derive(Debug, Clone, Copy)]
enum ScanState<'a> {
    /// No opening tag seen yet.
    Outside,
    /// An opening tag was just passed; `context_line` preceded it.
    Inside { context_line: &'a str },
}

/// Iterator over the [`RawLiteral`]s of a source text.
pub struct LiteralScanner<'a> {
    segments: Split<'a, &'static str>,
    state: ScanState<'a>,
    index: usize,
}

impl<'a> LiteralScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            segments: source.split(LITERAL_OPEN),
            state: ScanState::Outside,
            index: 0,
        }
    }
}

impl<'a> Iterator for LiteralScanner<'a> {
    type Item = RawLiteral<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let segment = self.segments.next()?;
            let next_state = ScanState::Inside {
                context_line: last_line(segment),
            };

            match mem::replace(&mut self.state, next_state) {
                ScanState::Outside => continue,
                ScanState::Inside { context_line } => {
                    self.index += 1;
                    return Some(RawLiteral {
                        index: self.index,
                        body: literal_body(segment),
                        context_line,
                    });
                }
            }
        }
    }
}

fn literal_body(segment: &str) -> &str {
    segment
        .split(LITERAL_CLOSE)
        .next()
        .unwrap_or_default()
        .trim()
}

fn last_line(segment: &str) -> &str {
    segment.rsplit('\n').next().unwrap_or_default()
}
