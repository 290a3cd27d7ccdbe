//! Logical line extraction for LaTeX sources.
//!
//! An unescaped `%` starts a comment that runs to the end of the physical
//! line. As in TeX, the comment also swallows the line break, so the next
//! physical line is appended to the current logical line:
//!
//! ```text
//! \input{chap%   comment
//! ter1}
//! ```
//!
//! yields the single logical line `\input{chapter1}`.

use std::str::SplitInclusive;

/// Iterator over the logical lines of one LaTeX source.
///
/// Stateless across files: create a new iterator for every file scanned.
pub struct LogicalLines<'a> {
    physical: SplitInclusive<'a, char>,
}

impl<'a> LogicalLines<'a> {
    /// Iterate over the logical lines of `content`.
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        Self {
            physical: content.split_inclusive('\n'),
        }
    }
}

impl Iterator for LogicalLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut logical = String::new();
        let mut continued = false;

        for line in self.physical.by_ref() {
            match comment_start(line) {
                Some(index) => {
                    logical.push_str(&line[..index]);
                    continued = true;
                }
                None => {
                    logical.push_str(strip_line_ending(line));
                    return Some(logical);
                }
            }
        }

        // Input ended inside a comment-joined line
        continued.then_some(logical)
    }
}

/// Byte index of the first `%` not preceded by a backslash.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    bytes
        .iter()
        .enumerate()
        .find(|&(index, &byte)| byte == b'%' && (index == 0 || bytes[index - 1] != b'\\'))
        .map(|(index, _)| index)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
