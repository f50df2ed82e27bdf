//! Inline emphasis parsing: strikethrough, then bold, then italic.
//!
//! Each stage pairs an opening delimiter with the nearest closing delimiter
//! that leaves at least one character in between. Text a stage does not
//! consume is handed to the next stage; whatever the last stage leaves is
//! literal text. Malformed input is never repaired, only split mechanically.

use crate::block::{Span, Style};

const STRIKE: &str = "~~";
const BOLD: &str = "**";
const ITALIC: &str = "*";

/// Options for the inline cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineOptions {
    /// Also treat an unpaired segment that merely starts and ends with a
    /// delimiter as emphasis (`"**"` becomes an empty bold span). This is how
    /// the chat widget behaved.
    pub loose_delimiters: bool,
}

/// Parses one line (or bullet remainder) into spans.
pub fn parse_inline(text: &str) -> Vec<Span> {
    parse_inline_with(text, InlineOptions::default())
}

/// Parses one line into spans with explicit options.
pub fn parse_inline_with(text: &str, options: InlineOptions) -> Vec<Span> {
    let mut out = Vec::new();
    strike_stage(text, options, &mut out);
    out
}

fn strike_stage(text: &str, options: InlineOptions, out: &mut Vec<Span>) {
    for segment in split_pairs(text, STRIKE, options) {
        match segment {
            Segment::Literal(literal) => bold_stage(literal, options, out),
            Segment::Paired(inner) => {
                let mut children = Vec::new();
                bold_stage(inner, options, &mut children);
                out.push(Span::Styled {
                    style: Style::Strikethrough,
                    children,
                });
            }
        }
    }
}

fn bold_stage(text: &str, options: InlineOptions, out: &mut Vec<Span>) {
    for segment in split_pairs(text, BOLD, options) {
        match segment {
            Segment::Literal(literal) => italic_stage(literal, options, out),
            Segment::Paired(inner) => {
                let mut children = Vec::new();
                italic_stage(inner, options, &mut children);
                out.push(Span::Styled {
                    style: Style::Bold,
                    children,
                });
            }
        }
    }
}

fn italic_stage(text: &str, options: InlineOptions, out: &mut Vec<Span>) {
    for segment in split_pairs(text, ITALIC, options) {
        match segment {
            Segment::Literal(literal) => push_text(literal, out),
            Segment::Paired(inner) => {
                let mut children = Vec::new();
                push_text(inner, &mut children);
                out.push(Span::Styled {
                    style: Style::Italic,
                    children,
                });
            }
        }
    }
}

fn push_text(text: &str, out: &mut Vec<Span>) {
    if !text.is_empty() {
        out.push(Span::Text(text.to_string()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Text outside any pair.
    Literal(&'a str),
    /// Interior of a delimiter pair, delimiters stripped.
    Paired(&'a str),
}

/// Splits `text` into literal runs and delimited pairs, left to right.
///
/// Empty literal runs are skipped.
fn split_pairs<'a>(text: &'a str, delim: &str, options: InlineOptions) -> Vec<Segment<'a>> {
    let bytes = text.as_bytes();
    let marker = delim.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    // Delimiters are ASCII, so a byte-level match always sits on a char
    // boundary.
    while i + marker.len() <= bytes.len() {
        if bytes[i..].starts_with(marker) {
            let open_end = i + marker.len();
            if let Some(close) = find_closer(text, open_end, delim) {
                push_literal(&text[literal_start..i], delim, options, &mut segments);
                segments.push(Segment::Paired(&text[open_end..close]));
                i = close + marker.len();
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }
    push_literal(&text[literal_start..], delim, options, &mut segments);

    segments
}

/// Finds the nearest closing delimiter after at least one interior char.
///
/// Returns the byte offset where the closer starts, or `None` when a line
/// terminator or the end of input comes first.
fn find_closer(text: &str, from: usize, delim: &str) -> Option<usize> {
    let mut pos = from;
    for ch in text[from..].chars() {
        if is_line_terminator(ch) {
            return None;
        }
        pos += ch.len_utf8();
        if text[pos..].starts_with(delim) {
            return Some(pos);
        }
    }
    None
}

fn push_literal<'a>(
    literal: &'a str,
    delim: &str,
    options: InlineOptions,
    segments: &mut Vec<Segment<'a>>,
) {
    if literal.is_empty() {
        return;
    }
    if options.loose_delimiters {
        if let Some(inner) = loose_interior(literal, delim) {
            segments.push(Segment::Paired(inner));
            return;
        }
    }
    segments.push(Segment::Literal(literal));
}

/// Interior of an unpaired segment bracketed by `delim`, if it counts as
/// emphasis in loose mode.
///
/// Single-character delimiters need more than two characters in total so a
/// bare `*` or a `**` remnant stays literal. Two-character delimiters have no
/// such guard; overlapping brackets (`"***"`) give an empty interior.
fn loose_interior<'a>(literal: &'a str, delim: &str) -> Option<&'a str> {
    if !literal.starts_with(delim) || !literal.ends_with(delim) {
        return None;
    }
    let n = delim.len();
    if n == 1 && literal.len() <= 2 {
        return None;
    }
    if literal.len() >= 2 * n {
        Some(&literal[n..literal.len() - n])
    } else {
        Some("")
    }
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
