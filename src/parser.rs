use crate::block::Block;
use crate::inline::{InlineOptions, parse_inline_with};

const BULLET_PREFIX: &str = "* ";

/// Parse message text into one block per `\n`-separated line
pub fn parse(text: &str, options: InlineOptions) -> Vec<Block> {
    text.split('\n')
        .map(|line| classify_line(line, options))
        .collect()
}

/// Classify a single raw line and format its inline content
pub fn classify_line(line: &str, options: InlineOptions) -> Block {
    let trimmed = trim(line);

    if let Some(rest) = trimmed.strip_prefix(BULLET_PREFIX) {
        return Block::Bullet {
            content: parse_inline_with(rest, options),
        };
    }

    if trimmed.is_empty() {
        return Block::Blank;
    }

    // Plain lines keep their indentation
    Block::Text {
        content: parse_inline_with(line, options),
    }
}

/// Trim the whitespace a browser's `String.prototype.trim` removes.
pub(crate) fn trim(line: &str) -> &str {
    line.trim_matches(is_trimmable)
}

fn is_trimmable(ch: char) -> bool {
    ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}')
}
