use serde::Serialize;

/// Emphasis applied by a delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// `~~text~~`
    Strikethrough,
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
}

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Styled { style: Style, children: Vec<Span> },
}

impl Span {
    pub fn text(text: impl Into<String>) -> Self {
        Span::Text(text.into())
    }

    pub fn strike(children: Vec<Span>) -> Self {
        Span::Styled {
            style: Style::Strikethrough,
            children,
        }
    }

    pub fn bold(children: Vec<Span>) -> Self {
        Span::Styled {
            style: Style::Bold,
            children,
        }
    }

    pub fn italic(children: Vec<Span>) -> Self {
        Span::Styled {
            style: Style::Italic,
            children,
        }
    }

    /// The span's text with every delimiter stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    pub(crate) fn push_plain_text(&self, out: &mut String) {
        match self {
            Span::Text(text) => out.push_str(text),
            Span::Styled { children, .. } => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

/// One input line after classification.
///
/// Blocks never span input lines: a message with `n` newlines always yields
/// `n + 1` blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A line whose trimmed form starts with `"* "`; the prefix is not part
    /// of `content`.
    Bullet { content: Vec<Span> },
    /// An empty or whitespace-only line.
    Blank,
    /// Any other line, formatted untrimmed.
    Text { content: Vec<Span> },
}

impl Block {
    /// Inline content of the block, empty for blank lines.
    pub fn content(&self) -> &[Span] {
        match self {
            Block::Bullet { content } | Block::Text { content } => content,
            Block::Blank => &[],
        }
    }
}

/// Concatenated plain text of a span sequence.
pub fn spans_plain_text(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        span.push_plain_text(&mut out);
    }
    out
}
