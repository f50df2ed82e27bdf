use crate::block::{Span, Style};
use crate::chat::{Role, Transcript};
use crate::config::Config;
use crate::render::Node;

/// Convert a rendered message to a Typst document
pub fn nodes_to_typst(nodes: &[Node], config: &Config) -> String {
    let mut out = String::new();
    emit_preamble(config, &mut out);
    emit_nodes(nodes, config, &mut out);
    out
}

/// Convert a chat transcript to a Typst document, one framed block per message
pub fn transcript_to_typst(transcript: &Transcript, config: &Config) -> String {
    let mut out = String::new();
    emit_preamble(config, &mut out);

    for message in transcript.messages() {
        let (fill, label) = match message.role {
            Role::User => (&config.transcript.user_fill, &config.transcript.user_label),
            Role::Concierge => (
                &config.transcript.concierge_fill,
                &config.transcript.concierge_label,
            ),
        };

        out.push_str("#block(width: 100%, inset: 8pt, radius: 6pt, breakable: false, fill: rgb(");
        push_string_literal(fill, &mut out);
        out.push_str("))[\n#text(weight: \"bold\", size: 0.8em)[");
        escape_text(label, &mut out);
        out.push_str("]\n");
        emit_nodes(&message.nodes(config), config, &mut out);
        out.push_str("]\n\n");
    }

    out
}

fn emit_preamble(config: &Config, out: &mut String) {
    out.push_str("#set par(linebreaks: \"optimized\")\n");
    if config.page.numbers {
        out.push_str("#set page(numbering: \"1\")\n");
    }
    if config.font.sans {
        out.push_str("#set text(font: (\"Open Sans\", \"DejaVu Sans\"))\n");
    }
    out.push('\n');
}

fn emit_nodes(nodes: &[Node], config: &Config, out: &mut String) {
    for node in nodes {
        emit_node(node, config, out);
    }
}

fn emit_node(node: &Node, config: &Config, out: &mut String) {
    match node {
        Node::Bullet { glyph, content } => {
            // Glyph column sized to its content, text takes the rest
            out.push_str("#grid(columns: (auto, 1fr), column-gutter: 0.5em, text(fill: rgb(");
            push_string_literal(&config.bullet.color, out);
            out.push_str("))[");
            escape_text(glyph, out);
            out.push_str("], [");
            spans_to_typst(content, out);
            out.push_str("])\n");
        }
        Node::Spacer { height } => {
            out.push_str("#v(");
            out.push_str(height);
            out.push_str(")\n");
        }
        Node::Line { content } => {
            out.push_str("#block[");
            spans_to_typst(content, out);
            out.push_str("]\n");
        }
    }
}

fn spans_to_typst(spans: &[Span], out: &mut String) {
    for span in spans {
        span_to_typst(span, out);
    }
}

fn span_to_typst(span: &Span, out: &mut String) {
    match span {
        Span::Text(text) => escape_text(text, out),
        Span::Styled { style, children } => {
            out.push_str(match style {
                Style::Strikethrough => "#strike[",
                Style::Bold => "#strong[",
                Style::Italic => "#emph[",
            });
            spans_to_typst(children, out);
            out.push(']');
        }
    }
}

/// Escape characters with markup meaning inside a content block
fn escape_text(text: &str, out: &mut String) {
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '~' | '/' | '='
            | '-' | '+' => {
                out.push('\\');
                out.push(ch);
            }
            // `1.` opens a numbered list item at the start of a line
            '.' if prev.is_some_and(|p| p.is_ascii_digit()) => out.push_str("\\."),
            _ => out.push(ch),
        }
        prev = Some(ch);
    }
}

fn push_string_literal(value: &str, out: &mut String) {
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}
