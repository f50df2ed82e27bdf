use crate::block::spans_plain_text;
use crate::render::Node;

/// Flatten nodes to plain text, one line per node.
///
/// Emphasis delimiters are dropped; bullets are written as the glyph and a
/// space, spacers as empty lines.
pub fn nodes_to_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match node {
            Node::Bullet { glyph, content } => {
                out.push_str(glyph);
                out.push(' ');
                out.push_str(&spans_plain_text(content));
            }
            Node::Spacer { .. } => {}
            Node::Line { content } => out.push_str(&spans_plain_text(content)),
        }
    }
    out
}
