use serde::Serialize;

use crate::block::{Block, Span};
use crate::config::Config;

/// A presentation node: what a display layer draws for one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// Bullet glyph followed by the item's spans
    Bullet { glyph: String, content: Vec<Span> },
    /// Fixed-height gap with no content
    Spacer { height: String },
    Line { content: Vec<Span> },
}

/// Map parsed blocks to presentation nodes, one node per block.
pub fn render_blocks(blocks: Vec<Block>, config: &Config) -> Vec<Node> {
    blocks
        .into_iter()
        .map(|block| match block {
            Block::Bullet { content } => Node::Bullet {
                glyph: config.bullet.glyph.clone(),
                content,
            },
            Block::Blank => Node::Spacer {
                height: config.spacer.height.clone(),
            },
            Block::Text { content } => Node::Line { content },
        })
        .collect()
}
