//! Inline markdown-subset rendering for concierge chat replies.
//!
//! A reply is split into lines, each line is classified as a bullet, a blank
//! spacer or plain text, and its inline `~~strike~~`, `**bold**` and
//! `*italic*` markers are resolved. The resulting nodes can be written as
//! plain text, HTML, JSON or Typst, and compiled to PDF or SVG.

mod block;
mod chat;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod render;
mod text;
mod typst;

pub use block::{Block, Span, Style, spans_plain_text};
pub use chat::{FALLBACK_REPLY, GREETING, Message, Role, Transcript};
pub use config::Config;
pub use error::Error;
pub use inline::{InlineOptions, parse_inline, parse_inline_with};
pub use render::{Node, render_blocks};

use tracing::debug;
use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Parse message text into blocks with strict delimiter pairing.
pub fn parse(text: &str) -> Vec<Block> {
    parser::parse(text, InlineOptions::default())
}

/// Parse message text into blocks using the config's inline options.
pub fn parse_with_config(text: &str, config: &Config) -> Vec<Block> {
    parser::parse(text, config.inline_options())
}

/// Parse and map message text to presentation nodes.
pub fn render(text: &str, config: &Config) -> Vec<Node> {
    render_blocks(parse_with_config(text, config), config)
}

/// Convert message text to plain text with emphasis stripped.
pub fn text_to_plain(message: &str, config: &Config) -> String {
    text::nodes_to_text(&render(message, config))
}

/// Convert message text to an HTML fragment.
pub fn text_to_html(text: &str, config: &Config) -> String {
    html::nodes_to_html(&render(text, config))
}

/// Convert a transcript to an HTML fragment, one `<section>` per message.
pub fn transcript_to_html(transcript: &Transcript, config: &Config) -> String {
    let mut out = String::new();
    for message in transcript.messages() {
        let role = match message.role {
            Role::User => "user",
            Role::Concierge => "concierge",
        };
        out.push_str("<section class=\"message ");
        out.push_str(role);
        out.push_str("\">\n");
        out.push_str(&html::nodes_to_html(&message.nodes(config)));
        out.push_str("</section>\n");
    }
    out
}

/// Serialize the parsed blocks of message text as JSON.
pub fn text_to_json(text: &str, config: &Config) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&parse_with_config(text, config))?)
}

/// Convert message text to Typst markup.
pub fn text_to_typst(text: &str, config: &Config) -> String {
    typst::nodes_to_typst(&render(text, config), config)
}

/// Convert a transcript to Typst markup.
pub fn transcript_to_typst(transcript: &Transcript, config: &Config) -> String {
    typst::transcript_to_typst(transcript, config)
}

/// Convert message text to PDF bytes.
pub fn text_to_pdf(text: &str, config: &Config) -> Result<Vec<u8>, Error> {
    typst_to_pdf(text_to_typst(text, config))
}

/// Convert a transcript to PDF bytes.
pub fn transcript_to_pdf(transcript: &Transcript, config: &Config) -> Result<Vec<u8>, Error> {
    typst_to_pdf(transcript_to_typst(transcript, config))
}

/// Result of rendering to SVG pages.
pub struct SvgDocument {
    pub pages: Vec<String>,
    pub width_pt: f64,
    pub height_pt: f64,
}

/// Convert message text to SVG pages.
pub fn text_to_svg(text: &str, config: &Config) -> Result<SvgDocument, Error> {
    typst_to_svg(text_to_typst(text, config))
}

/// Convert a transcript to SVG pages.
pub fn transcript_to_svg(transcript: &Transcript, config: &Config) -> Result<SvgDocument, Error> {
    typst_to_svg(transcript_to_typst(transcript, config))
}

/// Compile Typst markup to a paged document.
fn compile_document(typst_content: String) -> Result<typst_library::layout::PagedDocument, Error> {
    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    engine
        .compile()
        .output
        .map_err(|e| Error::Typst(format!("{:?}", e)))
}

fn typst_to_pdf(typst_content: String) -> Result<Vec<u8>, Error> {
    let doc = compile_document(typst_content)?;

    let bytes = typst_pdf::pdf(&doc, &PdfOptions::default())
        .map_err(|e| Error::Pdf(format!("{:?}", e)))?;
    debug!(pages = doc.pages.len(), bytes = bytes.len(), "generated PDF");
    Ok(bytes)
}

fn typst_to_svg(typst_content: String) -> Result<SvgDocument, Error> {
    let doc = compile_document(typst_content)?;

    let pages: Vec<String> = doc.pages.iter().map(typst_svg::svg).collect();

    // Get dimensions from first page (assuming all pages same size)
    let (width_pt, height_pt) = if let Some(first_page) = doc.pages.first() {
        let size = first_page.frame.size();
        (size.x.to_pt(), size.y.to_pt())
    } else {
        (595.0, 842.0) // A4 default
    };

    debug!(pages = pages.len(), "generated SVG");
    Ok(SvgDocument {
        pages,
        width_pt,
        height_pt,
    })
}
