use pulldown_cmark::{CowStr, Event, Tag, TagEnd, html};

use crate::block::{Span, Style};
use crate::render::Node;

/// Convert nodes to an HTML fragment, one `<div>` per node.
///
/// Markup is produced as a pulldown-cmark event stream so text escaping is
/// handled by its HTML writer.
pub fn nodes_to_html(nodes: &[Node]) -> String {
    let mut events = Vec::new();
    for node in nodes {
        node_events(node, &mut events);
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

fn node_events<'a>(node: &'a Node, events: &mut Vec<Event<'a>>) {
    match node {
        Node::Bullet { glyph, content } => {
            events.push(Event::Html(CowStr::Borrowed(
                "<div class=\"bullet\"><span class=\"marker\">",
            )));
            events.push(Event::Text(CowStr::Borrowed(glyph)));
            events.push(Event::Html(CowStr::Borrowed("</span><span>")));
            spans_events(content, events);
            events.push(Event::Html(CowStr::Borrowed("</span></div>\n")));
        }
        Node::Spacer { .. } => {
            events.push(Event::Html(CowStr::Borrowed(
                "<div class=\"spacer\"></div>\n",
            )));
        }
        Node::Line { content } => {
            events.push(Event::Html(CowStr::Borrowed("<div>")));
            spans_events(content, events);
            events.push(Event::Html(CowStr::Borrowed("</div>\n")));
        }
    }
}

fn spans_events<'a>(spans: &'a [Span], events: &mut Vec<Event<'a>>) {
    for span in spans {
        match span {
            Span::Text(text) => events.push(Event::Text(CowStr::Borrowed(text))),
            Span::Styled { style, children } => {
                let (start, end) = match style {
                    Style::Strikethrough => (Tag::Strikethrough, TagEnd::Strikethrough),
                    Style::Bold => (Tag::Strong, TagEnd::Strong),
                    Style::Italic => (Tag::Emphasis, TagEnd::Emphasis),
                };
                events.push(Event::Start(start));
                spans_events(children, events);
                events.push(Event::End(end));
            }
        }
    }
}
