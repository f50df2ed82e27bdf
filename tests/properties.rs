//! Property tests for the line and inline pipeline.
//!
//! Any input must parse without panicking, yield one block per line, and
//! keep its text intact apart from the markers the parser consumes.

use concierge_md::{Block, Config, Span, parse, parse_inline, render, text_to_plain};
use proptest::prelude::*;

/// Text drawn from the characters the parser cares about plus some
/// multibyte filler.
fn marker_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("*".to_string()),
            Just("**".to_string()),
            Just("~~".to_string()),
            Just("~".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\r".to_string()),
            Just("* ".to_string()),
            Just("é".to_string()),
            Just("🙏".to_string()),
            "[a-z]{1,4}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn has_empty_text(spans: &[Span]) -> bool {
    spans.iter().any(|span| match span {
        Span::Text(text) => text.is_empty(),
        Span::Styled { children, .. } => has_empty_text(children),
    })
}

proptest! {
    #[test]
    fn one_block_per_line(input in marker_soup()) {
        let blocks = parse(&input);
        prop_assert_eq!(blocks.len(), input.split('\n').count());
    }

    #[test]
    fn arbitrary_strings_never_panic(input in any::<String>()) {
        let config = Config::default();
        let nodes = render(&input, &config);
        prop_assert_eq!(nodes.len(), input.split('\n').count());
        let _ = concierge_md::text_to_html(&input, &config);
        let _ = concierge_md::text_to_typst(&input, &config);
    }

    #[test]
    fn rendering_is_deterministic(input in marker_soup()) {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn no_empty_text_leaves(input in marker_soup()) {
        for block in parse(&input) {
            prop_assert!(!has_empty_text(block.content()));
        }
    }

    #[test]
    fn unmarked_text_round_trips(input in "[a-zA-Z0-9.,!?\n]{0,64}") {
        prop_assert_eq!(text_to_plain(&input, &Config::default()), input);
    }

    #[test]
    fn stripping_never_adds_characters(line in "[a-z*~ ]{0,32}") {
        let stripped: String = parse_inline(&line).iter().map(Span::plain_text).collect();
        prop_assert!(stripped.len() <= line.len());
        // Only delimiter characters are ever removed
        let letters = |s: &str| s.chars().filter(|c| c.is_ascii_lowercase()).collect::<String>();
        prop_assert_eq!(letters(&stripped), letters(&line));
    }

    #[test]
    fn italic_children_are_plain(line in "[a-z* ]{0,32}") {
        for span in parse_inline(&line) {
            if let Span::Styled { style: concierge_md::Style::Italic, children } = span {
                prop_assert!(children.iter().all(|c| matches!(c, Span::Text(_))));
            }
        }
    }

    #[test]
    fn bullets_never_keep_their_prefix(item in "[a-z]{1,8}", indent in " {0,3}") {
        let blocks = parse(&format!("{indent}* {item}"));
        prop_assert_eq!(blocks, vec![Block::Bullet { content: vec![Span::text(item)] }]);
    }
}
