use concierge_md::{Block, Config, Node, Span, parse, parse_inline, render, text_to_html};
use rstest::rstest;

fn line(spans: Vec<Span>) -> Block {
    Block::Text { content: spans }
}

#[rstest]
#[case("", 1)]
#[case("one line", 1)]
#[case("a\nb", 2)]
#[case("\n", 2)]
#[case("a\n\n\nb\n", 5)]
#[case("* x\n* y\n\n**done**", 4)]
fn block_count_matches_line_count(#[case] input: &str, #[case] expected: usize) {
    assert_eq!(parse(input).len(), expected);
}

#[rstest]
#[case("* Pool", true)]
#[case("   * Pool   ", true)]
#[case("\t* Pool", true)]
#[case("*Pool", false)]
#[case("*\tPool", false)]
#[case("- Pool", false)]
#[case("** Pool", false)]
fn bullet_detection(#[case] input: &str, #[case] is_bullet: bool) {
    let blocks = parse(input);
    assert_eq!(matches!(blocks[0], Block::Bullet { .. }), is_bullet);
}

#[rstest]
#[case("~~**a**~~", vec![Span::strike(vec![Span::bold(vec![Span::text("a")])])])]
#[case("~~a~~b~~c~~", vec![
    Span::strike(vec![Span::text("a")]),
    Span::text("b"),
    Span::strike(vec![Span::text("c")]),
])]
#[case("*lonely", vec![Span::text("*lonely")])]
#[case("**", vec![Span::text("**")])]
#[case("*", vec![Span::text("*")])]
#[case("**a** and **b**", vec![
    Span::bold(vec![Span::text("a")]),
    Span::text(" and "),
    Span::bold(vec![Span::text("b")]),
])]
#[case("~~*old* rate~~", vec![Span::strike(vec![
    Span::italic(vec![Span::text("old")]),
    Span::text(" rate"),
])])]
#[case("~~a **b~~ c**", vec![
    Span::strike(vec![Span::text("a **b")]),
    Span::text(" c**"),
])]
fn inline_cascade(#[case] input: &str, #[case] expected: Vec<Span>) {
    assert_eq!(parse_inline(input), expected);
}

#[test]
fn concierge_reply_end_to_end() {
    let reply = "Namaste! Here are our **rooms**:\n\n\
                 * **Deluxe Suite** - ~~$250~~ **$199**/night\n\
                 * *Garden View* room\n\
                 \n\
                 Ask me about the *spa*!";
    let blocks = parse(reply);

    assert_eq!(
        blocks,
        vec![
            line(vec![
                Span::text("Namaste! Here are our "),
                Span::bold(vec![Span::text("rooms")]),
                Span::text(":"),
            ]),
            Block::Blank,
            Block::Bullet {
                content: vec![
                    Span::bold(vec![Span::text("Deluxe Suite")]),
                    Span::text(" - "),
                    Span::strike(vec![Span::text("$250")]),
                    Span::text(" "),
                    Span::bold(vec![Span::text("$199")]),
                    Span::text("/night"),
                ],
            },
            Block::Bullet {
                content: vec![Span::italic(vec![Span::text("Garden View")]), Span::text(" room")],
            },
            Block::Blank,
            line(vec![
                Span::text("Ask me about the "),
                Span::italic(vec![Span::text("spa")]),
                Span::text("!"),
            ]),
        ]
    );
}

#[test]
fn fallback_reply_renders_as_plain_line() {
    let nodes = render(concierge_md::FALLBACK_REPLY, &Config::default());
    assert_eq!(
        nodes,
        vec![Node::Line {
            content: vec![Span::text(concierge_md::FALLBACK_REPLY)]
        }]
    );
}

#[test]
fn html_keeps_one_div_per_line() {
    let html = text_to_html("a\n* b\n\nc", &Config::default());
    assert_eq!(html.lines().count(), 4);
    assert!(html.lines().all(|l| l.starts_with("<div") && l.ends_with("</div>")));
}
