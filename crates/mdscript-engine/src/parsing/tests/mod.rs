//! Fixture tests for the block scanner.
//!
//! Fixtures (.md) live in `fixtures/`; each test renders the scanner
//! output as one line per block and compares it with an inline snapshot.

mod invariants;

use insta::assert_snapshot;
use xi_rope::Rope;

use crate::parsing::{blocks::scan_code_blocks, rope::preview};

fn render_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    render(&md)
}

fn render(md: &str) -> String {
    let rope = Rope::from(md);
    let blocks: Vec<_> = scan_code_blocks(&rope).collect();
    invariants::check(&rope, &blocks);

    blocks
        .iter()
        .map(|b| {
            format!(
                "{} {:?} match={:?} content@{}..{} {:?}",
                b.tag.as_str(),
                b.info,
                b.match_offset,
                b.content_span().start,
                b.content_span().end,
                preview(&rope, b.content_span(), 60)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn fixture_simple_js() {
    assert_snapshot!(render_fixture("simple_js"), @r#"js "js" match=Some(5) content@12..23 "let x = 1;\\n""#);
}

#[test]
fn fixture_mixed_languages() {
    assert_snapshot!(render_fixture("mixed_languages"), @r##"
    javascript "JavaScript title=\"app.js\"" match=Some(47) content@77..102 "const app = createApp();\\n"
    js "Js" match=Some(127) content@134..154 "app.mount(\"#root\");\\n"
    "##);
}

#[test]
fn fixture_adjacent_blocks() {
    assert_snapshot!(render_fixture("adjacent_blocks"), @r#"
    js "js" match=None content@6..15 "first();\\n"
    js "js" match=Some(18) content@25..35 "second();\\n"
    "#);
}

#[test]
fn fixture_unterminated() {
    assert_snapshot!(render_fixture("unterminated"), @r#"js "js" match=Some(10) content@17..25 "done();\\n""#);
}

#[test]
fn fixture_tilde_and_indent() {
    assert_snapshot!(render_fixture("tilde_and_indent"), @r#"js "js" match=Some(48) content@55..76 "const s = `\\n  ```\\n`;\\n""#);
}

/// Every block span slices back to text that starts and ends with a fence.
#[test]
fn block_spans_cover_fences() {
    let md = "a\n```js\nx();\n```\nb\n```javascript\ny();\n```";
    let rope = Rope::from(md);
    for block in scan_code_blocks(&rope) {
        let text = rope.slice_to_cow(block.span.start..block.span.end);
        assert!(text.starts_with("```"), "{text:?}");
        assert!(text.trim_end().ends_with("```"), "{text:?}");
    }
}

#[test]
fn empty_document() {
    assert_eq!(render(""), "");
}

#[test]
fn blank_lines_only() {
    assert_eq!(render("\n\n\n"), "");
}
