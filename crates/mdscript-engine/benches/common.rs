// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n- Bullet point\n  - Nested item\n\n```js\nfunction example() {\n    console.log(\"Hello\");\n}\n```\n\n```rust\nfn skipped() {}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, blocks_per_section: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {}\n\n", section));
        content.push_str("Some paragraph content with multiple sentences. This helps create realistic document structure for benchmarking.\n\n");
        for block in 0..blocks_per_section {
            content.push_str(&format!(
                "```javascript title=\"s{section}b{block}\"\n// block {block}\nconst value{block} = [1, 2, 3].map((n) => n * {block});\nexport function f{block}() {{ return `v${{value{block}}}`; }}\n```\n\n"
            ));
        }
    }

    content
}

/// Fence openers that are never closed, each followed by plain lines: the
/// input that makes a backtracking regular expression go quadratic.
#[allow(dead_code)]
pub fn generate_unclosed_openers(count: usize) -> String {
    let mut content = String::new();
    for i in 0..count {
        content.push_str(&format!("text {i}\n  ```js\nlet x{i} = 1;\n"));
    }
    content.push_str("```js\nopen();\n");
    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_complex_markdown(50, 4)
}
