/// Language tags that mark a fenced block as JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptTag {
    JavaScript,
    Js,
}

impl ScriptTag {
    /// Checked in this order; `javascript` does not start with `js`, so the
    /// order only matters for which variant is reported.
    pub const ALL: [ScriptTag; 2] = [ScriptTag::JavaScript, ScriptTag::Js];

    pub fn as_str(self) -> &'static str {
        match self {
            ScriptTag::JavaScript => "javascript",
            ScriptTag::Js => "js",
        }
    }
}

/// What a line starting with a backtick fence says about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Everything after the fence marker, line terminator stripped.
    pub info: String,
    /// Set when the info string starts with a JavaScript tag.
    pub script: Option<ScriptTag>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Recognises a fence at the very start of `line`. Indented fences and
    /// tilde fences are not fences here.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let rest = line.strip_prefix(Self::BACKTICKS)?;
        let info = rest.trim_end_matches(['\r', '\n']);
        Some(FenceSig {
            info: info.to_string(),
            script: Self::script_tag(info),
        })
    }

    /// Matches the start of an info string against the JavaScript tags,
    /// ignoring ASCII case. Trailing metadata is allowed without a separator.
    pub fn script_tag(info: &str) -> Option<ScriptTag> {
        ScriptTag::ALL.into_iter().find(|tag| {
            info.get(..tag.as_str().len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(tag.as_str()))
        })
    }

    /// Any backtick fence closes an open block, whatever its info string.
    pub fn closes(sig: Option<&FenceSig>) -> bool {
        sig.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("js", Some(ScriptTag::Js))]
    #[case("JS", Some(ScriptTag::Js))]
    #[case("javascript", Some(ScriptTag::JavaScript))]
    #[case("JavaScript", Some(ScriptTag::JavaScript))]
    #[case("javascript title=\"demo\"", Some(ScriptTag::JavaScript))]
    #[case("js{1,3}", Some(ScriptTag::Js))]
    #[case("python", None)]
    #[case("", None)]
    #[case(" js", None)]
    #[case("j", None)]
    fn detects_script_tags(#[case] info: &str, #[case] expected: Option<ScriptTag>) {
        assert_eq!(CodeFence::script_tag(info), expected);
    }

    #[test]
    fn detect_backtick_fence() {
        let sig = CodeFence::sig("```js extra\r\n").unwrap();
        assert_eq!(sig.info, "js extra");
        assert_eq!(sig.script, Some(ScriptTag::Js));
    }

    #[test]
    fn bare_fence_has_no_script_tag() {
        let sig = CodeFence::sig("```\n").unwrap();
        assert_eq!(sig.info, "");
        assert_eq!(sig.script, None);
    }

    #[rstest]
    #[case("~~~js")]
    #[case("  ```js")]
    #[case("``js")]
    #[case("hello")]
    fn no_fence(#[case] line: &str) {
        assert_eq!(CodeFence::sig(line), None);
    }

    #[test]
    fn closes_on_any_fence() {
        assert!(CodeFence::closes(CodeFence::sig("```").as_ref()));
        assert!(CodeFence::closes(CodeFence::sig("```python").as_ref()));
        assert!(!CodeFence::closes(None));
    }
}
