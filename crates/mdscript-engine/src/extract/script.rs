//! Token-level JavaScript extractor backed by `mdscript-syntax`.

use std::ops::Range;

use mdscript_syntax::{AnalyzeOptions, LineIndex, SourceType, SyntaxError, analyze};

use crate::facts::{Fact, FactBuffer, FactSink, TopLevelKind};
use crate::models::Document;
use crate::position::{Location, Position};

use super::error::{ExtractError, ParseError, SnippetError};
use super::loc::LocInfo;
use super::scope::ExtractionScope;
use super::snippet::{Snippet, SnippetExtractor};
use super::translator::LocationTranslator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub ecma_version: u16,
    pub source_type: SourceType,
    /// Emit one `Line` fact per source line.
    pub extract_lines: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            ecma_version: 2020,
            source_type: SourceType::Auto,
            extract_lines: true,
        }
    }
}

impl ExtractorConfig {
    pub fn with_source_type(self, source_type: SourceType) -> Self {
        Self {
            source_type,
            ..self
        }
    }

    fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            ecma_version: self.ecma_version,
            source_type: self.source_type,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptExtractor {
    config: ExtractorConfig,
}

impl ScriptExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a standalone script file with the configured source type.
    /// Positions need no translation: the snippet is the whole document.
    /// Nothing is written to `sink` when the file fails to parse.
    pub fn extract_file(&self, document: &Document, sink: &mut dyn FactSink) -> Result<LocInfo, ExtractError> {
        let mut buffer = FactBuffer::new(sink);
        let file = buffer.fresh_label();
        buffer.emit(Fact::File {
            label: file,
            path: document.source().to_string(),
        })?;

        let source = document.text();
        let snippet = Snippet {
            source: &source,
            kind: TopLevelKind::Script,
            translator: LocationTranslator::identity(),
            file,
        };
        let loc = self
            .extract(&snippet, &mut ExtractionScope::new(), &mut buffer)
            .map_err(|e| match e {
                SnippetError::Parse(error) => ExtractError::Syntax {
                    file: document.source().clone(),
                    error,
                },
                SnippetError::Sink(e) => ExtractError::Sink(e),
            })?;
        buffer.commit()?;
        Ok(loc)
    }
}

impl SnippetExtractor for ScriptExtractor {
    fn extract(
        &self,
        snippet: &Snippet<'_>,
        scope: &mut ExtractionScope,
        sink: &mut dyn FactSink,
    ) -> Result<LocInfo, SnippetError> {
        let source = snippet.source;
        let index = LineIndex::new(source);
        let analysis = analyze(source, self.config.analyze_options())
            .map_err(|e| parse_error(&index, e))?;
        let at = |span: Range<usize>| {
            snippet
                .translator
                .translate_location(location_of(source, &index, span))
        };

        let toplevel = sink.fresh_label();
        let body = source.trim_end_matches(['\r', '\n']);
        sink.emit(Fact::TopLevel {
            label: toplevel,
            file: snippet.file,
            toplevel_kind: snippet.kind,
            is_module: analysis.is_module,
            location: at(0..body.len()),
        })?;

        if self.config.extract_lines {
            for line in 0..index.line_count() {
                let text = index.line_text(line);
                let number = line as u32 + 1;
                let width = text.chars().count().max(1) as u32;
                let location = Location::new(Position::new(number, 1), Position::new(number, width));
                let label = sink.fresh_label();
                sink.emit(Fact::Line {
                    label,
                    toplevel,
                    text: text.to_string(),
                    terminator: index.line_terminator(line).to_string(),
                    location: snippet.translator.translate_location(location),
                })?;
            }
        }

        for comment in analysis.comments() {
            let label = sink.fresh_label();
            sink.emit(Fact::Comment {
                label,
                toplevel,
                text: comment.text.to_string(),
                location: at(comment.span.clone()),
            })?;
        }

        for declaration in &analysis.declarations {
            let variable = scope.declare(declaration.name, sink);
            let label = sink.fresh_label();
            sink.emit(Fact::Declaration {
                label,
                toplevel,
                variable,
                name: declaration.name.to_string(),
                declaration_kind: declaration.kind.as_str().to_string(),
                location: at(declaration.span.clone()),
            })?;
        }

        Ok(LocInfo::new(analysis.lines.code, analysis.lines.comments))
    }
}

fn parse_error(index: &LineIndex<'_>, e: SyntaxError) -> ParseError {
    let (line, column) = index.position(e.offset);
    ParseError::new(e.message, Position::new(line, column))
}

/// Snippet-space location of `span`, ending on its last character.
fn location_of(source: &str, index: &LineIndex<'_>, span: Range<usize>) -> Location {
    let last = source
        .get(span.clone())
        .and_then(|text| text.char_indices().last())
        .map_or(span.start, |(i, _)| span.start + i);
    let (start_line, start_column) = index.position(span.start);
    let (end_line, end_column) = index.position(last);
    Location::new(
        Position::new(start_line, start_column),
        Position::new(end_line, end_column),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{FactLog, Label};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn snippet(source: &str, anchor: Position) -> Snippet<'_> {
        Snippet {
            source,
            kind: TopLevelKind::InlineScript,
            translator: LocationTranslator::new(anchor),
            file: Label(0),
        }
    }

    fn run(source: &str, config: ExtractorConfig) -> (Result<LocInfo, SnippetError>, FactLog) {
        let mut sink = FactLog::new();
        let mut scope = ExtractionScope::new();
        let result = ScriptExtractor::new(config).extract(
            &snippet(source, Position::START),
            &mut scope,
            &mut sink,
        );
        (result, sink)
    }

    #[test]
    fn emits_facts_in_document_space() {
        let mut sink = FactLog::new();
        let mut scope = ExtractionScope::new();
        let source = "// setup\nconst answer = 42;\n";
        let loc = ScriptExtractor::default()
            .extract(&snippet(source, Position::new(3, 1)), &mut scope, &mut sink)
            .unwrap();

        assert_eq!(loc, LocInfo::new(1, 1));
        assert_snapshot!(sink.render(), @r#"
        #1 toplevel InlineScript in #0 module=false @3:1-4:18
        #2 line "// setup" in #1 @3:1-3:8
        #3 line "const answer = 42;" in #1 @4:1-4:18
        #4 comment "// setup" in #1 @3:1-3:8
        #6 const answer -> #5 in #1 @4:7-4:12
        "#);
    }

    #[test]
    fn line_facts_can_be_disabled() {
        let config = ExtractorConfig {
            extract_lines: false,
            ..ExtractorConfig::default()
        };
        let (result, sink) = run("f();\ng();\n", config);
        assert_eq!(result.unwrap(), LocInfo::new(2, 0));
        assert!(!sink.facts().iter().any(|f| matches!(f, Fact::Line { .. })));
    }

    #[test]
    fn parse_errors_are_in_snippet_space() {
        let (result, sink) = run("let a = 1;\nlet s = 'oops;\n", ExtractorConfig::default());
        match result {
            Err(SnippetError::Parse(e)) => {
                assert_eq!(e, ParseError::new("Unterminated string constant", Position::new(2, 9)));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn script_source_type_rejects_modules() {
        let config = ExtractorConfig::default().with_source_type(SourceType::Script);
        let (result, _) = run("export default 1;\n", config);
        assert!(matches!(result, Err(SnippetError::Parse(_))));

        let (result, sink) = run("export default 1;\n", ExtractorConfig::default());
        assert!(result.is_ok());
        assert!(matches!(
            sink.facts()[0],
            Fact::TopLevel { is_module: true, .. }
        ));
    }

    #[test]
    fn shared_scope_links_redeclarations() {
        let extractor = ScriptExtractor::default();
        let mut sink = FactLog::new();
        let mut scope = ExtractionScope::new();
        extractor
            .extract(&snippet("var x = 1;\n", Position::new(2, 1)), &mut scope, &mut sink)
            .unwrap();
        extractor
            .extract(&snippet("var x = 2;\n", Position::new(6, 1)), &mut scope, &mut sink)
            .unwrap();

        let variables: Vec<Label> = sink
            .facts()
            .iter()
            .filter_map(|f| match f {
                Fact::Declaration { variable, .. } => Some(*variable),
                _ => None,
            })
            .collect();
        assert_eq!(variables.len(), 2);
        assert_eq!(variables[0], variables[1]);
        assert_eq!(scope.lookup("x"), Some(variables[0]));
    }

    #[test]
    fn whole_files_use_the_configured_source_type() {
        let document = Document::new(crate::models::SourceFile::from("lib.js"), "let a;\nexport { a };\n");
        let script = ScriptExtractor::new(ExtractorConfig::default().with_source_type(SourceType::Script));

        let mut rejected = FactLog::new();
        let err = script.extract_file(&document, &mut rejected).unwrap_err();
        assert_eq!(err.position(), Some(Position::new(2, 1)));
        assert!(rejected.is_empty());

        let mut sink = FactLog::new();
        let loc = ScriptExtractor::default().extract_file(&document, &mut sink).unwrap();
        assert_eq!(loc, LocInfo::new(2, 0));
        assert!(matches!(
            sink.facts()[1],
            Fact::TopLevel {
                toplevel_kind: TopLevelKind::Script,
                is_module: true,
                ..
            }
        ));
    }

    #[test]
    fn location_ends_on_last_character() {
        let source = "é = 'ü';";
        let index = LineIndex::new(source);
        assert_eq!(
            location_of(source, &index, 0..source.len()),
            Location::new(Position::new(1, 1), Position::new(1, 8))
        );
        assert_eq!(
            location_of(source, &index, 0..0),
            Location::new(Position::START, Position::START)
        );
    }
}
