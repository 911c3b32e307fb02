use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mdscript_config::{Config, ExtractorSettings, SourceTypeSetting};
use mdscript_engine::facts::LabelAllocator;
use mdscript_engine::{
    ExtractError, ExtractorConfig, Fact, FactSink, JsonLinesWriter, Label, LocInfo,
    MarkdownExtractor, ScriptExtractor, SourceType, collect_inputs,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Extract the JavaScript embedded in Markdown documents.
#[derive(Parser, Debug)]
#[command(name = "mdscript", version, about)]
struct Args {
    /// Markdown files or directories to scan. `.js`, `.mjs` and `.cjs` files
    /// are extracted as plain scripts.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Config file (default: ~/.config/mdscript/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write facts as JSON lines to FILE
    #[arg(short = 'o', long = "facts", value_name = "FILE")]
    facts: Option<PathBuf>,

    /// Do not emit a fact per source line
    #[arg(long)]
    no_lines: bool,

    /// More logging; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Sink used when facts are not being written anywhere.
#[derive(Default)]
struct DiscardFacts {
    labels: LabelAllocator,
}

impl FactSink for DiscardFacts {
    fn fresh_label(&mut self) -> Label {
        self.labels.fresh()
    }

    fn emit(&mut self, _fact: Fact) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Report {
    documents: usize,
    failed: usize,
    total: LocInfo,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn extractor_config(settings: &ExtractorSettings, no_lines: bool) -> ExtractorConfig {
    ExtractorConfig {
        ecma_version: settings.ecma_version,
        source_type: match settings.source_type {
            SourceTypeSetting::Script => SourceType::Script,
            SourceTypeSetting::Module => SourceType::Module,
            SourceTypeSetting::Auto => SourceType::Auto,
        },
        extract_lines: settings.extract_lines && !no_lines,
    }
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "js" || ext == "mjs" || ext == "cjs")
}

/// Extracts every input, printing one summary line per document to `out`
/// and one line per failure to `err`. Only failures to write facts abort
/// the run.
fn run(
    paths: &[PathBuf],
    config: ExtractorConfig,
    sink: &mut dyn FactSink,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Report> {
    let markdown = MarkdownExtractor::new(config);
    let script = ScriptExtractor::new(config);
    let mut report = Report::default();

    for input in collect_inputs(paths)? {
        report.documents += 1;
        let document = match input.read() {
            Ok(document) => document,
            Err(e) => {
                writeln!(err, "{}: {e}", input.path.display())?;
                report.failed += 1;
                continue;
            }
        };
        log::info!("extracting {}", document.source());

        let result = if is_script(&input.path) {
            script.extract_file(&document, sink)
        } else {
            markdown.extract(&document, sink)
        };
        match result {
            Ok(loc) => {
                writeln!(
                    out,
                    "{}: {} lines of code, {} lines of comments",
                    document.source(),
                    loc.lines_of_code,
                    loc.lines_of_comments
                )?;
                report.total += loc;
            }
            Err(e @ ExtractError::Syntax { .. }) => {
                writeln!(err, "{e}")?;
                report.failed += 1;
            }
            Err(ExtractError::Sink(e)) => return Err(e).context("failed to write facts"),
        }
    }

    writeln!(
        out,
        "total: {} lines of code, {} lines of comments in {} document(s)",
        report.total.lines_of_code, report.total.lines_of_comments, report.documents
    )?;
    Ok(report)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load_or_default(args.config.as_deref())?;
    log::debug!("config: {config:?}");
    let extractor = extractor_config(&config.extractor, args.no_lines);
    let facts_path = args.facts.or(config.output.facts_path);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let report = match &facts_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = JsonLinesWriter::new(BufWriter::new(file));
            let report = run(
                &args.paths,
                extractor,
                &mut writer,
                &mut stdout.lock(),
                &mut stderr.lock(),
            )?;
            log::info!("wrote {} facts to {}", writer.written(), path.display());
            writer.into_inner()?;
            report
        }
        None => run(
            &args.paths,
            extractor,
            &mut DiscardFacts::default(),
            &mut stdout.lock(),
            &mut stderr.lock(),
        )?,
    };

    if report.failed > 0 {
        process::exit(1);
    }
    Ok(())
}
