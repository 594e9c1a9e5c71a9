//! `cir-cli` library surface (§6.2): pure plumbing over the parse and
//! diagram contracts. Grounded on
//! `examples/allenanswerzq-llmcc/crates/llmcc-cli/src/lib.rs`'s
//! discovery-then-pipeline wiring, generalized from one language to a
//! small registered set.

pub mod discovery;
pub mod options;

use std::fs;

use cir_core::ParseFileError;
use cir_dispatch::SourceFile;
use cir_error::{Error, Result};

pub use options::CirOptions;

/// Languages `cir-cli` knows how to discover files for, in registry order
/// (mirrors `cir_dispatch::registry`'s fixed adapter set).
const CANDIDATE_LANGUAGES: &[&str] = &["java", "python"];

fn extensions_for(language: &str) -> Option<&'static [&'static str]> {
    match language {
        "java" => Some(&["java"]),
        "python" => Some(&["py"]),
        _ => None,
    }
}

/// Everything `main` needs to report: the rendered diagram, bookkeeping
/// about the parse that produced it, and validation results.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub language: String,
    pub file_count: usize,
    pub parse_errors: Vec<ParseFileError>,
    pub plantuml: String,
    pub ok: bool,
    pub validation_errors: Vec<String>,
}

/// Resolve which language's file set to walk for (§6.2: explicit `--lang`
/// wins; otherwise try each registered language's extensions in turn and
/// use the first that turns up any files).
fn resolve_project_files(opts: &CirOptions) -> Result<(String, Vec<String>)> {
    if let Some(lang) = &opts.lang {
        let extensions = extensions_for(lang)
            .ok_or_else(|| Error::unsupported_language(lang.clone()).with_operation("cir::resolve_project_files"))?;
        let files = discovery::discover_files(&opts.dirs, &opts.files, extensions)?;
        return Ok((lang.clone(), files));
    }

    let mut last_err = None;
    for lang in CANDIDATE_LANGUAGES {
        let extensions = extensions_for(lang).expect("candidate language is registered");
        match discovery::discover_files(&opts.dirs, &opts.files, extensions) {
            Ok(files) => return Ok(((*lang).to_string(), files)),
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        Error::file_not_found("no input files found").with_operation("cir::resolve_project_files")
    }))
}

/// Read each discovered file, degrading unreadable ones to per-file parse
/// errors rather than aborting the whole run (§5: reads must not abort a
/// project parse).
fn read_sources(files: &[String]) -> (Vec<SourceFile>, Vec<ParseFileError>) {
    let mut sources = Vec::with_capacity(files.len());
    let mut errors = Vec::new();
    for path in files {
        match fs::read_to_string(path) {
            Ok(code) => sources.push(SourceFile::new(path.clone(), code)),
            Err(err) => errors.push(ParseFileError {
                file: path.clone(),
                error: err.to_string(),
            }),
        }
    }
    (sources, errors)
}

/// Run one parse-then-emit pass (§6.2). A single explicit file with no
/// directories is treated as single-file mode (`parse_single`, §4.5); a
/// lone file can't be read is a hard failure there, matching §7.1's "only
/// `parse_single` ... surfaces `Error` as a hard failure" for I/O. Anything
/// else (directories, or more than one explicit file) is project mode,
/// where an unreadable file degrades to a `parse_errors` entry instead.
pub fn run(opts: &CirOptions) -> Result<RunOutput> {
    let parse_result = if opts.dirs.is_empty() && opts.files.len() == 1 {
        let path = &opts.files[0];
        let code = fs::read_to_string(path).map_err(|err| Error::from(err).with_operation("cir::run"))?;
        cir_dispatch::parse_single(&code, Some(path.as_str()), opts.lang.as_deref())?
    } else {
        let (language, files) = resolve_project_files(opts)?;
        let (sources, mut io_errors) = read_sources(&files);
        let mut result = cir_dispatch::parse_project(&language, &sources)?;
        result.parse_errors.append(&mut io_errors);
        result
    };

    let diagram = cir_emit::render_diagram(&parse_result.graph, &opts.diagram)?;

    Ok(RunOutput {
        language: parse_result.language,
        file_count: parse_result.file_count,
        parse_errors: parse_result.parse_errors,
        plantuml: diagram.plantuml,
        ok: diagram.ok,
        validation_errors: diagram.validation_errors,
    })
}
