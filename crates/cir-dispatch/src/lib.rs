//! # cir-dispatch
//!
//! C5: the parse façade (§4.5). Selects a language (explicit argument,
//! then file extension, then heuristic detection), routes to the
//! registered adapter, and assembles the parse contract's output
//! (§6 "Parse contract"). Grounded on
//! `original_source/backend/parse-core/{detect,registry,main}.py` for the
//! detection/dispatch shape, and
//! `examples/allenanswerzq-llmcc/crates/llmcc-cli/src/pipeline.rs` for the
//! phase-timed, `tracing`-logged pipeline idiom.

mod detect;
mod registry;

use cir_core::CirGraph;
use cir_error::Error;

pub use cir_lang::SourceFile;
pub use detect::{detect_language, Detection};
pub use registry::adapter_for;

/// The parse contract's output (§6): a CIR plus bookkeeping about how many
/// files went into it and which (if any) failed along the way.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub language: String,
    pub file_count: usize,
    pub graph: CirGraph,
    pub parse_errors: Vec<cir_core::ParseFileError>,
}

impl ParseResult {
    /// Render the CIR debug-JSON shape (§6 "CIR debug JSON"), with
    /// `language`/`file_count` merged in alongside `nodes`/`edges`/
    /// `parse_errors`.
    pub fn to_debug_json(&self) -> serde_json::Value {
        let mut json = self.graph.to_debug_json();
        json["language"] = serde_json::Value::String(self.language.clone());
        json["file_count"] = serde_json::Value::from(self.file_count);
        json
    }
}

/// Resolve which language to parse as: explicit argument first, then
/// extension/heuristic detection over `code`/`filename` (§4.5).
fn resolve_language(code: &str, filename: Option<&str>, language: Option<&str>) -> cir_error::Result<String> {
    if let Some(lang) = language {
        return Ok(lang.to_string());
    }

    let detection = detect_language(code, filename);
    if detection.source == "none" {
        return Err(Error::unsupported_language("unknown").with_operation("cir_dispatch::parse_single"));
    }
    Ok(detection.language)
}

/// Parse one source into a CIR (§4.5 `parse_single`). A syntax error in
/// `code` is a terminal failure in this single-file mode, unlike project
/// mode's per-file tolerance.
pub fn parse_single(code: &str, filename: Option<&str>, language: Option<&str>) -> cir_error::Result<ParseResult> {
    let lang = resolve_language(code, filename, language)?;
    let adapter = adapter_for(&lang)
        .ok_or_else(|| Error::unsupported_language(lang.clone()).with_operation("cir_dispatch::parse_single"))?;

    let path = filename.unwrap_or("<input>").to_string();
    let units = adapter.parse_file(code, &path)?;

    let mut graph = CirGraph::new();
    for unit in &units {
        cir_lang::populate_unit(&mut graph, unit);
    }
    cir_resolver::resolve(&mut graph, &units);

    tracing::debug!(language = %lang, type_count = units.len(), "parsed single file");

    Ok(ParseResult {
        language: lang,
        file_count: 1,
        graph,
        parse_errors: Vec::new(),
    })
}

/// Parse an entire project's files as one CIR (§4.5 `parse_project`).
/// Tolerates any one file's syntax failure, recording it in
/// `ParseResult::parse_errors` and continuing with the rest.
pub fn parse_project(language: &str, files: &[SourceFile]) -> cir_error::Result<ParseResult> {
    let adapter = adapter_for(language)
        .ok_or_else(|| Error::unsupported_language(language.to_string()).with_operation("cir_dispatch::parse_project"))?;

    let (mut graph, units, parse_errors) = adapter.parse_project(files);
    cir_resolver::resolve(&mut graph, &units);

    for err in &parse_errors {
        graph.push_parse_error(err.file.clone(), err.error.clone());
    }

    tracing::debug!(
        language = %language,
        file_count = files.len(),
        error_count = parse_errors.len(),
        "parsed project"
    );

    Ok(ParseResult {
        language: language.to_string(),
        file_count: files.len(),
        graph,
        parse_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_unsupported_language_fails_fast() {
        let err = parse_single("whatever", None, Some("cobol")).unwrap_err();
        assert_eq!(err.kind(), cir_error::ErrorKind::UnsupportedLanguage);
    }

    #[test]
    fn parse_single_detects_java_by_extension_and_resolves_fields() {
        let code = "package shop;\nclass Order {\n    int total;\n}\n";
        let result = parse_single(code, Some("Order.java"), None).expect("parse");
        assert_eq!(result.language, "java");
        assert_eq!(result.file_count, 1);
        assert!(result.graph.nodes().any(|n| n.as_type_decl().map(|t| t.name == "Order").unwrap_or(false)));
    }

    #[test]
    fn parse_project_degrades_to_per_file_errors() {
        let files = vec![
            SourceFile::new("Good.java", "class Good {}\n"),
            SourceFile::new("Bad.java", "class Bad { +++ "),
        ];
        let result = parse_project("java", &files).expect("project parse tolerates bad file");
        assert_eq!(result.file_count, 2);
        assert_eq!(result.parse_errors.len(), 1);
        assert_eq!(result.parse_errors[0].file, "Bad.java");
        assert!(result.graph.nodes().any(|n| n.as_type_decl().map(|t| t.name == "Good").unwrap_or(false)));
    }

    #[test]
    fn parse_project_unregistered_language_fails_fast() {
        let files = vec![SourceFile::new("a.ts", "class A {}")];
        let err = parse_project("typescript", &files).unwrap_err();
        assert_eq!(err.kind(), cir_error::ErrorKind::UnsupportedLanguage);
    }

    #[test]
    fn debug_json_carries_language_and_file_count() {
        let code = "class Order {}\n";
        let result = parse_single(code, Some("Order.java"), None).expect("parse");
        let json = result.to_debug_json();
        assert_eq!(json["language"], "java");
        assert_eq!(json["file_count"], 1);
    }
}
