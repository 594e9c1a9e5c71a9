//! The `LanguageAdapter` trait shared by every per-language adapter crate
//! (§4.2, §9 "Polymorphism": variants are selected by language tag, not by
//! inheritance).

use crate::unit::Unit;
use cir_core::{CirGraph, Edge, EdgeLabel, ParseFileError};

/// One file to be parsed, as handed to a project-mode parse.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub path: String,
    pub code: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code: code.into(),
        }
    }
}

/// Common interface every host-language adapter implements. Adapters are
/// selected by a language tag at the dispatch façade (`cir-dispatch`), never
/// through a type hierarchy.
pub trait LanguageAdapter: Send + Sync {
    /// The language tag this adapter registers under (e.g. `"java"`).
    fn language(&self) -> &'static str;

    /// File extensions this adapter's language is recognized by (§4.5).
    fn file_extensions(&self) -> &'static [&'static str];

    /// Parse one file's source into its per-type Units. A syntax error is a
    /// terminal failure for this single call; project-mode tolerance is
    /// implemented by the `parse_project` default below.
    fn parse_file(&self, source: &str, path: &str) -> cir_error::Result<Vec<Unit>>;

    /// Parse every file in a project, tolerating a syntax failure on any one
    /// file by recording it and continuing with the rest (§4.2). Returns the
    /// intra-file-populated graph, the accumulated Units (for the resolver
    /// to turn into cross-file edges), and the per-file error list.
    fn parse_project(&self, files: &[SourceFile]) -> (CirGraph, Vec<Unit>, Vec<ParseFileError>) {
        let mut graph = CirGraph::new();
        let mut units = Vec::new();
        let mut errors = Vec::new();

        for file in files {
            match self.parse_file(&file.code, &file.path) {
                Ok(file_units) => {
                    for unit in &file_units {
                        populate_unit(&mut graph, unit);
                    }
                    units.extend(file_units);
                }
                Err(err) => errors.push(ParseFileError {
                    file: file.path.clone(),
                    error: err.message().to_string(),
                }),
            }
        }

        (graph, units, errors)
    }
}

/// Populate the purely intra-file structure a Unit implies: the TypeDecl
/// node, its fields with HAS_FIELD edges, and its methods with HAS_METHOD
/// edges and per-parameter PARAM_OF edges. Cross-file relationships
/// (extends/implements/associates/depends_on/calls) are the resolver's job.
pub fn populate_unit(graph: &mut CirGraph, unit: &Unit) {
    graph.add_node(unit.type_decl.clone());

    for field in &unit.fields {
        graph.add_node(field.clone());
        graph.add_edge(Edge::new(
            unit.type_decl.id.clone(),
            field.id.clone(),
            EdgeLabel::HasField,
        ));
    }

    for unit_method in &unit.methods {
        graph.add_node(unit_method.method.clone());
        graph.add_edge(Edge::new(
            unit.type_decl.id.clone(),
            unit_method.method.id.clone(),
            EdgeLabel::HasMethod,
        ));

        for param in &unit_method.parameters {
            graph.add_node(param.clone());
            graph.add_edge(Edge::new(
                param.id.clone(),
                unit_method.method.id.clone(),
                EdgeLabel::ParamOf,
            ));
        }
    }
}
