//! # cir-emit
//!
//! C4: renders a `CirGraph` into PlantUML text across four diagram shapes
//! (§4.4), and validates PlantUML output against the size/directive bounds
//! external callers must enforce. Builder pattern adapted from
//! `llmcc-dot::DotBuilder`; display simplification and validation grounded
//! on `uml_rules.py`/`uml_validate.py`.

mod builder;
mod class_diagram;
mod component_diagram;
mod display;
mod model;
mod package_diagram;
mod sequence_diagram;
mod validate;

use cir_core::CirGraph;
use cir_error::Error;

pub use class_diagram::generate_class_diagram;
pub use component_diagram::generate_component_diagram;
pub use package_diagram::generate_package_diagram;
pub use sequence_diagram::generate_sequence_diagram;
pub use validate::validate_plantuml;

/// The four diagram shapes a CIR can be rendered into (§4.4, §6 diagram contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Class,
    Package,
    Sequence,
    Component,
}

impl DiagramKind {
    pub fn parse(tag: &str) -> cir_error::Result<Self> {
        match tag {
            "class" => Ok(DiagramKind::Class),
            "package" => Ok(DiagramKind::Package),
            "sequence" => Ok(DiagramKind::Sequence),
            "component" => Ok(DiagramKind::Component),
            other => Err(Error::unsupported_diagram_type(other)),
        }
    }
}

/// The diagram contract's response shape (§6): `{ok, plantuml, validation_errors}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramOutput {
    pub ok: bool,
    pub plantuml: String,
    pub validation_errors: Vec<String>,
}

/// Render `graph` as the requested diagram type and validate the result.
/// The only failure mode here is an unrecognized `diagram_type` tag;
/// validation failures are reported in the output, not as an `Err`.
pub fn render_diagram(graph: &CirGraph, diagram_type: &str) -> cir_error::Result<DiagramOutput> {
    let kind = DiagramKind::parse(diagram_type)?;
    let plantuml = match kind {
        DiagramKind::Class => generate_class_diagram(graph),
        DiagramKind::Package => generate_package_diagram(graph),
        DiagramKind::Sequence => generate_sequence_diagram(graph),
        DiagramKind::Component => generate_component_diagram(graph),
    };
    let (ok, validation_errors) = validate_plantuml(&plantuml);
    Ok(DiagramOutput { ok, plantuml, validation_errors })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_diagram_type_fails_fast() {
        let graph = CirGraph::new();
        let err = render_diagram(&graph, "flowchart").unwrap_err();
        assert_eq!(err.kind(), cir_error::ErrorKind::UnsupportedDiagramType);
    }

    #[test]
    fn empty_graph_still_produces_valid_plantuml_for_every_kind() {
        let graph = CirGraph::new();
        for kind in ["class", "package", "sequence", "component"] {
            let out = render_diagram(&graph, kind).expect("known diagram type");
            assert!(out.ok, "{kind} diagram failed validation: {:?}", out.validation_errors);
            assert!(out.plantuml.starts_with("@startuml\n"));
            assert!(out.plantuml.ends_with("@enduml\n"));
        }
    }
}
