//! # cir-python
//!
//! The Python `LanguageAdapter` (§4.2.b/c/d/e): walks a `tree-sitter-python`
//! parse tree into `Unit` records, deriving visibility from the leading-
//! underscore naming convention, synthesizing fields from `__init__`
//! self-assignments, applying the ABC interface heuristic, and extracting
//! ordered call sites per method body. Grounded directly on
//! `python_adapter.py`.

mod calls;
mod fields;
mod modifiers;
mod types;

use cir_error::Error;
use cir_lang::{LanguageAdapter, Unit};
use tree_sitter::Parser;

pub struct PythonAdapter;

impl Default for PythonAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageAdapter for PythonAdapter {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn parse_file(&self, source: &str, path: &str) -> cir_error::Result<Vec<Unit>> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| {
                Error::unexpected(format!("failed to load python grammar: {e}"))
                    .with_operation("cir_python::parse_file")
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            Error::syntax_error("tree-sitter produced no parse tree")
                .with_operation("cir_python::parse_file")
                .with_context("file", path.to_string())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(Error::syntax_error(format!("syntax error while parsing {path}"))
                .with_operation("cir_python::parse_file")
                .with_context("file", path.to_string()));
        }

        let src = source.as_bytes();
        let package = module_name_from_path(path);

        let mut units = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            let class_node = match child.kind() {
                "class_definition" => Some(child),
                "decorated_definition" => child
                    .child_by_field_name("definition")
                    .filter(|n| n.kind() == "class_definition"),
                _ => None,
            };
            let Some(class_node) = class_node else { continue };
            if let Some(unit) = types::process_class(class_node, src, package.as_deref(), path) {
                units.push(unit);
            }
        }

        Ok(units)
    }
}

/// Derive a dotted module name from a file path (`shop/order.py` -> `shop.order`),
/// matching `python_adapter.py`'s `_process_module`.
fn module_name_from_path(path: &str) -> Option<String> {
    let normalized = path.replace('\\', "/");
    let trimmed = normalized.strip_suffix(".py").unwrap_or(&normalized);
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace('/', "."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_module_name_from_path() {
        assert_eq!(module_name_from_path("shop/order.py").as_deref(), Some("shop.order"));
        assert_eq!(module_name_from_path("order.py").as_deref(), Some("order"));
    }

    #[test]
    fn parses_top_level_class_with_module_package() {
        let adapter = PythonAdapter::new();
        let src = "class Order:\n    def __init__(self):\n        self.total = 0\n";
        let units = adapter.parse_file(src, "shop/order.py").expect("parse");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].package.as_deref(), Some("shop.order"));
        assert_eq!(units[0].full_name, "shop.order.Order");
    }

    #[test]
    fn skips_nested_classes() {
        let adapter = PythonAdapter::new();
        let src = "class Outer:\n    class Inner:\n        pass\n";
        let units = adapter.parse_file(src, "m.py").expect("parse");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].short_name, "Outer");
    }

    #[test]
    fn reports_syntax_error_as_terminal_failure() {
        let adapter = PythonAdapter::new();
        let src = "def f(:\n    pass +++ ===";
        let result = adapter.parse_file(src, "broken.py");
        assert!(result.is_err());
    }
}
