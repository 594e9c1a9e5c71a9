//! # cir-java
//!
//! The Java `LanguageAdapter` (§4.2.a/b/d/e): walks a `tree-sitter-java`
//! parse tree into `Unit` records, deriving visibility and the `abstract`/
//! `final` flags from modifier keywords, resolving field/parameter/return
//! type annotations through the shared §4.2.d table, and extracting ordered
//! call sites per method body.

mod calls;
mod modifiers;
mod types;

use cir_core::TypeKind;
use cir_error::Error;
use cir_lang::{LanguageAdapter, Unit};
use tree_sitter::{Node, Parser};

pub struct JavaAdapter;

impl Default for JavaAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageAdapter for JavaAdapter {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn parse_file(&self, source: &str, path: &str) -> cir_error::Result<Vec<Unit>> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| {
                Error::unexpected(format!("failed to load java grammar: {e}"))
                    .with_operation("cir_java::parse_file")
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            Error::syntax_error("tree-sitter produced no parse tree")
                .with_operation("cir_java::parse_file")
                .with_context("file", path.to_string())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(Error::syntax_error(format!("syntax error while parsing {path}"))
                .with_operation("cir_java::parse_file")
                .with_context("file", path.to_string()));
        }

        let src = source.as_bytes();
        let package = find_package(root, src);

        let mut units = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            let kind = match child.kind() {
                "class_declaration" => Some(TypeKind::Class),
                "interface_declaration" => Some(TypeKind::Interface),
                "enum_declaration" => Some(TypeKind::Enum),
                _ => None,
            };
            let Some(kind) = kind else { continue };
            if let Some(unit) = types::process_type_decl(child, src, package.as_deref(), path, kind) {
                units.push(unit);
            }
        }

        Ok(units)
    }
}

fn find_package(root: Node, src: &[u8]) -> Option<String> {
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if child.kind() != "package_declaration" {
            continue;
        }
        let count = child.named_child_count();
        for i in 0..count {
            if let Some(name_node) = child.named_child(i) {
                if matches!(name_node.kind(), "scoped_identifier" | "identifier") {
                    return name_node.utf8_text(src).ok().map(str::to_string);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use cir_core::Visibility;

    #[test]
    fn parses_package_and_top_level_class() {
        let adapter = JavaAdapter::new();
        let src = "package com.acme;\n\npublic class Order {\n  private int total;\n}";
        let units = adapter.parse_file(src, "Order.java").expect("parse");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].package.as_deref(), Some("com.acme"));
        assert_eq!(units[0].full_name, "com.acme.Order");
        assert_eq!(units[0].type_decl.visibility, Visibility::Public);
    }

    #[test]
    fn skips_nested_types() {
        let adapter = JavaAdapter::new();
        let src = "class Outer {\n  class Inner {}\n}";
        let units = adapter.parse_file(src, "Outer.java").expect("parse");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].short_name, "Outer");
    }

    #[test]
    fn reports_syntax_error_as_terminal_failure() {
        let adapter = JavaAdapter::new();
        let src = "class {{{ not java";
        let result = adapter.parse_file(src, "Broken.java");
        assert!(result.is_err());
    }
}
