//! Node payload types for the CIR (§3 Node kinds and attributes).

use crate::attrs::{Multiplicity, TypeKind, Visibility};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

/// The kind tag stored alongside every node, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize, Deserialize)]
pub enum NodeKind {
    TypeDecl,
    Field,
    Method,
    Parameter,
}

/// A class, interface, or enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub id: String,
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub visibility: Visibility,
    pub package: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_final: bool,
}

/// A field/instance attribute belonging to a TypeDecl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    /// Logical element type, i.e. the inner type if this field is a container.
    pub type_name: String,
    /// Surface source text for the declared type.
    pub raw_type: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub multiplicity: Option<Multiplicity>,
}

/// A method or constructor belonging to a TypeDecl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub id: String,
    pub name: String,
    pub return_type: String,
    pub raw_return_type: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub is_constructor: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_final: bool,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub name: String,
    pub type_name: String,
    pub raw_type: String,
}

/// The payload carried by a CIR node, tagged by `NodeKind`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodePayload {
    TypeDecl(TypeDecl),
    Field(Field),
    Method(Method),
    Parameter(Parameter),
}

impl NodePayload {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::TypeDecl(_) => NodeKind::TypeDecl,
            NodePayload::Field(_) => NodeKind::Field,
            NodePayload::Method(_) => NodeKind::Method,
            NodePayload::Parameter(_) => NodeKind::Parameter,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            NodePayload::TypeDecl(t) => &t.id,
            NodePayload::Field(f) => &f.id,
            NodePayload::Method(m) => &m.id,
            NodePayload::Parameter(p) => &p.id,
        }
    }

    pub fn as_type_decl(&self) -> Option<&TypeDecl> {
        match self {
            NodePayload::TypeDecl(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            NodePayload::Field(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            NodePayload::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            NodePayload::Parameter(p) => Some(p),
            _ => None,
        }
    }

    /// Render the payload's fields as a JSON object, matching the original
    /// debug-JSON contract of dumping the payload's attribute dict verbatim.
    pub fn to_attrs_json(&self) -> serde_json::Map<String, serde_json::Value> {
        let value = match self {
            NodePayload::TypeDecl(t) => serde_json::to_value(t),
            NodePayload::Field(f) => serde_json::to_value(f),
            NodePayload::Method(m) => serde_json::to_value(m),
            NodePayload::Parameter(p) => serde_json::to_value(p),
        }
        .expect("node payloads are always JSON-serializable");
        match value {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        }
    }
}

impl From<TypeDecl> for NodePayload {
    fn from(t: TypeDecl) -> Self {
        NodePayload::TypeDecl(t)
    }
}

impl From<Field> for NodePayload {
    fn from(f: Field) -> Self {
        NodePayload::Field(f)
    }
}

impl From<Method> for NodePayload {
    fn from(m: Method) -> Self {
        NodePayload::Method(m)
    }
}

impl From<Parameter> for NodePayload {
    fn from(p: Parameter) -> Self {
        NodePayload::Parameter(p)
    }
}

/// Build the canonical TypeDecl id: `type:<fqn>`.
pub fn type_id(fqn: &str) -> String {
    format!("type:{fqn}")
}

/// Build the canonical Field id: `field:<type-fqn>:<field-name>`.
pub fn field_id(type_fqn: &str, field_name: &str) -> String {
    format!("field:{type_fqn}:{field_name}")
}

/// Build the canonical Method id: `method:<type-fqn>:<method-name>`.
pub fn method_id(type_fqn: &str, method_name: &str) -> String {
    format!("method:{type_fqn}:{method_name}")
}

/// Build the canonical constructor id: `ctor:<type-fqn>:<method-name>`.
pub fn ctor_id(type_fqn: &str, method_name: &str) -> String {
    format!("ctor:{type_fqn}:{method_name}")
}

/// Build the canonical Parameter id: `param:<type-fqn>:<method-name>:<param-name>`.
pub fn param_id(type_fqn: &str, method_name: &str, param_name: &str) -> String {
    format!("param:{type_fqn}:{method_name}:{param_name}")
}

/// Compute the fully-qualified name for a type given its package (§3 Identity conventions).
pub fn fqn(package: Option<&str>, short_name: &str) -> String {
    match package {
        Some(pkg) if !pkg.is_empty() => format!("{pkg}.{short_name}"),
        _ => short_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fqn_with_and_without_package() {
        assert_eq!(fqn(Some("com.acme"), "Order"), "com.acme.Order");
        assert_eq!(fqn(None, "Order"), "Order");
        assert_eq!(fqn(Some(""), "Order"), "Order");
    }

    #[test]
    fn id_conventions() {
        assert_eq!(type_id("com.acme.Order"), "type:com.acme.Order");
        assert_eq!(field_id("com.acme.Order", "items"), "field:com.acme.Order:items");
        assert_eq!(method_id("com.acme.Order", "run"), "method:com.acme.Order:run");
        assert_eq!(ctor_id("com.acme.Order", "Order"), "ctor:com.acme.Order:Order");
        assert_eq!(
            param_id("com.acme.Order", "run", "x"),
            "param:com.acme.Order:run:x"
        );
    }

    #[test]
    fn payload_attrs_json_includes_id() {
        let payload = NodePayload::TypeDecl(TypeDecl {
            id: "type:Order".into(),
            name: "Order".into(),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            package: None,
            modifiers: vec![],
            is_abstract: false,
            is_final: false,
        });
        let attrs = payload.to_attrs_json();
        assert_eq!(attrs.get("id").unwrap(), "type:Order");
        assert_eq!(attrs.get("name").unwrap(), "Order");
    }
}
