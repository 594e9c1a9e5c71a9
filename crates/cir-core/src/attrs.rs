//! Shared scalar attribute types that appear on both node payloads and edges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Member/type visibility, drawn from the four-way lattice every adapter
/// reduces host-language modifiers or naming conventions down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
    Package,
}

impl Visibility {
    /// The class-diagram sigil for this visibility (§4.4.a).
    pub fn sigil(&self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Package => '~',
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Package => "package",
        };
        write!(f, "{s}")
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Package
    }
}

/// Cardinality tag attached to fields and ASSOCIATES edges (§3, §4.2.d).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplicity {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "0..1")]
    ZeroOrOne,
    #[serde(rename = "1..*")]
    OneOrMore,
    #[serde(rename = "0..*")]
    ZeroOrMore,
}

impl Multiplicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Multiplicity::One => "1",
            Multiplicity::ZeroOrOne => "0..1",
            Multiplicity::OneOrMore => "1..*",
            Multiplicity::ZeroOrMore => "0..*",
        }
    }

    /// Whether this multiplicity should be suppressed in class-diagram
    /// rendering (§4.4.a: "multiplicities other than `1` or empty").
    pub fn is_default(&self) -> bool {
        matches!(self, Multiplicity::One)
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three kinds of TypeDecl a host-language declaration can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_sigils() {
        assert_eq!(Visibility::Public.sigil(), '+');
        assert_eq!(Visibility::Private.sigil(), '-');
        assert_eq!(Visibility::Protected.sigil(), '#');
        assert_eq!(Visibility::Package.sigil(), '~');
    }

    #[test]
    fn multiplicity_default_suppression() {
        assert!(Multiplicity::One.is_default());
        assert!(!Multiplicity::ZeroOrMore.is_default());
    }

    #[test]
    fn visibility_serde_roundtrip() {
        let v = Visibility::Protected;
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"protected\"");
    }
}
