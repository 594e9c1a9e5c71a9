//! Edge labels and edge records for the CIR (§3 Edge labels and attributes).

use crate::attrs::Multiplicity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of labelled relationships a CIR edge can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeLabel {
    HasField,
    HasMethod,
    ParamOf,
    Inherits,
    Implements,
    Associates,
    DependsOn,
    Calls,
}

impl EdgeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeLabel::HasField => "HAS_FIELD",
            EdgeLabel::HasMethod => "HAS_METHOD",
            EdgeLabel::ParamOf => "PARAM_OF",
            EdgeLabel::Inherits => "INHERITS",
            EdgeLabel::Implements => "IMPLEMENTS",
            EdgeLabel::Associates => "ASSOCIATES",
            EdgeLabel::DependsOn => "DEPENDS_ON",
            EdgeLabel::Calls => "CALLS",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Edge attribute bag. Only ASSOCIATES (`multiplicity`) and CALLS (`order`)
/// carry attributes today; everything else is attribute-free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<Multiplicity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl EdgeAttrs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_multiplicity(multiplicity: Multiplicity) -> Self {
        Self {
            multiplicity: Some(multiplicity),
            order: None,
        }
    }

    pub fn with_order(order: u32) -> Self {
        Self {
            multiplicity: None,
            order: Some(order),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.multiplicity.is_none() && self.order.is_none()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Object(Default::default()))
    }
}

/// One directed, labelled edge between two node ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub src: String,
    pub dst: String,
    pub label: EdgeLabel,
    pub attrs: EdgeAttrs,
}

impl Edge {
    pub fn new(src: impl Into<String>, dst: impl Into<String>, label: EdgeLabel) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            label,
            attrs: EdgeAttrs::none(),
        }
    }

    pub fn with_attrs(mut self, attrs: EdgeAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}
