//! The resource kinds exposed by the Ardoq API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three element collections under `/api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagedElement {
    Workspace,
    Component,
    Reference,
}

impl ManagedElement {
    pub const ALL: [ManagedElement; 3] = [
        ManagedElement::Workspace,
        ManagedElement::Component,
        ManagedElement::Reference,
    ];

    /// The endpoint segment for this kind's collection.
    pub fn as_str(self) -> &'static str {
        match self {
            ManagedElement::Workspace => "workspace",
            ManagedElement::Component => "component",
            ManagedElement::Reference => "reference",
        }
    }
}

impl fmt::Display for ManagedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element kind: {0:?}")]
pub struct ParseElementError(pub String);

impl FromStr for ManagedElement {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ManagedElement::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

/// A single element instance, addressed as `kind/id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub kind: ManagedElement,
    pub id: String,
}

impl ElementRef {
    pub fn new(kind: ManagedElement, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.kind, self.id)
    }
}

/// Query for "elements whose `field` equals `value`".
///
/// Sent as the literal pair `field=<field>&value=<value>`; the server does the
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldQuery {
    pub field: String,
    pub value: String,
}

impl FieldQuery {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub(crate) fn as_params(&self) -> [(&str, &str); 2] {
        [("field", self.field.as_str()), ("value", self.value.as_str())]
    }
}
