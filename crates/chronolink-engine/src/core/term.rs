use serde::{Deserialize, Serialize};

/// Identifier of a historical term as issued by the content database.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct TermId(pub u32);

/// A historical term as displayed at the top of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRef {
    pub id: TermId,
    pub name: String,
    /// Period the term belongs to (e.g. "Asuka"). Display only.
    #[serde(default)]
    pub era: String,
}

impl TermRef {
    #[must_use]
    pub fn new(id: impl Into<TermId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            era: String::new(),
        }
    }

    #[must_use]
    pub fn with_era(self, era: impl Into<String>) -> Self {
        Self {
            era: era.into(),
            ..self
        }
    }
}

/// A candidate answer for a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub term_id: TermId,
    pub label: String,
}

impl Choice {
    #[must_use]
    pub fn new(term_id: impl Into<TermId>, label: impl Into<String>) -> Self {
        Self {
            term_id: term_id.into(),
            label: label.into(),
        }
    }
}
