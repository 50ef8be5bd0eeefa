//! TRIZ contradiction resolution core
//!
//! Maps an (improving parameter, worsening parameter) pair to a ranked list of
//! inventive principles:
//!
//! ```text
//! ┌───────────────────┐   ┌───────────────────┐
//! │ ParameterRegistry │   │ PrincipleCatalog  │
//! │  39 + custom      │   │  40 + custom      │
//! └─────────┬─────────┘   └─────────┬─────────┘
//!           │ names                 │ id -> name
//!           ▼                       ▼
//! ┌───────────────────┐   ┌───────────────────┐
//! │ContradictionMatrix│──►│    TrizEngine     │──► Vec<principle name>
//! │ (name, name)->ids │   │ suggest_principles│
//! └───────────────────┘   └───────────────────┘
//! ```
//!
//! All state is owned by a [`TrizEngine`] value. Custom parameters and
//! principles live for as long as the engine does; [`TrizEngine::reset`]
//! drops them.

pub mod common;
pub mod constants;
pub mod engine;
pub mod matrix;
pub mod parameters;
pub mod principles;

pub use common::{common_contradictions, find_common};
pub use engine::{default_principles, TrizEngine};
pub use matrix::ContradictionMatrix;
pub use parameters::ParameterRegistry;
pub use principles::{PrincipleCatalog, PrincipleDraft};

use serde::{Deserialize, Serialize};

/// Identifier of an inventive principle (built-ins use 1..=40).
pub type PrincipleId = u32;

/// An inventive principle, built-in or user-defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventivePrinciple {
    pub id: PrincipleId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// An ordered (improving, worsening) parameter pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Contradiction {
    pub improving_parameter: String,
    pub worsening_parameter: String,
}

impl Contradiction {
    pub fn new(improving: impl Into<String>, worsening: impl Into<String>) -> Self {
        Self {
            improving_parameter: improving.into(),
            worsening_parameter: worsening.into(),
        }
    }
}

impl std::fmt::Display for Contradiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.improving_parameter, self.worsening_parameter)
    }
}

/// A contradiction together with the principle names proposed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContradictionEntry {
    pub contradiction: Contradiction,
    #[serde(default)]
    pub suggested_principles: Vec<String>,
}

impl ContradictionEntry {
    pub fn new(contradiction: Contradiction, suggested_principles: Vec<String>) -> Self {
        Self {
            contradiction,
            suggested_principles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("principle name must not be blank")]
    BlankName,
    #[error("principle id space exhausted")]
    IdOverflow,
}

/// Case-insensitive name identity used by the registry and the catalog.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
