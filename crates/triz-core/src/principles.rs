//! Inventive principle catalog.
//!
//! Built-ins occupy ids 1..=40 in official order. Custom principles take
//! `max(existing ids) + 1`, so they never collide with a built-in or with
//! each other. Name identity is case-insensitive across both pools.

use crate::constants::{BuiltinPrinciple, BUILTIN_PRINCIPLES, PLACEHOLDER_EXAMPLE};
use crate::{same_name, CatalogError, InventivePrinciple, PrincipleId};
use serde::{Deserialize, Serialize};

/// User input for a new principle. Fields are normalized by
/// [`PrincipleCatalog::add`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrincipleDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl PrincipleDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            examples: Vec::new(),
        }
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone)]
pub struct PrincipleCatalog {
    builtin: Vec<InventivePrinciple>,
    custom: Vec<InventivePrinciple>,
}

impl Default for PrincipleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn materialize(p: &BuiltinPrinciple) -> InventivePrinciple {
    InventivePrinciple {
        id: p.id,
        name: p.name.to_string(),
        description: p.description.to_string(),
        examples: p.examples.iter().map(|e| e.to_string()).collect(),
    }
}

impl PrincipleCatalog {
    pub fn new() -> Self {
        Self {
            builtin: BUILTIN_PRINCIPLES.iter().map(materialize).collect(),
            custom: Vec::new(),
        }
    }

    fn all(&self) -> impl Iterator<Item = &InventivePrinciple> {
        self.builtin.iter().chain(self.custom.iter())
    }

    /// Built-in names in official order, then custom names.
    pub fn list_names(&self) -> Vec<String> {
        self.all().map(|p| p.name.clone()).collect()
    }

    pub fn list(&self) -> Vec<InventivePrinciple> {
        self.all().cloned().collect()
    }

    /// Case-insensitive lookup; built-ins shadow customs.
    pub fn get_by_name(&self, name: &str) -> Option<&InventivePrinciple> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.all().find(|p| same_name(&p.name, name))
    }

    pub fn get_by_id(&self, id: PrincipleId) -> Option<&InventivePrinciple> {
        self.all().find(|p| p.id == id)
    }

    pub fn id_of(&self, name: &str) -> Option<PrincipleId> {
        self.get_by_name(name).map(|p| p.id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_by_name(name).is_some()
    }

    /// Next free id: one past the largest id in either pool.
    fn next_id(&self) -> Result<PrincipleId, CatalogError> {
        let max = self.all().map(|p| p.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(CatalogError::IdOverflow)
    }

    /// Add a custom principle.
    ///
    /// When a principle with the same name (ignoring case) already exists,
    /// nothing is stored and the existing principle is returned.
    pub fn add(&mut self, draft: PrincipleDraft) -> Result<InventivePrinciple, CatalogError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CatalogError::BlankName);
        }

        if let Some(existing) = self.get_by_name(name) {
            tracing::debug!(
                principle = name,
                existing_id = existing.id,
                "principle already in catalog"
            );
            return Ok(existing.clone());
        }

        let mut examples: Vec<String> = draft
            .examples
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect();
        if examples.is_empty() {
            examples.push(PLACEHOLDER_EXAMPLE.to_string());
        }

        let principle = InventivePrinciple {
            id: self.next_id()?,
            name: name.to_string(),
            description: draft.description.trim().to_string(),
            examples,
        };
        tracing::debug!(principle = %principle.name, id = principle.id, "added custom principle");
        self.custom.push(principle.clone());
        Ok(principle)
    }

    pub fn custom(&self) -> &[InventivePrinciple] {
        &self.custom
    }

    pub fn builtin(&self) -> &[InventivePrinciple] {
        &self.builtin
    }

    pub fn reset(&mut self) {
        self.custom.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_numbered_one_to_forty() {
        let catalog = PrincipleCatalog::new();
        let ids: Vec<PrincipleId> = catalog.builtin().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=40).collect::<Vec<_>>());
        assert_eq!(catalog.list_names()[0], "Segmentation");
    }

    #[test]
    fn name_lookup_ignores_case() {
        let catalog = PrincipleCatalog::new();
        let p = catalog.get_by_name("taking OUT").unwrap();
        assert_eq!(p.id, 2);
        assert_eq!(catalog.id_of("Composite materials"), Some(40));
        assert!(catalog.get_by_name("").is_none());
    }

    #[test]
    fn add_normalizes_fields() {
        let mut catalog = PrincipleCatalog::new();
        let p = catalog
            .add(
                PrincipleDraft::new("  Self-assembly ", " Let parts organize themselves ")
                    .with_examples(["  DNA origami ", "", "   "]),
            )
            .unwrap();
        assert_eq!(p.id, 41);
        assert_eq!(p.name, "Self-assembly");
        assert_eq!(p.description, "Let parts organize themselves");
        assert_eq!(p.examples, vec!["DNA origami".to_string()]);
    }

    #[test]
    fn blank_examples_get_placeholder() {
        let mut catalog = PrincipleCatalog::new();
        let p = catalog
            .add(PrincipleDraft::new("Swarming", "").with_examples(["", " "]))
            .unwrap();
        assert_eq!(p.examples, vec![PLACEHOLDER_EXAMPLE.to_string()]);
    }

    #[test]
    fn duplicate_add_returns_stored_principle() {
        let mut catalog = PrincipleCatalog::new();
        let first = catalog.add(PrincipleDraft::new("Swarming", "first")).unwrap();
        let again = catalog.add(PrincipleDraft::new("SWARMING", "second")).unwrap();
        assert_eq!(again, first);
        assert_eq!(catalog.custom().len(), 1);

        let builtin = catalog.add(PrincipleDraft::new("segmentation", "dup")).unwrap();
        assert_eq!(builtin.id, 1);
        assert_eq!(builtin.description, "Divide an object into independent parts");
        assert_eq!(catalog.custom().len(), 1);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut catalog = PrincipleCatalog::new();
        assert_eq!(
            catalog.add(PrincipleDraft::new("  ", "x")),
            Err(CatalogError::BlankName)
        );
        assert!(catalog.custom().is_empty());
    }

    #[test]
    fn reset_restores_builtins_only() {
        let mut catalog = PrincipleCatalog::new();
        catalog.add(PrincipleDraft::new("Swarming", "")).unwrap();
        catalog.reset();
        assert_eq!(catalog.list_names().len(), 40);
        let p = catalog.add(PrincipleDraft::new("Swarming", "")).unwrap();
        assert_eq!(p.id, 41);
    }
}
