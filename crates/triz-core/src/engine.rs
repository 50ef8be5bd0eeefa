//! Resolution engine: (improving, worsening) -> principle names.

use crate::constants::{DEFAULT_PRINCIPLES, UNKNOWN_PRINCIPLE};
use crate::{
    CatalogError, ContradictionMatrix, InventivePrinciple, ParameterRegistry, PrincipleCatalog,
    PrincipleDraft,
};

/// Owns the parameter registry, the principle catalog and the matrix.
///
/// Construct one per application instance and pass it to whatever needs
/// suggestions; [`TrizEngine::reset`] returns it to the built-in state.
#[derive(Debug, Clone)]
pub struct TrizEngine {
    parameters: ParameterRegistry,
    principles: PrincipleCatalog,
    matrix: ContradictionMatrix,
}

impl Default for TrizEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh copy of the fallback suggestion list.
pub fn default_principles() -> Vec<String> {
    DEFAULT_PRINCIPLES.iter().map(|p| p.to_string()).collect()
}

impl TrizEngine {
    pub fn new() -> Self {
        Self::with_matrix(ContradictionMatrix::builtin())
    }

    pub fn with_matrix(matrix: ContradictionMatrix) -> Self {
        Self {
            parameters: ParameterRegistry::new(),
            principles: PrincipleCatalog::new(),
            matrix,
        }
    }

    /// Suggested principle names for a contradiction.
    ///
    /// Falls back to the default list when either side is blank or the pair
    /// has no matrix cell. Otherwise ids are translated in matrix order and
    /// any id without a usable catalog name is dropped.
    pub fn suggest_principles(&self, improving: &str, worsening: &str) -> Vec<String> {
        let improving = improving.trim();
        let worsening = worsening.trim();
        if improving.is_empty() || worsening.is_empty() {
            return default_principles();
        }

        let ids = self.matrix.resolve(improving, worsening);
        if ids.is_empty() {
            tracing::debug!(improving, worsening, "no matrix cell, using defaults");
            return default_principles();
        }

        ids.into_iter()
            .filter_map(|id| match self.principles.get_by_id(id) {
                Some(p) if p.name != UNKNOWN_PRINCIPLE => Some(p.name.clone()),
                _ => {
                    tracing::warn!(id, improving, worsening, "matrix id has no principle");
                    None
                }
            })
            .collect()
    }

    pub fn default_principles(&self) -> Vec<String> {
        default_principles()
    }

    pub fn is_in_matrix(&self, improving: &str, worsening: &str) -> bool {
        self.matrix.is_known(improving.trim(), worsening.trim())
    }

    pub fn add_parameter(&mut self, name: &str) -> Vec<String> {
        self.parameters.add(name)
    }

    pub fn add_principle(&mut self, draft: PrincipleDraft) -> Result<InventivePrinciple, CatalogError> {
        self.principles.add(draft)
    }

    pub fn parameters(&self) -> &ParameterRegistry {
        &self.parameters
    }

    pub fn principles(&self) -> &PrincipleCatalog {
        &self.principles
    }

    pub fn matrix(&self) -> &ContradictionMatrix {
        &self.matrix
    }

    /// Swap in a matrix loaded from elsewhere (e.g. the remote API).
    pub fn replace_matrix(&mut self, matrix: ContradictionMatrix) {
        tracing::info!(cells = matrix.len(), "replacing contradiction matrix");
        self.matrix = matrix;
    }

    /// Drop all custom parameters and principles.
    pub fn reset(&mut self) {
        self.parameters.reset();
        self.principles.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_pair_falls_back_to_defaults() {
        let engine = TrizEngine::new();
        assert_eq!(
            engine.suggest_principles("Nonexistent A", "Nonexistent B"),
            vec!["Segmentation", "Taking out", "Local quality"]
        );
    }

    #[test]
    fn blank_side_falls_back_to_defaults() {
        let engine = TrizEngine::new();
        assert_eq!(engine.suggest_principles("", "Speed"), default_principles());
        assert_eq!(engine.suggest_principles("Speed", "  "), default_principles());
    }

    #[test]
    fn fallback_is_an_independent_copy() {
        let engine = TrizEngine::new();
        let mut first = engine.suggest_principles("x", "y");
        first.push("Mutated".to_string());
        first[0] = "Changed".to_string();
        assert_eq!(engine.suggest_principles("x", "y"), default_principles());
    }

    #[test]
    fn matrix_ids_translate_in_order() {
        let engine = TrizEngine::new();
        assert_eq!(
            engine.suggest_principles("Weight of moving object", "Speed"),
            vec![
                "Taking out",
                "Mechanics substitution",
                "The other way round",
                "Strong oxidants"
            ]
        );
    }

    #[test]
    fn unresolvable_ids_are_dropped() {
        let matrix = ContradictionMatrix::from_entries(vec![("A", "B", vec![99, 1, 120, 3])]);
        let engine = TrizEngine::with_matrix(matrix);
        assert_eq!(engine.suggest_principles("A", "B"), vec!["Segmentation", "Local quality"]);
    }

    #[test]
    fn custom_principles_can_fill_matrix_ids() {
        let matrix = ContradictionMatrix::from_entries(vec![("A", "B", vec![41, 2])]);
        let mut engine = TrizEngine::with_matrix(matrix);
        assert_eq!(engine.suggest_principles("A", "B"), vec!["Taking out"]);

        engine
            .add_principle(PrincipleDraft::new("Swarming", "many small agents"))
            .unwrap();
        assert_eq!(engine.suggest_principles("A", "B"), vec!["Swarming", "Taking out"]);
    }

    #[test]
    fn sentinel_name_is_dropped() {
        let matrix = ContradictionMatrix::from_entries(vec![("A", "B", vec![41, 1])]);
        let mut engine = TrizEngine::with_matrix(matrix);
        engine
            .add_principle(PrincipleDraft::new(UNKNOWN_PRINCIPLE, ""))
            .unwrap();
        assert_eq!(engine.suggest_principles("A", "B"), vec!["Segmentation"]);
    }

    #[test]
    fn reset_clears_custom_state() {
        let mut engine = TrizEngine::new();
        engine.add_parameter("Battery life");
        engine.add_principle(PrincipleDraft::new("Swarming", "")).unwrap();
        engine.reset();
        assert!(engine.parameters().custom().is_empty());
        assert!(engine.principles().custom().is_empty());
    }
}
