//! Engineering parameter vocabulary: the 39 built-ins plus user additions.

use crate::constants::ENGINEERING_PARAMETERS;
use crate::same_name;

/// Built-in parameters followed by custom ones.
///
/// Names are unique under case-insensitive comparison across both pools.
/// The registry only grows; [`ParameterRegistry::reset`] is the one way to
/// drop custom entries.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    custom: Vec<String>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-ins in canonical order, then customs in insertion order.
    pub fn list_all(&self) -> Vec<String> {
        ENGINEERING_PARAMETERS
            .iter()
            .map(|p| p.to_string())
            .chain(self.custom.iter().cloned())
            .collect()
    }

    /// Add a custom parameter and return the updated list.
    ///
    /// Blank names and case-insensitive duplicates are silently ignored.
    pub fn add(&mut self, name: &str) -> Vec<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            tracing::debug!("ignoring blank parameter name");
            return self.list_all();
        }
        if self.contains(trimmed) {
            tracing::debug!(parameter = trimmed, "parameter already registered");
            return self.list_all();
        }

        tracing::debug!(parameter = trimmed, "registered custom parameter");
        self.custom.push(trimmed.to_string());
        self.list_all()
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.is_builtin(name) || self.custom.iter().any(|p| same_name(p, name))
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        let name = name.trim();
        ENGINEERING_PARAMETERS.iter().any(|p| same_name(p, name))
    }

    /// The stored spelling of `name`, if registered.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        ENGINEERING_PARAMETERS
            .iter()
            .copied()
            .find(|p| same_name(p, name))
            .or_else(|| {
                self.custom
                    .iter()
                    .find(|p| same_name(p, name))
                    .map(String::as_str)
            })
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    pub fn len(&self) -> usize {
        ENGINEERING_PARAMETERS.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn reset(&mut self) {
        self.custom.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_39_builtins() {
        let registry = ParameterRegistry::new();
        let all = registry.list_all();
        assert_eq!(all.len(), 39);
        assert_eq!(all[0], "Weight of moving object");
        assert_eq!(all[38], "Productivity");
    }

    #[test]
    fn add_trims_and_appends() {
        let mut registry = ParameterRegistry::new();
        let all = registry.add("  Battery life ");
        assert_eq!(all.len(), 40);
        assert_eq!(all.last().map(String::as_str), Some("Battery life"));
    }

    #[test]
    fn blank_add_is_a_no_op() {
        let mut registry = ParameterRegistry::new();
        assert_eq!(registry.add("   ").len(), 39);
        assert_eq!(registry.add("").len(), 39);
        assert!(registry.custom().is_empty());
    }

    #[test]
    fn builtin_duplicate_ignores_case() {
        let mut registry = ParameterRegistry::new();
        registry.add("strength");
        registry.add("SPEED");
        assert!(registry.custom().is_empty());
    }

    #[test]
    fn custom_duplicate_ignores_case() {
        let mut registry = ParameterRegistry::new();
        registry.add("Battery life");
        registry.add("battery LIFE");
        assert_eq!(registry.custom(), ["Battery life".to_string()]);
    }

    #[test]
    fn canonical_returns_stored_spelling() {
        let mut registry = ParameterRegistry::new();
        registry.add("Battery life");
        assert_eq!(registry.canonical("speed"), Some("Speed"));
        assert_eq!(registry.canonical(" BATTERY life"), Some("Battery life"));
        assert_eq!(registry.canonical("Dexterity"), None);
    }

    #[test]
    fn reset_drops_customs_only() {
        let mut registry = ParameterRegistry::new();
        registry.add("Battery life");
        registry.reset();
        assert_eq!(registry.len(), 39);
        assert!(registry.is_builtin("Speed"));
    }
}
