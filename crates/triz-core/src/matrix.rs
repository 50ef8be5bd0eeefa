//! Name-keyed contradiction matrix.
//!
//! Sparse: only cells with at least one principle id are stored. Keys are the
//! exact (improving, worsening) names; (A, B) and (B, A) are different cells.

use crate::constants::MATRIX_SEED;
use crate::{Contradiction, PrincipleId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ContradictionMatrix {
    cells: HashMap<(String, String), Vec<PrincipleId>>,
    /// Cell keys in seeding order, for browsing.
    order: Vec<(String, String)>,
}

impl ContradictionMatrix {
    /// The compiled-in seed table.
    pub fn builtin() -> Self {
        Self::from_entries(
            MATRIX_SEED
                .iter()
                .map(|(improving, worsening, ids)| (*improving, *worsening, ids.to_vec())),
        )
    }

    /// Build from arbitrary (improving, worsening, ids) rows.
    ///
    /// Duplicate ids within a cell keep their first position; a later row for
    /// the same pair replaces the earlier one; empty cells are skipped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Vec<PrincipleId>)>,
        S: Into<String>,
    {
        let mut matrix = Self::default();
        for (improving, worsening, ids) in entries {
            matrix.insert(improving.into(), worsening.into(), ids);
        }
        matrix
    }

    fn insert(&mut self, improving: String, worsening: String, ids: Vec<PrincipleId>) {
        let mut deduped: Vec<PrincipleId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        if improving.is_empty() || worsening.is_empty() || deduped.is_empty() {
            return;
        }

        let key = (improving, worsening);
        if self.cells.insert(key.clone(), deduped).is_none() {
            self.order.push(key);
        }
    }

    fn cell(&self, improving: &str, worsening: &str) -> Option<&Vec<PrincipleId>> {
        if improving.is_empty() || worsening.is_empty() {
            return None;
        }
        self.cells
            .get(&(improving.to_string(), worsening.to_string()))
    }

    /// True iff both names are non-empty and the exact pair has principles.
    pub fn is_known(&self, improving: &str, worsening: &str) -> bool {
        self.cell(improving, worsening)
            .map_or(false, |ids| !ids.is_empty())
    }

    /// Principle ids for the pair, or empty. Always an owned copy.
    pub fn resolve(&self, improving: &str, worsening: &str) -> Vec<PrincipleId> {
        self.cell(improving, worsening).cloned().unwrap_or_default()
    }

    /// Distinct improving parameters in seeding order.
    pub fn improving_parameters(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for (improving, _) in &self.order {
            if !out.contains(improving) {
                out.push(improving.clone());
            }
        }
        out
    }

    /// Cells of one improving row as (worsening, ids).
    pub fn row(&self, improving: &str) -> Vec<(String, Vec<PrincipleId>)> {
        self.order
            .iter()
            .filter(|(i, _)| i == improving)
            .filter_map(|key| self.cells.get(key).map(|ids| (key.1.clone(), ids.clone())))
            .collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Contradiction, &[PrincipleId])> + '_ {
        self.order.iter().filter_map(move |key| {
            self.cells
                .get(key)
                .map(|ids| (Contradiction::new(key.0.clone(), key.1.clone()), ids.as_slice()))
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_cell_resolves_in_order() {
        let matrix = ContradictionMatrix::builtin();
        assert_eq!(matrix.len(), MATRIX_SEED.len());
        assert_eq!(
            matrix.resolve("Weight of moving object", "Speed"),
            vec![2, 28, 13, 38]
        );
        assert!(matrix.is_known("Weight of moving object", "Speed"));
    }

    #[test]
    fn pairs_are_directional() {
        let matrix = ContradictionMatrix::builtin();
        assert_eq!(matrix.resolve("Speed", "Weight of moving object"), vec![13, 14, 8, 26]);
        assert!(!matrix.is_known("Speed", "Strength"));
        assert!(!matrix.is_known("Strength", "Speed"));
    }

    #[test]
    fn empty_names_are_never_known() {
        let matrix = ContradictionMatrix::builtin();
        assert!(!matrix.is_known("", "Speed"));
        assert!(!matrix.is_known("Weight of moving object", ""));
        assert!(matrix.resolve("", "").is_empty());
    }

    #[test]
    fn resolve_returns_independent_copy() {
        let matrix = ContradictionMatrix::builtin();
        let mut ids = matrix.resolve("Power", "Speed");
        ids.clear();
        assert_eq!(matrix.resolve("Power", "Speed"), vec![12, 18, 28, 31]);
    }

    #[test]
    fn from_entries_dedupes_and_skips_empty_cells() {
        let matrix = ContradictionMatrix::from_entries(vec![
            ("A", "B", vec![3, 1, 3, 2, 1]),
            ("A", "C", vec![]),
        ]);
        assert_eq!(matrix.resolve("A", "B"), vec![3, 1, 2]);
        assert!(!matrix.is_known("A", "C"));
        assert_eq!(matrix.len(), 1);
    }

    #[test]
    fn browsing_follows_seed_order() {
        let matrix = ContradictionMatrix::builtin();
        let rows = matrix.improving_parameters();
        assert_eq!(rows.first().map(String::as_str), Some("Weight of moving object"));
        assert_eq!(rows.len(), 6);
        let power = matrix.row("Power");
        assert_eq!(power.len(), 3);
        assert_eq!(power[1].0, "Loss of energy");
        assert_eq!(matrix.entries().count(), matrix.len());
    }
}
