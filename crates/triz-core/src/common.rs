//! Predefined contradictions offered for quick selection.

use crate::constants::COMMON_CONTRADICTIONS;
use crate::Contradiction;

pub fn common_contradictions() -> Vec<Contradiction> {
    COMMON_CONTRADICTIONS
        .iter()
        .map(|(improving, worsening)| Contradiction::new(*improving, *worsening))
        .collect()
}

/// Exact (case-sensitive) match against the predefined list.
pub fn find_common(improving: &str, worsening: &str) -> Option<Contradiction> {
    if improving.is_empty() || worsening.is_empty() {
        return None;
    }
    COMMON_CONTRADICTIONS
        .iter()
        .find(|(i, w)| *i == improving && *w == worsening)
        .map(|(i, w)| Contradiction::new(*i, *w))
}
