//! Derived dashboard views over a snapshot of analyses.
//!
//! None of these touch the store; they take whatever `list_all()` returned.

use crate::{PatentAnalysis, ReviewStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use triz_core::Contradiction;

/// How many distinct principles are kept as the approval summary.
pub const APPROVAL_SUMMARY_LEN: usize = 3;

fn approval_instant(a: &PatentAnalysis) -> Option<DateTime<Utc>> {
    a.approved_date.or(a.feedback_date)
}

/// Approved analyses that carry an approval (or feedback) date, newest first.
pub fn recently_approved(analyses: &[PatentAnalysis], limit: usize) -> Vec<PatentAnalysis> {
    let mut approved: Vec<PatentAnalysis> = analyses
        .iter()
        .filter(|a| a.review_status == ReviewStatus::Approved && approval_instant(a).is_some())
        .cloned()
        .collect();
    approved.sort_by(|a, b| approval_instant(b).cmp(&approval_instant(a)));
    approved.truncate(limit);
    approved
}

pub fn by_status(analyses: &[PatentAnalysis], status: ReviewStatus) -> Vec<PatentAnalysis> {
    analyses
        .iter()
        .filter(|a| a.review_status == status)
        .cloned()
        .collect()
}

/// Highest confidence first; ties keep input order.
pub fn sorted_by_confidence(analyses: &[PatentAnalysis]) -> Vec<PatentAnalysis> {
    let mut out = analyses.to_vec();
    out.sort_by(|a, b| {
        b.confidence_score
            .partial_cmp(&a.confidence_score)
            .unwrap_or(Ordering::Equal)
    });
    out
}

/// Newest analysis date first.
pub fn sorted_by_date(analyses: &[PatentAnalysis]) -> Vec<PatentAnalysis> {
    let mut out = analyses.to_vec();
    out.sort_by(|a, b| b.analysis_date.cmp(&a.analysis_date));
    out
}

/// First few distinct suggested principles across all entries.
pub fn approval_principles(analysis: &PatentAnalysis) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in analysis.all_principles() {
        if out.len() == APPROVAL_SUMMARY_LEN {
            break;
        }
        if !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionCount {
    pub contradiction: Contradiction,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipleCount {
    pub principle: String,
    pub count: usize,
}

/// Aggregate figures for the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_analyses: usize,
    pub by_status: HashMap<ReviewStatus, usize>,
    /// Percentage of analyses that left `pending`.
    pub review_completion_rate: f64,
    pub average_confidence_score: f64,
    pub top_contradictions: Vec<ContradictionCount>,
    pub top_principles: Vec<PrincipleCount>,
}

/// Entries kept in each "top" list.
pub const TOP_N: usize = 5;

/// Count occurrences, then order by count descending and first appearance.
fn ranked<K: Clone + Eq + std::hash::Hash>(items: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut order: Vec<K> = Vec::new();
    let mut counts: HashMap<K, usize> = HashMap::new();
    for item in items {
        let entry = counts.entry(item.clone()).or_insert(0);
        if *entry == 0 {
            order.push(item);
        }
        *entry += 1;
    }
    let mut out: Vec<(K, usize)> = order
        .into_iter()
        .map(|k| {
            let n = counts.get(&k).copied().unwrap_or(0);
            (k, n)
        })
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out.truncate(TOP_N);
    out
}

impl AnalyticsSummary {
    pub fn from_analyses(analyses: &[PatentAnalysis]) -> Self {
        let total = analyses.len();

        let mut by_status: HashMap<ReviewStatus, usize> = HashMap::new();
        for a in analyses {
            *by_status.entry(a.review_status).or_insert(0) += 1;
        }

        let (review_completion_rate, average_confidence_score) = if total == 0 {
            (0.0, 0.0)
        } else {
            let done = analyses
                .iter()
                .filter(|a| a.review_status != ReviewStatus::Pending)
                .count();
            let sum: f64 = analyses.iter().map(|a| a.confidence_score).sum();
            (done as f64 * 100.0 / total as f64, sum / total as f64)
        };

        let top_contradictions = ranked(
            analyses
                .iter()
                .flat_map(|a| a.contradictions.iter().map(|c| c.contradiction.clone())),
        )
        .into_iter()
        .map(|(contradiction, count)| ContradictionCount {
            contradiction,
            count,
        })
        .collect();

        let top_principles = ranked(
            analyses
                .iter()
                .flat_map(|a| a.all_principles().map(str::to_string)),
        )
        .into_iter()
        .map(|(principle, count)| PrincipleCount { principle, count })
        .collect();

        Self {
            total_analyses: total,
            by_status,
            review_completion_rate,
            average_confidence_score,
            top_contradictions,
            top_principles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use triz_core::ContradictionEntry;

    fn entry(i: &str, w: &str, principles: &[&str]) -> ContradictionEntry {
        ContradictionEntry::new(
            Contradiction::new(i, w),
            principles.iter().map(|p| p.to_string()).collect(),
        )
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn recently_approved_sorts_newest_first_and_truncates() {
        let mut analyses = Vec::new();
        for day in [3, 9, 1, 7] {
            let mut a = PatentAnalysis::new("p", vec![], 0.5).with_id(format!("a{day}"));
            a.review_status = ReviewStatus::Approved;
            a.approved_date = Some(at(day));
            analyses.push(a);
        }
        analyses.push(PatentAnalysis::new("p", vec![], 0.5).with_id("pending"));
        let mut undated = PatentAnalysis::new("p", vec![], 0.5).with_id("undated");
        undated.review_status = ReviewStatus::Approved;
        analyses.push(undated);

        let ids: Vec<String> = recently_approved(&analyses, 3)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["a9", "a7", "a3"]);
    }

    #[test]
    fn feedback_date_stands_in_for_approval_date() {
        let mut a = PatentAnalysis::new("p", vec![], 0.5).with_id("fb");
        a.review_status = ReviewStatus::Approved;
        a.feedback_date = Some(at(2));
        assert_eq!(recently_approved(&[a], 5).len(), 1);
    }

    #[test]
    fn approval_summary_keeps_three_distinct_names() {
        let a = PatentAnalysis::new(
            "p",
            vec![
                entry("A", "B", &["Segmentation", "Asymmetry"]),
                entry("C", "D", &["Segmentation", "Feedback", "Nested doll"]),
            ],
            0.9,
        );
        assert_eq!(
            approval_principles(&a),
            vec!["Segmentation", "Asymmetry", "Feedback"]
        );
    }

    #[test]
    fn confidence_sort_is_descending() {
        let a = PatentAnalysis::new("p", vec![], 0.2).with_id("low");
        let b = PatentAnalysis::new("p", vec![], 0.9).with_id("high");
        let sorted = sorted_by_confidence(&[a, b]);
        assert_eq!(sorted[0].id, "high");
    }

    #[test]
    fn summary_counts_statuses_and_frequencies() {
        let mut reviewed = PatentAnalysis::new(
            "p1",
            vec![entry("Speed", "Power", &["Dynamics", "Segmentation"])],
            0.8,
        );
        reviewed.review_status = ReviewStatus::Reviewed;
        let pending = PatentAnalysis::new(
            "p2",
            vec![
                entry("Speed", "Power", &["Segmentation"]),
                entry("Strength", "Complexity", &["Feedback"]),
            ],
            0.6,
        );

        let summary = AnalyticsSummary::from_analyses(&[reviewed, pending]);
        assert_eq!(summary.total_analyses, 2);
        assert_eq!(summary.by_status.get(&ReviewStatus::Pending), Some(&1));
        assert!((summary.review_completion_rate - 50.0).abs() < 1e-9);
        assert!((summary.average_confidence_score - 0.7).abs() < 1e-9);
        assert_eq!(summary.top_contradictions[0].count, 2);
        assert_eq!(
            summary.top_contradictions[0].contradiction,
            Contradiction::new("Speed", "Power")
        );
        assert_eq!(summary.top_principles[0].principle, "Segmentation");
        assert_eq!(summary.top_principles[0].count, 2);
    }

    #[test]
    fn empty_summary_is_zeroed() {
        let summary = AnalyticsSummary::from_analyses(&[]);
        assert_eq!(summary.total_analyses, 0);
        assert_eq!(summary.average_confidence_score, 0.0);
        assert!(summary.top_principles.is_empty());
    }
}
