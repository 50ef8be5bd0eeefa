//! TRIZ Analysis Store
//!
//! Holds the canonical copy of every patent analysis for the lifetime of the
//! process:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        ANALYSIS STORE                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌───────────┐     ┌───────────────┐     ┌─────────────────┐    │
//! │  │ Extraction│────►│               │────►│ list_by_patent  │    │
//! │  │ (API/demo)│     │   upsert      │     │ list_all / get  │    │
//! │  └───────────┘     │   (guarded)   │     └─────────────────┘    │
//! │                    │               │                            │
//! │  ┌───────────┐     │               │     ┌─────────────────┐    │
//! │  │  Editor   │────►│               │────►│  views (dash-   │    │
//! │  │  commit   │     └───────────────┘     │  board, stats)  │    │
//! │  └───────────┘            │              └─────────────────┘    │
//! │                           ▼                                     │
//! │                    ┌─────────────┐                              │
//! │                    │ Change Log  │                              │
//! │                    └─────────────┘                              │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Features
//!
//! - **Whole-record writes**: `upsert` replaces, never merges
//! - **Guarded review**: `pending -> reviewed -> approved`, backward only via `reopen`
//! - **Explicit lifecycle**: construct, share behind `Arc`, `reset()` for tests
//! - **In memory only**: nothing survives the process


pub mod edit;
pub mod review;
pub mod views;

pub use edit::{AnalysisDraft, EditError};
pub use review::ReviewStatus;
pub use views::AnalyticsSummary;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use triz_core::ContradictionEntry;
use uuid::Uuid;

// ============================================================================
// Core Types
// ============================================================================

/// Version tag stamped on analyses produced by this crate family.
pub const EXTRACTION_VERSION: &str = "1.0.0";

/// TRIZ analysis of one patent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentAnalysis {
    pub id: String,
    /// Foreign reference to a patent held by the external API.
    pub patent_id: String,
    pub contradictions: Vec<ContradictionEntry>,
    /// In [0, 1].
    pub confidence_score: f64,
    pub review_status: ReviewStatus,
    pub extraction_version: String,
    pub analysis_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    /// Patent title captured for dashboard display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Principle summary captured at approval time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles: Option<Vec<String>>,
}

impl PatentAnalysis {
    /// A fresh pending analysis with a random id.
    pub fn new(
        patent_id: impl Into<String>,
        contradictions: Vec<ContradictionEntry>,
        confidence_score: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            patent_id: patent_id.into(),
            contradictions,
            confidence_score,
            review_status: ReviewStatus::Pending,
            extraction_version: EXTRACTION_VERSION.to_string(),
            analysis_date: Utc::now(),
            user_feedback: None,
            feedback_date: None,
            approved_date: None,
            title: None,
            principles: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Every suggested principle across all entries, in order, with repeats.
    pub fn all_principles(&self) -> impl Iterator<Item = &str> {
        self.contradictions
            .iter()
            .flat_map(|c| c.suggested_principles.iter().map(String::as_str))
    }
}

/// Unique identifier for a store change
pub type ChangeId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Inserted,
    Replaced,
    Removed,
    Reopened,
}

/// One write applied to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreChange {
    pub id: ChangeId,
    pub timestamp: DateTime<Utc>,
    pub analysis_id: String,
    pub kind: ChangeKind,
    pub review_status: Option<ReviewStatus>,
}

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("analysis not found: {0}")]
    NotFound(String),
    #[error("analysis {id}: review status cannot move from {from} to {to} (use reopen)")]
    BackwardTransition {
        id: String,
        from: ReviewStatus,
        to: ReviewStatus,
    },
    #[error("analysis {id}: confidence score {score} is outside [0, 1]")]
    InvalidConfidence { id: String, score: f64 },
    #[error("analysis id must not be empty")]
    EmptyId,
}

// ============================================================================
// Store Configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Reject upserts that move review status backward
    pub enforce_forward_review: bool,
    /// Size of the "recently approved" dashboard list
    pub recently_approved_limit: usize,
    /// Changes kept in the change log; the oldest are dropped first
    pub changelog_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enforce_forward_review: true,
            recently_approved_limit: 5,
            changelog_limit: 1000,
        }
    }
}

// ============================================================================
// Analysis Store
// ============================================================================

/// Keyed, insertion-ordered collection of analyses.
///
/// Cheap to share: clones point at the same records.
#[derive(Debug, Clone, Default)]
pub struct AnalysisStore {
    config: StoreConfig,
    records: Arc<RwLock<Vec<PatentAnalysis>>>,
    changelog: Arc<RwLock<Vec<StoreChange>>>,
}

impl AnalysisStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            records: Arc::new(RwLock::new(Vec::new())),
            changelog: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn log(&self, analysis_id: &str, kind: ChangeKind, review_status: Option<ReviewStatus>) {
        let mut changelog = self.changelog.write();
        changelog.push(StoreChange {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            analysis_id: analysis_id.to_string(),
            kind,
            review_status,
        });
        let overflow = changelog.len().saturating_sub(self.config.changelog_limit);
        if overflow > 0 {
            changelog.drain(..overflow);
        }
    }

    fn validate(&self, analysis: &PatentAnalysis) -> Result<(), StoreError> {
        if analysis.id.trim().is_empty() {
            return Err(StoreError::EmptyId);
        }
        let score = analysis.confidence_score;
        if !(0.0..=1.0).contains(&score) {
            return Err(StoreError::InvalidConfidence {
                id: analysis.id.clone(),
                score,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Insert a new analysis or replace the stored one with the same id.
    ///
    /// Replacement is a full overwrite. When the store enforces forward
    /// review, a replacement that lowers `review_status` is rejected.
    pub fn upsert(&self, analysis: PatentAnalysis) -> Result<UpsertOutcome, StoreError> {
        self.validate(&analysis)?;

        let mut records = self.records.write();
        let id = analysis.id.clone();
        let status = analysis.review_status;

        let outcome = match records.iter().position(|a| a.id == analysis.id) {
            Some(idx) => {
                let from = records[idx].review_status;
                if self.config.enforce_forward_review && !from.can_transition_to(status) {
                    tracing::warn!(
                        analysis_id = %id,
                        from = %from,
                        to = %status,
                        "rejected backward review transition"
                    );
                    return Err(StoreError::BackwardTransition {
                        id,
                        from,
                        to: status,
                    });
                }
                records[idx] = analysis;
                UpsertOutcome::Replaced
            }
            None => {
                records.push(analysis);
                UpsertOutcome::Inserted
            }
        };
        drop(records);

        let kind = match outcome {
            UpsertOutcome::Inserted => ChangeKind::Inserted,
            UpsertOutcome::Replaced => ChangeKind::Replaced,
        };
        tracing::info!(analysis_id = %id, status = %status, ?kind, "stored analysis");
        self.log(&id, kind, Some(status));
        Ok(outcome)
    }

    /// Remove an analysis. Returns whether a record was removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|a| a.id != id);
        let removed = records.len() != before;
        drop(records);

        if removed {
            tracing::info!(analysis_id = id, "removed analysis");
            self.log(id, ChangeKind::Removed, None);
        }
        removed
    }

    /// Drop every record and the change log.
    pub fn reset(&self) {
        self.records.write().clear();
        self.changelog.write().clear();
    }

    /// Apply `f` to the stored record under one write lock.
    ///
    /// Used by review operations so read-modify-write cannot interleave.
    pub(crate) fn modify<F>(&self, id: &str, kind: ChangeKind, f: F) -> Result<PatentAnalysis, StoreError>
    where
        F: FnOnce(&mut PatentAnalysis) -> Result<(), StoreError>,
    {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut updated = record.clone();
        f(&mut updated)?;
        *record = updated.clone();
        drop(records);

        self.log(id, kind, Some(updated.review_status));
        Ok(updated)
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    pub fn get(&self, id: &str) -> Option<PatentAnalysis> {
        self.records.read().iter().find(|a| a.id == id).cloned()
    }

    /// Analyses of one patent in insertion order; empty when there are none.
    pub fn list_by_patent(&self, patent_id: &str) -> Vec<PatentAnalysis> {
        self.records
            .read()
            .iter()
            .filter(|a| a.patent_id == patent_id)
            .cloned()
            .collect()
    }

    /// Every analysis in insertion order.
    pub fn list_all(&self) -> Vec<PatentAnalysis> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn changelog(&self) -> Vec<StoreChange> {
        self.changelog.read().clone()
    }

    /// Approved analyses for the dashboard, newest first.
    pub fn recently_approved(&self) -> Vec<PatentAnalysis> {
        views::recently_approved(&self.list_all(), self.config.recently_approved_limit)
    }

    pub fn summary(&self) -> AnalyticsSummary {
        AnalyticsSummary::from_analyses(&self.list_all())
    }

    /// Pretty JSON of every record, in insertion order.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.records.read())
    }
}
