//! Review workflow: `pending -> reviewed -> approved`.
//!
//! Forward moves (including skipping `reviewed`) are always allowed. The one
//! backward move is [`AnalysisStore::reopen`], which sends an analysis back to
//! `pending` and clears its approval date.

use crate::{views, AnalysisStore, ChangeKind, PatentAnalysis, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Reviewed,
    Approved,
}

impl ReviewStatus {
    /// Same status or later in the workflow.
    pub fn can_transition_to(self, next: ReviewStatus) -> bool {
        next >= self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Reviewed => "reviewed",
            ReviewStatus::Approved => "approved",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ReviewStatus::Pending),
            "reviewed" => Ok(ReviewStatus::Reviewed),
            "approved" => Ok(ReviewStatus::Approved),
            other => Err(format!("unknown review status: {other}")),
        }
    }
}

fn forward(record: &PatentAnalysis, to: ReviewStatus) -> Result<(), StoreError> {
    if record.review_status.can_transition_to(to) {
        Ok(())
    } else {
        Err(StoreError::BackwardTransition {
            id: record.id.clone(),
            from: record.review_status,
            to,
        })
    }
}

impl AnalysisStore {
    /// Mark an analysis as reviewed, optionally recording feedback.
    pub fn mark_reviewed(
        &self,
        id: &str,
        feedback: Option<String>,
    ) -> Result<PatentAnalysis, StoreError> {
        let now = Utc::now();
        let updated = self.modify(id, ChangeKind::Replaced, |record| {
            forward(record, ReviewStatus::Reviewed)?;
            record.review_status = ReviewStatus::Reviewed;
            if let Some(text) = feedback.map(|f| f.trim().to_string()).filter(|f| !f.is_empty()) {
                record.user_feedback = Some(text);
                record.feedback_date = Some(now);
            }
            Ok(())
        })?;
        tracing::info!(analysis_id = id, "analysis reviewed");
        Ok(updated)
    }

    pub fn approve(&self, id: &str) -> Result<PatentAnalysis, StoreError> {
        self.approve_at(id, Utc::now())
    }

    /// Approve at a given instant.
    ///
    /// Records the approval date and the principle summary shown on the
    /// dashboard. Approving an approved analysis refreshes both.
    pub fn approve_at(&self, id: &str, at: DateTime<Utc>) -> Result<PatentAnalysis, StoreError> {
        let updated = self.modify(id, ChangeKind::Replaced, |record| {
            record.review_status = ReviewStatus::Approved;
            record.approved_date = Some(at);
            record.feedback_date.get_or_insert(at);
            record.principles = Some(views::approval_principles(record));
            Ok(())
        })?;
        tracing::info!(analysis_id = id, approved_at = %at, "analysis approved");
        Ok(updated)
    }

    /// Send an analysis back to `pending`.
    pub fn reopen(&self, id: &str) -> Result<PatentAnalysis, StoreError> {
        let updated = self.modify(id, ChangeKind::Reopened, |record| {
            record.review_status = ReviewStatus::Pending;
            record.approved_date = None;
            record.principles = None;
            Ok(())
        })?;
        tracing::info!(analysis_id = id, "analysis reopened");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_only_move_forward() {
        use ReviewStatus::*;
        assert!(Pending.can_transition_to(Reviewed));
        assert!(Pending.can_transition_to(Approved));
        assert!(Reviewed.can_transition_to(Approved));
        assert!(Approved.can_transition_to(Approved));
        assert!(!Approved.can_transition_to(Pending));
        assert!(!Approved.can_transition_to(Reviewed));
        assert!(!Reviewed.can_transition_to(Pending));
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [ReviewStatus::Pending, ReviewStatus::Reviewed, ReviewStatus::Approved] {
            assert_eq!(status.to_string().parse::<ReviewStatus>(), Ok(status));
        }
        assert_eq!(
            serde_json::to_string(&ReviewStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert!("done".parse::<ReviewStatus>().is_err());
    }
}
