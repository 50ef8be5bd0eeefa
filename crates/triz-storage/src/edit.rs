//! Edit sessions over a working copy of an analysis.
//!
//! Changes made through an [`AnalysisDraft`] are invisible to other readers
//! of the store until [`AnalysisDraft::commit`]. Dropping the draft discards
//! them.

use crate::{AnalysisStore, PatentAnalysis, StoreError, UpsertOutcome};
use chrono::Utc;
use triz_core::constants::INLINE_PRINCIPLE_DESCRIPTION;
use triz_core::{CatalogError, Contradiction, ContradictionEntry, PrincipleDraft, TrizEngine};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("no contradiction at index {0}")]
    NoSuchEntry(usize),
    #[error("no principle at index {principle} of contradiction {entry}")]
    NoSuchPrinciple { entry: usize, principle: usize },
    #[error("principle '{0}' is already suggested for this contradiction")]
    DuplicatePrinciple(String),
    #[error("parameter name must not be blank")]
    BlankParameter,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A detached, editable copy of a stored analysis.
#[derive(Debug, Clone)]
pub struct AnalysisDraft {
    working: PatentAnalysis,
    dirty: bool,
}

impl AnalysisStore {
    /// Start editing a stored analysis.
    pub fn begin_edit(&self, id: &str) -> Result<AnalysisDraft, StoreError> {
        self.get(id)
            .map(AnalysisDraft::new)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

fn register_parameter(engine: &mut TrizEngine, name: &str) -> Result<String, EditError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EditError::BlankParameter);
    }
    if !engine.parameters().contains(name) {
        engine.add_parameter(name);
    }
    // The matrix is keyed by the registered spelling.
    Ok(engine
        .parameters()
        .canonical(name)
        .unwrap_or(name)
        .to_string())
}

impl AnalysisDraft {
    pub fn new(analysis: PatentAnalysis) -> Self {
        Self {
            working: analysis,
            dirty: false,
        }
    }

    pub fn analysis(&self) -> &PatentAnalysis {
        &self.working
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut ContradictionEntry, EditError> {
        self.working
            .contradictions
            .get_mut(index)
            .ok_or(EditError::NoSuchEntry(index))
    }

    /// Append a contradiction pre-filled with engine suggestions.
    ///
    /// Parameters the registry does not know yet are registered as custom.
    pub fn add_contradiction(
        &mut self,
        improving: &str,
        worsening: &str,
        engine: &mut TrizEngine,
    ) -> Result<usize, EditError> {
        let improving = register_parameter(engine, improving)?;
        let worsening = register_parameter(engine, worsening)?;
        let suggested = engine.suggest_principles(&improving, &worsening);

        self.working.contradictions.push(ContradictionEntry::new(
            Contradiction::new(improving, worsening),
            suggested,
        ));
        self.dirty = true;
        Ok(self.working.contradictions.len() - 1)
    }

    /// Change both parameters of an entry and replace its suggestions.
    pub fn set_parameters(
        &mut self,
        index: usize,
        improving: &str,
        worsening: &str,
        engine: &mut TrizEngine,
    ) -> Result<(), EditError> {
        self.entry_mut(index)?;
        let improving = register_parameter(engine, improving)?;
        let worsening = register_parameter(engine, worsening)?;
        let suggested = engine.suggest_principles(&improving, &worsening);

        let entry = self.entry_mut(index)?;
        entry.contradiction = Contradiction::new(improving, worsening);
        entry.suggested_principles = suggested;
        self.dirty = true;
        Ok(())
    }

    pub fn remove_contradiction(&mut self, index: usize) -> Result<ContradictionEntry, EditError> {
        if index >= self.working.contradictions.len() {
            return Err(EditError::NoSuchEntry(index));
        }
        self.dirty = true;
        Ok(self.working.contradictions.remove(index))
    }

    /// Suggest one more principle for an entry.
    ///
    /// A name the catalog does not know becomes a custom principle.
    pub fn add_principle(
        &mut self,
        index: usize,
        name: &str,
        engine: &mut TrizEngine,
    ) -> Result<(), EditError> {
        let name = name.trim().to_string();
        let entry = self.entry_mut(index)?;
        if entry.suggested_principles.iter().any(|p| *p == name) {
            return Err(EditError::DuplicatePrinciple(name));
        }

        let stored = match engine.principles().get_by_name(&name) {
            Some(p) => p.name.clone(),
            None => {
                engine
                    .add_principle(PrincipleDraft::new(name.clone(), INLINE_PRINCIPLE_DESCRIPTION))?
                    .name
            }
        };

        let entry = self.entry_mut(index)?;
        if entry.suggested_principles.contains(&stored) {
            return Err(EditError::DuplicatePrinciple(stored));
        }
        entry.suggested_principles.push(stored);
        self.dirty = true;
        Ok(())
    }

    pub fn remove_principle(&mut self, index: usize, principle: usize) -> Result<String, EditError> {
        let entry = self.entry_mut(index)?;
        if principle >= entry.suggested_principles.len() {
            return Err(EditError::NoSuchPrinciple {
                entry: index,
                principle,
            });
        }
        let removed = entry.suggested_principles.remove(principle);
        self.dirty = true;
        Ok(removed)
    }

    /// Record reviewer feedback; blank text clears it.
    pub fn set_feedback(&mut self, feedback: &str) {
        let feedback = feedback.trim();
        if feedback.is_empty() {
            self.working.user_feedback = None;
            self.working.feedback_date = None;
        } else {
            self.working.user_feedback = Some(feedback.to_string());
            self.working.feedback_date = Some(Utc::now());
        }
        self.dirty = true;
    }

    pub fn set_title(&mut self, title: &str) {
        let title = title.trim();
        self.working.title = (!title.is_empty()).then(|| title.to_string());
        self.dirty = true;
    }

    /// Write the working copy back as a whole-record upsert.
    pub fn commit(self, store: &AnalysisStore) -> Result<UpsertOutcome, EditError> {
        Ok(store.upsert(self.working)?)
    }

    /// Throw the working copy away.
    pub fn discard(self) {
        tracing::debug!(analysis_id = %self.working.id, dirty = self.dirty, "discarded draft");
    }
}
