//! Turning analysis responses into stored analyses.

use crate::backend::AnalysisBackend;
use crate::upload::UploadFile;
use crate::wire::AnalyzeResponse;
use crate::ApiError;
use tokio_util::sync::CancellationToken;
use triz_core::{common_contradictions, Contradiction, ContradictionEntry, TrizEngine};
use triz_storage::{AnalysisStore, PatentAnalysis, StoreError, UpsertOutcome};

/// Confidence given to analyses the service returns without a score.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// Contradictions in a locally synthesized analysis.
pub const SYNTHESIZED_CONTRADICTIONS: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Build a pending analysis from an analyze response.
///
/// Entries with a blank side are dropped. Parameters the registry does not
/// know are registered as custom ones, known ones take their registered
/// spelling, and entries that came back without suggestions are filled from
/// the engine.
pub fn analysis_from_response(
    patent_id: &str,
    response: AnalyzeResponse,
    engine: &mut TrizEngine,
) -> PatentAnalysis {
    let mut contradictions = Vec::new();
    for entry in response.contradictions.unwrap_or_default() {
        let improving = entry.contradiction.improving_parameter.trim().to_string();
        let worsening = entry.contradiction.worsening_parameter.trim().to_string();
        if improving.is_empty() || worsening.is_empty() {
            tracing::warn!(patent_id, "dropped contradiction with a blank parameter");
            continue;
        }
        let [improving, worsening] = [improving, worsening].map(|name| {
            if !engine.parameters().contains(&name) {
                engine.add_parameter(&name);
            }
            engine
                .parameters()
                .canonical(&name)
                .map(str::to_string)
                .unwrap_or(name)
        });

        let mut suggested: Vec<String> = entry
            .suggested_principles
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if suggested.is_empty() {
            suggested = engine.suggest_principles(&improving, &worsening);
        }
        contradictions.push(ContradictionEntry::new(
            Contradiction::new(improving, worsening),
            suggested,
        ));
    }

    let mut analysis = PatentAnalysis::new(patent_id, contradictions, DEFAULT_CONFIDENCE);
    analysis.title = response
        .metadata
        .and_then(|m| m.title)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    analysis
}

/// A pending analysis built locally from the common contradictions.
pub fn synthesize_analysis(patent_id: &str, engine: &TrizEngine) -> PatentAnalysis {
    let contradictions = common_contradictions()
        .into_iter()
        .take(SYNTHESIZED_CONTRADICTIONS)
        .map(|c| {
            let suggested =
                engine.suggest_principles(&c.improving_parameter, &c.worsening_parameter);
            ContradictionEntry::new(c, suggested)
        })
        .collect();
    PatentAnalysis::new(patent_id, contradictions, DEFAULT_CONFIDENCE)
}

/// Store `analysis` unless the request it belongs to was cancelled.
///
/// Returns `Ok(None)` when the token has fired; the store is left alone.
pub fn apply_if_current(
    store: &AnalysisStore,
    analysis: PatentAnalysis,
    cancel: &CancellationToken,
) -> Result<Option<UpsertOutcome>, StoreError> {
    if cancel.is_cancelled() {
        tracing::warn!(
            analysis_id = %analysis.id,
            patent_id = %analysis.patent_id,
            "discarding analysis from a cancelled request"
        );
        return Ok(None);
    }
    store.upsert(analysis).map(Some)
}

/// Analyze a document and store the result.
///
/// The patent id falls back to the reported patent number, then to the file
/// name stem.
pub async fn run_analysis(
    backend: &dyn AnalysisBackend,
    file: &UploadFile,
    patent_id: Option<&str>,
    engine: &mut TrizEngine,
    store: &AnalysisStore,
    cancel: &CancellationToken,
) -> Result<PatentAnalysis, IngestError> {
    let response = backend.analyze(file, cancel).await?;
    tracing::info!(
        backend = backend.name(),
        file = %file.file_name(),
        contradictions = response.contradictions.as_ref().map_or(0, Vec::len),
        "analysis received"
    );

    let patent_id = patent_id
        .map(str::to_string)
        .or_else(|| {
            response
                .metadata
                .as_ref()
                .and_then(|m| m.patent_number.clone())
        })
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| file.stem());

    let analysis = analysis_from_response(&patent_id, response, engine);
    match apply_if_current(store, analysis.clone(), cancel)? {
        Some(_) => Ok(analysis),
        None => Err(ApiError::Cancelled.into()),
    }
}
