//! Where analyses come from.
//!
//! [`TrizApiClient`] asks the remote service. [`OfflineBackend`] produces a
//! local stand-in from the common contradiction list for demos and for use
//! without a running service. [`StaticBackend`] replays a fixed response and
//! is handy in tests.

use crate::client::TrizApiClient;
use crate::upload::UploadFile;
use crate::wire::{AnalyzeResponse, PatentMetadata};
use crate::ApiError;
use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use triz_core::{common_contradictions, ContradictionEntry};

/// Common contradictions used by the offline backend.
pub const OFFLINE_CONTRADICTIONS: usize = 2;

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Analyze a validated document. Returns [`ApiError::Cancelled`] once
    /// `cancel` fires.
    async fn analyze(
        &self,
        file: &UploadFile,
        cancel: &CancellationToken,
    ) -> Result<AnalyzeResponse, ApiError>;
}

#[async_trait]
impl AnalysisBackend for TrizApiClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn analyze(
        &self,
        file: &UploadFile,
        cancel: &CancellationToken,
    ) -> Result<AnalyzeResponse, ApiError> {
        self.analyze_file(file, cancel).await
    }
}

/// Local stand-in that never touches the network.
///
/// Suggestions are left empty; ingestion fills them from the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBackend;

#[async_trait]
impl AnalysisBackend for OfflineBackend {
    fn name(&self) -> &str {
        "offline"
    }

    async fn analyze(
        &self,
        file: &UploadFile,
        cancel: &CancellationToken,
    ) -> Result<AnalyzeResponse, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let contradictions = common_contradictions()
            .into_iter()
            .take(OFFLINE_CONTRADICTIONS)
            .map(|c| ContradictionEntry::new(c, Vec::new()))
            .collect();

        Ok(AnalyzeResponse {
            metadata: Some(PatentMetadata {
                title: Some(file.stem()),
                ..PatentMetadata::default()
            }),
            contradictions: Some(contradictions),
            file_url: None,
        })
    }
}

/// Replays a fixed response, optionally after a delay.
#[derive(Debug, Clone, Default)]
pub struct StaticBackend {
    response: AnalyzeResponse,
    delay: Option<Duration>,
}

impl StaticBackend {
    pub fn new(response: AnalyzeResponse) -> Self {
        Self {
            response,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl AnalysisBackend for StaticBackend {
    fn name(&self) -> &str {
        "static"
    }

    async fn analyze(
        &self,
        _file: &UploadFile,
        cancel: &CancellationToken,
    ) -> Result<AnalyzeResponse, ApiError> {
        let wait = self.delay.unwrap_or_default();
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ApiError::Cancelled),
            _ = tokio::time::sleep(wait) => Ok(self.response.clone()),
        }
    }
}
