//! Client side of the external patent analysis API.
//!
//! The remote service owns document extraction and persistence. This crate
//! talks to it over HTTP and turns what comes back into core and storage
//! types:
//!
//! ```text
//!   PDF on disk ──► upload::load ──► AnalysisBackend::analyze ──► AnalyzeResponse
//!                   (size, MIME)      (HTTP / offline / static)        │
//!                                                                      ▼
//!   AnalysisStore ◄── ingest::apply_if_current ◄── ingest::analysis_from_response
//!                     (skipped once cancelled)       (fills suggestions via TrizEngine)
//! ```
//!
//! The id-keyed remote matrix is translated into the name-keyed core matrix
//! in one place, [`adapter`].

pub mod adapter;
pub mod backend;
pub mod client;
pub mod config;
pub mod ingest;
pub mod upload;
pub mod wire;

pub use backend::{AnalysisBackend, OfflineBackend, StaticBackend};
pub use client::{Resource, TrizApiClient};
pub use config::{ClientConfig, ConfigError};
pub use ingest::{analysis_from_response, apply_if_current, run_analysis, synthesize_analysis, IngestError};
pub use upload::{UploadCandidate, UploadError, UploadFile, UploadPolicy};
pub use wire::AnalyzeResponse;

/// Errors surfaced by calls to the external API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("request cancelled")]
    Cancelled,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
