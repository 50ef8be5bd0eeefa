//! Validation of documents before they are sent for analysis.
//!
//! Nothing here touches the network: a file that fails validation never
//! reaches the client.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PDF_MIME: &str = "application/pdf";
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPolicy {
    pub max_bytes: u64,
    pub allowed_mime: String,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
            allowed_mime: PDF_MIME.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("{file_name}: only {allowed} files are accepted (got {mime_type})")]
    UnsupportedType {
        file_name: String,
        mime_type: String,
        allowed: String,
    },
    #[error("{file_name}: {size_bytes} bytes exceeds the {max_bytes} byte limit")]
    TooLarge {
        file_name: String,
        size_bytes: u64,
        max_bytes: u64,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What validation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadPolicy {
    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), UploadError> {
        if candidate.mime_type != self.allowed_mime {
            return Err(UploadError::UnsupportedType {
                file_name: candidate.file_name.clone(),
                mime_type: candidate.mime_type.clone(),
                allowed: self.allowed_mime.clone(),
            });
        }
        if candidate.size_bytes > self.max_bytes {
            return Err(UploadError::TooLarge {
                file_name: candidate.file_name.clone(),
                size_bytes: candidate.size_bytes,
                max_bytes: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// MIME type from leading bytes, then from the extension.
pub fn sniff_mime(file_name: &str, head: &[u8]) -> String {
    if head.starts_with(PDF_MAGIC) {
        return PDF_MIME.to_string();
    }
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => PDF_MIME,
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// A validated document held in memory, ready to upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub candidate: UploadCandidate,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Validate in-memory content.
    pub fn from_bytes(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        policy: &UploadPolicy,
    ) -> Result<Self, UploadError> {
        let file_name = file_name.into();
        let candidate = UploadCandidate {
            mime_type: sniff_mime(&file_name, &bytes),
            size_bytes: bytes.len() as u64,
            file_name,
        };
        policy.validate(&candidate)?;
        Ok(Self { candidate, bytes })
    }

    /// Read and validate a file. The size is checked before reading it.
    pub async fn load(path: &Path, policy: &UploadPolicy) -> Result<Self, UploadError> {
        let io = |source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let size_bytes = tokio::fs::metadata(path).await.map_err(io)?.len();
        if size_bytes > policy.max_bytes {
            return Err(UploadError::TooLarge {
                file_name,
                size_bytes,
                max_bytes: policy.max_bytes,
            });
        }

        let bytes = tokio::fs::read(path).await.map_err(io)?;
        tracing::debug!(file = %file_name, size_bytes, "loaded upload candidate");
        Self::from_bytes(file_name, bytes, policy)
    }

    pub fn file_name(&self) -> &str {
        &self.candidate.file_name
    }

    /// File name without extension, used as a fallback patent id.
    pub fn stem(&self) -> String {
        Path::new(&self.candidate.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.candidate.file_name.clone())
    }
}
