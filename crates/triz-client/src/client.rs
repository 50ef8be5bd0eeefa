//! HTTP client for the external patent analysis API.

use crate::config::{join_endpoint, ClientConfig};
use crate::upload::{UploadFile, UploadPolicy};
use crate::wire::{
    AnalyzeResponse, ApiMatrixCell, ApiParameter, ApiPrinciple, Citation, NewPatent, Patent,
    RemoteAnalysis,
};
use crate::ApiError;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// CRUD collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Patents,
    Analyses,
    Citations,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Patents => "patents",
            Resource::Analyses => "analyses",
            Resource::Citations => "citations",
        }
    }
}

pub struct TrizApiClient {
    http: Client,
    config: ClientConfig,
    base: Url,
    policy: UploadPolicy,
}

impl TrizApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base = config.base()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            config,
            base,
            policy: UploadPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: UploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, join_endpoint(&self.base, path)?);
        Ok(match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Run a request unless `cancel` fires first.
    ///
    /// Cancellation drops the in-flight future, so nothing from a cancelled
    /// request is ever returned.
    async fn execute_cancellable<T: DeserializeOwned>(
        request: RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ApiError::Cancelled),
            result = Self::execute::<T>(request) => result,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::execute(self.request(Method::GET, path)?).await
    }

    // ========================================================================
    // Health and TRIZ reference data
    // ========================================================================

    pub async fn health(&self) -> Result<serde_json::Value, ApiError> {
        self.get("/health").await
    }

    pub async fn principles(&self) -> Result<Vec<ApiPrinciple>, ApiError> {
        self.get("/triz/principles/").await
    }

    pub async fn principle(&self, id: u64) -> Result<ApiPrinciple, ApiError> {
        self.get(&format!("/triz/principles/{id}/")).await
    }

    pub async fn parameters(&self) -> Result<Vec<ApiParameter>, ApiError> {
        self.get("/triz/parameters/").await
    }

    pub async fn parameter(&self, id: u64) -> Result<ApiParameter, ApiError> {
        self.get(&format!("/triz/parameters/{id}/")).await
    }

    pub async fn matrix(&self) -> Result<Vec<ApiMatrixCell>, ApiError> {
        self.get("/triz/matrix/").await
    }

    /// One matrix cell by official parameter numbers.
    pub async fn matrix_principles(
        &self,
        improving: u32,
        worsening: u32,
    ) -> Result<ApiMatrixCell, ApiError> {
        let request = self
            .request(Method::GET, "/triz/matrix/get_principles/")?
            .query(&[("improving", improving), ("worsening", worsening)]);
        Self::execute(request).await
    }

    // ========================================================================
    // Analysis
    // ========================================================================

    /// Submit a document for analysis.
    ///
    /// The file is re-checked against this client's policy before anything is
    /// sent.
    pub async fn analyze_file(
        &self,
        file: &UploadFile,
        cancel: &CancellationToken,
    ) -> Result<AnalyzeResponse, ApiError> {
        self.policy.validate(&file.candidate)?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.candidate.file_name.clone())
            .mime_str(&file.candidate.mime_type)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let form = Form::new().part("file", part);

        tracing::info!(
            file = %file.candidate.file_name,
            size_bytes = file.candidate.size_bytes,
            "submitting document for analysis"
        );
        let request = self
            .request(Method::POST, "/patents/analyze/")?
            .multipart(form);
        Self::execute_cancellable(request, cancel).await
    }

    /// Analyze a document the service can fetch itself.
    pub async fn analyze_url(
        &self,
        file_url: &str,
        cancel: &CancellationToken,
    ) -> Result<AnalyzeResponse, ApiError> {
        let form = Form::new().text("file_url", file_url.to_string());
        let request = self
            .request(Method::POST, "/patents/analyze/")?
            .multipart(form);
        Self::execute_cancellable(request, cancel).await
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ApiError> {
        self.get(&format!("/{}/", resource.path())).await
    }

    pub async fn fetch<T: DeserializeOwned>(&self, resource: Resource, id: u64) -> Result<T, ApiError> {
        self.get(&format!("/{}/{id}/", resource.path())).await
    }

    pub async fn create<B, T>(&self, resource: Resource, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, &format!("/{}/", resource.path()))?
            .json(body);
        Self::execute(request).await
    }

    pub async fn update<B, T>(&self, resource: Resource, id: u64, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::PUT, &format!("/{}/{id}/", resource.path()))?
            .json(body);
        Self::execute(request).await
    }

    pub async fn delete(&self, resource: Resource, id: u64) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/{}/{id}/", resource.path()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }

    pub async fn patents(&self) -> Result<Vec<Patent>, ApiError> {
        self.list(Resource::Patents).await
    }

    pub async fn patent(&self, id: u64) -> Result<Patent, ApiError> {
        self.fetch(Resource::Patents, id).await
    }

    pub async fn create_patent(&self, patent: &NewPatent) -> Result<Patent, ApiError> {
        self.create(Resource::Patents, patent).await
    }

    /// Create a patent together with its PDF as a multipart upload.
    pub async fn create_patent_with_file(
        &self,
        patent: &NewPatent,
        file: &UploadFile,
    ) -> Result<Patent, ApiError> {
        self.policy.validate(&file.candidate)?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.candidate.file_name.clone())
            .mime_str(&file.candidate.mime_type)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let form = patent
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value))
            .part("pdf_file", part);

        let request = self.request(Method::POST, "/patents/")?.multipart(form);
        Self::execute(request).await
    }

    pub async fn patent_analyses(&self, patent_id: u64) -> Result<Vec<RemoteAnalysis>, ApiError> {
        self.get(&format!("/patents/{patent_id}/analyses/")).await
    }

    pub async fn patent_citations(&self, patent_id: u64) -> Result<Vec<Citation>, ApiError> {
        self.get(&format!("/patents/{patent_id}/citations/")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port.
    async fn serve_once(status: &'static str, body: &'static str) -> ClientConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let reply = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
        });
        ClientConfig::default()
            .with_base_url(format!("http://{addr}/api"))
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_principle_list() {
        let config = serve_once(
            "200 OK",
            r#"[{"id":1,"number":1,"name":"Segmentation","description":"d","examples":"a"}]"#,
        )
        .await;
        let client = TrizApiClient::new(config).unwrap();
        let principles = client.principles().await.unwrap();
        assert_eq!(principles.len(), 1);
        assert_eq!(principles[0].examples, vec!["a"]);
    }

    #[tokio::test]
    async fn not_found_is_a_status_error() {
        let config = serve_once("404 Not Found", r#"{"detail":"Not found."}"#).await;
        let client = TrizApiClient::new(config).unwrap();
        let err = client.principle(99).await.unwrap_err();
        assert!(err.is_not_found(), "got {err:?}");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let config = serve_once("200 OK", r#"{"not":"a list"}"#).await;
        let client = TrizApiClient::new(config).unwrap();
        assert!(matches!(client.parameters().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn cancelled_token_wins_before_any_request() {
        let client = TrizApiClient::new(ClientConfig::default()).unwrap();
        let file = UploadFile::from_bytes("a.pdf", b"%PDF-1.4".to_vec(), client.policy()).unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(matches!(
            client.analyze_file(&file, &cancel).await,
            Err(ApiError::Cancelled)
        ));
    }

    #[test]
    fn unusable_base_url_fails_at_construction() {
        let config = ClientConfig {
            base_url: "http:///api".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            TrizApiClient::new(config),
            Err(ApiError::Config(ConfigError::InvalidBaseUrl(_)))
        ));
    }

    #[tokio::test]
    async fn oversized_file_never_leaves_the_client() {
        let client = TrizApiClient::new(ClientConfig::default())
            .unwrap()
            .with_policy(UploadPolicy {
                max_bytes: 4,
                ..UploadPolicy::default()
            });
        let file = UploadFile {
            candidate: crate::UploadCandidate {
                file_name: "big.pdf".to_string(),
                mime_type: crate::upload::PDF_MIME.to_string(),
                size_bytes: 10,
            },
            bytes: vec![0; 10],
        };
        let err = client
            .analyze_file(&file, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Upload(_)));
    }
}
