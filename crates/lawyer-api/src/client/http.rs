//! reqwest-backed implementation of [`LegalApi`].

use async_trait::async_trait;
use lawyer_common::{new_correlation_id, SessionId};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::types::{
    AskRequest, AskResponse, ClearSessionRequest, DocumentPayload, PermanentUploadResponse,
    TempUploadResponse,
};
use crate::{ApiError, LegalApi};

use super::config::ApiClientConfig;
use super::response::{ask_fallback, network_error, status_error, upload_fallback};

/// HTTP client for the legal-assistant backend.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    config: ApiClientConfig,
    http: reqwest::Client,
}

impl HttpApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        fallback: fn(u16) -> String,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(status_error(response, fallback).await);
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("unexpected response from server: {e}")))
    }

    async fn post_document<T: DeserializeOwned>(
        &self,
        path: &str,
        document: DocumentPayload,
    ) -> Result<T, ApiError> {
        let request_id = new_correlation_id();
        let url = self.config.endpoint(path);
        debug!(
            request_id = %request_id,
            url = %url,
            file = %document.file_name,
            size = document.bytes.len(),
            "uploading document"
        );

        let part = Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str(&document.mime)
            .map_err(|e| ApiError::Config(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .timeout(self.config.upload_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| network_error(e, &self.config.base_url))?;

        let result = self.read_json(response, upload_fallback).await;
        if let Err(ref e) = result {
            warn!(request_id = %request_id, "upload to {path} failed: {e}");
        }
        result
    }
}

#[async_trait]
impl LegalApi for HttpApiClient {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError> {
        let request_id = new_correlation_id();
        debug!(
            request_id = %request_id,
            history = request.chat_history.len(),
            has_session = request.session_id.is_some(),
            "POST /ask"
        );

        let response = self
            .http
            .post(self.config.endpoint("/ask"))
            .timeout(self.config.request_timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| network_error(e, &self.config.base_url))?;

        let result: Result<AskResponse, ApiError> = self.read_json(response, ask_fallback).await;
        match &result {
            Ok(answer) => debug!(
                request_id = %request_id,
                chars = answer.answer.len(),
                "answer received"
            ),
            Err(e) => warn!(request_id = %request_id, "ask failed: {e}"),
        }
        result
    }

    async fn upload_temp(
        &self,
        document: DocumentPayload,
    ) -> Result<TempUploadResponse, ApiError> {
        self.post_document("/upload-temp", document).await
    }

    async fn upload_permanent(
        &self,
        document: DocumentPayload,
    ) -> Result<PermanentUploadResponse, ApiError> {
        self.post_document("/upload-permanent", document).await
    }

    async fn clear_session(&self, session_id: &SessionId) -> Result<(), ApiError> {
        debug!(session = %session_id.short(), "POST /clear-session");
        let body = ClearSessionRequest {
            session_id: session_id.clone(),
        };
        let response = self
            .http
            .post(self.config.endpoint("/clear-session"))
            .timeout(self.config.request_timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| network_error(e, &self.config.base_url))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(status_error(response, upload_fallback).await)
        }
    }
}
