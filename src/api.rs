//! `reqwest` transport for the grading server.
//!
//! Authenticates the way a browser tab would: the `sessionid` and CSRF
//! cookies ride in a default `Cookie` header, and the CSRF token is repeated
//! in the `X-CSRFToken` header on every request.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use navigator::api::{ApiError, ExamApi};
use navigator::consts::CSRF_COOKIE_NAME;
use navigator::paper::PaperId;
use navigator::wire::{AiReply, AiRequest, AnswerSubmission, PaperRequest, Reply, decode_reply};
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::CliError;

pub const SESSION_COOKIE_NAME: &str = "sessionid";

/// `X-CSRFToken`, lowercased for `HeaderName::from_static`.
const CSRF_HEADER: &str = "x-csrftoken";

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpApi {
    /// # Errors
    ///
    /// Fails if a credential is not a valid header value or the client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self, CliError> {
        let client = reqwest::Client::builder()
            .default_headers(default_headers(&config)?)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Post the whole answer sheet as the exam page's native form would.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::FormRejected`] on a non-success, non-redirect status.
    pub async fn submit_form(&self, paper_id: &PaperId, answers_json: &str) -> Result<(), CliError> {
        let url = self.config.url(&self.config.endpoints.exam_form_for(paper_id));
        let response = self
            .client
            .post(&url)
            .form(&[("paper_id", paper_id.as_str()), ("answers", answers_json)])
            .send()
            .await?;
        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(CliError::FormRejected(status.as_u16()));
        }
        info!(%paper_id, status = status.as_u16(), "answer sheet posted");
        Ok(())
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        decode_reply(status, &text)
    }
}

#[async_trait(?Send)]
impl ExamApi for HttpApi {
    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<Reply, ApiError> {
        self.post_json(&self.config.endpoints.submit_answer, submission).await
    }

    async fn complete_exam(&self, paper_id: &PaperId) -> Result<Reply, ApiError> {
        let body = PaperRequest { paper_id: paper_id.clone() };
        self.post_json(&self.config.endpoints.complete_exam, &body).await
    }

    async fn end_exam(&self, paper_id: &PaperId) -> Result<Reply, ApiError> {
        let body = PaperRequest { paper_id: paper_id.clone() };
        self.post_json(&self.config.endpoints.end_exam, &body).await
    }

    async fn ask_ai(&self, request: &AiRequest) -> Result<AiReply, ApiError> {
        self.post_json(&self.config.endpoints.ask_ai, request).await
    }
}

fn default_headers(config: &ClientConfig) -> Result<HeaderMap, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = cookie_header(config) {
        headers.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    if let Some(token) = &config.csrf_token {
        headers.insert(HeaderName::from_static(CSRF_HEADER), HeaderValue::from_str(token)?);
    }
    Ok(headers)
}

/// `Cookie` header value for the configured credentials, if any.
#[must_use]
pub fn cookie_header(config: &ClientConfig) -> Option<String> {
    let parts: Vec<String> = [
        config.session_id.as_deref().map(|v| format!("{SESSION_COOKIE_NAME}={v}")),
        config.csrf_token.as_deref().map(|v| format!("{CSRF_COOKIE_NAME}={v}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!parts.is_empty()).then(|| parts.join("; "))
}
