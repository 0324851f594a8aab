//! Grading server calls from the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin so the
//! session cookie rides along, with the CSRF token in `X-CSRFToken`.
//! Native builds and tests: every call fails with [`ApiError::Request`]
//! since these endpoints are only reachable from a page.
//!
//! ERROR HANDLING
//! ==============
//! Replies are decoded from the body first (`decode_reply`) so the server's
//! `{status: "error", message}` bodies surface even on 4xx responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use navigator::api::{ApiError, ExamApi};
use navigator::paper::PaperId;
use navigator::wire::{AiReply, AiRequest, AnswerSubmission, Endpoints, PaperRequest, Reply};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available outside the browser";

#[derive(Clone, Debug, Default)]
pub struct GlooApi {
    endpoints: Endpoints,
    csrf_token: Option<String>,
}

impl GlooApi {
    pub fn new(endpoints: Endpoints, csrf_token: Option<String>) -> Self {
        Self { endpoints, csrf_token }
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::post(path);
            if let Some(token) = &self.csrf_token {
                request = request.header(navigator::consts::CSRF_HEADER_NAME, token);
            }
            let response = request
                .json(body)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let status = response.status();
            let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
            navigator::wire::decode_reply(status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, &self.csrf_token);
            Err(ApiError::Request(UNAVAILABLE.to_owned()))
        }
    }
}

#[async_trait(?Send)]
impl ExamApi for GlooApi {
    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<Reply, ApiError> {
        self.post_json(&self.endpoints.submit_answer, submission).await
    }

    async fn complete_exam(&self, paper_id: &PaperId) -> Result<Reply, ApiError> {
        let body = PaperRequest { paper_id: paper_id.clone() };
        self.post_json(&self.endpoints.complete_exam, &body).await
    }

    async fn end_exam(&self, paper_id: &PaperId) -> Result<Reply, ApiError> {
        let body = PaperRequest { paper_id: paper_id.clone() };
        self.post_json(&self.endpoints.end_exam, &body).await
    }

    async fn ask_ai(&self, request: &AiRequest) -> Result<AiReply, ApiError> {
        self.post_json(&self.endpoints.ask_ai, request).await
    }
}
