use navigator::assistant::AskError;
use navigator::draft::DraftError;
use navigator::nav::NavError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("failed to read {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("form submission failed with status {0}")]
    FormRejected(u16),
    #[error(transparent)]
    Nav(#[from] NavError),
    #[error(transparent)]
    Ask(#[from] AskError),
    #[error("draft is invalid: {0}")]
    Draft(#[from] DraftError),
}
