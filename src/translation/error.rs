use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single translation round-trip.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Failed to reach translation endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("Translation API request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The body was not a chat completion or lacked the completion text.
    #[error("Malformed translation response: {0}")]
    MalformedResponse(String),

    /// The completion was present but blank after trimming.
    #[error("No translation received")]
    EmptyTranslation,
}
