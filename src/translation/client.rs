use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;

use super::error::TranslationError;
use super::prompt::build_system_prompt;

/// One piece of text to translate between two named languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Generation settings applied to every request a client sends.
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

// Borrowed fields avoid cloning the source text just to serialize it
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completion endpoint.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
    options: TranslationOptions,
}

impl TranslationClient {
    /// Creates a client for `endpoint` (the API base, e.g.
    /// `https://api.groq.com/openai`).
    pub fn new(
        endpoint: String,
        api_key: String,
        options: TranslationOptions,
    ) -> Result<Self, TranslationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| TranslationError::Transport {
                url: endpoint.clone(),
                source,
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            options,
        })
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    pub(crate) fn build_body<'a>(
        &'a self,
        request: &'a TranslationRequest,
    ) -> ChatCompletionRequest<'a> {
        let system_prompt =
            build_system_prompt(&request.source_language, &request.target_language);

        ChatCompletionRequest {
            model: &self.options.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.text),
                },
            ],
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
        }
    }

    /// Sends one completion request and returns the trimmed translation.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let url = self.completions_url();
        let body = self.build_body(request);

        tracing::debug!(
            url = %url,
            model = %self.options.model,
            source = %request.source_language,
            target = %request.target_language,
            "sending translation request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| TranslationError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| TranslationError::Transport {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            tracing::debug!(%status, "translation request rejected");
            return Err(TranslationError::Http { status, body: text });
        }

        extract_translation(&text)
    }
}

/// Pulls the first choice's message content out of a completion body.
pub(crate) fn extract_translation(body: &str) -> Result<String, TranslationError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| TranslationError::MalformedResponse("response has no choices".into()))?
        .message
        .content
        .ok_or_else(|| {
            TranslationError::MalformedResponse("first choice has no message content".into())
        })?;

    let translation = content.trim();
    if translation.is_empty() {
        return Err(TranslationError::EmptyTranslation);
    }

    Ok(translation.to_string())
}
