use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

use super::audio::AudioClip;
use super::error::SpeechError;

/// Converts one clip of speech into text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, clip: &AudioClip) -> Result<String, SpeechError>;
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
}

/// Speech-to-text through an OpenAI-compatible `audio/transcriptions` endpoint.
pub struct CloudRecognizer {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    /// ISO 639-1 hint for the spoken language.
    language: Option<String>,
}

impl CloudRecognizer {
    pub fn new(
        endpoint: String,
        api_key: String,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<Self, SpeechError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SpeechError::RecognitionServiceError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            model,
            language: None,
        })
    }

    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn transcriptions_url(&self) -> String {
        format!(
            "{}/v1/audio/transcriptions",
            self.endpoint.trim_end_matches('/')
        )
    }

    fn build_form(&self, clip: &AudioClip) -> Result<Form, SpeechError> {
        let file = Part::bytes(clip.bytes.clone())
            .file_name(clip.file_name.clone())
            .mime_str(clip.mime_type)
            .map_err(|e| SpeechError::RecognitionServiceError(e.to_string()))?;

        let mut form = Form::new()
            .part("file", file)
            .text("model", self.model.clone())
            .text("response_format", "json");

        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        Ok(form)
    }
}

#[async_trait]
impl SpeechRecognizer for CloudRecognizer {
    async fn recognize(&self, clip: &AudioClip) -> Result<String, SpeechError> {
        let url = self.transcriptions_url();
        tracing::debug!(
            url = %url,
            model = %self.model,
            bytes = clip.bytes.len(),
            "sending transcription request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(self.build_form(clip)?)
            .send()
            .await
            .map_err(|e| SpeechError::RecognitionServiceError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::RecognitionServiceError(e.to_string()))?;

        if !status.is_success() {
            return Err(SpeechError::RecognitionServiceError(format!(
                "status {status}: {body}"
            )));
        }

        parse_transcription(&body)
    }
}

/// Extracts the transcript from a transcription response body.
pub(crate) fn parse_transcription(body: &str) -> Result<String, SpeechError> {
    let response: TranscriptionResponse = serde_json::from_str(body)
        .map_err(|e| SpeechError::RecognitionServiceError(format!("invalid response: {e}")))?;

    let text = response.text.ok_or_else(|| {
        SpeechError::RecognitionServiceError("response has no text field".to_string())
    })?;

    let text = text.trim();
    if text.is_empty() {
        return Err(SpeechError::UnintelligibleAudio);
    }

    Ok(text.to_string())
}
