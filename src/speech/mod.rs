//! Speech input and output.
//!
//! Input is one clip of audio (a microphone utterance or a file) sent to a
//! cloud speech-to-text endpoint. Every failure on the input path is reported
//! as a warning and yields an empty transcript. Output runs a local
//! text-to-speech program and blocks until it finishes.

mod audio;
mod error;
mod recognizer;
mod source;
mod speaker;
pub mod utterance;

pub use audio::AudioClip;
pub use error::SpeechError;
pub use recognizer::{CloudRecognizer, SpeechRecognizer};
pub use source::{AudioFile, AudioSource, Microphone};
pub use speaker::LocalSpeaker;

/// Records one clip from `source` and transcribes it.
///
/// Returns an empty string, after printing a warning, if capture or
/// recognition fails.
pub async fn transcribe_or_empty<S>(source: S, recognizer: &dyn SpeechRecognizer) -> String
where
    S: AudioSource + Send + 'static,
{
    let clip = match tokio::task::spawn_blocking(move || source.record()).await {
        Ok(Ok(clip)) => clip,
        Ok(Err(err)) => return degrade(&err),
        Err(join_err) => return degrade(&SpeechError::Capture(join_err.to_string())),
    };

    match recognizer.recognize(&clip).await {
        Ok(text) => text,
        Err(err) => degrade(&err),
    }
}

fn degrade(err: &SpeechError) -> String {
    tracing::debug!(error = ?err, "speech input failed");
    crate::warn!("{err}");
    String::new()
}
