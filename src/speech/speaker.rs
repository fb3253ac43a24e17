use anyhow::{Context, Result, bail};
use tokio::process::Command;

use crate::config::ResolvedSpeech;

/// Speaks text through a local text-to-speech program such as `say` or `espeak-ng`.
#[derive(Debug, Clone)]
pub struct LocalSpeaker {
    program: String,
    args: Vec<String>,
}

impl LocalSpeaker {
    pub const fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    pub fn from_config(speech: &ResolvedSpeech) -> Self {
        Self::new(speech.tts_command.clone(), speech.tts_args.clone())
    }

    /// Speaks `text` and waits until playback has finished.
    pub async fn speak(&self, text: &str) -> Result<()> {
        tracing::debug!(program = %self.program, "speaking translation");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .status()
            .await
            .with_context(|| {
                format!(
                    "Failed to start text-to-speech program '{}'",
                    self.program
                )
            })?;

        if !status.success() {
            bail!(
                "Text-to-speech program '{}' exited with {status}",
                self.program
            );
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_speak_waits_for_success() {
        let speaker = LocalSpeaker::new("true".to_string(), vec![]);
        assert!(speaker.speak("hola").await.is_ok());
    }

    #[tokio::test]
    async fn test_speak_reports_failure_status() {
        let speaker = LocalSpeaker::new("false".to_string(), vec![]);
        let Err(err) = speaker.speak("hola").await else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("exited with"));
    }

    #[tokio::test]
    async fn test_speak_missing_program() {
        let speaker = LocalSpeaker::new("lingua-no-such-tts-program".to_string(), vec![]);
        let Err(err) = speaker.speak("hola").await else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Failed to start"));
    }

    #[tokio::test]
    async fn test_speak_passes_args_before_text() {
        // `test hola = hola` succeeds only if the text lands after the args
        let speaker = LocalSpeaker::new(
            "test".to_string(),
            vec!["hola".to_string(), "=".to_string()],
        );
        assert!(speaker.speak("hola").await.is_ok());
    }
}
