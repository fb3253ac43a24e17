use thiserror::Error;

/// Failures on the speech input path.
///
/// None of these abort the process: callers report them and continue with an
/// empty transcript.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpeechError {
    /// The audio could not be recorded or read.
    #[error("Could not capture audio: {0}")]
    Capture(String),

    /// The recognizer heard nothing it could turn into words.
    #[error("Could not understand audio")]
    UnintelligibleAudio,

    /// The speech-to-text service was unreachable or rejected the request.
    #[error("Speech recognition service error: {0}")]
    RecognitionServiceError(String),
}
