//! Where speech audio comes from: the default microphone or a file on disk.

use std::path::PathBuf;
use std::time::Duration;

use super::audio::AudioClip;
use super::error::SpeechError;

/// A blocking producer of one clip of speech.
pub trait AudioSource {
    /// Blocks until a clip is available.
    fn record(self) -> Result<AudioClip, SpeechError>;
}

/// A pre-recorded audio file, uploaded as-is.
#[derive(Debug, Clone)]
pub struct AudioFile {
    path: PathBuf,
}

impl AudioFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AudioSource for AudioFile {
    fn record(self) -> Result<AudioClip, SpeechError> {
        AudioClip::from_file(&self.path)
    }
}

/// Settings for capturing one utterance from the default input device.
#[derive(Debug, Clone)]
pub struct Microphone {
    pub calibration: Duration,
    pub pause: Duration,
    pub max_utterance: Duration,
}

#[cfg(not(feature = "microphone"))]
impl AudioSource for Microphone {
    fn record(self) -> Result<AudioClip, SpeechError> {
        Err(SpeechError::Capture(
            "microphone support is not compiled in (rebuild with `--features microphone`)"
                .to_string(),
        ))
    }
}

#[cfg(feature = "microphone")]
impl AudioSource for Microphone {
    fn record(self) -> Result<AudioClip, SpeechError> {
        capture::record_utterance(&self)
    }
}

#[cfg(feature = "microphone")]
mod capture {
    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use std::sync::mpsc;

    use super::Microphone;
    use crate::speech::audio::AudioClip;
    use crate::speech::error::SpeechError;
    use crate::speech::utterance::{UtteranceDetector, downmix};

    fn capture_error(e: impl std::fmt::Display) -> SpeechError {
        SpeechError::Capture(e.to_string())
    }

    /// Calibrates against ambient noise, then blocks until one utterance ends.
    pub(super) fn record_utterance(mic: &Microphone) -> Result<AudioClip, SpeechError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| capture_error("no input device found on the default audio host"))?;

        let supported = device.default_input_config().map_err(capture_error)?;
        let channels = supported.channels();
        let sample_rate = supported.sample_rate().0;
        let config: cpal::StreamConfig = supported.into();

        let (tx, rx) = mpsc::channel::<Vec<f32>>();
        let stream = device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    // The receiver may already be gone once the utterance is complete
                    let _ = tx.send(data.to_vec());
                },
                |err: cpal::StreamError| {
                    tracing::error!("input stream error: {err}");
                },
                None,
            )
            .map_err(capture_error)?;
        stream.play().map_err(capture_error)?;

        tracing::debug!(sample_rate, channels, "microphone stream started");

        let calibration_samples =
            (u128::from(sample_rate) * mic.calibration.as_millis() / 1000) as usize;
        let mut ambient = Vec::with_capacity(calibration_samples);
        while ambient.len() < calibration_samples {
            let chunk = rx.recv().map_err(capture_error)?;
            ambient.extend(downmix(&chunk, channels));
        }

        let mut detector = UtteranceDetector::new(sample_rate, mic.pause, mic.max_utterance);
        detector.calibrate(&ambient);

        crate::status!("Listening...");

        loop {
            let chunk = rx.recv().map_err(capture_error)?;
            if detector.push(&downmix(&chunk, channels)) {
                break;
            }
        }
        drop(stream);

        let samples = detector.into_utterance();
        tracing::debug!(samples = samples.len(), "utterance captured");
        Ok(AudioClip::from_samples(&samples, sample_rate))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_audio_file_source_reads_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hello.wav");
        std::fs::write(&path, b"RIFF").unwrap();

        let clip = AudioFile::new(&path).record().unwrap();
        assert_eq!(clip.bytes, b"RIFF");
        assert_eq!(clip.mime_type, "audio/wav");
    }

    #[cfg(not(feature = "microphone"))]
    #[test]
    fn test_microphone_without_feature_is_capture_error() {
        let mic = Microphone {
            calibration: Duration::from_millis(10),
            pause: Duration::from_millis(10),
            max_utterance: Duration::from_secs(1),
        };
        assert!(matches!(mic.record(), Err(SpeechError::Capture(_))));
    }
}
