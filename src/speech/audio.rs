//! Encoded audio ready for upload, and the WAV encoder for captured samples.

use std::fs;
use std::path::Path;

use super::error::SpeechError;

const BITS_PER_SAMPLE: u16 = 16;
const CHANNELS: u16 = 1;

/// An encoded audio file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    /// File name sent with the upload; services use its extension as a format hint.
    pub file_name: String,
    pub mime_type: &'static str,
}

impl AudioClip {
    /// Encodes mono `f32` samples in `[-1.0, 1.0]` as a 16-bit PCM WAV clip.
    pub fn from_samples(samples: &[f32], sample_rate: u32) -> Self {
        Self {
            bytes: encode_wav(samples, sample_rate),
            file_name: "utterance.wav".to_string(),
            mime_type: "audio/wav",
        }
    }

    /// Reads an audio file from disk without decoding it.
    pub fn from_file(path: &Path) -> Result<Self, SpeechError> {
        let bytes = fs::read(path)
            .map_err(|e| SpeechError::Capture(format!("{}: {e}", path.display())))?;

        if bytes.is_empty() {
            return Err(SpeechError::Capture(format!(
                "{}: audio file is empty",
                path.display()
            )));
        }

        let file_name = path
            .file_name()
            .map_or_else(|| "audio".to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self {
            bytes,
            mime_type: mime_type_for(path),
            file_name,
        })
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3" | "mpga" | "mpeg") => "audio/mpeg",
        Some("m4a" | "mp4") => "audio/mp4",
        Some("ogg" | "opus") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

/// Encodes mono samples as a RIFF/WAVE byte buffer.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_len = (samples.len() * usize::from(block_align)) as u32;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        wav.extend_from_slice(&pcm.to_le_bytes());
    }

    wav
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_encode_wav_header() {
        let wav = encode_wav(&[0.0; 160], 16_000);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(wav.len(), 44 + 320);
        assert_eq!(u32_at(&wav, 4), 36 + 320);
        assert_eq!(u32_at(&wav, 24), 16_000);
        assert_eq!(u32_at(&wav, 28), 32_000);
        assert_eq!(u32_at(&wav, 40), 320);
    }

    #[test]
    fn test_encode_wav_clamps_samples() {
        let wav = encode_wav(&[2.0, -2.0], 8_000);
        let first = i16::from_le_bytes([wav[44], wav[45]]);
        let second = i16::from_le_bytes([wav[46], wav[47]]);
        assert_eq!(first, i16::MAX);
        assert_eq!(second, -i16::MAX);
    }

    #[test]
    fn test_from_file_keeps_name_and_guesses_mime() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("question.MP3");
        fs::write(&path, [1u8, 2, 3]).unwrap();

        let clip = AudioClip::from_file(&path).unwrap();

        assert_eq!(clip.file_name, "question.MP3");
        assert_eq!(clip.mime_type, "audio/mpeg");
        assert_eq!(clip.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_file_missing_is_capture_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = AudioClip::from_file(&temp_dir.path().join("nope.wav")).unwrap_err();
        assert!(matches!(err, SpeechError::Capture(_)));
    }

    #[test]
    fn test_from_file_empty_is_capture_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.wav");
        fs::write(&path, []).unwrap();

        let err = AudioClip::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
