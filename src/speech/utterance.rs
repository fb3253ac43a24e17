//! Energy-based utterance segmentation.
//!
//! Audio is processed in 30 ms frames. A frame is *voiced* when its RMS
//! amplitude exceeds the energy threshold, which is calibrated from a short
//! sample of ambient noise. An utterance begins at the first voiced frame and
//! ends once the speaker has been silent for the pause duration, or when the
//! maximum utterance length is reached.

use std::time::Duration;

/// Threshold used before calibration, and the floor calibration never goes below.
pub const MIN_ENERGY_THRESHOLD: f32 = 0.01;

/// Ambient RMS is scaled by this factor so steady background noise stays silent.
pub const AMBIENT_MULTIPLIER: f32 = 1.5;

const FRAME_MS: u64 = 30;

/// Downmixes interleaved samples to mono by averaging channels.
pub fn downmix(samples: &[f32], channels: u16) -> Vec<f32> {
    let channels = usize::from(channels.max(1));
    if channels == 1 {
        return samples.to_vec();
    }

    samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

/// Root-mean-square amplitude of a block of samples.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let mean_square = samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32;
    mean_square.sqrt()
}

/// Segments a live mono sample stream into a single utterance.
#[derive(Debug)]
pub struct UtteranceDetector {
    energy_threshold: f32,
    frame_len: usize,
    pause_frames: usize,
    max_frames: usize,
    pending: Vec<f32>,
    captured: Vec<f32>,
    captured_frames: usize,
    silent_run: usize,
    complete: bool,
}

impl UtteranceDetector {
    pub fn new(sample_rate: u32, pause: Duration, max_utterance: Duration) -> Self {
        let frame_len = ((u64::from(sample_rate) * FRAME_MS / 1000) as usize).max(1);
        let frames_in = |d: Duration| (d.as_millis() as u64).div_ceil(FRAME_MS).max(1) as usize;

        Self {
            energy_threshold: MIN_ENERGY_THRESHOLD,
            frame_len,
            pause_frames: frames_in(pause),
            max_frames: frames_in(max_utterance),
            pending: Vec::new(),
            captured: Vec::new(),
            captured_frames: 0,
            silent_run: 0,
            complete: false,
        }
    }

    /// Sets the energy threshold from a sample of ambient noise.
    pub fn calibrate(&mut self, ambient: &[f32]) {
        self.energy_threshold = (rms(ambient) * AMBIENT_MULTIPLIER).max(MIN_ENERGY_THRESHOLD);
        tracing::debug!(threshold = self.energy_threshold, "calibrated energy threshold");
    }

    pub const fn energy_threshold(&self) -> f32 {
        self.energy_threshold
    }

    /// Returns `true` once speech has started.
    pub const fn is_speaking(&self) -> bool {
        self.captured_frames > 0
    }

    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Feeds mono samples; returns `true` when the utterance is complete.
    ///
    /// Samples pushed after completion are ignored.
    pub fn push(&mut self, samples: &[f32]) -> bool {
        if self.complete {
            return true;
        }

        self.pending.extend_from_slice(samples);

        let mut consumed = 0;
        while self.pending.len() - consumed >= self.frame_len {
            let frame = &self.pending[consumed..consumed + self.frame_len];
            consumed += self.frame_len;

            let voiced = rms(frame) > self.energy_threshold;
            if !self.is_speaking() && !voiced {
                continue;
            }

            self.captured.extend_from_slice(frame);
            self.captured_frames += 1;
            self.silent_run = if voiced { 0 } else { self.silent_run + 1 };

            if self.silent_run >= self.pause_frames || self.captured_frames >= self.max_frames {
                self.complete = true;
                break;
            }
        }

        self.pending.drain(..consumed);
        self.complete
    }

    /// Consumes the detector and returns the utterance without its trailing silence.
    pub fn into_utterance(mut self) -> Vec<f32> {
        let trailing = self.silent_run * self.frame_len;
        self.captured.truncate(self.captured.len().saturating_sub(trailing));
        self.captured
    }
}
