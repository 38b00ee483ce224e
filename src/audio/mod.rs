// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Audio cue for correct answers.
//!
//! This module provides:
//! - A sine tone voice rendered into cpal output buffers
//! - Tone playback behind the [`TonePlayer`] trait
//! - A silent player for `--no-audio` and machines without a device

pub mod output;
pub mod voice;

pub use output::{AudioConfig, AudioOutput};
pub use voice::ToneVoice;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

/// Plays a short tone at a frequency
pub trait TonePlayer {
    /// Start a tone, replacing any tone still sounding
    fn play(&mut self, frequency: f64, duration: Duration) -> Result<(), AudioError>;
}

/// Player that discards every tone
#[derive(Debug, Default)]
pub struct SilentPlayer {
    played: Vec<f64>,
}

impl SilentPlayer {
    /// Create a silent player
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequencies requested so far
    pub fn played(&self) -> &[f64] {
        &self.played
    }
}

impl TonePlayer for SilentPlayer {
    fn play(&mut self, frequency: f64, _duration: Duration) -> Result<(), AudioError> {
        validate_frequency(frequency)?;
        self.played.push(frequency);
        Ok(())
    }
}

/// Tone engine driving a sine voice through the default output device
pub struct ToneEngine {
    voice: Arc<Mutex<ToneVoice>>,
    /// Keeps the stream alive
    output: AudioOutput,
}

impl ToneEngine {
    /// Open the default output device and start the stream
    pub fn start(config: AudioConfig, volume: f32) -> Result<Self, AudioError> {
        let voice = Arc::new(Mutex::new(ToneVoice::new(config.sample_rate, volume)));

        let render_voice = Arc::clone(&voice);
        let output = AudioOutput::new(config, move |buffer, channels| {
            if let Ok(mut voice) = render_voice.lock() {
                voice.render(buffer, channels);
            }
        })?;

        info!(
            sample_rate = output.sample_rate(),
            channels = output.channels(),
            "Audio output started"
        );
        Ok(Self { voice, output })
    }

    /// Output configuration
    pub fn config(&self) -> &AudioConfig {
        self.output.config()
    }
}

impl TonePlayer for ToneEngine {
    fn play(&mut self, frequency: f64, duration: Duration) -> Result<(), AudioError> {
        validate_frequency(frequency)?;
        let mut voice = self.voice.lock().map_err(|_| AudioError::LockFailed)?;
        voice.trigger(frequency, duration);
        debug!(frequency, ms = duration.as_millis() as u64, "Playing tone");
        Ok(())
    }
}

fn validate_frequency(frequency: f64) -> Result<(), AudioError> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(())
    } else {
        Err(AudioError::InvalidFrequency(frequency))
    }
}

/// Audio error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    /// Failed to initialize audio
    #[error("Audio initialization failed: {0}")]
    InitFailed(String),
    /// Failed to start audio stream
    #[error("Audio stream failed: {0}")]
    StreamFailed(String),
    /// Failed to acquire lock
    #[error("Failed to acquire audio lock")]
    LockFailed,
    /// No audio device available
    #[error("No audio device available")]
    NoDevice,
    /// Frequency is not a positive finite number
    #[error("Invalid tone frequency: {0}")]
    InvalidFrequency(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_player_records_tones() {
        let mut player = SilentPlayer::new();
        player.play(440.0, Duration::from_millis(250)).unwrap();
        player.play(261.63, Duration::from_millis(250)).unwrap();
        assert_eq!(player.played(), &[440.0, 261.63]);
    }

    #[test]
    fn test_invalid_frequency() {
        let mut player = SilentPlayer::new();
        assert_eq!(
            player.play(0.0, Duration::from_millis(250)),
            Err(AudioError::InvalidFrequency(0.0))
        );
        assert!(player.play(f64::NAN, Duration::from_millis(250)).is_err());
        assert!(player.played().is_empty());
    }

    #[test]
    fn test_audio_error_display() {
        assert_eq!(AudioError::NoDevice.to_string(), "No audio device available");
        assert!(AudioError::StreamFailed("busy".into()).to_string().contains("busy"));
    }
}
