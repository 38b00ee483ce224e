// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Audio output via cpal.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Stream, StreamConfig};
use tracing::{error, warn};

use super::AudioError;

/// Audio output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of output channels
    pub channels: u16,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
        }
    }
}

/// Audio output stream
pub struct AudioOutput {
    /// cpal stream, stops when dropped
    _stream: Stream,
    /// Configuration actually in use
    config: AudioConfig,
}

impl AudioOutput {
    /// Open the default output device and start a stream that calls
    /// `callback` with a zeroed interleaved buffer and the channel count.
    pub fn new<F>(config: AudioConfig, mut callback: F) -> Result<Self, AudioError>
    where
        F: FnMut(&mut [f32], usize) + Send + 'static,
    {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or(AudioError::NoDevice)?;

        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::InitFailed(format!("Failed to get default config: {}", e)))?;

        // Follow the device's channel layout; keep the requested rate
        let config = AudioConfig {
            channels: supported.channels(),
            ..config
        };
        if supported.sample_rate().0 != config.sample_rate {
            warn!(
                requested = config.sample_rate,
                device = supported.sample_rate().0,
                "Sample rate differs from device default"
            );
        }

        let stream_config = StreamConfig {
            channels: config.channels,
            sample_rate: cpal::SampleRate(config.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let channels = config.channels as usize;

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    data.fill(0.0);
                    callback(data, channels);
                },
                move |err| {
                    error!(%err, "Audio stream error");
                },
                None,
            )
            .map_err(|e| AudioError::StreamFailed(format!("Failed to build stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamFailed(format!("Failed to start stream: {}", e)))?;

        Ok(Self {
            _stream: stream,
            config,
        })
    }

    /// Get current configuration
    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    /// Get sample rate
    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    /// Get number of channels
    pub fn channels(&self) -> u16 {
        self.config.channels
    }
}
