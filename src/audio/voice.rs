// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Single sine voice with a short attack/release ramp.

use std::f64::consts::TAU;
use std::time::Duration;

/// Ramp length in seconds (attack and release)
const RAMP_SECONDS: f64 = 0.005;

/// Monophonic sine voice
#[derive(Debug, Clone)]
pub struct ToneVoice {
    sample_rate: u32,
    volume: f32,
    frequency: f64,
    phase: f64,
    /// Samples rendered since the tone started
    position: u64,
    /// Total samples in the current tone (0 = silent)
    length: u64,
}

impl ToneVoice {
    /// Create a silent voice
    pub fn new(sample_rate: u32, volume: f32) -> Self {
        Self {
            sample_rate: sample_rate.max(1),
            volume: volume.clamp(0.0, 1.0),
            frequency: 0.0,
            phase: 0.0,
            position: 0,
            length: 0,
        }
    }

    /// Start a tone
    pub fn trigger(&mut self, frequency: f64, duration: Duration) {
        self.frequency = frequency;
        self.phase = 0.0;
        self.position = 0;
        self.length = (duration.as_secs_f64() * self.sample_rate as f64).round() as u64;
    }

    /// Check if a tone is sounding
    pub fn is_active(&self) -> bool {
        self.position < self.length
    }

    /// Add the voice into an interleaved buffer
    pub fn render(&mut self, buffer: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let step = TAU * self.frequency / self.sample_rate as f64;

        for frame in buffer.chunks_mut(channels) {
            if !self.is_active() {
                break;
            }
            let sample = (self.phase.sin() * self.envelope()) as f32 * self.volume;
            for out in frame.iter_mut() {
                *out += sample;
            }
            self.phase = (self.phase + step) % TAU;
            self.position += 1;
        }
    }

    fn envelope(&self) -> f64 {
        let ramp = (RAMP_SECONDS * self.sample_rate as f64).max(1.0);
        let from_start = self.position as f64 / ramp;
        let to_end = (self.length - self.position) as f64 / ramp;
        from_start.min(to_end).min(1.0)
    }
}
