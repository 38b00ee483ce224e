// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session timing: countdown clock, timing modes and session epochs.
//!
//! Work scheduled on behalf of a session (countdown ticks, the delayed
//! draw after a correct answer) carries the session's epoch. Starting or
//! ending a session advances the epoch, which turns any such work stale.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{QuizError, Result};

/// Timed sessions end when the countdown reaches zero; practice
/// sessions run until the player ends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimingMode {
    #[default]
    Timed,
    Practice,
}

impl TimingMode {
    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            TimingMode::Timed => "timed",
            TimingMode::Practice => "practice",
        }
    }

    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            TimingMode::Timed => TimingMode::Practice,
            TimingMode::Practice => TimingMode::Timed,
        }
    }
}

impl FromStr for TimingMode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "timed" => Ok(TimingMode::Timed),
            "practice" => Ok(TimingMode::Practice),
            _ => Err(QuizError::UnknownTimingMode(s.to_string())),
        }
    }
}

impl fmt::Display for TimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Monotonic countdown in whole time units (seconds in the app)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    length: u32,
    remaining: u32,
}

impl Countdown {
    /// Create a full countdown
    pub fn new(length: u32) -> Self {
        Self { length, remaining: length }
    }

    /// Units left
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Configured length
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Check if the countdown has run out
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Restore the full length
    pub fn reset(&mut self) {
        self.remaining = self.length;
    }

    /// Count down one unit. Returns true once the countdown is at zero.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_expired()
    }
}

/// Session identity used to discard stale scheduled work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Epoch(u64);

impl Epoch {
    /// Move to the next epoch
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Raw value
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Handle for the delayed draw that follows a correct answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawTicket {
    /// Epoch of the session that issued the ticket
    pub epoch: Epoch,
    /// How long to hold the feedback before drawing
    pub delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_mode_from_str() {
        assert_eq!("timed".parse::<TimingMode>(), Ok(TimingMode::Timed));
        assert_eq!("Practice".parse::<TimingMode>(), Ok(TimingMode::Practice));
        assert!(matches!(
            "blitz".parse::<TimingMode>(),
            Err(QuizError::UnknownTimingMode(_))
        ));
        assert_eq!(TimingMode::Timed.toggle(), TimingMode::Practice);
    }

    #[test]
    fn test_countdown() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.remaining(), 3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert!(countdown.is_expired());

        // Saturates at zero
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);

        countdown.reset();
        assert_eq!(countdown.remaining(), 3);
        assert_eq!(countdown.length(), 3);
    }

    #[test]
    fn test_epoch_advance() {
        let mut epoch = Epoch::default();
        let first = epoch;
        epoch.advance();
        assert_ne!(first, epoch);
        assert!(epoch > first);
        assert_eq!(epoch.value(), 1);
    }
}
