// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Control system for keyboard input.
//!
//! This module provides:
//! - The set of player actions the quiz understands
//! - Keyboard shortcut handling with a help listing

pub mod keyboard;

pub use keyboard::{format_shortcut, KeyBinding, KeyboardController, Shortcut};

/// Action that can be triggered by controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    // Answer input
    /// Toggle valve 0-2
    ToggleValve(usize),
    /// Set slide position 1-7
    SetSlide(u8),
    /// Check the candidate fingering
    Submit,

    // Session
    /// Start a session
    Begin,
    /// Start over
    Restart,
    /// End the running session
    End,

    // Selectors
    /// Switch to the next instrument
    CycleInstrument,
    /// Switch between beginner and advanced
    ToggleDifficulty,
    /// Switch between timed and practice
    ToggleTiming,

    // UI
    /// Toggle help display
    ToggleHelp,
    /// Quit application
    Quit,
}
