// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the fingering drill core.

use thiserror::Error;

/// Errors raised by the note utilities, catalog lookups and quiz session.
///
/// Every variant is recoverable: the session reports it as feedback and
/// keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Note identifier did not match `{letter}{accidental?}{octave}`
    #[error("Invalid note format: {0:?}")]
    InvalidFormat(String),

    /// Instrument name not in the catalog
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    /// Difficulty name not in the catalog
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Timing mode name not recognised
    #[error("Unknown timing mode: {0}")]
    UnknownTimingMode(String),

    /// Current note has no accepted fingerings in the active catalog
    #[error("No fingering data for note {note}")]
    MissingFingeringData { note: String },

    /// No notes are eligible for the instrument and difficulty
    #[error("No notes available for {instrument} in {difficulty} mode")]
    EmptyPool { instrument: String, difficulty: String },

    /// `begin` called while a session is already running
    #[error("Session is already active")]
    SessionActive,

    /// Operation requires an active session
    #[error("Session is not active")]
    SessionInactive,

    /// Submit with no note on screen
    #[error("No current note")]
    NoCurrentNote,

    /// Submit after a correct answer, before the next note was drawn
    #[error("Waiting for the next note")]
    AwaitingNextNote,
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QuizError::InvalidFormat("H4".to_string());
        assert_eq!(err.to_string(), "Invalid note format: \"H4\"");

        let err = QuizError::EmptyPool {
            instrument: "Tuba".to_string(),
            difficulty: "beginner".to_string(),
        };
        assert_eq!(err.to_string(), "No notes available for Tuba in beginner mode");

        let err = QuizError::MissingFingeringData { note: "Gb2".to_string() };
        assert!(err.to_string().contains("Gb2"));
    }
}
