// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note utilities for the fingering drill.
//!
//! This module converts note identifiers into pitch values and splits
//! them into the components a notation renderer needs.

pub mod note;

pub use note::{
    note_to_pitch, parse_for_display, Accidental, Clef, DisplayNote, Letter, NoteName, Pitch,
    PitchRange,
};
