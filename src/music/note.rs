// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note identifiers, pitch values and display decomposition.
//!
//! A note identifier is a string token `{letter}{accidental?}{octave}`
//! such as `"Eb4"`. Pitch values use MIDI numbering, so `"C4"` is 60.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Semitone index (MIDI numbering, C4 = 60)
pub type Pitch = u32;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Parse a letter, ignoring case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Pitch class of the natural note (0-11)
    pub fn semitone(self) -> u32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Diatonic step within the octave (C = 0 .. B = 6)
    pub fn step(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Uppercase character
    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Accidental attached to a note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accidental {
    #[default]
    Natural,
    Flat,
    Sharp,
}

impl Accidental {
    /// Token used in note identifiers ("", "b" or "#")
    pub fn as_str(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Flat => "b",
            Accidental::Sharp => "#",
        }
    }

    /// Whether a glyph must be drawn next to the note head
    pub fn is_marked(self) -> bool {
        self != Accidental::Natural
    }
}

/// Staff clef used to display an instrument's notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clef {
    Treble,
    Bass,
}

impl Clef {
    /// Octave offset applied to displayed notes.
    ///
    /// Middle C is written as octave 4 on the treble staff and octave 3
    /// on the bass staff.
    pub fn display_octave_offset(self) -> i32 {
        match self {
            Clef::Treble => 0,
            Clef::Bass => -1,
        }
    }

    /// Name for display
    pub fn name(self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
        }
    }
}

/// A parsed note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    pub letter: Letter,
    pub accidental: Accidental,
    pub octave: u32,
}

impl NoteName {
    /// Parse `{letter}{accidental?}{octave}` strictly.
    ///
    /// The whole token must match; surrounding whitespace, double
    /// accidentals and negative octaves are rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || QuizError::InvalidFormat(s.to_string());

        let mut chars = s.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;

        let rest = chars.as_str();
        let (accidental, digits) = match rest.chars().next() {
            Some('b') => (Accidental::Flat, &rest[1..]),
            Some('#') => (Accidental::Sharp, &rest[1..]),
            _ => (Accidental::Natural, rest),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let octave = digits.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self { letter, accidental, octave })
    }

    /// Pitch class (0-11), or `None` for spellings outside the chromatic map
    pub fn pitch_class(&self) -> Option<u32> {
        match (self.letter, self.accidental) {
            (letter, Accidental::Natural) => Some(letter.semitone()),
            (Letter::C | Letter::D | Letter::F | Letter::G | Letter::A, Accidental::Sharp) => {
                Some(self.letter.semitone() + 1)
            }
            (Letter::D | Letter::E | Letter::G | Letter::A | Letter::B, Accidental::Flat) => {
                Some(self.letter.semitone() - 1)
            }
            // Cb, Fb, E#, B#
            _ => None,
        }
    }

    /// Pitch value of this note
    pub fn pitch(&self) -> Result<Pitch> {
        let invalid = || QuizError::InvalidFormat(self.to_string());
        let semitone = self.pitch_class().ok_or_else(invalid)?;
        self.octave
            .checked_add(1)
            .and_then(|o| o.checked_mul(12))
            .and_then(|base| base.checked_add(semitone))
            .ok_or_else(invalid)
    }

    /// Decompose for display on the given clef
    pub fn display(&self, clef: Clef) -> Result<DisplayNote> {
        let octave = i32::try_from(self.octave)
            .ok()
            .and_then(|o| o.checked_add(clef.display_octave_offset()))
            .ok_or_else(|| QuizError::InvalidFormat(self.to_string()))?;

        Ok(DisplayNote {
            letter: self.letter,
            accidental: self.accidental,
            octave,
        })
    }
}

impl FromStr for NoteName {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter.as_char(), self.accidental.as_str(), self.octave)
    }
}

/// Note components as written on a staff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayNote {
    pub letter: Letter,
    pub accidental: Accidental,
    /// Octave after the clef's display offset
    pub octave: i32,
}

impl DisplayNote {
    /// Lowercase letter, as notation renderers expect
    pub fn base(&self) -> char {
        self.letter.as_char().to_ascii_lowercase()
    }

    /// Renderer key such as `"eb/3"`
    pub fn key(&self) -> String {
        format!("{}{}/{}", self.base(), self.accidental.as_str(), self.octave)
    }

    /// Absolute diatonic step (octave * 7 + letter step)
    pub fn staff_step(&self) -> i32 {
        self.octave.saturating_mul(7).saturating_add(self.letter.step())
    }
}

/// Convert a note identifier to its pitch value
pub fn note_to_pitch(note: &str) -> Result<Pitch> {
    NoteName::parse(note)?.pitch()
}

/// Decompose a note identifier for display on a clef.
///
/// The clef offset is a display concern only; pitch and range checks
/// always use [`note_to_pitch`].
pub fn parse_for_display(note: &str, clef: Clef) -> Result<DisplayNote> {
    NoteName::parse(note)?.display(clef)
}

/// Inclusive range of pitch values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchRange {
    pub min: Pitch,
    pub max: Pitch,
}

impl PitchRange {
    /// Create a range
    pub const fn new(min: Pitch, max: Pitch) -> Self {
        Self { min, max }
    }

    /// Whether a pitch lies within the range (inclusive)
    pub fn contains(&self, pitch: Pitch) -> bool {
        pitch >= self.min && pitch <= self.max
    }
}
