// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fingering catalog for the supported brass instruments.
//!
//! This module provides:
//! - Instrument and difficulty selectors
//! - Fingering patterns (valve states or slide positions)
//! - Per-instrument, per-difficulty catalogs of accepted fingerings
//! - Range filtering to build the pool of eligible notes

pub mod filter;
pub mod tables;

pub use filter::filter_by_range;
pub use tables::{InstrumentProfile, NOTE_FREQUENCIES, PROFILES};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{QuizError, Result};
use crate::music::{Clef, PitchRange};

/// Static table of note identifiers and their accepted fingerings
pub type Table = &'static [(&'static str, &'static [Fingering])];

/// A fingering pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Fingering {
    /// Valve states for valves 1-3 (0 open, 1 pressed, 2 half/alternate)
    Valves([u8; 3]),
    /// Slide position 1-7 (0 = no position selected)
    Slide(u8),
}

impl Fingering {
    /// All valves up
    pub const OPEN_VALVES: Fingering = Fingering::Valves([0, 0, 0]);

    /// Slide with no position chosen
    pub const NO_SLIDE: Fingering = Fingering::Slide(0);

    /// Pattern elements in order
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Fingering::Valves(valves) => valves.as_slice(),
            Fingering::Slide(position) => std::slice::from_ref(position),
        }
    }

    /// Number of elements in the pattern
    pub fn arity(&self) -> usize {
        self.as_slice().len()
    }
}

impl fmt::Display for Fingering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fingering::Valves([a, b, c]) => write!(f, "[{}, {}, {}]", a, b, c),
            Fingering::Slide(0) => write!(f, "[-]"),
            Fingering::Slide(p) => write!(f, "[{}]", p),
        }
    }
}

/// How an instrument changes pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mechanism {
    /// Three piston/rotary valves
    Valves,
    /// Seven-position slide
    Slide,
}

impl Mechanism {
    /// Fingering arity for this mechanism
    pub fn arity(self) -> usize {
        match self {
            Mechanism::Valves => 3,
            Mechanism::Slide => 1,
        }
    }

    /// Neutral input: all valves open, or no slide position selected
    pub fn neutral(self) -> Fingering {
        match self {
            Mechanism::Valves => Fingering::OPEN_VALVES,
            Mechanism::Slide => Fingering::NO_SLIDE,
        }
    }
}

/// Supported instruments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Instrument {
    Trumpet,
    Trombone,
    Euphonium,
    Tuba,
}

impl Instrument {
    /// All instruments in menu order
    pub const ALL: [Instrument; 4] = [
        Instrument::Trumpet,
        Instrument::Trombone,
        Instrument::Euphonium,
        Instrument::Tuba,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Instrument::Trumpet => "Trumpet",
            Instrument::Trombone => "Trombone",
            Instrument::Euphonium => "Euphonium",
            Instrument::Tuba => "Tuba",
        }
    }

    /// Static profile (clef, range, tables)
    pub fn profile(self) -> &'static InstrumentProfile {
        match self {
            Instrument::Trumpet => &PROFILES[0],
            Instrument::Trombone => &PROFILES[1],
            Instrument::Euphonium => &PROFILES[2],
            Instrument::Tuba => &PROFILES[3],
        }
    }

    /// Clef the instrument reads
    pub fn clef(self) -> Clef {
        self.profile().clef
    }

    /// Playable pitch range
    pub fn range(self) -> PitchRange {
        self.profile().range
    }

    /// Valves or slide
    pub fn mechanism(self) -> Mechanism {
        match self {
            Instrument::Trombone => Mechanism::Slide,
            _ => Mechanism::Valves,
        }
    }

    /// Next instrument in menu order (wraps)
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&i| i == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl FromStr for Instrument {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QuizError::UnknownInstrument(s.to_string()))
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Catalog difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Difficulty {
    /// First five notes of the concert Bb scale
    #[default]
    Beginner,
    /// Full range with chromatics
    Advanced,
}

impl Difficulty {
    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Advanced => "advanced",
        }
    }

    /// The other difficulty
    pub fn toggle(self) -> Self {
        match self {
            Difficulty::Beginner => Difficulty::Advanced,
            Difficulty::Advanced => Difficulty::Beginner,
        }
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(QuizError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A note and its accepted fingerings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub note: &'static str,
    pub fingerings: &'static [Fingering],
}

/// Mapping from note identifier to accepted fingerings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from a static table
    pub fn from_table(table: Table) -> Self {
        let entries = table
            .iter()
            .map(|&(note, fingerings)| CatalogEntry { note, fingerings })
            .collect();
        Self { entries }
    }

    /// Build a catalog from entries
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accepted fingerings for a note
    pub fn get(&self, note: &str) -> Option<&'static [Fingering]> {
        self.entries
            .iter()
            .find(|e| e.note == note)
            .map(|e| e.fingerings)
    }

    /// Check if a note is present
    pub fn contains(&self, note: &str) -> bool {
        self.get(note).is_some()
    }

    /// Entries in authored order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Note identifiers in authored order
    pub fn notes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.note)
    }
}

/// Catalog for an instrument and difficulty
pub fn get_catalog(instrument: Instrument, difficulty: Difficulty) -> Catalog {
    Catalog::from_table(instrument.profile().table(difficulty))
}

/// Catalog looked up by names
pub fn get_catalog_by_name(instrument: &str, difficulty: &str) -> Result<Catalog> {
    let instrument: Instrument = instrument.parse()?;
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(get_catalog(instrument, difficulty))
}

/// Playable range of an instrument
pub fn get_range(instrument: Instrument) -> PitchRange {
    instrument.range()
}

/// Notes eligible for a drill: the catalog restricted to the instrument's range
pub fn get_eligible_pool(instrument: Instrument, difficulty: Difficulty) -> Catalog {
    let range = get_range(instrument);
    filter_by_range(&get_catalog(instrument, difficulty), range.min, range.max)
}

/// Playback frequency for a note, if the frequency table has one
pub fn frequency(note: &str) -> Option<f64> {
    NOTE_FREQUENCIES
        .iter()
        .find(|(name, _)| *name == note)
        .map(|&(_, hz)| hz)
}
