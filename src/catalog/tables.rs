// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Hand-authored fingering tables, instrument profiles and note frequencies.
//!
//! This data is authoritative. Alternate fingerings in the advanced
//! tables repeat across registers in places; keep them as written.

use super::{Difficulty, Fingering, Instrument, Table};
use crate::music::{Clef, PitchRange};

use Fingering::{Slide, Valves};

/// Static description of a supported instrument
#[derive(Debug)]
pub struct InstrumentProfile {
    pub instrument: Instrument,
    pub clef: Clef,
    pub range: PitchRange,
    pub beginner: Table,
    pub advanced: Table,
}

impl InstrumentProfile {
    /// Table for a difficulty
    pub fn table(&self, difficulty: Difficulty) -> Table {
        match difficulty {
            Difficulty::Beginner => self.beginner,
            Difficulty::Advanced => self.advanced,
        }
    }
}

pub static PROFILES: [InstrumentProfile; 4] = [
    InstrumentProfile {
        instrument: Instrument::Trumpet,
        clef: Clef::Treble,
        // F#3 to D6
        range: PitchRange::new(54, 90),
        beginner: TRUMPET_BEGINNER,
        advanced: TRUMPET_ADVANCED,
    },
    InstrumentProfile {
        instrument: Instrument::Trombone,
        clef: Clef::Bass,
        // E2 to F5
        range: PitchRange::new(40, 77),
        beginner: TROMBONE_BEGINNER,
        advanced: TROMBONE_ADVANCED,
    },
    InstrumentProfile {
        instrument: Instrument::Euphonium,
        clef: Clef::Bass,
        // Bb1 to F5
        range: PitchRange::new(34, 77),
        beginner: EUPHONIUM_BEGINNER,
        advanced: EUPHONIUM_ADVANCED,
    },
    InstrumentProfile {
        instrument: Instrument::Tuba,
        clef: Clef::Bass,
        // Bb0 to F4
        range: PitchRange::new(22, 65),
        beginner: TUBA_BEGINNER,
        advanced: TUBA_ADVANCED,
    },
];

// Beginner mode: first five notes of the concert Bb scale

pub const TRUMPET_BEGINNER: Table = &[
    ("C4", &[Valves([0, 0, 0])]),
    ("D4", &[Valves([1, 0, 1])]),
    ("E4", &[Valves([1, 1, 0])]),
    ("F4", &[Valves([1, 0, 0])]),
    ("G4", &[Valves([0, 0, 0])]),
];

pub const TROMBONE_BEGINNER: Table = &[
    ("Bb2", &[Slide(1)]),
    ("C3", &[Slide(6)]),
    ("D3", &[Slide(4)]),
    ("Eb3", &[Slide(3)]),
    ("F3", &[Slide(1)]),
];

pub const EUPHONIUM_BEGINNER: Table = &[
    ("Bb1", &[Valves([0, 0, 0])]),
    ("C2", &[Valves([1, 0, 0])]),
    ("D2", &[Valves([1, 1, 0])]),
    ("Eb2", &[Valves([1, 0, 1])]),
    ("F2", &[Valves([0, 0, 0])]),
];

pub const TUBA_BEGINNER: Table = &[
    ("Bb0", &[Valves([0, 0, 0])]),
    ("C2", &[Valves([1, 0, 1])]),
    ("D2", &[Valves([1, 1, 0])]),
    ("Eb2", &[Valves([1, 0, 0])]),
    ("F2", &[Valves([0, 0, 0])]),
];

// Advanced mode: full range with chromatics

pub const TRUMPET_ADVANCED: Table = &[
    ("C4", &[Valves([0, 0, 0])]),
    ("Db4", &[Valves([1, 1, 1])]),
    ("D4", &[Valves([1, 0, 1])]),
    ("Eb4", &[Valves([0, 1, 1])]),
    ("E4", &[Valves([1, 1, 0])]),
    ("F4", &[Valves([1, 0, 0])]),
    ("Gb4", &[Valves([0, 1, 0])]),
    ("G4", &[Valves([0, 0, 0])]),
    ("Ab4", &[Valves([0, 1, 1])]),
    ("A4", &[Valves([1, 2, 0])]),
    ("Bb4", &[Valves([1, 0, 0])]),
    ("B4", &[Valves([0, 1, 0])]),
    ("C5", &[Valves([0, 0, 0])]),
    ("Db5", &[Valves([1, 1, 1])]),
    ("D5", &[Valves([1, 0, 1])]),
    ("Eb5", &[Valves([0, 1, 0])]),
    ("E5", &[Valves([1, 1, 0])]),
    ("F5", &[Valves([1, 0, 0])]),
    ("Gb5", &[Valves([0, 1, 0])]),
    ("G5", &[Valves([0, 0, 0])]),
    ("Ab5", &[Valves([0, 1, 1])]),
    ("A5", &[Valves([1, 2, 0])]),
    ("Bb5", &[Valves([1, 0, 0])]),
    ("B5", &[Valves([0, 1, 0])]),
    ("C6", &[Valves([0, 0, 0])]),
    ("Db6", &[Valves([1, 1, 1])]),
    ("D6", &[Valves([1, 0, 1])]),
];

pub const TROMBONE_ADVANCED: Table = &[
    ("E2", &[Slide(7)]),
    ("F2", &[Slide(6)]),
    ("G2", &[Slide(5)]),
    ("Ab2", &[Slide(4)]),
    ("A2", &[Slide(3)]),
    ("Bb2", &[Slide(2)]),
    ("B2", &[Slide(1)]),
    ("C3", &[Slide(7)]),
    ("Db3", &[Slide(6)]),
    ("D3", &[Slide(5)]),
    ("Eb3", &[Slide(4)]),
    ("E3", &[Slide(3)]),
    ("F3", &[Slide(2)]),
    ("G3", &[Slide(1)]),
    ("Ab3", &[Slide(7)]),
    ("A3", &[Slide(6)]),
    ("Bb3", &[Slide(5)]),
    ("B3", &[Slide(4)]),
    ("C4", &[Slide(3)]),
    ("Db4", &[Slide(2)]),
    ("D4", &[Slide(1)]),
    ("Eb4", &[Slide(7)]),
    ("E4", &[Slide(6)]),
    ("F4", &[Slide(5)]),
    ("Gb4", &[Slide(4)]),
    ("G4", &[Slide(3)]),
    ("Ab4", &[Slide(2)]),
    ("A4", &[Slide(1)]),
    ("Bb4", &[Slide(7)]),
    ("B4", &[Slide(6)]),
    ("C5", &[Slide(5)]),
    ("Db5", &[Slide(4)]),
    ("D5", &[Slide(3)]),
    ("Eb5", &[Slide(2)]),
    ("E5", &[Slide(1)]),
    ("F5", &[Slide(7)]),
];

pub const EUPHONIUM_ADVANCED: Table = &[
    ("C2", &[Valves([1, 1, 1])]),
    ("Db2", &[Valves([1, 1, 1])]),
    ("D2", &[Valves([1, 1, 0])]),
    ("Eb2", &[Valves([1, 1, 0])]),
    ("E2", &[Valves([0, 1, 1])]),
    ("F2", &[Valves([1, 0, 1])]),
    ("Gb2", &[Valves([1, 0, 1])]),
    ("G2", &[Valves([1, 1, 1])]),
    ("Ab2", &[Valves([1, 1, 1])]),
    ("A2", &[Valves([0, 1, 0])]),
    ("Bb2", &[Valves([0, 0, 0])]),
    ("B2", &[Valves([1, 1, 1])]),
    ("C3", &[Valves([1, 1, 1])]),
    ("Db3", &[Valves([1, 1, 1])]),
    ("D3", &[Valves([1, 1, 0])]),
    ("Eb3", &[Valves([1, 1, 0])]),
    ("E3", &[Valves([0, 1, 1])]),
    ("F3", &[Valves([1, 0, 1])]),
    ("Gb3", &[Valves([1, 0, 1])]),
    ("G3", &[Valves([1, 1, 1])]),
    ("Ab3", &[Valves([1, 1, 1])]),
    ("A3", &[Valves([0, 1, 0])]),
    ("Bb3", &[Valves([0, 0, 0])]),
    ("B3", &[Valves([1, 1, 1])]),
    ("C4", &[Valves([1, 1, 1])]),
    ("Db4", &[Valves([1, 1, 1])]),
    ("D4", &[Valves([1, 1, 0])]),
    ("Eb4", &[Valves([1, 1, 0])]),
    ("E4", &[Valves([0, 1, 1])]),
    ("F4", &[Valves([1, 0, 1])]),
    ("Gb4", &[Valves([1, 0, 1])]),
    ("G4", &[Valves([1, 1, 1])]),
    ("Ab4", &[Valves([1, 1, 1])]),
    ("A4", &[Valves([0, 1, 0])]),
    ("Bb4", &[Valves([0, 0, 0])]),
];

pub const TUBA_ADVANCED: Table = &[
    ("Bb0", &[Valves([0, 0, 0])]),
    ("C2", &[Valves([1, 0, 1])]),
    ("D2", &[Valves([1, 1, 0])]),
    ("Eb2", &[Valves([1, 0, 0])]),
    ("F2", &[Valves([0, 0, 0])]),
    ("G2", &[Valves([0, 0, 0])]),
    ("Ab2", &[Valves([1, 0, 0])]),
    ("A2", &[Valves([1, 1, 0])]),
    ("Bb2", &[Valves([0, 0, 0])]),
    ("B2", &[Valves([1, 1, 1])]),
    ("C3", &[Valves([0, 0, 0])]),
    ("Db3", &[Valves([1, 1, 0])]),
    ("D3", &[Valves([1, 0, 1])]),
    ("Eb3", &[Valves([1, 1, 0])]),
    ("F3", &[Valves([0, 0, 0])]),
    ("Gb3", &[Valves([1, 0, 0])]),
    ("G3", &[Valves([0, 0, 0])]),
    ("Ab3", &[Valves([1, 0, 0])]),
    ("A3", &[Valves([1, 1, 0])]),
    ("Bb3", &[Valves([0, 0, 0])]),
    ("B3", &[Valves([1, 1, 1])]),
    ("C4", &[Valves([0, 0, 0])]),
    ("Db4", &[Valves([1, 1, 0])]),
    ("D4", &[Valves([1, 0, 1])]),
    ("Eb4", &[Valves([1, 1, 0])]),
    ("F4", &[Valves([0, 0, 0])]),
];

/// Playback frequency (Hz) for each note that can sound a cue
pub const NOTE_FREQUENCIES: &[(&str, f64)] = &[
    ("C2", 65.41),
    ("C3", 130.81),
    ("C4", 261.63),
    ("C5", 523.25),
    ("C6", 1046.50),
    ("Db2", 69.30),
    ("Db3", 138.59),
    ("Db4", 277.18),
    ("Db5", 554.37),
    ("Db6", 1108.73),
    ("D2", 73.42),
    ("D3", 146.83),
    ("D4", 293.66),
    ("D5", 587.33),
    ("D6", 1174.66),
    ("Eb2", 77.78),
    ("Eb3", 155.56),
    ("Eb4", 311.13),
    ("Eb5", 622.25),
    ("Eb6", 1244.51),
    ("E1", 41.20),
    ("E2", 82.41),
    ("E3", 164.81),
    ("E4", 329.63),
    ("E5", 659.25),
    ("F2", 87.31),
    ("F3", 174.61),
    ("F4", 349.23),
    ("F5", 698.46),
    ("F6", 1396.91),
    ("Gb2", 92.50),
    ("Gb3", 185.00),
    ("Gb4", 369.99),
    ("G2", 98.00),
    ("G3", 196.00),
    ("G4", 392.00),
    ("G5", 783.99),
    ("G6", 1567.98),
    ("Ab2", 103.83),
    ("Ab3", 207.65),
    ("Ab4", 415.30),
    ("Ab5", 830.61),
    ("A2", 110.00),
    ("A3", 220.00),
    ("A4", 440.00),
    ("A5", 880.00),
    ("Bb0", 58.27),
    ("Bb1", 116.54),
    ("Bb2", 233.08),
    ("Bb3", 466.16),
    ("Bb4", 466.16),
    ("Bb5", 932.33),
    ("Bb6", 1864.66),
    ("B1", 61.74),
    ("B2", 123.47),
    ("B3", 246.94),
    ("B4", 493.88),
    ("B5", 987.77),
    ("B6", 1975.53),
];
