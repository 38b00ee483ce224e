// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Brass fingering drill.
//!
//! Shows a note on a staff and asks for the valve combination or slide
//! position that plays it on trumpet, trombone, euphonium or tuba.
//!
//! The core ([`music`], [`catalog`], [`quiz`]) has no I/O. The terminal
//! front end ([`app`], [`ui`], [`control`], [`audio`]) drives it.

pub mod app;
pub mod audio;
pub mod catalog;
pub mod config;
pub mod control;
pub mod error;
pub mod music;
pub mod quiz;
pub mod ui;

pub use catalog::{
    filter_by_range, get_catalog, get_catalog_by_name, get_eligible_pool, get_range, Catalog,
    Difficulty, Fingering, Instrument,
};
pub use error::{QuizError, Result};
pub use music::{note_to_pitch, parse_for_display};
pub use quiz::{is_correct, QuizSession, SessionStatus, TimingMode};
