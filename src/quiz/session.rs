// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Quiz session state machine.
//!
//! A session moves `NotStarted -> Active -> Ended` and back to `Active`
//! on restart. While active it holds the note on screen, the player's
//! candidate fingering, the score and (in timed mode) the countdown.
//! Every transition is a method call; the caller serializes them.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::timing::{Countdown, Epoch, RedrawTicket, TimingMode};
use super::validator::is_correct;
use crate::catalog::{self, get_catalog, get_eligible_pool, Catalog, Difficulty, Fingering, Instrument};
use crate::error::{QuizError, Result};

/// Lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    Active,
    Ended,
}

/// Transient feedback shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect,
    TimesUp,
    /// The note on screen has no fingering data
    MissingFingering(String),
    /// The pool for the selected instrument and difficulty is empty
    NoNotes,
    /// Correct answer, but the note has no playback frequency
    SoundUnavailable(String),
}

impl Feedback {
    /// Message for display
    pub fn message(&self) -> String {
        match self {
            Feedback::None => String::new(),
            Feedback::Correct => "Correct!".to_string(),
            Feedback::Incorrect => "Try again!".to_string(),
            Feedback::TimesUp => "Time's up!".to_string(),
            Feedback::MissingFingering(note) => {
                format!("No fingering data available for {}", note)
            }
            Feedback::NoNotes => "No notes available for this instrument and mode".to_string(),
            Feedback::SoundUnavailable(note) => {
                format!("Correct! (unable to play the sound for {})", note)
            }
        }
    }
}

/// Tunable session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Countdown length in timed mode
    pub session_length: u32,
    /// Hold time between a correct answer and the next note
    pub redraw_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            session_length: 60,
            redraw_delay: Duration::from_millis(1000),
        }
    }
}

/// Result of a submitted answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmitOutcome {
    /// Whether the candidate matched an accepted fingering
    pub correct: bool,
    /// Note the answer was checked against
    pub note: &'static str,
    /// Frequency for the audio cue (correct answers only)
    pub frequency: Option<f64>,
    /// Delayed draw to schedule (correct answers only)
    pub redraw: Option<RedrawTicket>,
}

/// Result of a countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not counting (practice mode, or session not active)
    Ignored,
    /// Time left after the tick
    Remaining(u32),
    /// Countdown reached zero and the session ended
    TimesUp,
}

/// Read model for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub status: SessionStatus,
    pub instrument: Instrument,
    pub difficulty: Difficulty,
    pub timing: TimingMode,
    pub current_note: Option<&'static str>,
    pub candidate: Fingering,
    pub correct_count: u32,
    pub total_count: u32,
    pub remaining_time: Option<u32>,
    pub feedback: Feedback,
    pub awaiting_next_note: bool,
}

/// Mutable state of one practice session
#[derive(Debug)]
pub struct QuizSession {
    instrument: Instrument,
    difficulty: Difficulty,
    timing: TimingMode,
    settings: SessionSettings,
    /// Full catalog for the selectors, used to look up answers
    catalog: Catalog,
    /// Range-filtered catalog, used for draws
    pool: Catalog,
    status: SessionStatus,
    current_note: Option<&'static str>,
    previous_note: Option<&'static str>,
    candidate: Fingering,
    correct_count: u32,
    total_count: u32,
    countdown: Option<Countdown>,
    feedback: Feedback,
    epoch: Epoch,
    pending_redraw: Option<RedrawTicket>,
    rng: StdRng,
}

impl QuizSession {
    /// Create a session that has not started yet
    pub fn new(instrument: Instrument, difficulty: Difficulty, timing: TimingMode) -> Self {
        let settings = SessionSettings::default();
        Self {
            instrument,
            difficulty,
            timing,
            settings,
            catalog: get_catalog(instrument, difficulty),
            pool: get_eligible_pool(instrument, difficulty),
            status: SessionStatus::NotStarted,
            current_note: None,
            previous_note: None,
            candidate: instrument.mechanism().neutral(),
            correct_count: 0,
            total_count: 0,
            countdown: Self::countdown_for(timing, &settings),
            feedback: Feedback::None,
            epoch: Epoch::default(),
            pending_redraw: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the session parameters
    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self.countdown = Self::countdown_for(self.timing, &settings);
        self
    }

    /// Use a deterministic random source for note draws
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the answer catalog and the draw pool.
    ///
    /// The selectors rebuild both from the built-in tables.
    pub fn with_catalogs(mut self, catalog: Catalog, pool: Catalog) -> Self {
        self.catalog = catalog;
        self.pool = pool;
        self
    }

    fn countdown_for(timing: TimingMode, settings: &SessionSettings) -> Option<Countdown> {
        match timing {
            TimingMode::Timed => Some(Countdown::new(settings.session_length)),
            TimingMode::Practice => None,
        }
    }

    /// Start a session from `NotStarted` or `Ended`.
    ///
    /// The session is active afterwards even if the initial draw fails
    /// with [`QuizError::EmptyPool`].
    pub fn begin(&mut self) -> Result<()> {
        if self.status == SessionStatus::Active {
            return Err(QuizError::SessionActive);
        }
        info!(
            instrument = %self.instrument,
            difficulty = %self.difficulty,
            timing = %self.timing,
            "Session started"
        );
        self.start()
    }

    /// Start over from any state, discarding pending work
    pub fn restart(&mut self) -> Result<()> {
        info!(
            instrument = %self.instrument,
            difficulty = %self.difficulty,
            timing = %self.timing,
            "Session restarted"
        );
        self.start()
    }

    fn start(&mut self) -> Result<()> {
        self.epoch.advance();
        self.pending_redraw = None;
        self.correct_count = 0;
        self.total_count = 0;
        self.countdown = Self::countdown_for(self.timing, &self.settings);
        self.status = SessionStatus::Active;
        self.feedback = Feedback::None;
        self.draw_note().map(|_| ())
    }

    /// End an active session (the only way a practice session ends)
    pub fn end(&mut self) -> Result<()> {
        if self.status != SessionStatus::Active {
            return Err(QuizError::SessionInactive);
        }
        info!(correct = self.correct_count, total = self.total_count, "Session ended");
        self.finish(Feedback::None);
        Ok(())
    }

    fn finish(&mut self, feedback: Feedback) {
        self.status = SessionStatus::Ended;
        self.epoch.advance();
        self.pending_redraw = None;
        self.feedback = feedback;
    }

    /// Draw the next note from the pool, avoiding an immediate repeat.
    ///
    /// The previous note is excluded whenever another note is available.
    /// An empty pool leaves the session active with no current note.
    pub fn draw_note(&mut self) -> Result<&'static str> {
        if self.status != SessionStatus::Active {
            return Err(QuizError::SessionInactive);
        }

        self.pending_redraw = None;
        self.candidate = self.instrument.mechanism().neutral();
        self.feedback = Feedback::None;

        let notes: Vec<&'static str> = self.pool.notes().collect();
        if notes.is_empty() {
            warn!(
                instrument = %self.instrument,
                difficulty = %self.difficulty,
                "No notes available to draw"
            );
            self.current_note = None;
            self.feedback = Feedback::NoNotes;
            return Err(QuizError::EmptyPool {
                instrument: self.instrument.to_string(),
                difficulty: self.difficulty.to_string(),
            });
        }

        let previous = self.previous_note;
        let mut choices: Vec<&'static str> =
            notes.iter().copied().filter(|&n| Some(n) != previous).collect();
        if choices.is_empty() {
            // Single-note pool: repeating is unavoidable
            choices = notes;
        }

        let note = choices[self.rng.gen_range(0..choices.len())];
        self.current_note = Some(note);
        self.previous_note = Some(note);
        debug!(note, pool = self.pool.len(), "Drew note");
        Ok(note)
    }

    /// Check a candidate fingering against the current note.
    ///
    /// Every checked attempt counts toward the total, including one that
    /// fails with [`QuizError::MissingFingeringData`].
    pub fn submit(&mut self, candidate: Fingering) -> Result<SubmitOutcome> {
        if self.status != SessionStatus::Active {
            return Err(QuizError::SessionInactive);
        }
        if self.pending_redraw.is_some() {
            return Err(QuizError::AwaitingNextNote);
        }
        let note = self.current_note.ok_or(QuizError::NoCurrentNote)?;

        self.total_count += 1;

        let Some(accepted) = self.catalog.get(note) else {
            warn!(note, instrument = %self.instrument, "No fingering data for note");
            self.feedback = Feedback::MissingFingering(note.to_string());
            return Err(QuizError::MissingFingeringData { note: note.to_string() });
        };

        if !is_correct(accepted, &candidate) {
            debug!(note, %candidate, "Incorrect answer");
            self.feedback = Feedback::Incorrect;
            return Ok(SubmitOutcome {
                correct: false,
                note,
                frequency: None,
                redraw: None,
            });
        }

        self.correct_count += 1;
        let frequency = catalog::frequency(note);
        self.feedback = match frequency {
            Some(_) => Feedback::Correct,
            None => {
                warn!(note, "No playback frequency for note");
                Feedback::SoundUnavailable(note.to_string())
            }
        };

        let ticket = RedrawTicket {
            epoch: self.epoch,
            delay: self.settings.redraw_delay,
        };
        self.pending_redraw = Some(ticket);
        debug!(note, correct = self.correct_count, total = self.total_count, "Correct answer");

        Ok(SubmitOutcome {
            correct: true,
            note,
            frequency,
            redraw: Some(ticket),
        })
    }

    /// Submit the candidate built with [`toggle_valve`](Self::toggle_valve)
    /// and [`set_slide_position`](Self::set_slide_position)
    pub fn submit_input(&mut self) -> Result<SubmitOutcome> {
        self.submit(self.candidate)
    }

    /// Run a delayed draw if its ticket is still current.
    ///
    /// Returns `Ok(None)` for a stale ticket (the session restarted or
    /// ended after the ticket was issued).
    pub fn complete_redraw(&mut self, ticket: RedrawTicket) -> Result<Option<&'static str>> {
        if self.status != SessionStatus::Active || self.pending_redraw != Some(ticket) {
            debug!(epoch = ticket.epoch.value(), "Discarding stale redraw");
            return Ok(None);
        }
        self.draw_note().map(Some)
    }

    /// Advance the countdown by one unit
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::Active || self.timing != TimingMode::Timed {
            return TickOutcome::Ignored;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return TickOutcome::Ignored;
        };

        if countdown.tick() {
            info!(correct = self.correct_count, total = self.total_count, "Time's up");
            self.finish(Feedback::TimesUp);
            TickOutcome::TimesUp
        } else {
            TickOutcome::Remaining(countdown.remaining())
        }
    }

    /// Switch instrument. The note on screen stays until the next draw.
    pub fn change_instrument(&mut self, instrument: Instrument) {
        self.instrument = instrument;
        self.refresh_pool();
        info!(%instrument, pool = self.pool.len(), "Instrument changed");
    }

    /// Switch difficulty. The note on screen stays until the next draw.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.refresh_pool();
        info!(%difficulty, pool = self.pool.len(), "Difficulty changed");
    }

    fn refresh_pool(&mut self) {
        self.catalog = get_catalog(self.instrument, self.difficulty);
        self.pool = get_eligible_pool(self.instrument, self.difficulty);
        self.candidate = self.instrument.mechanism().neutral();
    }

    /// Switch between timed and practice mode.
    ///
    /// Switching to practice drops the countdown; switching to timed
    /// starts a full countdown.
    pub fn change_timing_mode(&mut self, timing: TimingMode) {
        if self.timing == timing {
            return;
        }
        self.timing = timing;
        self.countdown = Self::countdown_for(timing, &self.settings);
        info!(%timing, "Timing mode changed");
    }

    /// Toggle a valve (0-2) on the candidate. Returns false if ignored.
    pub fn toggle_valve(&mut self, index: usize) -> bool {
        if self.status != SessionStatus::Active {
            return false;
        }
        match &mut self.candidate {
            Fingering::Valves(valves) if index < valves.len() => {
                valves[index] = if valves[index] == 1 { 0 } else { 1 };
                self.feedback = Feedback::None;
                true
            }
            _ => false,
        }
    }

    /// Set the slide position (1-7) on the candidate. Returns false if ignored.
    pub fn set_slide_position(&mut self, position: u8) -> bool {
        if self.status != SessionStatus::Active || !(1..=7).contains(&position) {
            return false;
        }
        match &mut self.candidate {
            Fingering::Slide(current) => {
                *current = position;
                self.feedback = Feedback::None;
                true
            }
            Fingering::Valves(_) => false,
        }
    }

    /// Snapshot for rendering
    pub fn view(&self) -> SessionView {
        SessionView {
            status: self.status,
            instrument: self.instrument,
            difficulty: self.difficulty,
            timing: self.timing,
            current_note: self.current_note,
            candidate: self.candidate,
            correct_count: self.correct_count,
            total_count: self.total_count,
            remaining_time: self.remaining_time(),
            feedback: self.feedback.clone(),
            awaiting_next_note: self.pending_redraw.is_some(),
        }
    }

    /// Lifecycle status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Selected instrument
    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Selected difficulty
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Selected timing mode
    pub fn timing(&self) -> TimingMode {
        self.timing
    }

    /// Session parameters
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Note on screen
    pub fn current_note(&self) -> Option<&'static str> {
        self.current_note
    }

    /// Candidate fingering being built
    pub fn candidate(&self) -> Fingering {
        self.candidate
    }

    /// Correct answers this session
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Checked attempts this session
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    /// Countdown remaining (timed mode only)
    pub fn remaining_time(&self) -> Option<u32> {
        self.countdown.map(|c| c.remaining())
    }

    /// Current feedback
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Notes eligible for the next draw
    pub fn pool(&self) -> &Catalog {
        &self.pool
    }

    /// Current session identity
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
}
