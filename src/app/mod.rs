// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Game controller: turns input and timer events into session
//! transitions and side effects.
//!
//! The controller is synchronous. Everything that involves time or I/O
//! (countdown ticks, the delayed draw, tone playback, quitting) comes
//! back as an [`Effect`] for the runtime to carry out.

pub mod runtime;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use tracing::{debug, warn};

use crate::audio::AudioError;
use crate::config::Settings;
use crate::control::{KeyboardController, QuizAction};
use crate::error::QuizError;
use crate::quiz::{Epoch, QuizSession, RedrawTicket, SessionStatus, TickOutcome, TimingMode};
use crate::ui::UiState;

/// Input to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stimulus {
    /// Key press
    Key { code: KeyCode, modifiers: KeyModifiers },
    /// One countdown second elapsed for a session epoch
    Tick(Epoch),
    /// Delayed draw came due
    Redraw(RedrawTicket),
    /// Repaint only (resize, status expiry)
    Refresh,
}

/// Side effect requested by the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Send `Stimulus::Redraw(ticket)` after `ticket.delay`
    ScheduleRedraw(RedrawTicket),
    /// Replace any running countdown with one for this epoch
    StartCountdown(Epoch),
    /// Stop the running countdown
    StopCountdown,
    /// Play the answer cue
    PlayTone { frequency: f64, duration: Duration },
    /// Leave the application
    Quit,
}

/// Owns the session and the UI state
pub struct GameController {
    session: QuizSession,
    keyboard: KeyboardController,
    ui: UiState,
    tone: Duration,
}

impl GameController {
    /// Create a controller around a session
    pub fn new(session: QuizSession, tone: Duration) -> Self {
        Self {
            session,
            keyboard: KeyboardController::with_defaults(),
            ui: UiState::default(),
            tone,
        }
    }

    /// Create a controller from validated settings
    pub fn from_settings(settings: &Settings) -> Self {
        let session = QuizSession::new(settings.instrument, settings.difficulty, settings.timing)
            .with_settings(settings.session);
        let session = match settings.seed {
            Some(seed) => session.with_seed(seed),
            None => session,
        };
        Self::new(session, settings.tone)
    }

    /// Handle one stimulus
    pub fn handle(&mut self, stimulus: Stimulus) -> Vec<Effect> {
        match stimulus {
            Stimulus::Key { code, modifiers } => match self.keyboard.get_action(code, modifiers) {
                Some(action) => self.apply(action),
                None => Vec::new(),
            },
            Stimulus::Tick(epoch) => self.tick(epoch),
            Stimulus::Redraw(ticket) => {
                if let Err(err) = self.session.complete_redraw(ticket) {
                    self.ui.set_status(err.to_string());
                }
                Vec::new()
            }
            Stimulus::Refresh => {
                self.ui.clear_expired_status();
                Vec::new()
            }
        }
    }

    /// Apply a player action
    pub fn apply(&mut self, action: QuizAction) -> Vec<Effect> {
        debug!(?action, "Action");
        match action {
            QuizAction::ToggleValve(index) => {
                self.session.toggle_valve(index);
                Vec::new()
            }
            QuizAction::SetSlide(position) => {
                self.session.set_slide_position(position);
                Vec::new()
            }
            QuizAction::Submit => self.submit(),
            QuizAction::Begin => {
                let result = self.session.begin();
                self.started(result)
            }
            QuizAction::Restart => {
                let result = self.session.restart();
                self.started(result)
            }
            QuizAction::End => match self.session.end() {
                Ok(()) => vec![Effect::StopCountdown],
                Err(err) => {
                    self.ui.set_status(err.to_string());
                    Vec::new()
                }
            },
            QuizAction::CycleInstrument => {
                let instrument = self.session.instrument().next();
                self.session.change_instrument(instrument);
                self.ui.set_status(format!("Instrument: {}", instrument));
                Vec::new()
            }
            QuizAction::ToggleDifficulty => {
                let difficulty = self.session.difficulty().toggle();
                self.session.change_difficulty(difficulty);
                self.ui.set_status(format!("Mode: {}", difficulty));
                Vec::new()
            }
            QuizAction::ToggleTiming => {
                let timing = self.session.timing().toggle();
                self.session.change_timing_mode(timing);
                self.ui.set_status(format!("Timing: {}", timing));
                if self.session.status() == SessionStatus::Active {
                    vec![self.countdown_effect()]
                } else {
                    Vec::new()
                }
            }
            QuizAction::ToggleHelp => {
                self.ui.toggle_help();
                Vec::new()
            }
            QuizAction::Quit => vec![Effect::Quit],
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        match self.session.submit_input() {
            Ok(outcome) => {
                let mut effects = Vec::new();
                if let Some(frequency) = outcome.frequency {
                    effects.push(Effect::PlayTone {
                        frequency,
                        duration: self.tone,
                    });
                }
                if let Some(ticket) = outcome.redraw {
                    effects.push(Effect::ScheduleRedraw(ticket));
                }
                effects
            }
            Err(QuizError::SessionInactive) => {
                self.ui.set_status("Press Enter to start");
                Vec::new()
            }
            // Already shown as feedback
            Err(QuizError::MissingFingeringData { .. }) | Err(QuizError::AwaitingNextNote) => {
                Vec::new()
            }
            Err(err) => {
                self.ui.set_status(err.to_string());
                Vec::new()
            }
        }
    }

    /// Effects after begin/restart
    fn started(&mut self, result: crate::error::Result<()>) -> Vec<Effect> {
        match result {
            Ok(()) => vec![self.countdown_effect()],
            Err(err @ QuizError::EmptyPool { .. }) => {
                // Still active: the countdown runs with nothing to answer
                warn!(%err, "Session started without notes");
                self.ui.set_status(err.to_string());
                vec![self.countdown_effect()]
            }
            Err(QuizError::SessionActive) => {
                self.ui.set_status("Session already running (r restarts)");
                Vec::new()
            }
            Err(err) => {
                self.ui.set_status(err.to_string());
                Vec::new()
            }
        }
    }

    fn tick(&mut self, epoch: Epoch) -> Vec<Effect> {
        if epoch != self.session.epoch() {
            debug!(epoch = epoch.value(), "Discarding stale tick");
            return Vec::new();
        }
        match self.session.tick() {
            TickOutcome::TimesUp => vec![Effect::StopCountdown],
            TickOutcome::Remaining(_) | TickOutcome::Ignored => Vec::new(),
        }
    }

    fn countdown_effect(&self) -> Effect {
        if self.session.status() == SessionStatus::Active && self.session.timing() == TimingMode::Timed {
            Effect::StartCountdown(self.session.epoch())
        } else {
            Effect::StopCountdown
        }
    }

    /// Report a tone that could not be played
    pub fn report_audio_error(&mut self, err: &AudioError) {
        self.ui.set_status(format!("Unable to play sound: {}", err));
    }

    /// Quiz session
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Keyboard bindings
    pub fn keyboard(&self) -> &KeyboardController {
        &self.keyboard
    }

    /// UI state
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Mutable UI state
    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{get_catalog, Catalog, Difficulty, Fingering, Instrument};
    use crate::quiz::Feedback;

    fn controller(instrument: Instrument, timing: TimingMode) -> GameController {
        let session = QuizSession::new(instrument, Difficulty::Beginner, timing).with_seed(17);
        GameController::new(session, Duration::from_millis(250))
    }

    fn key(c: char) -> Stimulus {
        Stimulus::Key {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(code: KeyCode) -> Stimulus {
        Stimulus::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Enter the first accepted fingering for the note on screen
    fn enter_answer(controller: &mut GameController) {
        let session = controller.session();
        let note = session.current_note().unwrap();
        let accepted = get_catalog(session.instrument(), session.difficulty())
            .get(note)
            .unwrap()[0];
        match accepted {
            Fingering::Valves(valves) => {
                for (index, &state) in valves.iter().enumerate() {
                    if state != 0 {
                        controller.apply(QuizAction::ToggleValve(index));
                    }
                }
            }
            Fingering::Slide(position) => {
                controller.apply(QuizAction::SetSlide(position));
            }
        }
    }

    #[test]
    fn test_begin_starts_countdown() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Timed);
        let effects = controller.handle(press(KeyCode::Enter));
        let epoch = controller.session().epoch();
        assert_eq!(effects, vec![Effect::StartCountdown(epoch)]);
        assert_eq!(controller.session().status(), SessionStatus::Active);

        // Second Enter is rejected
        assert!(controller.handle(press(KeyCode::Enter)).is_empty());
        assert!(controller.ui().status_message.is_some());
    }

    #[test]
    fn test_begin_with_empty_pool_keeps_countdown() {
        let session = QuizSession::new(Instrument::Tuba, Difficulty::Beginner, TimingMode::Timed)
            .with_catalogs(Catalog::default(), Catalog::default());
        let mut controller = GameController::new(session, Duration::from_millis(250));

        let effects = controller.handle(press(KeyCode::Enter));
        let epoch = controller.session().epoch();
        assert_eq!(effects, vec![Effect::StartCountdown(epoch)]);
        assert_eq!(controller.session().status(), SessionStatus::Active);
        assert_eq!(controller.session().feedback(), &Feedback::NoNotes);
        assert!(controller.ui().status_message.as_deref().unwrap().contains("No notes"));

        // Space reports the missing note without scoring
        assert!(controller.handle(key(' ')).is_empty());
        assert_eq!(controller.session().total_count(), 0);
        assert_eq!(
            controller.ui().status_message.as_deref(),
            Some(QuizError::NoCurrentNote.to_string().as_str())
        );
    }

    #[test]
    fn test_begin_practice_stops_countdown() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Practice);
        assert_eq!(controller.handle(press(KeyCode::Enter)), vec![Effect::StopCountdown]);
    }

    #[test]
    fn test_correct_submit_effects() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Timed);
        controller.handle(press(KeyCode::Enter));
        enter_answer(&mut controller);

        let note = controller.session().current_note().unwrap();
        let effects = controller.handle(key(' '));
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[0],
            Effect::PlayTone {
                frequency: crate::catalog::frequency(note).unwrap(),
                duration: Duration::from_millis(250),
            }
        );
        let Effect::ScheduleRedraw(ticket) = effects[1] else {
            panic!("expected a redraw, got {:?}", effects[1]);
        };

        assert!(controller.handle(Stimulus::Redraw(ticket)).is_empty());
        assert_ne!(controller.session().current_note(), Some(note));
        assert_eq!(controller.session().correct_count(), 1);
    }

    #[test]
    fn test_incorrect_submit() {
        let mut controller = controller(Instrument::Trombone, TimingMode::Practice);
        controller.handle(press(KeyCode::Enter));

        // No position chosen never matches
        assert!(controller.handle(key(' ')).is_empty());
        assert_eq!(controller.session().feedback(), &Feedback::Incorrect);
        assert_eq!(controller.session().total_count(), 1);
    }

    #[test]
    fn test_submit_before_start() {
        let mut controller = controller(Instrument::Tuba, TimingMode::Timed);
        assert!(controller.handle(key(' ')).is_empty());
        assert_eq!(controller.session().total_count(), 0);
        assert_eq!(
            controller.ui().status_message.as_deref(),
            Some("Press Enter to start")
        );
    }

    #[test]
    fn test_stale_tick_ignored() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Timed);
        controller.handle(press(KeyCode::Enter));
        let old = controller.session().epoch();

        controller.handle(key('r'));
        assert_ne!(controller.session().epoch(), old);

        controller.handle(Stimulus::Tick(old));
        assert_eq!(controller.session().remaining_time(), Some(60));

        controller.handle(Stimulus::Tick(controller.session().epoch()));
        assert_eq!(controller.session().remaining_time(), Some(59));
    }

    #[test]
    fn test_countdown_runs_out() {
        let mut controller = controller(Instrument::Euphonium, TimingMode::Timed);
        controller.handle(press(KeyCode::Enter));
        let epoch = controller.session().epoch();

        for _ in 0..59 {
            assert!(controller.handle(Stimulus::Tick(epoch)).is_empty());
        }
        assert_eq!(controller.handle(Stimulus::Tick(epoch)), vec![Effect::StopCountdown]);
        assert_eq!(controller.session().status(), SessionStatus::Ended);
        assert_eq!(controller.session().feedback(), &Feedback::TimesUp);
    }

    #[test]
    fn test_escape_ends_session() {
        let mut controller = controller(Instrument::Trombone, TimingMode::Practice);
        controller.handle(press(KeyCode::Enter));
        assert_eq!(controller.handle(press(KeyCode::Esc)), vec![Effect::StopCountdown]);
        assert_eq!(controller.session().status(), SessionStatus::Ended);
    }

    #[test]
    fn test_toggle_timing_while_active() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Practice);
        controller.handle(press(KeyCode::Enter));
        let epoch = controller.session().epoch();

        assert_eq!(controller.handle(key('m')), vec![Effect::StartCountdown(epoch)]);
        assert_eq!(controller.session().remaining_time(), Some(60));
        assert_eq!(controller.handle(key('m')), vec![Effect::StopCountdown]);
        assert_eq!(controller.session().remaining_time(), None);
    }

    #[test]
    fn test_selector_keys() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Timed);
        controller.handle(key('i'));
        assert_eq!(controller.session().instrument(), Instrument::Trombone);
        controller.handle(key('d'));
        assert_eq!(controller.session().difficulty(), Difficulty::Advanced);
        assert!(controller.handle(key('m')).is_empty());
        assert_eq!(controller.session().timing(), TimingMode::Practice);
    }

    #[test]
    fn test_valve_keys_edit_candidate() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Practice);
        controller.handle(press(KeyCode::Enter));
        controller.handle(press(KeyCode::Left));
        controller.handle(press(KeyCode::Right));
        assert_eq!(controller.session().candidate(), Fingering::Valves([1, 0, 1]));
    }

    #[test]
    fn test_help_and_quit() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Timed);
        controller.handle(key('h'));
        assert!(controller.ui().show_help);
        controller.handle(key('?'));
        assert!(!controller.ui().show_help);

        assert_eq!(controller.handle(key('q')), vec![Effect::Quit]);
        let ctrl_c = Stimulus::Key {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(controller.handle(ctrl_c), vec![Effect::Quit]);
    }

    #[test]
    fn test_audio_error_reported() {
        let mut controller = controller(Instrument::Trumpet, TimingMode::Timed);
        controller.report_audio_error(&AudioError::NoDevice);
        assert!(controller
            .ui()
            .status_message
            .as_deref()
            .unwrap()
            .contains("No audio device"));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            instrument: Instrument::Tuba,
            seed: Some(3),
            ..Settings::default()
        };
        let controller = GameController::from_settings(&settings);
        assert_eq!(controller.session().instrument(), Instrument::Tuba);
        assert_eq!(controller.session().status(), SessionStatus::NotStarted);
    }
}
