// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for brass-drill
//!
//! These tests verify that multiple components work together correctly.

use std::collections::HashSet;
use std::fs;
use std::time::Duration;

use brass_drill::app::{Effect, GameController, Stimulus};
use brass_drill::audio::{SilentPlayer, TonePlayer};
use brass_drill::catalog::{frequency, Catalog, CatalogEntry};
use brass_drill::config::{validate_config, GameFile};
use brass_drill::control::QuizAction;
use brass_drill::quiz::{Feedback, SessionSettings, SubmitOutcome, TickOutcome};
use brass_drill::{
    filter_by_range, get_catalog, get_catalog_by_name, get_eligible_pool, get_range, is_correct,
    note_to_pitch, parse_for_display, Difficulty, Fingering, Instrument, QuizError, QuizSession,
    SessionStatus, TimingMode,
};
use tempfile::tempdir;

const DIFFICULTIES: [Difficulty; 2] = [Difficulty::Beginner, Difficulty::Advanced];

/// Every pool is non-empty and inside the instrument's range
#[test]
fn test_pools_within_range() {
    for instrument in Instrument::ALL {
        let range = get_range(instrument);
        for difficulty in DIFFICULTIES {
            let pool = get_eligible_pool(instrument, difficulty);
            assert!(!pool.is_empty(), "{instrument} {difficulty}");
            for note in pool.notes() {
                let pitch = note_to_pitch(note).unwrap();
                assert!(range.contains(pitch), "{note} outside {instrument} range");
            }
        }
    }
}

/// Arity matches the instrument's mechanism for every authored entry
#[test]
fn test_catalog_arity() {
    for instrument in Instrument::ALL {
        let arity = instrument.mechanism().arity();
        for difficulty in DIFFICULTIES {
            let catalog = get_catalog(instrument, difficulty);
            for entry in catalog.entries() {
                assert!(!entry.fingerings.is_empty());
                for fingering in entry.fingerings {
                    assert_eq!(fingering.arity(), arity, "{instrument} {}", entry.note);
                }
            }
        }
    }
}

/// Each accepted fingering validates; a pattern of the wrong arity never does
#[test]
fn test_accepted_fingerings_validate() {
    for instrument in Instrument::ALL {
        for difficulty in DIFFICULTIES {
            let catalog = get_catalog(instrument, difficulty);
            for entry in catalog.entries() {
                for fingering in entry.fingerings {
                    assert!(is_correct(entry.fingerings, fingering));
                }
                let wrong_arity = match instrument.mechanism().neutral() {
                    Fingering::Valves(_) => Fingering::Slide(1),
                    Fingering::Slide(_) => Fingering::Valves([0, 0, 0]),
                };
                assert!(!is_correct(entry.fingerings, &wrong_arity));
            }
        }
    }
}

#[test]
fn test_lookup_by_name() {
    let catalog = get_catalog_by_name("Euphonium", "beginner").unwrap();
    assert_eq!(catalog, get_catalog(Instrument::Euphonium, Difficulty::Beginner));
    assert!(matches!(
        get_catalog_by_name("Bagpipes", "beginner"),
        Err(QuizError::UnknownInstrument(_))
    ));
}

#[test]
fn test_filter_with_malformed_entries() {
    const OPEN: &[Fingering] = &[Fingering::Valves([0, 0, 0])];
    let catalog = Catalog::from_entries(
        ["C4", "X9", "Bb4", "", "C#9"]
            .into_iter()
            .map(|note| CatalogEntry { note, fingerings: OPEN })
            .collect(),
    );
    let filtered = filter_by_range(&catalog, 60, 127);
    let notes: Vec<_> = filtered.notes().collect();
    assert_eq!(notes, vec!["C4", "Bb4", "C#9"]);
}

#[test]
fn test_display_decomposition() {
    let treble = parse_for_display("Bb4", brass_drill::music::Clef::Treble).unwrap();
    assert_eq!(treble.key(), "bb/4");

    let bass = parse_for_display("Eb3", brass_drill::music::Clef::Bass).unwrap();
    assert_eq!(bass.key(), "eb/2");

    // Display offset never affects pitch
    assert_eq!(note_to_pitch("Eb3"), Ok(51));
}

/// Trombone beginner walk-through: wrong, then right, then redraw
#[test]
fn test_trombone_session_flow() {
    let mut session = QuizSession::new(Instrument::Trombone, Difficulty::Beginner, TimingMode::Practice)
        .with_seed(2024);
    session.begin().unwrap();

    let mut answered = 0;
    while answered < 20 {
        let note = session.current_note().unwrap();
        let accepted = get_catalog(Instrument::Trombone, Difficulty::Beginner)
            .get(note)
            .unwrap();
        let wrong = (1..=7).find(|&p| !accepted.contains(&Fingering::Slide(p))).unwrap();

        let outcome = session.submit(Fingering::Slide(wrong)).unwrap();
        assert!(!outcome.correct);
        assert_eq!(session.current_note(), Some(note));

        let outcome = session.submit(accepted[0]).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.frequency, frequency(note));
        let ticket = outcome.redraw.unwrap();

        let next = session.complete_redraw(ticket).unwrap().unwrap();
        assert_ne!(next, note);
        answered += 1;
    }

    assert_eq!(session.correct_count(), 20);
    assert_eq!(session.total_count(), 40);
    session.end().unwrap();
    assert_eq!(session.status(), SessionStatus::Ended);
}

/// Sixty ticks end a timed session, and the counters freeze
#[test]
fn test_timed_session_runs_out() {
    let mut session = QuizSession::new(Instrument::Tuba, Difficulty::Advanced, TimingMode::Timed)
        .with_seed(99);
    session.begin().unwrap();

    let mut outcome = TickOutcome::Ignored;
    for _ in 0..60 {
        outcome = session.tick();
    }
    assert_eq!(outcome, TickOutcome::TimesUp);
    assert_eq!(session.status(), SessionStatus::Ended);
    assert_eq!(session.feedback(), &Feedback::TimesUp);

    let total = session.total_count();
    assert_eq!(session.submit(Fingering::OPEN_VALVES), Err(QuizError::SessionInactive));
    assert_eq!(session.total_count(), total);

    // Restart gives a fresh countdown
    session.restart().unwrap();
    assert_eq!(session.remaining_time(), Some(60));
}

/// Consecutive draws never repeat and eventually cover the pool
#[test]
fn test_draw_distribution() {
    for instrument in Instrument::ALL {
        let mut session = QuizSession::new(instrument, Difficulty::Beginner, TimingMode::Practice)
            .with_seed(instrument as u64);
        session.begin().unwrap();

        let mut previous = session.current_note().unwrap();
        let mut seen = HashSet::from([previous]);
        for _ in 0..300 {
            let note = session.draw_note().unwrap();
            assert_ne!(note, previous);
            seen.insert(note);
            previous = note;
        }
        assert_eq!(seen.len(), session.pool().len(), "{instrument}");
    }
}

#[test]
fn test_custom_session_settings() {
    let settings = SessionSettings {
        session_length: 3,
        redraw_delay: Duration::from_millis(10),
    };
    let mut session = QuizSession::new(Instrument::Trumpet, Difficulty::Beginner, TimingMode::Timed)
        .with_settings(settings)
        .with_seed(1);
    session.begin().unwrap();

    let note = session.current_note().unwrap();
    let accepted = get_catalog(Instrument::Trumpet, Difficulty::Beginner).get(note).unwrap();
    let SubmitOutcome { redraw, .. } = session.submit(accepted[0]).unwrap();
    assert_eq!(redraw.unwrap().delay, Duration::from_millis(10));

    assert_eq!(session.tick(), TickOutcome::Remaining(2));
    assert_eq!(session.tick(), TickOutcome::Remaining(1));
    assert_eq!(session.tick(), TickOutcome::TimesUp);
}

/// Controller and tone player together, as the runtime uses them
#[test]
fn test_controller_with_silent_player() {
    let session = QuizSession::new(Instrument::Euphonium, Difficulty::Beginner, TimingMode::Practice)
        .with_seed(5);
    let mut controller = GameController::new(session, Duration::from_millis(250));
    let mut player = SilentPlayer::new();

    controller.apply(QuizAction::Begin);

    let mut played = 0;
    for _ in 0..10 {
        let note = controller.session().current_note().unwrap();
        let accepted = get_catalog(Instrument::Euphonium, Difficulty::Beginner)
            .get(note)
            .unwrap()[0];
        if let Fingering::Valves(valves) = accepted {
            for (index, &state) in valves.iter().enumerate() {
                if state == 1 {
                    controller.apply(QuizAction::ToggleValve(index));
                }
            }
        }

        let mut pending = None;
        for effect in controller.apply(QuizAction::Submit) {
            match effect {
                Effect::PlayTone { frequency, duration } => {
                    player.play(frequency, duration).unwrap();
                    played += 1;
                }
                Effect::ScheduleRedraw(ticket) => pending = Some(ticket),
                other => panic!("unexpected effect {:?}", other),
            }
        }
        controller.handle(Stimulus::Redraw(pending.unwrap()));
    }

    assert_eq!(controller.session().correct_count(), 10);
    assert_eq!(player.played().len(), played);
}

#[test]
fn test_config_file_to_controller() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drill.yaml");
    fs::write(
        &path,
        "game:\n  instrument: \"Trombone\"\n  timing: \"practice\"\n  seed: 8\naudio:\n  enabled: false\n",
    )
    .unwrap();

    let settings = validate_config(&path).unwrap();
    assert!(!settings.audio_enabled);

    let mut controller = GameController::from_settings(&settings);
    assert_eq!(controller.apply(QuizAction::Begin), vec![Effect::StopCountdown]);
    assert_eq!(controller.session().candidate(), Fingering::NO_SLIDE);

    let mut file = GameFile::default();
    file.game.instrument = "Oboe".to_string();
    file.save(&path).unwrap();
    assert!(validate_config(&path).is_err());
}
