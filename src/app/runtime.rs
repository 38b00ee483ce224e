// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Event loop for the terminal game.
//!
//! All stimuli funnel through one unbounded channel and are handled in
//! order on the loop task:
//! - a blocking task reads crossterm key events
//! - an interval task sends one countdown tick per second
//! - sleep tasks deliver delayed draws
//! - a slow refresh interval expires status messages

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::{Effect, GameController, Stimulus};
use crate::audio::TonePlayer;
use crate::quiz::{Epoch, RedrawTicket};
use crate::ui::App;

/// Countdown resolution
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Status message expiry check
const REFRESH_PERIOD: Duration = Duration::from_millis(500);

/// How long the input reader waits before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Run the game until the player quits
pub async fn run(
    mut controller: GameController,
    mut app: App,
    mut player: Box<dyn TonePlayer>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let input = spawn_input_reader(tx.clone());
    let refresh = spawn_refresh(tx.clone());
    let mut countdown: Option<JoinHandle<()>> = None;

    app.draw(&controller.session().view(), controller.ui(), controller.keyboard())
        .context("Failed to draw terminal UI")?;

    info!("Game loop started");
    'game: while let Some(stimulus) = rx.recv().await {
        for effect in controller.handle(stimulus) {
            match effect {
                Effect::ScheduleRedraw(ticket) => {
                    spawn_redraw(tx.clone(), ticket);
                }
                Effect::StartCountdown(epoch) => {
                    if let Some(task) = countdown.take() {
                        task.abort();
                    }
                    countdown = Some(spawn_countdown(tx.clone(), epoch, COUNTDOWN_PERIOD));
                }
                Effect::StopCountdown => {
                    if let Some(task) = countdown.take() {
                        task.abort();
                    }
                }
                Effect::PlayTone { frequency, duration } => {
                    if let Err(err) = player.play(frequency, duration) {
                        warn!(%err, frequency, "Tone playback failed");
                        controller.report_audio_error(&err);
                    }
                }
                Effect::Quit => break 'game,
            }
        }

        app.draw(&controller.session().view(), controller.ui(), controller.keyboard())
            .context("Failed to draw terminal UI")?;
    }

    if let Some(task) = countdown.take() {
        task.abort();
    }
    refresh.abort();
    // The reader exits on its next poll once the channel closes
    drop(rx);
    if let Err(err) = input.await {
        debug!(%err, "Input reader ended abnormally");
    }

    let session = controller.session();
    info!(
        correct = session.correct_count(),
        total = session.total_count(),
        "Game loop finished"
    );
    Ok(())
}

/// Read terminal events on a blocking thread
fn spawn_input_reader(tx: UnboundedSender<Stimulus>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    warn!(%err, "Terminal poll failed");
                    break;
                }
            }

            let stimulus = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Stimulus::Key {
                    code: key.code,
                    modifiers: key.modifiers,
                },
                Ok(Event::Resize(_, _)) => Stimulus::Refresh,
                Ok(_) => continue,
                Err(err) => {
                    warn!(%err, "Terminal read failed");
                    break;
                }
            };

            if tx.send(stimulus).is_err() {
                break;
            }
        }
    })
}

/// Send a tick for `epoch` every `period`, starting one period from now
pub fn spawn_countdown(tx: UnboundedSender<Stimulus>, epoch: Epoch, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            if tx.send(Stimulus::Tick(epoch)).is_err() {
                break;
            }
        }
    })
}

/// Deliver a redraw ticket after its delay
pub fn spawn_redraw(tx: UnboundedSender<Stimulus>, ticket: RedrawTicket) -> JoinHandle<()> {
    tokio::spawn(async move {
        time::sleep(ticket.delay).await;
        let _ = tx.send(Stimulus::Redraw(ticket));
    })
}

fn spawn_refresh(tx: UnboundedSender<Stimulus>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(REFRESH_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Stimulus::Refresh).is_err() {
                break;
            }
        }
    })
}
