// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal UI for brass-drill.
//!
//! Provides a ratatui-based terminal interface with the selectors, the
//! note on a staff, the fingering being built, score and timer.

mod fingering;
mod scoreboard;
mod staff;

pub use fingering::FingeringWidget;
pub use scoreboard::{score_text, timer_text, ScoreboardWidget};
pub use staff::{ledger_lines, staff_position, StaffWidget};

use std::collections::BTreeMap;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::catalog::Mechanism;
use crate::control::keyboard::CATEGORIES;
use crate::control::{format_shortcut, KeyboardController};
use crate::music::parse_for_display;
use crate::quiz::{SessionStatus, SessionView};

/// How long a status message stays up
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// UI-only state (not part of the quiz session)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Help text visible
    pub show_help: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Status message timestamp
    pub status_time: Option<Instant>,
}

impl UiState {
    /// Set a status message that will be displayed temporarily
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_time = Some(Instant::now());
    }

    /// Clear expired status message
    pub fn clear_expired_status(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() > STATUS_TIMEOUT {
                self.status_message = None;
                self.status_time = None;
            }
        }
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

/// Terminal UI application
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Enter raw mode and the alternate screen
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        Ok(Self { terminal })
    }

    /// Draw the UI
    pub fn draw(
        &mut self,
        view: &SessionView,
        ui: &UiState,
        keyboard: &KeyboardController,
    ) -> io::Result<()> {
        self.terminal.draw(|frame| render(frame, view, ui, keyboard))?;
        Ok(())
    }

    /// Cleanup terminal on drop
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render a full frame
pub fn render(frame: &mut Frame, view: &SessionView, ui: &UiState, keyboard: &KeyboardController) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Selectors
            Constraint::Min(11),   // Staff
            Constraint::Length(5), // Fingering
            Constraint::Length(4), // Score
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], view);
    render_note_panel(frame, chunks[1], view);
    frame.render_widget(
        FingeringWidget::new(view.candidate).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", fingering_title(view))),
        ),
        chunks[2],
    );
    frame.render_widget(
        ScoreboardWidget::new(view).block(Block::default().borders(Borders::ALL).title(" Score ")),
        chunks[3],
    );
    render_status_bar(frame, chunks[4], view, ui);

    if ui.show_help {
        render_help_overlay(frame, area, keyboard);
    }
}

fn fingering_title(view: &SessionView) -> &'static str {
    match view.instrument.mechanism() {
        Mechanism::Valves => "Valves",
        Mechanism::Slide => "Slide",
    }
}

/// Render instrument / difficulty / timing selectors
fn render_header(frame: &mut Frame, area: Rect, view: &SessionView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Brass Fingering Drill ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let (state_text, state_style) = match view.status {
        SessionStatus::NotStarted => ("READY", Style::default().fg(Color::Yellow)),
        SessionStatus::Active => (
            "▶ PLAYING",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        SessionStatus::Ended => ("■ ENDED", Style::default().fg(Color::Red)),
    };

    let line = Line::from(vec![
        Span::styled(format!("{:<10}", state_text), state_style),
        Span::styled("Instrument ", label),
        Span::styled(format!("{:<11}", view.instrument.name()), value),
        Span::styled("Mode ", label),
        Span::styled(format!("{:<10}", view.difficulty.name()), value),
        Span::styled("Timing ", label),
        Span::styled(view.timing.name(), value),
    ]);

    frame.render_widget(Paragraph::new(line), inner);
}

/// Render the staff and the note name
fn render_note_panel(frame: &mut Frame, area: Rect, view: &SessionView) {
    let clef = view.instrument.clef();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} clef ", clef.name()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(inner);

    if view.status != SessionStatus::Active {
        let prompt = match view.status {
            SessionStatus::Ended => "Session over. Press Enter to play again.",
            _ => "Press Enter to start.",
        };
        frame.render_widget(
            Paragraph::new(prompt).style(Style::default().fg(Color::Yellow)),
            chunks[0],
        );
        return;
    }

    let note = view
        .current_note
        .and_then(|n| parse_for_display(n, clef).ok());
    frame.render_widget(StaffWidget::new(clef).note(note), chunks[0]);

    let name = view.current_note.unwrap_or("-");
    let lines = vec![
        Line::from(Span::styled("Note", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            name,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

/// Render status bar
fn render_status_bar(frame: &mut Frame, area: Rect, view: &SessionView, ui: &UiState) {
    let text = if let Some(ref msg) = ui.status_message {
        Span::styled(msg.as_str(), Style::default().fg(Color::Yellow))
    } else {
        let answer = match view.instrument.mechanism() {
            Mechanism::Valves => "←↑→: Valves",
            Mechanism::Slide => "1-7: Slide",
        };
        Span::styled(
            format!(
                " {} | Space: Submit | Enter: Start | i/d/m: Settings | h: Help | q: Quit",
                answer
            ),
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text), area);
}

/// Help rows as (keys, description), grouped by category in display order
pub fn help_rows(keyboard: &KeyboardController) -> Vec<(String, Vec<(String, String)>)> {
    let grouped = keyboard.bindings_by_category();
    let mut sections = Vec::new();

    for category in CATEGORIES {
        let Some(bindings) = grouped.get(category) else {
            continue;
        };

        // Merge bindings that share a description
        let mut rows: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for binding in bindings {
            rows.entry(binding.description.as_str())
                .or_default()
                .push(format_shortcut(&binding.shortcut));
        }

        let rows = rows
            .into_iter()
            .map(|(description, mut keys)| {
                keys.sort();
                (join_keys(&keys), description.to_string())
            })
            .collect();
        sections.push((category.to_string(), rows));
    }

    sections
}

/// Join key names, collapsing a run of digits into `first-last`
fn join_keys(keys: &[String]) -> String {
    let digits: Vec<u32> = keys
        .iter()
        .filter_map(|k| k.parse::<u32>().ok())
        .collect();
    if keys.len() > 2 && digits.len() == keys.len() {
        let first = digits[0];
        let last = digits[digits.len() - 1];
        if last - first + 1 == digits.len() as u32 {
            return format!("{}-{}", first, last);
        }
    }
    keys.join("/")
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, keyboard: &KeyboardController) {
    let mut help_text = Vec::new();
    for (category, rows) in help_rows(keyboard) {
        if !help_text.is_empty() {
            help_text.push(Line::from(""));
        }
        help_text.push(Line::from(Span::styled(
            category,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (keys, description) in rows {
            help_text.push(Line::from(format!("  {:<12}{}", keys, description)));
        }
    }

    // Calculate centered area
    let width = 44.min(area.width.saturating_sub(4));
    let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let help_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);
    frame.render_widget(Paragraph::new(help_text), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, Instrument};
    use crate::quiz::{QuizSession, TimingMode};
    use ratatui::backend::TestBackend;

    fn screen_text(view: &SessionView, ui: &UiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        let keyboard = KeyboardController::with_defaults();
        terminal.draw(|frame| render(frame, view, ui, &keyboard)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_ui_state_status() {
        let mut state = UiState::default();
        assert!(state.status_message.is_none());

        state.set_status("Test message");
        assert_eq!(state.status_message, Some("Test message".to_string()));

        // Not expired yet
        state.clear_expired_status();
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_render_before_start() {
        let session = QuizSession::new(Instrument::Trombone, Difficulty::Beginner, TimingMode::Timed);
        let text = screen_text(&session.view(), &UiState::default());
        assert!(text.contains("READY"));
        assert!(text.contains("Trombone"));
        assert!(text.contains("Press Enter to start."));
        assert!(text.contains("1-7: Slide"));
    }

    #[test]
    fn test_render_active_session() {
        let mut session = QuizSession::new(Instrument::Trumpet, Difficulty::Beginner, TimingMode::Timed)
            .with_seed(9);
        session.begin().unwrap();
        let view = session.view();
        let text = screen_text(&view, &UiState::default());

        assert!(text.contains("PLAYING"));
        assert!(text.contains(view.current_note.unwrap()));
        assert!(text.contains("Correct: 0 / 0"));
        assert!(text.contains("Time: 60s"));
        assert!(text.contains('●'));
    }

    #[test]
    fn test_render_status_message() {
        let session = QuizSession::new(Instrument::Tuba, Difficulty::Beginner, TimingMode::Practice);
        let mut ui = UiState::default();
        ui.set_status("Audio unavailable");
        let text = screen_text(&session.view(), &ui);
        assert!(text.contains("Audio unavailable"));
    }

    #[test]
    fn test_render_help_overlay() {
        let session = QuizSession::new(Instrument::Tuba, Difficulty::Beginner, TimingMode::Practice);
        let ui = UiState {
            show_help: true,
            ..UiState::default()
        };
        let text = screen_text(&session.view(), &ui);
        assert!(text.contains("Help"));
        assert!(text.contains("Submit Answer"));
    }

    #[test]
    fn test_help_rows() {
        let keyboard = KeyboardController::with_defaults();
        let sections = help_rows(&keyboard);
        let names: Vec<&str> = sections.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, CATEGORIES.to_vec());

        let answer = &sections[0].1;
        assert!(answer.contains(&("1-7".to_string(), "Slide Position".to_string())));

        let ui_rows = &sections[3].1;
        assert!(ui_rows.contains(&("?/H".to_string(), "Toggle Help".to_string())));
        assert!(ui_rows.contains(&("Ctrl+C/Q".to_string(), "Quit".to_string())));
    }

    #[test]
    fn test_join_keys() {
        let keys: Vec<String> = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_keys(&keys), "1-3");
        let keys: Vec<String> = ["Q", "Ctrl+C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_keys(&keys), "Q/Ctrl+C");
    }
}
