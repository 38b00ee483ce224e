// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Score, timer and feedback display.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::quiz::{Feedback, SessionStatus, SessionView};

/// Style for a feedback message
pub fn feedback_style(feedback: &Feedback) -> Style {
    match feedback {
        Feedback::Correct => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Feedback::Incorrect => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Feedback::TimesUp => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Feedback::SoundUnavailable(_) => Style::default().fg(Color::Green),
        Feedback::MissingFingering(_) | Feedback::NoNotes => Style::default().fg(Color::Yellow),
        Feedback::None => Style::default(),
    }
}

/// Score line text
pub fn score_text(view: &SessionView) -> String {
    format!("Correct: {} / {}", view.correct_count, view.total_count)
}

/// Timer text: seconds left, or the practice label
pub fn timer_text(view: &SessionView) -> String {
    match view.remaining_time {
        Some(seconds) => format!("Time: {}s", seconds),
        None => "Practice".to_string(),
    }
}

/// Scoreboard widget
pub struct ScoreboardWidget<'a> {
    view: &'a SessionView,
    block: Option<Block<'a>>,
}

impl<'a> ScoreboardWidget<'a> {
    /// Create a new scoreboard widget
    pub fn new(view: &'a SessionView) -> Self {
        Self { view, block: None }
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for ScoreboardWidget<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block.take() {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let view = self.view;
        let timer_style = match view.remaining_time {
            Some(s) if s <= 10 && view.status == SessionStatus::Active => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
            Some(_) => Style::default().fg(Color::Magenta),
            None => Style::default().fg(Color::DarkGray),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(score_text(view), Style::default().fg(Color::Cyan)),
                Span::raw("   "),
                Span::styled(timer_text(view), timer_style),
            ]),
            Line::from(Span::styled(view.feedback.message(), feedback_style(&view.feedback))),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
