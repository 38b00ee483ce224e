// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Candidate fingering display: valve circles or slide positions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::catalog::Fingering;

/// Key hints under each valve
const VALVE_KEYS: [&str; 3] = ["←", "↑", "→"];

/// Glyph for a valve state
fn valve_glyph(state: u8) -> &'static str {
    match state {
        0 => "○",
        1 => "●",
        _ => "◐",
    }
}

/// Widget for the fingering being built
pub struct FingeringWidget<'a> {
    fingering: Fingering,
    block: Option<Block<'a>>,
}

impl<'a> FingeringWidget<'a> {
    /// Create a new fingering widget
    pub fn new(fingering: Fingering) -> Self {
        Self {
            fingering,
            block: None,
        }
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.fingering {
            Fingering::Valves(valves) => {
                let pressed = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
                let open = Style::default().fg(Color::Gray);

                let circles: Vec<Span> = valves
                    .iter()
                    .map(|&v| Span::styled(format!(" {} ", valve_glyph(v)), if v == 0 { open } else { pressed }))
                    .collect();
                let numbers: Vec<Span> = (1..=3).map(|n| Span::raw(format!(" {} ", n))).collect();
                let keys: Vec<Span> = VALVE_KEYS
                    .iter()
                    .map(|k| Span::styled(format!(" {} ", k), Style::default().fg(Color::DarkGray)))
                    .collect();

                vec![Line::from(circles), Line::from(numbers), Line::from(keys)]
            }
            Fingering::Slide(selected) => {
                let positions: Vec<Span> = (1..=7u8)
                    .map(|p| {
                        if p == selected {
                            Span::styled(
                                format!("[{}]", p),
                                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled(format!(" {} ", p), Style::default().fg(Color::Gray))
                        }
                    })
                    .collect();
                let label = if selected == 0 {
                    "Slide: press 1-7".to_string()
                } else {
                    format!("Slide position {}", selected)
                };

                vec![
                    Line::from(positions),
                    Line::from(""),
                    Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
                ]
            }
        }
    }
}

impl Widget for FingeringWidget<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block.take() {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
