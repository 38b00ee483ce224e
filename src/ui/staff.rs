// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Five-line staff widget.
//!
//! One terminal row per diatonic step: lines on even steps, spaces on
//! odd ones. Notes outside the staff get ledger lines.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Widget},
};

use crate::music::{Accidental, Clef, DisplayNote};

/// Steps from the bottom line to the top line
const STAFF_TOP: i32 = 8;

/// Staff step of the bottom line, in display octaves.
///
/// Bass notes are displayed an octave down, so the bass bottom line
/// (written G2) sits at display G1.
pub fn bottom_line_step(clef: Clef) -> i32 {
    match clef {
        // E4
        Clef::Treble => 4 * 7 + 2,
        // G1
        Clef::Bass => 7 + 4,
    }
}

/// Position of a note relative to the bottom line (0 = bottom line)
pub fn staff_position(note: &DisplayNote, clef: Clef) -> i32 {
    note.staff_step() - bottom_line_step(clef)
}

/// Ledger line positions needed for a note position
pub fn ledger_lines(position: i32) -> Vec<i32> {
    if position < 0 {
        (position..0).filter(|p| p % 2 == 0).collect()
    } else if position > STAFF_TOP {
        (STAFF_TOP + 2..=position).filter(|p| p % 2 == 0).collect()
    } else {
        Vec::new()
    }
}

/// Accidental glyph drawn before the note head
fn accidental_glyph(accidental: Accidental) -> &'static str {
    match accidental {
        Accidental::Natural => "♮",
        Accidental::Flat => "♭",
        Accidental::Sharp => "♯",
    }
}

/// Staff widget showing one note
pub struct StaffWidget<'a> {
    clef: Clef,
    note: Option<DisplayNote>,
    block: Option<Block<'a>>,
}

impl<'a> StaffWidget<'a> {
    /// Create an empty staff
    pub fn new(clef: Clef) -> Self {
        Self {
            clef,
            note: None,
            block: None,
        }
    }

    /// Set the note to draw
    pub fn note(mut self, note: Option<DisplayNote>) -> Self {
        self.note = note;
        self
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Staff position shown on the top row
    fn top_position(&self, height: i32) -> i32 {
        let note = self.note.map(|n| staff_position(&n, self.clef));
        let low = note.map_or(-1, |p| p.min(-1) - 1);
        let high = note.map_or(STAFF_TOP + 1, |p| p.max(STAFF_TOP + 1) + 1);

        if high - low + 1 <= height {
            // Center the needed span in the available rows
            let spare = height - (high - low + 1);
            return high + spare / 2;
        }

        // Too tall: keep the note visible, centered
        let center = note.unwrap_or(STAFF_TOP / 2);
        center.saturating_add(height / 2)
    }
}

impl Widget for StaffWidget<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block.take() {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        if area.width < 8 || area.height == 0 {
            return;
        }

        let top = self.top_position(area.height as i32);
        let row_of = |position: i32| -> Option<u16> {
            let row = top - position;
            (row >= 0 && row < area.height as i32).then(|| area.y + row as u16)
        };

        let line_style = Style::default().fg(Color::Gray);
        let left = area.x + 2;
        let width = area.width - 2;
        let note_x = area.x + area.width / 2;

        // Staff lines
        for position in (0..=STAFF_TOP).step_by(2) {
            if let Some(y) = row_of(position) {
                buf.set_string(left, y, "─".repeat(width as usize), line_style);
            }
        }

        // Clef marker on the line the clef names (G line / F line)
        let (clef_label, clef_position) = match self.clef {
            Clef::Treble => ("G", 2),
            Clef::Bass => ("F", 6),
        };
        if let Some(y) = row_of(clef_position) {
            buf.set_string(
                area.x,
                y,
                clef_label,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            );
        }

        let Some(note) = self.note else {
            return;
        };
        let position = staff_position(&note, self.clef);

        for ledger in ledger_lines(position) {
            if let Some(y) = row_of(ledger) {
                buf.set_string(note_x.saturating_sub(2), y, "─────", line_style);
            }
        }

        let note_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        if let Some(y) = row_of(position) {
            buf.set_string(note_x, y, "●", note_style);
            if note.accidental.is_marked() {
                let glyph = accidental_glyph(note.accidental);
                buf.set_string(note_x.saturating_sub(2), y, glyph, note_style);
            }
        }
    }
}
