// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keyboard shortcut handling.
//!
//! Maps key events to quiz actions: valve and slide input, session
//! control, selector changes and UI toggles.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use super::QuizAction;

/// Categories in help display order
pub const CATEGORIES: [&str; 4] = ["Answer", "Session", "Settings", "UI"];

/// A keyboard shortcut definition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a shortcut with no modifiers
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Create a shortcut with Ctrl modifier
    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// A keyboard binding (shortcut to action)
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// The shortcut
    pub shortcut: Shortcut,
    /// The action to perform
    pub action: QuizAction,
    /// Description for help display
    pub description: String,
    /// Category for grouping in help
    pub category: String,
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(shortcut: Shortcut, action: QuizAction, description: impl Into<String>) -> Self {
        Self {
            shortcut,
            action,
            description: description.into(),
            category: "UI".to_string(),
        }
    }

    /// Set the category
    pub fn category(mut self, cat: impl Into<String>) -> Self {
        self.category = cat.into();
        self
    }
}

/// Keyboard controller with configurable bindings
pub struct KeyboardController {
    bindings: HashMap<Shortcut, KeyBinding>,
}

impl KeyboardController {
    /// Create an empty keyboard controller
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a keyboard controller with default bindings
    pub fn with_defaults() -> Self {
        let mut controller = Self::new();
        controller.add_default_bindings();
        controller
    }

    fn add_default_bindings(&mut self) {
        // Valves
        for (index, code) in [KeyCode::Left, KeyCode::Up, KeyCode::Right].into_iter().enumerate() {
            self.add(KeyBinding::new(
                Shortcut::key(code),
                QuizAction::ToggleValve(index),
                format!("Toggle Valve {}", index + 1),
            ).category("Answer"));
        }

        // Slide positions
        for position in 1..=7u8 {
            let c = char::from(b'0' + position);
            self.add(KeyBinding::new(
                Shortcut::key(KeyCode::Char(c)),
                QuizAction::SetSlide(position),
                "Slide Position",
            ).category("Answer"));
        }

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Char(' ')),
            QuizAction::Submit,
            "Submit Answer",
        ).category("Answer"));

        // Session
        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Enter),
            QuizAction::Begin,
            "Start",
        ).category("Session"));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Char('r')),
            QuizAction::Restart,
            "Restart",
        ).category("Session"));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Esc),
            QuizAction::End,
            "End Session",
        ).category("Session"));

        // Settings
        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Char('i')),
            QuizAction::CycleInstrument,
            "Next Instrument",
        ).category("Settings"));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Char('d')),
            QuizAction::ToggleDifficulty,
            "Beginner/Advanced",
        ).category("Settings"));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Char('m')),
            QuizAction::ToggleTiming,
            "Timed/Practice",
        ).category("Settings"));

        // UI
        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Char('?')),
            QuizAction::ToggleHelp,
            "Toggle Help",
        ));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Char('h')),
            QuizAction::ToggleHelp,
            "Toggle Help",
        ));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Char('q')),
            QuizAction::Quit,
            "Quit",
        ));

        self.add(KeyBinding::new(
            Shortcut::ctrl(KeyCode::Char('c')),
            QuizAction::Quit,
            "Quit",
        ));
    }

    /// Add a key binding
    pub fn add(&mut self, binding: KeyBinding) {
        self.bindings.insert(binding.shortcut.clone(), binding);
    }

    /// Remove a key binding
    pub fn remove(&mut self, shortcut: &Shortcut) -> Option<KeyBinding> {
        self.bindings.remove(shortcut)
    }

    /// Get action for a key event.
    ///
    /// Shift is ignored for character keys, since terminals report `?`
    /// with or without it.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<QuizAction> {
        let modifiers = match code {
            KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
            _ => modifiers,
        };
        self.bindings
            .get(&Shortcut::new(code, modifiers))
            .map(|b| b.action)
    }

    /// Get bindings grouped by category, sorted by description within each
    pub fn bindings_by_category(&self) -> HashMap<String, Vec<&KeyBinding>> {
        let mut grouped: HashMap<String, Vec<&KeyBinding>> = HashMap::new();

        for binding in self.bindings.values() {
            grouped
                .entry(binding.category.clone())
                .or_default()
                .push(binding);
        }

        for bindings in grouped.values_mut() {
            bindings.sort_by(|a, b| a.description.cmp(&b.description));
        }

        grouped
    }
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Format a shortcut for display
pub fn format_shortcut(shortcut: &Shortcut) -> String {
    let mut parts = Vec::new();

    if shortcut.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if shortcut.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if shortcut.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }

    let key = match shortcut.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        _ => "?".to_string(),
    };

    parts.push(&key);
    parts.join("+")
}
