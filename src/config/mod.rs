// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for brass-drill.
//!
//! A game file has three sections: `game` (instrument, difficulty,
//! timing and session parameters), `audio` and `logging`. Files are YAML
//! or TOML, picked by extension. Every field has a default, so an empty
//! file is valid.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::audio::AudioConfig;
use crate::catalog::{Difficulty, Instrument};
use crate::quiz::{SessionSettings, TimingMode};

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GameFile {
    /// Quiz settings
    #[serde(default)]
    pub game: GameConfig,
    /// Audio cue settings
    #[serde(default)]
    pub audio: AudioSettings,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameFile {
    /// Load a configuration file, YAML or TOML by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            Some("yaml") | Some("yml") | None => Self::from_yaml(&contents),
            Some(other) => bail!("Unsupported config format: .{}", other),
        }
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Resolve names into typed settings
    pub fn settings(&self) -> Result<Settings> {
        let game = &self.game;
        let instrument: Instrument = game.instrument.parse()?;
        let difficulty: Difficulty = game.difficulty.parse()?;
        let timing: TimingMode = game.timing.parse()?;

        if game.session_seconds == 0 {
            bail!("game.session_seconds must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            bail!("audio.volume must be between 0.0 and 1.0, got {}", self.audio.volume);
        }
        if self.audio.sample_rate == 0 {
            bail!("audio.sample_rate must be positive");
        }

        Ok(Settings {
            instrument,
            difficulty,
            timing,
            session: SessionSettings {
                session_length: game.session_seconds,
                redraw_delay: Duration::from_millis(game.redraw_delay_ms),
            },
            seed: game.seed,
            audio_enabled: self.audio.enabled,
            tone: Duration::from_millis(self.audio.tone_ms),
            volume: self.audio.volume,
            audio: AudioConfig {
                sample_rate: self.audio.sample_rate,
                ..AudioConfig::default()
            },
            log_file: self.logging.file.clone(),
            log_level: self.logging.level.clone(),
        })
    }
}

/// Quiz settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// Instrument name (Trumpet, Trombone, Euphonium, Tuba)
    #[serde(default = "default_instrument")]
    pub instrument: String,
    /// "beginner" or "advanced"
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// "timed" or "practice"
    #[serde(default = "default_timing")]
    pub timing: String,
    /// Countdown length in seconds
    #[serde(default = "default_session_seconds")]
    pub session_seconds: u32,
    /// Pause after a correct answer, in milliseconds
    #[serde(default = "default_redraw_delay_ms")]
    pub redraw_delay_ms: u64,
    /// Fixed seed for note draws
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_instrument() -> String {
    "Trumpet".to_string()
}
fn default_difficulty() -> String {
    "beginner".to_string()
}
fn default_timing() -> String {
    "timed".to_string()
}
fn default_session_seconds() -> u32 {
    60
}
fn default_redraw_delay_ms() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            instrument: default_instrument(),
            difficulty: default_difficulty(),
            timing: default_timing(),
            session_seconds: default_session_seconds(),
            redraw_delay_ms: default_redraw_delay_ms(),
            seed: None,
        }
    }
}

/// Audio cue settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioSettings {
    /// Play a tone on correct answers
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Tone length in milliseconds (an eighth note at 120 BPM)
    #[serde(default = "default_tone_ms")]
    pub tone_ms: u64,
    /// Output volume (0.0 - 1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Output sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_true() -> bool {
    true
}
fn default_tone_ms() -> u64 {
    250
}
fn default_volume() -> f32 {
    0.3
}
fn default_sample_rate() -> u32 {
    44100
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            tone_ms: default_tone_ms(),
            volume: default_volume(),
            sample_rate: default_sample_rate(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log file; the terminal UI logs nowhere without one
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Level filter (error, warn, info, debug, trace)
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

/// Validated settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub instrument: Instrument,
    pub difficulty: Difficulty,
    pub timing: TimingMode,
    pub session: SessionSettings,
    pub seed: Option<u64>,
    pub audio_enabled: bool,
    pub tone: Duration,
    pub volume: f32,
    pub audio: AudioConfig,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            instrument: Instrument::Trumpet,
            difficulty: Difficulty::Beginner,
            timing: TimingMode::Timed,
            session: SessionSettings::default(),
            seed: None,
            audio_enabled: true,
            tone: Duration::from_millis(default_tone_ms()),
            volume: default_volume(),
            audio: AudioConfig::default(),
            log_file: None,
            log_level: default_level(),
        }
    }
}

/// Load and validate a configuration file
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    GameFile::load(path)?
        .settings()
        .with_context(|| format!("Invalid configuration in {:?}", path))
}
