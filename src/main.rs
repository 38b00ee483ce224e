// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use brass_drill::app::{runtime, GameController};
use brass_drill::audio::{SilentPlayer, ToneEngine, TonePlayer};
use brass_drill::catalog::{self, get_eligible_pool, Difficulty, Instrument};
use brass_drill::config::{validate_config, Settings};
use brass_drill::ui::App;

fn print_usage() {
    println!("brass-drill - Brass Fingering Drill");
    println!();
    println!("Usage: brass-drill [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <PATH>                    Load settings from a YAML or TOML file");
    println!("  --seed <N>                         Fixed seed for note draws");
    println!("  --no-audio                         Do not play a tone on correct answers");
    println!("  --list-instruments                 List instruments with ranges and note counts");
    println!("  --pool <INSTRUMENT> <DIFFICULTY>   Print the notes eligible for a drill");
    println!("  --help                             Show this help message");
}

/// What to do after parsing the command line
#[derive(Debug, PartialEq)]
enum Command {
    Play,
    ListInstruments,
    Pool(Instrument, Difficulty),
    Help,
}

#[derive(Debug)]
struct Options {
    command: Command,
    config: Option<PathBuf>,
    seed: Option<u64>,
    no_audio: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        command: Command::Play,
        config: None,
        seed: None,
        no_audio: false,
    };

    let mut i = 1;
    while i < args.len() {
        let at = i;
        let value = move |n: usize| -> Result<&String> {
            args.get(at + n)
                .ok_or_else(|| anyhow!("{} requires {} argument(s)", args[at], n))
        };

        match args[i].as_str() {
            "--config" => {
                options.config = Some(PathBuf::from(value(1)?));
                i += 1;
            }
            "--seed" => {
                let seed = value(1)?;
                options.seed = Some(
                    seed.parse()
                        .map_err(|_| anyhow!("Invalid seed: {}", seed))?,
                );
                i += 1;
            }
            "--no-audio" => options.no_audio = true,
            "--list-instruments" => options.command = Command::ListInstruments,
            "--pool" => {
                let instrument: Instrument = value(1)?.parse()?;
                let difficulty: Difficulty = value(2)?.parse()?;
                options.command = Command::Pool(instrument, difficulty);
                i += 2;
            }
            "--help" | "-h" => options.command = Command::Help,
            other => bail!("Unknown option: {}", other),
        }
        i += 1;
    }

    Ok(options)
}

fn list_instruments() {
    println!("{:<10} {:<7} {:<9} {:>9} {:>9}", "Instrument", "Clef", "Range", "Beginner", "Advanced");
    for instrument in Instrument::ALL {
        let range = instrument.range();
        println!(
            "{:<10} {:<7} {:<9} {:>9} {:>9}",
            instrument.name(),
            instrument.clef().name(),
            format!("{}-{}", range.min, range.max),
            get_eligible_pool(instrument, Difficulty::Beginner).len(),
            get_eligible_pool(instrument, Difficulty::Advanced).len(),
        );
    }
}

fn print_pool(instrument: Instrument, difficulty: Difficulty) {
    let pool = get_eligible_pool(instrument, difficulty);
    println!("{} ({}): {} notes", instrument, difficulty, pool.len());
    for entry in pool.entries() {
        let fingerings: Vec<String> = entry.fingerings.iter().map(|f| f.to_string()).collect();
        let hz = catalog::frequency(entry.note)
            .map(|hz| format!("{:.2} Hz", hz))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:<4} {:<24} {}", entry.note, fingerings.join(" "), hz);
    }
}

/// Install the log subscriber.
///
/// The terminal UI owns the screen, so it logs to a file or not at all.
/// Listing commands log to stderr.
fn init_logging(settings: &Settings, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_new(&settings.log_level)
        .with_context(|| format!("Invalid log level: {}", settings.log_level))?;

    match (&settings.log_file, interactive) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, false) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        (None, true) => {}
    }
    Ok(())
}

fn tone_player(settings: &Settings) -> Box<dyn TonePlayer> {
    if !settings.audio_enabled {
        info!("Audio disabled");
        return Box::new(SilentPlayer::new());
    }
    match ToneEngine::start(settings.audio.clone(), settings.volume) {
        Ok(engine) => {
            info!(
                sample_rate = engine.config().sample_rate,
                volume = settings.volume,
                "Tone engine ready"
            );
            Box::new(engine)
        }
        Err(err) => {
            warn!(%err, "Audio unavailable, continuing without sound");
            Box::new(SilentPlayer::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    let mut settings = match &options.config {
        Some(path) => validate_config(path)?,
        None => Settings::default(),
    };
    if options.seed.is_some() {
        settings.seed = options.seed;
    }
    if options.no_audio {
        settings.audio_enabled = false;
    }

    match options.command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::ListInstruments => {
            init_logging(&settings, false)?;
            list_instruments();
            return Ok(());
        }
        Command::Pool(instrument, difficulty) => {
            init_logging(&settings, false)?;
            print_pool(instrument, difficulty);
            return Ok(());
        }
        Command::Play => init_logging(&settings, true)?,
    }

    info!(
        instrument = %settings.instrument,
        difficulty = %settings.difficulty,
        timing = %settings.timing,
        "Starting brass-drill"
    );

    let controller = GameController::from_settings(&settings);
    let player = tone_player(&settings);
    let app = App::new().context("Failed to initialize terminal")?;

    runtime::run(controller, app, player).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("brass-drill")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_args(&args(&[])).unwrap();
        assert_eq!(options.command, Command::Play);
        assert!(options.config.is_none());
        assert!(!options.no_audio);
    }

    #[test]
    fn test_parse_flags() {
        let options = parse_args(&args(&["--config", "drill.yaml", "--seed", "42", "--no-audio"])).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("drill.yaml")));
        assert_eq!(options.seed, Some(42));
        assert!(options.no_audio);
    }

    #[test]
    fn test_parse_pool() {
        let options = parse_args(&args(&["--pool", "trombone", "advanced"])).unwrap();
        assert_eq!(options.command, Command::Pool(Instrument::Trombone, Difficulty::Advanced));

        assert!(parse_args(&args(&["--pool", "kazoo", "beginner"])).is_err());
        assert!(parse_args(&args(&["--pool", "tuba"])).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
