//! Binary entrypoint for Wump.2.
//!
//! Commands:
//! - `play` (default) - run the interactive game menu
//! - `init` - write a starter `wump2.toml`
//! - `roster` - print the level roster as JSON
//!
//! See the library crate docs for module-level details: `wump2::`.
use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wump2::config::Config;
use wump2::game::{Game, LEVEL_ROSTER};
use wump2::intro::play_intro;
use wump2::presenter::{ConsolePresenter, Presenter, ScriptedPresenter};

#[derive(Parser)]
#[command(name = "wump2")]
#[command(about = "Hunt the Wumpus, four levels deep")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "wump2.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fixed RNG seed for a reproducible cave
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the title sequence
    #[arg(long, global = true)]
    no_intro: bool,

    /// Read answers from a file instead of the keyboard, one per line
    #[arg(long, global = true)]
    script: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,
    /// Write a default configuration file
    Init,
    /// Print the level roster as JSON
    Roster,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init runs before a config exists; a missing file just means defaults.
    let config_present = std::path::Path::new(&cli.config).exists();
    let (config, load_error) = match cli.command {
        Some(Commands::Init) => (Config::default(), None),
        _ if !config_present => (Config::default(), None),
        _ => match Config::load(&cli.config) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };
    init_logging(&config, cli.verbose);
    if let Some(e) = load_error {
        warn!("{} (using defaults)", e);
    } else if !config_present {
        debug!("no config at {}; using defaults", cli.config);
    }

    match cli.command {
        Some(Commands::Init) => {
            Config::create_default(&cli.config)?;
            println!("Configuration file created at {}", cli.config);
        }
        Some(Commands::Roster) => {
            let json = serde_json::to_string_pretty(&LEVEL_ROSTER)?;
            println!("{}", json);
        }
        Some(Commands::Play) | None => play(config, cli.seed, cli.no_intro, cli.script)?,
    }

    Ok(())
}

fn play(config: Config, seed: Option<u64>, no_intro: bool, script: Option<String>) -> Result<()> {
    let seed = seed.or(config.game.seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    info!(
        "Starting Wump.2 v{} ({} levels, seed {:?})",
        env!("CARGO_PKG_VERSION"),
        config.game.levels,
        seed
    );

    let mut presenter: Box<dyn Presenter> = match script {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script file {}", path))?;
            Box::new(ScriptedPresenter::from_script(&text).with_echo(true))
        }
        None => Box::new(ConsolePresenter::stdio(&config.presentation)),
    };

    if config.game.intro && !no_intro {
        play_intro(presenter.as_mut());
    }
    let mut game = Game::new(config.game.levels);
    game.run(presenter.as_mut(), &mut rng);
    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // Base level from CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

            // Narration owns stdout; mirror log lines to stderr only when a person is watching it
            let is_tty = atty::is(atty::Stream::Stderr);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
            let _ = builder.try_init();
            return;
        }
    }
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}
