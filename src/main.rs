//! flashdeck - Entry Point

use clap::Parser;
use flashdeck::config::{self, CliOverrides, ResolvedConfig};
use flashdeck::model::{AppError, Category};
use flashdeck::source::{detect_card_source, load_deck};
use flashdeck::state::ReviewSession;
use flashdeck::view::{ColorConfig, ScreenOptions};
use std::path::PathBuf;
use tracing::info;

/// flashdeck - review flash cards in the terminal
#[derive(Parser, Debug)]
#[command(name = "flashdeck")]
#[command(version)]
#[command(about = "Review question/answer flash cards in the terminal")]
pub struct Args {
    /// JSON deck file (built-in sample decks are used if not provided)
    pub deck: Option<PathBuf>,

    /// Deck category to review
    #[arg(short, long, value_parser = ["general", "coding"])]
    pub category: Option<String>,

    /// Shuffle the deck before the first card
    #[arg(short, long)]
    pub shuffle: bool,

    /// Append every rating to this JSON Lines file
    #[arg(long)]
    pub progress_log: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags that were explicitly set, for the last step of the precedence chain.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            category: self.category.as_deref().and_then(Category::parse),
            shuffle: self.shuffle.then_some(true),
            deck_path: self.deck.clone(),
            progress_log_path: self.progress_log.clone(),
        }
    }
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file)?;
    let with_env = config::apply_env_overrides(merged)?;
    Ok(config::apply_cli_overrides(with_env, args.overrides()))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    flashdeck::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let key_bindings = config.key_bindings()?;

    let source = detect_card_source(config.deck_path.clone());
    let mut deck = load_deck(&source, config.category)?;
    if config.shuffle_on_start {
        deck = deck.shuffled(&mut rand::thread_rng());
        info!("Deck shuffled on start");
    }

    let sink = flashdeck::persistence::sink_for(config.progress_log_path.clone());
    let options = ScreenOptions {
        key_bindings,
        color: ColorConfig::from_env_and_args(args.no_color),
    };

    flashdeck::view::run_session(ReviewSession::new(deck), sink, options)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}
