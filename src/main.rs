use std::path::PathBuf;

use clap::Parser;
use hangman::{
    config::load_word_lists, init_logging, input::StdinSource, select_level,
    ui::TerminalPresenter, GameEngine, Level, MonotonicClock, Session, WordLists,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Terminal hangman with a per-guess countdown", long_about = None)]
struct Cli {
    /// Difficulty level. Shows the level menu when omitted.
    #[arg(long, value_enum)]
    level: Option<Level>,
    #[arg(long, help = "Fix RNG seed for reproducible word draws (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// JSON file with "basic", "intermediate" and "hard" word lists.
    #[arg(long)]
    words: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let words = match &cli.words {
        Some(path) => load_word_lists(path)?,
        None => WordLists::standard(),
    };

    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut source = StdinSource::spawn();
    let mut presenter = TerminalPresenter::new();

    let level = match cli.level {
        Some(level) => level,
        None => match select_level(&mut source, &mut presenter).await {
            Some(level) => level,
            None => return Ok(()),
        },
    };

    let engine = GameEngine::new(words, level, rng, MonotonicClock::new());
    let mut session = Session::new(engine, source, presenter);
    session.run().await;

    // The stdin reader task may still be blocked on a read.
    std::process::exit(0);
}
