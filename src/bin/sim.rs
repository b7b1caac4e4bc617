use hangman::{ai, GameEngine, GameStatus, Level, ManualClock, WordLists};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [basic|intermediate|hard]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let level = args.get(2).map(|s| Level::from_name(s)).unwrap_or_default();

    let rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new(WordLists::standard(), level, rng, ManualClock::new());

    let mut guesses = Vec::new();
    while engine.status() == GameStatus::InProgress {
        let view = engine.snapshot();
        let Some(letter) = ai::suggest(&view, engine.words().for_level(level)) else {
            break;
        };
        engine.submit_guess(letter);
        engine.frame();
        guesses.push(letter.to_string());
    }

    let round = engine.round();
    let result = json!({
        "level": level,
        "answer": round.answer(),
        "status": round.status(),
        "lives": round.lives(),
        "guesses": guesses,
        "word": round.rendered_word(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
