use std::time::Duration;

use hangman::{
    Clock, GameEngine, GameStatus, Level, ManualClock, Round, WordLists, LIVES, TIMER_LIMIT_SECS,
};
use rand::{rngs::SmallRng, SeedableRng};

const START: Duration = Duration::from_secs(1_000);

fn round() -> Round {
    Round::with_answer(Level::Basic, "apple", START)
}

#[test]
fn test_countdown_tracks_elapsed_seconds() {
    let mut r = round();
    r.tick(START + Duration::from_millis(4_900));
    assert_eq!(r.time_remaining(), TIMER_LIMIT_SECS - 4);
    assert_eq!(r.lives(), LIVES);
}

#[test]
fn test_timer_deducts_life() {
    let mut r = round();
    let now = START + Duration::from_secs(TIMER_LIMIT_SECS + 1);
    r.tick(now);
    assert_eq!(r.lives(), LIVES - 1);
    assert_eq!(r.time_remaining(), TIMER_LIMIT_SECS);
    assert_eq!(r.window_start(), now);
    assert_eq!(r.status(), GameStatus::InProgress);
}

#[test]
fn test_expiry_at_exactly_the_limit() {
    let mut r = round();
    r.tick(START + Duration::from_millis(TIMER_LIMIT_SECS * 1_000 - 1));
    assert_eq!(r.lives(), LIVES);
    assert_eq!(r.time_remaining(), 1);
    r.tick(START + Duration::from_secs(TIMER_LIMIT_SECS));
    assert_eq!(r.lives(), LIVES - 1);
}

#[test]
fn test_each_expiry_costs_exactly_one_life() {
    let mut r = round();
    // A long stall still only costs one life per sample.
    r.tick(START + Duration::from_secs(10 * TIMER_LIMIT_SECS));
    assert_eq!(r.lives(), LIVES - 1);
}

#[test]
fn test_guess_does_not_reset_window() {
    let mut r = round();
    r.tick(START + Duration::from_secs(10));
    r.submit_guess('a');
    r.tick(START + Duration::from_secs(TIMER_LIMIT_SECS));
    assert_eq!(r.lives(), LIVES - 1);
}

#[test]
fn test_repeated_expiry_loses_round() {
    let mut r = round();
    let mut now = START;
    for _ in 0..LIVES {
        now += Duration::from_secs(TIMER_LIMIT_SECS);
        r.tick(now);
    }
    assert_eq!(r.lives(), 0);
    assert_eq!(r.status(), GameStatus::Lost);
    r.tick(now + Duration::from_secs(TIMER_LIMIT_SECS));
    assert_eq!(r.lives(), 0);
}

#[test]
fn test_tick_is_noop_after_win() {
    let mut r = round();
    for letter in ['a', 'p', 'l', 'e'] {
        r.submit_guess(letter);
    }
    r.tick(START + Duration::from_secs(5));
    assert_eq!(r.time_remaining(), TIMER_LIMIT_SECS);
    assert_eq!(r.lives(), LIVES);
}

#[test]
fn test_engine_samples_its_clock() {
    let clock = ManualClock::starting_at(START);
    let mut engine = GameEngine::new(
        WordLists::standard(),
        Level::Basic,
        SmallRng::seed_from_u64(7),
        &clock,
    );
    clock.advance(Duration::from_secs(3));
    engine.tick();
    assert_eq!(engine.round().time_remaining(), TIMER_LIMIT_SECS - 3);

    clock.advance(Duration::from_secs(TIMER_LIMIT_SECS));
    engine.frame();
    assert_eq!(engine.round().lives(), LIVES - 1);
    assert_eq!(engine.round().window_start(), clock.now());
}

#[test]
fn test_restart_opens_fresh_window() {
    let clock = ManualClock::starting_at(START);
    let mut engine = GameEngine::new(
        WordLists::standard(),
        Level::Basic,
        SmallRng::seed_from_u64(7),
        &clock,
    );
    clock.advance(Duration::from_secs(9));
    engine.tick();
    engine.restart();
    assert_eq!(engine.round().time_remaining(), TIMER_LIMIT_SECS);
    assert_eq!(engine.round().window_start(), START + Duration::from_secs(9));
}

#[test]
fn test_manual_clock_never_goes_back() {
    let clock = ManualClock::starting_at(START);
    clock.set(Duration::ZERO);
    assert_eq!(clock.now(), START);
}
