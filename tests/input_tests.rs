use hangman::input::{parse_line, resolve, Command, InputEvent, InputSource, ScriptedSource};
use hangman::{GameStatus, Level};

#[test]
fn test_parse_single_key() {
    assert_eq!(parse_line("a"), Some(Command::Key('a')));
    assert_eq!(parse_line("  Q \n"), Some(Command::Key('Q')));
    assert_eq!(parse_line("?"), Some(Command::Key('?')));
}

#[test]
fn test_parse_level_selection() {
    assert_eq!(parse_line("1"), Some(Command::SelectLevel(Level::Basic)));
    assert_eq!(parse_line("3"), Some(Command::SelectLevel(Level::Hard)));
    assert_eq!(parse_line("Intermediate"), Some(Command::SelectLevel(Level::Intermediate)));
}

#[test]
fn test_parse_quit() {
    assert_eq!(parse_line("quit"), Some(Command::Quit));
    assert_eq!(parse_line("EXIT"), Some(Command::Quit));
}

#[test]
fn test_parse_rejects_noise() {
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("   "), None);
    assert_eq!(parse_line("ab"), None);
    assert_eq!(parse_line("4"), Some(Command::Key('4')));
}

#[test]
fn test_keys_are_guesses_while_playing() {
    let status = GameStatus::InProgress;
    assert_eq!(resolve(Command::Key('r'), status), Some(InputEvent::Guess('r')));
    assert_eq!(resolve(Command::Key('q'), status), Some(InputEvent::Guess('q')));
    assert_eq!(resolve(Command::Key('7'), status), Some(InputEvent::Guess('7')));
    assert_eq!(resolve(Command::SelectLevel(Level::Hard), status), None);
    assert_eq!(resolve(Command::Quit, status), Some(InputEvent::Quit));
}

#[test]
fn test_keys_are_controls_when_over() {
    for status in [GameStatus::Won, GameStatus::Lost] {
        assert_eq!(resolve(Command::Key('r'), status), Some(InputEvent::Restart));
        assert_eq!(resolve(Command::Key('R'), status), Some(InputEvent::Restart));
        assert_eq!(resolve(Command::Key('q'), status), Some(InputEvent::Quit));
        assert_eq!(resolve(Command::Key('a'), status), None);
        assert_eq!(
            resolve(Command::SelectLevel(Level::Hard), status),
            Some(InputEvent::SelectLevel(Level::Hard))
        );
    }
}

#[tokio::test]
async fn test_scripted_source_replays_then_closes() {
    let mut source = ScriptedSource::from_lines(["a", "nonsense", "2", "quit"]);
    assert_eq!(source.remaining(), 3);
    assert_eq!(source.next_command().await, Some(Command::Key('a')));
    assert_eq!(
        source.next_command().await,
        Some(Command::SelectLevel(Level::Intermediate))
    );
    assert_eq!(source.next_command().await, Some(Command::Quit));
    assert_eq!(source.next_command().await, None);
}
