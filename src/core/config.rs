/// Lives at the start of every round.
pub const LIVES: u8 = 6;
/// Length of one guessing window in seconds.
pub const TIMER_LIMIT_SECS: u64 = 15;
/// Number of frames the loss animation runs for.
pub const HANG_ANIMATION_FRAMES: u8 = 30;
/// Marker shown in place of an unrevealed letter.
pub const PLACEHOLDER: char = '_';
/// Rate at which the presentation loop ticks the engine.
pub const FRAMES_PER_SECOND: u32 = 30;

pub const BASIC_WORDS: [&str; 5] = ["python", "hangman", "school", "programming", "testing"];

pub const INTERMEDIATE_PHRASES: [&str; 4] = [
    "open source",
    "unit test",
    "software engineering",
    "artificial intelligence",
];

pub const HARD_PHRASES: [&str; 9] = [
    "cryptography",
    "synchronization",
    "pneumonoultramicroscopicsilicovolcanoconiosis",
    "object oriented programming",
    "asynchronous event loop",
    "dijkstra's algorithm",
    "recursion depth exceeded",
    "differential equations",
    "quantum entanglement",
];
