//! Candidate-counting letter suggestions for the automatic player.
//! Uses no_std; allocation is limited to the candidate filter.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::core::{common::fold, round::RoundSnapshot};

/// English letters from most to least common, used to break ties and as the
/// fallback when no candidate fits the board.
pub const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Returns `true` when `entry` could still be the answer behind `view`:
/// same length, every revealed position matches, no unrevealed position
/// holds an already-guessed letter and no wrong letter appears anywhere.
pub fn is_candidate(entry: &str, view: &RoundSnapshot) -> bool {
    if entry.chars().count() != view.revealed.len() {
        return false;
    }
    entry.chars().zip(view.revealed.iter()).all(|(c, slot)| match slot {
        Some(shown) => fold(c) == fold(*shown),
        None => c.is_alphabetic() && !view.guessed.contains(&fold(c)),
    })
}

/// Pick the next letter to try.
///
/// Every candidate answer votes once for each unguessed letter it contains;
/// the most voted letter wins, ties going to the more common English letter.
/// Returns `None` when every letter of the alphabet has been tried.
pub fn suggest<'a, I>(view: &RoundSnapshot, candidates: I) -> Option<char>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut votes: BTreeMap<char, usize> = BTreeMap::new();
    for entry in candidates.into_iter().filter(|e| is_candidate(e, view)) {
        let mut seen = String::new();
        for c in entry.chars().filter(|c| c.is_alphabetic()).map(fold) {
            if !view.guessed.contains(&c) && !seen.contains(c) {
                seen.push(c);
                *votes.entry(c).or_default() += 1;
            }
        }
    }

    let rank = |c: char| FREQUENCY_ORDER.find(c).unwrap_or(FREQUENCY_ORDER.len());
    let best = votes
        .iter()
        .max_by(|(a, va), (b, vb)| va.cmp(vb).then_with(|| rank(**b).cmp(&rank(**a))))
        .map(|(c, _)| *c);

    best.or_else(|| FREQUENCY_ORDER.chars().find(|c| !view.guessed.contains(c)))
}
