#![cfg(feature = "std")]

//! Loading word lists from disk.

use std::path::Path;

use anyhow::Context;
use log::warn;
use serde::Deserialize;

use crate::core::WordLists;

/// On-disk layout of a word list file.
#[derive(Debug, Deserialize)]
struct WordListFile {
    basic: Vec<String>,
    intermediate: Vec<String>,
    hard: Vec<String>,
}

/// Parse and validate word lists from JSON text.
pub fn parse_word_lists(json: &str) -> anyhow::Result<WordLists> {
    let file: WordListFile = serde_json::from_str(json).context("malformed word list file")?;
    let lists = WordLists::new(file.basic, file.intermediate, file.hard)?;
    Ok(lists)
}

/// Read word lists from `path`. A missing or invalid file is fatal at startup;
/// the rejection is logged before the error is returned.
pub fn load_word_lists(path: &Path) -> anyhow::Result<WordLists> {
    let result = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read word list file {}", path.display()))
        .and_then(|json| {
            parse_word_lists(&json)
                .with_context(|| format!("invalid word list file {}", path.display()))
        });
    if let Err(err) = &result {
        warn!("Rejected word lists from {}: {:#}", path.display(), err);
    }
    result
}
