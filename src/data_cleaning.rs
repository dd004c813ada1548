//! Reads dictionary files into normalized word lists.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{LadderError, Result};

/// One row of a CSV dictionary. Columns other than `word` are ignored.
#[derive(Debug, Deserialize)]
struct DictionaryRow {
    word: String,
}

/// Trims and lowercases a word.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

// normalizes, drops blanks, keeps the first of any repeats
fn clean<I: IntoIterator<Item = String>>(raw: I) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|word| normalize(&word))
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// One word per line.
pub fn read_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(clean(lines))
}

pub fn read_words_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LadderError::io(path, e))?;
    let words = read_words(BufReader::new(file)).map_err(|e| LadderError::io(path, e))?;
    info!(path = %path.display(), words = words.len(), "loaded dictionary");
    Ok(words)
}

/// CSV dictionary with a header row containing a `word` column.
pub fn read_words_csv(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LadderError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let rows = reader
        .deserialize::<DictionaryRow>()
        .map(|row| row.map(|row| row.word))
        .collect::<std::result::Result<Vec<String>, csv::Error>>()?;

    let words = clean(rows);
    info!(path = %path.display(), words = words.len(), "loaded CSV dictionary");
    Ok(words)
}
