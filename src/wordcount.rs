//! Word-frequency counting over character streams.
//!
//! A token is a maximal run of alphanumeric characters or apostrophes,
//! lower-cased; anything else is a separator. Counts go into an
//! [`FnvHashMap`], FNV being a good fit for hashing many short keys.

use std::fs::File;
use std::io::Read;
use std::mem;
use std::path::Path;

use fnv::FnvHashMap;

use crate::error::Error;

/// Counts token occurrences in `text`.
///
/// ```rust
/// let counts = centered_array::wordcount::occurrence_map("It's a test, a TEST.");
/// assert_eq!(counts["it's"], 1);
/// assert_eq!(counts["a"], 2);
/// assert_eq!(counts["test"], 2);
/// ```
pub fn occurrence_map(text: &str) -> FnvHashMap<String, u64> {
    let mut counts = FnvHashMap::default();
    let mut word = String::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            word.extend(ch.to_lowercase());
        } else if !word.is_empty() {
            *counts.entry(mem::take(&mut word)).or_insert(0) += 1;
        }
    }
    if !word.is_empty() {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Counts token occurrences in everything `input` yields.
pub fn occurrence_map_reader<R: Read>(mut input: R) -> Result<FnvHashMap<String, u64>, Error> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(occurrence_map(&text))
}

/// Counts token occurrences in the file at `path`.
pub fn occurrence_map_path<P: AsRef<Path>>(path: P) -> Result<FnvHashMap<String, u64>, Error> {
    occurrence_map_reader(File::open(path)?)
}
