//! Chord dictionary
//! Chord names and abbreviations, keyed by their intervals written as a signature,
//! e.g. "1P 3M 5P" is a major chord.
//! Pure data: no chord recognition, only lookups.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde_derive::Serialize;

use crate::error::{TheoryError, TheoryResult};
use crate::interval;

// Entries are [intervals, name or null, "space separated aliases"].
const CHORD_DATA: &str = include_str!("chords.json");

static BUILTIN: Lazy<ChordTable> = Lazy::new(|| {
    ChordTable::from_json(CHORD_DATA).expect("Built-in chord dictionary is invalid.")
});

/// Intervals joined by single spaces.
fn normalize_signature(signature: &str) -> String {
    signature.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ChordType {
    pub signature: String,

    /// Some chords are only known by their abbreviations.
    pub name: Option<String>,

    pub aliases: Vec<String>,
}

impl ChordType {
    /// Interval names, e.g. ["1P", "3M", "5P"].
    pub fn intervals(&self) -> Vec<&str> {
        self.signature.split(' ').collect()
    }

    /// Size of each interval in semitones.
    /// None if any interval can't be read.
    pub fn semitones(&self) -> Option<Vec<i32>> {
        self.intervals()
            .iter()
            .map(|name| interval::semitones(name))
            .collect()
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }

    // Fold a repeated entry for the same signature into this one.
    // Returns true if anything changed.
    fn merge(&mut self, other: ChordType) -> TheoryResult<bool> {
        let mut changed = false;

        if let Some(second) = other.name {
            match &self.name {
                Some(first) if *first != second => {
                    return Err(TheoryError::ConflictingChord {
                        signature: self.signature.clone(),
                        first: first.clone(),
                        second,
                    });
                }
                Some(_) => (),
                None => {
                    self.name = Some(second);
                    changed = true;
                }
            }
        }

        for alias in other.aliases {
            if !self.has_alias(&alias) {
                self.aliases.push(alias);
                changed = true;
            }
        }

        Ok(changed)
    }
}

/// Immutable table of chord types.
#[derive(Debug)]
pub struct ChordTable {
    // In the order of the source data.
    chords: Vec<ChordType>,

    // signature -> index into chords
    index: HashMap<String, usize>,
}

impl ChordTable {
    /// The chord dictionary that ships with the library.
    pub fn builtin() -> &'static ChordTable {
        &BUILTIN
    }

    /// Build a table from entries of (signature, name, space-separated aliases).
    /// A signature repeated with an identical definition is skipped. A signature repeated
    /// with extra aliases, or a name where there wasn't one, is merged into the first.
    /// A signature with two different names is an error.
    pub fn from_entries<I>(entries: I) -> TheoryResult<ChordTable>
    where
        I: IntoIterator<Item = (String, Option<String>, String)>,
    {
        let mut chords: Vec<ChordType> = vec![];
        let mut index = HashMap::new();

        for (i, (signature, name, aliases)) in entries.into_iter().enumerate() {
            let signature = normalize_signature(&signature);
            if signature.is_empty() {
                return Err(TheoryError::EmptySignature(i));
            }

            let mut chord = ChordType {
                signature: signature.clone(),
                name: name.filter(|name| !name.is_empty()),
                aliases: vec![],
            };

            for alias in aliases.split_whitespace() {
                if !chord.has_alias(alias) {
                    chord.aliases.push(alias.to_string());
                }
            }

            match index.get(&signature) {
                Some(&existing) => {
                    let existing: &mut ChordType = &mut chords[existing];
                    if existing.merge(chord)? {
                        warn!("Merged repeated chord entry {} for {}", i, signature);
                    } else {
                        debug!("Skipped duplicate chord entry {} for {}", i, signature);
                    }
                }
                None => {
                    index.insert(signature, chords.len());
                    chords.push(chord);
                }
            }
        }

        debug!("Loaded {} chord types", chords.len());

        Ok(ChordTable { chords, index })
    }

    /// Read a JSON array of [signature, name or null, aliases] entries.
    pub fn from_json(data: &str) -> TheoryResult<ChordTable> {
        let entries: Vec<(String, Option<String>, String)> = serde_json::from_str(data)?;
        ChordTable::from_entries(entries)
    }

    /// Read a chord dictionary file in the same JSON format as the built-in one.
    pub fn load(path: &Path) -> TheoryResult<ChordTable> {
        let data = fs::read_to_string(path)?;
        ChordTable::from_json(&data)
    }

    /// Look up by exact signature. Extra whitespace is ignored.
    pub fn get(&self, signature: &str) -> Option<&ChordType> {
        self.index
            .get(&normalize_signature(signature))
            .map(|&i| &self.chords[i])
    }

    /// First chord with this abbreviation.
    pub fn find_by_alias(&self, alias: &str) -> Option<&ChordType> {
        self.chords.iter().find(|chord| chord.has_alias(alias))
    }

    /// Look up by signature, falling back to abbreviation and then full name.
    pub fn find(&self, query: &str) -> Option<&ChordType> {
        self.get(query)
            .or_else(|| self.find_by_alias(query))
            .or_else(|| {
                self.chords
                    .iter()
                    .find(|chord| chord.name.as_ref().map_or(false, |name| name == query))
            })
    }

    /// Full names of chords that have one.
    pub fn names(&self) -> Vec<&str> {
        self.chords
            .iter()
            .filter_map(|chord| chord.name.as_ref().map(|name| name.as_str()))
            .collect()
    }

    /// Every abbreviation of every chord.
    pub fn aliases(&self) -> Vec<&str> {
        self.chords
            .iter()
            .flat_map(|chord| chord.aliases.iter().map(|alias| alias.as_str()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChordType> {
        self.chords.iter()
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}
