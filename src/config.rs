//! Configuration
//! Everything comes from environment variables, with defaults.
//!  - CHORD_DICTIONARY : path to a chord dictionary JSON file to use instead of the built-in one.
//!  - THEORY_OUTPUT    : "text" (default) or "json".

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::chord_dictionary::ChordTable;
use crate::error::{TheoryError, TheoryResult};

pub const CHORD_DICTIONARY_KEY: &str = "CHORD_DICTIONARY";
pub const OUTPUT_KEY: &str = "THEORY_OUTPUT";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(value: &str) -> Option<OutputFormat> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    pub chord_dictionary: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    /// Read from the process environment.
    pub fn from_env() -> TheoryResult<Config> {
        Config::from_vars(|key| env::var(key).ok())
    }

    /// Read using a lookup function, so tests don't have to touch the real environment.
    pub fn from_vars<F>(var: F) -> TheoryResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chord_dictionary = match var(CHORD_DICTIONARY_KEY) {
            Some(ref path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => {
                debug!("No {} supplied, using built-in chords.", CHORD_DICTIONARY_KEY);
                None
            }
        };

        let output = match var(OUTPUT_KEY) {
            Some(value) => OutputFormat::from_name(&value).ok_or(TheoryError::Config {
                key: OUTPUT_KEY.to_string(),
                value,
            })?,
            None => {
                debug!("No {} supplied, using text.", OUTPUT_KEY);
                OutputFormat::Text
            }
        };

        Ok(Config {
            chord_dictionary,
            output,
        })
    }

    /// The configured chord dictionary.
    /// Only a custom dictionary is owned, the built-in one is shared.
    pub fn chord_table(&self) -> TheoryResult<ChordTableRef> {
        match self.chord_dictionary {
            Some(ref path) => {
                debug!("Loading chord dictionary from {:?}", path);
                Ok(ChordTableRef::Loaded(ChordTable::load(path)?))
            }
            None => Ok(ChordTableRef::Builtin(ChordTable::builtin())),
        }
    }
}

/// Either the built-in table or one read from a file.
#[derive(Debug)]
pub enum ChordTableRef {
    Builtin(&'static ChordTable),
    Loaded(ChordTable),
}

impl ChordTableRef {
    pub fn table(&self) -> &ChordTable {
        match self {
            ChordTableRef::Builtin(table) => *table,
            ChordTableRef::Loaded(table) => table,
        }
    }
}
