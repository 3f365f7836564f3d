//! Music theory utilities for the ABC tools.
//!  - Convert single ABC notes to and from scientific pitch notation.
//!  - Look up chord names by their intervals.
//!  - Analyse the intervals in a collection of notes.

pub mod abc_notation;
pub mod chord_dictionary;
pub mod config;
pub mod error;
pub mod interval;
pub mod music;
pub mod note;
pub mod sonority;

#[cfg(test)]
mod end_to_end_test;

pub use abc_notation::{to_abc, to_note, tokenize, AbcToken, Tokenized};
pub use chord_dictionary::{ChordTable, ChordType};
pub use error::{TheoryError, TheoryResult};
pub use sonority::density;
