//! Intervals
//! Interval classes and shorthand interval names such as "3M" or "11A".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::music::{DiatonicPitchClass, NOTES_IN_SCALE, SEMITONES_IN_OCTAVE};

// Interval class for each number of semitones within an octave.
const CLASSES: [u8; 12] = [0, 1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

// Direction, number, quality.
static INTERVAL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?)(\d+)(P|M|m|A+|d+)$").unwrap());

/// Interval class of a distance in semitones, 0 - 6.
/// An interval and its inversion share a class, as do compound intervals.
pub fn ic(semitones: i32) -> u8 {
    CLASSES[semitones.rem_euclid(SEMITONES_IN_OCTAVE) as usize]
}

/// Size in semitones of a shorthand interval name, e.g. "5P" is 7 and "-3m" is -3.
/// None if the name isn't an interval. Unisons, fourths and fifths are perfect,
/// the rest major or minor.
pub fn semitones(name: &str) -> Option<i32> {
    let captures = INTERVAL_NAME.captures(name)?;

    let descending = &captures[1] == "-";
    let number = captures[2].parse::<i32>().ok()?;
    let quality = &captures[3];

    if number < 1 {
        return None;
    }

    let step = (number - 1) % NOTES_IN_SCALE;
    let octaves = (number - 1) / NOTES_IN_SCALE;
    let perfectable = step == 0 || step == 3 || step == 4;

    // Augmented and diminished may be repeated.
    let count = quality.len() as i32;

    let alteration = match (perfectable, quality.chars().next()?) {
        (true, 'P') => 0,
        (false, 'M') => 0,
        (false, 'm') => -1,
        (_, 'A') => count,
        (true, 'd') => -count,
        (false, 'd') => -count - 1,
        _ => return None,
    };

    // Too big to represent isn't an interval.
    let size = SEMITONES_IN_OCTAVE
        .checked_mul(octaves)?
        .checked_add(DiatonicPitchClass::from_degree(step as u8).to_chromatic() + alteration)?;

    Some(if descending { -size } else { size })
}
