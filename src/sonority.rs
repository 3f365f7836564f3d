//! Sonority
//! Interval analysis of a collection of notes, after "The Analysis of Intervals" in
//! Hindemith-style harmonic theory.
//!
//! The result is a `[p, m, n, s, d, t]` histogram:
//!  - p: perfect fourths or fifths
//!  - m: major thirds or minor sixths
//!  - n: minor thirds or major sixths
//!  - s: major seconds or minor sevenths
//!  - d: minor seconds or major sevenths
//!  - t: tritones
//!
//! The first three are considered consonant and the last three dissonant, so "pmn" is a
//! consonant sound and "sd^2" a very dissonant one.

use crate::interval;
use crate::note;

pub const DENSITY_WIDTH: usize = 6;

const TRITONE: u8 = 6;

// Bucket letters in order.
const SYMBOLS: [char; DENSITY_WIDTH] = ['p', 'm', 'n', 's', 'd', 't'];

/// Count the interval classes between every pair of notes.
/// Anything that isn't a note is ignored. Octaves are ignored, so are unisons.
pub fn density<S: AsRef<str>>(notes: &[S]) -> [u32; DENSITY_WIDTH] {
    let mut result = [0; DENSITY_WIDTH];

    let chromas: Vec<u8> = notes
        .iter()
        .filter_map(|note| note::name(note.as_ref()))
        .filter_map(|name| note::chroma(&name))
        .collect();

    let len = chromas.len();
    for a in 0..len {
        for b in a..len {
            let class = interval::ic(chromas[b] as i32 - chromas[a] as i32);

            if class == TRITONE {
                result[DENSITY_WIDTH - 1] += 1;
            } else if class > 0 {
                result[DENSITY_WIDTH - 1 - class as usize] += 1;
            }
        }
    }

    result
}

/// Write a density as letters, with a power where there's more than one,
/// e.g. [0, 0, 0, 1, 2, 0] is "sd^2".
/// Empty if there are no intervals.
pub fn symbol(density: &[u32; DENSITY_WIDTH]) -> String {
    let mut result = String::new();

    for (letter, count) in SYMBOLS.iter().zip(density.iter()) {
        match *count {
            0 => (),
            1 => result.push(*letter),
            _ => result.push_str(&format!("{}^{}", letter, count)),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_test() {
        assert_eq!(
            density(&["C", "E", "G", "B"]),
            [2, 2, 1, 0, 1, 0],
            "Major seventh chord."
        );
        assert_eq!(
            density(&["c", "d", "gb"]),
            [0, 1, 0, 1, 0, 1],
            "Letters can be lower case."
        );
        assert_eq!(density(&["C", "E", "G"]), [1, 1, 1, 0, 0, 0], "Major triad is pmn.");
        assert_eq!(density(&["C", "F#"]), [0, 0, 0, 0, 0, 1], "Tritone.");
        assert_eq!(density(&["C", "Db"]), [0, 0, 0, 0, 1, 0], "Minor second.");
        assert_eq!(density(&["C", "B"]), [0, 0, 0, 0, 1, 0], "Major seventh is a d.");
    }

    #[test]
    fn density_empty_test() {
        let empty: [&str; 0] = [];
        assert_eq!(density(&empty), [0, 0, 0, 0, 0, 0]);
        assert_eq!(density(&["x", "y"]), [0, 0, 0, 0, 0, 0], "Nothing but invalid notes.");
    }

    #[test]
    fn density_ignores_invalid_test() {
        assert_eq!(
            density(&["C", "nope", "E", "", "G", "B", "H"]),
            density(&["C", "E", "G", "B"]),
            "Invalid notes are dropped."
        );
    }

    #[test]
    fn density_ignores_huge_octaves_test() {
        assert_eq!(
            density(&["C999999999", "E"]),
            [0, 0, 0, 0, 0, 0],
            "A note whose octave can't be represented is dropped."
        );
        assert_eq!(
            density(&["C-2147483648", "C", "G"]),
            [1, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn density_unisons_and_octaves_test() {
        assert_eq!(density(&["C"]), [0, 0, 0, 0, 0, 0], "One note has no intervals.");
        assert_eq!(density(&["C4", "C5", "C"]), [0, 0, 0, 0, 0, 0], "Octaves don't count.");
        assert_eq!(
            density(&["C#", "Db"]),
            [0, 0, 0, 0, 0, 0],
            "Enharmonic notes are a unison."
        );
        assert_eq!(
            density(&["C4", "G4", "G5"]),
            [2, 0, 0, 0, 0, 0],
            "A doubled note counts twice."
        );
    }

    #[test]
    fn density_owned_strings_test() {
        let notes = vec!["C".to_string(), "E".to_string(), "G".to_string()];
        assert_eq!(density(&notes), [1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn symbol_test() {
        assert_eq!(symbol(&[1, 1, 1, 0, 0, 0]), "pmn");
        assert_eq!(symbol(&[0, 0, 0, 1, 2, 0]), "sd^2");
        assert_eq!(symbol(&[2, 2, 1, 0, 1, 0]), "p^2m^2nd");
        assert_eq!(symbol(&[0, 0, 0, 0, 0, 0]), "");
    }
}
