//! Note names
//! Read notes written in scientific pitch notation, e.g. "C#4", "Bb", "fx3".
//! The octave is optional: a name without one is a pitch class.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_derive::Serialize;

use crate::music::{DiatonicPitchClass, SEMITONES_IN_OCTAVE};

// Letter, accidentals, octave, then anything left over.
// Anything left over makes it an invalid note.
static NOTE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-gA-G]?)(#+|b+|x+|)(-?\d*)\s*(.*)$").unwrap());

/// Everything we know about a note name.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct NoteProps {
    pub letter: DiatonicPitchClass,

    /// Accidentals, all '#' or all 'b'. A double sharp 'x' is written as "##".
    pub acc: String,

    /// None for a pitch class.
    pub oct: Option<i32>,

    /// Pitch class name, i.e. letter and accidentals.
    pub pc: String,

    /// Normalized name.
    pub name: String,

    /// C = 0 ... B = 6
    pub step: u8,

    /// Alteration in semitones.
    pub alt: i32,

    /// 0 - 11
    pub chroma: u8,

    pub midi: Option<i32>,
}

/// Parse a note name.
/// None if it's not a note.
pub fn props(note: &str) -> Option<NoteProps> {
    let captures = NOTE_NAME.captures(note)?;

    let letter_str = captures.get(1).map_or("", |m| m.as_str());
    let acc_str = captures.get(2).map_or("", |m| m.as_str());
    let oct_str = captures.get(3).map_or("", |m| m.as_str());
    let rest = captures.get(4).map_or("", |m| m.as_str());

    if !rest.is_empty() {
        return None;
    }

    let letter = DiatonicPitchClass::from_char(letter_str.chars().next()?)?;

    let acc = acc_str.replace('x', "##");

    let oct = if oct_str.is_empty() {
        None
    } else {
        // A lone '-' or an octave too big to represent isn't a note.
        Some(oct_str.parse::<i32>().ok()?)
    };

    let step = letter.to_degree();

    let alt = if acc.starts_with('b') {
        -(acc.len() as i32)
    } else {
        acc.len() as i32
    };

    let position = letter.to_chromatic() + alt;
    let chroma = position.rem_euclid(SEMITONES_IN_OCTAVE) as u8;

    // An octave whose MIDI number doesn't fit isn't a note either.
    let midi = match oct {
        Some(oct) => Some(
            oct.checked_add(1)
                .and_then(|o| o.checked_mul(SEMITONES_IN_OCTAVE))
                .and_then(|m| m.checked_add(position))?,
        ),
        None => None,
    };

    let pc = format!("{}{}", letter.to_char(), acc);
    let name = format!("{}{}", pc, oct_str);

    Some(NoteProps {
        letter,
        acc,
        oct,
        pc,
        name,
        step,
        alt,
        chroma,
        midi,
    })
}

/// Normalized note name, e.g. "fx4" is "F##4".
pub fn name(note: &str) -> Option<String> {
    props(note).map(|p| p.name)
}

/// Pitch class as a number 0 - 11.
pub fn chroma(note: &str) -> Option<u8> {
    props(note).map(|p| p.chroma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_test() {
        let c_sharp = props("C#4").expect("C#4 is a note");
        assert_eq!(c_sharp.letter, DiatonicPitchClass::C);
        assert_eq!(c_sharp.acc, "#");
        assert_eq!(c_sharp.oct, Some(4));
        assert_eq!(c_sharp.pc, "C#");
        assert_eq!(c_sharp.name, "C#4");
        assert_eq!(c_sharp.step, 0);
        assert_eq!(c_sharp.alt, 1);
        assert_eq!(c_sharp.chroma, 1);
        assert_eq!(c_sharp.midi, Some(61));

        let d_flat = props("Db2").expect("Db2 is a note");
        assert_eq!(d_flat.alt, -1);
        assert_eq!(d_flat.oct, Some(2));
        assert_eq!(d_flat.midi, Some(37));
    }

    #[test]
    fn pitch_class_test() {
        let g_flat = props("gb").expect("gb is a pitch class");
        assert_eq!(g_flat.name, "Gb", "Letter is upper cased.");
        assert_eq!(g_flat.oct, None, "No octave for a pitch class.");
        assert_eq!(g_flat.midi, None, "No MIDI number for a pitch class.");
        assert_eq!(g_flat.chroma, 6);
    }

    #[test]
    fn letter_b_test() {
        assert_eq!(name("b"), Some("B".to_string()), "b on its own is a letter");
        assert_eq!(name("bb"), Some("Bb".to_string()), "bb is B flat");
        assert_eq!(name("bbb3"), Some("Bbb3".to_string()), "bbb3 is B double flat");
    }

    #[test]
    fn double_sharp_test() {
        assert_eq!(name("fx4"), Some("F##4".to_string()));
        assert_eq!(chroma("fx4"), Some(7));
    }

    #[test]
    fn chroma_wraps_test() {
        assert_eq!(chroma("Cb"), Some(11), "C flat wraps down to B");
        assert_eq!(chroma("B#"), Some(0), "B sharp wraps up to C");
        assert_eq!(chroma("Cbb"), Some(10));
    }

    #[test]
    fn negative_octave_test() {
        let low = props("C-1").expect("C-1 is a note");
        assert_eq!(low.oct, Some(-1));
        assert_eq!(low.midi, Some(0), "C-1 is MIDI 0");
    }

    #[test]
    fn invalid_test() {
        assert_eq!(props(""), None, "Empty string");
        assert_eq!(props("x"), None, "Not a letter");
        assert_eq!(props("H4"), None, "Not a letter");
        assert_eq!(props("C4 major"), None, "Trailing text");
        assert_eq!(props("#4"), None, "Missing letter");
        assert_eq!(props("C-"), None, "Octave sign with no number");
        assert_eq!(props("C#b4"), None, "Mixed accidentals");
    }

    #[test]
    fn huge_octave_test() {
        assert_eq!(props("C999999999"), None, "MIDI number doesn't fit");
        assert_eq!(props("C-2147483648"), None, "MIDI number doesn't fit");
        assert_eq!(props("C2147483647"), None, "Octave after this one doesn't fit");
        assert_eq!(
            props("C178956969").and_then(|p| p.midi),
            Some(2147483640),
            "Largest octave that still fits"
        );
        assert_eq!(props("B178956969"), None, "B is past the end of that octave");
        assert_eq!(props("C178956970"), None);
    }
}
