use serde_derive::Serialize;

pub const NOTES_IN_SCALE: i32 = 7;

pub const SEMITONES_IN_OCTAVE: i32 = 12;

#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Serialize)]
pub enum DiatonicPitchClass {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl DiatonicPitchClass {
    /// Read a letter name, either case.
    pub fn from_char(c: char) -> Option<DiatonicPitchClass> {
        match c {
            'C' | 'c' => Some(DiatonicPitchClass::C),
            'D' | 'd' => Some(DiatonicPitchClass::D),
            'E' | 'e' => Some(DiatonicPitchClass::E),
            'F' | 'f' => Some(DiatonicPitchClass::F),
            'G' | 'g' => Some(DiatonicPitchClass::G),
            'A' | 'a' => Some(DiatonicPitchClass::A),
            'B' | 'b' => Some(DiatonicPitchClass::B),
            _ => None,
        }
    }

    /// Position in the C major scale, C = 0.
    pub fn to_degree(&self) -> u8 {
        match self {
            &DiatonicPitchClass::C => 0,
            &DiatonicPitchClass::D => 1,
            &DiatonicPitchClass::E => 2,
            &DiatonicPitchClass::F => 3,
            &DiatonicPitchClass::G => 4,
            &DiatonicPitchClass::A => 5,
            &DiatonicPitchClass::B => 6,
        }
    }

    /// Inverse of `to_degree`. Wraps around the octave.
    pub fn from_degree(degree: u8) -> DiatonicPitchClass {
        match degree % NOTES_IN_SCALE as u8 {
            0 => DiatonicPitchClass::C,
            1 => DiatonicPitchClass::D,
            2 => DiatonicPitchClass::E,
            3 => DiatonicPitchClass::F,
            4 => DiatonicPitchClass::G,
            5 => DiatonicPitchClass::A,
            _ => DiatonicPitchClass::B,
        }
    }

    /// Semitones above C.
    pub fn to_chromatic(&self) -> i32 {
        match self {
            &DiatonicPitchClass::C => 0,
            &DiatonicPitchClass::D => 2,
            &DiatonicPitchClass::E => 4,
            &DiatonicPitchClass::F => 5,
            &DiatonicPitchClass::G => 7,
            &DiatonicPitchClass::A => 9,
            &DiatonicPitchClass::B => 11,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            &DiatonicPitchClass::C => 'C',
            &DiatonicPitchClass::D => 'D',
            &DiatonicPitchClass::E => 'E',
            &DiatonicPitchClass::F => 'F',
            &DiatonicPitchClass::G => 'G',
            &DiatonicPitchClass::A => 'A',
            &DiatonicPitchClass::B => 'B',
        }
    }
}
