//! ABC notes
//! Convert single ABC note tokens, e.g. "^c'", to and from scientific pitch notation.
//! Only the pitch of a note is understood, not durations, ties, chords or anything else
//! that can surround it in a tune.

use std::fmt;

use crate::music::DiatonicPitchClass;
use crate::note;

/// Octave of an upper case letter without octave marks.
/// Lower case letters are the octave above.
const BASE_OCTAVE: i32 = 4;

/// Context required to scan a token.
/// Context object is immutable, each step returns a new one.
#[derive(Debug, PartialEq, Clone, Copy)]
struct Context<'a> {
    s: &'a str,

    // The current byte index. Only ever moves over ASCII, so it's always a char boundary.
    i: usize,
}

impl<'a> Context<'a> {
    fn new(s: &'a str) -> Context<'a> {
        Context { s, i: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).cloned()
    }

    fn at_end(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Take exactly one character, which must be ASCII.
    fn take_one(self) -> (Context<'a>, &'a str) {
        let i = self.i + 1;
        (Context { i, ..self }, &self.s[self.i..i])
    }

    /// Take the run of characters that match.
    fn take_while<F>(self, matches: F) -> (Context<'a>, &'a str)
    where
        F: Fn(u8) -> bool,
    {
        let bytes = self.s.as_bytes();
        let mut i = self.i;
        while i < bytes.len() && matches(bytes[i]) {
            i += 1;
        }

        (Context { i, ..self }, &self.s[self.i..i])
    }
}

/// Accidentals are a run of flats, a run of sharps, a single natural, or nothing.
/// Never a mixture.
fn read_accidental(ctx: Context) -> (Context, &str) {
    match ctx.peek() {
        Some(b'_') => ctx.take_while(|c| c == b'_'),
        Some(b'^') => ctx.take_while(|c| c == b'^'),
        Some(b'=') => ctx.take_one(),
        _ => (ctx, ""),
    }
}

/// Exactly one letter is required.
fn read_letter(ctx: Context) -> Option<(Context, &str)> {
    match ctx.peek() {
        Some(b'a'..=b'g') | Some(b'A'..=b'G') => Some(ctx.take_one()),
        _ => None,
    }
}

/// Commas and apostrophes in any order.
fn read_octave_marks(ctx: Context) -> (Context, &str) {
    ctx.take_while(|c| c == b',' || c == b'\'')
}

/// A valid ABC note token.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct AbcToken<'a> {
    accidental: &'a str,
    letter: &'a str,
    octave_marks: &'a str,
    pitch_class: DiatonicPitchClass,
}

impl<'a> AbcToken<'a> {
    /// One of "", "=", a run of "_" or a run of "^".
    pub fn accidental(&self) -> &'a str {
        self.accidental
    }

    /// The letter as written, including case.
    pub fn letter(&self) -> &'a str {
        self.letter
    }

    pub fn octave_marks(&self) -> &'a str {
        self.octave_marks
    }

    pub fn pitch_class(&self) -> DiatonicPitchClass {
        self.pitch_class
    }

    fn is_lower_case(&self) -> bool {
        self.letter.as_bytes()[0] > b'`'
    }

    // Octave from the marks alone, before letter case is taken into account.
    fn marked_octave(&self) -> i32 {
        let mut octave = BASE_OCTAVE;
        for c in self.octave_marks.chars() {
            if c == ',' {
                octave -= 1;
            } else {
                octave += 1;
            }
        }

        octave
    }

    /// Octave in scientific pitch notation.
    pub fn octave(&self) -> i32 {
        if self.is_lower_case() {
            self.marked_octave() + 1
        } else {
            self.marked_octave()
        }
    }

    /// Scientific pitch notation for this token.
    /// A natural sign is dropped, flats become 'b' and sharps '#'.
    pub fn to_note(&self) -> String {
        let accidental = if self.accidental.starts_with('_') {
            self.accidental.replace('_', "b")
        } else if self.accidental.starts_with('^') {
            self.accidental.replace('^', "#")
        } else {
            String::new()
        };

        format!(
            "{}{}{}",
            self.pitch_class.to_char(),
            accidental,
            self.octave()
        )
    }
}

impl<'a> fmt::Display for AbcToken<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.accidental, self.letter, self.octave_marks)
    }
}

/// The result of tokenizing. Invalid input isn't an error, it's just not a note.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Tokenized<'a> {
    Valid(AbcToken<'a>),
    Invalid,
}

impl<'a> Tokenized<'a> {
    /// Accidental, letter and octave marks.
    /// All three are empty for invalid input.
    pub fn parts(&self) -> (&'a str, &'a str, &'a str) {
        match self {
            Tokenized::Valid(token) => (token.accidental, token.letter, token.octave_marks),
            Tokenized::Invalid => ("", "", ""),
        }
    }

    pub fn token(self) -> Option<AbcToken<'a>> {
        match self {
            Tokenized::Valid(token) => Some(token),
            Tokenized::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Tokenized::Valid(_) => true,
            Tokenized::Invalid => false,
        }
    }
}

fn scan(input: &str) -> Option<AbcToken> {
    let ctx = Context::new(input);
    let (ctx, accidental) = read_accidental(ctx);
    let (ctx, letter) = read_letter(ctx)?;
    let (ctx, octave_marks) = read_octave_marks(ctx);

    // The whole input must be one token.
    if !ctx.at_end() {
        return None;
    }

    let pitch_class = DiatonicPitchClass::from_char(letter.chars().next()?)?;

    Some(AbcToken {
        accidental,
        letter,
        octave_marks,
        pitch_class,
    })
}

/// Split an ABC note into accidental, letter and octave marks.
pub fn tokenize(input: &str) -> Tokenized {
    match scan(input) {
        Some(token) => Tokenized::Valid(token),
        None => Tokenized::Invalid,
    }
}

/// Convert an ABC note into scientific pitch notation, e.g. "c" is "C5".
/// None if it's not a valid ABC note.
pub fn to_note(abc: &str) -> Option<String> {
    tokenize(abc).token().map(|token| token.to_note())
}

/// Convert a note in scientific pitch notation into an ABC note, e.g. "Db2" is "_D,,".
/// None if it's not a note. A pitch class without an octave is placed in octave 0.
pub fn to_abc(note: &str) -> Option<String> {
    let props = note::props(note)?;
    let octave = props.oct.unwrap_or(0);

    let accidental = if props.acc.starts_with('b') {
        props.acc.replace('b', "_")
    } else {
        props.acc.replace('#', "^")
    };

    let letter = if octave > BASE_OCTAVE {
        props.letter.to_char().to_ascii_lowercase()
    } else {
        props.letter.to_char()
    };

    let octave_marks = if octave == BASE_OCTAVE + 1 {
        String::new()
    } else if octave > BASE_OCTAVE {
        "'".repeat(octave.checked_sub(BASE_OCTAVE + 1)? as usize)
    } else {
        ",".repeat(BASE_OCTAVE.checked_sub(octave)? as usize)
    };

    Some(format!("{}{}{}", accidental, letter, octave_marks))
}
