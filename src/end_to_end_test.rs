use crate::abc_notation;
use crate::chord_dictionary::ChordTable;
use crate::interval;
use crate::note;
use crate::sonority;

const LETTERS: &[&str] = &["C", "D", "E", "F", "G", "A", "B"];
const ACCIDENTALS: &[&str] = &["", "#", "##", "b", "bb"];

#[test]
fn round_trip() {
    for octave in 0..9 {
        for letter in LETTERS.iter() {
            for accidental in ACCIDENTALS.iter() {
                let note = format!("{}{}{}", letter, accidental, octave);
                let abc = abc_notation::to_abc(&note).expect("Valid note converts to ABC");

                assert_eq!(
                    abc_notation::to_note(&abc),
                    Some(note.clone()),
                    "{} should survive a round trip via {}",
                    note,
                    abc
                );
            }
        }
    }
}

#[test]
fn abc_round_trip() {
    // Naturals are dropped so they don't come back.
    for abc in &["C", "c", "^C,", "__e''", "B,,,", "^^g'"] {
        let note = abc_notation::to_note(abc).expect("Valid ABC converts to a note");
        assert_eq!(
            abc_notation::to_abc(&note),
            Some(abc.to_string()),
            "{} should survive a round trip via {}",
            abc,
            note
        );
    }
}

#[test]
fn abc_scale_matches_midi() {
    // Same chromatic scale as the tune tests, one token at a time.
    let tokens = "C ^C D ^D E F ^F G ^G A ^A B c ^c d ^d e f ^f g ^g a ^a b c'";
    let midi = tokens
        .split(' ')
        .map(|abc| abc_notation::to_note(abc).and_then(|n| note::props(&n)).and_then(|p| p.midi))
        .collect::<Vec<Option<i32>>>();

    let expected = (60..85).map(Some).collect::<Vec<Option<i32>>>();
    assert_eq!(midi, expected, "C chromatic scale pitches using sharps.");
}

#[test]
fn density_permutation_invariant() {
    let notes = ["C", "Eb", "F#", "G", "Bb", "D"];

    let expected = sonority::density(&notes);

    // Every rotation, and every rotation reversed.
    for start in 0..notes.len() {
        let mut rotated = notes.to_vec();
        rotated.rotate_left(start);
        assert_eq!(sonority::density(&rotated), expected, "Rotation {}", start);

        rotated.reverse();
        assert_eq!(
            sonority::density(&rotated),
            expected,
            "Reversed rotation {}",
            start
        );
    }
}

#[test]
fn density_counts_every_pair() {
    // n notes of distinct pitch class have n(n-1)/2 intervals.
    let notes = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
    let total: u32 = sonority::density(&notes).iter().sum();
    assert_eq!(total, 66);

    assert_eq!(
        sonority::density(&notes),
        [12, 12, 12, 12, 12, 6],
        "Every interval class in the chromatic aggregate."
    );
}

#[test]
fn density_of_abc_notes() {
    let notes = ["C", "E", "G", "B"]
        .iter()
        .filter_map(|abc| abc_notation::to_note(abc))
        .collect::<Vec<String>>();

    assert_eq!(sonority::density(&notes), [2, 2, 1, 0, 1, 0]);
}

#[test]
fn chord_intervals_match_density() {
    // A major triad spelled from its intervals is pmn.
    let major = ChordTable::builtin()
        .get("1P 3M 5P")
        .and_then(|chord| chord.semitones())
        .expect("Major chord intervals");

    let classes = major
        .iter()
        .map(|&semitones| interval::ic(semitones))
        .collect::<Vec<u8>>();
    assert_eq!(classes, vec![0, 4, 5]);

    let notes = ["C4", "E4", "G4"];
    assert_eq!(sonority::symbol(&sonority::density(&notes)), "pmn");
}
