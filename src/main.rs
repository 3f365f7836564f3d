use std::env;
use std::process;

use log::{debug, error};
use serde_derive::Serialize;

use theory::abc_notation;
use theory::config::{Config, OutputFormat};
use theory::sonority;
use theory::{ChordType, TheoryError, TheoryResult};

const USAGE: &str = "Unrecognised command. Try:
 - to-note <abc note>...
 - to-abc <note>...
 - tokenize <abc note>...
 - density <note>...
 - chord <intervals, abbreviation or name>
 - chords";

/// One input and what it became.
#[derive(Debug, Serialize)]
struct Conversion<'a> {
    input: &'a str,
    output: Option<String>,
}

#[derive(Debug, Serialize)]
struct Tokens<'a> {
    input: &'a str,
    valid: bool,
    accidental: &'a str,
    letter: &'a str,
    octave_marks: &'a str,
}

#[derive(Debug, Serialize)]
struct Density<'a> {
    notes: Vec<&'a str>,
    ignored: Vec<&'a str>,
    density: [u32; sonority::DENSITY_WIDTH],
    symbol: String,
}

fn print_json<T: serde::Serialize>(value: &T) -> TheoryResult<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print each conversion. True if they all worked.
fn print_conversions(config: &Config, conversions: &[Conversion]) -> TheoryResult<bool> {
    match config.output {
        OutputFormat::Json => print_json(&conversions)?,
        OutputFormat::Text => {
            for conversion in conversions {
                match conversion.output {
                    Some(ref output) => println!("{}\t{}", conversion.input, output),
                    None => eprintln!("Didn't recognise {:?}", conversion.input),
                }
            }
        }
    }

    Ok(conversions.iter().all(|c| c.output.is_some()))
}

/// ABC to scientific pitch notation.
fn main_to_note(config: &Config, args: &[String]) -> TheoryResult<bool> {
    let conversions = args
        .iter()
        .map(|input| Conversion {
            input,
            output: abc_notation::to_note(input),
        })
        .collect::<Vec<Conversion>>();

    print_conversions(config, &conversions)
}

/// Scientific pitch notation to ABC.
fn main_to_abc(config: &Config, args: &[String]) -> TheoryResult<bool> {
    let conversions = args
        .iter()
        .map(|input| Conversion {
            input,
            output: abc_notation::to_abc(input),
        })
        .collect::<Vec<Conversion>>();

    print_conversions(config, &conversions)
}

fn main_tokenize(config: &Config, args: &[String]) -> TheoryResult<bool> {
    let tokens = args
        .iter()
        .map(|input| {
            let tokenized = abc_notation::tokenize(input);
            let (accidental, letter, octave_marks) = tokenized.parts();
            Tokens {
                input,
                valid: tokenized.is_valid(),
                accidental,
                letter,
                octave_marks,
            }
        })
        .collect::<Vec<Tokens>>();

    match config.output {
        OutputFormat::Json => print_json(&tokens)?,
        OutputFormat::Text => {
            for token in tokens.iter() {
                if token.valid {
                    println!(
                        "{}\t{:?} {:?} {:?}",
                        token.input, token.accidental, token.letter, token.octave_marks
                    );
                } else {
                    eprintln!("Didn't recognise {:?}", token.input);
                }
            }
        }
    }

    Ok(tokens.iter().all(|t| t.valid))
}

fn main_density(config: &Config, args: &[String]) -> TheoryResult<bool> {
    let (notes, ignored): (Vec<&str>, Vec<&str>) = args
        .iter()
        .map(|arg| arg.as_str())
        .partition(|arg| theory::note::name(arg).is_some());

    if !ignored.is_empty() {
        debug!("Ignoring {} unrecognised notes", ignored.len());
    }

    let density = sonority::density(&notes);
    let result = Density {
        symbol: sonority::symbol(&density),
        notes,
        ignored,
        density,
    };

    match config.output {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            for note in result.ignored.iter() {
                eprintln!("Ignored {:?}", note);
            }
            println!("{:?}\t{}", result.density, result.symbol);
        }
    }

    Ok(result.ignored.is_empty())
}

fn print_chord(chord: &ChordType) {
    println!(
        "{}\t{}\t{}",
        chord.signature,
        chord.name.as_ref().map_or("-", |name| name.as_str()),
        chord.aliases.join(" ")
    );
}

fn main_chord(config: &Config, args: &[String]) -> TheoryResult<bool> {
    if args.is_empty() {
        return Err(TheoryError::Usage(
            "Need intervals, an abbreviation or a name.".to_string(),
        ));
    }

    // Intervals can be given as separate arguments.
    let query = args.join(" ");

    let table = config.chord_table()?;
    let chord = table.table().find(&query);

    match config.output {
        OutputFormat::Json => print_json(&chord)?,
        OutputFormat::Text => match chord {
            Some(chord) => print_chord(chord),
            None => eprintln!("Didn't recognise chord {:?}", query),
        },
    }

    Ok(chord.is_some())
}

fn main_chords(config: &Config) -> TheoryResult<bool> {
    let table = config.chord_table()?;

    match config.output {
        OutputFormat::Json => print_json(&table.table().iter().collect::<Vec<&ChordType>>())?,
        OutputFormat::Text => {
            for chord in table.table().iter() {
                print_chord(chord);
            }
        }
    }

    Ok(true)
}

fn run(args: &[String]) -> TheoryResult<bool> {
    let config = Config::from_env()?;
    debug!("Config: {:?}", config);

    match args.split_first() {
        Some((first, rest)) => match first.as_str() {
            "to-note" => main_to_note(&config, rest),
            "to-abc" => main_to_abc(&config, rest),
            "tokenize" => main_tokenize(&config, rest),
            "density" => main_density(&config, rest),
            "chord" => main_chord(&config, rest),
            "chords" => main_chords(&config),
            _ => Err(TheoryError::Usage(USAGE.to_string())),
        },
        _ => Err(TheoryError::Usage(USAGE.to_string())),
    }
}

fn main() {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<String>>();

    match run(&args) {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(TheoryError::Usage(message)) => {
            eprintln!("{}", message);
            process::exit(1);
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
