//! Command-line interface wiring for the `clozeline` binary.
//!
//! This module owns the clap definition and drives a single conversion run.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clozeline::{DEFAULT_NOTE_TYPE, JobConfig, convert};
use log::info;

pub mod utils;

/// Parsed CLI entrypoint for the `clozeline` binary.
#[derive(Parser, Debug)]
#[command(
    name = "clozeline",
    version,
    about = "Converts a newline-separated file into an Anki deck"
)]
pub struct Cli {
    /// Note type assigned to every generated note.
    #[arg(
        short = 'n',
        long = "note_type",
        visible_alias = "note-type",
        default_value = DEFAULT_NOTE_TYPE
    )]
    pub note_type: String,

    /// Deck name (default: input file name without extensions).
    #[arg(short = 'd', long = "deck-name")]
    pub deck_name: Option<String>,

    /// Newline-separated source file (also `-if`).
    #[arg(long = "input-file", value_name = "PATH")]
    pub input_file: PathBuf,

    /// Write the deck here instead of stdout (also `-of`).
    #[arg(long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Print the resolved configuration before converting.
    #[arg(long)]
    pub debug: bool,
}

/// Execute the conversion described by the parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    let job = JobConfig::resolve(
        cli.input_file,
        cli.output_file,
        cli.note_type,
        cli.deck_name,
        cli.debug,
    )?;

    if job.deck.debug {
        println!("{}", serde_json::to_string_pretty(&job)?);
    }

    let written = match &job.output {
        Some(path) => {
            let mut out = utils::create_output(path)?;
            convert(&job, &mut out)?
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            convert(&job, &mut out)?
        }
    };

    info!(
        "converted {} into {} notes of type '{}'",
        job.input.display(),
        written,
        job.deck.note_type
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(utils::normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply() {
        let cli = parse(&["clozeline", "-if", "cards.txt"]).unwrap();
        assert_eq!(cli.note_type, "Cloze");
        assert_eq!(cli.deck_name, None);
        assert_eq!(cli.input_file, PathBuf::from("cards.txt"));
        assert_eq!(cli.output_file, None);
        assert!(!cli.debug);
    }

    #[test]
    fn short_and_long_forms_parse() {
        let cli = parse(&[
            "clozeline",
            "-n",
            "Basic",
            "-d",
            "Geo",
            "-if=in.txt",
            "-of",
            "out.txt",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.note_type, "Basic");
        assert_eq!(cli.deck_name.as_deref(), Some("Geo"));
        assert_eq!(cli.input_file, PathBuf::from("in.txt"));
        assert_eq!(cli.output_file, Some(PathBuf::from("out.txt")));
        assert!(cli.debug);

        let cli = parse(&[
            "clozeline",
            "--note-type",
            "Basic",
            "--deck-name",
            "Geo",
            "--input-file",
            "in.txt",
        ])
        .unwrap();
        assert_eq!(cli.note_type, "Basic");
        assert_eq!(cli.deck_name.as_deref(), Some("Geo"));
    }

    #[test]
    fn input_file_is_required() {
        let err = parse(&["clozeline", "-n", "Basic"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
