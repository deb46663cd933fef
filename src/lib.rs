//! Core library for turning line-oriented notes into Anki import decks.

mod config;
mod emit;
mod error;
mod extract;

pub use config::{DEFAULT_NOTE_TYPE, DeckConfig, JobConfig, default_deck_name};
pub use emit::{HEADER, OutputRecord, emit_deck, write_header};
pub use error::ConvertError;
pub use extract::{CardLine, CardLines, read_cards, strip_comment};

use std::io::Write;

/// Read the job's input file and write the whole deck to `out`.
pub fn convert<W: Write + ?Sized>(job: &JobConfig, out: &mut W) -> Result<usize, ConvertError> {
    let cards = read_cards(&job.input)?;
    emit_deck(out, cards, &job.deck.deck_name, &job.deck.note_type)
}
