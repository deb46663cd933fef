//! Anki import file writer.

use std::fmt;
use std::io::Write;

use log::debug;

use crate::error::ConvertError;

/// Directive lines that tell Anki how to read the rows that follow.
pub const HEADER: &str = "\
#separator:tab
#html:false
#notetype column:1
#deck column:2
#tags column:5
";

/// One tab-separated data row: note type, deck, content and two empty columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRecord<'a> {
    pub note_type: &'a str,
    pub deck_name: &'a str,
    pub content: &'a str,
}

impl fmt::Display for OutputRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t\t",
            self.note_type, self.deck_name, self.content
        )
    }
}

pub fn write_header<W: Write + ?Sized>(out: &mut W) -> Result<(), ConvertError> {
    out.write_all(HEADER.as_bytes()).map_err(ConvertError::Write)
}

/// Write the header followed by one row per card, returning the row count.
///
/// The first error produced by `cards` stops emission and is returned as-is.
pub fn emit_deck<W, I, C>(
    out: &mut W,
    cards: I,
    deck_name: &str,
    note_type: &str,
) -> Result<usize, ConvertError>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = Result<C, ConvertError>>,
    C: AsRef<str>,
{
    write_header(out)?;
    let mut written = 0usize;
    for card in cards {
        let card = card?;
        let record = OutputRecord {
            note_type,
            deck_name,
            content: card.as_ref(),
        };
        writeln!(out, "{record}").map_err(ConvertError::Write)?;
        written += 1;
    }
    out.flush().map_err(ConvertError::Write)?;
    debug!("wrote {written} records to deck '{deck_name}'");
    Ok(written)
}
