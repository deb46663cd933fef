use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ConvertError;

pub const DEFAULT_NOTE_TYPE: &str = "Cloze";

/// Settings shared by every record of a generated deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckConfig {
    pub note_type: String,
    pub deck_name: String,
    pub debug: bool,
}

/// A fully resolved conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobConfig {
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(flatten)]
    pub deck: DeckConfig,
}

impl JobConfig {
    /// Validate the input path and fill in the deck name when none was given.
    pub fn resolve(
        input: PathBuf,
        output: Option<PathBuf>,
        note_type: String,
        deck_name: Option<String>,
        debug: bool,
    ) -> Result<Self, ConvertError> {
        if !input.exists() {
            return Err(ConvertError::MissingInput(input));
        }
        let deck_name = match deck_name {
            Some(name) => name,
            None => default_deck_name(&input)
                .ok_or_else(|| ConvertError::UnnamedInput(input.clone()))?,
        };
        Ok(Self {
            input,
            output,
            deck: DeckConfig {
                note_type,
                deck_name,
                debug,
            },
        })
    }
}

/// The file name of `path` with every extension removed (`vocab.tsv.txt` -> `vocab`).
///
/// Leading dots belong to the name, and a name ending in `.` is kept whole.
/// A file name that is not valid UTF-8 has no default.
pub fn default_deck_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    if name.ends_with('.') {
        return Some(name.to_string());
    }
    let body_start = name.len() - name.trim_start_matches('.').len();
    let stem_end = name[body_start..]
        .find('.')
        .map_or(name.len(), |idx| body_start + idx);
    Some(name[..stem_end].to_string())
}
