//! Line extraction: turns raw text lines into cleaned card content.
//!
//! Each physical line loses its trailing `#` comment (a `\#` is kept as a
//! literal hash), is trimmed, and is dropped if nothing remains. Tabs are
//! expanded to four spaces so they cannot collide with the output separator.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::error::ConvertError;

const TAB_REPLACEMENT: &str = "    ";

static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();

/// A single cleaned, non-empty unit of card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine(String);

impl CardLine {
    /// Clean one physical line, returning `None` when nothing survives.
    pub fn parse(raw: &str) -> Option<Self> {
        let stripped = strip_comment(raw);
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            return None;
        }
        let unescaped = trimmed.replace("\\#", "#");
        Some(Self(unescaped.replace('\t', TAB_REPLACEMENT)))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CardLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Remove everything from the first unescaped `#` to the end of the line.
pub fn strip_comment(raw: &str) -> Cow<'_, str> {
    // No lookbehind in `regex`: capture the preceding character instead and put it back.
    let re = COMMENT_REGEX
        .get_or_init(|| Regex::new(r"(^|[^\\])#.*$").expect("invalid comment regex"));
    re.replace(raw, "$1")
}

/// Lazy sequence of [`CardLine`]s read from a buffered source.
///
/// `\n`, `\r\n` and a bare `\r` all end a physical line.
pub struct CardLines<R> {
    lines: Lines<R>,
    pending: VecDeque<String>,
    origin: PathBuf,
    failed: bool,
}

impl<R: BufRead> CardLines<R> {
    /// Wrap any buffered reader; `origin` names it in error messages.
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            pending: VecDeque::new(),
            origin: origin.into(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for CardLines<R> {
    type Item = Result<CardLine, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            while let Some(raw) = self.pending.pop_front() {
                if let Some(card) = CardLine::parse(&raw) {
                    return Some(Ok(card));
                }
            }
            match self.lines.next()? {
                Ok(raw) if raw.contains('\r') => {
                    self.pending.extend(raw.split('\r').map(str::to_string));
                }
                Ok(raw) => {
                    if let Some(card) = CardLine::parse(&raw) {
                        return Some(Ok(card));
                    }
                }
                Err(source) => {
                    self.failed = true;
                    return Some(Err(ConvertError::Read {
                        path: self.origin.clone(),
                        source,
                    }));
                }
            }
        }
    }
}

/// Open `path` and return its card lines. Every call starts from the top of the file.
pub fn read_cards(path: &Path) -> Result<CardLines<BufReader<File>>, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("reading card lines from {}", path.display());
    Ok(CardLines::new(BufReader::new(file), path))
}
