//! Convenience helpers for the command handler.

use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Single-dash spellings that clap cannot express as short flags.
const MULTI_CHAR_FLAGS: [(&str, &str); 2] = [("-if", "--input-file"), ("-of", "--output-file")];

/// Rewrite `-if`/`-of` (and their `=value` forms) to the long options clap knows.
///
/// Arguments after a literal `--` are left untouched. An option value spelled exactly
/// `-if` or `-of` (as in `-d -if`) is rewritten too; clap rejects such values anyway.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            expand_flag(arg)
        })
        .collect()
}

fn expand_flag(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    for (short, long) in MULTI_CHAR_FLAGS {
        if text == short {
            return long.into();
        }
        if let Some(value) = text.strip_prefix(short).and_then(|rest| rest.strip_prefix('=')) {
            return format!("{long}={value}").into();
        }
    }
    arg
}

/// Create (or truncate) the output file; it is closed when the writer drops.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Install the stderr logger. `RUST_LOG` takes precedence over the default level.
pub fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn normalized(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().map(OsString::from))
            .into_iter()
            .map(|arg| arg.into_string().unwrap())
            .collect()
    }

    #[test]
    fn rewrites_multi_char_flags() {
        assert_eq!(
            normalized(&["bin", "-if", "a.txt", "-of=b.txt", "-n", "Basic"]),
            vec!["bin", "--input-file", "a.txt", "--output-file=b.txt", "-n", "Basic"]
        );
    }

    #[test]
    fn leaves_lookalikes_alone() {
        assert_eq!(
            normalized(&["bin", "-ifx", "--input-file", "x", "--", "-if"]),
            vec!["bin", "-ifx", "--input-file", "x", "--", "-if"]
        );
    }

    #[test]
    fn values_spelled_like_flags_are_rewritten() {
        assert_eq!(
            normalized(&["bin", "-d", "-if"]),
            vec!["bin", "-d", "--input-file"]
        );
    }

    #[test]
    fn create_output_reports_bad_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = create_output(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to create"));
    }
}
