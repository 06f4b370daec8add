//! Resolving the request text from arguments, a file, or stdin.

use crate::error::{CliError, CliResult};
use std::io::Read;
use std::path::Path;

/// Pick the description from positional words, a file, or the given reader.
///
/// Positional words win over `--file`; the reader is only consulted when
/// neither is present. Blank input is rejected.
pub fn resolve_description<R: Read>(
    words: &[String],
    file: Option<&Path>,
    mut fallback: R,
) -> CliResult<String> {
    let text = if !words.is_empty() {
        words.join(" ")
    } else if let Some(path) = file {
        std::fs::read_to_string(path)?
    } else {
        let mut buffer = String::new();
        fallback.read_to_string(&mut buffer)?;
        buffer
    };

    if text.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(text)
}
