// ABOUTME: Command override parsing for the launched container.
// ABOUTME: Accepts a legacy JSON array or newline/space separated tokens.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandParseError {
    #[error("command is not a valid JSON array of strings: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Split a raw command input into the argument list passed as a container override.
///
/// A value starting with `[` is decoded as a JSON array of strings. Any other
/// value is split on newlines when it contains one, otherwise on single
/// spaces, and every token is trimmed. Quoting is not interpreted, so
/// `echo 'a b'` yields three tokens.
pub fn parse_command(raw: &str) -> Result<Vec<String>, CommandParseError> {
    if raw.starts_with('[') {
        return Ok(serde_json::from_str(raw)?);
    }

    let separator = if raw.contains('\n') { '\n' } else { ' ' };
    Ok(raw
        .split(separator)
        .map(|token| token.trim().to_string())
        .collect())
}
