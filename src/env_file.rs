//! Line-oriented `.env.local` parsing and placeholder detection.
//!
//! The format is one `KEY=VALUE` assignment per line with no quoting or
//! escaping support: values are taken verbatim after the first `=` and
//! trimmed. Lines without an `=`, blank lines, and `#` comments are ignored.

use std::collections::BTreeMap;

/// Case-sensitive substrings that mark a value as a template default rather
/// than a real credential or address.
pub const PLACEHOLDER_MARKERS: &[&str] = &["your_", "YOUR_", "..."];

/// Parse env-file text into a key/value map. Later assignments of the same
/// key win, matching how dotenv loaders resolve duplicates.
pub fn parse_env_file(text: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), value.trim().to_string());
    }
    vars
}

/// Classification of one required key against the parsed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarState {
    /// Key absent from the file entirely.
    Missing,
    /// Key present but the value is empty or a recognizable placeholder.
    Placeholder,
    /// Key present with an apparently real value.
    Set,
}

pub fn classify_var(vars: &BTreeMap<String, String>, key: &str) -> VarState {
    match vars.get(key) {
        None => VarState::Missing,
        Some(value) if is_placeholder(value) => VarState::Placeholder,
        Some(_) => VarState::Set,
    }
}

fn is_placeholder(value: &str) -> bool {
    value.is_empty()
        || PLACEHOLDER_MARKERS
            .iter()
            .any(|marker| value.contains(marker))
}
