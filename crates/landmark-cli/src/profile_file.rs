//! Reading profiles from plain text files.

use std::path::{Path, PathBuf};

use landmark::ProfileKind;

/// Parses `KIND=PATH`, e.g. `ANGLE=angles.txt`.
pub fn parse_profile_arg(arg: &str) -> Result<(ProfileKind, PathBuf), String> {
    let (kind, path) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=PATH, got '{arg}'"))?;
    let kind = kind
        .trim()
        .to_ascii_uppercase()
        .parse::<ProfileKind>()
        .map_err(|e| e.to_string())?;
    let path = path.trim();
    if path.is_empty() {
        return Err(format!("missing path for {kind}"));
    }
    Ok((kind, PathBuf::from(path)))
}

/// Parses values separated by newlines, commas or whitespace.
///
/// Lines starting with `#` are ignored.
pub fn parse_values(text: &str) -> Result<Vec<f64>, String> {
    let mut values = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let value = token
                .parse::<f64>()
                .map_err(|_| format!("line {}: '{token}' is not a number", line_no + 1))?;
            values.push(value);
        }
    }
    Ok(values)
}

pub fn read_values(path: &Path) -> Result<Vec<f64>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read profile {}: {e}", path.display()))?;
    parse_values(&text).map_err(|e| format!("{}: {e}", path.display()))
}
