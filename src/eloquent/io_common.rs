use std::fs;
use std::path::Path;

use crate::eloquent::*;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

pub fn read_file(path: &str) -> EloquentResult<String> {
    fs::read_to_string(path).context(OpeningFileSnafu { path })
}

pub fn write_file(path: &str, contents: &str) -> EloquentResult<()> {
    debug!("write_file: {} bytes to {:?}", contents.len(), path);
    fs::write(path, contents).context(WritingFileSnafu { path })
}

/// Reads an optional cost. Empty means no cost.
pub fn parse_cost(lineno: usize, s: &str) -> EloquentResult<Option<f64>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let cost = trimmed
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite())
        .context(InvalidCostSnafu {
            lineno,
            cost: trimmed,
        })?;
    Ok(Some(cost))
}
