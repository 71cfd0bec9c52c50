//! Loader for hand-authored control-point files.
//!
//! The on-disk format is one whitespace-separated float triple per line.
//! The first two rows are the boundary tangent vectors, every remaining row
//! is a profile point; at least two profile rows are required. Blank lines
//! are skipped. Malformed data is rejected here and never reaches the
//! geometry pipeline.

use std::fs;
use std::path::Path;

use crate::geom::ControlPointSet;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("line {line}: expected 3 numeric values, got `{content}`")]
    MalformedRow { line: usize, content: String },
    #[error("control-point file needs 2 tangent rows and at least 2 profile rows, got {rows} rows")]
    TooFewRows { rows: usize },
    #[error("read control-point file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse control-point text into a [`ControlPointSet`].
pub fn parse_control_points(text: &str) -> Result<ControlPointSet, ProfileError> {
    let mut rows: Vec<[f64; 3]> = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut values = [0.0_f64; 3];
        let mut tokens = line.split_whitespace();
        for slot in &mut values {
            *slot = tokens
                .next()
                .and_then(|token| token.parse().ok())
                .ok_or_else(|| malformed(index, line))?;
        }
        if tokens.next().is_some() {
            return Err(malformed(index, line));
        }
        rows.push(values);
    }

    ControlPointSet::from_rows(&rows).map_err(|_| ProfileError::TooFewRows { rows: rows.len() })
}

/// Read and parse a control-point file.
pub fn load_control_points(path: &Path) -> Result<ControlPointSet, ProfileError> {
    parse_control_points(&fs::read_to_string(path)?)
}

fn malformed(index: usize, line: &str) -> ProfileError {
    ProfileError::MalformedRow {
        line: index + 1,
        content: line.to_string(),
    }
}
