//! Label Files
//!
//! One class per line, in model output order. Exporters often write an index
//! in front of each name (`0 Banana`); `LabelFormat::IndexPrefixed` strips a
//! leading integer token and leaves anything else alone, so `Banana` and
//! `0 Banana` both read as `Banana` while `Red Banana` keeps its first word.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{VisionError, VisionResult};

/// How label lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// Each trimmed line is the class name
    Plain,
    /// Optional `<index> ` prefix in front of the class name
    #[default]
    IndexPrefixed,
}

impl LabelFormat {
    /// Class name carried by one line
    pub fn parse_line<'a>(&self, line: &'a str) -> &'a str {
        let line = line.trim();
        match self {
            LabelFormat::Plain => line,
            LabelFormat::IndexPrefixed => match line.split_once(char::is_whitespace) {
                Some((head, rest)) if head.parse::<u32>().is_ok() => rest.trim_start(),
                _ => line,
            },
        }
    }

    /// Parse a whole label file, skipping a byte-order mark and blank lines
    pub fn parse(&self, text: &str) -> Vec<String> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        text.lines()
            .map(|line| self.parse_line(line))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Read labels from disk
///
/// A missing file, invalid UTF-8 or a file with no labels is a
/// `VisionError::LabelLoad`.
pub fn load_labels(path: impl AsRef<Path>, format: LabelFormat) -> VisionResult<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| VisionError::LabelLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let labels = format.parse(&text);
    if labels.is_empty() {
        return Err(VisionError::LabelLoad {
            path: path.display().to_string(),
            reason: "no labels found".to_string(),
        });
    }

    log::debug!("loaded {} labels from {}", labels.len(), path.display());
    Ok(labels)
}
