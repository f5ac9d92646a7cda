// Search filtering over stored entries
// Matching is case-insensitive over the entry text; an empty pattern
// matches everything.

use serde::{Deserialize, Serialize};

use crate::store::WordEntry;

/// How the search pattern is matched against entry text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Keep entries whose text contains the pattern
    #[default]
    Contains,
    /// Keep entries whose text starts with the pattern
    Starts,
    /// Keep entries whose text ends with the pattern
    Ends,
    /// Keep every entry
    All,
}

impl From<&str> for FilterMode {
    /// Unrecognized names fall through to [`FilterMode::All`], matching
    /// the popup's select-element behavior.
    fn from(value: &str) -> Self {
        match value {
            "contains" => FilterMode::Contains,
            "starts" => FilterMode::Starts,
            "ends" => FilterMode::Ends,
            _ => FilterMode::All,
        }
    }
}

/// Filter entries against a search pattern, preserving relative order.
pub fn filter_entries<'a>(
    entries: &'a [WordEntry],
    pattern: &str,
    mode: FilterMode,
) -> Vec<&'a WordEntry> {
    let pattern = pattern.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            let text = entry.text.to_lowercase();
            match mode {
                FilterMode::Contains => text.contains(&pattern),
                FilterMode::Starts => text.starts_with(&pattern),
                FilterMode::Ends => text.ends_with(&pattern),
                FilterMode::All => true,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
