// Tests for search filtering
// Test cases:
// - Case-insensitive contains/starts/ends matching
// - Empty pattern matches everything in every mode
// - Unknown mode names fall through to keeping all entries
// - Relative order is preserved

use super::*;

/// Helper to build an entry with a fixed timestamp
fn entry(text: &str) -> WordEntry {
    WordEntry {
        key: text.to_lowercase(),
        text: text.to_string(),
        added_at: 0,
    }
}

#[test]
fn test_contains_is_case_insensitive() {
    let entries = vec![entry("Alpha"), entry("Beta")];

    let matched = filter_entries(&entries, "a", FilterMode::Contains);
    assert_eq!(matched.len(), 2);

    let matched = filter_entries(&entries, "ALPH", FilterMode::Contains);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].text, "Alpha");
}

#[test]
fn test_starts_and_ends_modes() {
    let entries = vec![entry("Alpha"), entry("Beta")];

    let starts = filter_entries(&entries, "alp", FilterMode::Starts);
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].text, "Alpha");

    let ends = filter_entries(&entries, "TA", FilterMode::Ends);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].text, "Beta");
}

#[test]
fn test_empty_pattern_matches_everything() {
    let entries = vec![entry("Alpha"), entry("Beta")];

    for mode in [
        FilterMode::Contains,
        FilterMode::Starts,
        FilterMode::Ends,
        FilterMode::All,
    ] {
        assert_eq!(filter_entries(&entries, "", mode).len(), 2);
    }
}

#[test]
fn test_unknown_mode_name_keeps_all_entries() {
    assert_eq!(FilterMode::from("contains"), FilterMode::Contains);
    assert_eq!(FilterMode::from("starts"), FilterMode::Starts);
    assert_eq!(FilterMode::from("ends"), FilterMode::Ends);
    assert_eq!(FilterMode::from("bogus"), FilterMode::All);

    let entries = vec![entry("Alpha"), entry("Beta")];
    let matched = filter_entries(&entries, "zzz", FilterMode::from("bogus"));
    assert_eq!(matched.len(), 2);
}

#[test]
fn test_filter_preserves_relative_order() {
    let entries = vec![entry("arc"), entry("bar"), entry("car")];

    let matched = filter_entries(&entries, "ar", FilterMode::Contains);
    let texts: Vec<&str> = matched.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["arc", "bar", "car"]);
}
