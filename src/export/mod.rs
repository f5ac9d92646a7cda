// CSV export of the stored words
//
// Two columns, `word,modified`, one row per entry in store order. The
// timestamp renders as ISO-8601 UTC with millisecond precision, and the
// output carries no trailing newline.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::store::WordStore;

/// Download file name the popup uses for the generated CSV
pub const EXPORT_FILE_NAME: &str = "wordstore.csv";

/// MIME type for the generated CSV
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// A generated CSV document plus the download metadata the shell needs
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

/// Render the store as CSV.
///
/// Returns `None` for an empty store; callers must not trigger a download
/// in that case.
pub fn export_csv(store: &WordStore) -> Option<CsvExport> {
    if store.is_empty() {
        return None;
    }

    let mut content = String::from("word,modified");
    for entry in store.entries() {
        content.push('\n');
        content.push_str(&entry.text);
        content.push(',');
        content.push_str(&iso_timestamp(entry.added_at));
    }

    Some(CsvExport {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        content,
    })
}

/// Millisecond epoch timestamp as an ISO-8601 UTC string, e.g.
/// `2023-11-14T22:13:20.000Z`
fn iso_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
