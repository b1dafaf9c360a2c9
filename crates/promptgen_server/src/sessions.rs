//! Session CSV discovery and parsing.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Find the most recently modified `.csv` file in `dir`.
///
/// Returns `None` when the directory is missing or holds no CSV files;
/// callers treat that as a valid empty-result case.
pub fn find_latest_csv(dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };
        match &latest {
            Some((stamp, _)) if *stamp >= modified => {}
            _ => latest = Some((modified, path)),
        }
    }

    latest.map(|(_, path)| path)
}

/// Read a CSV file into one field-mapping per record, keyed by header.
///
/// Quoted fields may contain commas and doubled quotes; short records are
/// padded with empty strings. Record order is preserved.
pub fn read_csv(path: &Path) -> io::Result<Vec<BTreeMap<String, String>>> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let headers = split_record(header);

    let mut records = Vec::new();
    for line in lines {
        let values = split_record(line);
        let mut record = BTreeMap::new();
        for (i, key) in headers.iter().enumerate() {
            record.insert(key.clone(), values.get(i).cloned().unwrap_or_default());
        }
        records.push(record);
    }

    Ok(records)
}

/// Split one CSV record into fields, honoring double-quoted fields.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // Doubled quote inside a quoted field is a literal quote
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_split_record_plain() {
        assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_record_quoted_comma_and_escaped_quote() {
        assert_eq!(
            split_record(r#"one,"two, three","he said ""hi""""#),
            vec!["one", "two, three", r#"he said "hi""#]
        );
    }

    #[test]
    fn test_read_csv_maps_records_to_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "topic,thought").unwrap();
        writeln!(file, "rivers,water flows").unwrap();
        writeln!(file, "stars,").unwrap();

        let records = read_csv(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["topic"], "rivers");
        assert_eq!(records[0]["thought"], "water flows");
        assert_eq!(records[1]["thought"], "");
    }

    #[test]
    fn test_read_csv_pads_short_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "a,b,c").unwrap();
        writeln!(file, "1,2").unwrap();

        let records = read_csv(&path).unwrap();
        assert_eq!(records[0]["c"], "");
    }

    #[test]
    fn test_find_latest_csv_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_latest_csv(dir.path()), None);
    }

    #[test]
    fn test_find_latest_csv_missing_dir() {
        assert_eq!(find_latest_csv(Path::new("/nonexistent/sessions")), None);
    }

    #[test]
    fn test_find_latest_csv_ignores_non_csv() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        assert_eq!(find_latest_csv(dir.path()), None);
    }

    #[test]
    fn test_find_latest_csv_picks_most_recent() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.csv");
        let new = dir.path().join("new.csv");
        File::create(&old).unwrap();
        File::create(&new).unwrap();

        // Push the old file's mtime into the past to break any timestamp tie
        File::options()
            .write(true)
            .open(&old)
            .unwrap()
            .set_modified(UNIX_EPOCH + Duration::from_secs(1))
            .unwrap();

        assert_eq!(find_latest_csv(dir.path()), Some(new));
    }
}
