use crate::error::ApiError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One spreadsheet row as an ordered list of `(header label, cell value)`
/// pairs. Pair order matters: downstream header collisions resolve
/// last-seen-wins.
pub type RawRow = Vec<(String, String)>;

const DELIMITER_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

/// Picks the delimiter that occurs most often in the header line.
pub fn detect_delimiter(header_line: &str) -> char {
    DELIMITER_CANDIDATES
        .iter()
        .max_by_key(|&&d| header_line.matches(d).count())
        .copied()
        .unwrap_or(',')
}

/// Reads a delimited sheet into ordered row mappings. The first line
/// provides the header labels; missing cells come back as empty strings and
/// the original row order is preserved.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, ApiError> {
    let mut header_line = String::new();
    BufReader::new(File::open(path)?).read_line(&mut header_line)?;
    let delimiter = detect_delimiter(header_line.trim_end_matches(['\n', '\r']));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = headers
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_sheet(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp sheet");
        file.write_all(content.as_bytes()).expect("write sheet");
        file
    }

    #[test]
    fn detects_the_dominant_delimiter() {
        assert_eq!(detect_delimiter("a,b,c"), ',');
        assert_eq!(detect_delimiter("a;b;c"), ';');
        assert_eq!(detect_delimiter("a\tb\tc"), '\t');
        assert_eq!(detect_delimiter("plain"), ',');
    }

    #[test]
    fn preserves_row_order_and_defaults_missing_cells() {
        let file = write_sheet("Name,Roll No\nA. Roy,12\nB. Sen\n");
        let rows = read_rows(file.path()).expect("decode");

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![
                ("Name".to_string(), "A. Roy".to_string()),
                ("Roll No".to_string(), "12".to_string()),
            ]
        );
        // Second row is short one cell; the missing value reads as "".
        assert_eq!(rows[1][1], ("Roll No".to_string(), String::new()));
    }

    #[test]
    fn reads_semicolon_delimited_sheets() {
        let file = write_sheet("Name;Class\nA. Roy;5\n");
        let rows = read_rows(file.path()).expect("decode");
        assert_eq!(rows[0][1], ("Class".to_string(), "5".to_string()));
    }

    #[test]
    fn header_only_sheet_yields_no_rows() {
        let file = write_sheet("Name,Roll No\n");
        assert!(read_rows(file.path()).expect("decode").is_empty());
    }
}
