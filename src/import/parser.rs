//! Turns an uploaded spreadsheet or CSV into header-keyed rows.
//!
//! The first row is the header row. Header display text is cut at its first
//! parenthesis, so a column documented as `"email (REQUIRED, must be
//! unique)"` maps to the key `email`. Template sample rows (no value in any
//! of firstName/lastName/email) and fully blank rows are dropped.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use calamine::{Data, DataType, Reader, open_workbook_auto};
use sea_orm::prelude::Decimal;

/// One data row, keyed by normalized header name. Transient: lives only for
/// the duration of a single import run.
#[derive(Debug, Clone, Default)]
pub struct ImportRow {
    cells: HashMap<String, String>,
}

impl ImportRow {
    /// Non-empty, trimmed value for a header key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Trimmed value, empty string when absent.
    pub fn value(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    /// Comma-separated list field split into trimmed, non-empty parts.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.value(key)
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// Numeric field with a fallback of zero on non-numeric input.
    pub fn decimal_or_zero(&self, key: &str) -> Decimal {
        self.get(key)
            .and_then(|v| Decimal::from_str(v).ok())
            .unwrap_or(Decimal::ZERO)
    }

    /// Integer field with a fallback of zero on non-numeric input.
    pub fn int_or_zero(&self, key: &str) -> i32 {
        self.get(key)
            .and_then(|v| {
                v.parse::<i32>()
                    .ok()
                    .or_else(|| v.parse::<f64>().ok().map(|f| f as i32))
            })
            .unwrap_or(0)
    }

    fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.trim().is_empty())
    }

    /// Template sample rows carry no identity at all.
    fn has_identity(&self) -> bool {
        ["firstName", "lastName", "email"]
            .iter()
            .any(|key| self.get(key).is_some())
    }
}

/// Parses the file at `path` into ordered rows. The extension decides the
/// format: `.csv` goes through the csv reader, everything else is treated as
/// a workbook (first sheet only).
pub fn parse_rows(path: &Path) -> Result<Vec<ImportRow>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let raw = if is_csv {
        read_csv(path)?
    } else {
        read_workbook(path)?
    };

    rows_from_cells(raw)
}

fn rows_from_cells(raw: Vec<Vec<String>>) -> Result<Vec<ImportRow>> {
    if raw.len() < 2 {
        bail!("File must contain a header row and at least one data row");
    }

    let mut header_cells = raw[0].clone();
    // Workbook ranges can trail off into unused columns; drop them before
    // validating the header proper.
    while header_cells.last().is_some_and(|cell| cell.trim().is_empty()) {
        header_cells.pop();
    }
    if header_cells.is_empty() {
        bail!("Header row is empty");
    }

    let headers = header_cells
        .iter()
        .map(|cell| header_key(cell))
        .collect::<Result<Vec<_>>>()?;

    let mut rows = Vec::new();
    for cells in raw.into_iter().skip(1) {
        let mut row = ImportRow::default();
        for (index, header) in headers.iter().enumerate() {
            let value = cells.get(index).cloned().unwrap_or_default();
            row.cells.insert(header.clone(), value);
        }

        if row.is_blank() || !row.has_identity() {
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        bail!("File contains no valid data rows");
    }

    Ok(rows)
}

/// Header display text before its first parenthesis, trimmed. An empty
/// result is a fatal parse error.
fn header_key(raw: &str) -> Result<String> {
    let key = raw.split('(').next().unwrap_or("").trim();
    if key.is_empty() {
        bail!("Header cell {:?} has no column name", raw);
    }
    Ok(key.to_string())
}

fn read_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .escape(Some(b'\\'))
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

fn read_workbook(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let first_sheet = sheet_names
        .first()
        .context("Workbook has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&first_sheet)
        .context("Failed to read first sheet")?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(rows)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // Whole-number cells come back as floats; render them without the
        // trailing ".0" so they survive re-parsing as ids and amounts.
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.as_string().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    struct TempCsv(PathBuf);

    impl TempCsv {
        fn new(name: &str, content: &str) -> Self {
            let path = std::env::temp_dir().join(format!("{}_{}", uuid::Uuid::new_v4(), name));
            fs::write(&path, content).unwrap();
            Self(path)
        }
    }

    impl Drop for TempCsv {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn header_text_is_cut_at_parenthesis() {
        assert_eq!(
            header_key("rollNumber (REQUIRED, unique)").unwrap(),
            "rollNumber"
        );
        assert_eq!(header_key("email").unwrap(), "email");
    }

    #[test]
    fn header_with_nothing_before_parenthesis_is_fatal() {
        assert!(header_key("   (Optional)").is_err());
        assert!(header_key("").is_err());
    }

    #[test]
    fn quoted_csv_values_keep_embedded_commas() {
        let file = TempCsv::new(
            "quoting.csv",
            "firstName,lastName,age\nJohn,\"Doe, Jr.\",30\n",
        );
        let rows = parse_rows(&file.0).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value("firstName"), "John");
        assert_eq!(rows[0].value("lastName"), "Doe, Jr.");
        assert_eq!(rows[0].value("age"), "30");
    }

    #[test]
    fn blank_and_identityless_rows_are_skipped() {
        let file = TempCsv::new(
            "skip.csv",
            "firstName,lastName,email\nJane,Roe,\n,,\nThis row is an instruction only,,\n",
        );
        let rows = parse_rows(&file.0).unwrap();
        // The instruction row has a firstName value, so it survives the
        // identity filter; the fully blank row does not.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value("firstName"), "Jane");
    }

    #[test]
    fn header_only_file_is_fatal() {
        let file = TempCsv::new("empty.csv", "firstName,lastName,email\n");
        assert!(parse_rows(&file.0).is_err());
    }

    #[test]
    fn all_rows_filtered_out_is_fatal() {
        let file = TempCsv::new("filtered.csv", "firstName,lastName,email\n,,\n,,\n");
        assert!(parse_rows(&file.0).is_err());
    }

    #[test]
    fn annotated_headers_map_to_clean_keys() {
        let file = TempCsv::new(
            "annotated.csv",
            "firstName (REQUIRED),email (REQUIRED, must be unique)\nAda,ada@example.com\n",
        );
        let rows = parse_rows(&file.0).unwrap();
        assert_eq!(rows[0].value("firstName"), "Ada");
        assert_eq!(rows[0].value("email"), "ada@example.com");
    }

    #[test]
    fn list_and_numeric_helpers() {
        let file = TempCsv::new(
            "helpers.csv",
            "firstName,subjects,salary,experience\nAda,\"Math, Physics ,\",2500.50,abc\n",
        );
        let rows = parse_rows(&file.0).unwrap();
        assert_eq!(rows[0].list("subjects"), vec!["Math", "Physics"]);
        assert_eq!(
            rows[0].decimal_or_zero("salary"),
            Decimal::from_str("2500.50").unwrap()
        );
        assert_eq!(rows[0].int_or_zero("experience"), 0);
        assert_eq!(rows[0].decimal_or_zero("missing"), Decimal::ZERO);
    }
}
