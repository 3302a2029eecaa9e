//! Reading and writing the record store as CSV.
//!
//! A row has exactly four fields: identifier, age, annual income and purchase score, in that order. Numeric fields that fail to parse are read as zero
//! rather than rejected, while a row with the wrong number of fields is an error.

use std::path::Path;

use crate::Record;

/// The number of fields in a row.
const NUM_FIELDS: usize = 4;

/// The header written by [`write_records`].
pub const CSV_HEADER: [&str; NUM_FIELDS] = ["id", "age", "annual_income", "purchase_score"];

/// Reads records from CSV.
///
/// If `has_headers` is true, the first row is skipped.
///
/// # Errors
///
/// - If the CSV could not be read.
/// - If any row does not have exactly four fields.
pub fn read_records<R: std::io::Read>(reader: R, has_headers: bool) -> Result<Vec<Record>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(|e| format!("Failed to read CSV row: {e}"))?;
        let line = row.position().map_or(i as u64 + 1, csv::Position::line);
        if row.len() != NUM_FIELDS {
            return Err(format!("Row on line {line} has {} fields, expected {NUM_FIELDS}", row.len()));
        }

        let age = parse_int(&row[1], "age", line);
        let annual_income = parse_float(&row[2], "annual_income", line);
        let purchase_score = parse_int(&row[3], "purchase_score", line);
        records.push(Record::new(&row[0], age, annual_income, purchase_score));
    }

    ftlog::info!("Read {} records", records.len());
    Ok(records)
}

/// Reads records from the CSV file at `path`.
///
/// # Errors
///
/// - If the file could not be opened.
/// - See [`read_records`].
pub fn read_records_from_path<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<Vec<Record>, String> {
    let path = path.as_ref();
    ftlog::info!("Reading records from {}", path.display());
    let file = std::fs::File::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    read_records(std::io::BufReader::new(file), has_headers)
}

/// Writes records as CSV with a header row.
///
/// # Errors
///
/// - If any row could not be written or the writer could not be flushed.
pub fn write_records<W: std::io::Write>(writer: W, records: &[Record]) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER).map_err(|e| e.to_string())?;
    for r in records {
        writer
            .write_record([r.id().to_string(), r.age().to_string(), r.annual_income().to_string(), r.purchase_score().to_string()])
            .map_err(|e| format!("Failed to write record {}: {e}", r.id()))?;
    }
    writer.flush().map_err(|e| e.to_string())
}

/// Parses an integer field, falling back to zero.
fn parse_int(field: &str, name: &str, line: u64) -> i64 {
    field.parse().unwrap_or_else(|_| {
        ftlog::warn!("Could not parse {name} {field:?} on line {line}; using 0");
        0
    })
}

/// Parses a finite floating point field, falling back to zero.
fn parse_float(field: &str, name: &str, line: u64) -> f64 {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            ftlog::warn!("Could not parse {name} {field:?} on line {line}; using 0");
            0.0
        }
    }
}
