use std::path::Path;

use anyhow::{Context, Result};

use super::model::Table;

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Read a whole CSV file into a [`Table`].
///
/// The header row is mandatory. Quoting and escaping follow RFC 4180 via the
/// `csv` crate; a row whose field count differs from the header is a parse
/// error. The file handle is released before this function returns, so the
/// caller may write the same path afterwards.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV '{}'", path.display()))?;

    let header: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(Table::new(header, rows))
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write a [`Table`] as CSV: header first, then every row.
///
/// Fields are quoted only when needed and records end with `\n`, so no blank
/// lines appear regardless of the platform's native line terminator.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV '{}'", path.display()))?;

    writer
        .write_record(&table.header)
        .context("writing CSV header")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row)
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV output")?;

    Ok(())
}
