use std::path::Path;

use anyhow::Result;
use log::info;
use thiserror::Error;

use super::io::{read_table, write_table};

// ---------------------------------------------------------------------------
// Errors and reports
// ---------------------------------------------------------------------------

/// Schema mismatch between the requested columns and the file's header.
///
/// Raised before anything is written; the input file is never modified when
/// this error occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error(
        "column(s) not found: {}. Existing columns: {}",
        missing.join(", "),
        available.join(", ")
    )]
    MissingColumns {
        /// Requested columns absent from the header, in request order.
        missing: Vec<String>,
        /// The file's full header.
        available: Vec<String>,
    },
}

/// What an edit did: how many rows were processed and how many columns the
/// output file has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditReport {
    pub rows: usize,
    pub columns: usize,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Clear every value in one column, keeping the column itself.
///
/// When `output` is `None` the input file is rewritten in place. The input
/// is fully read into memory before any write begins.
pub fn clear_column(input: &Path, column: &str, output: Option<&Path>) -> Result<EditReport> {
    clear_columns(input, &[column.to_string()], output)
}

/// Clear every value in each of the named columns.
///
/// All-or-nothing: if any requested column is absent the operation aborts
/// with [`EditError::MissingColumns`] listing every missing name, and no
/// output is written.
pub fn clear_columns(input: &Path, columns: &[String], output: Option<&Path>) -> Result<EditReport> {
    let mut table = read_table(input)?;

    let missing = table.missing_columns(columns);
    if !missing.is_empty() {
        return Err(EditError::MissingColumns {
            missing,
            available: table.header.clone(),
        }
        .into());
    }

    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|c| table.column_index(c))
        .collect();
    table.clear_columns(&indices);

    let out = output.unwrap_or(input);
    write_table(out, &table)?;
    info!(
        "cleared {} column(s) in '{}' ({} rows)",
        columns.len(),
        out.display(),
        table.len()
    );

    Ok(EditReport {
        rows: table.len(),
        columns: table.width(),
    })
}

/// Remove a column entirely: from the header and from every row.
///
/// Validation and output-path behaviour match [`clear_column`]. The report's
/// `columns` field is the remaining column count.
pub fn delete_column(input: &Path, column: &str, output: Option<&Path>) -> Result<EditReport> {
    let mut table = read_table(input)?;

    let Some(index) = table.column_index(column) else {
        return Err(EditError::MissingColumns {
            missing: vec![column.to_string()],
            available: table.header.clone(),
        }
        .into());
    };
    table.delete_column(index);

    let out = output.unwrap_or(input);
    write_table(out, &table)?;
    info!(
        "deleted column '{}' from '{}' ({} rows, {} columns left)",
        column,
        out.display(),
        table.len(),
        table.width()
    );

    Ok(EditReport {
        rows: table.len(),
        columns: table.width(),
    })
}
