use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::model::{Model, TabularBatch};
use crate::sanitize::{sanitize_field, FieldValue, Provenance};
use crate::schema::Schema;
use crate::table::io::{read_table, write_table};

/// Output column holding the positive-class probability.
pub const PROBABILITY_COLUMN: &str = "prediction_probability_yes";
/// Output column holding the predicted class label (empty for bare scalars).
pub const CLASS_COLUMN: &str = "prediction_class";

/// What a scoring run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    /// Rows read, scored, and written.
    pub rows: usize,
    /// Fields repaired to their fallback value during sanitization.
    pub fallback_fields: usize,
}

// ---------------------------------------------------------------------------
// Scoring pipeline
// ---------------------------------------------------------------------------

/// Score a CSV file end to end.
///
/// Reads `input` fully into memory, sanitizes every row to `schema` (in
/// schema column order), scores the batch with `model`, and writes the
/// input rows back with [`PROBABILITY_COLUMN`] and [`CLASS_COLUMN`]
/// appended after the input's own columns, whose order is preserved.
///
/// A schema feature whose column is absent from the input is an error
/// (reported with the full available column list, nothing written). Bad
/// field values are not errors: they are silently repaired per the lenient
/// sanitization policy and only counted in the report.
pub fn score_csv(
    input: &Path,
    output: &Path,
    schema: &Schema,
    model: &dyn Model,
) -> Result<ScoreReport> {
    let mut table = read_table(input)?;

    let missing: Vec<&str> = schema
        .column_names()
        .into_iter()
        .filter(|name| table.column_index(name).is_none())
        .collect();
    if !missing.is_empty() {
        bail!(
            "input '{}' is missing feature column(s): {}. Existing columns: {}",
            input.display(),
            missing.join(", "),
            table.header.join(", ")
        );
    }

    let indices: Vec<usize> = schema
        .column_names()
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    let mut fallback_fields = 0usize;
    let rows: Vec<Vec<FieldValue>> = table
        .rows
        .iter()
        .map(|row| {
            schema
                .features
                .iter()
                .zip(&indices)
                .map(|(feature, &i)| {
                    let sanitized = sanitize_field(&row[i], feature);
                    if sanitized.provenance == Provenance::Fallback {
                        fallback_fields += 1;
                    }
                    sanitized.value
                })
                .collect()
        })
        .collect();
    if fallback_fields > 0 {
        warn!("{fallback_fields} field(s) repaired to their fallback value");
    }

    let batch = TabularBatch { schema, rows };
    let predictions = model.predict(&batch)?;
    if predictions.len() != table.len() {
        bail!(
            "model returned {} prediction(s) for {} row(s)",
            predictions.len(),
            table.len()
        );
    }

    let probabilities: Vec<String> = predictions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p.probability_yes()
                .map(|v| v.to_string())
                .with_context(|| format!("row {i}: prediction has no positive-class probability"))
        })
        .collect::<Result<_>>()?;
    let classes: Vec<String> = predictions
        .iter()
        .map(|p| p.class().unwrap_or("").to_string())
        .collect();

    table.push_column(PROBABILITY_COLUMN, probabilities);
    table.push_column(CLASS_COLUMN, classes);

    write_table(output, &table)?;
    info!(
        "scored {} row(s) from '{}' into '{}'",
        table.len(),
        input.display(),
        output.display()
    );

    Ok(ScoreReport {
        rows: table.len(),
        fallback_fields,
    })
}
