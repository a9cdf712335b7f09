//! End-to-end scoring through a stub model.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use csv_chisel::model::{BaselineModel, Model, Prediction, TabularBatch};
use csv_chisel::runner::{score_csv, CLASS_COLUMN, PROBABILITY_COLUMN};
use csv_chisel::sanitize::FieldValue;
use csv_chisel::schema::{Feature, Schema};

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn schema() -> Schema {
    Schema::new(vec![
        Feature::continuous("price"),
        Feature::discrete("hasWebsite", &["true", "false"]),
    ])
}

/// Scores each row from the sanitized price so tests can see exactly what
/// the sanitizer handed over.
struct EchoModel;

impl Model for EchoModel {
    fn predict(&self, batch: &TabularBatch) -> Result<Vec<Prediction>> {
        Ok(batch
            .rows
            .iter()
            .map(|row| match row[0] {
                FieldValue::Continuous(v) => Prediction::Classified {
                    class: if v > 0.0 { "yes" } else { "no" }.to_string(),
                    probabilities: vec![1.0 - v, v],
                },
                FieldValue::Discrete(_) => Prediction::Scalar(0.0),
            })
            .collect())
    }
}

/// Always returns the wrong number of predictions.
struct BrokenModel;

impl Model for BrokenModel {
    fn predict(&self, _batch: &TabularBatch) -> Result<Vec<Prediction>> {
        Ok(vec![])
    }
}

#[test]
fn output_appends_prediction_columns_after_original_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(
        &dir,
        "input.csv",
        "extra,hasWebsite,price\nkeep,true,0.5\nalso,false,0.25\n",
    );
    let output = dir.path().join("out.csv");

    let report = score_csv(&input, &output, &schema(), &EchoModel).unwrap();
    assert_eq!(report.rows, 2);
    assert_eq!(report.fallback_fields, 0);

    // Original columns stay first and in input order, even though the schema
    // orders its features differently and ignores `extra`.
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!(
            "extra,hasWebsite,price,{PROBABILITY_COLUMN},{CLASS_COLUMN}\n\
             keep,true,0.5,0.5,yes\n\
             also,false,0.25,0.25,yes\n"
        )
    );
}

#[test]
fn scalar_predictions_leave_the_class_cell_empty() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "input.csv", "price,hasWebsite\n0.5,true\n");
    let output = dir.path().join("out.csv");

    let model = BaselineModel {
        probability_yes: 0.9,
        class: None,
    };
    score_csv(&input, &output, &schema(), &model).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!("price,hasWebsite,{PROBABILITY_COLUMN},{CLASS_COLUMN}\n0.5,true,0.9,\n")
    );
}

#[test]
fn bad_fields_are_repaired_and_counted_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(
        &dir,
        "input.csv",
        "price,hasWebsite\nabc,maybe\n1,\" TRUE \"\n",
    );
    let output = dir.path().join("out.csv");

    // "abc" -> 0.0 and "maybe" -> "true" are silent repairs; " TRUE " is a
    // clean case-insensitive match.
    let report = score_csv(&input, &output, &schema(), &EchoModel).unwrap();
    assert_eq!(report.rows, 2);
    assert_eq!(report.fallback_fields, 2);

    let written = fs::read_to_string(&output).unwrap();
    let mut lines = written.lines().skip(1);
    assert!(lines.next().unwrap().ends_with(",0,no"));
    assert!(lines.next().unwrap().ends_with(",1,yes"));
}

#[test]
fn missing_feature_column_aborts_with_available_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "input.csv", "price,other\n1,2\n");
    let output = dir.path().join("out.csv");

    let err = score_csv(&input, &output, &schema(), &EchoModel).unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("hasWebsite"));
    assert!(message.contains("Existing columns: price, other"));
    assert!(!output.exists());
}

#[test]
fn prediction_count_mismatch_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture(&dir, "input.csv", "price,hasWebsite\n1,true\n");
    let output = dir.path().join("out.csv");

    let err = score_csv(&input, &output, &schema(), &BrokenModel).unwrap_err();
    assert!(format!("{err}").contains("0 prediction(s) for 1 row(s)"));
    assert!(!output.exists());
}
