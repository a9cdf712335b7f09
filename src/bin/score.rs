//! One-shot batch scoring over fixed paths.
//!
//! Reads `input.csv`, scores every row with the artifact at `model.pkcls`,
//! and writes `output_predictions.csv`. Paths and the feature schema are
//! deliberately hardcoded: the schema must match the one used at training
//! time, so nothing here is configurable.

use std::path::Path;

use anyhow::Result;

use csv_chisel::model::load_model;
use csv_chisel::runner::score_csv;
use csv_chisel::schema::{Feature, Schema};

const MODEL_PATH: &str = "model.pkcls";
const INPUT_CSV: &str = "input.csv";
const OUTPUT_CSV: &str = "output_predictions.csv";

/// The feature set fixed at training time. Order matters: the model expects
/// exactly these columns, in exactly this order.
fn training_schema() -> Schema {
    Schema::new(vec![
        Feature::continuous("timefromlastgraduatedtoken"),
        Feature::continuous("totalHolders"),
        Feature::continuous("top2HoldersPercentages"),
        Feature::continuous("top5HoldersPercentages"),
        Feature::continuous("top10HoldersPercentages"),
        Feature::continuous("top20HoldersPercentages"),
        Feature::continuous("top40HoldersPercentages"),
        Feature::continuous("solanaPrice"),
        Feature::continuous("dailyTokenCount"),
        Feature::continuous("dailyGraduatedTokenCount"),
        Feature::continuous("totalSolVolume"),
        Feature::continuous("totalTransactions"),
        Feature::continuous("newUsers"),
        Feature::continuous("reccuringUsers"),
        Feature::continuous("timeToGraduation"),
        Feature::discrete("hasWebsite", &["true", "false"]),
        Feature::discrete("hasTelegram", &["true", "false"]),
        Feature::discrete("hasTwitter", &["true", "false"]),
        Feature::discrete("hasDescription", &["true", "false"]),
        Feature::continuous("diff_1h"),
        Feature::continuous("diff_12h"),
        Feature::continuous("diff_24h"),
        Feature::continuous("diff_1w"),
    ])
}

fn main() -> Result<()> {
    env_logger::init();

    let schema = training_schema();
    let model = load_model(Path::new(MODEL_PATH))?;
    println!("Model loaded from {MODEL_PATH}");

    let report = score_csv(
        Path::new(INPUT_CSV),
        Path::new(OUTPUT_CSV),
        &schema,
        model.as_ref(),
    )?;
    if report.fallback_fields > 0 {
        println!(
            "Repaired {} field(s) to fallback values during sanitization",
            report.fallback_fields
        );
    }
    println!("Predictions written to {OUTPUT_CSV} ({} rows)", report.rows);

    Ok(())
}
