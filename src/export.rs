//! CSV export of scored sets
//!
//! Columns are an explicit ordered list; the per-set `parts` are internal and
//! never written. Rows keep generator order.

use crate::error::{ArmourError, Result};
use crate::types::Candidate;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Output columns, in file order
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "name",
    "physical",
    "fire",
    "bleed",
    "poison",
    "plague",
    "total",
    "weighted_total",
];

/// Build the output table
///
/// Fails with `Unscored` if the scoring pass has not filled in every
/// candidate's weighted total.
pub fn candidates_to_dataframe(candidates: &[Candidate]) -> Result<DataFrame> {
    let weighted_totals = candidates
        .iter()
        .map(|c| {
            c.weighted_total()
                .ok_or_else(|| ArmourError::Unscored(c.name().to_string()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let attr = |f: fn(&Candidate) -> u32| candidates.iter().map(f).collect::<Vec<u32>>();

    let df = df! {
        "name" => candidates.iter().map(|c| c.name().to_string()).collect::<Vec<_>>(),
        "physical" => attr(|c| c.resistances().physical),
        "fire" => attr(|c| c.resistances().fire),
        "bleed" => attr(|c| c.resistances().bleed),
        "poison" => attr(|c| c.resistances().poison),
        "plague" => attr(|c| c.resistances().plague),
        "total" => attr(Candidate::total),
        "weighted_total" => weighted_totals
    }?;

    Ok(df)
}

/// Write scored candidates to `path` as comma-separated text with a header row
pub fn write_csv(candidates: &[Candidate], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut df = candidates_to_dataframe(candidates)?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)?;

    tracing::info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}
