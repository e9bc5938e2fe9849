use polars::prelude::*;

use qes_parser::model::{DataRow, COLUMN_NAMES};

use crate::error::{PipelineError, Result};

/// Sorts rows by (Z, A, E, Theta) ascending. This is the only ordering
/// guarantee the merged table makes; directory traversal order is not one.
pub fn sort_rows(rows: &mut [DataRow]) {
    rows.sort_by(DataRow::cmp_by_measurement);
}

/// Labels the canonical schema onto the assembled rows. Every value stays a
/// string so source formatting survives into the output.
pub fn to_dataframe(rows: &[DataRow]) -> Result<DataFrame> {
    fn column(name: &str, values: Vec<&str>) -> Column {
        Series::new(name.into(), values).into()
    }

    let df = DataFrame::new(vec![
        column(COLUMN_NAMES[0], rows.iter().map(|r| r.z.as_str()).collect()),
        column(COLUMN_NAMES[1], rows.iter().map(|r| r.a.as_str()).collect()),
        column(COLUMN_NAMES[2], rows.iter().map(|r| r.e.as_str()).collect()),
        column(
            COLUMN_NAMES[3],
            rows.iter().map(|r| r.theta.as_str()).collect(),
        ),
        column(
            COLUMN_NAMES[4],
            rows.iter().map(|r| r.energy_loss.as_str()).collect(),
        ),
        column(
            COLUMN_NAMES[5],
            rows.iter().map(|r| r.sigma.as_str()).collect(),
        ),
        column(
            COLUMN_NAMES[6],
            rows.iter().map(|r| r.error_random.as_str()).collect(),
        ),
        column(
            COLUMN_NAMES[7],
            rows.iter().map(|r| r.error_systematic.as_str()).collect(),
        ),
        column(
            COLUMN_NAMES[8],
            rows.iter().map(|r| r.error_total.as_str()).collect(),
        ),
        column(
            COLUMN_NAMES[9],
            rows.iter().map(|r| r.citation.as_str()).collect(),
        ),
        column(
            COLUMN_NAMES[10],
            rows.iter().map(|r| r.source_file.as_str()).collect(),
        ),
    ])?;

    if df.width() != COLUMN_NAMES.len() {
        return Err(PipelineError::Schema(format!(
            "assembled {} columns, schema names {}",
            df.width(),
            COLUMN_NAMES.len()
        )));
    }

    Ok(df)
}
