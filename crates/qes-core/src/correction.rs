// crates/qes-core/src/correction.rs

use polars::prelude::*;
use tracing::warn;

use crate::error::Result;

/// Electron mass in GeV.
pub const ELECTRON_MASS_GEV: f64 = 0.000511;

/// Citation tag of the E02-019 dataset, whose energy-loss column actually
/// holds x = Q^2 / (2 m_e nu).
pub const FOMIN_CITATION: &str = "Fomin:2010ei";

/// Four-momentum transfer squared from beam energy (GeV) and scattering
/// angle (degrees).
fn q_squared(e: f64, theta_degrees: f64) -> f64 {
    2.0 * e * e * (1.0 - theta_degrees.to_radians().cos())
}

/// Recomputes the energy-loss column for every row tagged with the E02-019
/// citation, whose stored value is the dimensionless x rather than nu.
///
/// nu = Q^2 / (2 m_e x) when x is nonzero, NaN otherwise; the stored value
/// is nu / 1000. Rows whose E, Theta or x fail to parse keep their original
/// value and are reported, not fatal.
///
/// Pure transform: the input table is untouched. Not idempotent — a second
/// application would read the corrected values as x — so the pipeline calls
/// it exactly once per assembled table.
pub fn energy_loss_from_x(df: &DataFrame) -> Result<DataFrame> {
    let citations = df.column("citation")?.str()?;
    let e_values = df.column("E (GeV)")?.str()?;
    let theta_values = df.column("Theta (degrees)")?.str()?;
    let loss_values = df.column("energy loss (GeV)")?.str()?;

    let mut corrected: Vec<String> = Vec::with_capacity(df.height());
    for index in 0..df.height() {
        let original = loss_values.get(index).unwrap_or("");
        if citations.get(index) != Some(FOMIN_CITATION) {
            corrected.push(original.to_string());
            continue;
        }

        let fields = (
            e_values.get(index).unwrap_or("").parse::<f64>(),
            theta_values.get(index).unwrap_or("").parse::<f64>(),
            original.parse::<f64>(),
        );
        let (Ok(e), Ok(theta), Ok(x)) = fields else {
            warn!(
                row = index,
                "unparseable E, Theta or x on a flagged row; leaving it uncorrected"
            );
            corrected.push(original.to_string());
            continue;
        };

        let energy_loss = if x != 0.0 {
            q_squared(e, theta) / (2.0 * ELECTRON_MASS_GEV * x)
        } else {
            f64::NAN
        };
        corrected.push((energy_loss / 1000.0).to_string());
    }

    let mut out = df.clone();
    out.with_column(Series::new("energy loss (GeV)".into(), corrected))?;
    Ok(out)
}
