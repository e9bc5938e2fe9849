use std::fs;
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use qes_parser::model::{DataRow, PairRow};
use qes_parser::{parse_dat_file, ParsedDatFile, STAT_UNCERTAINTIES_FILE};

use crate::error::{PipelineError, Result};
use crate::merge::merge_uncertainty_pair;
use crate::table::{sort_rows, to_dataframe};

/// Walks every `.dat` file under `root`, normalizes each into the canonical
/// row set, merges the paired uncertainty files if both are present, sorts
/// by (Z, A, E, Theta) and labels the 11-column schema.
///
/// A missing root directory is the one fatal precondition; everything else
/// is per-file or per-line filtering.
pub fn assemble_dataset(root: &Path) -> Result<DataFrame> {
    if !root.is_dir() {
        return Err(PipelineError::MissingInputDir(root.to_path_buf()));
    }

    let mut rows: Vec<DataRow> = Vec::new();
    let mut stat_rows: Option<Vec<PairRow>> = None;
    let mut tot_rows: Option<Vec<PairRow>> = None;

    let pattern = root.join("**").join("*.dat");
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!(file = %path.display(), %err, "skipping unreadable file");
                continue;
            }
        };

        let Some(parsed) = parse_dat_file(&file_name, &content) else {
            debug!(file = %file_name, "no valid data rows");
            continue;
        };

        match parsed {
            ParsedDatFile::Canonical {
                rows: mut file_rows,
                ..
            } => {
                info!(file = %file_name, rows = file_rows.len(), "processed");
                for row in &mut file_rows {
                    row.source_file = file_name.clone();
                }
                rows.append(&mut file_rows);
            }
            ParsedDatFile::UncertaintyPair { rows: pair_rows } => {
                info!(file = %file_name, rows = pair_rows.len(), "buffered uncertainty-pair file");
                let slot = if file_name == STAT_UNCERTAINTIES_FILE {
                    &mut stat_rows
                } else {
                    &mut tot_rows
                };
                if slot.is_some() {
                    warn!(file = %file_name, "duplicate uncertainty-pair file ignored");
                } else {
                    *slot = Some(pair_rows);
                }
            }
        }
    }

    match (stat_rows, tot_rows) {
        (Some(stat), Some(tot)) => {
            let mut merged = merge_uncertainty_pair(stat, tot);
            info!(rows = merged.len(), "merged uncertainty pair");
            rows.append(&mut merged);
        }
        (None, None) => {}
        _ => warn!("only one of the paired uncertainty files was found; its rows were not merged"),
    }

    sort_rows(&mut rows);
    let df = to_dataframe(&rows)?;
    info!(rows = df.height(), columns = df.width(), "assembled merged table");
    Ok(df)
}
