pub mod model;
pub mod row;
pub mod shape;

pub use model::{DataRow, MeasurementKey, PairRow, COLUMN_NAMES};
pub use row::is_valid_data_row;
pub use shape::{FileShape, STAT_UNCERTAINTIES_FILE, TOT_UNCERTAINTIES_FILE};

use tracing::debug;

/// Typed contents of one `.dat` file after validation and normalization.
#[derive(Debug, Clone)]
pub enum ParsedDatFile {
    /// Rows already aligned to the canonical schema. The source filename is
    /// left empty here; the assembler stamps it on.
    Canonical {
        shape: FileShape,
        rows: Vec<DataRow>,
    },
    /// Rows of one of the paired uncertainty files, carrying a single error
    /// value each. These are merged later, not emitted directly.
    UncertaintyPair { rows: Vec<PairRow> },
}

/// Runs validator, shape resolution and normalization over a whole file.
///
/// Returns `None` when no line of a regular file passes the validator (the
/// file then contributes nothing). Lines that fail validation, or whose
/// token count disagrees with the file's resolved shape, are filtered, not
/// reported as errors.
pub fn parse_dat_file(file_name: &str, content: &str) -> Option<ParsedDatFile> {
    let mut shape = shape::for_file_name(file_name);
    let mut canonical = Vec::new();
    let mut pair = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() || !is_valid_data_row(&tokens) {
            continue;
        }

        let resolved = *shape.get_or_insert_with(|| FileShape::from_token_count(tokens.len()));
        if tokens.len() != resolved.token_count() {
            debug!(
                file = file_name,
                line = index + 1,
                tokens = tokens.len(),
                "row length disagrees with the file shape; skipping"
            );
            continue;
        }

        match resolved {
            FileShape::RandomAndSystematic => canonical.push(DataRow::from_full_tokens(&tokens)),
            FileShape::RandomOnly => canonical.push(DataRow::from_random_only_tokens(&tokens)),
            FileShape::UncertaintyPair => pair.push(PairRow::from_tokens(&tokens)),
        }
    }

    match shape? {
        FileShape::UncertaintyPair => Some(ParsedDatFile::UncertaintyPair { rows: pair }),
        resolved => Some(ParsedDatFile::Canonical {
            shape: resolved,
            rows: canonical,
        }),
    }
}
