use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::Result;

/// Writes the merged table as CSV, header row included.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    let mut table = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut table)?;
    Ok(())
}
