/// The two archive files that describe the same measurement grid but each
/// contribute a different uncertainty type. Matched literally by name.
pub const STAT_UNCERTAINTIES_FILE: &str = "E12-14-012_statUncertainties.dat";
pub const TOT_UNCERTAINTIES_FILE: &str = "E12-14-012_totUncertainties.dat";

/// The three known `.dat` layouts, resolved once per file rather than
/// re-derived per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileShape {
    /// 9-token rows: six measurement fields, random and systematic errors,
    /// citation. No total error.
    RandomAndSystematic,
    /// 8-token rows: six measurement fields, random error, citation.
    RandomOnly,
    /// 8-token rows of the paired uncertainty files: six measurement
    /// fields, one error value (statistical or total), citation.
    UncertaintyPair,
}

impl FileShape {
    /// Tokens per data row for this shape.
    pub fn token_count(&self) -> usize {
        match self {
            FileShape::RandomAndSystematic => 9,
            FileShape::RandomOnly | FileShape::UncertaintyPair => 8,
        }
    }

    /// Shape of a regular file, inferred from its first valid row. The
    /// validator only admits 8- or 9-token rows.
    pub fn from_token_count(count: usize) -> Self {
        if count == 9 {
            FileShape::RandomAndSystematic
        } else {
            FileShape::RandomOnly
        }
    }
}

/// Shape known from the filename alone, ahead of any row: the paired
/// uncertainty files are structural, everything else is inferred from data.
pub fn for_file_name(file_name: &str) -> Option<FileShape> {
    if file_name == STAT_UNCERTAINTIES_FILE || file_name == TOT_UNCERTAINTIES_FILE {
        Some(FileShape::UncertaintyPair)
    } else {
        None
    }
}
