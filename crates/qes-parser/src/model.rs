use std::cmp::Ordering;

/// Column labels of the merged table, in output order.
pub const COLUMN_NAMES: [&str; 11] = [
    "Z",
    "A",
    "E (GeV)",
    "Theta (degrees)",
    "energy loss (GeV)",
    "sigma (nb/sr/GeV)",
    "error (random)",
    "error (systematic)",
    "error (total)",
    "citation",
    "initial file name",
];

/// One record of the merged table. Numeric fields keep the exact text they
/// carried in the source file; placeholder slots are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub z: String,
    pub a: String,
    pub e: String,
    pub theta: String,
    pub energy_loss: String,
    pub sigma: String,
    pub error_random: String,
    pub error_systematic: String,
    pub error_total: String,
    pub citation: String,
    pub source_file: String,
}

impl DataRow {
    /// Builds a row from a 9-token line: six measurement fields, random and
    /// systematic errors, citation. The total-error slot stays empty.
    pub fn from_full_tokens(tokens: &[&str]) -> Self {
        debug_assert_eq!(tokens.len(), 9);
        Self {
            z: tokens[0].to_string(),
            a: tokens[1].to_string(),
            e: tokens[2].to_string(),
            theta: tokens[3].to_string(),
            energy_loss: tokens[4].to_string(),
            sigma: tokens[5].to_string(),
            error_random: tokens[6].to_string(),
            error_systematic: tokens[7].to_string(),
            error_total: String::new(),
            citation: tokens[8].to_string(),
            source_file: String::new(),
        }
    }

    /// Builds a row from an 8-token line carrying only the random error.
    /// Systematic and total slots stay empty.
    pub fn from_random_only_tokens(tokens: &[&str]) -> Self {
        debug_assert_eq!(tokens.len(), 8);
        Self {
            z: tokens[0].to_string(),
            a: tokens[1].to_string(),
            e: tokens[2].to_string(),
            theta: tokens[3].to_string(),
            energy_loss: tokens[4].to_string(),
            sigma: tokens[5].to_string(),
            error_random: tokens[6].to_string(),
            error_systematic: String::new(),
            error_total: String::new(),
            citation: tokens[7].to_string(),
            source_file: String::new(),
        }
    }

    /// Orders rows by (Z, A, E, Theta) numerically ascending.
    pub fn cmp_by_measurement(&self, other: &Self) -> Ordering {
        let lhs = self.sort_key();
        let rhs = other.sort_key();
        lhs.iter()
            .zip(rhs.iter())
            .map(|(a, b)| a.total_cmp(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    fn sort_key(&self) -> [f64; 4] {
        // Fields passed the numeric validator; anything that still fails to
        // parse sorts last rather than panicking.
        [&self.z, &self.a, &self.e, &self.theta]
            .map(|field| field.parse::<f64>().unwrap_or(f64::INFINITY))
    }
}

/// The seven fields two paired-uncertainty rows must agree on to describe
/// the same physical measurement. Matching is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementKey {
    pub z: String,
    pub a: String,
    pub e: String,
    pub theta: String,
    pub energy_loss: String,
    pub sigma: String,
    pub citation: String,
}

impl MeasurementKey {
    /// Expands the key into a canonical row once both uncertainty values are
    /// known. The systematic slot is always empty for the merged pair.
    pub fn into_data_row(
        self,
        error_random: String,
        error_total: String,
        source_file: String,
    ) -> DataRow {
        DataRow {
            z: self.z,
            a: self.a,
            e: self.e,
            theta: self.theta,
            energy_loss: self.energy_loss,
            sigma: self.sigma,
            error_random,
            error_systematic: String::new(),
            error_total,
            citation: self.citation,
            source_file,
        }
    }
}

/// Pre-merge shape of a paired-uncertainty file row: the measurement key
/// plus the single error value that file contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRow {
    pub key: MeasurementKey,
    pub error: String,
}

impl PairRow {
    pub fn from_tokens(tokens: &[&str]) -> Self {
        debug_assert_eq!(tokens.len(), 8);
        Self {
            key: MeasurementKey {
                z: tokens[0].to_string(),
                a: tokens[1].to_string(),
                e: tokens[2].to_string(),
                theta: tokens[3].to_string(),
                energy_loss: tokens[4].to_string(),
                sigma: tokens[5].to_string(),
                citation: tokens[7].to_string(),
            },
            error: tokens[6].to_string(),
        }
    }
}
