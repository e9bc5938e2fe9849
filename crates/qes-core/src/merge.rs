use std::collections::HashMap;
use std::collections::VecDeque;

use tracing::warn;

use qes_parser::model::{DataRow, MeasurementKey, PairRow};

/// Combined provenance name the merged pair is reported under; neither
/// constituent filename appears in the output.
pub const MERGED_SOURCE_NAME: &str = "E12-14-012.dat";

/// Joins the rows of the statistical-uncertainty file with those of the
/// total-uncertainty file on the full measurement key. Each merged row
/// carries the statistical error in the random slot and the total error in
/// the total slot; the systematic slot stays empty since neither file
/// supplies one.
///
/// Duplicate keys match positionally, first-in first-out. Rows without a
/// join partner on either side are dropped from the output, but counted and
/// logged so the loss is visible.
pub fn merge_uncertainty_pair(stat: Vec<PairRow>, tot: Vec<PairRow>) -> Vec<DataRow> {
    let stat_count = stat.len();
    let tot_count = tot.len();

    let mut total_errors: HashMap<MeasurementKey, VecDeque<String>> = HashMap::new();
    for row in tot {
        total_errors.entry(row.key).or_default().push_back(row.error);
    }

    let mut merged = Vec::with_capacity(stat_count.min(tot_count));
    for PairRow { key, error } in stat {
        let Some(total_error) = total_errors.get_mut(&key).and_then(|queue| queue.pop_front())
        else {
            continue;
        };
        merged.push(key.into_data_row(error, total_error, MERGED_SOURCE_NAME.to_string()));
    }

    let dropped_stat = stat_count - merged.len();
    let dropped_tot = tot_count - merged.len();
    if dropped_stat > 0 || dropped_tot > 0 {
        warn!(
            dropped_stat,
            dropped_tot, "uncertainty-pair rows had no join partner and were dropped"
        );
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_row(line: &str) -> PairRow {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        PairRow::from_tokens(&tokens)
    }

    #[test]
    fn fully_overlapping_inputs_merge_row_for_row() {
        let stat = vec![
            pair_row("2 4 1.1 20.0 0.3 5.5 0.05 Dai:2018xhi"),
            pair_row("2 4 1.1 20.0 0.4 6.5 0.06 Dai:2018xhi"),
        ];
        let tot = vec![
            pair_row("2 4 1.1 20.0 0.3 5.5 0.15 Dai:2018xhi"),
            pair_row("2 4 1.1 20.0 0.4 6.5 0.16 Dai:2018xhi"),
        ];

        let merged = merge_uncertainty_pair(stat, tot);
        assert_eq!(merged.len(), 2);

        let first = &merged[0];
        assert_eq!(first.error_random, "0.05");
        assert_eq!(first.error_systematic, "");
        assert_eq!(first.error_total, "0.15");
        assert_eq!(first.citation, "Dai:2018xhi");
        assert_eq!(first.source_file, MERGED_SOURCE_NAME);
    }

    #[test]
    fn disjoint_inputs_merge_to_nothing() {
        let stat = vec![pair_row("2 4 1.1 20.0 0.3 5.5 0.05 Dai:2018xhi")];
        let tot = vec![pair_row("2 4 1.1 25.0 0.3 5.5 0.15 Dai:2018xhi")];
        assert!(merge_uncertainty_pair(stat, tot).is_empty());
    }

    #[test]
    fn key_mismatch_on_formatting_drops_the_row() {
        // "20.0" vs "20.00" is exactly the float-formatting hazard the join
        // is exposed to; equality is on the text, not the value.
        let stat = vec![pair_row("2 4 1.1 20.0 0.3 5.5 0.05 Dai:2018xhi")];
        let tot = vec![pair_row("2 4 1.1 20.00 0.3 5.5 0.15 Dai:2018xhi")];
        assert!(merge_uncertainty_pair(stat, tot).is_empty());
    }

    #[test]
    fn duplicate_keys_match_positionally() {
        let stat = vec![
            pair_row("2 4 1.1 20.0 0.3 5.5 0.05 Dai:2018xhi"),
            pair_row("2 4 1.1 20.0 0.3 5.5 0.07 Dai:2018xhi"),
        ];
        let tot = vec![
            pair_row("2 4 1.1 20.0 0.3 5.5 0.15 Dai:2018xhi"),
            pair_row("2 4 1.1 20.0 0.3 5.5 0.17 Dai:2018xhi"),
        ];

        let merged = merge_uncertainty_pair(stat, tot);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].error_random, "0.05");
        assert_eq!(merged[0].error_total, "0.15");
        assert_eq!(merged[1].error_random, "0.07");
        assert_eq!(merged[1].error_total, "0.17");
    }

    #[test]
    fn partial_overlap_keeps_only_matched_rows() {
        let stat = vec![
            pair_row("2 4 1.1 20.0 0.3 5.5 0.05 Dai:2018xhi"),
            pair_row("2 4 1.1 20.0 0.4 6.5 0.06 Dai:2018xhi"),
        ];
        let tot = vec![pair_row("2 4 1.1 20.0 0.4 6.5 0.16 Dai:2018xhi")];

        let merged = merge_uncertainty_pair(stat, tot);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].error_random, "0.06");
        assert_eq!(merged[0].error_total, "0.16");
    }
}
