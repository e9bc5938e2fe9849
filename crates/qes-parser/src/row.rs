/// Decides whether a tokenized line is a data record or noise (headers,
/// comments, malformed lines). Pure predicate, no side effects.
///
/// A valid row has 8 or 9 tokens, every leading token parses as a float and
/// the trailing token does not (it is the citation tag).
pub fn is_valid_data_row(tokens: &[&str]) -> bool {
    if !matches!(tokens.len(), 8 | 9) {
        return false;
    }

    let mut numeric_values = 0;
    for token in &tokens[..tokens.len() - 1] {
        if !is_numeric(token) {
            return false;
        }
        numeric_values += 1;
    }

    if is_numeric(tokens[tokens.len() - 1]) {
        return false;
    }

    // Redundant with the length check above; kept as a sanity guard on the
    // counting logic.
    matches!(numeric_values, 7 | 8)
}

fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}
