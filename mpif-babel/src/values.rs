//! Scalar value conventions shared by the outer document and the embedded blocks.

/// Tokens that stand for "no value" in loop cells.
pub const NULL_TOKENS: &[&str] = &["?", "-", ""];

/// Parse a numeric token. Non-numeric and non-finite tokens yield `None`.
pub fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether a cell holds one of the null markers.
pub fn is_null_token(token: &str) -> bool {
    NULL_TOKENS.contains(&token.trim())
}

/// A loop cell as an optional string.
pub fn cell_text(token: &str) -> Option<String> {
    let token = token.trim();
    if is_null_token(token) {
        None
    } else {
        Some(token.to_string())
    }
}

/// Text form of a number as written into documents (`1000`, `1.54056`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Strip surrounding single quotes the way scalar values are written.
pub fn unquote(value: &str) -> &str {
    value.trim().trim_matches('\'')
}
