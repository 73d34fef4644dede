use regex::Regex;
use std::sync::OnceLock;

fn disallowed_chars() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED.get_or_init(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"))
}

/// Strips everything except ASCII digits and `.`.
pub fn sanitize_number_input(value: &str) -> String {
    disallowed_chars().replace_all(value, "").into_owned()
}

/// Parses already-sanitized text. Blank, malformed (`1.2.3`, `.`) or
/// non-finite text yields `None`.
pub fn parse_measurement(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
