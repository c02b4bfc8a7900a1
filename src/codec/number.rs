use std::sync::OnceLock;

use regex::Regex;

fn unsigned_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]*)?|\.[0-9]+").expect("valid regex"))
}

fn signed_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("valid regex"))
}

/// Extracts the first run of digits with at most one decimal point and parses
/// it as a double. Returns `None` when the token holds no digits.
#[must_use]
pub fn parse_number(token: &str, signed: bool) -> Option<f64> {
    let regex = if signed {
        signed_number_regex()
    } else {
        unsigned_number_regex()
    };
    regex
        .find(token)
        .and_then(|found| found.as_str().parse::<f64>().ok())
}

/// Numeric parse followed by truncation toward zero, saturating at the `i32`
/// bounds.
#[must_use]
pub fn parse_integer(token: &str, signed: bool) -> Option<i32> {
    parse_number(token, signed).map(|value| value.trunc() as i32)
}
