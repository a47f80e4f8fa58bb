//! Text grammars for pace and percentage inputs.
//!
//! Every matcher here is total: it either recognises its shape of input and
//! returns a value, or returns `None` so the next matcher can try.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for pace parsing
static PACE_SECONDS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap());
static PACE_MIN_SEC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([0-9]{1,2})\s*[:m]\s*([0-9]{1,2})$").unwrap());
static PERCENT_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").unwrap());
// Longest leading float literal, the way a browser's `parseFloat` reads it.
static LEADING_FLOAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(Infinity|[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?|\.[0-9]+([eE][+-]?[0-9]+)?)")
        .unwrap()
});

/// A single pace grammar rule.
type PaceMatcher = fn(&str) -> Option<f64>;

/// Pace grammar rules, in priority order.
const PACE_MATCHERS: [PaceMatcher; 3] = [match_plain_seconds, match_min_sec, match_two_numbers];

/// Pure unsigned decimal number: "330", "330.5" (raw seconds).
pub fn match_plain_seconds(input: &str) -> Option<f64> {
    if !PACE_SECONDS_REGEX.is_match(input) {
        return None;
    }
    input.parse::<f64>().ok()
}

/// Minutes and seconds joined by ':' or 'm': "5:30", "5:3", "5m30", "5 M 30".
pub fn match_min_sec(input: &str) -> Option<f64> {
    let captures = PACE_MIN_SEC_REGEX.captures(input)?;
    let minutes: f64 = captures[1].parse().ok()?;
    let seconds: f64 = captures[2].parse().ok()?;
    Some(minutes * 60.0 + seconds)
}

/// Exactly two digit groups separated by anything else: "5 30", "5'30\"", "5-30".
pub fn match_two_numbers(input: &str) -> Option<f64> {
    let mut groups = input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty());
    let minutes: f64 = groups.next()?.parse().ok()?;
    let seconds: f64 = groups.next()?.parse().ok()?;
    if groups.next().is_some() {
        return None;
    }
    Some(minutes * 60.0 + seconds)
}

/// Run the pace grammar over a string, returning seconds per kilometer.
///
/// The input is trimmed first; blank input never matches.
pub fn parse_pace_text(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    PACE_MATCHERS.iter().find_map(|matcher| matcher(trimmed))
}

/// Read the leading number of a token, ignoring whatever trails it.
///
/// "80" → 80, "80%" → 80, ".5" → 0.5, "1e2" → 100, "abc" → `None`.
pub fn parse_leading_float(token: &str) -> Option<f64> {
    let found = LEADING_FLOAT_REGEX.find(token.trim_start())?;
    found.as_str().parse::<f64>().ok()
}

/// Parse a comma and/or whitespace separated list of percentages.
///
/// Unreadable, non-finite and non-positive entries are dropped. Input order and
/// duplicates are preserved.
pub fn parse_percentages(input: &str) -> Vec<f64> {
    PERCENT_SPLIT_REGEX
        .split(input)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let pct = parse_leading_float(token);
            if pct.is_none() {
                debug!("Ignoring unreadable percentage '{}'", token);
            }
            pct
        })
        .filter(|pct| pct.is_finite() && *pct > 0.0)
        .collect()
}

/// Why a pace string cannot be used for a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum PaceError {
    EmptyInput,
    InvalidFormat(String),
    NonPositive(f64),
}

impl std::fmt::Display for PaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaceError::EmptyInput => write!(f, "Pace cannot be empty"),
            PaceError::InvalidFormat(input) => write!(
                f,
                "Unrecognised pace '{}'. Use: 5:30, 5m30, 5 30, or 330",
                input
            ),
            PaceError::NonPositive(seconds) => {
                write!(f, "Pace must be longer than zero seconds, got {}", seconds)
            }
        }
    }
}

impl std::error::Error for PaceError {}

/// Parse a pace and check it can be converted to a speed.
///
/// Same grammar as [`parse_pace_text`], but explains a rejection instead of
/// returning `None`.
pub fn validate_pace(input: &str) -> Result<f64, PaceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PaceError::EmptyInput);
    }
    let seconds =
        parse_pace_text(trimmed).ok_or_else(|| PaceError::InvalidFormat(trimmed.to_string()))?;
    if seconds <= 0.0 {
        return Err(PaceError::NonPositive(seconds));
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_seconds_accepts_unsigned_decimals_only() {
        assert_eq!(match_plain_seconds("330"), Some(330.0));
        assert_eq!(match_plain_seconds("330.5"), Some(330.5));
        assert_eq!(match_plain_seconds("-5"), None);
        assert_eq!(match_plain_seconds("5."), None);
        assert_eq!(match_plain_seconds("5:30"), None);
    }

    #[test]
    fn min_sec_accepts_colon_and_m_separators() {
        assert_eq!(match_min_sec("6:00"), Some(360.0));
        assert_eq!(match_min_sec("5:3"), Some(303.0));
        assert_eq!(match_min_sec("5m30"), Some(330.0));
        assert_eq!(match_min_sec("5 M 30"), Some(330.0));
        assert_eq!(match_min_sec("100:00"), None);
        assert_eq!(match_min_sec("5 30"), None);
    }

    #[test]
    fn two_numbers_needs_exactly_two_groups() {
        assert_eq!(match_two_numbers("5 30"), Some(330.0));
        assert_eq!(match_two_numbers("5'30\""), Some(330.0));
        assert_eq!(match_two_numbers("5min 30sec"), Some(330.0));
        assert_eq!(match_two_numbers("1:02:03"), None);
        assert_eq!(match_two_numbers("-5"), None);
        assert_eq!(match_two_numbers("abc"), None);
    }

    #[test]
    fn rules_are_tried_in_priority_order() {
        // "5.30" is a plain decimal before it is two digit groups.
        assert_eq!(parse_pace_text("5.30"), Some(5.3));
        // Three-digit minutes fall past the M:SS rule to the two-group rule.
        assert_eq!(parse_pace_text("100:05"), Some(6005.0));
        assert_eq!(parse_pace_text("  6:00  "), Some(360.0));
    }

    #[test]
    fn blank_and_signed_inputs_are_undefined() {
        assert_eq!(parse_pace_text(""), None);
        assert_eq!(parse_pace_text("   "), None);
        assert_eq!(parse_pace_text("abc"), None);
        assert_eq!(parse_pace_text("-5"), None);
    }

    #[test]
    fn leading_float_reads_a_prefix() {
        assert_eq!(parse_leading_float("80"), Some(80.0));
        assert_eq!(parse_leading_float("80%"), Some(80.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("1e2"), Some(100.0));
        assert_eq!(parse_leading_float("-10"), Some(-10.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("%80"), None);
    }

    #[test]
    fn percentages_collapse_separators() {
        assert_eq!(parse_percentages("50,, 70 80"), vec![50.0, 70.0, 80.0]);
        assert_eq!(parse_percentages(" 90\t100\n110 "), vec![90.0, 100.0, 110.0]);
    }

    #[test]
    fn percentages_keep_order_and_duplicates() {
        assert_eq!(parse_percentages("110, 90, 110"), vec![110.0, 90.0, 110.0]);
    }

    #[test]
    fn percentages_drop_invalid_tokens() {
        assert_eq!(parse_percentages("0, -10, abc, 80%, Infinity, 95"), vec![80.0, 95.0]);
        assert!(parse_percentages("").is_empty());
        assert!(parse_percentages(" , ,").is_empty());
    }

    #[test]
    fn validate_pace_explains_rejections() {
        assert_eq!(validate_pace("5:30"), Ok(330.0));
        assert_eq!(validate_pace(" "), Err(PaceError::EmptyInput));
        assert_eq!(
            validate_pace("fast"),
            Err(PaceError::InvalidFormat("fast".to_string()))
        );
        assert_eq!(validate_pace("0:00"), Err(PaceError::NonPositive(0.0)));
        assert_eq!(PaceError::EmptyInput.to_string(), "Pace cannot be empty");
    }
}
