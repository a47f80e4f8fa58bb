use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

pub mod utils;

pub use utils::{parse_percentages, validate_pace, PaceError};

/// Fixed conversion constants and display defaults
pub mod defaults {
    /// Shown wherever a pace or speed cannot be computed.
    pub const PLACEHOLDER: &str = "—";
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    pub const METERS_PER_KM: f64 = 1000.0;
    /// m/s → km/h
    pub const MPS_TO_KPH: f64 = 3.6;
}

/// How a percentage is applied to the base pace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetMode {
    /// Percent of base speed: 110% is faster than base, 90% slower.
    #[default]
    #[serde(rename = "speed")]
    SpeedPercent,
    /// Percent of base pace time: 110% is slower than base, 90% faster.
    #[serde(rename = "pace")]
    PacePercent,
}

impl TargetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetMode::SpeedPercent => "speed",
            TargetMode::PacePercent => "pace",
        }
    }
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "speed" => Ok(TargetMode::SpeedPercent),
            "pace" => Ok(TargetMode::PacePercent),
            other => Err(format!("Unknown target mode '{}', expected speed or pace", other)),
        }
    }
}

/// One line of the target table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRow {
    pub percentage: f64,
    pub pace_seconds: f64,
    pub kph: f64,
}

/// A pace as typed by the user, or one that is already in seconds per km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaceInput<'a> {
    Seconds(f64),
    Text(&'a str),
}

impl From<f64> for PaceInput<'_> {
    fn from(seconds: f64) -> Self {
        PaceInput::Seconds(seconds)
    }
}

impl<'a> From<&'a str> for PaceInput<'a> {
    fn from(text: &'a str) -> Self {
        PaceInput::Text(text)
    }
}

/// Parse a pace into seconds per kilometer.
///
/// Numbers pass straight through. Strings are tried against, in order:
/// - plain seconds: "330" or "330.5"
/// - minutes and seconds: "5:30", "5:3", "5m30" (case-insensitive)
/// - any two digit groups: "5 30", "5'30\""
///
/// Returns `None` when nothing matches. Zero parses fine; callers that divide
/// by the result must check it themselves.
///
/// # Examples
/// ```
/// use pace_tools::parse_pace;
/// assert_eq!(parse_pace("6:00"), Some(360.0));
/// assert_eq!(parse_pace("5m30"), Some(330.0));
/// assert_eq!(parse_pace(300.0), Some(300.0));
/// assert_eq!(parse_pace("-5"), None);
/// ```
pub fn parse_pace<'a>(input: impl Into<PaceInput<'a>>) -> Option<f64> {
    match input.into() {
        PaceInput::Seconds(seconds) if seconds.is_nan() => None,
        PaceInput::Seconds(seconds) => Some(seconds),
        PaceInput::Text(text) => utils::parse_pace_text(text),
    }
}

#[inline]
fn usable(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Render seconds per kilometer as "M:SS /km".
///
/// Undefined, non-finite and non-positive paces render as the placeholder.
pub fn format_pace(seconds: impl Into<Option<f64>>) -> String {
    let Some(seconds) = seconds.into().and_then(usable) else {
        return defaults::PLACEHOLDER.to_string();
    };
    // Round once, before splitting, so the seconds part never reaches 60.
    // Kept in f64 so huge finite paces do not saturate.
    let total = seconds.round();
    let minutes = (total / 60.0).floor();
    let secs = total % 60.0;
    format!("{}:{:02} /km", minutes, secs as u8)
}

/// Render a speed in km/h to one decimal place.
pub fn format_kph(kph: impl Into<Option<f64>>) -> String {
    match kph.into().and_then(usable) {
        Some(kph) => format!("{:.1}", (kph * 10.0).round() / 10.0),
        None => defaults::PLACEHOLDER.to_string(),
    }
}

/// Seconds per kilometer for a treadmill speed.
pub fn pace_from_kph(kph: f64) -> Option<f64> {
    usable(kph).map(|kph| defaults::SECONDS_PER_HOUR / kph)
}

/// Treadmill speed for a pace in seconds per kilometer.
pub fn kph_from_pace(pace_seconds: f64) -> Option<f64> {
    usable(pace_seconds).map(|pace| defaults::SECONDS_PER_HOUR / pace)
}

/// Build the target table for a base pace and a list of percentages.
///
/// # Arguments
/// * `base_pace` - Pace text, same grammar as [`parse_pace`]
/// * `percentages` - Comma and/or whitespace separated percentages
/// * `mode` - Whether a percentage scales the base speed or the base pace time
///
/// # Returns
/// One row per usable percentage, in input order. An unusable base pace gives
/// an empty table; unusable percentages are skipped.
pub fn compute_targets(base_pace: &str, percentages: &str, mode: TargetMode) -> Vec<TargetRow> {
    let Some(base_seconds) = parse_pace(base_pace).and_then(usable) else {
        debug!("No usable base pace in '{}', no targets", base_pace);
        return Vec::new();
    };
    let base_speed = defaults::METERS_PER_KM / base_seconds; // m/s

    parse_percentages(percentages)
        .into_iter()
        .map(|pct| match mode {
            TargetMode::SpeedPercent => {
                let speed = base_speed * (pct / 100.0);
                TargetRow {
                    percentage: pct,
                    pace_seconds: defaults::METERS_PER_KM / speed,
                    kph: speed * defaults::MPS_TO_KPH,
                }
            }
            TargetMode::PacePercent => {
                let pace_seconds = base_seconds * (pct / 100.0);
                TargetRow {
                    percentage: pct,
                    pace_seconds,
                    kph: defaults::SECONDS_PER_HOUR / pace_seconds,
                }
            }
        })
        .collect()
}

/// JavaScript entry point for [`parse_pace`]. Returns NaN when undefined.
#[wasm_bindgen(js_name = parsePace)]
pub fn js_parse_pace(text: &str) -> f64 {
    parse_pace(text).unwrap_or(f64::NAN)
}

/// JavaScript entry point for [`format_pace`].
#[wasm_bindgen(js_name = formatPace)]
pub fn js_format_pace(seconds: f64) -> String {
    format_pace(seconds)
}

/// Mode named by a JS caller; unknown or blank names mean [`TargetMode::SpeedPercent`].
fn js_target_mode(mode: &str) -> TargetMode {
    mode.parse::<TargetMode>().unwrap_or_default()
}

/// JavaScript entry point for [`compute_targets`].
///
/// `mode` is "speed" or "pace"; anything else falls back to "speed". Returns
/// an array of `{ percentage, pace_seconds, kph }` objects.
#[wasm_bindgen(js_name = computeTargets)]
pub fn js_compute_targets(base_pace: &str, percentages: &str, mode: &str) -> JsValue {
    let rows = compute_targets(base_pace, percentages, js_target_mode(mode));
    serde_wasm_bindgen::to_value(&rows).unwrap_or(JsValue::NULL)
}
