//! Application-level configuration constants.

use pace_tools::TargetMode;

// Default values for input fields
pub const DEFAULT_KPH: f64 = 10.0;
pub const DEFAULT_PACE: &str = "6:00";
pub const DEFAULT_BASE_PACE: &str = "6:00";
pub const DEFAULT_PERCENTAGES: &str = "50, 60, 70, 80, 90, 100, 105, 110";
pub const DEFAULT_MODE: TargetMode = TargetMode::SpeedPercent;

// Speed input limits
pub const KPH_STEP: &str = "0.1";
pub const KPH_MIN: &str = "0";

// Input placeholders
pub const PACE_PLACEHOLDER: &str = "e.g. 5:30";
pub const BASE_PACE_PLACEHOLDER: &str = "e.g. 6:00";
