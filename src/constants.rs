/// Percentage splits may drift from the total by at most one cent.
pub const PERCENTAGE_TOLERANCE: f64 = 0.01;

/// Largest cent count an f64 holds exactly (2^53).
pub const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

pub const MIN_PARTICIPANTS: usize = 2;

pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_GROUP_COLOR: &str = "#14b8a6";
