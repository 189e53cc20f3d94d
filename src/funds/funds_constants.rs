/// Lowest valid risk score.
pub const MIN_RISK_SCORE: u8 = 1;

/// Highest valid risk score.
pub const MAX_RISK_SCORE: u8 = 5;
