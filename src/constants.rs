/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display (percentages, ratios)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default base currency for the dashboard
pub const DEFAULT_BASE_CURRENCY: &str = "JPY";
