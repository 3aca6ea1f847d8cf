//! Power-law regression models

/// Best-fit line in (ln timestamp, ln price) space
///
/// Describes the model `price = exp(intercept) * timestamp^slope`.
/// Both parameters are rounded to 4 decimal places when fitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
    pub slope: f64,
    pub intercept: f64,
}

/// A projected price on the fitted trend line (or on a deviation band)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub timestamp: i64,
    pub price: f64,
}
