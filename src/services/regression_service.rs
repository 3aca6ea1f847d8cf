use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use lazy_static::lazy_static;
use tracing::debug;

use crate::models::{PowerLawFit, PricePoint, TrendPoint};
use crate::utils::FitError;

lazy_static! {
    static ref FIT_CACHE: Mutex<HashMap<u64, PowerLawFit>> = Mutex::new(HashMap::new());
}

/// Fit the power law `price = exp(intercept) * timestamp^slope`
///
/// Ordinary least squares on `(ln timestamp, ln price)`. Every sample must
/// have a strictly positive timestamp and price or the logarithm is
/// undefined. Slope and intercept are rounded to 4 decimal places so the
/// reported parameters are reproducible across runs.
pub fn fit_power_law(points: &[PricePoint]) -> Result<PowerLawFit, FitError> {
    if points.is_empty() {
        return Err(FitError::Degenerate("price history is empty".to_string()));
    }

    let n = points.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for point in points {
        if point.timestamp <= 0 || point.price <= 0.0 {
            return Err(FitError::Domain(format!(
                "sample (timestamp: {}, price: {}) must be strictly positive",
                point.timestamp, point.price
            )));
        }
        let x = (point.timestamp as f64).ln();
        let y = point.price.ln();
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    // Scale-aware zero test: timestamps that coincide after float rounding
    // leave the denominator at cancellation noise rather than exactly 0.
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() <= f64::EPSILON * (n * sum_x2).abs() {
        return Err(FitError::Degenerate(
            "all timestamps coincide, the regression is unsolvable".to_string(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(FitError::Degenerate(format!(
            "regression produced non-finite parameters (slope: {}, intercept: {})",
            slope, intercept
        )));
    }

    Ok(PowerLawFit {
        slope: round4(slope),
        intercept: round4(intercept),
    })
}

/// Fit with a cache keyed by a fingerprint of the sample sequence
///
/// Re-renders of an unchanged history skip the regression entirely; the fit
/// is only recomputed when the underlying sequence changes. Errors are
/// never cached.
pub fn fit_cached(points: &[PricePoint]) -> Result<PowerLawFit, FitError> {
    let key = fingerprint(points);

    if let Some(fit) = FIT_CACHE.lock().unwrap().get(&key) {
        debug!("Fit cache hit for fingerprint {:#018x}", key);
        return Ok(*fit);
    }

    let fit = fit_power_law(points)?;
    FIT_CACHE.lock().unwrap().insert(key, fit);
    Ok(fit)
}

/// Project the fitted trend at a single timestamp
///
/// Strict variant: rejects non-positive timestamps and overflowing results
/// instead of handing back a NaN or Infinity.
pub fn project(fit: &PowerLawFit, timestamp: i64) -> Result<f64, FitError> {
    if timestamp <= 0 {
        return Err(FitError::Domain(format!(
            "timestamp {} must be strictly positive",
            timestamp
        )));
    }

    let price = (fit.intercept + fit.slope * (timestamp as f64).ln()).exp();
    if !price.is_finite() {
        return Err(FitError::NonFinite(format!(
            "projection at timestamp {} is not finite",
            timestamp
        )));
    }

    Ok(price)
}

/// Project the trend at every sample timestamp, in input order
///
/// Tolerant variant for display series: points whose projection is not
/// finite are dropped rather than raised.
pub fn project_series(fit: &PowerLawFit, points: &[PricePoint]) -> Vec<TrendPoint> {
    points
        .iter()
        .filter_map(|point| {
            project(fit, point.timestamp).ok().map(|price| TrendPoint {
                timestamp: point.timestamp,
                price,
            })
        })
        .collect()
}

/// Scale a projected series by a deviation multiplier
///
/// Pure map; finiteness is inherited from the input series.
pub fn deviation_series(trend: &[TrendPoint], multiplier: f64) -> Vec<TrendPoint> {
    trend
        .iter()
        .map(|point| TrendPoint {
            timestamp: point.timestamp,
            price: point.price * multiplier,
        })
        .collect()
}

/// Content fingerprint of a sample sequence, used as the fit cache key
fn fingerprint(points: &[PricePoint]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for point in points {
        point.timestamp.hash(&mut hasher);
        point.price.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp: i64, price: f64) -> PricePoint {
        PricePoint { timestamp, price }
    }

    #[test]
    fn test_fit_identity_line() {
        // timestamp == price is the line y = x in log-log space
        let points = vec![point(1, 1.0), point(10, 10.0), point(100, 100.0)];
        let fit = fit_power_law(&points).expect("Fit failed");

        assert_eq!(fit.slope, 1.0);
        assert_eq!(fit.intercept, 0.0);
    }

    #[test]
    fn test_fit_parameters_are_rounded() {
        let points = vec![point(2, 3.7), point(7, 1.9), point(13, 8.4)];
        let fit = fit_power_law(&points).expect("Fit failed");

        assert!(fit.slope.is_finite());
        assert!(fit.intercept.is_finite());
        assert!(((fit.slope * 10_000.0).round() - fit.slope * 10_000.0).abs() < 1e-9);
        assert!(((fit.intercept * 10_000.0).round() - fit.intercept * 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_rejects_empty_history() {
        let err = fit_power_law(&[]).unwrap_err();
        assert!(matches!(err, FitError::Degenerate(_)));
    }

    #[test]
    fn test_fit_rejects_zero_price() {
        let points = vec![point(10, 5.0), point(20, 0.0)];
        let err = fit_power_law(&points).unwrap_err();
        assert!(matches!(err, FitError::Domain(_)));
    }

    #[test]
    fn test_fit_rejects_negative_timestamp() {
        let points = vec![point(-5, 5.0), point(20, 7.0)];
        let err = fit_power_law(&points).unwrap_err();
        assert!(matches!(err, FitError::Domain(_)));
    }

    #[test]
    fn test_fit_rejects_identical_timestamps() {
        let points = vec![point(5, 10.0), point(5, 20.0), point(5, 30.0)];
        let err = fit_power_law(&points).unwrap_err();
        assert!(matches!(err, FitError::Degenerate(_)));
    }

    #[test]
    fn test_project_reproduces_regression_line() {
        let points = vec![point(1, 1.0), point(10, 10.0), point(100, 100.0)];
        let fit = fit_power_law(&points).expect("Fit failed");

        let price = project(&fit, 10).expect("Projection failed");
        let expected_log = fit.intercept + fit.slope * (10.0f64).ln();
        assert!((price.ln() - expected_log).abs() < 1e-9);
    }

    #[test]
    fn test_project_rejects_nonpositive_timestamp() {
        let fit = PowerLawFit {
            slope: 1.0,
            intercept: 0.0,
        };
        assert!(matches!(project(&fit, 0), Err(FitError::Domain(_))));
        assert!(matches!(project(&fit, -7), Err(FitError::Domain(_))));
    }

    #[test]
    fn test_project_rejects_overflow() {
        // exp(500 * ln(1e12)) overflows f64
        let fit = PowerLawFit {
            slope: 500.0,
            intercept: 0.0,
        };
        let err = project(&fit, 1_000_000_000_000).unwrap_err();
        assert!(matches!(err, FitError::NonFinite(_)));
    }

    #[test]
    fn test_project_series_drops_non_finite_and_keeps_order() {
        let fit = PowerLawFit {
            slope: 500.0,
            intercept: 0.0,
        };
        // timestamp 1 projects to exp(0) = 1, the huge timestamp overflows
        let points = vec![point(1, 2.0), point(1_000_000_000_000, 3.0), point(1, 4.0)];
        let trend = project_series(&fit, &points);

        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].timestamp, 1);
        assert_eq!(trend[1].timestamp, 1);
        assert!((trend[0].price - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deviation_series_identity_multiplier() {
        let trend = vec![
            TrendPoint {
                timestamp: 10,
                price: 2.5,
            },
            TrendPoint {
                timestamp: 20,
                price: 5.0,
            },
        ];
        assert_eq!(deviation_series(&trend, 1.0), trend);
    }

    #[test]
    fn test_deviation_series_scales_prices() {
        let trend = vec![TrendPoint {
            timestamp: 10,
            price: 2.5,
        }];
        let band = deviation_series(&trend, 2.0);
        assert_eq!(band[0].timestamp, 10);
        assert!((band[0].price - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_cached_agrees_with_fit() {
        let points = vec![point(3, 4.0), point(30, 9.0), point(300, 25.0)];
        let direct = fit_power_law(&points).expect("Fit failed");
        let cached = fit_cached(&points).expect("Cached fit failed");
        let cached_again = fit_cached(&points).expect("Cached fit failed");

        assert_eq!(direct, cached);
        assert_eq!(cached, cached_again);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = vec![point(1, 2.0), point(3, 4.0)];
        let b = vec![point(1, 2.0), point(3, 4.0)];
        let c = vec![point(1, 2.0), point(3, 4.5)];

        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_ne!(fingerprint(&a), fingerprint(&c));
    }
}
