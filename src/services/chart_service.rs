use std::path::Path;

use chrono::DateTime;
use plotters::prelude::*;
use tracing::info;

use crate::models::{PowerLawFit, PricePoint};
use crate::services::regression_service;

/// Parse a comma-separated list of deviation band multipliers
/// Examples: "2.0,1.5,0.75,0.5" or "2,0.5"
pub fn parse_band_multipliers(arg: &str) -> Result<Vec<f64>, String> {
    let mut multipliers = Vec::new();
    for part in arg.split(',') {
        let multiplier: f64 = part.trim().parse().map_err(|_| {
            format!(
                "❌ Invalid band multiplier: '{}'. Use a comma-separated list like 2.0,1.5,0.75,0.5",
                part.trim()
            )
        })?;
        if multiplier <= 0.0 || !multiplier.is_finite() {
            return Err(format!(
                "❌ Band multiplier must be a positive number, got '{}'",
                part.trim()
            ));
        }
        multipliers.push(multiplier);
    }
    Ok(multipliers)
}

/// Render the log-log price chart as a PNG file
///
/// Draws the price series, the fitted power-law trend line and one
/// deviation band per multiplier, with both axes on logarithmic scale.
pub fn render_chart(
    points: &[PricePoint],
    fit: &PowerLawFit,
    bands: &[f64],
    width: u32,
    height: u32,
    output: &Path,
) -> Result<(), String> {
    if points.len() < 2 {
        return Err(
            "❌ Not enough price data to generate chart (minimum 2 points required).".to_string(),
        );
    }

    let trend = regression_service::project_series(fit, points);

    // Axis extent comes from the data
    let x_min = points[0].timestamp as f64;
    let x_max = points[points.len() - 1].timestamp as f64;
    let min_price = points
        .iter()
        .map(|p| p.price)
        .fold(f64::INFINITY, f64::min);
    let max_price = points
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);

    // Pad the price range; multiplicative, since the axis is logarithmic
    let y_min = min_price * 0.9;
    let y_max = max_price * 1.1;

    let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Failed to fill canvas: {}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bitcoin Power Law Chart", ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())
        .map_err(|e| format!("Failed to build chart: {}", e))?;

    // Configure mesh
    chart
        .configure_mesh()
        .x_labels(7)
        .y_labels(10)
        .x_label_formatter(&|x| format_date_tick(*x))
        .y_desc("Price (USD)")
        .x_desc("Date")
        .draw()
        .map_err(|e| format!("Failed to draw mesh: {}", e))?;

    // Price series with point markers
    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.timestamp as f64, p.price)),
            BLUE.stroke_width(3),
        ))
        .map_err(|e| format!("Failed to draw price line: {}", e))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.timestamp as f64, p.price), 3, BLUE.filled())),
        )
        .map_err(|e| format!("Failed to draw price points: {}", e))?;

    // Fitted power-law trend line
    chart
        .draw_series(LineSeries::new(
            trend.iter().map(|p| (p.timestamp as f64, p.price)),
            RED.stroke_width(2),
        ))
        .map_err(|e| format!("Failed to draw trend line: {}", e))?;

    // Deviation bands around the trend
    for &multiplier in bands {
        let band = regression_service::deviation_series(&trend, multiplier);
        chart
            .draw_series(LineSeries::new(
                band.iter().map(|p| (p.timestamp as f64, p.price)),
                RED.mix(0.4).stroke_width(1),
            ))
            .map_err(|e| format!("Failed to draw deviation band x{}: {}", multiplier, e))?;
    }

    root.present()
        .map_err(|e| format!("Failed to render chart: {}", e))?;

    info!(
        "Rendered {}x{} chart with {} deviation bands to {}",
        width,
        height,
        bands.len(),
        output.display()
    );
    Ok(())
}

/// Format an epoch-millisecond axis tick as a calendar date
fn format_date_tick(timestamp: f64) -> String {
    DateTime::from_timestamp_millis(timestamp as i64)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
