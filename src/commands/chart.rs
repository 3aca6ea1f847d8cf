use std::path::PathBuf;

use clap::Args;

use crate::services::{chart_service, history_service, regression_service};

#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Path to the JSON price history
    #[arg(short, long, default_value = "btc-data/BTC-USD.json")]
    pub input: PathBuf,

    /// Path the PNG chart is written to
    #[arg(short, long, default_value = "btc-powerlaw.png")]
    pub output: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Comma-separated deviation band multipliers around the trend line
    #[arg(short, long, default_value = "2.0,1.5,0.75,0.5")]
    pub bands: String,
}

pub fn execute(args: &ChartArgs) -> Result<(), String> {
    tracing::info!("📈 Chart command called for {}", args.input.display());

    let bands = chart_service::parse_band_multipliers(&args.bands)?;
    let points = history_service::load_history(&args.input)?;
    let fit = regression_service::fit_cached(&points).map_err(|e| format!("❌ {}", e))?;

    chart_service::render_chart(&points, &fit, &bands, args.width, args.height, &args.output)?;

    println!(
        "Chart written to {} (slope: {:.4}, intercept: {:.4})",
        args.output.display(),
        fit.slope,
        fit.intercept
    );
    Ok(())
}
