use std::path::PathBuf;

use clap::Args;

use crate::services::{history_service, regression_service};
use crate::utils::Table;

#[derive(Args, Debug)]
pub struct FitArgs {
    /// Path to the JSON price history
    #[arg(short, long, default_value = "btc-data/BTC-USD.json")]
    pub input: PathBuf,
}

pub fn execute(args: &FitArgs) -> Result<(), String> {
    tracing::info!("📐 Fit command called for {}", args.input.display());

    let points = history_service::load_history(&args.input)?;
    let fit = regression_service::fit_cached(&points).map_err(|e| format!("❌ {}", e))?;

    tracing::info!("Slope: {}", fit.slope);
    tracing::info!("Intercept: {}", fit.intercept);

    let mut table = Table::new(vec!["Parameter", "Value"]);
    table.add_row(vec!["Samples", &points.len().to_string()]);
    table.add_row(vec!["Slope", &format!("{:.4}", fit.slope)]);
    table.add_row(vec!["Intercept", &format!("{:.4}", fit.intercept)]);
    println!("{}", table.render());
    Ok(())
}
