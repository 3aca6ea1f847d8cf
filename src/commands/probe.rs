use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveTime};
use clap::Args;

use crate::services::{history_service, locator_service, regression_service};
use crate::utils::Table;

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Path to the JSON price history
    #[arg(short, long, default_value = "btc-data/BTC-USD.json")]
    pub input: PathBuf,

    /// Date to look up (YYYY-MM-DD)
    pub date: String,
}

pub fn execute(args: &ProbeArgs) -> Result<(), String> {
    tracing::info!("🔍 Probe command called for {}", args.date);

    let date: NaiveDate = args
        .date
        .parse()
        .map_err(|_| format!("❌ Invalid date '{}'. Use: YYYY-MM-DD", args.date))?;
    let query = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis() as f64;

    let points = history_service::load_history(&args.input)?;
    let fit = regression_service::fit_cached(&points).map_err(|e| format!("❌ {}", e))?;

    let nearest = locator_service::nearest_point(&points, query)
        .ok_or("❌ Price history is empty.".to_string())?;
    let trend = regression_service::project(&fit, nearest.timestamp).map_err(|e| format!("❌ {}", e))?;

    let nearest_date = DateTime::from_timestamp_millis(nearest.timestamp)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| nearest.timestamp.to_string());

    let mut table = Table::new(vec!["Field", "Value"]);
    table.add_row(vec!["Nearest date", &nearest_date]);
    table.add_row(vec!["Price", &format!("{:.2}", nearest.price)]);
    table.add_row(vec!["Trend", &format!("{:.2}", trend)]);
    table.add_row(vec!["Price / Trend", &format!("{:.4}", nearest.price / trend)]);
    println!("{}", table.render());
    Ok(())
}
