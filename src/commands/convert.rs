use std::path::PathBuf;

use clap::Args;

use crate::services::history_service;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the CSV price history export
    #[arg(short, long, default_value = "btc-data/BTC-USD.csv")]
    pub input: PathBuf,

    /// Path the JSON price history is written to
    #[arg(short, long, default_value = "btc-data/BTC-USD.json")]
    pub output: PathBuf,
}

pub fn execute(args: &ConvertArgs) -> Result<(), String> {
    tracing::info!(
        "🔄 Convert command called: {} -> {}",
        args.input.display(),
        args.output.display()
    );

    let count = history_service::convert_csv(&args.input, &args.output)?;

    println!(
        "Converted {} records from {} to {}",
        count,
        args.input.display(),
        args.output.display()
    );
    Ok(())
}
