pub mod chart;
pub mod convert;
pub mod fit;
pub mod probe;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "btc-powerlaw-chart")]
#[command(about = "Bitcoin power-law chart toolkit", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a CSV price history export into the JSON format
    Convert(convert::ConvertArgs),
    /// Fit the power-law trend and print the regression parameters
    Fit(fit::FitArgs),
    /// Render the log-log price chart with trend line and deviation bands
    Chart(chart::ChartArgs),
    /// Look up the sample and trend value nearest a date
    Probe(probe::ProbeArgs),
}

pub fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Convert(args) => convert::execute(&args),
        Command::Fit(args) => fit::execute(&args),
        Command::Chart(args) => chart::execute(&args),
        Command::Probe(args) => probe::execute(&args),
    }
}
