//! Price history models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single data point on a price chart
///
/// `timestamp` is epoch milliseconds (UTC midnight of the trading day).
/// Sequences of points are kept sorted ascending by timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: i64,
    pub price: f64,
}

/// One record of the JSON price history file
///
/// Mirrors the converted CSV export: the date and the closing price, with
/// `Close` kept as the decimal string found in the source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Close")]
    pub close: String,
}
