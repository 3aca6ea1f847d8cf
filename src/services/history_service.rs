use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use tracing::info;

use crate::models::{PricePoint, PriceRecord};

/// Load a JSON price history into a sorted sequence of price points
pub fn load_history(path: &Path) -> Result<Vec<PricePoint>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("❌ Failed to read '{}': {}", path.display(), e))?;

    let records: Vec<PriceRecord> = serde_json::from_str(&raw)
        .map_err(|e| format!("❌ Failed to parse price history JSON: {}", e))?;

    if records.is_empty() {
        return Err("❌ Price history is empty.".to_string());
    }

    let mut points = Vec::with_capacity(records.len());
    for record in &records {
        points.push(record_to_point(record)?);
    }

    // Sort by timestamp (should already be sorted in the export, but ensure it)
    points.sort_by_key(|p| p.timestamp);

    info!("Loaded {} price points from {}", points.len(), path.display());
    Ok(points)
}

/// Map one JSON record to a price point
///
/// The date becomes UTC-midnight epoch milliseconds; the closing price is
/// truncated to whole cents, matching the display precision of the source
/// data.
pub fn record_to_point(record: &PriceRecord) -> Result<PricePoint, String> {
    let close: f64 = record.close.parse().map_err(|_| {
        format!(
            "❌ Invalid close price '{}' on {}",
            record.close, record.date
        )
    })?;

    Ok(PricePoint {
        timestamp: record
            .date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis(),
        price: (close * 100.0).floor() / 100.0,
    })
}

/// Convert a CSV price history export into the JSON format
///
/// Keeps only the `Date` and `Close` columns; everything else in the export
/// (open, high, low, adjusted close, volume) is dropped. Returns the number
/// of converted records.
pub fn convert_csv(input: &Path, output: &Path) -> Result<usize, String> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_path(input)
        .map_err(|e| format!("❌ Failed to open '{}': {}", input.display(), e))?;

    let records = records_from_reader(reader)?;

    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| format!("❌ Failed to serialize price history: {}", e))?;
    fs::write(output, json)
        .map_err(|e| format!("❌ Failed to write '{}': {}", output.display(), e))?;

    info!(
        "Converted {} records to JSON at {}",
        records.len(),
        output.display()
    );
    Ok(records.len())
}

/// Extract `Date` and `Close` from every CSV row, header-driven
fn records_from_reader<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<PriceRecord>, String> {
    let headers = reader
        .headers()
        .map_err(|e| format!("❌ Failed to read CSV headers: {}", e))?
        .clone();

    let date_idx = headers
        .iter()
        .position(|h| h == "Date")
        .ok_or("❌ CSV is missing a 'Date' column.")?;
    let close_idx = headers
        .iter()
        .position(|h| h == "Close")
        .ok_or("❌ CSV is missing a 'Close' column.")?;

    let mut records = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let row = result.map_err(|e| format!("❌ Failed to read CSV row {}: {}", line + 2, e))?;

        let date_str = row
            .get(date_idx)
            .ok_or(format!("❌ Missing date on CSV row {}", line + 2))?;
        let date = date_str
            .parse()
            .map_err(|_| format!("❌ Invalid date '{}' on CSV row {}", date_str, line + 2))?;
        let close = row
            .get(close_idx)
            .ok_or(format!("❌ Missing close price on CSV row {}", line + 2))?;

        records.push(PriceRecord {
            date,
            close: close.to_string(),
        });
    }

    Ok(records)
}
