use crate::models::PricePoint;

/// Find the sample nearest to a query timestamp
///
/// `points` must be sorted ascending by timestamp. A lower-bound binary
/// search finds the insertion index of the query; the two neighbouring
/// samples are the only candidates and the one at the smaller absolute
/// distance wins. An exact tie goes to the later (right) sample so repeated
/// lookups stay deterministic. O(log n), cheap enough to call on every
/// pointer move.
///
/// The query is a plain `f64` timestamp: inverting chart coordinates back
/// to time is the caller's concern, not the locator's.
pub fn nearest_point(points: &[PricePoint], query: f64) -> Option<&PricePoint> {
    if points.is_empty() {
        return None;
    }

    let idx = points.partition_point(|p| (p.timestamp as f64) < query);

    // Query outside the range: only one candidate exists
    if idx == 0 {
        return points.first();
    }
    if idx == points.len() {
        return points.last();
    }

    let left = &points[idx - 1];
    let right = &points[idx];
    let left_distance = query - left.timestamp as f64;
    let right_distance = right.timestamp as f64 - query;

    if left_distance < right_distance {
        Some(left)
    } else {
        Some(right)
    }
}
