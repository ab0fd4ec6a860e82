use crate::metric::{Endpoint, FieldFormat, MetricKey};

/// Convert a raw vendor value for a known metric into its canonical scale:
/// a 0-1 decimal for percentage fields, the raw magnitude otherwise.
///
/// Missing or non-finite values read as `0`.
pub fn normalize_metric(value: f64, metric: MetricKey, endpoint: Endpoint) -> f64 {
    let value = sanitize(value);
    match (metric.format(endpoint), endpoint) {
        (FieldFormat::Percentage, Endpoint::Profile) => value / 100.0,
        // The match endpoint already returns percentages as decimals
        (FieldFormat::Percentage, Endpoint::Match) => value,
        (FieldFormat::Decimal | FieldFormat::Magnitude, _) => value,
    }
}

/// Normalize a value given its vendor field name. Field names that are not a
/// known [`MetricKey`] fall back to [`heuristic`].
pub fn normalize(value: f64, field_name: &str, endpoint: Endpoint) -> f64 {
    match field_name.parse::<MetricKey>() {
        Ok(metric) => normalize_metric(value, metric, endpoint),
        Err(_) => heuristic(sanitize(value)),
    }
}

/// Values above 1 are assumed to be percentage-scaled.
pub fn heuristic(value: f64) -> f64 {
    if value > 1.0 {
        value / 100.0
    } else {
        value
    }
}

pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Display scale for aim, positioning and utility ratings (0-100). The
/// vendor sometimes reports these as 0-1 decimals.
pub fn absolute_rating(value: f64) -> f64 {
    let value = sanitize(value);
    if value <= 1.0 {
        value * 100.0
    } else {
        value
    }
}

/// Display scale for relative ratings (clutch, opening, CT/T side), which
/// the vendor reports as small signed decimals.
pub fn relative_rating(value: f64) -> f64 {
    sanitize(value) * 100.0
}
