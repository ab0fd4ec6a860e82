use crate::benchmark::BenchmarkTier;
use crate::metric::{Direction, Endpoint, MetricKey};
use crate::normalize::{heuristic, normalize_metric, sanitize};
use serde::Serialize;

/// Narrative severity of a relative delta. Not used for pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Band {
    Poor,
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl Band {
    pub fn from_delta(delta_pct: f64) -> Self {
        match delta_pct {
            d if d >= 30.0 => Band::Excellent,
            d if d >= 10.0 => Band::Good,
            d if d >= -5.0 => Band::Average,
            d if d >= -20.0 => Band::BelowAverage,
            _ => Band::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::Average => "Average",
            Band::BelowAverage => "Below Average",
            Band::Poor => "Poor",
        }
    }
}

/// Result of comparing one value against its tier benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// The value in its canonical scale.
    pub value: f64,
    pub benchmark: Option<f64>,
    pub meets: bool,
    /// Signed distance from the benchmark in percent. Positive is always
    /// better than the benchmark, whatever the metric's direction.
    pub delta_pct: f64,
}

impl Comparison {
    fn unbenchmarked(value: f64) -> Self {
        Self {
            value,
            benchmark: None,
            meets: true,
            delta_pct: 0.0,
        }
    }

    pub fn band(&self) -> Band {
        Band::from_delta(self.delta_pct)
    }
}

/// Compare a raw vendor value with the tier's benchmark for `metric`.
///
/// Metrics without a benchmark always meet it.
pub fn compare(raw: f64, metric: MetricKey, endpoint: Endpoint, tier: &BenchmarkTier) -> Comparison {
    let value = normalize_metric(raw, metric, endpoint);
    let Some(benchmark) = tier.stat(metric) else {
        return Comparison::unbenchmarked(value);
    };

    let direction = metric.direction();
    let meets = match direction {
        Direction::HigherIsBetter => value >= benchmark,
        Direction::LowerIsBetter => value <= benchmark,
    };
    let delta = if benchmark == 0.0 {
        if value == 0.0 {
            0.0
        } else {
            100.0 * value.signum()
        }
    } else {
        (value - benchmark) / benchmark.abs() * 100.0
    };
    let delta_pct = match direction {
        Direction::HigherIsBetter => delta,
        Direction::LowerIsBetter => -delta,
    };

    Comparison {
        value,
        benchmark: Some(benchmark),
        meets,
        delta_pct,
    }
}

/// Boolean-only form of [`compare`].
pub fn meets(raw: f64, metric: MetricKey, endpoint: Endpoint, tier: &BenchmarkTier) -> bool {
    compare(raw, metric, endpoint, tier).meets
}

/// Compare by vendor field name. Unknown fields are normalized heuristically
/// and, having no benchmark, always meet it.
pub fn compare_field(
    raw: f64,
    field_name: &str,
    endpoint: Endpoint,
    tier: &BenchmarkTier,
) -> Comparison {
    match field_name.parse::<MetricKey>() {
        Ok(metric) => compare(raw, metric, endpoint, tier),
        Err(_) => Comparison::unbenchmarked(heuristic(sanitize(raw))),
    }
}
