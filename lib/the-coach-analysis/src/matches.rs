use crate::benchmark::BenchmarkTier;
use crate::compare::{compare, Band};
use crate::metric::{Endpoint, MetricKey};
use crate::profile::RawStats;
use serde::Serialize;

/// Metrics reported for a single match.
pub const MATCH_METRICS: [MetricKey; 5] = [
    MetricKey::AccuracyEnemySpotted,
    MetricKey::AccuracyHead,
    MetricKey::SprayAccuracy,
    MetricKey::Preaim,
    MetricKey::ReactionTimeMs,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub metric: MetricKey,
    pub value: f64,
    pub delta_pct: f64,
    pub band: Band,
}

impl MetricResult {
    pub fn describe(&self) -> String {
        format!(
            "{}: {} ({:+.0}% vs tier, {})",
            self.metric.label(),
            self.metric.display_value(self.value),
            self.delta_pct,
            self.band.label()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchEvaluation {
    /// Ordered best to worst.
    pub results: Vec<MetricResult>,
}

impl MatchEvaluation {
    pub fn best(&self) -> Option<&MetricResult> {
        self.results.first()
    }

    pub fn worst(&self) -> Option<&MetricResult> {
        self.results.last()
    }
}

/// Evaluate the stats of one match, which use the match endpoint's format.
/// Metrics the match did not record are skipped.
pub fn evaluate_match(stats: &RawStats, tier: &BenchmarkTier) -> MatchEvaluation {
    let mut results: Vec<MetricResult> = MATCH_METRICS
        .into_iter()
        .filter_map(|metric| {
            let raw = stats.get(metric).filter(|v| v.is_finite())?;
            let comparison = compare(raw, metric, Endpoint::Match, tier);
            comparison.benchmark?;
            Some(MetricResult {
                metric,
                value: comparison.value,
                delta_pct: comparison.delta_pct,
                band: comparison.band(),
            })
        })
        .collect();
    results.sort_by(|a, b| b.delta_pct.total_cmp(&a.delta_pct));
    MatchEvaluation { results }
}
