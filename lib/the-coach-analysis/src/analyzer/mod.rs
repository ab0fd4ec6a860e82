use crate::area::{Category, ImprovementArea, Issue, IssueKind, RatingScale};
use crate::benchmark::BenchmarkTier;
use crate::compare::{compare, Comparison};
use crate::metric::{Endpoint, MetricKey};
use crate::profile::RawStats;
use std::collections::BTreeSet;

mod aim;
mod clutch;
mod opening;
mod positioning;
mod utility;

pub use aim::analyze_aim;
pub use clutch::analyze_clutch;
pub use opening::analyze_opening;
pub use positioning::analyze_positioning;
pub use utility::analyze_utility;

/// Read-only view over one player's stats, the endpoint they came from and
/// the benchmark tier to judge them against.
#[derive(Debug, Clone, Copy)]
pub struct StatsContext<'a> {
    pub stats: &'a RawStats,
    pub endpoint: Endpoint,
    pub tier: &'a BenchmarkTier,
}

impl<'a> StatsContext<'a> {
    pub fn new(stats: &'a RawStats, endpoint: Endpoint, tier: &'a BenchmarkTier) -> Self {
        Self {
            stats,
            endpoint,
            tier,
        }
    }

    pub fn compare(&self, metric: MetricKey) -> Comparison {
        compare(self.stats.raw(metric), metric, self.endpoint, self.tier)
    }

    pub fn meets(&self, metric: MetricKey) -> bool {
        self.compare(metric).meets
    }

    /// Normalized value of a metric.
    pub fn value(&self, metric: MetricKey) -> f64 {
        self.stats.normalized(metric, self.endpoint)
    }
}

/// One checklist entry. `%v` in the issue text is replaced by the player's
/// value and `%b` by the tier benchmark.
#[derive(Debug)]
pub(crate) struct Check {
    pub metric: MetricKey,
    pub issue: &'static str,
    pub drill: &'static str,
    pub tag: &'static str,
}

pub(crate) fn render(template: &str, metric: MetricKey, comparison: &Comparison) -> String {
    let benchmark = comparison
        .benchmark
        .map(|b| metric.display_value(b))
        .unwrap_or_else(|| "n/a".to_string());
    template
        .replace("%v", &metric.display_value(comparison.value))
        .replace("%b", &benchmark)
}

/// Accumulates the findings of a single category analyzer.
#[derive(Debug)]
pub(crate) struct AreaBuilder {
    category: Category,
    rating: f64,
    benchmark: f64,
    issues: Vec<Issue>,
    drills: Vec<String>,
    tags: BTreeSet<&'static str>,
}

impl AreaBuilder {
    pub fn new(category: Category, rating: f64, tier: &BenchmarkTier) -> Self {
        Self {
            category,
            rating,
            benchmark: tier.rating(category),
            issues: Vec::new(),
            drills: Vec::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn flag(&mut self, issue: String, drill: &str, tag: &'static str) {
        self.issues.push(Issue {
            kind: IssueKind::Weakness,
            text: issue,
        });
        if !self.drills.iter().any(|d| d == drill) {
            self.drills.push(drill.to_string());
        }
        self.tags.insert(tag);
    }

    /// Run a checklist entry, flagging it if the benchmark is not met.
    /// Returns whether it was met.
    pub fn check(&mut self, ctx: &StatsContext, check: &Check) -> bool {
        let comparison = ctx.compare(check.metric);
        if !comparison.meets {
            let issue = render(check.issue, check.metric, &comparison);
            self.flag(issue, check.drill, check.tag);
        }
        comparison.meets
    }

    /// Flag the area's rating itself when it is below its tier.
    pub fn rating_severity(&mut self, drill: &str, tag: &'static str) {
        let label = self.category.label();
        let (rating, benchmark) = (self.rating, self.benchmark);
        let issue = match self.category.scale() {
            RatingScale::Absolute if rating < RatingScale::Absolute.critical_threshold() => {
                format!("{label} rating is critically low at {rating:.1} (tier average {benchmark:.1})")
            }
            RatingScale::Relative if rating < -10.0 => format!(
                "{label} rating is extremely low at {rating:+.1}; this is costing you rounds every game"
            ),
            RatingScale::Relative if rating < -6.0 => {
                format!("{label} rating is very low at {rating:+.1} (tier average {benchmark:+.1})")
            }
            RatingScale::Absolute if rating < benchmark => {
                format!("{label} rating of {rating:.1} is below the tier average of {benchmark:.1}")
            }
            RatingScale::Relative if rating < benchmark => {
                format!("{label} rating of {rating:+.1} is below the tier average of {benchmark:+.1}")
            }
            _ => return,
        };
        self.flag(issue, drill, tag);
    }

    pub fn finish(mut self) -> ImprovementArea {
        if self.issues.is_empty() {
            let standing = ImprovementArea::standing_for(self.category, self.rating, self.benchmark);
            let text = match self.category.scale() {
                RatingScale::Absolute => format!(
                    "{} is {standing}: {:.1} against a tier average of {:.1}",
                    self.category.label(),
                    self.rating,
                    self.benchmark
                ),
                RatingScale::Relative => format!(
                    "{} is {standing}: {:+.1} against a tier average of {:+.1}",
                    self.category.label(),
                    self.rating,
                    self.benchmark
                ),
            };
            self.issues.push(Issue {
                kind: IssueKind::PerformingWell(standing),
                text,
            });
        }

        ImprovementArea {
            category: self.category,
            rating: self.rating,
            benchmark: self.benchmark,
            issues: self.issues,
            drills: self.drills,
            resource_tags: self.tags,
        }
    }
}
