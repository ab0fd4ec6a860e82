use crate::analyzer::StatsContext;
use crate::metric::MetricKey;
use crate::normalize::{relative_rating, sanitize};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Minimum CT/T rating gap, in the vendor's native decimal scale, that counts
/// as an imbalance rather than noise.
pub const IMBALANCE_THRESHOLD: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "CT")]
    Ct,
    #[serde(rename = "T")]
    T,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Ct => "CT",
            Side::T => "T",
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Ct => Side::T,
            Side::T => Side::Ct,
        }
    }

    pub fn opening_duel_metric(self) -> MetricKey {
        match self {
            Side::Ct => MetricKey::CtOpeningDuelSuccessPercentage,
            Side::T => MetricKey::TOpeningDuelSuccessPercentage,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideBalance {
    pub has_imbalance: bool,
    pub weak_side: Option<Side>,
    pub advice: Option<String>,
}

/// Compare CT and T side ratings, both in the vendor's native decimal scale.
pub fn analyze_side_balance(ct_rating: f64, t_rating: f64, ctx: &StatsContext) -> SideBalance {
    let (ct_rating, t_rating) = (sanitize(ct_rating), sanitize(t_rating));
    // Tolerate float representation error at the exact threshold
    let has_imbalance = (ct_rating - t_rating).abs() + 1e-9 >= IMBALANCE_THRESHOLD;
    if !has_imbalance {
        return SideBalance {
            has_imbalance,
            weak_side: None,
            advice: None,
        };
    }

    let weak_side = if ct_rating < t_rating { Side::Ct } else { Side::T };
    let (weak, strong) = match weak_side {
        Side::Ct => (ct_rating, t_rating),
        Side::T => (t_rating, ct_rating),
    };
    let metric = weak_side.opening_duel_metric();
    let advice = format!(
        "Your {weak_side} side ({:+.1}) is noticeably weaker than your {} side ({:+.1}). \
         You win {} of {weak_side} opening duels; focus your practice on {weak_side} positions and setups.",
        relative_rating(weak),
        weak_side.other(),
        relative_rating(strong),
        metric.display_value(ctx.value(metric)),
    );

    SideBalance {
        has_imbalance,
        weak_side: Some(weak_side),
        advice: Some(advice),
    }
}
