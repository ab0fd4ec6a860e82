use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Aim,
    Positioning,
    Utility,
    Opening,
    Clutch,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Aim,
        Category::Positioning,
        Category::Utility,
        Category::Opening,
        Category::Clutch,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Aim => "Aim",
            Category::Positioning => "Positioning",
            Category::Utility => "Utility",
            Category::Opening => "Opening Duels",
            Category::Clutch => "Clutch",
        }
    }

    pub fn scale(self) -> RatingScale {
        match self {
            Category::Aim | Category::Positioning | Category::Utility => RatingScale::Absolute,
            Category::Opening | Category::Clutch => RatingScale::Relative,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The scale a category rating is expressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingScale {
    /// 0-100.
    Absolute,
    /// Signed and centred near zero, roughly -15..+15.
    Relative,
}

impl RatingScale {
    /// Ratings below this are critical and always considered for focus.
    pub fn critical_threshold(self) -> f64 {
        match self {
            RatingScale::Absolute => 30.0,
            RatingScale::Relative => -6.0,
        }
    }

    /// Looser threshold used to fill the remaining focus slots.
    pub fn focus_threshold(self) -> f64 {
        match self {
            RatingScale::Absolute => 65.0,
            RatingScale::Relative => 0.0,
        }
    }

    fn standing(self, distance: f64) -> Standing {
        let (excellent, good) = match self {
            RatingScale::Absolute => (15.0, 5.0),
            RatingScale::Relative => (4.0, 1.5),
        };
        match distance {
            d if d >= excellent => Standing::Excellent,
            d if d >= good => Standing::Good,
            _ => Standing::Solid,
        }
    }
}

/// How far above its tier an area with no weaknesses sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Solid,
    Good,
    Excellent,
}

impl Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Standing::Solid => "solid",
            Standing::Good => "good",
            Standing::Excellent => "excellent",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "standing", rename_all = "snake_case")]
pub enum IssueKind {
    Weakness,
    PerformingWell(Standing),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub text: String,
}

impl Issue {
    pub fn is_weakness(&self) -> bool {
        self.kind == IssueKind::Weakness
    }
}

/// Output of one category analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementArea {
    pub category: Category,
    /// Rating on the category's [`RatingScale`].
    pub rating: f64,
    /// Tier reference rating on the same scale.
    pub benchmark: f64,
    pub issues: Vec<Issue>,
    pub drills: Vec<String>,
    pub resource_tags: BTreeSet<&'static str>,
}

impl ImprovementArea {
    pub fn has_real_issue(&self) -> bool {
        self.issues.iter().any(Issue::is_weakness)
    }

    pub fn weaknesses(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|issue| issue.is_weakness())
    }

    pub fn is_critical(&self) -> bool {
        self.rating < self.category.scale().critical_threshold()
    }

    pub(crate) fn standing_for(category: Category, rating: f64, benchmark: f64) -> Standing {
        category.scale().standing(rating - benchmark)
    }
}
