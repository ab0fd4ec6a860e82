use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter};
use the_coach_analysis::area::RatingScale;
use the_coach_analysis::resource::ResourceKind;
use the_coach_analysis::{Endpoint, ImprovementArea, ImprovementReport, MetricKey};
use the_coach_leetify::Profile;

const FIELD_LIMIT: usize = 1024;
const DESCRIPTION_LIMIT: usize = 4096;

const HEADLINE_METRICS: [MetricKey; 8] = [
    MetricKey::AccuracyEnemySpotted,
    MetricKey::AccuracyHead,
    MetricKey::SprayAccuracy,
    MetricKey::CounterStrafingGoodShotsRatio,
    MetricKey::Preaim,
    MetricKey::ReactionTimeMs,
    MetricKey::TradeKillsSuccessPercentage,
    MetricKey::UtilityOnDeathAvg,
];

/// Cut `text` to at most `limit` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

fn bullets<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let text = lines
        .into_iter()
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    if text.is_empty() {
        "-".to_string()
    } else {
        truncate(&text, FIELD_LIMIT)
    }
}

fn format_rating(scale: RatingScale, rating: f64) -> String {
    match scale {
        RatingScale::Absolute => format!("{rating:.0}"),
        RatingScale::Relative => format!("{rating:+.1}"),
    }
}

pub fn profile_url(steam64_id: &str) -> String {
    format!("https://leetify.com/app/profile/{steam64_id}")
}

pub fn stats_embed(profile: &Profile) -> CreateEmbed {
    let mut embed = CreateEmbed::default()
        .title(truncate(&profile.name, 256))
        .url(profile_url(&profile.steam64_id));

    let ranks = profile.ranks.clone().unwrap_or_default();
    let rank = |rank: Option<u32>| rank.map_or_else(|| "-".to_string(), |rank| rank.to_string());
    embed = embed
        .field("Premier", rank(ranks.premier), true)
        .field("FACEIT", rank(ranks.faceit), true)
        .field("Wingman", rank(ranks.wingman), true);

    if let Some(rating) = &profile.rating {
        let ratings = rating.to_display();
        embed = embed
            .field("Aim", format!("{:.0}", ratings.aim), true)
            .field("Positioning", format!("{:.0}", ratings.positioning), true)
            .field("Utility", format!("{:.0}", ratings.utility), true)
            .field("Opening", format!("{:+.1}", ratings.opening), true)
            .field("Clutch", format!("{:+.1}", ratings.clutch), true)
            .field("CT / T", format!("{:+.1} / {:+.1}", ratings.ct, ratings.t), true);
    }

    if let Some(stats) = &profile.stats {
        let lines: Vec<String> = HEADLINE_METRICS
            .into_iter()
            .filter(|metric| stats.get(*metric).is_some())
            .map(|metric| {
                let value = stats.normalized(metric, Endpoint::Profile);
                format!("{}: **{}**", metric.label(), metric.display_value(value))
            })
            .collect();
        if !lines.is_empty() {
            embed = embed.field("Stats", bullets(lines.iter().map(String::as_str)), false);
        }
    }

    let mut footer = Vec::new();
    if let Some(total_matches) = profile.total_matches {
        footer.push(format!("{total_matches} matches"));
    }
    if let Some(winrate) = profile.winrate {
        footer.push(format!("{:.1}% winrate", winrate * 100.0));
    }
    if !footer.is_empty() {
        embed = embed.footer(CreateEmbedFooter::new(footer.join(" · ")));
    }
    embed
}

/// The report as a sequence of embeds: overview, one per focus area, sides
/// and resources.
pub fn report_embeds(report: &ImprovementReport) -> Vec<CreateEmbed> {
    let mut embeds = vec![overview_embed(report)];
    embeds.extend(report.focus_areas().map(area_embed));
    embeds.push(sides_embed(report));
    if !report.resources.is_empty() {
        embeds.push(resources_embed(report));
    }
    embeds
}

fn overview_embed(report: &ImprovementReport) -> CreateEmbed {
    let ratings = report
        .areas
        .iter()
        .map(|area| {
            let scale = area.category.scale();
            format!(
                "{}: **{}** (tier {})",
                area.category,
                format_rating(scale, area.rating),
                format_rating(scale, area.benchmark)
            )
        })
        .collect::<Vec<_>>();
    let focus = report
        .focus
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ");

    let mut embed = CreateEmbed::default()
        .title(truncate(&format!("How {} can improve", report.player_name), 256))
        .description(truncate(
            &format!("Compared with **{}** players.\nFocus on: **{focus}**", report.tier),
            DESCRIPTION_LIMIT,
        ))
        .field("Ratings", bullets(ratings.iter().map(String::as_str)), false);

    if let Some(advice) = &report.side_balance.advice {
        embed = embed.field("Side balance", truncate(advice, FIELD_LIMIT), false);
    }
    for insight in &report.cross_insights {
        embed = embed.field(
            truncate(&insight.label, 256),
            truncate(&insight.detail, FIELD_LIMIT),
            false,
        );
    }
    embed
}

fn area_embed(area: &ImprovementArea) -> CreateEmbed {
    let scale = area.category.scale();
    let mut embed = CreateEmbed::default()
        .title(format!(
            "{} ({} vs tier {})",
            area.category,
            format_rating(scale, area.rating),
            format_rating(scale, area.benchmark)
        ))
        .field(
            "What we see",
            bullets(area.issues.iter().map(|issue| issue.text.as_str())),
            false,
        );
    if !area.drills.is_empty() {
        embed = embed.field(
            "Drills",
            bullets(area.drills.iter().map(String::as_str)),
            false,
        );
    }
    embed
}

fn sides_embed(report: &ImprovementReport) -> CreateEmbed {
    let mut embed = CreateEmbed::default().title("CT and T side");
    for side in report.side_insights.sides() {
        let observations = side
            .insights
            .iter()
            .map(|insight| format!("{} {}", insight.observation, insight.cause))
            .collect::<Vec<_>>();
        let value = if observations.is_empty() {
            "Nothing stands out below your tier.".to_string()
        } else {
            let mut value = bullets(observations.iter().map(String::as_str));
            if let Some(drill) = side.drills.first() {
                value = truncate(&format!("{value}\nTry: {drill}"), FIELD_LIMIT);
            }
            value
        };
        embed = embed.field(format!("{} ({:+.1})", side.side, side.rating), value, false);
    }
    embed
}

fn resources_embed(report: &ImprovementReport) -> CreateEmbed {
    let lines = report
        .resources
        .iter()
        .map(|selected| {
            let resource = &selected.resource;
            match &resource.description {
                Some(description) => format!(
                    "[{}]({}) {description}",
                    kind_label(resource.kind),
                    resource.link
                ),
                None => format!("[{}]({})", kind_label(resource.kind), resource.link),
            }
        })
        .collect::<Vec<_>>();
    CreateEmbed::default()
        .title("Resources")
        .description(truncate(&lines.join("\n"), DESCRIPTION_LIMIT))
}

fn kind_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Video => "Video",
        ResourceKind::Website => "Website",
        ResourceKind::WorkshopMap => "Workshop map",
        ResourceKind::Guide => "Guide",
        ResourceKind::Other => "Link",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn truncate_cuts_on_chars() {
        let cut = truncate("ééééééééééé", 5);
        assert_eq!(cut.chars().count(), 5);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn bullets_respect_field_limit() {
        let long = "x".repeat(600);
        let text = bullets([long.as_str(), long.as_str()]);
        assert_eq!(text.chars().count(), FIELD_LIMIT);
        assert_eq!(bullets([]), "-");
    }
}
