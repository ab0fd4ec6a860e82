use anyhow::Context as _;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::path::Path;
use the_coach_analysis::matches::MatchEvaluation;
use the_coach_db::model;

#[derive(Debug, Deserialize)]
struct Templates {
    templates: Vec<String>,
}

/// Builds match notifications from a random template.
///
/// Placeholders: `%n` player name, `%m` map, `%r` match rating and `%o`
/// outcome.
#[derive(Debug)]
pub struct MessageBuilder {
    templates: Vec<String>,
}

impl MessageBuilder {
    pub async fn new(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read message templates from {path:?}"))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let Templates { templates } = toml::from_str(contents)?;
        anyhow::ensure!(!templates.is_empty(), "No message templates configured");
        Ok(Self { templates })
    }

    pub fn build_message(
        &self,
        player: &model::Player,
        player_match: &model::PlayerMatch,
        evaluation: &MatchEvaluation,
    ) -> String {
        let template = self
            .templates
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or_default();

        let rating = player_match
            .leetify_rating
            .map(|rating| format!("{:+.2}", rating * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        let mut message = template
            .replace("%n", &player.name)
            .replace("%m", &map_label(player_match.map_name.as_deref()))
            .replace("%r", &rating)
            .replace("%o", outcome_label(player_match.outcome.as_deref()));

        if let Some(best) = evaluation.best() {
            message += &format!("\n> Best: {}", best.describe());
        }
        // A single result is both best and worst
        if let Some(worst) = evaluation.worst().filter(|_| evaluation.results.len() > 1) {
            message += &format!("\n> Worst: {}", worst.describe());
        }
        message
    }
}

/// `de_inferno` becomes `Inferno`.
pub fn map_label(map_name: Option<&str>) -> String {
    let Some(map_name) = map_name else {
        return "an unknown map".to_string();
    };
    let name = map_name.strip_prefix("de_").unwrap_or(map_name);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => map_name.to_string(),
    }
}

pub fn outcome_label(outcome: Option<&str>) -> &'static str {
    match outcome {
        Some("win") => "won",
        Some("loss") => "lost",
        Some("tie") => "tied",
        _ => "finished",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use the_coach_analysis::matches::evaluate_match;
    use the_coach_analysis::BenchmarkTable;

    fn player() -> model::Player {
        model::Player {
            steam64_id: "76561198000000001".to_string(),
            name: "tester".to_string(),
            last_match_id: None,
            create_time: Default::default(),
        }
    }

    fn player_match() -> model::PlayerMatch {
        model::PlayerMatch {
            match_id: "m1".to_string(),
            steam64_id: "76561198000000001".to_string(),
            finished_at: Default::default(),
            map_name: Some("de_mirage".to_string()),
            outcome: Some("win".to_string()),
            leetify_rating: Some(0.0312),
            premier_rank: Some(12000),
            accuracy_enemy_spotted: Some(0.40),
            accuracy_head: Some(0.30),
            spray_accuracy: None,
            preaim: None,
            reaction_time_ms: None,
        }
    }

    #[test]
    fn fills_placeholders() {
        let builder = MessageBuilder::from_toml(r#"templates = ["%n %o on %m (%r)"]"#).unwrap();
        let evaluation = Default::default();
        let message = builder.build_message(&player(), &player_match(), &evaluation);
        assert_eq!(message, "tester won on Mirage (+3.12)");
    }

    #[test]
    fn appends_highlights() {
        let builder = MessageBuilder::from_toml(r#"templates = ["%n"]"#).unwrap();
        let table = BenchmarkTable::default();
        let player_match = player_match();
        let evaluation = evaluate_match(&player_match.stats(), table.select(Some(12000)));
        let message = builder.build_message(&player(), &player_match, &evaluation);

        assert_eq!(evaluation.results.len(), 2);
        assert!(message.contains("\n> Best: "));
        assert!(message.contains("\n> Worst: "));
    }

    #[test]
    fn rejects_empty_templates() {
        assert!(MessageBuilder::from_toml("templates = []").is_err());
        assert!(MessageBuilder::from_toml("").is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(map_label(Some("de_ancient")), "Ancient");
        assert_eq!(map_label(Some("cs_office")), "Cs_office");
        assert_eq!(map_label(None), "an unknown map");
        assert_eq!(outcome_label(Some("loss")), "lost");
        assert_eq!(outcome_label(None), "finished");
    }
}
