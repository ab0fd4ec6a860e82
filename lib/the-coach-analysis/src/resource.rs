use crate::area::ImprovementArea;
use crate::deep_dive::SideSpecificInsights;
use crate::tag;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

pub const MAX_RESOURCES: usize = 4;

const FOCUS_WEIGHT: u32 = 3;
const SIDE_WEIGHT: u32 = 2;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Video,
    Website,
    WorkshopMap,
    Guide,
    #[serde(other)]
    Other,
}

impl ResourceKind {
    fn is_preferred(self) -> bool {
        matches!(self, ResourceKind::Video | ResourceKind::Website)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub link: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Tag-indexed learning resources, parsed once at startup by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceCatalog {
    entries: BTreeMap<String, Vec<Resource>>,
}

impl ResourceCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, tag: &str) -> &[Resource] {
        self.entries.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedResource {
    pub tag: String,
    pub resource: Resource,
}

/// Pick up to [`MAX_RESOURCES`] resources for the focus areas and side
/// insights. Tags are scored by where they appear plus a static priority
/// bonus, and a root topic is only used once unless it is repeatable.
pub fn select_resources(
    focus_areas: &[&ImprovementArea],
    side_insights: &SideSpecificInsights,
    catalog: &ResourceCatalog,
) -> Vec<SelectedResource> {
    let mut weights: BTreeMap<&str, u32> = BTreeMap::new();
    for area in focus_areas {
        for &tag in &area.resource_tags {
            *weights.entry(tag).or_default() += FOCUS_WEIGHT;
        }
    }
    for side in side_insights.sides() {
        for &tag in &side.resource_tags {
            *weights.entry(tag).or_default() += SIDE_WEIGHT;
        }
    }

    let mut ranked: Vec<(&str, u32)> = weights
        .into_iter()
        .map(|(tag, weight)| (tag, weight + tag::priority_bonus(tag)))
        .collect();
    // Stable sort keeps alphabetical order between equal scores
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut used_roots = HashSet::new();
    let mut used_links = HashSet::new();
    let mut selected = Vec::new();
    for (tag, _) in ranked {
        if selected.len() >= MAX_RESOURCES {
            break;
        }
        let root = tag::root(tag);
        if used_roots.contains(root) && !tag::REPEATABLE_ROOTS.contains(&root) {
            continue;
        }

        let candidates = catalog.get(tag);
        let pick = candidates
            .iter()
            .filter(|r| r.kind.is_preferred())
            .chain(candidates.iter().filter(|r| !r.kind.is_preferred()))
            .find(|r| !used_links.contains(r.link.as_str()));
        let Some(resource) = pick else {
            continue;
        };

        used_roots.insert(root);
        used_links.insert(resource.link.as_str());
        selected.push(SelectedResource {
            tag: tag.to_string(),
            resource: resource.clone(),
        });
    }

    selected
}
