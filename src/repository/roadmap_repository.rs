use crate::domain::roadmap::{duplicate_labels, Roadmap};
use anyhow::{anyhow, Context, Result};
use tracing::warn;

/// Entry in the roadmap catalog shown on the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapSummary {
    pub name: &'static str,
    pub title: String,
}

// Roadmap content ships embedded in the binary; it is configuration data,
// not runtime state.
static CATALOG: &[(&str, &str)] = &[
    ("frontend", include_str!("../../content/frontend.json")),
    ("backend", include_str!("../../content/backend.json")),
];

/// Read-only access to the embedded roadmap catalog.
#[derive(Clone, Default)]
pub struct RoadmapRepository;

impl RoadmapRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> Vec<RoadmapSummary> {
        CATALOG
            .iter()
            .filter_map(|(name, raw)| {
                let roadmap: Roadmap = serde_json::from_str(raw).ok()?;
                Some(RoadmapSummary {
                    name,
                    title: roadmap.title,
                })
            })
            .collect()
    }

    /// Decodes a roadmap by name. Duplicate top-level labels would break
    /// hash routing and checklist keys, so they are reported at load;
    /// lookups keep first-match-wins behavior.
    pub fn get(&self, name: &str) -> Result<Roadmap> {
        let (_, raw) = CATALOG
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| anyhow!("unknown roadmap: {name}"))?;
        let roadmap: Roadmap =
            serde_json::from_str(raw).with_context(|| format!("decoding roadmap {name}"))?;

        let dupes = duplicate_labels(&roadmap.levels);
        if !dupes.is_empty() {
            warn!(roadmap = name, ?dupes, "duplicate top-level item labels");
        }
        Ok(roadmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_decodes_and_lists() {
        let repo = RoadmapRepository::new();
        let summaries = repo.list();
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().any(|s| s.name == "frontend"));
    }

    #[test]
    fn get_returns_levels_in_order() {
        let roadmap = RoadmapRepository::new().get("frontend").unwrap();
        assert!(!roadmap.levels.is_empty());
        assert_eq!(
            roadmap.levels[0].items[0].label,
            "Internet Basics".to_string()
        );
    }

    #[test]
    fn unknown_roadmap_is_an_error() {
        assert!(RoadmapRepository::new().get("nope").is_err());
    }

    #[test]
    fn no_duplicate_labels_in_shipped_content() {
        let repo = RoadmapRepository::new();
        for summary in repo.list() {
            let roadmap = repo.get(summary.name).unwrap();
            assert!(
                duplicate_labels(&roadmap.levels).is_empty(),
                "duplicates in {}",
                summary.name
            );
        }
    }
}
