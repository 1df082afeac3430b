//! Context Store — the fixed résumé sections stuffed into every chat prompt.
//!
//! The résumé lives in `assets/resume.json` (compiled into the binary) so the
//! relay logic stays free of literal text. Sections are parsed once at startup
//! and shared read-only across all requests; there is no per-request variation.

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

const RESUME_ASSET: &str = include_str!("../assets/resume.json");

/// One immutable text block of the résumé (identity, skills, projects, ...).
/// The category label is implicit in the content.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextSection {
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct ResumeAsset {
    sections: Vec<ContextSection>,
}

/// Ordered, read-only collection of résumé sections.
#[derive(Debug, Clone)]
pub struct ContextStore {
    sections: Vec<ContextSection>,
}

impl ContextStore {
    /// Loads the résumé shipped with the binary. Fails fast at startup if the
    /// asset is malformed, empty, or contains a blank section.
    pub fn from_embedded_asset() -> Result<Self> {
        Self::from_json(RESUME_ASSET)
    }

    fn from_json(raw: &str) -> Result<Self> {
        let asset: ResumeAsset =
            serde_json::from_str(raw).context("resume asset is not valid JSON")?;
        ensure!(
            !asset.sections.is_empty(),
            "resume asset must contain at least one section"
        );
        ensure!(
            asset.sections.iter().all(|s| !s.content.trim().is_empty()),
            "resume asset must not contain blank sections"
        );
        Ok(Self {
            sections: asset.sections,
        })
    }

    /// Test seam: build a store from arbitrary sections.
    #[cfg(test)]
    pub fn from_sections(sections: Vec<ContextSection>) -> Self {
        Self { sections }
    }

    /// All sections, in declaration order. Identical across every call within
    /// process lifetime.
    pub fn all_sections(&self) -> &[ContextSection] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_asset_parses_and_is_nonempty() {
        let store = ContextStore::from_embedded_asset().unwrap();
        assert!(!store.all_sections().is_empty());
    }

    #[test]
    fn test_embedded_asset_covers_expected_resume_categories() {
        let store = ContextStore::from_embedded_asset().unwrap();
        let joined: String = store
            .all_sections()
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        for category in ["Name:", "Summary:", "Skills:", "Experience:", "Projects:", "Education:"] {
            assert!(joined.contains(category), "missing category {category}");
        }
    }

    #[test]
    fn test_sections_preserve_declaration_order() {
        let store = ContextStore::from_json(
            r#"{"sections":[{"content":"first"},{"content":"second"},{"content":"third"}]}"#,
        )
        .unwrap();
        let contents: Vec<&str> = store
            .all_sections()
            .iter()
            .map(|s| s.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_section_list_is_rejected() {
        assert!(ContextStore::from_json(r#"{"sections":[]}"#).is_err());
    }

    #[test]
    fn test_blank_section_is_rejected() {
        assert!(ContextStore::from_json(r#"{"sections":[{"content":"  \n"}]}"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(ContextStore::from_json("not json").is_err());
    }
}
