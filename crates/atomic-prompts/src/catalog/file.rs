//! JSON catalog files.
//!
//! A catalog file declares snippets per category and presets by name. It can
//! stand alone or extend the built-in catalog:
//!
//! ```json
//! {
//!   "extend_builtin": true,
//!   "snippets": { "Tone": { "playful_tone": "You should always be playful." } },
//!   "presets": { "playful_agent": "agent,playful_tone" }
//! }
//! ```
//!
//! Snippet keys must not collide with each other or, when extending, with the
//! built-in keys. Presets with a built-in name replace the built-in preset.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Category;
use super::builtin::{builtin_presets, builtin_snippets};
use crate::assembler::PromptAssembler;
use crate::error::{CatalogError, Result};
use crate::registry::{PresetRegistry, SnippetRegistry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Start from the built-in catalog instead of an empty one.
    #[serde(default)]
    pub extend_builtin: bool,
    /// Category → (key → text).
    #[serde(default)]
    pub snippets: IndexMap<Category, IndexMap<String, String>>,
    /// Preset name → comma-separated definition.
    #[serde(default)]
    pub presets: IndexMap<String, String>,
}

impl CatalogFile {
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: shown.clone(),
            source,
        })?;
        let file = Self::from_json(&content).map_err(|source| CatalogError::Parse {
            path: shown.clone(),
            source,
        })?;
        debug!(
            "Loaded catalog file '{shown}' ({} categories, {} presets)",
            file.snippets.len(),
            file.presets.len()
        );
        Ok(file)
    }

    /// Validate the catalog and build an assembler over it.
    pub fn into_assembler(self) -> Result<PromptAssembler> {
        let mut snippets = SnippetRegistry::builder();
        let mut presets = PresetRegistry::new();

        if self.extend_builtin {
            snippets = snippets.extend_from(&builtin_snippets()?);
            presets = builtin_presets();
        }
        for (category, items) in self.snippets {
            snippets = snippets.category(category, items);
        }
        for (name, definition) in self.presets {
            presets.insert(name, definition);
        }

        Ok(PromptAssembler::new(snippets.build()?, presets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys;
    use std::io::Write;

    const PLAYFUL: &str = r#"{
        "extend_builtin": true,
        "snippets": { "Tone": { "playful_tone": "You should always be playful." } },
        "presets": { "playful_agent": "agent, playful_tone" }
    }"#;

    #[test]
    fn parses_with_defaults() {
        let file = CatalogFile::from_json("{}").unwrap();
        assert_eq!(file, CatalogFile::default());
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let result = CatalogFile::from_json(r#"{ "snippets": { "Mood": { "a": "b" } } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn extends_builtin_catalog() {
        let assembler = CatalogFile::from_json(PLAYFUL)
            .unwrap()
            .into_assembler()
            .unwrap();
        assert!(assembler.snippets().contains(keys::DEVELOPER));
        assert!(assembler.presets().is_preset(keys::GENTLE_DEV_AGENT));

        let out = assembler.formatted_resolve("playful_agent", None);
        assert!(out.starts_with("**Background**\n- You are an experienced developer"));
        assert!(out.ends_with("**Tone of Voice**\n- You should always be playful."));
    }

    #[test]
    fn standalone_catalog_has_only_its_own_entries() {
        let json = r#"{
            "snippets": { "Instructions": { "plan": "Plan first." } },
            "presets": { "p": "plan, developer" }
        }"#;
        let assembler = CatalogFile::from_json(json)
            .unwrap()
            .into_assembler()
            .unwrap();
        assert_eq!(assembler.snippets().len(), 1);
        assert_eq!(
            assembler.formatted_resolve("p", None),
            "**Core Instructions**\n1. Plan first."
        );
    }

    #[test]
    fn entries_keep_file_order() {
        let json = r#"{
            "snippets": { "Tone": { "zesty": "Be zesty.", "adroit": "Be adroit." } },
            "presets": { "zeta": "zesty", "alpha": "adroit" }
        }"#;
        let assembler = CatalogFile::from_json(json)
            .unwrap()
            .into_assembler()
            .unwrap();
        let tone: Vec<&str> = assembler
            .snippets()
            .in_category(Category::Tone)
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(tone, ["zesty", "adroit"]);
        let names: Vec<&str> = assembler.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn collision_with_builtin_key_is_rejected() {
        let json = r#"{
            "extend_builtin": true,
            "snippets": { "Tools": { "developer": "Not a background." } }
        }"#;
        let result = CatalogFile::from_json(json).unwrap().into_assembler();
        match result {
            Err(CatalogError::DuplicateKey { key, first, second }) => {
                assert_eq!(key, "developer");
                assert_eq!(first, Category::Backgrounds);
                assert_eq!(second, Category::Tools);
            }
            other => panic!("expected duplicate key error, got {other:?}"),
        }
    }

    #[test]
    fn file_presets_override_builtin() {
        let json = r#"{ "extend_builtin": true, "presets": { "agent": "concise_tone" } }"#;
        let assembler = CatalogFile::from_json(json)
            .unwrap()
            .into_assembler()
            .unwrap();
        assert_eq!(
            assembler.preset_text(keys::AGENT),
            Some("**Tone of Voice**\n- You should always be concise.")
        );
    }

    #[test]
    fn load_reads_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(PLAYFUL.as_bytes()).unwrap();
        let file = CatalogFile::load(tmp.path()).unwrap();
        assert!(file.extend_builtin);
        assert_eq!(file.presets["playful_agent"], "agent, playful_tone");
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            CatalogFile::load(&missing),
            Err(CatalogError::Io { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let err = CatalogFile::load(&broken).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
