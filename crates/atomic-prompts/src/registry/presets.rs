//! Named presets: aliases for ordered lists of key references.

use std::collections::HashMap;

use serde::Serialize;

use crate::resolve::split_keys;

/// A preset definition, parsed at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: String,
    /// The definition exactly as written (comma-separated).
    pub definition: String,
    /// Trimmed, non-empty references in definition order. Each is an atomic
    /// key, another preset's name, or unknown.
    pub constituents: Vec<String>,
}

impl Preset {
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        let definition = definition.into();
        let constituents = split_keys(&definition)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            name: name.into().trim().to_string(),
            definition,
            constituents,
        }
    }
}

/// Read-only table of presets, in definition order.
///
/// ```
/// use atomic_prompts::PresetRegistry;
///
/// let presets = PresetRegistry::new()
///     .with_preset("base", "calm, plan")
///     .with_preset("full", "base,,shell ");
///
/// assert!(presets.is_preset("full"));
/// assert_eq!(
///     presets.get_constituents("full").unwrap(),
///     ["base".to_string(), "shell".to_string()]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
    index: HashMap<String, usize>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preset (builder pattern).
    pub fn with_preset(mut self, name: impl Into<String>, definition: impl Into<String>) -> Self {
        self.insert(name, definition);
        self
    }

    /// Add a preset. Redefining a name replaces the old definition but keeps
    /// its position.
    pub fn insert(&mut self, name: impl Into<String>, definition: impl Into<String>) {
        let preset = Preset::new(name, definition);
        match self.index.get(&preset.name) {
            Some(&i) => self.presets[i] = preset,
            None => {
                self.index.insert(preset.name.clone(), self.presets.len());
                self.presets.push(preset);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.index.get(name).map(|&i| &self.presets[i])
    }

    /// The raw, unexpanded references of a preset.
    pub fn get_constituents(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|p| p.constituents.as_slice())
    }

    pub fn definition(&self, name: &str) -> Option<&str> {
        self.get(name).map(|p| p.definition.as_str())
    }

    pub fn is_preset(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constituents_are_trimmed_and_empties_dropped() {
        let preset = Preset::new("p", " a , ,b,, c ,");
        assert_eq!(preset.constituents, ["a", "b", "c"]);
        assert_eq!(preset.definition, " a , ,b,, c ,");
    }

    #[test]
    fn empty_definition_has_no_constituents() {
        let presets = PresetRegistry::new().with_preset("nothing", "");
        assert!(presets.is_preset("nothing"));
        assert_eq!(presets.get_constituents("nothing"), Some(&[][..]));
    }

    #[test]
    fn unknown_preset() {
        let presets = PresetRegistry::new();
        assert!(!presets.is_preset("agent"));
        assert!(presets.get_constituents("agent").is_none());
        assert!(presets.definition("agent").is_none());
    }

    #[test]
    fn redefinition_replaces_in_place() {
        let presets = PresetRegistry::new()
            .with_preset("first", "a")
            .with_preset("second", "b")
            .with_preset("first", "c,d");
        let names: Vec<&str> = presets.names().collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(presets.definition("first"), Some("c,d"));
        assert_eq!(presets.len(), 2);
    }

    #[test]
    fn names_are_trimmed() {
        let presets = PresetRegistry::new().with_preset(" spaced ", "a");
        assert!(presets.is_preset("spaced"));
    }
}
