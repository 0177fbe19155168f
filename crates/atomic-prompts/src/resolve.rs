//! Key resolution: expanding presets into a flat list of atomic keys.
//!
//! [`KeyResolver`] walks the requested keys depth-first, left to right.
//! Presets are inlined where they are referenced; atomic keys are emitted the
//! first time they are seen. Nothing here fails: unknown keys and preset
//! cycles are dropped and, at most, logged.
//!
//! Cycle detection only looks at the chain of presets currently being
//! expanded. Each recursive call receives its own copy of that chain, so two
//! sibling references to the same preset both expand (and then deduplicate),
//! while a preset that refers back to one of its ancestors is skipped.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::registry::{PresetRegistry, SnippetRegistry};

/// Split a comma-separated key string into trimmed, non-empty tokens.
///
/// ```
/// use atomic_prompts::split_keys;
///
/// assert_eq!(split_keys(" agent,, friendly_tone ,"), ["agent", "friendly_tone"]);
/// assert!(split_keys(" , ").is_empty());
/// ```
pub fn split_keys(keys: &str) -> Vec<&str> {
    keys.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect()
}

/// The outcome of a resolution, including what was dropped along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Atomic keys, deduplicated, in first-occurrence order.
    pub keys: Vec<&'a str>,
    /// References that named neither a preset nor a snippet.
    pub unknown: Vec<String>,
    /// Preset references skipped because they were already being expanded.
    pub cycles: Vec<String>,
}

/// Expands raw key lists against a snippet and a preset registry.
#[derive(Debug, Clone, Copy)]
pub struct KeyResolver<'a> {
    snippets: &'a SnippetRegistry,
    presets: &'a PresetRegistry,
}

impl<'a> KeyResolver<'a> {
    pub fn new(snippets: &'a SnippetRegistry, presets: &'a PresetRegistry) -> Self {
        Self { snippets, presets }
    }

    /// Expand `raw_keys` into atomic keys.
    ///
    /// Presets win over snippets of the same name. The returned keys borrow
    /// from the snippet registry.
    pub fn resolve<S: AsRef<str>>(&self, raw_keys: &[S]) -> Vec<&'a str> {
        self.resolve_with_report(raw_keys).keys
    }

    /// [`resolve`](Self::resolve) a comma-separated key string.
    pub fn resolve_str(&self, keys: &str) -> Vec<&'a str> {
        self.resolve(&split_keys(keys))
    }

    /// Like [`resolve`](Self::resolve), but also reports the references that
    /// were dropped as unknown or as cycles.
    pub fn resolve_with_report<S: AsRef<str>>(&self, raw_keys: &[S]) -> Resolution<'a> {
        let keys: Vec<&str> = raw_keys.iter().map(AsRef::as_ref).collect();
        let mut walk = Walk::default();
        self.expand(&keys, &HashSet::new(), &mut walk);
        walk.resolution
    }

    fn expand<'k>(&self, keys: &[&'k str], ancestors: &HashSet<&'k str>, walk: &mut Walk<'a>)
    where
        'a: 'k,
    {
        let snippets: &'a SnippetRegistry = self.snippets;
        let presets: &'a PresetRegistry = self.presets;

        for &raw in keys {
            let key = raw.trim();
            if key.is_empty() {
                continue;
            }

            if ancestors.contains(key) {
                trace!("Skipping '{key}': already expanding it");
                walk.note_cycle(key);
                continue;
            }

            if let Some(constituents) = presets.get_constituents(key) {
                let mut branch = ancestors.clone();
                branch.insert(key);
                let refs: Vec<&'k str> = constituents.iter().map(String::as_str).collect();
                self.expand(&refs, &branch, walk);
            } else if let Some(snippet) = snippets.get(key) {
                walk.emit(snippet.key.as_str());
            } else {
                debug!("Ignoring unknown prompt key '{key}'");
                walk.note_unknown(key);
            }
        }
    }
}

/// Accumulator threaded through one resolution.
#[derive(Default)]
struct Walk<'a> {
    resolution: Resolution<'a>,
    emitted: HashSet<&'a str>,
}

impl<'a> Walk<'a> {
    fn emit(&mut self, key: &'a str) {
        if self.emitted.insert(key) {
            self.resolution.keys.push(key);
        }
    }

    fn note_unknown(&mut self, key: &str) {
        if !self.resolution.unknown.iter().any(|k| k == key) {
            self.resolution.unknown.push(key.to_string());
        }
    }

    fn note_cycle(&mut self, key: &str) {
        if !self.resolution.cycles.iter().any(|k| k == key) {
            self.resolution.cycles.push(key.to_string());
        }
    }
}
