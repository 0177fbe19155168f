//! The atomic snippet table.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::catalog::Category;
use crate::error::{CatalogError, Result};

/// One atomic prompt: a key, its category, and the text it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub category: Category,
    pub key: String,
    pub text: String,
}

/// Read-only table of atomic prompts, keyed globally.
///
/// Keys are unique across all categories. Construction goes through
/// [`SnippetRegistryBuilder`], which enforces that invariant.
///
/// ```
/// use atomic_prompts::{Category, SnippetRegistry};
///
/// let registry = SnippetRegistry::builder()
///     .snippet(Category::Tone, "calm", "Stay calm.")
///     .category(Category::Tools, [("shell", "You can run shell commands.")])
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.get_category("shell"), Some(Category::Tools));
/// assert_eq!(registry.get_text("calm"), Some("Stay calm."));
/// assert!(registry.get_text("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnippetRegistry {
    /// Snippets in registration order.
    snippets: Vec<Snippet>,
    /// Key → index into `snippets`.
    index: HashMap<String, usize>,
}

impl SnippetRegistry {
    pub fn builder() -> SnippetRegistryBuilder {
        SnippetRegistryBuilder::default()
    }

    pub fn get(&self, key: &str) -> Option<&Snippet> {
        self.index.get(key).map(|&i| &self.snippets[i])
    }

    pub fn get_category(&self, key: &str) -> Option<Category> {
        self.get(key).map(|s| s.category)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).map(|s| s.text.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Every atomic key, sorted.
    pub fn all_keys(&self) -> BTreeSet<&str> {
        self.snippets.iter().map(|s| s.key.as_str()).collect()
    }

    /// All snippets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    /// Snippets of one category, in registration order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter().filter(move |s| s.category == category)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Collects snippets and validates them into a [`SnippetRegistry`].
#[derive(Debug, Clone, Default)]
pub struct SnippetRegistryBuilder {
    entries: Vec<Snippet>,
}

impl SnippetRegistryBuilder {
    /// Add a single snippet.
    pub fn snippet(
        mut self,
        category: Category,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.entries.push(Snippet {
            category,
            key: key.into(),
            text: text.into(),
        });
        self
    }

    /// Add every `(key, text)` pair under one category.
    pub fn category<K, T>(
        mut self,
        category: Category,
        items: impl IntoIterator<Item = (K, T)>,
    ) -> Self
    where
        K: Into<String>,
        T: Into<String>,
    {
        for (key, text) in items {
            self = self.snippet(category, key, text);
        }
        self
    }

    /// Append every snippet of an existing registry.
    pub fn extend_from(mut self, registry: &SnippetRegistry) -> Self {
        self.entries.extend(registry.iter().cloned());
        self
    }

    /// Validate and freeze.
    ///
    /// Fails on the first key that is empty, contains a comma, or was
    /// already registered (in any category).
    pub fn build(self) -> Result<SnippetRegistry> {
        let mut snippets: Vec<Snippet> = Vec::with_capacity(self.entries.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(self.entries.len());

        for mut entry in self.entries {
            let key = entry.key.trim();
            if key.is_empty() || key.contains(',') {
                return Err(CatalogError::InvalidKey { key: entry.key });
            }
            if let Some(&existing) = index.get(key) {
                let first: &Snippet = &snippets[existing];
                return Err(CatalogError::DuplicateKey {
                    key: key.to_string(),
                    first: first.category,
                    second: entry.category,
                });
            }
            entry.key = key.to_string();
            index.insert(entry.key.clone(), snippets.len());
            snippets.push(entry);
        }

        Ok(SnippetRegistry { snippets, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SnippetRegistry {
        SnippetRegistry::builder()
            .category(Category::Tone, [("calm", "Stay calm."), ("terse", "Be terse.")])
            .category(Category::Instructions, [("plan", "Plan first.")])
            .build()
            .unwrap()
    }

    #[test]
    fn lookups() {
        let registry = sample();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get_category("plan"), Some(Category::Instructions));
        assert_eq!(registry.get_text("terse"), Some("Be terse."));
        assert!(registry.contains("calm"));
        assert!(!registry.contains("Calm"));
        assert_eq!(registry.get_category("nope"), None);
    }

    #[test]
    fn all_keys_is_the_full_set() {
        let registry = sample();
        let keys: Vec<&str> = registry.all_keys().into_iter().collect();
        assert_eq!(keys, ["calm", "plan", "terse"]);
    }

    #[test]
    fn in_category_keeps_registration_order() {
        let registry = sample();
        let tone: Vec<&str> = registry
            .in_category(Category::Tone)
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(tone, ["calm", "terse"]);
        assert_eq!(registry.in_category(Category::Tools).count(), 0);
    }

    #[test]
    fn duplicate_key_across_categories_is_rejected() {
        let err = SnippetRegistry::builder()
            .snippet(Category::Tone, "clear", "Be clear.")
            .snippet(Category::Instructions, "clear", "Clear the cache.")
            .build()
            .unwrap_err();
        match err {
            CatalogError::DuplicateKey { key, first, second } => {
                assert_eq!(key, "clear");
                assert_eq!(first, Category::Tone);
                assert_eq!(second, Category::Instructions);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_key_within_a_category_is_rejected() {
        let result = SnippetRegistry::builder()
            .snippet(Category::Tone, "calm", "Stay calm.")
            .snippet(Category::Tone, " calm ", "Stay very calm.")
            .build();
        assert!(matches!(result, Err(CatalogError::DuplicateKey { .. })));
    }

    #[test]
    fn unselectable_keys_are_rejected() {
        for bad in ["", "   ", "a,b"] {
            let result = SnippetRegistry::builder()
                .snippet(Category::Tools, bad, "text")
                .build();
            assert!(
                matches!(result, Err(CatalogError::InvalidKey { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn keys_are_trimmed() {
        let registry = SnippetRegistry::builder()
            .snippet(Category::Tools, "  shell ", "Run commands.")
            .build()
            .unwrap();
        assert!(registry.contains("shell"));
    }

    #[test]
    fn extend_from_copies_existing_entries() {
        let base = sample();
        let extended = SnippetRegistry::builder()
            .extend_from(&base)
            .snippet(Category::Tools, "shell", "Run commands.")
            .build()
            .unwrap();
        assert_eq!(extended.len(), 4);

        let clash = SnippetRegistry::builder()
            .extend_from(&base)
            .snippet(Category::Tools, "calm", "Calm tool.")
            .build();
        assert!(matches!(clash, Err(CatalogError::DuplicateKey { .. })));
    }
}
