//! Rendering resolved keys into titled, per-category sections.

use std::collections::HashMap;

use super::builder::PromptBuilder;
use super::layout::SectionLayout;
use crate::catalog::Category;
use crate::registry::SnippetRegistry;

/// Groups resolved keys by category and renders one section per category.
///
/// Within a section, snippets keep the order of the resolved key list.
/// Sections follow the [`SectionLayout`] order regardless of how categories
/// were interleaved in the input.
#[derive(Debug, Clone, Copy)]
pub struct SectionFormatter<'a> {
    snippets: &'a SnippetRegistry,
    layout: &'a SectionLayout,
}

impl<'a> SectionFormatter<'a> {
    pub fn new(snippets: &'a SnippetRegistry, layout: &'a SectionLayout) -> Self {
        Self { snippets, layout }
    }

    /// Render `resolved_keys`, then append `extra` after a blank line.
    ///
    /// When no section renders, the result is the trimmed `extra` alone.
    /// Keys the registry does not know are skipped.
    pub fn format<S: AsRef<str>>(&self, resolved_keys: &[S], extra: Option<&str>) -> String {
        self.builder(resolved_keys).raw_opt(extra).build()
    }

    fn builder<S: AsRef<str>>(&self, resolved_keys: &[S]) -> PromptBuilder {
        let buckets = self.group(resolved_keys);
        let mut builder = PromptBuilder::new();
        for &category in self.layout.order() {
            let Some(texts) = buckets.get(&category) else {
                continue;
            };
            if let Some(body) = self.layout.style(category).render_items(texts) {
                builder = builder.section(self.layout.title(category), body);
            }
        }
        builder
    }

    fn group<S: AsRef<str>>(&self, resolved_keys: &[S]) -> HashMap<Category, Vec<&'a str>> {
        let snippets: &'a SnippetRegistry = self.snippets;
        let mut buckets: HashMap<Category, Vec<&'a str>> = HashMap::new();
        for key in resolved_keys {
            if let Some(snippet) = snippets.get(key.as_ref()) {
                buckets
                    .entry(snippet.category)
                    .or_default()
                    .push(snippet.text.as_str());
            }
        }
        buckets
    }
}
