//! Public entry points: formatted and legacy rendering over one catalog.
//!
//! A [`PromptAssembler`] owns a snippet table, a preset table and a section
//! layout. It offers two rendering modes:
//!
//! - [`formatted_resolve`](PromptAssembler::formatted_resolve): full preset
//!   expansion, deduplication, and titled per-category sections.
//! - [`legacy_resolve`](PromptAssembler::legacy_resolve): each top-level key
//!   becomes one block of text, joined by single newlines. A preset becomes
//!   its pre-rendered formatted text, so its internal sections stay as they
//!   are and are not merged with anything else.
//!
//! The pre-rendered preset texts are computed once, when the assembler is
//! built, and double as the named preset constants.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::info;

use crate::catalog::{builtin_presets, builtin_snippets};
use crate::prompt::{SectionFormatter, SectionLayout};
use crate::registry::{PresetRegistry, SnippetRegistry};
use crate::resolve::{KeyResolver, Resolution, split_keys};

static BUILTIN: LazyLock<PromptAssembler> = LazyLock::new(|| match builtin_snippets() {
    Ok(snippets) => PromptAssembler::new(snippets, builtin_presets()),
    Err(e) => panic!("built-in prompt catalog is invalid: {e}"),
});

/// Resolves key strings against one catalog and renders the result.
///
/// ```
/// use atomic_prompts::{Category, PresetRegistry, PromptAssembler, SnippetRegistry};
///
/// let snippets = SnippetRegistry::builder()
///     .snippet(Category::Tools, "shell", "You can run commands.")
///     .snippet(Category::Instructions, "plan", "Plan first.")
///     .build()
///     .unwrap();
/// let presets = PresetRegistry::new().with_preset("coder", "shell,plan");
/// let assembler = PromptAssembler::new(snippets, presets);
///
/// assert_eq!(
///     assembler.formatted_resolve("coder", Some("Be brief.")),
///     "**Core Instructions**\n1. Plan first.\n\n**Available Tools**\n- You can run commands.\n\nBe brief."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    snippets: SnippetRegistry,
    presets: PresetRegistry,
    layout: SectionLayout,
    /// Preset name → formatted rendering of its definition.
    rendered_presets: HashMap<String, String>,
}

impl PromptAssembler {
    /// Build an assembler with the default section layout.
    pub fn new(snippets: SnippetRegistry, presets: PresetRegistry) -> Self {
        let mut assembler = Self {
            snippets,
            presets,
            layout: SectionLayout::default(),
            rendered_presets: HashMap::new(),
        };
        assembler.render_presets();
        info!(
            "Prompt catalog ready: {} snippets, {} presets",
            assembler.snippets.len(),
            assembler.presets.len()
        );
        assembler
    }

    /// Replace the section layout and re-render the preset texts with it.
    pub fn with_layout(mut self, layout: SectionLayout) -> Self {
        self.layout = layout;
        self.render_presets();
        self
    }

    /// The process-wide assembler over the built-in catalog.
    ///
    /// Initialised on first use.
    ///
    /// # Panics
    ///
    /// On first use, if the built-in snippet data is inconsistent (for
    /// example, a key defined in two categories).
    pub fn builtin() -> &'static PromptAssembler {
        &BUILTIN
    }

    pub fn snippets(&self) -> &SnippetRegistry {
        &self.snippets
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn resolver(&self) -> KeyResolver<'_> {
        KeyResolver::new(&self.snippets, &self.presets)
    }

    pub fn formatter(&self) -> SectionFormatter<'_> {
        SectionFormatter::new(&self.snippets, &self.layout)
    }

    /// Resolve a comma-separated key string into atomic keys.
    pub fn resolve_keys(&self, keys: &str) -> Vec<&str> {
        self.resolver().resolve_str(keys)
    }

    /// Resolve a comma-separated key string and report dropped references.
    pub fn explain(&self, keys: &str) -> Resolution<'_> {
        self.resolver().resolve_with_report(&split_keys(keys))
    }

    /// Expand presets, group by category, and render titled sections.
    ///
    /// Non-blank `extra` text is appended after a blank line, or returned
    /// alone (trimmed) when no key resolved.
    pub fn formatted_resolve(&self, keys: &str, extra: Option<&str>) -> String {
        let resolved = self.resolve_keys(keys);
        self.formatter().format(&resolved, extra)
    }

    /// Substitute each top-level key with its text, one per line.
    ///
    /// A preset is replaced by its pre-rendered formatted text (see
    /// [`preset_text`](Self::preset_text)); an atomic key by its raw snippet
    /// text. Unknown keys are dropped and repeats are kept. Non-blank `extra`
    /// text is appended after a single newline.
    pub fn legacy_resolve(&self, keys: &str, extra: Option<&str>) -> String {
        let values: Vec<&str> = split_keys(keys)
            .into_iter()
            .filter_map(|key| self.legacy_value(key))
            .collect();

        let mut out = values.join("\n");
        if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(extra);
        }
        out
    }

    /// The pre-rendered formatted text of a preset.
    pub fn preset_text(&self, name: &str) -> Option<&str> {
        self.rendered_presets.get(name).map(String::as_str)
    }

    fn legacy_value(&self, key: &str) -> Option<&str> {
        self.preset_text(key)
            .or_else(|| self.snippets.get_text(key))
    }

    fn render_presets(&mut self) {
        let rendered: HashMap<String, String> = self
            .presets
            .iter()
            .map(|preset| {
                (
                    preset.name.clone(),
                    self.formatted_resolve(&preset.definition, None),
                )
            })
            .collect();
        self.rendered_presets = rendered;
    }
}

/// [`PromptAssembler::formatted_resolve`] on the built-in catalog.
///
/// ```
/// use atomic_prompts::formatted_resolve;
///
/// assert_eq!(formatted_resolve("", Some("Hello")), "Hello");
/// assert_eq!(
///     formatted_resolve("concise_tone, unknown_key", None),
///     "**Tone of Voice**\n- You should always be concise."
/// );
/// ```
pub fn formatted_resolve(keys: &str, extra: Option<&str>) -> String {
    PromptAssembler::builtin().formatted_resolve(keys, extra)
}

/// [`PromptAssembler::legacy_resolve`] on the built-in catalog.
pub fn legacy_resolve(keys: &str, extra: Option<&str>) -> String {
    PromptAssembler::builtin().legacy_resolve(keys, extra)
}
