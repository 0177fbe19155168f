//! Composable system-prompt snippets for LLM agents.
//!
//! `atomic-prompts` keeps a catalogue of short instruction snippets ("atomic
//! prompts") grouped into categories. Callers select snippets by key, or by
//! preset names that expand to several keys. The selection is rendered as one
//! block of titled sections, ready to drop into a system prompt.
//!
//! # Getting started
//!
//! ```
//! use atomic_prompts::formatted_resolve;
//!
//! let prompt = formatted_resolve("developer, concise_tone, web_search", Some("Answer in English."));
//!
//! assert!(prompt.starts_with("**Background**\n- You are an experienced developer"));
//! assert!(prompt.contains("**Tone of Voice**\n- You should always be concise."));
//! assert!(prompt.ends_with("\n\nAnswer in English."));
//! ```
//!
//! # Where to find things
//!
//! - **Render a selection:** [`formatted_resolve`] and [`legacy_resolve`] use
//!   the built-in catalog. [`PromptAssembler`] does the same over a custom
//!   one.
//! - **Use a named preset as-is:** [`presets()`] holds the pre-rendered
//!   built-in presets. [`PromptAssembler::preset_text`] covers custom ones.
//! - **Build a custom catalog:** [`SnippetRegistry::builder`] and
//!   [`PresetRegistry`], or a JSON [`CatalogFile`].
//! - **Control how sections look:** [`SectionLayout`] sets the order, titles
//!   and [`ListStyle`] of each [`Category`].
//! - **See what a key string expands to:** [`KeyResolver`] and
//!   [`PromptAssembler::explain`].
//!
//! # Resolution rules
//!
//! Keys are comma-separated. Whitespace is trimmed and empty tokens are
//! ignored. Presets expand depth-first, in place. A preset that refers back to
//! one of the presets being expanded is skipped. Unknown keys are dropped.
//! Every atomic key appears at most once, at its first occurrence. None of
//! this can fail: malformed input renders whatever it could resolve.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | [`Category`], built-in snippets and presets, key constants, catalog files |
//! | [`registry`] | [`SnippetRegistry`] and [`PresetRegistry`] |
//! | [`resolve`] | [`KeyResolver`], [`split_keys`] |
//! | [`prompt`] | [`ListStyle`], [`SectionLayout`], [`PromptBuilder`], [`SectionFormatter`] |
//! | [`assembler`] | [`PromptAssembler`] and the free entry points |

pub mod assembler;
pub mod catalog;
pub mod error;
pub mod prelude;
pub mod prompt;
pub mod registry;
pub mod resolve;

pub use assembler::{PromptAssembler, formatted_resolve, legacy_resolve};
pub use catalog::{BuiltinPresets, CatalogFile, Category, keys, presets};
pub use error::CatalogError;
pub use prompt::{ListStyle, PromptBuilder, SectionFormatter, SectionLayout};
pub use registry::{Preset, PresetRegistry, Snippet, SnippetRegistry, SnippetRegistryBuilder};
pub use resolve::{KeyResolver, Resolution, split_keys};
