//! Immutable snippet and preset tables.
//!
//! Both registries are built once and then only read. [`SnippetRegistry`]
//! rejects inconsistent data at build time; [`PresetRegistry`] accepts any
//! definitions, since dangling or cyclic references are resolved leniently.

pub mod presets;
pub mod snippets;

pub use presets::{Preset, PresetRegistry};
pub use snippets::{Snippet, SnippetRegistry, SnippetRegistryBuilder};
