//! Convenience re-exports for common `atomic-prompts` types.
//!
//! ```ignore
//! use atomic_prompts::prelude::*;
//! ```
//!
//! Brings in the entry points, the catalog types needed to build a custom
//! assembler, and the key constants module.

// ── Entry points ────────────────────────────────────────────────────
pub use crate::{PromptAssembler, formatted_resolve, legacy_resolve, presets};

// ── Catalog ─────────────────────────────────────────────────────────
pub use crate::catalog::{CatalogFile, Category, keys};
pub use crate::error::CatalogError;
pub use crate::registry::{PresetRegistry, SnippetRegistry};

// ── Rendering ───────────────────────────────────────────────────────
pub use crate::prompt::{ListStyle, SectionLayout};
