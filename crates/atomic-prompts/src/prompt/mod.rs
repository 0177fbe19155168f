//! Prompt rendering: list styles, section layout, and assembly.
//!
//! Rendering has three layers:
//!
//! 1. **[`ListStyle`]**: turns a list of snippet texts into bullet or
//!    numbered lines.
//! 2. **[`PromptBuilder`]**: joins titled sections and raw blocks with blank
//!    lines.
//! 3. **[`SectionFormatter`]**: groups resolved keys by category and drives
//!    the other two according to a [`SectionLayout`].

pub mod builder;
pub mod formatter;
pub mod layout;

pub use builder::PromptBuilder;
pub use formatter::SectionFormatter;
pub use layout::{ListStyle, SectionLayout};
