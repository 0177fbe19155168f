//! Prompt categories and the built-in snippet catalog.
//!
//! Every atomic prompt belongs to exactly one [`Category`]. The category
//! decides where the snippet lands in the rendered prompt (sections follow
//! [`Category::DISPLAY_ORDER`]), which title its section carries, and whether
//! the section is a bullet or a numbered list.
//!
//! - [`keys`]: canonical key and preset name constants.
//! - [`text`]: the literal snippet wording.
//! - [`builtin`]: the built-in registries and named preset constants.
//! - [`file`]: JSON catalog files that extend or replace the built-ins.

pub mod builtin;
pub mod file;
pub mod keys;
pub mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prompt::ListStyle;

pub use builtin::{BuiltinPresets, builtin_presets, builtin_snippets, presets};
pub use file::CatalogFile;

/// A named group of snippets rendered as one section.
///
/// The derived ordering is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Who the agent is.
    Backgrounds,
    /// Behavioural rules. Rendered as a numbered list.
    Instructions,
    /// Tone of voice.
    Tone,
    /// How to address the user.
    UserInteraction,
    /// Capabilities the agent can rely on.
    Tools,
}

impl Category {
    /// All categories in the order their sections appear in rendered output.
    pub const DISPLAY_ORDER: [Category; 5] = [
        Category::Backgrounds,
        Category::Instructions,
        Category::Tone,
        Category::UserInteraction,
        Category::Tools,
    ];

    /// The identifier used in catalog files and CLI listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Backgrounds => "Backgrounds",
            Self::Instructions => "Instructions",
            Self::Tone => "Tone",
            Self::UserInteraction => "UserInteraction",
            Self::Tools => "Tools",
        }
    }

    /// The section heading shown above this category's snippets.
    pub fn title(self) -> &'static str {
        match self {
            Self::Backgrounds => "Background",
            Self::Instructions => "Core Instructions",
            Self::Tone => "Tone of Voice",
            Self::UserInteraction => "User Interaction Guidelines",
            Self::Tools => "Available Tools",
        }
    }

    /// The list style used for this category's section.
    pub fn list_style(self) -> ListStyle {
        match self {
            Self::Instructions => ListStyle::Numbered,
            _ => ListStyle::Bullet,
        }
    }

}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_matches_derived_ordering() {
        let mut sorted = Category::DISPLAY_ORDER;
        sorted.sort();
        assert_eq!(sorted, Category::DISPLAY_ORDER);
    }

    #[test]
    fn only_instructions_are_numbered() {
        for category in Category::DISPLAY_ORDER {
            let expected = if category == Category::Instructions {
                ListStyle::Numbered
            } else {
                ListStyle::Bullet
            };
            assert_eq!(category.list_style(), expected, "{category}");
        }
    }

    #[test]
    fn titles() {
        assert_eq!(Category::Instructions.title(), "Core Instructions");
        assert_eq!(Category::UserInteraction.title(), "User Interaction Guidelines");
    }
}
