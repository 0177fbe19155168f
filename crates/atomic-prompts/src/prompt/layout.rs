//! List styles and the section layout.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// How a section's items are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListStyle {
    /// `- item`
    Bullet,
    /// `1. item`, numbered from one.
    Numbered,
}

impl ListStyle {
    /// Render items as list lines, one per line.
    ///
    /// Items are trimmed and blank ones are dropped before numbering. Returns
    /// `None` when nothing is left.
    pub fn render_items<S: AsRef<str>>(self, items: &[S]) -> Option<String> {
        let lines: Vec<String> = items
            .iter()
            .map(|item| item.as_ref().trim())
            .filter(|item| !item.is_empty())
            .enumerate()
            .map(|(i, item)| match self {
                Self::Bullet => format!("- {item}"),
                Self::Numbered => format!("{}. {item}", i + 1),
            })
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

/// Which sections appear, in what order, and how each is titled and styled.
///
/// The default is the fixed layout: every category in
/// [`Category::DISPLAY_ORDER`], with its own title and list style.
/// Categories left out of [`order`](Self::order) are not rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    order: Vec<Category>,
    titles: HashMap<Category, String>,
    styles: HashMap<Category, ListStyle>,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            order: Category::DISPLAY_ORDER.to_vec(),
            titles: HashMap::new(),
            styles: HashMap::new(),
        }
    }
}

impl SectionLayout {
    /// Replace the section order. Repeated categories are kept once.
    pub fn with_order(mut self, order: impl IntoIterator<Item = Category>) -> Self {
        self.order.clear();
        for category in order {
            if !self.order.contains(&category) {
                self.order.push(category);
            }
        }
        self
    }

    /// Override one category's section title.
    pub fn with_title(mut self, category: Category, title: impl Into<String>) -> Self {
        self.titles.insert(category, title.into());
        self
    }

    /// Override one category's list style.
    pub fn with_style(mut self, category: Category, style: ListStyle) -> Self {
        self.styles.insert(category, style);
        self
    }

    pub fn order(&self) -> &[Category] {
        &self.order
    }

    pub fn title(&self, category: Category) -> &str {
        self.titles
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.title())
    }

    pub fn style(&self, category: Category) -> ListStyle {
        self.styles
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.list_style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_items() {
        let list = ListStyle::Bullet.render_items(&["a", "b"]);
        assert_eq!(list.as_deref(), Some("- a\n- b"));
    }

    #[test]
    fn numbering_skips_blank_items() {
        let list = ListStyle::Numbered.render_items(&["", " first ", "\n", "second"]);
        assert_eq!(list.as_deref(), Some("1. first\n2. second"));
    }

    #[test]
    fn all_blank_is_none() {
        assert_eq!(ListStyle::Bullet.render_items(&["", "  "]), None);
        assert_eq!(ListStyle::Numbered.render_items(&[" "]), None);
    }

    #[test]
    fn default_layout_is_fixed_table() {
        let layout = SectionLayout::default();
        assert_eq!(layout.order(), Category::DISPLAY_ORDER);
        assert_eq!(layout.title(Category::Tone), "Tone of Voice");
        assert_eq!(layout.style(Category::Instructions), ListStyle::Numbered);
        assert_eq!(layout.style(Category::Tools), ListStyle::Bullet);
    }

    #[test]
    fn overrides() {
        let layout = SectionLayout::default()
            .with_title(Category::Tools, "Capabilities")
            .with_style(Category::Tools, ListStyle::Numbered)
            .with_order([Category::Tools, Category::Tone, Category::Tools]);
        assert_eq!(layout.order(), [Category::Tools, Category::Tone]);
        assert_eq!(layout.title(Category::Tools), "Capabilities");
        assert_eq!(layout.title(Category::Tone), "Tone of Voice");
        assert_eq!(layout.style(Category::Tools), ListStyle::Numbered);
    }
}
