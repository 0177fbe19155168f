//! Section-by-section prompt assembly.
//!
//! [`PromptBuilder`] collects titled sections and raw text blocks and joins
//! them with blank lines. Blank pieces are skipped, so callers can feed it
//! optional content without checking first.

/// Builder for a multi-section prompt body.
///
/// Section titles render as bold lines (`**Title**`) directly above their
/// body. Pieces are joined with double newlines and the result is trimmed.
///
/// # Example
///
/// ```
/// use atomic_prompts::prompt::PromptBuilder;
///
/// let prompt = PromptBuilder::new()
///     .section("Tone of Voice", "- Be kind.")
///     .section_opt("Available Tools", None::<String>)
///     .raw("  Answer in French.  ")
///     .build();
///
/// assert_eq!(prompt, "**Tone of Voice**\n- Be kind.\n\nAnswer in French.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<String>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a titled section.
    ///
    /// Skipped if `body` is blank. A blank title produces the body alone.
    pub fn section(mut self, title: &str, body: impl Into<String>) -> Self {
        let body = body.into();
        let body = body.trim();
        if body.is_empty() {
            return self;
        }
        let title = title.trim();
        if title.is_empty() {
            self.sections.push(body.to_string());
        } else {
            self.sections.push(format!("**{title}**\n{body}"));
        }
        self
    }

    /// Append a titled section only if the body is `Some`.
    pub fn section_opt(self, title: &str, body: Option<impl Into<String>>) -> Self {
        match body {
            Some(b) => self.section(title, b),
            None => self,
        }
    }

    /// Append trimmed text without a title. Skipped if blank.
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        let content = content.trim();
        if !content.is_empty() {
            self.sections.push(content.to_string());
        }
        self
    }

    /// Append raw text only if the content is `Some`.
    pub fn raw_opt(self, content: Option<impl Into<String>>) -> Self {
        match content {
            Some(c) => self.raw(c),
            None => self,
        }
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Join all pieces with blank lines.
    pub fn build(self) -> String {
        self.sections.join("\n\n").trim().to_string()
    }
}
