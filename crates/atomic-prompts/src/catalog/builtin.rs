//! The built-in catalog and its named preset constants.

use std::sync::LazyLock;

use chrono::Local;

use super::Category;
use super::keys;
use super::text::{backgrounds, instructions, tone, tools, user_interaction};
use crate::assembler::PromptAssembler;
use crate::error::Result;
use crate::registry::{PresetRegistry, SnippetRegistry};

/// Build the built-in snippet table.
///
/// The `time_perception` snippet is stamped with today's local date at call
/// time. [`PromptAssembler::builtin`] calls this once per process.
pub fn builtin_snippets() -> Result<SnippetRegistry> {
    let today = Local::now().date_naive();

    SnippetRegistry::builder()
        .category(
            Category::Backgrounds,
            [
                (keys::DEVELOPER, backgrounds::DEVELOPER),
                (keys::UX_DESIGNER, backgrounds::UX_DESIGNER),
                (keys::RESEARCHER, backgrounds::RESEARCHER),
                (keys::TEACHER, backgrounds::TEACHER),
                (keys::WRITER, backgrounds::WRITER),
            ],
        )
        .category(
            Category::Tools,
            [
                (keys::CODE_EXECUTION, tools::CODE_EXECUTION),
                (keys::RAG_RETRIEVE, tools::RAG_RETRIEVE),
                (keys::WEB_SEARCH, tools::WEB_SEARCH),
                (keys::FILE_EDITING, tools::FILE_EDITING),
            ],
        )
        .category(
            Category::UserInteraction,
            [
                (keys::NON_TECHNICAL_USER, user_interaction::NON_TECHNICAL),
                (keys::SAME_LANGUAGE, user_interaction::SAME_LANGUAGE),
                (keys::SUGGESTIONS_ONLY, user_interaction::SUGGESTIONS),
            ],
        )
        .category(
            Category::Tone,
            [
                (keys::FRIENDLY_TONE, tone::FRIENDLY),
                (keys::PROFESSIONAL_TONE, tone::PROFESSIONAL),
                (keys::CONCISE_TONE, tone::CONCISE),
                (keys::INFORMATIVE_TONE, tone::INFORMATIVE),
                (keys::CLEAR_TONE, tone::CLEAR),
                (keys::ENGAGING_TONE, tone::ENGAGING),
                (keys::EMPATHETIC_TONE, tone::EMPATHETIC),
                (keys::ASSERTIVE_TONE, tone::ASSERTIVE),
            ],
        )
        .category(
            Category::Instructions,
            [
                (keys::ANTI_TOOL_EXTRACTION, instructions::ANTI_TOOL_EXTRACTION),
                (keys::EXPLAIN_ACTIONS, instructions::EXPLAIN_ACTIONS),
                (keys::AUTO_DECISION, instructions::AUTO_DECISION),
            ],
        )
        .snippet(
            Category::Instructions,
            keys::TIME_PERCEPTION,
            instructions::time_perception(today),
        )
        .category(
            Category::Instructions,
            [
                (keys::AUTO_FIX, instructions::AUTO_FIX),
                (keys::NO_LOOP, instructions::NO_LOOP),
                (keys::BLACKMAIL, instructions::BLACKMAIL),
                (keys::PREVENT_NONTEXTUAL, instructions::PREVENT_NONTEXTUAL),
                (keys::TASK_FOLLOW, instructions::TASK_FOLLOW),
                (keys::ANTI_HALLUCINATION, instructions::ANTI_HALLUCINATION),
            ],
        )
        .build()
}

/// Build the built-in preset table.
pub fn builtin_presets() -> PresetRegistry {
    PresetRegistry::new()
        .with_preset(
            keys::AGENT,
            "developer,\
             anti_hallucination,explain_actions,auto_decision,time_perception,\
             auto_fix,task_follow,anti_tool_extraction,prevent_nontextual",
        )
        .with_preset(
            keys::GENTLE_DEV_AGENT,
            "agent,\
             friendly_tone,empathetic_tone,clear_tone,informative_tone,\
             non_technical_user,suggestions_only",
        )
}

/// Ready-to-use renderings of the built-in presets.
///
/// Each field is the formatted prompt for exactly that preset, with no extra
/// text.
#[derive(Debug, Clone)]
pub struct BuiltinPresets {
    pub agent: String,
    pub gentle_dev_agent: String,
}

static PRESETS: LazyLock<BuiltinPresets> = LazyLock::new(|| {
    let assembler = PromptAssembler::builtin();
    let rendered = |name: &str| assembler.preset_text(name).unwrap_or_default().to_string();
    BuiltinPresets {
        agent: rendered(keys::AGENT),
        gentle_dev_agent: rendered(keys::GENTLE_DEV_AGENT),
    }
});

/// The named built-in preset renderings.
///
/// ```
/// let agent = &atomic_prompts::presets().agent;
/// assert!(agent.starts_with("**Background**\n- You are an experienced developer"));
/// ```
pub fn presets() -> &'static BuiltinPresets {
    &PRESETS
}
