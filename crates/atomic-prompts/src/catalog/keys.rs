//! Canonical atomic key and preset name constants.
//!
//! Code that selects built-in prompts should reference these constants rather
//! than repeating string literals. When a key is renamed, only this file and
//! the catalog need to change.

// ── Backgrounds ─────────────────────────────────────────────────────
pub const DEVELOPER: &str = "developer";
pub const UX_DESIGNER: &str = "ux_designer";
pub const RESEARCHER: &str = "researcher";
pub const TEACHER: &str = "teacher";
pub const WRITER: &str = "writer";

// ── Tools ───────────────────────────────────────────────────────────
pub const CODE_EXECUTION: &str = "code_execution";
pub const RAG_RETRIEVE: &str = "rag_retrieve";
pub const WEB_SEARCH: &str = "web_search";
pub const FILE_EDITING: &str = "file_editing";

// ── User interaction ────────────────────────────────────────────────
pub const NON_TECHNICAL_USER: &str = "non_technical_user";
pub const SAME_LANGUAGE: &str = "same_language";
pub const SUGGESTIONS_ONLY: &str = "suggestions_only";

// ── Tone ────────────────────────────────────────────────────────────
pub const FRIENDLY_TONE: &str = "friendly_tone";
pub const PROFESSIONAL_TONE: &str = "professional_tone";
pub const CONCISE_TONE: &str = "concise_tone";
pub const INFORMATIVE_TONE: &str = "informative_tone";
pub const CLEAR_TONE: &str = "clear_tone";
pub const ENGAGING_TONE: &str = "engaging_tone";
pub const EMPATHETIC_TONE: &str = "empathetic_tone";
pub const ASSERTIVE_TONE: &str = "assertive_tone";

// ── Instructions ────────────────────────────────────────────────────
pub const ANTI_TOOL_EXTRACTION: &str = "anti_tool_extraction";
pub const EXPLAIN_ACTIONS: &str = "explain_actions";
pub const AUTO_DECISION: &str = "auto_decision";
pub const TIME_PERCEPTION: &str = "time_perception";
pub const AUTO_FIX: &str = "auto_fix";
pub const NO_LOOP: &str = "no_loop";
pub const BLACKMAIL: &str = "blackmail";
pub const PREVENT_NONTEXTUAL: &str = "prevent_nontextual";
pub const TASK_FOLLOW: &str = "task_follow";
pub const ANTI_HALLUCINATION: &str = "anti_hallucination";

// ── Presets ─────────────────────────────────────────────────────────
pub const AGENT: &str = "agent";
pub const GENTLE_DEV_AGENT: &str = "gentle_dev_agent";
