/// String constants shared across detectors, repair and rendering.
///
/// Frequently used literals live here instead of being re-allocated at each
/// use site, and so the wire-visible spellings have a single home.
/// Language identifiers used across analyzers and the CLI
pub mod languages {
    pub const PYTHON: &str = "python";
    pub const JAVASCRIPT: &str = "javascript";
    pub const TYPESCRIPT: &str = "typescript";
    pub const JAVA: &str = "java";
    pub const C: &str = "c";
    pub const CPP: &str = "cpp";
    pub const PLAIN: &str = "plain";
    /// Sentinel hint meaning "detect the language for me".
    pub const AUTO: &str = "auto";
}

/// Provider identifiers and their configuration environment variables
pub mod providers {
    pub const OPENROUTER: &str = "openrouter";
    pub const GOOGLE: &str = "google";
    pub const HEURISTIC: &str = "heuristic";

    pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";
    pub const OPENROUTER_MODEL_VAR: &str = "OPENROUTER_MODEL";
    pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";
    pub const GOOGLE_MODEL_VAR: &str = "GOOGLE_MODEL";

    pub const DEFAULT_OPENROUTER_MODEL: &str = "google/gemini-2.0-flash-exp:free";
    pub const DEFAULT_GOOGLE_MODEL: &str = "gemini-1.5-flash";

    pub const OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
    pub const GOOGLE_ENDPOINT_BASE: &str =
        "https://generativelanguage.googleapis.com/v1beta/models";
}

/// Markers that appear in change logs and the attempts audit trail
pub mod repair_markers {
    pub const NO_CHANGES: &str = "No changes";
    pub const AI_FIX_APPLIED: &str = "AI fix applied";
    pub const MISSING_CREDENTIAL: &str = "missing credential";
    pub const NO_RESULT: &str = "no result";
}

/// Fixed limits of one analysis pass
pub mod limits {
    /// Issues returned per analysis are truncated, not sampled.
    pub const MAX_ISSUES: usize = 100;
    /// Non-empty line count above which the large-file warning fires.
    pub const LARGE_FILE_LINES: usize = 200;
    /// Line length above which the readability long-line penalty applies.
    pub const LONG_LINE_CHARS: usize = 120;
    /// Characters of the snippet echoed into rendered reports.
    pub const REPORT_SNIPPET_CHARS: usize = 2000;
}
