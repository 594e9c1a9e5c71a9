//! Plain run options, kept free of `clap` types so library code never
//! depends on argument-parsing machinery (mirrors the split between
//! `examples/allenanswerzq-llmcc/crates/llmcc-cli/src/lib.rs`'s
//! `LlmccOptions` and its `main.rs`'s derived `Cli`).

/// Resolved CLI input, independent of how it was parsed.
#[derive(Debug, Clone)]
pub struct CirOptions {
    /// Explicit file paths to parse.
    pub files: Vec<String>,
    /// Directories to walk for project-mode parses.
    pub dirs: Vec<String>,
    /// Explicit language override (§4.5 explicit-argument tier).
    pub lang: Option<String>,
    /// One of `class|package|sequence|component`.
    pub diagram: String,
    /// Output file path; `None` means stdout.
    pub output: Option<String>,
}

impl Default for CirOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            dirs: Vec::new(),
            lang: None,
            diagram: "class".to_string(),
            output: None,
        }
    }
}
