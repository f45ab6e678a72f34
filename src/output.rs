//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a find operation
#[derive(Debug, Serialize)]
pub struct FindResult {
    /// Root the walk started from
    pub root: String,
    /// Matchers applied, in display form
    pub matchers: Vec<String>,
    /// Accepted paths relative to the root
    pub matches: Vec<String>,
}

/// Result of resolving a key string
#[derive(Debug, Serialize)]
pub struct KeyResult {
    /// Key string as given
    pub input: String,
    /// Canonical qualified key string
    pub key: String,
    /// Normalized path of the resource
    pub path: String,
    /// Local file, absent for non-local paths
    pub local_file: Option<String>,
    /// Whether the resource currently exists
    pub exists: bool,
}

/// Result of testing matchers against a single path
#[derive(Debug, Serialize)]
pub struct MatchTestResult {
    /// Root the path is tested against
    pub root: String,
    /// Candidate path
    pub path: String,
    /// Candidate relative to the root
    pub relative: String,
    /// Whether every matcher accepted the path
    pub accepted: bool,
    /// Per-matcher outcome
    pub matchers: Vec<MatcherOutcome>,
}

/// Outcome of a single matcher
#[derive(Debug, Serialize)]
pub struct MatcherOutcome {
    /// Matcher in display form
    pub matcher: String,
    /// Whether it accepted the path
    pub matched: bool,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl FindResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for path in &self.matches {
            println!("{path}");
        }
        if self.matches.is_empty() {
            eprintln!("{}", format!("No matching paths under {}.", self.root).dimmed());
        }
    }
}

impl KeyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}  {}", "key".bold(), self.key.cyan());
        println!("{}  {}", "path".bold(), self.path);
        let file = self
            .local_file
            .as_deref()
            .map_or_else(|| "(not local)".dimmed(), Colorize::normal);
        println!("{}  {}", "file".bold(), file);
        let exists = if self.exists {
            "yes".green()
        } else {
            "no".yellow()
        };
        println!("{}  {}", "exists".bold(), exists);
    }
}

impl MatchTestResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Testing {} (relative: {})\n", self.path, self.relative.cyan());
        for outcome in &self.matchers {
            let mark = if outcome.matched {
                "match".green().bold()
            } else {
                "miss".red().bold()
            };
            println!("  {mark}  {}", outcome.matcher);
        }
        println!();
        if self.accepted {
            println!("{} path is accepted", "OK".green().bold());
        } else {
            println!("{} path is rejected", "NO".red().bold());
        }
    }
}
