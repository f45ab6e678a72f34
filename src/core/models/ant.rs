//! Ant-style glob patterns
//!
//! Patterns are matched against `/`-separated relative paths:
//!
//! - `*` matches any run of characters within one path segment
//! - `?` matches exactly one character within one path segment
//! - `**` as a whole segment matches zero or more segments
//! - a trailing `/` is shorthand for `/**`
//!
//! # Examples
//!
//! ```
//! use respath::core::models::AntPattern;
//!
//! let p = AntPattern::new("**/*.txt").unwrap();
//! assert!(p.matches("a.txt"));
//! assert!(p.matches("dir/sub/a.txt"));
//!
//! let p = AntPattern::new("*.txt").unwrap();
//! assert!(!p.matches("dir/a.txt"));
//! ```

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, Result};

/// One element of a segment pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// A literal character
    Char(char),
    /// `?`
    AnyChar,
    /// `*`
    AnyRun,
}

/// One `/`-delimited piece of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `**`
    AnyDepth,
    /// Anything else, matched against exactly one path segment
    Part(Vec<Token>),
}

/// A compiled Ant-style glob pattern
///
/// Equality and hashing use the pattern source, so two patterns compiled from
/// the same text are interchangeable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AntPattern {
    source: String,
    segments: Vec<Segment>,
}

impl AntPattern {
    /// Compile a pattern
    ///
    /// Backslashes are read as separators and a leading `/` is ignored.
    /// Empty patterns and empty segments (`a//b`) are rejected.
    pub fn new(source: &str) -> Result<Self> {
        let segments = compile(source)?;
        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The pattern text this was compiled from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Test a relative, `/`-separated path
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        match_segments(&self.segments, &parts)
    }
}

fn compile(source: &str) -> Result<Vec<Segment>> {
    if source.is_empty() {
        return Err(ResourceError::pattern(source, "pattern is empty"));
    }

    let normalized = source.replace('\\', "/");
    let body = normalized.strip_prefix('/').unwrap_or(&normalized);
    let (body, recursive_tail) = match body.strip_suffix('/') {
        Some(stripped) => (stripped, true),
        None => (body, false),
    };

    let mut segments = Vec::new();
    if !body.is_empty() {
        for raw in body.split('/') {
            if raw.is_empty() {
                return Err(ResourceError::pattern(source, "pattern contains an empty segment"));
            }
            push_segment(&mut segments, parse_segment(raw));
        }
    }
    if recursive_tail {
        push_segment(&mut segments, Segment::AnyDepth);
    }
    if segments.is_empty() {
        return Err(ResourceError::pattern(source, "pattern is empty"));
    }

    Ok(segments)
}

fn push_segment(segments: &mut Vec<Segment>, segment: Segment) {
    // Consecutive `**` are equivalent to one
    if segment == Segment::AnyDepth && segments.last() == Some(&Segment::AnyDepth) {
        return;
    }
    segments.push(segment);
}

fn parse_segment(raw: &str) -> Segment {
    if raw == "**" {
        return Segment::AnyDepth;
    }

    let mut tokens = Vec::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '*' if tokens.last() == Some(&Token::AnyRun) => {},
            '*' => tokens.push(Token::AnyRun),
            '?' => tokens.push(Token::AnyChar),
            c => tokens.push(Token::Char(c)),
        }
    }
    Segment::Part(tokens)
}

/// Match path segments, backtracking to the most recent `**`
fn match_segments(segments: &[Segment], parts: &[&str]) -> bool {
    let (mut s, mut p) = (0, 0);
    let mut resume: Option<(usize, usize)> = None;

    while p < parts.len() {
        match segments.get(s) {
            Some(Segment::AnyDepth) => {
                resume = Some((s, p));
                s += 1;
                continue;
            },
            Some(Segment::Part(tokens)) if match_tokens(tokens, parts[p]) => {
                s += 1;
                p += 1;
                continue;
            },
            _ => {},
        }

        match resume {
            Some((rs, rp)) => {
                // Let the `**` swallow one more segment
                s = rs + 1;
                p = rp + 1;
                resume = Some((rs, rp + 1));
            },
            None => return false,
        }
    }

    segments[s..].iter().all(|seg| *seg == Segment::AnyDepth)
}

/// Match one path segment, backtracking to the most recent `*`
fn match_tokens(tokens: &[Token], name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    let (mut t, mut c) = (0, 0);
    let mut resume: Option<(usize, usize)> = None;

    while c < chars.len() {
        match tokens.get(t) {
            Some(Token::AnyRun) => {
                resume = Some((t, c));
                t += 1;
                continue;
            },
            Some(Token::AnyChar) => {
                t += 1;
                c += 1;
                continue;
            },
            Some(Token::Char(expected)) if *expected == chars[c] => {
                t += 1;
                c += 1;
                continue;
            },
            _ => {},
        }

        match resume {
            Some((rt, rc)) => {
                t = rt + 1;
                c = rc + 1;
                resume = Some((rt, rc + 1));
            },
            None => return false,
        }
    }

    tokens[t..].iter().all(|tok| *tok == Token::AnyRun)
}

impl PartialEq for AntPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for AntPattern {}

impl Hash for AntPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl TryFrom<String> for AntPattern {
    type Error = ResourceError;

    fn try_from(source: String) -> Result<Self> {
        let segments = compile(&source)?;
        Ok(Self { source, segments })
    }
}

impl From<AntPattern> for String {
    fn from(pattern: AntPattern) -> Self {
        pattern.source
    }
}

impl std::str::FromStr for AntPattern {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for AntPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
