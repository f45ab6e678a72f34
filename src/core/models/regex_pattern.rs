//! Regular expressions over relative paths
//!
//! A [`RegexPattern`] always matches the whole input: `a.*b` accepts `axxxb`
//! but not `axxxbX`. Only the source text is serialized; the compiled form is
//! rebuilt whenever a value is constructed, deserialization included.

use std::hash::{Hash, Hasher};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, Result};

/// A compiled, fully anchored regular expression
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegexPattern {
    source: String,
    anchored: Regex,
}

impl RegexPattern {
    /// Compile a regular expression
    pub fn new(source: &str) -> Result<Self> {
        // Validate the expression on its own first, so that unbalanced input
        // like `a)(b` is not accepted once wrapped in the anchoring group.
        Regex::new(source).map_err(|e| ResourceError::pattern(source, e.to_string()))?;
        let anchored = Regex::new(&format!("^(?:{source})$"))
            .map_err(|e| ResourceError::pattern(source, e.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    /// The expression text this was compiled from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the entire input matches
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        self.anchored.is_match(input)
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RegexPattern {}

impl Hash for RegexPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl TryFrom<String> for RegexPattern {
    type Error = ResourceError;

    fn try_from(source: String) -> Result<Self> {
        Self::new(&source)
    }
}

impl From<RegexPattern> for String {
    fn from(pattern: RegexPattern) -> Self {
        pattern.source
    }
}

impl std::fmt::Display for RegexPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
