//! Qualified resource key strings
//!
//! A key string has the form `qualifier:id`. The qualifier names the registry
//! that owns the id; the id is registry specific. Short-form keys without a
//! qualifier are accepted by any registry.
//!
//! # Examples
//!
//! ```
//! use respath::core::models::ResourceKeyString;
//!
//! let key = ResourceKeyString::parse("java:/tmp/x.txt");
//! assert_eq!(key.qualifier(), Some("java"));
//! assert_eq!(key.id(), "/tmp/x.txt");
//!
//! let short = ResourceKeyString::parse("/tmp/x.txt");
//! assert_eq!(short.qualifier(), None);
//! assert!(short.qualifier_matches_or_missing("java"));
//! ```

use serde::{Deserialize, Serialize};

/// Separator between qualifier and id
pub const QUALIFIER_SEPARATOR: char = ':';

/// A key string whose qualifier may be missing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourceKeyString {
    qualifier: Option<String>,
    id: String,
}

/// A key string that always carries a qualifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct QualifiedResourceKeyString {
    qualifier: String,
    id: String,
}

impl ResourceKeyString {
    /// Parse a key string
    ///
    /// The text before the first `:` is the qualifier when it is a valid
    /// qualifier (see [`is_valid_qualifier`]). An empty qualifier (`:id`)
    /// counts as missing. Anything else is an id without qualifier, so a
    /// drive path such as `C:/x.txt` keeps its drive letter.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.split_once(QUALIFIER_SEPARATOR) {
            Some(("", id)) => Self::unqualified(id),
            Some((qualifier, id)) if is_valid_qualifier(qualifier) => Self::of(qualifier, id),
            _ => Self::unqualified(s),
        }
    }

    /// Create a key string with a qualifier
    #[must_use]
    pub fn of(qualifier: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            id: id.into(),
        }
    }

    /// Create a key string without a qualifier
    #[must_use]
    pub fn unqualified(id: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            id: id.into(),
        }
    }

    /// The qualifier, if present
    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// The registry-specific id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the key carries a qualifier
    #[must_use]
    pub const fn has_qualifier(&self) -> bool {
        self.qualifier.is_some()
    }

    /// True if the qualifier equals `qualifier` or is missing
    #[must_use]
    pub fn qualifier_matches_or_missing(&self, qualifier: &str) -> bool {
        self.qualifier.as_deref().is_none_or(|q| q == qualifier)
    }
}

impl QualifiedResourceKeyString {
    /// Create a qualified key string
    #[must_use]
    pub fn of(qualifier: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            id: id.into(),
        }
    }

    /// Compose `qualifier:id` without building a key value
    #[must_use]
    pub fn compose(qualifier: &str, id: &str) -> String {
        format!("{qualifier}{QUALIFIER_SEPARATOR}{id}")
    }

    /// The qualifier
    #[must_use]
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// The registry-specific id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Check if a string can be used as a registry qualifier
///
/// A qualifier is an unreserved token (`[A-Za-z0-9._~-]`) of at least two
/// characters. Single letters are drive letters.
#[must_use]
pub fn is_valid_qualifier(s: &str) -> bool {
    s.len() >= 2
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '~' | '-'))
}

impl std::fmt::Display for ResourceKeyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.qualifier {
            Some(q) => write!(f, "{q}{QUALIFIER_SEPARATOR}{}", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

impl std::fmt::Display for QualifiedResourceKeyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::compose(&self.qualifier, &self.id))
    }
}

impl std::str::FromStr for ResourceKeyString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ResourceKeyString {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for ResourceKeyString {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ResourceKeyString> for String {
    fn from(key: ResourceKeyString) -> Self {
        key.to_string()
    }
}

impl From<QualifiedResourceKeyString> for ResourceKeyString {
    fn from(key: QualifiedResourceKeyString) -> Self {
        Self {
            qualifier: Some(key.qualifier),
            id: key.id,
        }
    }
}

impl From<QualifiedResourceKeyString> for String {
    fn from(key: QualifiedResourceKeyString) -> Self {
        key.to_string()
    }
}
