//! Path matcher service - decides which paths a traversal includes
//!
//! A [`PathMatcher`] is a predicate over `(candidate, root)`. Pattern based
//! matchers test the candidate relative to the root, so the same matcher can
//! be reused under different roots.
//!
//! # Examples
//!
//! ```
//! use respath::core::models::FsPath;
//! use respath::core::services::PathMatcher;
//!
//! let root = FsPath::new("/repo");
//! let rust = PathMatcher::pattern("src/**/*.rs").unwrap();
//! assert!(rust.matches(&FsPath::new("/repo/src/a/b.rs"), &root));
//! assert_eq!(rust.to_string(), "pattern(src/**/*.rs)");
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::models::{AntPattern, FsPath, RegexPattern};
use crate::error::Result;

/// Predicate deciding whether a path under a root is included
///
/// Matchers compare and hash by kind and configuration. Serialization keeps
/// only the configuration; compiled patterns are rebuilt on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathMatcher {
    /// The candidate is an existing regular file
    File,

    /// The candidate is an existing directory
    Directory,

    /// The relative path matches an Ant-style glob
    Pattern {
        /// Compiled glob
        pattern: AntPattern,
    },

    /// The relative path fully matches a regular expression
    Regex {
        /// Compiled expression
        regex: RegexPattern,
    },

    /// The file name has one of the given extensions (without the dot)
    Extensions {
        /// Accepted extensions
        extensions: BTreeSet<String>,
    },

    /// Inverts the inner matcher
    Not {
        /// Matcher to invert
        matcher: Box<PathMatcher>,
    },

    /// All inner matchers accept (true when empty)
    All {
        /// Matchers that must all accept
        matchers: Vec<PathMatcher>,
    },

    /// At least one inner matcher accepts (false when empty)
    Any {
        /// Matchers of which one must accept
        matchers: Vec<PathMatcher>,
    },
}

impl PathMatcher {
    /// Matcher for an Ant-style glob
    pub fn pattern(source: &str) -> Result<Self> {
        Ok(Self::Pattern {
            pattern: AntPattern::new(source)?,
        })
    }

    /// Matcher for a regular expression
    pub fn regex(source: &str) -> Result<Self> {
        Ok(Self::Regex {
            regex: RegexPattern::new(source)?,
        })
    }

    /// Matcher for file extensions; a leading dot is ignored
    #[must_use]
    pub fn extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Extensions {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_string())
                .collect(),
        }
    }

    /// Invert a matcher
    #[must_use]
    pub fn negate(matcher: Self) -> Self {
        Self::Not {
            matcher: Box::new(matcher),
        }
    }

    /// Conjunction of matchers
    #[must_use]
    pub const fn all(matchers: Vec<Self>) -> Self {
        Self::All { matchers }
    }

    /// Disjunction of matchers
    #[must_use]
    pub const fn any(matchers: Vec<Self>) -> Self {
        Self::Any { matchers }
    }

    /// Test a candidate path against a root
    ///
    /// Pattern and regex matchers test `root.relativize(path)`. The candidate
    /// is expected to lie under the root; anything else is tested as given.
    #[must_use]
    pub fn matches(&self, path: &FsPath, root: &FsPath) -> bool {
        match self {
            Self::File => path.is_file(),
            Self::Directory => path.is_dir(),
            Self::Pattern { pattern } => pattern.matches(root.relativize(path).as_str()),
            Self::Regex { regex } => regex.is_match(root.relativize(path).as_str()),
            Self::Extensions { extensions } => {
                path.extension().is_some_and(|ext| extensions.contains(ext))
            },
            Self::Not { matcher } => !matcher.matches(path, root),
            Self::All { matchers } => matchers.iter().all(|m| m.matches(path, root)),
            Self::Any { matchers } => matchers.iter().any(|m| m.matches(path, root)),
        }
    }
}

fn write_list(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    items: &[PathMatcher],
) -> std::fmt::Result {
    write!(f, "{name}(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, ")")
}

impl std::fmt::Display for PathMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file()"),
            Self::Directory => write!(f, "directory()"),
            Self::Pattern { pattern } => write!(f, "pattern({pattern})"),
            Self::Regex { regex } => write!(f, "regex({regex})"),
            Self::Extensions { extensions } => {
                let joined: Vec<&str> = extensions.iter().map(String::as_str).collect();
                write!(f, "extensions({})", joined.join(", "))
            },
            Self::Not { matcher } => write!(f, "not({matcher})"),
            Self::All { matchers } => write_list(f, "all", matchers),
            Self::Any { matchers } => write_list(f, "any", matchers),
        }
    }
}
