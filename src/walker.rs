//! Walker - finds paths under a root accepted by a set of matchers
//!
//! The walker enumerates descendants of its root and asks each matcher
//! whether the candidate, relative to the root, should be included.
//!
//! # Examples
//!
//! ```no_run
//! use respath::core::services::PathMatcher;
//! use respath::walker::Walker;
//!
//! let walker = Walker::new(".").unwrap();
//! let matchers = [PathMatcher::File, PathMatcher::pattern("src/**/*.rs").unwrap()];
//! let files = walker.walk(&matchers).unwrap();
//! ```

use std::path::Path;

use log::{debug, trace};
use walkdir::WalkDir;

use crate::config::WalkConfig;
use crate::core::models::{FsPath, FsResource};
use crate::core::services::PathMatcher;
use crate::error::{ResourceError, Result};

/// Traversal over the descendants of a root directory
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root directory to walk
    root: FsPath,

    /// Follow symbolic links
    follow_links: bool,

    /// Descend into and report entries whose name starts with `.`
    include_hidden: bool,

    /// Maximum depth below the root, unlimited when `None`
    max_depth: Option<usize>,
}

impl Walker {
    /// Create a walker rooted at the given path
    ///
    /// A file root walks its parent directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(ResourceError::RootNotFound(root));
        }

        let root = if root.is_file() {
            root.parent()
                .ok_or_else(|| ResourceError::RootNotFound(root.clone()))?
                .to_path_buf()
        } else {
            root
        };

        let defaults = WalkConfig::default();
        Ok(Self {
            root: FsPath::new(root),
            follow_links: defaults.follow_links,
            include_hidden: defaults.include_hidden,
            max_depth: defaults.max_depth,
        })
    }

    /// Create a walker with options from a config
    pub fn from_config(root: impl AsRef<Path>, config: &WalkConfig) -> Result<Self> {
        Ok(Self::new(root)?
            .follow_links(config.follow_links)
            .include_hidden(config.include_hidden)
            .max_depth(config.max_depth))
    }

    /// Set whether symbolic links are followed
    #[must_use]
    pub const fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set whether hidden entries are included
    #[must_use]
    pub const fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Limit how deep below the root the walk goes
    #[must_use]
    pub const fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Get the root path
    #[must_use]
    pub const fn root(&self) -> &FsPath {
        &self.root
    }

    /// Check if a single path is accepted by all matchers
    #[must_use]
    pub fn accepts(&self, matchers: &[PathMatcher], path: &FsPath) -> bool {
        matchers.iter().all(|m| m.matches(path, &self.root))
    }

    /// Find all entries accepted by every matcher
    ///
    /// Returns paths relative to the root, sorted. The root itself is never
    /// reported. An empty matcher list accepts everything.
    pub fn walk(&self, matchers: &[PathMatcher]) -> Result<Vec<FsPath>> {
        let mut matches = Vec::new();
        let root = self.root.to_native();
        debug!("walking {} with {} matcher(s)", self.root, matchers.len());

        let mut walk = WalkDir::new(&root).min_depth(1).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walk = walk.max_depth(depth);
        }

        let include_hidden = self.include_hidden;
        for entry in walk
            .into_iter()
            // Never prune the root itself, even when its name is hidden
            .filter_entry(|e| include_hidden || e.depth() == 0 || !Self::is_hidden(e))
        {
            let entry = entry?;
            let candidate = FsPath::new(entry.path());

            if self.accepts(matchers, &candidate) {
                trace!("accepted {candidate}");
                matches.push(self.root.relativize(&candidate));
            }
        }

        // Sort for deterministic output
        matches.sort();
        Ok(matches)
    }

    /// Find all accepted entries as resources with absolute paths
    pub fn walk_resources(&self, matchers: &[PathMatcher]) -> Result<Vec<FsResource>> {
        Ok(self
            .walk(matchers)?
            .iter()
            .map(|relative| FsResource::new(self.root.join(relative.as_str())))
            .collect())
    }

    /// Check if an entry is hidden (starts with .)
    fn is_hidden(entry: &walkdir::DirEntry) -> bool {
        entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
    }
}
