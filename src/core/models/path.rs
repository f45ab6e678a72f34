//! Filesystem path identifiers
//!
//! An [`FsPath`] is the identifier the filesystem registry hands out. It is
//! stored normalized to forward slashes so that equality and hashing do not
//! depend on how the path was spelled, and it can be turned into a `file://`
//! URI and back.
//!
//! # Examples
//!
//! ```
//! use respath::core::models::FsPath;
//!
//! let root = FsPath::new("/work/project");
//! let file = FsPath::new("/work/project/src/lib.rs");
//! assert_eq!(root.relativize(&file).as_str(), "src/lib.rs");
//!
//! let parsed = FsPath::from_uri("file:///work/project/src/lib.rs").unwrap();
//! assert_eq!(parsed, file);
//! ```

use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use url::Url;

use crate::error::{ResourceError, Result};

/// Location of a (possibly not yet existing) file or directory
///
/// Two paths are equal iff their normalized forms are equal. Normalization
/// converts backslashes to forward slashes, collapses repeated separators,
/// drops `.` segments and trailing separators, and resolves `..` against the
/// preceding segment. A `..` that climbs above a rooted path is dropped; one
/// that climbs above a relative path is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FsPath {
    /// Normalized form, always forward slashes
    inner: String,
}

impl FsPath {
    /// Create a path from any path-like input, normalizing it
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        Self {
            inner: normalize(&raw),
        }
    }

    /// The empty relative path (what a root relativizes to against itself)
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Parse a location string in URI syntax
    ///
    /// Accepts `file:` URIs (`file:///tmp/x.txt`, `file://server/share/x`)
    /// and scheme-less URI references (`/tmp/x.txt`, `src/lib.rs`).
    /// References are percent-decoded and normalized like [`FsPath::new`].
    pub fn from_uri(uri: &str) -> Result<Self> {
        if uri.is_empty() {
            return Err(ResourceError::parse(uri, "empty location"));
        }

        match Url::parse(uri) {
            // Windows drive letters parse as one-letter schemes
            Ok(url) if url.scheme().len() == 1 => Ok(Self::new(uri)),
            Ok(url) => Self::from_file_url(uri, &url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Self::from_reference(uri),
            Err(e) => Err(uri_error(uri, e)),
        }
    }

    /// Resolve a scheme-less URI reference
    ///
    /// Rooted references resolve against `file:///`; relative ones are only
    /// decoded, so a leading `..` survives.
    fn from_reference(uri: &str) -> Result<Self> {
        if uri.starts_with('/') {
            let base = Url::parse("file:///").map_err(|e| uri_error(uri, e))?;
            let url = base.join(uri).map_err(|e| uri_error(uri, e))?;
            return Self::from_file_url(uri, &url);
        }

        if uri.contains(['?', '#']) {
            return Err(ResourceError::parse(
                uri,
                "query and fragment are not allowed in a file location",
            ));
        }
        let decoded = percent_decode_str(uri)
            .decode_utf8()
            .map_err(|e| ResourceError::parse(uri, format!("invalid percent-encoding: {e}")))?;
        Ok(Self::new(decoded.as_ref()))
    }

    fn from_file_url(uri: &str, url: &Url) -> Result<Self> {
        if url.scheme() != "file" {
            return Err(ResourceError::parse(
                uri,
                format!("unsupported scheme '{}', expected 'file'", url.scheme()),
            ));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ResourceError::parse(
                uri,
                "query and fragment are not allowed in a file location",
            ));
        }

        match url.host_str() {
            Some(host) if !host.is_empty() && host != "localhost" => {
                // Network share: decode the path portion without the host
                let local =
                    Url::parse(&format!("file://{}", url.path())).map_err(|e| uri_error(uri, e))?;
                let path = local
                    .to_file_path()
                    .map_err(|()| ResourceError::parse(uri, "not a valid file path"))?;
                let path = Self::new(path);
                Ok(Self {
                    inner: format!("//{host}{}", path.inner),
                })
            },
            _ => url
                .to_file_path()
                .map(Self::new)
                .map_err(|()| ResourceError::parse(uri, "not a valid file path")),
        }
    }

    /// Get the normalized string representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether this is the empty relative path
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Convert to a platform-native `PathBuf` for I/O
    ///
    /// The empty path is the current directory.
    #[must_use]
    pub fn to_native(&self) -> PathBuf {
        if self.inner.is_empty() {
            return PathBuf::from(".");
        }
        PathBuf::from(&self.inner)
    }

    /// Whether the path is absolute (rooted, network, or drive-qualified)
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || self.to_native().is_absolute()
    }

    /// Check if this appears to be a network path (`//server/share`)
    #[must_use]
    pub fn is_network_path(&self) -> bool {
        self.inner.starts_with("//")
    }

    /// Canonical identifier string
    ///
    /// Absolute local paths become `file:///...` URIs, network paths become
    /// `file://server/...`, relative paths stay in normalized form. The
    /// result parses back to an equal path with [`FsPath::from_uri`].
    #[must_use]
    pub fn id_string(&self) -> String {
        if self.is_network_path() {
            return format!("file:{}", encode_path(&self.inner));
        }
        if self.is_absolute() {
            if let Ok(url) = Url::from_file_path(self.to_native()) {
                return url.to_string();
            }
        }
        encode_path(&self.inner)
    }

    /// Compute the portion of `other` below `self`
    ///
    /// `other` equal to `self` yields the empty path. A path that does not lie
    /// under `self` is returned unchanged; callers are expected to only pass
    /// descendants.
    #[must_use]
    pub fn relativize(&self, other: &Self) -> Self {
        if self.inner.is_empty() {
            return other.clone();
        }
        if self.inner == other.inner {
            return Self::empty();
        }

        let prefix = if self.inner.ends_with('/') {
            self.inner.clone()
        } else {
            format!("{}/", self.inner)
        };
        other.inner.strip_prefix(&prefix).map_or_else(
            || other.clone(),
            |rest| Self {
                inner: rest.to_string(),
            },
        )
    }

    /// Join this path with a relative segment
    #[must_use]
    pub fn join(&self, segment: &str) -> Self {
        if self.inner.is_empty() {
            return Self::new(segment);
        }
        Self::new(format!("{}/{segment}", self.inner))
    }

    /// Get the parent directory
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(0) if self.inner.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) if idx > 0 && !(self.is_network_path() && idx < 2) => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            None if !self.inner.is_empty() => Some(Self::empty()),
            _ => None,
        }
    }

    /// Get the last path component
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension of the last component, without the dot
    ///
    /// Dotfiles like `.gitignore` have no extension.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Native local file for this path, if it is locally addressable
    #[must_use]
    pub fn to_local_file(&self) -> Option<PathBuf> {
        if self.is_network_path() {
            None
        } else {
            Some(self.to_native())
        }
    }

    /// Check if this path exists on the filesystem
    #[must_use]
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is an existing regular file
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Check if this is an existing directory
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

fn uri_error(uri: &str, source: url::ParseError) -> ResourceError {
    ResourceError::Parse {
        input: uri.to_string(),
        message: format!("URI parsing failed: {source}"),
        source: Some(source),
    }
}

fn normalize(raw: &str) -> String {
    let network = raw.starts_with("//") && !raw.starts_with("///");
    let rooted = raw.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/').filter(|s| !s.is_empty() && *s != ".") {
        if segment != ".." {
            segments.push(segment);
            continue;
        }
        let at_top = segments.last().is_none_or(|&last| last == "..");
        if at_top {
            // Climbing above a rooted path stays at the root
            if !rooted {
                segments.push(segment);
            }
        } else if !(network && segments.len() == 1) {
            // The server name of a network path is not a directory
            segments.pop();
        }
    }
    let body = segments.join("/");

    if network {
        format!("//{body}")
    } else if rooted {
        format!("/{body}")
    } else {
        body
    }
}

/// Characters escaped in relative and network id strings: everything that
/// would change how the string parses as a URI reference, `:` included so a
/// first segment is never read as a scheme.
const PATH_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_ESCAPES).to_string()
}

impl AsRef<Path> for FsPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for FsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for FsPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FsPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for FsPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for FsPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
