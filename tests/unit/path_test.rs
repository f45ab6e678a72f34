//! Tests for FsPath parsing, normalization and relativization

use std::path::PathBuf;

use respath::{FsPath, ResourceError};
use test_case::test_case;

// =============================================================================
// Location parsing
// =============================================================================

#[test_case("/tmp/x.txt", "/tmp/x.txt" ; "absolute reference")]
#[test_case("file:///tmp/x.txt", "/tmp/x.txt" ; "file uri")]
#[test_case("file://localhost/tmp/x.txt", "/tmp/x.txt" ; "localhost host")]
#[test_case("/tmp/a%20b.txt", "/tmp/a b.txt" ; "percent decoding")]
#[test_case("/tmp/./a/../x.txt", "/tmp/x.txt" ; "dot segments resolved")]
#[test_case("src/lib.rs", "src/lib.rs" ; "relative reference")]
#[test_case("file://server/share/x.txt", "//server/share/x.txt" ; "network share")]
fn test_from_uri(input: &str, expected: &str) {
    assert_eq!(FsPath::from_uri(input).unwrap().as_str(), expected);
}

#[test_case("" ; "empty")]
#[test_case("http://example.com/x" ; "foreign scheme")]
#[test_case("file:///tmp/x.txt?raw" ; "query")]
#[test_case("/tmp/x.txt#frag" ; "fragment")]
#[test_case("file://[::1/x" ; "malformed host")]
fn test_from_uri_rejected(input: &str) {
    let err = FsPath::from_uri(input).unwrap_err();
    assert!(matches!(err, ResourceError::Parse { .. }), "{err:?}");
}

#[test]
fn parse_error_carries_cause() {
    let err = FsPath::from_uri("file://[::1/x").unwrap_err();
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("file://[::1/x"));
}

// =============================================================================
// Normalization
// =============================================================================

#[test_case("/tmp//a/", "/tmp/a" ; "repeated and trailing separators")]
#[test_case("a\\b\\c", "a/b/c" ; "backslashes")]
#[test_case("./a/./b", "a/b" ; "dot segments")]
#[test_case("//server/share", "//server/share" ; "network prefix kept")]
fn test_normalization(input: &str, expected: &str) {
    assert_eq!(FsPath::new(input).as_str(), expected);
}

#[test]
fn equality_ignores_spelling() {
    assert_eq!(FsPath::new("/tmp//x/"), FsPath::new("/tmp/x"));
    assert_eq!(FsPath::from_uri("file:///tmp/x").unwrap(), FsPath::new("/tmp/x"));
}

// =============================================================================
// Identifier strings
// =============================================================================

#[test_case("/tmp/x.txt" ; "absolute")]
#[test_case("/tmp/a b#c.txt" ; "characters needing escapes")]
#[test_case("//server/share/x.txt" ; "network")]
#[test_case("src/lib.rs" ; "relative")]
fn test_id_string_parses_back(path: &str) {
    let original = FsPath::new(path);
    let id = original.id_string();
    assert_eq!(FsPath::from_uri(&id).unwrap(), original, "{id}");
}

#[test]
fn absolute_id_is_file_uri() {
    assert_eq!(FsPath::new("/tmp/x.txt").id_string(), "file:///tmp/x.txt");
}

// =============================================================================
// Relativization and local files
// =============================================================================

#[test]
fn relativize() {
    let root = FsPath::new("/repo");
    assert_eq!(root.relativize(&FsPath::new("/repo/src/a.rs")).as_str(), "src/a.rs");
    assert!(root.relativize(&FsPath::new("/repo")).is_empty());
    // Sibling with a shared name prefix is not a descendant
    assert_eq!(root.relativize(&FsPath::new("/repository/a")).as_str(), "/repository/a");
}

#[test]
fn local_file() {
    assert_eq!(FsPath::new("/tmp/x").to_local_file(), Some(PathBuf::from("/tmp/x")));
    assert_eq!(FsPath::new("//server/share/x").to_local_file(), None);
}
