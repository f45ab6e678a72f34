//! Parameterized tests for Ant-style glob semantics
//!
//! These tests use test-case to run the same assertion over many
//! pattern/path pairs.

use respath::{AntPattern, ResourceError};
use test_case::test_case;

fn glob(pattern: &str, path: &str) -> bool {
    AntPattern::new(pattern).unwrap().matches(path)
}

// =============================================================================
// Single-segment wildcards
// =============================================================================

#[test_case("*.txt", "a.txt", true ; "star matches file in root")]
#[test_case("*.txt", "dir/a.txt", false ; "star does not cross separator")]
#[test_case("*.txt", ".txt", true ; "star matches empty run")]
#[test_case("a*", "a", true ; "trailing star matches nothing")]
#[test_case("a*b*c", "aXbYc", true ; "multiple stars")]
#[test_case("a*b*c", "aXbY", false ; "multiple stars missing suffix")]
#[test_case("a?c", "abc", true ; "question mark matches one char")]
#[test_case("a?c", "ac", false ; "question mark needs a char")]
#[test_case("a?c", "abbc", false ; "question mark matches only one char")]
#[test_case("a?c", "a/c", false ; "question mark never matches separator")]
#[test_case("readme.md", "README.md", false ; "literal match is case sensitive")]
fn test_segment_wildcards(pattern: &str, path: &str, expected: bool) {
    assert_eq!(glob(pattern, path), expected);
}

// =============================================================================
// Any-depth segments
// =============================================================================

#[test_case("**/*.txt", "a.txt", true ; "double star matches zero segments")]
#[test_case("**/*.txt", "dir/sub/a.txt", true ; "double star matches many segments")]
#[test_case("src/**", "src", true ; "trailing double star matches the directory")]
#[test_case("src/**", "src/a/b/c.rs", true ; "trailing double star matches below")]
#[test_case("src/**", "srcx/a.rs", false ; "trailing double star needs whole segment")]
#[test_case("src/**/test/*.rs", "src/test/a.rs", true ; "inner double star zero segments")]
#[test_case("src/**/test/*.rs", "src/a/b/test/a.rs", true ; "inner double star many segments")]
#[test_case("src/**/test/*.rs", "src/a/b/tests/a.rs", false ; "inner double star literal mismatch")]
#[test_case("**/**/a", "x/a", true ; "consecutive double stars collapse")]
#[test_case("**", "", true ; "double star matches empty path")]
#[test_case("a**b", "aXXb", true ; "double star inside segment behaves as star")]
#[test_case("a**b", "aX/Xb", false ; "double star inside segment stays in segment")]
fn test_any_depth(pattern: &str, path: &str, expected: bool) {
    assert_eq!(glob(pattern, path), expected);
}

// =============================================================================
// Normalization of the pattern
// =============================================================================

#[test_case("src\\*.rs", "src/a.rs", true ; "backslashes become separators")]
#[test_case("/src/*.rs", "src/a.rs", true ; "leading separator is dropped")]
#[test_case("src/", "src/a/b.rs", true ; "trailing separator means everything below")]
fn test_normalization(pattern: &str, path: &str, expected: bool) {
    assert_eq!(glob(pattern, path), expected);
}

#[test_case("" ; "empty pattern")]
#[test_case("a//b" ; "empty segment")]
#[test_case("/" ; "separator alone")]
fn test_rejected(pattern: &str) {
    let err = AntPattern::new(pattern).unwrap_err();
    assert!(matches!(err, ResourceError::PatternCompile { .. }), "{err:?}");
}

#[test]
fn source_is_kept_verbatim() {
    let pattern = AntPattern::new("src\\**\\*.rs").unwrap();
    assert_eq!(pattern.source(), "src\\**\\*.rs");
    assert_eq!(pattern.to_string(), "src\\**\\*.rs");
}
