//! Tests for respath.toml loading

use std::fs;

use respath::config::CONFIG_FILE;
use respath::{Config, ConfigError, PathMatcher, ResourceError, Walker};

use crate::common::{TestTree, strings};

#[test]
fn discover_in_root() {
    let tree = TestTree::new();
    tree.add_file(
        CONFIG_FILE,
        r#"
[walk]
max_depth = 2

[[matchers]]
kind = "file"

[[matchers]]
kind = "extensions"
extensions = ["rs"]
"#,
    );

    let config = Config::discover(tree.path()).unwrap();
    assert_eq!(config.walk.max_depth, Some(2));
    assert!(config.walk.follow_links);
    assert!(!config.walk.include_hidden);

    let walker = Walker::from_config(tree.path(), &config.walk).unwrap();
    let found = walker.walk(&config.matchers).unwrap();
    assert_eq!(strings(&found), vec!["src/lib.rs"]);
}

#[test]
fn empty_file_is_default() {
    let tree = TestTree::new();
    tree.add_file(CONFIG_FILE, "");
    assert_eq!(Config::discover(tree.path()).unwrap(), Config::default());
}

#[test]
fn malformed_toml() {
    let tree = TestTree::new();
    tree.add_file(CONFIG_FILE, "[walk\nmax_depth = ");
    let err = Config::discover(tree.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn bad_regex_names_the_source() {
    let tree = TestTree::new();
    tree.add_file(
        CONFIG_FILE,
        r#"
[[matchers]]
kind = "regex"
regex = "src/(unclosed"
"#,
    );
    let err = Config::discover(tree.path()).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE));
    assert!(format!("{err:?}").contains("src/(unclosed"));
}

#[test]
fn unreadable_path_is_io_error() {
    let tree = TestTree::new();
    // A directory where the file is expected
    fs::create_dir(tree.path().join(CONFIG_FILE)).unwrap();
    let err = Config::discover(tree.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn config_error_converts_to_resource_error() {
    let tree = TestTree::new();
    tree.add_file(CONFIG_FILE, "matchers = 3");
    let err: ResourceError = Config::discover(tree.path()).unwrap_err().into();
    assert!(matches!(err, ResourceError::Config(ConfigError::Parse { .. })));
}

#[test]
fn saved_config_is_discovered() {
    let tree = TestTree::new();
    let config = Config {
        matchers: vec![PathMatcher::negate(PathMatcher::pattern("docs/").unwrap())],
        ..Config::default()
    };
    config.save(&tree.path().join(CONFIG_FILE)).unwrap();
    assert_eq!(Config::discover(tree.path()).unwrap(), config);
}
