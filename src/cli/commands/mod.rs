//! Command implementations

mod find;
mod key;
mod test_path;

pub use find::find;
pub use key::key;
pub use test_path::test_path;

use std::path::Path;

use anyhow::Context;
use respath::{Config, PathMatcher};

use super::app::MatcherArgs;

/// Load the explicit config, or discover one in the walk root
fn load_config(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Ok(Config::load(path)?)
        },
        None => Config::discover(root)
            .with_context(|| format!("failed to load config from {}", root.display())),
    }
}

/// Config matchers followed by the ones given as flags
fn collect_matchers(config: &Config, args: &MatcherArgs) -> anyhow::Result<Vec<PathMatcher>> {
    let mut matchers = config.matchers.clone();
    matchers.extend(args.to_matchers().context("invalid matcher")?);
    Ok(matchers)
}
