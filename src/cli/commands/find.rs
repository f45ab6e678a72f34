//! Walk a root and print accepted paths

use std::path::Path;

use anyhow::Context;
use log::debug;
use respath::Walker;
use respath::output::{FindResult, OutputMode};

use super::{collect_matchers, load_config};
use crate::cli::app::{MatcherArgs, WalkArgs};

/// Find paths under `root` accepted by every matcher
pub fn find(
    root: &Path,
    args: &MatcherArgs,
    walk: WalkArgs,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let walker = Walker::new(root)?;
    let config = load_config(&walker.root().to_native(), config)?;
    let matchers = collect_matchers(&config, args)?;

    let walker = walker
        .follow_links(config.walk.follow_links && !walk.no_follow)
        .include_hidden(config.walk.include_hidden || walk.hidden)
        .max_depth(walk.max_depth.or(config.walk.max_depth));
    debug!("{walker:?}");

    let matches = walker
        .walk(&matchers)
        .with_context(|| format!("failed to walk {}", walker.root()))?;

    let result = FindResult {
        root: walker.root().to_native().display().to_string(),
        matchers: matchers.iter().map(ToString::to_string).collect(),
        matches: matches.iter().map(ToString::to_string).collect(),
    };
    result.render(mode);

    Ok(())
}
