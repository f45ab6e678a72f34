//! Evaluate matchers against a single path

use std::path::Path;

use respath::output::{MatchTestResult, MatcherOutcome, OutputMode};
use respath::{FsPath, Walker};

use super::{collect_matchers, load_config};
use crate::cli::app::MatcherArgs;

/// Test `path` against every matcher; exits 1 when any rejects it
pub fn test_path(
    root: &Path,
    path: &Path,
    args: &MatcherArgs,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let walker = Walker::new(root)?;
    let root = walker.root();
    let config = load_config(&root.to_native(), config)?;
    let matchers = collect_matchers(&config, args)?;

    let candidate = FsPath::new(path);
    let candidate = if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate.as_str())
    };

    let outcomes: Vec<MatcherOutcome> = matchers
        .iter()
        .map(|m| MatcherOutcome {
            matcher: m.to_string(),
            matched: m.matches(&candidate, root),
        })
        .collect();
    let accepted = outcomes.iter().all(|o| o.matched);

    let result = MatchTestResult {
        root: root.to_native().display().to_string(),
        path: candidate.to_string(),
        relative: root.relativize(&candidate).to_string(),
        accepted,
        matchers: outcomes,
    };
    result.render(mode);

    if !accepted {
        std::process::exit(1);
    }

    Ok(())
}
