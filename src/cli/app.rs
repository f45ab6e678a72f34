//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use respath::PathMatcher;
use respath::output::OutputMode;

/// respath - Resolve resource keys and find paths by glob, regex and type
#[derive(Parser, Debug)]
#[command(
    name = "respath",
    version,
    about = "Resolve resource keys and find paths by glob, regex and type",
    long_about = "Select paths under a root with matchers and resolve qualified resource keys.\n\n\
                  Matchers given on the command line are combined with the ones in the\n\
                  root's respath.toml; a path is reported when every matcher accepts it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk a directory and print the paths every matcher accepts
    Find {
        /// Directory to walk (a file walks its parent)
        #[arg(default_value = ".")]
        root: PathBuf,

        #[command(flatten)]
        matchers: MatcherArgs,

        #[command(flatten)]
        walk: WalkArgs,

        /// Config file (defaults to respath.toml in the root)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve a key string such as java:file:///tmp/x.txt
    Key {
        /// Key string, qualifier optional
        key: String,
    },

    /// Evaluate matchers against a single path
    Test {
        /// Root the path is matched relative to
        root: PathBuf,

        /// Path to test, relative to the root unless absolute
        path: PathBuf,

        #[command(flatten)]
        matchers: MatcherArgs,

        /// Config file (defaults to respath.toml in the root)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Matchers given as flags
#[derive(Args, Debug, Default, Clone)]
pub struct MatcherArgs {
    /// Ant-style glob relative to the root (repeat for alternatives)
    #[arg(short, long = "glob", value_name = "PATTERN")]
    pub globs: Vec<String>,

    /// Regex that must match the whole relative path (repeat for alternatives)
    #[arg(short, long = "regex", value_name = "REGEX")]
    pub regexes: Vec<String>,

    /// File extension without the dot (repeat for alternatives)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Only regular files
    #[arg(long, conflicts_with = "dirs")]
    pub files: bool,

    /// Only directories
    #[arg(long)]
    pub dirs: bool,
}

/// Walk options given as flags, overriding the config
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct WalkArgs {
    /// Include hidden entries
    #[arg(long)]
    pub hidden: bool,

    /// Do not follow symbolic links
    #[arg(long)]
    pub no_follow: bool,

    /// Maximum depth below the root
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

impl MatcherArgs {
    /// Build matchers from the flags
    ///
    /// Each flag kind becomes one matcher; repeated values of the same flag
    /// are alternatives.
    pub fn to_matchers(&self) -> respath::Result<Vec<PathMatcher>> {
        let mut matchers = Vec::new();

        if self.files {
            matchers.push(PathMatcher::File);
        }
        if self.dirs {
            matchers.push(PathMatcher::Directory);
        }

        let globs = self
            .globs
            .iter()
            .map(|g| PathMatcher::pattern(g))
            .collect::<respath::Result<Vec<_>>>()?;
        if let Some(matcher) = either(globs) {
            matchers.push(matcher);
        }

        let regexes = self
            .regexes
            .iter()
            .map(|r| PathMatcher::regex(r))
            .collect::<respath::Result<Vec<_>>>()?;
        if let Some(matcher) = either(regexes) {
            matchers.push(matcher);
        }

        if !self.extensions.is_empty() {
            matchers.push(PathMatcher::extensions(&self.extensions));
        }

        Ok(matchers)
    }
}

/// Collapse alternatives: none, the single matcher, or `any(...)`
fn either(mut alternatives: Vec<PathMatcher>) -> Option<PathMatcher> {
    match alternatives.len() {
        0 => None,
        1 => alternatives.pop(),
        _ => Some(PathMatcher::any(alternatives)),
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Find {
            root,
            matchers,
            walk,
            config,
        }) => commands::find(&root, &matchers, walk, config.as_deref(), output_mode),
        Some(Command::Key { key }) => commands::key(&key, output_mode),
        Some(Command::Test {
            root,
            path,
            matchers,
            config,
        }) => commands::test_path(&root, &path, &matchers, config.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": respath::VERSION
                    })
                );
            } else {
                println!("respath v{}", respath::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": respath::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("respath v{}", respath::VERSION);
                println!("\nRun 'respath --help' for usage");
                println!("Run 'respath find . --glob \"**/*.rs\"' to get started");
            }
            Ok(())
        },
    }
}
