//! CLI definitions: argument parsing and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::core::speech::MAX_LINE_WIDTH;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  trump-says                        Say a random quote or recent post
  trump-says \"Hello world\"          Say exactly this (any word, even \"help\")
  trump-says --no-feed              Only use the quotes file
  trump-says --quotes my.txt        Use another quotes file
  trump-says --show-config          Show config paths and feed status
  trump-says --completions bash     Generate bash completions

ENVIRONMENT:
  TWITTER_CONSUMER_KEY, TWITTER_CONSUMER_SECRET   Feed credentials (.env is read)
  TRUMP_SAYS_QUOTES_FILE, TRUMP_SAYS_HANDLE, TRUMP_SAYS_FEED_TIMEOUT_SECS
";

/// Command-line arguments for the application.
///
/// No subcommands: the positional argument is always the message.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "ASCII art Trump saying things",
    after_help = AFTER_HELP,
    disable_help_subcommand = true
)]
pub struct Args {
    /// What to say. Without it a random quote is chosen.
    pub message: Option<String>,

    /// Quotes file, one quote per line
    #[arg(long, value_name = "PATH")]
    pub quotes: Option<PathBuf>,

    /// Handle whose recent posts join the quotes
    #[arg(long)]
    pub handle: Option<String>,

    /// Do not fetch recent posts
    #[arg(long)]
    pub no_feed: bool,

    /// Custom art; each '$' marks one bubble line
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Bubble line width for a custom template
    #[arg(
        long,
        value_name = "N",
        default_value_t = 43,
        requires = "template",
        value_parser = clap::value_parser!(u16).range(1..=MAX_LINE_WIDTH as i64)
    )]
    pub width: u16,

    /// Show config paths and feed status, then exit
    #[arg(long, conflicts_with = "message")]
    pub show_config: bool,

    /// Print a shell completion script (bash, zsh, fish, powershell, elvish), then exit
    #[arg(
        long,
        value_name = "SHELL",
        value_parser = clap::value_parser!(Shell),
        conflicts_with_all = ["message", "show_config"]
    )]
    pub completions: Option<Shell>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Hide render errors and reduce log output (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
