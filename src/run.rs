//! Application run modes: logger init, single message, random quote, config display.

use std::error::Error;
use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{self, Args};
use crate::core;
use crate::core::config::Config;
use crate::core::quotes::{self, QuotesSource};
use crate::core::speech::{Renderer, Template, TemplateError};

/// Initialize env_logger on stderr so logs never mix with the art on stdout.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Apply CLI flags on top of the environment configuration.
pub fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(path) = &args.quotes {
        config.quotes_file = Some(path.clone());
    }
    if let Some(handle) = &args.handle {
        config.feed.handle = handle.clone();
    }
    if args.no_feed {
        config.feed.enabled = false;
    }
    config
}

/// The built-in portrait, or custom art from `--template`.
pub fn build_renderer(args: &Args) -> Result<Renderer, TemplateError> {
    let renderer = match &args.template {
        Some(path) => Renderer::new(Template::from_file(path, usize::from(args.width))?),
        None => Renderer::default(),
    };
    let geometry = renderer.geometry();
    log::debug!(
        "Bubble geometry: {} lines of {} characters",
        geometry.line_count,
        geometry.max_line_width
    );
    Ok(renderer)
}

/// Say one message to `out`. A rejected message is reported, not retried.
pub fn run_message<W: Write>(
    renderer: Renderer,
    message: &str,
    quiet: bool,
    out: &mut W,
) -> io::Result<()> {
    let renderer = renderer.quiet(quiet);
    renderer.say(message, out)?;
    out.flush()
}

/// Say a random candidate from the quotes file and the feed.
pub async fn run_random(renderer: Renderer, config: &Config) -> Result<(), Box<dyn Error>> {
    let mut candidates = load_quotes(config);
    candidates.extend(core::feed::fetch_candidates(&config.feed).await);
    log::info!("{} candidates", candidates.len());

    let picked = core::pick::pick_and_render(&renderer, &candidates, &mut rand::rng())?;
    log::info!("Saying: {}", picked.message);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", picked.art)?;
    stdout.flush()?;
    Ok(())
}

fn quotes_source(config: &Config) -> QuotesSource {
    let cwd = std::env::current_dir().unwrap_or_default();
    let config_dir = core::paths::config_dir();
    quotes::resolve(config.quotes_file.as_deref(), &cwd, config_dir.as_deref())
}

fn load_quotes(config: &Config) -> Vec<String> {
    let source = quotes_source(config);
    match quotes::load(&source) {
        Ok(quotes) => {
            log::info!("Loaded {} quotes from {}", quotes.len(), source);
            quotes
        }
        Err(e) => {
            log::warn!("{}", e);
            Vec::new()
        }
    }
}

/// Print resolved configuration. Secrets are reported as set/not set only.
pub fn show_config(config: &Config) {
    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!("Quotes:         {}", quotes_source(config));
    match core::paths::config_dir() {
        Some(dir) => println!("Config dir:     {}", dir.display()),
        None => println!("Config dir:     (unavailable)"),
    }
    println!(
        "Feed:           {}",
        if config.feed.enabled { "enabled" } else { "disabled" }
    );
    println!("Feed handle:    @{}", config.feed.handle);
    println!("Feed API:       {}", config.feed.api_base);
    println!("Feed timeout:   {}s", config.feed.timeout.as_secs());
    println!(
        "Credentials:    {}",
        if config.feed.credentials.is_some() {
            "set"
        } else {
            "not set (TWITTER_CONSUMER_KEY / TWITTER_CONSUMER_SECRET)"
        }
    );
}

/// Print a completion script for `shell`.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
}
