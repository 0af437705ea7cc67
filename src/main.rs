//! # trump-says
//!
//! Prints an ASCII art Trump with a speech bubble.
//!
//! ## Modes
//! - `trump-says "message"` says exactly that, once
//! - `trump-says` picks a random quote from the quotes file or a recent post
//! - `--show-config` and `--completions <SHELL>`

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

use cli::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let config = run::apply_overrides(config, &args);

    if args.show_config {
        run::show_config(&config);
        return Ok(());
    }
    if let Some(shell) = args.completions {
        run::print_completions(shell);
        return Ok(());
    }

    let renderer = run::build_renderer(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Some(message) = args.message.as_deref() {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = run::run_message(renderer, message, args.quiet, &mut stdout) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Err(e) = run::run_random(renderer, &config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
