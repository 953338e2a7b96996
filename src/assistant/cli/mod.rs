//! Binary-only glue: argument parsing, config discovery and terminal I/O.

mod args;
mod print;
mod repl;

use args::{Cli, Commands};
use assistant_bot::api::AssistantApi;
use assistant_bot::config::BotConfig;
use assistant_bot::error::Result;
use assistant_bot::exercises::fibonacci::{FibonacciCache, FibonacciSequence};
use assistant_bot::exercises::numbers::{generator_numbers, sum_profit};
use assistant_bot::logging;
use assistant_bot::store::memory::InMemoryStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        None | Some(Commands::Bot) => handle_bot(cli.config_dir),
        Some(Commands::Fib { n, sequence }) => handle_fib(n, sequence),
        Some(Commands::Sum { text }) => handle_sum(&text.join(" ")),
    }
}

fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        ProjectDirs::from("com", "assistant-bot", "assistant-bot")
            .map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn handle_bot(explicit_dir: Option<PathBuf>) -> Result<()> {
    let config = match config_dir(explicit_dir) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            BotConfig::load(&dir)?
        }
        None => BotConfig::default(),
    };

    let mut api = AssistantApi::new(InMemoryStore::new(), config);
    let color = console::colors_enabled();
    info!("session started");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    repl::run_session(&mut api, &mut input, &mut output, color)
}

fn handle_fib(n: Option<u64>, sequence: Option<usize>) -> Result<()> {
    if let Some(count) = sequence {
        for value in FibonacciSequence::new().take(count) {
            println!("{}", value);
        }
        return Ok(());
    }

    let n = n.unwrap_or_default();
    let value = FibonacciCache::new().get(n)?;
    println!("{}", value);
    Ok(())
}

fn handle_sum(text: &str) -> Result<()> {
    let total = sum_profit(text, generator_numbers);
    println!("{}", total);
    Ok(())
}
