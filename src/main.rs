//! board — sign-in gated listing of users and products.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use board::config;
use board::console;
use board::constants;
use board::env;
use board::loader;
use board::page;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use cli::args::{BrowseArgs, Cli, Command, OutputFormat};
use config::Config;
use env::Env;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr so they never interleave with the page.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Warning: tracing init failed: {e}");
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        return run_version();
    }

    let work_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config = Config::load(Some(&work_dir), &Env::real())
        .context("failed to load configuration")?;
    cli.apply_to(&mut config);

    if !config.display.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Browse(ref args) => run_browse(args, &config).await,
        Command::Check => run_check(&config).await,
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Load the resources, then run the page against stdin.
async fn run_browse(args: &BrowseArgs, config: &Config) -> Result<()> {
    if args.format == OutputFormat::Json {
        colored::control::set_override(false);
    }

    let source = loader::source_from_config(&config.data)
        .context("failed to set up data source")?;
    let mut page = page::Page::mount(source.as_ref(), config.display.default_sort).await;

    let renderer = args.format.renderer();
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    console::run(&mut page, renderer.as_ref(), stdin, &mut out)
        .await
        .context("console I/O failed")
}

/// Load both resources and report; fail if either is missing.
async fn run_check(config: &Config) -> Result<()> {
    let source = loader::source_from_config(&config.data)
        .context("failed to set up data source")?;
    let outcome = loader::load(source.as_ref()).await;

    cli::print_load_summary(&source.describe(), &outcome);

    if !outcome.is_complete() {
        bail!("one or more resources failed to load");
    }
    Ok(())
}
