//! Clap argument types and output format selection.

use clap::{Parser, ValueEnum};

use board::config::Config;
use board::models::SortOption;
use board::output::PageRenderer;

/// Sign in, then browse users and products.
#[derive(Parser, Debug)]
#[command(
    name = "board",
    version = board::constants::VERSION,
    about = super::BANNER_STYLED,
)]
pub struct Cli {
    /// Fetch `/json/*.json` from this origin instead of a local directory.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Local static root containing `json/users.json` and `json/products.json`.
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Initial product sort: alphabet, price-low-to-high, price-high-to-low.
    #[arg(long, global = true)]
    pub sort: Option<SortOption>,

    /// Disable ANSI colors.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Open the page and read commands from stdin.
    Browse(BrowseArgs),

    /// Load both resources and report what was found.
    Check,

    /// Print version and build information.
    Version,
}

/// Arguments for the `browse` subcommand.
#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Page output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Renderer for this format.
    pub fn renderer(self) -> Box<dyn PageRenderer> {
        match self {
            OutputFormat::Terminal => Box::new(board::output::terminal::TerminalRenderer),
            OutputFormat::Json => Box::new(board::output::json::JsonRenderer),
        }
    }
}

impl Cli {
    /// Apply CLI flags on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref base_url) = self.base_url {
            config.data.base_url = Some(base_url.clone());
        }
        if let Some(ref dir) = self.data_dir {
            config.data.dir = dir.clone();
            // an explicit directory beats a base URL from lower layers
            if self.base_url.is_none() {
                config.data.base_url = None;
            }
        }
        if let Some(sort) = self.sort {
            config.display.default_sort = sort;
        }
        if self.no_color {
            config.display.color = false;
        }
    }
}
