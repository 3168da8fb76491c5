//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Short tagline with ANSI styling for clap help output.
pub const BANNER_STYLED: &str =
    "\x1b[1mboard\x1b[0m \x1b[2m· Sign in, then browse users and products.\x1b[0m";

/// Print the load summary to stderr (`board check`).
pub fn print_load_summary(origin: &str, outcome: &board::loader::LoadOutcome) {
    use colored::Colorize;
    use std::io::Write;

    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "  {} {}", "origin:".dimmed(), origin);

    let lines = [
        (
            board::constants::USERS_RESOURCE,
            outcome.catalogue.users.len(),
            outcome.users_error.as_deref(),
        ),
        (
            board::constants::PRODUCTS_RESOURCE,
            outcome.catalogue.products.len(),
            outcome.products_error.as_deref(),
        ),
    ];
    for (resource, count, error) in lines {
        match error {
            None => {
                let _ = writeln!(
                    handle,
                    "  {} {}  {} record(s)",
                    "✔".green().bold(),
                    resource.bold(),
                    count
                );
            }
            Some(e) => {
                let _ = writeln!(handle, "  {} {}  {}", "✖".red().bold(), resource.bold(), e.red());
            }
        }
    }
    let _ = handle.flush();
}
