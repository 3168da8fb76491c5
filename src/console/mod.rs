//! Line-oriented event loop for the page.
//!
//! Each input line is parsed into a [`Command`], dispatched to the page to
//! completion, and the page is re-rendered. Input ends at EOF or `quit`.

use std::io::Write;

use strum::IntoEnumIterator;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::models::SortOption;
use crate::output::PageRenderer;
use crate::page::{Event, Page};
use crate::view::Panel;

/// Errors from parsing a console line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type `help` for a list)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid sort option '{0}'. Supported: alphabet, price-low-to-high, price-high-to-low")]
    Sort(String),

    #[error("invalid product id '{0}'")]
    ProductId(String),
}

/// A parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Events to apply in order.
    Dispatch(Vec<Event>),
    /// Search whichever panel is open.
    Search(String),
    Help,
    Quit,
}

/// Parse one input line.
///
/// Arguments after the command word are taken verbatim, so passwords and
/// search text may contain spaces.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "id" => Command::Dispatch(vec![Event::InputId(rest.to_string())]),
        "password" => Command::Dispatch(vec![Event::InputPassword(rest.to_string())]),
        "submit" => Command::Dispatch(vec![Event::Submit]),
        "login" => {
            let (id, password) = rest
                .trim_start()
                .split_once(' ')
                .ok_or(CommandError::Usage("login <id> <password>"))?;
            Command::Dispatch(vec![
                Event::InputId(id.to_string()),
                Event::InputPassword(password.to_string()),
                Event::Submit,
            ])
        }
        "users" => Command::Dispatch(vec![Event::TogglePanel(Panel::Users)]),
        "products" => Command::Dispatch(vec![Event::TogglePanel(Panel::Products)]),
        "search" => Command::Search(rest.to_string()),
        "sort" => {
            let option = rest.trim();
            if option.is_empty() {
                return Err(CommandError::Usage("sort <option>"));
            }
            let sort = option
                .parse::<SortOption>()
                .map_err(|_| CommandError::Sort(option.to_string()))?;
            Command::Dispatch(vec![Event::SelectSort(sort)])
        }
        "describe" => {
            let id = rest.trim();
            if id.is_empty() {
                return Err(CommandError::Usage("describe <product id>"));
            }
            let id = id
                .parse::<u64>()
                .map_err(|_| CommandError::ProductId(id.to_string()))?;
            Command::Dispatch(vec![Event::ToggleDescription(id)])
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(command)
}

/// Command reference printed by `help`.
pub fn help_text() -> String {
    let sorts: Vec<String> = SortOption::iter().map(|s| s.to_string()).collect();
    format!(
        "Commands:\n\
         \x20 id <text>              set the ID field\n\
         \x20 password <text>        set the password field\n\
         \x20 submit                 sign in\n\
         \x20 login <id> <password>  fill both fields and sign in\n\
         \x20 users                  show/hide users\n\
         \x20 products               show/hide products\n\
         \x20 search <text>          search the open panel\n\
         \x20 sort <option>          {}\n\
         \x20 describe <id>          show/hide a product description\n\
         \x20 quit                   leave\n",
        sorts.join(" | ")
    )
}

/// Drive `page` from `input` until EOF or `quit`, rendering to `out`.
pub async fn run<R, W>(
    page: &mut Page,
    renderer: &dyn PageRenderer,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", renderer.render(&page.view()))?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => write!(out, "{}", help_text())?,
            Ok(Command::Dispatch(events)) => {
                let mut applied = true;
                for event in events {
                    applied &= page.dispatch(event);
                }
                if !applied {
                    if page.session().is_authenticated() {
                        writeln!(out, "Already signed in.")?;
                    } else {
                        writeln!(out, "Sign in first.")?;
                    }
                }
                write!(out, "{}", renderer.render(&page.view()))?;
            }
            Ok(Command::Search(query)) => match page.dashboard().open_panel() {
                Some(panel) => {
                    page.dispatch(Event::Search(panel, query));
                    write!(out, "{}", renderer.render(&page.view()))?;
                }
                None if !page.session().is_authenticated() => writeln!(out, "Sign in first.")?,
                None => writeln!(out, "Open the users or products panel first.")?,
            },
            Err(e) => writeln!(out, "{e}")?,
        }
        out.flush()?;
    }

    Ok(())
}
