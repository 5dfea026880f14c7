//! Interactive comparison session.
//!
//! A small line-based shell that owns the session state and drives the
//! search/filter/select/compare/export pipeline. Every command runs one
//! synchronous pass over the current state; errors are printed and never
//! end the session.

use crate::config::Config;
use crate::export;
use crate::format::Formatter;
use crate::naver::{NaverClient, NaverSearch};
use crate::session::{SelectOutcome, SessionContext};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  search <query>       run a search (replaces current results)
  min <won>            set minimum price filter
  max <won>            set maximum price filter (0 = no limit)
  brands <a,b,...>     set brand allow-list (empty to clear)
  results              show filtered search results
  select <n>           select result #n for comparison
  selected             show selected products
  remove <n>           remove selected product #n
  clear                clear the selection
  stats                comparison analysis (needs 2+ selections)
  export [path]        write selection as CSV (default: dated filename)
  help                 this message
  quit                 leave the session";

/// Runs the interactive session against the real API client.
pub async fn run(config: Config) -> Result<()> {
    let client = NaverClient::new(&config.client_id, &config.client_secret)
        .context("Failed to create HTTP client")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(config, &client, &mut stdin.lock(), &mut stdout.lock()).await
}

/// Runs the session loop over arbitrary input/output (for testing).
pub async fn run_with(
    config: Config,
    client: &impl NaverSearch,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut session = SessionContext::new(config);

    writeln!(output, "Naver Shopping comparison session. Type 'help' for commands.")?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (trimmed, ""),
        };
        debug!("Session command: {} {}", command, rest);

        match command {
            "quit" | "exit" => break,
            "help" => writeln!(output, "{}", HELP)?,
            _ => dispatch(&mut session, client, command, rest, output).await?,
        }
    }

    Ok(())
}

async fn dispatch(
    session: &mut SessionContext,
    client: &impl NaverSearch,
    command: &str,
    rest: &str,
    output: &mut impl Write,
) -> Result<()> {
    match command {
        "search" => {
            if rest.is_empty() {
                writeln!(output, "Usage: search <query>")?;
                return Ok(());
            }
            // Failures are reported and treated as zero results; no retry.
            match session.run_search(client, rest).await {
                Ok(count) => writeln!(output, "Found {} products.", count)?,
                Err(e) => writeln!(output, "Search failed: {:#}", e)?,
            }
        }

        "min" | "max" => match rest.parse::<u64>() {
            Ok(value) => {
                let (min, max) = (session.config.min_price, session.config.max_price);
                if command == "min" {
                    session.set_price_bounds(value, max);
                } else {
                    session.set_price_bounds(min, value);
                }
                writeln!(output, "Price filter: {} .. {}", session.config.min_price, {
                    if session.config.max_price == 0 {
                        "no limit".to_string()
                    } else {
                        session.config.max_price.to_string()
                    }
                })?;
            }
            Err(_) => writeln!(output, "Usage: {} <won>", command)?,
        },

        "brands" => {
            let brands: Vec<String> = rest
                .split(',')
                .map(|b| b.trim().to_string())
                .filter(|b| !b.is_empty())
                .collect();
            if brands.is_empty() {
                writeln!(output, "Brand filter cleared.")?;
            } else {
                writeln!(output, "Brand filter: {}", brands.join(", "))?;
            }
            session.set_brands(brands);
        }

        "results" => {
            let filtered = session.filtered();
            let owned: Vec<_> = filtered.into_iter().cloned().collect();
            let formatter = Formatter::new(session.config.format);
            writeln!(output, "{}", formatter.format_items(&owned))?;
        }

        "select" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => match session.select(n - 1) {
                SelectOutcome::Added => {
                    let added = &session.store().items()[session.store().len() - 1];
                    writeln!(output, "Selected: {}", added.name)?;
                }
                SelectOutcome::Duplicate => writeln!(output, "Already selected.")?,
                SelectOutcome::OutOfRange => writeln!(output, "No result #{}.", n)?,
            },
            _ => writeln!(output, "Usage: select <n>")?,
        },

        "selected" => {
            let formatter = Formatter::new(session.config.format);
            writeln!(output, "{}", formatter.format_selection(session.store().items()))?;
        }

        "remove" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 && session.remove(n - 1) => writeln!(output, "Removed #{}.", n)?,
            Ok(n) => writeln!(output, "No selection #{}.", n)?,
            Err(_) => writeln!(output, "Usage: remove <n>")?,
        },

        "clear" => {
            session.clear_selection();
            writeln!(output, "Selection cleared.")?;
        }

        "stats" => {
            if session.store().len() < 2 {
                writeln!(output, "Select at least 2 products to compare.")?;
            } else {
                let formatter = Formatter::new(session.config.format);
                writeln!(output, "{}", formatter.format_comparison(session.store().items()))?;
            }
        }

        "export" => {
            if session.store().is_empty() {
                writeln!(output, "Nothing selected to export.")?;
            } else {
                let path =
                    if rest.is_empty() { export::default_filename() } else { rest.to_string() };
                match export::write_csv(session.store().items(), &path) {
                    Ok(()) => writeln!(
                        output,
                        "Exported {} products to {}.",
                        session.store().len(),
                        path
                    )?,
                    Err(e) => writeln!(output, "Export failed: {:#}", e)?,
                }
            }
        }

        other => writeln!(output, "Unknown command: {}. Type 'help'.", other)?,
    }

    Ok(())
}
