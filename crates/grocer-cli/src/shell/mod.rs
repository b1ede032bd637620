//! Interactive storefront session.
//!
//! Input lines become [`ShellEvent`]s; lookups run concurrently in a
//! `FuturesUnordered` so the session keeps accepting commands while shops
//! are fetched.

mod command;

use std::io::Write;

use futures::stream::{FuturesUnordered, StreamExt};
use grocer_core::Catalog;
use grocer_lookup::PriceLookup;
use grocer_shell::{
    resolve_location_choice, run_lookup, Completion, LookupRequest, Shell, ShellEvent,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{catalog::resolve_category, render};

pub(crate) use command::{parse_command, ShellCommand};

/// What the session loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Continue(Option<LookupRequest>),
    Quit,
}

/// Runs the session on stdin/stdout until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only if reading stdin or writing stdout fails. Lookup
/// failures are logged and shown as an empty result.
pub(crate) async fn run_shell<L: PriceLookup>(
    catalog: &Catalog,
    lookup: &L,
    default_location: &str,
) -> anyhow::Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    run_session(catalog, lookup, default_location, input, &mut out).await?;
    Ok(())
}

/// Drives one session over `input`, writing everything to `out`.
///
/// End of input stops reading but lookups already in flight are still
/// awaited and applied; only `quit` abandons them. Returns the final shell
/// state.
pub(crate) async fn run_session<L, R, W>(
    catalog: &Catalog,
    lookup: &L,
    default_location: &str,
    input: R,
    out: &mut W,
) -> anyhow::Result<Shell>
where
    L: PriceLookup,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut shell = Shell::new(default_location);
    let mut lines = input.lines();
    let mut in_flight = FuturesUnordered::new();
    let mut input_open = true;

    writeln!(
        out,
        "Delivering to {}. Type `help` for commands.",
        shell.location_label()
    )?;
    write!(out, "{}", listing(&shell, catalog))?;
    prompt(out)?;

    while input_open || !in_flight.is_empty() {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                let command = match interpret(&shell, &line) {
                    Ok(Some(command)) => command,
                    Ok(None) => {
                        prompt(out)?;
                        continue;
                    }
                    Err(message) => {
                        writeln!(out, "{message}")?;
                        prompt(out)?;
                        continue;
                    }
                };

                let (output, step) = apply_command(&mut shell, catalog, command);
                write!(out, "{output}")?;
                match step {
                    Step::Quit => break,
                    Step::Continue(Some(request)) => in_flight.push(run_lookup(lookup, request)),
                    Step::Continue(None) => {}
                }
                prompt(out)?;
            }
            Some(done) = in_flight.next(), if !in_flight.is_empty() => {
                let completion = shell.complete_lookup(done.ticket, done.result);
                if completion != Completion::Stale {
                    write!(out, "\n{}", render::panel(&shell))?;
                    prompt(out)?;
                }
            }
            else => break,
        }
    }

    if !in_flight.is_empty() {
        tracing::debug!(pending = in_flight.len(), "dropping in-flight lookups on quit");
    }
    writeln!(out)?;
    out.flush()?;
    Ok(shell)
}

/// Parses `line`. While the location picker is open, every line other than
/// `cancel`, `help` or `quit` is taken as a location choice.
fn interpret(shell: &Shell, line: &str) -> Result<Option<ShellCommand>, String> {
    if !shell.is_location_picker_open() {
        return parse_command(line);
    }
    match parse_command(line) {
        Ok(None) => Ok(None),
        Ok(Some(command @ (ShellCommand::Cancel | ShellCommand::Help | ShellCommand::Quit))) => {
            Ok(Some(command))
        }
        _ => Ok(Some(ShellCommand::Location(Some(line.trim().to_string())))),
    }
}

/// Applies one command to the shell and returns the text to print.
pub(crate) fn apply_command(
    shell: &mut Shell,
    catalog: &Catalog,
    command: ShellCommand,
) -> (String, Step) {
    let mut request = None;
    let output = match command {
        ShellCommand::Search(term) => {
            shell.dispatch(ShellEvent::SetSearch(term));
            listing(shell, catalog)
        }
        ShellCommand::Category(input) => {
            let category = resolve_category(catalog, &input);
            if !catalog.is_known_category(&category) {
                tracing::warn!(%category, "unknown category; no items will match");
            }
            shell.dispatch(ShellEvent::SetCategory(category));
            listing(shell, catalog)
        }
        ShellCommand::Clear => {
            shell.dispatch(ShellEvent::ClearFilters);
            listing(shell, catalog)
        }
        ShellCommand::Items => {
            let labels = catalog.category_labels();
            let mut out = render::category_bar(&labels, shell.category());
            out.push_str(&listing(shell, catalog));
            out
        }
        ShellCommand::Select(query) => match catalog.find(&query) {
            Some(item) => {
                request = shell.dispatch(ShellEvent::SelectItem(item.clone()));
                render::panel(shell)
            }
            None => format!("No item matches '{}'. Use an id or the exact name.\n", query.trim()),
        },
        ShellCommand::Close => {
            shell.dispatch(ShellEvent::CloseItemPanel);
            render::panel(shell)
        }
        ShellCommand::Location(None) => {
            shell.dispatch(ShellEvent::OpenLocationPicker);
            render::location_picker(shell.location())
        }
        ShellCommand::Location(Some(choice)) => match resolve_location_choice(&choice) {
            Some(location) => {
                shell.dispatch(ShellEvent::SelectLocation(location));
                format!("Delivering to {}.\n", shell.location())
            }
            None => format!("'{}' is not a valid location choice.\n", choice.trim()),
        },
        ShellCommand::Cancel => {
            shell.dispatch(ShellEvent::CloseLocationPicker);
            String::new()
        }
        ShellCommand::Status => render::status(shell),
        ShellCommand::Help => render::help().to_string(),
        ShellCommand::Quit => return (String::new(), Step::Quit),
    };
    (output, Step::Continue(request))
}

fn listing(shell: &Shell, catalog: &Catalog) -> String {
    let items = shell.visible_items(catalog);
    render::item_listing(&shell.filter_summary(catalog), &items)
}

fn prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
