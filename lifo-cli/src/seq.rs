//! Sequential event processing.

use crate::{Error, Event, Opt};
use lifo::Machine;
use std::io::Write;

/// Run all events on a fresh machine, writing command results to `out`.
///
/// Processing stops at the first error, unless the error is
/// an empty stack and `--keep-going` was given.
pub fn consume<I, W>(iter: I, opt: &Opt, out: &mut W) -> Result<Machine, Error>
where
    I: Iterator<Item = Result<Event, Error>>,
    W: Write,
{
    let mut machine = Machine::new();

    // run as long as we receive events, and abort on error
    for event in iter {
        let event = event?;
        if opt.echo && !opt.quiet {
            writeln!(out, "{}", event)?
        }

        let cmd = match event {
            Event::Script(path) => {
                log::info!("Open script {}", path.display());
                continue;
            }
            Event::Command(cmd) => cmd,
        };

        if opt.no_run {
            continue;
        }

        match machine.run(cmd) {
            Ok(output) if output.is_unit() || opt.quiet => (),
            Ok(output) => writeln!(out, "{}", output)?,
            Err(e) if opt.keep_going => log::warn!("Skipping command: {}", e),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(machine)
}
