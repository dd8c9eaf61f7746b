//! Parsing ahead of running.

use crate::{seq, Error, Event, Opt};
use lifo::Machine;
use std::io::Write;

/// Run events on another thread while the current thread produces them.
///
/// Events are passed through a channel holding at most `capacity` events,
/// or arbitrarily many if `capacity` is `None`.
/// Because events are produced lazily,
/// this bounds how far parsing runs ahead of running.
/// If running fails, producing stops at the next event.
pub fn consume<I, W>(
    mut iter: I,
    capacity: Option<usize>,
    opt: &Opt,
    out: &mut W,
) -> Result<Machine, Error>
where
    I: Iterator<Item = Result<Event, Error>>,
    W: Write + Send,
{
    let (sender, receiver) = match capacity {
        Some(capacity) => flume::bounded(capacity),
        None => flume::unbounded(),
    };

    std::thread::scope(|scope| {
        let consumer = scope.spawn(|| seq::consume(receiver.into_iter(), opt, out));

        // sending fails prematurely if consumption fails
        // in that case, get the error below
        let _ = iter.try_for_each(|event| sender.send(event));

        // signalise that we are done sending events
        // (otherwise the consumer will eventually wait forever)
        drop(sender);

        // wait for all events to be consumed
        let consumed = consumer.join();
        consumed.unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    })
}
