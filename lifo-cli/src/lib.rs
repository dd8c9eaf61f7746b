pub mod ahead;
mod error;
mod event;
mod opt;
mod parsebuffer;
mod path_read;
pub mod seq;

pub use error::Error;
pub use event::Event;
pub use opt::Opt;
pub use parsebuffer::ParseBuffer;
pub use path_read::PathRead;

/// Read a script and return its events, starting with the opening of the script.
///
/// The script is read lazily, that is,
/// only as much input is read as is necessary to yield the next event.
/// The events stop after the first error.
pub fn produce(pr: PathRead) -> impl Iterator<Item = Result<Event, Error>> {
    let path = std::iter::once(Ok(Event::Script(pr.path)));
    let cmds = ParseBuffer::new(pr.read)
        .inspect(|cmd| cmd.iter().for_each(|cmd| log::debug!("Parsed {}", cmd)))
        .map(|cmd| cmd.map(Event::Command));
    path.chain(cmds)
}

/// Flatten an iterator of results of iterators of results into an iterator of results.
///
/// Source: <https://www.reddit.com/r/rust/comments/9u6846/rust_puzzle_flatten_a_nested_iterator_of_results>
pub fn flatten_nested_results<O, I, T, E>(outer: O) -> impl Iterator<Item = Result<T, E>>
where
    O: Iterator<Item = Result<I, E>>,
    I: Iterator<Item = Result<T, E>>,
{
    outer.flat_map(|inner_result| {
        let (v, r) = match inner_result {
            Ok(v) => (Some(v), None),
            Err(e) => (None, Some(Err(e))),
        };
        v.into_iter().flatten().chain(r)
    })
}
