//! Run stack scripts.

use clap::Parser;
use lifo_cli::{ahead, flatten_nested_results, produce, seq, Error, Opt, PathRead};
use std::io;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();

    // lazily produce events from all specified files
    let iter = PathRead::from_pathbufs(&opt.files).map(|pr| Ok::<_, Error>(produce(pr?)));
    let iter = flatten_nested_results(iter);

    match opt.channel_capacity {
        Some(capacity) => ahead::consume(iter, capacity, &opt, &mut io::stdout())?,
        None => seq::consume(iter, &opt, &mut io::stdout().lock())?,
    };
    Ok(())
}
