use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version)]
/// Run stack scripts
pub struct Opt {
    /// Print every command before running it (unless quiet)
    #[arg(long)]
    pub echo: bool,

    /// Print nothing, neither results of commands nor echoed commands
    #[arg(long, short)]
    pub quiet: bool,

    /// Only parse, do not run commands
    #[arg(long)]
    pub no_run: bool,

    /// Skip commands that fail because the stack is empty
    ///
    /// Without this flag, popping or peeking an empty stack aborts the run.
    /// With it, the failure is logged as a warning and
    /// running continues with the next command.
    #[arg(long, short)]
    pub keep_going: bool,

    /// Parse given number of commands in advance (∞ if argument omitted)
    ///
    /// If this option is used, commands are parsed and run simultaneously.
    /// If this option is given with a number n, then
    /// maximally n commands are parsed in advance.
    /// If this option is given without an extra argument, then
    /// the number of commands parsed in advance is unbounded.
    ///
    /// Note that unbounded parsing can lead to high memory usage!
    #[arg(long, short = 'c')]
    pub channel_capacity: Option<Option<usize>>,

    /// Files to process (cumulative)
    ///
    /// All files are run on the same stack, so
    /// running multiple files is equivalent to running their concatenation.
    /// To read from standard input, use "-" as file name.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

#[test]
fn parse_args() {
    let opt = Opt::parse_from(["lifo", "-q", "--keep-going", "a.lifo", "-"]);
    assert!(opt.quiet && opt.keep_going && !opt.echo && !opt.no_run);
    assert_eq!(opt.channel_capacity, None);
    assert_eq!(opt.files, [PathBuf::from("a.lifo"), PathBuf::from("-")]);

    let opt = Opt::parse_from(["lifo", "-c", "--", "a.lifo"]);
    assert_eq!(opt.channel_capacity, Some(None));
    let opt = Opt::parse_from(["lifo", "-c", "8", "a.lifo"]);
    assert_eq!(opt.channel_capacity, Some(Some(8)));

    assert!(Opt::try_parse_from(["lifo"]).is_err());
}
