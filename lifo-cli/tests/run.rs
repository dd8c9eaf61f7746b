use clap::Parser;
use lifo::parse::{Command, Value};
use lifo::{EmptyStack, Machine};
use lifo_cli::{ahead, flatten_nested_results, produce, seq, Error, Event, Opt, PathRead};
use std::cell::Cell;
use std::io::{self, Cursor, Read, Write};
use std::path::PathBuf;
use std::rc::Rc;

fn opt(args: &[&str]) -> Opt {
    let args = ["lifo"].iter().chain(args).chain(&["-"]);
    Opt::parse_from(args)
}

fn script(name: &str, s: &str) -> PathRead {
    PathRead::new(name, Cursor::new(s.to_string()))
}

fn run(scripts: Vec<PathRead>, opt: &Opt) -> (Result<Machine, Error>, String) {
    let events = scripts.into_iter().flat_map(produce);
    let mut out = Vec::new();
    let result = seq::consume(events, opt, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn run_ahead(
    scripts: Vec<PathRead>,
    capacity: Option<usize>,
    opt: &Opt,
) -> (Result<Machine, Error>, String) {
    let events = scripts.into_iter().flat_map(produce);
    let mut out = Vec::new();
    let result = ahead::consume(events, capacity, opt, &mut out);
    (result, String::from_utf8(out).unwrap())
}

/// Reader that counts the bytes it hands out.
struct Counted {
    read: Cursor<String>,
    count: Rc<Cell<usize>>,
}

impl Read for Counted {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // hand out small pieces, like a pipe
        let len = buf.len().min(16);
        let n = self.read.read(&mut buf[..len])?;
        self.count.set(self.count.get() + n);
        Ok(n)
    }
}

#[test]
fn outputs() {
    let s = script("a", "push 1. push 2. peek. pop. size. empty. pop. empty. clear.");
    let (result, out) = run(vec![s], &opt(&[]));
    assert!(result.unwrap().stack().is_empty());
    assert_eq!(out, "2\n2\n1\nfalse\n1\ntrue\n");
}

#[test]
fn strings() {
    let s = script("a", "push \"hello world\". push bare. pop. pop.");
    let (result, out) = run(vec![s], &opt(&[]));
    assert!(result.is_ok());
    assert_eq!(out, "\"bare\"\n\"hello world\"\n");
}

#[test]
fn empty_aborts() {
    let s = script("a", "push 1. pop. pop. push 2. size.");
    let (result, out) = run(vec![s], &opt(&[]));
    let err = lifo::Error::Empty(EmptyStack);
    assert!(matches!(result, Err(Error::Lifo(e)) if e == err));
    assert_eq!(out, "1\n");
}

#[test]
fn keep_going() {
    let s = script("a", "peek. push 1. pop. pop. push 2. size.");
    let (result, out) = run(vec![s], &opt(&["--keep-going"]));
    let machine = result.unwrap();
    assert_eq!(machine.stack().peek(), Ok(&Value::Int(2)));
    assert_eq!(out, "1\n1\n");
}

#[test]
fn scripts_share_stack() {
    let a = script("a", "push 1. push 2.");
    let b = script("b", "pop. pop. empty.");
    let (result, out) = run(vec![a, b], &opt(&[]));
    assert!(result.is_ok());
    assert_eq!(out, "2\n1\ntrue\n");
}

#[test]
fn quiet_and_no_run() {
    let s = || script("a", "push 1. pop. pop.");
    let (result, out) = run(vec![s()], &opt(&["--quiet", "--keep-going"]));
    assert!(result.is_ok());
    assert_eq!(out, "");

    // without running, popping the empty stack cannot fail
    let (result, out) = run(vec![s()], &opt(&["--no-run"]));
    assert!(result.unwrap().stack().is_empty());
    assert_eq!(out, "");
}

#[test]
fn echo() {
    let s = script("a.lifo", "push x. size.");
    let (result, out) = run(vec![s], &opt(&["--echo"]));
    assert!(result.is_ok());
    assert_eq!(out, "Open script a.lifo\npush \"x\".\nsize.\n1\n");
}

#[test]
fn parse_error() {
    let s = script("a", "push 1. size. push. size.");
    let events: Vec<_> = produce(s).collect();
    // script opening, two commands, one error
    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], Ok(Event::Script(_))));
    assert!(matches!(events[3], Err(Error::Lifo(lifo::Error::Parse(_)))));

    let s = script("a", "push 1. size. push. size.");
    let (result, out) = run(vec![s], &opt(&[]));
    assert!(result.is_err());
    assert_eq!(out, "1\n");
}

#[test]
fn files() -> Result<(), Error> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "push 3. (; comment ;) peek.")?;

    let missing = PathBuf::from("this/file/does/not/exist.lifo");
    let paths = [file.path().to_path_buf(), missing];
    let iter = PathRead::from_pathbufs(&paths).map(|pr| Ok::<_, Error>(produce(pr?)));
    let events: Vec<_> = flatten_nested_results(iter).collect();

    assert!(matches!(&events[0], Ok(Event::Script(p)) if p == file.path()));
    assert_eq!(events.len(), 4);
    assert!(matches!(events[3], Err(Error::Io(_))));
    Ok(())
}

#[test]
fn quiet_suppresses_echo() {
    let s = script("a.lifo", "push x. size. pop.");
    let (result, out) = run(vec![s], &opt(&["--echo", "--quiet"]));
    assert!(result.is_ok());
    assert_eq!(out, "");
}

#[test]
fn produce_reads_lazily() {
    let s = "push 1. ".repeat(100_000);
    let count = Rc::new(Cell::new(0));
    let read = Counted {
        read: Cursor::new(s.clone()),
        count: count.clone(),
    };

    let mut events = produce(PathRead::new("big", read));
    assert!(matches!(events.next(), Some(Ok(Event::Script(_)))));
    assert!(matches!(events.next(), Some(Ok(Event::Command(Command::Push(_))))));
    assert!(count.get() < s.len());
}

#[test]
fn ahead_same_as_seq() {
    let s = "push 1. push 2. peek. pop. size. empty. pop. empty. push 3.";
    let o = opt(&["--echo"]);
    let (expected, expected_out) = run(vec![script("a", s), script("b", "size.")], &o);
    let expected = expected.unwrap();

    for capacity in [Some(0), Some(1), Some(8), None] {
        let (result, out) = run_ahead(vec![script("a", s), script("b", "size.")], capacity, &o);
        assert_eq!(out, expected_out, "capacity {:?}", capacity);
        assert_eq!(result.unwrap().stack(), expected.stack());
    }
}

#[test]
fn ahead_stops_producing_after_failure() {
    let total = 10_000;
    let pulled = Cell::new(0);
    let events = (0..total)
        .map(|_| Ok(Event::Command(Command::Pop)))
        .inspect(|_| pulled.set(pulled.get() + 1));

    let mut out = Vec::new();
    let result = ahead::consume(events, Some(1), &opt(&[]), &mut out);
    let err = lifo::Error::Empty(EmptyStack);
    assert!(matches!(result, Err(Error::Lifo(e)) if e == err));
    assert!(pulled.get() < total);
    assert!(out.is_empty());
}

#[test]
fn ahead_producer_error() {
    let events = || {
        let push = |i| Ok(Event::Command(Command::Push(Value::Int(i))));
        let broken = io::Error::new(io::ErrorKind::Other, "broken pipe");
        vec![push(1), Ok(Event::Command(Command::Pop)), Err(Error::Io(broken)), push(2)]
    };

    for capacity in [Some(1), None] {
        let mut out = Vec::new();
        let result = ahead::consume(events().into_iter(), capacity, &opt(&[]), &mut out);
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    }
}
