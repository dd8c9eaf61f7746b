use crate::Error;
use lifo::parse::{self, CmdIter, Command};
use std::io::{self, Read};

/// Number of bytes requested from the reader at once.
const CHUNK: usize = 8 * 1024;

/// Buffered parsing of a sequence of commands.
///
/// Input is read only when the buffer does not contain a complete command,
/// so commands are yielded before the whole input has been read.
pub struct ParseBuffer<R> {
    read: R,
    /// text read, but not yet parsed
    buf: String,
    /// bytes read, but not yet valid UTF-8
    bytes: Vec<u8>,
    /// true once the reader returned no more data or an error was yielded
    done: bool,
}

impl<R: Read> ParseBuffer<R> {
    pub fn new(read: R) -> Self {
        Self {
            read,
            buf: String::new(),
            bytes: Vec::new(),
            done: false,
        }
    }

    /// Read the next chunk of input into the buffer.
    ///
    /// Return the number of bytes read, which is 0 at the end of input.
    fn fill(&mut self) -> io::Result<usize> {
        let mut chunk = [0; CHUNK];
        let read_bytes = loop {
            match self.read.read(&mut chunk) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                result => break result?,
            }
        };
        self.bytes.extend_from_slice(&chunk[..read_bytes]);

        // keep an incomplete UTF-8 sequence at the end for the next chunk
        let valid = match core::str::from_utf8(&self.bytes) {
            Ok(s) => s.len(),
            Err(e) if e.error_len().is_none() && read_bytes > 0 => e.valid_up_to(),
            Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        };
        let rest = self.bytes.split_off(valid);
        let valid = core::mem::replace(&mut self.bytes, rest);
        let valid = String::from_utf8(valid)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.buf.push_str(&valid);
        Ok(read_bytes)
    }

    /// Parse the first command of the buffer.
    ///
    /// Return `None` if more input might complete or change the command.
    /// If `last` is true, there is no more input.
    fn parse(&mut self, last: bool) -> Option<Result<Command<String>, parse::Error>> {
        use parse::Error::ExpectedInput;
        let mut cmds = CmdIter::new(&self.buf);
        let result = cmds.next();
        let offset = cmds.offset();
        match result {
            Some(Ok(cmd)) => {
                let cmd = cmd.map(String::from);
                self.buf.drain(..offset);
                Some(Ok(cmd))
            }
            // an error at the end of the buffer may disappear with more input
            Some(Err(e)) if last || (e != ExpectedInput && offset < self.buf.len()) => Some(Err(e)),
            // the buffer contains only whitespace and comments
            None => {
                self.buf.clear();
                None
            }
            Some(Err(_)) => None,
        }
    }
}

impl<R: Read> Iterator for ParseBuffer<R> {
    type Item = Result<Command<String>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if let Some(result) = self.parse(false) {
                self.done = result.is_err();
                return Some(result.map_err(Error::from));
            }

            match self.fill() {
                Ok(0) => {
                    self.done = true;
                    return self.parse(true).map(|result| result.map_err(Error::from));
                }
                Ok(read_bytes) => log::trace!("Read {} bytes", read_bytes),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod chunked {
    use std::cell::Cell;
    use std::io::{self, Read};
    use std::rc::Rc;

    /// Reader that returns at most `chunk` bytes per read,
    /// counting the bytes handed out, and fails after `fail_at` bytes.
    pub struct Chunked {
        pub data: Vec<u8>,
        pub chunk: usize,
        pub fail_at: Option<usize>,
        pub count: Rc<Cell<usize>>,
    }

    impl Chunked {
        pub fn new(data: &str, chunk: usize) -> Self {
            Self {
                data: data.as_bytes().to_vec(),
                chunk,
                fail_at: None,
                count: Default::default(),
            }
        }
    }

    impl Read for Chunked {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let pos = self.count.get();
            if self.fail_at.map_or(false, |at| pos >= at) {
                return Err(io::Error::new(io::ErrorKind::Other, "broken pipe"));
            }
            let n = self.chunk.min(buf.len()).min(self.data.len() - pos);
            buf[..n].copy_from_slice(&self.data[pos..pos + n]);
            self.count.set(pos + n);
            Ok(n)
        }
    }
}

#[cfg(test)]
fn commands(s: &str) -> Vec<Command<String>> {
    let cmds = CmdIter::new(s).map(|cmd| cmd.map(|cmd| cmd.map(String::from)));
    cmds.collect::<Result<_, _>>().unwrap()
}

#[test]
fn reads_lazily() {
    let script = "push 1. ".repeat(100_000);
    let read = chunked::Chunked::new(&script, 16);
    let count = read.count.clone();

    let mut cmds = ParseBuffer::new(read);
    assert!(matches!(cmds.next(), Some(Ok(Command::Push(_)))));
    assert!(count.get() < script.len());
    assert_eq!(count.get(), 16);

    assert_eq!(cmds.count(), 99_999);
}

#[test]
fn split_anywhere() {
    let script = "push 12. push \"ä\nö. x\". (; a (; b ;)\n;) push -3.\npop.push ab. size. empty";
    let expected = commands("push 12. push \"ä\nö. x\". push -3. pop. push ab. size.");
    for chunk in 1..script.len() {
        let mut cmds = ParseBuffer::new(chunked::Chunked::new(script, chunk));
        let parsed: Vec<_> = cmds.by_ref().take(expected.len()).map(|c| c.unwrap()).collect();
        assert_eq!(parsed, expected, "chunk size {}", chunk);

        // the final command lacks its period
        let err = parse::Error::ExpectedInput;
        assert!(matches!(cmds.next(), Some(Err(Error::Lifo(lifo::Error::Parse(e)))) if e == err));
        assert!(cmds.next().is_none());
    }
}

#[test]
fn stops_at_parse_error() {
    let mut cmds = ParseBuffer::new(chunked::Chunked::new("size. push. pop.", 4));
    assert!(matches!(cmds.next(), Some(Ok(Command::Size))));
    assert!(matches!(cmds.next(), Some(Err(Error::Lifo(lifo::Error::Parse(_))))));
    assert!(cmds.next().is_none());
}

#[test]
fn keeps_commands_before_io_error() {
    let mut read = chunked::Chunked::new("push 1. push 2. pop. push 3.", 8);
    read.fail_at = Some(16);
    let mut cmds = ParseBuffer::new(read);
    assert!(matches!(cmds.next(), Some(Ok(Command::Push(_)))));
    assert!(matches!(cmds.next(), Some(Ok(Command::Push(_)))));
    assert!(matches!(cmds.next(), Some(Err(Error::Io(_)))));
    assert!(cmds.next().is_none());
}

#[test]
fn invalid_utf8() {
    let mut read = chunked::Chunked::new("size. ", 3);
    read.data.extend([0xff, b'.']);
    let mut cmds = ParseBuffer::new(read);
    assert!(matches!(cmds.next(), Some(Ok(Command::Size))));
    assert!(matches!(cmds.next(), Some(Err(Error::Io(_)))));
}
