#![no_std]
#![forbid(unsafe_code)]

//! Last-in-first-out stacks with checked access.
//!
//! The central data structure of this crate is the [`Stack`].
//! Elements are pushed onto the top of a stack and
//! only the top element can be inspected ([`Stack::peek`]) or
//! removed ([`Stack::pop`]).
//! Accessing the top of an empty stack does not panic,
//! but yields an [`EmptyStack`] error and leaves the stack as it was.
//!
//! ~~~
//! # use lifo::{EmptyStack, Stack};
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.len(), 2);
//! assert_eq!(stack.peek(), Ok(&2));
//!
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(EmptyStack));
//! assert!(stack.is_empty());
//! ~~~
//!
//! # Scripts
//!
//! Stacks can also be driven by scripts in the format of [`lifo_parse`].
//! A [`Machine`] runs script commands on a stack of owned values:
//!
//! ~~~
//! # use lifo::{Error, Machine, Output};
//! let mut machine = Machine::new();
//! let out = machine.run_script("push 1. push 2. pop. size.")?;
//! let shown: Vec<_> = out.iter().filter(|o| !o.is_unit()).map(|o| o.to_string()).collect();
//! assert_eq!(shown, ["2", "1"]);
//! # Ok::<_, Error>(())
//! ~~~
//!
//! A stack is owned by a single user at a time;
//! all modifying operations take `&mut self`.
//! To share a stack between threads, wrap it in a mutex.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
#[macro_use]
extern crate log;

pub mod error;
pub mod machine;
mod stack;

pub use error::Error;
pub use lifo_parse as parse;
pub use machine::{Machine, Output};
pub use stack::{EmptyStack, Stack};
