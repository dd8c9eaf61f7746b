//! A `Vec` that is accessed only from its last pushed element.

use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::iter::FromIterator;

/// Failure to access the top of an empty stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyStack;

impl Display for EmptyStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "stack is empty".fmt(f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyStack {}

/// A `Vec` that is accessed only from its last pushed element.
///
/// The last pushed element that has not been popped yet is
/// the *top* of the stack.
/// Removing or inspecting the top of an empty stack fails with [`EmptyStack`]
/// and leaves the stack unchanged.
///
/// Iteration starts from the top, so
/// the nth element of a `Stack` is the nth-*last* pushed element, that is,
/// the nth element counted from the end of the underlying `Vec`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<A>(Vec<A>);

impl<A> Stack<A> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty stack with space for at least `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    /// Add an element to the top of the stack.
    pub fn push(&mut self, x: A) {
        self.0.push(x)
    }

    /// Remove and return the element on top of the stack.
    pub fn pop(&mut self) -> Result<A, EmptyStack> {
        self.0.pop().ok_or(EmptyStack)
    }

    /// Return the element on top of the stack without removing it.
    pub fn peek(&self) -> Result<&A, EmptyStack> {
        self.0.last().ok_or(EmptyStack)
    }

    pub fn peek_mut(&mut self) -> Result<&mut A, EmptyStack> {
        self.0.last_mut().ok_or(EmptyStack)
    }

    /// Remove n elements from the top of the stack.
    ///
    /// If the stack holds fewer than n elements, nothing is removed.
    pub fn pop_many(&mut self, n: usize) -> Result<(), EmptyStack> {
        let len = self.len().checked_sub(n).ok_or(EmptyStack)?;
        self.0.truncate(len);
        Ok(())
    }

    /// Remove all elements from the stack.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Return the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtain the nth element counted from the top of the stack.
    pub fn get(&self, n: usize) -> Option<&A> {
        self.iter().nth(n)
    }

    /// Push an element on the stack, run a function on it, then
    /// truncate the stack to its length before the push.
    ///
    /// This happens regardless of whether the function succeeds, and
    /// regardless of how many elements the function pushes or pops above
    /// the elements that were on the stack before.
    /// Elements below the pushed one that the function removes stay removed.
    pub fn with_pushed<F, Y, E>(&mut self, x: A, f: F) -> Result<Y, E>
    where
        F: FnOnce(&mut Stack<A>) -> Result<Y, E>,
    {
        let len = self.len();
        self.0.push(x);
        let y = f(self);
        self.0.truncate(len);
        y
    }

    /// Iterate through the elements of the stack starting from the top.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.0.iter().rev()
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

/// The last element of the vector becomes the top of the stack.
impl<A> From<Vec<A>> for Stack<A> {
    fn from(v: Vec<A>) -> Self {
        Self(v)
    }
}

impl<A> IntoIterator for Stack<A> {
    type Item = A;
    type IntoIter = core::iter::Rev<alloc::vec::IntoIter<Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().rev()
    }
}

impl<'a, A> IntoIterator for &'a Stack<A> {
    type Item = &'a A;
    type IntoIter = core::iter::Rev<core::slice::Iter<'a, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().rev()
    }
}

impl<A> FromIterator<A> for Stack<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl<A> Extend<A> for Stack<A> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

#[test]
fn push_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.len(), 2);

    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.pop(), Err(EmptyStack));
}

#[test]
fn pop_reverses() {
    let values: Vec<u32> = (0..100).map(|i| i * 7 % 13).collect();
    let mut stack = Stack::new();
    values.iter().for_each(|v| stack.push(*v));

    let mut popped = Vec::new();
    while let Ok(v) = stack.pop() {
        popped.push(v)
    }
    popped.reverse();
    assert_eq!(popped, values);
}

#[test]
fn len_counts() {
    let mut stack = Stack::new();
    for k in 0..20 {
        stack.push(k);
        assert_eq!(stack.len(), k + 1);
    }
    for j in 1..=20 {
        assert!(stack.pop().is_ok());
        assert_eq!(stack.len(), 20 - j);
        assert_eq!(stack.is_empty(), stack.len() == 0);
    }
}

#[test]
fn peek_keeps_top() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Ok(&2));

    *stack.peek_mut().unwrap() = 3;
    assert_eq!(stack.pop(), Ok(3));
}

#[test]
fn empty() {
    let mut stack: Stack<char> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), Err(EmptyStack));
    assert_eq!(stack.peek_mut(), Err(EmptyStack));
    assert_eq!(stack.pop(), Err(EmptyStack));
    assert!(stack.is_empty());

    stack.push('a');
    assert!(!stack.is_empty());
}

#[test]
fn clear() {
    let mut stack = Stack::new();
    stack.push(2);
    stack.push(1);
    stack.clear();
    assert_eq!(stack.len(), 0);
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(EmptyStack));
    assert_eq!(stack.peek(), Err(EmptyStack));

    // clearing an empty stack is fine
    stack.clear();
    assert!(stack.is_empty());

    // the stack stays usable
    stack.push(5);
    assert_eq!(stack.peek(), Ok(&5));
}

#[test]
fn pop_many() {
    let mut stack: Stack<_> = (1..=5).collect();
    assert_eq!(stack.pop_many(2), Ok(()));
    assert_eq!(stack.peek(), Ok(&3));

    assert_eq!(stack.pop_many(4), Err(EmptyStack));
    assert_eq!(stack.len(), 3);

    assert_eq!(stack.pop_many(3), Ok(()));
    assert!(stack.is_empty());
    assert_eq!(stack.pop_many(0), Ok(()));
}

#[test]
fn top_first() {
    let mut stack = Stack::from(alloc::vec![1, 2]);
    stack.extend([3, 4]);
    assert_eq!(stack.get(0), Some(&4));
    assert_eq!(stack.get(3), Some(&1));
    assert_eq!(stack.get(4), None);

    let refs: Vec<_> = (&stack).into_iter().copied().collect();
    assert_eq!(refs, [4, 3, 2, 1]);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [4, 3, 2, 1]);
}

#[test]
fn with_pushed() {
    let mut stack = Stack::from(alloc::vec![1]);
    let top = stack.with_pushed(2, |s| s.peek().copied());
    assert_eq!(top, Ok(2));
    assert_eq!(stack.len(), 1);

    let err: Result<(), &str> = stack.with_pushed(3, |_| Err("failed"));
    assert_eq!(err, Err("failed"));
    assert_eq!(stack.iter().collect::<Vec<_>>(), [&1]);
}

#[test]
fn with_pushed_keeps_below() {
    let mut stack = Stack::from(alloc::vec![1, 2]);

    // the function pops the pushed element itself
    assert_eq!(stack.with_pushed(3, |s| s.pop()), Ok(3));
    assert_eq!(stack.iter().collect::<Vec<_>>(), [&2, &1]);

    // the function pushes more elements
    let pushed: Result<_, EmptyStack> = stack.with_pushed(3, |s| {
        s.extend([4, 5]);
        Ok(s.len())
    });
    assert_eq!(pushed, Ok(5));
    assert_eq!(stack.iter().collect::<Vec<_>>(), [&2, &1]);

    // elements below the pushed one stay removed
    assert_eq!(stack.with_pushed(3, |s| s.pop_many(2)), Ok(()));
    assert_eq!(stack.iter().collect::<Vec<_>>(), [&1]);
}

#[test]
fn message() {
    use alloc::string::ToString;
    assert!(EmptyStack.to_string().contains("empty"));
}
