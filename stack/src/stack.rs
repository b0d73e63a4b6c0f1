use std::convert::TryFrom;
use std::fmt;
use std::io;

use log::trace;

use crate::err::Error;

/// Value held by one stack slot.
pub type Cell = i32;

// Storage reserved up front; larger stacks grow on demand below their capacity.
const PREALLOC_LIMIT: usize = 1024;

/// IntStack is a fixed-capacity LIFO of integers. The logical top lives at the
/// end of `data`.
///
/// Every derived operator validates size and headroom before touching the
/// stack, so a failed call never leaves a partial result behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntStack {
    data: Vec<Cell>,
    capacity: usize,
}

impl IntStack {
    /// Create an empty stack, rejecting capacities that are negative or do
    /// not fit in usize.
    pub fn new(capacity: i64) -> Result<Self, Error> {
        let capacity = usize::try_from(capacity).map_err(|_| Error::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IntStack {
            data: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
        }
    }

    pub fn push(&mut self, d: Cell) -> Result<(), Error> {
        if self.is_full() {
            trace!("push {} rejected: stack full at {}", d, self.capacity);
            return Err(Error::CapacityExceeded);
        }
        self.data.push(d);
        Ok(())
    }

    /// Push `ds` bottom-first. Either all values land or none do.
    pub fn push_n(&mut self, ds: &[Cell]) -> Result<(), Error> {
        if !self.room(ds.len()) {
            return Err(Error::CapacityExceeded);
        }
        for d in ds {
            self.push(*d)?;
        }
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Cell, Error> {
        self.data.pop().ok_or(Error::EmptyStack)
    }

    pub fn top(&self) -> Result<Cell, Error> {
        self.back(0).ok_or(Error::EmptyStack)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// Elements bottom-to-top.
    pub fn data(&self) -> &[Cell] {
        &self.data
    }

    /// Elements top-to-bottom.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.data.iter().rev().copied()
    }

    /// The n-th element counted from the top, 0 being the top itself.
    pub fn back(&self, n: usize) -> Option<Cell> {
        let len = self.data.len();
        if n >= len {
            return None;
        }
        Some(self.data[len - n - 1])
    }

    pub fn require(&self, n: usize) -> bool {
        self.data.len() >= n
    }

    pub fn room(&self, n: usize) -> bool {
        self.capacity - self.data.len() >= n
    }

    // Size and headroom checks shared by the derived operators.
    fn ensure(&self, name: &str, require: usize, grow: usize) -> Result<(), Error> {
        if !self.require(require) {
            trace!("{} rejected: needs {} elements, have {}", name, require, self.size());
            return Err(Error::InsufficientElements);
        }
        if !self.room(grow) {
            trace!("{} rejected: needs room for {} more, capacity {}", name, grow, self.capacity);
            return Err(Error::CapacityExceeded);
        }
        Ok(())
    }

    // Pop N elements into a local buffer, top first.
    fn take<const N: usize>(&mut self) -> Result<[Cell; N], Error> {
        let mut buf = [0; N];
        for slot in buf.iter_mut() {
            *slot = self.pop()?;
        }
        Ok(buf)
    }

    /// ( a -- a a )
    pub fn dup(&mut self) -> Result<(), Error> {
        self.ensure("dup", 1, 1)?;
        let a = self.top()?;
        self.push(a)
    }

    /// ( b a -- a b )
    pub fn swap(&mut self) -> Result<(), Error> {
        self.ensure("swap", 2, 0)?;
        let [a, b] = self.take::<2>()?;
        self.push_n(&[a, b])
    }

    /// ( b a -- b a b )
    pub fn over(&mut self) -> Result<(), Error> {
        self.ensure("over", 2, 1)?;
        let [a, b] = self.take::<2>()?;
        self.push_n(&[b, a, b])
    }

    /// ( c b a -- b a c )
    pub fn rot(&mut self) -> Result<(), Error> {
        self.ensure("rot", 3, 0)?;
        let [a, b, c] = self.take::<3>()?;
        self.push_n(&[b, a, c])
    }

    /// ( a -- )
    pub fn drop_top(&mut self) -> Result<(), Error> {
        self.ensure("drop", 1, 0)?;
        self.pop().map(|_| ())
    }

    /// ( b a -- )
    pub fn two_drop(&mut self) -> Result<(), Error> {
        self.ensure("2drop", 2, 0)?;
        self.take::<2>().map(|_| ())
    }

    /// ( b a -- b a b a )
    pub fn two_dup(&mut self) -> Result<(), Error> {
        self.ensure("2dup", 2, 2)?;
        let [a, b] = self.take::<2>()?;
        self.push_n(&[b, a, b, a])
    }

    /// ( d c b a -- b a d c )
    pub fn two_swap(&mut self) -> Result<(), Error> {
        self.ensure("2swap", 4, 0)?;
        let [a, b, c, d] = self.take::<4>()?;
        self.push_n(&[b, a, d, c])
    }

    /// ( d c b a -- d c b a d c )
    pub fn two_over(&mut self) -> Result<(), Error> {
        self.ensure("2over", 4, 2)?;
        let [a, b, c, d] = self.take::<4>()?;
        self.push_n(&[d, c, b, a, d, c])
    }

    /// ( b a -- a+b ), wrapping on overflow.
    pub fn add(&mut self) -> Result<(), Error> {
        self.ensure("add", 2, 0)?;
        let [a, b] = self.take::<2>()?;
        self.push(a.wrapping_add(b))
    }

    /// Write the same listing as `Display` to `w`.
    pub fn dump<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self)
    }
}

impl fmt::Display for IntStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "empty stack");
        }
        for (pos, value) in self.iter().enumerate() {
            writeln!(f, "{}: {}", pos, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Build a stack from a top-to-bottom listing.
    fn stack_of(capacity: usize, items: &[Cell]) -> IntStack {
        let mut st = IntStack::with_capacity(capacity);
        for v in items.iter().rev() {
            st.push(*v).unwrap();
        }
        st
    }

    fn listing(st: &IntStack) -> Vec<Cell> {
        st.iter().collect()
    }

    #[test]
    fn test_stack_new() {
        let st = IntStack::new(4).unwrap();
        assert_eq!(st.size(), 0);
        assert_eq!(st.capacity(), 4);
        assert_eq!(IntStack::new(-1), Err(Error::InvalidCapacity(-1)));
        assert_eq!(IntStack::new(0).unwrap().capacity(), 0);
    }

    #[test]
    fn test_stack_push_full() {
        let mut st = IntStack::with_capacity(2);
        st.push(0x01).unwrap();
        st.push(0x02).unwrap();
        assert_eq!(st.push(0x03), Err(Error::CapacityExceeded));
        assert_eq!(st.data(), &[0x01, 0x02]);
    }

    #[test]
    fn test_stack_push_n_is_atomic() {
        let mut st = IntStack::with_capacity(3);
        st.push(7).unwrap();
        assert_eq!(st.push_n(&[1, 2, 3]), Err(Error::CapacityExceeded));
        assert_eq!(st.data(), &[7]);
        st.push_n(&[1, 2]).unwrap();
        assert_eq!(st.data(), &[7, 1, 2]);
    }

    #[test]
    fn test_stack_pop_top() {
        let mut st = stack_of(4, &[2, 1]);
        assert_eq!(st.top(), Ok(2));
        assert_eq!(st.pop(), Ok(2));
        assert_eq!(st.pop(), Ok(1));
        assert_eq!(st.pop(), Err(Error::EmptyStack));
        assert_eq!(st.top(), Err(Error::EmptyStack));
    }

    #[test]
    fn test_stack_back() {
        let st = stack_of(4, &[2, 1]);
        assert_eq!(st.back(0), Some(2));
        assert_eq!(st.back(1), Some(1));
        assert_eq!(st.back(2), None);
    }

    #[test]
    fn test_stack_dup() {
        let mut st = stack_of(8, &[5, 2, 9]);
        st.dup().unwrap();
        assert_eq!(listing(&st), vec![5, 5, 2, 9]);
    }

    #[test]
    fn test_stack_swap() {
        let mut st = stack_of(8, &[5, 2, 9]);
        st.swap().unwrap();
        assert_eq!(listing(&st), vec![2, 5, 9]);
    }

    #[test]
    fn test_stack_over() {
        let mut st = stack_of(8, &[5, 2, 9]);
        st.over().unwrap();
        assert_eq!(listing(&st), vec![2, 5, 2, 9]);
    }

    #[test]
    fn test_stack_rot() {
        let mut st = stack_of(8, &[1, 2, 3, 4]);
        st.rot().unwrap();
        assert_eq!(listing(&st), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_stack_two_ops() {
        let mut st = stack_of(8, &[1, 2, 3, 4]);
        st.two_dup().unwrap();
        assert_eq!(listing(&st), vec![1, 2, 1, 2, 3, 4]);
        st.two_drop().unwrap();
        st.two_swap().unwrap();
        assert_eq!(listing(&st), vec![3, 4, 1, 2]);
        st.two_over().unwrap();
        assert_eq!(listing(&st), vec![1, 2, 3, 4, 1, 2]);
    }

    #[test]
    fn test_stack_add_wraps() {
        let mut st = stack_of(4, &[Cell::MAX, 1]);
        st.add().unwrap();
        assert_eq!(listing(&st), vec![Cell::MIN]);
    }

    #[test]
    fn test_stack_growth_without_room() {
        let mut st = stack_of(4, &[1, 2, 3]);
        let before = st.clone();
        assert_eq!(st.two_dup(), Err(Error::CapacityExceeded));
        assert_eq!(st, before);
        st.over().unwrap();
        let before = st.clone();
        assert_eq!(st.dup(), Err(Error::CapacityExceeded));
        assert_eq!(st.two_over(), Err(Error::CapacityExceeded));
        assert_eq!(st, before);
    }

    #[test]
    fn test_stack_display() {
        let st = stack_of(4, &[7, -3]);
        assert_eq!(format!("{}", st), "0: 7\n1: -3\n");
        assert_eq!(format!("{}", IntStack::with_capacity(4)), "empty stack\n");
        let mut out = Vec::new();
        st.dump(&mut out).unwrap();
        assert_eq!(out, b"0: 7\n1: -3\n");
    }
}
