//! [`chain-list`] is an implementation of a Singly-Linked-List and a Stack using an
//! underlying [`Vec`] to store the nodes so that every node has exactly one owner and
//! relinking never means juggling references.
//!
//! ```
//! use chain_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.append(1).append(2).append(3);
//! list.insert(99, 1).unwrap();
//!
//! assert_eq!(list.to_vec(), vec![1, 99, 2, 3]);
//! assert_eq!(list.reverse().unwrap().to_vec(), vec![3, 2, 99, 1]);
//! ```
//!
//! Author --- daniel.bechaz@gmail.com

/// Generates the panic message for a broken chain of nodes.
macro_rules! node_err {
    () => (format!("chain nodes not maintained: at {} {}:{}", file!(), line!(), column!(),))
}

mod nodes;
mod error;
mod iters;
mod views;
mod stack;

use self::nodes::Arena;
use log::{debug, trace,};
use std::{
    cmp::Ordering,
    iter::{FromIterator, Extend,},
    fmt::{self, Debug, Display,},
};

pub use self::error::{Error, Result,};
pub use self::iters::{Iter, IntoIter,};
pub use self::views::View;
pub use self::stack::Stack;

/// The rendering of a container without values.
const EMPTY: &str = "empty";

/// Renders the values of `iter` as `value1 -> value2 -> ... -> valueN`.
///
/// # Params
///
/// iter --- The values to render.
/// show --- Converts a single value to text.
pub(crate) fn render_with<'t, T: 't, F,>(iter: Iter<'t, T,>, show: F,) -> String
    where F: FnMut(&'t T,) -> String, {
    let values = iter.map(show).collect::<Vec<_>>();

    if values.is_empty() { EMPTY.to_owned() }
    else { values.join(" -> ") }
}

/// An implementation of a singly-linked-list backed by a `Vec`.
#[derive(Clone,)]
pub struct LinkedList<T,> {
    /// The [`Node`](nodes::Node)s of the [`LinkedList`].
    arena: Arena<T,>,
    /// The index of the first [`Node`](nodes::Node).
    head: Option<usize,>,
    /// The index of the last [`Node`](nodes::Node).
    tail: Option<usize,>,
    /// The number of [`Node`](nodes::Node)s reachable from `head`.
    len: usize,
}

impl<T,> LinkedList<T,> {
    /// Returns the index of the [`Node`](nodes::Node) `steps` links after the head.
    ///
    /// # Panics
    ///
    /// * If `steps` is not less than the length.
    fn index_forward(&self, steps: usize,) -> usize {
        let mut at = self.head.unwrap_or_else(|| panic!("{}", node_err!()));

        for _ in 0..steps {
            at = self.arena[at].next.unwrap_or_else(|| panic!("{}", node_err!()));
        }

        at
    }
    /// Unlinks the value at `index` and returns it.
    ///
    /// # Params
    ///
    /// index --- The position to remove, must be less than the length.
    fn take_at(&mut self, index: usize,) -> T {
        debug_assert!(index < self.len, "`index` is out of bounds",);

        let node = if index == 0 {
            let head = self.head.unwrap_or_else(|| panic!("{}", node_err!()));

            //Advance the head and drop the tail if this was the only `Node`.
            self.head = self.arena[head].next;
            if self.len == 1 { self.tail = None }

            head
        } else {
            let prev = self.index_forward(index - 1,);
            let node = self.arena[prev].next.unwrap_or_else(|| panic!("{}", node_err!()));

            //Skip the removed `Node`.
            self.arena[prev].next = self.arena[node].next;
            if self.tail == Some(node) { self.tail = Some(prev) }

            node
        };
        let value = self.arena.remove_node(node,);

        self.len -= 1;
        //Release every slot once nothing is left.
        if self.len == 0 { self.arena.clear() }
        trace!("remove at {}: len {}", index, self.len,);
        self.assert_invariants();

        value
    }
    /// Walks the chain and checks that `head`, `tail` and `len` agree with it.
    #[cfg(any(test, feature = "check_invariants",))]
    fn assert_invariants(&self,) {
        assert_eq!(self.head.is_none(), self.len == 0, "`head` disagrees with `len`",);
        assert_eq!(self.tail.is_none(), self.len == 0, "`tail` disagrees with `len`",);

        let mut reachable = 0;
        let mut last = None;
        let mut node = self.head;

        while let Some(at) = node {
            reachable += 1;
            last = Some(at);
            node = self.arena[at].next;
            assert!(reachable <= self.len, "chain is longer than `len`",);
        }

        assert_eq!(reachable, self.len, "`len` disagrees with the chain",);
        assert_eq!(last, self.tail, "`tail` is not the last `Node`",);
    }
    #[cfg(not(any(test, feature = "check_invariants",)))]
    #[inline(always)]
    fn assert_invariants(&self,) {}
}

impl<T,> LinkedList<T,> {
    /// Returns a new empty [`LinkedList`].
    #[inline]
    pub const fn new() -> Self {
        Self { arena: Arena::new(), head: None, tail: None, len: 0, }
    }
    /// Returns a new empty [`LinkedList`] with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize,) -> Self {
        Self { arena: Arena::with_capacity(capacity,), head: None, tail: None, len: 0, }
    }
    /// Returns the number of values in this [`LinkedList`].
    #[inline]
    pub const fn len(&self) -> usize { self.len }
    /// `true` if this [`LinkedList`] is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.len() == 0 }
    /// Returns the first value.
    #[inline]
    pub fn front(&self) -> Option<&T,> {
        self.head.map(|head| self.arena[head].value())
    }
    /// Returns the last value.
    #[inline]
    pub fn back(&self) -> Option<&T,> {
        self.tail.map(|tail| self.arena[tail].value())
    }
    /// Returns the value at `index`.
    pub fn get(&self, index: usize,) -> Option<&T,> {
        if index < self.len { Some(self.arena[self.index_forward(index,)].value()) }
        else { None }
    }
    /// Pushes a value onto the back of the [`LinkedList`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub fn append(&mut self, value: T,) -> &mut Self {
        let new = self.arena.new_node(value, None,);

        match self.tail {
            Some(tail) => self.arena[tail].next = Some(new),
            None => self.head = Some(new),
        }
        self.tail = Some(new);
        self.len += 1;
        trace!("append: len {}", self.len,);
        self.assert_invariants();

        self
    }
    /// Pushes a value onto the front of the [`LinkedList`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub fn prepend(&mut self, value: T,) -> &mut Self {
        let new = self.arena.new_node(value, self.head,);

        self.head = Some(new);
        if self.tail.is_none() { self.tail = Some(new) }
        self.len += 1;
        trace!("prepend: len {}", self.len,);
        self.assert_invariants();

        self
    }
    /// Inserts a value so that it ends up at `index`.
    ///
    /// # Params
    ///
    /// value --- The value to insert.
    /// index --- The position of the new value, at most the length.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if `index` is greater than the length.
    pub fn insert(&mut self, value: T, index: usize,) -> Result<&mut Self,> {
        if index > self.len { return Err(Error::IndexOutOfRange { index, len: self.len, }) }
        if index == 0 { return Ok(self.prepend(value,)) }
        if index == self.len { return Ok(self.append(value,)) }

        //Splice the new `Node` in after its predecessor.
        let prev = self.index_forward(index - 1,);
        let new = self.arena.new_node(value, self.arena[prev].next,);

        self.arena[prev].next = Some(new);
        self.len += 1;
        trace!("insert at {}: len {}", index, self.len,);
        self.assert_invariants();

        Ok(self)
    }
    /// Removes the value at `index`.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if `index` is not less than the length.
    pub fn remove_at(&mut self, index: usize,) -> Result<&mut Self,> {
        if index >= self.len { return Err(Error::IndexOutOfRange { index, len: self.len, }) }

        self.take_at(index,);

        Ok(self)
    }
    /// Removes the first value.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyContainer`] if the [`LinkedList`] is empty.
    pub fn remove_first(&mut self,) -> Result<&mut Self,> {
        if self.is_empty() { return Err(Error::EmptyContainer) }

        self.remove_at(0,)
    }
    /// Removes the last value.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyContainer`] if the [`LinkedList`] is empty.
    pub fn remove_last(&mut self,) -> Result<&mut Self,> {
        if self.is_empty() { return Err(Error::EmptyContainer) }

        self.remove_at(self.len - 1,)
    }
    /// Pops the first value off the front of the [`LinkedList`].
    pub fn pop_front(&mut self,) -> Option<T,> {
        if self.is_empty() { None }
        else { Some(self.take_at(0,)) }
    }
    /// Returns a [`View`] of the first node whose value and position pass `pred`.
    ///
    /// # Params
    ///
    /// pred --- Receives each value with its position, front to back.
    pub fn find<P,>(&self, mut pred: P,) -> Option<View<'_, T,>,>
        where P: FnMut(&T, usize,) -> bool, {
        let mut node = self.head;
        let mut index = 0;

        while let Some(at) = node {
            if pred(self.arena[at].value(), index,) {
                return Some(views::new_view(&self.arena, at, index,))
            }

            node = self.arena[at].next;
            index += 1;
        }

        None
    }
    /// Counts the values whose value and position pass `pred`.
    pub fn count<P,>(&self, mut pred: P,) -> usize
        where P: FnMut(&T, usize,) -> bool, {
        self.iter().enumerate()
            .filter(|&(index, value,)| pred(value, index,))
            .count()
    }
    /// Merges two sorted lists into one sorted list using `cmp` to order values.
    ///
    /// Values of `self` are taken while `cmp` returns [`Ordering::Less`]; on ties the
    /// value of `other` is taken first. Once one list runs out the rest of the other is
    /// kept in place and the merged values are prepended onto it. If either list is
    /// empty the other is returned as it is.
    ///
    /// # Params
    ///
    /// other --- The list to merge into this one.
    /// cmp --- Orders a value of `self` against a value of `other`.
    pub fn merge_by<F,>(self, other: Self, mut cmp: F,) -> Self
        where F: FnMut(&T, &T,) -> Ordering, {
        if self.is_empty() { return other }
        if other.is_empty() { return self }

        debug!("merge: {} + {} values", self.len, other.len,);

        let (mut lhs, mut rhs,) = (self, other,);
        let mut merged = Vec::new();

        loop {
            let take_lhs = match (lhs.front(), rhs.front(),) {
                (Some(a), Some(b),) => cmp(a, b,) == Ordering::Less,
                _ => break,
            };

            merged.extend(if take_lhs { lhs.pop_front() } else { rhs.pop_front() });
        }

        let mut rest = if lhs.is_empty() { rhs } else { lhs };

        debug!("merge: {} merged, {} kept in place", merged.len(), rest.len,);
        for value in merged.into_iter().rev() { rest.prepend(value,); }

        rest
    }
    /// Reverses the [`LinkedList`] in place and returns a [`View`] of the new head.
    ///
    /// # Errors
    ///
    /// * [`Error::Reverse`] if the [`LinkedList`] is empty.
    pub fn reverse(&mut self,) -> Result<View<'_, T,>,> {
        let mut prev = None;
        let mut current = self.head;

        while let Some(node) = current {
            current = self.arena[node].next;
            self.arena[node].next = prev;
            prev = Some(node);
        }

        let head = prev.ok_or(Error::Reverse,)?;

        self.tail = self.head;
        self.head = Some(head);
        debug!("reverse: len {}", self.len,);
        self.assert_invariants();

        Ok(views::new_view(&self.arena, head, 0,))
    }
    /// Removes every value.
    #[inline]
    pub fn clear(&mut self,) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        trace!("clear",);
        self.assert_invariants();
    }
    /// Returns an iterator over all values in the [`LinkedList`].
    #[inline]
    pub fn iter(&self) -> Iter<'_, T,> {
        iters::new_iter(&self.arena, self.head, Some(self.len),)
    }
    /// Copies the values into a `Vec`, front to back.
    #[inline]
    pub fn to_vec(&self) -> Vec<T,>
        where T: Clone, {
        self.iter().cloned().collect()
    }
    /// Renders the values with `show`.
    #[inline]
    pub fn render_with<F,>(&self, show: F,) -> String
        where F: FnMut(&T,) -> String, {
        render_with(self.iter(), show,)
    }
    /// Prints the values to stdout with `show`.
    pub fn print_with<F,>(&self, show: F,)
        where F: FnMut(&T,) -> String, {
        let rendered = self.render_with(show,);

        debug!("print: {}", rendered,);
        println!("{}", rendered);
    }
}

impl<T: Display,> LinkedList<T,> {
    /// Prints the values to stdout.
    #[inline]
    pub fn print(&self,) { self.print_with(ToString::to_string,) }
}

impl<T: PartialOrd,> LinkedList<T,> {
    /// Merges two sorted lists into one sorted list.
    ///
    /// Incomparable values are treated as equal. See [`LinkedList::merge_by`].
    #[inline]
    pub fn merge(self, other: Self,) -> Self {
        self.merge_by(other, |a, b,| a.partial_cmp(b,).unwrap_or(Ordering::Equal),)
    }
}

impl<T,> Default for LinkedList<T,> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T,> Extend<T,> for LinkedList<T,> {
    fn extend<I,>(&mut self, iter: I)
        where I: IntoIterator<Item = T>, {
        iter.into_iter().for_each(|item| { self.append(item,); })
    }
}

impl<T,> FromIterator<T,> for LinkedList<T,> {
    fn from_iter<I,>(iter: I) -> Self
        where I: IntoIterator<Item = T>, {
        let mut list = LinkedList::new();

        list.extend(iter); list
    }
}

impl<T,> IntoIterator for LinkedList<T,> {
    type Item = T;
    type IntoIter = IntoIter<T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { iters::new_into_iter(self,) }
}

impl<'t, T: 't,> IntoIterator for &'t LinkedList<T,> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: PartialEq,> PartialEq for LinkedList<T,> {
    fn eq(&self, rhs: &Self) -> bool {
        self.len == rhs.len
        && self.iter().zip(rhs.iter())
            .all(|(lhs, rhs,)| lhs == rhs)
    }
}

impl<T: Eq,> Eq for LinkedList<T,> {}

impl<T: Debug,> Debug for LinkedList<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display,> Display for LinkedList<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.write_str(&self.render_with(ToString::to_string,),)
    }
}
