
use crate::nodes::Arena;
use std::iter::*;

/// Creates a new `Iter` from parts.
///
/// # Params
///
/// arena --- The nodes to iterate over.
/// node --- The first node to yield.
/// len --- The number of nodes left to yield, if it is tracked.
#[inline]
pub(crate) const fn new_iter<'t, T: 't,>(arena: &'t Arena<T,>, node: Option<usize,>, len: Option<usize,>,) -> Iter<'t, T,> {
    Iter { arena, node, len, }
}

/// An iterator following the `next` links of a chain of nodes.
#[derive(Clone, Debug,)]
pub struct Iter<'t, T: 't,> {
    /// The nodes to iterate over.
    arena: &'t Arena<T,>,
    /// The next node to yield.
    node: Option<usize,>,
    /// The number of values left, `None` for a [`Stack`](crate::Stack).
    len: Option<usize,>,
}

impl<'t, T: 't,> Iterator for Iter<'t, T,> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item,> {
        let arena = self.arena;

        self.node.map(|node| {
            self.node = arena[node].next;
            self.len = self.len.map(|len| len - 1);

            arena[node].value()
        })
    }
    fn size_hint(&self) -> (usize, Option<usize,>,) {
        match self.len {
            Some(len) => (len, Some(len),),
            None if self.node.is_none() => (0, Some(0),),
            None => (1, None,),
        }
    }
}

impl<'t, T: 't,> FusedIterator for Iter<'t, T,> {}
