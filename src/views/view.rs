
use crate::{iters::{self, Iter,}, nodes::Arena,};
use std::{
    ops::Deref,
    fmt::{self, Debug,},
};

#[inline]
pub(crate) const fn new_view<'t, T: 't,>(arena: &'t Arena<T,>, node: usize, index: usize,) -> View<'t, T,> {
    View { arena, node, index, }
}

/// A borrowed reference to a single node of a [`LinkedList`](crate::LinkedList).
///
/// The [`View`] can walk forward along the chain it is part of.
pub struct View<'t, T: 't,> {
    arena: &'t Arena<T,>,
    node: usize,
    /// The position of the node counted from the head.
    index: usize,
}

impl<'t, T: 't,> View<'t, T,> {
    /// The value of the viewed node.
    #[inline]
    pub fn value(&self) -> &'t T {
        let arena = self.arena;

        arena[self.node].value()
    }
    /// The position of the viewed node counted from the head of its list.
    #[inline]
    pub const fn index(&self) -> usize { self.index }
    /// A [`View`] of the following node, if there is one.
    pub fn next(&self) -> Option<Self,> {
        let arena = self.arena;

        arena[self.node].next.map(
            |next| new_view(arena, next, self.index + 1,)
        )
    }
    /// Iterates over the values from the viewed node to the end of the chain.
    #[inline]
    pub fn iter(&self) -> Iter<'t, T,> {
        iters::new_iter(self.arena, Some(self.node), None,)
    }
    /// Copies the values from the viewed node to the end of the chain.
    #[inline]
    pub fn to_vec(&self) -> Vec<T,>
        where T: Clone, {
        self.iter().cloned().collect()
    }
    /// Maps the values from the viewed node to the end of the chain with `map`.
    #[inline]
    pub fn to_vec_with<U, F,>(&self, map: F,) -> Vec<U,>
        where F: FnMut(&'t T,) -> U, {
        self.iter().map(map,).collect()
    }
}

impl<'t, T: 't,> Clone for View<'t, T,> {
    #[inline]
    fn clone(&self) -> Self { *self }
}

impl<'t, T: 't,> Copy for View<'t, T,> {}

impl<'t, T: 't,> Deref for View<'t, T,> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target { self.value() }
}

impl<'t, T: 't + PartialEq,> PartialEq for View<'t, T,> {
    #[inline]
    fn eq(&self, rhs: &Self) -> bool { T::eq(self, rhs,) }
}

impl<'i, 't, T: 't + PartialEq,> PartialEq<&'i T,> for View<'t, T,> {
    #[inline]
    fn eq(&self, rhs: &&T) -> bool { T::eq(self, rhs,) }
}

impl<'t, T: 't + Debug,> Debug for View<'t, T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_struct("View")
            .field("index", &self.index)
            .field("value", self.value())
            .finish()
    }
}
