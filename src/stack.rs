//! A LIFO stack over the same nodes as [`LinkedList`](crate::LinkedList).

use crate::{Error, Result, iters::{self, Iter,}, nodes::Arena,};
use log::trace;
use std::{
    iter::{FromIterator, Extend,},
    fmt::{self, Debug, Display,},
};

/// A stack which only tracks its top node.
///
/// No length is kept: the [`Stack`] is empty exactly when it has no top.
#[derive(Clone,)]
pub struct Stack<T,> {
    arena: Arena<T,>,
    top: Option<usize,>,
}

impl<T,> Stack<T,> {
    /// Returns a new empty [`Stack`].
    #[inline]
    pub const fn new() -> Self {
        Self { arena: Arena::new(), top: None, }
    }
    /// `true` if this [`Stack`] is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.top.is_none() }
    /// Pushes a value onto the top of the [`Stack`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub fn push(&mut self, value: T,) -> &mut Self {
        self.top = Some(self.arena.new_node(value, self.top,));
        trace!("push: top {:?}", self.top,);

        self
    }
    /// Pops the top value off the [`Stack`].
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyContainer`] if the [`Stack`] is empty.
    pub fn pop(&mut self,) -> Result<T,> {
        let top = self.top.ok_or(Error::EmptyContainer,)?;

        self.top = self.arena[top].next;

        let value = self.arena.remove_node(top,);

        //Release every slot once nothing is left.
        if self.top.is_none() { self.arena.clear() }
        trace!("pop: top {:?}", self.top,);

        Ok(value)
    }
    /// Returns the top value.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyContainer`] if the [`Stack`] is empty.
    pub fn peek(&self,) -> Result<&T,> {
        self.top.map(|top| self.arena[top].value())
            .ok_or(Error::EmptyContainer,)
    }
    /// Returns the top value mutably.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyContainer`] if the [`Stack`] is empty.
    pub fn peek_mut(&mut self,) -> Result<&mut T,> {
        match self.top {
            Some(top) => Ok(self.arena[top].value_mut()),
            None => Err(Error::EmptyContainer),
        }
    }
    /// Removes every value.
    #[inline]
    pub fn clear(&mut self,) {
        self.arena.clear();
        self.top = None;
    }
    /// Returns an iterator over all values from the top down.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T,> {
        iters::new_iter(&self.arena, self.top, None,)
    }
}

impl<T,> Default for Stack<T,> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T,> Extend<T,> for Stack<T,> {
    fn extend<I,>(&mut self, iter: I)
        where I: IntoIterator<Item = T>, {
        iter.into_iter().for_each(|item| { self.push(item,); })
    }
}

impl<T,> FromIterator<T,> for Stack<T,> {
    fn from_iter<I,>(iter: I) -> Self
        where I: IntoIterator<Item = T>, {
        let mut stack = Stack::new();

        stack.extend(iter); stack
    }
}

impl<'t, T: 't,> IntoIterator for &'t Stack<T,> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Debug,> Debug for Stack<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display,> Display for Stack<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.write_str(&crate::render_with(self.iter(), ToString::to_string,),)
    }
}
