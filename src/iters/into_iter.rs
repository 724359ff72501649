
use crate::LinkedList;
use std::iter::*;

/// An owning iterator over a [`LinkedList`], front to back.
#[derive(Clone, Debug,)]
pub struct IntoIter<T,> {
    list: LinkedList<T,>,
}

#[inline]
pub(crate) fn new_into_iter<T,>(list: LinkedList<T,>,) -> IntoIter<T,> {
    IntoIter { list, }
}

impl<T,> Iterator for IntoIter<T,> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item,> { self.list.pop_front() }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) {
        (self.list.len(), Some(self.list.len()),)
    }
}

impl<T,> ExactSizeIterator for IntoIter<T,> {}

impl<T,> FusedIterator for IntoIter<T,> {}
