
use std::ops::{Index, IndexMut,};

/// A node in a singly linked chain.
#[derive(Clone, Debug,)]
pub struct Node<T,> {
  /// The value inside this [`Node`], `None` while the slot is on the empty stack.
  pub value: Option<T,>,
  /// The index of the next [`Node`].
  pub next: Option<usize>,
}

impl<T,> Node<T,> {
  /// Create a new, populated [`Node`].
  ///
  /// # Params
  ///
  /// value --- The value to populate the [`Node`] with.
  /// next --- The index of the [`Node`] to follow this one.
  #[inline]
  pub const fn new(value: T, next: Option<usize>,) -> Self {
    Self { value: Some(value,), next, }
  }
  /// Get the value of a populated [`Node`].
  ///
  /// # Panics
  ///
  /// * If the [`Node`] is on the empty stack.
  #[inline]
  pub fn value(&self,) -> &T {
    self.value.as_ref().unwrap_or_else(|| panic!("{}", node_err!()))
  }
  /// Get the value of a populated [`Node`] mutably.
  ///
  /// # Panics
  ///
  /// * If the [`Node`] is on the empty stack.
  #[inline]
  pub fn value_mut(&mut self,) -> &mut T {
    self.value.as_mut().unwrap_or_else(|| panic!("{}", node_err!()))
  }
}

/// The slot store behind a container.
///
/// Vacated slots are kept on a stack linked through their `next` pointers and are
/// reused before the `Vec` grows.
#[derive(Clone, Debug,)]
pub struct Arena<T,> {
  /// Every slot, populated or not.
  nodes: Vec<Node<T,>,>,
  /// The head of the stack of vacated slots.
  empty: Option<usize,>,
}

impl<T,> Arena<T,> {
  #[inline]
  pub const fn new() -> Self {
    Self { nodes: Vec::new(), empty: None, }
  }
  #[inline]
  pub fn with_capacity(capacity: usize,) -> Self {
    Self { nodes: Vec::with_capacity(capacity,), empty: None, }
  }
  /// Creates a new [`Node`] and returns its index.
  ///
  /// # Params
  ///
  /// value --- The value to populate the [`Node`] with.
  /// next --- The index of the [`Node`] to follow the new one.
  pub fn new_node(&mut self, value: T, next: Option<usize>,) -> usize {
    match self.empty {
      //There is a vacated slot.
      Some(new) => {
        //Pop the slot off the empty stack.
        self.empty = self.nodes[new].next;
        //Populate the slot.
        self.nodes[new] = Node::new(value, next,);

        new
      },
      //There is no vacated slot.
      None => {
        let new = self.nodes.len();

        self.nodes.push(Node::new(value, next,));

        new
      },
    }
  }
  /// Empties the [`Node`] at `node`, pushes its slot onto the empty stack and returns
  /// its value.
  ///
  /// The caller must already have unlinked the [`Node`] from its chain.
  ///
  /// # Params
  ///
  /// node --- The index of the [`Node`] to remove.
  ///
  /// # Panics
  ///
  /// * If the [`Node`] is already empty.
  pub fn remove_node(&mut self, node: usize,) -> T {
    let value = self.nodes[node].value.take().unwrap_or_else(|| panic!("{}", node_err!()));

    self.nodes[node].next = self.empty;
    self.empty = Some(node);

    value
  }
  /// Drops every value and every slot.
  #[inline]
  pub fn clear(&mut self,) {
    self.nodes.clear();
    self.empty = None;
  }
  /// The number of slots, populated or not.
  #[cfg(test)]
  #[inline]
  pub fn slots(&self,) -> usize { self.nodes.len() }
}

impl<T,> Index<usize,> for Arena<T,> {
  type Output = Node<T,>;

  #[inline]
  fn index(&self, index: usize,) -> &Self::Output { &self.nodes[index] }
}

impl<T,> IndexMut<usize,> for Arena<T,> {
  #[inline]
  fn index_mut(&mut self, index: usize,) -> &mut Self::Output { &mut self.nodes[index] }
}
