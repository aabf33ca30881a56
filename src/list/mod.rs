use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{ListError, Result};
use crate::{IntoIter, Iter, IterMut};

pub mod iterator;

mod algorithms;

/// The `List` is a singly-linked list with owned nodes and a reference to its
/// last node. It allows appending and prepending in constant time. In
/// compromise, accessing, inserting or removing elements at index *i* take
/// *O*(*i*) time.
///
/// The `List` contains:
/// - a pointer `first` to the first node, owning the chain of nodes;
/// - a pointer `last` to the last node, which never owns it;
/// - a length field `len` indicating the length of the list.
///
/// # Invariants
///
/// - `len == 0` if and only if `first` and `last` are both `None`;
/// - following `next` from `first` exactly `len - 1` times reaches `last`,
///   and `last.next` is `None`.
pub struct List<T> {
    first: Option<NonNull<Node<T>>>,
    last: Option<NonNull<Node<T>>>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Option<NonNull<Node<T>>> {
        self.first
    }

    fn invalid_index(&self, index: usize) -> ListError {
        ListError::InvalidIndex {
            index,
            len: self.len,
        }
    }

    /// Walk `at` links from the first node, or return `None` if the chain
    /// is shorter than that.
    fn node_at(&self, at: usize) -> Option<NonNull<Node<T>>> {
        let mut node = self.first;
        for _ in 0..at {
            // SAFETY: every node reachable from `first` is owned by the list
            // and alive while `self` is borrowed.
            node = unsafe { node?.as_ref().next };
        }
        node
    }

    /// Return the node at `at`, which must satisfy `at < len`.
    fn valid_node(&self, at: usize) -> Result<NonNull<Node<T>>> {
        if at >= self.len {
            return Err(self.invalid_index(at));
        }
        let node = self.node_at(at);
        debug_assert!(node.is_some(), "chain is shorter than `len`");
        node.ok_or_else(|| self.invalid_index(at))
    }

    /// Attach a detached single node `node` to the list, right after `prev`.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list, or whether `prev` is the last node (the `last` pointer is not
    /// updated here).
    ///
    /// If `prev` does not belong to the list, or it is the last node, this
    /// function call will make the list ill-formed.
    unsafe fn attach_after(&mut self, mut prev: NonNull<Node<T>>, mut node: NonNull<Node<T>>) {
        debug_assert_ne!(Some(prev), self.last);
        node.as_mut().next = prev.as_ref().next;
        prev.as_mut().next = Some(node);
        self.len += 1;
    }

    /// Detach the node right after `prev` from the list, and return its
    /// element.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list, or whether it has a successor.
    ///
    /// If `prev` does not belong to the list, this function call will make
    /// the list ill-formed.
    unsafe fn detach_after(&mut self, mut prev: NonNull<Node<T>>) -> Option<T> {
        let node = prev.as_ref().next?;
        prev.as_mut().next = node.as_ref().next;
        if Some(node) == self.last {
            self.last = Some(prev);
        }
        self.len -= 1;
        Some(Node::into_element(node))
    }

    #[cfg(debug_assertions)]
    fn assert_ends(&self) {
        assert_eq!(self.len == 0, self.first.is_none());
        assert_eq!(self.len == 0, self.last.is_none());
        if self.len == 1 {
            assert_eq!(self.first, self.last);
        }
        if let Some(last) = self.last {
            // SAFETY: `last` is a node of the list.
            assert!(unsafe { last.as_ref().next.is_none() });
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use tailed_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            first: None,
            last: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.prepend("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.prepend(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.prepend(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.append(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        trace_event!(len = self.len, "clearing list");
        while self.pop_front().is_some() {}
    }

    /// Swaps the contents of two lists, without moving any node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut a = List::from([1, 2, 3]);
    /// let mut b = List::from([4]);
    /// a.swap(&mut b);
    /// assert_eq!(a, List::from([4]));
    /// assert_eq!(b, List::from([1, 2, 3]));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.prepend(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `first` is owned by the list, which is borrowed immutably.
        self.first.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `first` is owned by the list, which is borrowed mutably.
        self.first.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `last` is owned by the list, which is borrowed immutably.
        self.last.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `last` is owned by the list, which is borrowed mutably.
        self.last.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*at*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::{List, ListError};
    ///
    /// let list = List::from(['a', 'b', 'c']);
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert_eq!(list.get(3), Err(ListError::InvalidIndex { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, at: usize) -> Result<&T> {
        let node = self.valid_node(at)?;
        // SAFETY: `node` is owned by the list, which is borrowed immutably.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `at >= len`.
    pub fn get_mut(&mut self, at: usize) -> Result<&mut T> {
        let node = self.valid_node(at)?;
        // SAFETY: `node` is owned by the list, which is borrowed mutably.
        Ok(unsafe { &mut (*node.as_ptr()).element })
    }

    /// Replaces the element at the given index, and returns the old one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `at >= len`. The list is left
    /// unchanged and `elt` is dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*at*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.set(1, 20), Ok(2));
    /// assert_eq!(list, List::from([1, 20, 3]));
    /// assert!(list.set(3, 30).is_err());
    /// ```
    pub fn set(&mut self, at: usize, elt: T) -> Result<T> {
        let slot = self.get_mut(at)?;
        Ok(std::mem::replace(slot, elt))
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.prepend(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.prepend(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn prepend(&mut self, elt: T) {
        let mut node = Node::new_detached(elt);
        // SAFETY: `node` is freshly allocated and not yet shared.
        unsafe { node.as_mut().next = self.first };
        self.first = Some(node);
        if self.last.is_none() {
            self.last = Some(node);
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        self.assert_ends();
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::new();
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn append(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        match self.last {
            // SAFETY: `last` is a node of the list, and the list is borrowed
            // mutably.
            Some(mut last) => unsafe { last.as_mut().next = Some(node) },
            None => self.first = Some(node),
        }
        self.last = Some(node);
        self.len += 1;
        #[cfg(debug_assertions)]
        self.assert_ends();
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.prepend(1);
    /// list.prepend(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.first?;
        // SAFETY: `node` is the first node of the list, it is unlinked
        // before being freed.
        unsafe {
            self.first = node.as_ref().next;
            if self.first.is_none() {
                self.last = None;
            }
            self.len -= 1;
            #[cfg(debug_assertions)]
            self.assert_ends();
            Some(Node::into_element(node))
        }
    }

    /// Adds an element at the given index in the list, so that it becomes
    /// the element at `at`. Elements after it are shifted back by one.
    ///
    /// Inserting at `0` or at `len` never fails, and takes constant time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `at > len`. The list is left
    /// unchanged and `elt` is dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*at*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// list.insert(2, 4)?;
    /// list.insert(4, 5)?;
    /// list.insert(0, 0)?;
    /// assert!(list.insert(7, 6).is_err());
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 4, 3, 5]);
    /// # Ok::<(), tailed_list::ListError>(())
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> Result<()> {
        if at > self.len {
            return Err(self.invalid_index(at));
        }
        if at == self.len {
            trace_event!(index = at, "insert at back");
            self.append(elt);
        } else if at == 0 {
            trace_event!(index = at, "insert at front");
            self.prepend(elt);
        } else {
            trace_event!(index = at, "insert inside");
            let prev = self.valid_node(at - 1)?;
            // SAFETY: `prev` is a node of the list at `at - 1 < len - 1`, so
            // it is not the last node.
            unsafe { self.attach_after(prev, Node::new_detached(elt)) };
            #[cfg(debug_assertions)]
            self.assert_ends();
        }
        Ok(())
    }

    /// Removes the element at the given index and returns it. Elements after
    /// it are shifted forward by one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `at >= len`, leaving the list
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*at*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(1), Ok(1));
    /// assert_eq!(list.back(), Some(&3));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        if at >= self.len {
            return Err(self.invalid_index(at));
        }
        if at == 0 {
            trace_event!(index = at, "remove at front");
            return self.pop_front().ok_or_else(|| self.invalid_index(at));
        }
        trace_event!(index = at, last = (at + 1 == self.len), "remove after predecessor");
        let prev = self.valid_node(at - 1)?;
        // SAFETY: `prev` is a node of the list at `at - 1`, and `at < len`
        // so it has a successor.
        let removed = unsafe { self.detach_after(prev) };
        #[cfg(debug_assertions)]
        self.assert_ends();
        removed.ok_or_else(|| self.invalid_index(at))
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use tailed_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            element,
        })))
    }

    /// Free a detached node and return its element.
    ///
    /// It is unsafe because `node` must have been created by
    /// [`Node::new_detached`], must be unlinked from any list, and must not
    /// be used afterwards.
    pub(crate) unsafe fn into_element(node: NonNull<Node<T>>) -> T {
        Box::from_raw(node.as_ptr()).element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
