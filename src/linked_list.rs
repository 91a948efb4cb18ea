//! A singly linked list. Every `Node` owns its value and the rest of the chain
//! after it. The list only keeps a link to the first `Node` so anything that
//! works with a position walks the chain from the front each time it is called.
//!
//! # Examples
//!
//! ```
//! use node_collections::linked_list::LinkedList;
//! use node_collections::Error;
//!
//! let mut list: LinkedList<i32> = vec![10, 20, 30].into();
//! assert_eq!(list.len(), 3);
//!
//! // `pop` removes the value at a position and relinks around it.
//! assert_eq!(list.pop(1), Ok(20));
//! assert_eq!(list.to_vec(), vec![10, 30]);
//!
//! // Positions past the end are errors, not panics.
//! assert_eq!(list.pop(5), Err(Error::OutOfRange { index: 5, len: 2 }));
//!
//! // `remove` only takes out the first matching value.
//! let mut list: LinkedList<i32> = vec![10, 20, 30, 20].into();
//! assert_eq!(list.remove(&20), Ok(20));
//! assert_eq!(list.to_vec(), vec![10, 30, 20]);
//! ```

use std::fmt;
use std::mem;

use num_traits::Zero;

use crate::Error;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(item: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { item, next })
    }
}

/// A singly linked list supporting indexed access, search, and insertion or
/// removal at any position.
///
/// The length isn't cached so [`len`][LinkedList::len] is `O(N)`.
pub struct LinkedList<T> {
    first: Link<T>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time. Letting `Box` drop the chain would recurse once per node.
        let mut link = self.first.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> LinkedList<T> {
    /// Generate a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self { first: None }
    }

    /// Returns the number of values in the list by walking the whole chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Returns the value at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::linked_list::LinkedList;
    /// use node_collections::Error;
    ///
    /// let list: LinkedList<_> = vec!['a', 'b'].into();
    ///
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert_eq!(list.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        match self.link(index)? {
            Some(node) => Ok(&node.item),
            None => Err(Error::OutOfRange { index, len: index }),
        }
    }

    /// Returns a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        match self.link_mut(index)? {
            Some(node) => Ok(&mut node.item),
            None => Err(Error::OutOfRange { index, len: index }),
        }
    }

    /// Overwrites the value at `index` in place and returns the old value.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<_> = vec![1, 2, 3].into();
    ///
    /// assert_eq!(list.set(0, 10), Ok(1));
    /// assert_eq!(list.to_vec(), vec![10, 2, 3]);
    /// assert!(list.set(3, 4).is_err());
    /// ```
    pub fn set(&mut self, index: usize, item: T) -> Result<T, Error> {
        self.get_mut(index).map(|slot| mem::replace(slot, item))
    }

    /// Returns `true` if any value in the list equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// Adds `item` after the last value in the list.
    pub fn append(&mut self, item: T) {
        *self.tail_mut() = Some(Node::new_boxed(item, None));
    }

    /// Adds `item` before the first value in the list.
    pub fn push_front(&mut self, item: T) {
        self.first = Some(Node::new_boxed(item, self.first.take()));
    }

    /// Inserts `item` so that it ends up at position `index`, shifting everything after it back
    /// by one. Inserting at `index == len()` is the same as [`append`][LinkedList::append].
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::linked_list::LinkedList;
    /// use node_collections::Error;
    ///
    /// let mut list: LinkedList<_> = vec![1, 3].into();
    ///
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(list.insert(9, 5), Err(Error::OutOfRange { index: 9, len: 4 }));
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        let link = self.link_mut(index)?;
        let next = link.take();
        *link = Some(Node::new_boxed(item, next));
        Ok(())
    }

    /// Removes and returns the first value in the list.
    pub fn remove_first(&mut self) -> Result<T, Error> {
        let node = self
            .first
            .take()
            .ok_or(Error::OutOfRange { index: 0, len: 0 })?;
        let Node { item, next } = *node;
        self.first = next;
        Ok(item)
    }

    /// Removes and returns the last value in the list.
    pub fn remove_last(&mut self) -> Result<T, Error> {
        match self.len() {
            0 => Err(Error::OutOfRange { index: 0, len: 0 }),
            len => self.pop(len - 1),
        }
    }

    /// Removes the first value (from the front) that equals `item` and returns it.
    ///
    /// Fails with [`Error::NotFound`] when nothing matches, which includes an empty list.
    pub fn remove(&mut self, item: &T) -> Result<T, Error>
    where
        T: PartialEq,
    {
        let index = self.index_of(item)?;
        self.pop(index)
    }

    /// Removes and returns the value at `index`, linking its predecessor to its successor.
    pub fn pop(&mut self, index: usize) -> Result<T, Error> {
        let link = self.link_mut(index)?;
        match link.take() {
            Some(node) => {
                let Node { item, next } = *node;
                *link = next;
                Ok(item)
            }
            None => Err(Error::OutOfRange { index, len: index }),
        }
    }

    /// Returns the position of the first value that equals `item`.
    pub fn index_of(&self, item: &T) -> Result<usize, Error>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item).ok_or(Error::NotFound)
    }

    /// Returns how many values equal `item`.
    pub fn count(&self, item: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|&x| x == item).count()
    }

    /// Adds up every value from front to back, starting from zero. An empty list sums to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::linked_list::LinkedList;
    ///
    /// let list: LinkedList<f64> = vec![10.5, -20.5, 30.0].into();
    /// assert_eq!(list.sum(), 20.0);
    ///
    /// assert_eq!(LinkedList::<i32>::new().sum(), 0);
    /// ```
    pub fn sum(&self) -> T
    where
        T: Zero + Clone,
    {
        self.iter().fold(T::zero(), |acc, x| acc + x.clone())
    }

    /// Returns the largest value in the list. If several values tie, the first one is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::linked_list::LinkedList;
    /// use node_collections::Error;
    ///
    /// let list: LinkedList<f64> = vec![10.1, -20.5, 30.0].into();
    /// assert_eq!(list.max(), Ok(&30.0));
    ///
    /// assert_eq!(LinkedList::<f64>::new().max(), Err(Error::EmptyCollection));
    /// ```
    pub fn max(&self) -> Result<&T, Error>
    where
        T: PartialOrd,
    {
        let mut iter = self.iter();
        let first = iter.next().ok_or(Error::EmptyCollection)?;
        Ok(iter.fold(first, |max, x| if x > max { x } else { max }))
    }

    /// Copies every value, front to back, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first.as_deref(),
        }
    }

    /// Follows `index` links from the front and returns the link found there. The link after the
    /// last node (index `len()`) is valid and empty.
    fn link(&self, index: usize) -> Result<&Link<T>, Error> {
        let mut link = &self.first;
        for len in 0..index {
            link = match link {
                Some(node) => &node.next,
                None => return Err(Error::OutOfRange { index, len }),
            };
        }
        Ok(link)
    }

    /// Mutable version of [`link`][LinkedList::link]. Writing to the returned link splices the
    /// chain at that position.
    fn link_mut(&mut self, index: usize) -> Result<&mut Link<T>, Error> {
        let mut link = &mut self.first;
        for len in 0..index {
            link = match link {
                Some(node) => &mut node.next,
                None => return Err(Error::OutOfRange { index, len }),
            };
        }
        Ok(link)
    }

    /// Returns the empty link after the last node.
    fn tail_mut(&mut self) -> &mut Link<T> {
        let mut link = &mut self.first;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the end once and keep a cursor on the new tail instead of calling `append`.
        let mut tail = self.tail_mut();
        for item in iter {
            tail = &mut tail.insert(Node::new_boxed(item, None)).next;
        }
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

/// Borrowing iterator returned by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

/// Owning iterator that takes values off the front of the list.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove_first().ok()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
