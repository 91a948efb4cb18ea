//! A mutable Binary Search Tree of keys. The tree is recursive: a [`Tree`] is
//! either empty or a [`Node`] holding a key and two more `Tree`s. Every operation
//! is defined on the subtree it is called on, with the empty tree as the base
//! case.
//!
//! Duplicate keys are allowed. A key equal to a node's key is always inserted
//! into that node's right subtree.
//!
//! # Examples
//!
//! ```
//! use node_collections::bst::Tree;
//!
//! let mut tree = Tree::new();
//! assert_eq!(tree.height(), 0);
//!
//! for key in [7, 3, 9, 1, 5] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&5));
//! assert!(!tree.contains(&6));
//! assert_eq!(tree.height(), 3);
//!
//! // Duplicates are counted, and `remove` only deletes one of them.
//! tree.insert(3);
//! assert_eq!(tree.count(&3), 2);
//! assert!(tree.remove(&3));
//! assert_eq!(tree.count(&3), 1);
//!
//! // Keys come back out in sorted order.
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

/// A Binary Search Tree. This can be used for inserting, finding, counting,
/// and removing keys. Every key in a node's left subtree is `<=` the node's key
/// and every key in its right subtree is `>=` it.
// TODO stack based Debug
#[derive(Debug)]
pub enum Tree<K> {
    /// An empty tree. This also marks the empty subtrees at the bottom of a non-empty tree.
    Leaf,
    /// A `Node` that has a key and two children (which are both `Tree`s). This enum trivially
    /// wraps the [`Node`] struct.
    Node(Node<K>),
}

/// A `Node` has a key that is used for searching/sorting. It always has two
/// children although those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Debug)]
pub struct Node<K> {
    key: K,
    left: Child<K>,
    right: Child<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self::with_children(key, Tree::Leaf, Tree::Leaf)
    }

    fn with_children(key: K, left: Tree<K>, right: Tree<K>) -> Self {
        Self {
            key,
            left: Child(Box::new(left)),
            right: Child(Box::new(right)),
        }
    }
}

/// An owned subtree. Dropping one tears the subtree down with an explicit stack so sorted input,
/// which builds a chain as tall as the tree is big, doesn't overflow the call stack.
struct Child<K>(Box<Tree<K>>);

impl<K> Child<K> {
    /// Takes the subtree out, leaving a [`Leaf`][Tree::Leaf] behind.
    fn take(&mut self) -> Tree<K> {
        mem::take(&mut *self.0)
    }
}

impl<K> Drop for Child<K> {
    fn drop(&mut self) {
        if self.0.is_empty() {
            return;
        }
        let mut stack = vec![self.take()];
        while let Some(tree) = stack.pop() {
            if let Tree::Node(mut n) = tree {
                stack.push(n.left.take());
                stack.push(n.right.take());
            }
        }
    }
}

impl<K> Deref for Child<K> {
    type Target = Tree<K>;

    fn deref(&self) -> &Tree<K> {
        &self.0
    }
}

impl<K> DerefMut for Child<K> {
    fn deref_mut(&mut self) -> &mut Tree<K> {
        &mut self.0
    }
}

impl<K> fmt::Debug for Child<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Copies the tree bottom up with an explicit stack, so tall trees clone without recursing.
    fn clone(&self) -> Self {
        enum Step<'a, K> {
            Visit(&'a Tree<K>),
            Build(&'a K),
        }

        let mut steps = vec![Step::Visit(self)];
        let mut built = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Tree::Leaf) => built.push(Tree::Leaf),
                Step::Visit(Tree::Node(n)) => {
                    steps.push(Step::Build(&n.key));
                    steps.push(Step::Visit(&*n.right));
                    steps.push(Step::Visit(&*n.left));
                }
                Step::Build(key) => {
                    let right = built.pop().expect("Right subtree is cloned before its parent");
                    let left = built.pop().expect("Left subtree is cloned before its parent");
                    built.push(Tree::Node(Node::with_children(key.clone(), left, right)));
                }
            }
        }

        built.pop().expect("Cloning always builds the root")
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<Option<K>> for Tree<K> {
    /// `None` gives an empty tree and `Some(key)` a tree holding just `key`.
    fn from(root: Option<K>) -> Self {
        root.map_or_else(Self::new, Self::with_root)
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Tree::Leaf
    }

    /// Generates a `Tree` with a single node holding `key`.
    pub fn with_root(key: K) -> Self {
        Tree::Node(Node::new(key))
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Leaf)
    }

    /// Returns whether `key` is somewhere in the tree. Only one path from the
    /// root is followed so this takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::bst::Tree;
    ///
    /// let tree = Tree::with_root(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        match self {
            Tree::Leaf => false,
            Tree::Node(n) => match key.cmp(&n.key) {
                Ordering::Less => n.left.contains(key),
                Ordering::Equal => true,
                Ordering::Greater => n.right.contains(key),
            },
        }
    }

    /// Returns how many times `key` is stored in the tree. A key equal to a
    /// node's key can be in either subtree so both are searched on a match.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::bst::Tree;
    ///
    /// let tree: Tree<_> = vec![7, 3, 11, 9, 13, 5, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.count(&7), 1);
    /// assert_eq!(tree.count(&3), 2);
    /// assert_eq!(tree.count(&4), 0);
    /// ```
    pub fn count(&self, key: &K) -> usize
    where
        K: Ord,
    {
        match self {
            Tree::Leaf => 0,
            Tree::Node(n) => match key.cmp(&n.key) {
                Ordering::Less => n.left.count(key),
                Ordering::Equal => 1 + n.left.count(key) + n.right.count(key),
                Ordering::Greater => n.right.count(key),
            },
        }
    }

    /// Inserts `key` into the tree without moving any other key. The new key
    /// ends up in a new leaf node. Ties go to the right.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut tree = self;
        while let Tree::Node(n) = tree {
            tree = if key >= n.key {
                &mut *n.right
            } else {
                &mut *n.left
            };
        }
        *tree = Self::with_root(key);
    }

    /// Removes *one* occurrence of `key` from the tree and returns whether
    /// anything was removed. If the tree doesn't contain `key`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_collections::bst::Tree;
    ///
    /// let mut tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let n = match self {
            Tree::Leaf => return false,
            Tree::Node(n) => n,
        };
        match key.cmp(&n.key) {
            Ordering::Less => n.left.remove(key),
            Ordering::Equal => {
                self.delete_root();
                true
            }
            Ordering::Greater => n.right.remove(key),
        }
    }

    /// Returns the number of nodes on the longest path from the root down to a leaf. The empty
    /// tree has a height of 0.
    pub fn height(&self) -> usize {
        match self {
            Tree::Leaf => 0,
            Tree::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    /// Returns how many keys are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over the keys in sorted order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }

    /// Removes the key at the root of this subtree:
    ///
    /// 1. With no children, the subtree becomes empty.
    /// 2. With one child, that child is spliced up in its place.
    /// 3. With two children, the smallest key of the right subtree takes its place and is removed
    ///    from the right subtree.
    fn delete_root(&mut self)
    where
        K: Ord,
    {
        let Tree::Node(Node {
            mut left,
            mut right,
            ..
        }) = mem::take(self)
        else {
            return;
        };
        *self = match (left.take(), right.take()) {
            (Tree::Leaf, Tree::Leaf) => Tree::Leaf,
            (Tree::Leaf, child) | (child, Tree::Leaf) => child,
            (left, mut right) => match right.take_min() {
                Some(successor) => Tree::Node(Node::with_children(successor, left, right)),
                None => unreachable!("Non-empty right subtree has no smallest key"),
            },
        };

        if cfg!(debug_assertions) {
            if let Tree::Node(n) = self {
                if let Tree::Node(left) = &*n.left {
                    assert!(left.key <= n.key);
                }
                if let Tree::Node(right) = &*n.right {
                    assert!(right.key >= n.key);
                }
            }
        }
    }

    /// Removes the smallest key (the leftmost node) from this subtree and returns it. That node
    /// has no left child so its right subtree takes its place.
    fn take_min(&mut self) -> Option<K> {
        match self {
            Tree::Leaf => return None,
            Tree::Node(n) if !n.left.is_empty() => return n.left.take_min(),
            Tree::Node(_) => {}
        }

        let Tree::Node(Node { key, mut right, .. }) = mem::take(self) else {
            unreachable!("Leftmost node vanished before it was taken");
        };
        *self = right.take();
        Some(key)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// In-order iterator returned by [`Tree::iter`]. It keeps the path of nodes whose keys haven't
/// been yielded yet instead of recursing.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<K>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &*n.left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.push_left_spine(&*n.right);
        Some(&n.key)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
