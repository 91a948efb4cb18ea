//! This crate exposes two node-based mutable containers, mostly for
//! educational purposes.
//!
//! ## Singly Linked List
//!
//! A [`LinkedList`][linked_list::LinkedList] is an ordered, indexable sequence
//! built out of `Node`s. Each `Node` owns its value and (maybe) the next `Node`
//! in the chain. The list itself only holds the first `Node`. The most important
//! invariant is that following the `next` links from the first `Node` reaches
//! every element exactly once and then stops - there are no cycles and no `Node`
//! is shared between two places.
//!
//! Nothing is cached. Every positional operation walks the chain from the front
//! so `get`, `insert`, `pop` etc. are all `O(position)` and `len` is `O(N)`.
//!
//! ## Binary Search Tree
//!
//! A [`Tree`][bst::Tree] is defined recursively: it is either empty or a `Node`
//! holding a key and two child `Tree`s. The invariants are:
//!
//! 1. For every `Node`, all the keys in its left subtree are `<=` its own key.
//! 2. For every `Node`, all the keys in its right subtree are `>=` its own key.
//!
//! > Note that duplicate keys are allowed and may end up on either side of an
//! > equal ancestor.
//!
//! The tree is not self-balancing, so searching takes `O(height)` which is
//! `O(N)` in the worst case (e.g. inserting keys in sorted order).
//!
//! ## Errors
//!
//! Operations that can fail return a [`Result`] with the crate's [`Error`].
//! Nothing is retried or swallowed and a failed call leaves the container as
//! it was.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
mod error;
pub mod linked_list;

pub use error::Error;
