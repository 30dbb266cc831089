//! This crate exposes a Binary Search Tree (BST) that collapses duplicate
//! values into a per-node occurrence count, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Duplicate counting
//!
//! The tree in this crate stores each distinct value in exactly one `Node`
//! and keeps a count of how many times it was inserted. Because equal values
//! never create a second node, no two nodes in the tree ever compare equal,
//! which keeps the invariants above strict.
//!
//! This tree does no rebalancing, so the height - and therefore the cost of
//! every operation - is `O(N)` in the worst case (inserting already-sorted
//! input builds a linked list).

#![deny(missing_docs)]

pub mod counted;
