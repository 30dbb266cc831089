//! A BST that counts duplicates. Inserting a value that is already in the
//! tree never allocates a second node - it increments an occurrence counter
//! on the node that already holds the value. Deleting a value removes its
//! node (and the whole count with it) while splicing the node's subtrees
//! back together so the ordering invariant survives without a rebuild.
//!
//! # Examples
//!
//! ```
//! use counting_bst::counted::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&"Piglet"));
//!
//! for name in ["Piglet", "Eeyore", "Roo", "Tigger", "Chris", "Pooh", "Kanga"] {
//!     tree.insert(name);
//! }
//!
//! // Inserting an existing value bumps its count instead of adding a node.
//! tree.insert("Pooh");
//! assert_eq!(tree.count(&"Pooh"), 2);
//!
//! // Inorder traversal is sorted, each value once regardless of count.
//! let names: Vec<_> = tree.inorder().copied().collect();
//! assert_eq!(
//!     names,
//!     ["Chris", "Eeyore", "Kanga", "Piglet", "Pooh", "Roo", "Tigger"],
//! );
//!
//! // Removing drops the node entirely, count and all.
//! tree.remove(&"Pooh");
//! assert!(!tree.contains(&"Pooh"));
//! ```

use std::cmp::Ordering;

/// An owned edge to a subtree. This is the "slot" that structural operations
/// overwrite: the tree's root field and every node's child field are edges,
/// so removing the root is the same code path as removing anything else.
type Edge<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node<T> {
    value: T,
    /// How many times `value` has been inserted. Always at least 1.
    count: usize,
    left: Edge<T>,
    right: Edge<T>,
}

/// A Binary Search Tree that stores each distinct value once, alongside the
/// number of times it was inserted.
///
/// `Clone` produces a deep copy: every node is re-allocated, so mutating one
/// copy can never be observed through the other. `PartialEq` is structural -
/// two trees are equal when they have the same shape with the same value and
/// count at every position.
///
/// There is no balancing. Inserting already-sorted data degrades the tree to
/// a linked list, and the recursive operations then use stack proportional to
/// the number of elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Edge<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` when the tree holds no values at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node in the tree. Calling this on an empty tree does
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// tree.clear();
    /// assert!(tree.is_empty());
    ///
    /// // No-op the second time around.
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Inserts the given value. If the tree already holds an equal value, no
    /// node is added - the existing node's occurrence count is incremented.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(7);
    /// tree.insert(7);
    ///
    /// assert_eq!(tree.count(&7), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(value),
            None => self.root = Some(Box::new(Node::new(value))),
        }
    }

    /// Removes the node holding the given value, no matter how many times the
    /// value was inserted. Removing a value the tree doesn't hold is a no-op,
    /// not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    /// tree.insert(3);
    ///
    /// // The whole node goes, even with a count of 2.
    /// tree.remove(&5);
    /// assert!(!tree.contains(&5));
    /// assert!(tree.contains(&3));
    ///
    /// // Absent values are silently ignored.
    /// tree.remove(&42);
    /// assert!(tree.contains(&3));
    /// ```
    pub fn remove(&mut self, value: &T)
    where
        T: Ord,
    {
        self.root = Node::remove_from(self.root.take(), value);
    }

    /// Returns `true` when the tree holds the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Returns how many times the given value has been inserted, or 0 if the
    /// tree doesn't hold it.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.count(&1), 3);
    /// assert_eq!(tree.count(&42), 0);
    /// ```
    pub fn count(&self, value: &T) -> usize
    where
        T: Ord,
    {
        self.find(value).map_or(0, |node| node.count)
    }

    /// Returns an iterator visiting each node before either of its subtrees.
    ///
    /// All three traversal iterators are lazy, never mutate the tree, and
    /// yield each distinct value exactly once regardless of its count.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let tree: Tree<_> = [5, 2, 8, 1, 3].iter().copied().collect();
    ///
    /// let values: Vec<_> = tree.preorder().copied().collect();
    /// assert_eq!(values, [5, 2, 1, 3, 8]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Returns an iterator visiting the left subtree, then the node, then the
    /// right subtree - i.e. the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let tree: Tree<_> = [5, 2, 8, 1, 3].iter().copied().collect();
    ///
    /// let values: Vec<_> = tree.inorder().copied().collect();
    /// assert_eq!(values, [1, 2, 3, 5, 8]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        let mut iter = Inorder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Returns an iterator visiting both subtrees of a node before the node
    /// itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::counted::Tree;
    ///
    /// let tree: Tree<_> = [5, 2, 8, 1, 3].iter().copied().collect();
    ///
    /// let values: Vec<_> = tree.postorder().copied().collect();
    /// assert_eq!(values, [1, 3, 2, 8, 5]);
    /// ```
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
        }
    }

    fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root.as_deref().and_then(|root| root.find(value))
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            count: 1,
            left: None,
            right: None,
        }
    }

    fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(value)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(value)),
        }
    }

    fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => match self.left.as_deref_mut() {
                Some(left) => left.insert(value),
                None => self.left = Some(Box::new(Self::new(value))),
            },
            Ordering::Equal => self.count += 1,
            Ordering::Greater => match self.right.as_deref_mut() {
                Some(right) => right.insert(value),
                None => self.right = Some(Box::new(Self::new(value))),
            },
        }
    }

    /// Removes the node holding `value` from the subtree owned by `edge` and
    /// returns whatever should occupy that edge afterwards. Running out of
    /// tree means the value was never there, so the edge comes back untouched.
    fn remove_from(edge: Edge<T>, value: &T) -> Edge<T>
    where
        T: Ord,
    {
        let mut node = match edge {
            Some(node) => node,
            None => return None,
        };
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove_from(node.left.take(), value);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_from(node.right.take(), value);
                Some(node)
            }
            Ordering::Equal => Self::splice(*node),
        }
    }

    /// Consumes the matched node and returns the subtree that takes its
    /// place. When the node has a right child, that child is promoted and a
    /// left child is re-hung at the leftmost empty slot under the promoted
    /// subtree: every value on that path is greater than everything in the
    /// left subtree, so the walk follows left edges only and never compares
    /// or moves a value. O(height) either way.
    fn splice(node: Self) -> Edge<T> {
        let Self { left, right, .. } = node;
        let mut right = match right {
            Some(right) => right,
            None => return left,
        };
        if left.is_some() {
            let mut slot = &mut right.left;
            while let Some(next) = slot {
                slot = &mut next.left;
            }
            *slot = left;
        }
        Some(right)
    }
}

/// Lazy preorder traversal of a [`Tree`]. Created by [`Tree::preorder`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree pops (and is visited) first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

/// Lazy inorder (sorted) traversal of a [`Tree`]. Created by
/// [`Tree::inorder`].
pub struct Inorder<'a, T> {
    /// Nodes whose value and right subtree are still unvisited. The left
    /// spine of each pushed subtree is pushed eagerly, so the next value is
    /// always on top.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// Lazy postorder traversal of a [`Tree`]. Created by [`Tree::postorder`].
pub struct Postorder<'a, T> {
    /// The flag records whether a node's children have already been pushed.
    /// A node is yielded only when it comes back off the stack expanded.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
