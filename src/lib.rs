//! A Binary Search Tree (BST) with balanced construction and on-demand
//! rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores ordered, duplicate-free keys in a node
//! hierarchy where each node owns up to two children. The invariants that
//! make it searchable are:
//!
//! 1. For every node, all the keys in its left subtree are less than its
//!    own key.
//! 2. For every node, all the keys in its right subtree are greater than
//!    its own key.
//!
//! Searching then takes `O(height)`, and an in-order walk yields the keys
//! in ascending order.
//!
//! ## Balance
//!
//! Unlike an AVL or red-black tree, this tree never rotates on mutation.
//! Building from a sequence lays the keys out with minimal height, but
//! later point inserts and deletes may skew the structure arbitrarily.
//! [`Tree::is_balanced`](tree::Tree::is_balanced) diagnoses the skew and
//! [`Tree::rebalance`](tree::Tree::rebalance) repairs it by rebuilding the
//! whole tree from an in-order walk.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::tree::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! let keys: Vec<i32> = tree.in_order().map(|n| *n.key()).collect();
//! assert_eq!(keys, [1, 3, 4, 5, 7, 8, 9]);
//! assert!(tree.is_balanced());
//!
//! for key in [100, 105, 102, 110, 115, 103] {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs)]

pub mod canon;
pub mod iter;
pub mod print;
pub mod tree;
