//! Human-readable rendering of a subtree.
//!
//! The tree is drawn sideways: a node's right subtree is printed above it
//! and its left subtree below, joined with box-drawing connectors, so the
//! page reads as the tree rotated a quarter turn counter-clockwise.
//!
//! ```text
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<T> Tree<T> {
    /// Returns a [`Display`][fmt::Display] adapter drawing the whole tree.
    /// An empty tree renders as nothing.
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty { root: self.root() }
    }
}

/// Borrowed rendering of a subtree. Read-only; build one with
/// [`Tree::pretty`] or [`Pretty::new`] for the subtree under any node.
pub struct Pretty<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> Pretty<'a, T> {
    /// Renders the subtree rooted at `node`.
    pub fn new(node: &'a Node<T>) -> Self {
        Self { root: Some(node) }
    }
}

impl<T: fmt::Display> fmt::Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => Ok(()),
            Some(node) => render(node, f, "", true),
        }
    }
}

fn render<T: fmt::Display>(
    node: &Node<T>,
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let above = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render(right, f, &above, false)?;
    }
    writeln!(f, "{prefix}{}{}", if is_left { "└── " } else { "┌── " }, node.key())?;
    if let Some(left) = node.left() {
        let below = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render(left, f, &below, true)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_right_above_and_left_below() {
        let tree: Tree<i32> = [2, 1, 3].into_iter().collect();

        assert_eq!(
            tree.pretty().to_string(),
            "│   ┌── 3\n\
             └── 2\n\
             \u{20}   └── 1\n"
        );
    }

    #[test]
    fn renders_a_subtree_from_any_node() {
        let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        let subtree = tree.find(&8).map(Pretty::new).expect("8 is present");

        assert_eq!(
            subtree.to_string(),
            "│   ┌── 9\n\
             └── 8\n\
             \u{20}   └── 7\n"
        );
    }

    #[test]
    fn empty_tree_renders_as_nothing() {
        let tree: Tree<i32> = Tree::new();

        assert_eq!(tree.pretty().to_string(), "");
    }
}
