//! Pruning search and traversal over set leaves
//!
//! Every walk here returns from a node as soon as its aggregate is false:
//! nothing below it can be set. Left children are searched before right
//! ones, so positions come out in ascending order.

use std::iter::FusedIterator;

use super::{AggregateTree, TreeNode};

impl AggregateTree {
    /// Smallest set position
    pub fn first_one(&self) -> Option<usize> {
        self.search_from(1)
    }

    /// Smallest set position strictly greater than `pos`
    pub fn next_one(&self, pos: usize) -> Option<usize> {
        // Leaves are 1-based: position `pos` lives at leaf `pos + 1`.
        self.search_from(pos.checked_add(2)?)
    }

    fn search_from(&self, from: usize) -> Option<usize> {
        let root = self.root();
        if root.is_empty() || from > root.right {
            return None;
        }
        self.search_node(root, from)
    }

    fn search_node(&self, node: TreeNode, from: usize) -> Option<usize> {
        if !self.get(node.index) || node.right < from {
            return None;
        }
        if node.is_leaf() {
            return Some(node.position());
        }
        let (left, right) = node.children();
        self.search_node(left, from)
            .or_else(|| self.search_node(right, from))
    }

    /// Call `visit` once per set position, in ascending order
    pub fn visit_ones<F: FnMut(usize)>(&self, mut visit: F) {
        let root = self.root();
        if !root.is_empty() {
            self.visit_node(root, &mut visit);
        }
    }

    fn visit_node<F: FnMut(usize)>(&self, node: TreeNode, visit: &mut F) {
        if !self.get(node.index) {
            return;
        }
        if node.is_leaf() {
            visit(node.position());
            return;
        }
        let (left, right) = node.children();
        self.visit_node(left, visit);
        self.visit_node(right, visit);
    }

    /// Lazy iterator over set positions
    pub fn ones(&self) -> Ones<'_> {
        Ones::new(self)
    }
}

/// Iterator over the positions of set bits, in ascending order
///
/// Runs the same pruning DFS as [`AggregateTree::visit_ones`], with an
/// explicit stack instead of recursion.
///
/// Stack depth: O(log N)
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    tree: &'a AggregateTree,

    /// Live nodes still to expand; the top is the leftmost
    stack: Vec<TreeNode>,
}

impl<'a> Ones<'a> {
    fn new(tree: &'a AggregateTree) -> Self {
        let root = tree.root();
        let mut stack = Vec::with_capacity(root.depth_to_leaf() + 1);
        if tree.any() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(node) = self.stack.pop() {
            if node.is_leaf() {
                return Some(node.position());
            }
            let (left, right) = node.children();
            if self.tree.get(right.index) {
                self.stack.push(right);
            }
            if self.tree.get(left.index) {
                self.stack.push(left);
            }
        }
        None
    }
}

impl FusedIterator for Ones<'_> {}
