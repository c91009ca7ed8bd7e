//! Lockstep boolean combination of two trees
//!
//! Each walk descends both trees together and stops wherever the identity
//! of the operation makes the rest of the subtree a no-op:
//!
//! | op  | skip when              | reason        |
//! |-----|------------------------|---------------|
//! | AND | receiver node is false | `0 & x == 0`  |
//! | OR  | other node is false    | `x \| 0 == x` |
//! | XOR | other node is false    | `x ^ 0 == x`  |
//!
//! Touched subtrees get their aggregates recomputed as the recursion
//! unwinds. Two sparse operands cost O((k1 + k2) log N).

use super::{AggregateTree, TreeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combine {
    And,
    Or,
    Xor,
}

impl Combine {
    #[inline]
    fn apply(self, ours: bool, theirs: bool) -> bool {
        match self {
            Combine::And => ours & theirs,
            Combine::Or => ours | theirs,
            Combine::Xor => ours ^ theirs,
        }
    }

    #[inline]
    fn skips(self, ours: bool, theirs: bool) -> bool {
        match self {
            Combine::And => !ours,
            Combine::Or | Combine::Xor => !theirs,
        }
    }
}

impl AggregateTree {
    /// `self = self & other`, leaf by leaf
    pub fn and_with(&mut self, other: &AggregateTree) {
        self.combine(other, Combine::And);
    }

    /// `self = self | other`, leaf by leaf
    pub fn or_with(&mut self, other: &AggregateTree) {
        self.combine(other, Combine::Or);
    }

    /// `self = self ^ other`, leaf by leaf
    pub fn xor_with(&mut self, other: &AggregateTree) {
        self.combine(other, Combine::Xor);
    }

    fn combine(&mut self, other: &AggregateTree, op: Combine) {
        debug_assert_eq!(self.size(), other.size());
        let root = self.root();
        if !root.is_empty() {
            self.combine_node(other, root, op);
        }
    }

    fn combine_node(&mut self, other: &AggregateTree, node: TreeNode, op: Combine) {
        let ours = self.get(node.index);
        let theirs = other.get(node.index);
        if op.skips(ours, theirs) {
            return;
        }
        if node.is_leaf() {
            self.put(node.index, op.apply(ours, theirs));
            return;
        }
        let (left, right) = node.children();
        self.combine_node(other, left, op);
        self.combine_node(other, right, op);
        self.pushup(node.index);
    }
}
