//! Aggregation tree over the flat bits
//!
//! Array-backed segment tree: one bit per node, 1-indexed, `1 + 4N` slots.
//! Leaves hold bit values, internal nodes hold the OR of their children.
//! No node objects are stored: children are reached by index arithmetic
//! (`2x`, `2x+1`) and intervals are recomputed on the way down.
//!
//! A node whose bit is false certifies that every leaf below it is false.
//! Every recursive walk in this module uses that certificate to skip
//! subtrees.

mod combine;
mod node;
mod traversal;

pub use node::TreeNode;
pub use traversal::Ones;

use bitvec::prelude::*;

/// Node storage for the aggregation tree
///
/// Space: 1 + 4N bits
#[derive(Debug, Clone)]
pub struct AggregateTree {
    /// Node bits, slot 0 unused
    nodes: BitVec,

    /// Number of logical bit positions
    size: usize,
}

impl AggregateTree {
    /// Create an all-false tree over `size` positions
    pub fn new(size: usize) -> Self {
        Self {
            nodes: bitvec![0; 1 + (size << 2)],
            size,
        }
    }

    /// Build a tree from flat bits in one bottom-up pass
    ///
    /// `bits.len()` must equal `size`; callers validate it.
    pub fn build(bits: &BitSlice, size: usize) -> Self {
        debug_assert_eq!(bits.len(), size);
        let mut tree = Self::new(size);
        let root = tree.root();
        if !root.is_empty() {
            tree.build_node(bits, root);
        }
        tree
    }

    fn build_node(&mut self, bits: &BitSlice, node: TreeNode) {
        if node.is_leaf() {
            self.put(node.index, bits[node.position()]);
            return;
        }
        let (left, right) = node.children();
        self.build_node(bits, left);
        self.build_node(bits, right);
        self.pushup(node.index);
    }

    /// Number of logical bit positions
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Root node spanning [1, N]
    #[inline]
    pub fn root(&self) -> TreeNode {
        TreeNode::root(self.size)
    }

    /// Read a node bit
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.nodes[index]
    }

    /// Write a node bit without touching its ancestors
    #[inline]
    pub fn put(&mut self, index: usize, value: bool) {
        self.nodes.set(index, value);
    }

    /// Aggregate of the whole tree
    #[inline]
    pub fn any(&self) -> bool {
        self.size > 0 && self.nodes[1]
    }

    /// Recompute one internal node from its children
    #[inline]
    fn pushup(&mut self, index: usize) {
        let value = self.nodes[index << 1] | self.nodes[(index << 1) | 1];
        self.nodes.set(index, value);
    }

    /// Recompute every ancestor from `index` up to the root
    ///
    /// Pass the parent of a modified leaf (`leaf.index >> 1`).
    pub fn pushup_to_root(&mut self, mut index: usize) {
        while index > 0 {
            self.pushup(index);
            index >>= 1;
        }
    }

    /// Locate the leaf holding 0-based `pos`
    ///
    /// Time: O(log N). `pos` must be below `size`.
    pub fn find_leaf(&self, pos: usize) -> TreeNode {
        debug_assert!(pos < self.size, "position {} outside tree of {}", pos, self.size);
        let target = pos + 1;
        let mut node = self.root();
        while !node.is_leaf() {
            let (left, right) = node.children();
            node = if target <= left.right { left } else { right };
        }
        node
    }

    /// Write a leaf and repair its ancestors
    #[inline]
    pub fn write_leaf(&mut self, leaf: TreeNode, value: bool) {
        self.put(leaf.index, value);
        self.pushup_to_root(leaf.index >> 1);
    }

    /// Count set leaves, skipping false subtrees
    pub fn count(&self) -> usize {
        let root = self.root();
        if root.is_empty() {
            return 0;
        }
        self.count_node(root)
    }

    fn count_node(&self, node: TreeNode) -> usize {
        if !self.get(node.index) {
            return 0;
        }
        if node.is_leaf() {
            return 1;
        }
        let (left, right) = node.children();
        self.count_node(left) + self.count_node(right)
    }

    /// Whether every leaf is set (vacuously true for N = 0)
    pub fn all(&self) -> bool {
        let root = self.root();
        if root.is_empty() {
            return true;
        }
        self.all_node(root)
    }

    fn all_node(&self, node: TreeNode) -> bool {
        if !self.get(node.index) {
            return false;
        }
        if node.is_leaf() {
            return true;
        }
        let (left, right) = node.children();
        self.all_node(left) && self.all_node(right)
    }

    /// Clear every leaf, descending only into live subtrees
    ///
    /// Time: O(k log N) for k set bits.
    pub fn clear(&mut self) {
        let root = self.root();
        if !root.is_empty() {
            self.clear_node(root);
        }
    }

    fn clear_node(&mut self, node: TreeNode) {
        if !self.get(node.index) {
            return;
        }
        if node.is_leaf() {
            self.put(node.index, false);
            return;
        }
        let (left, right) = node.children();
        self.clear_node(left);
        self.clear_node(right);
        self.pushup(node.index);
    }

    /// Set every leaf. Visits all N leaves.
    pub fn fill(&mut self) {
        let root = self.root();
        if !root.is_empty() {
            self.fill_node(root);
        }
    }

    fn fill_node(&mut self, node: TreeNode) {
        if node.is_leaf() {
            self.put(node.index, true);
            return;
        }
        let (left, right) = node.children();
        self.fill_node(left);
        self.fill_node(right);
        self.put(node.index, true);
    }

    /// Invert every leaf. Visits all N leaves: a false subtree does not
    /// stay false, so there is nothing to prune.
    pub fn invert(&mut self) {
        let root = self.root();
        if !root.is_empty() {
            self.invert_node(root);
        }
    }

    fn invert_node(&mut self, node: TreeNode) {
        if node.is_leaf() {
            let value = !self.get(node.index);
            self.put(node.index, value);
            return;
        }
        let (left, right) = node.children();
        self.invert_node(left);
        self.invert_node(right);
        self.pushup(node.index);
    }

    /// Export the N leaves as a flat bit vector
    pub fn to_flat(&self) -> BitVec {
        let mut bits = bitvec![0; self.size];
        let root = self.root();
        if !root.is_empty() {
            self.export_node(&mut bits, root);
        }
        bits
    }

    // Leaves under a false node are already false in `bits`.
    fn export_node(&self, bits: &mut BitSlice, node: TreeNode) {
        if !self.get(node.index) {
            return;
        }
        if node.is_leaf() {
            bits.set(node.position(), true);
            return;
        }
        let (left, right) = node.children();
        self.export_node(bits, left);
        self.export_node(bits, right);
    }

    /// Make `self` hold the same leaves as `source`
    ///
    /// Subtrees false on both sides are skipped.
    pub fn copy_from(&mut self, source: &AggregateTree) {
        debug_assert_eq!(self.size, source.size);
        let root = self.root();
        if !root.is_empty() {
            self.copy_node(source, root);
        }
    }

    fn copy_node(&mut self, source: &AggregateTree, node: TreeNode) {
        let theirs = source.get(node.index);
        if !self.get(node.index) && !theirs {
            return;
        }
        if !node.is_leaf() {
            let (left, right) = node.children();
            self.copy_node(source, left);
            self.copy_node(source, right);
        }
        self.put(node.index, theirs);
    }

    /// Structural equality: stops at any aggregate mismatch, and treats
    /// two false nodes as certified-equal subtrees.
    pub fn same_leaves(&self, other: &AggregateTree) -> bool {
        if self.size != other.size {
            return false;
        }
        let root = self.root();
        root.is_empty() || self.same_node(other, root)
    }

    fn same_node(&self, other: &AggregateTree, node: TreeNode) -> bool {
        let ours = self.get(node.index);
        if ours != other.get(node.index) {
            return false;
        }
        if !ours || node.is_leaf() {
            return true;
        }
        let (left, right) = node.children();
        self.same_node(other, left) && self.same_node(other, right)
    }

    /// Verify the aggregate invariant on every reachable node
    pub fn check_invariant(&self) -> bool {
        let root = self.root();
        if root.is_empty() {
            return !self.nodes.any();
        }
        self.check_node(root)
    }

    fn check_node(&self, node: TreeNode) -> bool {
        if node.is_leaf() {
            return true;
        }
        let (left, right) = node.children();
        self.get(node.index) == (self.get(left.index) | self.get(right.index))
            && self.check_node(left)
            && self.check_node(right)
    }
}
