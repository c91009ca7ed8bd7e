//! Implicit tree node representation
//!
//! Node = slot `index` in the node array + interval [left, right] ⊆ [1, N]
//! Children computed via midpoint: m = ⌊(left + right) / 2⌋
//!   Left child: slot 2x, interval [left, m]
//!   Right child: slot 2x+1, interval [m+1, right]

use std::fmt;

/// Tree node (implicit - a slot plus the interval it covers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeNode {
    /// Slot in the node array (root = 1)
    pub index: usize,

    /// Left leaf position (inclusive, 1-based)
    pub left: usize,

    /// Right leaf position (inclusive, 1-based)
    pub right: usize,
}

impl TreeNode {
    /// Create root spanning [1, N]
    ///
    /// For `N = 0` the interval is empty (`left > right`) and the root
    /// covers nothing; callers check [`TreeNode::is_empty`] first.
    pub fn root(size: usize) -> Self {
        Self {
            index: 1,
            left: 1,
            right: size,
        }
    }

    /// Check if leaf (unit interval)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == self.right
    }

    /// True for the root of a zero-capacity tree
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left > self.right
    }

    /// Interval length
    #[inline]
    pub fn length(&self) -> usize {
        (self.right + 1).saturating_sub(self.left)
    }

    /// Compute midpoint for split: m = ⌊(left + right) / 2⌋
    #[inline]
    pub fn midpoint(&self) -> usize {
        (self.left + self.right) / 2
    }

    /// Get children via midpoint split
    ///
    /// Returns: ([left, mid] at 2x, [mid+1, right] at 2x+1)
    #[inline]
    pub fn children(&self) -> (TreeNode, TreeNode) {
        debug_assert!(!self.is_leaf(), "Leaf has no children");

        let mid = self.midpoint();
        let left_child = TreeNode {
            index: self.index << 1,
            left: self.left,
            right: mid,
        };
        let right_child = TreeNode {
            index: (self.index << 1) | 1,
            left: mid + 1,
            right: self.right,
        };

        (left_child, right_child)
    }

    /// Logical (0-based) bit position held by a leaf
    #[inline]
    pub fn position(&self) -> usize {
        debug_assert!(self.is_leaf(), "Only leaves hold a position");
        self.left - 1
    }

    /// Whether the 1-based leaf position falls inside this node
    #[inline]
    pub fn contains(&self, leaf: usize) -> bool {
        self.left <= leaf && leaf <= self.right
    }

    /// Number of levels from this node down to its deepest leaf
    pub fn depth_to_leaf(&self) -> usize {
        let mut node = *self;
        let mut depth = 0;

        // The left half is never shorter than the right, so it is the deepest path.
        while !node.is_leaf() && !node.is_empty() {
            let (left_child, _) = node.children();
            node = left_child;
            depth += 1;
        }

        depth
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "#{}[{}]", self.index, self.left)
        } else {
            write!(f, "#{}[{}, {}]", self.index, self.left, self.right)
        }
    }
}
