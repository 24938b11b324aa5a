//! Rotation engine: the four subtree restructurings and the ancestor-walk
//! rebalance procedure.
//!
//! A rotation re-roots a three- or four-node neighborhood while preserving
//! the in-order key sequence. Each single rotation fixes the child links,
//! all three parent back-references, the former parent's child slot (or the
//! tree root), and recomputes the two affected heights pivot-first. The
//! double rotations are exactly two singles composed.

use crate::types::{AvlTree, NodeId, NULL_NODE};

impl AvlTree {
    /// Single right rotation at `v` (left-heavy case).
    ///
    /// `u = v.left` becomes the subtree root, `v` its right child, and
    /// `u`'s former right subtree `t` moves under `v`. Returns the new
    /// subtree root. Heights are recomputed for `v` first, `u` second,
    /// since `v` ends up below `u`.
    pub(crate) fn rotate_right(&mut self, v: NodeId) -> NodeId {
        let u = self.left_of(v);
        if u == NULL_NODE {
            return v;
        }
        let t = self.right_of(u);
        let parent = self.parent_of(v);

        self.set_right(u, v);
        self.set_parent(v, u);
        self.set_left(v, t);
        if t != NULL_NODE {
            self.set_parent(t, v);
        }
        self.set_parent(u, parent);
        self.replace_child(parent, v, u);

        self.recompute_height(v);
        self.recompute_height(u);
        u
    }

    /// Single left rotation at `v` (right-heavy case); mirror of
    /// [`AvlTree::rotate_right`].
    pub(crate) fn rotate_left(&mut self, v: NodeId) -> NodeId {
        let u = self.right_of(v);
        if u == NULL_NODE {
            return v;
        }
        let t = self.left_of(u);
        let parent = self.parent_of(v);

        self.set_left(u, v);
        self.set_parent(v, u);
        self.set_right(v, t);
        if t != NULL_NODE {
            self.set_parent(t, v);
        }
        self.set_parent(u, parent);
        self.replace_child(parent, v, u);

        self.recompute_height(v);
        self.recompute_height(u);
        u
    }

    /// Double left-right rotation at `v`: left-rotate `v.left`, then
    /// right-rotate `v`.
    pub(crate) fn rotate_left_right(&mut self, v: NodeId) -> NodeId {
        let left = self.left_of(v);
        self.rotate_left(left);
        self.rotate_right(v)
    }

    /// Double right-left rotation at `v`: right-rotate `v.right`, then
    /// left-rotate `v`.
    pub(crate) fn rotate_right_left(&mut self, v: NodeId) -> NodeId {
        let right = self.right_of(v);
        self.rotate_right(right);
        self.rotate_left(v)
    }

    /// Rebalances by walking every ancestor from `start` to the root.
    ///
    /// At each ancestor the height is recomputed, then the balance factor
    /// picks one of the four rotation cases (or none). The walk never stops
    /// at the first rotation: a deletion can shorten a subtree in a way
    /// that requires several independent rotations further up, so each
    /// ancestor is checked all the way to the root. After a rotation the
    /// walk resumes at the node now occupying the rotated position's
    /// parent slot, which is the new subtree root itself; it is re-checked
    /// (a no-op, it is balanced) and the walk climbs on.
    pub(crate) fn rebalance_from(&mut self, start: NodeId) {
        let mut current = start;
        while current != NULL_NODE {
            self.recompute_height(current);
            let factor = self.balance_factor(current);

            if factor < -1 {
                if self.balance_factor(self.left_of(current)) <= 0 {
                    self.rotate_right(current);
                } else {
                    self.rotate_left_right(current);
                }
            } else if factor > 1 {
                if self.balance_factor(self.right_of(current)) >= 0 {
                    self.rotate_left(current);
                } else {
                    self.rotate_right_left(current);
                }
            }

            current = self.parent_of(current);
        }
    }
}
