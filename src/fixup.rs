//! Restoring the red-black properties after a mutation.
//!
//! Both walks are written as a small state machine: `classify_*` reads the
//! colors around the current node and names the case, `apply_*` performs that
//! case's recoloring and rotations and returns the node to continue from.

use log::trace;

use crate::index::{IndexType, NodeIndex};
use crate::node::{Color, Node};
use crate::rbtree::RbTree;

/// Which child of its parent a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Local pattern around a red node `z` whose parent is also red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertCase {
    /// The uncle is red: push the red up to the grandparent.
    RedUncle,
    /// Black uncle, `z` on the opposite side of its parent than the parent of
    /// the grandparent.
    InnerChild,
    /// Black uncle, `z` on the same side.
    OuterChild,
}

/// Local pattern around a node `x` carrying an extra black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteCase {
    /// The sibling is red.
    RedSibling,
    /// Black sibling with two black children.
    BlackNephews,
    /// Black sibling whose child nearest to `x` is red and far child black.
    NearNephewRed,
    /// Black sibling whose child farthest from `x` is red.
    FarNephewRed,
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Restore red-black tree properties after an insert.
    pub(crate) fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while self.parent_ref(z, Node::is_red) {
            let (side, case) = self.classify_insert(z);
            trace!("insert fixup {case:?} on {side:?} side at {z:?}");
            z = self.apply_insert(z, side, case);
        }
        self.node_mut(self.root, Node::set_color(Color::Black));
    }

    /// Name the case for `z`, whose parent is red, together with the side its
    /// parent hangs on below the grandparent.
    pub(crate) fn classify_insert(&self, z: NodeIndex<Ix>) -> (Side, InsertCase) {
        let p = self.node_ref(z, Node::parent);
        let side = self.side_of(p);
        let uncle = self.child(self.node_ref(p, Node::parent), side.opposite());
        let case = if self.node_ref(uncle, Node::is_red) {
            InsertCase::RedUncle
        } else if self.side_of(z) != side {
            InsertCase::InnerChild
        } else {
            InsertCase::OuterChild
        };
        (side, case)
    }

    fn apply_insert(
        &mut self,
        mut z: NodeIndex<Ix>,
        side: Side,
        case: InsertCase,
    ) -> NodeIndex<Ix> {
        let p = self.node_ref(z, Node::parent);
        let g = self.node_ref(p, Node::parent);
        match case {
            InsertCase::RedUncle => {
                let uncle = self.child(g, side.opposite());
                self.node_mut(p, Node::set_color(Color::Black));
                self.node_mut(uncle, Node::set_color(Color::Black));
                self.node_mut(g, Node::set_color(Color::Red));
                g
            }
            InsertCase::InnerChild | InsertCase::OuterChild => {
                if case == InsertCase::InnerChild {
                    z = p;
                    self.rotate(z, side);
                }
                self.parent_mut(z, Node::set_color(Color::Black));
                self.node_mut(g, Node::set_color(Color::Red));
                self.rotate(g, side.opposite());
                z
            }
        }
    }

    /// Restore red-black tree properties after a remove.
    pub(crate) fn delete_fixup(&mut self, mut x: NodeIndex<Ix>) {
        while x != self.root && self.node_ref(x, Node::is_black) {
            let (side, case) = self.classify_delete(x);
            trace!("delete fixup {case:?} on {side:?} side at {x:?}");
            x = self.apply_delete(x, side, case);
        }
        self.node_mut(x, Node::set_color(Color::Black));
    }

    /// Name the case for `x`, together with the side `x` hangs on.
    pub(crate) fn classify_delete(&self, x: NodeIndex<Ix>) -> (Side, DeleteCase) {
        let side = self.side_of(x);
        let w = self.child(self.node_ref(x, Node::parent), side.opposite());
        let near = self.child(w, side);
        let far = self.child(w, side.opposite());
        let case = if self.node_ref(w, Node::is_red) {
            DeleteCase::RedSibling
        } else if self.node_ref(far, Node::is_red) {
            DeleteCase::FarNephewRed
        } else if self.node_ref(near, Node::is_red) {
            DeleteCase::NearNephewRed
        } else {
            DeleteCase::BlackNephews
        };
        (side, case)
    }

    fn apply_delete(
        &mut self,
        x: NodeIndex<Ix>,
        side: Side,
        case: DeleteCase,
    ) -> NodeIndex<Ix> {
        let p = self.node_ref(x, Node::parent);
        let w = self.child(p, side.opposite());
        match case {
            DeleteCase::RedSibling => {
                self.node_mut(w, Node::set_color(Color::Black));
                self.node_mut(p, Node::set_color(Color::Red));
                self.rotate(p, side);
                x
            }
            DeleteCase::BlackNephews => {
                self.node_mut(w, Node::set_color(Color::Red));
                p
            }
            DeleteCase::NearNephewRed => {
                let near = self.child(w, side);
                self.node_mut(near, Node::set_color(Color::Black));
                self.node_mut(w, Node::set_color(Color::Red));
                self.rotate(w, side.opposite());
                x
            }
            DeleteCase::FarNephewRed => {
                let far = self.child(w, side.opposite());
                self.node_mut(w, Node::set_color(self.node_ref(p, Node::color)));
                self.node_mut(p, Node::set_color(Color::Black));
                self.node_mut(far, Node::set_color(Color::Black));
                self.rotate(p, side);
                self.root
            }
        }
    }
}
