//! `rb_tree` is an ordered multiset based on a red-black tree.
//!
//! Insert, search and delete each walk a single root-to-leaf path and rebalance with at
//! most a few rotations on the way back, so every one of them costs O(log n).
//!
//! Nodes live in a vector and refer to each other by index, with slot 0 acting as the
//! shared black sentinel that stands in for every missing child or parent. Parent links
//! are plain indices, so rotations are a handful of index writes and there are no
//! dangling pointers to worry about. Insert and search hand out [`NodeHandle`]s which
//! stay valid until the node they name is deleted; deleted slots are recycled, and a
//! generation counter makes sure a stale handle is rejected instead of silently naming
//! the slot's new occupant. Handles also remember which tree issued them, and any other
//! tree refuses them.
//!
//! Equal keys are allowed. A duplicate is placed to the right of the keys already
//! stored, so iteration yields equal keys in insertion order.
//!
//! # Example
//!
//! ```rust
//! use rb_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [41, 38, 31, 12, 19, 8] {
//!     tree.insert(key).unwrap();
//! }
//! let handle = tree.search(&19).unwrap();
//! assert_eq!(tree.delete(handle), Ok(19));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![8, 12, 31, 38, 41]);
//! ```
//!

mod error;
mod fixup;
mod index;
mod iter;
mod node;
mod rbtree;


pub use error::RbTreeError;
pub use index::{DefaultIx, IndexType, NodeHandle};
pub use iter::{IntoIter, Iter};
pub use rbtree::RbTree;
