use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

pub type DefaultIx = u32;

/// Integer types usable as arena indices.
///
/// # Safety
///
/// `new` and `index` must round-trip for every value in `0..=max().index()`.
pub unsafe trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

unsafe impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

unsafe impl IndexType for u16 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u16
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u16::MAX
    }
}

unsafe impl IndexType for usize {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self
    }
    #[inline(always)]
    fn max() -> Self {
        usize::MAX
    }
}

/// Arena slot identifier.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    /// Slot of the shared black sentinel.
    #[inline]
    pub fn sentinel() -> Self {
        NodeIndex::new(0)
    }

    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}

/// A handle to a node stored in an [`RbTree`](crate::RbTree).
///
/// Handles are returned by `insert` and `search` and stay valid until the node
/// they name is deleted, however many other nodes are inserted, deleted or
/// rotated around it. A handle is rejected with
/// [`RbTreeError::InvalidHandle`](crate::RbTreeError::InvalidHandle) once its
/// node has been deleted, even if the slot was reused afterwards, and when it
/// is passed to a tree other than the one that issued it.
///
/// Each slot counts its reuses in a `u32` generation. A slot whose generation
/// is exhausted is retired rather than recycled, so an old handle can never
/// come back to life.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeHandle<Ix = DefaultIx> {
    pub(crate) tree: u64,
    pub(crate) index: NodeIndex<Ix>,
    pub(crate) generation: u32,
}

impl<Ix: IndexType> NodeHandle<Ix> {
    pub(crate) fn new(tree: u64, index: NodeIndex<Ix>, generation: u32) -> Self {
        Self {
            tree,
            index,
            generation,
        }
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeHandle<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NodeHandle({:?}@{} in #{})",
            self.index.0, self.generation, self.tree
        )
    }
}

/// Hand out a process-wide unique tree id.
pub(crate) fn next_tree_id() -> u64 {
    static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed)
}
