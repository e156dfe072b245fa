use thiserror::Error;

/// Errors returned by fallible [`RbTree`](crate::RbTree) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RbTreeError {
    /// The handle names the sentinel, a slot outside the arena, or a node that
    /// has already been deleted.
    #[error("handle does not refer to a live node of this tree")]
    InvalidHandle,
    /// The node arena could not grow, either because the allocator refused or
    /// because the index type cannot address another slot.
    #[error("out of memory: cannot allocate another tree node")]
    OutOfMemory,
}
