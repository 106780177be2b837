use thiserror::Error;

/// Errors returned by [`AvlTree`](crate::AvlTree) queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AvlError {
    /// An extremal key was requested from an empty tree.
    #[error("tree is empty")]
    Underflow,
}
