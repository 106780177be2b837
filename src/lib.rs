//! A height-balanced (AVL) binary search tree of ordered keys.
//!
//! [`AvlTree`] keeps search, insertion and removal at `O(log n)` in the worst
//! case by restoring the AVL invariant (the heights of the two subtrees of
//! every node differ by at most 1) with local rotations as each mutation
//! unwinds back up to the root.
//!
//! ```
//! use avltree::{AvlError, AvlTree};
//!
//! let mut t = AvlTree::default();
//! for k in [10, 5, 1, 7, 14, 17, 19, 18] {
//!     t.insert(k);
//! }
//!
//! assert_eq!(t.iter().copied().collect::<Vec<_>>(), [1, 5, 7, 10, 14, 17, 18, 19]);
//! assert_eq!(t.find_min(), Ok(&1));
//! assert_eq!(t.height(), 3);
//!
//! t.clear();
//! assert_eq!(t.find_max(), Err(AvlError::Underflow));
//! ```

mod error;
mod iter;
mod node;
mod tree;

pub use error::*;
pub use iter::{Iter, OwnedIter};
pub use tree::*;
