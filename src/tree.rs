use log::debug;

use crate::{
    error::AvlError,
    iter::{Iter, OwnedIter, PostOrderIter, PreOrderIter},
    node::{self, remove_recurse, Node},
};

/// An ordered set of keys, stored in a height-balanced (AVL) binary search
/// tree.
///
/// Inserting a key that is already present is a no-op, as is removing a key
/// that is absent.
#[derive(Debug, Clone)]
pub struct AvlTree<K>(Option<Box<Node<K>>>);

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree, returning `true` if it was not already
    /// present.
    ///
    /// Inserting an existing key leaves the tree (and the stored key)
    /// unchanged.
    pub fn insert(&mut self, key: K) -> bool {
        match self.0 {
            Some(ref mut v) => v.insert(key),
            None => {
                self.0 = Some(Box::new(Node::new(key)));
                true
            }
        }
    }

    /// Remove `key` from the tree, returning `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Remove `key` from the tree, returning the stored key if it was
    /// present.
    pub fn take(&mut self, key: &K) -> Option<K> {
        remove_recurse(&mut self.0, key)
    }

    /// Return the stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.0.as_ref().and_then(|v| v.get(key))
    }

    /// Returns `true` if `key` is present in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K> AvlTree<K> {
    /// Return the smallest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::Underflow`] if the tree is empty.
    pub fn find_min(&self) -> Result<&K, AvlError> {
        self.0
            .as_deref()
            .map(|v| v.min().key())
            .ok_or(AvlError::Underflow)
    }

    /// Return the largest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::Underflow`] if the tree is empty.
    pub fn find_max(&self) -> Result<&K, AvlError> {
        self.0
            .as_deref()
            .map(|v| v.max().key())
            .ok_or(AvlError::Underflow)
    }

    /// Return the height of the tree, counted in edges along the longest path
    /// from the root to a leaf.
    ///
    /// An empty tree has a height of -1, and a tree holding a single key has
    /// a height of 0.
    pub fn height(&self) -> i16 {
        node::height(self.0.as_deref())
    }

    /// Return the number of keys in the tree.
    ///
    /// The count is not cached and requires a full traversal, costing `O(n)`.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Remove all keys from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of height {}", self.height());

        // Dropping the root releases the subtrees of each node before the node
        // itself.
        self.0 = None;
    }

    /// Iterate over the keys in ascending (in-order) order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.0.as_deref())
    }

    /// Iterate over the keys in pre-order, yielding each node before its left
    /// and right subtrees.
    pub fn iter_pre_order(&self) -> impl Iterator<Item = &K> {
        PreOrderIter::new(self.0.as_deref()).map(Node::key)
    }

    /// Iterate over the keys in post-order, yielding each node after its left
    /// and right subtrees.
    pub fn iter_post_order(&self) -> impl Iterator<Item = &K> {
        PostOrderIter::new(self.0.as_deref()).map(Node::key)
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = OwnedIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.0)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
