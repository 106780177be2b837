use crate::node::Node;

/// A consuming iterator yielding the keys of an [`AvlTree`](crate::AvlTree)
/// in ascending order.
///
/// This `struct` is created by the `into_iter()` method on
/// [`AvlTree`](crate::AvlTree).
#[derive(Debug)]
pub struct OwnedIter<K> {
    /// Detached left spines of the subtrees still to be visited. Each node
    /// has had its left child taken, but still owns its right subtree.
    pending: Vec<Box<Node<K>>>,
}

impl<K> OwnedIter<K> {
    pub(crate) fn new(root: Option<Box<Node<K>>>) -> Self {
        let mut this = Self { pending: vec![] };
        this.descend_left(root);
        this
    }

    fn descend_left(&mut self, mut n: Option<Box<Node<K>>>) {
        while let Some(mut v) = n {
            n = v.take_left();
            self.pending.push(v);
        }
    }
}

impl<K> Iterator for OwnedIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.pending.pop()?;

        let right = v.take_right();
        self.descend_left(right);

        Some(v.into_key())
    }
}
