use crate::node::Node;

/// An iterator over the keys of an [`AvlTree`](crate::AvlTree) in ascending
/// order.
///
/// This `struct` is created by the [`iter`] method on
/// [`AvlTree`](crate::AvlTree).
///
/// [`iter`]: crate::AvlTree::iter
#[derive(Debug)]
pub struct Iter<'a, K> {
    /// The left spine of every subtree still to be visited, with the next
    /// smallest node on top.
    pending: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut this = Self { pending: vec![] };
        this.descend_left(root);
        this
    }

    fn descend_left(&mut self, mut n: Option<&'a Node<K>>) {
        while let Some(v) = n {
            self.pending.push(v);
            n = v.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.pending.pop()?;

        // Every key in the right subtree sorts after v, and before any node
        // already pending.
        self.descend_left(v.right());

        Some(v.key())
    }
}
