use crate::node::Node;

/// A depth-first walk yielding each [`Node`] before its left and right
/// subtrees.
#[derive(Debug)]
pub(crate) struct PreOrderIter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrderIter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // The left child is pushed last so it is visited first.
        self.stack.extend(v.right().into_iter().chain(v.left()));

        Some(v)
    }
}
