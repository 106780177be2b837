use crate::node::Node;

/// A depth-first walk yielding each [`Node`] after both of its subtrees.
#[derive(Debug)]
pub(crate) struct PostOrderIter<'a, K> {
    /// Nodes to visit, paired with a flag set once their children have been
    /// pushed above them on the stack.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrderIter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|v| (v, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, expanded) = self.stack.pop()?;
            if expanded {
                return Some(v);
            }

            // Revisit this node once both subtrees have been yielded.
            self.stack.push((v, true));
            self.stack.extend(
                v.right()
                    .into_iter()
                    .chain(v.left())
                    .map(|child| (child, false)),
            );
        }
    }
}
