use std::cmp::Ordering;

use log::trace;

/// The maximum absolute difference in height permitted between the left and
/// right subtrees of any node.
///
/// The balancer compares the balance factor against this value with a strict
/// `>`, so a sibling height difference of exactly 1 never triggers a rotation.
pub(crate) const ALLOWED_IMBALANCE: i16 = 1;

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child node pointers.
    ///
    /// Declared before `key` so both subtrees are released before the key of
    /// this node when it is dropped.
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,

    /// The node's cached AVL height.
    ///
    /// A leaf has a height of 0, and an empty subtree is considered to have a
    /// height of -1 (see [`height()`]).
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Insert `key` into the subtree rooted at `self`, returning `true` if it
    /// was not already present.
    pub(crate) fn insert(self: &mut Box<Self>, key: K) -> bool
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        let inserted = match child {
            Some(v) => v.insert(key),
            None => {
                // Insert the key as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key)));

                // A new leaf changes the height of this subtree by at most 1,
                // which cannot push the balance factor of self beyond the
                // allowed imbalance.
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return true;
            }
        };

        if !inserted {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return false;
        }

        rebalance(self);
        true
    }

    /// Return the stored key equal to `key` in the subtree rooted at `self`,
    /// if any.
    pub(crate) fn get(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut ptr = Some(self);

        while let Some(n) = ptr {
            ptr = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(&n.key),
                Ordering::Greater => n.right(),
            };
        }

        None
    }

    /// Descend the left-most edge of the subtree rooted at `self`.
    pub(crate) fn min(&self) -> &Self {
        let mut n = self;
        while let Some(left) = n.left() {
            n = left;
        }
        n
    }

    /// Descend the right-most edge of the subtree rooted at `self`.
    pub(crate) fn max(&self) -> &Self {
        let mut n = self;
        while let Some(right) = n.right() {
            n = right;
        }
        n
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Consume this [`Node`], returning the key it holds.
    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

/// Return the height of the subtree `n`, or -1 if the subtree is empty.
pub(crate) fn height<K>(n: Option<&Node<K>>) -> i16 {
    n.map(|v| v.height() as i16).unwrap_or(-1)
}

fn update_height<K>(n: &mut Node<K>) {
    // Correctness: the result is at least 0 as the empty subtree height is -1.
    n.height = (1 + height(n.left()).max(height(n.right()))) as u8;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<K>(n: &Node<K>) -> i16 {
    height(n.left()) - height(n.right())
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// A no-op if `x` has no right child to promote.
fn rotate_left<K>(x: &mut Box<Node<K>>) {
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    // "p" is now the demoted node, and its children are final.
    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// A no-op if `y` has no left child to promote.
fn rotate_right<K>(y: &mut Box<Node<K>>) {
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Restore the AVL invariant for the subtree rooted at `n`, the children of
/// which have just been modified, and refresh the cached height of `n`.
///
/// Both subtrees of `n` must already satisfy the AVL invariant, and the
/// balance factor of `n` must be within ±2.
pub(crate) fn rebalance<K>(n: &mut Box<Node<K>>) {
    match balance(n) {
        // Left-heavy
        b if b > ALLOWED_IMBALANCE => {
            if let Some(l) = n.left.as_mut() {
                if height(l.left()) < height(l.right()) {
                    trace!("left-right imbalance (balance factor {b}), double rotation");
                    rotate_left(l);
                } else {
                    trace!("left-left imbalance (balance factor {b}), single rotation");
                }
            }
            rotate_right(n);
        }
        // Right-heavy
        b if b < -ALLOWED_IMBALANCE => {
            if let Some(r) = n.right.as_mut() {
                if height(r.right()) < height(r.left()) {
                    trace!("right-left imbalance (balance factor {b}), double rotation");
                    rotate_right(r);
                } else {
                    trace!("right-right imbalance (balance factor {b}), single rotation");
                }
            }
            rotate_left(n);
        }
        _ => { /* balanced */ }
    }

    update_height(n);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed the allowed imbalance.
    debug_assert!(balance(n).abs() <= ALLOWED_IMBALANCE);
}

/// Remove `key` from the subtree rooted at `node`, rebalancing every ancestor
/// of the removed node on the way back up.
///
/// Returns the removed key, or [`None`] if the key is not found.
pub(crate) fn remove_recurse<K>(node: &mut Option<Box<Node<K>>>, key: &K) -> Option<K>
where
    K: Ord,
{
    let n = node.as_mut()?;

    let removed = match key.cmp(&n.key) {
        Ordering::Less => remove_recurse(&mut n.left, key)?,
        Ordering::Greater => remove_recurse(&mut n.right, key)?,
        Ordering::Equal => return unlink(node),
    };

    // Removing a descendent may shrink either subtree of n, which may require
    // a rotation at every ancestor, not just the first.
    rebalance(n);
    Some(removed)
}

/// Unlink the node at `node` from the tree, returning the key it held.
///
/// A node with at most one child is replaced by that child (if any). A node
/// with two children keeps its position and adopts the key of its in-order
/// successor, which is extracted from the right subtree.
fn unlink<K>(node: &mut Option<Box<Node<K>>>) -> Option<K> {
    let mut n = node.take()?;

    match (n.left.take(), n.right.take()) {
        (Some(left), Some(right)) => {
            trace!("unlinking node with two children, promoting in-order successor");

            let (successor, right) = extract_subtree_min(right);
            n.left = Some(left);
            n.right = right;

            let old = std::mem::replace(&mut n.key, successor);
            rebalance(&mut n);
            *node = Some(n);

            Some(old)
        }
        (child, None) | (None, child) => {
            // The child (if any) is already a valid AVL subtree, and takes the
            // place of the unlinked node. The parent rebalances as required.
            *node = child;
            Some(n.into_key())
        }
    }
}

/// Extract the minimum key from the subtree rooted at `root`, returning it
/// along with the remaining (rebalanced) subtree, if any.
///
/// The minimum node has no left child, so its right subtree (if any) is linked
/// in its place.
fn extract_subtree_min<K>(mut root: Box<Node<K>>) -> (K, Option<Box<Node<K>>>) {
    match root.left.take() {
        Some(left) => {
            // Descend left to the end of the left edge.
            let (min, rest) = extract_subtree_min(left);
            root.left = rest;
            rebalance(&mut root);
            (min, Some(root))
        }
        None => {
            let right = root.right.take();
            (root.into_key(), right)
        }
    }
}
