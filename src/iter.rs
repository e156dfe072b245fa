use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::rbtree::RbTree;

/// Pushes a link of nodes on the left to stack.
fn left_link<K, Ix>(tree_ref: &RbTree<K, Ix>, mut x: NodeIndex<Ix>) -> Vec<NodeIndex<Ix>>
where
    Ix: IndexType,
{
    let mut nodes = vec![];
    while !tree_ref.node_ref(x, Node::is_sentinel) {
        nodes.push(x);
        x = tree_ref.node_ref(x, Node::left);
    }
    nodes
}

/// An in-order iterator over the keys of a `RbTree`.
#[derive(Debug)]
pub struct Iter<'a, K, Ix> {
    /// Reference to the tree
    pub(crate) tree_ref: &'a RbTree<K, Ix>,
    /// Stack for iteration
    pub(crate) stack: Vec<NodeIndex<Ix>>,
    /// Keys not yet yielded
    pub(crate) remaining: usize,
}

impl<'a, K, Ix> Iter<'a, K, Ix>
where
    Ix: IndexType,
{
    pub fn new(tree_ref: &'a RbTree<K, Ix>) -> Self {
        Iter {
            tree_ref,
            stack: left_link(tree_ref, tree_ref.root),
            remaining: tree_ref.len,
        }
    }
}

impl<'a, K, Ix> Iterator for Iter<'a, K, Ix>
where
    Ix: IndexType,
{
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        self.stack.extend(left_link(
            self.tree_ref,
            self.tree_ref.node_ref(x, Node::right),
        ));
        self.remaining -= 1;
        Some(self.tree_ref.node_ref(x, Node::key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, Ix> ExactSizeIterator for Iter<'_, K, Ix> where Ix: IndexType {}

/// An owning in-order iterator over the keys of a `RbTree`.
#[derive(Debug)]
pub struct IntoIter<K, Ix> {
    tree: RbTree<K, Ix>,
    /// Stack for iteration
    pub(crate) stack: Vec<NodeIndex<Ix>>,
}

impl<K, Ix> IntoIter<K, Ix>
where
    Ix: IndexType,
{
    pub fn new(tree: RbTree<K, Ix>) -> Self {
        let mut temp = IntoIter { tree, stack: vec![] };
        temp.stack = left_link(&temp.tree, temp.tree.root);
        temp
    }
}

impl<K, Ix> Iterator for IntoIter<K, Ix>
where
    Ix: IndexType,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        self.stack.extend(left_link(
            &self.tree,
            self.tree.node_ref(x, Node::right),
        ));
        self.tree.len -= 1;
        self.tree.node_mut(x, |n| n.key.take())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len, Some(self.tree.len))
    }
}

impl<K, Ix> ExactSizeIterator for IntoIter<K, Ix> where Ix: IndexType {}
