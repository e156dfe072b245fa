use std::borrow::Borrow;
use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::RbTreeError;
use crate::fixup::Side;
use crate::index::{next_tree_id, DefaultIx, IndexType, NodeHandle, NodeIndex};
use crate::iter::{IntoIter, Iter};
use crate::node::{Color, Node};

/// An ordered multiset of keys, stored in a red-black tree.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RbTree<K, Ix = DefaultIx> {
    /// Vector that stores nodes, slot 0 is the sentinel
    pub(crate) nodes: Vec<Node<K, Ix>>,
    /// Root of the tree
    pub(crate) root: NodeIndex<Ix>,
    /// Number of keys in the tree
    pub(crate) len: usize,
    /// Vacated slots available for reuse
    pub(crate) free: Vec<NodeIndex<Ix>>,
    /// Identity stamped into every handle this tree issues
    pub(crate) id: u64,
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Creates a new `RbTree` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = vec![Self::new_sentinel()];
        nodes.reserve(capacity);
        RbTree {
            nodes,
            root: NodeIndex::sentinel(),
            len: 0,
            free: Vec::new(),
            id: next_tree_id(),
        }
    }

    /// Insert a key into the tree and return a handle to the new node.
    ///
    /// Equal keys are kept side by side; the newcomer is placed to the right of
    /// the ones already stored.
    ///
    /// # Errors
    ///
    /// Returns [`RbTreeError::OutOfMemory`] if no slot can be allocated for the
    /// node. The tree is left untouched in that case.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// let handle = tree.insert(7).unwrap();
    /// tree.insert(7).unwrap();
    /// assert_eq!(tree.key(handle), Ok(&7));
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K) -> Result<NodeHandle<Ix>, RbTreeError> {
        let z = self.alloc_node(key)?;
        self.insert_inner(z);
        Ok(self.handle(z))
    }

    /// Remove the node named by `handle` and return its key.
    ///
    /// # Errors
    ///
    /// Returns [`RbTreeError::InvalidHandle`] if the handle does not name a live
    /// node of this tree.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::{RbTree, RbTreeError};
    ///
    /// let mut tree: RbTree<i32> = [3, 1, 2].into_iter().collect();
    /// let handle = tree.search(&2).unwrap();
    /// assert_eq!(tree.delete(handle), Ok(2));
    /// assert_eq!(tree.delete(handle), Err(RbTreeError::InvalidHandle));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    #[inline]
    pub fn delete(&mut self, handle: NodeHandle<Ix>) -> Result<K, RbTreeError> {
        let z = self.resolve(handle)?;
        self.remove_inner(z);
        Ok(self.release(z))
    }

    /// Remove one occurrence of `key`, returning the stored key if there was one.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let mut tree: RbTree<i32> = [5, 5, 9].into_iter().collect();
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&4), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let z = self.search_inner(key)?;
        self.remove_inner(z);
        Some(self.release(z))
    }

    /// Find a node holding `key`.
    ///
    /// With duplicate keys any one of the equal nodes may be returned, but the
    /// same one is returned until the tree is mutated.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// let handle = tree.insert("b").unwrap();
    /// tree.insert("a").unwrap();
    /// assert_eq!(tree.search("b"), Some(handle));
    /// assert_eq!(tree.search("c"), None);
    /// ```
    #[inline]
    pub fn search<Q>(&self, key: &Q) -> Option<NodeHandle<Ix>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search_inner(key).map(|x| self.handle(x))
    }

    /// Return `true` if at least one node holds `key`.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search_inner(key).is_some()
    }

    /// Return the leftmost node of the subtree rooted at `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`RbTreeError::InvalidHandle`] if the handle does not name a live
    /// node of this tree.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let tree: RbTree<i32> = [2, 1, 3].into_iter().collect();
    /// let root = tree.search(&2).unwrap();
    /// let min = tree.minimum(root).unwrap();
    /// assert_eq!(tree.key(min), Ok(&1));
    /// ```
    #[inline]
    pub fn minimum(&self, handle: NodeHandle<Ix>) -> Result<NodeHandle<Ix>, RbTreeError> {
        let x = self.resolve(handle)?;
        Ok(self.handle(self.tree_minimum(x)))
    }

    /// Return the rightmost node of the subtree rooted at `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`RbTreeError::InvalidHandle`] if the handle does not name a live
    /// node of this tree.
    #[inline]
    pub fn maximum(&self, handle: NodeHandle<Ix>) -> Result<NodeHandle<Ix>, RbTreeError> {
        let x = self.resolve(handle)?;
        Ok(self.handle(self.tree_maximum(x)))
    }

    /// Return the node holding the smallest key, or `None` if the tree is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<NodeHandle<Ix>> {
        self.live(self.root)
            .map(|root| self.handle(self.tree_minimum(root)))
    }

    /// Return the node holding the largest key, or `None` if the tree is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<NodeHandle<Ix>> {
        self.live(self.root)
            .map(|root| self.handle(self.tree_maximum(root)))
    }

    /// Return the in-order successor of `handle`, `Ok(None)` for the last node.
    ///
    /// # Errors
    ///
    /// Returns [`RbTreeError::InvalidHandle`] if the handle does not name a live
    /// node of this tree.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let tree: RbTree<i32> = [10, 20, 30].into_iter().collect();
    /// let h = tree.search(&20).unwrap();
    /// let next = tree.successor(h).unwrap().unwrap();
    /// assert_eq!(tree.key(next), Ok(&30));
    /// assert_eq!(tree.successor(next), Ok(None));
    /// ```
    #[inline]
    pub fn successor(
        &self,
        handle: NodeHandle<Ix>,
    ) -> Result<Option<NodeHandle<Ix>>, RbTreeError> {
        let x = self.resolve(handle)?;
        Ok(self.live(self.neighbour(x, Side::Right)).map(|y| self.handle(y)))
    }

    /// Return the in-order predecessor of `handle`, `Ok(None)` for the first node.
    ///
    /// # Errors
    ///
    /// Returns [`RbTreeError::InvalidHandle`] if the handle does not name a live
    /// node of this tree.
    #[inline]
    pub fn predecessor(
        &self,
        handle: NodeHandle<Ix>,
    ) -> Result<Option<NodeHandle<Ix>>, RbTreeError> {
        let x = self.resolve(handle)?;
        Ok(self.live(self.neighbour(x, Side::Left)).map(|y| self.handle(y)))
    }

    /// Return the key stored in the node named by `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`RbTreeError::InvalidHandle`] if the handle does not name a live
    /// node of this tree.
    #[inline]
    pub fn key(&self, handle: NodeHandle<Ix>) -> Result<&K, RbTreeError> {
        let x = self.resolve(handle)?;
        Ok(self.node_ref(x, Node::key))
    }

    /// Get an iterator over the keys of the tree, in non-decreasing order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, Ix> {
        Iter::new(self)
    }

    /// Remove all keys from the tree.
    ///
    /// Handles issued before the call are invalidated: the tree takes a fresh
    /// id, so every slot, retired ones included, can be handed out again.
    #[inline]
    pub fn clear(&mut self) {
        self.free.clear();
        for (i, node) in self.nodes.iter_mut().enumerate().skip(1).rev() {
            node.key = None;
            node.generation = 0;
            node.left = None;
            node.right = None;
            node.parent = None;
            self.free.push(NodeIndex::new(i));
        }
        self.root = NodeIndex::sentinel();
        self.len = 0;
        self.id = next_tree_id();
    }

    /// Return the number of keys in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the tree contains no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of nodes on the longest root-to-leaf path, 0 when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level = vec![self.root];
        while !level.is_empty() {
            level = level
                .into_iter()
                .filter(|&x| !self.node_ref(x, Node::is_sentinel))
                .flat_map(|x| [self.node_ref(x, Node::left), self.node_ref(x, Node::right)])
                .collect();
            if !level.is_empty() {
                height += 1;
            }
        }
        height
    }

    /// Return the black-height of the root: the number of black nodes below it
    /// on any path down to the sentinel, the sentinel included. An empty tree
    /// has black-height 0.
    #[must_use]
    pub fn black_height(&self) -> usize {
        if self.node_ref(self.root, Node::is_sentinel) {
            return 0;
        }
        let mut height = 0;
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::left);
            if self.node_ref(x, Node::is_black) {
                height += 1;
            }
        }
        height
    }
}

impl<K> RbTree<K>
where
    K: Ord,
{
    /// Create an empty `RbTree`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Self::new_sentinel()],
            root: NodeIndex::sentinel(),
            len: 0,
            free: Vec::new(),
            id: next_tree_id(),
        }
    }
}

impl<K, Ix> Default for RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Create a new sentinel node
    fn new_sentinel() -> Node<K, Ix> {
        Node {
            key: None,
            left: None,
            right: None,
            parent: None,
            color: Color::Black,
            generation: 0,
        }
    }

    /// Place a fresh red node in the arena without linking it into the tree.
    pub(crate) fn alloc_node(&mut self, key: K) -> Result<NodeIndex<Ix>, RbTreeError> {
        let sentinel = NodeIndex::sentinel();
        if let Some(idx) = self.free.pop() {
            let node = &mut self.nodes[idx.index()];
            node.key = Some(key);
            node.color = Color::Red;
            node.left = Some(sentinel);
            node.right = Some(sentinel);
            node.parent = Some(sentinel);
            return Ok(idx);
        }

        let slot = self.nodes.len();
        // check for max capacity, except if we use usize
        if <Ix as IndexType>::max().index() != !0 && slot >= <Ix as IndexType>::max().index() {
            debug!("index space exhausted at slot {slot}");
            return Err(RbTreeError::OutOfMemory);
        }
        // every slot may end up on the free list, so room for it is reserved up front
        let free_room = slot.saturating_sub(self.free.len());
        if let Err(err) = self
            .nodes
            .try_reserve(1)
            .and_then(|()| self.free.try_reserve(free_room))
        {
            debug!("node arena failed to grow: {err}");
            return Err(RbTreeError::OutOfMemory);
        }
        self.nodes.push(Node {
            key: Some(key),
            left: Some(sentinel),
            right: Some(sentinel),
            parent: Some(sentinel),
            color: Color::Red,
            generation: 0,
        });
        Ok(NodeIndex::new(slot))
    }

    /// Vacate an unlinked slot and hand back its key.
    ///
    /// A slot whose generation cannot be bumped any further is retired: it stays
    /// vacant and never goes back on the free list.
    fn release(&mut self, z: NodeIndex<Ix>) -> K {
        let node = &mut self.nodes[z.index()];
        let key = node.take_key();
        node.left = None;
        node.right = None;
        node.parent = None;
        match node.generation.checked_add(1) {
            Some(generation) => {
                node.generation = generation;
                self.free.push(z);
            }
            None => debug!("retired slot {z:?}, its generation is exhausted"),
        }
        self.len = self.len.wrapping_sub(1);
        key
    }

    /// Map a handle to the slot it names if that slot still holds its node.
    fn resolve(&self, handle: NodeHandle<Ix>) -> Result<NodeIndex<Ix>, RbTreeError> {
        let idx = handle.index;
        let live = handle.tree == self.id
            && idx != NodeIndex::sentinel()
            && self
                .nodes
                .get(idx.index())
                .is_some_and(|n| !n.is_sentinel() && n.generation == handle.generation);
        if live {
            Ok(idx)
        } else {
            debug!("rejected {handle:?}");
            Err(RbTreeError::InvalidHandle)
        }
    }

    pub(crate) fn handle(&self, x: NodeIndex<Ix>) -> NodeHandle<Ix> {
        NodeHandle::new(self.id, x, self.node_ref(x, |n| n.generation))
    }

    fn live(&self, x: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        (!self.node_ref(x, Node::is_sentinel)).then_some(x)
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Insert a node into the tree.
    fn insert_inner(&mut self, z: NodeIndex<Ix>) {
        self.bst_link(z);
        self.insert_fixup(z);
        self.len = self.len.wrapping_add(1);
    }

    /// Hang a detached red node below its in-order parent.
    pub(crate) fn bst_link(&mut self, z: NodeIndex<Ix>) {
        let mut y = NodeIndex::sentinel();
        let mut x = self.root;

        while !self.node_ref(x, Node::is_sentinel) {
            y = x;
            if self.node_ref(z, Node::key) < self.node_ref(x, Node::key) {
                x = self.node_ref(x, Node::left);
            } else {
                x = self.node_ref(x, Node::right);
            }
        }
        self.node_mut(z, Node::set_parent(y));
        if self.node_ref(y, Node::is_sentinel) {
            self.root = z;
        } else if self.node_ref(z, Node::key) < self.node_ref(y, Node::key) {
            self.node_mut(y, Node::set_left(z));
        } else {
            self.node_mut(y, Node::set_right(z));
        }
        self.node_mut(z, Node::set_color(Color::Red));
    }

    /// Unlink a node from the tree. The slot itself stays occupied.
    fn remove_inner(&mut self, z: NodeIndex<Ix>) {
        let mut y_orig_color = self.node_ref(z, Node::color);
        let x;
        if self.left_ref(z, Node::is_sentinel) {
            x = self.node_ref(z, Node::right);
            self.transplant(z, x);
        } else if self.right_ref(z, Node::is_sentinel) {
            x = self.node_ref(z, Node::left);
            self.transplant(z, x);
        } else {
            let y = self.tree_minimum(self.node_ref(z, Node::right));
            y_orig_color = self.node_ref(y, Node::color);
            x = self.node_ref(y, Node::right);
            if self.node_ref(y, Node::parent) == z {
                self.node_mut(x, Node::set_parent(y));
            } else {
                self.transplant(y, x);
                self.node_mut(y, Node::set_right(self.node_ref(z, Node::right)));
                self.right_mut(y, Node::set_parent(y));
            }
            self.transplant(z, y);
            self.node_mut(y, Node::set_left(self.node_ref(z, Node::left)));
            self.left_mut(y, Node::set_parent(y));
            self.node_mut(y, Node::set_color(self.node_ref(z, Node::color)));
        }

        if matches!(y_orig_color, Color::Black) {
            self.delete_fixup(x);
        }
    }

    /// Search for a node with the given key.
    fn search_inner<Q>(&self, key: &Q) -> Option<NodeIndex<Ix>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut x = self.root;
        while !self.node_ref(x, Node::is_sentinel) {
            let xkey: &Q = self.node_ref(x, Node::key).borrow();
            match key.cmp(xkey) {
                Ordering::Equal => return Some(x),
                Ordering::Less => x = self.node_ref(x, Node::left),
                Ordering::Greater => x = self.node_ref(x, Node::right),
            }
        }
        None
    }

    /// Binary tree left rotate.
    pub(crate) fn left_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.right_ref(x, Node::is_sentinel) {
            return;
        }
        trace!("left rotate at {x:?}");
        let y = self.node_ref(x, Node::right);
        self.node_mut(x, Node::set_right(self.node_ref(y, Node::left)));
        if !self.left_ref(y, Node::is_sentinel) {
            self.left_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(x));
    }

    /// Binary tree right rotate.
    pub(crate) fn right_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.left_ref(x, Node::is_sentinel) {
            return;
        }
        trace!("right rotate at {x:?}");
        let y = self.node_ref(x, Node::left);
        self.node_mut(x, Node::set_left(self.node_ref(y, Node::right)));
        if !self.right_ref(y, Node::is_sentinel) {
            self.right_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(x));
    }

    /// Rotate `x` so that it moves down towards `side`.
    pub(crate) fn rotate(&mut self, x: NodeIndex<Ix>, side: Side) {
        match side {
            Side::Left => self.left_rotate(x),
            Side::Right => self.right_rotate(x),
        }
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        self.node_mut(y, Node::set_parent(self.node_ref(x, Node::parent)));
        if self.parent_ref(x, Node::is_sentinel) {
            self.root = y;
        } else if self.is_left_child(x) {
            self.parent_mut(x, Node::set_left(y));
        } else {
            self.parent_mut(x, Node::set_right(y));
        }
        self.node_mut(x, Node::set_parent(y));
    }

    /// Find the node with the minimum key in the subtree.
    fn tree_minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.left_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::left);
        }
        x
    }

    /// Find the node with the maximum key in the subtree.
    fn tree_maximum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.right_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::right);
        }
        x
    }

    /// In-order neighbour of `x` on `side`, the sentinel if there is none.
    fn neighbour(&self, x: NodeIndex<Ix>, side: Side) -> NodeIndex<Ix> {
        let child = self.child(x, side);
        if !self.node_ref(child, Node::is_sentinel) {
            return match side {
                Side::Left => self.tree_maximum(child),
                Side::Right => self.tree_minimum(child),
            };
        }
        let mut x = x;
        let mut y = self.node_ref(x, Node::parent);
        while !self.node_ref(y, Node::is_sentinel) && self.child(y, side) == x {
            x = y;
            y = self.node_ref(y, Node::parent);
        }
        y
    }

    /// Replace one subtree as a child of its parent with another subtree.
    fn transplant(&mut self, u: NodeIndex<Ix>, v: NodeIndex<Ix>) {
        if self.parent_ref(u, Node::is_sentinel) {
            self.root = v;
        } else if self.is_left_child(u) {
            self.parent_mut(u, Node::set_left(v));
        } else {
            self.parent_mut(u, Node::set_right(v));
        }
        self.node_mut(v, Node::set_parent(self.node_ref(u, Node::parent)));
    }

    /// Check if a node is a left child of its parent.
    pub(crate) fn is_left_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::left) == node
    }

    /// Which side of its parent a node hangs on.
    pub(crate) fn side_of(&self, node: NodeIndex<Ix>) -> Side {
        if self.is_left_child(node) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Child of `node` on `side`.
    pub(crate) fn child(&self, node: NodeIndex<Ix>, side: Side) -> NodeIndex<Ix> {
        match side {
            Side::Left => self.node_ref(node, Node::left),
            Side::Right => self.node_ref(node, Node::right),
        }
    }
}

// Convenient methods for reference or mutate current/parent/left/right node
impl<'a, K, Ix> RbTree<K, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    pub(crate) fn left_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn right_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn left_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&mut self.nodes[idx])
    }

    pub(crate) fn right_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&mut self.nodes[idx])
    }

    pub(crate) fn parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&mut self.nodes[idx])
    }
}

impl<K, Ix> IntoIterator for RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    type Item = K;
    type IntoIter = IntoIter<K, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, K, Ix> IntoIterator for &'a RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, Ix> Extend<K> for RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// # Panics
    ///
    /// Panics if a node cannot be allocated, like the std collections do.
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            if let Err(err) = self.insert(key) {
                panic!("{err}");
            }
        }
    }
}

impl<K, Ix> FromIterator<K> for RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}
