use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::cursor::{Bfs, Dfs, HeapOrder, InOrder, PostOrder, PreOrder};
use crate::edge::Edge;
use crate::heap;
use crate::node::Node;

/// A tree whose nodes accept at most `K` children through [`Tree::add_sub_node`].
///
/// The limit only applies when attaching: [`Tree::to_heap`] always reshapes
/// the tree into a complete binary tree, whatever `K` is.
///
/// Structural changes need `&mut self`, so no cursor can be alive while the
/// tree is being changed.
pub struct Tree<T, const K: usize = 2> {
    root: Option<Node<T>>,
    len: usize,
}

/// What [`Tree::add_sub_node`] did with the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    /// The child was appended under the first matching node.
    Attached,
    /// The tree has no root yet.
    EmptyTree,
    /// No node holds the parent value.
    NoMatch,
    /// The first node holding the parent value already has `K` children.
    Full,
}

impl Attach {
    pub fn is_attached(self) -> bool {
        self == Attach::Attached
    }
}

impl<T, const K: usize> Tree<T, K> {
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.add_root(value);
        tree
    }

    /// Throws away the current tree, if any, and starts over with a single node.
    pub fn add_root(&mut self, value: T) {
        self.clear();
        self.root = Some(Node::new(value));
        self.len = 1;
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn arity(&self) -> usize {
        K
    }

    /// Every node in level order, nearest to the root first.
    pub fn nodes_bfs(&self) -> Vec<&Node<T>> {
        self.bfs().collect()
    }

    pub fn clear(&mut self) {
        // iterative so that long chains don't recurse once per level
        let mut pending: Vec<Node<T>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
        self.len = 0;
    }

    pub fn begin_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_ref())
    }

    pub fn end_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(None)
    }

    pub fn begin_dfs(&self) -> Dfs<'_, T> {
        Dfs::new(self.root.as_ref())
    }

    pub fn end_dfs(&self) -> Dfs<'_, T> {
        Dfs::new(None)
    }

    pub fn begin_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_ref())
    }

    pub fn end_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(None)
    }

    /// See [`InOrder`] for how nodes with more than two children are handled.
    pub fn begin_in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_ref())
    }

    pub fn end_in_order(&self) -> InOrder<'_, T> {
        InOrder::new(None)
    }

    pub fn begin_bfs(&self) -> Bfs<'_, T> {
        Bfs::new(self.root.as_ref())
    }

    pub fn end_bfs(&self) -> Bfs<'_, T> {
        Bfs::new(None)
    }

    pub fn end_heap(&self) -> HeapOrder<'_, T> {
        HeapOrder::exhausted()
    }

    pub fn pre_order(&self) -> PreOrder<'_, T> {
        self.begin_pre_order()
    }

    pub fn dfs(&self) -> Dfs<'_, T> {
        self.begin_dfs()
    }

    pub fn post_order(&self) -> PostOrder<'_, T> {
        self.begin_post_order()
    }

    pub fn in_order(&self) -> InOrder<'_, T> {
        self.begin_in_order()
    }

    pub fn bfs(&self) -> Bfs<'_, T> {
        self.begin_bfs()
    }
}

impl<T: PartialEq, const K: usize> Tree<T, K> {
    /// Attaches a new node holding `child` under the first node, in level
    /// order, whose value equals `parent`.
    ///
    /// Only that first match is considered. If it already has `K` children
    /// nothing is attached, even when a later node with an equal value still
    /// has room. Ignoring the returned [`Attach`] is fine: every outcome other
    /// than [`Attach::Attached`] leaves the tree unchanged.
    pub fn add_sub_node(&mut self, parent: &T, child: T) -> Attach {
        if self.root.is_none() {
            debug!("attach skipped: tree is empty");
            return Attach::EmptyTree;
        }
        let Some(node) = self.find_mut(parent) else {
            debug!("attach skipped: no node holds the parent value");
            return Attach::NoMatch;
        };
        if node.children.len() >= K {
            debug!(arity = K, "attach skipped: parent is full");
            return Attach::Full;
        }

        node.children.push(Node::new(child));
        trace!(children = node.children.len(), "attached child");
        self.len += 1;
        Attach::Attached
    }

    /// Applies [`Tree::add_sub_node`] for each edge in order and returns how
    /// many of them attached.
    pub fn attach_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = Edge<T>>,
    {
        edges
            .into_iter()
            .map(|edge| self.add_sub_node(&edge.parent, edge.child))
            .filter(|outcome| outcome.is_attached())
            .count()
    }

    /// First node in level order whose value equals `value`.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        self.bfs().find(|node| node.value == *value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    fn find_mut(&mut self, value: &T) -> Option<&mut Node<T>> {
        let mut queue: VecDeque<&mut Node<T>> = self.root.iter_mut().collect();
        while let Some(node) = queue.pop_front() {
            if node.value == *value {
                return Some(node);
            }
            queue.extend(node.children.iter_mut());
        }
        None
    }
}

impl<T: PartialOrd, const K: usize> Tree<T, K> {
    pub fn begin_heap(&self) -> HeapOrder<'_, T> {
        HeapOrder::new(self.root.as_ref())
    }

    pub fn heap_order(&self) -> HeapOrder<'_, T> {
        self.begin_heap()
    }

    /// Rearranges the whole tree into a binary min-heap.
    ///
    /// Values are gathered in level order and heapified as a flat array. The
    /// old child lists are discarded; the value at index `i` becomes the
    /// parent of those at `2i + 1` and `2i + 2`. The result is a complete
    /// binary tree holding the smallest value at the root.
    pub fn to_heap(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        let mut values = Vec::with_capacity(self.len);
        let mut queue = VecDeque::from([root]);
        while let Some(mut node) = queue.pop_front() {
            queue.extend(node.children.drain(..));
            values.push(node.value);
        }

        heap::heapify_by(&mut values, |a, b| a < b);
        debug!(nodes = values.len(), arity = K, "reshaped tree into binary heap");
        self.root = build_binary(values);
    }
}

/// Links `values` as a complete binary tree using heap array indexing.
fn build_binary<T>(values: Vec<T>) -> Option<Node<T>> {
    let mut slots: Vec<Option<Node<T>>> = values
        .into_iter()
        .map(|v| Some(Node::new(v)))
        .collect();
    // children always sit at higher indices, so they are complete by the time
    // their parent takes them
    for index in (0..slots.len()).rev() {
        let left = slots.get_mut(2 * index + 1).and_then(Option::take);
        let right = slots.get_mut(2 * index + 2).and_then(Option::take);
        if let Some(node) = slots[index].as_mut() {
            node.children.extend(left.into_iter().chain(right));
        }
    }
    slots.into_iter().next().flatten()
}

impl<T, const K: usize> Default for Tree<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const K: usize> Clone for Tree<T, K> {
    fn clone(&self) -> Self {
        Tree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T, const K: usize> Drop for Tree<T, K> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// One line per node in pre-order, indented two spaces per level.
impl<T: fmt::Display, const K: usize> fmt::Display for Tree<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root.iter().map(|node| (node, 0)).collect();
        while let Some((node, indent)) = pending.pop() {
            writeln!(f, "{:indent$}{}", "", node.value, indent = indent)?;
            pending.extend(node.children.iter().rev().map(|child| (child, indent + 2)));
        }
        Ok(())
    }
}

impl<T: fmt::Debug, const K: usize> fmt::Debug for Tree<T, K> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("arity", &K)
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
