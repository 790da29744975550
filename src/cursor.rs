//! Restartable traversal cursors.
//!
//! Every cursor borrows the tree it walks and keeps only its own pending work
//! (a stack, a queue or a snapshot). The borrow keeps the tree from being
//! mutated while a cursor is alive. Each kind is created through a
//! `begin_*`/`end_*` pair on [`Tree`](crate::Tree); `end_*` is the exhausted
//! cursor, and a walk is finished once the cursor compares equal to it.
//! Every cursor is also an [`Iterator`] over `&Node<T>`.

use std::collections::VecDeque;

use crate::heap;
use crate::node::Node;

/// Pull-based traversal contract shared by all cursor kinds.
pub trait Cursor<'a, T: 'a> {
    /// The node the cursor points at, or `None` once exhausted.
    fn current(&self) -> Option<&'a Node<T>>;

    /// Steps past the current node. Does nothing once exhausted.
    fn advance(&mut self);

    fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }
}

fn same_nodes<'s, 'a: 's, T: 'a, I, J>(a: I, b: J) -> bool
where
    I: ExactSizeIterator<Item = &'s &'a Node<T>>,
    J: ExactSizeIterator<Item = &'s &'a Node<T>>,
{
    a.len() == b.len() && a.zip(b).all(|(x, y)| std::ptr::eq(*x, *y))
}

macro_rules! cursor_iterator {
    ($name:ident) => {
        impl<'a, T> Iterator for $name<'a, T> {
            type Item = &'a Node<T>;

            fn next(&mut self) -> Option<Self::Item> {
                let node = self.current()?;
                self.advance();
                Some(node)
            }
        }
    };
}

/// Depth-first, root first, subtrees left to right.
#[derive(Debug, Clone)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

/// Depth-first scan. Visits nodes in exactly the same order as [`PreOrder`].
pub type Dfs<'a, T> = PreOrder<'a, T>;

impl<'a, T> PreOrder<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        PreOrder {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Cursor<'a, T> for PreOrder<'a, T> {
    fn current(&self) -> Option<&'a Node<T>> {
        self.stack.last().copied()
    }

    fn advance(&mut self) {
        if let Some(node) = self.stack.pop() {
            // reversed so the leftmost child is popped next
            self.stack.extend(node.children.iter().rev());
        }
    }
}

impl<T> PartialEq for PreOrder<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_nodes(self.stack.iter(), other.stack.iter())
    }
}

cursor_iterator!(PreOrder);

/// Children before parents, built with two stacks.
///
/// Children are pushed onto the build stack in their original order, so the
/// emitted order is the reverse of a right-to-left pre-order walk.
#[derive(Debug, Clone)]
pub struct PostOrder<'a, T> {
    output: Vec<&'a Node<T>>,
}

impl<'a, T> PostOrder<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut pending: Vec<&'a Node<T>> = root.into_iter().collect();
        let mut output = Vec::new();
        while let Some(node) = pending.pop() {
            output.push(node);
            pending.extend(node.children.iter());
        }
        PostOrder { output }
    }
}

impl<'a, T> Cursor<'a, T> for PostOrder<'a, T> {
    fn current(&self) -> Option<&'a Node<T>> {
        self.output.last().copied()
    }

    fn advance(&mut self) {
        self.output.pop();
    }
}

impl<T> PartialEq for PostOrder<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_nodes(self.output.iter(), other.output.iter())
    }
}

cursor_iterator!(PostOrder);

/// Binary in-order walk: left subtree, node, right subtree.
///
/// Only `children[0]` and `children[1]` are treated as the left and right
/// subtrees. With an arity above two, any further children (and everything
/// below them) are never visited.
#[derive(Debug, Clone)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut cursor = InOrder { stack: Vec::new() };
        cursor.push_left(root);
        cursor
    }

    fn push_left(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.children.first();
        }
    }
}

impl<'a, T> Cursor<'a, T> for InOrder<'a, T> {
    fn current(&self) -> Option<&'a Node<T>> {
        self.stack.last().copied()
    }

    fn advance(&mut self) {
        if let Some(node) = self.stack.pop() {
            self.push_left(node.children.get(1));
        }
    }
}

impl<T> PartialEq for InOrder<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_nodes(self.stack.iter(), other.stack.iter())
    }
}

cursor_iterator!(InOrder);

/// Level order, nearest to the root first.
#[derive(Debug, Clone)]
pub struct Bfs<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Bfs<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Bfs {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Cursor<'a, T> for Bfs<'a, T> {
    fn current(&self) -> Option<&'a Node<T>> {
        self.queue.front().copied()
    }

    fn advance(&mut self) {
        if let Some(node) = self.queue.pop_front() {
            self.queue.extend(node.children.iter());
        }
    }
}

impl<T> PartialEq for Bfs<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_nodes(self.queue.iter(), other.queue.iter())
    }
}

cursor_iterator!(Bfs);

/// Snapshot of the tree's nodes arranged as a binary min-heap by value.
///
/// The heap is built over a private array of node references taken in level
/// order; the tree itself is left untouched.
#[derive(Debug, Clone)]
pub struct HeapOrder<'a, T> {
    heap: Vec<&'a Node<T>>,
    index: usize,
}

impl<'a, T: PartialOrd> HeapOrder<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut heap: Vec<&'a Node<T>> = Bfs::new(root).collect();
        heap::heapify_by(&mut heap, |a, b| a.value < b.value);
        HeapOrder { heap, index: 0 }
    }
}

impl<'a, T> HeapOrder<'a, T> {
    /// The exhausted cursor. Needs no ordering since nothing is heapified.
    pub(crate) fn exhausted() -> Self {
        HeapOrder {
            heap: Vec::new(),
            index: 0,
        }
    }
}

impl<'a, T> Cursor<'a, T> for HeapOrder<'a, T> {
    fn current(&self) -> Option<&'a Node<T>> {
        self.heap.get(self.index).copied()
    }

    fn advance(&mut self) {
        if self.index < self.heap.len() {
            self.index += 1;
        }
    }
}

impl<T> PartialEq for HeapOrder<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_nodes(
            self.heap[self.index..].iter(),
            other.heap[other.index..].iter(),
        )
    }
}

cursor_iterator!(HeapOrder);
