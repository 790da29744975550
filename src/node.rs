/// A single tree node: one value and its children in insertion order.
///
/// Nodes own their children outright. The child count is not capped here;
/// the arity limit is applied by [`Tree`](crate::Tree) when attaching.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
