//! A K-ary tree with restartable traversal cursors and an in-place
//! min-heap reshape.
//!
//! ```
//! use kary_tree::Tree;
//!
//! let mut tree: Tree<i32> = Tree::with_root(1);
//! tree.add_sub_node(&1, 2);
//! tree.add_sub_node(&1, 3);
//! tree.add_sub_node(&2, 4);
//!
//! let pre: Vec<i32> = tree.pre_order().map(|node| *node.value()).collect();
//! assert_eq!(pre, [1, 2, 4, 3]);
//! ```

pub mod cursor;
pub mod edge;
pub mod heap;
pub mod node;
pub mod tree;

pub use cursor::{Bfs, Cursor, Dfs, HeapOrder, InOrder, PostOrder, PreOrder};
pub use edge::{Edge, ParseEdgeError};
pub use node::Node;
pub use tree::{Attach, Tree};
