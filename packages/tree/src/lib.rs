//! # treefs-tree
//!
//! The file/folder tree that treefs serves, and the edits it supports.
//!
//! A [`Tree`] is a single root [`Folder`]; every entry below it is a
//! [`Node`], either a file or a folder with ordered children. Trees travel as
//! plain JSON documents via [`decode`] and [`encode`].
//!
//! Edits name a folder by a slash-delimited [`FolderPath`] and then insert,
//! replace or delete one of its direct children:
//!
//! ```rust
//! use treefs_tree::{FolderPath, Node, Tree};
//!
//! let mut tree = Tree::empty();
//! tree.insert(&FolderPath::root(), Node::folder("docs", vec![])).unwrap();
//! tree.insert(&FolderPath::parse("docs"), Node::file("notes.txt")).unwrap();
//!
//! let docs = tree.resolve(&FolderPath::parse("/docs/")).unwrap();
//! assert_eq!(docs.children, vec![Node::file("notes.txt")]);
//! ```

pub mod editor;
pub mod error;
pub mod node;
pub mod path;

pub use editor::Edit;
pub use error::{EntryKind, Error};
pub use node::{decode, encode, File, Folder, Node, Tree};
pub use path::FolderPath;
