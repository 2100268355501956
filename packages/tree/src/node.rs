//! File/folder node types and their JSON representation.
//!
//! Nodes are discriminated by an explicit `type` field on the wire:
//!
//! ```text
//! {"name": "notes.txt", "type": "file"}
//! {"name": "docs", "type": "folder", "children": [ ... ]}
//! ```
//!
//! A whole tree is stored as a single document whose `root` is a folder node.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::Error;

/// A leaf entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
}

/// A folder and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Index of the first direct child named `name`, of either variant.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|child| child.name() == name)
    }

    /// First direct child that is a folder named `name`.
    pub fn subfolder(&self, name: &str) -> Option<&Folder> {
        self.children.iter().find_map(|child| match child {
            Node::Folder(folder) if folder.name == name => Some(folder),
            _ => None,
        })
    }

    pub fn subfolder_mut(&mut self, name: &str) -> Option<&mut Folder> {
        self.children.iter_mut().find_map(|child| match child {
            Node::Folder(folder) if folder.name == name => Some(folder),
            _ => None,
        })
    }

    pub fn encode(&self) -> Value {
        json!({
            "name": self.name,
            "type": "folder",
            "children": self.children.iter().map(Node::encode).collect::<Vec<_>>(),
        })
    }
}

/// A single entry in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(File),
    Folder(Folder),
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Node::File(File { name: name.into() })
    }

    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder(Folder::with_children(name, children))
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Decode a node from an untyped JSON structure.
    ///
    /// The `type` field selects the variant; anything other than `"file"` or
    /// `"folder"` (including a missing or non-string tag) is a decode error.
    pub fn decode(raw: Value) -> Result<Self, Error> {
        Ok(Node::deserialize(serde_stacker::Deserializer::new(raw))?)
    }

    pub fn encode(&self) -> Value {
        match self {
            Node::File(file) => json!({ "name": file.name, "type": "file" }),
            Node::Folder(folder) => folder.encode(),
        }
    }
}

/// The whole hierarchy, owned by a single root folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTree", into = "RawTree")]
pub struct Tree {
    pub root: Folder,
}

#[derive(Serialize, Deserialize)]
struct RawTree {
    root: Node,
}

impl TryFrom<RawTree> for Tree {
    type Error = String;

    fn try_from(raw: RawTree) -> Result<Self, Self::Error> {
        match raw.root {
            Node::Folder(root) => Ok(Tree { root }),
            Node::File(file) => Err(format!(
                "tree root must be a folder, found file '{}'",
                file.name
            )),
        }
    }
}

impl From<Tree> for RawTree {
    fn from(tree: Tree) -> Self {
        RawTree {
            root: Node::Folder(tree.root),
        }
    }
}

impl Tree {
    pub fn new(root: Folder) -> Self {
        Self { root }
    }

    /// A tree holding nothing but an empty folder named `root`.
    pub fn empty() -> Self {
        Self::new(Folder::new("root"))
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::empty()
    }
}

/// Decode a whole tree document (`{"root": {...}}`).
///
/// Nesting depth is unbounded; the stack grows as deep folders are decoded.
pub fn decode(raw: Value) -> Result<Tree, Error> {
    Ok(Tree::deserialize(serde_stacker::Deserializer::new(raw))?)
}

/// Encode a tree into the document shape the store holds, preserving child order.
pub fn encode(tree: &Tree) -> Value {
    json!({ "root": tree.root.encode() })
}
