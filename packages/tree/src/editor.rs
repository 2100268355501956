//! Path-resolving edits on a tree.
//!
//! Every edit first resolves a [`FolderPath`] from the root, taking the first
//! folder child whose name matches each segment, and then touches only the
//! direct children of the resolved folder. Lookup always finishes before
//! anything is changed, so a failed edit leaves the tree as it was.
//!
//! Sibling names are not required to be unique. When duplicates exist, the
//! first match in child order wins, both for path segments and for the
//! named item of a replace or delete.

use crate::error::Error;
use crate::node::{Folder, Node, Tree};
use crate::path::FolderPath;

/// One mutation of a folder's direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Append `item` after the existing children.
    Insert { item: Node },
    /// Swap the first child named `name` for `item`, keeping its position.
    Replace { name: String, item: Node },
    /// Remove the first child named `name`.
    Delete { name: String },
}

impl Edit {
    pub fn insert(item: Node) -> Self {
        Edit::Insert { item }
    }

    pub fn replace(name: impl Into<String>, item: Node) -> Self {
        Edit::Replace {
            name: name.into(),
            item,
        }
    }

    pub fn delete(name: impl Into<String>) -> Self {
        Edit::Delete { name: name.into() }
    }
}

impl Tree {
    /// Find the folder named by `path`.
    pub fn resolve(&self, path: &FolderPath) -> Result<&Folder, Error> {
        let mut cursor = &self.root;
        for segment in path.iter() {
            cursor = cursor
                .subfolder(segment)
                .ok_or_else(|| Error::folder_not_found(segment))?;
        }
        Ok(cursor)
    }

    /// Find the folder named by `path`, mutably.
    pub fn resolve_mut(&mut self, path: &FolderPath) -> Result<&mut Folder, Error> {
        let mut cursor = &mut self.root;
        for segment in path.iter() {
            cursor = cursor
                .subfolder_mut(segment)
                .ok_or_else(|| Error::folder_not_found(segment))?;
        }
        Ok(cursor)
    }

    /// Apply `edit` to the folder at `path`.
    ///
    /// A missing path segment or named item yields `Error::NotFound` and
    /// leaves the tree unchanged.
    pub fn apply(&mut self, path: &FolderPath, edit: Edit) -> Result<(), Error> {
        match edit {
            Edit::Insert { item } => self.insert(path, item),
            Edit::Replace { name, item } => self.replace(path, &name, item).map(|_| ()),
            Edit::Delete { name } => self.delete(path, &name).map(|_| ()),
        }
    }

    pub fn insert(&mut self, path: &FolderPath, item: Node) -> Result<(), Error> {
        self.resolve_mut(path)?.children.push(item);
        Ok(())
    }

    /// Replace the first child named `name`, returning the old node.
    pub fn replace(&mut self, path: &FolderPath, name: &str, item: Node) -> Result<Node, Error> {
        let folder = self.resolve_mut(path)?;
        let index = folder
            .position(name)
            .ok_or_else(|| Error::item_not_found(name))?;
        Ok(std::mem::replace(&mut folder.children[index], item))
    }

    /// Delete the first child named `name`, returning the removed node.
    pub fn delete(&mut self, path: &FolderPath, name: &str) -> Result<Node, Error> {
        let folder = self.resolve_mut(path)?;
        let index = folder
            .position(name)
            .ok_or_else(|| Error::item_not_found(name))?;
        Ok(folder.children.remove(index))
    }
}

/// Return a copy of `tree` with `item` appended to the folder at `path`.
pub fn insert(tree: &Tree, path: &FolderPath, item: Node) -> Result<Tree, Error> {
    let mut next = tree.clone();
    next.insert(path, item)?;
    Ok(next)
}

/// Return a copy of `tree` with the first child named `name` replaced.
pub fn replace(tree: &Tree, path: &FolderPath, name: &str, item: Node) -> Result<Tree, Error> {
    let mut next = tree.clone();
    next.replace(path, name, item)?;
    Ok(next)
}

/// Return a copy of `tree` without the first child named `name`.
pub fn delete(tree: &Tree, path: &FolderPath, name: &str) -> Result<Tree, Error> {
    let mut next = tree.clone();
    next.delete(path, name)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntryKind;

    fn tree_with(children: Vec<Node>) -> Tree {
        Tree::new(Folder::with_children("root", children))
    }

    fn abc() -> Tree {
        tree_with(vec![Node::folder(
            "a",
            vec![Node::file("A"), Node::file("B"), Node::file("C")],
        )])
    }

    fn path(s: &str) -> FolderPath {
        FolderPath::parse(s)
    }

    #[test]
    fn insert_into_empty_folder() {
        let tree = tree_with(vec![Node::folder("a", vec![])]);
        let next = insert(&tree, &path("a"), Node::file("x")).unwrap();
        assert_eq!(
            next.resolve(&path("a")).unwrap().children,
            vec![Node::file("x")]
        );
    }

    #[test]
    fn insert_at_root() {
        let mut tree = Tree::empty();
        tree.insert(&path(""), Node::folder("docs", vec![])).unwrap();
        tree.insert(&path("/"), Node::file("readme")).unwrap();
        assert_eq!(
            tree.root.children,
            vec![Node::folder("docs", vec![]), Node::file("readme")]
        );
    }

    #[test]
    fn insert_appends_at_end() {
        let next = insert(&abc(), &path("a"), Node::file("D")).unwrap();
        let names: Vec<_> = next
            .resolve(&path("a"))
            .unwrap()
            .children
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn insert_allows_duplicate_names() {
        let next = insert(&abc(), &path("a"), Node::folder("B", vec![])).unwrap();
        let folder = next.resolve(&path("a")).unwrap();
        assert_eq!(folder.children.len(), 4);
        assert_eq!(folder.position("B"), Some(1));
    }

    #[test]
    fn replace_preserves_position() {
        let next = replace(&abc(), &path("a"), "B", Node::file("D")).unwrap();
        assert_eq!(
            next.resolve(&path("a")).unwrap().children,
            vec![Node::file("A"), Node::file("D"), Node::file("C")]
        );
    }

    #[test]
    fn replace_may_change_variant() {
        let mut tree = abc();
        let old = tree
            .replace(&path("a"), "C", Node::folder("C", vec![Node::file("inner")]))
            .unwrap();
        assert_eq!(old, Node::file("C"));
        assert!(tree.resolve(&path("a/C")).is_ok());
    }

    #[test]
    fn replace_hits_first_duplicate() {
        let tree = tree_with(vec![Node::file("x"), Node::file("y"), Node::file("x")]);
        let next = replace(&tree, &path(""), "x", Node::file("z")).unwrap();
        assert_eq!(
            next.root.children,
            vec![Node::file("z"), Node::file("y"), Node::file("x")]
        );
    }

    #[test]
    fn delete_shifts_left() {
        let next = delete(&abc(), &path("a"), "B").unwrap();
        assert_eq!(
            next.resolve(&path("a")).unwrap().children,
            vec![Node::file("A"), Node::file("C")]
        );
    }

    #[test]
    fn delete_removes_folder_with_contents() {
        let mut tree = abc();
        let removed = tree.delete(&path(""), "a").unwrap();
        assert!(removed.is_folder());
        assert!(tree.root.children.is_empty());
    }

    #[test]
    fn missing_segment_fails_for_every_edit() {
        let tree = abc();
        let bad = path("a/missing");
        let edits = vec![
            Edit::insert(Node::file("x")),
            Edit::replace("A", Node::file("x")),
            Edit::delete("A"),
        ];
        for edit in edits {
            let mut copy = tree.clone();
            let err = copy.apply(&bad, edit).unwrap_err();
            assert_eq!(
                err,
                Error::NotFound {
                    kind: EntryKind::Folder,
                    name: "missing".to_string()
                }
            );
            assert_eq!(copy, tree);
        }
    }

    #[test]
    fn missing_item_fails_without_mutation() {
        let mut tree = abc();
        let err = tree.replace(&path("a"), "Z", Node::file("x")).unwrap_err();
        assert_eq!(err.to_string(), "Item Z not found");
        let err = tree.delete(&path("a"), "Z").unwrap_err();
        assert_eq!(err.to_string(), "Item Z not found");
        assert_eq!(tree, abc());
    }

    #[test]
    fn segments_only_match_folders() {
        let tree = tree_with(vec![Node::file("a")]);
        let err = insert(&tree, &path("a"), Node::file("x")).unwrap_err();
        assert_eq!(err.to_string(), "Folder a not found");
    }

    #[test]
    fn segment_skips_file_to_reach_folder_of_same_name() {
        let tree = tree_with(vec![Node::file("a"), Node::folder("a", vec![])]);
        let next = insert(&tree, &path("a"), Node::file("x")).unwrap();
        assert_eq!(next.root.children[0], Node::file("a"));
        assert_eq!(next.root.children[1], Node::folder("a", vec![Node::file("x")]));
    }

    #[test]
    fn duplicate_folders_resolve_to_first() {
        let tree = tree_with(vec![Node::folder("a", vec![]), Node::folder("a", vec![])]);
        let next = insert(&tree, &path("a"), Node::file("x")).unwrap();
        assert_eq!(next.root.children[0], Node::folder("a", vec![Node::file("x")]));
        assert_eq!(next.root.children[1], Node::folder("a", vec![]));
    }

    #[test]
    fn deep_path_with_extra_slashes() {
        let tree = tree_with(vec![Node::folder(
            "a",
            vec![Node::folder("b", vec![Node::folder("c", vec![])])],
        )]);
        let next = insert(&tree, &path("//a/b//c/"), Node::file("leaf")).unwrap();
        assert_eq!(
            next.resolve(&path("a/b/c")).unwrap().children,
            vec![Node::file("leaf")]
        );
    }

    #[test]
    fn apply_matches_direct_edits() {
        let mut via_apply = abc();
        via_apply
            .apply(&path("a"), Edit::replace("A", Node::file("Z")))
            .unwrap();
        via_apply.apply(&path("a"), Edit::delete("C")).unwrap();
        via_apply
            .apply(&path("a"), Edit::insert(Node::file("E")))
            .unwrap();

        let mut direct = abc();
        assert_eq!(
            direct.replace(&path("a"), "A", Node::file("Z")).unwrap(),
            Node::file("A")
        );
        assert_eq!(direct.delete(&path("a"), "C").unwrap(), Node::file("C"));
        direct.insert(&path("a"), Node::file("E")).unwrap();

        assert_eq!(via_apply, direct);
        assert_eq!(
            direct.resolve(&path("a")).unwrap().children,
            vec![Node::file("Z"), Node::file("B"), Node::file("E")]
        );
    }

    #[test]
    fn pure_functions_leave_input_alone() {
        let tree = abc();
        let _ = delete(&tree, &path("a"), "A").unwrap();
        assert_eq!(tree, abc());
    }
}
