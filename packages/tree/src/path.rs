//! Slash-delimited folder paths.

use std::fmt;

/// A folder path resolved by descent from the tree root.
///
/// Unlike store paths, segments are not validated: any non-empty string can
/// name a folder.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct FolderPath {
    pub segments: Vec<String>,
}

impl FolderPath {
    /// Parse a path string.
    ///
    /// Empty segments are skipped, so `""`, `"/"` and `"//"` all name the
    /// root, and `"/a//b/"` is the same path as `"a/b"`.
    ///
    /// ```rust
    /// use treefs_tree::FolderPath;
    ///
    /// assert_eq!(FolderPath::parse("/docs//drafts/"), FolderPath::parse("docs/drafts"));
    /// assert!(FolderPath::parse("/").is_root());
    /// ```
    pub fn parse(s: &str) -> Self {
        FolderPath {
            segments: s
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

impl From<&str> for FolderPath {
    fn from(s: &str) -> Self {
        FolderPath::parse(s)
    }
}
