//! Category tree derived from content ids
//!
//! Every prompt lives at `<category>/<sub>/.../<file>`. The folders form a
//! forest of [`CategoryNode`]s keyed by segment name. Construction never
//! orders anything; display order comes from [`sorted`], applied fresh at
//! render time.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::content::ContentItem;

/// A folder-level grouping in the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    /// Display name: the segment with its first character upper-cased
    pub name: String,
    /// Slash-joined segments from the root to this node
    pub path: String,
    /// Child categories keyed by segment
    pub children: BTreeMap<String, CategoryNode>,
}

impl CategoryNode {
    fn new(segment: &str, path: String) -> Self {
        CategoryNode {
            name: capitalize_first(segment),
            path,
            children: BTreeMap::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The category forest: top-level segment to node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTree {
    roots: BTreeMap<String, CategoryNode>,
}

impl CategoryTree {
    /// Build the tree from content ids.
    ///
    /// The last segment of each id is the filename and is ignored. Items with
    /// no folder segment are skipped.
    pub fn build<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: ContentItem,
    {
        let mut tree = CategoryTree::default();
        for item in items {
            tree.insert(item.id());
        }
        tree
    }

    /// Insert the folders of one id. Existing nodes are left untouched.
    pub fn insert(&mut self, id: &str) {
        let mut parts: Vec<&str> = id.split('/').collect();
        parts.pop();
        if parts.is_empty() {
            tracing::trace!(id, "skipping_root_level_item");
            return;
        }

        let mut level = &mut self.roots;
        let mut current_path = String::new();
        for part in parts {
            if !current_path.is_empty() {
                current_path.push('/');
            }
            current_path.push_str(part);

            let node = level
                .entry(part.to_string())
                .or_insert_with(|| CategoryNode::new(part, current_path.clone()));
            level = &mut node.children;
        }
    }

    pub fn roots(&self) -> &BTreeMap<String, CategoryNode> {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find the node at a slash-joined path
    pub fn find(&self, path: &str) -> Option<&CategoryNode> {
        let mut segments = path.split('/');
        let mut node = self.roots.get(segments.next()?)?;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// Depth-first walk in display order, yielding `(depth, node)`
    pub fn walk(&self) -> Walk<'_> {
        let mut stack: Vec<(usize, &CategoryNode)> =
            sorted(&self.roots).into_iter().map(|n| (0, n)).collect();
        stack.reverse();
        Walk { stack }
    }
}

/// Iterator returned by [`CategoryTree::walk`]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a CategoryNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a CategoryNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(sorted(&node.children).into_iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Siblings in display order
pub fn sorted(nodes: &BTreeMap<String, CategoryNode>) -> Vec<&CategoryNode> {
    let mut ordered: Vec<&CategoryNode> = nodes.values().collect();
    ordered.sort_by(|a, b| compare_names(&a.name, &b.name));
    ordered
}

/// Locale-style name comparison.
///
/// Base letters decide first, ignoring case and accents. Ties are broken by
/// accents, then by case (lower case first), then by code point.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| upper_flags(a).cmp(upper_flags(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn upper_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}
