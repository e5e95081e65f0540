use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::error::Result;
use crate::tree::CategoryTree;

/// Which category nodes are expanded, keyed by node path.
///
/// An immutable snapshot: transitions return a new value and never touch
/// the one they were given. Absent paths are collapsed.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    entries: Arc<BTreeMap<String, bool>>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<String, bool>) -> Self {
        ExpansionState {
            entries: Arc::new(entries),
        }
    }

    /// Every path in `active` mapped to expanded
    pub fn from_active(active: &BTreeSet<String>) -> Self {
        Self::from_entries(active.iter().map(|p| (p.clone(), true)).collect())
    }

    /// Parse the persisted JSON form (`{"path": bool, ...}`)
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: BTreeMap<String, bool> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries))
    }

    /// Serialize to the persisted JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self.entries.as_ref())?)
    }

    pub fn get(&self, path: &str) -> Option<bool> {
        self.entries.get(path).copied()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.get(path).unwrap_or(false)
    }

    pub fn entries(&self) -> &BTreeMap<String, bool> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether both values are the same snapshot, not merely equal
    pub fn same_snapshot(&self, other: &ExpansionState) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// A copy with `path` set to `expanded`
    pub fn with(&self, path: &str, expanded: bool) -> Self {
        let mut entries = self.entries.as_ref().clone();
        entries.insert(path.to_string(), expanded);
        Self::from_entries(entries)
    }

    /// A copy with every path in `active` expanded, or this same snapshot
    /// when all of them already are
    pub fn with_all_expanded(&self, active: &BTreeSet<String>) -> Self {
        let missing: Vec<&String> = active.iter().filter(|p| !self.is_expanded(p)).collect();
        if missing.is_empty() {
            return self.clone();
        }
        let mut entries = self.entries.as_ref().clone();
        for path in missing {
            entries.insert(path.clone(), true);
        }
        Self::from_entries(entries)
    }

    /// A copy without entries for paths that name no node of `tree`
    pub fn pruned(&self, tree: &CategoryTree) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(path, _)| tree.contains(path))
            .map(|(path, open)| (path.clone(), *open))
            .collect();
        Self::from_entries(entries)
    }
}

impl PartialEq for ExpansionState {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ExpansionState {}
