//! Category tree built from the flat project catalog.

use serde::Serialize;

use crate::models::{Category, ProjectEntry};

pub const ROOT_LABEL: &str = "Portfolio";

/// Identity of a node in the category tree.
///
/// Leaves are keyed by their position in the source catalog, never by the
/// entry's `id`, which is not unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeId {
    Root,
    Category { category: Category },
    Project { category: Category, position: usize },
}

/// What a node carries besides its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Category(Category),
    Project(ProjectEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The project behind a leaf, if this is one.
    pub fn project(&self) -> Option<&ProjectEntry> {
        match &self.kind {
            NodeKind::Project(entry) => Some(entry),
            _ => None,
        }
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Ids of this node and all its descendants, in pre-order.
    pub fn ids(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids(&self, out: &mut Vec<NodeId>) {
        out.push(self.id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}

/// The rooted portfolio tree: root → non-empty categories → projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTree {
    pub root: TreeNode,
}

impl CategoryTree {
    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        self.root.find(id)
    }

    /// Number of project leaves.
    pub fn leaf_count(&self) -> usize {
        self.root.children.iter().map(|c| c.children.len()).sum()
    }
}

/// Group entries into the category tree.
///
/// Categories appear in enumeration order and only when non-empty; leaves
/// keep their relative catalog order.
pub fn build_tree(entries: &[ProjectEntry]) -> CategoryTree {
    let mut buckets: Vec<Vec<TreeNode>> = vec![Vec::new(); Category::ALL.len()];

    for (position, entry) in entries.iter().enumerate() {
        buckets[entry.category.ordinal()].push(TreeNode {
            id: NodeId::Project {
                category: entry.category,
                position,
            },
            label: entry.name.clone(),
            kind: NodeKind::Project(entry.clone()),
            children: Vec::new(),
        });
    }

    let children = Category::ALL
        .iter()
        .zip(buckets)
        .filter(|(_, leaves)| !leaves.is_empty())
        .map(|(&category, leaves)| TreeNode {
            id: NodeId::Category { category },
            label: category.label().to_string(),
            kind: NodeKind::Category(category),
            children: leaves,
        })
        .collect();

    CategoryTree {
        root: TreeNode {
            id: NodeId::Root,
            label: ROOT_LABEL.to_string(),
            kind: NodeKind::Root,
            children,
        },
    }
}
