//! Expand/collapse state of the category tree view.
//!
//! The whole tree's expansion lives in one map owned by the view, so it can
//! be inspected and reset as a single value.

use std::collections::HashMap;

use crate::tree::{CategoryTree, NodeId};

/// Outcome of clicking a tree row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeClick {
    /// A branch flipped its own expanded flag.
    Toggled { node: NodeId, expanded: bool },
    /// A leaf was clicked; its link should open in a new browsing context.
    OpenLink(String),
    /// The id does not exist in the tree.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    overrides: HashMap<NodeId, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root starts expanded; everything else starts collapsed.
    pub fn default_for(node: NodeId) -> bool {
        matches!(node, NodeId::Root)
    }

    pub fn is_expanded(&self, node: NodeId) -> bool {
        self.overrides
            .get(&node)
            .copied()
            .unwrap_or_else(|| Self::default_for(node))
    }

    /// Handle a click on `node`.
    ///
    /// Only branches toggle, and only themselves. Leaf clicks never touch
    /// the map.
    pub fn click(&mut self, tree: &CategoryTree, node: NodeId) -> TreeClick {
        let Some(target) = tree.find(node) else {
            return TreeClick::Ignored;
        };

        if let Some(project) = target.project() {
            return TreeClick::OpenLink(project.url.clone());
        }
        if !target.has_children() {
            return TreeClick::Ignored;
        }

        let expanded = !self.is_expanded(node);
        self.overrides.insert(node, expanded);
        tracing::debug!(?node, expanded, "Tree node toggled");
        TreeClick::Toggled { node, expanded }
    }

    /// Forget all toggles, as when the tree is rebuilt.
    pub fn reset(&mut self) {
        self.overrides.clear();
    }

    /// Snapshot of every node's expanded flag, in pre-order.
    pub fn snapshot(&self, tree: &CategoryTree) -> Vec<(NodeId, bool)> {
        tree.root
            .ids()
            .into_iter()
            .map(|id| (id, self.is_expanded(id)))
            .collect()
    }

    /// Whether `node` is currently drawn: all its ancestors are expanded.
    pub fn is_visible(&self, node: NodeId) -> bool {
        match node {
            NodeId::Root => true,
            NodeId::Category { .. } => self.is_expanded(NodeId::Root),
            NodeId::Project { category, .. } => {
                self.is_expanded(NodeId::Root) && self.is_expanded(NodeId::Category { category })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Category;
    use crate::tree::build_tree;

    fn tree() -> CategoryTree {
        build_tree(Catalog::builtin().entries())
    }

    #[test]
    fn test_defaults() {
        let state = ExpansionState::new();
        assert!(state.is_expanded(NodeId::Root));
        assert!(!state.is_expanded(NodeId::Category {
            category: Category::Flyers
        }));
        assert!(!state.is_expanded(NodeId::Project {
            category: Category::Flyers,
            position: 10
        }));
    }

    #[test]
    fn test_branch_click_toggles_only_itself() {
        let tree = tree();
        let mut state = ExpansionState::new();
        let flyers = NodeId::Category {
            category: Category::Flyers,
        };

        let before = state.snapshot(&tree);
        assert_eq!(
            state.click(&tree, flyers),
            TreeClick::Toggled {
                node: flyers,
                expanded: true
            }
        );
        let after = state.snapshot(&tree);

        let changed: Vec<NodeId> = before
            .iter()
            .zip(&after)
            .filter(|(b, a)| b.1 != a.1)
            .map(|(b, _)| b.0)
            .collect();
        assert_eq!(changed, vec![flyers]);

        state.click(&tree, flyers);
        assert_eq!(state.snapshot(&tree), before);
    }

    #[test]
    fn test_root_click_collapses_without_touching_children() {
        let tree = tree();
        let mut state = ExpansionState::new();
        let web = NodeId::Category {
            category: Category::WebDesign,
        };
        state.click(&tree, web);
        state.click(&tree, NodeId::Root);

        assert!(!state.is_expanded(NodeId::Root));
        assert!(state.is_expanded(web));
        assert!(!state.is_visible(web));
    }

    #[test]
    fn test_leaf_click_opens_link_and_keeps_ancestors() {
        let tree = tree();
        let mut state = ExpansionState::new();
        let brand = NodeId::Category {
            category: Category::BrandIdentity,
        };
        state.click(&tree, brand);
        let before = state.snapshot(&tree);

        let leaf = NodeId::Project {
            category: Category::BrandIdentity,
            position: 2,
        };
        assert_eq!(
            state.click(&tree, leaf),
            TreeClick::OpenLink(
                "https://www.behance.net/gallery/176340759/Catalogo-de-producto-SmartPro".into()
            )
        );
        assert_eq!(state.snapshot(&tree), before);
        assert!(state.is_expanded(brand));
        assert!(state.is_expanded(NodeId::Root));
    }

    #[test]
    fn test_unknown_node_is_ignored() {
        let tree = build_tree(&[]);
        let mut state = ExpansionState::new();
        let flyers = NodeId::Category {
            category: Category::Flyers,
        };
        assert_eq!(state.click(&tree, flyers), TreeClick::Ignored);
        // A root with no children has nothing to expand.
        assert_eq!(state.click(&tree, NodeId::Root), TreeClick::Ignored);
        assert!(state.is_expanded(NodeId::Root));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let tree = tree();
        let mut state = ExpansionState::new();
        state.click(&tree, NodeId::Root);
        state.click(
            &tree,
            NodeId::Category {
                category: Category::GraphicDesign,
            },
        );
        state.reset();
        assert_eq!(state, ExpansionState::new());
    }
}
