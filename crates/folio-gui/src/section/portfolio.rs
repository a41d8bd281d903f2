use iced::widget::{column, container, text};
use iced::{Element, Length};

use folio_core::content;
use folio_core::expansion::{ExpansionState, TreeClick};
use folio_core::models::ProjectEntry;
use folio_core::shell::{Position, PreviewTooltip};
use folio_core::tree::{build_tree, CategoryTree, NodeId};

use crate::section::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, TreeEvents};

#[derive(Debug, Clone)]
pub enum Message {
    NodeClicked(NodeId),
    LeafEntered(NodeId),
    LeafExited,
}

/// The collapsible project tree and its hover preview.
///
/// `tree` stays `None` until the catalog has been delivered.
#[derive(Debug, Default)]
pub struct Portfolio {
    tree: Option<CategoryTree>,
    expansion: ExpansionState,
    preview: PreviewTooltip,
}

impl Portfolio {
    /// Rebuild the tree from a fresh catalog; toggles do not survive.
    pub fn set_projects(&mut self, entries: &[ProjectEntry]) {
        let tree = build_tree(entries);
        tracing::debug!(projects = tree.leaf_count(), "Portfolio tree built");
        self.tree = Some(tree);
        self.expansion.reset();
        self.preview.hide();
    }

    pub fn preview(&self) -> &PreviewTooltip {
        &self.preview
    }

    /// The pointer moved somewhere in the window.
    pub fn pointer_moved(&mut self, pointer: Position) {
        if self.preview.is_visible() {
            self.preview.move_to(pointer);
        }
    }

    /// Any page scroll hides the preview.
    pub fn on_scroll(&mut self) {
        self.preview.on_scroll();
    }

    pub fn update(&mut self, msg: Message, pointer: Position) -> Action {
        let Some(tree) = &self.tree else {
            return Action::None;
        };

        match msg {
            Message::NodeClicked(node) => match self.expansion.click(tree, node) {
                TreeClick::OpenLink(url) => Action::OpenUrl(url),
                TreeClick::Toggled { .. } | TreeClick::Ignored => Action::None,
            },
            Message::LeafEntered(node) => {
                let Some(project) = tree.find(node).and_then(|n| n.project()) else {
                    return Action::None;
                };
                let url = project.image_url.clone();
                self.preview.show(url.clone(), pointer);
                Action::FetchThumbnail(url)
            }
            Message::LeafExited => {
                self.preview.hide();
                Action::None
            }
        }
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let body: Element<'a, Message> = match &self.tree {
            Some(tree) => widgets::tree_view(
                cs,
                tree,
                &self.expansion,
                &TreeEvents {
                    on_click: Message::NodeClicked,
                    on_enter: Message::LeafEntered,
                    on_exit: Message::LeafExited,
                },
            ),
            None => text("Loading portfolio...")
                .size(style::TEXT_BASE)
                .color(cs.muted)
                .into(),
        };

        let card = container(
            column![
                text(content::PORTFOLIO_HEADING)
                    .size(style::TEXT_3XL)
                    .font(style::FONT_HEADING)
                    .color(cs.heading),
                body,
            ]
            .spacing(style::SPACE_XL),
        )
        .padding(style::SPACE_2XL)
        .width(Length::Fill)
        .style(theme::bento_card(cs));

        container(card)
            .max_width(style::CONTENT_MAX_WIDTH)
            .padding([style::SPACE_3XL * 2.0, style::SPACE_LG])
            .center_x(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use folio_core::catalog::Catalog;
    use folio_core::models::Category;

    use super::*;

    fn loaded() -> Portfolio {
        let mut portfolio = Portfolio::default();
        portfolio.set_projects(Catalog::builtin().entries());
        portfolio
    }

    #[test]
    fn test_not_loaded_ignores_clicks() {
        let mut portfolio = Portfolio::default();
        assert_eq!(
            portfolio.update(Message::NodeClicked(NodeId::Root), Position::default()),
            Action::None
        );
    }

    #[test]
    fn test_leaf_click_opens_project_url() {
        let mut portfolio = loaded();
        let entries = Catalog::builtin();
        let first = &entries.entries()[0];
        let leaf = NodeId::Project {
            category: first.category,
            position: 0,
        };
        assert_eq!(
            portfolio.update(Message::NodeClicked(leaf), Position::default()),
            Action::OpenUrl(first.url.clone())
        );
    }

    #[test]
    fn test_hover_shows_and_exit_hides_preview() {
        let mut portfolio = loaded();
        let entries = Catalog::builtin();
        let (position, entry) = entries
            .entries()
            .iter()
            .enumerate()
            .find(|(_, e)| e.category == Category::WebDesign)
            .unwrap();
        let leaf = NodeId::Project {
            category: entry.category,
            position,
        };

        let action = portfolio.update(Message::LeafEntered(leaf), Position::new(100.0, 200.0));
        assert_eq!(action, Action::FetchThumbnail(entry.image_url.clone()));
        assert!(portfolio.preview().is_visible());
        assert_eq!(portfolio.preview().anchor(), Position::new(110.0, 190.0));

        portfolio.pointer_moved(Position::new(120.0, 220.0));
        assert_eq!(portfolio.preview().anchor(), Position::new(130.0, 210.0));

        portfolio.update(Message::LeafExited, Position::default());
        assert!(!portfolio.preview().is_visible());
    }

    #[test]
    fn test_scroll_hides_preview() {
        let mut portfolio = loaded();
        let leaf = NodeId::Project {
            category: Catalog::builtin().entries()[0].category,
            position: 0,
        };
        portfolio.update(Message::LeafEntered(leaf), Position::default());
        portfolio.on_scroll();
        assert!(!portfolio.preview().is_visible());
    }
}
