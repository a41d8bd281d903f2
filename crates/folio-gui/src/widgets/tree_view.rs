use iced::widget::{button, column, mouse_area, row, text, Space};
use iced::{Alignment, Element, Length};

use folio_core::expansion::ExpansionState;
use folio_core::models::LeafIcon;
use folio_core::tree::{CategoryTree, NodeId, NodeKind, TreeNode};

use crate::style;
use crate::theme::{self, ColorScheme};

/// Callbacks a tree row can emit.
pub struct TreeEvents<Message> {
    pub on_click: fn(NodeId) -> Message,
    pub on_enter: fn(NodeId) -> Message,
    pub on_exit: Message,
}

/// Collapsible portfolio tree.
///
/// Only nodes whose ancestors are all expanded produce rows. Leaves also
/// report pointer enter/exit so the caller can drive the hover preview.
pub fn tree_view<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    tree: &'a CategoryTree,
    expansion: &ExpansionState,
    events: &TreeEvents<Message>,
) -> Element<'a, Message> {
    let mut rows = Vec::new();
    push_node(&mut rows, cs, &tree.root, 0, expansion, events);
    column(rows).spacing(style::SPACE_XXS).width(Length::Fill).into()
}

fn push_node<'a, Message: Clone + 'a>(
    rows: &mut Vec<Element<'a, Message>>,
    cs: &ColorScheme,
    node: &'a TreeNode,
    depth: usize,
    expansion: &ExpansionState,
    events: &TreeEvents<Message>,
) {
    let expanded = expansion.is_expanded(node.id);
    rows.push(node_row(cs, node, depth, expanded, events));

    if node.has_children() && expanded {
        for child in &node.children {
            push_node(rows, cs, child, depth + 1, expansion, events);
        }
    }
}

fn node_row<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    node: &'a TreeNode,
    depth: usize,
    expanded: bool,
    events: &TreeEvents<Message>,
) -> Element<'a, Message> {
    let chevron: Element<'a, Message> = if !node.has_children() {
        Space::new().width(style::TREE_ICON_SIZE).into()
    } else if expanded {
        lucide_icons::iced::icon_chevron_down()
            .size(style::TEXT_SM)
            .color(cs.muted)
            .into()
    } else {
        lucide_icons::iced::icon_chevron_right()
            .size(style::TEXT_SM)
            .color(cs.muted)
            .into()
    };

    let icon = match (&node.kind, expanded) {
        (NodeKind::Project(entry), _) => leaf_icon(entry.category.leaf_icon()),
        (_, true) => lucide_icons::iced::icon_folder_open(),
        (_, false) => lucide_icons::iced::icon_folder(),
    };

    let (size, font) = match node.kind {
        NodeKind::Root => (style::TEXT_LG, style::FONT_HEADING),
        NodeKind::Category(_) => (style::TEXT_BASE, style::FONT_MEDIUM),
        NodeKind::Project(_) => (style::TEXT_SM, iced::Font::default()),
    };

    let content = row![
        Space::new().width(style::TREE_INDENT * depth as f32),
        chevron,
        icon.size(style::TREE_ICON_SIZE).color(cs.tree_icon),
        text(node.label.as_str())
            .size(size)
            .font(font)
            .line_height(style::LINE_HEIGHT_NORMAL),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center);

    let row_button = button(content)
        .on_press((events.on_click)(node.id))
        .padding([style::SPACE_XS, style::SPACE_SM])
        .width(Length::Fill)
        .style(theme::tree_row(cs));

    match node.kind {
        NodeKind::Project(_) => mouse_area(row_button)
            .on_enter((events.on_enter)(node.id))
            .on_exit(events.on_exit.clone())
            .interaction(iced::mouse::Interaction::Pointer)
            .into(),
        _ => row_button.into(),
    }
}

fn leaf_icon(icon: LeafIcon) -> iced::widget::Text<'static> {
    use lucide_icons::iced as icons;

    match icon {
        LeafIcon::Box => icons::icon_box(),
        LeafIcon::Globe => icons::icon_globe(),
        LeafIcon::Users => icons::icon_users(),
        LeafIcon::Layers => icons::icon_layers(),
    }
}
