pub mod bento_card;
pub mod border_beam;
pub mod dot_pattern;
pub mod ornament;
pub mod preview;
pub mod remote_image;
pub mod ripple;
pub mod tree_view;

pub use bento_card::{bento_card, card_heading};
pub use border_beam::BorderBeam;
pub use dot_pattern::DotPattern;
pub use ornament::Spiral;
pub use preview::preview_overlay;
pub use remote_image::remote_image;
pub use ripple::Ripples;
pub use tree_view::{tree_view, TreeEvents};

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// The page scroller: vertical, thin overlay rail.
pub fn page_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::page_scrollbar(cs))
}
