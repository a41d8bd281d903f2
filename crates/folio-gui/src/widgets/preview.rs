use iced::widget::{container, Space};
use iced::{Element, Length, Padding};

use folio_core::shell::PreviewTooltip;

use crate::style;
use crate::theme::{self, ColorScheme};
use crate::thumbnail_cache::ThumbnailCache;
use crate::widgets;

/// Hover preview of a portfolio leaf, drawn as a full-window overlay layer.
///
/// The card sits right of the pointer with its bottom edge at the anchor,
/// so it reads as floating above the cursor. Returns `None` while hidden.
pub fn preview_overlay<'a, Message: 'a>(
    cs: &ColorScheme,
    tooltip: &PreviewTooltip,
    thumbnails: &'a ThumbnailCache,
) -> Option<Element<'a, Message>> {
    let url = tooltip.image_url()?;
    let anchor = tooltip.anchor();

    let frame = container(widgets::remote_image(
        cs,
        thumbnails,
        url,
        Length::Fixed(style::PREVIEW_WIDTH),
        style::PREVIEW_HEIGHT,
    ))
    .padding(style::SPACE_XS)
    .style(theme::preview_frame(cs));

    let top = (anchor.y - style::PREVIEW_HEIGHT).max(0.0);
    let left = anchor.x.max(0.0);

    Some(
        container(iced::widget::column![frame, Space::new().height(Length::Fill)])
            .padding(Padding::new(0.0).top(top).left(left))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    )
}
