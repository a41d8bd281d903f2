use iced::widget::{container, image};
use iced::{ContentFit, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};
use crate::thumbnail_cache::{ThumbnailCache, ThumbnailState};

/// An image from the thumbnail cache inside a rounded frame.
///
/// While the download is pending, or after it failed, the frame shows an
/// icon on the placeholder background instead.
pub fn remote_image<'a, Message: 'a>(
    cs: &ColorScheme,
    cache: &'a ThumbnailCache,
    url: &str,
    width: Length,
    height: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match cache.get(url) {
        Some(ThumbnailState::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .border_radius(style::RADIUS_MD)
            .into(),
        Some(ThumbnailState::Failed) => lucide_icons::iced::icon_image_off()
            .size(style::TEXT_2XL)
            .color(cs.subtle)
            .center()
            .into(),
        _ => lucide_icons::iced::icon_image()
            .size(style::TEXT_2XL)
            .color(cs.subtle)
            .center()
            .into(),
    };

    container(content)
        .width(width)
        .height(Length::Fixed(height))
        .center_y(Length::Fixed(height))
        .style(theme::image_placeholder(cs))
        .into()
}
