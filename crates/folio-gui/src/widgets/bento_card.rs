use iced::widget::{canvas, container, stack, text};
use iced::{Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::BorderBeam;

/// A bento grid cell with a border beam traced on top of it.
///
/// The card sizes itself to `content`; the beam canvas fills that size.
pub fn bento_card<'a, Message: 'a>(
    cs: &ColorScheme,
    content: impl Into<Element<'a, Message>>,
    beam: BorderBeam,
) -> Element<'a, Message> {
    let card = container(content)
        .padding(style::BENTO_PADDING)
        .width(Length::Fill)
        .style(theme::bento_card(cs));

    stack![
        card,
        canvas(beam).width(Length::Fill).height(Length::Fill),
    ]
    .width(Length::Fill)
    .into()
}

pub fn card_heading<'a, Message: 'a>(cs: &ColorScheme, label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(style::TEXT_XL)
        .font(style::FONT_HEADING)
        .color(cs.heading)
        .line_height(style::LINE_HEIGHT_TIGHT)
        .into()
}
