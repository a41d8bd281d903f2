use std::time::Duration;

use iced::widget::{button, canvas, column, container, row, stack, text};
use iced::{Alignment, Color, Element, Length};

use folio_core::content;
use folio_core::typewriter::TaglineTypewriter;
use folio_core::viewport::ViewportMetrics;

use crate::section::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::Ripples;

/// Opacity of tagline words other than the one being typed.
const IDLE_WORD_OPACITY: f32 = 0.4;

#[derive(Debug, Clone)]
pub enum Message {
    Chat,
    CopyEmail,
}

/// Closing call-to-action over the ripple background.
#[derive(Debug)]
pub struct Contact {
    tagline: TaglineTypewriter,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            tagline: TaglineTypewriter::new(content::TAGLINE_WORDS),
        }
    }
}

impl Contact {
    pub fn tick(&mut self) {
        self.tagline.step();
    }

    /// Wait before the next tagline tick.
    pub fn tick_delay(&self) -> Duration {
        self.tagline.delay()
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Chat => Action::OpenUrl(content::contact_mailto()),
            Message::CopyEmail => Action::CopyToClipboard(content::CONTACT_EMAIL.to_string()),
        }
    }

    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        elapsed: Duration,
        viewport: ViewportMetrics,
    ) -> Element<'a, Message> {
        let words: Vec<Element<'a, Message>> = self
            .tagline
            .words()
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == self.tagline.word_index() {
                    text(format!("{}|", self.tagline.current_text()))
                        .size(style::TEXT_LG)
                        .color(cs.tagline)
                        .into()
                } else {
                    text(word.as_str())
                        .size(style::TEXT_LG)
                        .color(Color {
                            a: cs.tagline.a * IDLE_WORD_OPACITY,
                            ..cs.tagline
                        })
                        .into()
                }
            })
            .collect();

        let cta = button(
            container(text(content::CONTACT_CTA).size(style::TEXT_SM).font(style::FONT_MEDIUM))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .on_press(Message::Chat)
        .width(Length::Fixed(style::CTA_WIDTH))
        .height(Length::Fixed(style::CTA_HEIGHT))
        .style(theme::cta_button(cs));

        let copy = button(
            row![
                lucide_icons::iced::icon_copy().size(style::TEXT_SM),
                text(content::CONTACT_EMAIL).size(style::TEXT_SM),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .on_press(Message::CopyEmail)
        .padding([style::SPACE_SM, style::SPACE_MD])
        .style(theme::link_button(cs));

        let heading_size = if viewport.is_mobile() {
            style::TEXT_2XL
        } else {
            style::TEXT_3XL * 1.6
        };

        let panel = container(
            column![
                row(words).spacing(style::SPACE_SM),
                text(content::CONTACT_HEADING)
                    .size(heading_size)
                    .font(style::FONT_HEADING)
                    .line_height(style::LINE_HEIGHT_TIGHT)
                    .center(),
                row![cta, copy]
                    .spacing(style::SPACE_LG)
                    .align_y(Alignment::Center),
            ]
            .spacing(style::SPACE_XL)
            .align_x(Alignment::Center),
        )
        .padding(style::SPACE_3XL)
        .max_width(style::CONTACT_MAX_WIDTH)
        .style(theme::contact_panel(cs));

        let ripples = canvas(Ripples::new(elapsed, cs.ripple, viewport.width()))
            .width(Length::Fill)
            .height(Length::Fill);

        stack![
            ripples,
            container(panel)
                .padding(style::SPACE_LG)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_opens_mailto() {
        let mut contact = Contact::default();
        assert_eq!(
            contact.update(Message::Chat),
            Action::OpenUrl(format!("mailto:{}", content::CONTACT_EMAIL))
        );
    }

    #[test]
    fn test_tagline_starts_typing_after_first_tick() {
        let mut contact = Contact::default();
        contact.tick();
        assert_eq!(contact.tick_delay(), Duration::from_millis(60));
    }
}
