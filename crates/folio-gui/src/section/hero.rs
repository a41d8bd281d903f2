use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use folio_core::content;
use folio_core::typewriter::HeroTypewriter;
use folio_core::viewport::ViewportMetrics;

use crate::style;
use crate::theme::ColorScheme;

/// Full-height greeting with the typed role line.
#[derive(Debug, Default)]
pub struct Hero {
    typewriter: HeroTypewriter,
}

impl Hero {
    pub fn tick(&mut self) {
        self.typewriter.step();
    }

    pub fn role(&self) -> &str {
        self.typewriter.text()
    }

    /// `scale` shrinks the copy as the page scrolls away; colours arrive
    /// already faded.
    pub fn view<'a, Message: 'a>(
        &'a self,
        cs: &ColorScheme,
        scale: f32,
        viewport: ViewportMetrics,
    ) -> Element<'a, Message> {
        let (name_size, role_size) = if viewport.is_mobile() {
            (style::TEXT_3XL * 1.6, style::TEXT_3XL)
        } else {
            (style::TEXT_HERO_NAME, style::TEXT_HERO_ROLE)
        };

        let greeting = row![
            text("Hi, Im ")
                .size(name_size * scale)
                .font(style::FONT_HEADING)
                .color(cs.heading),
            text(content::OWNER_NAME)
                .size(name_size * scale)
                .font(style::FONT_HEADING)
                .color(cs.accent),
        ]
        .align_y(Alignment::End);

        // Fixed height so the page does not jump while the line empties.
        let role = container(
            text(self.role())
                .size(role_size * scale)
                .font(style::FONT_HEADING)
                .color(cs.accent)
                .line_height(style::LINE_HEIGHT_TIGHT),
        )
        .height(Length::Fixed(role_size * scale * style::LINE_HEIGHT_TIGHT + 4.0));

        let blurb = container(
            text(content::HERO_BLURB)
                .size(style::TEXT_LG * scale)
                .color(cs.muted)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .center(),
        )
        .max_width(640.0);

        let scroll_hint = column![
            text("SCROLL").size(style::TEXT_XS).color(cs.accent),
            lucide_icons::iced::icon_chevrons_down()
                .size(style::TEXT_LG)
                .color(cs.accent),
        ]
        .spacing(style::SPACE_XS)
        .align_x(Alignment::Center);

        column![
            Space::new().height(Length::Fill),
            greeting,
            role,
            blurb,
            Space::new().height(Length::Fill),
            scroll_hint,
        ]
        .spacing(style::SPACE_LG)
        .padding(style::SPACE_2XL)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_types_second_phrase_first() {
        let mut hero = Hero::default();
        for _ in 0..3 {
            hero.tick();
        }
        assert_eq!(hero.role(), "G");
    }
}
