//! "Knowledge" section: the bento grid about the owner.

use std::time::Duration;

use iced::widget::{button, canvas, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use folio_core::content;
use folio_core::motion::beam_progress;
use folio_core::viewport::ViewportMetrics;

use crate::section::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::thumbnail_cache::ThumbnailCache;
use crate::widgets::{self, BorderBeam, Spiral};

/// Width from which the grid uses two columns.
const WIDE_BREAKPOINT: f32 = 1024.0;

/// Height reserved for the grid in each layout. The section takes this or
/// a full viewport, whichever is taller.
const BENTO_HEIGHT_WIDE: f32 = 1500.0;
const BENTO_HEIGHT_NARROW: f32 = 3100.0;

/// Beam cycle of each card, in seconds.
const BEAM_INTRO: u64 = 19;
const BEAM_PROFILE: u64 = 20;
const BEAM_ABOUT: u64 = 18;
const BEAM_EXPERIENCE: u64 = 19;
const BEAM_LANGUAGES: u64 = 20;
const BEAM_TOOLS: u64 = 21;
const BEAM_ORNAMENT: u64 = 22;
const BEAM_EDUCATION: u64 = 23;

pub fn bento_height(viewport: ViewportMetrics) -> f32 {
    if viewport.width() >= WIDE_BREAKPOINT {
        BENTO_HEIGHT_WIDE
    } else {
        BENTO_HEIGHT_NARROW
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenLink(String),
    CopyEmail,
}

#[derive(Debug, Default)]
pub struct About;

impl About {
    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::OpenLink(url) => Action::OpenUrl(url),
            Message::CopyEmail => Action::CopyToClipboard(content::CONTACT_EMAIL.to_string()),
        }
    }

    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        elapsed: Duration,
        viewport: ViewportMetrics,
        thumbnails: &'a ThumbnailCache,
        spiral: &'a Spiral,
    ) -> Element<'a, Message> {
        let beam = |secs: u64| BorderBeam {
            progress: beam_progress(elapsed, Duration::from_secs(secs)),
            from: cs.beam_from,
            to: cs.beam_to,
        };

        let intro = widgets::bento_card(cs, intro_card(cs), beam(BEAM_INTRO));
        let profile = widgets::bento_card(cs, profile_card(cs, thumbnails), beam(BEAM_PROFILE));
        let about = widgets::bento_card(cs, about_card(cs), beam(BEAM_ABOUT));
        let experience = widgets::bento_card(cs, experience_card(cs), beam(BEAM_EXPERIENCE));
        let languages = widgets::bento_card(cs, languages_card(cs), beam(BEAM_LANGUAGES));
        let tools = widgets::bento_card(cs, tools_card(cs), beam(BEAM_TOOLS));
        let ornament = widgets::bento_card(
            cs,
            container(
                canvas(spiral)
                    .width(Length::Fixed(style::ORNAMENT_SIZE))
                    .height(Length::Fixed(style::ORNAMENT_SIZE)),
            )
            .center_x(Length::Fill),
            beam(BEAM_ORNAMENT),
        );
        let education = widgets::bento_card(cs, education_card(cs), beam(BEAM_EDUCATION));

        let grid: Element<'a, Message> = if viewport.width() >= WIDE_BREAKPOINT {
            let left = column![intro, about, experience, languages]
                .spacing(style::BENTO_GAP)
                .width(Length::FillPortion(2));
            let right = column![profile, tools, ornament]
                .spacing(style::BENTO_GAP)
                .width(Length::FillPortion(1));
            column![
                row![left, right].spacing(style::BENTO_GAP),
                education,
            ]
            .spacing(style::BENTO_GAP)
            .into()
        } else {
            column![intro, profile, about, experience, languages, tools, ornament, education]
                .spacing(style::BENTO_GAP)
                .into()
        };

        container(grid)
            .max_width(style::CONTENT_MAX_WIDTH)
            .padding([style::SPACE_3XL * 2.0, style::SPACE_LG])
            .center_x(Length::Fill)
            .into()
    }
}

fn body_text<'a>(cs: &ColorScheme, copy: &'a str) -> Element<'a, Message> {
    text(copy)
        .size(style::TEXT_BASE)
        .color(cs.body)
        .line_height(style::LINE_HEIGHT_LOOSE)
        .into()
}

fn badge<'a>(cs: &ColorScheme, label: String) -> Element<'a, Message> {
    container(text(label).size(style::TEXT_XS))
        .padding([style::SPACE_XXS, style::SPACE_SM])
        .style(theme::badge(cs))
        .into()
}

fn intro_card<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    let socials: Vec<Element<'a, Message>> = content::SOCIAL_LINKS
        .iter()
        .map(|link| {
            button(text(link.kind.as_str()).size(style::TEXT_SM).font(style::FONT_MEDIUM))
                .on_press(Message::OpenLink(link.url.to_string()))
                .padding([style::SPACE_XS, 0.0])
                .style(theme::link_button(cs))
                .into()
        })
        .collect();

    let resume = button(
        row![
            lucide_icons::iced::icon_download().size(style::TEXT_SM),
            text("Resume").size(style::TEXT_SM),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center),
    )
    .on_press(Message::OpenLink(content::RESUME_URL.to_string()))
    .padding([style::SPACE_XS, style::SPACE_MD])
    .style(theme::chip_button(cs));

    column![
        text(content::INTRO_HEADING)
            .size(style::TEXT_2XL)
            .font(style::FONT_HEADING)
            .color(cs.heading)
            .line_height(style::LINE_HEIGHT_TIGHT),
        body_text(cs, content::INTRO_BODY),
        row(socials)
            .push(Space::new().width(Length::Fill))
            .push(resume)
            .spacing(style::SPACE_LG)
            .align_y(Alignment::Center),
    ]
    .spacing(style::SPACE_LG)
    .into()
}

fn profile_card<'a>(cs: &ColorScheme, thumbnails: &'a ThumbnailCache) -> Element<'a, Message> {
    let copy_email = button(
        row![
            lucide_icons::iced::icon_copy().size(style::TEXT_SM),
            text(content::CONTACT_EMAIL).size(style::TEXT_SM),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center),
    )
    .on_press(Message::CopyEmail)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .style(theme::chip_button(cs));

    column![
        widgets::remote_image(
            cs,
            thumbnails,
            content::PROFILE_IMAGE_URL,
            Length::Fill,
            style::PROFILE_IMAGE_HEIGHT,
        ),
        row![
            text(content::OWNER_NAME)
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .color(cs.heading),
            text(format!("@{}", content::OWNER_ALIAS))
                .size(style::TEXT_SM)
                .color(cs.muted),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
        copy_email,
    ]
    .spacing(style::SPACE_MD)
    .into()
}

fn about_card<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    column![
        widgets::card_heading(cs, "About me"),
        body_text(cs, content::ABOUT_BODY),
    ]
    .spacing(style::SPACE_MD)
    .into()
}

fn experience_card<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    let entries: Vec<Element<'a, Message>> = content::EXPERIENCE
        .iter()
        .map(|job| {
            row![
                text(job.period)
                    .size(style::TEXT_SM)
                    .color(cs.muted)
                    .width(Length::Fixed(110.0)),
                column![
                    text(job.role)
                        .size(style::TEXT_BASE)
                        .font(style::FONT_MEDIUM)
                        .color(cs.heading),
                    row![
                        text(job.company).size(style::TEXT_SM).color(cs.muted),
                        badge(cs, job.work_mode.badge()),
                    ]
                    .spacing(style::SPACE_SM)
                    .align_y(Alignment::Center),
                ]
                .spacing(style::SPACE_XXS),
            ]
            .spacing(style::SPACE_MD)
            .into()
        })
        .collect();

    column![widgets::card_heading(cs, "Experience"), column(entries).spacing(style::SPACE_LG)]
        .spacing(style::SPACE_LG)
        .into()
}

fn languages_card<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    let entries: Vec<Element<'a, Message>> = content::LANGUAGES
        .iter()
        .map(|lang| {
            column![
                row![
                    text(lang.language)
                        .size(style::TEXT_BASE)
                        .font(style::FONT_MEDIUM)
                        .color(cs.heading),
                    badge(cs, lang.level.to_string()),
                ]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
                text(lang.description).size(style::TEXT_SM).color(cs.muted),
            ]
            .spacing(style::SPACE_XXS)
            .into()
        })
        .collect();

    column![widgets::card_heading(cs, "Languages"), column(entries).spacing(style::SPACE_MD)]
        .spacing(style::SPACE_LG)
        .into()
}

fn tools_card<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    let chips: Vec<Element<'a, Message>> = content::TOOLS
        .iter()
        .map(|tool| {
            container(text(*tool).size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .style(theme::tool_chip(cs))
                .into()
        })
        .collect();

    let wrap = iced_aw::Wrap::with_elements(chips)
        .spacing(style::SPACE_SM)
        .line_spacing(style::SPACE_SM);

    column![widgets::card_heading(cs, "Tools"), wrap]
        .spacing(style::SPACE_LG)
        .into()
}

fn education_card<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    let entries: Vec<Element<'a, Message>> = content::EDUCATION
        .iter()
        .map(|course| {
            row![
                text(course.period)
                    .size(style::TEXT_SM)
                    .color(cs.muted)
                    .width(Length::Fixed(110.0)),
                column![
                    text(course.degree)
                        .size(style::TEXT_BASE)
                        .font(style::FONT_MEDIUM)
                        .color(cs.heading),
                    text(course.institution).size(style::TEXT_SM).color(cs.muted),
                ]
                .spacing(style::SPACE_XXS),
            ]
            .spacing(style::SPACE_MD)
            .into()
        })
        .collect();

    column![widgets::card_heading(cs, "Education"), column(entries).spacing(style::SPACE_LG)]
        .spacing(style::SPACE_LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_email_goes_to_clipboard() {
        let mut about = About;
        assert_eq!(
            about.update(Message::CopyEmail),
            Action::CopyToClipboard(content::CONTACT_EMAIL.to_string())
        );
    }

    #[test]
    fn test_narrow_grid_reserves_more_height() {
        let wide = bento_height(ViewportMetrics::new(1440.0, 900.0));
        let narrow = bento_height(ViewportMetrics::new(390.0, 844.0));
        assert!(narrow > wide);
    }
}
