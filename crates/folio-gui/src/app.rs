use std::time::Duration;

use iced::time::Instant;
use iced::widget::{
    button, canvas, column, container, mouse_area, opaque, row, scrollable, text, Space, Stack,
};
use iced::{Alignment, Element, Length, Padding, Point, Size, Subscription, Task, Theme};
use tokio::sync::watch;

use folio_core::catalog::{self, Catalog};
use folio_core::config::AppConfig;
use folio_core::content;
use folio_core::models::ProjectEntry;
use folio_core::motion::{hero_fade, NavBarMotion, SmoothScroll, Tween};
use folio_core::navigation::Section;
use folio_core::shell::{PageShell, Position};
use folio_core::theme::{start_preference, ThemePreference, ThemeStore};
use folio_core::viewport::{SectionLayout, ViewportMetrics};

use crate::section::{about, contact, hero, portfolio, Action};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme, FolioTheme};
use crate::thumbnail_cache::{self, ThumbnailCache};
use crate::toast::{ToastKind, ToastQueue, TOAST_LIFETIME};
use crate::widgets::{self, DotPattern, Spiral};

/// Fade-in/out of a section entering or leaving the viewport.
const SECTION_FADE: Duration = Duration::from_millis(400);
/// Frame gaps longer than this count as a pause, not as elapsed time.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

fn page_scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("page")
}

/// Application state: one scrolling page with four sections and the
/// chrome floating above it.
pub struct Folio {
    catalog: Catalog,
    // Theme
    palette: FolioTheme,
    theme: ThemeStore,
    theme_rx: watch::Receiver<ThemePreference>,
    // Scroll & layout
    viewport: ViewportMetrics,
    scroll_y: f32,
    shell: PageShell,
    nav_motion: NavBarMotion,
    smooth_scroll: Option<SmoothScroll>,
    fades: [Tween; 4],
    // Animation clock
    last_frame: Option<Instant>,
    decor_elapsed: Duration,
    spiral: Spiral,
    dots: canvas::Cache,
    // Sections
    hero: hero::Hero,
    about: about::About,
    portfolio: portfolio::Portfolio,
    contact: contact::Contact,
    // Remote images
    thumbnails: ThumbnailCache,
    cursor: Position,
    // Notices
    toasts: ToastQueue,
}

#[derive(Debug, Clone)]
pub enum Message {
    ProjectsLoaded(Vec<ProjectEntry>),
    Scrolled(scrollable::Viewport),
    Resized(Size),
    CursorMoved(Point),
    Frame(Instant),
    HeroTick,
    TaglineTick,
    NavigateTo(Section),
    ToggleTheme,
    MenuOpened,
    MenuClosed,
    MenuThemeToggled,
    About(about::Message),
    Portfolio(portfolio::Message),
    Contact(contact::Message),
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, String>,
    },
    ToastDismissed(u64),
}

impl Folio {
    pub fn new(config: &AppConfig, catalog: Catalog) -> (Self, Task<Message>) {
        let pref = start_preference(&config.appearance, theme::detect_system_preference);
        let palette = FolioTheme::embedded();
        let store = ThemeStore::new(pref);
        let theme_rx = store.subscribe();
        let viewport = ViewportMetrics::new(config.window.width, config.window.height);
        tracing::info!(theme = %pref, projects = catalog.len(), "Starting folio");

        let mut app = Self {
            spiral: Spiral::new(palette.colors(pref).spiral),
            catalog,
            palette,
            theme: store,
            theme_rx,
            viewport,
            scroll_y: 0.0,
            shell: PageShell::default(),
            nav_motion: NavBarMotion::default(),
            smooth_scroll: None,
            fades: [Tween::settled(0.0, SECTION_FADE); 4],
            last_frame: None,
            decor_elapsed: Duration::ZERO,
            dots: canvas::Cache::default(),
            hero: hero::Hero::default(),
            about: about::About,
            portfolio: portfolio::Portfolio::default(),
            contact: contact::Contact::default(),
            thumbnails: ThumbnailCache::default(),
            cursor: Position::default(),
            toasts: ToastQueue::default(),
        };

        // First measurement, as if the page had just mounted at the top.
        let layout = app.layout();
        app.shell
            .nav
            .on_scroll(0.0, viewport.height(), &layout.anchors());
        for &section in Section::ALL {
            let shown = if layout.is_in_view(section, 0.0) { 1.0 } else { 0.0 };
            app.fades[section as usize].snap(shown);
        }

        let load = Task::perform(
            catalog::fetch_projects(app.catalog.clone()),
            Message::ProjectsLoaded,
        );
        let profile = app.request_thumbnail(content::PROFILE_IMAGE_URL.to_string());
        (app, Task::batch([load, profile]))
    }

    pub fn title(&self) -> String {
        format!("{} · Portfolio", content::OWNER_NAME)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProjectsLoaded(entries) => {
                self.portfolio.set_projects(&entries);
                Task::none()
            }
            Message::Scrolled(viewport) => {
                self.on_scroll(viewport.absolute_offset().y);
                Task::none()
            }
            Message::Resized(size) => {
                if self.viewport.resize(size.width, size.height) {
                    // Section heights are in vh, so every anchor moved.
                    self.on_scroll(self.scroll_y);
                }
                Task::none()
            }
            Message::CursorMoved(point) => {
                self.cursor = Position::new(point.x, point.y);
                self.portfolio.pointer_moved(self.cursor);
                Task::none()
            }
            Message::Frame(now) => self.on_frame(now),
            Message::HeroTick => {
                self.hero.tick();
                Task::none()
            }
            Message::TaglineTick => {
                self.contact.tick();
                Task::none()
            }
            Message::NavigateTo(section) => {
                let target = self.shell.navigate(section);
                let layout = self.layout();
                let to = layout.top(target).min(layout.max_scroll());
                self.smooth_scroll = Some(SmoothScroll::new(self.scroll_y, to));
                self.portfolio.on_scroll();
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme.toggle();
                self.sync_theme();
                Task::none()
            }
            Message::MenuOpened => {
                self.shell.menu.open();
                Task::none()
            }
            Message::MenuClosed => {
                self.shell.menu.close();
                Task::none()
            }
            Message::MenuThemeToggled => {
                self.shell.toggle_theme_from_menu(&self.theme);
                self.sync_theme();
                Task::none()
            }
            Message::About(msg) => {
                let action = self.about.update(msg);
                self.handle_action(action)
            }
            Message::Portfolio(msg) => {
                let action = self.portfolio.update(msg, self.cursor);
                self.handle_action(action)
            }
            Message::Contact(msg) => {
                let action = self.contact.update(msg);
                self.handle_action(action)
            }
            Message::ThumbnailLoaded { url, result } => {
                self.thumbnails.finish(url, result);
                Task::none()
            }
            Message::ToastDismissed(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let pref = self.theme.current();
        let cs = self.palette.colors(pref);
        let layout = self.layout();

        let fade = hero_fade(layout.scroll_progress(self.scroll_y));
        let hero = self
            .hero
            .view(
                &cs.faded(self.fade(Section::Home) * fade.opacity),
                fade.scale,
                self.viewport,
            );
        let about = self
            .about
            .view(
                &cs.faded(self.fade(Section::Knowledge)),
                self.decor_elapsed,
                self.viewport,
                &self.thumbnails,
                &self.spiral,
            )
            .map(Message::About);
        let portfolio = self
            .portfolio
            .view(&cs.faded(self.fade(Section::Portfolio)))
            .map(Message::Portfolio);
        let contact = self
            .contact
            .view(
                &cs.faded(self.fade(Section::Contact)),
                self.decor_elapsed,
                self.viewport,
            )
            .map(Message::Contact);

        let sections = column![
            section_frame(hero, layout.height(Section::Home)),
            section_frame(about, layout.height(Section::Knowledge)),
            section_frame(portfolio, layout.height(Section::Portfolio)),
            section_frame(contact, layout.height(Section::Contact)),
        ]
        .width(Length::Fill);

        let page = widgets::page_scrollable(sections, cs)
            .id(page_scroll_id())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let background = container(
            canvas(DotPattern {
                cache: &self.dots,
                dark: pref.is_dark(),
                color: cs.dots,
            })
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .style(theme::page_background(cs))
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers: Vec<Element<'_, Message>> =
            vec![background.into(), page.into(), self.nav_bar(cs, pref)];
        if let Some(preview) = widgets::preview_overlay(cs, self.portfolio.preview(), &self.thumbnails)
        {
            layers.push(preview);
        }
        if self.shell.menu.is_open() && self.viewport.is_mobile() {
            layers.push(self.mobile_menu(cs, pref));
        }
        layers.push(self.toasts.view(cs, Message::ToastDismissed));

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions(self.contact.tick_delay(), self.is_animating())
    }

    pub fn theme(&self) -> Theme {
        self.palette.iced_theme(self.theme.current())
    }

    fn layout(&self) -> SectionLayout {
        SectionLayout::new(self.viewport, about::bento_height(self.viewport))
    }

    fn fade(&self, section: Section) -> f32 {
        self.fades[section as usize].value()
    }

    /// Whether anything on screen needs per-frame updates.
    fn is_animating(&self) -> bool {
        let layout = self.layout();
        self.nav_motion.is_animating()
            || self.smooth_scroll.is_some()
            || self.fades.iter().any(|f| !f.is_finished())
            || layout.is_in_view(Section::Knowledge, self.scroll_y)
            || layout.is_in_view(Section::Contact, self.scroll_y)
    }

    /// React to a new scroll offset, from the user or the smooth scroll.
    fn on_scroll(&mut self, y: f32) {
        self.scroll_y = y;
        let layout = self.layout();
        self.shell
            .nav
            .on_scroll(y, self.viewport.height(), &layout.anchors());
        self.nav_motion
            .set_scrolled(self.shell.nav.state().scrolled_past_threshold);
        self.portfolio.on_scroll();

        for &section in Section::ALL {
            let target = if layout.is_in_view(section, y) { 1.0 } else { 0.0 };
            self.fades[section as usize].retarget(target);
        }
    }

    fn on_frame(&mut self, now: Instant) -> Task<Message> {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).min(MAX_FRAME_STEP))
            .unwrap_or_default();
        self.last_frame = Some(now);

        self.nav_motion.advance(dt);
        for fade in &mut self.fades {
            fade.advance(dt);
        }

        let layout = self.layout();
        let knowledge = layout.is_in_view(Section::Knowledge, self.scroll_y);
        if knowledge || layout.is_in_view(Section::Contact, self.scroll_y) {
            self.decor_elapsed += dt;
        }
        if knowledge {
            self.spiral.spin();
        }

        let step = self
            .smooth_scroll
            .as_mut()
            .map(|scroll| (scroll.step(dt), scroll.is_finished()));
        if let Some((y, finished)) = step {
            if finished {
                self.smooth_scroll = None;
            }
            self.on_scroll(y);
            return iced::widget::operation::scroll_to(
                page_scroll_id(),
                scrollable::AbsoluteOffset { x: 0.0, y },
            );
        }

        if !self.is_animating() {
            // The frame subscription stops now; the next one starts fresh.
            self.last_frame = None;
        }
        Task::none()
    }

    /// Pick up a theme change published through the store.
    fn sync_theme(&mut self) {
        if !self.theme_rx.has_changed().unwrap_or(false) {
            return;
        }
        let pref = *self.theme_rx.borrow_and_update();
        self.spiral.set_color(self.palette.colors(pref).spiral);
        self.dots.clear();
        tracing::debug!(theme = %pref, "Theme changed");
    }

    /// Interpret an Action returned by a section.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::OpenUrl(url) => {
                if let Err(e) = open::that(&url) {
                    tracing::warn!(%url, error = %e, "Failed to open link");
                    return self.show_toast(format!("Could not open {url}"), ToastKind::Error);
                }
                Task::none()
            }
            Action::CopyToClipboard(value) => {
                match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(value)) {
                    Ok(()) => self.show_toast("E-mail copied".into(), ToastKind::Success),
                    Err(e) => {
                        tracing::warn!(error = %e, "Clipboard unavailable");
                        self.show_toast("Could not copy the e-mail".into(), ToastKind::Error)
                    }
                }
            }
            Action::FetchThumbnail(url) => self.request_thumbnail(url),
        }
    }

    /// Download an image unless it is cached or already on its way.
    fn request_thumbnail(&mut self, url: String) -> Task<Message> {
        if !self.thumbnails.begin(&url) {
            return Task::none();
        }
        Task::perform(thumbnail_cache::fetch_thumbnail(url.clone()), move |result| {
            Message::ThumbnailLoaded { url, result }
        })
    }

    fn show_toast(&mut self, message: String, kind: ToastKind) -> Task<Message> {
        let id = self.toasts.push(message, kind);
        Task::perform(tokio::time::sleep(TOAST_LIFETIME), move |_| {
            Message::ToastDismissed(id)
        })
    }

    // ── Chrome ──────────────────────────────────────────────────────

    fn nav_bar<'a>(&'a self, cs: &ColorScheme, pref: ThemePreference) -> Element<'a, Message> {
        use lucide_icons::iced as icons;

        let active = self.shell.nav.active_section();
        let mobile = self.viewport.is_mobile();

        let nav_item = |icon: iced::widget::Text<'static>, section: Section| {
            let mut content = row![icon.size(style::NAV_ICON_SIZE)]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center);
            if !mobile {
                content = content.push(text(section.nav_label()).size(style::TEXT_SM));
            }
            button(content)
                .padding(style::NAV_BUTTON_PADDING)
                .on_press(Message::NavigateTo(section))
                .style(theme::nav_item(active == section, cs))
        };

        let mut bar = row![].spacing(style::SPACE_XS).align_y(Alignment::Center);
        if !mobile {
            bar = bar
                .push(nav_item(icons::icon_house(), Section::Home))
                .push(nav_item(icons::icon_book_open(), Section::Knowledge))
                .push(nav_item(icons::icon_folder_open(), Section::Portfolio));
        }
        bar = bar.push(nav_item(icons::icon_mail(), Section::Contact));
        bar = bar.push(
            button(theme_icon(pref).size(style::NAV_ICON_SIZE))
                .padding(style::NAV_BUTTON_PADDING)
                .on_press(Message::ToggleTheme)
                .style(theme::icon_button(cs)),
        );
        if mobile {
            bar = bar.push(
                button(icons::icon_menu().size(style::NAV_ICON_SIZE))
                    .padding(style::NAV_BUTTON_PADDING)
                    .on_press(Message::MenuOpened)
                    .style(theme::icon_button(cs)),
            );
        }

        container(
            container(bar)
                .padding(style::SPACE_XS)
                .style(theme::nav_bar(cs)),
        )
        .center_x(Length::Fill)
        .padding(Padding::new(0.0).top(self.nav_motion.top_px(self.viewport.height())))
        .into()
    }

    fn mobile_menu<'a>(&'a self, cs: &ColorScheme, pref: ThemePreference) -> Element<'a, Message> {
        use lucide_icons::iced as icons;

        let active = self.shell.nav.active_section();

        let header = row![
            text("Menu")
                .size(style::TEXT_2XL)
                .font(style::FONT_HEADING)
                .width(Length::Fill),
            button(icons::icon_x().size(style::NAV_ICON_SIZE))
                .padding(style::SPACE_SM)
                .on_press(Message::MenuClosed)
                .style(theme::icon_button(cs)),
        ]
        .align_y(Alignment::Center);

        let mut entries = column![].spacing(style::SPACE_XS);
        for &section in Section::ALL {
            entries = entries.push(
                button(text(section.nav_label()).size(style::TEXT_LG))
                    .width(Length::Fill)
                    .padding([style::SPACE_MD, style::SPACE_LG])
                    .on_press(Message::NavigateTo(section))
                    .style(theme::nav_item(active == section, cs)),
            );
        }

        let toggle_label = if pref.is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        };
        let toggle = button(
            row![
                theme_icon(pref).size(style::NAV_ICON_SIZE),
                text(toggle_label).size(style::TEXT_BASE),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_MD, style::SPACE_LG])
        .on_press(Message::MenuThemeToggled)
        .style(theme::icon_button(cs));

        let panel = container(
            column![header, entries, Space::new().height(Length::Fill), toggle]
                .spacing(style::SPACE_XL),
        )
        .padding(style::SPACE_XL)
        .width(Length::Fixed(style::MOBILE_MENU_WIDTH.min(self.viewport.width())))
        .height(Length::Fill)
        .style(theme::menu_panel(cs));

        let backdrop = mouse_area(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(Message::MenuClosed);

        opaque(
            container(row![backdrop, panel])
                .width(Length::Fill)
                .height(Length::Fill)
                .style(theme::scrim(cs)),
        )
    }
}

/// Moon while dark, sun while light.
fn theme_icon(pref: ThemePreference) -> iced::widget::Text<'static> {
    if pref.is_dark() {
        lucide_icons::iced::icon_moon()
    } else {
        lucide_icons::iced::icon_sun()
    }
}

/// Give a section its computed height so anchors match the drawn layout.
fn section_frame<'a>(content: Element<'a, Message>, height: f32) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}
