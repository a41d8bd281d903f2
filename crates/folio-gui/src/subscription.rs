use std::time::Duration;

use iced::keyboard::{self, key::Named, Key};
use iced::{mouse, window, Event, Subscription};

use folio_core::typewriter::HERO_TICK;

use crate::app::Message;

/// Every subscription the page needs.
///
/// `tagline_delay` changes with the tagline's phase; iced replaces the timer
/// whenever the duration differs. Frame ticks are only requested while
/// something on screen is moving.
pub fn subscriptions(tagline_delay: Duration, animating: bool) -> Subscription<Message> {
    let mut subs = vec![
        iced::time::every(HERO_TICK).map(|_| Message::HeroTick),
        iced::time::every(tagline_delay).map(|_| Message::TaglineTick),
        window_events(),
    ];
    if animating {
        subs.push(window::frames().map(Message::Frame));
    }
    Subscription::batch(subs)
}

/// Window resizes, pointer movement and the Escape key.
fn window_events() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::MenuClosed),
        _ => None,
    })
}
