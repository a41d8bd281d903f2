//! Short-lived notices shown after link and clipboard actions.

use std::collections::VecDeque;
use std::time::Duration;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// How long a notice stays up unless clicked away.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Notices beyond this count push the oldest one out.
const MAX_VISIBLE: usize = 3;

const TOAST_WIDTH: f32 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Queue a notice and return the id its dismiss timer should report.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            kind,
        });
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
        id
    }

    /// Drop the notice with `id`. Unknown ids are ignored, since a timer may
    /// fire after the notice was already clicked away or pushed out.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Stack of pills in the bottom-right corner. Clicking one dismisses it.
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        cs: &ColorScheme,
        on_dismiss: fn(u64) -> Message,
    ) -> Element<'a, Message> {
        if self.is_empty() {
            return Space::new().width(0).height(0).into();
        }

        let pills: Vec<Element<'a, Message>> = self
            .toasts
            .iter()
            .map(|toast| {
                let (icon, tint) = match toast.kind {
                    ToastKind::Success => (lucide_icons::iced::icon_circle_check(), cs.accent),
                    ToastKind::Error => (lucide_icons::iced::icon_circle_x(), theme::DANGER),
                };
                button(
                    row![
                        icon.size(style::TEXT_BASE).color(tint),
                        text(toast.message.as_str())
                            .size(style::TEXT_SM)
                            .color(cs.heading),
                    ]
                    .spacing(style::SPACE_SM)
                    .align_y(Alignment::Center),
                )
                .on_press(on_dismiss(toast.id))
                .padding([style::SPACE_SM, style::SPACE_MD])
                .width(Length::Fill)
                .style(theme::toast_pill(cs))
                .into()
            })
            .collect();

        container(
            column(pills)
                .spacing(style::SPACE_XS)
                .width(Length::Fixed(TOAST_WIDTH)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(style::SPACE_XL)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push("E-mail copied", ToastKind::Success);
        let b = queue.push("Could not open link", ToastKind::Error);
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one", ToastKind::Success);
        for label in ["two", "three", "four"] {
            queue.push(label, ToastKind::Success);
        }
        assert_eq!(queue.len(), MAX_VISIBLE);
        assert!(queue.toasts.iter().all(|t| t.id != first));
        assert_eq!(queue.toasts.front().map(|t| t.message.as_str()), Some("two"));
    }

    #[test]
    fn test_late_timer_for_gone_toast_is_harmless() {
        let mut queue = ToastQueue::default();
        let id = queue.push("E-mail copied", ToastKind::Success);
        queue.dismiss(id);
        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
