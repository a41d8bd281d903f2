//! Light/dark preference shared by the whole page.
//!
//! [`ThemeStore`] is the one place the preference lives. Views read
//! [`ThemeStore::current`] when they draw; anything that needs to react to a
//! change asks for a receiver with [`ThemeStore::subscribe`].

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use crate::config::{AppearanceConfig, ThemeMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preference applied when the page starts.
///
/// `system` is resolved through `detect_system`. With `force_light_on_start`
/// the result is then replaced by light, logging when that overrides dark.
pub fn start_preference(
    appearance: &AppearanceConfig,
    detect_system: impl FnOnce() -> ThemePreference,
) -> ThemePreference {
    let configured = match appearance.mode {
        ThemeMode::Light => ThemePreference::Light,
        ThemeMode::Dark => ThemePreference::Dark,
        ThemeMode::System => detect_system(),
    };

    if appearance.force_light_on_start {
        if configured != ThemePreference::Light {
            tracing::info!(
                mode = ?appearance.mode,
                "Starting in light mode, overriding configured appearance"
            );
        }
        return ThemePreference::Light;
    }
    configured
}

/// Holder of the current preference.
///
/// Cloning shares the same underlying value. `toggle` is the only way to
/// change it.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    tx: Arc<watch::Sender<ThemePreference>>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemePreference::Light)
    }
}

impl ThemeStore {
    pub fn new(initial: ThemePreference) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> ThemePreference {
        *self.tx.borrow()
    }

    /// Flip the preference and return the new value.
    pub fn toggle(&self) -> ThemePreference {
        self.tx.send_modify(|pref| *pref = pref.toggled());
        let now = self.current();
        tracing::debug!(theme = %now, "Theme toggled");
        now
    }

    /// A receiver that observes every later toggle.
    pub fn subscribe(&self) -> watch::Receiver<ThemePreference> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appearance(mode: ThemeMode, force: bool) -> AppearanceConfig {
        AppearanceConfig {
            mode,
            force_light_on_start: force,
        }
    }

    #[test]
    fn test_double_toggle_restores() {
        let store = ThemeStore::default();
        let start = store.current();
        store.toggle();
        store.toggle();
        assert_eq!(store.current(), start);
    }

    #[test]
    fn test_read_after_toggle_sees_new_value() {
        let store = ThemeStore::new(ThemePreference::Light);
        assert_eq!(store.toggle(), ThemePreference::Dark);
        assert_eq!(store.current(), ThemePreference::Dark);
        assert!(store.current().is_dark());
    }

    #[test]
    fn test_clones_share_state() {
        let store = ThemeStore::default();
        let other = store.clone();
        other.toggle();
        assert_eq!(store.current(), ThemePreference::Dark);
    }

    #[tokio::test]
    async fn test_subscribers_observe_toggle() {
        let store = ThemeStore::default();
        let mut rx = store.subscribe();
        store.toggle();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), ThemePreference::Dark);
    }

    #[test]
    fn test_forced_light_overrides_saved_dark() {
        let pref = start_preference(&appearance(ThemeMode::Dark, true), || {
            ThemePreference::Dark
        });
        assert_eq!(pref, ThemePreference::Light);
    }

    #[test]
    fn test_forced_light_still_consults_system() {
        let queried = std::cell::Cell::new(false);
        let pref = start_preference(&appearance(ThemeMode::System, true), || {
            queried.set(true);
            ThemePreference::Dark
        });
        assert!(queried.get());
        assert_eq!(pref, ThemePreference::Light);
    }

    #[test]
    fn test_unforced_modes() {
        assert_eq!(
            start_preference(&appearance(ThemeMode::Dark, false), || ThemePreference::Light),
            ThemePreference::Dark
        );
        assert_eq!(
            start_preference(&appearance(ThemeMode::System, false), || ThemePreference::Dark),
            ThemePreference::Dark
        );
        assert_eq!(
            start_preference(&appearance(ThemeMode::Light, false), || ThemePreference::Dark),
            ThemePreference::Light
        );
    }
}
