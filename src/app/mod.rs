// SPDX-License-Identifier: MPL-2.0
//! Demo application showing toasts in an iced window.
//!
//! The `App` owns the toast manager built from the loaded configuration and
//! CLI flags. The manager is an ordinary field: components that need to
//! show toasts receive it through `update`, nothing reaches for a global.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::TICK_INTERVAL;

use crate::config::{self, ToastConfig};
use crate::notifications::{Manager, Settings, ToastOptions};
use crate::ui::overlay::OverlaySurface;
use iced::{Element, Subscription, Task};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    toasts: Manager<OverlaySurface>,
    /// Number of toasts whose `on_close` has run.
    closed: Rc<Cell<u32>>,
    /// Running counter used to number demo messages.
    shown: u32,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

/// Merges CLI flags over the file configuration.
fn merge_flags(mut config: ToastConfig, flags: &Flags) -> ToastConfig {
    if let Some(position) = flags.position {
        config.default_position = Some(position);
    }
    if let Some(max) = flags.max_toasts {
        config.max_toasts = Some(max);
    }
    if let Some(ms) = flags.duration_ms {
        config.default_duration_ms = Some(ms);
    }
    config
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        if let Some(warning) = &warning {
            tracing::warn!("{warning}; using default toast settings");
        }

        let settings = Settings::from(&merge_flags(config.toasts, &flags));
        tracing::info!(
            max_toasts = settings.max_toasts.value(),
            position = %settings.default_position,
            duration = ?settings.default_duration,
            "starting toast demo"
        );

        let mut app = App {
            toasts: Manager::new(settings, |spec| Some(OverlaySurface::new(*spec))),
            closed: Rc::new(Cell::new(0)),
            shown: 0,
        };
        if let Some(warning) = warning {
            app.toasts.warning(warning, ToastOptions::new().duration(Duration::ZERO));
        }
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => "Iced Toast".to_string(),
            n => format!("Iced Toast ({n})"),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toasts.has_pending_work())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => {
                self.shown += 1;
                let text = format!("{} #{}", kind.as_str(), self.shown);
                let options = self.demo_options(self.shown).kind(kind);
                self.toasts.show(text, options);
            }
            Message::ShowSticky => {
                self.shown += 1;
                let options = self.demo_options(self.shown).duration(Duration::ZERO);
                self.toasts
                    .info(format!("sticky #{}", self.shown), options);
            }
            Message::Clear => self.toasts.clear(),
            Message::Toast(message) => self.toasts.handle_message(&message),
            Message::Tick(_) => self.toasts.tick(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            closed: self.closed.get(),
        })
    }

    fn demo_options(&self, number: u32) -> ToastOptions {
        let closed = Rc::clone(&self.closed);
        ToastOptions::new()
            .on_click(move || tracing::info!(number, "toast clicked"))
            .on_close(move || closed.set(closed.get() + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Position, ToastKind, ToastMessage, EXIT_TRANSITION};
    use tempfile::tempdir;

    fn app_with(flags: Flags) -> App {
        App::new(flags).0
    }

    fn isolated_flags() -> (tempfile::TempDir, Flags) {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        (dir, flags)
    }

    #[test]
    fn flags_override_file_configuration() {
        let flags = Flags {
            position: Some(Position::BottomLeft),
            max_toasts: Some(2),
            duration_ms: Some(0),
            ..Flags::default()
        };
        let merged = merge_flags(ToastConfig::default(), &flags);

        assert_eq!(merged.default_position, Some(Position::BottomLeft));
        assert_eq!(merged.max_toasts, Some(2));
        assert_eq!(merged.default_duration_ms, Some(0));
        assert_eq!(merged.spacing, ToastConfig::default().spacing);
    }

    #[test]
    fn new_app_starts_without_toasts() {
        let (_dir, flags) = isolated_flags();
        let app = app_with(flags);
        assert!(app.toasts.is_empty());
        assert_eq!(app.title(), "Iced Toast");
    }

    #[test]
    fn corrupted_config_is_reported_as_sticky_warning() {
        let (dir, flags) = isolated_flags();
        std::fs::write(dir.path().join("settings.toml"), "not = valid = toml")
            .expect("failed to write invalid toml");

        let app = app_with(flags);
        let id = app.toasts.ids().next().expect("warning toast expected");
        assert_eq!(app.toasts.kind(id), Some(ToastKind::Warning));
        assert!(!app.toasts.has_pending_work(), "warning must not auto-dismiss");
    }

    #[test]
    fn show_buttons_respect_capacity() {
        let (_dir, mut flags) = isolated_flags();
        flags.max_toasts = Some(2);
        let mut app = app_with(flags);

        for kind in ToastKind::ALL {
            let _ = app.update(Message::Show(kind));
        }

        assert_eq!(app.toasts.len(), 2);
        let kinds: Vec<_> = app
            .toasts
            .ids()
            .filter_map(|id| app.toasts.kind(id))
            .collect();
        assert_eq!(kinds, vec![ToastKind::Warning, ToastKind::Info]);
        assert_eq!(app.title(), "Iced Toast (2)");
    }

    #[test]
    fn clear_then_ticks_close_every_toast() {
        let (_dir, mut flags) = isolated_flags();
        flags.duration_ms = Some(0);
        let mut app = app_with(flags);

        let _ = app.update(Message::Show(ToastKind::Success));
        let _ = app.update(Message::ShowSticky);
        let _ = app.update(Message::Clear);
        assert!(app.toasts.is_empty());

        std::thread::sleep(EXIT_TRANSITION + Duration::from_millis(20));
        let _ = app.update(Message::Tick(std::time::Instant::now()));

        assert_eq!(app.toasts.mounted_len(), 0);
        assert_eq!(app.closed.get(), 2);
    }

    #[test]
    fn dismiss_message_is_forwarded_to_manager() {
        let (_dir, mut flags) = isolated_flags();
        flags.duration_ms = Some(0);
        let mut app = app_with(flags);

        let _ = app.update(Message::Show(ToastKind::Info));
        let id = app.toasts.ids().next().unwrap();
        let _ = app.update(Message::Toast(ToastMessage::Dismiss(id)));

        assert!(!app.toasts.is_live(id));
        assert!(app.toasts.has_pending_work());
    }
}
