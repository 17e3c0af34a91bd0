// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the ordered registry of toasts, enforces the capacity
//! bound by evicting the oldest live toast, and drives auto-dismiss and exit
//! transitions through its timer queue.
//!
//! A toast goes through `mount → (timer | remove_toast) → exit transition →
//! unmount + on_close`. Removal is asynchronous: the record stays in the
//! registry until its exit transition has completed on a later
//! [`Manager::tick`].

use super::capacity::MaxToasts;
use super::surface::{Surface, SurfaceSpec};
use super::timer::{Clock, SystemClock, TimerHandle, Timers};
use super::toast::{
    ClickCallback, CloseCallback, Position, ToastId, ToastKind, ToastOptions, ToastView,
};
use crate::config::{ToastConfig, EXIT_TRANSITION_MS};
use indexmap::IndexMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Time between a removal request and the toast leaving the surface.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(EXIT_TRANSITION_MS);

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dismiss button of a toast was pressed.
    Dismiss(ToastId),
    /// The body of a toast was clicked.
    Clicked(ToastId),
    /// Tick for processing due timers.
    Tick,
}

/// Resolved defaults applied to every toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub default_duration: Duration,
    pub default_position: Position,
    pub max_toasts: MaxToasts,
    pub spacing: f32,
    pub z_index: i32,
}

impl Settings {
    #[must_use]
    pub fn surface_spec(&self) -> SurfaceSpec {
        SurfaceSpec {
            default_position: self.default_position,
            spacing: self.spacing,
            z_index: self.z_index,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&ToastConfig::default())
    }
}

impl From<&ToastConfig> for Settings {
    fn from(config: &ToastConfig) -> Self {
        let defaults = ToastConfig::default();
        Self {
            default_duration: Duration::from_millis(
                config
                    .default_duration_ms
                    .or(defaults.default_duration_ms)
                    .unwrap_or_default(),
            ),
            default_position: config.default_position.unwrap_or_default(),
            max_toasts: config.max_toasts.map(MaxToasts::new).unwrap_or_default(),
            spacing: config
                .spacing
                .or(defaults.spacing)
                .unwrap_or_default(),
            z_index: config.z_index.or(defaults.z_index).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Live,
    Leaving,
}

#[derive(Debug, Clone, Copy)]
enum TimerEvent {
    AutoDismiss(ToastId),
    ExitComplete(ToastId),
}

#[derive(Debug)]
struct Record {
    kind: ToastKind,
    message: String,
    closable: bool,
    phase: Phase,
    /// Pending auto-dismiss timer; cleared once it fires or is cancelled.
    timer: Option<TimerHandle>,
    shown_at: Instant,
    on_click: Option<ClickCallback>,
    on_close: Option<CloseCallback>,
}

type SurfaceProvider<S> = Box<dyn FnOnce(&SurfaceSpec) -> Option<S>>;

enum SurfaceSlot<S> {
    /// Not created yet; the provider runs on first use.
    Pending(SurfaceProvider<S>),
    Ready(S),
    /// The provider found no place to render.
    Unavailable,
}

/// Manages live toasts and their display surface.
pub struct Manager<S> {
    settings: Settings,
    /// Toasts in creation order, live and leaving.
    registry: IndexMap<ToastId, Record>,
    surface: SurfaceSlot<S>,
    timers: Timers<TimerEvent>,
    clock: Box<dyn Clock>,
    next_id: u64,
}

impl<S: Surface> Manager<S> {
    /// Creates a manager whose surface is built by `provider` the first time
    /// a toast is shown.
    ///
    /// A provider returning `None` puts the manager in degraded mode: every
    /// `show` returns `None` and nothing else happens.
    pub fn new(
        settings: Settings,
        provider: impl FnOnce(&SurfaceSpec) -> Option<S> + 'static,
    ) -> Self {
        Self::with_slot(settings, SurfaceSlot::Pending(Box::new(provider)))
    }

    /// Creates a manager around an already built surface.
    pub fn with_surface(settings: Settings, surface: S) -> Self {
        Self::with_slot(settings, SurfaceSlot::Ready(surface))
    }

    /// Creates a manager with no surface at all.
    pub fn unavailable(settings: Settings) -> Self {
        Self::with_slot(settings, SurfaceSlot::Unavailable)
    }

    fn with_slot(settings: Settings, surface: SurfaceSlot<S>) -> Self {
        Self {
            settings,
            registry: IndexMap::new(),
            surface,
            timers: Timers::new(),
            clock: Box::new(SystemClock),
            next_id: 0,
        }
    }

    /// Replaces the clock used for timers.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Shows a toast and returns its id.
    ///
    /// When the manager is at capacity the oldest live toast is evicted
    /// first. Returns `None` only when there is no surface to render into.
    pub fn show(&mut self, message: impl Into<String>, options: ToastOptions) -> Option<ToastId> {
        if !self.ensure_surface() {
            return None;
        }

        while self.settings.max_toasts.is_reached_by(self.len()) {
            let Some(oldest) = self.oldest_live() else {
                break;
            };
            tracing::debug!(id = %oldest, "evicting oldest toast");
            self.remove_toast(oldest);
        }

        let id = ToastId::from_raw(self.next_id);
        self.next_id += 1;

        let ToastOptions {
            kind,
            duration,
            position,
            closable,
            class_name,
            on_click,
            on_close,
        } = options;

        let view = ToastView {
            id,
            kind: kind.unwrap_or_default(),
            message: message.into(),
            position: position.unwrap_or(self.settings.default_position),
            closable: closable.unwrap_or(true),
            class_name,
        };
        let duration = duration.unwrap_or(self.settings.default_duration);
        // Measured from mounting, not from the request. A deadline past the
        // end of the clock is treated as sticky.
        let shown_at = self.clock.now();
        let deadline = if duration.is_zero() {
            None
        } else {
            shown_at.checked_add(duration)
        };
        let mut record = Record {
            kind: view.kind,
            message: view.message.clone(),
            closable: view.closable,
            phase: Phase::Live,
            timer: None,
            shown_at,
            on_click,
            on_close,
        };

        if let Some(surface) = self.surface_mut() {
            surface.mount(view);
        }

        if let Some(deadline) = deadline {
            record.timer = Some(self.timers.schedule(deadline, TimerEvent::AutoDismiss(id)));
        }

        tracing::trace!(%id, kind = record.kind.as_str(), ?duration, "toast shown");
        self.registry.insert(id, record);
        Some(id)
    }

    pub fn success(&mut self, message: impl Into<String>, options: ToastOptions) -> Option<ToastId> {
        self.show(message, options.kind(ToastKind::Success))
    }

    pub fn error(&mut self, message: impl Into<String>, options: ToastOptions) -> Option<ToastId> {
        self.show(message, options.kind(ToastKind::Error))
    }

    pub fn warning(&mut self, message: impl Into<String>, options: ToastOptions) -> Option<ToastId> {
        self.show(message, options.kind(ToastKind::Warning))
    }

    pub fn info(&mut self, message: impl Into<String>, options: ToastOptions) -> Option<ToastId> {
        self.show(message, options.kind(ToastKind::Info))
    }

    /// Starts removing a toast.
    ///
    /// The pending auto-dismiss timer is cancelled immediately and the exit
    /// transition begins; the toast leaves the registry and its `on_close`
    /// runs once the transition has completed. Unknown ids and toasts already
    /// being removed are ignored.
    pub fn remove_toast(&mut self, id: ToastId) {
        let Some(record) = self.registry.get_mut(&id) else {
            return;
        };
        if record.phase == Phase::Leaving {
            return;
        }

        record.phase = Phase::Leaving;
        if let Some(timer) = record.timer.take() {
            self.timers.cancel(timer);
        }
        self.timers.schedule(
            self.clock.now() + EXIT_TRANSITION,
            TimerEvent::ExitComplete(id),
        );

        if let Some(surface) = self.surface_mut() {
            surface.begin_exit(id, EXIT_TRANSITION);
        }
    }

    /// Removes every toast present at call time.
    pub fn clear(&mut self) {
        let ids: Vec<ToastId> = self.registry.keys().copied().collect();
        for id in ids {
            self.remove_toast(id);
        }
    }

    /// Processes every timer that is due.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some((handle, event)) = self.timers.pop_due(now) {
            match event {
                TimerEvent::AutoDismiss(id) => {
                    // A stale entry must never remove a toast twice.
                    let current = self
                        .registry
                        .get_mut(&id)
                        .filter(|record| record.phase == Phase::Live && record.timer == Some(handle));
                    if let Some(record) = current {
                        record.timer = None;
                        tracing::trace!(%id, "auto-dismiss timer fired");
                        self.remove_toast(id);
                    }
                }
                TimerEvent::ExitComplete(id) => self.finish_removal(id),
            }
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::Dismiss(id) => {
                if self.registry.get(&id).is_some_and(|record| record.closable) {
                    self.remove_toast(id);
                }
            }
            Message::Clicked(id) => {
                let Some(record) = self.registry.get_mut(&id) else {
                    return;
                };
                if record.phase != Phase::Live {
                    return;
                }
                if let Some(ClickCallback(on_click)) = record.on_click.as_mut() {
                    run_isolated(id, "on_click", on_click);
                }
            }
            Message::Tick => self.tick(),
        }
    }

    /// Returns the surface, once it has been created.
    pub fn surface(&self) -> Option<&S> {
        match &self.surface {
            SurfaceSlot::Ready(surface) => Some(surface),
            SurfaceSlot::Pending(_) | SurfaceSlot::Unavailable => None,
        }
    }

    fn surface_mut(&mut self) -> Option<&mut S> {
        match &mut self.surface {
            SurfaceSlot::Ready(surface) => Some(surface),
            SurfaceSlot::Pending(_) | SurfaceSlot::Unavailable => None,
        }
    }

    /// Builds the surface on first use. Returns whether one is available.
    fn ensure_surface(&mut self) -> bool {
        if matches!(self.surface, SurfaceSlot::Pending(_)) {
            if let SurfaceSlot::Pending(provider) =
                std::mem::replace(&mut self.surface, SurfaceSlot::Unavailable)
            {
                if let Some(surface) = provider(&self.settings.surface_spec()) {
                    self.surface = SurfaceSlot::Ready(surface);
                }
            }
        }
        matches!(self.surface, SurfaceSlot::Ready(_))
    }

    fn finish_removal(&mut self, id: ToastId) {
        let Some(record) = self.registry.shift_remove(&id) else {
            return;
        };
        if let Some(surface) = self.surface_mut() {
            surface.unmount(id);
        }

        tracing::debug!(
            %id,
            visible_for = ?self.clock.now().saturating_duration_since(record.shown_at),
            "toast removed"
        );
        if let Some(CloseCallback(on_close)) = record.on_close {
            run_isolated(id, "on_close", on_close);
        }
    }

    fn oldest_live(&self) -> Option<ToastId> {
        self.registry
            .iter()
            .find(|(_, record)| record.phase == Phase::Live)
            .map(|(&id, _)| id)
    }
}

impl<S> Manager<S> {
    /// Returns the number of live toasts (not being removed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry
            .values()
            .filter(|record| record.phase == Phase::Live)
            .count()
    }

    /// Returns whether no toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of toasts on the surface, including those in
    /// their exit transition.
    #[must_use]
    pub fn mounted_len(&self) -> usize {
        self.registry.len()
    }

    /// Live toast ids, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.registry
            .iter()
            .filter(|(_, record)| record.phase == Phase::Live)
            .map(|(&id, _)| id)
    }

    /// Returns whether `id` is in the registry, live or leaving.
    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.registry.contains_key(&id)
    }

    /// Returns whether `id` is shown and not being removed.
    #[must_use]
    pub fn is_live(&self, id: ToastId) -> bool {
        self.registry
            .get(&id)
            .is_some_and(|record| record.phase == Phase::Live)
    }

    /// Returns the message of a toast in the registry.
    #[must_use]
    pub fn message(&self, id: ToastId) -> Option<&str> {
        self.registry.get(&id).map(|record| record.message.as_str())
    }

    /// Returns the kind of a toast in the registry.
    #[must_use]
    pub fn kind(&self, id: ToastId) -> Option<ToastKind> {
        self.registry.get(&id).map(|record| record.kind)
    }

    /// Returns whether any timer is still waiting; hosts keep ticking while
    /// this holds.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Earliest instant at which [`Manager::tick`] has something to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl<S: fmt::Debug> fmt::Debug for Manager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let surface = match &self.surface {
            SurfaceSlot::Pending(_) => "pending",
            SurfaceSlot::Ready(_) => "ready",
            SurfaceSlot::Unavailable => "unavailable",
        };
        f.debug_struct("Manager")
            .field("settings", &self.settings)
            .field("registry", &self.registry)
            .field("surface", &surface)
            .field("timers", &self.timers.len())
            .finish()
    }
}

/// Runs a caller callback so that a panic inside it cannot leave the
/// registry half-updated.
fn run_isolated(id: ToastId, name: &'static str, callback: impl FnOnce()) {
    if panic::catch_unwind(AssertUnwindSafe(callback)).is_err() {
        tracing::warn!(%id, callback = name, "toast callback panicked");
    }
}
