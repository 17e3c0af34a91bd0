// SPDX-License-Identifier: MPL-2.0
//! Display surface abstraction.
//!
//! The manager never draws anything itself. It tells a [`Surface`] which
//! toasts to mount, when to start their exit transition and when to drop
//! them; the surface turns user clicks back into [`Message`]s.

use super::manager::Message;
use super::toast::{Position, ToastId, ToastView};
use std::time::Duration;

/// Presentation settings handed to the surface when it is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSpec {
    /// Anchor used for toasts that don't request one.
    pub default_position: Position,
    /// Gap between stacked toasts.
    pub spacing: f32,
    /// Stacking layer of the toast containers.
    pub z_index: i32,
}

/// Region of the screen toasts are rendered into.
pub trait Surface {
    /// Mounts a toast after every toast already mounted at the same position.
    fn mount(&mut self, toast: ToastView);

    /// Starts the exit transition of a mounted toast. The manager calls
    /// [`Surface::unmount`] once `transition` has elapsed.
    fn begin_exit(&mut self, id: ToastId, transition: Duration);

    /// Removes a toast from the screen.
    fn unmount(&mut self, id: ToastId);
}

/// Lifecycle step recorded by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Mounted(ToastId),
    ExitStarted(ToastId),
    Unmounted(ToastId),
}

#[derive(Debug, Clone)]
struct Node {
    view: ToastView,
    exiting: bool,
}

/// Headless surface that keeps mounted toasts in memory.
///
/// Useful for tests and for hosts without a window: it reproduces the
/// click routing of a real surface through [`RecordingSurface::click`] and
/// [`RecordingSurface::press_dismiss`]. Long-running hosts should drain the
/// event log with [`RecordingSurface::take_events`].
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    spec: SurfaceSpec,
    nodes: Vec<Node>,
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(spec: SurfaceSpec) -> Self {
        Self {
            spec,
            nodes: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn spec(&self) -> SurfaceSpec {
        self.spec
    }

    /// Mounted toasts (exiting ones included) in mount order.
    pub fn mounted(&self) -> impl Iterator<Item = &ToastView> {
        self.nodes.iter().map(|node| &node.view)
    }

    /// Messages of mounted toasts in mount order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.mounted().map(|view| view.message.as_str()).collect()
    }

    #[must_use]
    pub fn is_mounted(&self, id: ToastId) -> bool {
        self.nodes.iter().any(|node| node.view.id == id)
    }

    #[must_use]
    pub fn is_exiting(&self, id: ToastId) -> bool {
        self.nodes.iter().any(|node| node.view.id == id && node.exiting)
    }

    /// Every lifecycle step seen so far.
    #[must_use]
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Returns the recorded lifecycle steps and empties the log.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Simulates a click on the toast body.
    #[must_use]
    pub fn click(&self, id: ToastId) -> Option<Message> {
        self.is_mounted(id).then_some(Message::Clicked(id))
    }

    /// Simulates a press on the dismiss button. Toasts without one yield
    /// nothing.
    #[must_use]
    pub fn press_dismiss(&self, id: ToastId) -> Option<Message> {
        self.nodes
            .iter()
            .find(|node| node.view.id == id && node.view.closable)
            .map(|_| Message::Dismiss(id))
    }
}

impl Surface for RecordingSurface {
    fn mount(&mut self, toast: ToastView) {
        self.events.push(SurfaceEvent::Mounted(toast.id));
        self.nodes.push(Node {
            view: toast,
            exiting: false,
        });
    }

    fn begin_exit(&mut self, id: ToastId, _transition: Duration) {
        if let Some(node) = self.nodes.iter_mut().find(|node| node.view.id == id) {
            node.exiting = true;
            self.events.push(SurfaceEvent::ExitStarted(id));
        }
    }

    fn unmount(&mut self, id: ToastId) {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.view.id != id);
        if self.nodes.len() < before {
            self.events.push(SurfaceEvent::Unmounted(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastKind;

    fn spec() -> SurfaceSpec {
        SurfaceSpec {
            default_position: Position::TopRight,
            spacing: 10.0,
            z_index: 9999,
        }
    }

    fn view(raw: u64, closable: bool) -> ToastView {
        ToastView {
            id: ToastId::from_raw(raw),
            kind: ToastKind::Info,
            message: format!("toast {raw}"),
            position: Position::TopRight,
            closable,
            class_name: None,
        }
    }

    #[test]
    fn mount_keeps_insertion_order() {
        let mut surface = RecordingSurface::new(spec());
        surface.mount(view(2, true));
        surface.mount(view(1, true));

        assert_eq!(surface.messages(), vec!["toast 2", "toast 1"]);
    }

    #[test]
    fn exit_then_unmount_records_each_step() {
        let mut surface = RecordingSurface::new(spec());
        let id = ToastId::from_raw(7);
        surface.mount(view(7, true));

        surface.begin_exit(id, Duration::from_millis(300));
        assert!(surface.is_exiting(id));
        surface.unmount(id);
        surface.unmount(id);

        assert!(!surface.is_mounted(id));
        assert_eq!(
            surface.events(),
            &[
                SurfaceEvent::Mounted(id),
                SurfaceEvent::ExitStarted(id),
                SurfaceEvent::Unmounted(id),
            ]
        );
    }

    #[test]
    fn take_events_drains_the_log() {
        let mut surface = RecordingSurface::new(spec());
        let id = ToastId::from_raw(4);
        surface.mount(view(4, true));

        assert_eq!(surface.take_events(), vec![SurfaceEvent::Mounted(id)]);
        assert!(surface.events().is_empty());

        surface.unmount(id);
        assert_eq!(surface.events(), &[SurfaceEvent::Unmounted(id)]);
        assert!(surface.mounted().next().is_none());
    }

    #[test]
    fn dismiss_press_requires_closable_toast() {
        let mut surface = RecordingSurface::new(spec());
        surface.mount(view(1, true));
        surface.mount(view(2, false));

        let closable = ToastId::from_raw(1);
        let sticky = ToastId::from_raw(2);
        assert!(matches!(surface.press_dismiss(closable), Some(Message::Dismiss(id)) if id == closable));
        assert!(surface.press_dismiss(sticky).is_none());
        assert!(matches!(surface.click(sticky), Some(Message::Clicked(id)) if id == sticky));
        assert!(surface.click(ToastId::from_raw(3)).is_none());
    }
}
