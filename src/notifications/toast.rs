// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the identifiers, kinds, anchor positions and per-call
//! options shared by the manager and the display surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Unique identifier for a toast.
///
/// Identifiers are allocated by the [`Manager`](super::Manager) that shows the
/// toast and stay stable for the toast's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ToastId {
    /// Renders the id as a short base-36 token, e.g. `toast-1a`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

        let mut buf = [0u8; 13];
        let mut pos = buf.len();
        let mut n = self.0;
        loop {
            pos -= 1;
            buf[pos] = DIGITS[(n % 36) as usize];
            n /= 36;
            if n == 0 {
                break;
            }
        }
        // Only ASCII digits were written.
        let token = std::str::from_utf8(&buf[pos..]).map_err(|_| fmt::Error)?;
        write!(f, "toast-{token}")
    }
}

/// Kind of toast; determines the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ToastKind {
    /// Operation completed successfully.
    Success,
    /// Something failed.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

impl ToastKind {
    /// All kinds, in declaration order.
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Warning,
        ToastKind::Info,
    ];

    /// Lower-case name, usable as a style class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

/// Anchor point of a toast container on screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All positions, top row first.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Returns true for the three anchors along the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown toast position '{s}'"))
    }
}

/// Callback run when the toast body is clicked.
pub(crate) struct ClickCallback(pub(crate) Box<dyn FnMut()>);

/// Callback run once the toast has been removed from the surface.
pub(crate) struct CloseCallback(pub(crate) Box<dyn FnOnce()>);

impl fmt::Debug for ClickCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickCallback(..)")
    }
}

impl fmt::Debug for CloseCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloseCallback(..)")
    }
}

/// Per-call overrides for [`Manager::show`](super::Manager::show).
///
/// Every field is optional; unset fields fall back to the manager's
/// configuration.
///
/// ```
/// use iced_toast::notifications::{ToastKind, ToastOptions};
/// use std::time::Duration;
///
/// let options = ToastOptions::new()
///     .kind(ToastKind::Warning)
///     .duration(Duration::ZERO)
///     .closable(false);
/// assert_eq!(options.kind_override(), Some(ToastKind::Warning));
/// ```
#[derive(Debug, Default)]
pub struct ToastOptions {
    pub(crate) kind: Option<ToastKind>,
    pub(crate) duration: Option<Duration>,
    pub(crate) position: Option<Position>,
    pub(crate) closable: Option<bool>,
    pub(crate) class_name: Option<String>,
    pub(crate) on_click: Option<ClickCallback>,
    pub(crate) on_close: Option<CloseCallback>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the auto-dismiss delay. `Duration::ZERO` keeps the toast until
    /// it is removed explicitly.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Whether the toast shows a dismiss affordance. Defaults to `true`.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    /// Extra style tag forwarded untouched to the surface.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Runs `f` every time the toast body (not its dismiss button) is clicked.
    #[must_use]
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(ClickCallback(Box::new(f)));
        self
    }

    /// Runs `f` exactly once, after the toast has left the surface.
    #[must_use]
    pub fn on_close(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(CloseCallback(Box::new(f)));
        self
    }

    /// Returns the kind override, if any.
    #[must_use]
    pub fn kind_override(&self) -> Option<ToastKind> {
        self.kind
    }
}

/// Everything a surface needs to draw one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub position: Position,
    pub closable: bool,
    pub class_name: Option<String>,
}
