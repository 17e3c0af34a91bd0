// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::{Position, ToastKind, ToastMessage};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a toast of the given kind with the configured duration.
    Show(ToastKind),
    /// Show an info toast that never auto-dismisses.
    ShowSticky,
    /// Remove every toast.
    Clear,
    /// Message coming from the toast overlay.
    Toast(ToastMessage),
    /// Periodic tick driving toast timers and fades.
    Tick(Instant),
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Directory holding `settings.toml` (overrides env and platform default).
    pub config_dir: Option<String>,
    /// Anchor override for toasts.
    pub position: Option<Position>,
    /// Capacity override.
    pub max_toasts: Option<usize>,
    /// Auto-dismiss override in milliseconds.
    pub duration_ms: Option<u64>,
}
