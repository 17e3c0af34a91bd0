// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to inform users about actions (save success,
//! errors, etc.) without blocking interaction. They dismiss themselves after
//! a delay, can be closed by the user, and are capped in number: showing one
//! more than the capacity evicts the oldest.
//!
//! # Components
//!
//! - [`manager`] - `Manager` for capacity, timers and lifecycle
//! - [`toast`] - ids, kinds, positions and per-call options
//! - [`surface`] - the `Surface` trait toasts are rendered through
//! - [`timer`] - deadline queue and clocks driving auto-dismiss
//! - [`capacity`] - clamped capacity newtype
//!
//! # Usage
//!
//! ```
//! use iced_toast::notifications::{
//!     Manager, RecordingSurface, Settings, ToastOptions,
//! };
//!
//! // The provider runs the first time a toast is shown.
//! let mut manager = Manager::new(Settings::default(), |spec| {
//!     Some(RecordingSurface::new(*spec))
//! });
//!
//! let id = manager.success("Image saved", ToastOptions::new());
//! assert!(id.is_some());
//!
//! // Drive timers from a periodic tick.
//! manager.tick();
//! ```

pub mod capacity;
pub mod manager;
pub mod surface;
pub mod timer;
pub mod toast;

pub use capacity::MaxToasts;
pub use manager::{Manager, Message as ToastMessage, Settings, EXIT_TRANSITION};
pub use surface::{RecordingSurface, Surface, SurfaceEvent, SurfaceSpec};
pub use timer::{Clock, ManualClock, SystemClock, TimerHandle, Timers};
pub use toast::{Position, ToastId, ToastKind, ToastOptions, ToastView};
