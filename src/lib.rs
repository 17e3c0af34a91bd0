// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient toast notifications.
//!
//! The lifecycle manager in [`notifications`] is independent of any
//! rendering technology: it drives a [`notifications::Surface`], enforces a
//! capacity bound, and dismisses toasts on a timer. [`ui`] provides an
//! iced overlay surface and [`app`] a small demo window.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod notifications;
pub mod ui;
