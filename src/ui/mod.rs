// SPDX-License-Identifier: MPL-2.0
//! Iced rendering for toasts.
//!
//! - [`overlay`] - `OverlaySurface`, the iced implementation of the toast surface
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod overlay;
