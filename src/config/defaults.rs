// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Auto-dismiss delay and exit transition length
//! - **Capacity**: Bounds on simultaneously live toasts
//! - **Layout**: Spacing and stacking layer of the toast containers

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss delay in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Length of the exit transition in milliseconds. Fixed, not configurable.
pub const EXIT_TRANSITION_MS: u64 = 300;

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of live toasts.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Minimum allowed capacity.
pub const MIN_MAX_TOASTS: usize = 1;

/// Maximum allowed capacity.
pub const MAX_MAX_TOASTS: usize = 50;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default gap between stacked toasts, in logical pixels.
pub const DEFAULT_SPACING: f32 = 10.0;

/// Default stacking layer of the toast containers.
pub const DEFAULT_Z_INDEX: i32 = 9999;
