// SPDX-License-Identifier: MPL-2.0
//! Capacity bound for live toasts.

use crate::config::{DEFAULT_MAX_TOASTS, MAX_MAX_TOASTS, MIN_MAX_TOASTS};

/// Maximum number of toasts live at once.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–50).
///
/// # Example
///
/// ```
/// use iced_toast::notifications::MaxToasts;
///
/// assert_eq!(MaxToasts::new(3).value(), 3);
///
/// // Values outside range are clamped
/// assert_eq!(MaxToasts::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxToasts(usize);

impl MaxToasts {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_MAX_TOASTS, MAX_MAX_TOASTS))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if `live` toasts leave no room for another one.
    #[must_use]
    pub fn is_reached_by(self, live: usize) -> bool {
        live >= self.0
    }
}

impl Default for MaxToasts {
    fn default() -> Self {
        Self(DEFAULT_MAX_TOASTS)
    }
}
