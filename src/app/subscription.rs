// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between ticks while toasts have pending timers. Short enough
/// for the exit fade to look smooth.
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Creates the tick subscription; idle when no timer is pending.
pub fn create_tick_subscription(has_pending_work: bool) -> Subscription<Message> {
    if has_pending_work {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
