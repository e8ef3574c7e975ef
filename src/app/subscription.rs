// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::ui::notifications::ToastMessage;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a frame-rate tick subscription while toasts are on screen.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(TICK_INTERVAL_MS))
            .map(|instant| Message::Toast(ToastMessage::Tick(instant)))
    } else {
        Subscription::none()
    }
}
