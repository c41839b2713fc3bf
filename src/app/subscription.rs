// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is the opening splash timer: it ticks once the
//! splash delay elapses and is dropped as soon as the screen changes, so
//! signed-out users move on to sign-up without interaction.

use super::{App, Message, Screen};
use crate::config::SPLASH_DELAY_MS;
use iced::{time, Subscription};
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    if app.screen == Screen::Opening {
        time::every(Duration::from_millis(SPLASH_DELAY_MS)).map(|_| Message::SplashTick)
    } else {
        Subscription::none()
    }
}
