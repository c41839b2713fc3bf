// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (screens, localization, the
//! backend collaborators) and translates screen events into side effects
//! like auth calls and row-store reads. The session is owned here and
//! threaded through view contexts explicitly; there is no ambient global
//! auth state.

mod guard;
mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Screen, Tab};

use crate::backend::{Backend, Session};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::components::Alert;
use crate::ui::{add_address, card_gallery, home, notes, pincode_check, signin, signup_email};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    backend: Backend,
    session: Option<Session>,
    /// Blocking modal, when a backend failure or the pincode miss raised one.
    alert: Option<Alert>,
    signin: signin::State,
    signup_email: signup_email::State,
    pincode: pincode_check::State,
    address_form: add_address::State,
    home: home::State,
    notes: notes::State,
    gallery: card_gallery::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.session.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Builds the window settings. The window keeps a phone-like portrait shape.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default()).0
    }
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let base_url = flags
            .backend_url
            .unwrap_or_else(|| config.backend_url().to_string());
        let backend = Backend::new(&base_url, config.backend_anon_key());

        let app = Self {
            i18n,
            screen: Screen::Opening,
            backend,
            session: None,
            alert: None,
            signin: signin::State::default(),
            signup_email: signup_email::State::default(),
            pincode: pincode_check::State::default(),
            address_form: add_address::State::default(),
            home: home::State::default(),
            notes: notes::State::default(),
            gallery: card_gallery::State::default(),
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-window-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_boots_on_the_opening_screen() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.screen, Screen::Opening);
        assert!(app.session.is_none());
        assert!(app.alert.is_none());
    }

    #[test]
    fn backend_url_flag_overrides_config() {
        let flags = Flags {
            backend_url: Some("https://local.test".to_string()),
            ..Flags::default()
        };
        // Construction must accept the override without touching the network.
        let (_app, _task) = App::new(flags);
    }
}
