// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen: provider chooser with an expandable email form.
//!
//! The first press on "Sign in with Email" reveals the form; the second
//! submits it. Routing after a successful sign-in (home vs. pincode gate)
//! happens at the application level once the address presence is known.

use crate::i18n::fluent::I18n;
use crate::ui::components::app_button::{AppButton, Variant};
use crate::ui::components::TextField;
use crate::ui::design_tokens::{opacity, palette, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub show_email_form: bool,
    pub email: String,
    pub password: String,
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailSignInPressed,
    EmailChanged(String),
    PasswordChanged(String),
    ApplePressed,
    GooglePressed,
    GoToSignUp,
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Both fields present; exchange them for a session.
    Submit { email: String, password: String },
    /// Presence check failed; the app raises the standard alert.
    MissingFields,
    GoToSignUp,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailSignInPressed => {
            if !state.show_email_form {
                state.show_email_form = true;
                return Event::None;
            }
            if state.email.is_empty() || state.password.is_empty() {
                return Event::MissingFields;
            }
            state.loading = true;
            Event::Submit {
                email: state.email.clone(),
                password: state.password.clone(),
            }
        }
        Message::EmailChanged(email) => {
            state.email = email;
            Event::None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            Event::None
        }
        // TODO(auth): wire Apple/Google once the native provider flows exist.
        Message::ApplePressed | Message::GooglePressed => Event::None,
        Message::GoToSignUp => Event::GoToSignUp,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let body: Element<'a, Message> = if state.show_email_form {
        Column::new()
            .spacing(spacing::SM + spacing::XS)
            .push(
                TextField::new(i18n.tr("signin-email-placeholder"), state.email.clone())
                    .on_input(Message::EmailChanged)
                    .view(),
            )
            .push(
                TextField::new(i18n.tr("signin-password-placeholder"), state.password.clone())
                    .secure(true)
                    .on_input(Message::PasswordChanged)
                    .on_submit(Message::EmailSignInPressed)
                    .view(),
            )
            .push(
                AppButton::new(i18n.tr("signin-submit"))
                    .variant(Variant::Primary)
                    .loading(state.loading)
                    .on_press(Message::EmailSignInPressed)
                    .view(),
            )
            .into()
    } else {
        Column::new()
            .spacing(spacing::SM + spacing::XS)
            .push(
                AppButton::new(i18n.tr("signin-with-email"))
                    .variant(Variant::Primary)
                    .on_press(Message::EmailSignInPressed)
                    .view(),
            )
            .push(
                AppButton::new(i18n.tr("signin-with-apple"))
                    .variant(Variant::Secondary)
                    .on_press(Message::ApplePressed)
                    .view(),
            )
            .push(divider(i18n))
            .push(
                AppButton::new(i18n.tr("signin-with-google"))
                    .variant(Variant::Secondary)
                    .on_press(Message::GooglePressed)
                    .view(),
            )
            .into()
    };

    let footer = button(
        text(format!(
            "{} {}",
            i18n.tr("signin-no-account"),
            i18n.tr("signin-signup-link")
        ))
        .size(typography::B1),
    )
    .style(styles::button::link)
    .padding(spacing::SM)
    .on_press(Message::GoToSignUp);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(
            text(i18n.tr("opening-brand"))
                .size(typography::H4)
                .color(palette::HEADING),
        )
        .push(
            text(i18n.tr("signin-title"))
                .size(typography::H3)
                .color(palette::HEADING),
        )
        .push(body)
        .push(footer);

    container(content)
        .style(styles::container::gradient)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn divider<'a>(i18n: &I18n) -> Element<'a, Message> {
    let line = || {
        container(Space::new().width(Length::Fill).height(Length::Fixed(1.0)))
            .style(styles::container::tint(
                with_alpha(palette::BROWN_300, 0.2),
                0.0,
            ))
            .width(Length::Fill)
    };

    Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .push(line())
        .push(
            text(i18n.tr("divider-or"))
                .size(typography::B2)
                .color(with_alpha(palette::HEADING, opacity::BODY_TEXT)),
        )
        .push(line())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_email_press_reveals_the_form() {
        let mut state = State::default();
        let event = update(&mut state, Message::EmailSignInPressed);
        assert_eq!(event, Event::None);
        assert!(state.show_email_form);
        assert!(!state.loading);
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut state = State {
            show_email_form: true,
            email: "lucy@example.com".to_string(),
            ..State::default()
        };
        let event = update(&mut state, Message::EmailSignInPressed);
        assert_eq!(event, Event::MissingFields);
        assert!(!state.loading);
    }

    #[test]
    fn submit_with_both_fields_starts_loading() {
        let mut state = State {
            show_email_form: true,
            email: "lucy@example.com".to_string(),
            password: "hunter2".to_string(),
            ..State::default()
        };
        let event = update(&mut state, Message::EmailSignInPressed);
        assert_eq!(
            event,
            Event::Submit {
                email: "lucy@example.com".to_string(),
                password: "hunter2".to_string(),
            }
        );
        assert!(state.loading);
    }
}
