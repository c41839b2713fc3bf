// SPDX-License-Identifier: MPL-2.0
//! Pincode service-area gate.
//!
//! A numeric pincode is looked up in `available_pincodes`; a hit carries the
//! pincode and city into the address form, a miss raises the blocking
//! "not delivering here yet" modal.

use crate::config::PINCODE_MAX_LEN;
use crate::i18n::fluent::I18n;
use crate::ui::components::app_button::{AppButton, Variant};
use crate::ui::components::{progress_dots, TextField};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub pincode: String,
    pub loading: bool,
}

impl State {
    /// "Use another pincode" clears the input for the next attempt.
    pub fn clear(&mut self) {
        self.pincode.clear();
        self.loading = false;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PincodeChanged(String),
    CheckPressed,
    BackPressed,
    GoToSignUpPressed,
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Look the pincode up in the service-area table.
    Check(String),
    Back,
    /// Escape hatch: sign the user out and return to sign-up.
    SignOutToSignUp,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::PincodeChanged(raw) => {
            // Digits only, capped at the service-area pincode length.
            state.pincode = raw
                .chars()
                .filter(char::is_ascii_digit)
                .take(PINCODE_MAX_LEN)
                .collect();
            Event::None
        }
        Message::CheckPressed => {
            if state.pincode.is_empty() {
                return Event::None;
            }
            state.loading = true;
            Event::Check(state.pincode.clone())
        }
        Message::BackPressed => Event::Back,
        Message::GoToSignUpPressed => Event::SignOutToSignUp,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            button(text("‹").size(typography::B2))
                .style(styles::button::round_accent)
                .padding([2.0, 8.0])
                .on_press(Message::BackPressed),
        )
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(progress_dots::view(3, 2))
        .push(Space::new().width(Length::Fill).height(Length::Shrink));

    let footer = Column::new()
        .spacing(spacing::SM)
        .push(
            AppButton::new(i18n.tr("pincode-check-delivery"))
                .variant(Variant::Primary)
                .enabled(!state.pincode.is_empty())
                .loading(state.loading)
                .on_press(Message::CheckPressed)
                .view(),
        )
        .push(
            container(
                button(text(i18n.tr("pincode-go-to-signup")).size(typography::B2))
                    .style(styles::button::link)
                    .padding(spacing::SM)
                    .on_press(Message::GoToSignUpPressed),
            )
            .center_x(Length::Fill),
        );

    let content = Column::new()
        .spacing(spacing::XL)
        .push(header)
        .push(
            text(i18n.tr("pincode-title"))
                .size(typography::H4)
                .color(palette::HEADING),
        )
        .push(
            TextField::new(i18n.tr("pincode-placeholder"), state.pincode.clone())
                .on_input(Message::PincodeChanged)
                .on_submit(Message::CheckPressed)
                .view(),
        )
        .push(Space::new().width(Length::Shrink).height(Length::Fill))
        .push(footer);

    container(content)
        .style(styles::container::screen)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pincode_input_is_digits_only_and_capped() {
        let mut state = State::default();
        update(&mut state, Message::PincodeChanged("4a1b0c0d1e9f9".to_string()));
        assert_eq!(state.pincode, "41001");
    }

    #[test]
    fn check_with_empty_pincode_is_a_no_op() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::CheckPressed), Event::None);
        assert!(!state.loading);
    }

    #[test]
    fn check_emits_the_pincode_and_starts_loading() {
        let mut state = State {
            pincode: "41001".to_string(),
            loading: false,
        };
        assert_eq!(
            update(&mut state, Message::CheckPressed),
            Event::Check("41001".to_string())
        );
        assert!(state.loading);
    }

    #[test]
    fn clear_resets_input_and_loading() {
        let mut state = State {
            pincode: "41001".to_string(),
            loading: true,
        };
        state.clear();
        assert!(state.pincode.is_empty());
        assert!(!state.loading);
    }
}
