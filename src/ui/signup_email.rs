// SPDX-License-Identifier: MPL-2.0
//! Three-step email sign-up wizard: email, password, name.
//!
//! The terms checkbox gates the first two steps. The final step hands the
//! collected fields to the application, which performs the sign-up and moves
//! on to the pincode gate.

use crate::config::SIGNUP_STEPS;
use crate::i18n::fluent::I18n;
use crate::ui::components::app_button::{AppButton, Variant};
use crate::ui::components::{progress_dots, TextField};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, checkbox, container, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub step: usize,
    pub email: String,
    pub password: String,
    pub name: String,
    pub agreed_to_terms: bool,
    pub loading: bool,
}

impl State {
    fn current_value(&self) -> &str {
        match self.step {
            0 => &self.email,
            1 => &self.password,
            _ => &self.name,
        }
    }

    fn set_current_value(&mut self, value: String) {
        match self.step {
            0 => self.email = value,
            1 => self.password = value,
            _ => self.name = value,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    NextPressed,
    BackPressed,
    TermsToggled(bool),
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Back past the first step leaves the wizard.
    Back,
    MissingEmail,
    MissingPassword,
    MissingName,
    TermsRequired,
    Submit {
        email: String,
        password: String,
        name: String,
    },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::InputChanged(value) => {
            state.set_current_value(value);
            Event::None
        }
        Message::NextPressed => match state.step {
            0 => {
                if state.email.is_empty() {
                    return Event::MissingEmail;
                }
                if !state.agreed_to_terms {
                    return Event::TermsRequired;
                }
                state.step = 1;
                Event::None
            }
            1 => {
                if state.password.is_empty() {
                    return Event::MissingPassword;
                }
                if !state.agreed_to_terms {
                    return Event::TermsRequired;
                }
                state.step = 2;
                Event::None
            }
            _ => {
                if state.name.is_empty() {
                    return Event::MissingName;
                }
                state.loading = true;
                Event::Submit {
                    email: state.email.clone(),
                    password: state.password.clone(),
                    name: state.name.clone(),
                }
            }
        },
        Message::BackPressed => {
            if state.step > 0 {
                state.step -= 1;
                Event::None
            } else {
                Event::Back
            }
        }
        Message::TermsToggled(agreed) => {
            state.agreed_to_terms = agreed;
            Event::None
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let (title_key, placeholder_key) = match state.step {
        0 => ("signup-email-title", "signup-email-placeholder"),
        1 => ("signup-password-title", "signup-password-placeholder"),
        _ => ("signup-name-title", "signup-name-placeholder"),
    };

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            button(text("‹").size(typography::B2))
                .style(styles::button::round_accent)
                .padding([2.0, 8.0])
                .on_press(Message::BackPressed),
        )
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(progress_dots::view(SIGNUP_STEPS, state.step))
        .push(Space::new().width(Length::Fill).height(Length::Shrink));

    let input = TextField::new(i18n.tr(placeholder_key), state.current_value())
        .secure(state.step == 1)
        .on_input(Message::InputChanged)
        .on_submit(Message::NextPressed)
        .view();

    let next_enabled = state.step >= SIGNUP_STEPS - 1 || state.agreed_to_terms;
    let mut footer = Column::new().spacing(spacing::MD).push(
        AppButton::new(i18n.tr("signup-next"))
            .variant(Variant::Primary)
            .enabled(next_enabled)
            .loading(state.loading)
            .on_press(Message::NextPressed)
            .view(),
    );

    if state.step < SIGNUP_STEPS - 1 {
        footer = footer.push(
            checkbox(state.agreed_to_terms)
                .label(i18n.tr("signup-terms"))
                .on_toggle(Message::TermsToggled)
                .size(typography::H5)
                .text_size(typography::B2),
        );
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .push(header)
        .push(
            text(i18n.tr(title_key))
                .size(typography::H3)
                .color(palette::HEADING),
        )
        .push(input)
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

    fn filled_state(step: usize) -> State {
        State {
            step,
            email: "lucy@example.com".to_string(),
            password: "hunter2".to_string(),
            name: "Lucy".to_string(),
            agreed_to_terms: true,
            loading: false,
        }
    }

    #[test]
    fn email_step_requires_email_and_terms() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::NextPressed), Event::MissingEmail);

        state.email = "lucy@example.com".to_string();
        assert_eq!(
            update(&mut state, Message::NextPressed),
            Event::TermsRequired
        );
        assert_eq!(state.step, 0);

        state.agreed_to_terms = true;
        assert_eq!(update(&mut state, Message::NextPressed), Event::None);
        assert_eq!(state.step, 1);
    }

    #[test]
    fn password_step_advances_when_filled() {
        let mut state = filled_state(1);
        assert_eq!(update(&mut state, Message::NextPressed), Event::None);
        assert_eq!(state.step, 2);
    }

    #[test]
    fn final_step_submits_all_fields() {
        let mut state = filled_state(2);
        let event = update(&mut state, Message::NextPressed);
        assert_eq!(
            event,
            Event::Submit {
                email: "lucy@example.com".to_string(),
                password: "hunter2".to_string(),
                name: "Lucy".to_string(),
            }
        );
        assert!(state.loading);
    }

    #[test]
    fn back_steps_through_the_wizard_then_leaves() {
        let mut state = filled_state(2);
        assert_eq!(update(&mut state, Message::BackPressed), Event::None);
        assert_eq!(state.step, 1);
        assert_eq!(update(&mut state, Message::BackPressed), Event::None);
        assert_eq!(state.step, 0);
        assert_eq!(update(&mut state, Message::BackPressed), Event::Back);
    }

    #[test]
    fn input_routes_to_the_active_step_field() {
        let mut state = State::default();
        update(&mut state, Message::InputChanged("a@b.c".to_string()));
        assert_eq!(state.email, "a@b.c");

        state.step = 1;
        update(&mut state, Message::InputChanged("secret".to_string()));
        assert_eq!(state.password, "secret");

        state.step = 2;
        update(&mut state, Message::InputChanged("Lucy".to_string()));
        assert_eq!(state.name, "Lucy");
    }
}
