// SPDX-License-Identifier: MPL-2.0
//! Sign-up provider chooser.
//!
//! Email continues into the wizard; the Apple/Google providers are stubs
//! that go nowhere yet.

use crate::i18n::fluent::I18n;
use crate::ui::components::app_button::{AppButton, Variant};
use crate::ui::design_tokens::{opacity, palette, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ContinueWithEmail,
    ContinueWithApple,
    ContinueWithGoogle,
    GoToSignIn,
}

/// Events propagated to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    OpenEmailSignUp,
    OpenSignIn,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::ContinueWithEmail => Event::OpenEmailSignUp,
        // TODO(auth): wire Apple/Google once the native provider flows exist.
        Message::ContinueWithApple | Message::ContinueWithGoogle => Event::None,
        Message::GoToSignIn => Event::OpenSignIn,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let buttons = Column::new()
        .spacing(spacing::SM + spacing::XS)
        .push(
            AppButton::new(i18n.tr("signup-continue-email"))
                .variant(Variant::Primary)
                .on_press(Message::ContinueWithEmail)
                .view(),
        )
        .push(
            AppButton::new(i18n.tr("signup-continue-apple"))
                .variant(Variant::Secondary)
                .on_press(Message::ContinueWithApple)
                .view(),
        )
        .push(divider(i18n))
        .push(
            AppButton::new(i18n.tr("signup-continue-google"))
                .variant(Variant::Secondary)
                .on_press(Message::ContinueWithGoogle)
                .view(),
        );

    let footer = button(
        text(format!(
            "{} {}",
            i18n.tr("signup-have-account"),
            i18n.tr("signup-signin-link")
        ))
        .size(typography::B1),
    )
    .style(styles::button::link)
    .padding(spacing::SM)
    .on_press(Message::GoToSignIn);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(
            text(i18n.tr("opening-brand"))
                .size(typography::H4)
                .color(palette::HEADING),
        )
        .push(
            text(i18n.tr("signup-title"))
                .size(typography::H3)
                .color(palette::HEADING),
        )
        .push(buttons)
        .push(footer);

    container(content)
        .style(styles::container::gradient)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::LG)
        .into()
}

/// "or" between the provider groups.
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
    fn provider_stubs_emit_no_event() {
        assert_eq!(update(Message::ContinueWithApple), Event::None);
        assert_eq!(update(Message::ContinueWithGoogle), Event::None);
    }

    #[test]
    fn email_and_signin_navigate() {
        assert_eq!(update(Message::ContinueWithEmail), Event::OpenEmailSignUp);
        assert_eq!(update(Message::GoToSignIn), Event::OpenSignIn);
    }
}
