// SPDX-License-Identifier: MPL-2.0
//! Blocking modal alert.
//!
//! Store/auth failures surface here with the raw error message and a single
//! dismiss action; the pincode gate reuses the same chrome for its
//! "not delivering here yet" modal with a retry action.

use crate::i18n::fluent::I18n;
use crate::ui::components::app_button::{AppButton, Variant};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Space};
use iced::{Element, Length};

/// What the modal is blocking on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// A failed backend operation; `body` is the raw error message.
    Error { title: String, body: String },
    /// Pincode outside the service area.
    DeliveryUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismissed,
    /// Clear the pincode input and try again.
    UseAnotherPincode,
}

/// Renders the alert box; the caller stacks it over the dimmed screen.
pub fn view<'a>(alert: &Alert, i18n: &I18n) -> Element<'a, Message> {
    let content = match alert {
        Alert::Error { title, body } => Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                text(title.clone())
                    .size(typography::H4)
                    .color(palette::HEADING),
            )
            .push(
                text(body.clone())
                    .size(typography::B1)
                    .color(with_alpha(palette::HEADING, opacity::BODY_TEXT)),
            )
            .push(
                AppButton::new(i18n.tr("alert-ok"))
                    .variant(Variant::Primary)
                    .on_press(Message::Dismissed)
                    .view(),
            ),
        Alert::DeliveryUnavailable => Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                container(Space::new().width(Length::Fixed(150.0)).height(Length::Fixed(150.0)))
                    .style(styles::container::image_placeholder),
            )
            .push(
                text(i18n.tr("pincode-unavailable-title"))
                    .size(typography::H4)
                    .color(palette::HEADING),
            )
            .push(
                text(i18n.tr("pincode-unavailable-body"))
                    .size(typography::B1)
                    .color(with_alpha(palette::HEADING, opacity::BODY_TEXT)),
            )
            .push(
                AppButton::new(i18n.tr("pincode-unavailable-retry"))
                    .variant(Variant::Primary)
                    .on_press(Message::UseAnotherPincode)
                    .view(),
            )
            .push(
                button(text(i18n.tr("pincode-unavailable-exit")).size(typography::B1))
                    .style(styles::button::link)
                    .padding(spacing::SM)
                    .on_press(Message::Dismissed),
            ),
    };

    container(
        container(content)
            .style(styles::container::alert_box)
            .padding(spacing::XL)
            .max_width(sizing::ALERT_MAX_WIDTH),
    )
    .style(styles::container::scrim)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .padding(spacing::LG)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_alert_keeps_the_raw_message() {
        let alert = Alert::Error {
            title: "Error".to_string(),
            body: "permission denied for table notes".to_string(),
        };
        match &alert {
            Alert::Error { body, .. } => {
                assert_eq!(body, "permission denied for table notes");
            }
            Alert::DeliveryUnavailable => panic!("wrong variant"),
        }
        let _element = view(&alert, &I18n::default());
    }

    #[test]
    fn delivery_unavailable_renders() {
        let _element = view(&Alert::DeliveryUnavailable, &I18n::default());
    }
}
