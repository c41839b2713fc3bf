// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{opacity, palette, radius, with_alpha};
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Standard form input: white fill, hairline border, accent focus ring.
pub fn form(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => Border {
            color: palette::ACTIVE_INPUT,
            width: 2.0,
            radius: radius::MD.into(),
        },
        _ => Border {
            color: with_alpha(palette::BROWN_300, 0.2),
            width: 1.0,
            radius: radius::MD.into(),
        },
    };
    text_input::Style {
        background: Background::Color(palette::BACKGROUND),
        border,
        icon: palette::BROWN_300,
        placeholder: with_alpha(palette::HEADING, opacity::BODY_TEXT),
        value: with_alpha(palette::HEADING, opacity::BODY_TEXT),
        selection: with_alpha(palette::ACTIVE_INPUT, 0.4),
    }
}

/// Input carrying a validation error (red ring, error text below).
pub fn form_error(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(palette::BACKGROUND),
        border: Border {
            color: palette::RED_200,
            width: 2.0,
            radius: radius::MD.into(),
        },
        icon: palette::BROWN_300,
        placeholder: with_alpha(palette::HEADING, opacity::BODY_TEXT),
        value: with_alpha(palette::HEADING, opacity::BODY_TEXT),
        selection: with_alpha(palette::ACTIVE_INPUT, 0.4),
    }
}

/// Read-only input (pre-filled pincode/city on the address form).
pub fn form_disabled(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(with_alpha(palette::BROWN_300, 0.05)),
        border: Border {
            color: with_alpha(palette::BROWN_300, 0.2),
            width: 1.0,
            radius: radius::MD.into(),
        },
        icon: palette::BROWN_300,
        placeholder: with_alpha(palette::HEADING, opacity::BODY_TEXT),
        value: with_alpha(palette::HEADING, opacity::BODY_TEXT),
        selection: with_alpha(palette::ACTIVE_INPUT, 0.4),
    }
}
