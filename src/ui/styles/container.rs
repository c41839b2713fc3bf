// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, with_alpha};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians};

/// Plain app background (white).
pub fn screen(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        ..container::Style::default()
    }
}

/// Dark welcome surface behind the opening splash.
pub fn welcome(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WELCOME_BACKGROUND)),
        ..container::Style::default()
    }
}

/// Vertical brand gradient used by the sign-up/sign-in surfaces.
pub fn gradient(_theme: &iced::Theme) -> container::Style {
    let linear = Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.0, palette::GRADIENT_TOP)
        .add_stop(1.0, palette::GRADIENT_BOTTOM);
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(linear))),
        ..container::Style::default()
    }
}

/// Cream panel (quick actions, menu sections, note tiles).
pub fn cream_panel(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CREAM_100)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Bordered cream section used by the profile menu.
pub fn menu_section(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CREAM_100)),
        border: Border {
            color: with_alpha(palette::ORANGE_300, opacity::DIVIDER),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

/// Darkened top bar with a light hairline, standing in for the blurred
/// photographic navbar of the mobile app.
pub fn navbar(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(palette::BLACK, 0.4))),
        text_color: Some(palette::WHITE),
        border: Border {
            color: with_alpha(palette::CREAM_100, 0.3),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

/// Fullscreen scrim behind a modal alert.
pub fn scrim(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(palette::BLACK, opacity::SCRIM))),
        ..container::Style::default()
    }
}

/// The modal alert box itself.
pub fn alert_box(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_200)),
        border: Border {
            radius: radius::XL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Gray placeholder swatch where a product image would load.
pub fn image_placeholder(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_200)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Inner glyph of the placeholder swatch.
pub fn image_placeholder_glyph(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_400)),
        border: Border {
            radius: 2.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Orange quantity-control strip on cart cards.
pub fn quantity_control(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ORANGE_200)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Solid color fill with a small radius; note color strips, progress dots.
pub fn tint(color: Color, corner_radius: f32) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme: &iced::Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: corner_radius.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Hairline divider between menu rows.
pub fn divider(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            palette::HEADING,
            opacity::DIVIDER,
        ))),
        ..container::Style::default()
    }
}
