// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow, with_alpha};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary call-to-action (solid black, white label).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => with_alpha(palette::BUTTON_PRIMARY, 0.85),
        button::Status::Disabled => with_alpha(palette::BUTTON_PRIMARY, opacity::DISABLED),
        _ => palette::BUTTON_PRIMARY,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BUTTON_PRIMARY_TEXT,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Secondary action (outlined, transparent fill).
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Disabled => with_alpha(palette::BLACK, opacity::DISABLED),
        _ => palette::BLACK,
    };
    button::Style {
        background: None,
        text_color: border_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Card surface; the whole product card is one pressable region.
/// A selected card carries the accent border.
pub fn card(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border = if selected {
            Border {
                color: palette::ORANGE_200,
                width: 1.0,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                radius: radius::SM.into(),
                ..Border::default()
            }
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                with_alpha(palette::CREAM_100, 0.7)
            }
            _ => palette::BACKGROUND,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::BROWN_400,
            border,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Suggestion pill (translucent blue, fully rounded).
pub fn pill(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.7,
        _ => opacity::PILL,
    };
    button::Style {
        background: Some(Background::Color(with_alpha(palette::BLUE_100, alpha))),
        text_color: palette::BROWN_400,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Stepper button inside the orange quantity control.
pub fn quantity_step(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Disabled => with_alpha(palette::BUTTON_PRIMARY_TEXT, opacity::DISABLED),
        _ => palette::BUTTON_PRIMARY_TEXT,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round accent button ("add" on recommendation cards, back chevrons).
pub fn round_accent(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ORANGE_300,
        _ => palette::ORANGE_200,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BUTTON_PRIMARY_TEXT,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bare text link (sign-in/sign-up footers, "See all", expand chevrons).
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::ORANGE_300,
        button::Status::Disabled => with_alpha(palette::HEADING, opacity::DISABLED),
        _ => palette::HEADING,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Address-type chip (Home / Work / Other).
pub fn choice_chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| {
        if selected {
            button::Style {
                background: Some(Background::Color(palette::ACTIVE_INPUT)),
                text_color: palette::BACKGROUND,
                border: Border {
                    color: palette::ACTIVE_INPUT,
                    width: 1.0,
                    radius: 20.0.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        } else {
            button::Style {
                background: None,
                text_color: with_alpha(palette::HEADING, opacity::BODY_TEXT),
                border: Border {
                    color: with_alpha(palette::HEADING, opacity::BODY_TEXT),
                    width: 1.0,
                    radius: 20.0.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

/// Outlined destructive action (log out).
pub fn destructive_outline(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::RED_200,
        border: Border {
            color: palette::RED_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Tab-bar entry; the active tab is tinted with the accent.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color: if active {
            palette::ORANGE_300
        } else {
            with_alpha(palette::HEADING, opacity::BODY_TEXT)
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
