// SPDX-License-Identifier: MPL-2.0
//! Step indicator dots for the onboarding flows.

use crate::ui::design_tokens::{palette, radius, sizing, spacing, with_alpha};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{container, Row, Space};
use iced::{Element, Length};

/// Renders `total` dots with the `current` (zero-based) one highlighted.
pub fn view<'a, Message: 'a>(total: usize, current: usize) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

    for index in 0..total {
        let color = if index == current {
            palette::ACTIVE_INPUT
        } else {
            with_alpha(palette::ORANGE_300, 0.3)
        };
        row = row.push(
            container(Space::new().width(Length::Fixed(sizing::PROGRESS_DOT)).height(Length::Fixed(sizing::PROGRESS_DOT),))
            .style(styles::container::tint(color, radius::SM)),
        );
    }

    row.into()
}
