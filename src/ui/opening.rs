// SPDX-License-Identifier: MPL-2.0
//! Opening splash screen.
//!
//! Pure branding; the app-level splash timer decides where to go next
//! (sign-up for signed-out users, the address-presence check otherwise).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{container, text, Column};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            text(i18n.tr("opening-brand"))
                .size(typography::H2)
                .color(palette::CREAM_100),
        )
        .push(
            text(i18n.tr("opening-tagline"))
                .size(typography::H5)
                .color(palette::BACKGROUND),
        );

    container(content)
        .style(styles::container::welcome)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
