// SPDX-License-Identifier: MPL-2.0
//! Bottom tab bar for the Home / Notes / Profile screens.

use crate::app::Tab;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

fn label_key(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "tab-home",
        Tab::Notes => "tab-notes",
        Tab::Profile => "tab-profile",
    }
}

fn glyph(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "⌂",
        Tab::Notes => "✎",
        Tab::Profile => "◉",
    }
}

/// Renders the bar; pressing a tab emits it for the app to route.
pub fn view<'a>(i18n: &I18n, active: Tab) -> Element<'a, Tab> {
    let mut row = Row::new().spacing(spacing::SM);

    for tab in [Tab::Home, Tab::Notes, Tab::Profile] {
        let entry = Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XXS)
            .push(text(glyph(tab)).size(typography::H5))
            .push(text(i18n.tr(label_key(tab))).size(typography::B3));

        row = row.push(
            button(container(entry).center_x(Length::Fill))
                .style(styles::button::tab(tab == active))
                .width(Length::Fill)
                .padding(spacing::SM)
                .on_press(tab),
        );
    }

    container(row)
        .style(styles::container::cream_panel)
        .padding(spacing::SM)
        .width(Length::Fill)
        .into()
}
