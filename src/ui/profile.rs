// SPDX-License-Identifier: MPL-2.0
//! Profile tab: user header, menu sections, and log out.
//!
//! Most menu entries are static; Address Book opens the address form and
//! Log out revokes the session and returns to the opening screen.

use crate::i18n::fluent::I18n;
use crate::ui::components::top_navbar;
use crate::ui::design_tokens::{opacity, palette, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    BackPressed,
    AddressBookPressed,
    LogOutPressed,
}

/// Events propagated to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Back,
    OpenAddressBook,
    SignOut,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::BackPressed => Event::Back,
        Message::AddressBookPressed => Event::OpenAddressBook,
        Message::LogOutPressed => Event::SignOut,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user_name: Option<&'a str>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let user_name = ctx
        .user_name
        .map(str::to_string)
        .unwrap_or_else(|| i18n.tr("profile-user-fallback"));

    let header = top_navbar::view(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                button(text("‹").size(typography::H5))
                    .style(styles::button::link)
                    .padding(spacing::XS)
                    .on_press(Message::BackPressed),
            )
            .push(
                text(user_name)
                    .size(typography::H5)
                    .color(palette::WHITE),
            )
            .into(),
    );

    let information = section(
        i18n,
        "profile-your-information",
        &[
            ("profile-orders", None),
            ("profile-profile-information", None),
            ("profile-address-book", Some(Message::AddressBookPressed)),
            ("profile-referrals", None),
            ("profile-coupons", None),
            ("profile-notifications", None),
        ],
    );

    let support = section(
        i18n,
        "profile-support",
        &[
            ("profile-about", None),
            ("profile-contact", None),
            ("profile-help", None),
            ("profile-privacy", None),
        ],
    );

    let logout = container(
        button(text(i18n.tr("profile-logout")).size(typography::B2))
            .style(styles::button::destructive_outline)
            .padding([spacing::SM, spacing::XXL])
            .on_press(Message::LogOutPressed),
    )
    .center_x(Length::Fill);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(information)
        .push(support)
        .push(logout);

    container(scrollable(
        container(content).padding([spacing::MD, spacing::LG]),
    ))
    .style(styles::container::screen)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// One bordered menu section. Entries without a message are visible but
/// inert, matching the product's current scope.
fn section<'a>(
    i18n: &I18n,
    heading_key: &str,
    entries: &[(&str, Option<Message>)],
) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::SM);
    for (index, (label_key, message)) in entries.iter().enumerate() {
        if index > 0 {
            rows = rows.push(
                container(Space::new().width(Length::Fill).height(Length::Fixed(1.0)))
                    .style(styles::container::divider),
            );
        }
        let row = Row::new()
            .align_y(Vertical::Center)
            .push(
                text(i18n.tr(label_key))
                    .size(typography::B2)
                    .color(palette::HEADING),
            )
            .push(Space::new().width(Length::Fill).height(Length::Shrink))
            .push(
                text("›")
                    .size(typography::B1)
                    .color(palette::ORANGE_300),
            );
        rows = rows.push(
            button(row)
                .style(styles::button::link)
                .padding(spacing::XS)
                .width(Length::Fill)
                .on_press_maybe(*message),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .push(
            container(
                text(i18n.tr(heading_key))
                    .size(typography::B2)
                    .color(with_alpha(palette::HEADING, opacity::DISABLED)),
            )
            .center_x(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .push(
            container(rows)
                .style(styles::container::menu_section)
                .padding([spacing::LG, spacing::MD])
                .width(Length::Fill),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_events_route() {
        assert_eq!(update(Message::BackPressed), Event::Back);
        assert_eq!(update(Message::AddressBookPressed), Event::OpenAddressBook);
        assert_eq!(update(Message::LogOutPressed), Event::SignOut);
    }
}
