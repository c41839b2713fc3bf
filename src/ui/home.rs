// SPDX-License-Identifier: MPL-2.0
//! Home feed.
//!
//! Header with the default delivery address, a greeting, quick-action
//! cards, suggestion chips, the pet-food banner, and the offers row. The
//! default address is fetched when the tab is entered; everything else is
//! static feed content.

use crate::backend::types::UserAddress;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub address: Option<UserAddress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    GalleryPressed,
}

/// Events propagated to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenGallery,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::GalleryPressed => Event::OpenGallery,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Display name from the session's sign-up metadata.
    pub user_name: Option<&'a str>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let greeting_name = ctx
        .user_name
        .map(str::to_string)
        .unwrap_or_else(|| i18n.tr("home-greeting-fallback-name"));
    let greeting = format!(
        "{} {}, {}",
        i18n.tr("home-greeting-prefix"),
        greeting_name,
        i18n.tr("home-greeting-question")
    );

    let gallery_link = button(
        container(text(i18n.tr("home-view-gallery")).size(typography::B1))
            .center_x(Length::Fill),
    )
    .style(styles::button::link)
    .width(Length::Fill)
    .padding(spacing::MD)
    .on_press(Message::GalleryPressed);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(address_header(i18n, state))
        .push(
            text(greeting)
                .size(typography::H5)
                .color(palette::HEADING),
        )
        .push(gallery_link)
        .push(quick_actions(i18n))
        .push(suggestions(i18n))
        .push(pet_banner(i18n))
        .push(offers(i18n));

    container(scrollable(
        container(content).padding([spacing::MD, spacing::LG]),
    ))
    .style(styles::container::screen)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn address_header<'a>(i18n: &I18n, state: &State) -> Element<'a, Message> {
    let (deliver_to, line) = match &state.address {
        Some(address) => (
            format!("{} {}", i18n.tr("home-deliver-to"), address.address_type),
            address.short_line(),
        ),
        None => (
            format!(
                "{} {}",
                i18n.tr("home-deliver-to"),
                i18n.tr("address-type-home")
            ),
            i18n.tr("home-address-loading"),
        ),
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            container(text("◎").size(typography::H5))
                .style(styles::container::cream_panel)
                .padding(spacing::SM),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    text(deliver_to)
                        .size(typography::B3)
                        .color(palette::HEADING),
                )
                .push(text(line).size(typography::B1).color(palette::HEADING)),
        )
        .into()
}

fn quick_actions<'a>(i18n: &I18n) -> Element<'a, Message> {
    let card = |title: String| {
        container(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(text(title).size(typography::B1).color(palette::HEADING))
                .push(
                    container(Space::new().width(Length::Fixed(72.0)).height(Length::Fixed(72.0)))
                        .style(styles::container::image_placeholder),
                )
                .push(
                    container(text("→").size(typography::B1))
                        .style(styles::container::tint(palette::ORANGE_200, radius::FULL))
                        .padding([spacing::XS, spacing::SM]),
                ),
        )
        .style(styles::container::cream_panel)
        .padding(spacing::MD)
        .width(Length::Fill)
    };

    container(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(
                text(i18n.tr("home-quick-actions-title"))
                    .size(typography::H5)
                    .color(palette::HEADING),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(card(i18n.tr("home-quick-talk")))
                    .push(card(i18n.tr("home-quick-scan"))),
            ),
    )
    .style(styles::container::gradient)
    .padding(spacing::SM)
    .width(Length::Fill)
    .into()
}

fn suggestions<'a>(i18n: &I18n) -> Element<'a, Message> {
    let chip = || {
        container(
            text(i18n.tr("home-suggestion-birthday"))
                .size(typography::B2)
                .color(palette::BROWN_400),
        )
        .style(styles::container::tint(
            with_alpha(palette::BLUE_100, opacity::PILL),
            radius::FULL,
        ))
        .padding([6.0, 12.0])
    };

    Column::new()
        .spacing(spacing::SM)
        .push(
            text(i18n.tr("home-suggestions-title"))
                .size(typography::B1)
                .color(palette::HEADING),
        )
        .push(Row::new().spacing(spacing::SM).push(chip()).push(chip()))
        .push(Row::new().spacing(spacing::SM).push(chip()).push(chip()))
        .into()
}

fn pet_banner<'a>(i18n: &I18n) -> Element<'a, Message> {
    container(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(
                        text(i18n.tr("home-pet-banner-title"))
                            .size(typography::B1)
                            .color(palette::HEADING),
                    )
                    .push(
                        text(i18n.tr("home-pet-banner-body"))
                            .size(typography::B2)
                            .color(with_alpha(palette::HEADING, opacity::BODY_TEXT)),
                    ),
            )
            .push(
                container(Space::new().width(Length::Fixed(72.0)).height(Length::Fixed(72.0)))
                    .style(styles::container::image_placeholder),
            ),
    )
    .style(styles::container::cream_panel)
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}

fn offers<'a>(i18n: &I18n) -> Element<'a, Message> {
    let offer = || {
        container(
            Column::new()
                .spacing(spacing::SM)
                .push(
                    text(i18n.tr("home-offer-bread"))
                        .size(typography::B2)
                        .color(palette::HEADING),
                )
                .push(
                    container(Space::new().width(Length::Fixed(120.0)).height(Length::Fixed(80.0)))
                        .style(styles::container::image_placeholder),
                ),
        )
        .style(styles::container::cream_panel)
        .padding(spacing::MD)
    };

    Column::new()
        .spacing(spacing::SM)
        .push(
            text(i18n.tr("home-offers-title"))
                .size(typography::B1)
                .color(palette::HEADING),
        )
        .push(
            scrollable(Row::new().spacing(spacing::SM).push(offer()).push(offer()))
                .direction(scrollable::Direction::Horizontal(
                    scrollable::Scrollbar::default(),
                )),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_press_opens_the_gallery() {
        assert_eq!(update(Message::GalleryPressed), Event::OpenGallery);
    }
}
