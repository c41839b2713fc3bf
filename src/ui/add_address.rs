// SPDX-License-Identifier: MPL-2.0
//! Address capture form.
//!
//! Pincode and city arrive pre-filled from the service-area gate and render
//! read-only; the user supplies the flat/house and area/street lines plus an
//! address type, and the row is inserted as the default delivery address.

use crate::i18n::fluent::I18n;
use crate::ui::components::app_button::{AppButton, Variant};
use crate::ui::components::{progress_dots, TextField};
use crate::ui::design_tokens::{opacity, palette, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

/// Address type choices offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressChoice {
    #[default]
    Home,
    Work,
    Other,
}

impl AddressChoice {
    pub const ALL: [AddressChoice; 3] = [AddressChoice::Home, AddressChoice::Work, AddressChoice::Other];

    /// Lowercase value stored in the `address_type` column.
    #[must_use]
    pub fn row_value(self) -> &'static str {
        match self {
            AddressChoice::Home => "home",
            AddressChoice::Work => "work",
            AddressChoice::Other => "other",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            AddressChoice::Home => "address-type-home",
            AddressChoice::Work => "address-type-work",
            AddressChoice::Other => "address-type-other",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub pincode: String,
    pub city: String,
    pub flat_house_building: String,
    pub area_street_block: String,
    pub address_type: AddressChoice,
    pub loading: bool,
}

impl State {
    /// Fresh form seeded with the gate's pincode and city.
    #[must_use]
    pub fn start(pincode: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            pincode: pincode.into(),
            city: city.into(),
            ..Self::default()
        }
    }

    fn filled(&self) -> bool {
        !self.flat_house_building.is_empty() && !self.area_street_block.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    FlatChanged(String),
    AreaChanged(String),
    TypeSelected(AddressChoice),
    SavePressed,
    BackPressed,
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
    MissingFields,
    /// Insert the default address for the signed-in user.
    Save {
        flat_house_building: String,
        area_street_block: String,
        address_type: AddressChoice,
    },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FlatChanged(value) => {
            state.flat_house_building = value;
            Event::None
        }
        Message::AreaChanged(value) => {
            state.area_street_block = value;
            Event::None
        }
        Message::TypeSelected(choice) => {
            state.address_type = choice;
            Event::None
        }
        Message::SavePressed => {
            if !state.filled() {
                return Event::MissingFields;
            }
            state.loading = true;
            Event::Save {
                flat_house_building: state.flat_house_building.clone(),
                area_street_block: state.area_street_block.clone(),
                address_type: state.address_type,
            }
        }
        Message::BackPressed => Event::Back,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            button(text("‹").size(typography::B2))
                .style(styles::button::round_accent)
                .padding([2.0, 8.0])
                .on_press(Message::BackPressed),
        )
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(progress_dots::view(3, 2))
        .push(Space::new().width(Length::Fill).height(Length::Shrink));

    let locked_row = Row::new()
        .spacing(spacing::SM + spacing::XS)
        .push(
            container(
                TextField::new(i18n.tr("address-pincode-placeholder"), state.pincode.clone())
                    .enabled(false)
                    .view(),
            )
            .width(Length::Fill),
        )
        .push(
            container(
                TextField::new(i18n.tr("address-city-placeholder"), state.city.clone())
                    .enabled(false)
                    .view(),
            )
            .width(Length::Fill),
        );

    let mut type_row = Row::new().spacing(spacing::SM + spacing::XS);
    for choice in AddressChoice::ALL {
        type_row = type_row.push(
            button(text(i18n.tr(choice.label_key())).size(typography::B2))
                .style(styles::button::choice_chip(state.address_type == choice))
                .padding([10.0, 20.0])
                .on_press(Message::TypeSelected(choice)),
        );
    }

    let form = Column::new()
        .spacing(spacing::MD)
        .push(
            TextField::new(
                i18n.tr("address-flat-placeholder"),
                state.flat_house_building.clone(),
            )
            .on_input(Message::FlatChanged)
            .view(),
        )
        .push(
            TextField::new(
                i18n.tr("address-area-placeholder"),
                state.area_street_block.clone(),
            )
            .on_input(Message::AreaChanged)
            .view(),
        )
        .push(locked_row)
        .push(
            Column::new()
                .spacing(spacing::SM + spacing::XS)
                .push(
                    text(i18n.tr("address-type-label"))
                        .size(typography::B2)
                        .color(with_alpha(palette::HEADING, opacity::BODY_TEXT)),
                )
                .push(type_row),
        );

    let footer = AppButton::new(i18n.tr("address-save"))
        .variant(Variant::Primary)
        .enabled(state.filled())
        .loading(state.loading)
        .on_press(Message::SavePressed)
        .view();

    let content = Column::new()
        .spacing(spacing::XL)
        .push(header)
        .push(
            text(i18n.tr("address-title"))
                .size(typography::H4)
                .color(palette::HEADING),
        )
        .push(form)
        .push(Space::new().width(Length::Shrink).height(Length::Fill))
        .push(footer);

    container(content)
        .style(styles::container::screen)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_requires_both_free_text_lines() {
        let mut state = State::start("41001", "Florence");
        assert_eq!(update(&mut state, Message::SavePressed), Event::MissingFields);

        update(&mut state, Message::FlatChanged("12B Maple Court".to_string()));
        assert_eq!(update(&mut state, Message::SavePressed), Event::MissingFields);

        update(&mut state, Message::AreaChanged("Old Mill Road".to_string()));
        let event = update(&mut state, Message::SavePressed);
        assert_eq!(
            event,
            Event::Save {
                flat_house_building: "12B Maple Court".to_string(),
                area_street_block: "Old Mill Road".to_string(),
                address_type: AddressChoice::Home,
            }
        );
        assert!(state.loading);
    }

    #[test]
    fn address_type_selection_round_trips() {
        let mut state = State::start("41001", "Florence");
        update(&mut state, Message::TypeSelected(AddressChoice::Work));
        assert_eq!(state.address_type, AddressChoice::Work);
        assert_eq!(state.address_type.row_value(), "work");
    }

    #[test]
    fn start_seeds_the_locked_fields() {
        let state = State::start("41001", "Florence");
        assert_eq!(state.pincode, "41001");
        assert_eq!(state.city, "Florence");
        assert_eq!(state.address_type, AddressChoice::Home);
    }
}
