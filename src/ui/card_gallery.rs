// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery for the product card matrix.
//!
//! Exercises every affordance of the card component: expand/collapse wiring,
//! suggestion pills, live cart quantity, the recommendation add button, and
//! press-to-select rows. This is the screen-level consumer the card's
//! contract is written against.

use crate::i18n::fluent::I18n;
use crate::ui::components::product_card::{
    Attribute, CardState, CardType, ProductCard, SuggestionPill,
};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Length};

const SAMPLE_NAME: &str = "Amul Fresh Lactose Free Milk 500 ml";
const SAMPLE_QUANTITY: &str = "500 ml";

#[derive(Debug, Clone)]
pub struct State {
    pub input_expanded: bool,
    pub cart_quantity: u32,
    pub selected_id: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            input_expanded: false,
            cart_quantity: 1,
            selected_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Card body pressed; nothing to do yet beyond the visual feedback.
    CardPressed,
    InputToggled,
    QuantityChanged(u32),
    PillPressed(String),
    RowSelected(String),
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::CardPressed => {}
        Message::InputToggled => state.input_expanded = !state.input_expanded,
        Message::QuantityChanged(quantity) => state.cart_quantity = quantity,
        Message::PillPressed(_id) => {}
        Message::RowSelected(id) => {
            // Pressing the selected row clears the selection.
            state.selected_id = if state.selected_id.as_deref() == Some(id.as_str()) {
                None
            } else {
                Some(id)
            };
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let mut sections = Column::new()
        .spacing(spacing::LG)
        .push(
            container(
                text(i18n.tr("gallery-title"))
                    .size(typography::H3)
                    .color(palette::BROWN_400),
            )
            .center_x(Length::Fill),
        );

    sections = sections.push(section(
        i18n.tr("gallery-section-input"),
        ProductCard::new(CardType::Input, SAMPLE_NAME)
            .quantity_label(SAMPLE_QUANTITY)
            .on_press(Message::CardPressed)
            .on_expand_toggle(Message::InputToggled)
            .view(),
    ));

    let expanded_state = if state.input_expanded {
        CardState::Expanded
    } else {
        CardState::Collapsed
    };
    sections = sections.push(section(
        i18n.tr("gallery-section-input-expanded"),
        ProductCard::new(CardType::Input, SAMPLE_NAME)
            .state(expanded_state)
            .quantity_label(SAMPLE_QUANTITY)
            .show_suggestion_pills(true)
            .show_attributes(true)
            .suggestion_pills(vec![
                SuggestionPill::new("1", "Amul Lactose Free Milk 500 ml"),
                SuggestionPill::new("2", "1L"),
                SuggestionPill::new("3", "Nestle Lactose Free Milk"),
                SuggestionPill::new("4", "+ See more"),
            ])
            .attributes(vec![
                Attribute::new("1", "Dairy"),
                Attribute::new("2", "Organic"),
            ])
            .on_expand_toggle(Message::InputToggled)
            .on_suggestion_pill(Message::PillPressed)
            .view(),
    ));

    sections = sections.push(section(
        i18n.tr("gallery-section-confirmed"),
        ProductCard::new(CardType::Confirmed, SAMPLE_NAME)
            .state(CardState::Selected)
            .quantity_label(SAMPLE_QUANTITY)
            .on_press(Message::CardPressed)
            .view(),
    ));

    sections = sections.push(section(
        i18n.tr("gallery-section-cart"),
        ProductCard::new(CardType::Cart, SAMPLE_NAME)
            .quantity_label(SAMPLE_QUANTITY)
            .price(24.0)
            .original_price(28.0)
            .show_quantity_control(true)
            .show_price(true)
            .cart_quantity(state.cart_quantity)
            .on_quantity_change(Message::QuantityChanged)
            .view(),
    ));

    sections = sections.push(section(
        i18n.tr("gallery-section-recommendation"),
        ProductCard::new(CardType::Recommendation, SAMPLE_NAME)
            .quantity_label(SAMPLE_QUANTITY)
            .price(24.0)
            .original_price(28.0)
            .show_price(true)
            .on_press(Message::CardPressed)
            .view(),
    ));

    sections = sections.push(section(
        i18n.tr("gallery-section-recommendation-bare"),
        ProductCard::new(CardType::Recommendation, "Veggie Mix")
            .quantity_label("150 gm")
            .price(24.0)
            .show_image(false)
            .show_price(true)
            .on_press(Message::CardPressed)
            .view(),
    ));

    let mut selectable = Column::new().spacing(spacing::SM);
    for id in ["1", "2", "3"] {
        let row_state = if state.selected_id.as_deref() == Some(id) {
            CardState::Selected
        } else {
            CardState::Default
        };
        selectable = selectable.push(
            ProductCard::new(CardType::Input, format!("Product {id}"))
                .state(row_state)
                .quantity_label(SAMPLE_QUANTITY)
                .on_press(Message::RowSelected(id.to_string()))
                .view(),
        );
    }
    sections = sections.push(section(
        i18n.tr("gallery-section-selectable"),
        selectable.into(),
    ));

    container(scrollable(
        container(sections).padding([spacing::MD, spacing::MD]),
    ))
    .style(styles::container::screen)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn section<'a>(title: String, card: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM + spacing::XS)
        .push(
            text(title)
                .size(typography::B1)
                .color(palette::BROWN_300),
        )
        .push(card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_expansion() {
        let mut state = State::default();
        update(&mut state, Message::InputToggled);
        assert!(state.input_expanded);
        update(&mut state, Message::InputToggled);
        assert!(!state.input_expanded);
    }

    #[test]
    fn quantity_tracks_the_card_intent() {
        let mut state = State::default();
        update(&mut state, Message::QuantityChanged(2));
        assert_eq!(state.cart_quantity, 2);
        update(&mut state, Message::QuantityChanged(1));
        assert_eq!(state.cart_quantity, 1);
    }

    #[test]
    fn selecting_the_same_row_twice_clears_it() {
        let mut state = State::default();
        update(&mut state, Message::RowSelected("2".to_string()));
        assert_eq!(state.selected_id.as_deref(), Some("2"));
        update(&mut state, Message::RowSelected("2".to_string()));
        assert_eq!(state.selected_id, None);
        update(&mut state, Message::RowSelected("1".to_string()));
        update(&mut state, Message::RowSelected("3".to_string()));
        assert_eq!(state.selected_id.as_deref(), Some("3"));
    }
}
