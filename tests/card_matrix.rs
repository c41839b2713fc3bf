// SPDX-License-Identifier: MPL-2.0
//! Behavior of the product card across its type × state × flags matrix.

use leaf_loaf::ui::components::product_card::{
    self, Attribute, CardState, CardType, ProductCard, SuggestionPill, VisibilityFlags,
};
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Intent {
    Pressed,
    ExpandToggled,
    Quantity(u32),
    Pill(String),
}

const TYPES: [CardType; 4] = [
    CardType::Input,
    CardType::Confirmed,
    CardType::Cart,
    CardType::Recommendation,
];

const STATES: [CardState; 4] = [
    CardState::Default,
    CardState::Selected,
    CardState::Expanded,
    CardState::Collapsed,
];

#[test]
fn expand_affordance_matches_the_type_contract() {
    for card_type in TYPES {
        let eligible = product_card::expand_affordance_eligible(card_type);
        assert_eq!(
            eligible,
            matches!(card_type, CardType::Input | CardType::Confirmed),
            "{card_type:?}"
        );
    }
}

#[test]
fn quantity_stepper_contract() {
    // Decrement at the floor never invokes the caller's constructor.
    let calls = Cell::new(0u32);
    let at_floor = product_card::decrement_intent(1, &|q| {
        calls.set(calls.get() + 1);
        Intent::Quantity(q)
    });
    assert_eq!(at_floor, None);
    assert_eq!(calls.get(), 0);

    // Above the floor it is invoked exactly once with N-1.
    let above = product_card::decrement_intent(3, &|q| Intent::Quantity(q));
    assert_eq!(above, Some(Intent::Quantity(2)));

    // Increment has no ceiling and always reports N+1.
    for n in [1u32, 9, 99, 9_999] {
        let intent = product_card::increment_intent(n, &|q| Intent::Quantity(q));
        assert_eq!(intent, Intent::Quantity(n + 1));
    }
}

#[test]
fn price_block_contract() {
    assert!(product_card::shows_strikethrough(Some(24.0), Some(28.0)));
    assert!(!product_card::shows_strikethrough(Some(24.0), Some(20.0)));
    assert_eq!(product_card::format_price(24.0), "$24");
    assert_eq!(product_card::format_price(28.0), "$28");
}

#[test]
fn attributes_block_needs_flag_state_and_entries() {
    let flags = VisibilityFlags {
        show_attributes: true,
        ..VisibilityFlags::default()
    };
    // showAttributes=true, state=default, non-empty attributes: no render.
    assert!(!product_card::attributes_visible(flags, CardState::Default, 2));
    assert!(product_card::attributes_visible(flags, CardState::Expanded, 2));
}

#[test]
fn attribute_line_is_a_single_joined_string() {
    let attrs = vec![Attribute::new("1", "Dairy"), Attribute::new("2", "Organic")];
    assert_eq!(product_card::joined_attribute_line(&attrs), "Dairy • Organic");
}

#[test]
fn every_type_state_combination_renders() {
    // The same (type, state) pair must build with any flag combination;
    // optional blocks degrade to "not rendered" rather than failing.
    for card_type in TYPES {
        for state in STATES {
            let _plain: iced::Element<'_, Intent> =
                ProductCard::new(card_type, "Amul Fresh Lactose Free Milk 500 ml")
                    .state(state)
                    .view();

            let _loaded: iced::Element<'_, Intent> =
                ProductCard::new(card_type, "Amul Fresh Lactose Free Milk 500 ml")
                    .state(state)
                    .quantity_label("500 ml")
                    .price(24.0)
                    .original_price(28.0)
                    .show_suggestion_pills(true)
                    .show_attributes(true)
                    .show_quantity_control(true)
                    .show_price(true)
                    .suggestion_pills(vec![
                        SuggestionPill::new("1", "1L"),
                        SuggestionPill::new("2", "Nestle Lactose Free Milk"),
                    ])
                    .attributes(vec![
                        Attribute::new("1", "Dairy"),
                        Attribute::new("2", "Organic"),
                    ])
                    .cart_quantity(2)
                    .on_press(Intent::Pressed)
                    .on_expand_toggle(Intent::ExpandToggled)
                    .on_quantity_change(Intent::Quantity)
                    .on_suggestion_pill(Intent::Pill)
                    .view();
        }
    }
}

#[test]
fn card_without_on_press_builds_an_inert_card() {
    // No on-press prop: the card renders but carries no press intent for
    // any type/state combination.
    for card_type in TYPES {
        for state in STATES {
            let _card: iced::Element<'_, Intent> = ProductCard::new(card_type, "Veggie Mix")
                .state(state)
                .show_image(false)
                .view();
        }
    }
}
