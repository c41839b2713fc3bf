// SPDX-License-Identifier: MPL-2.0
//! Reusable product card.
//!
//! One presentational unit that adapts to four types and four visual states:
//!
//! - `Input`: the user is searching/selecting products (expand affordance,
//!   suggestion pills)
//! - `Confirmed`: the line is confirmed (selected styling, expand affordance)
//! - `Cart`: the item is in the cart (quantity control and pricing)
//! - `Recommendation`: compact suggestion card with an add button
//!
//! States (`Default`, `Selected`, `Expanded`, `Collapsed`) only affect
//! styling and chevron orientation; expansion is fully caller-controlled.
//! Independent visibility flags gate every optional block on top of the
//! type/state pair, so the same pair can render differently per caller.
//!
//! The card owns no data and keeps no internal state: the caller supplies
//! every field and receives user intents back as messages.
//!
//! # Usage
//!
//! ```ignore
//! ProductCard::new(CardType::Cart, "Amul Fresh Lactose Free Milk 500 ml")
//!     .quantity_label("500 ml")
//!     .price(24.0)
//!     .original_price(28.0)
//!     .show_quantity_control(true)
//!     .show_price(true)
//!     .cart_quantity(quantity)
//!     .on_quantity_change(Message::QuantityChanged)
//!     .view()
//! ```

use crate::config::{CART_QUANTITY_FLOOR, DEFAULT_CART_QUANTITY};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::image::Handle;
use iced::widget::{button, container, text, Column, Image, Row, Space, Stack};
use iced::{Color, Element, Length};

/// Separator glyph between attribute labels.
pub const ATTRIBUTE_SEPARATOR: &str = " • ";

const CHEVRON_EXPANDED: &str = "▴";
const CHEVRON_COLLAPSED: &str = "▾";
const GLYPH_PLUS: &str = "+";
const GLYPH_MINUS: &str = "−";

/// Rendering variant; determines which sub-elements are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    Input,
    Confirmed,
    Cart,
    Recommendation,
}

/// Visual state, orthogonal to [`CardType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Default,
    Selected,
    Expanded,
    Collapsed,
}

/// Independent visibility toggles. These do not derive from type or state;
/// the caller is responsible for combining them sensibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub show_image: bool,
    pub show_suggestion_pills: bool,
    pub show_attributes: bool,
    pub show_quantity_control: bool,
    pub show_price: bool,
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self {
            show_image: true,
            show_suggestion_pills: false,
            show_attributes: false,
            show_quantity_control: false,
            show_price: false,
        }
    }
}

/// A pressable alternative suggestion attached to the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPill {
    pub id: String,
    pub label: String,
}

impl SuggestionPill {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A descriptive attribute shown in the expanded card body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id: String,
    pub label: String,
}

impl Attribute {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Builder-style configuration surface of the card.
pub struct ProductCard<'a, Message> {
    card_type: CardType,
    card_state: CardState,
    flags: VisibilityFlags,
    name: String,
    quantity_label: Option<String>,
    price: Option<f64>,
    original_price: Option<f64>,
    image: Option<Handle>,
    pills: Vec<SuggestionPill>,
    attributes: Vec<Attribute>,
    cart_quantity: u32,
    on_press: Option<Message>,
    on_expand_toggle: Option<Message>,
    on_quantity_change: Option<Box<dyn Fn(u32) -> Message + 'a>>,
    on_suggestion_pill: Option<Box<dyn Fn(String) -> Message + 'a>>,
}

impl<'a, Message> ProductCard<'a, Message> {
    pub fn new(card_type: CardType, name: impl Into<String>) -> Self {
        Self {
            card_type,
            card_state: CardState::default(),
            flags: VisibilityFlags::default(),
            name: name.into(),
            quantity_label: None,
            price: None,
            original_price: None,
            image: None,
            pills: Vec::new(),
            attributes: Vec::new(),
            cart_quantity: DEFAULT_CART_QUANTITY,
            on_press: None,
            on_expand_toggle: None,
            on_quantity_change: None,
            on_suggestion_pill: None,
        }
    }

    #[must_use]
    pub fn state(mut self, state: CardState) -> Self {
        self.card_state = state;
        self
    }

    #[must_use]
    pub fn visibility(mut self, flags: VisibilityFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn quantity_label(mut self, label: impl Into<String>) -> Self {
        self.quantity_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn original_price(mut self, original: f64) -> Self {
        self.original_price = Some(original);
        self
    }

    #[must_use]
    pub fn image(mut self, handle: Handle) -> Self {
        self.image = Some(handle);
        self
    }

    #[must_use]
    pub fn show_image(mut self, show: bool) -> Self {
        self.flags.show_image = show;
        self
    }

    #[must_use]
    pub fn show_suggestion_pills(mut self, show: bool) -> Self {
        self.flags.show_suggestion_pills = show;
        self
    }

    #[must_use]
    pub fn show_attributes(mut self, show: bool) -> Self {
        self.flags.show_attributes = show;
        self
    }

    #[must_use]
    pub fn show_quantity_control(mut self, show: bool) -> Self {
        self.flags.show_quantity_control = show;
        self
    }

    #[must_use]
    pub fn show_price(mut self, show: bool) -> Self {
        self.flags.show_price = show;
        self
    }

    #[must_use]
    pub fn suggestion_pills(mut self, pills: Vec<SuggestionPill>) -> Self {
        self.pills = pills;
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn cart_quantity(mut self, quantity: u32) -> Self {
        self.cart_quantity = quantity;
        self
    }

    /// Whole-card press intent. Without it the card is inert, not merely
    /// dimmed. The recommendation add-button shares this same intent.
    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Expand/collapse intent. The card never flips its own state; the
    /// caller re-renders with a new [`CardState`].
    #[must_use]
    pub fn on_expand_toggle(mut self, message: Message) -> Self {
        self.on_expand_toggle = Some(message);
        self
    }

    #[must_use]
    pub fn on_quantity_change(mut self, to_message: impl Fn(u32) -> Message + 'a) -> Self {
        self.on_quantity_change = Some(Box::new(to_message));
        self
    }

    #[must_use]
    pub fn on_suggestion_pill(mut self, to_message: impl Fn(String) -> Message + 'a) -> Self {
        self.on_suggestion_pill = Some(Box::new(to_message));
        self
    }
}

impl<'a, Message: Clone + 'a> ProductCard<'a, Message> {
    /// Renders the card. Pure: the tree is re-derived from the current
    /// configuration on every call.
    pub fn view(self) -> Element<'a, Message> {
        let ProductCard {
            card_type,
            card_state,
            flags,
            name,
            quantity_label,
            price,
            original_price,
            image,
            pills,
            attributes,
            cart_quantity,
            on_press,
            on_expand_toggle,
            on_quantity_change,
            on_suggestion_pill,
        } = self;

        let is_recommendation = card_type == CardType::Recommendation;

        let mut main_row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

        if flags.show_image {
            main_row = main_row.push(thumbnail(image));
        }

        main_row = main_row.push(info_column(name, quantity_label, is_recommendation));

        if expand_affordance_eligible(card_type) {
            let chevron = if card_state == CardState::Expanded {
                CHEVRON_EXPANDED
            } else {
                CHEVRON_COLLAPSED
            };
            main_row = main_row.push(
                button(
                    text(chevron)
                        .size(typography::H5)
                        .color(palette::ORANGE_200),
                )
                .style(styles::button::link)
                .padding(spacing::XS)
                .on_press_maybe(on_expand_toggle),
            );
        }

        if add_affordance_eligible(card_type) {
            main_row = main_row.push(
                button(
                    container(text(GLYPH_PLUS).size(typography::B2))
                        .center_x(Length::Fill)
                        .center_y(Length::Fill),
                )
                .style(styles::button::round_accent)
                .width(Length::Fixed(sizing::ADD_BUTTON))
                .height(Length::Fixed(sizing::ADD_BUTTON))
                .padding(0)
                .on_press_maybe(on_press.clone()),
            );
        }

        let mut content = Column::new().spacing(spacing::SM).push(main_row);

        if attributes_visible(flags, card_state, attributes.len()) {
            content = content.push(
                text(joined_attribute_line(&attributes))
                    .size(typography::L2)
                    .color(palette::BROWN_300),
            );
        }

        if pills_visible(flags, pills.len()) {
            let mut pill_row = Row::new().spacing(6.0);
            for pill in pills {
                let intent = on_suggestion_pill.as_ref().map(|f| f(pill.id));
                pill_row = pill_row.push(
                    button(text(pill.label).size(typography::B3))
                        .style(styles::button::pill)
                        .padding([6.0, 8.0])
                        .on_press_maybe(intent),
                );
            }
            content = content.push(pill_row);
        }

        if quantity_row_visible(flags) {
            content = content.push(quantity_price_row(
                cart_quantity,
                price,
                original_price,
                on_quantity_change.as_deref(),
            ));
        }

        if price_row_visible(card_type, flags) {
            content = content.push(price_display(price, original_price, is_recommendation));
        }

        let padding = if is_recommendation {
            spacing::SM
        } else {
            12.0
        };

        button(content)
            .style(styles::button::card(card_state == CardState::Selected))
            .padding(padding)
            .width(Length::Fill)
            .on_press_maybe(on_press)
            .into()
    }
}

// ============================================
// Eligibility and formatting rules
// ============================================

/// Only search-input and confirmed cards carry the expand chevron.
#[must_use]
pub fn expand_affordance_eligible(card_type: CardType) -> bool {
    matches!(card_type, CardType::Input | CardType::Confirmed)
}

/// Only recommendation cards carry the round add button.
#[must_use]
pub fn add_affordance_eligible(card_type: CardType) -> bool {
    card_type == CardType::Recommendation
}

/// Attributes need their flag, the expanded state, and at least one entry.
#[must_use]
pub fn attributes_visible(flags: VisibilityFlags, state: CardState, count: usize) -> bool {
    flags.show_attributes && state == CardState::Expanded && count > 0
}

/// Pills need their flag and at least one entry; state does not matter.
#[must_use]
pub fn pills_visible(flags: VisibilityFlags, count: usize) -> bool {
    flags.show_suggestion_pills && count > 0
}

/// The stepper-and-price row needs both of its flags.
#[must_use]
pub fn quantity_row_visible(flags: VisibilityFlags) -> bool {
    flags.show_quantity_control && flags.show_price
}

/// The standalone price row is a recommendation-only element.
#[must_use]
pub fn price_row_visible(card_type: CardType, flags: VisibilityFlags) -> bool {
    card_type == CardType::Recommendation && flags.show_price
}

/// The original price is struck through only when it is strictly greater
/// than the current price (or zero when no price is set).
#[must_use]
pub fn shows_strikethrough(price: Option<f64>, original_price: Option<f64>) -> bool {
    original_price.is_some_and(|original| original > price.unwrap_or(0.0))
}

/// One quantity below `quantity`, or `None` at the floor.
#[must_use]
pub fn decremented(quantity: u32) -> Option<u32> {
    (quantity > CART_QUANTITY_FLOOR).then(|| quantity - 1)
}

/// One quantity above `quantity`; there is no ceiling.
#[must_use]
pub fn incremented(quantity: u32) -> u32 {
    quantity + 1
}

/// The message emitted by the decrement button, if any. At the floor the
/// button is inert and the caller's constructor is never invoked.
pub fn decrement_intent<Message>(
    quantity: u32,
    to_message: &dyn Fn(u32) -> Message,
) -> Option<Message> {
    decremented(quantity).map(to_message)
}

/// The message emitted by the increment button.
pub fn increment_intent<Message>(quantity: u32, to_message: &dyn Fn(u32) -> Message) -> Message {
    to_message(incremented(quantity))
}

/// Attribute labels joined into a single line, order preserved.
#[must_use]
pub fn joined_attribute_line(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .map(|attr| attr.label.as_str())
        .collect::<Vec<_>>()
        .join(ATTRIBUTE_SEPARATOR)
}

/// Whole dollars when integral, cents otherwise.
#[must_use]
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

// ============================================
// Sub-renderers
// ============================================

fn thumbnail<'a, Message: 'a>(image: Option<Handle>) -> Element<'a, Message> {
    match image {
        Some(handle) => Image::new(handle)
            .width(Length::Fixed(sizing::CARD_IMAGE))
            .height(Length::Fixed(sizing::CARD_IMAGE))
            .into(),
        None => container(
            container(Space::new().width(Length::Fixed(sizing::CARD_IMAGE_PLACEHOLDER)).height(Length::Fixed(sizing::CARD_IMAGE_PLACEHOLDER),))
            .style(styles::container::image_placeholder_glyph),
        )
        .style(styles::container::image_placeholder)
        .center_x(Length::Fixed(sizing::CARD_IMAGE))
        .center_y(Length::Fixed(sizing::CARD_IMAGE))
        .into(),
    }
}

fn info_column<'a, Message: 'a>(
    name: String,
    quantity_label: Option<String>,
    is_recommendation: bool,
) -> Element<'a, Message> {
    let name_size = if is_recommendation {
        typography::L2
    } else {
        typography::B2
    };
    let label_size = if is_recommendation {
        typography::L3
    } else {
        typography::L2
    };

    let mut info = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(text(name).size(name_size).color(palette::BROWN_400));

    if let Some(label) = quantity_label {
        info = info.push(text(label).size(label_size).color(palette::ORANGE_200));
    }

    info.into()
}

fn quantity_price_row<'a, Message: Clone + 'a>(
    quantity: u32,
    price: Option<f64>,
    original_price: Option<f64>,
    on_quantity_change: Option<&(dyn Fn(u32) -> Message + 'a)>,
) -> Element<'a, Message> {
    let decrement = on_quantity_change.and_then(|f| decrement_intent(quantity, f));
    let increment = on_quantity_change.map(|f| increment_intent(quantity, f));

    let stepper = container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                button(text(GLYPH_MINUS).size(typography::B2))
                    .style(styles::button::quantity_step)
                    .padding(spacing::XS)
                    .on_press_maybe(decrement),
            )
            .push(
                text(quantity.to_string())
                    .size(typography::B3)
                    .color(palette::BUTTON_PRIMARY_TEXT),
            )
            .push(
                button(text(GLYPH_PLUS).size(typography::B2))
                    .style(styles::button::quantity_step)
                    .padding(spacing::XS)
                    .on_press_maybe(increment),
            ),
    )
    .style(styles::container::quantity_control)
    .padding([spacing::XS, spacing::SM]);

    Row::new()
        .align_y(Vertical::Center)
        .push(stepper)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(price_display(price, original_price, false))
        .into()
}

fn price_display<'a, Message: 'a>(
    price: Option<f64>,
    original_price: Option<f64>,
    is_recommendation: bool,
) -> Element<'a, Message> {
    let size = if is_recommendation {
        typography::L2
    } else {
        typography::B3
    };

    let mut row = Row::new().spacing(6.0).align_y(Vertical::Center);

    if let Some(price) = price {
        row = row.push(
            text(format_price(price))
                .size(size)
                .color(palette::BROWN_400),
        );
    }

    if shows_strikethrough(price, original_price) {
        let original = original_price.unwrap_or_default();
        row = row.push(struck_label(
            format_price(original),
            size,
            with_alpha(palette::BROWN_400, opacity::MUTED_PRICE),
        ));
    }

    row.into()
}

/// The text widget has no strike-through attribute, so lay a hairline over
/// the label.
fn struck_label<'a, Message: 'a>(label: String, size: f32, color: Color) -> Element<'a, Message> {
    let line = container(Space::new().width(Length::Fill).height(Length::Fixed(1.0)))
        .style(styles::container::tint(color, 0.0));

    Stack::new()
        .push(text(label).size(size).color(color))
        .push(
            container(line)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Center),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestMessage {
        Quantity(u32),
    }

    #[test]
    fn expand_affordance_only_for_input_and_confirmed() {
        assert!(expand_affordance_eligible(CardType::Input));
        assert!(expand_affordance_eligible(CardType::Confirmed));
        assert!(!expand_affordance_eligible(CardType::Cart));
        assert!(!expand_affordance_eligible(CardType::Recommendation));
    }

    #[test]
    fn add_affordance_only_for_recommendation() {
        assert!(add_affordance_eligible(CardType::Recommendation));
        assert!(!add_affordance_eligible(CardType::Input));
        assert!(!add_affordance_eligible(CardType::Confirmed));
        assert!(!add_affordance_eligible(CardType::Cart));
    }

    #[test]
    fn decrement_at_floor_never_invokes_the_constructor() {
        let calls = Cell::new(0u32);
        let intent = decrement_intent(1, &|q| {
            calls.set(calls.get() + 1);
            TestMessage::Quantity(q)
        });
        assert_eq!(intent, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn decrement_above_floor_invokes_exactly_once_with_one_less() {
        let calls = Cell::new(0u32);
        let intent = decrement_intent(5, &|q| {
            calls.set(calls.get() + 1);
            TestMessage::Quantity(q)
        });
        assert_eq!(intent, Some(TestMessage::Quantity(4)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn increment_invokes_exactly_once_with_one_more() {
        for quantity in [1u32, 2, 17, 240] {
            let calls = Cell::new(0u32);
            let intent = increment_intent(quantity, &|q| {
                calls.set(calls.get() + 1);
                TestMessage::Quantity(q)
            });
            assert_eq!(intent, TestMessage::Quantity(quantity + 1));
            assert_eq!(calls.get(), 1);
        }
    }

    #[test]
    fn strikethrough_requires_original_strictly_above_price() {
        // price=24, originalPrice=28: both render, original struck through.
        assert!(shows_strikethrough(Some(24.0), Some(28.0)));
        // price=24, originalPrice=20: no strikethrough.
        assert!(!shows_strikethrough(Some(24.0), Some(20.0)));
        // Equal prices carry no strikethrough either.
        assert!(!shows_strikethrough(Some(24.0), Some(24.0)));
        // Missing price compares against zero.
        assert!(shows_strikethrough(None, Some(5.0)));
        assert!(!shows_strikethrough(Some(24.0), None));
    }

    #[test]
    fn attributes_hidden_outside_expanded_state() {
        let flags = VisibilityFlags {
            show_attributes: true,
            ..VisibilityFlags::default()
        };
        assert!(!attributes_visible(flags, CardState::Default, 2));
        assert!(!attributes_visible(flags, CardState::Collapsed, 2));
        assert!(!attributes_visible(flags, CardState::Selected, 2));
        assert!(attributes_visible(flags, CardState::Expanded, 2));
    }

    #[test]
    fn attributes_hidden_without_flag_or_entries() {
        let flags = VisibilityFlags::default();
        assert!(!attributes_visible(flags, CardState::Expanded, 2));

        let flags = VisibilityFlags {
            show_attributes: true,
            ..VisibilityFlags::default()
        };
        assert!(!attributes_visible(flags, CardState::Expanded, 0));
    }

    #[test]
    fn pills_ignore_state_but_need_flag_and_entries() {
        let flags = VisibilityFlags {
            show_suggestion_pills: true,
            ..VisibilityFlags::default()
        };
        for state in [
            CardState::Default,
            CardState::Selected,
            CardState::Expanded,
            CardState::Collapsed,
        ] {
            assert!(pills_visible(flags, 3));
            // State genuinely plays no role in the predicate.
            let _ = state;
        }
        assert!(!pills_visible(flags, 0));
        assert!(!pills_visible(VisibilityFlags::default(), 3));
    }

    #[test]
    fn quantity_row_needs_both_flags() {
        let both = VisibilityFlags {
            show_quantity_control: true,
            show_price: true,
            ..VisibilityFlags::default()
        };
        assert!(quantity_row_visible(both));

        let only_control = VisibilityFlags {
            show_quantity_control: true,
            ..VisibilityFlags::default()
        };
        assert!(!quantity_row_visible(only_control));

        let only_price = VisibilityFlags {
            show_price: true,
            ..VisibilityFlags::default()
        };
        assert!(!quantity_row_visible(only_price));
    }

    #[test]
    fn price_row_is_recommendation_only_and_flag_gated() {
        let with_price = VisibilityFlags {
            show_price: true,
            ..VisibilityFlags::default()
        };
        assert!(price_row_visible(CardType::Recommendation, with_price));
        assert!(!price_row_visible(CardType::Cart, with_price));
        assert!(!price_row_visible(
            CardType::Recommendation,
            VisibilityFlags::default()
        ));
    }

    #[test]
    fn attribute_labels_join_in_caller_order() {
        let attributes = vec![
            Attribute::new("1", "Dairy"),
            Attribute::new("2", "Organic"),
            Attribute::new("3", "Chilled"),
        ];
        assert_eq!(
            joined_attribute_line(&attributes),
            "Dairy • Organic • Chilled"
        );
        assert_eq!(joined_attribute_line(&[]), "");
    }

    #[test]
    fn prices_format_as_whole_dollars_or_cents() {
        assert_eq!(format_price(24.0), "$24");
        assert_eq!(format_price(24.5), "$24.50");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn default_flags_show_only_the_image() {
        let flags = VisibilityFlags::default();
        assert!(flags.show_image);
        assert!(!flags.show_suggestion_pills);
        assert!(!flags.show_attributes);
        assert!(!flags.show_quantity_control);
        assert!(!flags.show_price);
    }
}
