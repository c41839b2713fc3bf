// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.

pub mod alert;
pub mod app_button;
pub mod product_card;
pub mod progress_dots;
pub mod text_field;
pub mod top_navbar;

pub use alert::Alert;
pub use app_button::AppButton;
pub use product_card::{
    Attribute, CardState, CardType, ProductCard, SuggestionPill, VisibilityFlags,
};
pub use text_field::TextField;
