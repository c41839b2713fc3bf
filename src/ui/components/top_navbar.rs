// SPDX-License-Identifier: MPL-2.0
//! Decorated top bar used by the tab screens.
//!
//! The mobile app layers a blurred photograph behind this bar; here the same
//! silhouette is a darkened container with a light hairline border.

use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::container;
use iced::{Element, Length};

/// Wraps `content` in the navbar chrome.
pub fn view<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .style(styles::container::navbar)
        .padding([spacing::MD, spacing::LG])
        .width(Length::Fill)
        .into()
}
