// SPDX-License-Identifier: MPL-2.0
//! Full-width action button with primary/secondary variants.
//!
//! A loading button shows an ellipsis and ignores presses; a disabled one
//! renders through the style's disabled status (no `on_press` attached).

use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
}

pub struct AppButton<Message> {
    label: String,
    variant: Variant,
    enabled: bool,
    loading: bool,
    on_press: Option<Message>,
}

impl<Message> AppButton<Message> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            enabled: true,
            loading: false,
            on_press: None,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }
}

impl<'a, Message: Clone + 'a> AppButton<Message> {
    pub fn view(self) -> Element<'a, Message> {
        let label = if self.loading {
            "…".to_string()
        } else {
            self.label
        };

        let content = container(text(label).size(typography::B1))
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        let mut widget = button(content)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::BUTTON_MIN_HEIGHT));

        widget = match self.variant {
            Variant::Primary => widget.style(styles::button::primary),
            Variant::Secondary => widget.style(styles::button::secondary),
        };

        if self.enabled && !self.loading {
            widget = widget.on_press_maybe(self.on_press);
        }

        widget.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Pressed,
    }

    #[test]
    fn builder_view_smoke() {
        let _primary: Element<'_, TestMessage> = AppButton::new("Sign in")
            .on_press(TestMessage::Pressed)
            .view();
        let _loading: Element<'_, TestMessage> = AppButton::new("Sign in")
            .loading(true)
            .on_press(TestMessage::Pressed)
            .view();
        let _disabled: Element<'_, TestMessage> = AppButton::new("Next")
            .variant(Variant::Secondary)
            .enabled(false)
            .view();
    }
}
