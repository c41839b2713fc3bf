// SPDX-License-Identifier: MPL-2.0
//! Labeled form input with an optional error line.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, text_input, Column};
use iced::{Element, Length};

pub struct TextField<'a, Message> {
    placeholder: String,
    value: String,
    label: Option<String>,
    error: Option<String>,
    secure: bool,
    enabled: bool,
    on_input: Option<Box<dyn Fn(String) -> Message + 'a>>,
    on_submit: Option<Message>,
}

impl<'a, Message> TextField<'a, Message> {
    pub fn new(placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: value.into(),
            label: None,
            error: None,
            secure: false,
            enabled: true,
            on_input: None,
            on_submit: None,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    #[must_use]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// A disabled field renders its value read-only (pre-filled pincode and
    /// city on the address form).
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn on_input(mut self, to_message: impl Fn(String) -> Message + 'a) -> Self {
        self.on_input = Some(Box::new(to_message));
        self
    }

    #[must_use]
    pub fn on_submit(mut self, message: Message) -> Self {
        self.on_submit = Some(message);
        self
    }
}

impl<'a, Message: Clone + 'a> TextField<'a, Message> {
    pub fn view(self) -> Element<'a, Message> {
        let TextField {
            placeholder,
            value,
            label,
            error,
            secure,
            enabled,
            on_input,
            on_submit,
        } = self;

        let has_error = error.is_some();

        let mut input = text_input(&placeholder, &value)
            .secure(secure)
            .padding(14)
            .size(typography::B1)
            .width(Length::Fill);

        if enabled {
            if let Some(on_input) = on_input {
                input = input.on_input(move |text| on_input(text));
            }
            if let Some(on_submit) = on_submit {
                input = input.on_submit(on_submit);
            }
        }

        // Error styling wins over the focus ring.
        input = if has_error {
            input.style(styles::text_input::form_error)
        } else if enabled {
            input.style(styles::text_input::form)
        } else {
            input.style(styles::text_input::form_disabled)
        };

        let mut column = Column::new().spacing(spacing::XS);
        if let Some(label) = label {
            column = column.push(
                text(label)
                    .size(typography::B2)
                    .color(palette::HEADING),
            );
        }
        column = column.push(input);
        if let Some(error) = error {
            column = column.push(
                text(error)
                    .size(typography::B3)
                    .color(palette::RED_200),
            );
        }

        column.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Changed(String),
    }

    #[test]
    fn builder_view_smoke() {
        let _plain: Element<'_, TestMessage> =
            TextField::new("Enter your email address", "lucy@example.com")
                .on_input(TestMessage::Changed)
                .view();
        let _secure: Element<'_, TestMessage> = TextField::new("Enter your password", "")
            .secure(true)
            .on_input(TestMessage::Changed)
            .view();
        let _read_only: Element<'_, TestMessage> = TextField::new("Pincode", "41001")
            .enabled(false)
            .view();
        let _with_error: Element<'_, TestMessage> = TextField::new("Enter pincode", "")
            .error("Please fill in all fields")
            .on_input(TestMessage::Changed)
            .view();
    }
}
