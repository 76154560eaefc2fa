// SPDX-License-Identifier: MPL-2.0
//! Error panel shown in place of content that failed to load.
//!
//! ```ignore
//! ErrorDisplay::new()
//!     .title(i18n.tr("listings-error-title"))
//!     .message(i18n.tr("listings-error-message"))
//!     .details(err.to_string())
//!     .action(i18n.tr("listings-reload"), Message::ReloadPressed)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: None,
            action: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Technical details in a smaller, muted line.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(Text::new("⚠").size(typography::TITLE_LG).color(palette::ERROR_500));

        if let Some(title) = self.title {
            content = content.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .color(palette::ERROR_500),
            );
        }
        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY));
        }
        if let Some(details) = self.details {
            content = content.push(
                text(details)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        }
        if let Some((label, message)) = self.action {
            content = content.push(
                button(Text::new(label))
                    .on_press(message)
                    .padding([spacing::XS, spacing::MD])
                    .style(button_styles::primary),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_all_parts() {
        let display = ErrorDisplay::new()
            .title("Error loading listings")
            .message("Please try again later.")
            .details("Network Error: refused")
            .action("Reload", 1u8);
        assert_eq!(display.title.as_deref(), Some("Error loading listings"));
        assert_eq!(display.action.as_ref().map(|(_, m)| *m), Some(1));
        let _ = display.view();
    }
}
