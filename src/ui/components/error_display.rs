// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Shows a severity-colored message, either centered in all available space
//! or as a compact inline banner.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .message(i18n.tr("error-fetch-images"))
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    #[default]
    Error,
    Warning,
}

impl ErrorSeverity {
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay {
    severity: ErrorSeverity,
    message: Option<String>,
    inline: bool,
}

impl ErrorDisplay {
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Shrinks vertically to the message instead of filling the screen.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Renders the message block.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let accent = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center);

        if let Some(message) = self.message {
            content = content.push(
                Text::new(message)
                    .size(typography::BODY_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );
        }

        let height = if self.inline {
            Length::Shrink
        } else {
            Length::Fill
        };

        Container::new(content)
            .width(Length::Fill)
            .height(height)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_severity_colors_are_distinct() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Warning.color());
    }

    #[test]
    fn builder_keeps_fields() {
        let display = ErrorDisplay::new(ErrorSeverity::Warning)
            .message("Something went wrong");

        assert_eq!(display.severity, ErrorSeverity::Warning);
        assert_eq!(display.message.as_deref(), Some("Something went wrong"));
        assert!(!display.inline);
    }

    #[test]
    fn inline_banner_builds() {
        let display = ErrorDisplay::new(ErrorSeverity::Warning)
            .message("Settings ignored")
            .inline();
        assert!(display.inline);

        let _element: Element<'_, ()> = display.view();
    }

    #[test]
    fn default_severity_is_error() {
        assert_eq!(ErrorDisplay::default().severity, ErrorSeverity::Error);
    }
}
