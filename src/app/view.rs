// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::gallery;
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    /// Already translated config-load notice, if any.
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(warning) = ctx.config_warning {
        column = column.push(
            ErrorDisplay::new(ErrorSeverity::Warning)
                .message(warning)
                .inline()
                .view(),
        );
    }

    column = column.push(ctx.gallery.view(ctx.i18n).map(Message::Gallery));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
