// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page surface behind the grid and the full-screen states.
pub fn page(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let background = if extended.is_dark {
        extended.background.base.color
    } else {
        palette::GRAY_100
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Dimmed full-screen layer behind the enlarged image.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Neutral box shown in place of an image that is not available (yet).
pub fn placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.strong.color)),
        text_color: Some(extended.background.strong.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
