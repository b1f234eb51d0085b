// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Clickable gallery card. Lifts (larger shadow, accent border) on hover.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let surface = if extended.is_dark {
        extended.background.weak.color
    } else {
        WHITE
    };

    let (border_color, card_shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::PRIMARY_400, shadow::LG),
        _ => (Color::TRANSPARENT, shadow::MD),
    };

    button::Style {
        background: Some(Background::Color(surface)),
        text_color: extended.background.base.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: card_shadow,
        snap: true,
    }
}

/// Close control drawn on top of the dark backdrop.
pub fn overlay_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_hover_uses_accent_border() {
        let idle = card(&Theme::Light, button::Status::Active);
        let hovered = card(&Theme::Light, button::Status::Hovered);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
        assert_eq!(hovered.border.color, palette::PRIMARY_400);
        assert!(hovered.shadow.blur_radius > idle.shadow.blur_radius);
    }

    #[test]
    fn close_button_text_is_always_white() {
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
        ] {
            assert_eq!(overlay_close(&Theme::Dark, status).text_color, WHITE);
        }
    }
}
