// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery.
//!
//! Rendering happens in two steps: [`super::component::State::view_model`]
//! turns state into a plain [`ViewModel`] (easy to assert on in tests), and
//! [`view`] turns that model into Iced widgets.

use super::component::Message;
use super::layout;
use crate::api::Image;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image as ImageWidget};
use iced::widget::{
    button, opaque, responsive, text, Column, Container, Row, Scrollable, Stack, Text,
};
use iced::{ContentFit, Element, Length, Size, Theme};

/// What to show where an image goes.
#[derive(Debug, Clone)]
pub enum PreviewView<'a> {
    /// Still downloading or decoding.
    Pending,
    Ready(&'a Handle),
    /// Download or decoding failed; only the alt text is shown.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct CardModel<'a> {
    pub image: &'a Image,
    /// Prompt, or the localized fallback when the prompt is absent or empty.
    pub caption: String,
    pub alt: String,
    pub preview: PreviewView<'a>,
}

#[derive(Debug, Clone)]
pub struct OverlayModel<'a> {
    pub image: &'a Image,
    pub alt: String,
    pub close_label: String,
    pub preview: PreviewView<'a>,
}

/// Exactly one of the three mutually exclusive render branches.
#[derive(Debug, Clone)]
pub enum ViewModel<'a> {
    Loading {
        spinner_rotation: f32,
    },
    Failed {
        message: String,
    },
    Grid {
        title: String,
        empty_label: String,
        max_columns: u8,
        cards: Vec<CardModel<'a>>,
        overlay: Option<OverlayModel<'a>>,
    },
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match model {
        ViewModel::Loading { spinner_rotation } => loading_view(spinner_rotation),
        ViewModel::Failed { message } => ErrorDisplay::new(ErrorSeverity::Error)
            .message(message)
            .view(),
        ViewModel::Grid {
            title,
            empty_label,
            max_columns,
            cards,
            overlay,
        } => {
            let page = responsive(move |size: Size| {
                let columns = layout::columns_for_width(size.width, max_columns);
                grid_page(&title, &empty_label, &cards, columns)
            });

            match overlay {
                Some(overlay) => Stack::new()
                    .push(page)
                    .push(overlay_view(overlay))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
                None => page.into(),
            }
        }
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn loading_view<'a>(spinner_rotation: f32) -> Element<'a, Message> {
    Container::new(AnimatedSpinner::new(palette::GRAY_400, spinner_rotation).into_element())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn grid_page<'a>(
    title: &str,
    empty_label: &str,
    cards: &[CardModel<'a>],
    columns: usize,
) -> Element<'a, Message> {
    let heading = Container::new(Text::new(title.to_string()).size(typography::TITLE_LG))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let body: Element<'a, Message> = if cards.is_empty() {
        Container::new(
            Text::new(empty_label.to_string())
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
    } else {
        let mut grid = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .max_width(sizing::GRID_MAX_WIDTH);

        for (start, end) in layout::rows(cards.len(), columns) {
            let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
            for card in &cards[start..end] {
                row = row.push(card_view(card));
            }
            // Pad the last row so every card keeps the same width
            for _ in (end - start)..columns {
                row = row.push(Container::new(Column::new()).width(Length::FillPortion(1)));
            }
            grid = grid.push(row);
        }

        Container::new(grid)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    };

    let page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(heading)
        .push(body);

    Scrollable::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card_view<'a>(card: &CardModel<'a>) -> Element<'a, Message> {
    let picture = picture(
        &card.preview,
        &card.alt,
        ContentFit::Cover,
        Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
    );

    let caption = Container::new(
        Text::new(capitalize_words(&card.caption)).size(typography::BODY_LG),
    )
    .padding(spacing::MD)
    .width(Length::Fill);

    button(Column::new().push(picture).push(caption))
        .padding(0)
        .width(Length::FillPortion(1))
        .style(styles::button::card)
        .on_press(Message::Select(card.image.clone()))
        .into()
}

/// Uppercases the first letter of every whitespace-separated word.
fn capitalize_words(caption: &str) -> String {
    let mut capitalized = String::with_capacity(caption.len());
    let mut at_word_start = true;

    for c in caption.chars() {
        if at_word_start {
            capitalized.extend(c.to_uppercase());
        } else {
            capitalized.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    capitalized
}

fn overlay_view<'a>(overlay: OverlayModel<'a>) -> Element<'a, Message> {
    let glyph = Container::new(Text::new(overlay.close_label).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let close = button(glyph)
        .padding(0)
        .width(Length::Fixed(sizing::CLOSE_BUTTON))
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .style(styles::button::overlay_close)
        .on_press(Message::Dismiss);

    let picture = picture(
        &overlay.preview,
        &overlay.alt,
        ContentFit::Contain,
        Length::Fill,
    );

    let layout = Column::new()
        .spacing(spacing::XS)
        .push(
            Container::new(close)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .push(
            Container::new(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    opaque(
        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .style(styles::container::backdrop),
    )
}

fn picture<'a>(
    preview: &PreviewView<'a>,
    alt: &str,
    fit: ContentFit,
    height: Length,
) -> Element<'a, Message> {
    match preview {
        PreviewView::Ready(handle) => ImageWidget::new((*handle).clone())
            .width(Length::Fill)
            .height(height)
            .content_fit(fit)
            .into(),
        PreviewView::Pending => Container::new(Column::new())
            .width(Length::Fill)
            .height(height)
            .style(styles::container::placeholder)
            .into(),
        PreviewView::Unavailable => {
            Container::new(Text::new(alt.to_string()).size(typography::BODY))
                .width(Length::Fill)
                .height(height)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::placeholder)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str) -> Image {
        Image {
            id: id.to_string(),
            url: format!("https://img.test/{id}.png"),
            prompt: None,
        }
    }

    fn card(image: &Image) -> CardModel<'_> {
        CardModel {
            image,
            caption: "a quiet harbor".into(),
            alt: format!("Image {}", image.id),
            preview: PreviewView::Pending,
        }
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("a quiet harbor"), "A Quiet Harbor");
        assert_eq!(capitalize_words("  two  spaces"), "  Two  Spaces");
        assert_eq!(capitalize_words("éclair au café"), "Éclair Au Café");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn capitalize_leaves_inner_letters_alone() {
        assert_eq!(capitalize_words("iPhone on a DESK"), "IPhone On A DESK");
    }

    #[test]
    fn partial_last_row_is_padded() {
        let images: Vec<_> = ["1", "2", "3", "4"].into_iter().map(image).collect();
        let cards: Vec<_> = images.iter().map(card).collect();

        for columns in 1..=3 {
            let _page = grid_page("Image Gallery", "Nothing yet", &cards, columns);
        }
    }

    #[test]
    fn empty_grid_builds() {
        let _page = grid_page("Image Gallery", "Nothing yet", &[], 3);
    }

    #[test]
    fn every_preview_state_builds() {
        let handle = Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        for preview in [
            PreviewView::Pending,
            PreviewView::Ready(&handle),
            PreviewView::Unavailable,
        ] {
            let _cover = picture(&preview, "Image 1", ContentFit::Cover, Length::Fill);
        }
    }

    #[test]
    fn overlay_builds_with_close_control() {
        let subject = image("7");
        let _overlay = overlay_view(OverlayModel {
            image: &subject,
            alt: "Image 7".into(),
            close_label: "×".into(),
            preview: PreviewView::Unavailable,
        });
    }
}
