// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while the image collection is being fetched.
//!
//! The widget is stateless: the caller owns the rotation angle and advances it
//! on every tick, so redraws are driven by the app's tick subscription.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;

/// Advances `rotation` by `step` radians, wrapping into `[0, TAU)`.
#[must_use]
pub fn advance(rotation: f32, step: f32) -> f32 {
    (rotation + step).rem_euclid(TAU)
}

pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self { rotation, color }
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_XL))
            .height(Length::Fixed(sizing::ICON_XL))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color {
                    a: TRACK_ALPHA,
                    ..self.color
                }),
        );

        // Half-circle arc starting at 12 o'clock, rotated by the current angle
        let start = self.rotation - FRAC_PI_2;
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_past_full_turn() {
        let next = advance(TAU - 0.05, 0.1);
        assert!((next - 0.05).abs() < 1e-4);
    }

    #[test]
    fn spinner_builds_fixed_size_canvas() {
        let _element: iced::Element<'_, ()> =
            AnimatedSpinner::new(Color::WHITE, FRAC_PI_2).into_element();
    }

    #[test]
    fn advance_accumulates_small_steps() {
        let next = advance(1.0, 0.25);
        assert!((next - 1.25).abs() < f32::EPSILON);
    }
}
