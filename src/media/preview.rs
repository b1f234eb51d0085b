// SPDX-License-Identifier: MPL-2.0
//! Remote image previews: download once, decode off the UI thread, keep a
//! full-size handle for the overlay and a bounded thumbnail for the grid.

use crate::api::ApiClient;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Decoded image ready to be rendered by Iced.
#[derive(Debug, Clone)]
pub struct Preview {
    /// Original encoded bytes, decoded lazily by the renderer.
    pub full: image::Handle,
    /// Downscaled RGBA copy whose longest edge does not exceed the requested size.
    pub thumbnail: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Computes the thumbnail dimensions that fit `width x height` into a square
/// of `max_edge`, preserving aspect ratio. Images already inside the bound
/// are never upscaled.
#[must_use]
pub fn thumbnail_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width <= max_edge && height <= max_edge {
        return (width, height);
    }

    let scale = f64::from(max_edge) / f64::from(width.max(height));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = |value: u32| ((f64::from(value) * scale).round() as u32).max(1);

    (scaled(width), scaled(height))
}

/// Decodes encoded image bytes into a [`Preview`].
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not a supported image or
/// have zero dimensions.
pub fn decode_preview(bytes: Vec<u8>, max_edge: u32) -> Result<Preview> {
    let decoded = image_rs::load_from_memory(&bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    let (thumb_width, thumb_height) = thumbnail_dimensions(width, height, max_edge);
    let thumbnail = if (thumb_width, thumb_height) == (width, height) {
        decoded.to_rgba8()
    } else {
        decoded
            .resize(
                thumb_width,
                thumb_height,
                image_rs::imageops::FilterType::Triangle,
            )
            .to_rgba8()
    };
    let (thumb_width, thumb_height) = thumbnail.dimensions();

    Ok(Preview {
        full: image::Handle::from_bytes(bytes),
        thumbnail: image::Handle::from_rgba(thumb_width, thumb_height, thumbnail.into_vec()),
        width,
        height,
    })
}

/// Downloads `url` and decodes it on the blocking pool.
///
/// A permit from `slots` is held until decoding finishes, bounding both open
/// connections and in-flight decode buffers.
pub async fn load_preview(
    client: ApiClient,
    url: String,
    max_edge: u32,
    slots: Arc<Semaphore>,
) -> Result<Preview> {
    let _permit = slots
        .acquire_owned()
        .await
        .map_err(|e| Error::Io(e.to_string()))?;

    let bytes = client.fetch_bytes(&url).await?;

    tokio::task::spawn_blocking(move || decode_preview(bytes, max_edge))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}
