// SPDX-License-Identifier: MPL-2.0
//! Gallery lifecycle state.
//!
//! The gallery is in exactly one of three states. It starts in
//! [`GalleryState::Loading`], settles once into either
//! [`GalleryState::Failed`] or [`GalleryState::Loaded`], and never goes back.

use crate::api::Image;
use crate::error::GalleryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryState {
    #[default]
    Loading,
    Failed(GalleryError),
    Loaded(LoadedGallery),
}

/// The fetched image list plus the current overlay selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedGallery {
    images: Vec<Image>,
    /// Id of the image shown in the overlay.
    selected: Option<String>,
}

impl LoadedGallery {
    #[must_use]
    pub fn new(images: Vec<Image>) -> Self {
        Self {
            images,
            selected: None,
        }
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Marks `image` as the overlay subject.
    ///
    /// Membership is not checked here; [`Self::selected_image`] resolves the
    /// selection against the list every time it is read.
    pub fn select(&mut self, image: &Image) {
        self.selected = Some(image.id.clone());
    }

    /// Clears the selection. Calling it with nothing selected is a no-op.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected image, if the selection still names an image in the list.
    pub fn selected_image(&self) -> Option<&Image> {
        let id = self.selected.as_deref()?;
        self.images.iter().find(|image| image.id == id)
    }
}

impl GalleryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GalleryState::Loading)
    }

    pub fn error(&self) -> Option<&GalleryError> {
        match self {
            GalleryState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedGallery> {
        match self {
            GalleryState::Loaded(gallery) => Some(gallery),
            _ => None,
        }
    }

    /// Applies the outcome of the initial fetch.
    ///
    /// Only the first settlement counts: returns `false` and leaves the state
    /// untouched when the gallery has already left [`GalleryState::Loading`].
    pub fn settle(&mut self, outcome: Result<Vec<Image>, GalleryError>) -> bool {
        if !self.is_loading() {
            return false;
        }

        *self = match outcome {
            Ok(images) => GalleryState::Loaded(LoadedGallery::new(images)),
            Err(error) => GalleryState::Failed(error),
        };
        true
    }

    /// Selects `image` for the overlay. Ignored unless the gallery is loaded.
    pub fn select(&mut self, image: &Image) {
        if let GalleryState::Loaded(gallery) = self {
            gallery.select(image);
        }
    }

    /// Clears the overlay selection, if any.
    pub fn dismiss(&mut self) {
        if let GalleryState::Loaded(gallery) = self {
            gallery.dismiss();
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

    #[test]
    fn starts_loading() {
        let state = GalleryState::default();
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(state.loaded().is_none());
    }

    #[test]
    fn settle_success_loads_images_without_selection() {
        let mut state = GalleryState::default();
        assert!(state.settle(Ok(vec![image("a"), image("b")])));

        let loaded = state.loaded().expect("loaded");
        assert_eq!(loaded.images().len(), 2);
        assert!(loaded.selected_image().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn settle_failure_records_error() {
        let mut state = GalleryState::default();
        assert!(state.settle(Err(GalleryError::Rejected)));
        assert_eq!(state.error(), Some(&GalleryError::Rejected));
        assert!(!state.is_loading());
    }

    #[test]
    fn second_settlement_is_ignored() {
        let mut state = GalleryState::default();
        state.settle(Ok(vec![image("a")]));
        let snapshot = state.clone();

        assert!(!state.settle(Err(GalleryError::Fetch)));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn select_then_dismiss_restores_grid() {
        let mut state = GalleryState::default();
        state.settle(Ok(vec![image("a"), image("b")]));
        let before = state.clone();

        let target = image("b");
        state.select(&target);
        assert_eq!(
            state.loaded().and_then(LoadedGallery::selected_image),
            Some(&target)
        );

        state.dismiss();
        assert_eq!(state, before);
    }

    #[test]
    fn dismiss_without_selection_is_noop() {
        let mut state = GalleryState::default();
        state.settle(Ok(vec![image("a")]));
        let before = state.clone();

        state.dismiss();
        assert_eq!(state, before);
    }

    #[test]
    fn dismiss_while_loading_is_noop() {
        let mut state = GalleryState::default();
        state.dismiss();
        assert!(state.is_loading());
    }

    #[test]
    fn select_while_loading_is_ignored() {
        let mut state = GalleryState::default();
        state.select(&image("a"));
        assert_eq!(state, GalleryState::Loading);
    }

    #[test]
    fn selection_of_unknown_image_does_not_resolve() {
        let mut gallery = LoadedGallery::new(vec![image("a")]);
        gallery.select(&image("ghost"));

        assert_eq!(gallery.selected_id(), Some("ghost"));
        assert!(gallery.selected_image().is_none());
    }
}
