// SPDX-License-Identifier: MPL-2.0
//! Gallery component: owns the fetch lifecycle, the overlay selection and the
//! per-card previews, and renders them.

use super::state::GalleryState;
use super::view::{self, CardModel, OverlayModel, PreviewView, ViewModel};
use crate::api::{ApiClient, ApiResponse, Image};
use crate::config::{DEFAULT_MAX_COLUMNS, DEFAULT_THUMBNAIL_SIZE, MAX_CONCURRENT_DOWNLOADS};
use crate::error::{Error, FetchError, GalleryError};
use crate::i18n::fluent::I18n;
use crate::media::{self, Preview};
use crate::ui::widgets::animated_spinner;
use iced::{Element, Task};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Download/decoding state of one card's image.
#[derive(Debug, Clone)]
pub enum PreviewState {
    Pending,
    Ready(Preview),
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The initial collection request settled.
    ImagesFetched(Result<ApiResponse, FetchError>),
    /// One card's image finished downloading and decoding.
    PreviewLoaded {
        id: String,
        result: Result<Preview, Error>,
    },
    /// A rendered card was clicked.
    Select(Image),
    /// The overlay close control was used.
    Dismiss,
    SpinnerTick,
}

/// Layout knobs taken from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateConfig {
    pub max_columns: u8,
    pub thumbnail_size: u32,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            max_columns: DEFAULT_MAX_COLUMNS,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

#[derive(Debug)]
pub struct State {
    gallery: GalleryState,
    previews: HashMap<String, PreviewState>,
    client: Option<ApiClient>,
    /// Shared by every preview download.
    download_slots: Arc<Semaphore>,
    fetch_started: bool,
    spinner_rotation: f32,
    config: StateConfig,
}

impl Default for State {
    fn default() -> Self {
        Self::new(StateConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        Self {
            gallery: GalleryState::default(),
            previews: HashMap::new(),
            client: None,
            download_slots: Arc::new(Semaphore::new(MAX_CONCURRENT_DOWNLOADS)),
            fetch_started: false,
            spinner_rotation: 0.0,
            config,
        }
    }

    /// Issues the one and only collection request against `endpoint`.
    ///
    /// Subsequent calls return [`Task::none`] without touching the network.
    pub fn start(&mut self, endpoint: &str) -> Task<Message> {
        if self.fetch_started {
            tracing::warn!("gallery fetch already started, ignoring duplicate start");
            return Task::none();
        }
        self.fetch_started = true;

        let client = match ApiClient::new(endpoint) {
            Ok(client) => client,
            Err(error) => {
                return Task::done(Message::ImagesFetched(Err(error)));
            }
        };
        self.client = Some(client.clone());

        tracing::info!(url = %client.images_url(), "fetching image collection");
        Task::perform(
            async move { client.fetch_images().await },
            Message::ImagesFetched,
        )
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ImagesFetched(result) => self.on_images_fetched(result),
            Message::PreviewLoaded { id, result } => {
                self.on_preview_loaded(id, result);
                Task::none()
            }
            Message::Select(image) => {
                self.gallery.select(&image);
                Task::none()
            }
            Message::Dismiss => {
                self.gallery.dismiss();
                Task::none()
            }
            Message::SpinnerTick => {
                if self.gallery.is_loading() {
                    self.spinner_rotation =
                        animated_spinner::advance(self.spinner_rotation, SPINNER_SPEED);
                }
                Task::none()
            }
        }
    }

    fn on_images_fetched(&mut self, result: Result<ApiResponse, FetchError>) -> Task<Message> {
        let outcome = match result {
            Ok(response) => {
                if !response.success {
                    tracing::warn!(reason = %response.message, "image API reported failure");
                }
                response.into_images()
            }
            Err(error) => {
                tracing::warn!(%error, "image collection request failed");
                Err(GalleryError::Fetch)
            }
        };

        if !self.gallery.settle(outcome) {
            tracing::debug!("ignoring late image collection result");
            return Task::none();
        }

        match &self.gallery {
            GalleryState::Loaded(gallery) => {
                tracing::info!(count = gallery.images().len(), "image collection loaded");
                self.request_previews()
            }
            _ => Task::none(),
        }
    }

    /// Queues one download per distinct image id; at most
    /// [`MAX_CONCURRENT_DOWNLOADS`] run at a time.
    fn request_previews(&mut self) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            return Task::none();
        };
        let Some(gallery) = self.gallery.loaded() else {
            return Task::none();
        };

        let max_edge = self.config.thumbnail_size;
        let mut tasks = Vec::new();
        for image in gallery.images() {
            let Entry::Vacant(slot) = self.previews.entry(image.id.clone()) else {
                continue;
            };
            slot.insert(PreviewState::Pending);

            let id = image.id.clone();
            let url = image.url.clone();
            tasks.push(Task::perform(
                media::load_preview(
                    client.clone(),
                    url,
                    max_edge,
                    Arc::clone(&self.download_slots),
                ),
                move |result| Message::PreviewLoaded { id, result },
            ));
        }

        Task::batch(tasks)
    }

    fn on_preview_loaded(&mut self, id: String, result: Result<Preview, Error>) {
        let Some(slot) = self.previews.get_mut(&id) else {
            tracing::debug!(%id, "dropping preview for unknown image");
            return;
        };

        *slot = match result {
            Ok(preview) => PreviewState::Ready(preview),
            Err(error) => {
                tracing::warn!(%id, %error, "could not load image preview");
                PreviewState::Failed
            }
        };
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn is_loading(&self) -> bool {
        self.gallery.is_loading()
    }

    pub fn preview(&self, id: &str) -> Option<&PreviewState> {
        self.previews.get(id)
    }

    /// Base URL of the API the gallery talks to, once started.
    pub fn base_url(&self) -> Option<&str> {
        self.client.as_ref().map(ApiClient::base_url)
    }

    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Pure projection of the current state onto one of the render branches.
    pub fn view_model<'a>(&'a self, i18n: &I18n) -> ViewModel<'a> {
        match &self.gallery {
            GalleryState::Loading => ViewModel::Loading {
                spinner_rotation: self.spinner_rotation,
            },
            GalleryState::Failed(error) => ViewModel::Failed {
                message: i18n.tr(error.i18n_key()),
            },
            GalleryState::Loaded(gallery) => {
                let fallback = i18n.tr("gallery-caption-fallback");

                let cards = gallery
                    .images()
                    .iter()
                    .map(|image| CardModel {
                        image,
                        caption: image.caption().map_or_else(|| fallback.clone(), str::to_string),
                        alt: alt_text(i18n, image),
                        preview: self.preview_view(image, |preview| &preview.thumbnail),
                    })
                    .collect();

                // A selection that no longer resolves shows no overlay
                let overlay = gallery.selected_image().map(|image| OverlayModel {
                    image,
                    alt: alt_text(i18n, image),
                    close_label: i18n.tr("gallery-overlay-close"),
                    preview: self.preview_view(image, |preview| &preview.full),
                });

                ViewModel::Grid {
                    title: i18n.tr("gallery-title"),
                    empty_label: i18n.tr("gallery-empty"),
                    max_columns: self.config.max_columns,
                    cards,
                    overlay,
                }
            }
        }
    }

    fn preview_view<'a>(
        &'a self,
        image: &Image,
        pick: impl Fn(&'a Preview) -> &'a iced::widget::image::Handle,
    ) -> PreviewView<'a> {
        match self.previews.get(&image.id) {
            Some(PreviewState::Ready(preview)) => PreviewView::Ready(pick(preview)),
            Some(PreviewState::Failed) => PreviewView::Unavailable,
            Some(PreviewState::Pending) | None => PreviewView::Pending,
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        view::view(self.view_model(i18n))
    }
}

fn alt_text(i18n: &I18n, image: &Image) -> String {
    i18n.tr_with_args("gallery-image-alt", &[("id", image.id.as_str())])
}
