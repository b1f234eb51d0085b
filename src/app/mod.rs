// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, theming and the gallery
//! screen, and translates top-level messages into gallery updates.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, component::StateConfig};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    /// Resolved once at startup; `System` mode queries the OS here only.
    theme: Theme,
    /// Translated notice shown above the gallery when settings.toml was unusable.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("gallery_loading", &self.gallery.is_loading())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("application booted twice, starting with default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config file and starts the gallery fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (mut app, task) = Self::with_config(flags, config);

        if let Some(key) = config_warning {
            app.set_config_warning(&key);
        }

        (app, task)
    }

    /// Records a config-load warning by its i18n key for display.
    fn set_config_warning(&mut self, key: &str) {
        let message = self.i18n.tr(key);
        tracing::warn!(warning = %message, "continuing with default settings");
        self.config_warning = Some(message);
    }

    /// Builds the application from already-loaded settings.
    ///
    /// The returned task performs the single collection request.
    pub fn with_config(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);

        let endpoint = flags
            .endpoint
            .unwrap_or_else(|| config.gallery.endpoint_or_default().to_string());

        let mut gallery = gallery::State::new(StateConfig {
            max_columns: config.gallery.max_columns_clamped(),
            thumbnail_size: config.gallery.thumbnail_size_clamped(),
        });
        let task = gallery.start(&endpoint).map(Message::Gallery);

        tracing::debug!(
            locale = %i18n.current_locale(),
            %endpoint,
            "application initialized"
        );

        let theme_mode = config.general.theme_mode;
        let app = App {
            i18n,
            gallery,
            theme_mode,
            theme: theme_mode.to_theme(),
            config_warning: None,
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.gallery.is_loading()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.gallery.handle_message(message).map(Message::Gallery),
            Message::Tick(_) => self
                .gallery
                .handle_message(gallery::Message::SpinnerTick)
                .map(Message::Gallery),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            config_warning: self.config_warning.as_deref(),
        })
    }

    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResponse, Image, ImagesPayload};
    use crate::config::GalleryConfig;
    use crate::ui::gallery::GalleryState;

    // Nothing listens on port 9; the fetch task is never executed in these tests
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    fn app_with(flags: Flags, config: Config) -> App {
        let (app, _task) = App::with_config(
            Flags {
                endpoint: flags.endpoint.or_else(|| Some(UNREACHABLE.into())),
                ..flags
            },
            config,
        );
        app
    }

    fn loaded_response(ids: &[&str]) -> ApiResponse {
        ApiResponse {
            success: true,
            message: String::new(),
            data: Some(ImagesPayload {
                images: ids
                    .iter()
                    .map(|id| Image {
                        id: (*id).to_string(),
                        url: format!("https://img.test/{id}.png"),
                        prompt: None,
                    })
                    .collect(),
            }),
        }
    }

    #[test]
    fn starts_in_loading_state() {
        let app = app_with(Flags::default(), Config::default());
        assert!(app.gallery().is_loading());
    }

    #[test]
    fn title_is_localized() {
        let app = app_with(
            Flags {
                lang: Some("en-US".into()),
                ..Flags::default()
            },
            Config::default(),
        );
        assert_eq!(app.title(), "IcedGallery");
    }

    #[test]
    fn theme_mode_comes_from_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        let app = app_with(Flags::default(), config);
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn theme_is_resolved_at_startup() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;

        let mut app = app_with(Flags::default(), config);
        assert_eq!(app.theme, Theme::Light);

        // Frames keep returning the stored theme without re-resolving the mode
        app.theme_mode = ThemeMode::Dark;
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn config_warning_is_translated_and_kept_for_display() {
        let mut app = app_with(
            Flags {
                lang: Some("en-US".into()),
                ..Flags::default()
            },
            Config::default(),
        );
        assert!(app.config_warning.is_none());

        app.set_config_warning("notification-config-load-error");
        assert_eq!(
            app.config_warning.as_deref(),
            Some("Your settings could not be read; defaults are in use.")
        );
        let _ = app.view();
    }

    #[test]
    fn gallery_messages_are_forwarded() {
        let mut app = app_with(Flags::default(), Config::default());
        let _ = app.update(Message::Gallery(gallery::Message::ImagesFetched(Ok(
            loaded_response(&["a", "b"]),
        ))));

        match app.gallery().gallery() {
            GalleryState::Loaded(gallery) => assert_eq!(gallery.images().len(), 2),
            other => panic!("expected loaded gallery, got {other:?}"),
        }
    }

    #[test]
    fn tick_advances_spinner_while_loading() {
        let mut app = app_with(Flags::default(), Config::default());
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.gallery().spinner_rotation() > 0.0);
    }

    #[test]
    fn failed_fetch_settles_through_update() {
        let mut app = app_with(Flags::default(), Config::default());

        // The fetch task would deliver this message; feed it by hand
        let _ = app.update(Message::Gallery(gallery::Message::ImagesFetched(Err(
            crate::error::FetchError::Status(503),
        ))));
        assert!(app.gallery().gallery().error().is_some());
    }

    #[test]
    fn cli_endpoint_overrides_config() {
        let config = Config {
            gallery: GalleryConfig {
                endpoint: Some("http://127.0.0.1:1".into()),
                ..GalleryConfig::default()
            },
            ..Config::default()
        };
        let app = app_with(
            Flags {
                endpoint: Some(UNREACHABLE.into()),
                ..Flags::default()
            },
            config,
        );
        assert_eq!(app.gallery().base_url(), Some(UNREACHABLE));
    }
}
