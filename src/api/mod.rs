// SPDX-License-Identifier: MPL-2.0
//! Client for the remote image collection endpoint.
//!
//! The gallery issues a single `GET <base>/v1/image/all` at startup and then
//! one `GET <image.url>` per card to obtain preview bytes. No retries, no
//! client-side timeout: a request settles when the transport settles.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::api::ApiClient;
//!
//! # async fn demo() -> Result<(), iced_gallery::error::FetchError> {
//! let client = ApiClient::new("https://escapechain.onrender.com")?;
//! let response = client.fetch_images().await?;
//! println!("{} images", response.data.map_or(0, |d| d.images.len()));
//! # Ok(())
//! # }
//! ```

use crate::error::{FetchError, GalleryError};
use serde::{Deserialize, Serialize};

/// Base URL used when neither the CLI nor the config file provides one.
pub const DEFAULT_BASE_URL: &str = "https://escapechain.onrender.com";

/// Path of the image collection resource, relative to the base URL.
pub const IMAGES_PATH: &str = "/v1/image/all";

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// A single gallery entry as delivered by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Image {
    /// Caption to show under the card, or `None` when the prompt is absent or empty.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|prompt| !prompt.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesPayload {
    pub images: Vec<Image>,
}

/// Envelope returned by `/v1/image/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Absent on most failure payloads.
    #[serde(default)]
    pub data: Option<ImagesPayload>,
}

impl ApiResponse {
    /// Interprets the envelope.
    ///
    /// A successful envelope without `data` cannot be rendered and counts as
    /// a malformed body rather than an application-reported failure.
    pub fn into_images(self) -> Result<Vec<Image>, GalleryError> {
        match (self.success, self.data) {
            (true, Some(payload)) => Ok(payload.images),
            (true, None) => Err(GalleryError::Fetch),
            (false, _) => Err(GalleryError::Rejected),
        }
    }
}

/// Thin wrapper around a shared `reqwest::Client` bound to one base URL.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the image collection resource.
    #[must_use]
    pub fn images_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), IMAGES_PATH)
    }

    /// Fetches and decodes the image collection envelope.
    ///
    /// Non-2xx responses are reported as [`FetchError::Status`] without
    /// looking at the body.
    pub async fn fetch_images(&self) -> Result<ApiResponse, FetchError> {
        let url = self.images_url();
        tracing::debug!(%url, "requesting image collection");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.json::<ApiResponse>().await?;
        Ok(body)
    }

    /// Downloads the raw bytes behind an image URL.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_url_joins_base_and_path() {
        let client = ApiClient::new("https://example.test").expect("client");
        assert_eq!(client.images_url(), "https://example.test/v1/image/all");
    }

    #[test]
    fn images_url_ignores_trailing_slash() {
        let client = ApiClient::new("https://example.test/").expect("client");
        assert_eq!(client.images_url(), "https://example.test/v1/image/all");
    }

    #[test]
    fn successful_envelope_yields_images_in_order() {
        let body = r#"{
            "success": true,
            "message": "ok",
            "data": { "images": [
                { "id": "a", "url": "https://img.test/a.png", "prompt": "a red fox" },
                { "id": "b", "url": "https://img.test/b.png" }
            ] }
        }"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");
        let images = response.into_images().expect("images");

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "a");
        assert_eq!(images[0].caption(), Some("a red fox"));
        assert_eq!(images[1].id, "b");
        assert_eq!(images[1].prompt, None);
    }

    #[test]
    fn failure_envelope_without_data_is_rejected() {
        let body = r#"{ "success": false, "message": "database offline" }"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");
        assert_eq!(response.message, "database offline");
        assert_eq!(response.into_images(), Err(GalleryError::Rejected));
    }

    #[test]
    fn failure_envelope_with_data_is_still_rejected() {
        let body = r#"{ "success": false, "message": "", "data": { "images": [] } }"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");
        assert_eq!(response.into_images(), Err(GalleryError::Rejected));
    }

    #[test]
    fn success_without_data_counts_as_fetch_error() {
        let body = r#"{ "success": true, "message": "ok" }"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");
        assert_eq!(response.into_images(), Err(GalleryError::Fetch));
    }

    #[test]
    fn missing_message_defaults_to_empty() {
        let body = r#"{ "success": true, "data": { "images": [] } }"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");
        assert!(response.message.is_empty());
    }

    #[test]
    fn empty_prompt_has_no_caption() {
        let image = Image {
            id: "x".into(),
            url: "https://img.test/x.png".into(),
            prompt: Some(String::new()),
        };
        assert_eq!(image.caption(), None);
    }

    #[test]
    fn image_without_url_fails_to_decode() {
        let body = r#"{ "success": true, "data": { "images": [ { "id": "a" } ] } }"#;
        assert!(serde_json::from_str::<ApiResponse>(body).is_err());
    }
}
