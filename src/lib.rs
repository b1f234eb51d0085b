// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a single-page image gallery built with the Iced GUI framework.
//!
//! It fetches an image collection from a remote JSON API once at startup,
//! shows it as a responsive grid of captioned cards, and opens a full-size
//! overlay for the selected image.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
