// SPDX-License-Identifier: MPL-2.0
//! Image data handling for remote gallery entries.
//!
//! The gallery never touches the filesystem: every image arrives as bytes over
//! HTTP and is turned into Iced handles here.

pub mod preview;

pub use preview::{decode_preview, load_preview, Preview};
