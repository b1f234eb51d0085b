// SPDX-License-Identifier: MPL-2.0
//! Image gallery screen.
//!
//! - [`state`] - Loading / failed / loaded lifecycle and overlay selection
//! - [`component`] - Message handling, network tasks and previews
//! - [`layout`] - Column count per window width
//! - [`view`] - View model and widget tree

pub mod component;
pub mod layout;
pub mod state;
pub mod view;

pub use component::{Message, State};
pub use state::GalleryState;
