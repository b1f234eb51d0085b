// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Consistent error presentation with severity colors

pub mod error_display;
