// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Endpoint**: Remote image collection location
//! - **Grid**: Column bounds and responsive breakpoints
//! - **Thumbnail**: Preview size bounds

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Default base URL of the image API.
pub const DEFAULT_ENDPOINT: &str = crate::api::DEFAULT_BASE_URL;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default (and maximum) number of grid columns on wide windows.
pub const DEFAULT_MAX_COLUMNS: u8 = 3;

/// Minimum allowed column count.
pub const MIN_COLUMNS: u8 = 1;

/// Maximum allowed column count.
pub const MAX_COLUMNS: u8 = 3;

/// Window width (logical px) from which two columns are used.
pub const BREAKPOINT_MEDIUM: f32 = 768.0;

/// Window width (logical px) from which three columns are used.
pub const BREAKPOINT_WIDE: f32 = 1024.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default longest edge of grid thumbnails, in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 512;

/// Minimum thumbnail edge.
pub const MIN_THUMBNAIL_SIZE: u32 = 64;

/// Maximum thumbnail edge.
pub const MAX_THUMBNAIL_SIZE: u32 = 1024;

// ==========================================================================
// Download Defaults
// ==========================================================================

/// Image downloads allowed in flight at once.
pub const MAX_CONCURRENT_DOWNLOADS: usize = 6;

const _: () = {
    assert!(MAX_CONCURRENT_DOWNLOADS > 0);
    assert!(MIN_COLUMNS <= DEFAULT_MAX_COLUMNS && DEFAULT_MAX_COLUMNS <= MAX_COLUMNS);
    assert!(BREAKPOINT_MEDIUM < BREAKPOINT_WIDE);
    assert!(MIN_THUMBNAIL_SIZE <= DEFAULT_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
};
