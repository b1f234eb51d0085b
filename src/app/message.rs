// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and startup flags.

use crate::ui::gallery;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Animation frame while the gallery is loading.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base URL, takes precedence over the config file.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
