use config::{Config, Environment, File};
use serde::Deserialize;

use crate::image_stream::mime::MIME_TYPE_RAW_IMAGE;

/// Top-level settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub detector: DetectorSettings,
}

/// Archive type detection
#[derive(Debug, Deserialize, Clone)]
pub struct DetectorSettings {
    /// Returned when neither the extension nor the magic bytes are recognised.
    pub fallback_mime: String,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            fallback_mime: MIME_TYPE_RAW_IMAGE.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then an optional `image-stream` config file, then
    /// `IMAGE_STREAM__*` environment overrides.
    pub fn new() -> anyhow::Result<Self> {
        let builder = Config::builder()
            .set_default("detector.fallback_mime", MIME_TYPE_RAW_IMAGE)?
            .add_source(File::with_name("image-stream").required(false))
            .add_source(Environment::with_prefix("IMAGE_STREAM").separator("__"));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
