use std::env;

use super::error::{ConfigError, parse_or};

/// Photo compression settings.
///
/// Environment variables:
/// - PHOTO_COMPRESSION_LEVEL: zlib level 0-9 (default: 9)
#[derive(Debug, Clone, PartialEq)]
pub struct CodecConfig {
    pub compression_level: u32,
}

impl CodecConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let compression_level = parse_or(&lookup, "PHOTO_COMPRESSION_LEVEL", 9u32)?;
        if compression_level > 9 {
            return Err(ConfigError::Invalid {
                key: "PHOTO_COMPRESSION_LEVEL",
                value: compression_level.to_string(),
            });
        }
        Ok(Self { compression_level })
    }
}
