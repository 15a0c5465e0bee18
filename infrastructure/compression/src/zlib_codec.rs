use std::io::{Read, Write};

use business::domain::product::services::{PhotoCodec, PhotoError};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

/// Stores product photos as zlib streams.
pub struct ZlibPhotoCodec {
    level: Compression,
}

impl ZlibPhotoCodec {
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }
}

impl PhotoCodec for ZlibPhotoCodec {
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, PhotoError> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 2), self.level);
        encoder
            .write_all(raw)
            .map_err(|_| PhotoError::Compression)?;
        encoder.finish().map_err(|_| PhotoError::Compression)
    }

    fn decompress(&self, stored: &[u8]) -> Result<Vec<u8>, PhotoError> {
        // Products created without a photo keep an empty column.
        if stored.is_empty() {
            return Ok(Vec::new());
        }

        let mut decoder = ZlibDecoder::new(stored);
        let mut raw = Vec::with_capacity(stored.len() * 2);
        decoder
            .read_to_end(&mut raw)
            .map_err(|_| PhotoError::Decompression)?;
        Ok(raw)
    }
}
