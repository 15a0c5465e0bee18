/// Errors raised while encoding or decoding a stored product photo.
#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("photo.compression_failed")]
    Compression,
    #[error("photo.decompression_failed")]
    Decompression,
}

/// Codec applied to product photos at the storage boundary.
///
/// Photos travel through the application uncompressed and are stored in
/// compressed form. An empty stored payload decodes to an empty photo.
pub trait PhotoCodec: Send + Sync {
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, PhotoError>;
    fn decompress(&self, stored: &[u8]) -> Result<Vec<u8>, PhotoError>;
}
