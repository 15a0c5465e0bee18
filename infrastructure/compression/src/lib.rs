pub mod zlib_codec;

pub use zlib_codec::ZlibPhotoCodec;
