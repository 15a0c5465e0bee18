use crate::domain::product::model::Product;
use crate::domain::product::services::{PhotoCodec, PhotoError};

/// Replaces the stored (compressed) photo with its decoded form.
pub(crate) fn restore_photo(codec: &dyn PhotoCodec, product: Product) -> Result<Product, PhotoError> {
    let photo = codec.decompress(&product.photo)?;
    Ok(product.with_photo(photo))
}

pub(crate) fn restore_photos(
    codec: &dyn PhotoCodec,
    products: Vec<Product>,
) -> Result<Vec<Product>, PhotoError> {
    products
        .into_iter()
        .map(|product| restore_photo(codec, product))
        .collect()
}
