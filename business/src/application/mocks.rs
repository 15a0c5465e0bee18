//! Test doubles shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::{PhotoCodec, PhotoError};

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError>;
        async fn save(&self, category: &NewCategory) -> Result<Category, RepositoryError>;
        async fn update(&self, category: &Category) -> Result<Category, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
        async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
        async fn save(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Codec {}

    impl PhotoCodec for Codec {
        fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, PhotoError>;
        fn decompress(&self, stored: &[u8]) -> Result<Vec<u8>, PhotoError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Stored form is the raw photo prefixed with a marker byte, so tests can
/// tell stored payloads from raw ones.
pub const STORED_MARKER: u8 = 0x78;

pub struct MarkerCodec;

impl PhotoCodec for MarkerCodec {
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, PhotoError> {
        let mut stored = Vec::with_capacity(raw.len() + 1);
        stored.push(STORED_MARKER);
        stored.extend_from_slice(raw);
        Ok(stored)
    }

    fn decompress(&self, stored: &[u8]) -> Result<Vec<u8>, PhotoError> {
        match stored.split_first() {
            None => Ok(Vec::new()),
            Some((&STORED_MARKER, raw)) => Ok(raw.to_vec()),
            Some(_) => Err(PhotoError::Decompression),
        }
    }
}

pub fn marker_codec() -> Arc<dyn PhotoCodec> {
    Arc::new(MarkerCodec)
}

pub fn stored(raw: &[u8]) -> Vec<u8> {
    let mut bytes = vec![STORED_MARKER];
    bytes.extend_from_slice(raw);
    bytes
}

pub fn category(id: i64, name: &str) -> Category {
    Category::from_repository(id, name.to_string())
}

pub fn stored_product(id: i64, name: &str, category_id: i64, raw_photo: &[u8]) -> Product {
    Product::from_repository(
        id,
        name.to_string(),
        4.5,
        3,
        stored(raw_photo),
        category(category_id, "Tools"),
    )
}
