use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductEntity, price_to_column};
use crate::errors::map_sqlx_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            r#"SELECT p.id, p.name, p.price, p.quantity, p.photo, c.id AS category_id, c.name AS category_name
            FROM products p
            JOIN categories c ON c.id = p.category_id
            ORDER BY p.id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"SELECT p.id, p.name, p.price, p.quantity, p.photo, c.id AS category_id, c.name AS category_name
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        // POSITION keeps `%` and `_` in the search text literal.
        let entities = sqlx::query_as::<_, ProductEntity>(
            r#"SELECT p.id, p.name, p.price, p.quantity, p.photo, c.id AS category_id, c.name AS category_name
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE POSITION(LOWER($1) IN LOWER(p.name)) > 0
            ORDER BY p.id"#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn save(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"WITH inserted AS (
                INSERT INTO products (name, price, quantity, photo, category_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, price, quantity, photo, category_id
            )
            SELECT i.id, i.name, i.price, i.quantity, i.photo, c.id AS category_id, c.name AS category_name
            FROM inserted i
            JOIN categories c ON c.id = i.category_id"#,
        )
        .bind(&product.name)
        .bind(price_to_column(product.price)?)
        .bind(product.quantity)
        .bind(&product.photo)
        .bind(product.category.id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entity.into_domain()
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"WITH updated AS (
                UPDATE products SET
                    name = $1,
                    price = $2,
                    quantity = $3,
                    photo = $4,
                    category_id = $5
                WHERE id = $6
                RETURNING id, name, price, quantity, photo, category_id
            )
            SELECT u.id, u.name, u.price, u.quantity, u.photo, c.id AS category_id, c.name AS category_name
            FROM updated u
            JOIN categories c ON c.id = u.category_id"#,
        )
        .bind(&product.name)
        .bind(price_to_column(product.price)?)
        .bind(product.quantity)
        .bind(&product.photo)
        .bind(product.category.id)
        .bind(product.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
