//! MySQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, ProductId};
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::domain::entity::product::{Product, ProductDraft};
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::domain::value_object::category_name::CategoryName;
use crate::error::{InventoryError, InventoryResult};

/// MySQL-backed product and category repository
#[derive(Clone)]
pub struct MySqlInventoryRepository {
    pool: MySqlPool,
}

impl MySqlInventoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for MySqlInventoryRepository {
    async fn list(&self) -> InventoryResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, category, quantity, price, created_at
            FROM products
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn insert(&self, draft: &ProductDraft) -> InventoryResult<ProductId> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, category, quantity, price)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(draft.name())
        .bind(draft.category())
        .bind(draft.quantity())
        .bind(draft.price())
        .execute(&self.pool)
        .await?;

        Ok(ProductId::from_i64(result.last_insert_id() as i64))
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> InventoryResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?, category = ?, quantity = ?, price = ?
            WHERE id = ?
            "#,
        )
        .bind(draft.name())
        .bind(draft.category())
        .bind(draft.quantity())
        .bind(draft.price())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ProductId) -> InventoryResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> InventoryResult<()> {
        // TRUNCATE も AUTO_INCREMENT をリセットする
        sqlx::query("TRUNCATE TABLE products")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl CategoryRepository for MySqlInventoryRepository {
    async fn insert(&self, name: &CategoryName) -> InventoryResult<CategoryId> {
        let result = sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // UNIQUE 制約が一意性の最終防衛線
                if is_unique_violation(&e) {
                    InventoryError::CategoryExists
                } else {
                    InventoryError::Database(e)
                }
            })?;

        Ok(CategoryId::from_i64(result.last_insert_id() as i64))
    }

    async fn list_names(&self) -> InventoryResult<Vec<String>> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT name FROM categories ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(names)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    category: String,
    quantity: i64,
    price: Decimal,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: ProductId::from_i64(self.id),
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            created_at: self.created_at,
        }
    }
}
