//! # Inventory Repository
//!
//! CRUD over the single `products` table.
//!
//! ## Variant Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InventoryItem → products row                         │
//! │                                                                         │
//! │  Electronic(mouse, warranty 2)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  (101, 'Mouse', 9.99, 50, 'Electronic', 2,    NULL)                    │
//! │                                                                         │
//! │  Perishable(milk, expires 2026-12-01)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  (7,   'Milk',  1.25, 12, 'Perishable', NULL, '2026-12-01')            │
//! │                                                                         │
//! │  Update / remove / list address rows by code only.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each operation is a single statement committed on its own; there are no
//! multi-statement transactions.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::schema;
use stockroom_core::{InventoryItem, ProductRow, ProductUpdate, EMPTY_INVENTORY};

/// Repository for inventory operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.inventory();
///
/// repo.add(&item).await?;
/// repo.update(101.0, &ProductUpdate::new("mouse", 8.5, 45)?.with_warranty(3)).await?;
/// repo.remove(101.0).await?;
///
/// for row in repo.list().await? {
///     println!("{row}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Creates the products table if it is missing.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        schema::ensure_schema(&self.pool).await
    }

    /// Stores a new product.
    ///
    /// The variant decides the `type` value and which of `warranty` /
    /// `expiration` is filled; the other stays NULL. The name is stored in
    /// its display form.
    ///
    /// ## Returns
    /// * `Ok(())` - Row inserted
    /// * `Err(DbError::UniqueViolation)` - Code already exists
    pub async fn add(&self, item: &InventoryItem) -> DbResult<()> {
        let product = item.product();
        let product_type = item.product_type();

        let (warranty, expiration) = match item {
            InventoryItem::Electronic(p) => (Some(p.warranty()), None),
            InventoryItem::Perishable(p) => (None, Some(p.expiration())),
        };

        debug!(code = product.code(), %product_type, "Adding product");

        sqlx::query(
            r#"
            INSERT INTO products (
                code, name, price, quantity, type, warranty, expiration
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7
            )
            "#,
        )
        .bind(product.code())
        .bind(product.name())
        .bind(product.price())
        .bind(product.quantity())
        .bind(product_type)
        .bind(warranty)
        .bind(expiration)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::UniqueViolation { field, .. } => {
                DbError::duplicate(field, product.code().to_string())
            }
            other => other,
        })?;

        Ok(())
    }

    /// Deletes the product with the given code.
    ///
    /// Deleting a code that is not stored is not an error.
    pub async fn remove(&self, code: f64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE code = ?1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        debug!(code, rows = result.rows_affected(), "Removed product");
        Ok(())
    }

    /// Overwrites name, price, quantity, warranty and expiration.
    ///
    /// The name is written in display form, as `add` does, so a stored name
    /// always equals what the product displays.
    ///
    /// ## Note
    /// Absent `warranty` / `expiration` values are written as NULL, even for
    /// the variant column the row actually uses. A code that is not stored
    /// matches nothing and is not an error; no row is inserted.
    pub async fn update(&self, code: f64, fields: &ProductUpdate) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price = ?3,
                quantity = ?4,
                warranty = ?5,
                expiration = ?6
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .bind(fields.name())
        .bind(fields.price())
        .bind(fields.quantity())
        .bind(fields.warranty())
        .bind(fields.expiration())
        .execute(&self.pool)
        .await?;

        debug!(code, rows = result.rows_affected(), "Updated product");
        Ok(())
    }

    /// Returns every stored row, ordered by code.
    ///
    /// The `NUMERIC` code column keeps whole codes as integers; they are read
    /// back as REAL so every row decodes into the same `f64` field.
    ///
    /// An empty inventory is an empty vector; see
    /// [`stockroom_core::format_listing`] for the display message.
    pub async fn list(&self) -> DbResult<Vec<ProductRow>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT CAST(code AS REAL) AS code, name, price, quantity, type, warranty, expiration
            FROM products
            ORDER BY code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            info!("{EMPTY_INVENTORY}");
        } else {
            debug!(count = rows.len(), "Listed products");
        }

        Ok(rows)
    }

    /// Gets a single row by code.
    ///
    /// ## Returns
    /// * `Ok(Some(ProductRow))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_code(&self, code: f64) -> DbResult<Option<ProductRow>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT CAST(code AS REAL) AS code, name, price, quantity, type, warranty, expiration
            FROM products
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Counts stored products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use stockroom_core::{
        format_listing, CoreError, ElectronicProduct, PerishableProduct, ProductType,
    };

    async fn repo() -> InventoryRepository {
        Database::new(DbConfig::in_memory())
            .await
            .unwrap()
            .inventory()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mouse() -> InventoryItem {
        ElectronicProduct::new("101", "mouse", 9.99, 50, 2)
            .unwrap()
            .into()
    }

    fn milk() -> InventoryItem {
        PerishableProduct::new("7", "MILK", 1.25, 12, date(2026, 12, 1))
            .unwrap()
            .into()
    }

    fn cable() -> InventoryItem {
        ElectronicProduct::new("2.5", "cable", 3.0, 4, 1)
            .unwrap()
            .into()
    }

    #[tokio::test]
    async fn test_add_electronic_then_list() {
        let repo = repo().await;
        repo.add(&mouse()).await.unwrap();

        let rows = repo.list().await.unwrap();
        assert_eq!(
            rows,
            vec![ProductRow {
                code: 101.0,
                name: "Mouse".to_string(),
                price: 9.99,
                quantity: 50,
                product_type: ProductType::Electronic,
                warranty: Some(2),
                expiration: None,
            }]
        );
        assert_eq!(
            rows[0].to_string(),
            "(101, 'Mouse', 9.99, 50, 'Electronic', 2, NULL)"
        );
    }

    #[tokio::test]
    async fn test_add_perishable_then_list() {
        let repo = repo().await;
        repo.add(&milk()).await.unwrap();

        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Milk");
        assert_eq!(rows[0].product_type, ProductType::Perishable);
        assert_eq!(rows[0].expiration, Some(date(2026, 12, 1)));
        assert_eq!(rows[0].warranty, None);
    }

    #[tokio::test]
    async fn test_stored_row_rebuilds_item() {
        let repo = repo().await;
        for item in [mouse(), milk()] {
            repo.add(&item).await.unwrap();

            let row = repo.get_by_code(item.code()).await.unwrap().unwrap();
            let back = row.to_item().unwrap();
            assert_eq!(back.product_type(), item.product_type());
            assert_eq!(back.to_map(), item.to_map());
        }
    }

    #[tokio::test]
    async fn test_duplicate_code_is_reported() {
        let repo = repo().await;
        repo.add(&mouse()).await.unwrap();

        let other: InventoryItem = PerishableProduct::new("101", "bread", 2.0, 5, date(2026, 1, 2))
            .unwrap()
            .into();
        let err = repo.add(&other).await.unwrap_err();
        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "products.code");
                assert_eq!(value, "101");
            }
            other => panic!("expected UniqueViolation, got {other:?}"),
        }

        // The first row is untouched.
        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_type, ProductType::Electronic);
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = repo().await;
        repo.add(&mouse()).await.unwrap();
        repo.add(&milk()).await.unwrap();

        repo.remove(101.0).await.unwrap();

        assert!(repo.get_by_code(101.0).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_remove_missing_code_is_noop() {
        let repo = repo().await;
        repo.add(&mouse()).await.unwrap();
        let before = repo.list().await.unwrap();

        repo.remove(999.0).await.unwrap();

        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = repo().await;
        repo.add(&mouse()).await.unwrap();

        let fields = ProductUpdate::new("wireless MOUSE", 14.5, 40)
            .unwrap()
            .with_warranty(3);
        repo.update(101.0, &fields).await.unwrap();

        let row = repo.get_by_code(101.0).await.unwrap().unwrap();
        assert_eq!(row.name, "Wireless mouse");
        assert_eq!(row.price, 14.5);
        assert_eq!(row.quantity, 40);
        assert_eq!(row.product_type, ProductType::Electronic);
        assert_eq!(row.warranty, Some(3));
        assert_eq!(row.expiration, None);
    }

    #[tokio::test]
    async fn test_update_without_variant_field_nulls_it() {
        let repo = repo().await;
        repo.add(&milk()).await.unwrap();

        let fields = ProductUpdate::new("milk", 1.5, 10).unwrap();
        repo.update(7.0, &fields).await.unwrap();

        let row = repo.get_by_code(7.0).await.unwrap().unwrap();
        assert_eq!(row.expiration, None);
        assert!(matches!(
            row.to_item(),
            Err(CoreError::IncompleteRow { code, .. }) if code == 7.0
        ));
    }

    #[tokio::test]
    async fn test_update_missing_code_inserts_nothing() {
        let repo = repo().await;

        let fields = ProductUpdate::new("ghost", 1.0, 1).unwrap().with_warranty(1);
        repo.update(404.0, &fields).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.get_by_code(404.0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_empty_and_ordering() {
        let repo = repo().await;

        let rows = repo.list().await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(format_listing(&rows), EMPTY_INVENTORY);

        repo.add(&mouse()).await.unwrap();
        repo.add(&milk()).await.unwrap();
        repo.add(&cable()).await.unwrap();

        let codes: Vec<f64> = repo.list().await.unwrap().iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![2.5, 7.0, 101.0]);
    }

    #[tokio::test]
    async fn test_fractional_code_round_trip() {
        let repo = repo().await;
        repo.add(&cable()).await.unwrap();

        let row = repo.get_by_code(2.5).await.unwrap().unwrap();
        assert_eq!(row.code, 2.5);
        assert_eq!(row.to_string(), "(2.5, 'Cable', 3, 4, 'Electronic', 1, NULL)");
        assert_eq!(row.to_item().unwrap().to_map(), cable().to_map());

        repo.update(2.5, &ProductUpdate::new("cable", 3.5, 2).unwrap().with_warranty(1))
            .await
            .unwrap();
        assert_eq!(repo.get_by_code(2.5).await.unwrap().unwrap().price, 3.5);

        repo.remove(2.5).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_whole_code_text_forms_collide() {
        let repo = repo().await;
        repo.add(&mouse()).await.unwrap();

        let same: InventoryItem = ElectronicProduct::new("101.0", "mouse", 9.99, 50, 2)
            .unwrap()
            .into();
        assert!(matches!(
            repo.add(&same).await,
            Err(DbError::UniqueViolation { .. })
        ));
    }

    #[tokio::test]
    async fn test_expanding_first_letter_survives_storage() {
        let repo = repo().await;
        let beta: InventoryItem = ElectronicProduct::new("5", "ßeta", 1.0, 1, 1)
            .unwrap()
            .into();
        repo.add(&beta).await.unwrap();

        let row = repo.get_by_code(5.0).await.unwrap().unwrap();
        assert_eq!(row.name, "Sseta");

        let back = row.to_item().unwrap();
        assert_eq!(back.product().name(), beta.product().name());
        assert_eq!(back.to_string(), beta.to_string());
    }

    #[tokio::test]
    async fn test_ensure_schema_keeps_existing_rows() {
        let repo = repo().await;
        repo.add(&mouse()).await.unwrap();

        repo.ensure_schema().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
