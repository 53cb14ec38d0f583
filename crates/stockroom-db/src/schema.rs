//! # Products Table Schema
//!
//! The single table backing the inventory.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products                                                               │
//! │  ────────────────────────────────────────────────────────────────────   │
//! │  code        NUMERIC PRIMARY KEY                                        │
//! │  name        TEXT                                                       │
//! │  price       FLOAT                                                      │
//! │  quantity    INTEGER                                                    │
//! │  type        TEXT          'Electronic' | 'Perishable'                  │
//! │  warranty    INTEGER NULL  ← Electronic rows only                       │
//! │  expiration  DATE NULL     ← Perishable rows only (YYYY-MM-DD)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The statement uses `IF NOT EXISTS`, so pointing the repository at an
//! existing database leaves its table untouched.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

/// Name of the backing table.
pub const PRODUCTS_TABLE: &str = "products";

/// Creates the products table when absent.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    code        NUMERIC PRIMARY KEY,
    name        TEXT,
    price       FLOAT,
    quantity    INTEGER,
    type        TEXT,
    warranty    INTEGER NULL,
    expiration  DATE NULL
)
"#;

/// Creates the products table if it does not exist yet.
///
/// ## Safety
/// - Idempotent: safe to run on every startup
/// - Never alters or drops an existing table
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    let existed = schema_exists(pool).await?;

    sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;

    if existed {
        debug!(table = PRODUCTS_TABLE, "Table already present");
    } else {
        info!(table = PRODUCTS_TABLE, "Created table");
    }

    Ok(())
}

/// Returns whether the products table exists.
pub async fn schema_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(PRODUCTS_TABLE)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}
