//! # stockroom-db: Inventory Repository for Stockroom
//!
//! This crate provides database access for the Stockroom inventory.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Front-end builds an InventoryItem (stockroom-core)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────┐    ┌────────────┐  │   │
//! │  │   │   Database    │    │  Repository     │    │  Schema    │  │   │
//! │  │   │   (pool.rs)   │    │ (inventory.rs)  │    │ (schema.rs)│  │   │
//! │  │   │               │    │                 │    │            │  │   │
//! │  │   │ SqlitePool    │◄───│ InventoryRepo   │    │ products   │  │   │
//! │  │   │ DbConfig      │    │ add / remove    │    │ IF NOT     │  │   │
//! │  │   │               │    │ update / list   │    │ EXISTS     │  │   │
//! │  │   └───────────────┘    └─────────────────┘    └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (stockroom.db)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - The `products` table
//! - [`error`] - Database error types
//! - [`repository`] - Inventory repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_core::ElectronicProduct;
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("stockroom.db")).await?;
//!
//! let mouse = ElectronicProduct::new("101", "mouse", 9.99, 50, 2)?;
//! db.inventory().add(&mouse.into()).await?;
//!
//! let rows = db.inventory().list().await?;
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::inventory::InventoryRepository;
