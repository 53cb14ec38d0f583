//! # stockroom-core: Product Model for Stockroom
//!
//! Pure domain types for the inventory: the base product, its two variants,
//! validation, and the raw row shape shared with the database layer.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front-end (CLI, menu, GUI: not here)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw input                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐     │   │
//! │  │   │    types      │  │  validation   │  │    error      │     │   │
//! │  │   │  Product      │  │  parse_code   │  │ ValidationErr │     │   │
//! │  │   │  InventoryItem│  │  capitalize   │  │  CoreError    │     │   │
//! │  │   │  ProductRow   │  │  ranges       │  │               │     │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-db (Inventory repository)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, variants, `InventoryItem`, `ProductRow`
//! - [`validation`] - Code parsing, range checks, name capitalization
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{ElectronicProduct, InventoryItem, ProductType};
//!
//! let item: InventoryItem = ElectronicProduct::new("101", "mouse", 9.99, 50, 2)
//!     .unwrap()
//!     .into();
//!
//! assert_eq!(item.code(), 101.0);
//! assert_eq!(item.product().name(), "Mouse");
//! assert_eq!(item.product_type(), ProductType::Electronic);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;
