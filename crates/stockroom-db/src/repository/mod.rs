//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Front-end                                                             │
//! │       │                                                                 │
//! │       │  db.inventory().add(&item)                                     │
//! │       ▼                                                                 │
//! │  InventoryRepository                                                   │
//! │  ├── add(&self, item)                                                  │
//! │  ├── remove(&self, code)                                               │
//! │  ├── update(&self, code, fields)                                       │
//! │  └── list(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (products table)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`InventoryRepository`](inventory::InventoryRepository) - Product CRUD

pub mod inventory;
