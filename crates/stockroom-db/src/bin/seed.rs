//! # Seed Data Generator
//!
//! Populates the database with sample inventory for development.
//!
//! ## Usage
//! ```bash
//! # Seed the database named by STOCKROOM_DB_PATH (default ./stockroom.db)
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//!
//! # More logging
//! RUST_LOG=debug cargo run -p stockroom-db --bin seed
//! ```
//!
//! Codes that already exist are skipped, so re-running is harmless.

use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stockroom_core::validation::parse_date;
use stockroom_core::{format_listing, ElectronicProduct, InventoryItem, PerishableProduct};
use stockroom_db::{Database, DbConfig, DbError};

/// (code, name, price, quantity, warranty years)
const ELECTRONICS: &[(&str, &str, f64, i64, i32)] = &[
    ("101", "mouse", 9.99, 50, 2),
    ("102", "keyboard", 24.50, 30, 2),
    ("103", "usb hub", 15.00, 20, 1),
    ("104", "monitor", 189.90, 8, 3),
    ("105", "headphones", 39.99, 15, 1),
];

/// (code, name, price, quantity, expiration)
const PERISHABLES: &[(&str, &str, f64, i64, &str)] = &[
    ("201", "milk", 1.25, 40, "2026-11-02"),
    ("202", "bread", 2.10, 25, "2026-10-24"),
    ("203", "yogurt", 0.89, 60, "2026-11-10"),
    ("204", "cheddar", 4.75, 18, "2027-01-15"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let mut config = DbConfig::from_env()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: $STOCKROOM_DB_PATH or ./stockroom.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    info!(path = %config.database_path.display(), "Seeding inventory");

    let db = Database::new(config).await?;
    let inventory = db.inventory();

    let mut added = 0;
    let mut skipped = 0;

    for item in sample_items()? {
        match inventory.add(&item).await {
            Ok(()) => added += 1,
            Err(DbError::UniqueViolation { value, .. }) => {
                warn!(code = %value, "Product already stored, skipping");
                skipped += 1;
            }
            Err(e) => {
                db.close().await;
                return Err(e.into());
            }
        }
    }

    info!(added, skipped, "Seed complete");

    println!("{}", format_listing(&inventory.list().await?));

    db.close().await;
    Ok(())
}

/// Builds the sample items, running the same validation as any caller.
fn sample_items() -> Result<Vec<InventoryItem>, Box<dyn std::error::Error>> {
    let mut items: Vec<InventoryItem> = Vec::with_capacity(ELECTRONICS.len() + PERISHABLES.len());

    for &(code, name, price, quantity, warranty) in ELECTRONICS {
        items.push(ElectronicProduct::new(code, name, price, quantity, warranty)?.into());
    }

    for &(code, name, price, quantity, expiration) in PERISHABLES {
        let expiration = parse_date("expiration", expiration)?;
        items.push(PerishableProduct::new(code, name, price, quantity, expiration)?.into());
    }

    Ok(items)
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every repository call
/// - Default: `info,stockroom=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}
