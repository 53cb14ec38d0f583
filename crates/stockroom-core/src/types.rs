//! # Domain Types
//!
//! Product model for the Stockroom inventory.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │                       ┌─────────────────┐                               │
//! │                       │    Product      │                               │
//! │                       │  ─────────────  │                               │
//! │                       │  code (PK)      │                               │
//! │                       │  name           │                               │
//! │                       │  price          │                               │
//! │                       │  quantity       │                               │
//! │                       └────────┬────────┘                               │
//! │                ┌───────────────┴───────────────┐                        │
//! │       ┌────────┴──────────┐          ┌─────────┴─────────┐              │
//! │       │ ElectronicProduct │          │ PerishableProduct │              │
//! │       │  + warranty       │          │  + expiration     │              │
//! │       └────────┬──────────┘          └─────────┬─────────┘              │
//! │                └───────────────┬───────────────┘                        │
//! │                       ┌────────┴────────┐                               │
//! │                       │  InventoryItem  │  ← what the repository stores │
//! │                       └─────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single-Table Mapping
//! Both variants live in one `products` table. The `type` column says which
//! variant a row is; only that variant's column is filled, the other is NULL.
//! [`ProductRow`] is the raw shape of such a row.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{
    capitalize, parse_code, parse_date, validate_code, validate_price, validate_quantity,
    ValidationResult, DATE_FORMAT,
};

/// Field map produced by `to_map` and consumed by `from_map`.
pub type FieldMap = Map<String, Value>;

// =============================================================================
// Product Type (discriminator)
// =============================================================================

/// Value of the `type` discriminator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum ProductType {
    /// Row carries `warranty`.
    Electronic,
    /// Row carries `expiration`.
    Perishable,
}

impl ProductType {
    /// Returns the text stored in the `type` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductType::Electronic => "Electronic",
            ProductType::Perishable => "Perishable",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Electronic" => Ok(ProductType::Electronic),
            "Perishable" => Ok(ProductType::Perishable),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("unknown product type '{other}'"),
            )),
        }
    }
}

// =============================================================================
// Product (base)
// =============================================================================

/// Fields shared by every product.
///
/// Immutable after construction. The name is kept as supplied and
/// capitalized on read, see [`Product::name`].
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    code: f64,
    name: String,
    price: f64,
    quantity: i64,
}

impl Product {
    /// Creates a product from a textual code.
    ///
    /// ## Errors
    /// - `code` is not a number, or not strictly positive
    /// - `price` is negative or not finite
    /// - `quantity` is negative
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Product;
    ///
    /// let product = Product::new("101", "mouse", 9.99, 50).unwrap();
    /// assert_eq!(product.code(), 101.0);
///
/// let cable = Product::new("2.5", "cable", 3.0, 4).unwrap();
/// assert_eq!(cable.code(), 2.5);
    /// assert_eq!(product.name(), "Mouse");
    ///
    /// assert!(Product::new("abc", "mouse", 9.99, 50).is_err());
    /// assert!(Product::new("-1", "mouse", 9.99, 50).is_err());
    /// ```
    pub fn new(
        code: &str,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> ValidationResult<Self> {
        let code = parse_code(code)?;
        Self::with_code(code, name, price, quantity)
    }

    /// Creates a product from an already-numeric code.
    pub fn with_code(
        code: f64,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> ValidationResult<Self> {
        Ok(Product {
            code: validate_code(code)?,
            name: name.into(),
            price: validate_price(price)?,
            quantity: validate_quantity(quantity)?,
        })
    }

    /// Product code (primary key).
    #[inline]
    pub fn code(&self) -> f64 {
        self.code
    }

    /// Display name: the stored name, capitalized.
    pub fn name(&self) -> String {
        capitalize(&self.name)
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Units in stock.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Serializes the shared fields into a field map.
    ///
    /// The name is emitted in display form.
    pub fn to_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        map.insert("code".to_string(), code_value(self.code));
        map.insert("name".to_string(), Value::from(self.name()));
        map.insert("price".to_string(), Value::from(self.price));
        map.insert("quantity".to_string(), Value::from(self.quantity));
        map
    }

    /// Rebuilds a product from a field map, re-running construction checks.
    pub fn from_map(map: &FieldMap) -> ValidationResult<Self> {
        let code = match require(map, "code")? {
            Value::Number(n) => match n.as_f64() {
                Some(code) => validate_code(code)?,
                None => return Err(ValidationError::invalid_format("code", "must be a valid number")),
            },
            Value::String(s) => parse_code(s)?,
            _ => return Err(ValidationError::invalid_format("code", "must be a valid number")),
        };
        let name = require_str(map, "name")?;
        let price = require(map, "price")?
            .as_f64()
            .ok_or_else(|| ValidationError::invalid_format("price", "must be a number"))?;
        let quantity = require_i64(map, "quantity")?;

        Self::with_code(code, name, price, quantity)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code: {}, Product: {}, Price: {}, Quantity: {}",
            self.code,
            self.name(),
            self.price,
            self.quantity
        )
    }
}

// =============================================================================
// Electronic Product
// =============================================================================

/// A product sold with a warranty (in years).
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicProduct {
    product: Product,
    warranty: i32,
}

impl ElectronicProduct {
    /// Creates an electronic product. The warranty is not validated.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::ElectronicProduct;
    ///
    /// let mouse = ElectronicProduct::new("101", "mouse", 9.99, 50, 2).unwrap();
    /// assert_eq!(mouse.warranty(), 2);
    /// assert_eq!(
    ///     mouse.to_string(),
    ///     "Code: 101, Electronic Product: Mouse, Price: 9.99, Quantity: 50, Warranty: 2 years"
    /// );
    /// ```
    pub fn new(
        code: &str,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        warranty: i32,
    ) -> ValidationResult<Self> {
        Ok(ElectronicProduct {
            product: Product::new(code, name, price, quantity)?,
            warranty,
        })
    }

    /// Wraps an existing base product.
    pub fn from_product(product: Product, warranty: i32) -> Self {
        ElectronicProduct { product, warranty }
    }

    /// The shared product fields.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Warranty period in years.
    #[inline]
    pub fn warranty(&self) -> i32 {
        self.warranty
    }

    /// Replaces the warranty period. Any value is accepted.
    pub fn set_warranty(&mut self, warranty: i32) {
        self.warranty = warranty;
    }

    /// Base field map plus `warranty`.
    pub fn to_map(&self) -> FieldMap {
        let mut map = self.product.to_map();
        map.insert("warranty".to_string(), Value::from(self.warranty));
        map
    }

    /// Rebuilds an electronic product from a field map.
    pub fn from_map(map: &FieldMap) -> ValidationResult<Self> {
        let product = Product::from_map(map)?;
        let warranty = i32::try_from(require_i64(map, "warranty")?)
            .map_err(|_| ValidationError::invalid_format("warranty", "out of range"))?;
        Ok(ElectronicProduct { product, warranty })
    }
}

impl fmt::Display for ElectronicProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.product;
        write!(
            f,
            "Code: {}, Electronic Product: {}, Price: {}, Quantity: {}, Warranty: {} years",
            p.code,
            p.name(),
            p.price,
            p.quantity,
            self.warranty
        )
    }
}

// =============================================================================
// Perishable Product
// =============================================================================

/// A product with an expiration date.
#[derive(Debug, Clone, PartialEq)]
pub struct PerishableProduct {
    product: Product,
    expiration: NaiveDate,
}

impl PerishableProduct {
    /// Creates a perishable product. The expiration date is not validated.
    pub fn new(
        code: &str,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        expiration: NaiveDate,
    ) -> ValidationResult<Self> {
        Ok(PerishableProduct {
            product: Product::new(code, name, price, quantity)?,
            expiration,
        })
    }

    /// Wraps an existing base product.
    pub fn from_product(product: Product, expiration: NaiveDate) -> Self {
        PerishableProduct {
            product,
            expiration,
        }
    }

    /// The shared product fields.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Expiration date.
    #[inline]
    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Replaces the expiration date. Any value is accepted.
    pub fn set_expiration(&mut self, expiration: NaiveDate) {
        self.expiration = expiration;
    }

    /// Base field map plus `expiration` as `YYYY-MM-DD`.
    pub fn to_map(&self) -> FieldMap {
        let mut map = self.product.to_map();
        map.insert(
            "expiration".to_string(),
            Value::from(self.expiration.format(DATE_FORMAT).to_string()),
        );
        map
    }

    /// Rebuilds a perishable product from a field map.
    pub fn from_map(map: &FieldMap) -> ValidationResult<Self> {
        let product = Product::from_map(map)?;
        let expiration = parse_date("expiration", require_str(map, "expiration")?)?;
        Ok(PerishableProduct {
            product,
            expiration,
        })
    }
}

impl fmt::Display for PerishableProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.product;
        write!(
            f,
            "Code: {}, Perishable Product: {}, Price: {}, Quantity: {}, Expiration Date: {}",
            p.code,
            p.name(),
            p.price,
            p.quantity,
            self.expiration.format(DATE_FORMAT)
        )
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// A product the repository can store: one of the closed set of variants.
///
/// A bare [`Product`] is not an `InventoryItem`, so it has no way into the
/// `products` table.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryItem {
    Electronic(ElectronicProduct),
    Perishable(PerishableProduct),
}

impl InventoryItem {
    /// The shared product fields.
    pub fn product(&self) -> &Product {
        match self {
            InventoryItem::Electronic(p) => p.product(),
            InventoryItem::Perishable(p) => p.product(),
        }
    }

    /// Product code (primary key).
    pub fn code(&self) -> f64 {
        self.product().code()
    }

    /// Discriminator for this variant.
    pub fn product_type(&self) -> ProductType {
        match self {
            InventoryItem::Electronic(_) => ProductType::Electronic,
            InventoryItem::Perishable(_) => ProductType::Perishable,
        }
    }

    /// Variant field map.
    pub fn to_map(&self) -> FieldMap {
        match self {
            InventoryItem::Electronic(p) => p.to_map(),
            InventoryItem::Perishable(p) => p.to_map(),
        }
    }

    /// Rebuilds an item, picking the variant by which extra key is present.
    pub fn from_map(map: &FieldMap) -> ValidationResult<Self> {
        match (map.contains_key("warranty"), map.contains_key("expiration")) {
            (true, false) => ElectronicProduct::from_map(map).map(InventoryItem::Electronic),
            (false, true) => PerishableProduct::from_map(map).map(InventoryItem::Perishable),
            (false, false) => Err(ValidationError::required("warranty or expiration")),
            (true, true) => Err(ValidationError::invalid_format(
                "warranty/expiration",
                "only one variant field may be present",
            )),
        }
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryItem::Electronic(p) => fmt::Display::fmt(p, f),
            InventoryItem::Perishable(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<ElectronicProduct> for InventoryItem {
    fn from(p: ElectronicProduct) -> Self {
        InventoryItem::Electronic(p)
    }
}

impl From<PerishableProduct> for InventoryItem {
    fn from(p: PerishableProduct) -> Self {
        InventoryItem::Perishable(p)
    }
}

// =============================================================================
// Product Row
// =============================================================================

/// A raw row of the `products` table, as returned by listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductRow {
    pub code: f64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    /// Discriminator column.
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub product_type: ProductType,
    /// Set for electronic rows.
    pub warranty: Option<i32>,
    /// Set for perishable rows.
    pub expiration: Option<NaiveDate>,
}

impl ProductRow {
    /// Rebuilds the typed item this row stores.
    ///
    /// ## Errors
    /// - `CoreError::IncompleteRow` when the discriminator's column is NULL
    /// - `CoreError::Validation` when the stored fields fail construction
    pub fn to_item(&self) -> CoreResult<InventoryItem> {
        let product = Product::with_code(self.code, self.name.clone(), self.price, self.quantity)?;

        match self.product_type {
            ProductType::Electronic => {
                let warranty = self.warranty.ok_or_else(|| self.incomplete("warranty"))?;
                Ok(ElectronicProduct::from_product(product, warranty).into())
            }
            ProductType::Perishable => {
                let expiration = self
                    .expiration
                    .ok_or_else(|| self.incomplete("expiration"))?;
                Ok(PerishableProduct::from_product(product, expiration).into())
            }
        }
    }

    fn incomplete(&self, column: &str) -> CoreError {
        CoreError::IncompleteRow {
            code: self.code,
            column: column.to_string(),
        }
    }
}

/// Tuple-style rendering: `(101, 'Mouse', 9.99, 50, 'Electronic', 2, NULL)`.
impl fmt::Display for ProductRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, '{}', {}, {}, '{}', ",
            self.code, self.name, self.price, self.quantity, self.product_type
        )?;
        match self.warranty {
            Some(w) => write!(f, "{w}, ")?,
            None => f.write_str("NULL, ")?,
        }
        match self.expiration {
            Some(d) => write!(f, "'{}')", d.format(DATE_FORMAT)),
            None => f.write_str("NULL)"),
        }
    }
}

/// Message shown for an empty inventory.
pub const EMPTY_INVENTORY: &str = "No products in inventory.";

/// Renders a listing, one row per line.
pub fn format_listing(rows: &[ProductRow]) -> String {
    if rows.is_empty() {
        return EMPTY_INVENTORY.to_string();
    }

    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Product Update
// =============================================================================

/// New values for an existing row.
///
/// `warranty` and `expiration` default to absent, and absent values are
/// written as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    name: String,
    price: f64,
    quantity: i64,
    warranty: Option<i32>,
    expiration: Option<NaiveDate>,
}

impl ProductUpdate {
    /// Creates an update with the required fields.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::ProductUpdate;
    ///
    /// let update = ProductUpdate::new("wireless mouse", 14.50, 40)
    ///     .unwrap()
    ///     .with_warranty(3);
    /// assert_eq!(update.name(), "Wireless mouse");
    /// assert_eq!(update.expiration(), None);
    /// ```
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> ValidationResult<Self> {
        Ok(ProductUpdate {
            name: name.into(),
            price: validate_price(price)?,
            quantity: validate_quantity(quantity)?,
            warranty: None,
            expiration: None,
        })
    }

    /// Sets the warranty column.
    pub fn with_warranty(mut self, warranty: i32) -> Self {
        self.warranty = Some(warranty);
        self
    }

    /// Sets the expiration column.
    pub fn with_expiration(mut self, expiration: NaiveDate) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Display form of the new name.
    pub fn name(&self) -> String {
        capitalize(&self.name)
    }

    /// New unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// New stock count.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// New warranty, or `None` to write NULL.
    pub fn warranty(&self) -> Option<i32> {
        self.warranty
    }

    /// New expiration date, or `None` to write NULL.
    pub fn expiration(&self) -> Option<NaiveDate> {
        self.expiration
    }
}

// =============================================================================
// Field Map Helpers
// =============================================================================

/// Whole codes are emitted as JSON integers, fractional ones as floats.
fn code_value(code: f64) -> Value {
    if code.fract() == 0.0 && code < MAX_EXACT_INTEGER {
        Value::from(code as i64)
    } else {
        Value::from(code)
    }
}

/// Largest integer every f64 below it represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn require<'a>(map: &'a FieldMap, field: &str) -> ValidationResult<&'a Value> {
    map.get(field)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ValidationError::required(field))
}

fn require_str<'a>(map: &'a FieldMap, field: &str) -> ValidationResult<&'a str> {
    require(map, field)?
        .as_str()
        .ok_or_else(|| ValidationError::invalid_format(field, "must be text"))
}

fn require_i64(map: &FieldMap, field: &str) -> ValidationResult<i64> {
    require(map, field)?
        .as_i64()
        .ok_or_else(|| ValidationError::invalid_format(field, "must be an integer"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_construction_normalizes_name() {
        let product = Product::new("101", "mOUSE", 9.99, 50).unwrap();
        assert_eq!(product.code(), 101.0);
        assert_eq!(product.name(), "Mouse");
        assert_eq!(product.price(), 9.99);
        assert_eq!(product.quantity(), 50);
    }

    #[test]
    fn test_construction_rejects_bad_codes() {
        for code in ["", "x1", "0", "-7", "-2.5", "NaN"] {
            assert!(Product::new(code, "mouse", 1.0, 1).is_err(), "code {code:?}");
            assert!(ElectronicProduct::new(code, "mouse", 1.0, 1, 2).is_err());
            assert!(PerishableProduct::new(code, "milk", 1.0, 1, date(2026, 1, 1)).is_err());
        }
    }

    #[test]
    fn test_construction_keeps_fractional_code() {
        let cable = ElectronicProduct::new("2.5", "cable", 3.0, 4, 1).unwrap();
        assert_eq!(cable.product().code(), 2.5);
        assert_eq!(
            cable.to_string(),
            "Code: 2.5, Electronic Product: Cable, Price: 3, Quantity: 4, Warranty: 1 years"
        );
        assert_eq!(cable.to_map()["code"], json!(2.5));

        let back = ElectronicProduct::from_map(&cable.to_map()).unwrap();
        assert_eq!(back.to_map(), cable.to_map());
    }

    #[test]
    fn test_construction_rejects_negative_price_and_quantity() {
        assert!(Product::new("1", "mouse", -0.5, 1).is_err());
        assert!(Product::new("1", "mouse", 1.0, -1).is_err());
    }

    #[test]
    fn test_electronic_to_map() {
        let mouse = ElectronicProduct::new("101", "mouse", 9.99, 50, 2).unwrap();
        assert_eq!(
            Value::Object(mouse.to_map()),
            json!({
                "code": 101,
                "name": "Mouse",
                "price": 9.99,
                "quantity": 50,
                "warranty": 2
            })
        );
    }

    #[test]
    fn test_perishable_to_map() {
        let milk = PerishableProduct::new("7", "milk", 1.25, 12, date(2026, 12, 1)).unwrap();
        let map = milk.to_map();
        assert_eq!(map["expiration"], json!("2026-12-01"));
        assert!(!map.contains_key("warranty"));
    }

    #[test]
    fn test_map_reconstruction_preserves_fields() {
        let mouse = ElectronicProduct::new("101", "mouse", 9.99, 50, 2).unwrap();
        let back = ElectronicProduct::from_map(&mouse.to_map()).unwrap();
        assert_eq!(back.product().code(), 101.0);
        assert_eq!(back.product().name(), mouse.product().name());
        assert_eq!(back.product().price(), 9.99);
        assert_eq!(back.product().quantity(), 50);
        assert_eq!(back.warranty(), 2);

        let milk: InventoryItem = PerishableProduct::new("7", "MILK", 1.25, 12, date(2026, 12, 1))
            .unwrap()
            .into();
        let back = InventoryItem::from_map(&milk.to_map()).unwrap();
        assert_eq!(back.product_type(), ProductType::Perishable);
        assert_eq!(back.to_map(), milk.to_map());
    }

    #[test]
    fn test_from_map_errors() {
        let mut map = Product::new("5", "cable", 3.0, 1).unwrap().to_map();
        assert!(matches!(
            InventoryItem::from_map(&map),
            Err(ValidationError::Required { .. })
        ));

        map.insert("warranty".to_string(), json!("two"));
        assert!(matches!(
            InventoryItem::from_map(&map),
            Err(ValidationError::InvalidFormat { .. })
        ));

        map.insert("warranty".to_string(), json!(2));
        map.insert("code".to_string(), json!(-5));
        assert!(matches!(
            InventoryItem::from_map(&map),
            Err(ValidationError::MustBePositive { .. })
        ));

        map.remove("code");
        assert_eq!(
            InventoryItem::from_map(&map),
            Err(ValidationError::required("code"))
        );
    }

    #[test]
    fn test_setters_accept_any_value() {
        let mut mouse = ElectronicProduct::new("1", "mouse", 1.0, 1, 2).unwrap();
        mouse.set_warranty(-4);
        assert_eq!(mouse.warranty(), -4);

        let mut milk = PerishableProduct::new("2", "milk", 1.0, 1, date(2026, 1, 1)).unwrap();
        milk.set_expiration(date(1999, 12, 31));
        assert_eq!(milk.expiration(), date(1999, 12, 31));
    }

    #[test]
    fn test_display() {
        let product = Product::new("3", "cable", 2.5, 10).unwrap();
        assert_eq!(
            product.to_string(),
            "Code: 3, Product: Cable, Price: 2.5, Quantity: 10"
        );

        let milk: InventoryItem = PerishableProduct::new("7", "milk", 1.25, 12, date(2026, 12, 1))
            .unwrap()
            .into();
        assert_eq!(
            milk.to_string(),
            "Code: 7, Perishable Product: Milk, Price: 1.25, Quantity: 12, Expiration Date: 2026-12-01"
        );
    }

    #[test]
    fn test_row_display_and_listing() {
        let row = ProductRow {
            code: 101.0,
            name: "Mouse".to_string(),
            price: 9.99,
            quantity: 50,
            product_type: ProductType::Electronic,
            warranty: Some(2),
            expiration: None,
        };
        assert_eq!(row.to_string(), "(101, 'Mouse', 9.99, 50, 'Electronic', 2, NULL)");
        assert_eq!(format_listing(&[row.clone()]), row.to_string());
        assert_eq!(format_listing(&[]), EMPTY_INVENTORY);
    }

    #[test]
    fn test_row_json_uses_column_names() {
        let row = ProductRow {
            code: 7.0,
            name: "Milk".to_string(),
            price: 1.25,
            quantity: 12,
            product_type: ProductType::Perishable,
            warranty: None,
            expiration: Some(date(2026, 12, 1)),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], json!("Perishable"));
        assert_eq!(value["expiration"], json!("2026-12-01"));
        assert_eq!(value["warranty"], Value::Null);
        assert!(value.get("product_type").is_none());

        let back: ProductRow = serde_json::from_value(value).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_row_to_item() {
        let mut row = ProductRow {
            code: 7.0,
            name: "Milk".to_string(),
            price: 1.25,
            quantity: 12,
            product_type: ProductType::Perishable,
            warranty: None,
            expiration: Some(date(2026, 12, 1)),
        };
        let item = row.to_item().unwrap();
        assert_eq!(item.code(), 7.0);
        assert_eq!(item.product_type(), ProductType::Perishable);

        row.expiration = None;
        assert!(matches!(
            row.to_item(),
            Err(CoreError::IncompleteRow { code, .. }) if code == 7.0
        ));
    }

    #[test]
    fn test_product_type_round_trip() {
        for ty in [ProductType::Electronic, ProductType::Perishable] {
            assert_eq!(ty.as_str().parse::<ProductType>().unwrap(), ty);
        }
        assert!("ProductoElectronico".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_update_validates_ranges() {
        assert!(ProductUpdate::new("mouse", -1.0, 1).is_err());
        assert!(ProductUpdate::new("mouse", 1.0, -1).is_err());

        let update = ProductUpdate::new("milk", 1.0, 1)
            .unwrap()
            .with_expiration(date(2027, 1, 1));
        assert_eq!(update.warranty(), None);
        assert_eq!(update.expiration(), Some(date(2027, 1, 1)));
    }
}
