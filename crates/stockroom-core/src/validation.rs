//! # Validation Module
//!
//! Input validation and normalization for product fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (outside this workspace)                           │
//! │  └── Collects raw text: code "101", name "mouse", ...                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Product construction                                         │
//! │  └── THIS MODULE: code parsing, price / quantity ranges                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── PRIMARY KEY on code (duplicates)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{capitalize, parse_code};
//!
//! assert_eq!(parse_code("101").unwrap(), 101.0);
//! assert!(parse_code("abc").is_err());
//! assert_eq!(capitalize("mOUSE pad"), "Mouse pad");
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Date format used for expiration dates in field maps and the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Product Code
// =============================================================================

/// Parses and validates a product code supplied as text.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must parse as a finite number (`"101"`, `"2.5"` and `"1e2"` are all numbers)
/// - Must be strictly positive
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_code;
///
/// assert_eq!(parse_code(" 42 ").unwrap(), 42.0);
/// assert_eq!(parse_code("2.5").unwrap(), 2.5);
/// assert!(parse_code("0").is_err());
/// assert!(parse_code("-3").is_err());
/// assert!(parse_code("twelve").is_err());
/// ```
pub fn parse_code(raw: &str) -> ValidationResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid_format("code", "must be a valid number"))?;

    validate_code(value)
}

/// Validates an already-numeric product code.
///
/// ## Rules
/// - Must be finite (no NaN / infinity)
/// - Must be strictly positive (> 0)
pub fn validate_code(code: f64) -> ValidationResult<f64> {
    if !code.is_finite() {
        return Err(ValidationError::invalid_format("code", "must be a valid number"));
    }

    if code <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "code".to_string(),
        });
    }

    Ok(code)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number (no NaN / infinity)
/// - Must be non-negative (>= 0); zero is allowed for free items
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(9.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<f64> {
    if !price.is_finite() {
        return Err(ValidationError::invalid_format("price", "must be a finite number"));
    }

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(price)
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0); an empty shelf is a valid state
pub fn validate_quantity(quantity: i64) -> ValidationResult<i64> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(quantity)
}

// =============================================================================
// Text Normalization
// =============================================================================

/// Returns the display form of a product name.
///
/// The first character is title-cased and the rest lower-cased. Applying it
/// twice yields the same string.
///
/// Title case differs from upper case for characters that expand: `ß`
/// becomes `Ss`, not `SS`, so the lower-casing of the tail stays stable.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::capitalize;
///
/// assert_eq!(capitalize("mouse"), "Mouse");
/// assert_eq!(capitalize("USB HUB"), "Usb hub");
/// assert_eq!(capitalize("ßeta"), "Sseta");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(name.len());
    push_titlecase(&mut out, first);
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// Appends the title-case mapping of `c`.
///
/// The mapping table pads with zeros and is all zeros when `c` maps to
/// itself.
fn push_titlecase(out: &mut String, c: char) {
    let before = out.len();
    out.extend(
        unicode_case_mapping::to_titlecase(c)
            .into_iter()
            .take_while(|&cp| cp != 0)
            .filter_map(char::from_u32),
    );
    if out.len() == before {
        out.push(c);
    }
}

/// Parses an ISO `YYYY-MM-DD` expiration date.
pub fn parse_date(field: &str, raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
