//! # Validation Module
//!
//! Field validators for shipment requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (apps/api)                                      │
//! │  ├── JSON shape and types (deserialization)                            │
//! │  └── Rejects missing fields with INVALID_BODY                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── email / name / address syntax                                     │
//! │  ├── country code syntax + ISO existence                               │
//! │  └── weight range                                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL / CHECK constraints                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator is pure and ASCII-only: the same string always gives the
//! same answer regardless of locale or call order.
//!
//! ## Usage
//! ```rust
//! use shipment_core::validation::{validate_email, validate_weight};
//!
//! assert!(validate_email("test@gmail.com").is_ok());
//! assert!(validate_weight(1000.0).is_ok());
//! assert!(validate_weight(0.0).is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::country::{CountryReference, IsoCountries};
use crate::error::ValidationError;
use crate::{MAX_ADDRESS_LENGTH, MAX_NAME_LENGTH, MAX_WEIGHT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// local-part@label(.label)+ where each label is 1-63 alphanumerics with
/// optional inner hyphens.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("Invalid email regex pattern")
});

/// "street words number, city words number"
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^[a-zA-Z\s]+\s[0-9]+,\s[a-zA-Z0-9\s]+\s[0-9]+$")
        .expect("Invalid address regex pattern")
});

// =============================================================================
// String Validators
// =============================================================================

/// Validates an email address.
///
/// ## Example
/// ```rust
/// use shipment_core::validation::validate_email;
///
/// assert!(validate_email("test@gmail.com").is_ok());
/// assert!(validate_email("testgmail.com").is_err());
/// assert!(validate_email("test@gmail.").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a sender or receiver name.
///
/// ## Rules
/// - Must not be empty
/// - At most 30 characters
/// - No digits anywhere
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.is_empty()
        || name.chars().count() > MAX_NAME_LENGTH
        || name.bytes().any(|b| b.is_ascii_digit())
    {
        return Err(ValidationError::InvalidName);
    }

    Ok(())
}

/// Validates a country code against the built-in ISO table.
///
/// ## Rules
/// - Exactly two uppercase ASCII letters, else `InvalidCountryCode`
/// - Must name a real country, else `UnknownCountryCode`
///
/// ## Example
/// ```rust
/// use shipment_core::validation::validate_country_code;
/// use shipment_core::ValidationError;
///
/// assert!(validate_country_code("SE").is_ok());
/// assert!(matches!(
///     validate_country_code("XX"),
///     Err(ValidationError::UnknownCountryCode { .. })
/// ));
/// ```
pub fn validate_country_code(code: &str) -> ValidationResult<()> {
    validate_country_code_with(code, &IsoCountries)
}

/// Validates a country code against the given reference data.
pub fn validate_country_code_with(
    code: &str,
    countries: &dyn CountryReference,
) -> ValidationResult<()> {
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidCountryCode {
            code: code.to_string(),
        });
    }

    if !countries.exists(code) {
        return Err(ValidationError::UnknownCountryCode {
            code: code.to_string(),
        });
    }

    Ok(())
}

/// Validates a postal address.
///
/// ## Rules
/// - At most 100 characters
/// - Shape: `<street words> <number>, <city words> <number>`
///
/// ## Example
/// ```rust
/// use shipment_core::validation::validate_address;
///
/// assert!(validate_address("Shevchenka street 45, Lviv 79000").is_ok());
/// assert!(validate_address("Lviv, 45").is_err());
/// ```
pub fn validate_address(address: &str) -> ValidationResult<()> {
    if address.chars().count() > MAX_ADDRESS_LENGTH || !ADDRESS_PATTERN.is_match(address) {
        return Err(ValidationError::InvalidAddress);
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a shipment weight.
///
/// ## Rules
/// - Must be in `(0, 1000]`; NaN is rejected
pub fn validate_weight(weight: f64) -> ValidationResult<()> {
    if weight.is_nan() || weight <= 0.0 || weight > MAX_WEIGHT {
        return Err(ValidationError::InvalidWeight { weight });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
