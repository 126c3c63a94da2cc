//! ISO 3166-1 country code tables.
//!
//! Conversions between the three code forms of a country:
//!
//! - **alpha-2**: two uppercase letters (`US`)
//! - **alpha-3**: three uppercase letters (`USA`)
//! - **numeric**: three zero-padded digits (`840`)
//!
//! Alpha input is case-insensitive. Numeric input may be text (`"4"`,
//! `"004"`) or an integer (`4`). Malformed input and unknown codes are
//! reported separately, see [`CodeError::kind`].
//!
//! ```rust
//! use country_codes::{alpha2_to_alpha3, is_valid, to_alpha2};
//!
//! assert_eq!(alpha2_to_alpha3("us").unwrap(), "USA");
//! assert_eq!(to_alpha2(276).unwrap(), "DE");
//! assert!(!is_valid("not a code"));
//! ```

mod data;
mod error;
mod input;
mod tables;

pub use error::{CodeError, ErrorKind};
pub use input::{detect, CodeForm, CodeInput, DetectedCode};
pub use tables::{
    alpha2_codes, alpha2_to_alpha3, alpha2_to_numeric, alpha3_codes, alpha3_to_alpha2,
    alpha3_to_numeric, countries, is_valid, lookup, numeric_codes, numeric_to_alpha2,
    numeric_to_alpha3, to_alpha2, to_alpha3, to_numeric, Country,
};
