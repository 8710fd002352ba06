//! Reduce typed values to a dynamic tree of records, lists, dicts and scalars.
//!
//! ```ignore
//! use convstruct::{convert, Convert};
//!
//! #[derive(Convert)]
//! pub struct Quote {
//!     #[tag(json = "symbol")]
//!     pub symbol: String,
//!     pub bid: f64,
//!     cursor: u64,
//! }
//!
//! // Record { "symbol": .., "bid": .. }; `cursor` is private and skipped.
//! let value = convert(&quote, None);
//! ```

extern crate self as convstruct;

pub mod convert;
pub mod error;
pub mod field;
pub mod options;
pub mod scalar;
pub mod value;

mod json;
mod ser;

#[cfg(feature = "tokio")]
mod channel;

pub use convert::{convert, Convert, ConvertKey, Converter};
pub use convstruct_derive::Convert;
pub use error::ConvertError;
pub use field::{FieldInfo, Fields};
pub use options::ConvertOptions;
pub use scalar::{Complex, Scalar};
pub use value::{Dict, DynamicValue, KeyKind, Kind, MapKey, Record};
