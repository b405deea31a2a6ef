//! foodscan - barcode to dietary verdict
//!
//! foodscan turns a product barcode into a "YES / NO / MODERATE" verdict for a
//! dietary profile. The two stateful pieces are:
//!
//! 1. **Scan trigger** ([`scanner`]): decides when the camera's decoder may
//!    report a reading, debounces repeated reads, and times out unproductive
//!    scans.
//! 2. **Product resolution** ([`product`]): fetches the product record from
//!    Open Food Facts, normalizes it, evaluates the diet rules ([`analysis`]),
//!    and substitutes a fixed record for the demo barcode.
//!
//! [`lookup_product`] is the single entry point for callers that already hold
//! a payload; it never fails, every failure resolves to `None`.

pub mod analysis;
pub mod config;
pub mod domain;
pub mod pipeline;
pub mod product;
pub mod scanner;

pub use domain::*;
pub use product::lookup_product;
