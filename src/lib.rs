#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Vacuum constants used by the field formulas.
pub mod constants;
/// Shared numerical aliases and number formatting.
pub mod math;
/// Electric and magnetic field value types.
pub mod fields;
/// Error types for strict calculations and the demo driver.
pub mod errors;
/// The fixed demonstration run by the binary.
pub mod demo;

/// Common exports for downstream crates.
pub mod prelude;
