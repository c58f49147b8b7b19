//! Convenience re-exports for working with field values.

pub use crate::constants::*;
pub use crate::demo::{DemoConfig, DistanceCheck};
pub use crate::errors::{DemoError, FieldError};
pub use crate::fields::{
    coulomb_field_magnitude, infinite_wire_field_magnitude, Components, ElectricField,
    MagneticField,
};
pub use crate::math::{format_general, Scalar, DISPLAY_PRECISION, R3};
