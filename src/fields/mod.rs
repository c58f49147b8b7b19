//! Field value types and the closed-form magnitudes they carry.

mod components;
mod electric;
mod magnetic;

pub use components::Components;
pub use electric::{coulomb_field_magnitude, ElectricField};
pub use magnetic::{infinite_wire_field_magnitude, MagneticField};

use crate::errors::FieldError;
use crate::math::Scalar;

/// Input check shared by the strict `try_*` calculations.
fn validate_source(name: &'static str, value: Scalar, distance_m: Scalar) -> Result<(), FieldError> {
    if !value.is_finite() {
        return Err(FieldError::NonFiniteInput { name, value });
    }
    if distance_m.is_nan() || distance_m <= 0.0 {
        return Err(FieldError::NonPositiveDistance(distance_m));
    }
    Ok(())
}
