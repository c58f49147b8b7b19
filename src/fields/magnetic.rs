use std::f64::consts::PI;
use std::fmt;
use std::ops::Add;

use tracing::{debug, warn};

use super::{validate_source, Components};
use crate::constants::VACUUM_PERMEABILITY;
use crate::errors::FieldError;
use crate::math::Scalar;

/// Flux density `μ₀ I / (2π r)` in tesla at `distance_m` from an infinite straight wire.
#[inline]
#[must_use]
pub fn infinite_wire_field_magnitude(current_a: Scalar, distance_m: Scalar) -> Scalar {
    (VACUUM_PERMEABILITY * current_a) / (2.0 * PI * distance_m)
}

/// Magnetic field vector paired with the last Ampère magnitude computed for it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticField {
    components: Components,
    /// Last computed flux density in T; `NaN` until computed.
    calculated_b: Scalar,
}

impl MagneticField {
    /// Creates a field with explicit components.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::from_components(Components::new(x, y, z))
    }

    /// Creates a field from existing components.
    #[must_use]
    pub const fn from_components(components: Components) -> Self {
        Self { components, calculated_b: Scalar::NAN }
    }

    /// Borrows the field components.
    #[must_use]
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// Mutably borrows the field components.
    pub fn components_mut(&mut self) -> &mut Components {
        &mut self.components
    }

    /// Computes and stores the flux density of a wire carrying `current_a` (A) at
    /// `distance_m` (m).
    pub fn calculate_magnetic_field(&mut self, current_a: Scalar, distance_m: Scalar) -> Scalar {
        let magnitude = infinite_wire_field_magnitude(current_a, distance_m);
        debug!(current = current_a, distance = distance_m, magnitude, "calculated magnetic field");
        if !magnitude.is_finite() {
            warn!(current = current_a, distance = distance_m, "magnetic field magnitude is not finite");
        }
        self.calculated_b = magnitude;
        magnitude
    }

    /// Strict variant of [`Self::calculate_magnetic_field`].
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NonFiniteInput`] for an infinite or NaN current and
    /// [`FieldError::NonPositiveDistance`] when the distance is not strictly positive.
    pub fn try_calculate_magnetic_field(
        &mut self,
        current_a: Scalar,
        distance_m: Scalar,
    ) -> Result<Scalar, FieldError> {
        validate_source("current", current_a, distance_m)?;
        Ok(self.calculate_magnetic_field(current_a, distance_m))
    }

    /// Last computed flux density in T, or `NaN` if none was computed.
    #[must_use]
    pub const fn calculated_b(&self) -> Scalar {
        self.calculated_b
    }
}

impl Default for MagneticField {
    fn default() -> Self {
        Self::from_components(Components::default())
    }
}

impl Add for MagneticField {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_components(self.components + rhs.components)
    }
}

impl fmt::Display for MagneticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magnetic Field {}", self.components)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn one_amp_at_ten_centimeters() {
        let mut field = MagneticField::new(7.0, 8.0, 9.0);
        let b = field.calculate_magnetic_field(1.0, 0.1);
        assert_relative_eq!(b, 2.0e-6, max_relative = 1.0e-12);
        assert_eq!(field.calculated_b(), b);
    }

    #[test]
    fn zero_distance_is_not_guarded() {
        let mut field = MagneticField::default();
        assert!(field.calculate_magnetic_field(1.0, 0.0).is_infinite());
        assert!(field.calculate_magnetic_field(0.0, 0.0).is_nan());
    }

    #[test]
    fn strict_mode_rejects_negative_distance() {
        let mut field = MagneticField::default();
        assert_eq!(
            field.try_calculate_magnetic_field(1.0, -0.1),
            Err(FieldError::NonPositiveDistance(-0.1))
        );
        assert!(field.calculated_b().is_nan());
        assert!(matches!(
            field.try_calculate_magnetic_field(Scalar::INFINITY, 0.1),
            Err(FieldError::NonFiniteInput { name: "current", .. })
        ));
    }

    #[test]
    fn sum_adds_components() {
        let b3 = MagneticField::new(7.0, 8.0, 9.0) + MagneticField::new(10.0, 11.0, 12.0);
        assert_eq!(b3.to_string(), "Magnetic Field Components: (17, 19, 21)");
        assert!(b3.calculated_b().is_nan());
        assert_eq!(MagneticField::default().components().norm(), 0.0);
    }

    #[test]
    fn sum_is_commutative() {
        let a = MagneticField::new(7.0, -8.5, 9.0);
        let b = MagneticField::new(-10.0, 11.0, 0.125);
        assert_eq!((a + b).components(), (b + a).components());
        assert_eq!((a + b).to_string(), (b + a).to_string());
    }
}
