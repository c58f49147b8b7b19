use std::fmt;
use std::ops::Add;

use tracing::{debug, warn};

use super::{validate_source, Components};
use crate::constants::COULOMB_CONSTANT;
use crate::errors::FieldError;
use crate::math::Scalar;

/// Coulomb field magnitude `k Q / r²` in N/C at `distance_m` from a point charge,
/// with `k = 1 / (4π ε₀)`.
///
/// No guard on the distance: `r = 0` yields `±inf` (or `NaN` for a zero charge).
#[inline]
#[must_use]
pub fn coulomb_field_magnitude(charge_c: Scalar, distance_m: Scalar) -> Scalar {
    COULOMB_CONSTANT * charge_c / (distance_m * distance_m)
}

/// Electric field vector paired with the last Coulomb magnitude computed for it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricField {
    components: Components,
    /// Last computed magnitude in N/C; `NaN` until computed.
    calculated_e: Scalar,
}

impl ElectricField {
    /// Creates a field with explicit components.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::from_components(Components::new(x, y, z))
    }

    /// Creates a field from existing components.
    #[must_use]
    pub const fn from_components(components: Components) -> Self {
        Self { components, calculated_e: Scalar::NAN }
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

    /// Computes and stores the field magnitude of a point charge `charge_c` (C) at
    /// `distance_m` (m). Degenerate distances produce non-finite values.
    pub fn calculate_electric_field(&mut self, charge_c: Scalar, distance_m: Scalar) -> Scalar {
        let magnitude = coulomb_field_magnitude(charge_c, distance_m);
        debug!(charge = charge_c, distance = distance_m, magnitude, "calculated electric field");
        if !magnitude.is_finite() {
            warn!(charge = charge_c, distance = distance_m, "electric field magnitude is not finite");
        }
        self.calculated_e = magnitude;
        magnitude
    }

    /// Strict variant of [`Self::calculate_electric_field`].
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NonFiniteInput`] for an infinite or NaN charge and
    /// [`FieldError::NonPositiveDistance`] when the distance is not strictly positive.
    /// The stored magnitude is left unchanged on error.
    pub fn try_calculate_electric_field(
        &mut self,
        charge_c: Scalar,
        distance_m: Scalar,
    ) -> Result<Scalar, FieldError> {
        validate_source("charge", charge_c, distance_m)?;
        Ok(self.calculate_electric_field(charge_c, distance_m))
    }

    /// Last computed magnitude in N/C, or `NaN` if none was computed.
    #[must_use]
    pub const fn calculated_e(&self) -> Scalar {
        self.calculated_e
    }
}

impl Default for ElectricField {
    fn default() -> Self {
        Self::from_components(Components::default())
    }
}

impl Add for ElectricField {
    type Output = Self;

    /// Sums the components; the result carries no computed magnitude.
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_components(self.components + rhs.components)
    }
}

impl fmt::Display for ElectricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Electric Field {}", self.components)
    }
}
