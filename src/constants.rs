//! Vacuum constants used by the field calculations.
//!
//! ## Accuracy
//!
//! ε₀ uses the pre-2019 CODATA value 8.854187817 × 10⁻¹² F/m, and μ₀ the classical
//! defined value 4π × 10⁻⁷ H/m. Both are kept at these textbook values so that printed
//! magnitudes match hand calculations. For CODATA 2018/2022 values consult NIST:
//! <https://physics.nist.gov/cuu/Constants/>

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_817e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m), 4π × 10⁻⁷.
pub const VACUUM_PERMEABILITY: Scalar = 4.0 * PI * 1.0e-7;
/// Coulomb constant k = 1 / (4π ε₀) in N·m²/C².
pub const COULOMB_CONSTANT: Scalar = 1.0 / (4.0 * PI * VACUUM_PERMITTIVITY);
