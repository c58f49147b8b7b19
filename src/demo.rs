//! Fixed demonstration sequence printed by the `em-fields` binary.

use std::io::Write;

use tracing::{debug, info_span};

use crate::errors::DemoError;
use crate::fields::{ElectricField, MagneticField};
use crate::math::{format_general, Scalar, DISPLAY_PRECISION};

/// How the demo evaluates the field formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceCheck {
    /// Plain formulas; degenerate distances print `inf` or `nan`.
    #[default]
    Unchecked,
    /// Use the `try_*` calculations and stop on the first rejected input.
    Strict,
}

/// Source quantities used by the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Point charge in coulombs.
    pub charge: Scalar,
    /// Distance from the point charge in meters.
    pub electric_distance: Scalar,
    /// Wire current in amperes.
    pub current: Scalar,
    /// Distance from the wire in meters.
    pub magnetic_distance: Scalar,
    /// Evaluation mode.
    pub mode: DistanceCheck,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            charge: 1.0e-9,
            electric_distance: 0.1,
            current: 1.0,
            magnetic_distance: 0.1,
            mode: DistanceCheck::Unchecked,
        }
    }
}

impl DemoConfig {
    /// Returns the configuration with strict distance checking enabled.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.mode = DistanceCheck::Strict;
        self
    }
}

/// Runs the electric then magnetic demonstration, writing eight lines to `out`.
///
/// # Errors
///
/// Returns [`DemoError::Io`] when `out` fails and [`DemoError::Field`] when strict mode
/// rejects a source quantity. Lines written before the failure stay written.
pub fn run<W: Write>(config: &DemoConfig, mut out: W) -> Result<(), DemoError> {
    let _span = info_span!("demo", mode = ?config.mode).entered();

    let mut e1 = ElectricField::new(1.0, 2.0, 3.0);
    let e2 = ElectricField::new(4.0, 5.0, 6.0);

    write!(out, "Electric Field e1: ")?;
    e1.components().write_components(&mut out)?;
    write!(out, "Electric Field e2: ")?;
    e2.components().write_components(&mut out)?;

    let e = match config.mode {
        DistanceCheck::Unchecked => {
            e1.calculate_electric_field(config.charge, config.electric_distance)
        }
        DistanceCheck::Strict => {
            e1.try_calculate_electric_field(config.charge, config.electric_distance)?
        }
    };
    writeln!(out, "Calculated Electric Field: {} N/C", format_general(e, DISPLAY_PRECISION))?;

    let e3 = e1 + e2;
    writeln!(out, "e3 = e1 + e2: {e3}")?;

    let mut b1 = MagneticField::new(7.0, 8.0, 9.0);
    let b2 = MagneticField::new(10.0, 11.0, 12.0);

    write!(out, "Magnetic Field b1: ")?;
    b1.components().write_components(&mut out)?;
    write!(out, "Magnetic Field b2: ")?;
    b2.components().write_components(&mut out)?;

    let b = match config.mode {
        DistanceCheck::Unchecked => {
            b1.calculate_magnetic_field(config.current, config.magnetic_distance)
        }
        DistanceCheck::Strict => {
            b1.try_calculate_magnetic_field(config.current, config.magnetic_distance)?
        }
    };
    writeln!(out, "Calculated Magnetic Field: {} T", format_general(b, DISPLAY_PRECISION))?;

    let b3 = b1 + b2;
    writeln!(out, "b3 = b1 + b2: {b3}")?;

    out.flush()?;
    debug!("demo finished");
    Ok(())
}
