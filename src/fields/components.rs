use std::fmt;
use std::io::{self, Write};
use std::ops::Add;

use crate::math::{format_general, Scalar, DISPLAY_PRECISION, R3};

/// Cartesian (x, y, z) components shared by every field type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    vector: R3,
}

impl Components {
    /// Creates components from explicit values.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { vector: R3::new(x, y, z) }
    }

    /// Wraps an existing vector.
    #[must_use]
    pub const fn from_vector(vector: R3) -> Self {
        Self { vector }
    }

    /// x component.
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.vector.x
    }

    /// y component.
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.vector.y
    }

    /// z component.
    #[must_use]
    pub fn z(&self) -> Scalar {
        self.vector.z
    }

    /// Replaces the x component.
    pub fn set_x(&mut self, x: Scalar) {
        self.vector.x = x;
    }

    /// Replaces the y component.
    pub fn set_y(&mut self, y: Scalar) {
        self.vector.y = y;
    }

    /// Replaces the z component.
    pub fn set_z(&mut self, z: Scalar) {
        self.vector.z = z;
    }

    /// Borrows the underlying vector.
    #[must_use]
    pub const fn as_vector(&self) -> &R3 {
        &self.vector
    }

    /// Euclidean length of the components.
    #[must_use]
    pub fn norm(&self) -> Scalar {
        self.vector.norm()
    }

    /// Writes `Components: (x, y, z)` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write_components<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }

    /// Prints `Components: (x, y, z)` to standard output.
    ///
    /// Write failures are ignored; use [`Self::write_components`] to observe them.
    pub fn print_components(&self) {
        let _ = self.write_components(io::stdout().lock());
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<R3> for Components {
    fn from(vector: R3) -> Self {
        Self::from_vector(vector)
    }
}

impl Add for Components {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { vector: self.vector + rhs.vector }
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Components: ({}, {}, {})",
            format_general(self.x(), DISPLAY_PRECISION),
            format_general(self.y(), DISPLAY_PRECISION),
            format_general(self.z(), DISPLAY_PRECISION),
        )
    }
}
