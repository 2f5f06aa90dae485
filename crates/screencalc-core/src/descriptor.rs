//! The display descriptor: resolution, diagonal, and derived metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GeometryError;
use crate::geometry::{self, inches_to_centimeters};

/// Physical panel dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSize {
    /// Panel width in centimeters.
    pub width_cm: f64,
    /// Panel height in centimeters.
    pub height_cm: f64,
}

/// Everything known about one display: resolution, diagonal, and the derived
/// pixel density and physical size.
///
/// Any field may be unknown; a derived field whose inputs are missing stays
/// `None` rather than erroring. Derived fields are computed eagerly at
/// construction and the value is immutable afterwards, so constructing twice
/// from the same inputs always yields identical metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayDescriptor {
    horizontal_px: Option<u32>,
    vertical_px: Option<u32>,
    diagonal_in: Option<f64>,
    physical_size: Option<PhysicalSize>,
    pixel_density: Option<f64>,
}

impl DisplayDescriptor {
    /// Construct a descriptor from whichever fields are known and compute
    /// the derived metrics.
    ///
    /// Fails with [`GeometryError::Domain`] when the supplied fields are
    /// present but out of domain (zero resolution, non-positive diagonal).
    pub fn new(
        horizontal_px: Option<u32>,
        vertical_px: Option<u32>,
        diagonal_in: Option<f64>,
        physical_size: Option<PhysicalSize>,
    ) -> Result<Self, GeometryError> {
        let mut descriptor = Self {
            horizontal_px,
            vertical_px,
            diagonal_in,
            physical_size,
            pixel_density: None,
        };
        descriptor.derive()?;
        Ok(descriptor)
    }

    /// Convenience constructor for a fully specified display.
    pub fn from_resolution(
        horizontal_px: u32,
        vertical_px: u32,
        diagonal_in: f64,
    ) -> Result<Self, GeometryError> {
        Self::new(Some(horizontal_px), Some(vertical_px), Some(diagonal_in), None)
    }

    /// Horizontal resolution in pixels, if known.
    #[must_use]
    pub const fn horizontal_px(&self) -> Option<u32> {
        self.horizontal_px
    }

    /// Vertical resolution in pixels, if known.
    #[must_use]
    pub const fn vertical_px(&self) -> Option<u32> {
        self.vertical_px
    }

    /// Diagonal in inches, if known.
    #[must_use]
    pub const fn diagonal_in(&self) -> Option<f64> {
        self.diagonal_in
    }

    /// Physical panel size, if known or derivable.
    #[must_use]
    pub const fn physical_size(&self) -> Option<PhysicalSize> {
        self.physical_size
    }

    /// Pixels per inch, if derivable.
    #[must_use]
    pub const fn pixel_density(&self) -> Option<f64> {
        self.pixel_density
    }

    /// Fill in the derived fields where enough inputs are present. Missing
    /// inputs leave the derived field unknown.
    fn derive(&mut self) -> Result<(), GeometryError> {
        let (Some(x), Some(y), Some(diag)) =
            (self.horizontal_px, self.vertical_px, self.diagonal_in)
        else {
            return Ok(());
        };

        self.pixel_density = Some(geometry::pixel_density(x, y, diag)?);

        if self.physical_size.is_none() {
            let (width_in, height_in) = geometry::sides_from_diagonal(diag, (x, y))?;
            self.physical_size = Some(PhysicalSize {
                width_cm: inches_to_centimeters(width_in),
                height_cm: inches_to_centimeters(height_in),
            });
        }
        Ok(())
    }
}

impl fmt::Display for DisplayDescriptor {
    /// Render the descriptor in the compact angle-bracket form:
    ///
    /// ```text
    /// <1920x1080>                            resolution only
    /// <1920x1080 @24">                       resolution and diagonal
    /// <1920x1080 @24", ppi=91.79>            unknown size
    /// <1920x1080 @24", size=531*299>         unknown density, size in mm
    /// <1920x1080 @24", ppi=91.79, size=531*299>
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self
            .horizontal_px
            .map_or_else(|| "?".to_string(), |v| v.to_string());
        let y = self
            .vertical_px
            .map_or_else(|| "?".to_string(), |v| v.to_string());

        let Some(diag) = self.diagonal_in else {
            return write!(f, "<{x}x{y}>");
        };

        write!(f, "<{x}x{y} @{diag}\"")?;
        if let Some(ppi) = self.pixel_density {
            write!(f, ", ppi={ppi:.2}")?;
        }
        if let Some(size) = self.physical_size {
            // Rendered in millimeters, as whole numbers.
            write!(f, ", size={:.0}*{:.0}", size.width_cm * 10.0, size.height_cm * 10.0)?;
        }
        write!(f, ">")
    }
}
