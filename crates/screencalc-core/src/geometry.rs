//! Screen geometry: diagonals, aspect ratios, unit conversions, pixel density.
//!
//! Everything here is a pure function over `f64`. Inputs are validated up
//! front: a non-positive diagonal, ratio, or resolution is a
//! [`GeometryError::Domain`], never a silent NaN.

use crate::error::GeometryError;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Euclidean length of the diagonal spanned by sides `a` and `b`.
#[must_use]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Convert inches to centimeters.
#[must_use]
pub fn inches_to_centimeters(x: f64) -> f64 {
    x * CM_PER_INCH
}

/// Convert centimeters to inches. Exact inverse of [`inches_to_centimeters`]
/// up to floating-point tolerance.
#[must_use]
pub fn centimeters_to_inches(x: f64) -> f64 {
    x / CM_PER_INCH
}

/// A width-to-height proportion, either already normalized (`1.778`) or as a
/// `width:height` pair (`16:9`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AspectRatio {
    /// A bare ratio value, `width / height`.
    Value(f64),
    /// A `(width, height)` pair, normalized on use.
    Pair(f64, f64),
}

impl AspectRatio {
    /// Build a ratio from a slice, which must hold exactly two elements.
    pub fn from_slice(parts: &[f64]) -> Result<Self, GeometryError> {
        match parts {
            [w, h] => Ok(Self::Pair(*w, *h)),
            _ => Err(GeometryError::InvalidRatio { len: parts.len() }),
        }
    }

    /// Reduce to a single `width / height` value. A bare value passes
    /// through unchanged; a pair divides.
    pub fn normalize(self) -> Result<f64, GeometryError> {
        match self {
            Self::Value(r) => Ok(r),
            Self::Pair(w, h) => {
                if h <= 0.0 {
                    Err(GeometryError::Domain("ratio height must be positive"))
                } else {
                    Ok(w / h)
                }
            }
        }
    }
}

impl From<f64> for AspectRatio {
    fn from(r: f64) -> Self {
        Self::Value(r)
    }
}

impl From<(f64, f64)> for AspectRatio {
    fn from((w, h): (f64, f64)) -> Self {
        Self::Pair(w, h)
    }
}

impl From<(u32, u32)> for AspectRatio {
    fn from((w, h): (u32, u32)) -> Self {
        Self::Pair(f64::from(w), f64::from(h))
    }
}

/// Solve for the sides of a rectangle given its diagonal `c` and aspect
/// ratio `r = width / height`. Returns `(width, height)` in the diagonal's
/// unit.
///
/// From `a² + b² = c²` and `a = b·r`: `b = sqrt(c² / (r² + 1))`.
pub fn sides_from_diagonal(
    diagonal: f64,
    ratio: impl Into<AspectRatio>,
) -> Result<(f64, f64), GeometryError> {
    if diagonal <= 0.0 {
        return Err(GeometryError::Domain("diagonal must be positive"));
    }
    let r = ratio.into().normalize()?;
    if r <= 0.0 {
        return Err(GeometryError::Domain("aspect ratio must be positive"));
    }
    let height = (diagonal * diagonal / (r * r + 1.0)).sqrt();
    Ok((height * r, height))
}

/// Pixels per inch of an `x_res` by `y_res` panel with the given diagonal
/// in inches, assuming square pixels and a rectangular panel.
///
/// Computes `sqrt(total_pixels / total_area_in²)`, with the sides obtained
/// via [`sides_from_diagonal`] from the resolution's own aspect ratio.
pub fn pixel_density(x_res: u32, y_res: u32, diagonal_in: f64) -> Result<f64, GeometryError> {
    if x_res == 0 || y_res == 0 {
        return Err(GeometryError::Domain("resolution must be positive"));
    }
    let (width_in, height_in) = sides_from_diagonal(diagonal_in, (x_res, y_res))?;
    let total_pixels = f64::from(x_res) * f64::from(y_res);
    Ok((total_pixels / (width_in * height_in)).sqrt())
}
