//! Structured comparison of two display descriptors.
//!
//! Pure computation only: each field reports both side values and their
//! ordering, and the caller decides how to render that (tables, colors,
//! whatever). A field with an unknown value on either side compares as
//! `None` — absence propagates, the same as in the descriptor itself.

use std::cmp::Ordering;

use crate::descriptor::DisplayDescriptor;

/// Comparison of one metric across two descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldComparison {
    /// Value on the left-hand descriptor, if known.
    pub left: Option<f64>,
    /// Value on the right-hand descriptor, if known.
    pub right: Option<f64>,
    /// `left` relative to `right`; `None` when either side is unknown.
    pub order: Option<Ordering>,
}

impl FieldComparison {
    fn new(left: Option<f64>, right: Option<f64>) -> Self {
        let order = match (left, right) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => None,
        };
        Self { left, right, order }
    }
}

/// Per-field comparison of two descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptorComparison {
    /// Horizontal resolution, pixels.
    pub horizontal_px: FieldComparison,
    /// Vertical resolution, pixels.
    pub vertical_px: FieldComparison,
    /// Diagonal, inches.
    pub diagonal_in: FieldComparison,
    /// Pixel density, ppi.
    pub pixel_density: FieldComparison,
    /// Physical width, centimeters.
    pub width_cm: FieldComparison,
    /// Physical height, centimeters.
    pub height_cm: FieldComparison,
}

/// Compare two descriptors field by field.
#[must_use]
pub fn compare(left: &DisplayDescriptor, right: &DisplayDescriptor) -> DescriptorComparison {
    DescriptorComparison {
        horizontal_px: FieldComparison::new(
            left.horizontal_px().map(f64::from),
            right.horizontal_px().map(f64::from),
        ),
        vertical_px: FieldComparison::new(
            left.vertical_px().map(f64::from),
            right.vertical_px().map(f64::from),
        ),
        diagonal_in: FieldComparison::new(left.diagonal_in(), right.diagonal_in()),
        pixel_density: FieldComparison::new(left.pixel_density(), right.pixel_density()),
        width_cm: FieldComparison::new(
            left.physical_size().map(|s| s.width_cm),
            right.physical_size().map(|s| s.width_cm),
        ),
        height_cm: FieldComparison::new(
            left.physical_size().map(|s| s.height_cm),
            right.physical_size().map(|s| s.height_cm),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_taller_panel_wins_height() {
        // 13.5" 3:2 panel vs 14.1" 16:9 panel: the 3:2 one is taller
        // despite the smaller diagonal.
        let squarish = DisplayDescriptor::from_resolution(3000, 2000, 13.5).expect("valid");
        let wide = DisplayDescriptor::from_resolution(1920, 1080, 14.1).expect("valid");

        let comparison = compare(&squarish, &wide);
        assert_eq!(comparison.diagonal_in.order, Some(Ordering::Less));
        assert_eq!(comparison.height_cm.order, Some(Ordering::Greater));
        assert_eq!(comparison.width_cm.order, Some(Ordering::Less));
    }

    #[test]
    fn test_compare_equal_descriptors() {
        let a = DisplayDescriptor::from_resolution(1920, 1080, 24.0).expect("valid");
        let comparison = compare(&a, &a);
        assert_eq!(comparison.horizontal_px.order, Some(Ordering::Equal));
        assert_eq!(comparison.pixel_density.order, Some(Ordering::Equal));
        assert_eq!(comparison.width_cm.order, Some(Ordering::Equal));
    }

    #[test]
    fn test_compare_unknown_propagates() {
        let full = DisplayDescriptor::from_resolution(1920, 1080, 24.0).expect("valid");
        let partial = DisplayDescriptor::new(Some(1920), Some(1080), None, None).expect("valid");

        let comparison = compare(&full, &partial);
        assert_eq!(comparison.horizontal_px.order, Some(Ordering::Equal));
        assert_eq!(comparison.diagonal_in.order, None);
        assert_eq!(comparison.pixel_density.order, None);
        assert_eq!(comparison.height_cm.order, None);
        assert_eq!(comparison.diagonal_in.left, Some(24.0));
        assert_eq!(comparison.diagonal_in.right, None);
    }
}
