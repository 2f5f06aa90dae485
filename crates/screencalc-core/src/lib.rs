//! Core types and math for the screencalc display calculator.
//!
//! This crate provides:
//! - The geometry engine: [`hypotenuse`], unit conversions,
//!   [`sides_from_diagonal`], [`pixel_density`]
//! - The central data type: [`DisplayDescriptor`] with its derived metrics
//!   and compact textual rendering
//! - Structured descriptor comparison: [`compare`]
//!
//! Everything is pure and synchronous; all functions are safe to call from
//! multiple threads.

mod compare;
mod descriptor;
mod error;
pub mod geometry;

pub use compare::{compare, DescriptorComparison, FieldComparison};
pub use descriptor::{DisplayDescriptor, PhysicalSize};
pub use error::GeometryError;
pub use geometry::{
    centimeters_to_inches, hypotenuse, inches_to_centimeters, pixel_density,
    sides_from_diagonal, AspectRatio,
};
