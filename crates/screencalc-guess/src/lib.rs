//! Best-effort inference of display parameters from free-form text.
//!
//! Feed a string like `24" 1920x1080` or `40 inch 4k` to [`guess`] and get
//! back a [`DisplayDescriptor`] with whatever could be extracted, derived
//! metrics included. Extraction is best-effort over adversarial text:
//! anything that does not match simply stays unknown, and malformed input
//! never panics the inference path.
//!
//! The individual extraction stages are exposed in [`rules`] for callers
//! that want a single parameter rather than a composed descriptor.

use log::{debug, warn};

use screencalc_core::DisplayDescriptor;

mod error;
pub mod rules;

pub use error::GuessError;
pub use rules::{diagonal_from_text, resolution_from_text, size_from_text};

/// Infer a [`DisplayDescriptor`] from a free-form string.
///
/// The three extraction stages (resolution, diagonal, physical size) run
/// independently over the same input; their results are validated and
/// composed into a descriptor, which computes the derived metrics wherever
/// enough parameters were found.
#[must_use]
pub fn guess(input: &str) -> DisplayDescriptor {
    let resolution = match resolution_from_text(input) {
        Ok(resolution) => resolution,
        Err(err) => {
            warn!("discarding resolution guess for {input:?}: {err}");
            None
        }
    };
    let diagonal = diagonal_from_text(input);
    let size = size_from_text(input);

    // Tokens like `0"` or `000x000` match the rules but have no geometric
    // meaning; drop them instead of letting the descriptor reject them.
    let resolution = resolution.filter(|&(x_res, y_res)| {
        let positive = x_res > 0 && y_res > 0;
        if !positive {
            debug!("discarding zero resolution {x_res}x{y_res} from {input:?}");
        }
        positive
    });
    let diagonal = diagonal.filter(|&diag| {
        let positive = diag > 0.0;
        if !positive {
            debug!("discarding zero diagonal from {input:?}");
        }
        positive
    });

    let (horizontal_px, vertical_px) = match resolution {
        Some((x_res, y_res)) => (Some(x_res), Some(y_res)),
        None => (None, None),
    };

    match DisplayDescriptor::new(horizontal_px, vertical_px, diagonal, size) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            // Unreachable after the validation above, but guessing must
            // stay total.
            warn!("could not compose descriptor from {input:?}: {err}");
            DisplayDescriptor::default()
        }
    }
}
