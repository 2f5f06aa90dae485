//! The extraction rules: ordered regex patterns over free-form text.
//!
//! Three independent stages (diagonal, resolution, physical size) scan the
//! same input; each either finds a value or yields unknown. Within a stage
//! the rules are ordered and the first match wins. Matching is
//! case-sensitive, and tokens are plain substrings rather than whole words.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use screencalc_core::PhysicalSize;

use crate::error::GuessError;

// Rule 1: digits directly followed by a quote or apostrophe, e.g. `24"`.
static QUOTE_DIAGONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\d+)["']"#).expect("valid pattern"));

// Rule 2: a possibly fractional number followed by ` inch`; `inches` matches
// too since only the prefix is required. E.g. `22.3 inch`, `400 inches`.
static INCH_DIAGONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?) inch").expect("valid pattern"));

// Two runs of at least three digits joined by `x` or `*`, e.g. `1920x1080`.
static RESOLUTION_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3,}[x*]\d{3,}").expect("valid pattern"));

static NUMERIC_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3,}").expect("valid pattern"));

/// Shorthand resolution tokens, highest priority first.
///
/// The order reproduces the legacy behavior where later checks overwrote
/// earlier ones (4k, then 1080p, then 1200p, last match winning): a string
/// containing both `1080p` and `1200p` resolves to 1920x1200.
const SHORTHAND_RULES: &[(&str, (u32, u32))] = &[
    ("1200p", (1920, 1200)),
    ("1080p", (1920, 1080)),
    ("4k", (3840, 2160)),
];

/// Extract a diagonal size in inches, if any rule matches.
///
/// The quote rule (`24"`, `40'`) takes priority over the `inch` rule even
/// when the latter matches earlier in the string; within one rule the first
/// occurrence wins.
#[must_use]
pub fn diagonal_from_text(input: &str) -> Option<f64> {
    if let Some(captures) = QUOTE_DIAGONAL.captures(input) {
        let span = &captures[0];
        let diagonal: f64 = captures[1].parse().ok()?;
        debug!("guessing that {span:?} means {diagonal} inches diagonal");
        return Some(diagonal);
    }

    if let Some(captures) = INCH_DIAGONAL.captures(input) {
        let span = &captures[0];
        let diagonal: f64 = captures[1].parse().ok()?;
        debug!("guessing that {span:?} means {diagonal} inches diagonal");
        return Some(diagonal);
    }

    None
}

/// Extract a `(horizontal, vertical)` pixel resolution.
///
/// An explicit span such as `1920x1080` or `1920*1080` takes priority; when
/// one is found it must decompose into two in-range numeric groups or the
/// whole extraction fails with [`GuessError::AmbiguousMatch`] and the
/// shorthand table is deliberately not consulted as a fallback. Without an
/// explicit span, the shorthand tokens are tried in table order.
pub fn resolution_from_text(input: &str) -> Result<Option<(u32, u32)>, GuessError> {
    if let Some(found) = RESOLUTION_SPAN.find(input) {
        let span = found.as_str();
        let groups: Vec<u32> = NUMERIC_GROUP
            .find_iter(span)
            .filter_map(|group| group.as_str().parse().ok())
            .collect();
        let [x_res, y_res, ..] = groups[..] else {
            return Err(GuessError::AmbiguousMatch {
                span: span.to_string(),
            });
        };
        debug!("guessing that {span:?} means resolution {x_res}x{y_res}");
        return Ok(Some((x_res, y_res)));
    }

    for &(token, (x_res, y_res)) in SHORTHAND_RULES {
        if input.contains(token) {
            debug!("guessing that {input:?} includes resolution {x_res}x{y_res}");
            return Ok(Some((x_res, y_res)));
        }
    }

    Ok(None)
}

/// Extract a physical size. Reserved for future rules; always unknown
/// today, but kept as an explicit stage because composition consumes it.
#[must_use]
pub fn size_from_text(_input: &str) -> Option<PhysicalSize> {
    None
}
