//! End-to-end inference tests: input string to rendered descriptor.

use screencalc_guess::guess;

#[test]
fn test_guess_explicit_resolution_and_diagonal() {
    let descriptor = guess("24\" 1920x1080");
    assert_eq!(descriptor.horizontal_px(), Some(1920));
    assert_eq!(descriptor.vertical_px(), Some(1080));
    assert_eq!(descriptor.diagonal_in(), Some(24.0));
    // Size is derived from resolution and diagonal, never extracted.
    let size = descriptor.physical_size().expect("derivable");
    assert!((size.width_cm - 53.13).abs() < 0.01);
    assert!((size.height_cm - 29.89).abs() < 0.01);
}

#[test]
fn test_guess_star_separator() {
    let descriptor = guess("24\" 1920*1080");
    assert_eq!(descriptor.horizontal_px(), Some(1920));
    assert_eq!(descriptor.vertical_px(), Some(1080));
}

#[test]
fn test_guess_four_k_tv() {
    let descriptor = guess("40\" 4k");
    assert_eq!(descriptor.horizontal_px(), Some(3840));
    assert_eq!(descriptor.vertical_px(), Some(2160));
    assert_eq!(descriptor.diagonal_in(), Some(40.0));
}

#[test]
fn test_guess_shorthand_monitor() {
    let descriptor = guess("32\" 1080p");
    assert_eq!(descriptor.horizontal_px(), Some(1920));
    assert_eq!(descriptor.vertical_px(), Some(1080));
    assert_eq!(descriptor.diagonal_in(), Some(32.0));
}

#[test]
fn test_guess_inch_token() {
    let descriptor = guess("24 inch 4k");
    assert_eq!(descriptor.horizontal_px(), Some(3840));
    assert_eq!(descriptor.diagonal_in(), Some(24.0));
}

#[test]
fn test_guess_renders_like_explicit_construction() {
    let descriptor = guess("24\" 1920x1080");
    assert_eq!(
        descriptor.to_string(),
        "<1920x1080 @24\", ppi=91.79, size=531*299>"
    );
}

#[test]
fn test_guess_partial_inputs_render() {
    assert_eq!(guess("1920x1080").to_string(), "<1920x1080>");
    assert_eq!(guess("a 40\" screen").to_string(), "<?x? @40\">");
}

#[test]
fn test_guess_derivation_matches_explicit_descriptor() {
    let inferred = guess("22\" 1680x1050");
    let explicit = screencalc_core::DisplayDescriptor::from_resolution(1680, 1050, 22.0)
        .expect("valid input");
    assert_eq!(inferred, explicit);
}
