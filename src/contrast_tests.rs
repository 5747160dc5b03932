use super::*;

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

#[test]
fn parses_six_digit_hex() {
    assert_eq!(Rgb::parse("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    assert_eq!(Rgb::parse("ff8000").unwrap(), Rgb::new(255, 128, 0));
}

#[test]
fn parses_three_digit_shorthand() {
    assert_eq!(Rgb::parse("#fff").unwrap(), WHITE);
    assert_eq!(Rgb::parse("#f80").unwrap(), Rgb::new(255, 136, 0));
}

#[test]
fn rejects_malformed_input() {
    for bad in ["", "#", "#ff", "#fffff", "#ggg", "red", "#12345g"] {
        let err = Rgb::parse(bad).unwrap_err();
        assert!(
            matches!(err, crate::error::AriaGuardError::InvalidColor { .. }),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn luminance_extremes() {
    assert!(BLACK.relative_luminance().abs() < 1e-9);
    assert!((WHITE.relative_luminance() - 1.0).abs() < 1e-9);
}

#[test]
fn identical_colors_have_unit_ratio() {
    let ratio = contrast_ratio(WHITE, WHITE);
    assert!((ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn black_on_white_is_twenty_one() {
    let ratio = contrast_ratio(BLACK, WHITE);
    assert!((ratio - 21.0).abs() < 0.01);
}

#[test]
fn ratio_is_symmetric() {
    let a = Rgb::parse("#336699").unwrap();
    let b = Rgb::parse("#ffcc00").unwrap();
    assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < f64::EPSILON);
}

#[test]
fn threshold_table() {
    assert_eq!(required_ratio(ComplianceLevel::AA, false), Some(4.5));
    assert_eq!(required_ratio(ComplianceLevel::AA, true), Some(3.0));
    assert_eq!(required_ratio(ComplianceLevel::AAA, false), Some(7.0));
    assert_eq!(required_ratio(ComplianceLevel::AAA, true), Some(4.5));
    assert_eq!(required_ratio(ComplianceLevel::A, false), None);
}

#[test]
fn black_on_white_meets_aa() {
    assert!(meets_threshold(BLACK, WHITE, ComplianceLevel::AA, false));
}

#[test]
fn near_greys_fail_aaa() {
    let fg = Rgb::parse("#777777").unwrap();
    let bg = Rgb::parse("#888888").unwrap();
    assert!(!meets_threshold(fg, bg, ComplianceLevel::AAA, false));
}

#[test]
fn level_a_imposes_no_contrast_requirement() {
    let fg = Rgb::parse("#777777").unwrap();
    let bg = Rgb::parse("#888888").unwrap();
    assert!(meets_threshold(fg, bg, ComplianceLevel::A, false));
}

#[test]
fn large_text_policy() {
    assert!(is_large_text(Some(18.0), false));
    assert!(is_large_text(Some(14.0), true));
    assert!(!is_large_text(Some(14.0), false));
    assert!(!is_large_text(Some(17.5), false));
    assert!(!is_large_text(None, true));
}

#[test]
fn palette_lookup_wins_over_hex() {
    let mut palette = Palette::new();
    palette.insert("accent".to_string(), Rgb::new(0, 64, 128));

    assert_eq!(
        resolve_color(&palette, "accent").unwrap(),
        Rgb::new(0, 64, 128)
    );
    assert_eq!(resolve_color(&palette, "#fff").unwrap(), WHITE);
    assert!(resolve_color(&palette, "mauve").is_err());
}
