use indexmap::IndexMap;

use crate::error::{AriaGuardError, Result};
use crate::level::ComplianceLevel;

/// Point size at or above which text counts as "large" for contrast.
pub const LARGE_TEXT_PT: f32 = 18.0;
/// Bold text counts as large at a smaller point size.
pub const LARGE_TEXT_BOLD_PT: f32 = 14.0;
/// Smallest point size considered readable.
pub const MIN_FONT_PT: f32 = 12.0;

/// Named-color resolution table supplied by the theming collaborator.
///
/// Insertion-ordered so palette dumps and error reports are stable.
pub type Palette = IndexMap<String, Rgb>;

/// A resolved sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RGB` or `#RRGGBB` hex color. The leading `#` is optional.
    ///
    /// # Errors
    /// Returns [`AriaGuardError::InvalidColor`] for anything else; the
    /// caller is expected to turn that into an issue, not propagate it.
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');

        let expanded: String;
        let digits = match hex.len() {
            6 => hex,
            3 => {
                expanded = hex.chars().flat_map(|c| [c, c]).collect();
                &expanded
            }
            _ => {
                return Err(AriaGuardError::InvalidColor {
                    value: s.to_string(),
                });
            }
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| AriaGuardError::InvalidColor {
                value: s.to_string(),
            })
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// WCAG relative luminance, in [0, 1].
    ///
    /// Channels are linearized with the standard piecewise sRGB gamma and
    /// weighted 0.2126/0.7152/0.0722.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

/// Resolve a color string: palette lookup first, then hex parsing.
///
/// # Errors
/// Returns [`AriaGuardError::InvalidColor`] when the value is neither a
/// palette name nor valid hex.
pub fn resolve_color(palette: &Palette, value: &str) -> Result<Rgb> {
    if let Some(&rgb) = palette.get(value.trim()) {
        return Ok(rgb);
    }
    Rgb::parse(value)
}

/// Contrast ratio between two colors, in [1, 21].
///
/// The lighter luminance always goes in the numerator, so the ratio is
/// >= 1.0 and identical colors yield exactly 1.0.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Minimum contrast ratio required by `level`, or `None` when the level
/// imposes no contrast requirement (level A).
#[must_use]
pub const fn required_ratio(level: ComplianceLevel, large_text: bool) -> Option<f64> {
    match (level, large_text) {
        (ComplianceLevel::A, _) => None,
        (ComplianceLevel::AA, false) | (ComplianceLevel::AAA, true) => Some(4.5),
        (ComplianceLevel::AA, true) => Some(3.0),
        (ComplianceLevel::AAA, false) => Some(7.0),
    }
}

/// Whether `fg` on `bg` meets the contrast requirement for `level`.
#[must_use]
pub fn meets_threshold(fg: Rgb, bg: Rgb, level: ComplianceLevel, large_text: bool) -> bool {
    match required_ratio(level, large_text) {
        Some(required) => contrast_ratio(fg, bg) >= required,
        None => true,
    }
}

/// Large-text policy: >= 18 pt, or >= 14 pt when bold.
#[must_use]
pub fn is_large_text(size_pt: Option<f32>, bold: bool) -> bool {
    size_pt.is_some_and(|size| {
        size >= LARGE_TEXT_PT || (bold && size >= LARGE_TEXT_BOLD_PT)
    })
}

#[cfg(test)]
#[path = "contrast_tests.rs"]
mod tests;
