//! Role-specific colors derived from a hue.
//!
//! Every avatar color is a fixed saturation/lightness pair at the user's hue,
//! emitted as a CSS `hsl()` string. Text drawn on the primary background picks
//! whichever of the light or dark token reads better against it.

use serde::{Deserialize, Serialize};

use crate::hue::Hue;

/// Saturation and lightness (percent) of the primary avatar fill.
const BACKGROUND: (u8, u8) = (65, 45);
/// Saturation and lightness of pastel badge/chip backgrounds.
const LIGHT_BACKGROUND: (u8, u8) = (70, 90);
/// Saturation and lightness of text drawn on the light background.
const ACCENT_TEXT: (u8, u8) = (70, 30);

/// Light text token color
const LIGHT_TOKEN: (u8, u8, u8) = (0xff, 0xff, 0xff);
/// Dark text token color
const DARK_TOKEN: (u8, u8, u8) = (0x11, 0x11, 0x11);

/// Which text token reads on top of [`background`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastText {
    Light,
    Dark,
}

impl ContrastText {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Concrete CSS color for the token
    pub fn css(self) -> String {
        to_hex(self.rgb())
    }

    fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Light => LIGHT_TOKEN,
            Self::Dark => DARK_TOKEN,
        }
    }
}

impl std::fmt::Display for ContrastText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All four derived colors for one hue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarColors {
    pub hue: Hue,
    pub background: String,
    pub light_background: String,
    pub accent_text: String,
    pub contrast_text: ContrastText,
}

/// Primary avatar fill, dark enough to host light text.
pub fn background(hue: Hue) -> String {
    hsl(hue, BACKGROUND)
}

/// Pastel tone for badge and chip backgrounds.
pub fn light_background(hue: Hue) -> String {
    hsl(hue, LIGHT_BACKGROUND)
}

/// Same-family text color for use on [`light_background`].
pub fn accent_text(hue: Hue) -> String {
    hsl(hue, ACCENT_TEXT)
}

/// Decide whether text on [`background`] should use the light or dark token.
///
/// Computed per hue: saturated yellows and greens are perceptually much
/// lighter than blues and reds at the same HSL lightness.
pub fn contrast_text(hue: Hue) -> ContrastText {
    let fill = hsl_to_rgb(hue, BACKGROUND.0, BACKGROUND.1);
    let light = contrast_ratio(fill, LIGHT_TOKEN);
    let dark = contrast_ratio(fill, DARK_TOKEN);
    if dark > light {
        ContrastText::Dark
    } else {
        ContrastText::Light
    }
}

/// The background saturation at a different lightness, for multi-tone glyphs.
pub fn shade(hue: Hue, lightness: u8) -> String {
    hsl(hue, (BACKGROUND.0, lightness.min(100)))
}

/// Bundle every derivation for a hue.
pub fn colors_for(hue: Hue) -> AvatarColors {
    AvatarColors {
        hue,
        background: background(hue),
        light_background: light_background(hue),
        accent_text: accent_text(hue),
        contrast_text: contrast_text(hue),
    }
}

fn hsl(hue: Hue, (saturation, lightness): (u8, u8)) -> String {
    format!("hsl({}, {}%, {}%)", hue, saturation, lightness)
}

/// Convert HSL (saturation and lightness in percent) to 8-bit sRGB.
pub fn hsl_to_rgb(hue: Hue, saturation: u8, lightness: u8) -> (u8, u8, u8) {
    let h = hue.degrees() as f64;
    let s = saturation.min(100) as f64 / 100.0;
    let l = lightness.min(100) as f64 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match hue.degrees() / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

/// Format an sRGB triple as `#rrggbb`.
pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Relative luminance of an sRGB color, in `[0, 1]`.
pub fn relative_luminance((r, g, b): (u8, u8, u8)) -> f64 {
    let linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Contrast ratio between two colors, from 1.0 (identical) to 21.0.
pub fn contrast_ratio(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
