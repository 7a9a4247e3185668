//! SVG renderers for each pattern variant.
//!
//! All geometry is laid out in a fixed 100x100 view box and scaled to the
//! requested pixel size by the `width`/`height` attributes. Coordinates are
//! rounded to whole hundredths as integers before printing, so the text never
//! depends on float formatting. The arc and wedge points go through libm
//! `sin`/`cos`; a platform whose result differs by an ulp can only change the
//! output when a coordinate sits exactly on a half-hundredth boundary.

use std::f64::consts::PI;

use super::rng::PatternRng;
use crate::color;
use crate::hue::Hue;

const VIEW: f64 = 100.0;
const CENTER: f64 = VIEW / 2.0;

const GRID: usize = 5;
const GRID_MARGIN: f64 = 10.0;

/// Lightness steps used for multi-tone variants.
const SHADES: [u8; 6] = [30, 38, 45, 52, 60, 68];

/// Accumulates SVG elements on top of a pastel backdrop.
struct Canvas {
    out: String,
}

impl Canvas {
    fn new(hue: Hue, size: u32) -> Self {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100">"#
        );
        out.push_str(&format!(
            r#"<rect width="100" height="100" fill="{}"/>"#,
            color::light_background(hue)
        ));
        Self { out }
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
            num(x),
            num(y),
            num(w),
            num(h)
        ));
    }

    fn polygon(&mut self, points: &[(f64, f64)], fill: &str) {
        let points: Vec<String> = points
            .iter()
            .map(|&(x, y)| format!("{},{}", num(x), num(y)))
            .collect();
        self.out.push_str(&format!(
            r#"<polygon points="{}" fill="{fill}"/>"#,
            points.join(" ")
        ));
    }

    fn disc(&mut self, r: f64, fill: &str) {
        self.out.push_str(&format!(
            r#"<circle cx="50" cy="50" r="{}" fill="{fill}"/>"#,
            num(r)
        ));
    }

    fn ring(&mut self, r: f64, stroke: &str, width: f64) {
        self.out.push_str(&format!(
            r#"<circle cx="50" cy="50" r="{}" fill="none" stroke="{stroke}" stroke-width="{}"/>"#,
            num(r),
            num(width)
        ));
    }

    fn arc(&mut self, r: f64, from_deg: f64, to_deg: f64, stroke: &str, width: f64) {
        let (x1, y1) = polar(r, from_deg);
        let (x2, y2) = polar(r, to_deg);
        let large = if to_deg - from_deg > 180.0 { 1 } else { 0 };
        self.out.push_str(&format!(
            r#"<path d="M {} {} A {} {} 0 {large} 1 {} {}" fill="none" stroke="{stroke}" stroke-width="{}" stroke-linecap="round"/>"#,
            num(x1),
            num(y1),
            num(r),
            num(r),
            num(x2),
            num(y2),
            num(width)
        ));
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}

/// Two-decimal fixed point, rounded half away from zero. Negative zero prints as `0.00`.
fn num(v: f64) -> String {
    let hundredths = (v * 100.0).round() as i64;
    let sign = if hundredths < 0 { "-" } else { "" };
    let abs = hundredths.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Point at `deg` degrees (clockwise from 12 o'clock) on a circle of radius `r`.
fn polar(r: f64, deg: f64) -> (f64, f64) {
    let rad = (deg - 90.0) * PI / 180.0;
    (CENTER + r * rad.cos(), CENTER + r * rad.sin())
}

/// Mirrored 5x5 grid: the left three columns are drawn, the right two mirror them.
pub(super) fn blocks(rng: &mut PatternRng, hue: Hue, size: u32) -> String {
    let half = GRID.div_ceil(2);
    let mut cells = [[false; GRID]; GRID];
    for row in cells.iter_mut() {
        for col in 0..half {
            let filled = rng.chance(0.5);
            row[col] = filled;
            row[GRID - 1 - col] = filled;
        }
    }
    if cells.iter().flatten().all(|filled| !filled) {
        cells[GRID / 2][GRID / 2] = true;
    }

    let fill = color::background(hue);
    let cell = (VIEW - 2.0 * GRID_MARGIN) / GRID as f64;
    let mut canvas = Canvas::new(hue, size);
    for (r, row) in cells.iter().enumerate() {
        for (c, &filled) in row.iter().enumerate() {
            if filled {
                canvas.rect(
                    GRID_MARGIN + c as f64 * cell,
                    GRID_MARGIN + r as f64 * cell,
                    cell,
                    cell,
                    &fill,
                );
            }
        }
    }
    canvas.finish()
}

/// Six wedges around the center, each in its own shade of the hue.
pub(super) fn triangles(rng: &mut PatternRng, hue: Hue, size: u32) -> String {
    let radius = 46.0;
    let rotation = rng.range(0, 60) as f64;
    let mut canvas = Canvas::new(hue, size);
    for i in 0..6 {
        let start = rotation + i as f64 * 60.0;
        let lightness = *rng.pick(&SHADES);
        canvas.polygon(
            &[
                (CENTER, CENTER),
                polar(radius, start),
                polar(radius, start + 60.0),
            ],
            &color::shade(hue, lightness),
        );
    }
    canvas.finish()
}

/// Two to four concentric rings with a filled center dot.
pub(super) fn circles(rng: &mut PatternRng, hue: Hue, size: u32) -> String {
    let count = rng.range(2, 5);
    let stroke_width = rng.range_f64(3.0, 7.0);
    let (outer, inner) = (44.0, 16.0);
    let mut canvas = Canvas::new(hue, size);
    for i in 0..count {
        let r = inner + (outer - inner) * (count - i) as f64 / count as f64;
        let lightness = *rng.pick(&SHADES);
        canvas.ring(r, &color::shade(hue, lightness), stroke_width);
    }
    let dot = rng.range_f64(5.0, 10.0);
    canvas.disc(dot, &color::background(hue));
    canvas.finish()
}

/// Three to six arcs spaced around a central disc.
pub(super) fn rings(rng: &mut PatternRng, hue: Hue, size: u32) -> String {
    let core = rng.range_f64(10.0, 16.0);
    let count = rng.range(3, 7);
    let radius = rng.range_f64(26.0, 38.0);
    let stroke_width = rng.range_f64(4.0, 8.0);
    let rotation = rng.range_f64(0.0, 360.0);
    let slot = 360.0 / count as f64;

    let mut canvas = Canvas::new(hue, size);
    canvas.disc(core, &color::background(hue));
    for i in 0..count {
        let start = rotation + i as f64 * slot;
        let span = slot * rng.range_f64(0.35, 0.8);
        let lightness = *rng.pick(&SHADES);
        canvas.arc(
            radius,
            start,
            start + span,
            &color::shade(hue, lightness),
            stroke_width,
        );
    }
    canvas.finish()
}
