// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke font for axis labels.
//!
//! Grid labels only ever contain an optional minus sign and decimal digits,
//! so each glyph is a set of seven-segment strokes on a small box.

use vello_cpu::kurbo::{BezPath, Point};

/// Glyph box width in pixels.
pub(crate) const GLYPH_WIDTH: f64 = 5.0;
/// Glyph box height in pixels.
pub(crate) const GLYPH_HEIGHT: f64 = 9.0;
/// Horizontal distance between consecutive glyph boxes.
const GLYPH_SPACING: f64 = 2.0;

// Segment bits, clockwise from the top bar, middle bar last.
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    A | B | C | D | E | F,
    B | C,
    A | B | G | E | D,
    A | B | G | C | D,
    F | G | B | C,
    A | F | G | C | D,
    A | F | G | E | D | C,
    A | B | C,
    A | B | C | D | E | F | G,
    A | B | C | D | F | G,
];

fn segments(ch: char) -> Option<u8> {
    match ch {
        '-' => Some(G),
        _ => {
            let digit = usize::try_from(ch.to_digit(10)?).ok()?;
            DIGITS.get(digit).copied()
        }
    }
}

/// Width in pixels of `text` when laid out with [`text_path`].
pub(crate) fn text_width(text: &str) -> f64 {
    let n = text.chars().count() as f64;
    if n == 0.0 {
        return 0.0;
    }
    n * GLYPH_WIDTH + (n - 1.0) * GLYPH_SPACING
}

/// Stroke outline of `text` with its top-left corner at `origin`.
///
/// Characters without a glyph leave a blank box.
pub(crate) fn text_path(text: &str, origin: Point) -> BezPath {
    let mut path = BezPath::new();
    let mut x = origin.x;
    for ch in text.chars() {
        if let Some(bits) = segments(ch) {
            push_glyph(&mut path, bits, x, origin.y);
        }
        x += GLYPH_WIDTH + GLYPH_SPACING;
    }
    path
}

fn push_glyph(path: &mut BezPath, bits: u8, x: f64, y: f64) {
    let (l, r) = (x, x + GLYPH_WIDTH);
    let (t, m, b) = (y, y + GLYPH_HEIGHT / 2.0, y + GLYPH_HEIGHT);
    let strokes = [
        (A, (l, t), (r, t)),
        (B, (r, t), (r, m)),
        (C, (r, m), (r, b)),
        (D, (l, b), (r, b)),
        (E, (l, m), (l, b)),
        (F, (l, t), (l, m)),
        (G, (l, m), (r, m)),
    ];
    for (bit, from, to) in strokes {
        if bits & bit != 0 {
            path.move_to(from);
            path.line_to(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use vello_cpu::kurbo::{PathEl, Point, Shape};

    use super::{GLYPH_HEIGHT, GLYPH_WIDTH, text_path, text_width};

    fn stroke_count(text: &str) -> usize {
        text_path(text, Point::ZERO)
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    #[test]
    fn digits_use_seven_segment_strokes() {
        assert_eq!(stroke_count("8"), 7);
        assert_eq!(stroke_count("1"), 2);
        assert_eq!(stroke_count("-"), 1);
        assert_eq!(stroke_count("-10"), 1 + 2 + 6);
    }

    #[test]
    fn unknown_characters_are_blank() {
        assert_eq!(stroke_count("x?"), 0);
        assert_eq!(text_width("x?"), text_width("12"));
    }

    #[test]
    fn width_accounts_for_spacing() {
        assert_eq!(text_width(""), 0.0);
        assert_eq!(text_width("7"), GLYPH_WIDTH);
        assert!(text_width("42") > 2.0 * GLYPH_WIDTH);
    }

    #[test]
    fn glyphs_stay_inside_their_box() {
        let origin = Point::new(10.0, 20.0);
        let bbox = text_path("0", origin).bounding_box();
        assert_eq!(bbox.x0, 10.0);
        assert_eq!(bbox.y0, 20.0);
        assert_eq!(bbox.x1, 10.0 + GLYPH_WIDTH);
        assert_eq!(bbox.y1, 20.0 + GLYPH_HEIGHT);
    }
}
