//! # Glyph Library
//!
//! Each symbol is a handful of straight strokes laid over its bounding box,
//! mostly in the spirit of a seven-segment display: three horizontals (top,
//! middle, bottom) and four half-height verticals. A few letters add a diagonal.
//!
//! Symbols are looked up in [`GLYPHS`]; anything not in the table is drawn as
//! the "denied" mark (the box with both diagonals) and is always drawn sharp,
//! so a bad symbol is easy to spot on the face.
//!
//! Stroke order matters: each jittered stroke consumes one PRNG draw, so
//! reordering strokes changes every frame that follows.

use crate::canvas::Canvas;
use crate::line::{draw_segment, mid, narrow};
use crate::prng::XorShift16;
use crate::{BoundingBox, Segment};
use log::trace;

/// Builds the strokes of one symbol for a given box.
pub type GlyphBuilder = fn(BoundingBox) -> Vec<Segment>;

/// Symbol to builder table, digits first.
pub static GLYPHS: &[(char, GlyphBuilder)] = &[
    ('0', zero),
    ('1', one),
    ('2', two),
    ('3', three),
    ('4', four),
    ('5', five),
    ('6', six),
    ('7', seven),
    ('8', eight),
    ('9', nine),
    ('a', letter_a),
    ('d', letter_d),
    ('e', letter_e),
    ('f', letter_f),
    ('h', letter_h),
    ('i', one),
    ('m', letter_m),
    ('n', letter_n),
    ('o', zero),
    ('r', letter_r),
    ('s', five),
    ('t', letter_t),
    ('u', letter_u),
    ('w', letter_w),
    ('%', percent),
];

/// The strokes of a symbol, ready to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub segments: Vec<Segment>,
    /// Drawn without jitter whatever the caller asks for.
    pub sharp: bool,
}

pub fn lookup(symbol: char) -> Option<GlyphBuilder> {
    GLYPHS
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map(|(_, builder)| *builder)
}

/// Resolve `symbol` to strokes, falling back to the denied mark.
///
/// Letters are matched exactly; pass lowercase.
///
/// # Example
/// ```
/// use sketch_clock_lib::{glyph, BoundingBox};
///
/// let bbox = BoundingBox::new(0, 0, 10, 20);
/// assert_eq!(glyph::segments('8', bbox).segments.len(), 5);
/// assert!(glyph::segments('Q', bbox).sharp);
/// ```
pub fn segments(symbol: char, bbox: BoundingBox) -> Glyph {
    match lookup(symbol) {
        Some(build) => Glyph {
            segments: build(bbox),
            sharp: false,
        },
        None => {
            trace!("no glyph for {symbol:?}, drawing denied mark");
            Glyph {
                segments: denied(bbox),
                sharp: true,
            }
        }
    }
}

/// Symbol for a single decimal digit; anything outside 0–9 has no glyph.
pub fn digit_symbol(value: i16) -> char {
    u32::try_from(value)
        .ok()
        .and_then(|v| char::from_digit(v, 10))
        .unwrap_or('?')
}

pub fn draw_symbol<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    symbol: char,
    bbox: BoundingBox,
    jittered: bool,
) {
    let glyph = segments(symbol, bbox);
    draw_strokes(canvas, prng, &glyph.segments, jittered && !glyph.sharp);
}

pub fn draw_digit<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    value: i16,
    bbox: BoundingBox,
    jittered: bool,
) {
    draw_symbol(canvas, prng, digit_symbol(value), bbox, jittered);
}

pub fn draw_strokes<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    strokes: &[Segment],
    jittered: bool,
) {
    for &segment in strokes {
        draw_segment(canvas, prng, segment, jittered);
    }
}

fn middle_row(bbox: &BoundingBox) -> i8 {
    mid(bbox.top, bbox.bottom)
}

fn middle_column(bbox: &BoundingBox) -> i8 {
    mid(bbox.left, bbox.right)
}

// -- Digits --

fn zero(b: BoundingBox) -> Vec<Segment> {
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
    ]
}

fn one(b: BoundingBox) -> Vec<Segment> {
    let m = middle_column(&b);
    vec![Segment::new(m, b.top, m, b.bottom)]
}

fn two(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, m, b.right, m),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
        Segment::new(b.right, b.top, b.right, m),
        Segment::new(b.left, m, b.left, b.bottom),
    ]
}

fn three(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, m, b.right, m),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
    ]
}

fn four(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.left, m),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, m, b.right, m),
    ]
}

fn five(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, m, b.right, m),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
        Segment::new(b.left, b.top, b.left, m),
        Segment::new(b.right, m, b.right, b.bottom),
    ]
}

fn six(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, m, b.right, m),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, m, b.right, b.bottom),
    ]
}

fn seven(b: BoundingBox) -> Vec<Segment> {
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.right, b.top, b.right, b.bottom),
    ]
}

fn eight(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, m, b.right, m),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
    ]
}

fn nine(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, m, b.right, m),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, b.top, b.left, m),
    ]
}

// -- Letters (only what the day names need) --

fn letter_a(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, m, b.right, m),
    ]
}

/// Box with the top right corner cut off diagonally.
fn letter_d(b: BoundingBox) -> Vec<Segment> {
    let mw = middle_column(&b);
    let mh = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, mw, b.top),
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(mw, b.top, b.right, mh),
        Segment::new(b.right, mh, b.right, b.bottom),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
    ]
}

fn letter_e(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, m, b.right, m),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
    ]
}

fn letter_f(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, m, b.right, m),
    ]
}

fn letter_h(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, m, b.right, m),
    ]
}

fn letter_m(b: BoundingBox) -> Vec<Segment> {
    let m = middle_column(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(m, b.top, m, b.bottom),
    ]
}

fn letter_n(b: BoundingBox) -> Vec<Segment> {
    vec![
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, b.top, b.right, b.bottom),
    ]
}

fn letter_r(b: BoundingBox) -> Vec<Segment> {
    let m = middle_row(&b);
    vec![
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.right, b.top, b.right, m),
        Segment::new(b.left, m, b.right, m),
        Segment::new(b.left, m, b.right, b.bottom),
    ]
}

fn letter_t(b: BoundingBox) -> Vec<Segment> {
    let m = middle_column(&b);
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(m, b.top, m, b.bottom),
    ]
}

fn letter_u(b: BoundingBox) -> Vec<Segment> {
    vec![
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
    ]
}

fn letter_w(b: BoundingBox) -> Vec<Segment> {
    let m = middle_column(&b);
    vec![
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(m, b.top, m, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
    ]
}

// -- Marks --

/// Rectangle with both diagonals.
pub fn denied(b: BoundingBox) -> Vec<Segment> {
    vec![
        Segment::new(b.left, b.top, b.right, b.top),
        Segment::new(b.left, b.bottom, b.right, b.bottom),
        Segment::new(b.left, b.top, b.left, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(b.left, b.top, b.right, b.bottom),
        Segment::new(b.right, b.top, b.left, b.bottom),
    ]
}

/// Two small crossed corner boxes joined by a long diagonal.
pub fn percent(b: BoundingBox) -> Vec<Segment> {
    let dot_w = b.width() / 4;
    let dot_h = b.height() / 4;
    let (l, t, r, bt) = (
        i16::from(b.left),
        i16::from(b.top),
        i16::from(b.right),
        i16::from(b.bottom),
    );
    let seg = |ax: i16, ay: i16, bx: i16, by: i16| {
        Segment::new(narrow(ax), narrow(ay), narrow(bx), narrow(by))
    };
    vec![
        seg(l, t, l + dot_w, t + dot_h),
        seg(l + dot_w, t, l, t + dot_h),
        seg(r, t, l, bt),
        seg(r - dot_w, bt - dot_h, r, bt),
        seg(r, bt - dot_h, r - dot_w, bt),
    ]
}

/// Time separator: a pair of small open boxes at one and two thirds height.
///
/// Each box is `2 * radius` wide around the horizontal middle and `2 * radius`
/// tall; the upper one sits on the one-third line, the lower one hangs from the
/// two-thirds line.
pub fn colon(b: BoundingBox, radius: i8) -> Vec<Segment> {
    let third = b.height() / 3;
    let m = i16::from(middle_column(&b));
    let radius = i16::from(radius);
    let diameter = radius * 2;
    let (t, bt) = (i16::from(b.top), i16::from(b.bottom));

    let upper_top = t + third - diameter;
    let upper_bottom = t + third;
    let lower_top = bt - third;
    let lower_bottom = bt - third + diameter;
    let (west, east) = (m - radius, m + radius);

    let seg = |ax: i16, ay: i16, bx: i16, by: i16| {
        Segment::new(narrow(ax), narrow(ay), narrow(bx), narrow(by))
    };
    vec![
        seg(west, upper_top, east, upper_top),
        seg(west, upper_bottom, east, upper_bottom),
        seg(west, lower_top, east, lower_top),
        seg(west, lower_bottom, east, lower_bottom),
        seg(west, upper_top, west, upper_bottom),
        seg(east, upper_top, east, upper_bottom),
        seg(west, lower_top, west, lower_bottom),
        seg(east, lower_top, east, lower_bottom),
    ]
}

/// Gap between the A/P letter and the M.
pub const AM_PM_GAP: i8 = 3;

/// "AM" or "PM" squeezed into one box.
///
/// The left half is an A (closed top, crossbar low) or a P (closed loop in the
/// upper third); the right half is always the same M.
pub fn am_pm(b: BoundingBox, is_am: bool) -> Vec<Segment> {
    let m = middle_column(&b);
    let height = b.height();
    let upper_cross = narrow(i16::from(b.top) + height / 3);
    let lower_cross = narrow(i16::from(b.bottom) - height / 3);
    let inner = m.saturating_sub(AM_PM_GAP);

    let mut strokes = vec![
        Segment::new(b.left, b.top, inner, b.top),
        Segment::new(b.left, b.top, b.left, b.bottom),
    ];
    if is_am {
        strokes.push(Segment::new(inner, b.top, inner, b.bottom));
        strokes.push(Segment::new(b.left, lower_cross, inner, lower_cross));
    } else {
        strokes.push(Segment::new(inner, b.top, inner, upper_cross));
        strokes.push(Segment::new(b.left, upper_cross, inner, upper_cross));
    }

    let m_mid = mid(m, b.right);
    strokes.extend([
        Segment::new(m, b.top, m, b.bottom),
        Segment::new(b.right, b.top, b.right, b.bottom),
        Segment::new(m, b.top, m_mid, lower_cross),
        Segment::new(b.right, b.top, m_mid, lower_cross),
    ]);
    strokes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::RecordingCanvas;

    const BOX: BoundingBox = BoundingBox::new(10, 20, 18, 36);

    /// Which of the seven segment positions a glyph lights.
    fn seven_segments(strokes: &[Segment], b: BoundingBox) -> [bool; 7] {
        let m = mid(b.top, b.bottom);
        let has = |s: Segment| strokes.contains(&s);
        [
            has(Segment::new(b.left, b.top, b.right, b.top)),
            has(Segment::new(b.left, m, b.right, m)),
            has(Segment::new(b.left, b.bottom, b.right, b.bottom)),
            has(Segment::new(b.left, b.top, b.left, m))
                || has(Segment::new(b.left, b.top, b.left, b.bottom)),
            has(Segment::new(b.left, m, b.left, b.bottom))
                || has(Segment::new(b.left, b.top, b.left, b.bottom)),
            has(Segment::new(b.right, b.top, b.right, m))
                || has(Segment::new(b.right, b.top, b.right, b.bottom)),
            has(Segment::new(b.right, m, b.right, b.bottom))
                || has(Segment::new(b.right, b.top, b.right, b.bottom)),
        ]
    }

    #[test]
    fn test_zero_is_the_box() {
        let glyph = segments('0', BOX);
        assert_eq!(glyph.segments.len(), 4);
        assert!(!glyph.sharp);
        assert_eq!(
            seven_segments(&glyph.segments, BOX),
            [true, false, true, true, true, true, true]
        );
    }

    #[test]
    fn test_one_is_a_single_centre_bar() {
        let glyph = segments('1', BOX);
        assert_eq!(glyph.segments, vec![Segment::new(14, 20, 14, 36)]);
    }

    #[test]
    fn test_eight_is_box_plus_midline() {
        let glyph = segments('8', BOX);
        assert_eq!(glyph.segments.len(), 5);
        assert!(glyph.segments.contains(&Segment::new(10, 28, 18, 28)));
        for side in segments('0', BOX).segments {
            assert!(glyph.segments.contains(&side));
        }
    }

    #[test]
    fn test_digit_segment_map() {
        // top, mid, bottom, left-upper, left-lower, right-upper, right-lower
        let expected: [(char, [bool; 7]); 8] = [
            ('2', [true, true, true, false, true, true, false]),
            ('3', [true, true, true, false, false, true, true]),
            ('4', [false, true, false, true, false, true, true]),
            ('5', [true, true, true, true, false, false, true]),
            ('6', [true, true, true, true, true, false, true]),
            ('7', [true, false, false, false, false, true, true]),
            ('8', [true, true, true, true, true, true, true]),
            ('9', [true, true, true, true, false, true, true]),
        ];
        for (symbol, lit) in expected {
            let glyph = segments(symbol, BOX);
            assert_eq!(seven_segments(&glyph.segments, BOX), lit, "digit {symbol}");
        }
    }

    /// `Segment::new` shorthand for the stroke tables below.
    const fn s(ax: i8, ay: i8, bx: i8, by: i8) -> Segment {
        Segment::new(ax, ay, bx, by)
    }

    // BOX: left 10, top 20, right 18, bottom 36, middle row 28, middle column 14

    #[test]
    fn test_digit_stroke_order() {
        let expected: [(char, Vec<Segment>); 10] = [
            ('0', vec![s(10, 20, 18, 20), s(10, 20, 10, 36), s(18, 20, 18, 36), s(10, 36, 18, 36)]),
            ('1', vec![s(14, 20, 14, 36)]),
            (
                '2',
                vec![
                    s(10, 20, 18, 20),
                    s(10, 28, 18, 28),
                    s(10, 36, 18, 36),
                    s(18, 20, 18, 28),
                    s(10, 28, 10, 36),
                ],
            ),
            ('3', vec![s(10, 20, 18, 20), s(10, 28, 18, 28), s(10, 36, 18, 36), s(18, 20, 18, 36)]),
            ('4', vec![s(10, 20, 10, 28), s(18, 20, 18, 36), s(10, 28, 18, 28)]),
            (
                '5',
                vec![
                    s(10, 20, 18, 20),
                    s(10, 28, 18, 28),
                    s(10, 36, 18, 36),
                    s(10, 20, 10, 28),
                    s(18, 28, 18, 36),
                ],
            ),
            (
                '6',
                vec![
                    s(10, 20, 18, 20),
                    s(10, 28, 18, 28),
                    s(10, 36, 18, 36),
                    s(10, 20, 10, 36),
                    s(18, 28, 18, 36),
                ],
            ),
            ('7', vec![s(10, 20, 18, 20), s(18, 20, 18, 36)]),
            (
                '8',
                vec![
                    s(10, 20, 18, 20),
                    s(10, 28, 18, 28),
                    s(10, 36, 18, 36),
                    s(10, 20, 10, 36),
                    s(18, 20, 18, 36),
                ],
            ),
            (
                '9',
                vec![
                    s(10, 20, 18, 20),
                    s(10, 28, 18, 28),
                    s(10, 36, 18, 36),
                    s(18, 20, 18, 36),
                    s(10, 20, 10, 28),
                ],
            ),
        ];
        for (symbol, strokes) in expected {
            assert_eq!(segments(symbol, BOX).segments, strokes, "digit {symbol}");
        }
    }

    #[test]
    fn test_letter_stroke_order() {
        let expected: [(char, Vec<Segment>); 11] = [
            ('a', vec![s(10, 20, 18, 20), s(10, 20, 10, 36), s(18, 20, 18, 36), s(10, 28, 18, 28)]),
            (
                'd',
                vec![
                    s(10, 20, 14, 20),
                    s(10, 20, 10, 36),
                    s(14, 20, 18, 28),
                    s(18, 28, 18, 36),
                    s(10, 36, 18, 36),
                ],
            ),
            ('e', vec![s(10, 20, 10, 36), s(10, 20, 18, 20), s(10, 28, 18, 28), s(10, 36, 18, 36)]),
            ('f', vec![s(10, 20, 10, 36), s(10, 20, 18, 20), s(10, 28, 18, 28)]),
            ('h', vec![s(10, 20, 10, 36), s(18, 20, 18, 36), s(10, 28, 18, 28)]),
            ('m', vec![s(10, 20, 18, 20), s(10, 20, 10, 36), s(18, 20, 18, 36), s(14, 20, 14, 36)]),
            ('n', vec![s(10, 20, 10, 36), s(18, 20, 18, 36), s(10, 20, 18, 36)]),
            (
                'r',
                vec![
                    s(10, 20, 10, 36),
                    s(10, 20, 18, 20),
                    s(18, 20, 18, 28),
                    s(10, 28, 18, 28),
                    s(10, 28, 18, 36),
                ],
            ),
            ('t', vec![s(10, 20, 18, 20), s(14, 20, 14, 36)]),
            ('u', vec![s(10, 20, 10, 36), s(18, 20, 18, 36), s(10, 36, 18, 36)]),
            ('w', vec![s(10, 20, 10, 36), s(14, 20, 14, 36), s(18, 20, 18, 36), s(10, 36, 18, 36)]),
        ];
        for (letter, strokes) in expected {
            assert_eq!(segments(letter, BOX).segments, strokes, "letter {letter}");
        }
    }

    #[test]
    fn test_denied_stroke_order() {
        assert_eq!(
            denied(BOX),
            vec![
                s(10, 20, 18, 20),
                s(10, 36, 18, 36),
                s(10, 20, 10, 36),
                s(18, 20, 18, 36),
                s(10, 20, 18, 36),
                s(18, 20, 10, 36),
            ]
        );
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(segments('o', BOX), segments('0', BOX));
        assert_eq!(segments('i', BOX), segments('1', BOX));
        assert_eq!(segments('s', BOX), segments('5', BOX));
    }

    #[test]
    fn test_every_day_letter_has_a_glyph() {
        for letter in "adefhimnorstuw".chars() {
            assert!(lookup(letter).is_some(), "missing glyph for {letter}");
        }
        assert!(lookup('%').is_some());
    }

    #[test]
    fn test_letter_d_cuts_the_corner() {
        let strokes = segments('d', BOX).segments;
        assert_eq!(strokes.len(), 5);
        assert!(strokes.contains(&Segment::new(14, 20, 18, 28)));
    }

    #[test]
    fn test_unknown_symbols_are_denied() {
        for symbol in ['b', 'z', 'A', 'S', '?', ' '] {
            let glyph = segments(symbol, BOX);
            assert!(glyph.sharp, "{symbol:?} should be sharp");
            assert_eq!(glyph.segments, denied(BOX));
            assert_eq!(glyph.segments.len(), 6);
        }
    }

    #[test]
    fn test_denied_mark_ignores_jitter_request() {
        let mut prng = XorShift16::default();
        let mut canvas = RecordingCanvas::default();
        draw_symbol(&mut canvas, &mut prng, 'x', BOX, true);
        assert_eq!(prng, XorShift16::default(), "denied mark used the PRNG");
        assert!(canvas.pixels.contains(&(10, 20)));
        assert!(canvas.pixels.contains(&(18, 36)));
        assert!(canvas.pixels.contains(&(18, 20)));
        assert!(canvas.pixels.contains(&(10, 36)));
    }

    #[test]
    fn test_jittered_glyph_uses_one_draw_per_stroke() {
        let mut prng = XorShift16::default();
        let mut canvas = RecordingCanvas::default();
        draw_symbol(&mut canvas, &mut prng, '8', BOX, true);

        let mut expected = XorShift16::default();
        for _ in 0..5 {
            expected.next();
        }
        assert_eq!(prng, expected);
    }

    #[test]
    fn test_digit_symbol() {
        assert_eq!(digit_symbol(0), '0');
        assert_eq!(digit_symbol(9), '9');
        assert_eq!(digit_symbol(10), '?');
        assert_eq!(digit_symbol(-3), '?');
    }

    #[test]
    fn test_out_of_range_digit_draws_denied_mark() {
        let mut prng = XorShift16::default();
        let mut canvas = RecordingCanvas::default();
        draw_digit(&mut canvas, &mut prng, -7, BOX, true);

        let mut reference = RecordingCanvas::default();
        draw_strokes(&mut reference, &mut XorShift16::default(), &denied(BOX), false);
        assert_eq!(canvas.pixels, reference.pixels);
    }

    #[test]
    fn test_percent_strokes() {
        let b = BoundingBox::new(0, 0, 8, 8);
        let strokes = percent(b);
        assert_eq!(strokes.len(), 5);
        assert_eq!(strokes[0], Segment::new(0, 0, 2, 2));
        assert_eq!(strokes[1], Segment::new(2, 0, 0, 2));
        assert_eq!(strokes[2], Segment::new(8, 0, 0, 8));
        assert_eq!(strokes[3], Segment::new(6, 6, 8, 8));
        assert_eq!(strokes[4], Segment::new(8, 6, 6, 8));
    }

    #[test]
    fn test_colon_boxes() {
        let b = BoundingBox::new(42, 4, 50, 46);
        let strokes = colon(b, 2);
        assert_eq!(strokes.len(), 8);
        // third = 14, middle column = 46
        assert_eq!(strokes[0], Segment::new(44, 14, 48, 14));
        assert_eq!(strokes[1], Segment::new(44, 18, 48, 18));
        assert_eq!(strokes[2], Segment::new(44, 32, 48, 32));
        assert_eq!(strokes[3], Segment::new(44, 36, 48, 36));
        assert_eq!(strokes[4], Segment::new(44, 14, 44, 18));
        assert_eq!(strokes[5], Segment::new(48, 14, 48, 18));
        assert_eq!(strokes[6], Segment::new(44, 32, 44, 36));
        assert_eq!(strokes[7], Segment::new(48, 32, 48, 36));
    }

    #[test]
    fn test_am_pm_first_letter_changes() {
        let b = BoundingBox::new(100, 8, 124, 30);
        let am = am_pm(b, true);
        let pm = am_pm(b, false);
        assert_eq!(am.len(), 8);
        assert_eq!(pm.len(), 8);
        // shared strokes and the M are identical
        assert_eq!(am[..2], pm[..2]);
        assert_eq!(am[4..], pm[4..]);
        assert_ne!(am[2..4], pm[2..4]);

        // mid = 112, inner = 109, upper cross = 15, lower cross = 23
        assert_eq!(am[2], Segment::new(109, 8, 109, 30));
        assert_eq!(am[3], Segment::new(100, 23, 109, 23));
        assert_eq!(pm[2], Segment::new(109, 8, 109, 15));
        assert_eq!(pm[3], Segment::new(100, 15, 109, 15));
        assert_eq!(am[6], Segment::new(112, 8, 118, 23));
        assert_eq!(am[7], Segment::new(124, 8, 118, 23));
    }
}
