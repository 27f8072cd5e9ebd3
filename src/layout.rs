//! # Field Layout
//!
//! Splits the larger regions of the face into glyph boxes. Each field is first
//! planned as a list of [`Mark`]s (a glyph in a box, or a loose stroke) and then
//! drawn in order. Planning only touches the PRNG for positional jitter, which
//! the date and battery fields draw up front; stroke jitter happens while
//! drawing.
//!
//! Field recipes:
//! - **time** `1A:BC`: 15% / 25% / 10% / 25% / 25% of the width, 2px gaps,
//!   the leading `1` only from 10 o'clock on
//! - **AM/PM**: one box, A or P on the left, M on the right
//! - **date** `DAY DD/MM`: eighths of the width, each glyph nudged on its own,
//!   sharp strokes
//! - **battery** `NNN%`: quarters of the width, one shared vertical nudge,
//!   independent horizontal nudges, sharp strokes

use crate::canvas::Canvas;
use crate::glyph::{self, digit_symbol};
use crate::line::{draw_segment, mid, narrow};
use crate::prng::{jitter, XorShift16};
use crate::{BoundingBox, Segment};

/// Gap between the digit boxes of the time field.
pub const TIME_GAP: i16 = 2;
/// Half-width of the colon boxes.
pub const COLON_RADIUS: i8 = 2;
/// Inset of glyphs inside the date and battery fields.
pub const FIELD_GAP: i16 = 1;

/// Day name abbreviations, Sunday first.
pub const DAY_NAMES: [[char; 3]; 7] = [
    ['s', 'u', 'n'],
    ['m', 'o', 'n'],
    ['t', 'u', 'e'],
    ['w', 'e', 'd'],
    ['t', 'h', 'u'],
    ['f', 'r', 'i'],
    ['s', 'a', 't'],
];

/// Drawn when the day of week is out of range; every letter falls back to the
/// denied mark.
const UNKNOWN_DAY: [char; 3] = ['?', '?', '?'];

pub fn day_name(day_of_week: u8) -> Option<&'static [char; 3]> {
    DAY_NAMES.get(usize::from(day_of_week))
}

/// One planned piece of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    Glyph {
        symbol: char,
        bbox: BoundingBox,
        jittered: bool,
    },
    Line {
        segment: Segment,
        jittered: bool,
    },
}

impl Mark {
    fn sketched(symbol: char, bbox: BoundingBox) -> Self {
        Mark::Glyph {
            symbol,
            bbox,
            jittered: true,
        }
    }

    fn sharp(symbol: char, bbox: BoundingBox) -> Self {
        Mark::Glyph {
            symbol,
            bbox,
            jittered: false,
        }
    }

    /// Symbol of a glyph mark, `None` for loose strokes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Mark::Glyph { symbol, .. } => Some(*symbol),
            Mark::Line { .. } => None,
        }
    }
}

pub fn draw_marks<C: Canvas + ?Sized>(canvas: &mut C, prng: &mut XorShift16, marks: &[Mark]) {
    for mark in marks {
        match *mark {
            Mark::Glyph {
                symbol,
                bbox,
                jittered,
            } => glyph::draw_symbol(canvas, prng, symbol, bbox, jittered),
            Mark::Line { segment, jittered } => {
                draw_segment(canvas, prng, segment, jittered);
            }
        }
    }
}

fn field_box(left: i16, top: i16, right: i16, bottom: i16) -> BoundingBox {
    BoundingBox::new(narrow(left), narrow(top), narrow(right), narrow(bottom))
}

fn strokes(segments: Vec<Segment>, jittered: bool) -> impl Iterator<Item = Mark> {
    segments
        .into_iter()
        .map(move |segment| Mark::Line { segment, jittered })
}

// -- Time --

/// Plan `H:MM` (or `1H:MM`) for a 12-hour `hour`.
pub fn time_marks(bbox: BoundingBox, hour: u8, minute: u8) -> Vec<Mark> {
    let (left, top, right, bottom) = edges(&bbox);
    let (hour, minute) = (i16::from(hour), i16::from(minute));
    let full_width = right - left;

    let mut marks = Vec::with_capacity(12);

    let width15 = (full_width * 15) / 100;
    if hour >= 10 {
        marks.push(Mark::sketched(
            '1',
            field_box(left, top, left + width15 - TIME_GAP, bottom),
        ));
    }

    let width25 = full_width / 4;
    marks.push(Mark::sketched(
        digit_symbol(hour % 10),
        field_box(
            left + width15 + TIME_GAP,
            top,
            left + width15 + width25 - TIME_GAP,
            bottom,
        ),
    ));
    marks.push(Mark::sketched(
        digit_symbol(minute / 10),
        field_box(
            right - width25 - width25 + TIME_GAP,
            top,
            right - width25 - TIME_GAP,
            bottom,
        ),
    ));
    marks.push(Mark::sketched(
        digit_symbol(minute % 10),
        field_box(right - width25 + TIME_GAP, top, right - TIME_GAP, bottom),
    ));

    let width50 = full_width / 2;
    let colon_box = field_box(left + width15 + width25 + 1, top, left + width50 - 1, bottom);
    marks.extend(colon_marks(colon_box, COLON_RADIUS));
    marks
}

pub fn draw_time<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    bbox: BoundingBox,
    hour: u8,
    minute: u8,
) {
    draw_marks(canvas, prng, &time_marks(bbox, hour, minute));
}

pub fn colon_marks(bbox: BoundingBox, radius: i8) -> impl Iterator<Item = Mark> {
    strokes(glyph::colon(bbox, radius), true)
}

pub fn draw_colon<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    bbox: BoundingBox,
    radius: i8,
) {
    let marks: Vec<Mark> = colon_marks(bbox, radius).collect();
    draw_marks(canvas, prng, &marks);
}

// -- AM/PM --

pub fn am_pm_marks(bbox: BoundingBox, is_am: bool) -> Vec<Mark> {
    strokes(glyph::am_pm(bbox, is_am), true).collect()
}

pub fn draw_am_pm<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    bbox: BoundingBox,
    is_am: bool,
) {
    draw_marks(canvas, prng, &am_pm_marks(bbox, is_am));
}

// -- Date --

/// Plan `DAY DD/MM`, consuming two PRNG draws for placement.
///
/// The day's tens digit is left out below the 10th; the month always shows
/// two digits.
pub fn date_marks(
    prng: &mut XorShift16,
    bbox: BoundingBox,
    month: u8,
    day: u8,
    day_of_week: u8,
) -> Vec<Mark> {
    let (left, top, right, bottom) = edges(&bbox);
    let (month, day) = (i16::from(month), i16::from(day));
    let width8th = (right - left) / 8;
    let gap = FIELD_GAP;

    let mut marks = Vec::with_capacity(8);
    let place = |pos: i16, vert: i16| {
        field_box(pos + gap, top + vert, pos + width8th - gap, bottom + vert)
    };

    let bits = prng.next();
    let mut vert = i16::from(jitter(bits, 0));
    let mut pos = left + i16::from(jitter(bits, 12));

    let letters = day_name(day_of_week).unwrap_or(&UNKNOWN_DAY);
    for (index, &letter) in letters.iter().enumerate() {
        marks.push(Mark::sharp(letter, place(pos, vert)));
        let shift = index as u32 * 4;
        pos += width8th + i16::from(jitter(bits, shift));
        vert = i16::from(jitter(bits, shift + 2));
    }

    let bits = prng.next();

    // The date is anchored from the right half
    pos = right - (right - left) / 2 - width8th / 2 + i16::from(jitter(bits, 0));
    if day >= 10 {
        marks.push(Mark::sharp(digit_symbol(day / 10), place(pos, vert)));
    }
    pos += width8th + i16::from(jitter(bits, 2));
    vert = i16::from(jitter(bits, 4));
    marks.push(Mark::sharp(digit_symbol(day % 10), place(pos, vert)));
    pos += width8th + i16::from(jitter(bits, 6));

    // Slash, half a slot wide and never nudged vertically
    let slash = Segment::new(
        narrow(pos + width8th / 2 - gap),
        narrow(top),
        narrow(pos + gap),
        narrow(bottom),
    );
    marks.push(Mark::Line {
        segment: slash,
        jittered: false,
    });
    pos += width8th / 2 + i16::from(jitter(bits, 8));
    vert = i16::from(jitter(bits, 10));

    marks.push(Mark::sharp(digit_symbol(month / 10), place(pos, vert)));
    pos += width8th + i16::from(jitter(bits, 12));
    vert = i16::from(jitter(bits, 14));
    marks.push(Mark::sharp(digit_symbol(month % 10), place(pos, vert)));

    marks
}

pub fn draw_date<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    bbox: BoundingBox,
    month: u8,
    day: u8,
    day_of_week: u8,
) {
    let marks = date_marks(prng, bbox, month, day, day_of_week);
    draw_marks(canvas, prng, &marks);
}

// -- Battery --

/// Plan `NNN%`, consuming one PRNG draw for placement.
///
/// Three digits are shown from 100 up (the first is always `1`), two from 10 up
/// and one below that. Values outside 0–100 are not clamped.
pub fn percentage_marks(prng: &mut XorShift16, bbox: BoundingBox, percent: i16) -> Vec<Mark> {
    let (left, top, right, bottom) = edges(&bbox);
    let gap = FIELD_GAP;

    let bits = prng.next();
    let vert = i16::from(jitter(bits, 0));
    let middle = i16::from(mid(bbox.left, bbox.right));
    let width25 = (right - left) / 4;

    let place = |from: i16, to: i16, horiz: i16| {
        field_box(
            from + horiz,
            top + gap + vert,
            to + horiz,
            bottom - gap + vert,
        )
    };

    let mut marks = Vec::with_capacity(4);
    if percent >= 100 {
        let horiz = i16::from(jitter(bits, 2));
        marks.push(Mark::sharp(
            '1',
            place(left + gap, left + width25 - gap, horiz),
        ));
    }
    if percent >= 10 {
        let horiz = i16::from(jitter(bits, 4));
        marks.push(Mark::sharp(
            digit_symbol((percent / 10) % 10),
            place(middle - width25 + gap, middle - gap, horiz),
        ));
    }
    let horiz = i16::from(jitter(bits, 6));
    marks.push(Mark::sharp(
        digit_symbol(percent % 10),
        place(middle + gap, middle + width25 - gap, horiz),
    ));

    let horiz = i16::from(jitter(bits, 8));
    marks.push(Mark::sharp(
        '%',
        place(right - width25 + gap, right - gap, horiz),
    ));
    marks
}

pub fn draw_percentage<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    bbox: BoundingBox,
    percent: i16,
) {
    let marks = percentage_marks(prng, bbox, percent);
    draw_marks(canvas, prng, &marks);
}

pub fn draw_percent<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    bbox: BoundingBox,
    jittered: bool,
) {
    glyph::draw_symbol(canvas, prng, '%', bbox, jittered);
}

fn edges(bbox: &BoundingBox) -> (i16, i16, i16, i16) {
    (
        i16::from(bbox.left),
        i16::from(bbox.top),
        i16::from(bbox.right),
        i16::from(bbox.bottom),
    )
}
