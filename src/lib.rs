//! # Sketch Clock Core Library
//!
//! This library renders a clock face that looks sketched by hand onto a small
//! monochrome pixel matrix (nominally 128×64, the size of a common SSD1306 OLED).
//! Every stroke on the face is a straight line whose endpoints wobble by up to one
//! pixel, so two consecutive frames never look quite the same.
//!
//! ## Design Philosophy
//!
//! ### Straight lines only
//! - **Glyphs are segment lists**: digits and the handful of letters needed for
//!   day names are decomposed into seven-segment style strokes over a bounding box
//! - **One primitive**: everything ends in [`line::draw_line`], an integer
//!   Bresenham rasterizer with a hard step cap
//! - **Tiny coordinates**: points are `i8`, which comfortably covers the display
//!
//! ### Deterministic jitter
//! The wobble comes from a 16-bit xorshift generator ([`prng::XorShift16`]) that
//! is owned by the caller and threaded down through the renderer. Given the same
//! seed and the same readings, the same pixels are produced.
//!
//! ### Data Flow
//! 1. **Acquire**: the binary reads the wall clock and battery into a [`FaceReading`]
//! 2. **Compose**: [`face::render_face`] splits the screen into fields
//! 3. **Lay out**: [`layout`] subdivides each field into glyph boxes
//! 4. **Draw**: [`glyph`] turns each box into segments, [`line`] puts them on a [`canvas::Canvas`]
//!
//! ## Core Types
//! - [`Point`]: a pixel position
//! - [`BoundingBox`]: the rectangle a glyph or field is drawn in
//! - [`Segment`]: one stroke of a glyph
//! - [`FaceReading`]: everything shown on one frame

use serde::{Deserialize, Serialize};

pub mod ascii;
pub mod canvas;
pub mod config;
pub mod face;
pub mod frame_buffer;
pub mod glyph;
pub mod layout;
pub mod line;
pub mod prng;
pub mod reading;

#[cfg(test)]
mod tests;

/// A pixel position on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Rectangle a glyph or field is drawn within.
///
/// Glyph builders expect `left <= right` and `top <= bottom`. This is not
/// checked; an inverted box simply draws an inverted glyph.
///
/// # Example
/// ```
/// use sketch_clock_lib::BoundingBox;
///
/// let bbox = BoundingBox::new(4, 4, 96, 46);
/// assert_eq!(bbox.width(), 92);
/// assert_eq!(bbox.height(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: i8,
    pub top: i8,
    pub right: i8,
    pub bottom: i8,
}

impl BoundingBox {
    pub const fn new(left: i8, top: i8, right: i8, bottom: i8) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i16 {
        self.right as i16 - self.left as i16
    }

    pub const fn height(&self) -> i16 {
        self.bottom as i16 - self.top as i16
    }
}

/// One straight stroke of a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(ax: i8, ay: i8, bx: i8, by: i8) -> Self {
        Self {
            from: Point::new(ax, ay),
            to: Point::new(bx, by),
        }
    }
}

/// Everything displayed on one frame of the face.
///
/// Values are expected to be pre-validated by whoever produced them:
/// - `month` 1–12, `day` 1–31
/// - `hour` 0–23 (shown on a 12-hour dial with an AM/PM mark)
/// - `minute` 0–59
/// - `day_of_week` 0–6, Sunday first
/// - `battery_percent` 0–100; larger values draw a nonsensical but harmless
///   number, negative values draw fallback marks
///
/// # Example
/// ```
/// use sketch_clock_lib::FaceReading;
///
/// let reading = FaceReading {
///     month: 7,
///     day: 24,
///     hour: 20,
///     minute: 14,
///     day_of_week: 4,
///     battery_percent: 87,
/// };
/// assert_eq!(reading.hour, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceReading {
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub day_of_week: u8,
    pub battery_percent: i16,
}
