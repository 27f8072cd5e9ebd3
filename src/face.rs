//! # Face Composition
//!
//! Puts one complete frame on a canvas: the time (drawn twice, one pixel apart,
//! for a bolder pencil line), the AM/PM mark, the date and the battery level.
//!
//! ```text
//!  +------------------------------------------------------------+
//!  |  1 2 : 0 5                                         A|M     |
//!  |                                                            |
//!  |  thu 24/07                                          87%    |
//!  +------------------------------------------------------------+
//! ```

use crate::canvas::Canvas;
use crate::layout::{draw_am_pm, draw_date, draw_percentage, draw_time};
use crate::prng::XorShift16;
use crate::{BoundingBox, FaceReading};
use log::debug;
use serde::{Deserialize, Serialize};

/// Half of the day shown by the AM/PM mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Convert a 0–23 hour to the 12-hour dial.
///
/// Hours after 12 become PM; midnight is shown as 12. Noon stays 12 and, like
/// the rest of the morning, is marked AM.
///
/// # Example
/// ```
/// use sketch_clock_lib::face::{to_twelve_hour, Meridiem};
///
/// assert_eq!(to_twelve_hour(0), (12, Meridiem::Am));
/// assert_eq!(to_twelve_hour(13), (1, Meridiem::Pm));
/// ```
pub fn to_twelve_hour(hour: u8) -> (u8, Meridiem) {
    let (mut hour, meridiem) = if hour > 12 {
        (hour - 12, Meridiem::Pm)
    } else {
        (hour, Meridiem::Am)
    };
    if hour == 0 {
        hour = 12;
    }
    (hour, meridiem)
}

/// Where each field sits on the screen.
///
/// Boxes stay a few pixels clear of the edges so jitter never pushes a stroke
/// off the display. Boxes left out of a config keep their default position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceLayout {
    pub time_outer: BoundingBox,
    pub time_inner: BoundingBox,
    pub am_pm: BoundingBox,
    pub date: BoundingBox,
    pub battery: BoundingBox,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self {
            time_outer: BoundingBox::new(4, 4, 96, 46),
            time_inner: BoundingBox::new(5, 5, 95, 45),
            am_pm: BoundingBox::new(100, 8, 124, 30),
            date: BoundingBox::new(4, 54, 96, 62),
            battery: BoundingBox::new(100, 54, 124, 62),
        }
    }
}

/// Render one full frame: clear, draw every field, flush.
pub fn render_face<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    layout: &FaceLayout,
    reading: &FaceReading,
) {
    let (hour, meridiem) = to_twelve_hour(reading.hour);
    debug!(
        "rendering {hour}:{:02} {meridiem:?} day {} of month {} weekday {} battery {}%",
        reading.minute, reading.day, reading.month, reading.day_of_week, reading.battery_percent
    );

    canvas.clear();
    draw_time(canvas, prng, layout.time_outer, hour, reading.minute);
    draw_time(canvas, prng, layout.time_inner, hour, reading.minute);
    draw_am_pm(canvas, prng, layout.am_pm, meridiem == Meridiem::Am);
    draw_date(
        canvas,
        prng,
        layout.date,
        reading.month,
        reading.day,
        reading.day_of_week,
    );
    draw_percentage(canvas, prng, layout.battery, reading.battery_percent);
    canvas.flush();
}

/// Owns the jitter generator across frames, so consecutive frames differ.
#[derive(Clone, Debug, Default)]
pub struct FaceRenderer {
    prng: XorShift16,
    layout: FaceLayout,
}

impl FaceRenderer {
    pub fn new(prng: XorShift16, layout: FaceLayout) -> Self {
        Self { prng, layout }
    }

    pub fn prng(&self) -> &XorShift16 {
        &self.prng
    }

    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, reading: &FaceReading) {
        render_face(canvas, &mut self.prng, &self.layout, reading);
    }
}
