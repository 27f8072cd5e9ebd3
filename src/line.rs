//! # Jittered Line Rasterizer
//!
//! Every mark on the face ends up here. A line is drawn with the integer
//! error-accumulation (Bresenham) algorithm after each endpoint coordinate has
//! optionally been nudged by -1, 0 or +1 pixel. One generator draw covers all
//! four nudges, so a line costs exactly one PRNG step when jitter is on and
//! none when it is off.

use crate::canvas::Canvas;
use crate::prng::{jitter, XorShift16};
use crate::{Point, Segment};

/// Upper bound on plotted pixels per line.
///
/// The longest line on a 128×64 screen is about 143.1 pixels, so this is never
/// reached for on-screen endpoints.
pub const MAX_LINE_STEPS: usize = 144;

/// Midpoint of `a` and `b`, rounding toward `a`.
pub fn mid(a: i8, b: i8) -> i8 {
    let (a16, b16) = (i16::from(a), i16::from(b));
    narrow(a16 + (b16 - a16) / 2)
}

/// Clamp an intermediate layout value back into the `i8` coordinate space.
pub(crate) fn narrow(value: i16) -> i8 {
    value.clamp(i16::from(i8::MIN), i16::from(i8::MAX)) as i8
}

/// Draw a straight line from `from` to `to`, both ends inclusive.
///
/// Returns the number of pixels plotted.
pub fn draw_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    from: Point,
    to: Point,
    jittered: bool,
) -> usize {
    let (mut from, mut to) = (from, to);
    if jittered {
        let bits = prng.next();
        from.x = from.x.saturating_add(jitter(bits, 0));
        from.y = from.y.saturating_add(jitter(bits, 2));
        to.x = to.x.saturating_add(jitter(bits, 4));
        to.y = to.y.saturating_add(jitter(bits, 6));
    }
    rasterize(canvas, from, to)
}

pub fn draw_segment<C: Canvas + ?Sized>(
    canvas: &mut C,
    prng: &mut XorShift16,
    segment: Segment,
    jittered: bool,
) -> usize {
    draw_line(canvas, prng, segment.from, segment.to, jittered)
}

fn rasterize<C: Canvas + ?Sized>(canvas: &mut C, from: Point, to: Point) -> usize {
    let (mut x, mut y) = (i16::from(from.x), i16::from(from.y));
    let (tx, ty) = (i16::from(to.x), i16::from(to.y));

    let dx = (tx - x).abs();
    let sx = if x < tx { 1 } else { -1 };
    let dy = (ty - y).abs();
    let sy = if y < ty { 1 } else { -1 };

    let mut err = (if dx > dy { dx } else { -dy }) / 2;

    let mut plotted = 0;
    while plotted < MAX_LINE_STEPS {
        // x and y never leave the span of the two i8 endpoints
        canvas.set_pixel(x as i8, y as i8);
        plotted += 1;

        if x == tx && y == ty {
            break;
        }

        let err2 = err;
        if err2 > -dx {
            err -= dy;
            x += sx;
        }
        if err2 < dy {
            err += dx;
            y += sy;
        }
    }
    plotted
}
