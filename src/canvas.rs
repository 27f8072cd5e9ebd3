//! # Drawing Surface
//!
//! The renderer only ever needs three things from a display: light a pixel,
//! blank everything and present the finished frame. [`Canvas`] captures exactly
//! that, so the face can be drawn into the crate's own [`FrameBuffer`] or into
//! any `embedded-graphics` display through [`GraphicsCanvas`].
//!
//! [`FrameBuffer`]: crate::frame_buffer::FrameBuffer

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

/// Monochrome pixel surface the face is drawn onto.
///
/// Coordinates outside the surface must be ignored by the implementation; the
/// rasterizer never checks bounds itself.
pub trait Canvas {
    fn set_pixel(&mut self, x: i8, y: i8);
    fn clear(&mut self);
    fn flush(&mut self);
}

/// Adapter that lets an `embedded-graphics` draw target act as a [`Canvas`].
///
/// Drawing errors are dropped the same way `.draw(..).ok()` is used elsewhere:
/// a pixel that can't be drawn is simply not drawn.
pub struct GraphicsCanvas<D> {
    target: D,
    frames: u32,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D) -> Self {
        Self { target, frames: 0 }
    }

    /// Number of frames presented with [`Canvas::flush`].
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn set_pixel(&mut self, x: i8, y: i8) {
        if x < 0 || y < 0 {
            return;
        }
        let pixel = Pixel(Point::new(x.into(), y.into()), BinaryColor::On);
        self.target.draw_iter(core::iter::once(pixel)).ok();
    }

    fn clear(&mut self) {
        self.target.clear(BinaryColor::Off).ok();
    }

    fn flush(&mut self) {
        self.frames = self.frames.wrapping_add(1);
    }
}
