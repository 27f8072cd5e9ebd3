//! 128×64 monochrome frame buffer
//!
//! Packs pixels the way small OLED and e-ink controllers expect them: rows of
//! bytes, each byte holding 8 horizontal pixels with the leftmost pixel in the
//! most significant bit. Drawing goes into a back buffer; [`Canvas::flush`]
//! copies it to the front buffer, which is what a display transport (or the
//! ASCII preview) reads.

use crate::canvas::Canvas;

/// Display dimensions
pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;

/// Double-buffered 1 bit per pixel surface
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    back: Vec<u8>,
    front: Vec<u8>,
    frames: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        // Each row has (width+7)/8 bytes, total height rows
        let bytes_per_row = width.div_ceil(8);
        let buffer_size = (bytes_per_row * height) as usize;
        Self {
            width,
            height,
            back: vec![0x00; buffer_size],
            front: vec![0x00; buffer_size],
            frames: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The last flushed frame.
    pub fn front(&self) -> &[u8] {
        &self.front
    }

    /// Number of frames flushed so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Whether a pixel is lit in the frame currently being drawn.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        self.index(x, y)
            .is_some_and(|(byte, mask)| self.back[byte] & mask != 0)
    }

    /// Whether a pixel is lit in the last flushed frame.
    pub fn front_pixel(&self, x: u32, y: u32) -> bool {
        self.index(x, y)
            .is_some_and(|(byte, mask)| self.front[byte] & mask != 0)
    }

    /// Number of lit pixels in the frame currently being drawn.
    pub fn lit_pixels(&self) -> u32 {
        self.back.iter().map(|b| b.count_ones()).sum()
    }

    fn index(&self, x: u32, y: u32) -> Option<(usize, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bytes_per_row = self.width.div_ceil(8);
        let byte_index = (y * bytes_per_row + x / 8) as usize;
        let bit_mask = 0x80 >> (x % 8);
        Some((byte_index, bit_mask))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl Canvas for FrameBuffer {
    fn set_pixel(&mut self, x: i8, y: i8) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some((byte, mask)) = self.index(x, y) {
            self.back[byte] |= mask;
        }
    }

    fn clear(&mut self) {
        self.back.fill(0x00);
    }

    fn flush(&mut self) {
        self.front.copy_from_slice(&self.back);
        self.frames = self.frames.wrapping_add(1);
    }
}
