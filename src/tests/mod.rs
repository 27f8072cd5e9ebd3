//! Shared test helpers and whole-face scenarios.


use crate::canvas::Canvas;

/// Canvas that records every pixel in the order it was set.
///
/// Clearing only counts; pixels from earlier frames are kept so a whole
/// sequence of frames can be compared.
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub pixels: Vec<(i8, i8)>,
    pub clears: u32,
    pub flushes: u32,
}

impl Canvas for RecordingCanvas {
    fn set_pixel(&mut self, x: i8, y: i8) {
        self.pixels.push((x, y));
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
