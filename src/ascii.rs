//! # Terminal Preview
//!
//! Development mode output: prints the last flushed frame to the terminal so
//! the face can be checked without a display attached. Two pixel rows share one
//! line of text using half-block characters, so a 128×64 frame becomes 32 lines
//! of 128 columns.

use crate::frame_buffer::FrameBuffer;

/// Render the front buffer of `frame` as half-block text, one `\n` per line.
pub fn render_ascii(frame: &FrameBuffer) -> String {
    let columns = frame.width() as usize;
    let lines = frame.height().div_ceil(2);
    let mut out = String::with_capacity((columns * 3 + 1) * lines as usize);

    for line in 0..lines {
        let upper_row = line * 2;
        let lower_row = upper_row + 1;
        for x in 0..frame.width() {
            let upper = frame.front_pixel(x, upper_row);
            // past the last row reads as unlit
            let lower = frame.front_pixel(x, lower_row);
            out.push(match (upper, lower) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    out
}
