//! CPU-side RGB frame buffer.

use std::path::Path;

use anyhow::Context;

/// An owned RGB8 pixel buffer with the origin at the bottom left, matching
/// the coordinate system of classic gym viewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Creates a frame filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        let mut pixels = vec![0; (width * height * 3) as usize];
        for px in pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&background);
        }
        Self { width, height, pixels }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel data, row-major RGB, top row first.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Reads back the pixel at bottom-left-origin coordinates.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        let (x, y) = self.to_raster(x, y)?;
        let at = ((y * self.width + x) * 3) as usize;
        Some([self.pixels[at], self.pixels[at + 1], self.pixels[at + 2]])
    }

    /// Fills an axis-aligned rectangle centered at `(cx, cy)` in
    /// bottom-left-origin coordinates. Pixels falling outside the frame are
    /// clipped.
    pub fn fill_rect(&mut self, cx: i32, cy: i32, w: u32, h: u32, color: [u8; 3]) {
        let half_width = i32::try_from(w / 2).unwrap_or(i32::MAX);
        let half_height = i32::try_from(h / 2).unwrap_or(i32::MAX);
        for y in (cy - half_height)..(cy + half_height) {
            for x in (cx - half_width)..(cx + half_width) {
                if let Some((rx, ry)) = self.to_raster(x, y) {
                    let at = ((ry * self.width + rx) * 3) as usize;
                    self.pixels[at..at + 3].copy_from_slice(&color);
                }
            }
        }
    }

    /// Encodes the frame as a PNG at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        let img = image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .context("frame buffer size mismatch")?;
        img.save(path)
            .with_context(|| format!("writing PNG to {}", path.display()))?;
        Ok(())
    }

    /// Maps bottom-left-origin coordinates to the raster row layout.
    fn to_raster(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some((x, self.height - 1 - y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_centers_and_clips() {
        let mut frame = Frame::new(10, 10, [255, 255, 255]);
        frame.fill_rect(0, 0, 4, 4, [10, 20, 30]);
        assert_eq!(frame.pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(frame.pixel(1, 1), Some([10, 20, 30]));
        assert_eq!(frame.pixel(2, 2), Some([255, 255, 255]));
        // Clipped coordinates read back as None without panicking.
        assert_eq!(frame.pixel(-1, 0), None);
        assert_eq!(frame.pixel(10, 0), None);
    }

    #[test]
    fn buffer_length_matches_declared_size() {
        let frame = Frame::new(600, 400, [0, 0, 0]);
        assert_eq!(frame.pixels().len(), 600 * 400 * 3);
    }
}
