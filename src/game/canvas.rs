// Software rendering surface backed by an RGBA framebuffer

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use crate::engine::{FrameHandle, Surface};

/// CPU-side drawing surface.
///
/// Frames are registered up front as RGBA bitmaps; the engine only ever sees
/// their handles. Drawing blits into an owned framebuffer that can be written
/// out as a PNG.
pub struct PixelCanvas {
    target: RgbaImage,
    clear_color: Rgba<u8>,
    frames: HashMap<FrameHandle, RgbaImage>,
    next_id: u64,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32, clear_color: Rgba<u8>) -> Self {
        Self {
            target: RgbaImage::from_pixel(width, height, clear_color),
            clear_color,
            frames: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register a bitmap and get back the handle the engine will draw with.
    pub fn register_frame(&mut self, bitmap: RgbaImage) -> FrameHandle {
        let handle = FrameHandle::from_u64(self.next_id);
        self.next_id += 1;
        self.frames.insert(handle, bitmap);
        handle
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }

    /// Framebuffer readback, mainly for inspection and tests.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.target.get_pixel(x, y)
    }

    /// Write the framebuffer out as a PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.target
            .save(path)
            .with_context(|| format!("failed to write framebuffer to {}", path.display()))
    }
}

impl Surface for PixelCanvas {
    fn clear(&mut self) {
        for pixel in self.target.pixels_mut() {
            *pixel = self.clear_color;
        }
    }

    /// Blit with 1-bit alpha: fully transparent source pixels are skipped,
    /// everything else overwrites. Off-surface parts are clipped.
    fn draw_image(&mut self, frame: FrameHandle, x: f32, y: f32) {
        let Some(bitmap) = self.frames.get(&frame) else {
            log::warn!("draw_image called with unregistered frame {:?}", frame);
            return;
        };

        let (tw, th) = self.target.dimensions();
        let origin_x = x.round() as i64;
        let origin_y = y.round() as i64;

        for (px, py, pixel) in bitmap.enumerate_pixels() {
            if pixel[3] == 0 {
                continue;
            }
            let tx = origin_x + px as i64;
            let ty = origin_y + py as i64;
            if tx < 0 || ty < 0 || tx >= tw as i64 || ty >= th as i64 {
                continue;
            }
            self.target.put_pixel(tx as u32, ty as u32, *pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    #[test]
    fn test_register_and_draw() {
        let mut canvas = PixelCanvas::new(8, 8, CLEAR);
        let frame = canvas.register_frame(solid(2, 2, RED));

        canvas.draw_image(frame, 1.0, 1.0);

        assert_eq!(canvas.pixel(1, 1), RED);
        assert_eq!(canvas.pixel(2, 2), RED);
        assert_eq!(canvas.pixel(0, 0), CLEAR);
        assert_eq!(canvas.pixel(3, 3), CLEAR);
    }

    #[test]
    fn test_clear_resets_framebuffer() {
        let mut canvas = PixelCanvas::new(4, 4, CLEAR);
        let frame = canvas.register_frame(solid(4, 4, RED));

        canvas.draw_image(frame, 0.0, 0.0);
        assert_eq!(canvas.pixel(2, 2), RED);

        canvas.clear();
        assert_eq!(canvas.pixel(2, 2), CLEAR);
    }

    #[test]
    fn test_draw_clips_offscreen() {
        let mut canvas = PixelCanvas::new(4, 4, CLEAR);
        let frame = canvas.register_frame(solid(3, 3, RED));

        canvas.draw_image(frame, -2.0, -2.0);
        assert_eq!(canvas.pixel(0, 0), RED);
        assert_eq!(canvas.pixel(1, 1), CLEAR);

        canvas.draw_image(frame, 3.0, 3.0);
        assert_eq!(canvas.pixel(3, 3), RED);
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let mut canvas = PixelCanvas::new(4, 4, CLEAR);
        let mut bitmap = solid(2, 2, RED);
        bitmap.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        let frame = canvas.register_frame(bitmap);

        canvas.draw_image(frame, 0.0, 0.0);
        assert_eq!(canvas.pixel(0, 0), CLEAR);
        assert_eq!(canvas.pixel(1, 0), RED);
    }

    #[test]
    fn test_unregistered_frame_is_ignored() {
        let mut canvas = PixelCanvas::new(4, 4, CLEAR);
        canvas.draw_image(FrameHandle::from_u64(99), 0.0, 0.0);
        assert_eq!(canvas.pixel(0, 0), CLEAR);
    }
}
