//! Owned framebuffer with camera-relative, transparency-keyed pixel writes.
//!
//! The buffer is a flat row-major `Vec<u32>` of `0x00RRGGBB` pixels. Every
//! write goes through [`FrameBuffer::set_pixel`], which takes world
//! coordinates and the active [`Camera`]; culling and transparency keying
//! happen there and nowhere else.

use crate::camera::Camera;
use crate::colors;

/// A fixed-size pixel buffer addressed in world coordinates.
///
/// The buffer never resizes after construction. Its dimensions must equal the
/// camera's; given that, the camera's bounds predicate is exactly the
/// condition under which `(world - camera) + row * width` lands inside
/// `[0, width * height)`, so no index check is repeated here.
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates a zeroed buffer.
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "framebuffer dimensions must be positive, got {width}x{height}"
        );
        Self {
            pixels: vec![0; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Writes one pixel at a world coordinate.
    ///
    /// Silently does nothing when the point is outside the camera's viewport
    /// or when the color's low 24 bits are the [`colors::ALPHA`] sentinel.
    /// Both are expected per-frame outcomes, not errors.
    #[inline]
    pub fn set_pixel(&mut self, camera: &Camera, color: u32, world_x: i32, world_y: i32) {
        if camera.is_out_of_bounds(world_x, world_y) {
            return;
        }
        if colors::is_transparent(color) {
            return;
        }
        let (screen_x, screen_y) = camera.to_screen(world_x, world_y);
        let index = (screen_x as u32 + screen_y as u32 * self.width) as usize;
        self.pixels[index] = color;
    }

    /// Reads the pixel at a world coordinate, or `None` outside the viewport.
    #[inline]
    pub fn get_pixel(&self, camera: &Camera, world_x: i32, world_y: i32) -> Option<u32> {
        if camera.is_out_of_bounds(world_x, world_y) {
            return None;
        }
        let (screen_x, screen_y) = camera.to_screen(world_x, world_y);
        Some(self.pixels[(screen_x as u32 + screen_y as u32 * self.width) as usize])
    }

    /// Resets every pixel to zero. Call once per frame before drawing;
    /// skipping it leaves the previous frame bleeding through under a moved
    /// camera.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// The raw pixel array, row-major, screen space.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Reinterprets the pixel array as bytes for SDL2 `ARGB8888` texture
    /// upload. Must only be read after all draw calls for the frame.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }
}
