//! Nearest-neighbor integer-scaling blit.
//!
//! This is the one hot loop in the crate: every sprite, tile, and rectangle
//! draw funnels through [`blit`]. Replicating each source pixel into a
//! `scale x scale` block keeps pixel-art edges crisp and keeps the whole path
//! in integer arithmetic.

use crate::camera::Camera;
use crate::render::framebuffer::FrameBuffer;

/// Copies a rectangular pixel source into the framebuffer at `scale`:1.
///
/// Source pixel `(c, r)` lands at world position
/// `(dest_x + c * scale + xs, dest_y + r * scale + ys)` for every scale cell
/// `(xs, ys)` in `[0, scale)²`. Per-pixel camera culling and transparency
/// keying happen inside [`FrameBuffer::set_pixel`], so partially visible
/// sources need no special casing here. Cost is
/// `O(src_width * src_height * scale²)`; callers that know a source is fully
/// off-camera can skip the call, but correctness never requires it.
///
/// # Panics
/// Panics if `scale` is zero (down-scaling is outside the contract) or if
/// `pixels` is shorter than `src_width * src_height`.
pub fn blit(
    fb: &mut FrameBuffer,
    camera: &Camera,
    pixels: &[u32],
    src_height: u32,
    src_width: u32,
    dest_x: i32,
    dest_y: i32,
    scale: u32,
) {
    assert!(scale >= 1, "blit scale must be at least 1, got {scale}");
    assert!(
        pixels.len() >= (src_width * src_height) as usize,
        "pixel source shorter than {src_width}x{src_height}"
    );

    let scale = scale as i32;
    for row in 0..src_height as i32 {
        for col in 0..src_width as i32 {
            let color = pixels[(col + row * src_width as i32) as usize];
            for y_cell in 0..scale {
                for x_cell in 0..scale {
                    fb.set_pixel(
                        camera,
                        color,
                        dest_x + col * scale + x_cell,
                        dest_y + row * scale + y_cell,
                    );
                }
            }
        }
    }
}
