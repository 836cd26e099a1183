//! The draw surface: framebuffer + camera + blit entry points.
//!
//! The [`Compositor`] is the main entry point for per-frame drawing. It owns
//! the one shared framebuffer and the camera, constructed together with equal
//! dimensions so the camera's bounds predicate is exactly the buffer's index
//! guard.
//!
//! # Frame pipeline
//!
//! Strictly ordered and single-threaded: the caller mutates entity and camera
//! state, then calls [`Compositor::clear`], then issues draw calls in painter
//! order (later calls overwrite earlier ones at shared opaque pixels), then
//! presents [`Compositor::as_bytes`]. The camera must not scroll between
//! `clear` and present of the same frame.
//!
//! # Failure policy
//!
//! No draw call ever fails. Missing assets, unfilled rectangles, and absent
//! overlay capability degrade to a logged no-op so a single bad asset cannot
//! abort a frame.

use log::{debug, warn};

use crate::camera::Camera;
use crate::overlay::OverlayRenderer;
use crate::rect::Rectangle;
use crate::render::{blit, FrameBuffer};
use crate::sprite::{Sprite, TILE_SIZE};

pub struct Compositor {
    framebuffer: FrameBuffer,
    camera: Camera,
    overlay: Option<Box<dyn OverlayRenderer>>,
}

impl Compositor {
    /// Creates a compositor with a zeroed buffer and the camera at the world
    /// origin.
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: FrameBuffer::new(width, height),
            camera: Camera::new(0, 0, width, height),
            overlay: None,
        }
    }

    /// Installs the external text-drawing capability. Without one, text and
    /// bubble calls are logged no-ops.
    pub fn set_overlay(&mut self, overlay: Box<dyn OverlayRenderer>) {
        self.overlay = Some(overlay);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for between-frame scrolling.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    /// Clears the framebuffer. Call once at the start of every frame.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Draws a fixed-size sprite tile at a world position.
    ///
    /// `None` means the asset was missing at draw time; that is logged and
    /// skipped rather than propagated, so one absent sprite never kills the
    /// frame.
    pub fn draw_sprite(&mut self, sprite: Option<&Sprite>, x: i32, y: i32, scale: u32) {
        let Some(sprite) = sprite else {
            warn!("missing sprite at ({x}, {y}); skipping draw");
            return;
        };
        blit(
            &mut self.framebuffer,
            &self.camera,
            sprite.pixels(),
            TILE_SIZE,
            TILE_SIZE,
            x,
            y,
            scale,
        );
    }

    /// Draws a rectangle's generated pixel data at its stored position.
    /// Rectangles without pixel data (pure hitboxes) draw nothing.
    pub fn draw_rectangle(&mut self, rect: &Rectangle, scale: u32) {
        let Some(pixels) = rect.pixels() else {
            debug!("rectangle at ({}, {}) has no fill; skipping draw", rect.x(), rect.y());
            return;
        };
        blit(
            &mut self.framebuffer,
            &self.camera,
            pixels,
            rect.height(),
            rect.width(),
            rect.x(),
            rect.y(),
            scale,
        );
    }

    /// Generic blit entry point for raw pixel arrays.
    ///
    /// # Panics
    /// Panics if `scale` is zero or `pixels` is shorter than
    /// `width * height` (see [`blit`]).
    pub fn draw_raw(&mut self, pixels: &[u32], height: u32, width: u32, x: i32, y: i32, scale: u32) {
        blit(
            &mut self.framebuffer,
            &self.camera,
            pixels,
            height,
            width,
            x,
            y,
            scale,
        );
    }

    /// Draws text at a world position through the installed overlay,
    /// translated by the same camera offset as pixel blits.
    pub fn draw_text(&mut self, text: &str, world_x: i32, world_y: i32, size: u32, color: u32) {
        let (screen_x, screen_y) = self.camera.to_screen(world_x, world_y);
        match self.overlay.as_mut() {
            Some(overlay) => overlay.draw_text(text, screen_x, screen_y, size, color),
            None => debug!("no overlay installed; dropping text {text:?}"),
        }
    }

    /// Draws a speech bubble at a world position through the installed
    /// overlay.
    pub fn draw_text_bubble(&mut self, text: &str, world_x: i32, world_y: i32, size: u32) {
        let (screen_x, screen_y) = self.camera.to_screen(world_x, world_y);
        match self.overlay.as_mut() {
            Some(overlay) => overlay.draw_text_bubble(text, screen_x, screen_y, size),
            None => debug!("no overlay installed; dropping bubble {text:?}"),
        }
    }

    /// Reads a pixel at a world coordinate (None outside the viewport).
    pub fn get_pixel(&self, world_x: i32, world_y: i32) -> Option<u32> {
        self.framebuffer.get_pixel(&self.camera, world_x, world_y)
    }

    /// The completed frame as bytes for presentation. Read only after all
    /// draw calls for the frame.
    pub fn as_bytes(&self) -> &[u8] {
        self.framebuffer.as_bytes()
    }

    /// The raw pixel array in screen space.
    pub fn pixels(&self) -> &[u32] {
        self.framebuffer.pixels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn missing_sprite_is_a_noop() {
        let mut compositor = Compositor::new(8, 8);
        compositor.draw_sprite(None, 0, 0, 1);
        assert!(compositor.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn sprite_draw_lands_at_world_position() {
        let mut compositor = Compositor::new(32, 32);
        let sprite = Sprite::solid(0x00FF00);
        compositor.draw_sprite(Some(&sprite), 4, 4, 1);

        assert_eq!(compositor.get_pixel(4, 4), Some(0x00FF00));
        assert_eq!(compositor.get_pixel(4 + TILE_SIZE as i32 - 1, 4), Some(0x00FF00));
        assert_eq!(compositor.get_pixel(4 + TILE_SIZE as i32, 4), Some(0));
    }

    #[test]
    fn unfilled_rectangle_is_a_noop() {
        let mut compositor = Compositor::new(8, 8);
        let rect = Rectangle::new(1, 1, 4, 4);
        compositor.draw_rectangle(&rect, 1);
        assert!(compositor.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn bordered_rectangle_draws_frame_only() {
        let mut compositor = Compositor::new(8, 8);
        let mut rect = Rectangle::new(0, 0, 4, 4);
        rect.generate_border(1, 0xABCDEF);
        compositor.draw_rectangle(&rect, 1);

        assert_eq!(compositor.get_pixel(0, 0), Some(0xABCDEF));
        // Interior is the transparency sentinel, so it stays clear.
        assert_eq!(compositor.get_pixel(1, 1), Some(0));
    }

    #[test]
    fn draw_raw_matches_direct_blit() {
        let mut compositor = Compositor::new(8, 8);
        let source = [0x111111u32, 0x222222, 0x333333, 0x444444];
        compositor.draw_raw(&source, 2, 2, 2, 2, 1);

        assert_eq!(compositor.get_pixel(2, 2), Some(0x111111));
        assert_eq!(compositor.get_pixel(3, 3), Some(0x444444));
    }

    /// Records overlay calls so the camera translation can be asserted.
    #[derive(Default)]
    struct RecordingOverlay {
        calls: Rc<RefCell<Vec<(String, i32, i32)>>>,
    }

    impl OverlayRenderer for RecordingOverlay {
        fn draw_text(&mut self, text: &str, screen_x: i32, screen_y: i32, _size: u32, _color: u32) {
            self.calls.borrow_mut().push((text.to_string(), screen_x, screen_y));
        }

        fn draw_text_bubble(&mut self, text: &str, screen_x: i32, screen_y: i32, _size: u32) {
            self.calls.borrow_mut().push((text.to_string(), screen_x, screen_y));
        }
    }

    #[test]
    fn overlay_calls_are_camera_translated() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut compositor = Compositor::new(8, 8);
        compositor.set_overlay(Box::new(RecordingOverlay { calls: Rc::clone(&calls) }));

        compositor.camera_mut().set_position(10, 20);
        compositor.draw_text("hi", 15, 25, 6, 0xFFFFFF);
        compositor.draw_text_bubble("yo", 10, 20, 6);

        let calls = calls.borrow();
        assert_eq!(calls[0], ("hi".to_string(), 5, 5));
        assert_eq!(calls[1], ("yo".to_string(), 0, 0));
    }

    #[test]
    fn text_without_overlay_is_a_noop() {
        let mut compositor = Compositor::new(8, 8);
        compositor.draw_text("ignored", 0, 0, 6, 0xFFFFFF);
        compositor.draw_text_bubble("ignored", 0, 0, 6);
    }

    #[test]
    fn scrolled_camera_moves_sprite_on_screen() {
        let mut compositor = Compositor::new(32, 32);
        let sprite = Sprite::solid(0xFF0000);

        compositor.camera_mut().scroll(8, 0);
        compositor.draw_sprite(Some(&sprite), 8, 0, 1);

        // World (8, 0) is the buffer's top-left after the scroll.
        assert_eq!(compositor.pixels()[0], 0xFF0000);
    }
}
