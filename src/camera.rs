//! Scrollable world-space camera.
//!
//! # Coordinate System
//!
//! World coordinates are integer pixels: X grows right, Y grows down. The
//! camera is an axis-aligned rectangle whose width and height always equal
//! the framebuffer's dimensions, so a world point inside the camera maps to
//! exactly one buffer index.
//!
//! The camera's position is the only mutable render state that persists
//! across frames. Callers scroll it strictly between frames; during the
//! render phase it is read-only.

/// The viewport rectangle in world coordinates.
///
/// [`Camera::is_out_of_bounds`] is the single bounds authority for the whole
/// compositor: the framebuffer's write guard and any external visibility
/// query must go through it so that culling and index arithmetic can never
/// disagree.
#[derive(Debug, Clone)]
pub struct Camera {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl Camera {
    /// Creates a camera at `(x, y)` with fixed dimensions.
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero; a degenerate viewport makes the
    /// buffer index arithmetic undefined.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "camera dimensions must be positive, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the camera's world position (top-left corner).
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Returns the fixed viewport dimensions.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True iff the world point lies outside the viewport rectangle.
    ///
    /// A point on the right or bottom edge (`x == cam.x + width`) is out of
    /// bounds; the rectangle is half-open like the buffer index range.
    #[inline]
    pub fn is_out_of_bounds(&self, world_x: i32, world_y: i32) -> bool {
        world_x < self.x
            || world_y < self.y
            || world_x >= self.x + self.width as i32
            || world_y >= self.y + self.height as i32
    }

    /// Translates a world coordinate into screen (buffer) space.
    ///
    /// Shared by pixel writes and overlay draws so both layers scroll in
    /// lockstep. The result may be negative or past the viewport for points
    /// the camera cannot see.
    #[inline]
    pub fn to_screen(&self, world_x: i32, world_y: i32) -> (i32, i32) {
        (world_x - self.x, world_y - self.y)
    }

    /// Scrolls the viewport by a delta. Must only be called between frames.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Teleports the viewport to an absolute world position.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
