//! Movable rectangle shapes with optional pixel fill.
//!
//! A rectangle starts as pure geometry (position + size). Callers that want
//! it drawn generate pixel data for it — a solid fill or a border frame whose
//! interior is the transparency sentinel. A rectangle without generated
//! pixels draws nothing; that is the normal state for pure hitboxes.

use crate::colors::ALPHA;

#[derive(Debug, Clone)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    pixels: Option<Vec<u32>>,
}

impl Rectangle {
    /// Creates an unfilled rectangle at `(x, y)` in world coordinates.
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "rectangle dimensions must be positive, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
            pixels: None,
        }
    }

    /// Generates border pixel data: `thickness` pixels of `color` around a
    /// transparent interior. A thickness covering the whole rectangle yields
    /// a solid frame.
    pub fn generate_border(&mut self, thickness: u32, color: u32) {
        let (w, h) = (self.width, self.height);
        let mut pixels = vec![ALPHA; (w * h) as usize];
        for y in 0..h {
            for x in 0..w {
                let on_border =
                    x < thickness || y < thickness || x >= w - thickness.min(w) || y >= h - thickness.min(h);
                if on_border {
                    pixels[(x + y * w) as usize] = color;
                }
            }
        }
        self.pixels = Some(pixels);
    }

    /// Generates solid fill pixel data.
    pub fn generate_fill(&mut self, color: u32) {
        self.pixels = Some(vec![color; (self.width * self.height) as usize]);
    }

    /// The generated pixel data, if any.
    pub fn pixels(&self) -> Option<&[u32]> {
        self.pixels.as_deref()
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn move_x(&mut self, dx: i32) {
        self.x += dx;
    }

    pub fn move_y(&mut self, dy: i32) {
        self.y += dy;
    }

    /// True if the world point falls inside the rectangle.
    pub fn contains(&self, world_x: i32, world_y: i32) -> bool {
        world_x >= self.x
            && world_y >= self.y
            && world_x < self.x + self.width as i32
            && world_y < self.y + self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rectangle_has_no_pixels() {
        let rect = Rectangle::new(0, 0, 4, 4);
        assert!(rect.pixels().is_none());
    }

    #[test]
    fn border_frames_a_transparent_interior() {
        let mut rect = Rectangle::new(0, 0, 4, 4);
        rect.generate_border(1, 0xABCDEF);
        let pixels = rect.pixels().unwrap();

        assert_eq!(pixels.len(), 16);
        assert_eq!(pixels[0], 0xABCDEF); // corner
        assert_eq!(pixels[1 + 4], ALPHA); // interior
        assert_eq!(pixels[3 + 3 * 4], 0xABCDEF); // opposite corner
    }

    #[test]
    fn fill_covers_everything() {
        let mut rect = Rectangle::new(0, 0, 3, 2);
        rect.generate_fill(0x112233);
        assert!(rect.pixels().unwrap().iter().all(|&p| p == 0x112233));
    }

    #[test]
    fn moves_translate_position_only() {
        let mut rect = Rectangle::new(5, 5, 2, 2);
        rect.move_x(-3);
        rect.move_y(7);
        assert_eq!((rect.x(), rect.y()), (2, 12));
        assert_eq!((rect.width(), rect.height()), (2, 2));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rectangle::new(1, 1, 2, 2);
        assert!(rect.contains(1, 1));
        assert!(rect.contains(2, 2));
        assert!(!rect.contains(3, 2));
        assert!(!rect.contains(0, 1));
    }
}
