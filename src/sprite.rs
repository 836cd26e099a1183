//! Sprites and sprite sheets.
//!
//! A sheet is loaded once (from an image file or from raw pixels), cut into
//! fixed-size square tiles, and read-only from then on. Tiles are indexed by
//! `(column, row)`; an index outside the grid yields `None` rather than a
//! panic, because a bad index at draw time must never take down the frame.

use std::path::Path;

use crate::colors::{self, ALPHA};

/// Fixed edge length of every sprite tile, in source pixels.
pub const TILE_SIZE: u32 = 16;

/// An immutable `TILE_SIZE x TILE_SIZE` block of packed RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pixels: Vec<u32>,
}

impl Sprite {
    fn new(pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), (TILE_SIZE * TILE_SIZE) as usize);
        Self { pixels }
    }

    /// Creates a sprite filled with a single color (useful for procedural
    /// assets and tests).
    pub fn solid(color: u32) -> Self {
        Self::new(vec![color; (TILE_SIZE * TILE_SIZE) as usize])
    }

    /// Row-major pixel data, `TILE_SIZE * TILE_SIZE` long.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

/// An indexed collection of sprites cut from one source image.
pub struct SpriteSheet {
    sprites: Vec<Sprite>,
    columns: u32,
    rows: u32,
}

impl SpriteSheet {
    /// Loads a sheet from an image file (PNG, JPG, etc.).
    ///
    /// Pixels are packed to `0x00RRGGBB`; source pixels with alpha below 128
    /// become the [`ALPHA`] sentinel so transparent sprite regions key out
    /// during blits. Trailing rows/columns that do not fill a whole tile are
    /// discarded.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        let pixels: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                if a < 128 {
                    ALPHA
                } else {
                    colors::rgb(r, g, b)
                }
            })
            .collect();

        Ok(Self::from_pixels(pixels, width, height))
    }

    /// Builds a sheet from an in-memory pixel array.
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height`.
    pub fn from_pixels(pixels: Vec<u32>, width: u32, height: u32) -> Self {
        assert_eq!(
            pixels.len(),
            (width * height) as usize,
            "sheet pixel array does not match {width}x{height}"
        );

        let columns = width / TILE_SIZE;
        let rows = height / TILE_SIZE;

        let mut sprites = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for col in 0..columns {
                let mut tile = Vec::with_capacity((TILE_SIZE * TILE_SIZE) as usize);
                for y in 0..TILE_SIZE {
                    let start = (col * TILE_SIZE + (row * TILE_SIZE + y) * width) as usize;
                    tile.extend_from_slice(&pixels[start..start + TILE_SIZE as usize]);
                }
                sprites.push(Sprite::new(tile));
            }
        }

        Self {
            sprites,
            columns,
            rows,
        }
    }

    /// Fetches the sprite at grid position `(col, row)`, or `None` outside
    /// the sheet.
    pub fn get_tile(&self, col: u32, row: u32) -> Option<&Sprite> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.sprites.get((col + row * self.columns) as usize)
    }

    /// Grid dimensions in tiles, `(columns, rows)`.
    pub fn grid_size(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 2x1-tile sheet where every pixel encodes its tile index.
    fn two_tile_sheet() -> SpriteSheet {
        let width = TILE_SIZE * 2;
        let height = TILE_SIZE;
        let pixels: Vec<u32> = (0..width * height)
            .map(|i| if i % width < TILE_SIZE { 0x101010 } else { 0x202020 })
            .collect();
        SpriteSheet::from_pixels(pixels, width, height)
    }

    #[test]
    fn tiles_are_cut_column_major_within_rows() {
        let sheet = two_tile_sheet();
        assert_eq!(sheet.grid_size(), (2, 1));
        assert!(sheet.get_tile(0, 0).unwrap().pixels().iter().all(|&p| p == 0x101010));
        assert!(sheet.get_tile(1, 0).unwrap().pixels().iter().all(|&p| p == 0x202020));
    }

    #[test]
    fn out_of_grid_index_is_none() {
        let sheet = two_tile_sheet();
        assert!(sheet.get_tile(2, 0).is_none());
        assert!(sheet.get_tile(0, 1).is_none());
    }

    #[test]
    fn partial_tiles_are_discarded() {
        let width = TILE_SIZE + 7;
        let height = TILE_SIZE;
        let sheet = SpriteSheet::from_pixels(vec![0; (width * height) as usize], width, height);
        assert_eq!(sheet.grid_size(), (1, 1));
    }

    #[test]
    fn solid_sprite_has_uniform_pixels() {
        let sprite = Sprite::solid(0x00FF00);
        assert_eq!(sprite.pixels().len(), (TILE_SIZE * TILE_SIZE) as usize);
        assert!(sprite.pixels().iter().all(|&p| p == 0x00FF00));
    }

    #[test]
    #[should_panic(expected = "sheet pixel array does not match")]
    fn mismatched_pixel_length_panics() {
        let _ = SpriteSheet::from_pixels(vec![0; 10], TILE_SIZE, TILE_SIZE);
    }
}
