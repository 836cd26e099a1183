//! Packed-RGB color constants and helpers.
//!
//! Every pixel in the compositor is a 24-bit RGB value packed into a `u32` as
//! `0x00RRGGBB`. There is no alpha channel; transparency is expressed with the
//! single reserved sentinel value [`ALPHA`].

/// Mask selecting the 24 color bits of a packed pixel.
/// Bits above 24 are ignored by all comparison and write logic.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// The transparency sentinel. A source pixel whose low 24 bits equal this
/// value is skipped entirely instead of written.
pub const ALPHA: u32 = 0x00FF_00FF;

pub const BLACK: u32 = 0x0000_0000;
pub const WHITE: u32 = 0x00FF_FFFF;
pub const RED: u32 = 0x00FF_0000;
pub const GREEN: u32 = 0x0000_FF00;
pub const BLUE: u32 = 0x0000_00FF;

/// Packs 8-bit channels into a `0x00RRGGBB` pixel.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// True if the pixel's low 24 bits match the transparency sentinel.
#[inline]
pub const fn is_transparent(color: u32) -> bool {
    color & RGB_MASK == ALPHA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_channels() {
        assert_eq!(rgb(0xFF, 0x00, 0x00), RED);
        assert_eq!(rgb(0x12, 0x34, 0x56), 0x0012_3456);
    }

    #[test]
    fn transparency_ignores_high_bits() {
        assert!(is_transparent(ALPHA));
        assert!(is_transparent(0xAB00_0000 | ALPHA));
        assert!(!is_transparent(WHITE));
    }
}
