//! External text/bubble drawing boundary.
//!
//! Text shaping, font metrics, and vector drawing are not the compositor's
//! business. They live behind [`OverlayRenderer`], implemented by whatever
//! drawing backend the host application brings. The compositor's only
//! responsibility is translating world coordinates into screen coordinates
//! with the same camera offset as pixel blits, so text and bubbles scroll in
//! lockstep with the sprites underneath them.

/// A vector/text drawing capability, operating in screen space.
///
/// `size` is a caller-supplied scaling parameter; implementations derive
/// bubble dimensions from their own measured text metrics scaled by it.
pub trait OverlayRenderer {
    /// Draws a line of text at a screen position with a packed RGB color.
    fn draw_text(&mut self, text: &str, screen_x: i32, screen_y: i32, size: u32, color: u32);

    /// Draws a speech bubble containing `text`, anchored at a screen
    /// position, sized from the implementation's text metrics.
    fn draw_text_bubble(&mut self, text: &str, screen_x: i32, screen_y: i32, size: u32);
}
