//! Internal rendering primitives: the framebuffer and the blit loop.
//!
//! Higher-level draw calls go through [`crate::compositor::Compositor`];
//! these types are exposed outside the crate only via the `bench` module.

mod blitter;
mod framebuffer;

pub use blitter::blit;
pub use framebuffer::FrameBuffer;
