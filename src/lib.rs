//! A CPU-side pixel compositor for scrollable 2D tile/sprite games.
//!
//! This crate draws sprites, tiles, and rectangle overlays into a fixed-size
//! framebuffer under a world-space camera, using nearest-neighbor integer
//! scaling. SDL2 is used only for the window and final presentation; every
//! pixel is composed on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use scrollblit::prelude::*;
//!
//! let mut window = Window::new("My Game", 640, 480)?;
//! let mut compositor = Compositor::new(640, 480);
//! compositor.clear();
//! compositor.draw_sprite(sheet.get_tile(0, 0), 32, 32, 3);
//! window.present(compositor.as_bytes())?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod compositor;
pub mod entity;
pub mod overlay;
pub mod rect;
pub mod sprite;
pub mod tiles;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use compositor::Compositor;
pub use sprite::{Sprite, SpriteSheet, TILE_SIZE};
pub use tiles::TileSet;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use scrollblit::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::Camera;

    // Colors
    pub use crate::colors::{rgb, ALPHA};

    // Compositing
    pub use crate::compositor::Compositor;

    // Entities
    pub use crate::entity::{FrameContext, GameObject, Npc};

    // Overlay boundary
    pub use crate::overlay::OverlayRenderer;

    // Pixel sources
    pub use crate::rect::Rectangle;
    pub use crate::sprite::{Sprite, SpriteSheet, TILE_SIZE};
    pub use crate::tiles::TileSet;

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{blit, FrameBuffer};
}
