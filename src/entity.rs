//! Game entities and the capability trait the compositor's caller drives.
//!
//! Concrete entity kinds live behind `Box<dyn GameObject>` in one ordered
//! collection; draw order is collection order, which is all the depth model
//! there is (painter's algorithm). The update phase runs fully before the
//! render phase of a frame, so `update` may mutate state that `render` reads.

use crate::compositor::Compositor;
use crate::rect::Rectangle;
use crate::sprite::{Sprite, SpriteSheet, TILE_SIZE};

/// Per-frame input snapshot handed to every entity's update.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameContext {
    /// The interact key was pressed this frame.
    pub interact: bool,
}

/// Capability set every managed entity exposes to the game loop.
pub trait GameObject {
    /// Issues this entity's draw calls for the current frame.
    fn render(&mut self, compositor: &mut Compositor, scale: u32);

    /// Advances entity state; runs strictly before any render call.
    fn update(&mut self, ctx: &FrameContext);

    /// Translates the entity in world space. `d_theta` is reserved for
    /// kinds that rotate; axis-aligned entities ignore it.
    fn transform(&mut self, dx: i32, dy: i32, d_theta: i32);
}

/// Text shown above an NPC until the player interacts with it.
const INTERACT_PROMPT: &str = "Press I to interact";

/// A stationary character with a dialogue message and an interaction zone.
pub struct Npc {
    x: i32,
    y: i32,
    sprite: Option<Sprite>,
    hitbox: Rectangle,
    name: String,
    message: String,
    bubble_text: String,
    can_interact: bool,
}

impl Npc {
    /// Creates an NPC at a world position using tile (0, 0) of its sheet.
    ///
    /// The interaction hitbox extends three tiles up-left of the NPC so the
    /// player can reach it from a distance; it gets a thin border for debug
    /// visibility.
    pub fn new(sheet: &SpriteSheet, x: i32, y: i32, message: &str, name: &str) -> Self {
        let reach = (TILE_SIZE * 3) as i32;
        let mut hitbox = Rectangle::new(x - reach, y - reach, TILE_SIZE * 3, TILE_SIZE * 3);
        hitbox.generate_border(1, 0x194875);

        Self {
            x,
            y,
            sprite: sheet.get_tile(0, 0).cloned(),
            hitbox,
            name: name.to_string(),
            message: message.to_string(),
            bubble_text: INTERACT_PROMPT.to_string(),
            can_interact: false,
        }
    }

    /// Marks whether the player is close enough to interact.
    pub fn set_can_interact(&mut self, value: bool) {
        self.can_interact = value;
        if !value {
            self.bubble_text = INTERACT_PROMPT.to_string();
        }
    }

    pub fn hitbox(&self) -> &Rectangle {
        &self.hitbox
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl GameObject for Npc {
    fn render(&mut self, compositor: &mut Compositor, scale: u32) {
        compositor.draw_sprite(self.sprite.as_ref(), self.x, self.y, scale);
        compositor.draw_rectangle(&self.hitbox, scale);

        if self.can_interact {
            compositor.draw_text_bubble(&self.bubble_text, self.x, self.y - 20, 6 * scale);
            compositor.draw_text(&self.name, self.x, self.y + 200, 6 * scale, 0xFFFFFF);
        }
    }

    fn update(&mut self, ctx: &FrameContext) {
        if self.can_interact && ctx.interact {
            // Interaction swaps the prompt for the NPC's dialogue line.
            self.bubble_text = self.message.clone();
        }
    }

    fn transform(&mut self, dx: i32, dy: i32, _d_theta: i32) {
        self.x += dx;
        self.y += dy;
        self.hitbox.move_x(dx);
        self.hitbox.move_y(dy);
    }
}
