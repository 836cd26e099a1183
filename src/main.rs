//! Demo binary: a scrollable tile map with one NPC.
//!
//! Assets are generated procedurally so the demo runs without files on disk;
//! the tile map descriptor is embedded. Arrow keys / WASD scroll the camera,
//! I interacts, Escape quits.

use scrollblit::colors::{self, ALPHA};
use scrollblit::prelude::*;

const VIEW_WIDTH: u32 = 640;
const VIEW_HEIGHT: u32 = 480;
const SCALE: u32 = 2;
const SCROLL_SPEED: i32 = 4;

/// Tile map descriptor, `name-xPos-yPos-layer` per line.
const TILE_DESCRIPTORS: &str = "\
grass-0-0-0
dirt-1-0-0
rock-0-0-1
flower-1-0-2
";

/// Builds a two-tile sheet: a checker tile and a speckled tile, both keyed
/// with the transparency sentinel in a few cells so keying is visible.
fn procedural_sheet(base: u32, accent: u32) -> SpriteSheet {
    let width = TILE_SIZE * 2;
    let height = TILE_SIZE;
    let pixels: Vec<u32> = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            if x < TILE_SIZE {
                // Checkerboard tile
                if (x / 4 + y / 4) % 2 == 0 {
                    base
                } else {
                    accent
                }
            } else if (x * 7 + y * 13) % 23 == 0 {
                ALPHA
            } else {
                base
            }
        })
        .collect();
    SpriteSheet::from_pixels(pixels, width, height)
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut window = Window::new("scrollblit demo", VIEW_WIDTH, VIEW_HEIGHT)?;
    let mut compositor = Compositor::new(VIEW_WIDTH, VIEW_HEIGHT);

    let background = procedural_sheet(colors::rgb(34, 120, 40), colors::rgb(44, 140, 52));
    let obstacles = procedural_sheet(colors::rgb(110, 110, 116), colors::rgb(88, 88, 94));
    let decorations = procedural_sheet(colors::rgb(200, 180, 60), colors::rgb(220, 60, 80));
    let npc_sheet = procedural_sheet(colors::rgb(180, 120, 200), colors::rgb(60, 40, 80));

    let tiles = TileSet::from_reader(
        TILE_DESCRIPTORS.as_bytes(),
        [&background, &obstacles, &decorations],
    );

    let mut entities: Vec<Box<dyn GameObject>> = vec![Box::new(Npc::new(
        &npc_sheet,
        200,
        150,
        "The old bridge washed out last spring.",
        "Ferryman",
    ))];

    let mut input = InputState::default();
    let mut limiter = FrameLimiter::new(&window);
    let tile_step = (TILE_SIZE * SCALE) as i32;

    loop {
        // Input + update phase: all mutation happens before any draw call.
        window.poll_input(&mut input);
        if input.quit {
            break;
        }

        let (mut dx, mut dy) = (0, 0);
        if input.scroll_left {
            dx -= SCROLL_SPEED;
        }
        if input.scroll_right {
            dx += SCROLL_SPEED;
        }
        if input.scroll_up {
            dy -= SCROLL_SPEED;
        }
        if input.scroll_down {
            dy += SCROLL_SPEED;
        }
        compositor.camera_mut().scroll(dx, dy);

        let ctx = FrameContext {
            interact: input.interact,
        };
        for entity in entities.iter_mut() {
            entity.update(&ctx);
        }

        // Render phase: painter order, background tiles first.
        compositor.clear();
        for row in 0..16 {
            for col in 0..24 {
                let id = i32::from((col + row) % 2 == 1);
                tiles.load(id, &mut compositor, col * tile_step, row * tile_step, SCALE);
            }
        }
        // A few obstacles and decorations on top of the ground layer.
        tiles.load(2, &mut compositor, tile_step * 5, tile_step * 3, SCALE);
        tiles.load(3, &mut compositor, tile_step * 8, tile_step * 6, SCALE);

        for entity in entities.iter_mut() {
            entity.render(&mut compositor, SCALE);
        }

        // Present phase: the buffer is complete, hand it to the display.
        window.present(compositor.as_bytes())?;
        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
