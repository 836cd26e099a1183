//! Tile registry loaded from a descriptor file.
//!
//! Descriptor format: one tile per line, `name-xPos-yPos-layer`. The layer
//! selects which source sheet the tile is cut from: 1 = obstacles,
//! 2 = decorations, anything else falls back to the background sheet.
//!
//! Loading is best-effort and never transactional: a malformed line is
//! skipped with a warning and parsing continues, so a partially bad file
//! yields a partially populated registry instead of a load failure. A missing
//! file yields an empty registry.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::compositor::Compositor;
use crate::sprite::{Sprite, SpriteSheet};

/// Number of source sheets a descriptor file can reference.
pub const LAYER_COUNT: usize = 3;

/// A named, fixed-size pixel source resolved from its sheet at load time.
#[derive(Debug, Clone)]
pub struct Tile {
    name: String,
    sprite: Sprite,
}

impl Tile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

/// The ordered tile registry; tile IDs are indices into load order.
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Loads a registry from a descriptor file on disk.
    ///
    /// A missing or unreadable file is logged and yields an empty registry;
    /// map data is game content, not a precondition of the renderer.
    pub fn from_file<P: AsRef<Path>>(path: P, sheets: [&SpriteSheet; LAYER_COUNT]) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Self::from_reader(BufReader::new(file), sheets),
            Err(err) => {
                warn!("cannot open tile descriptor {}: {err}", path.display());
                Self { tiles: Vec::new() }
            }
        }
    }

    /// Parses descriptor lines from any reader, top to bottom, best-effort.
    pub fn from_reader<R: BufRead>(reader: R, sheets: [&SpriteSheet; LAYER_COUNT]) -> Self {
        let mut tiles = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!("tile descriptor line {}: read error: {err}", line_no + 1);
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(&line, sheets) {
                Ok(tile) => tiles.push(tile),
                Err(reason) => {
                    warn!("tile descriptor line {}: {reason}; skipping {line:?}", line_no + 1)
                }
            }
        }

        Self { tiles }
    }

    /// Draws the tile with the given ID at a world position.
    ///
    /// An ID outside `[0, len)` is logged and draws nothing; it never fails.
    pub fn load(&self, tile_id: i32, compositor: &mut Compositor, x: i32, y: i32, scale: u32) {
        let Some(tile) = usize::try_from(tile_id).ok().and_then(|id| self.tiles.get(id)) else {
            warn!("tile id {tile_id} is not within the registry (size {})", self.tiles.len());
            return;
        };
        compositor.draw_sprite(Some(tile.sprite()), x, y, scale);
    }

    pub fn get(&self, tile_id: usize) -> Option<&Tile> {
        self.tiles.get(tile_id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

fn parse_line(line: &str, sheets: [&SpriteSheet; LAYER_COUNT]) -> Result<Tile, String> {
    let fields: Vec<&str> = line.split('-').collect();
    let &[name, x, y, layer] = fields.as_slice() else {
        return Err(format!("expected 4 '-'-separated fields, got {}", fields.len()));
    };

    let x: u32 = x.parse().map_err(|_| format!("bad x position {x:?}"))?;
    let y: u32 = y.parse().map_err(|_| format!("bad y position {y:?}"))?;
    let layer: u32 = layer.parse().map_err(|_| format!("bad layer {layer:?}"))?;

    let sheet = match layer {
        1 => sheets[1],
        2 => sheets[2],
        _ => sheets[0], // background is the fallback layer
    };

    let sprite = sheet
        .get_tile(x, y)
        .ok_or_else(|| format!("tile ({x}, {y}) is outside its sheet"))?;

    Ok(Tile {
        name: name.to_string(),
        sprite: sprite.clone(),
    })
}
