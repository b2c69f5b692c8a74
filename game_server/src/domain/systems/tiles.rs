use crate::domain::state::{FrameEvent, Tile};
use crate::domain::tuning::{TileLink, TileTuning};
use glam::Vec3;
use std::collections::HashMap;

/// Decorative tiles created lazily around the player and never removed.
#[derive(Debug, Default)]
pub struct TileField {
    tiles: HashMap<(i32, i32), Tile>,
    seed: u64,
}

impl TileField {
    pub fn new(seed: u64) -> Self {
        Self {
            tiles: HashMap::new(),
            seed,
        }
    }

    pub fn coord_of(position: Vec3, tuning: &TileTuning) -> (i32, i32) {
        (
            (position.x / tuning.size).floor() as i32,
            (position.z / tuning.size).floor() as i32,
        )
    }

    /// Creates any missing tile within `tuning.radius` cells of `position`.
    pub fn ensure_around(
        &mut self,
        position: Vec3,
        tuning: &TileTuning,
        events: &mut Vec<FrameEvent>,
    ) {
        let (cx, cz) = Self::coord_of(position, tuning);
        for x in cx - tuning.radius..=cx + tuning.radius {
            for z in cz - tuning.radius..=cz + tuning.radius {
                if self.tiles.contains_key(&(x, z)) {
                    continue;
                }
                let tile = generate_tile((x, z), self.seed, tuning);
                events.push(FrameEvent::TileSpawned(tile.clone()));
                self.tiles.insert((x, z), tile);
            }
        }
    }

    /// Toggles the tile under `position` and returns its link, if it has one.
    pub fn interact(
        &mut self,
        position: Vec3,
        tuning: &TileTuning,
        events: &mut Vec<FrameEvent>,
    ) -> Option<TileLink> {
        let coord = Self::coord_of(position, tuning);
        let base_color = tile_color(coord, self.seed, tuning);
        let tile = self.tiles.get_mut(&coord)?;

        tile.lit = !tile.lit;
        tile.color = if tile.lit { tuning.lit_color } else { base_color };
        events.push(FrameEvent::TileChanged(tile.clone()));

        let link = tile.link.clone()?;
        events.push(FrameEvent::TileActivated(link.clone()));
        Some(link)
    }

    /// All tiles, ordered by coordinate.
    pub fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.tiles.values().cloned().collect();
        tiles.sort_by_key(|tile| tile.coord);
        tiles
    }

    pub fn get(&self, coord: (i32, i32)) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

// splitmix64 over the coordinate pair; stable across runs for a given seed.
fn tile_hash((x, z): (i32, i32), seed: u64) -> u64 {
    let mut h = seed ^ (((x as u32 as u64) << 32) | (z as u32 as u64));
    h = h.wrapping_add(0x9e37_79b9_7f4a_7c15);
    h = (h ^ (h >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h = (h ^ (h >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    h ^ (h >> 31)
}

fn tile_color(coord: (i32, i32), seed: u64, tuning: &TileTuning) -> u32 {
    if tuning.palette.is_empty() {
        return 0;
    }
    let h = tile_hash(coord, seed);
    tuning.palette[(h % tuning.palette.len() as u64) as usize]
}

fn generate_tile(coord: (i32, i32), seed: u64, tuning: &TileTuning) -> Tile {
    let h = tile_hash(coord, seed);
    let has_link =
        tuning.link_every > 0 && !tuning.links.is_empty() && (h >> 16) % tuning.link_every == 0;
    let link = if has_link {
        Some(tuning.links[((h >> 32) % tuning.links.len() as u64) as usize].clone())
    } else {
        None
    };

    Tile {
        coord,
        color: tile_color(coord, seed, tuning),
        lit: false,
        link,
    }
}
