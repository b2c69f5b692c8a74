/// Website shown on a decorative tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLink {
    pub website: String,
    pub label: String,
}

impl TileLink {
    pub fn new(website: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            website: website.into(),
            label: label.into(),
        }
    }
}

/// Decorative tile field generated around the player.
#[derive(Debug, Clone)]
pub struct TileTuning {
    /// Edge length of one tile in world units.
    pub size: f32,

    /// Tiles are kept generated this many cells around the player.
    pub radius: i32,

    /// Roughly one tile in `link_every` carries a link.
    pub link_every: u64,

    pub links: Vec<TileLink>,

    /// RGB colors tiles are painted with.
    pub palette: Vec<u32>,

    /// Color a lit tile switches to.
    pub lit_color: u32,
}

impl Default for TileTuning {
    fn default() -> Self {
        Self {
            size: 2.0,
            radius: 4,
            link_every: 7,
            links: vec![
                TileLink::new("https://www.rust-lang.org", "Rust"),
                TileLink::new("https://threejs.org", "three.js"),
                TileLink::new("https://github.com", "GitHub"),
            ],
            palette: vec![0x1c7aff, 0x2e8b57, 0x8a2be2, 0xff8c00, 0x20b2aa],
            lit_color: 0xffff66,
        }
    }
}
