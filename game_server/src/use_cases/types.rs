// Use-case level inputs/outputs for the game loop.

use crate::domain::{AssetKind, InputEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Input(InputEvent),
    AssetLoaded(AssetKind),
    // The connection dropped frames; the next snapshot carries the full tile field.
    Resync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exploding,
    GameOver { score: u64, wave: u32 },
}
