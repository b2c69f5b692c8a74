// Domain layer: core simulation types and rules.

pub mod collision;
pub mod input;
pub mod schedule;
pub mod state;
pub mod systems;
pub mod tuning;

pub use input::{InputAdapter, InputEvent, Key};
pub use state::{AssetKind, EntityId, EntityKind, FrameEvent, FrameSnapshot, GameFlags};
