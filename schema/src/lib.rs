// Pokemon Controls Schema - Shared type definitions
// This crate contains the small enums and value types that cross the boundary
// between the battle engine, the host game, and the controls crate.

// Re-export the main types
pub use battle_data::*;
pub use game_types::*;

// Hosts iterate `ThingGroup` and `MenuName` without depending on strum directly.
pub use strum::IntoEnumIterator;

pub mod battle_data;
pub mod game_types;
