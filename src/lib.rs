// In: src/lib.rs

//! Pokemon Player Controls
//!
//! Turn-by-turn battle action selection for the player and computer teams,
//! plus runtime mods that reshape overworld behavior. Rendering, inventory
//! screens and battle resolution stay with the host game and are reached
//! through the traits in `battle::services`.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod mods;
pub mod pokemon;
pub mod teams;
pub mod things;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BattleOutcome, Choice, MenuName, Team, ThingGroup};

// --- From this crate's modules (`src/`) ---

// Selectors and the one-shot completion they report through.
pub use battle::completion::{Completion, CompletionSlot};
pub use battle::selectors::{MenuInput, OpponentSelector, PlayerSelector, Progress, Selector};
pub use battle::state::{BattleInfo, EventBus, MenuState, SelectorEvent, TurnRng};

// Host-side services.
pub use battle::services::{
    BattleMover, InventoryListing, ItemMenu, ItemMenuSettings, MenuGrapher, MenuList, MenuOption,
    MenuSettings, OptionAction, SelectorHost, Switching,
};

// Battle data.
pub use pokemon::{Actor, MoveSlot};
pub use teams::{BattleTeam, Leader, Teams};

// Mods and the prototypes they mutate.
pub use mods::{Mod, ModAttacher, ModEvent, ModEventRegister, ModSettings, WalkThroughWallsMod};
pub use things::{Thing, ThingPrototype, ThingPrototypes};

pub use config::{ControlsConfig, ModsConfig, SelectorConfig};

// Crate-specific error and result types.
pub use errors::{
    ConfigError, ConfigResult, ControlsError, ControlsResult, ModError, ModResult, SelectorError,
    SelectorResult,
};
