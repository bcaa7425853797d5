use crate::battle::state::MenuState;
use schema::{MenuName, Team};
use thiserror::Error;

/// Main error type for the battle controls and mods
#[derive(Debug, Error)]
pub enum ControlsError {
    /// Error raised while driving a battle selector
    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),
    /// Error raised by the mod registry
    #[error("Mod error: {0}")]
    Mod(#[from] ModError),
    /// Error raised while loading configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to the turn-by-turn selector state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// `next_action` was called while a turn was still waiting on the player
    #[error("A turn is already in progress for the {0} team")]
    TurnInProgress(Team),
    /// Player input arrived with no turn waiting for it
    #[error("No turn is in progress")]
    NoTurnInProgress,
    /// The input does not apply to the menu currently on screen
    #[error("Input {input} is not valid while in {state:?}")]
    UnexpectedInput { state: MenuState, input: String },
    /// Option index is out of bounds for the active menu
    #[error("Invalid option {index} for menu {menu}")]
    InvalidOption { menu: MenuName, index: usize },
    /// The requested replacement cannot be sent out
    #[error("Cannot switch to actor {0}")]
    InvalidSwitch(usize),
    /// The team's selected actor index does not name a roster member
    #[error("No selected actor for the {0} team")]
    NoSelectedActor(Team),
    /// The acting actor has no moves to choose from
    #[error("Actor {0} has no moves available")]
    NoMovesAvailable(String),
}

/// Errors related to mod registration and toggling
#[derive(Debug, Error)]
pub enum ModError {
    /// No mod is registered under the given name
    #[error("No mod named '{0}'")]
    UnknownMod(String),
    /// A mod with this name is already registered
    #[error("A mod named '{0}' is already registered")]
    DuplicateMod(String),
    /// Stored mod settings could not be encoded or decoded
    #[error("Malformed mod settings: {0}")]
    Settings(#[from] postcard::Error),
}

/// Errors related to loading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Type alias for Results using ControlsError
pub type ControlsResult<T> = Result<T, ControlsError>;

/// Type alias for Results using SelectorError
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Type alias for Results using ModError
pub type ModResult<T> = Result<T, ModError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
