//! Selectors decide each team's action for a turn.
//!
//! The battle engine holds one selector per team and calls it whenever that
//! team has to act or has just lost an actor.

pub mod opponent;
pub mod player;

use crate::battle::completion::Completion;
use crate::battle::state::BattleInfo;
use crate::errors::SelectorResult;
use schema::{Choice, Team};

pub use opponent::OpponentSelector;
pub use player::{MenuInput, PlayerSelector, Progress};

/// A common interface for anything that can pick a team's battle actions.
pub trait Selector<H: ?Sized> {
    /// Reacts to one of `team`'s actors getting knocked out.
    fn after_knockout(
        &mut self,
        battle_info: &BattleInfo,
        team: Team,
        host: &mut H,
        on_complete: Completion<()>,
    ) -> SelectorResult<()>;

    /// Decides `team`'s action for this turn. `on_choice` fires exactly once.
    fn next_action(
        &mut self,
        battle_info: &BattleInfo,
        team: Team,
        host: &mut H,
        on_choice: Completion<Choice>,
    ) -> SelectorResult<()>;
}
