//! Selector for computer-controlled teams, wild or trainer-led.

use crate::battle::completion::Completion;
use crate::battle::selectors::Selector;
use crate::battle::services::BattleMover;
use crate::battle::state::{BattleInfo, EventBus, SelectorEvent, TurnRng};
use crate::errors::{SelectorError, SelectorResult};
use crate::pokemon::MoveSlot;
use schema::{BattleOutcome, Choice, Team};
use tracing::{debug, info};

pub struct OpponentSelector {
    rng: TurnRng,
    events: EventBus,
}

impl OpponentSelector {
    pub fn new(rng: TurnRng) -> Self {
        Self {
            rng,
            events: EventBus::new(),
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }
}

impl<H: BattleMover + ?Sized> Selector<H> for OpponentSelector {
    /// Sends out the next healthy actor, or ends the battle if none remain.
    fn after_knockout(
        &mut self,
        battle_info: &BattleInfo,
        team: Team,
        host: &mut H,
        on_complete: Completion<()>,
    ) -> SelectorResult<()> {
        let roster = battle_info.team(team);
        if !roster.has_remaining_actors() {
            let outcome = BattleOutcome::victory_for(team.opposite());
            info!(%team, ?outcome, "team has no remaining actors, stopping battle");
            self.events.push(SelectorEvent::BattleStopped { outcome });
            on_complete.release();
            host.stop_battle(outcome);
            return Ok(());
        }

        match roster.next_healthy_actor() {
            Some(actor) => {
                debug!(%team, actor, "sending out replacement");
                host.switch_selected_actor(team, actor);
                self.events.push(SelectorEvent::ActorSwitched { team, actor });
            }
            // Only the actor in play can still fight; it stays out.
            None => debug!(%team, "selected actor is still standing, no replacement"),
        }
        on_complete.complete(());
        Ok(())
    }

    /// Picks a random move, preferring ones with uses left.
    fn next_action(
        &mut self,
        battle_info: &BattleInfo,
        team: Team,
        _host: &mut H,
        on_choice: Completion<Choice>,
    ) -> SelectorResult<()> {
        let actor = match battle_info.selected_actor(team) {
            Some(actor) => actor,
            None => {
                on_choice.release();
                return Err(SelectorError::NoSelectedActor(team));
            }
        };

        let usable: Vec<&MoveSlot> = actor.usable_moves().collect();
        let candidates: Vec<&MoveSlot> = if usable.is_empty() {
            actor.moves.iter().collect()
        } else {
            usable
        };
        if candidates.is_empty() {
            on_choice.release();
            return Err(SelectorError::NoMovesAvailable(actor.title.clone()));
        }

        let index = self.rng.next_index(candidates.len(), "opponent move choice");
        let choice = Choice::Move {
            move_title: candidates[index].title.clone(),
        };

        debug!(%team, %choice, "opponent chose an action");
        self.events.push(SelectorEvent::ChoiceMade {
            team,
            choice: choice.clone(),
        });
        on_choice.complete(choice);
        Ok(())
    }
}
