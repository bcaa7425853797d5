//! Selector for a human player's battle actions.
//!
//! Each turn walks a small state machine:
//!
//! ```text
//! TopMenu ──FIGHT──▶ MovesMenu ──move──▶ (chosen)
//!    │ ◀────Back──────┘
//!    ├──ITEM────▶ ItemsMenu ──use item──▶ (chosen)
//!    ├──POKEMON─▶ SwitchMenu ──switch──▶ (chosen)
//!    └──RUN──┬──▶ (chosen: flee, wild battles only)
//!            └──▶ FleeRefusal ──dismiss──▶ TopMenu
//! ```
//!
//! Backing out of any sub-menu re-renders the top menu.

use crate::battle::completion::Completion;
use crate::battle::selectors::Selector;
use crate::battle::services::{
    InventoryListing, ItemMenuSettings, MenuList, MenuOption, MenuSettings, OptionAction,
    SelectorHost,
};
use crate::battle::state::{BattleInfo, EventBus, MenuState, SelectorEvent};
use crate::config::{SelectorConfig, MAX_MOVES};
use crate::errors::{SelectorError, SelectorResult};
use schema::{BattleOutcome, Choice, MenuName, Team};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Player input routed from the host's menus.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    /// Picked the option at this index of the active list menu.
    Select(usize),
    /// Backed out of the active sub-menu.
    Back,
    /// Closed the active dialog.
    DismissDialog,
    /// Used an item from the inventory screen.
    UseItem(InventoryListing),
    /// Picked a roster member on the party screen.
    SwitchTo(usize),
}

/// Where the turn stands after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Waiting(MenuState),
    Chosen(Choice),
}

struct PendingTurn {
    team: Team,
    state: MenuState,
    // Options of the list menu on screen, empty for host-owned screens.
    options: Vec<MenuOption>,
    on_choice: Completion<Choice>,
}

pub struct PlayerSelector {
    config: SelectorConfig,
    turn: Option<PendingTurn>,
    events: EventBus,
}

impl Default for PlayerSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl PlayerSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            turn: None,
            events: EventBus::new(),
        }
    }

    /// The menu the selector is waiting on, or None between turns.
    pub fn state(&self) -> Option<MenuState> {
        self.turn.as_ref().map(|turn| turn.state)
    }

    /// Options of the list menu currently on screen.
    pub fn active_options(&self) -> &[MenuOption] {
        self.turn
            .as_ref()
            .map(|turn| turn.options.as_slice())
            .unwrap_or(&[])
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Applies one player input to the pending turn.
    pub fn handle_input<H: SelectorHost + ?Sized>(
        &mut self,
        battle_info: &BattleInfo,
        input: MenuInput,
        host: &mut H,
    ) -> SelectorResult<Progress> {
        let turn = self.turn.as_ref().ok_or(SelectorError::NoTurnInProgress)?;
        let state = turn.state;
        debug!(?state, ?input, "player input");

        match (state, input) {
            (MenuState::TopMenu | MenuState::MovesMenu, MenuInput::Select(index)) => {
                let action = turn
                    .options
                    .get(index)
                    .ok_or(SelectorError::InvalidOption {
                        menu: list_menu_name(state),
                        index,
                    })?
                    .action
                    .clone();
                match action {
                    Some(action) => self.apply_action(battle_info, action, host),
                    // Placeholder slots do nothing.
                    None => Ok(Progress::Waiting(state)),
                }
            }
            (
                MenuState::MovesMenu | MenuState::ItemsMenu | MenuState::SwitchMenu,
                MenuInput::Back,
            )
            | (MenuState::FleeRefusal, MenuInput::DismissDialog) => {
                self.reset_gui(host);
                Ok(Progress::Waiting(MenuState::TopMenu))
            }
            (MenuState::ItemsMenu, MenuInput::UseItem(listing)) => {
                Ok(self.complete(Choice::Item { item: listing.item }))
            }
            (MenuState::SwitchMenu, MenuInput::SwitchTo(actor)) => {
                let roster = battle_info.team(turn.team);
                let valid = roster
                    .actors
                    .get(actor)
                    .is_some_and(|candidate| !candidate.is_fainted())
                    && actor != roster.selected_actor;
                if !valid {
                    return Err(SelectorError::InvalidSwitch(actor));
                }
                Ok(self.complete(Choice::Switch { actor }))
            }
            (state, input) => Err(SelectorError::UnexpectedInput {
                state,
                input: format!("{:?}", input),
            }),
        }
    }

    fn apply_action<H: SelectorHost + ?Sized>(
        &mut self,
        battle_info: &BattleInfo,
        action: OptionAction,
        host: &mut H,
    ) -> SelectorResult<Progress> {
        match action {
            OptionAction::Fight => {
                self.open_battle_moves_menu(battle_info, host)?;
                Ok(Progress::Waiting(MenuState::MovesMenu))
            }
            OptionAction::Item => {
                self.open_battle_items_menu(host);
                Ok(Progress::Waiting(MenuState::ItemsMenu))
            }
            OptionAction::Pokemon => {
                self.open_battle_pokemon_menu(host);
                Ok(Progress::Waiting(MenuState::SwitchMenu))
            }
            OptionAction::Run => Ok(self.attempt_to_flee(battle_info, host)),
            OptionAction::UseMove { move_title } => Ok(self.complete(Choice::Move { move_title })),
        }
    }

    /// Resets the battle options menus.
    fn reset_gui<H: SelectorHost + ?Sized>(&mut self, host: &mut H) {
        host.create_menu(MenuName::GeneralText, MenuSettings::default());
        host.create_menu(MenuName::BattleOptions, MenuSettings::default());

        let options = vec![
            MenuOption::new("FIGHT", OptionAction::Fight),
            MenuOption::new("ITEM", OptionAction::Item),
            MenuOption::new("POKEMON", OptionAction::Pokemon),
            MenuOption::new("RUN", OptionAction::Run),
        ];
        host.add_menu_list(
            MenuName::BattleOptions,
            MenuList {
                options: options.clone(),
            },
        );
        host.set_active_menu(MenuName::BattleOptions);

        self.enter(MenuState::TopMenu, options);
    }

    /// Opens the in-battle moves menu, padded with inert slots.
    fn open_battle_moves_menu<H: SelectorHost + ?Sized>(
        &mut self,
        battle_info: &BattleInfo,
        host: &mut H,
    ) -> SelectorResult<()> {
        let team = self.turn_team()?;
        let actor = battle_info
            .selected_actor(team)
            .ok_or(SelectorError::NoSelectedActor(team))?;

        let mut options: Vec<MenuOption> = actor
            .moves
            .iter()
            .take(MAX_MOVES)
            .map(|slot| {
                MenuOption::new(
                    slot.title.to_uppercase(),
                    OptionAction::UseMove {
                        move_title: slot.title.clone(),
                    },
                )
            })
            .collect();
        while options.len() < MAX_MOVES {
            options.push(MenuOption::placeholder(self.config.empty_move_text.as_str()));
        }

        host.create_menu(
            MenuName::BattleFightList,
            MenuSettings {
                back_menu: Some(MenuName::BattleOptions),
                delete_on_finish: false,
            },
        );
        host.add_menu_list(
            MenuName::BattleFightList,
            MenuList {
                options: options.clone(),
            },
        );
        host.set_active_menu(MenuName::BattleFightList);

        self.enter(MenuState::MovesMenu, options);
        Ok(())
    }

    /// Opens the in-battle items menu. Tossing items is disabled mid-battle.
    fn open_battle_items_menu<H: SelectorHost + ?Sized>(&mut self, host: &mut H) {
        host.open_items(ItemMenuSettings {
            back_menu: MenuName::BattleOptions,
            container: MenuName::Battle,
            disable_tossing: true,
        });
        self.enter(MenuState::ItemsMenu, Vec::new());
    }

    fn open_battle_pokemon_menu<H: SelectorHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(team) = self.turn.as_ref().map(|turn| turn.team) {
            host.open_battle_pokemon_menu(team);
        }
        self.enter(MenuState::SwitchMenu, Vec::new());
    }

    /// Fleeing is only allowed if the opposing team is wild (has no trainer).
    fn attempt_to_flee<H: SelectorHost + ?Sized>(
        &mut self,
        battle_info: &BattleInfo,
        host: &mut H,
    ) -> Progress {
        if battle_info.is_wild_encounter() {
            return self.complete(Choice::Flee);
        }

        if let Some(team) = self.turn.as_ref().map(|turn| turn.team) {
            warn!(%team, "refused to flee from a trainer battle");
            self.events.push(SelectorEvent::FleeRefused { team });
        }

        host.create_menu(
            MenuName::GeneralText,
            MenuSettings {
                back_menu: Some(MenuName::BattleOptions),
                delete_on_finish: true,
            },
        );
        host.add_menu_dialog(MenuName::GeneralText, &self.config.flee_refusal_text);
        host.set_active_menu(MenuName::GeneralText);

        self.enter(MenuState::FleeRefusal, Vec::new());
        Progress::Waiting(MenuState::FleeRefusal)
    }

    fn enter(&mut self, state: MenuState, options: Vec<MenuOption>) {
        if let Some(turn) = self.turn.as_mut() {
            turn.state = state;
            turn.options = options;
        }
        self.events.push(SelectorEvent::MenuEntered { state });
    }

    fn turn_team(&self) -> SelectorResult<Team> {
        self.turn
            .as_ref()
            .map(|turn| turn.team)
            .ok_or(SelectorError::NoTurnInProgress)
    }

    /// Ends the pending turn, firing its completion.
    fn complete(&mut self, choice: Choice) -> Progress {
        if let Some(turn) = self.turn.take() {
            info!(team = %turn.team, %choice, "player chose an action");
            self.events.push(SelectorEvent::ChoiceMade {
                team: turn.team,
                choice: choice.clone(),
            });
            turn.on_choice.complete(choice.clone());
        }
        Progress::Chosen(choice)
    }
}

impl<H: SelectorHost + ?Sized> Selector<H> for PlayerSelector {
    fn after_knockout(
        &mut self,
        battle_info: &BattleInfo,
        team: Team,
        host: &mut H,
        on_complete: Completion<()>,
    ) -> SelectorResult<()> {
        if battle_info.team(team).has_remaining_actors() {
            debug!(%team, "offering a replacement after knockout");
            self.events.push(SelectorEvent::SwitchOffered { team });
            host.offer_switch(team, on_complete);
        } else {
            let outcome = BattleOutcome::victory_for(team.opposite());
            info!(%team, ?outcome, "team has no remaining actors, stopping battle");
            self.events.push(SelectorEvent::BattleStopped { outcome });
            on_complete.release();
            host.stop_battle(outcome);
        }
        Ok(())
    }

    fn next_action(
        &mut self,
        _battle_info: &BattleInfo,
        team: Team,
        host: &mut H,
        on_choice: Completion<Choice>,
    ) -> SelectorResult<()> {
        if let Some(turn) = &self.turn {
            return Err(SelectorError::TurnInProgress(turn.team));
        }

        self.events.push(SelectorEvent::TurnStarted { team });
        self.turn = Some(PendingTurn {
            team,
            state: MenuState::TopMenu,
            options: Vec::new(),
            on_choice,
        });
        self.reset_gui(host);
        Ok(())
    }
}

fn list_menu_name(state: MenuState) -> MenuName {
    match state {
        MenuState::MovesMenu => MenuName::BattleFightList,
        _ => MenuName::BattleOptions,
    }
}
