//! Host-side services the selectors drive.
//!
//! The host game owns rendering, the inventory screens and battle resolution.
//! Selectors only describe what to show and report what was decided.

use crate::battle::completion::Completion;
use schema::{BattleOutcome, MenuName, Team};
use serde::{Deserialize, Serialize};

/// What selecting a menu option does. Options without an action are inert.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum OptionAction {
    Fight,
    Item,
    Pokemon,
    Run,
    UseMove { move_title: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub text: String,
    pub action: Option<OptionAction>,
}

impl MenuOption {
    pub fn new(text: impl Into<String>, action: OptionAction) -> Self {
        Self {
            text: text.into(),
            action: Some(action),
        }
    }

    /// A slot that shows text but cannot be chosen.
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuList {
    pub options: Vec<MenuOption>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuSettings {
    pub back_menu: Option<MenuName>,
    pub delete_on_finish: bool,
}

pub trait MenuGrapher {
    fn create_menu(&mut self, name: MenuName, settings: MenuSettings);
    fn add_menu_list(&mut self, name: MenuName, list: MenuList);
    fn add_menu_dialog(&mut self, name: MenuName, text: &str);
    fn set_active_menu(&mut self, name: MenuName);
}

/// An item the player picked from the inventory screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InventoryListing {
    pub item: String,
    pub amount: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMenuSettings {
    pub back_menu: MenuName,
    pub container: MenuName,
    pub disable_tossing: bool,
}

pub trait ItemMenu {
    fn open_items(&mut self, settings: ItemMenuSettings);
}

pub trait Switching {
    /// Let the player replace a knocked-out actor. Calls `on_complete` once done.
    fn offer_switch(&mut self, team: Team, on_complete: Completion<()>);

    /// Show the party screen for a voluntary switch.
    fn open_battle_pokemon_menu(&mut self, team: Team);
}

pub trait BattleMover {
    fn stop_battle(&mut self, outcome: BattleOutcome);
    fn switch_selected_actor(&mut self, team: Team, actor: usize);
}

/// Everything the player selector needs from the host.
pub trait SelectorHost: MenuGrapher + ItemMenu + Switching + BattleMover {}

impl<T: MenuGrapher + ItemMenu + Switching + BattleMover> SelectorHost for T {}
