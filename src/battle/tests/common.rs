use crate::battle::completion::Completion;
use crate::battle::services::{
    BattleMover, ItemMenu, ItemMenuSettings, MenuGrapher, MenuList, MenuSettings, Switching,
};
use crate::battle::state::BattleInfo;
use crate::pokemon::{Actor, MoveSlot};
use crate::teams::BattleTeam;
use schema::{BattleOutcome, MenuName, Team};

/// A builder for creating test actors with common defaults.
///
/// # Example
/// ```ignore
/// let actor = TestActorBuilder::new("Pikachu", 25)
///     .with_moves(&["Thundershock", "Growl"])
///     .with_hp(0)
///     .build();
/// ```
pub struct TestActorBuilder {
    title: String,
    level: u8,
    moves: Vec<MoveSlot>,
    current_hp: Option<u16>,
}

impl TestActorBuilder {
    pub fn new(title: &str, level: u8) -> Self {
        Self {
            title: title.to_string(),
            level,
            moves: vec![MoveSlot::new("Tackle", 35)],
            current_hp: None,
        }
    }

    /// Replaces the default move list. Every move starts with 10 uses.
    pub fn with_moves(mut self, moves: &[&str]) -> Self {
        self.moves = moves.iter().map(|title| MoveSlot::new(*title, 10)).collect();
        self
    }

    pub fn with_move_slots(mut self, moves: Vec<MoveSlot>) -> Self {
        self.moves = moves;
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Actor {
        let max_hp = u16::from(self.level) * 2 + 10;
        let mut actor = Actor::new(self.title, self.level, max_hp, self.moves);
        if let Some(hp) = self.current_hp {
            actor.set_hp(hp);
        }
        actor
    }
}

/// Creates a 1v1 battle against a wild Pokemon.
pub fn create_wild_battle(player: Actor, wild: Actor) -> BattleInfo {
    BattleInfo::new(BattleTeam::wild(vec![player]), BattleTeam::wild(vec![wild]))
}

/// Creates a battle against a trainer-led team.
pub fn create_trainer_battle(player: Vec<Actor>, opponent: Vec<Actor>) -> BattleInfo {
    BattleInfo::new(
        BattleTeam::wild(player),
        BattleTeam::trainer("Youngster Joey", opponent),
    )
}

/// Every host call, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreateMenu(MenuName, MenuSettings),
    AddMenuList(MenuName, Vec<String>),
    AddMenuDialog(MenuName, String),
    SetActiveMenu(MenuName),
    OpenItems(ItemMenuSettings),
    OfferSwitch(Team),
    OpenPokemonMenu(Team),
    StopBattle(BattleOutcome),
    SwitchSelectedActor(Team, usize),
}

/// Host double that records calls and holds on to switch completions.
#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub pending_switch: Option<Completion<()>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, predicate: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    /// Option texts of the most recent list added to `name`.
    pub fn last_list(&self, name: MenuName) -> Option<Vec<String>> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::AddMenuList(menu, texts) if *menu == name => Some(texts.clone()),
            _ => None,
        })
    }

    pub fn active_menu(&self) -> Option<MenuName> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::SetActiveMenu(menu) => Some(*menu),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl MenuGrapher for RecordingHost {
    fn create_menu(&mut self, name: MenuName, settings: MenuSettings) {
        self.calls.push(HostCall::CreateMenu(name, settings));
    }

    fn add_menu_list(&mut self, name: MenuName, list: MenuList) {
        let texts = list.options.into_iter().map(|option| option.text).collect();
        self.calls.push(HostCall::AddMenuList(name, texts));
    }

    fn add_menu_dialog(&mut self, name: MenuName, text: &str) {
        self.calls.push(HostCall::AddMenuDialog(name, text.to_string()));
    }

    fn set_active_menu(&mut self, name: MenuName) {
        self.calls.push(HostCall::SetActiveMenu(name));
    }
}

impl ItemMenu for RecordingHost {
    fn open_items(&mut self, settings: ItemMenuSettings) {
        self.calls.push(HostCall::OpenItems(settings));
    }
}

impl Switching for RecordingHost {
    fn offer_switch(&mut self, team: Team, on_complete: Completion<()>) {
        self.calls.push(HostCall::OfferSwitch(team));
        self.pending_switch = Some(on_complete);
    }

    fn open_battle_pokemon_menu(&mut self, team: Team) {
        self.calls.push(HostCall::OpenPokemonMenu(team));
    }
}

impl BattleMover for RecordingHost {
    fn stop_battle(&mut self, outcome: BattleOutcome) {
        self.calls.push(HostCall::StopBattle(outcome));
    }

    fn switch_selected_actor(&mut self, team: Team, actor: usize) {
        self.calls.push(HostCall::SwitchSelectedActor(team, actor));
    }
}
