use pokemon_controls::{
    Actor, BattleInfo, BattleMover, BattleOutcome, BattleTeam, Choice, Completion, ConfigError,
    ControlsConfig, ControlsResult, InventoryListing, ItemMenu, ItemMenuSettings, MenuGrapher,
    MenuInput, MenuList, MenuName, MenuSettings, MenuState, ModAttacher, ModSettings, MoveSlot,
    OpponentSelector, PlayerSelector, Progress, Selector, Switching, Team, Thing, ThingGroup,
    ThingPrototypes, TurnRng, WalkThroughWallsMod,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "controls.ron";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        error!(error = %e, "demo failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ControlsResult<()> {
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        ControlsConfig::load(config_path)?
    } else {
        info!("no {} found, using default config", CONFIG_PATH);
        ControlsConfig::default()
    };

    // Example 1: Walk Through Walls mod
    println!("=== Mods ===");
    run_mod_demo(&config)?;
    println!();

    // Example 2: Wild encounter, fleeing allowed
    println!("=== Wild Battle ===");
    let wild = BattleInfo::new(
        BattleTeam::wild(demo_party()),
        BattleTeam::wild(vec![Actor::new(
            "Rattata",
            4,
            18,
            vec![MoveSlot::new("Tackle", 35), MoveSlot::new("Tail Whip", 30)],
        )]),
    );
    run_battle_turn(&config, &wild)?;
    println!();

    // Example 3: Trainer battle, fleeing refused
    println!("=== Trainer Battle ===");
    let trainer = BattleInfo::new(
        BattleTeam::wild(demo_party()),
        BattleTeam::trainer(
            "Bug Catcher Rick",
            vec![
                Actor::new("Weedle", 6, 22, vec![MoveSlot::new("Poison Sting", 35)]),
                Actor::new("Caterpie", 6, 24, vec![MoveSlot::new("Tackle", 35)]),
            ],
        ),
    );
    run_battle_turn(&config, &trainer)?;

    // The trainer's lead faints: the opponent sends out a replacement.
    let mut knocked_out = trainer.clone();
    knocked_out.teams.opponent.actors[0].set_hp(0);
    let mut host = TerminalHost::new();
    let mut opponent = OpponentSelector::new(TurnRng::new_random());
    opponent.after_knockout(
        &knocked_out,
        Team::Opponent,
        &mut host,
        Completion::new("opponent replacement", |()| {}),
    )?;
    opponent.events().print_formatted(&knocked_out);

    Ok(())
}

fn run_mod_demo(config: &ControlsConfig) -> ControlsResult<()> {
    let mut things = ThingPrototypes::new();
    let mut attacher = ModAttacher::new();
    attacher.add_mod(&WalkThroughWallsMod)?;
    attacher.apply_settings(
        &ModSettings {
            enabled: config.mods.enabled.clone(),
        },
        &mut things,
    )?;

    let wall = Thing::new("Wall", ThingGroup::Solid, 16.0, 16.0, 16.0);
    let player = Thing::new("Player", ThingGroup::Character, 20.0, 16.0, 16.0);

    let report = |attacher: &ModAttacher, things: &ThingPrototypes| -> ControlsResult<()> {
        println!(
            "  {} enabled: {:<5} | wall collide: {}",
            WalkThroughWallsMod::MOD_NAME,
            attacher.is_enabled(WalkThroughWallsMod::MOD_NAME)?,
            things.collides(&wall, &player)
        );
        Ok(())
    };

    report(&attacher, &things)?;
    for _ in 0..2 {
        attacher.toggle_mod(WalkThroughWallsMod::MOD_NAME, &mut things)?;
        report(&attacher, &things)?;
    }

    let stored = attacher.settings().to_bytes()?;
    println!("  Stored mod settings: {} bytes", stored.len());
    Ok(())
}

fn run_battle_turn(config: &ControlsConfig, battle_info: &BattleInfo) -> ControlsResult<()> {
    let mut host = TerminalHost::new();
    let mut player = PlayerSelector::new(config.selector.clone());
    let (on_choice, slot) = Completion::with_slot("player turn");
    player.next_action(battle_info, Team::Player, &mut host, on_choice)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !slot.is_filled() {
        let Some(state) = player.state() else { break };
        print!("> ");
        io::stdout().flush().map_err(ConfigError::Io)?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            // Closed input: back out of everything and run away or stop.
            _ => {
                println!("(input closed)");
                return Ok(());
            }
        };
        let Some(input) = host.parse_input(state, line.trim()) else {
            println!("  Unrecognized input.");
            continue;
        };
        match player.handle_input(battle_info, input, &mut host) {
            Ok(Progress::Waiting(_)) => {}
            Ok(Progress::Chosen(_)) => break,
            Err(e) => println!("  {}", e),
        }
    }
    player.events().print_formatted(battle_info);

    if let Some(choice) = slot.take() {
        print_choice("Player", &choice);
    }

    let mut opponent = OpponentSelector::new(TurnRng::new_random());
    let (on_choice, slot) = Completion::with_slot("opponent turn");
    opponent.next_action(battle_info, Team::Opponent, &mut host, on_choice)?;
    if let Some(choice) = slot.take() {
        print_choice("Opponent", &choice);
    }
    Ok(())
}

fn print_choice(label: &str, choice: &Choice) {
    match serde_json::to_string(choice) {
        Ok(json) => println!("  {} choice: {}", label, json),
        Err(e) => println!("  {} choice: {} (not serializable: {})", label, choice, e),
    }
}

fn demo_party() -> Vec<Actor> {
    vec![
        Actor::new(
            "Pikachu",
            12,
            35,
            vec![
                MoveSlot::new("Thundershock", 30),
                MoveSlot::new("Growl", 40),
                MoveSlot::new("Quick Attack", 30),
            ],
        ),
        Actor::new("Pidgey", 9, 28, vec![MoveSlot::new("Gust", 35)]),
    ]
}

/// Renders menus as numbered lists on stdout.
struct TerminalHost {
    bag: Vec<InventoryListing>,
    party_size: usize,
}

impl TerminalHost {
    fn new() -> Self {
        Self {
            bag: vec![
                InventoryListing {
                    item: "Potion".to_string(),
                    amount: 2,
                },
                InventoryListing {
                    item: "Poke Ball".to_string(),
                    amount: 5,
                },
            ],
            party_size: 2,
        }
    }

    /// Translates a typed line into input for the menu on screen.
    fn parse_input(&self, state: MenuState, line: &str) -> Option<MenuInput> {
        if state == MenuState::FleeRefusal {
            return Some(MenuInput::DismissDialog);
        }
        if line.eq_ignore_ascii_case("b") {
            return Some(MenuInput::Back);
        }
        let index = line.parse::<usize>().ok()?.checked_sub(1)?;
        match state {
            MenuState::TopMenu | MenuState::MovesMenu => Some(MenuInput::Select(index)),
            MenuState::ItemsMenu => self.bag.get(index).cloned().map(MenuInput::UseItem),
            MenuState::SwitchMenu if index < self.party_size => Some(MenuInput::SwitchTo(index)),
            _ => None,
        }
    }
}

impl MenuGrapher for TerminalHost {
    fn create_menu(&mut self, _name: MenuName, _settings: MenuSettings) {}

    fn add_menu_list(&mut self, name: MenuName, list: MenuList) {
        println!("  [{}]", name);
        for (i, option) in list.options.iter().enumerate() {
            println!("    {}. {}", i + 1, option.text);
        }
    }

    fn add_menu_dialog(&mut self, _name: MenuName, text: &str) {
        println!("  \"{}\" (press enter)", text);
    }

    fn set_active_menu(&mut self, _name: MenuName) {}
}

impl ItemMenu for TerminalHost {
    fn open_items(&mut self, settings: ItemMenuSettings) {
        println!("  [Items] (b: back to {})", settings.back_menu);
        for (i, listing) in self.bag.iter().enumerate() {
            println!("    {}. {} x{}", i + 1, listing.item, listing.amount);
        }
    }
}

impl Switching for TerminalHost {
    fn offer_switch(&mut self, team: Team, on_complete: Completion<()>) {
        println!("  The {} team sends out its next Pokemon.", team);
        on_complete.complete(());
    }

    fn open_battle_pokemon_menu(&mut self, team: Team) {
        println!("  [{} party] (number to switch, b: back)", team);
    }
}

impl BattleMover for TerminalHost {
    fn stop_battle(&mut self, outcome: BattleOutcome) {
        println!("  Battle over: {:?}", outcome);
    }

    fn switch_selected_actor(&mut self, team: Team, actor: usize) {
        println!("  The {} team switches to actor {}.", team, actor + 1);
    }
}
