use crate::pokemon::Actor;
use crate::teams::{BattleTeam, Teams};
use schema::{BattleOutcome, Choice, Team};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// State for an ongoing battle, as seen by the selectors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BattleInfo {
    pub teams: Teams,
}

impl BattleInfo {
    pub fn new(player: BattleTeam, opponent: BattleTeam) -> Self {
        Self {
            teams: Teams { player, opponent },
        }
    }

    pub fn team(&self, team: Team) -> &BattleTeam {
        self.teams.get(team)
    }

    pub fn selected_actor(&self, team: Team) -> Option<&Actor> {
        self.teams.get(team).selected_actor()
    }

    /// Trainer battles forbid running away.
    pub fn is_wild_encounter(&self) -> bool {
        self.teams.opponent.is_wild()
    }
}

/// Which player-facing menu the selector is waiting on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuState {
    TopMenu,
    MovesMenu,
    ItemsMenu,
    SwitchMenu,
    FleeRefusal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    TurnStarted {
        team: Team,
    },
    MenuEntered {
        state: MenuState,
    },
    ChoiceMade {
        team: Team,
        choice: Choice,
    },
    FleeRefused {
        team: Team,
    },
    SwitchOffered {
        team: Team,
    },
    ActorSwitched {
        team: Team,
        actor: usize,
    },
    BattleStopped {
        outcome: BattleOutcome,
    },
}

impl SelectorEvent {
    /// Formats the event into a human-readable string using battle context.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, battle_info: &BattleInfo) -> Option<String> {
        match self {
            SelectorEvent::TurnStarted { team } => {
                let actor = battle_info.selected_actor(*team)?;
                Some(format!("What will {} do?", actor.title.to_uppercase()))
            }
            SelectorEvent::MenuEntered { .. } => None,
            SelectorEvent::ChoiceMade { team, choice } => {
                let actor_name = battle_info
                    .selected_actor(*team)
                    .map(|actor| actor.title.to_uppercase())
                    .unwrap_or_else(|| team.to_string());
                Some(match choice {
                    Choice::Move { move_title } => {
                        format!("{} will use {}!", actor_name, move_title.to_uppercase())
                    }
                    Choice::Item { item } => format!("Used {}!", item.to_uppercase()),
                    Choice::Switch { actor } => {
                        let replacement = battle_info
                            .team(*team)
                            .actors
                            .get(*actor)
                            .map(|a| a.title.to_uppercase())
                            .unwrap_or_else(|| format!("#{}", actor));
                        format!("Come back, {}! Go, {}!", actor_name, replacement)
                    }
                    Choice::Flee => "Got away safely!".to_string(),
                })
            }
            SelectorEvent::FleeRefused { .. } => None, // The refusal dialog already shows the text
            SelectorEvent::SwitchOffered { team } => {
                Some(format!("The {} team may send out a replacement.", team))
            }
            SelectorEvent::ActorSwitched { team, actor } => {
                let title = battle_info.team(*team).actors.get(*actor)?.title.to_uppercase();
                match &battle_info.team(*team).leader {
                    Some(leader) => Some(format!("{} sent out {}!", leader.title, title)),
                    None => Some(format!("A wild {} appeared!", title)),
                }
            }
            SelectorEvent::BattleStopped { outcome } => Some(match outcome {
                BattleOutcome::PlayerVictory => "The player won the battle!".to_string(),
                BattleOutcome::OpponentVictory => "The player is out of usable Pokemon!".to_string(),
            }),
        }
    }
}

/// Event bus for collecting selector events.
///
/// ```rust,ignore
/// event_bus.print_formatted(&battle_info);  // Human-readable lines on stdout
/// println!("{}", event_bus);                // Debug format via Display
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<SelectorEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: SelectorEvent) {
        debug!(?event, "selector event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[SelectorEvent] {
        &self.events
    }

    /// Remove and return every collected event.
    pub fn drain(&mut self) -> Vec<SelectorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Print all events using their formatted text, skipping silent ones.
    pub fn print_formatted(&self, battle_info: &BattleInfo) {
        for line in self.formatted_lines(battle_info) {
            println!("  {}", line);
        }
    }

    pub fn formatted_lines(&self, battle_info: &BattleInfo) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(battle_info))
            .collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Source of random outcomes (1..=100) for computer-controlled decisions.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // Pre-generate a reasonable number of random values for a battle
        let outcomes: Vec<u8> = (0..100).map(|_| rng.random_range(1..=100)).collect();
        Self { outcomes, index: 0 }
    }

    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.outcomes.is_empty() {
            warn!(reason, "TurnRng has no outcomes, using 1");
            return 1;
        }
        if self.index >= self.outcomes.len() {
            warn!(reason, "TurnRng exhausted, reusing outcomes from the start");
            self.index = 0;
        }
        let outcome = self.outcomes[self.index];
        debug!(outcome, reason, "consumed rng outcome");
        self.index += 1;
        outcome
    }

    /// Map the next outcome onto `0..len`. `len` must be nonzero.
    pub fn next_index(&mut self, len: usize, reason: &str) -> usize {
        let outcome = self.next_outcome(reason).clamp(1, 100) as usize;
        (outcome - 1) * len / 100
    }
}
