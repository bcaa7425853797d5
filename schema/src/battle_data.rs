use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a battle an actor fights for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Player,
    Opponent,
}

impl Team {
    /// The side facing this one.
    pub fn opposite(self) -> Team {
        match self {
            Team::Player => Team::Opponent,
            Team::Opponent => Team::Player,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Team::Player => "player",
            Team::Opponent => "opponent",
        };
        write!(f, "{}", display_name)
    }
}

/// How a battle ended when one side ran out of healthy actors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BattleOutcome {
    PlayerVictory,
    OpponentVictory,
}

impl BattleOutcome {
    /// The outcome in which `team` is the winner.
    pub fn victory_for(team: Team) -> BattleOutcome {
        match team {
            Team::Player => BattleOutcome::PlayerVictory,
            Team::Opponent => BattleOutcome::OpponentVictory,
        }
    }
}

/// A team's decision for one turn, handed to the battle engine.
///
/// The JSON form carries an internal `type` tag, e.g.
/// `{"type":"move","move":"Tackle"}` or `{"type":"flee"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Choice {
    Move {
        #[serde(rename = "move")]
        move_title: String,
    },
    Item {
        item: String,
    },
    Switch {
        actor: usize,
    },
    Flee,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Move { move_title } => write!(f, "use {}", move_title),
            Choice::Item { item } => write!(f, "use item {}", item),
            Choice::Switch { actor } => write!(f, "switch to actor {}", actor),
            Choice::Flee => write!(f, "flee"),
        }
    }
}
