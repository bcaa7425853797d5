use crate::pokemon::Actor;
use schema::Team;
use serde::{Deserialize, Serialize};

/// The trainer leading a team. Wild encounters have none.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Leader {
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BattleTeam {
    // Ordered roster; index 0 is sent out first.
    pub actors: Vec<Actor>,

    // The index into `actors` of the Pokemon currently in play.
    pub selected_actor: usize,

    pub leader: Option<Leader>,
}

impl BattleTeam {
    /// A wild encounter: no leader, first actor in play.
    pub fn wild(actors: Vec<Actor>) -> Self {
        Self {
            actors,
            selected_actor: 0,
            leader: None,
        }
    }

    /// A trainer-led team, first actor in play.
    pub fn trainer(leader: impl Into<String>, actors: Vec<Actor>) -> Self {
        Self {
            actors,
            selected_actor: 0,
            leader: Some(Leader {
                title: leader.into(),
            }),
        }
    }

    /// Get the actor currently in play
    pub fn selected_actor(&self) -> Option<&Actor> {
        self.actors.get(self.selected_actor)
    }

    /// Check whether any actor can still fight
    pub fn has_remaining_actors(&self) -> bool {
        self.actors.iter().any(|actor| !actor.is_fainted())
    }

    /// First healthy actor that is not already in play
    pub fn next_healthy_actor(&self) -> Option<usize> {
        self.actors
            .iter()
            .enumerate()
            .find(|(index, actor)| *index != self.selected_actor && !actor.is_fainted())
            .map(|(index, _)| index)
    }

    pub fn is_wild(&self) -> bool {
        self.leader.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Teams {
    pub player: BattleTeam,
    pub opponent: BattleTeam,
}

impl Teams {
    pub fn get(&self, team: Team) -> &BattleTeam {
        match team {
            Team::Player => &self.player,
            Team::Opponent => &self.opponent,
        }
    }
}
