use serde::{Deserialize, Serialize};

/// A current/normal pair, e.g. a Pokemon's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub current: u16,
    pub normal: u16,
}

impl Statistic {
    pub fn new(normal: u16) -> Self {
        Self {
            current: normal,
            normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub health: Statistic,
}

/// A move known by an actor, keyed by its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub title: String,
    pub uses: u8,
}

impl MoveSlot {
    pub fn new(title: impl Into<String>, uses: u8) -> Self {
        Self {
            title: title.into(),
            uses,
        }
    }
}

/// A Pokemon taking part in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub title: String,
    pub level: u8,
    pub statistics: Statistics,
    pub moves: Vec<MoveSlot>, // Up to 4 moves
}

impl Actor {
    pub fn new(title: impl Into<String>, level: u8, max_hp: u16, moves: Vec<MoveSlot>) -> Self {
        Self {
            title: title.into(),
            level,
            statistics: Statistics {
                health: Statistic::new(max_hp),
            },
            moves,
        }
    }

    pub fn current_hp(&self) -> u16 {
        self.statistics.health.current
    }

    pub fn max_hp(&self) -> u16 {
        self.statistics.health.normal
    }

    /// Set HP, clamped to the actor's normal health.
    pub fn set_hp(&mut self, hp: u16) {
        self.statistics.health.current = hp.min(self.statistics.health.normal);
    }

    pub fn is_fainted(&self) -> bool {
        self.statistics.health.current == 0
    }

    /// Moves that can still be used this battle.
    pub fn usable_moves(&self) -> impl Iterator<Item = &MoveSlot> {
        self.moves.iter().filter(|slot| slot.uses > 0)
    }
}
