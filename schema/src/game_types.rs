use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

/// Named menus the battle controls create on the host's menu grapher.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum MenuName {
    GeneralText,
    BattleOptions,
    BattleFightList,
    Battle,
}

/// Categories of in-game objects. Every thing of a group shares one prototype.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum ThingGroup {
    Solid,
    Character,
    Scenery,
    Terrain,
    Text,
}
