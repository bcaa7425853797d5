//! Optional game modifications that can be switched on and off at runtime.
//!
//! A mod publishes handlers for lifecycle events; the `ModAttacher` tracks
//! which mods are enabled and fires those handlers as the state changes.

pub mod walk_through_walls;

use crate::errors::{ModError, ModResult};
use crate::things::ThingPrototypes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info};

pub use walk_through_walls::WalkThroughWallsMod;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModEvent {
    OnModEnable,
    OnModDisable,
}

impl fmt::Display for ModEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            ModEvent::OnModEnable => "onModEnable",
            ModEvent::OnModDisable => "onModDisable",
        };
        write!(f, "{}", display_name)
    }
}

pub type ModHandler = fn(&mut ThingPrototypes);

/// Mod event handlers, keyed by event.
#[derive(Debug, Clone, Default)]
pub struct ModEventRegister {
    handlers: HashMap<ModEvent, ModHandler>,
}

impl ModEventRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, event: ModEvent, handler: ModHandler) -> Self {
        self.handlers.insert(event, handler);
        self
    }

    pub fn handler(&self, event: ModEvent) -> Option<ModHandler> {
        self.handlers.get(&event).copied()
    }
}

pub trait Mod {
    fn name(&self) -> &'static str;
    fn events(&self) -> ModEventRegister;
}

/// Which mods were enabled, in a form that can be stored between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ModSettings {
    pub enabled: Vec<String>,
}

impl ModSettings {
    pub fn to_bytes(&self) -> ModResult<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> ModResult<Self> {
        Ok(postcard::from_bytes(bytes)?)
    }
}

struct AttachedMod {
    name: &'static str,
    events: ModEventRegister,
    enabled: bool,
}

/// Registry of mods, in registration order.
#[derive(Default)]
pub struct ModAttacher {
    mods: Vec<AttachedMod>,
}

impl ModAttacher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mod(&mut self, game_mod: &dyn Mod) -> ModResult<()> {
        let name = game_mod.name();
        if self.mods.iter().any(|attached| attached.name == name) {
            return Err(ModError::DuplicateMod(name.to_string()));
        }
        debug!(name, "registered mod");
        self.mods.push(AttachedMod {
            name,
            events: game_mod.events(),
            enabled: false,
        });
        Ok(())
    }

    pub fn mod_names(&self) -> Vec<&'static str> {
        self.mods.iter().map(|attached| attached.name).collect()
    }

    pub fn is_enabled(&self, name: &str) -> ModResult<bool> {
        Ok(self.find(name)?.enabled)
    }

    /// Enables a mod and fires its `OnModEnable` handler. No-op if already enabled.
    pub fn enable_mod(&mut self, name: &str, things: &mut ThingPrototypes) -> ModResult<()> {
        self.set_enabled(name, true, things)
    }

    /// Disables a mod and fires its `OnModDisable` handler. No-op if already disabled.
    pub fn disable_mod(&mut self, name: &str, things: &mut ThingPrototypes) -> ModResult<()> {
        self.set_enabled(name, false, things)
    }

    /// Flips a mod and returns whether it is now enabled.
    pub fn toggle_mod(&mut self, name: &str, things: &mut ThingPrototypes) -> ModResult<bool> {
        let enabled = !self.is_enabled(name)?;
        self.set_enabled(name, enabled, things)?;
        Ok(enabled)
    }

    pub fn settings(&self) -> ModSettings {
        ModSettings {
            enabled: self
                .mods
                .iter()
                .filter(|attached| attached.enabled)
                .map(|attached| attached.name.to_string())
                .collect(),
        }
    }

    /// Enables exactly the mods named in `settings`, disabling the rest.
    /// Every name is checked before any handler fires.
    pub fn apply_settings(
        &mut self,
        settings: &ModSettings,
        things: &mut ThingPrototypes,
    ) -> ModResult<()> {
        for name in &settings.enabled {
            self.find(name)?;
        }
        let names = self.mod_names();
        for name in names {
            let enabled = settings.enabled.iter().any(|wanted| wanted == name);
            self.set_enabled(name, enabled, things)?;
        }
        Ok(())
    }

    fn set_enabled(
        &mut self,
        name: &str,
        enabled: bool,
        things: &mut ThingPrototypes,
    ) -> ModResult<()> {
        let attached = self
            .mods
            .iter_mut()
            .find(|attached| attached.name == name)
            .ok_or_else(|| ModError::UnknownMod(name.to_string()))?;
        if attached.enabled == enabled {
            return Ok(());
        }
        attached.enabled = enabled;

        let event = if enabled {
            ModEvent::OnModEnable
        } else {
            ModEvent::OnModDisable
        };
        info!(name, %event, "mod toggled");
        if let Some(handler) = attached.events.handler(event) {
            handler(things);
        }
        Ok(())
    }

    fn find(&self, name: &str) -> ModResult<&AttachedMod> {
        self.mods
            .iter()
            .find(|attached| attached.name == name)
            .ok_or_else(|| ModError::UnknownMod(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::things::{always_collide, Thing};
    use pretty_assertions::assert_eq;
    use schema::ThingGroup;

    /// Makes character things collide with everything while enabled.
    struct SolidCharactersMod;

    impl Mod for SolidCharactersMod {
        fn name(&self) -> &'static str {
            "Solid Characters"
        }

        fn events(&self) -> ModEventRegister {
            ModEventRegister::new().on(ModEvent::OnModEnable, |things| {
                things.set_collide(ThingGroup::Character, always_collide)
            })
        }
    }

    fn attacher() -> ModAttacher {
        let mut attacher = ModAttacher::new();
        attacher.add_mod(&WalkThroughWallsMod).unwrap();
        attacher.add_mod(&SolidCharactersMod).unwrap();
        attacher
    }

    #[test]
    fn test_duplicate_mod_names_are_rejected() {
        let mut attacher = attacher();
        let result = attacher.add_mod(&WalkThroughWallsMod);
        assert!(matches!(result, Err(ModError::DuplicateMod(name)) if name == "Walk Through Walls"));
        assert_eq!(attacher.mod_names(), vec!["Walk Through Walls", "Solid Characters"]);
    }

    #[test]
    fn test_unknown_mod_is_an_error() {
        let mut attacher = attacher();
        let mut things = ThingPrototypes::new();
        assert!(matches!(
            attacher.enable_mod("Infinite Money", &mut things),
            Err(ModError::UnknownMod(_))
        ));
        assert!(attacher.is_enabled("Infinite Money").is_err());
    }

    #[test]
    fn test_toggle_fires_handlers_and_tracks_state() {
        let mut attacher = attacher();
        let mut things = ThingPrototypes::new();
        let player = Thing::new("Player", ThingGroup::Character, 0.0, 0.0, 16.0);
        let far_away = Thing::new("Sign", ThingGroup::Scenery, 500.0, 500.0, 16.0);

        assert!(attacher.toggle_mod("Solid Characters", &mut things).unwrap());
        assert!(attacher.is_enabled("Solid Characters").unwrap());
        assert!(things.collides(&player, &far_away));

        // No disable handler registered: state flips, prototype is left alone.
        assert!(!attacher.toggle_mod("Solid Characters", &mut things).unwrap());
        assert!(things.collides(&player, &far_away));
    }

    #[test]
    fn test_settings_round_trip_through_storage() {
        let mut attacher = attacher();
        let mut things = ThingPrototypes::new();
        attacher.enable_mod("Walk Through Walls", &mut things).unwrap();

        let bytes = attacher.settings().to_bytes().unwrap();
        let restored = ModSettings::from_bytes(&bytes).unwrap();
        assert_eq!(restored.enabled, vec!["Walk Through Walls".to_string()]);

        let mut fresh = self::attacher();
        let mut fresh_things = ThingPrototypes::new();
        fresh.apply_settings(&restored, &mut fresh_things).unwrap();
        assert!(fresh.is_enabled("Walk Through Walls").unwrap());
        assert!(!fresh.is_enabled("Solid Characters").unwrap());
    }

    #[test]
    fn test_apply_settings_rejects_unknown_names_before_toggling() {
        let mut attacher = attacher();
        let mut things = ThingPrototypes::new();
        let settings = ModSettings {
            enabled: vec!["Walk Through Walls".to_string(), "Bogus".to_string()],
        };

        assert!(attacher.apply_settings(&settings, &mut things).is_err());
        assert!(!attacher.is_enabled("Walk Through Walls").unwrap());
    }

    #[test]
    fn test_truncated_settings_fail_to_decode() {
        let settings = ModSettings {
            enabled: vec!["Walk Through Walls".to_string()],
        };
        let bytes = settings.to_bytes().unwrap();
        let result = ModSettings::from_bytes(&bytes[..bytes.len() - 3]);
        assert!(matches!(result, Err(ModError::Settings(_))));
    }
}
