use crate::mods::{Mod, ModEvent, ModEventRegister};
use crate::things::{always_collide, never_collide};
use schema::ThingGroup;

/// Mod to allow the trainer to walk through walls.
pub struct WalkThroughWallsMod;

impl WalkThroughWallsMod {
    pub const MOD_NAME: &'static str = "Walk Through Walls";
}

impl Mod for WalkThroughWallsMod {
    fn name(&self) -> &'static str {
        Self::MOD_NAME
    }

    // Disabling installs constant-false rather than restoring overlap checks.
    fn events(&self) -> ModEventRegister {
        ModEventRegister::new()
            .on(ModEvent::OnModEnable, |things| {
                things.set_collide(ThingGroup::Solid, always_collide)
            })
            .on(ModEvent::OnModDisable, |things| {
                things.set_collide(ThingGroup::Solid, never_collide)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mods::ModAttacher;
    use crate::things::{Thing, ThingPrototypes};
    use rstest::rstest;

    fn attached() -> (ModAttacher, ThingPrototypes) {
        let mut attacher = ModAttacher::new();
        attacher.add_mod(&WalkThroughWallsMod).unwrap();
        (attacher, ThingPrototypes::new())
    }

    #[rstest]
    #[case(0.0)] // overlapping
    #[case(20.0)] // overlapping
    #[case(300.0)] // far away
    fn test_enabled_mod_makes_solid_collide_always_true(#[case] player_left: f32) {
        let (mut attacher, mut things) = attached();
        attacher
            .enable_mod(WalkThroughWallsMod::MOD_NAME, &mut things)
            .unwrap();

        let wall = Thing::new("Wall", ThingGroup::Solid, 16.0, 16.0, 16.0);
        let player = Thing::new("Player", ThingGroup::Character, player_left, 16.0, 16.0);
        assert!(things.collides(&wall, &player));
    }

    #[rstest]
    #[case(0.0)]
    #[case(20.0)]
    #[case(300.0)]
    fn test_disabled_mod_makes_solid_collide_always_false(#[case] player_left: f32) {
        let (mut attacher, mut things) = attached();
        attacher
            .enable_mod(WalkThroughWallsMod::MOD_NAME, &mut things)
            .unwrap();
        attacher
            .disable_mod(WalkThroughWallsMod::MOD_NAME, &mut things)
            .unwrap();

        let wall = Thing::new("Wall", ThingGroup::Solid, 16.0, 16.0, 16.0);
        let player = Thing::new("Player", ThingGroup::Character, player_left, 16.0, 16.0);
        assert!(!things.collides(&wall, &player));
    }

    #[test]
    fn test_mod_only_touches_solid_prototype() {
        let (mut attacher, mut things) = attached();
        attacher
            .enable_mod(WalkThroughWallsMod::MOD_NAME, &mut things)
            .unwrap();

        let sign = Thing::new("Sign", ThingGroup::Scenery, 0.0, 0.0, 16.0);
        let player = Thing::new("Player", ThingGroup::Character, 0.0, 0.0, 16.0);
        assert!(!things.collides(&sign, &player));
    }

    #[test]
    fn test_disable_without_enable_leaves_walls_blocking() {
        let (mut attacher, mut things) = attached();
        attacher
            .disable_mod(WalkThroughWallsMod::MOD_NAME, &mut things)
            .unwrap();

        let wall = Thing::new("Wall", ThingGroup::Solid, 16.0, 16.0, 16.0);
        let player = Thing::new("Player", ThingGroup::Character, 20.0, 16.0, 16.0);
        assert!(things.collides(&wall, &player));
    }
}
