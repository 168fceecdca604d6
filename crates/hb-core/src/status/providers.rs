//! Per-source trait providers
//!
//! One question per cause category: does this source grant the trait right
//! now. None of these mutate anything.

use crate::flags::{CauseSet, CurseFlags, TraitFlag};
use crate::player::PlayerClass;

use super::StatusView;
use super::burden::heavy_armor;

impl StatusView<'_> {
    /// Racial trait, level-gated by the race table.
    pub fn race_has(&self, flag: TraitFlag) -> bool {
        self.player.race.has_trait(flag, self.player.lev)
    }

    /// Class trait, including the martial-arts traits lost under heavy armour.
    pub fn class_has(&self, flag: TraitFlag) -> bool {
        let p = self.player;
        if p.class.has_trait(flag, p.lev) {
            return true;
        }
        match flag {
            TraitFlag::Speed => match p.class {
                PlayerClass::Monk | PlayerClass::ForceTrainer => p.lev > 9 && !heavy_armor(p),
                PlayerClass::Ninja | PlayerClass::Berserker => true,
                _ => false,
            },
            TraitFlag::FreeAct => p.class.is_martial_artist() && p.lev > 24 && !heavy_armor(p),
            _ => false,
        }
    }

    pub fn personality_has(&self, flag: TraitFlag) -> bool {
        self.player.personality.has_trait(flag)
    }

    /// Equipment slots whose item carries `flag`. Empty slots contribute
    /// nothing.
    pub fn equipment_causes(&self, flag: TraitFlag) -> CauseSet {
        self.equipment_flags()
            .filter(|(_, _, flags)| flags.has(flag))
            .fold(CauseSet::NONE, |acc, (slot, _, _)| acc | CauseSet::from_equipment_slot(slot))
    }

    pub fn battle_form_has(&self, flag: TraitFlag) -> bool {
        self.player.battle_form.has_trait(flag)
    }

    /// Whether a curse in effect forces `flag`.
    pub fn curse_has(&self, flag: TraitFlag) -> bool {
        CurseFlags::for_trait(flag).is_some_and(|curse| self.curse_flags().contains(curse))
    }

    /// The mount's own flight, which replaces every other source while
    /// riding.
    pub fn riding_levitation(&self) -> Option<CauseSet> {
        self.mount()
            .map(|mount| CauseSet::when(mount.can_fly(), CauseSet::RIDING))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::consts::A_MAX;
    use crate::flags::{CauseSet, CurseFlags, TraitFlag};
    use crate::monster::{Monster, MonsterFlags, MonsterRace};
    use crate::object::Catalog;
    use crate::object::catalog::kinds;
    use crate::player::{EquipSlot, Personality, Player, PlayerClass, PlayerRace};
    use crate::status::StatusView;

    fn player(race: PlayerRace, class: PlayerClass) -> Player {
        Player::new(race, class, Personality::Ordinary, [14; A_MAX])
    }

    #[test]
    fn test_race_level_gate() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Yeek, PlayerClass::Warrior);
        p.lev = 19;
        assert!(!StatusView::new(&p, &catalog, &config).race_has(TraitFlag::ImAcid));
        p.lev = 20;
        assert!(StatusView::new(&p, &catalog, &config).race_has(TraitFlag::ImAcid));
    }

    #[test]
    fn test_monk_free_action_needs_light_armour() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Monk);
        p.lev = 25;
        assert!(StatusView::new(&p, &catalog, &config).class_has(TraitFlag::FreeAct));

        p.equip(EquipSlot::Body, catalog.make_item(kinds::FULL_PLATE_ARMOUR).unwrap());
        assert!(!StatusView::new(&p, &catalog, &config).class_has(TraitFlag::FreeAct));
    }

    #[test]
    fn test_equipment_causes_name_slots() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        p.equip(EquipSlot::MainRing, catalog.make_item(kinds::RING_OF_RESIST_FIRE_COLD).unwrap());
        p.equip(EquipSlot::SubRing, catalog.make_item(kinds::RING_OF_RESIST_FIRE_COLD).unwrap());

        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(
            view.equipment_causes(TraitFlag::ResFire),
            CauseSet::MAIN_RING | CauseSet::SUB_RING
        );
        assert!(view.equipment_causes(TraitFlag::ResAcid).is_empty());
    }

    #[test]
    fn test_sexy_personality_aggravates() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let p = Player::new(PlayerRace::Human, PlayerClass::Warrior, Personality::Sexy, [14; A_MAX]);
        let view = StatusView::new(&p, &catalog, &config);
        assert!(view.curse_flags().contains(CurseFlags::AGGRAVATE));
        assert!(view.curse_has(TraitFlag::Aggravate));
        assert!(!view.curse_has(TraitFlag::TyCurse));
    }

    #[test]
    fn test_curse_meta_bits_hidden() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        let mut ring = catalog.make_item(kinds::RING_OF_SPEED).unwrap();
        ring.curse_flags = CurseFlags::CURSED | CurseFlags::HEAVY_CURSE | CurseFlags::TELEPORT;
        p.equip(EquipSlot::MainRing, ring);

        let curses = StatusView::new(&p, &catalog, &config).curse_flags();
        assert_eq!(curses, CurseFlags::TELEPORT);
    }

    #[test]
    fn test_riding_provider_tracks_mount_flight() {
        let catalog = Catalog::standard();
        let mut p = player(PlayerRace::Human, PlayerClass::Cavalry);
        let config = EngineConfig::default();
        assert_eq!(StatusView::new(&p, &catalog, &config).riding_levitation(), None);

        let pegasus = MonsterRace::new("Pegasus", 20, 120).with_flags(MonsterFlags::CAN_FLY);
        p.set_riding(Some(Monster::new(pegasus, 40)));
        assert_eq!(
            StatusView::new(&p, &catalog, &config).riding_levitation(),
            Some(CauseSet::RIDING)
        );

        let off = EngineConfig {
            riding_enabled: false,
            ..EngineConfig::default()
        };
        assert_eq!(StatusView::new(&p, &catalog, &off).riding_levitation(), None);
    }
}
