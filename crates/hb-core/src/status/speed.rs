//! Speed (PlayerSpeed)
//!
//! Normal speed is 110. A mounted character moves at the mount's pace, so
//! riding replaces every step that describes the rider's own body.

use crate::consts::{LIGHTSPEED_BONUS, PY_FOOD_MAX, STANDARD_SPEED};
use crate::flags::{CauseSet, TraitFlag};
use crate::object::catalog::artifacts;
use crate::player::{Action, BattleForm, EquipSlot, HexSpells, Mutation, Personality, PlayerClass, PlayerRace};

use super::StatusView;
use super::burden::{calc_weight_limit, heavy_armor};
use super::resolver::StatusResolver;

/// Paired weapons that hasten their wielder, main hand first.
const WEAPON_SETS: [(crate::object::ArtifactId, crate::object::ArtifactId, i16); 2] = [
    (artifacts::QUICKTHORN, artifacts::TINYTHORN, 7),
    (artifacts::ICINGDEATH, artifacts::TWINKLE, 5),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Speed;

impl Speed {
    /// Races whose own quickness replaces the class and personality bonus.
    fn naturally_quick(view: &StatusView<'_>) -> bool {
        matches!(view.player.race, PlayerRace::Klackon | PlayerRace::Sprite)
    }

    /// Flat bonus for wielding a matched weapon pair.
    pub fn set_bonus(view: &StatusView<'_>) -> i16 {
        let eq = &view.player.equipment;
        let (Some(main), Some(sub)) = (eq.get(EquipSlot::MainHand), eq.get(EquipSlot::SubHand)) else {
            return 0;
        };
        WEAPON_SETS
            .iter()
            .find(|(m, s, _)| main.is_fixed_artifact(*m) && sub.is_fixed_artifact(*s))
            .map_or(0, |&(_, _, bonus)| bonus)
    }

    fn pval_sum(view: &StatusView<'_>) -> i16 {
        view.equipment_flags()
            .filter(|(_, _, flags)| flags.has(TraitFlag::Speed))
            .map(|(_, item, _)| item.pval)
            .sum()
    }

    /// Carrying limit, which a mount replaces with its own.
    fn carry_limit(view: &StatusView<'_>) -> (i32, i32) {
        match view.mount() {
            Some(mount) => (1500 + mount.level() * 25, 5),
            None => (calc_weight_limit(view), 10),
        }
    }

    /// Value while mounted: only the mount, the load and the action count.
    fn riding_value(&self, view: &StatusView<'_>) -> i32 {
        i32::from(STANDARD_SPEED)
            + i32::from(self.riding_bonus(view))
            + i32::from(self.inventory_weight_bonus(view))
            + i32::from(self.action_bonus(view))
    }
}

impl StatusResolver for Speed {
    fn tr_flag(&self) -> Option<TraitFlag> {
        Some(TraitFlag::Speed)
    }

    fn min_value(&self) -> i16 {
        STANDARD_SPEED - 99
    }

    fn max_value(&self) -> i16 {
        STANDARD_SPEED + 99
    }

    fn default_value(&self, _view: &StatusView<'_>) -> i16 {
        STANDARD_SPEED
    }

    fn race_bonus(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        let lev = p.lev as i16;
        match p.race {
            PlayerRace::Klackon | PlayerRace::Sprite => lev / 10,
            PlayerRace::Merfolk if p.in_water => 2 + lev / 10,
            PlayerRace::Merfolk if !view.has_levitation().is_present() => -2,
            _ => 0,
        }
    }

    fn class_bonus(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        let lev = p.lev as i16;
        let level_bonus = if Self::naturally_quick(view) || p.personality == Personality::Munchkin {
            0
        } else {
            lev / 10
        };
        match p.class {
            PlayerClass::Ninja if heavy_armor(p) => -(lev / 10),
            PlayerClass::Ninja => 3 + level_bonus,
            PlayerClass::Monk | PlayerClass::ForceTrainer if !heavy_armor(p) => level_bonus,
            PlayerClass::Berserker => 2 + [29, 39, 44, 49].iter().filter(|&&l| lev > l).count() as i16,
            _ => 0,
        }
    }

    fn personality_bonus(&self, view: &StatusView<'_>) -> i16 {
        if view.player.personality == Personality::Munchkin && !Self::naturally_quick(view) {
            view.player.lev as i16 / 10 + 5
        } else {
            0
        }
    }

    fn equipments_bonus(&self, view: &StatusView<'_>) -> i16 {
        Self::pval_sum(view) + Self::set_bonus(view)
    }

    fn time_effect_bonus(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        let mut bonus = 0;
        if p.timed.is_fast() {
            bonus += 10;
        }
        if p.timed.slow > 0 {
            bonus -= 10;
        }
        if p.timed.is_hexing(HexSpells::SHOCK_CLOAK) {
            bonus += 3;
        }
        if p.food >= PY_FOOD_MAX {
            bonus -= 10;
        }
        if p.timed.lightspeed > 0 {
            bonus += LIGHTSPEED_BONUS;
        }
        bonus
    }

    fn battleform_bonus(&self, view: &StatusView<'_>) -> i16 {
        if view.player.battle_form == BattleForm::Suzaku { 10 } else { 0 }
    }

    fn mutation_bonus(&self, view: &StatusView<'_>) -> i16 {
        let mut bonus = 0;
        if view.has_mutation(Mutation::XtraFat) {
            bonus -= 2;
        }
        if view.has_mutation(Mutation::XtraLegs) {
            bonus += 3;
        }
        if view.has_mutation(Mutation::ShortLeg) {
            bonus -= 3;
        }
        bonus
    }

    /// Mount overspeed is scaled by riding skill; a slow mount drags the
    /// rider down in full.
    fn riding_bonus(&self, view: &StatusView<'_>) -> i16 {
        let Some(mount) = view.mount() else {
            return 0;
        };
        let p = view.player;
        let over = i32::from(mount.mspeed) - i32::from(STANDARD_SPEED);
        let mut bonus = if over > 0 {
            (over * (p.riding_exp * 3 + p.lev * 160 - 10000) / 22000).max(0)
        } else {
            over
        };
        bonus += (p.riding_exp + p.lev * 160) / 3200;
        if mount.is_fast() {
            bonus += 10;
        }
        if mount.is_slow() {
            bonus -= 10;
        }
        bonus as i16
    }

    fn inventory_weight_bonus(&self, view: &StatusView<'_>) -> i16 {
        let weight = view.player.inventory_weight();
        let (limit, divisor) = Self::carry_limit(view);
        if weight > limit {
            -((weight - limit) / (limit / divisor).max(1)) as i16
        } else {
            0
        }
    }

    fn action_bonus(&self, view: &StatusView<'_>) -> i16 {
        if view.player.action == Action::Search { -10 } else { 0 }
    }

    fn set_exception_value(&self, view: &StatusView<'_>, value: i32) -> i32 {
        if view.is_riding() {
            self.riding_value(view)
        } else {
            value
        }
    }

    fn equipments_flags(&self, view: &StatusView<'_>, pred: &dyn Fn(i16) -> bool) -> CauseSet {
        let mut flags = view
            .equipment_flags()
            .filter(|(_, item, flags)| flags.has(TraitFlag::Speed) && pred(item.pval))
            .fold(CauseSet::NONE, |acc, (slot, _, _)| acc | CauseSet::from_equipment_slot(slot));
        let set = Self::set_bonus(view);
        if set != 0 && pred(set) {
            flags |= CauseSet::MAIN_HAND | CauseSet::SUB_HAND;
        }
        flags
    }

    fn exception_flags(&self, view: &StatusView<'_>, flags: CauseSet) -> CauseSet {
        if view.is_riding() {
            flags & (CauseSet::RIDING | CauseSet::INVEN_PACK | CauseSet::ACTION)
        } else {
            flags
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::consts::A_MAX;
    use crate::monster::{Monster, MonsterRace};
    use crate::object::Catalog;
    use crate::object::catalog::kinds;
    use crate::player::Player;

    fn player(race: PlayerRace, class: PlayerClass) -> Player {
        let mut p = Player::new(race, class, Personality::Ordinary, [14; A_MAX]);
        p.derived.stat_ind = [11; A_MAX];
        p
    }

    #[test]
    fn test_base_speed() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let p = player(PlayerRace::Human, PlayerClass::Warrior);
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(Speed.get_value(&view), STANDARD_SPEED);
        assert!(Speed.get_all_flags(&view).is_empty());
    }

    #[test]
    fn test_haste_and_ring() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        let mut ring = catalog.make_item(kinds::RING_OF_SPEED).unwrap();
        ring.pval = 10;
        p.equip(EquipSlot::MainRing, ring);
        p.timed.fast = 20;
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(Speed.get_value(&view), STANDARD_SPEED + 20);
        assert_eq!(Speed.get_good_flags(&view), CauseSet::MAIN_RING | CauseSet::MAGIC_TIME_EFFECT);
    }

    #[test]
    fn test_berserker_level_steps() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Berserker);
        p.lev = 45;
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(Speed.class_bonus(&view), 5);
    }

    #[test]
    fn test_munchkin_klackon_gets_race_bonus_only() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = Player::new(PlayerRace::Klackon, PlayerClass::Warrior, Personality::Munchkin, [14; A_MAX]);
        p.lev = 30;
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(Speed.race_bonus(&view), 3);
        assert_eq!(Speed.personality_bonus(&view), 0);
    }

    #[test]
    fn test_merfolk_out_of_water() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Merfolk, PlayerClass::Warrior);
        p.lev = 20;
        assert_eq!(Speed.race_bonus(&StatusView::new(&p, &catalog, &config)), -2);
        p.in_water = true;
        assert_eq!(Speed.race_bonus(&StatusView::new(&p, &catalog, &config)), 4);
    }

    #[test]
    fn test_overeating_and_searching() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        p.food = PY_FOOD_MAX;
        p.action = Action::Search;
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(Speed.get_value(&view), STANDARD_SPEED - 20);
        assert_eq!(Speed.get_bad_flags(&view), CauseSet::MAGIC_TIME_EFFECT | CauseSet::ACTION);
    }

    #[test]
    fn test_lightspeed_clamped() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        p.timed.lightspeed = 3;
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(Speed.get_value(&view), STANDARD_SPEED + 99);
    }

    #[test]
    fn test_riding_ignores_rider_bonuses() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Cavalry);
        p.lev = 30;
        p.riding_exp = 5000;
        let mut ring = catalog.make_item(kinds::RING_OF_SPEED).unwrap();
        ring.pval = 10;
        p.equip(EquipSlot::MainRing, ring);
        p.timed.fast = 10;
        p.set_riding(Some(Monster::new(MonsterRace::new("Wild horse", 10, 120), 30)));

        let view = StatusView::new(&p, &catalog, &config);
        // (10 * (15000 + 4800 - 10000) / 22000) + (5000 + 4800) / 3200 = 4 + 3
        assert_eq!(Speed.riding_bonus(&view), 7);
        assert_eq!(Speed.get_value(&view), STANDARD_SPEED + 7);
        assert_eq!(Speed.get_all_flags(&view), CauseSet::RIDING);
    }

    #[test]
    fn test_slow_mount_drags_rider() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        p.lev = 1;
        let mut mount = Monster::new(MonsterRace::new("Donkey", 2, 100), 10);
        mount.slow = 5;
        p.set_riding(Some(mount));
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(Speed.riding_bonus(&view), -20);
    }

    #[test]
    fn test_overload_penalty() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        let limit = calc_weight_limit(&StatusView::new(&p, &catalog, &config));
        let mut rations = catalog.make_item(kinds::RATION).unwrap();
        rations.weight = 1;
        rations.number = limit + limit / 10 * 2;
        p.inventory.push(rations);
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(Speed.inventory_weight_bonus(&view), -2);
        assert_eq!(Speed.get_bad_flags(&view), CauseSet::INVEN_PACK);
    }
}
