//! To-hit and to-damage (PlayerHitBonus / PlayerDamageBonus)
//!
//! One resolver per attacking slot: the two hands and the bow. A weapon's
//! own enchantment is applied by the attack code, so the pipeline only
//! counts what the rest of the equipment contributes.

use crate::flags::{CurseFlags, TraitFlag};
use crate::object::catalog::artifacts;
use crate::object::{Item, ItemTval, object_flags};
use crate::player::{EquipSlot, Player, PlayerClass, Stat, adj_dex_th, adj_str_td, adj_str_th};

use super::StatusView;
use super::burden::heavy_armor;
use super::resolver::StatusResolver;

/// Hand that receives undivided equipment bonuses when not dual wielding.
fn primary_hand(p: &Player) -> EquipSlot {
    let [main, sub] = p.weapons();
    if main.is_none() && sub.is_some() {
        EquipSlot::SubHand
    } else {
        EquipSlot::MainHand
    }
}

/// Whether `slot` holds something the attack code already accounts for.
fn is_attack_slot(slot: EquipSlot, item: &Item) -> bool {
    slot == EquipSlot::Bow || (slot.is_hand() && item.is_melee_weapon())
}

/// Share of an item's bonus that reaches `hand`. Dual wielders get each
/// ring on its own side and everything else split.
fn hand_share(p: &Player, hand: EquipSlot, slot: EquipSlot, bonus: i16) -> i16 {
    if p.is_dual_wielding() {
        match (hand, slot) {
            (EquipSlot::MainHand, EquipSlot::MainRing) | (EquipSlot::SubHand, EquipSlot::SubRing) => bonus,
            (_, EquipSlot::MainRing | EquipSlot::SubRing) => 0,
            (EquipSlot::MainHand, _) => (bonus + 1) / 2,
            _ => bonus / 2,
        }
    } else if hand == primary_hand(p) {
        bonus
    } else {
        0
    }
}

fn low_melee_penalty(curses: CurseFlags) -> i16 {
    if !curses.contains(CurseFlags::LOW_MELEE) {
        0
    } else if curses.contains(CurseFlags::HEAVY_CURSE) {
        -15
    } else {
        -5
    }
}

/// Penalty a dual wielder takes on the weapon in `hand`. Matched pairs
/// ease it; Musashi's blades remove it.
pub fn dual_wield_penalty(view: &StatusView<'_>, hand: EquipSlot) -> i16 {
    let p = view.player;
    let [Some(main), Some(sub)] = p.weapons() else {
        return 0;
    };
    let weapon = if hand == EquipSlot::SubHand { sub } else { main };
    let penalty = (100 - p.two_weapon_exp / 160) - (130 - weapon.weight) / 8;

    let paired = |a, b| main.is_fixed_artifact(a) && sub.is_fixed_artifact(b);
    let penalty = if paired(artifacts::QUICKTHORN, artifacts::TINYTHORN)
        || paired(artifacts::ICINGDEATH, artifacts::TWINKLE)
    {
        penalty / 2 - 5
    } else if paired(artifacts::MUSASI_KATANA, artifacts::MUSASI_WAKIZASI) {
        penalty.min(0)
    } else {
        penalty
    };
    penalty as i16
}

/// Priests fight badly with edged weapons the gods have not blessed.
fn priest_weapon_penalty(view: &StatusView<'_>, weapon: Option<&Item>) -> i16 {
    match weapon {
        Some(item)
            if view.player.class == PlayerClass::Priest
                && matches!(item.tval, ItemTval::Sword | ItemTval::Polearm)
                && !object_flags(item, view.catalog).has(TraitFlag::Blessed) =>
        {
            -2
        }
        _ => 0,
    }
}

/// Empty-handed martial artists strike true with their main hand.
fn martial_arts_bonus(view: &StatusView<'_>, hand: EquipSlot) -> i16 {
    let p = view.player;
    let [main, sub] = p.weapons();
    if hand == EquipSlot::MainHand
        && matches!(p.class, PlayerClass::Monk | PlayerClass::ForceTrainer)
        && main.is_none()
        && sub.is_none()
        && !heavy_armor(p)
    {
        p.lev as i16 / 3
    } else {
        0
    }
}

/// To-hit for one attacking slot: `MainHand`, `SubHand` or `Bow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitBonus {
    pub slot: EquipSlot,
}

impl HitBonus {
    pub const fn new(slot: EquipSlot) -> Self {
        Self { slot }
    }

    fn is_bow(&self) -> bool {
        self.slot == EquipSlot::Bow
    }

    fn weapon<'a>(&self, view: &StatusView<'a>) -> Option<&'a Item> {
        view.player.equipment.weapon(self.slot)
    }
}

impl StatusResolver for HitBonus {
    fn min_value(&self) -> i16 {
        -999
    }

    fn max_value(&self) -> i16 {
        999
    }

    fn default_value(&self, view: &StatusView<'_>) -> i16 {
        adj_dex_th(view.stat_ind(Stat::Dex)) + adj_str_th(view.stat_ind(Stat::Str))
    }

    fn class_bonus(&self, view: &StatusView<'_>) -> i16 {
        if self.is_bow() {
            return 0;
        }
        priest_weapon_penalty(view, self.weapon(view)) + martial_arts_bonus(view, self.slot)
    }

    fn equipments_bonus(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        let mut bonus = 0;
        for (slot, item) in p.equipment.iter() {
            if is_attack_slot(slot, item) {
                if slot == self.slot {
                    bonus += low_melee_penalty(item.curse_flags);
                }
                continue;
            }
            if self.is_bow() {
                bonus += item.to_h;
            } else {
                bonus += hand_share(p, self.slot, slot, item.to_h);
                if p.equipment.weapon(self.slot).is_some() || self.slot == primary_hand(p) {
                    bonus += low_melee_penalty(item.curse_flags);
                }
            }
        }
        bonus
    }

    fn time_effect_bonus(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        let mut bonus = 0;
        if p.timed.blessed > 0 {
            bonus += 10;
        }
        if p.timed.is_hero() {
            bonus += 12;
        }
        if p.is_shero() {
            bonus += if self.is_bow() { -12 } else { 12 };
        }
        bonus
    }

    /// Fighting from the saddle: lances excel, anything else suffers unless
    /// the rider is trained for it.
    fn riding_bonus(&self, view: &StatusView<'_>) -> i16 {
        if self.is_bow() {
            return 0;
        }
        let (Some(mount), Some(weapon)) = (view.mount(), self.weapon(view)) else {
            return 0;
        };
        let p = view.player;
        if object_flags(weapon, view.catalog).has(TraitFlag::Riding) {
            15
        } else if matches!(p.class, PlayerClass::Beastmaster | PlayerClass::Cavalry) {
            -5
        } else {
            -((mount.level() - p.riding_exp / 80 + 30).max(30) as i16)
        }
    }

    fn set_exception_value(&self, view: &StatusView<'_>, value: i32) -> i32 {
        if self.is_bow() {
            value
        } else {
            value - i32::from(dual_wield_penalty(view, self.slot))
        }
    }
}

/// To-damage for one hand: `MainHand` or `SubHand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageBonus {
    pub slot: EquipSlot,
}

impl DamageBonus {
    pub const fn new(slot: EquipSlot) -> Self {
        Self { slot }
    }
}

impl StatusResolver for DamageBonus {
    fn min_value(&self) -> i16 {
        -999
    }

    fn max_value(&self) -> i16 {
        999
    }

    fn default_value(&self, view: &StatusView<'_>) -> i16 {
        adj_str_td(view.stat_ind(Stat::Str))
    }

    fn class_bonus(&self, view: &StatusView<'_>) -> i16 {
        priest_weapon_penalty(view, view.player.equipment.weapon(self.slot)) + martial_arts_bonus(view, self.slot)
    }

    fn equipments_bonus(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        p.equipment
            .iter()
            .filter(|&(slot, item)| !is_attack_slot(slot, item))
            .map(|(slot, item)| hand_share(p, self.slot, slot, item.to_d))
            .sum()
    }

    fn time_effect_bonus(&self, view: &StatusView<'_>) -> i16 {
        if view.player.is_shero() { 3 } else { 0 }
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
    use crate::player::{Personality, PlayerRace};

    fn player(class: PlayerClass) -> Player {
        let mut p = Player::new(PlayerRace::Human, class, Personality::Ordinary, [14; A_MAX]);
        p.derived.stat_ind = [11; A_MAX];
        p
    }

    fn ring(catalog: &Catalog, to_h: i16, to_d: i16) -> Item {
        let mut ring = catalog.make_item(kinds::RING_OF_FREE_ACTION).unwrap();
        ring.to_h = to_h;
        ring.to_d = to_d;
        ring
    }

    #[test]
    fn test_rings_follow_their_hand_when_dual_wielding() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Warrior);
        p.two_weapon_exp = 16000;
        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::DAGGER).unwrap());
        p.equip(EquipSlot::SubHand, catalog.make_item(kinds::DAGGER).unwrap());
        p.equip(EquipSlot::MainRing, ring(&catalog, 6, 4));
        let mut gloves = catalog.make_item(kinds::LEATHER_GLOVES).unwrap();
        gloves.to_h = 5;
        p.equip(EquipSlot::Arms, gloves);

        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).equipments_bonus(&view), 6 + 3);
        assert_eq!(HitBonus::new(EquipSlot::SubHand).equipments_bonus(&view), 2);
        assert_eq!(DamageBonus::new(EquipSlot::MainHand).equipments_bonus(&view), 4);
        assert_eq!(DamageBonus::new(EquipSlot::SubHand).equipments_bonus(&view), 0);
    }

    #[test]
    fn test_single_weapon_takes_everything() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Warrior);
        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::LONG_SWORD).unwrap());
        p.equip(EquipSlot::SubRing, ring(&catalog, 4, 4));
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).get_value(&view), 4);
        assert_eq!(HitBonus::new(EquipSlot::Bow).get_value(&view), 4);
        assert_eq!(HitBonus::new(EquipSlot::SubHand).equipments_bonus(&view), 0);
    }

    #[test]
    fn test_dual_wield_penalty() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Warrior);
        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::DAGGER).unwrap());
        p.equip(EquipSlot::SubHand, catalog.make_item(kinds::DAGGER).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        // 100 - (130 - 12) / 8
        assert_eq!(dual_wield_penalty(&view, EquipSlot::MainHand), 86);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).get_value(&view), -86);

        p.equip(EquipSlot::MainHand, catalog.make_artifact(artifacts::QUICKTHORN).unwrap());
        p.equip(EquipSlot::SubHand, catalog.make_artifact(artifacts::TINYTHORN).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        // main gauche: 100 - 100 / 8 = 88, halved less five
        assert_eq!(dual_wield_penalty(&view, EquipSlot::MainHand), 39);
    }

    #[test]
    fn test_musashi_pair_has_no_penalty() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Samurai);
        p.equip(EquipSlot::MainHand, catalog.make_artifact(artifacts::MUSASI_KATANA).unwrap());
        p.equip(EquipSlot::SubHand, catalog.make_artifact(artifacts::MUSASI_WAKIZASI).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(dual_wield_penalty(&view, EquipSlot::MainHand), 0);
        assert_eq!(dual_wield_penalty(&view, EquipSlot::SubHand), 0);
    }

    #[test]
    fn test_priest_with_sword() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Priest);
        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::LONG_SWORD).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).class_bonus(&view), -2);
        assert_eq!(DamageBonus::new(EquipSlot::MainHand).class_bonus(&view), -2);

        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::MACE).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).class_bonus(&view), 0);
    }

    #[test]
    fn test_berserk_hurts_archery() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Warrior);
        p.timed.shero = 5;
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).time_effect_bonus(&view), 12);
        assert_eq!(HitBonus::new(EquipSlot::Bow).time_effect_bonus(&view), -12);
        assert_eq!(DamageBonus::new(EquipSlot::MainHand).time_effect_bonus(&view), 3);
    }

    #[test]
    fn test_mounted_weapon_handling() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Warrior);
        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::LONG_SWORD).unwrap());
        p.set_riding(Some(Monster::new(MonsterRace::new("Warg", 18, 120), 30)));
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).riding_bonus(&view), -48);

        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::LANCE).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).riding_bonus(&view), 15);

        p.class = PlayerClass::Cavalry;
        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::LONG_SWORD).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).riding_bonus(&view), -5);
    }

    #[test]
    fn test_low_melee_curse() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Warrior);
        let mut sword = catalog.make_item(kinds::LONG_SWORD).unwrap();
        sword.curse_flags = CurseFlags::CURSED | CurseFlags::HEAVY_CURSE | CurseFlags::LOW_MELEE;
        p.equip(EquipSlot::MainHand, sword);
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).equipments_bonus(&view), -15);
        assert_eq!(HitBonus::new(EquipSlot::Bow).equipments_bonus(&view), 0);
    }

    #[test]
    fn test_empty_handed_monk() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerClass::Monk);
        p.lev = 30;
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(HitBonus::new(EquipSlot::MainHand).class_bonus(&view), 10);
        assert_eq!(DamageBonus::new(EquipSlot::MainHand).class_bonus(&view), 10);
        assert_eq!(HitBonus::new(EquipSlot::SubHand).class_bonus(&view), 0);
    }
}
