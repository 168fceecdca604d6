//! Armour burden and carrying capacity (heavy_armor / calc_weight_limit)

use crate::player::{EquipSlot, Player, PlayerClass, Stat, adj_str_wgt};

use super::StatusView;

const ARMOUR_SLOTS: [EquipSlot; 5] = [
    EquipSlot::Body,
    EquipSlot::Head,
    EquipSlot::Outer,
    EquipSlot::Arms,
    EquipSlot::Feet,
];

/// Armour too heavy for martial arts. Only martial artists care; everyone
/// else always reports false.
pub fn heavy_armor(player: &Player) -> bool {
    if !player.class.is_martial_artist() {
        return false;
    }

    let mut weight = 0;
    for slot in [EquipSlot::MainHand, EquipSlot::SubHand] {
        if let Some(item) = player.equipment.get(slot)
            && !item.is_melee_weapon()
        {
            weight += item.weight;
        }
    }
    weight += ARMOUR_SLOTS
        .iter()
        .filter_map(|&slot| player.equipment.get(slot))
        .map(|item| item.weight)
        .sum::<i32>();

    weight > 100 + player.lev * 4
}

/// Weight in tenths of a pound the character can carry before slowing.
pub fn calc_weight_limit(view: &StatusView<'_>) -> i32 {
    let p = view.player;
    let mut limit = adj_str_wgt(view.stat_ind(Stat::Str)) * 50;
    if p.class == PlayerClass::Berserker {
        limit = limit * 3 / 2;
    }
    limit + limit * p.race.info().carry_bonus_pct / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::consts::A_MAX;
    use crate::object::Catalog;
    use crate::object::catalog::kinds;
    use crate::player::{Personality, PlayerRace};

    #[test]
    fn test_heavy_armor_only_for_martial_artists() {
        let catalog = Catalog::standard();
        let mut warrior = Player::new(PlayerRace::Human, PlayerClass::Warrior, Personality::Ordinary, [14; A_MAX]);
        warrior.equip(EquipSlot::Body, catalog.make_item(kinds::FULL_PLATE_ARMOUR).unwrap());
        assert!(!heavy_armor(&warrior));

        let mut monk = Player::new(PlayerRace::Human, PlayerClass::Monk, Personality::Ordinary, [14; A_MAX]);
        monk.equip(EquipSlot::Body, catalog.make_item(kinds::SOFT_LEATHER_ARMOUR).unwrap());
        assert!(!heavy_armor(&monk));
        monk.equip(EquipSlot::Body, catalog.make_item(kinds::FULL_PLATE_ARMOUR).unwrap());
        assert!(heavy_armor(&monk));
    }

    #[test]
    fn test_weapons_do_not_count_toward_burden() {
        let catalog = Catalog::standard();
        let mut monk = Player::new(PlayerRace::Human, PlayerClass::Monk, Personality::Ordinary, [14; A_MAX]);
        monk.equip(EquipSlot::MainHand, catalog.make_item(kinds::HEAVY_LANCE).unwrap());
        assert!(!heavy_armor(&monk));
    }

    #[test]
    fn test_berserker_carries_more() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = Player::new(PlayerRace::Human, PlayerClass::Warrior, Personality::Ordinary, [14; A_MAX]);
        p.derived.stat_ind = [10; A_MAX];
        let base = calc_weight_limit(&StatusView::new(&p, &catalog, &config));
        p.class = PlayerClass::Berserker;
        let berserk = calc_weight_limit(&StatusView::new(&p, &catalog, &config));
        assert_eq!(berserk, base * 3 / 2);
    }
}
