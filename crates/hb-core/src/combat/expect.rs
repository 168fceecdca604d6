//! Expected melee damage (calc_expect_dice)
//!
//! Damage displays compare weapons by their average blow in hundredths.
//! The pipeline always runs slay, then critical, then vorpal.

use crate::consts::{CRITICAL_DIE, EXPECT_SCALE};
use crate::flags::{TraitFlag, TraitSet};
use crate::monster::{MonsterFlags, MonsterKind};
use crate::object::catalog::artifacts;
use crate::object::{Item, object_flags};
use crate::player::EquipSlot;
use crate::status::StatusView;

use super::critical::{Blow, apply_critical_norm_damage, is_poison_needle};
use super::slay::{NO_SLAY, brand_multiplier, slay_multiplier};

/// Damage after a slay of `mult / div`. Force weapons blend the slay
/// with a flat triple.
pub fn calc_slaydam(dam: i32, mult: i32, div: i32, force: bool) -> i32 {
    let dam = dam as i64;
    let (mult, div) = (mult as i64, div.max(1) as i64);
    let tmp = if force {
        (dam * 60 * mult * 3 / (div * 2) + dam * 60 * 2) / 60
    } else {
        dam * 60 * mult / (div * 60)
    };
    tmp as i32
}

/// Mean of the critical tiers over every roll of the die on top of
/// `weight`.
fn average_critical(dam: i32, weight: i32) -> i64 {
    let sum: i64 = (1..=CRITICAL_DIE)
        .map(|d| apply_critical_norm_damage(weight + d, dam, EXPECT_SCALE).0 as i64)
        .sum();
    sum / CRITICAL_DIE as i64
}

/// Expected damage once criticals are folded in.
pub fn calc_expect_crit(view: &StatusView<'_>, blow: &Blow, dam: i32, dokubari: bool) -> i32 {
    if dokubari {
        return dam;
    }
    let pow = blow.critical_die_size(view) as i64;
    let power = (blow.power(view) as i64).clamp(0, pow);

    let crit = if blow.impact {
        let sum: i64 = (1..=CRITICAL_DIE).map(|d| average_critical(dam, blow.weight + d)).sum();
        sum / CRITICAL_DIE as i64
    } else {
        average_critical(dam, blow.weight)
    };
    ((dam as i64 * (pow - power) + crit * power) / pow) as i32
}

/// Vorpal ratio of a weapon: the two famous vorpal artifacts cut deeper.
pub fn vorpal_ratio(item: &Item, flags: &TraitSet) -> Option<(i32, i32)> {
    if !flags.has(TraitFlag::Vorpal) {
        None
    } else if item.is_fixed_artifact(artifacts::VORPAL_BLADE) || item.is_fixed_artifact(artifacts::CHAINSWORD) {
        Some((5, 3))
    } else {
        Some((11, 9))
    }
}

/// Expected damage of one blow in hundredths, with a slay of
/// `mult / div` already chosen.
pub fn calc_expect_dice(view: &StatusView<'_>, item: &Item, blow: &Blow, mult: i32, div: i32) -> i32 {
    let flags = object_flags(item, view.catalog);
    let base = item.dd as i32 * (item.ds as i32 + 1) * EXPECT_SCALE / 2;
    if is_poison_needle(item) {
        return base;
    }
    let force = flags.has(TraitFlag::ForceWeapon);
    let mut dam = calc_slaydam(base, mult, div, force);
    dam = calc_expect_crit(view, blow, dam, false);
    if let Some((vm, vd)) = vorpal_ratio(item, &flags) {
        dam = dam * vm / vd;
    }
    dam
}

/// Expected damage of one blow from the weapon in `hand` against a
/// monster of `kind` with `immunities`, in hundredths, including every
/// flat damage bonus. `None` for an empty hand.
pub fn expected_blow_damage(
    view: &StatusView<'_>,
    hand: EquipSlot,
    kind: MonsterKind,
    immunities: MonsterFlags,
) -> Option<i32> {
    let item = view.player.equipment.weapon(hand)?;
    let blow = Blow::with_weapon(view, hand)?;
    let flags = object_flags(item, view.catalog);
    let mult = slay_multiplier(&flags, kind).max(brand_multiplier(&flags, immunities));
    let dice = calc_expect_dice(view, item, &blow, mult, NO_SLAY);
    let to_d = item.to_d as i32 + view.player.derived.to_d[hand.index()] as i32;
    Some(dice + to_d * EXPECT_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::consts::A_MAX;
    use crate::object::Catalog;
    use crate::object::catalog::kinds;
    use crate::player::{Personality, Player, PlayerClass, PlayerRace};

    fn warrior() -> Player {
        Player::new(PlayerRace::Human, PlayerClass::Warrior, Personality::Ordinary, [14; A_MAX])
    }

    #[test]
    fn test_slaydam_plain_and_force() {
        assert_eq!(calc_slaydam(1000, 10, 10, false), 1000);
        assert_eq!(calc_slaydam(1000, 30, 10, false), 3000);
        // 1000 * 30 * 3 / 20 + 2000
        assert_eq!(calc_slaydam(1000, 30, 10, true), 6500);
    }

    #[test]
    fn test_no_power_means_no_crit() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let p = warrior();
        let view = StatusView::new(&p, &catalog, &config);
        let blow = Blow {
            weight: -10_000,
            ..Blow::default()
        };
        assert_eq!(calc_expect_crit(&view, &blow, 1000, false), 1000);
        assert_eq!(calc_expect_crit(&view, &Blow::default(), 1000, true), 1000);
    }

    #[test]
    fn test_crit_expectation_between_bounds() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = warrior();
        p.derived.skills.melee = 100;
        let view = StatusView::new(&p, &catalog, &config);
        let blow = Blow {
            weight: 130,
            ..Blow::default()
        };
        let dam = calc_expect_crit(&view, &blow, 1000, false);
        assert!(dam > 1000);
        assert!(dam < 2 * 1000 + 5 * EXPECT_SCALE);
    }

    #[test]
    fn test_vorpal_ratios() {
        let catalog = Catalog::standard();
        let blade = catalog.make_artifact(artifacts::VORPAL_BLADE).unwrap();
        let flags = object_flags(&blade, &catalog);
        assert_eq!(vorpal_ratio(&blade, &flags), Some((5, 3)));

        let sword = catalog.make_item(kinds::LONG_SWORD).unwrap();
        let mut flags = object_flags(&sword, &catalog);
        assert_eq!(vorpal_ratio(&sword, &flags), None);
        flags.set(TraitFlag::Vorpal);
        assert_eq!(vorpal_ratio(&sword, &flags), Some((11, 9)));
    }

    #[test]
    fn test_needle_skips_pipeline() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = warrior();
        p.equip(EquipSlot::MainHand, catalog.make_item(kinds::POISON_NEEDLE).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        let dam = expected_blow_damage(&view, EquipSlot::MainHand, MonsterKind::DRAGON, MonsterFlags::empty());
        // 1d1 averages one point
        assert_eq!(dam, Some(EXPECT_SCALE));
    }

    #[test]
    fn test_slay_applies_before_crit() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = warrior();
        p.equip(
            EquipSlot::MainHand,
            catalog.make_ego_item(kinds::LONG_SWORD, crate::object::catalog::egos::SLAY_DRAGON, 0).unwrap(),
        );
        let view = StatusView::new(&p, &catalog, &config);
        let plain = expected_blow_damage(&view, EquipSlot::MainHand, MonsterKind::ORC, MonsterFlags::empty()).unwrap();
        let dragon =
            expected_blow_damage(&view, EquipSlot::MainHand, MonsterKind::DRAGON, MonsterFlags::empty()).unwrap();
        assert!(dragon > plain * 4);
        assert_eq!(expected_blow_damage(&view, EquipSlot::SubHand, MonsterKind::ORC, MonsterFlags::empty()), None);
    }
}
