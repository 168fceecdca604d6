//! Property tests over randomly built characters.

use hb_core::combat::{DamageKind, damage_rate};
use hb_core::flags::{CauseSet, Element, TraitFlag};
use hb_core::monster::{Monster, MonsterFlags, MonsterRace};
use hb_core::object::Catalog;
use hb_core::object::catalog::{artifacts, kinds};
use hb_core::player::{
    EquipSlot, Mutation, Personality, Player, PlayerClass, PlayerRace, modify_stat_value, stat_index,
};
use hb_core::{A_MAX, EngineConfig, GameRng, RateMode, StatusView, update_bonuses};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_race() -> impl Strategy<Value = PlayerRace> {
    prop::sample::select(PlayerRace::iter().collect::<Vec<_>>())
}

fn any_class() -> impl Strategy<Value = PlayerClass> {
    prop::sample::select(PlayerClass::iter().collect::<Vec<_>>())
}

fn any_personality() -> impl Strategy<Value = Personality> {
    prop::sample::select(Personality::iter().collect::<Vec<_>>())
}

fn any_element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::iter().collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_mounted_speed_ignores_rider(
        race in any_race(),
        class in any_class(),
        personality in any_personality(),
        stats in prop::array::uniform6(3i16..=18),
        ring_pval in 0i16..=15,
        thorns in any::<bool>(),
        mount_speed in 100i16..=130,
    ) {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mount = Monster::new(
            MonsterRace::new("Warhorse", 20, mount_speed).with_flags(MonsterFlags::RIDING),
            60,
        );

        let mut baseline = Player::new(PlayerRace::Human, PlayerClass::Warrior, Personality::Ordinary, [14; A_MAX]);
        baseline.set_level(20);
        baseline.set_riding(Some(mount.clone()));
        update_bonuses(&mut baseline, &catalog, &config);

        let mut rider = Player::new(race, class, personality, stats);
        rider.set_level(20);
        if ring_pval > 0 {
            let mut ring = catalog.make_item(kinds::RING_OF_SPEED).unwrap();
            ring.pval = ring_pval;
            rider.equip(EquipSlot::MainRing, ring);
        }
        if thorns {
            rider.equip(EquipSlot::MainHand, catalog.make_artifact(artifacts::QUICKTHORN).unwrap());
            rider.equip(EquipSlot::SubHand, catalog.make_artifact(artifacts::TINYTHORN).unwrap());
        }
        rider.set_riding(Some(mount));
        update_bonuses(&mut rider, &catalog, &config);

        prop_assert_eq!(rider.derived.speed, baseline.derived.speed);
        let view = StatusView::new(&rider, &catalog, &config);
        let causes = view.get_player_flags(TraitFlag::Speed);
        prop_assert!((causes - (CauseSet::RIDING | CauseSet::INVEN_PACK | CauseSet::ACTION)).is_empty());
    }

    #[test]
    fn prop_immunity_dominates(
        race in any_race(),
        class in any_class(),
        acid_ring in any::<bool>(),
        timed_immune in prop::option::of(any_element()),
        vulnerable in any::<bool>(),
        ult_res in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = Player::new(race, class, Personality::Ordinary, [14; A_MAX]);
        if acid_ring {
            p.equip(EquipSlot::MainRing, catalog.make_item(kinds::RING_OF_ACID_IMMUNITY).unwrap());
        }
        if let Some(element) = timed_immune {
            p.timed.ele_immune = 10;
            p.timed.ele_immune_type = Some(element);
        }
        if vulnerable {
            p.mutations.insert(Mutation::VulnElem);
        }
        if ult_res {
            p.timed.ult_res = 10;
        }
        update_bonuses(&mut p, &catalog, &config);

        let view = StatusView::new(&p, &catalog, &config);
        let mut rng = GameRng::new(seed);
        for (element, kind) in Element::iter().zip([DamageKind::Acid, DamageKind::Elec, DamageKind::Fire, DamageKind::Cold]) {
            let rate = damage_rate(&view, kind, RateMode::Random, &mut rng);
            prop_assert!(rate >= 0);
            if view.has_immune(element).is_present() {
                prop_assert!(view.has_resist(element).is_present());
                for mode in RateMode::iter() {
                    prop_assert_eq!(damage_rate(&view, kind, mode, &mut rng), 0);
                }
            } else {
                prop_assert!(rate > 0);
            }
        }
    }

    #[test]
    fn prop_equipment_causes_name_worn_slots(
        race in any_race(),
        class in any_class(),
        picks in prop::collection::vec(0usize..6, 0..6),
    ) {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let kit = [
            (EquipSlot::MainRing, kinds::RING_OF_FREE_ACTION),
            (EquipSlot::SubRing, kinds::RING_OF_RESIST_FIRE_COLD),
            (EquipSlot::Neck, kinds::AMULET_OF_ESP),
            (EquipSlot::Lite, kinds::WOODEN_TORCH),
            (EquipSlot::Body, kinds::SOFT_LEATHER_ARMOUR),
            (EquipSlot::Feet, kinds::LEATHER_BOOTS),
        ];
        let mut p = Player::new(race, class, Personality::Ordinary, [14; A_MAX]);
        for pick in picks {
            let (slot, kind) = kit[pick];
            p.equip(slot, catalog.make_item(kind).unwrap());
        }
        update_bonuses(&mut p, &catalog, &config);

        let view = StatusView::new(&p, &catalog, &config);
        for flag in TraitFlag::iter() {
            let causes = view.get_player_flags(flag);
            for slot in causes.equipment_slots() {
                prop_assert!(!p.equipment.is_empty(slot), "{flag} credited to empty {slot:?}");
            }
        }
    }

    #[test]
    fn prop_stat_steps_are_monotonic(value in 3i16..=238, a in -20i16..=20, b in -20i16..=20) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(modify_stat_value(value, lo) <= modify_stat_value(value, hi));
        prop_assert!(modify_stat_value(value, lo) >= 3);
    }

    #[test]
    fn prop_stat_index_is_monotonic(a in 3i16..=400, b in 3i16..=400) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(stat_index(lo) <= stat_index(hi));
    }
}
