//! Slay and brand multipliers (mult_slaying / mult_brand)
//!
//! Multipliers are in tenths. Only the best applicable one counts.

use strum::IntoEnumIterator;

use crate::flags::{Element, TraitFlag, TraitSet};
use crate::monster::{Monster, MonsterFlags, MonsterKind};

/// Multiplier of an ordinary blow.
pub const NO_SLAY: i32 = 10;

const BRAND_MULT: i32 = 25;

/// `(slay flag, kill flag, target kind, slay mult, kill mult)`
const SLAYS: [(TraitFlag, TraitFlag, MonsterKind, i32, i32); 10] = [
    (TraitFlag::SlayAnimal, TraitFlag::KillAnimal, MonsterKind::ANIMAL, 25, 40),
    (TraitFlag::SlayEvil, TraitFlag::KillEvil, MonsterKind::EVIL, 20, 35),
    (TraitFlag::SlayGood, TraitFlag::KillGood, MonsterKind::GOOD, 20, 35),
    (TraitFlag::SlayHuman, TraitFlag::KillHuman, MonsterKind::HUMAN, 25, 40),
    (TraitFlag::SlayUndead, TraitFlag::KillUndead, MonsterKind::UNDEAD, 30, 50),
    (TraitFlag::SlayDemon, TraitFlag::KillDemon, MonsterKind::DEMON, 30, 50),
    (TraitFlag::SlayOrc, TraitFlag::KillOrc, MonsterKind::ORC, 30, 50),
    (TraitFlag::SlayTroll, TraitFlag::KillTroll, MonsterKind::TROLL, 30, 50),
    (TraitFlag::SlayGiant, TraitFlag::KillGiant, MonsterKind::GIANT, 30, 50),
    (TraitFlag::SlayDragon, TraitFlag::KillDragon, MonsterKind::DRAGON, 30, 50),
];

/// Best slay multiplier `flags` give against a monster of `kind`.
pub fn slay_multiplier(flags: &TraitSet, kind: MonsterKind) -> i32 {
    SLAYS
        .iter()
        .filter(|(.., target, _, _)| kind.intersects(*target))
        .map(|&(slay, kill, _, slay_mult, kill_mult)| {
            if flags.has(kill) {
                kill_mult
            } else if flags.has(slay) {
                slay_mult
            } else {
                NO_SLAY
            }
        })
        .max()
        .unwrap_or(NO_SLAY)
}

/// Brand multiplier, void against a target immune to the element.
pub fn brand_multiplier(flags: &TraitSet, immunities: MonsterFlags) -> i32 {
    let elemental = Element::iter().any(|element| flags.has(element.brand()) && !immunities.immune_to(element));
    let poison = flags.has(TraitFlag::BrandPois) && !immunities.contains(MonsterFlags::IM_POIS);
    if elemental || poison { BRAND_MULT } else { NO_SLAY }
}

/// Multiplier a weapon with `flags` deals against `target`.
pub fn best_multiplier(flags: &TraitSet, target: &Monster) -> i32 {
    slay_multiplier(flags, target.race.kind).max(brand_multiplier(flags, target.race.flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::MonsterRace;

    #[test]
    fn test_kill_beats_slay() {
        let flags = TraitSet::from_flags(&[TraitFlag::SlayDragon, TraitFlag::KillDragon]);
        assert_eq!(slay_multiplier(&flags, MonsterKind::DRAGON), 50);
        assert_eq!(slay_multiplier(&flags, MonsterKind::ORC), NO_SLAY);
    }

    #[test]
    fn test_best_of_several_kinds() {
        let flags = TraitSet::from_flags(&[TraitFlag::SlayEvil, TraitFlag::SlayUndead]);
        assert_eq!(slay_multiplier(&flags, MonsterKind::EVIL | MonsterKind::UNDEAD), 30);
        assert_eq!(slay_multiplier(&flags, MonsterKind::EVIL), 20);
    }

    #[test]
    fn test_brand_void_against_immunity() {
        let flags = TraitSet::from_flags(&[TraitFlag::BrandFire]);
        assert_eq!(brand_multiplier(&flags, MonsterFlags::empty()), BRAND_MULT);
        assert_eq!(brand_multiplier(&flags, MonsterFlags::IM_FIRE), NO_SLAY);

        let poison = TraitSet::from_flags(&[TraitFlag::BrandPois]);
        assert_eq!(brand_multiplier(&poison, MonsterFlags::IM_POIS), NO_SLAY);
    }

    #[test]
    fn test_best_multiplier_against_monster() {
        let flags = TraitSet::from_flags(&[TraitFlag::SlayEvil, TraitFlag::BrandCold]);
        let orc = Monster::new(
            MonsterRace::new("Snaga", 3, 110).with_kind(MonsterKind::ORC | MonsterKind::EVIL),
            8,
        );
        assert_eq!(best_multiplier(&flags, &orc), BRAND_MULT);
        let wolf = Monster::new(
            MonsterRace::new("Wolf", 10, 120)
                .with_kind(MonsterKind::ANIMAL)
                .with_flags(MonsterFlags::IM_COLD),
            21,
        );
        assert_eq!(best_multiplier(&flags, &wolf), NO_SLAY);
    }
}
