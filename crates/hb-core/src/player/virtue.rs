//! Virtues (player-virtue)
//!
//! A character holds eight virtue slots chosen at birth. Each slot carries a
//! signed value bounded by +/-125.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{VIRTUE_MAX, VIRTUE_SLOTS};
use crate::rng::GameRng;

use super::class::{PlayerClass, Realm};
use super::race::PlayerRace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Virtue {
    Compassion,
    Honour,
    Justice,
    Sacrifice,
    Knowledge,
    Faith,
    Enlightenment,
    Enchantment,
    Chance,
    Nature,
    Harmony,
    Vitality,
    Unlife,
    Patience,
    Temperance,
    Diligence,
    Valour,
    Individualism,
}

/// Soft stops crossed with a coin flip each
const SOFT_STOPS: [i16; 3] = [50, 80, 100];

/// The eight virtue slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Virtues {
    pub types: [Option<Virtue>; VIRTUE_SLOTS],
    pub values: [i16; VIRTUE_SLOTS],
}

impl Virtues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot holding `virtue`, 1-based, or 0 if the character lacks it.
    pub fn virtue_number(&self, virtue: Virtue) -> usize {
        self.types
            .iter()
            .position(|&t| t == Some(virtue))
            .map_or(0, |i| i + 1)
    }

    pub fn has(&self, virtue: Virtue) -> bool {
        self.virtue_number(virtue) != 0
    }

    /// Current value of `virtue`, 0 when not held.
    pub fn value(&self, virtue: Virtue) -> i16 {
        match self.virtue_number(virtue) {
            0 => 0,
            n => self.values[n - 1],
        }
    }

    /// Adjust a held virtue.
    ///
    /// Each soft stop the adjustment would cross halts it at that stop with
    /// probability 1/2; the value never leaves +/-125. Returns false if the
    /// virtue is not held.
    pub fn chg_virtue(&mut self, virtue: Virtue, amount: i16, rng: &mut GameRng) -> bool {
        let n = self.virtue_number(virtue);
        if n == 0 {
            return false;
        }
        let v = &mut self.values[n - 1];
        let target = v.saturating_add(amount);

        if amount > 0 {
            for stop in SOFT_STOPS {
                if target > stop && rng.one_in(2) {
                    *v = (*v).max(stop);
                    return true;
                }
            }
            *v = target.min(VIRTUE_MAX);
        } else if amount < 0 {
            for stop in SOFT_STOPS {
                if target < -stop && rng.one_in(2) {
                    *v = (*v).min(-stop);
                    return true;
                }
            }
            *v = target.max(-VIRTUE_MAX);
        }
        true
    }

    /// Set a held virtue outright.
    pub fn set_virtue(&mut self, virtue: Virtue, amount: i16) -> bool {
        match self.virtue_number(virtue) {
            0 => false,
            n => {
                self.values[n - 1] = amount.clamp(-VIRTUE_MAX, VIRTUE_MAX);
                true
            }
        }
    }

    /// Choose the eight virtues for a new character.
    ///
    /// Two come from the class, one from the race and one per realm; repeats
    /// are dropped and the remaining slots are filled from a weighted pool.
    pub fn initialize(
        &mut self,
        class: PlayerClass,
        race: PlayerRace,
        realms: [Option<Realm>; 2],
        rng: &mut GameRng,
    ) {
        *self = Self::new();
        let mut picks: Vec<Virtue> = Vec::with_capacity(VIRTUE_SLOTS);
        let (first, second) = class_virtues(class);
        picks.push(first);
        picks.extend(second);
        picks.push(race_virtue(race));
        picks.extend(realms.iter().flatten().filter_map(|&r| realm_virtue(r)));

        let mut slot = 0;
        for virtue in picks {
            if slot < VIRTUE_SLOTS && !self.has(virtue) {
                self.types[slot] = Some(virtue);
                slot += 1;
            }
        }
        while slot < VIRTUE_SLOTS {
            let virtue = random_virtue(rng);
            if !self.has(virtue) {
                self.types[slot] = Some(virtue);
                slot += 1;
            }
        }
        tracing::debug!(?class, ?race, virtues = ?self.types, "virtue slots initialised");
    }

    pub fn iter(&self) -> impl Iterator<Item = (Virtue, i16)> + '_ {
        self.types
            .iter()
            .zip(self.values.iter())
            .filter_map(|(t, &v)| t.map(|t| (t, v)))
    }
}

fn class_virtues(class: PlayerClass) -> (Virtue, Option<Virtue>) {
    use PlayerClass::*;
    use Virtue::*;
    match class {
        Warrior | Samurai => (Valour, Some(Honour)),
        Berserker => (Valour, Some(Individualism)),
        Mage | HighMage | Sorcerer | BlueMage | MagicEater => (Knowledge, Some(Enchantment)),
        Priest => (Faith, Some(Temperance)),
        Rogue | Sniper => (Honour, None),
        Ranger | Archer => (Nature, Some(Temperance)),
        Paladin => (Justice, Some(Honour)),
        WarriorMage | RedMage => (Individualism, Some(Enchantment)),
        ChaosWarrior => (Chance, Some(Individualism)),
        Monk | ForceTrainer => (Faith, Some(Harmony)),
        Mindcrafter => (Individualism, Some(Knowledge)),
        Tourist => (Enlightenment, Some(Chance)),
        Imitator => (Individualism, Some(Chance)),
        Beastmaster => (Nature, Some(Chance)),
        Bard => (Harmony, Some(Compassion)),
        Cavalry => (Valour, Some(Harmony)),
        Smith => (Honour, Some(Knowledge)),
        MirrorMaster => (Enlightenment, Some(Knowledge)),
        Ninja => (Patience, Some(Knowledge)),
        Elementalist => (Nature, Some(Knowledge)),
    }
}

fn race_virtue(race: PlayerRace) -> Virtue {
    use PlayerRace::*;
    use Virtue::*;
    match race {
        Human | HalfElf | Amberite | Android => Individualism,
        Elf | Sprite | Ent | Merfolk => Nature,
        Hobbit | HalfOgre => Temperance,
        Dwarf | Kobold | Nibelung | Klackon => Diligence,
        Gnome | Cyclops => Knowledge,
        HalfOrc | Dunadan | Kutar => Honour,
        HalfTroll | Barbarian => Valour,
        HighElf => Vitality,
        HalfGiant | Golem | Archon | Balrog => Justice,
        HalfTitan => Harmony,
        Yeek => Sacrifice,
        DarkElf | Draconian | ShadowFairy => Enlightenment,
        Mindflayer => Enlightenment,
        Imp | Skeleton | Zombie | Vampire | Spectre => Unlife,
        Beastman => Chance,
    }
}

fn realm_virtue(realm: Realm) -> Option<Virtue> {
    use Virtue::*;
    match realm {
        Realm::Life => Some(Vitality),
        Realm::Sorcery | Realm::Trump => Some(Knowledge),
        Realm::Nature => Some(Nature),
        Realm::Chaos => Some(Individualism),
        Realm::Death => Some(Unlife),
        Realm::Craft => Some(Enchantment),
        Realm::Daemon | Realm::Crusade => Some(Justice),
        Realm::Music => Some(Harmony),
        Realm::Hissatsu => Some(Honour),
        Realm::Hex => Some(Compassion),
        Realm::Arcane => None,
    }
}

/// Fill pool; Vitality and Unlife only come from race or realm.
const VIRTUE_POOL: [(Virtue, i32); 16] = [
    (Virtue::Sacrifice, 3),
    (Virtue::Compassion, 3),
    (Virtue::Valour, 6),
    (Virtue::Honour, 5),
    (Virtue::Chance, 1),
    (Virtue::Temperance, 1),
    (Virtue::Harmony, 1),
    (Virtue::Faith, 1),
    (Virtue::Knowledge, 1),
    (Virtue::Nature, 1),
    (Virtue::Enlightenment, 1),
    (Virtue::Individualism, 1),
    (Virtue::Patience, 1),
    (Virtue::Justice, 1),
    (Virtue::Diligence, 1),
    (Virtue::Enchantment, 1),
];

fn random_virtue(rng: &mut GameRng) -> Virtue {
    let total: i32 = VIRTUE_POOL.iter().map(|(_, w)| w).sum();
    let mut roll = rng.randint1(total);
    for (virtue, weight) in VIRTUE_POOL {
        if roll <= weight {
            return virtue;
        }
        roll -= weight;
    }
    Virtue::Valour
}
