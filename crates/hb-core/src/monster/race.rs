//! Monster race definitions (monster_race)
//!
//! Only the parts the status engine reads: level, speed, kind flags for
//! slays, element immunities for brands, and the ride / flight / unique
//! bits.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::flags::Element;

bitflags! {
    /// What a monster *is*, for slays and telepathy.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct MonsterKind: u32 {
        const ANIMAL = 1 << 0;
        const EVIL = 1 << 1;
        const GOOD = 1 << 2;
        const UNDEAD = 1 << 3;
        const DEMON = 1 << 4;
        const ORC = 1 << 5;
        const TROLL = 1 << 6;
        const GIANT = 1 << 7;
        const DRAGON = 1 << 8;
        const HUMAN = 1 << 9;
        const NONLIVING = 1 << 10;
    }
}

bitflags! {
    /// Behavioural and special-rule flags.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct MonsterFlags: u32 {
        const UNIQUE = 1 << 0;
        /// Cannot be slain outright by a fatal-spot critical
        const NO_INSTANT_DEATH = 1 << 1;
        const CAN_FLY = 1 << 2;
        const RIDING = 1 << 3;
        const IM_ACID = 1 << 4;
        const IM_ELEC = 1 << 5;
        const IM_FIRE = 1 << 6;
        const IM_COLD = 1 << 7;
        const IM_POIS = 1 << 8;
    }
}

impl MonsterFlags {
    pub fn immune_to(self, element: Element) -> bool {
        self.contains(match element {
            Element::Acid => MonsterFlags::IM_ACID,
            Element::Elec => MonsterFlags::IM_ELEC,
            Element::Fire => MonsterFlags::IM_FIRE,
            Element::Cold => MonsterFlags::IM_COLD,
        })
    }
}

// Manual serde impls for the flag sets
impl Serialize for MonsterKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonsterKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(MonsterKind::from_bits_truncate(bits))
    }
}

impl Serialize for MonsterFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonsterFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(MonsterFlags::from_bits_truncate(bits))
    }
}

/// Static race data shared by every monster of the race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterRace {
    pub name: String,
    pub level: i32,
    pub speed: i16,
    pub kind: MonsterKind,
    pub flags: MonsterFlags,
}

impl MonsterRace {
    pub fn new(name: &str, level: i32, speed: i16) -> Self {
        Self {
            name: name.to_string(),
            level,
            speed,
            kind: MonsterKind::empty(),
            flags: MonsterFlags::empty(),
        }
    }

    pub fn with_kind(mut self, kind: MonsterKind) -> Self {
        self.kind |= kind;
        self
    }

    pub fn with_flags(mut self, flags: MonsterFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn is_unique(&self) -> bool {
        self.flags.contains(MonsterFlags::UNIQUE)
    }

    pub fn can_fly(&self) -> bool {
        self.flags.contains(MonsterFlags::CAN_FLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let race = MonsterRace::new("Great eagle", 20, 120)
            .with_kind(MonsterKind::ANIMAL)
            .with_flags(MonsterFlags::CAN_FLY | MonsterFlags::RIDING);
        assert!(race.can_fly());
        assert!(!race.is_unique());
        assert!(race.kind.contains(MonsterKind::ANIMAL));
    }

    #[test]
    fn test_immune_to() {
        let flags = MonsterFlags::IM_FIRE | MonsterFlags::IM_POIS;
        assert!(flags.immune_to(Element::Fire));
        assert!(!flags.immune_to(Element::Cold));
    }
}
