//! Curse flags (curse_flags / TRC_*)

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::TraitFlag;

bitflags! {
    /// Curses carried by an item or forced on the player.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct CurseFlags: u32 {
        // Bookkeeping, never a player-visible trait
        const CURSED = 1 << 0;
        const HEAVY_CURSE = 1 << 1;
        const PERMA_CURSE = 1 << 2;

        const TY_CURSE = 1 << 3;
        const AGGRAVATE = 1 << 4;
        const DRAIN_EXP = 1 << 5;
        const TELEPORT = 1 << 6;
        const SLOW_REGEN = 1 << 7;
        const ADD_L_CURSE = 1 << 8;
        const ADD_H_CURSE = 1 << 9;
        const CALL_ANIMAL = 1 << 10;
        const CALL_DEMON = 1 << 11;
        const CALL_DRAGON = 1 << 12;
        const CALL_UNDEAD = 1 << 13;
        const COWARDICE = 1 << 14;
        const LOW_MELEE = 1 << 15;
        const LOW_AC = 1 << 16;
        const HARD_SPELL = 1 << 17;
        const FAST_DIGEST = 1 << 18;
        const DRAIN_HP = 1 << 19;
        const DRAIN_MANA = 1 << 20;
        const BERS_RAGE = 1 << 21;
        const PERSISTENT_CURSE = 1 << 22;
        const VUL_CURSE = 1 << 23;

        const META = Self::CURSED.bits() | Self::HEAVY_CURSE.bits() | Self::PERMA_CURSE.bits();
    }
}

impl CurseFlags {
    /// Curses with a trait counterpart.
    pub const TRAIT_CURSES: [(CurseFlags, TraitFlag); 4] = [
        (CurseFlags::TY_CURSE, TraitFlag::TyCurse),
        (CurseFlags::AGGRAVATE, TraitFlag::Aggravate),
        (CurseFlags::DRAIN_EXP, TraitFlag::DrainExp),
        (CurseFlags::TELEPORT, TraitFlag::Teleport),
    ];

    /// The curse bit that forces `flag`, if any.
    pub fn for_trait(flag: TraitFlag) -> Option<CurseFlags> {
        Self::TRAIT_CURSES
            .iter()
            .find(|(_, t)| *t == flag)
            .map(|(c, _)| *c)
    }

    /// Player-visible curses only.
    pub fn without_meta(self) -> CurseFlags {
        self.difference(CurseFlags::META)
    }

    pub fn is_cursed(self) -> bool {
        self.contains(CurseFlags::CURSED)
    }
}

// Manual serde impl for CurseFlags
impl Serialize for CurseFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CurseFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(CurseFlags::from_bits_truncate(bits))
    }
}
