//! Trait-cause bitmasks (FLAG_CAUSE_*)
//!
//! Every capability query answers *why* a trait is present, not just whether
//! it is. A zero set means absent; any bit means present.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::player::EquipSlot;

bitflags! {
    /// Cause categories a trait can be attributed to.
    ///
    /// The twelve equipment bits follow slot order so `1 << slot` maps a slot
    /// to its bit.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct CauseSet: u32 {
        const MAIN_HAND = 1 << 0;
        const SUB_HAND = 1 << 1;
        const BOW = 1 << 2;
        const MAIN_RING = 1 << 3;
        const SUB_RING = 1 << 4;
        const NECK = 1 << 5;
        const LITE = 1 << 6;
        const BODY = 1 << 7;
        const OUTER = 1 << 8;
        const HEAD = 1 << 9;
        const ARMS = 1 << 10;
        const FEET = 1 << 11;
        const RACE = 1 << 12;
        const CLASS = 1 << 13;
        const PERSONALITY = 1 << 14;
        const MAGIC_TIME_EFFECT = 1 << 15;
        const MUTATION = 1 << 16;
        const BATTLE_FORM = 1 << 17;
        const RIDING = 1 << 18;
        const INVEN_PACK = 1 << 19;
        const ACTION = 1 << 20;
        const CURSE = 1 << 21;

        /// Any equipment slot
        const EQUIPMENT = 0x0fff;
        /// Sources that wear off on their own
        const TEMPORARY = Self::MAGIC_TIME_EFFECT.bits() | Self::BATTLE_FORM.bits();
    }
}

impl CauseSet {
    pub const NONE: CauseSet = CauseSet::empty();

    /// Bit for an equipment slot.
    pub const fn from_equipment_slot(slot: EquipSlot) -> CauseSet {
        CauseSet::from_bits_truncate(1 << (slot as u32))
    }

    /// `cause` when `cond` holds, otherwise empty.
    #[inline]
    pub const fn when(cond: bool, cause: CauseSet) -> CauseSet {
        if cond { cause } else { CauseSet::empty() }
    }

    pub const fn from_race(cond: bool) -> CauseSet {
        Self::when(cond, CauseSet::RACE)
    }

    pub const fn from_class(cond: bool) -> CauseSet {
        Self::when(cond, CauseSet::CLASS)
    }

    pub const fn from_personality(cond: bool) -> CauseSet {
        Self::when(cond, CauseSet::PERSONALITY)
    }

    pub const fn from_time_effect(cond: bool) -> CauseSet {
        Self::when(cond, CauseSet::MAGIC_TIME_EFFECT)
    }

    pub const fn from_mutation(cond: bool) -> CauseSet {
        Self::when(cond, CauseSet::MUTATION)
    }

    pub const fn from_battle_form(cond: bool) -> CauseSet {
        Self::when(cond, CauseSet::BATTLE_FORM)
    }

    /// Trait present from at least one cause.
    #[inline]
    pub const fn is_present(self) -> bool {
        !self.is_empty()
    }

    /// Every bit comes from a temporary source.
    pub fn is_only_temporary(self) -> bool {
        self.is_present() && CauseSet::TEMPORARY.contains(self)
    }

    /// Each single cause bit, lowest first.
    pub fn causes(self) -> impl Iterator<Item = CauseSet> {
        let bits = self.bits();
        (0..u32::BITS)
            .map(|i| 1u32 << i)
            .filter(move |bit| bits & bit != 0)
            .map(CauseSet::from_bits_retain)
    }

    /// The equipment slots that contributed.
    pub fn equipment_slots(self) -> impl Iterator<Item = EquipSlot> {
        EquipSlot::ALL
            .into_iter()
            .filter(move |&slot| self.contains(CauseSet::from_equipment_slot(slot)))
    }
}

// Manual serde impl for CauseSet
impl Serialize for CauseSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CauseSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(CauseSet::from_bits_truncate(bits))
    }
}
