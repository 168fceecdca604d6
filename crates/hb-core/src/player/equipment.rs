//! Equipment slots (INVEN_MAIN_HAND .. INVEN_FEET)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::EQUIP_SLOTS;
use crate::object::{Item, ItemTval};

/// Equipment slot, in cause-bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum EquipSlot {
    MainHand = 0,
    SubHand = 1,
    Bow = 2,
    MainRing = 3,
    SubRing = 4,
    Neck = 5,
    Lite = 6,
    Body = 7,
    Outer = 8,
    Head = 9,
    Arms = 10,
    Feet = 11,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; EQUIP_SLOTS] = [
        EquipSlot::MainHand,
        EquipSlot::SubHand,
        EquipSlot::Bow,
        EquipSlot::MainRing,
        EquipSlot::SubRing,
        EquipSlot::Neck,
        EquipSlot::Lite,
        EquipSlot::Body,
        EquipSlot::Outer,
        EquipSlot::Head,
        EquipSlot::Arms,
        EquipSlot::Feet,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slots that hold a weapon or shield
    pub const fn is_hand(self) -> bool {
        matches!(self, EquipSlot::MainHand | EquipSlot::SubHand)
    }

    /// The natural slot for an item class. Rings prefer the main ring slot.
    pub const fn for_tval(tval: ItemTval) -> Option<EquipSlot> {
        match tval {
            ItemTval::Digging | ItemTval::Hafted | ItemTval::Polearm | ItemTval::Sword => {
                Some(EquipSlot::MainHand)
            }
            ItemTval::Shield => Some(EquipSlot::SubHand),
            ItemTval::Bow => Some(EquipSlot::Bow),
            ItemTval::Ring => Some(EquipSlot::MainRing),
            ItemTval::Amulet => Some(EquipSlot::Neck),
            ItemTval::Light => Some(EquipSlot::Lite),
            ItemTval::SoftArmor | ItemTval::HardArmor | ItemTval::DragonArmor => Some(EquipSlot::Body),
            ItemTval::Cloak => Some(EquipSlot::Outer),
            ItemTval::Crown | ItemTval::Helm => Some(EquipSlot::Head),
            ItemTval::Gloves => Some(EquipSlot::Arms),
            ItemTval::Boots => Some(EquipSlot::Feet),
            _ => None,
        }
    }
}

/// The twelve worn slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    slots: [Option<Item>; EQUIP_SLOTS],
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots[slot.index()].as_ref()
    }

    pub fn get_mut(&mut self, slot: EquipSlot) -> Option<&mut Item> {
        self.slots[slot.index()].as_mut()
    }

    /// Put `item` in `slot`, returning what was there.
    pub fn wear(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        self.slots[slot.index()].replace(item)
    }

    pub fn take_off(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slots[slot.index()].take()
    }

    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        self.slots[slot.index()].is_none()
    }

    /// Occupied slots with their items
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &Item)> {
        EquipSlot::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }

    /// Weapon held in a hand slot, ignoring shields.
    pub fn weapon(&self, slot: EquipSlot) -> Option<&Item> {
        self.get(slot).filter(|item| item.is_melee_weapon())
    }

    pub fn total_weight(&self) -> i32 {
        self.iter().map(|(_, item)| item.total_weight()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::BaseItemId;

    fn sword() -> Item {
        Item::new(BaseItemId(4), ItemTval::Sword, 17)
    }

    #[test]
    fn test_wear_and_take_off() {
        let mut eq = Equipment::new();
        assert!(eq.wear(EquipSlot::MainHand, sword()).is_none());
        assert!(!eq.is_empty(EquipSlot::MainHand));
        assert!(eq.weapon(EquipSlot::MainHand).is_some());
        let old = eq.wear(EquipSlot::MainHand, sword());
        assert!(old.is_some());
        assert!(eq.take_off(EquipSlot::MainHand).is_some());
        assert!(eq.is_empty(EquipSlot::MainHand));
    }

    #[test]
    fn test_iter_skips_empty_slots() {
        let mut eq = Equipment::new();
        eq.wear(EquipSlot::Feet, Item::new(BaseItemId(22), ItemTval::Boots, 2));
        let slots: Vec<_> = eq.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![EquipSlot::Feet]);
    }

    #[test]
    fn test_shield_is_not_a_weapon() {
        let mut eq = Equipment::new();
        eq.wear(EquipSlot::SubHand, Item::new(BaseItemId(19), ItemTval::Shield, 8));
        assert!(eq.weapon(EquipSlot::SubHand).is_none());
    }

    #[test]
    fn test_slot_for_tval() {
        assert_eq!(EquipSlot::for_tval(ItemTval::Polearm), Some(EquipSlot::MainHand));
        assert_eq!(EquipSlot::for_tval(ItemTval::Crown), Some(EquipSlot::Head));
        assert_eq!(EquipSlot::for_tval(ItemTval::Potion), None);
        for (i, slot) in EquipSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }
}
