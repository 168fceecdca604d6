//! Item instances (object_type)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{ArtifactId, BaseItemId, EgoId, ItemTval};
use crate::flags::{CurseFlags, TraitSet};

/// How much the player knows about an item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum IdentState {
    #[default]
    Unknown,
    Sensed,
    Known,
    FullyKnown,
}

impl IdentState {
    pub const fn is_known(self) -> bool {
        matches!(self, IdentState::Known | IdentState::FullyKnown)
    }

    pub const fn is_fully_known(self) -> bool {
        matches!(self, IdentState::FullyKnown)
    }
}

/// A stack of like items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: BaseItemId,
    /// Cached from the kind
    pub tval: ItemTval,
    pub sval: u8,

    /// Stack size, at least 1 while the stack exists
    pub number: i32,

    pub pval: i16,
    pub to_h: i16,
    pub to_d: i16,
    pub to_a: i16,
    pub ac: i16,
    pub dd: i16,
    pub ds: i16,
    /// Per-item weight in tenths of a pound
    pub weight: i32,

    pub artifact: Option<ArtifactId>,
    pub ego: Option<EgoId>,
    /// Extra flags on this instance (random artifacts, smithing)
    pub art_flags: TraitSet,
    pub curse_flags: CurseFlags,
    pub ident: IdentState,

    /// Turns of fuel left for light sources
    pub fuel: i32,
}

impl Item {
    /// Bare instance of a kind with no bonuses.
    pub fn new(kind: BaseItemId, tval: ItemTval, sval: u8) -> Self {
        Self {
            kind,
            tval,
            sval,
            number: 1,
            pval: 0,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            ac: 0,
            dd: 0,
            ds: 0,
            weight: 0,
            artifact: None,
            ego: None,
            art_flags: TraitSet::new(),
            curse_flags: CurseFlags::empty(),
            ident: IdentState::Unknown,
            fuel: 0,
        }
    }

    pub fn is_artifact(&self) -> bool {
        self.artifact.is_some() || !self.art_flags.is_empty()
    }

    pub fn is_fixed_artifact(&self, id: ArtifactId) -> bool {
        self.artifact == Some(id)
    }

    pub fn is_melee_weapon(&self) -> bool {
        self.tval.is_melee_weapon()
    }

    pub fn is_light_source(&self) -> bool {
        self.tval == ItemTval::Light
    }

    pub fn is_cursed(&self) -> bool {
        self.curse_flags.is_cursed()
    }

    /// Weight of the whole stack.
    pub fn total_weight(&self) -> i32 {
        self.weight * self.number
    }

    /// Add fuel, keeping it within `[0, max_fuel]`.
    pub fn add_fuel(&mut self, amount: i32, max_fuel: i32) {
        self.fuel = (self.fuel + amount).clamp(0, max_fuel.max(0));
    }

    /// Take `n` from the stack. Returns true when the stack is used up.
    pub fn reduce(&mut self, n: i32) -> bool {
        self.number = (self.number - n).max(0);
        self.number == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn torch() -> Item {
        let mut item = Item::new(BaseItemId(1), ItemTval::Light, 0);
        item.fuel = 100;
        item
    }

    #[test]
    fn test_add_fuel_clamps() {
        let mut item = torch();
        item.add_fuel(10_000, 5000);
        assert_eq!(item.fuel, 5000);
        item.add_fuel(-9000, 5000);
        assert_eq!(item.fuel, 0);
    }

    #[test]
    fn test_reduce_to_empty() {
        let mut item = torch();
        item.number = 3;
        assert!(!item.reduce(2));
        assert_eq!(item.number, 1);
        assert!(item.reduce(5));
        assert_eq!(item.number, 0);
    }

    #[test]
    fn test_ident_ordering() {
        assert!(!IdentState::Sensed.is_known());
        assert!(IdentState::Known.is_known());
        assert!(!IdentState::Known.is_fully_known());
        assert!(IdentState::FullyKnown.is_fully_known());
    }

    #[test]
    fn test_total_weight() {
        let mut item = torch();
        item.weight = 30;
        item.number = 4;
        assert_eq!(item.total_weight(), 120);
    }
}
