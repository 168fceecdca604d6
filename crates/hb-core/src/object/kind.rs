//! Item kinds, artifact and ego definitions (baseitem / artifact / ego tables)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::flags::{CurseFlags, TraitSet};

/// Base item kind identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BaseItemId(pub u16);

/// Fixed artifact identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactId(pub u16);

/// Ego item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EgoId(pub u16);

/// Item type value
///
/// Declaration order matters: everything after `Sword` is not a weapon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ItemTval {
    Shot,
    Arrow,
    Bolt,
    Bow,
    Digging,
    Hafted,
    Polearm,
    Sword,
    Shield,
    Crown,
    Helm,
    Gloves,
    Boots,
    Cloak,
    SoftArmor,
    HardArmor,
    DragonArmor,
    Light,
    Amulet,
    Ring,
    Potion,
    Scroll,
    Food,
    Flask,
}

impl ItemTval {
    pub const fn is_ammo(self) -> bool {
        matches!(self, ItemTval::Shot | ItemTval::Arrow | ItemTval::Bolt)
    }

    pub const fn is_melee_weapon(self) -> bool {
        matches!(
            self,
            ItemTval::Digging | ItemTval::Hafted | ItemTval::Polearm | ItemTval::Sword
        )
    }

    pub const fn is_armour(self) -> bool {
        (self as u8) >= (ItemTval::Shield as u8) && (self as u8) <= (ItemTval::DragonArmor as u8)
    }

    pub const fn is_body_armour(self) -> bool {
        matches!(
            self,
            ItemTval::SoftArmor | ItemTval::HardArmor | ItemTval::DragonArmor
        )
    }

    /// Past the last weapon tval.
    pub const fn is_past_sword(self) -> bool {
        (self as u8) > (ItemTval::Sword as u8)
    }
}

/// Static definition of a base item kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseItem {
    pub id: BaseItemId,
    pub name: String,
    pub tval: ItemTval,
    #[serde(default)]
    pub sval: u8,
    #[serde(default)]
    pub pval: i16,
    #[serde(default)]
    pub to_h: i16,
    #[serde(default)]
    pub to_d: i16,
    #[serde(default)]
    pub to_a: i16,
    #[serde(default)]
    pub ac: i16,
    #[serde(default)]
    pub dd: i16,
    #[serde(default)]
    pub ds: i16,
    /// In tenths of a pound
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub flags: TraitSet,
    #[serde(default)]
    pub curses: CurseFlags,
    /// Fuel capacity for light sources, 0 otherwise
    #[serde(default)]
    pub max_fuel: i32,
}

/// Static definition of a fixed artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,
    pub base: BaseItemId,
    #[serde(default)]
    pub pval: i16,
    #[serde(default)]
    pub to_h: i16,
    #[serde(default)]
    pub to_d: i16,
    #[serde(default)]
    pub to_a: i16,
    #[serde(default)]
    pub ac: i16,
    #[serde(default)]
    pub dd: i16,
    #[serde(default)]
    pub ds: i16,
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub flags: TraitSet,
    #[serde(default)]
    pub curses: CurseFlags,
}

/// Static definition of an ego-item template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ego {
    pub id: EgoId,
    pub name: String,
    #[serde(default)]
    pub flags: TraitSet,
    #[serde(default)]
    pub curses: CurseFlags,
}
