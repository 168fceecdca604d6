//! Capability trait flags (object_flags / tr_type)
//!
//! A single closed enumeration covers everything an item, race, class,
//! stance, timed effect or mutation can grant: stat modifiers, slays and
//! brands, sustains, resistances, immunities, vulnerabilities, auras and
//! telepathy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// One capability, resistance, weakness or modifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum TraitFlag {
    // pval modifiers
    Str,
    Int,
    Wis,
    Dex,
    Con,
    Chr,
    MagicMastery,
    ForceWeapon,
    Stealth,
    Searching,
    Infra,
    Tunnel,
    Speed,
    Blows,

    // Weapon effects
    Chaotic,
    Vampiric,
    SlayAnimal,
    SlayEvil,
    SlayUndead,
    SlayDemon,
    SlayOrc,
    SlayTroll,
    SlayGiant,
    SlayDragon,
    SlayHuman,
    SlayGood,
    KillAnimal,
    KillEvil,
    KillUndead,
    KillDemon,
    KillOrc,
    KillTroll,
    KillGiant,
    KillDragon,
    KillHuman,
    KillGood,
    Vorpal,
    Impact,
    BrandPois,
    BrandAcid,
    BrandElec,
    BrandFire,
    BrandCold,

    // Sustains
    SustStr,
    SustInt,
    SustWis,
    SustDex,
    SustCon,
    SustChr,

    Riding,
    EasySpell,
    Throw,

    // Immunities
    ImAcid,
    ImElec,
    ImFire,
    ImCold,
    ImDark,

    Reflect,
    FreeAct,
    HoldExp,

    // Resistances
    ResAcid,
    ResElec,
    ResFire,
    ResCold,
    ResPois,
    ResFear,
    ResLite,
    ResDark,
    ResBlind,
    ResConf,
    ResSound,
    ResShards,
    ResNether,
    ResNexus,
    ResChaos,
    ResDisen,
    ResTime,
    ResWater,
    ResCurse,

    // Vulnerabilities
    VulAcid,
    VulElec,
    VulFire,
    VulCold,
    VulLite,

    // Auras
    ShFire,
    ShElec,
    ShCold,

    NoTele,
    NoMagic,
    DecMana,
    Warning,
    Levitation,
    SeeInvis,
    SlowDigest,
    Regen,
    XtraMight,
    XtraShots,
    Blessed,
    PassWall,
    InvulnArrow,

    // Light
    Lite1,
    Lite2,
    Lite3,
    LiteM1,
    LiteM2,
    LiteM3,
    LiteFuel,

    // Telepathy
    Telepathy,
    EspAnimal,
    EspUndead,
    EspDemon,
    EspOrc,
    EspTroll,
    EspGiant,
    EspDragon,
    EspHuman,
    EspEvil,
    EspGood,
    EspNonliving,
    EspUnique,

    // Item-borne curses surfaced as traits
    TyCurse,
    DrainExp,
    Teleport,
    Aggravate,

    // Destruction resistance
    IgnoreAcid,
    IgnoreElec,
    IgnoreFire,
    IgnoreCold,
    Activate,
}

/// The four base elements that have a full resist / immune / vulnerable
/// ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Element {
    Acid,
    Elec,
    Fire,
    Cold,
}

impl Element {
    pub const fn resist(self) -> TraitFlag {
        match self {
            Element::Acid => TraitFlag::ResAcid,
            Element::Elec => TraitFlag::ResElec,
            Element::Fire => TraitFlag::ResFire,
            Element::Cold => TraitFlag::ResCold,
        }
    }

    pub const fn immune(self) -> TraitFlag {
        match self {
            Element::Acid => TraitFlag::ImAcid,
            Element::Elec => TraitFlag::ImElec,
            Element::Fire => TraitFlag::ImFire,
            Element::Cold => TraitFlag::ImCold,
        }
    }

    pub const fn vulnerable(self) -> TraitFlag {
        match self {
            Element::Acid => TraitFlag::VulAcid,
            Element::Elec => TraitFlag::VulElec,
            Element::Fire => TraitFlag::VulFire,
            Element::Cold => TraitFlag::VulCold,
        }
    }

    pub const fn brand(self) -> TraitFlag {
        match self {
            Element::Acid => TraitFlag::BrandAcid,
            Element::Elec => TraitFlag::BrandElec,
            Element::Fire => TraitFlag::BrandFire,
            Element::Cold => TraitFlag::BrandCold,
        }
    }
}

impl TraitFlag {
    /// Stat-modifier flags in stat order.
    pub const STATS: [TraitFlag; 6] = [
        TraitFlag::Str,
        TraitFlag::Int,
        TraitFlag::Wis,
        TraitFlag::Dex,
        TraitFlag::Con,
        TraitFlag::Chr,
    ];

    /// Sustain flags in stat order.
    pub const SUSTAINS: [TraitFlag; 6] = [
        TraitFlag::SustStr,
        TraitFlag::SustInt,
        TraitFlag::SustWis,
        TraitFlag::SustDex,
        TraitFlag::SustCon,
        TraitFlag::SustChr,
    ];

    /// Flags whose strength comes from the item's `pval`.
    pub const fn is_pval(self) -> bool {
        (self as u8) <= (TraitFlag::Blows as u8)
    }

    pub const fn is_telepathy(self) -> bool {
        (self as u8) >= (TraitFlag::Telepathy as u8) && (self as u8) <= (TraitFlag::EspUnique as u8)
    }

    /// Light-radius flags, the subset a dry light source loses.
    pub const fn is_light(self) -> bool {
        (self as u8) >= (TraitFlag::Lite1 as u8) && (self as u8) <= (TraitFlag::LiteM3 as u8)
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        TraitFlag::iter().nth(idx)
    }
}

const WORDS: usize = TraitFlag::COUNT.div_ceil(64);

/// Fixed-size presence set over [`TraitFlag`].
///
/// Serialized as the list of flag names so catalog files stay readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TraitSet {
    bits: [u64; WORDS],
}

impl TraitSet {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    pub fn from_flags(flags: &[TraitFlag]) -> Self {
        let mut set = Self::new();
        for &flag in flags {
            set.set(flag);
        }
        set
    }

    #[inline]
    fn slot(flag: TraitFlag) -> (usize, u64) {
        let idx = flag as usize;
        (idx / 64, 1u64 << (idx % 64))
    }

    pub fn set(&mut self, flag: TraitFlag) {
        let (word, mask) = Self::slot(flag);
        self.bits[word] |= mask;
    }

    pub fn reset(&mut self, flag: TraitFlag) {
        let (word, mask) = Self::slot(flag);
        self.bits[word] &= !mask;
    }

    pub fn has(&self, flag: TraitFlag) -> bool {
        let (word, mask) = Self::slot(flag);
        self.bits[word] & mask != 0
    }

    pub fn has_any_of(&self, flags: &[TraitFlag]) -> bool {
        flags.iter().any(|&f| self.has(f))
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn union(&self, other: &TraitSet) -> TraitSet {
        let mut out = *self;
        for (a, b) in out.bits.iter_mut().zip(other.bits.iter()) {
            *a |= *b;
        }
        out
    }

    pub fn clear(&mut self) {
        self.bits = [0; WORDS];
    }

    /// Iterate the flags present, in enum order.
    pub fn iter(&self) -> impl Iterator<Item = TraitFlag> + '_ {
        TraitFlag::iter().filter(move |&f| self.has(f))
    }
}

impl Serialize for TraitSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for TraitSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let flags = Vec::<TraitFlag>::deserialize(deserializer)?;
        Ok(flags.into_iter().collect())
    }
}

impl FromIterator<TraitFlag> for TraitSet {
    fn from_iter<I: IntoIterator<Item = TraitFlag>>(iter: I) -> Self {
        let mut set = TraitSet::new();
        for flag in iter {
            set.set(flag);
        }
        set
    }
}

impl Extend<TraitFlag> for TraitSet {
    fn extend<I: IntoIterator<Item = TraitFlag>>(&mut self, iter: I) {
        for flag in iter {
            self.set(flag);
        }
    }
}

impl std::ops::BitOr for TraitSet {
    type Output = TraitSet;

    fn bitor(self, rhs: TraitSet) -> TraitSet {
        self.union(&rhs)
    }
}

impl std::ops::BitOrAssign for TraitSet {
    fn bitor_assign(&mut self, rhs: TraitSet) {
        *self = self.union(&rhs);
    }
}
