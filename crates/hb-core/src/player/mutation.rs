//! Mutations (muta / gain_mutation / lose_mutation)
//!
//! Mutations are presence-only. They are rolled from a weighted index table
//! where each index 1..=193 names one mutation; a mutation's weight is the
//! number of indices that name it. Indices 194 and up can only be requested
//! explicitly.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::consts::A_MAX;
use crate::rng::GameRng;

use super::class::PlayerClass;
use super::race::PlayerRace;
use super::virtue::Virtue;
use super::Player;

/// Every mutation, in the three legacy groups of 32.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[repr(u8)]
pub enum Mutation {
    // Activatable
    SpitAcid = 0,
    BrFire,
    HypnGaze,
    Telekines,
    VTeleport,
    MindBlst,
    Radiation,
    Vampirism,
    SmellMet,
    SmellMon,
    Blink,
    EatRock,
    SwapPos,
    Shriek,
    Illumine,
    DetCurse,
    Berserk,
    Polymorph,
    MidasTch,
    GrowMold,
    Resist,
    Earthquake,
    EatMagic,
    WeighMag,
    Sterility,
    HitAndAway,
    Dazzle,
    LaserEye,
    Recall,
    Banish,
    ColdTouch,
    Launcher,

    // Random triggers
    BersRage,
    Cowardice,
    RTeleport,
    Alcohol,
    Hallu,
    Flatulent,
    ScorTail,
    Horns,
    Beak,
    AttDemon,
    ProdMana,
    SpeedFlux,
    BanishAll,
    EatLight,
    Trunk,
    AttAnimal,
    Tentacles,
    RawChaos,
    Normality,
    Wraith,
    PolyWound,
    Wasting,
    AttDragon,
    WeirdMind,
    Nausea,
    ChaosGift,
    WalkShad,
    Warning,
    Invuln,
    SpToHp,
    HpToSp,
    Disarm,

    // Physical
    HyperStr,
    Puny,
    HyperInt,
    Moronic,
    Resilient,
    XtraFat,
    Albino,
    FleshRot,
    SillyVoi,
    BlankFac,
    IllNorm,
    XtraEyes,
    MagicRes,
    XtraNois,
    Infravis,
    XtraLegs,
    ShortLeg,
    ElecTouc,
    FireBody,
    WartSkin,
    Scales,
    IronSkin,
    Wings,
    Fearless,
    Regen,
    Esp,
    Limber,
    Arthritis,
    BadLuck,
    VulnElem,
    Motion,
    GoodLuck,
}

/// Legacy partition of the mutation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MutationGroup {
    Activatable,
    RandomTrigger,
    Physical,
}

impl Mutation {
    pub fn group(self) -> MutationGroup {
        match self as u8 {
            0..32 => MutationGroup::Activatable,
            32..64 => MutationGroup::RandomTrigger,
            _ => MutationGroup::Physical,
        }
    }

    /// Mutations removed when this one is gained.
    pub fn opposites(self) -> &'static [Mutation] {
        use Mutation::*;
        match self {
            HyperStr => &[Puny],
            Puny => &[HyperStr],
            HyperInt => &[Moronic],
            Moronic => &[HyperInt],
            Fearless => &[Cowardice],
            Cowardice => &[Fearless],
            FleshRot => &[Regen, IronSkin],
            Regen => &[FleshRot],
            Limber => &[Arthritis],
            Arthritis => &[Limber],
            IronSkin => &[Scales, FleshRot, WartSkin],
            Scales | WartSkin => &[IronSkin],
            _ => &[],
        }
    }

    /// Stat deltas granted while the mutation is active.
    pub const fn stat_bonus(self) -> [i16; A_MAX] {
        use Mutation::*;
        match self {
            HyperStr => [4, 0, 0, 0, 0, 0],
            Puny => [-4, 0, 0, 0, 0, 0],
            HyperInt => [0, 4, 4, 0, 0, 0],
            Moronic => [0, -4, -4, 0, 0, 0],
            Resilient => [0, 0, 0, 0, 4, 0],
            XtraFat => [0, 0, 0, 0, 2, 0],
            Albino => [0, 0, 0, 0, -4, 0],
            FleshRot => [0, 0, 0, 0, -2, -1],
            SillyVoi => [0, 0, 0, 0, 0, -4],
            BlankFac => [0, 0, 0, 0, 0, -1],
            WartSkin => [0, 0, 0, 0, 0, -2],
            Scales => [0, 0, 0, 0, 0, -1],
            IronSkin => [0, 0, 0, -1, 0, 0],
            Limber => [0, 0, 0, 3, 0, 0],
            Arthritis => [0, 0, 0, -3, 0, 0],
            _ => [0; A_MAX],
        }
    }

    /// First table index that rolls this mutation.
    pub fn gain_index(self) -> i32 {
        let mut index = 1;
        for &(mutation, weight) in GAIN_TABLE {
            if mutation == self {
                return index;
            }
            index += weight;
        }
        EXPLICIT_ONLY
            .iter()
            .find(|(_, m)| *m == self)
            .map(|(i, _)| *i)
            .unwrap_or(0)
    }

    /// Key for the gain/lose narration, owned by the text layer.
    pub fn message_key(self) -> String {
        format!("mutation.{}", self)
    }
}

/// Weighted roll table for indices 1..=193
static GAIN_TABLE: &[(Mutation, i32)] = {
    use Mutation::*;
    &[
        // 1..=74
        (SpitAcid, 4),
        (BrFire, 3),
        (HypnGaze, 2),
        (Telekines, 3),
        (VTeleport, 3),
        (MindBlst, 3),
        (Radiation, 2),
        (Vampirism, 2),
        (SmellMet, 2),
        (SmellMon, 2),
        (Blink, 3),
        (EatRock, 3),
        (SwapPos, 3),
        (Shriek, 2),
        (Illumine, 3),
        (DetCurse, 2),
        (Berserk, 3),
        (Polymorph, 1),
        (MidasTch, 2),
        (GrowMold, 1),
        (Resist, 3),
        (Earthquake, 2),
        (EatMagic, 1),
        (WeighMag, 2),
        (Sterility, 1),
        (HitAndAway, 2),
        (Dazzle, 3),
        (LaserEye, 3),
        (Recall, 3),
        (Banish, 1),
        (ColdTouch, 2),
        (Launcher, 2),
        // 75..=126
        (BersRage, 2),
        (Cowardice, 2),
        (RTeleport, 2),
        (Alcohol, 2),
        (Hallu, 2),
        (Flatulent, 2),
        (ScorTail, 2),
        (Horns, 2),
        (Beak, 1),
        (AttDemon, 2),
        (ProdMana, 1),
        (SpeedFlux, 2),
        (BanishAll, 1),
        (EatLight, 1),
        (Trunk, 1),
        (AttAnimal, 2),
        (Tentacles, 1),
        (RawChaos, 2),
        (Normality, 2),
        (Wraith, 2),
        (PolyWound, 1),
        (Wasting, 2),
        (AttDragon, 1),
        (WeirdMind, 2),
        (Nausea, 2),
        (ChaosGift, 2),
        (WalkShad, 2),
        (Warning, 2),
        (Invuln, 1),
        (SpToHp, 1),
        (HpToSp, 1),
        (Disarm, 1),
        // 127..=193
        (HyperStr, 3),
        (Puny, 3),
        (HyperInt, 3),
        (Moronic, 3),
        (Resilient, 3),
        (XtraFat, 3),
        (Albino, 3),
        (FleshRot, 2),
        (SillyVoi, 2),
        (BlankFac, 2),
        (IllNorm, 3),
        (XtraEyes, 2),
        (MagicRes, 3),
        (XtraNois, 3),
        (Infravis, 3),
        (XtraLegs, 2),
        (ShortLeg, 2),
        (ElecTouc, 2),
        (FireBody, 2),
        (WartSkin, 3),
        (Scales, 3),
        (IronSkin, 2),
        (Wings, 2),
        (Fearless, 2),
        (Regen, 2),
        (Esp, 2),
        (Limber, 1),
        (Arthritis, 1),
    ]
};

/// Highest index reachable by a random roll
pub const GAIN_TABLE_MAX: i32 = 193;

/// First index of the Berserker sub-range, exclusive
const BERSERKER_TABLE_START: i32 = 74;

/// Entries that only an explicit request can select
static EXPLICIT_ONLY: &[(i32, Mutation)] = &[
    (194, Mutation::BadLuck),
    (195, Mutation::VulnElem),
    (196, Mutation::Motion),
    (197, Mutation::GoodLuck),
];

/// The mutation a table index selects.
pub fn mutation_at(index: i32) -> Option<Mutation> {
    if index < 1 {
        return None;
    }
    let mut upper = 0;
    for &(mutation, weight) in GAIN_TABLE {
        upper += weight;
        if index <= upper {
            return Some(mutation);
        }
    }
    EXPLICIT_ONLY.iter().find(|(i, _)| *i == index).map(|(_, m)| *m)
}

/// Presence-only set of mutations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutationSet {
    bits: [u64; 2],
}

impl MutationSet {
    pub const fn new() -> Self {
        Self { bits: [0; 2] }
    }

    pub fn has(&self, mutation: Mutation) -> bool {
        let idx = mutation as usize;
        self.bits[idx / 64] & (1 << (idx % 64)) != 0
    }

    pub fn insert(&mut self, mutation: Mutation) {
        let idx = mutation as usize;
        self.bits[idx / 64] |= 1 << (idx % 64);
    }

    pub fn remove(&mut self, mutation: Mutation) {
        let idx = mutation as usize;
        self.bits[idx / 64] &= !(1 << (idx % 64));
    }

    pub fn is_empty(&self) -> bool {
        self.bits == [0; 2]
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn clear(&mut self) {
        self.bits = [0; 2];
    }

    pub fn iter(&self) -> impl Iterator<Item = Mutation> + '_ {
        Mutation::iter().filter(move |&m| self.has(m))
    }

    /// Summed stat deltas of every active mutation.
    pub fn stat_bonus(&self, stat_index: usize) -> i16 {
        self.iter().map(|m| m.stat_bonus()[stat_index]).sum()
    }
}

impl FromIterator<Mutation> for MutationSet {
    fn from_iter<I: IntoIterator<Item = Mutation>>(iter: I) -> Self {
        let mut set = MutationSet::new();
        for m in iter {
            set.insert(m);
        }
        set
    }
}

/// Class and race rules that refuse a rolled mutation.
fn is_excluded(class: PlayerClass, race: PlayerRace, mutation: Mutation) -> bool {
    match mutation {
        Mutation::Cowardice => class == PlayerClass::Berserker,
        Mutation::SpToHp | Mutation::HpToSp | Mutation::EatMagic => class.is_warrior_like(),
        Mutation::Vampirism => race == PlayerRace::Vampire,
        _ => false,
    }
}

/// Try to gain a mutation.
///
/// With `choose_mut` a single attempt is made at that table index; otherwise
/// up to twenty random indices are tried until one names a mutation the
/// character can take. Gaining a mutation drops its opposites.
pub fn gain_mutation(player: &mut Player, choose_mut: Option<i32>, rng: &mut GameRng) -> Option<Mutation> {
    let attempts = if choose_mut.is_some() { 1 } else { 20 };
    let mut chosen = None;

    for _ in 0..attempts {
        let index = match choose_mut {
            Some(index) => index,
            None if player.class == PlayerClass::Berserker => {
                BERSERKER_TABLE_START + rng.randint1(GAIN_TABLE_MAX - BERSERKER_TABLE_START)
            }
            None => rng.randint1(GAIN_TABLE_MAX),
        };
        let Some(mutation) = mutation_at(index) else {
            continue;
        };
        if player.mutations.has(mutation) || is_excluded(player.class, player.race, mutation) {
            continue;
        }
        chosen = Some(mutation);
        break;
    }

    let Some(mutation) = chosen else {
        tracing::debug!(?choose_mut, "no mutation gained");
        return None;
    };

    for &opposite in mutation.opposites() {
        if player.mutations.has(opposite) {
            player.mutations.remove(opposite);
            tracing::debug!(lost = %opposite, gained = %mutation, "opposite mutation cancelled");
        }
    }
    player.mutations.insert(mutation);
    player.virtues.chg_virtue(Virtue::Chance, 1, rng);
    player.mark_stale();
    tracing::debug!(%mutation, group = %mutation.group(), "mutation gained");
    Some(mutation)
}

/// Try to lose one active mutation, chosen the same way as gaining.
pub fn lose_mutation(player: &mut Player, choose_mut: Option<i32>, rng: &mut GameRng) -> Option<Mutation> {
    let attempts = if choose_mut.is_some() { 1 } else { 20 };
    let mut chosen = None;

    for _ in 0..attempts {
        let index = choose_mut.unwrap_or_else(|| rng.randint1(GAIN_TABLE_MAX));
        if let Some(mutation) = mutation_at(index)
            && player.mutations.has(mutation)
        {
            chosen = Some(mutation);
            break;
        }
    }

    let mutation = chosen?;
    player.mutations.remove(mutation);
    player.mark_stale();
    tracing::debug!(%mutation, "mutation lost");
    Some(mutation)
}

/// Remove every mutation. Returns false if there were none.
pub fn lose_all_mutations(player: &mut Player, rng: &mut GameRng) -> bool {
    if player.mutations.is_empty() {
        return false;
    }
    let count = player.mutations.len();
    player.mutations.clear();
    player.virtues.chg_virtue(Virtue::Chance, -5, rng);
    player.mark_stale();
    tracing::debug!(count, "all mutations lost");
    true
}
