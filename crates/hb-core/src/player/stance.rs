//! Battle forms (monk stances, samurai katas) and current action

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::A_MAX;
use crate::flags::TraitFlag;

/// Combat posture held until dropped
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum BattleForm {
    #[default]
    None,
    // Monk stances
    Genbu,
    Byakko,
    Suzaku,
    Seiryu,
    // Samurai katas
    Iai,
    Fuujin,
    Koukijin,
    Musou,
}

const NO_STATS: [i16; A_MAX] = [0; A_MAX];

impl BattleForm {
    pub const fn is_active(self) -> bool {
        !matches!(self, BattleForm::None)
    }

    /// Stat deltas while the form is held.
    pub const fn stat_bonus(self) -> [i16; A_MAX] {
        match self {
            BattleForm::Genbu => [0, -1, -1, -2, 3, 0],
            BattleForm::Byakko => [2, 0, 0, 2, -3, 0],
            BattleForm::Suzaku => [-2, 1, 1, 2, -2, 0],
            BattleForm::Koukijin => [5, 5, 5, 5, 5, 5],
            _ => NO_STATS,
        }
    }

    /// Whether the form grants `flag`.
    pub fn has_trait(self, flag: TraitFlag) -> bool {
        use TraitFlag::*;
        match self {
            BattleForm::Suzaku => flag == Levitation,
            BattleForm::Seiryu => matches!(
                flag,
                Levitation | ResAcid | ResElec | ResFire | ResCold | ResPois | ShFire | ShElec | ShCold
            ),
            BattleForm::Fuujin => flag == Reflect,
            BattleForm::Koukijin => matches!(flag, VulAcid | VulElec | VulFire | VulCold),
            BattleForm::Musou => matches!(
                flag,
                ResAcid
                    | ResElec
                    | ResFire
                    | ResCold
                    | ResPois
                    | ResFear
                    | ResLite
                    | ResDark
                    | ResBlind
                    | ResConf
                    | ResSound
                    | ResShards
                    | ResNether
                    | ResNexus
                    | ResChaos
                    | ResDisen
                    | ResTime
                    | ResWater
                    | ResCurse
                    | Reflect
                    | FreeAct
                    | SeeInvis
                    | HoldExp
                    | Levitation
                    | Regen
                    | Telepathy
                    | SustStr
                    | SustInt
                    | SustWis
                    | SustDex
                    | SustCon
                    | SustChr
                    | SlowDigest
                    | ShFire
                    | ShElec
                    | ShCold
            ),
            _ => false,
        }
    }
}

/// What the player is busy doing this turn
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Action {
    #[default]
    None,
    Search,
    Rest,
    Learn,
    Fish,
    Kamae,
    Kata,
    Sing,
    Hayagake,
    Spell,
}
