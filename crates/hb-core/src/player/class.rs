//! Player classes and magic realms (player_class / class_info)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::consts::A_MAX;
use crate::flags::TraitFlag;

use super::attributes::Stat;
use super::race::{LevelTrait, has_level_trait};
use super::skills::SkillBlock;

/// Player class
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[repr(u8)]
pub enum PlayerClass {
    #[default]
    Warrior = 0,
    Mage,
    Priest,
    Rogue,
    Ranger,
    Paladin,
    WarriorMage,
    ChaosWarrior,
    Monk,
    Mindcrafter,
    HighMage,
    Tourist,
    Imitator,
    Beastmaster,
    Sorcerer,
    Archer,
    MagicEater,
    Bard,
    RedMage,
    Samurai,
    ForceTrainer,
    BlueMage,
    Cavalry,
    Berserker,
    Smith,
    MirrorMaster,
    Ninja,
    Sniper,
    Elementalist,
}

/// Magic realm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Realm {
    Life,
    Sorcery,
    Nature,
    Chaos,
    Death,
    Trump,
    Arcane,
    Craft,
    Daemon,
    Crusade,
    Music,
    Hissatsu,
    Hex,
}

/// Static class data
#[derive(Debug, Clone, Copy)]
pub struct ClassInfo {
    pub name: &'static str,
    /// Stat adjustments
    pub c_adj: [i16; A_MAX],
    pub skills: SkillBlock,
    /// Skill growth per ten levels
    pub x_skills: SkillBlock,
    pub traits: &'static [LevelTrait],
    /// Stat that drives spell points, if the class casts
    pub spell_stat: Option<Stat>,
}

const fn class(
    name: &'static str,
    c_adj: [i16; A_MAX],
    skills: [i16; 8],
    x_skills: [i16; 8],
    traits: &'static [LevelTrait],
    spell_stat: Option<Stat>,
) -> ClassInfo {
    ClassInfo {
        name,
        c_adj,
        skills: SkillBlock::from_array(skills),
        x_skills: SkillBlock::from_array(x_skills),
        traits,
        spell_stat,
    }
}

const fn at(flag: TraitFlag, min_level: i32) -> LevelTrait {
    LevelTrait { flag, min_level }
}

use TraitFlag::*;

const INT: Option<Stat> = Some(Stat::Int);
const WIS: Option<Stat> = Some(Stat::Wis);
const CHR: Option<Stat> = Some(Stat::Chr);

static CLASS_INFO: [ClassInfo; PlayerClass::COUNT] = [
    class(
        "Warrior",
        [4, -2, -2, 2, 2, -1],
        [25, 18, 18, 1, 14, 2, 70, 55],
        [12, 7, 10, 0, 0, 0, 30, 30],
        &[at(ResFear, 30)],
        None,
    ),
    class("Mage", [-4, 3, 0, 1, -2, 1], [30, 36, 30, 2, 16, 20, 34, 20], [7, 13, 9, 0, 0, 0, 15, 15], &[], INT),
    class("Priest", [-1, -3, 3, -1, 0, 2], [25, 30, 32, 2, 16, 8, 48, 35], [7, 10, 12, 0, 0, 0, 20, 20], &[], WIS),
    class("Rogue", [0, 1, -3, 3, -1, -1], [45, 32, 28, 5, 32, 24, 60, 66], [15, 10, 10, 0, 0, 0, 40, 30], &[], INT),
    class("Ranger", [0, 2, 0, 1, 1, 1], [30, 32, 28, 3, 24, 16, 56, 72], [8, 10, 10, 0, 0, 0, 30, 45], &[], INT),
    class(
        "Paladin",
        [3, -3, 1, 0, 2, 2],
        [20, 24, 26, 1, 12, 2, 68, 40],
        [7, 10, 11, 0, 0, 0, 35, 30],
        &[at(ResFear, 40)],
        WIS,
    ),
    class(
        "Warrior-Mage",
        [2, 2, 0, 1, 0, 1],
        [30, 35, 28, 2, 18, 16, 50, 25],
        [7, 10, 9, 0, 0, 0, 20, 20],
        &[],
        INT,
    ),
    class(
        "Chaos-Warrior",
        [2, 1, -1, 0, 2, -2],
        [20, 25, 25, 1, 14, 12, 65, 40],
        [7, 11, 10, 0, 0, 0, 34, 29],
        &[at(ResChaos, 30), at(ResFear, 40)],
        INT,
    ),
    class("Monk", [2, -1, 1, 3, 2, 1], [45, 34, 36, 5, 32, 24, 64, 60], [15, 11, 10, 0, 0, 0, 40, 30], &[], WIS),
    class(
        "Mindcrafter",
        [-1, 0, 3, -1, -1, 2],
        [30, 33, 38, 3, 22, 16, 50, 40],
        [10, 11, 10, 0, 0, 0, 20, 30],
        &[at(ResFear, 10), at(SustWis, 20), at(ResConf, 30), at(Telepathy, 40)],
        WIS,
    ),
    class(
        "High-Mage",
        [-4, 4, 0, 0, -2, 1],
        [30, 36, 30, 2, 16, 20, 34, 20],
        [7, 13, 9, 0, 0, 0, 15, 15],
        &[],
        INT,
    ),
    class(
        "Tourist",
        [-1, -1, -1, -1, -1, -1],
        [15, 18, 15, 1, 12, 2, 40, 20],
        [5, 7, 9, 0, 0, 0, 11, 11],
        &[],
        None,
    ),
    class("Imitator", [0, 1, -1, 2, 0, 1], [25, 30, 36, 2, 18, 16, 60, 50], [7, 10, 10, 0, 0, 0, 30, 10], &[], None),
    class(
        "Beastmaster",
        [1, -1, -1, 1, 0, 2],
        [20, 25, 32, 2, 18, 16, 52, 63],
        [7, 10, 10, 0, 0, 0, 14, 25],
        &[],
        CHR,
    ),
    class("Sorcerer", [-5, 6, -2, 2, 0, -2], [30, 48, 75, 2, 12, 22, 0, 0], [7, 18, 13, 0, 0, 0, 0, 0], &[], INT),
    class("Archer", [-1, 0, 0, 2, 1, -1], [38, 24, 35, 4, 24, 25, 56, 82], [12, 10, 10, 0, 0, 0, 18, 36], &[], None),
    class(
        "Magic-Eater",
        [-1, 2, 1, 2, -2, 1],
        [42, 46, 41, 2, 20, 16, 45, 25],
        [7, 16, 12, 0, 0, 0, 15, 15],
        &[],
        INT,
    ),
    class(
        "Bard",
        [-2, 1, 2, -1, -2, 4],
        [20, 33, 34, -5, 16, 20, 34, 20],
        [8, 13, 11, 0, 0, 0, 10, 8],
        &[at(ResSound, 1)],
        CHR,
    ),
    class("Red-Mage", [2, 2, -1, 1, 0, -1], [20, 34, 34, 1, 16, 10, 56, 25], [7, 11, 11, 0, 0, 0, 18, 15], &[], INT),
    class(
        "Samurai",
        [3, -2, 1, 2, 1, 0],
        [25, 14, 20, 1, 14, 2, 70, 45],
        [7, 7, 10, 0, 0, 0, 32, 15],
        &[at(ResFear, 30)],
        WIS,
    ),
    class(
        "Force-Trainer",
        [0, -1, 3, 2, 1, 1],
        [30, 34, 38, 4, 32, 24, 50, 40],
        [10, 11, 11, 0, 0, 0, 14, 15],
        &[],
        WIS,
    ),
    class("Blue-Mage", [-4, 4, -3, 1, -2, -1], [30, 40, 36, 2, 18, 16, 34, 20], [7, 13, 10, 0, 0, 0, 15, 15], &[], INT),
    class("Cavalry", [2, -2, -2, 2, 2, 0], [20, 18, 32, 1, 16, 10, 60, 66], [10, 7, 10, 0, 0, 0, 22, 26], &[], None),
    class(
        "Berserker",
        [8, -20, -20, 4, 4, -5],
        [-10, -20, 50, -3, 10, 10, 75, 0],
        [10, 5, 10, 0, 0, 0, 35, 0],
        &[
            at(ResFear, 1),
            at(SustStr, 1),
            at(SustDex, 1),
            at(SustCon, 1),
            at(Regen, 1),
            at(FreeAct, 1),
            at(HoldExp, 40),
        ],
        None,
    ),
    class("Smith", [3, -1, -1, 1, 3, -3], [30, 28, 28, 0, 12, 15, 55, 40], [15, 15, 10, 0, 0, 0, 28, 20], &[], None),
    class(
        "Mirror-Master",
        [-2, 3, 1, -1, 0, 1],
        [30, 33, 40, 3, 14, 16, 34, 30],
        [10, 11, 12, 0, 0, 0, 15, 15],
        &[at(Reflect, 40)],
        INT,
    ),
    class(
        "Ninja",
        [0, -1, -1, 3, 2, -1],
        [45, 24, 36, 8, 48, 32, 70, 66],
        [15, 10, 10, 0, 0, 0, 20, 20],
        &[at(ResPois, 20), at(SustDex, 30), at(SeeInvis, 45)],
        None,
    ),
    class("Sniper", [0, -1, -1, 3, 0, -1], [25, 24, 28, 5, 32, 18, 35, 72], [10, 10, 10, 0, 0, 0, 12, 28], &[], None),
    class(
        "Elementalist",
        [-3, 3, 3, 0, -2, 1],
        [30, 36, 30, 2, 16, 20, 34, 20],
        [7, 13, 9, 0, 0, 0, 15, 15],
        &[],
        WIS,
    ),
];

impl PlayerClass {
    pub fn info(self) -> &'static ClassInfo {
        &CLASS_INFO[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Table traits only; armour-dependent class traits are resolved by the
    /// class provider.
    pub fn has_trait(self, flag: TraitFlag, level: i32) -> bool {
        has_level_trait(self.info().traits, flag, level)
    }

    /// Classes whose martial arts suffer under heavy armour.
    pub const fn is_martial_artist(self) -> bool {
        matches!(self, PlayerClass::Monk | PlayerClass::ForceTrainer | PlayerClass::Ninja)
    }

    pub const fn is_warrior_like(self) -> bool {
        matches!(self, PlayerClass::Warrior | PlayerClass::Berserker)
    }
}
