//! Player races (player_race / race_info)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::consts::A_MAX;
use crate::flags::TraitFlag;

use super::skills::SkillBlock;

/// Player race
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[repr(u8)]
pub enum PlayerRace {
    #[default]
    Human = 0,
    HalfElf,
    Elf,
    Hobbit,
    Gnome,
    Dwarf,
    HalfOrc,
    HalfTroll,
    Amberite,
    HighElf,
    Barbarian,
    HalfOgre,
    HalfGiant,
    HalfTitan,
    Cyclops,
    Yeek,
    Klackon,
    Kobold,
    Nibelung,
    DarkElf,
    Draconian,
    Mindflayer,
    Imp,
    Golem,
    Skeleton,
    Zombie,
    Vampire,
    Spectre,
    Sprite,
    Beastman,
    Ent,
    Archon,
    Balrog,
    Dunadan,
    ShadowFairy,
    Kutar,
    Android,
    Merfolk,
}

/// A trait a race or class has from `min_level` on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTrait {
    pub flag: TraitFlag,
    pub min_level: i32,
}

const fn always(flag: TraitFlag) -> LevelTrait {
    LevelTrait { flag, min_level: 1 }
}

const fn from_level(flag: TraitFlag, min_level: i32) -> LevelTrait {
    LevelTrait { flag, min_level }
}

/// Check a level-gated trait list.
pub fn has_level_trait(traits: &[LevelTrait], flag: TraitFlag, level: i32) -> bool {
    traits.iter().any(|t| t.flag == flag && level >= t.min_level)
}

/// Static race data
#[derive(Debug, Clone, Copy)]
pub struct RaceInfo {
    pub name: &'static str,
    /// Stat adjustments
    pub r_adj: [i16; A_MAX],
    pub skills: SkillBlock,
    /// Infravision range
    pub infra: i16,
    pub traits: &'static [LevelTrait],
    /// Extra carrying capacity in percent
    pub carry_bonus_pct: i32,
    /// Innate alignment offset
    pub align_bias: i32,
}

const fn race(
    name: &'static str,
    r_adj: [i16; A_MAX],
    skills: [i16; 8],
    infra: i16,
    traits: &'static [LevelTrait],
) -> RaceInfo {
    RaceInfo {
        name,
        r_adj,
        skills: SkillBlock::from_array(skills),
        infra,
        traits,
        carry_bonus_pct: 0,
        align_bias: 0,
    }
}

const fn big(mut info: RaceInfo) -> RaceInfo {
    info.carry_bonus_pct = 10;
    info
}

const fn biased(mut info: RaceInfo, align_bias: i32) -> RaceInfo {
    info.align_bias = align_bias;
    info
}

use TraitFlag::*;

static RACE_INFO: [RaceInfo; PlayerRace::COUNT] = [
    race("Human", [0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 10, 0, 0], 0, &[]),
    race("Half-Elf", [-1, 1, 1, 1, -1, 1], [2, 3, 3, 1, 6, 11, -1, 5], 2, &[]),
    race("Elf", [-1, 2, 0, 1, -2, 2], [5, 6, 6, 2, 8, 12, -5, 15], 3, &[always(ResLite)]),
    race("Hobbit", [-2, 1, 1, 3, 2, 1], [15, 18, 18, 4, 6, 20, -10, 20], 4, &[always(HoldExp)]),
    race("Gnome", [-1, 2, 0, 2, 1, -2], [10, 12, 12, 3, 6, 13, -8, 12], 4, &[always(FreeAct)]),
    race("Dwarf", [2, -2, 2, -2, 2, -1], [2, 9, 9, -1, 7, 10, 15, 0], 5, &[always(ResBlind)]),
    race("Half-Orc", [2, -1, 0, 0, 1, -3], [-3, -3, -3, -1, 0, 7, 12, -5], 3, &[always(ResDark)]),
    race(
        "Half-Troll",
        [4, -4, -2, -4, 3, -6],
        [-5, -8, -8, -2, -1, 5, 20, -10],
        3,
        &[always(SustStr), from_level(Regen, 15)],
    ),
    race("Amberite", [1, 2, 2, 2, 3, 2], [4, 5, 3, 2, 3, 13, 15, 10], 0, &[always(SustCon), always(Regen)]),
    race(
        "High-Elf",
        [1, 3, -1, 3, 1, 5],
        [4, 13, 15, 4, 3, 14, 10, 25],
        4,
        &[always(ResLite), always(SeeInvis)],
    ),
    race("Barbarian", [3, -2, -1, 1, 2, 0], [-2, -10, 2, -1, 1, 7, 12, 10], 0, &[always(ResFear)]),
    race(
        "Half-Ogre",
        [3, -1, -1, -1, 3, -3],
        [-3, -5, -5, -2, -1, 5, 20, 0],
        3,
        &[always(ResDark), always(SustStr)],
    ),
    big(race(
        "Half-Giant",
        [4, -2, -2, -2, 3, -3],
        [-6, -8, -6, -2, -1, 5, 25, 5],
        3,
        &[always(SustStr), always(ResShards)],
    )),
    big(race("Half-Titan", [5, 1, 2, -2, 3, 1], [-5, 5, 1, -2, 1, 8, 25, 0], 0, &[always(ResChaos)])),
    big(race("Cyclops", [4, -3, -2, -3, 4, -3], [-4, -5, -5, -2, -2, 5, 20, 12], 1, &[always(ResSound)])),
    race(
        "Yeek",
        [-2, 1, 1, 1, -2, -4],
        [2, 4, 6, 3, 5, 15, -5, -5],
        2,
        &[always(ResAcid), from_level(ImAcid, 20)],
    ),
    race(
        "Klackon",
        [2, -1, -1, 1, 2, -2],
        [10, 5, 3, 0, -1, 10, 5, 5],
        2,
        &[always(ResConf), always(ResAcid)],
    ),
    race("Kobold", [1, -1, 0, 1, 0, -4], [-2, -3, -2, -1, 1, 8, 10, -8], 5, &[always(ResPois)]),
    race(
        "Nibelung",
        [1, -1, 2, 0, 2, -4],
        [3, 5, 6, 1, 5, 10, 9, 0],
        5,
        &[always(ResDisen), always(ResDark)],
    ),
    race(
        "Dark-Elf",
        [-1, 3, 2, 2, -2, 1],
        [5, 10, 12, 3, 8, 12, -5, 10],
        5,
        &[always(ResDark), from_level(SeeInvis, 20)],
    ),
    race(
        "Draconian",
        [2, 1, 1, 1, 2, -1],
        [-2, 5, 2, 0, 1, 10, 5, 5],
        2,
        &[
            always(Levitation),
            from_level(ResFire, 5),
            from_level(ResCold, 10),
            from_level(ResAcid, 15),
            from_level(ResElec, 20),
            from_level(ResPois, 35),
        ],
    ),
    race(
        "Mindflayer",
        [-3, 4, 4, 0, -2, -3],
        [10, 25, 15, 2, 5, 12, -10, -5],
        4,
        &[always(SustInt), always(SustWis), from_level(SeeInvis, 15), from_level(Telepathy, 30)],
    ),
    biased(
        race(
            "Imp",
            [-1, -1, -1, 1, 2, -3],
            [-3, 2, -1, 1, -1, 10, 5, -5],
            3,
            &[always(ResFire), from_level(SeeInvis, 10)],
        ),
        -50,
    ),
    race(
        "Golem",
        [4, -5, -5, -2, 4, -4],
        [-5, -5, 6, -1, -1, 8, 20, 0],
        4,
        &[always(SeeInvis), always(FreeAct), always(ResPois), always(SlowDigest), from_level(HoldExp, 35)],
    ),
    race(
        "Skeleton",
        [0, 1, -2, 0, 1, -4],
        [-5, 0, 3, -1, -1, 8, 10, 0],
        2,
        &[
            always(ResShards),
            always(HoldExp),
            always(SeeInvis),
            always(ResPois),
            from_level(ResCold, 10),
        ],
    ),
    race(
        "Zombie",
        [2, -6, -6, 1, 4, -5],
        [-5, -5, 5, -1, -1, 5, 15, 0],
        2,
        &[
            always(ResNether),
            always(HoldExp),
            always(SeeInvis),
            always(ResPois),
            always(SlowDigest),
            from_level(ResCold, 5),
        ],
    ),
    race(
        "Vampire",
        [3, 3, -1, -1, 1, 2],
        [4, 10, 10, 4, 1, 8, 5, 0],
        5,
        &[
            always(ResDark),
            always(ImDark),
            always(HoldExp),
            always(ResNether),
            always(ResCold),
            always(ResPois),
            always(VulLite),
        ],
    ),
    race(
        "Spectre",
        [-5, 4, -1, 2, 0, -3],
        [10, 15, 12, 5, 5, 14, -15, -5],
        5,
        &[
            always(Levitation),
            always(FreeAct),
            always(ResNether),
            always(HoldExp),
            always(SeeInvis),
            always(ResPois),
            always(SlowDigest),
            always(ResCold),
            always(PassWall),
            from_level(Telepathy, 35),
        ],
    ),
    race(
        "Sprite",
        [-4, 3, 3, 3, -2, 2],
        [10, 8, 6, 4, 10, 10, -12, 0],
        4,
        &[always(Levitation), always(ResLite), always(Lite1)],
    ),
    race(
        "Beastman",
        [2, -2, -1, -1, 2, -2],
        [-5, -2, -1, -1, -1, 5, 12, 5],
        5,
        &[always(ResConf), always(ResSound)],
    ),
    big(race(
        "Ent",
        [2, 0, 2, -2, 2, 0],
        [-5, 2, 5, -1, 0, 9, 15, -5],
        0,
        &[always(SlowDigest), always(VulFire)],
    )),
    biased(
        race(
            "Archon",
            [2, 0, 4, 1, 2, 3],
            [0, 12, 8, 2, 2, 11, 10, 10],
            3,
            &[always(Levitation), always(SeeInvis)],
        ),
        200,
    ),
    biased(
        race(
            "Balrog",
            [4, 2, -10, 2, 3, -5],
            [-3, 12, 15, -2, 1, 8, 20, 0],
            5,
            &[always(ResFire), always(ResNether), always(HoldExp), from_level(SeeInvis, 10)],
        ),
        -200,
    ),
    race("Dunadan", [1, 2, 2, 2, 3, 2], [4, 5, 3, 2, 3, 13, 15, 10], 0, &[always(SustCon)]),
    race(
        "Shadow-Fairy",
        [-2, 2, 2, 1, -1, 0],
        [7, 8, 0, 6, 12, 15, -10, -5],
        4,
        &[always(Levitation), always(ResDark), always(VulLite)],
    ),
    race("Kutar", [0, -1, -1, 1, 2, 3], [-2, 5, 5, 5, -2, 6, 0, -5], 0, &[always(ResConf)]),
    race(
        "Android",
        [4, -5, -5, 0, 4, -2],
        [0, -5, 0, -2, 3, 14, 20, 10],
        0,
        &[always(ResPois), always(FreeAct), always(SlowDigest), always(HoldExp), always(VulElec)],
    ),
    race("Merfolk", [-1, 0, 2, 1, -1, 1], [5, 5, 10, 2, 6, 10, 0, 10], 2, &[always(ResWater)]),
];

impl PlayerRace {
    pub fn info(self) -> &'static RaceInfo {
        &RACE_INFO[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Whether the race has `flag` at `level`.
    pub fn has_trait(self, flag: TraitFlag, level: i32) -> bool {
        has_level_trait(self.info().traits, flag, level)
    }

    /// Level-gated stat gains on top of the table (Ents grow with age).
    pub fn level_stat_bonus(self, stat_index: usize, level: i32) -> i16 {
        if self != PlayerRace::Ent {
            return 0;
        }
        let steps = [26, 41, 46].iter().filter(|&&l| level >= l).count() as i16;
        match stat_index {
            0 | 4 => steps,
            3 => -steps,
            _ => 0,
        }
    }

    pub const fn is_undead(self) -> bool {
        matches!(
            self,
            PlayerRace::Skeleton | PlayerRace::Zombie | PlayerRace::Vampire | PlayerRace::Spectre
        )
    }

    pub const fn is_nonliving(self) -> bool {
        self.is_undead() || matches!(self, PlayerRace::Golem | PlayerRace::Android)
    }
}
