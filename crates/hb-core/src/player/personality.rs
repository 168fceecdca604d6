//! Personalities (player_personality)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::consts::A_MAX;
use crate::flags::TraitFlag;

use super::skills::SkillBlock;

/// Player personality
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[repr(u8)]
pub enum Personality {
    #[default]
    Ordinary = 0,
    Mighty,
    Shrewd,
    Pious,
    Nimble,
    Fearless,
    Combat,
    Lazy,
    Sexy,
    Lucky,
    Patient,
    Munchkin,
    Chargeman,
}

/// Static personality data
#[derive(Debug, Clone, Copy)]
pub struct PersonalityInfo {
    pub name: &'static str,
    pub a_adj: [i16; A_MAX],
    pub skills: SkillBlock,
    pub traits: &'static [TraitFlag],
}

const fn personality(
    name: &'static str,
    a_adj: [i16; A_MAX],
    skills: [i16; 8],
    traits: &'static [TraitFlag],
) -> PersonalityInfo {
    PersonalityInfo {
        name,
        a_adj,
        skills: SkillBlock::from_array(skills),
        traits,
    }
}

static PERSONALITY_INFO: [PersonalityInfo; Personality::COUNT] = [
    personality("Ordinary", [0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0, 0, 0], &[]),
    personality("Mighty", [2, -2, -2, 0, 1, 0], [-5, -5, -3, -1, -1, -5, 20, 0], &[]),
    personality("Shrewd", [-2, 2, 0, 1, -1, -1], [3, 8, 2, 0, -2, 5, -8, -5], &[]),
    personality("Pious", [0, -2, 2, -1, 0, 1], [-5, 2, 4, -1, 3, -2, -3, -6], &[]),
    personality("Nimble", [-1, 1, -1, 2, -1, -1], [7, 2, -1, 1, 5, 5, 0, 10], &[]),
    personality("Fearless", [2, 1, 1, -1, -1, 0], [-5, 5, -2, 0, 2, -2, 10, 10], &[TraitFlag::ResFear]),
    personality("Combat", [1, -1, -2, 2, 0, 1], [-2, -3, -3, -1, -1, -2, 14, 5], &[]),
    personality("Lazy", [-2, -2, -2, -2, -2, -2], [-5, -5, -3, -1, -4, -2, -8, -10], &[]),
    personality("Sexy", [1, 1, 1, 1, 1, 3], [10, 5, 3, 0, 4, 2, 10, 5], &[]),
    personality("Lucky", [-2, -2, -2, -2, -2, 2], [10, 7, 3, 2, 10, 8, 15, 5], &[]),
    personality("Patient", [-1, -1, 1, -2, 1, 0], [-5, -3, 3, 1, 0, -3, -6, -2], &[]),
    personality(
        "Munchkin",
        [10, 10, 10, 10, 10, 10],
        [20, 40, 30, 10, 40, 40, 80, 80],
        &[
            TraitFlag::ResBlind,
            TraitFlag::ResConf,
            TraitFlag::HoldExp,
            TraitFlag::SeeInvis,
            TraitFlag::FreeAct,
        ],
    ),
    personality("Chargeman", [5, -2, -3, -2, -2, -2], [-5, -5, -3, -1, -4, -2, 20, -10], &[TraitFlag::ResConf]),
];

impl Personality {
    pub fn info(self) -> &'static PersonalityInfo {
        &PERSONALITY_INFO[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn has_trait(self, flag: TraitFlag) -> bool {
        self.info().traits.contains(&flag)
    }

    /// Sexy characters always aggravate monsters.
    pub const fn aggravates(self) -> bool {
        matches!(self, Personality::Sexy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_matches_enum() {
        assert_eq!(Personality::iter().count(), PERSONALITY_INFO.len());
        assert_eq!(Personality::Chargeman.name(), "Chargeman");
    }

    #[test]
    fn test_traits() {
        assert!(Personality::Fearless.has_trait(TraitFlag::ResFear));
        assert!(Personality::Munchkin.has_trait(TraitFlag::FreeAct));
        assert!(!Personality::Ordinary.has_trait(TraitFlag::ResFear));
        assert!(Personality::Sexy.aggravates());
    }
}
