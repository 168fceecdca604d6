//! Player skill blocks

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Skill category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum SkillType {
    Disarm = 0,
    Device = 1,
    Save = 2,
    Stealth = 3,
    Search = 4,
    Perception = 5,
    Melee = 6,
    Bows = 7,
}

/// Raw skill numbers as they appear in the race, class and personality
/// tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBlock {
    pub dis: i16,
    pub dev: i16,
    pub sav: i16,
    pub stl: i16,
    pub srh: i16,
    pub fos: i16,
    pub thn: i16,
    pub thb: i16,
}

impl SkillBlock {
    /// Build from table order: dis, dev, sav, stl, srh, fos, thn, thb.
    pub const fn from_array(v: [i16; 8]) -> Self {
        Self {
            dis: v[0],
            dev: v[1],
            sav: v[2],
            stl: v[3],
            srh: v[4],
            fos: v[5],
            thn: v[6],
            thb: v[7],
        }
    }

    pub const fn get(&self, skill: SkillType) -> i16 {
        match skill {
            SkillType::Disarm => self.dis,
            SkillType::Device => self.dev,
            SkillType::Save => self.sav,
            SkillType::Stealth => self.stl,
            SkillType::Search => self.srh,
            SkillType::Perception => self.fos,
            SkillType::Melee => self.thn,
            SkillType::Bows => self.thb,
        }
    }
}

/// Derived skill values written by the update pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub disarm: i32,
    pub device: i32,
    pub save: i32,
    pub stealth: i32,
    pub search: i32,
    pub perception: i32,
    pub melee: i32,
    pub bows: i32,
}

impl Skills {
    pub const fn get(&self, skill: SkillType) -> i32 {
        match skill {
            SkillType::Disarm => self.disarm,
            SkillType::Device => self.device,
            SkillType::Save => self.save,
            SkillType::Stealth => self.stealth,
            SkillType::Search => self.search,
            SkillType::Perception => self.perception,
            SkillType::Melee => self.melee,
            SkillType::Bows => self.bows,
        }
    }
}
