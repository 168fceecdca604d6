//! Player system
//!
//! The character entity and the static race, class and personality tables
//! the status providers read.

mod attributes;
pub mod birth;
mod character;
mod class;
mod equipment;
mod mutation;
mod personality;
mod race;
mod skills;
mod stance;
mod timed;
mod virtue;

pub use attributes::{Stat, Stats, modify_stat_value, stat_index, stat_string};
pub use attributes::{
    adj_dex_dis, adj_dex_ta, adj_dex_th, adj_int_dev, adj_str_td, adj_str_th, adj_str_wgt, adj_wis_sav,
};
pub use birth::{BirthChoices, KitOverrides};
pub use character::{DerivedStatus, Player, StatusState, UpdateFlags};
pub use class::{ClassInfo, PlayerClass, Realm};
pub use equipment::{EquipSlot, Equipment};
pub use mutation::{
    GAIN_TABLE_MAX, Mutation, MutationGroup, MutationSet, gain_mutation, lose_all_mutations, lose_mutation,
    mutation_at,
};
pub use personality::{Personality, PersonalityInfo};
pub use race::{LevelTrait, PlayerRace, RaceInfo, has_level_trait};
pub use skills::{SkillBlock, SkillType, Skills};
pub use stance::{Action, BattleForm};
pub use timed::{HexSpells, Song, TimedEffects};
pub use virtue::{Virtue, Virtues};
