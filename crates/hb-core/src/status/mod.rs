//! Character status resolution
//!
//! Providers answer which causes grant a trait, the aggregator combines them
//! per trait, and the resolvers turn the same sources into numbers. The
//! update pass runs every resolver in dependency order and writes the
//! results back into the player.

mod aggregate;
mod alignment;
mod armour;
mod basic_stat;
mod burden;
mod infravision;
mod light;
mod melee;
mod providers;
mod resolver;
mod skills;
mod speed;
mod stealth;
mod update;

pub use alignment::calc_alignment;
pub use armour::{ArmourBonus, calc_base_ac};
pub use basic_stat::BasicStat;
pub use burden::{calc_weight_limit, heavy_armor};
pub use infravision::Infravision;
pub use light::calc_light_radius;
pub use melee::{DamageBonus, HitBonus, dual_wield_penalty};
pub use resolver::StatusResolver;
pub use skills::calc_skills;
pub use speed::Speed;
pub use stealth::Stealth;
pub use update::update_bonuses;

use crate::config::EngineConfig;
use crate::flags::{CurseFlags, TraitSet};
use crate::monster::Monster;
use crate::object::{Catalog, Item, object_flags};
use crate::player::{EquipSlot, Mutation, Player, Stat};

/// Read-only view of everything a status query needs.
#[derive(Debug, Clone, Copy)]
pub struct StatusView<'a> {
    pub player: &'a Player,
    pub catalog: &'a Catalog,
    pub config: &'a EngineConfig,
}

impl<'a> StatusView<'a> {
    pub fn new(player: &'a Player, catalog: &'a Catalog, config: &'a EngineConfig) -> Self {
        Self {
            player,
            catalog,
            config,
        }
    }

    /// The mount, if riding counts in this game mode.
    pub fn mount(&self) -> Option<&'a Monster> {
        if self.config.riding_enabled {
            self.player.riding.as_ref()
        } else {
            None
        }
    }

    pub fn is_riding(&self) -> bool {
        self.mount().is_some()
    }

    /// Mutation check that honours the mutation switch.
    pub fn has_mutation(&self, mutation: Mutation) -> bool {
        self.config.mutations_enabled && self.player.mutations.has(mutation)
    }

    /// Occupied equipment slots with each item's full flag set.
    pub fn equipment_flags(&self) -> impl Iterator<Item = (EquipSlot, &'a Item, TraitSet)> + 'a {
        let catalog = self.catalog;
        self.player
            .equipment
            .iter()
            .map(move |(slot, item)| (slot, item, object_flags(item, catalog)))
    }

    /// Table index of a stat as of the last status pass.
    pub fn stat_ind(&self, stat: Stat) -> usize {
        self.player.derived.stat_ind[stat.index()]
    }

    /// Curses in effect: item curses without their bookkeeping bits, plus
    /// the aggravation every Sexy character carries.
    pub fn curse_flags(&self) -> CurseFlags {
        let mut curses = self
            .player
            .equipment
            .iter()
            .fold(CurseFlags::empty(), |acc, (_, item)| acc | item.curse_flags.without_meta());
        if self.player.personality.aggravates() {
            curses |= CurseFlags::AGGRAVATE;
        }
        curses
    }
}
