//! The player character (player_type)
//!
//! Holds the raw state other subsystems hand over and the derived numbers
//! the status pass writes back.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::consts::{A_MAX, PY_FOOD_FULL, PY_MAX_LEVEL, STANDARD_SPEED};
use crate::flags::CurseFlags;
use crate::monster::Monster;
use crate::object::Item;

use super::attributes::Stats;
use super::class::{PlayerClass, Realm};
use super::equipment::{EquipSlot, Equipment};
use super::mutation::MutationSet;
use super::personality::Personality;
use super::race::PlayerRace;
use super::skills::Skills;
use super::stance::{Action, BattleForm};
use super::timed::TimedEffects;
use super::virtue::Virtues;

bitflags! {
    /// Follow-up work raised by a status pass
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct UpdateFlags: u32 {
        const HP = 1 << 0;
        const MANA = 1 << 1;
        const SPELLS = 1 << 2;
        const TORCH = 1 << 3;
    }
}

// Manual serde impl for UpdateFlags
impl Serialize for UpdateFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UpdateFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(UpdateFlags::from_bits_truncate(bits))
    }
}

/// Freshness of the derived-status cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum StatusState {
    #[default]
    Uninitialized,
    Computed,
    Stale,
}

/// Numbers produced by the status pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStatus {
    /// Summed stat modifiers in steps
    pub stat_add: [i16; A_MAX],
    /// Current value after modifiers
    pub stat_use: [i16; A_MAX],
    /// Maximum value after modifiers
    pub stat_top: [i16; A_MAX],
    /// Adjustment-table index of `stat_use`
    pub stat_ind: [usize; A_MAX],

    pub speed: i16,
    pub stealth: i16,
    pub infra: i16,
    pub cur_lite: i32,

    /// Armour base and bonus
    pub ac: i16,
    pub to_a: i16,
    /// Melee bonuses per hand
    pub to_h: [i16; 2],
    pub to_d: [i16; 2],
    /// Shooting bonus
    pub to_h_b: i16,

    pub skills: Skills,
    pub align: i32,

    /// Martial artist burdened by armour
    pub heavy_armor: bool,
    /// Carried weight and the point past which it slows
    pub weight: i32,
    pub weight_limit: i32,

    /// Curses in effect, meta bits removed
    pub curses: CurseFlags,
}

impl Default for DerivedStatus {
    fn default() -> Self {
        Self {
            stat_add: [0; A_MAX],
            stat_use: [0; A_MAX],
            stat_top: [0; A_MAX],
            stat_ind: [0; A_MAX],
            speed: STANDARD_SPEED,
            stealth: 0,
            infra: 0,
            cur_lite: 0,
            ac: 0,
            to_a: 0,
            to_h: [0; 2],
            to_d: [0; 2],
            to_h_b: 0,
            skills: Skills::default(),
            align: 0,
            heavy_armor: false,
            weight: 0,
            weight_limit: 0,
            curses: CurseFlags::empty(),
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    // Identity
    pub name: String,
    pub race: PlayerRace,
    pub class: PlayerClass,
    pub personality: Personality,
    pub realm1: Option<Realm>,
    pub realm2: Option<Realm>,

    // Experience
    pub lev: i32,
    pub exp: i64,

    pub stats: Stats,

    // Possessions
    pub equipment: Equipment,
    pub inventory: Vec<Item>,

    // Conditions
    pub mutations: MutationSet,
    pub timed: TimedEffects,
    pub battle_form: BattleForm,
    pub action: Action,
    pub virtues: Virtues,
    pub food: i32,
    /// Standing in water (matters to Merfolk)
    pub in_water: bool,

    // Riding
    pub riding: Option<Monster>,
    pub riding_exp: i32,
    /// Dual-wielding experience
    pub two_weapon_exp: i32,

    /// Alignment earned from kills and deeds
    pub align_base: i32,

    pub derived: DerivedStatus,
    pub state: StatusState,
}

impl Player {
    /// A new level-1 character with an already rolled set of stats.
    pub fn new(race: PlayerRace, class: PlayerClass, personality: Personality, stats: [i16; A_MAX]) -> Self {
        Self {
            name: String::new(),
            race,
            class,
            personality,
            realm1: None,
            realm2: None,
            lev: 1,
            exp: 0,
            stats: Stats::new(stats),
            equipment: Equipment::new(),
            inventory: Vec::new(),
            mutations: MutationSet::new(),
            timed: TimedEffects::new(),
            battle_form: BattleForm::None,
            action: Action::None,
            virtues: Virtues::new(),
            food: PY_FOOD_FULL - 1,
            in_water: false,
            riding: None,
            riding_exp: 0,
            two_weapon_exp: 0,
            align_base: 0,
            derived: DerivedStatus::default(),
            state: StatusState::Uninitialized,
        }
    }

    pub fn realms(&self) -> [Option<Realm>; 2] {
        [self.realm1, self.realm2]
    }

    /// Flag the derived status for recomputation.
    pub fn mark_stale(&mut self) {
        if self.state == StatusState::Computed {
            self.state = StatusState::Stale;
        }
    }

    pub fn needs_update(&self) -> bool {
        self.state != StatusState::Computed
    }

    /// Wear an item, returning whatever was in the slot.
    pub fn equip(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        let old = self.equipment.wear(slot, item);
        self.mark_stale();
        old
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Item> {
        let old = self.equipment.take_off(slot);
        if old.is_some() {
            self.mark_stale();
        }
        old
    }

    pub fn set_level(&mut self, lev: i32) {
        let lev = lev.clamp(1, PY_MAX_LEVEL);
        if lev != self.lev {
            self.lev = lev;
            self.mark_stale();
        }
    }

    /// Timed effects for modification; any change invalidates the cache.
    pub fn timed_mut(&mut self) -> &mut TimedEffects {
        self.mark_stale();
        &mut self.timed
    }

    /// Count down timed effects by one turn.
    pub fn process_timed_effects(&mut self) {
        if self.timed.decrement() {
            self.mark_stale();
        }
    }

    pub fn set_battle_form(&mut self, form: BattleForm) {
        if form != self.battle_form {
            self.battle_form = form;
            self.mark_stale();
        }
    }

    pub fn set_action(&mut self, action: Action) {
        if action != self.action {
            self.action = action;
            self.mark_stale();
        }
    }

    /// Mount or dismount.
    pub fn set_riding(&mut self, mount: Option<Monster>) {
        self.riding = mount;
        self.mark_stale();
    }

    /// Add curse flags to a worn item.
    pub fn curse_item(&mut self, slot: EquipSlot, curses: CurseFlags) -> bool {
        let Some(item) = self.equipment.get_mut(slot) else {
            return false;
        };
        item.curse_flags |= curses;
        self.mark_stale();
        true
    }

    /// Strip every curse but a permanent one from a worn item.
    pub fn uncurse_item(&mut self, slot: EquipSlot) -> bool {
        let Some(item) = self.equipment.get_mut(slot) else {
            return false;
        };
        if item.curse_flags.contains(CurseFlags::PERMA_CURSE) {
            return false;
        }
        item.curse_flags = CurseFlags::empty();
        self.mark_stale();
        true
    }

    /// Berserk rage, permanent for Berserkers.
    pub fn is_shero(&self) -> bool {
        self.timed.is_shero() || self.class == PlayerClass::Berserker
    }

    /// Weight of everything carried and worn.
    pub fn inventory_weight(&self) -> i32 {
        let pack: i32 = self.inventory.iter().map(Item::total_weight).sum();
        pack + self.equipment.total_weight()
    }

    /// Merge nothing, but drop emptied stacks.
    pub fn optimize_inventory(&mut self) {
        let before = self.inventory.len();
        self.inventory.retain(|item| item.number > 0);
        if self.inventory.len() != before {
            tracing::trace!(removed = before - self.inventory.len(), "empty stacks removed");
            self.mark_stale();
        }
    }

    /// Melee weapons held in each hand.
    pub fn weapons(&self) -> [Option<&Item>; 2] {
        [
            self.equipment.weapon(EquipSlot::MainHand),
            self.equipment.weapon(EquipSlot::SubHand),
        ]
    }

    pub fn is_dual_wielding(&self) -> bool {
        let [main, sub] = self.weapons();
        main.is_some() && sub.is_some()
    }
}
