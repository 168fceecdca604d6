//! Basic stats (STR, INT, WIS, DEX, CON, CHR)
//!
//! Raw values use the 18/xx notation: 3..=18 are plain, and every 10 points
//! past 18 is one "18/10" step, up to 18/220.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{A_MAX, STAT_18, STAT_INDEX_COUNT, STAT_MAX};
use crate::flags::TraitFlag;

/// Basic stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Stat {
    Str = 0,
    Int = 1,
    Wis = 2,
    Dex = 3,
    Con = 4,
    Chr = 5,
}

impl Stat {
    pub const ALL: [Stat; A_MAX] = [Stat::Str, Stat::Int, Stat::Wis, Stat::Dex, Stat::Con, Stat::Chr];

    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Short name for display
    pub const fn short_name(&self) -> &'static str {
        match self {
            Stat::Str => "STR",
            Stat::Int => "INT",
            Stat::Wis => "WIS",
            Stat::Dex => "DEX",
            Stat::Con => "CON",
            Stat::Chr => "CHR",
        }
    }

    pub const fn full_name(&self) -> &'static str {
        match self {
            Stat::Str => "strength",
            Stat::Int => "intelligence",
            Stat::Wis => "wisdom",
            Stat::Dex => "dexterity",
            Stat::Con => "constitution",
            Stat::Chr => "charisma",
        }
    }

    /// Create from index (0-5)
    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Stat::Str),
            1 => Some(Stat::Int),
            2 => Some(Stat::Wis),
            3 => Some(Stat::Dex),
            4 => Some(Stat::Con),
            5 => Some(Stat::Chr),
            _ => None,
        }
    }

    /// The item flag that modifies this stat.
    pub const fn trait_flag(&self) -> TraitFlag {
        TraitFlag::STATS[*self as usize]
    }

    pub const fn sustain_flag(&self) -> TraitFlag {
        TraitFlag::SUSTAINS[*self as usize]
    }
}

/// Current and maximum raw values of the six stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Current, possibly drained, value
    pub cur: [i16; A_MAX],
    /// Highest value reached
    pub max: [i16; A_MAX],
}

impl Stats {
    pub fn new(values: [i16; A_MAX]) -> Self {
        let values = values.map(|v| v.clamp(3, STAT_MAX));
        Self {
            cur: values,
            max: values,
        }
    }

    pub fn get(&self, stat: Stat) -> i16 {
        self.cur[stat.index()]
    }

    /// Drain a stat by one step. Max is left alone so it can be restored.
    pub fn drain(&mut self, stat: Stat) {
        let idx = stat.index();
        self.cur[idx] = modify_stat_value(self.cur[idx], -1);
    }

    pub fn restore(&mut self, stat: Stat) {
        let idx = stat.index();
        self.cur[idx] = self.max[idx];
    }

    /// Raise a stat by one step, lifting the maximum with it.
    pub fn gain(&mut self, stat: Stat) {
        let idx = stat.index();
        self.cur[idx] = modify_stat_value(self.cur[idx], 1).min(STAT_MAX);
        if self.cur[idx] > self.max[idx] {
            self.max[idx] = self.cur[idx];
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new([10; A_MAX])
    }
}

/// Apply `amount` stat steps to a raw value.
///
/// Below 18 a step is one point; at and above 18 it is ten. Going down,
/// 18/01..18/09 collapses to 18 and nothing drops below 3.
pub fn modify_stat_value(value: i16, amount: i16) -> i16 {
    let mut value = value;
    if amount > 0 {
        for _ in 0..amount {
            if value < STAT_18 {
                value += 1;
            } else {
                value += 10;
            }
        }
    } else if amount < 0 {
        for _ in 0..(-amount) {
            if value >= STAT_18 + 10 {
                value -= 10;
            } else if value > STAT_18 {
                value = STAT_18;
            } else if value > 3 {
                value -= 1;
            }
        }
    }
    value
}

/// Index into the adjustment tables for a used stat value.
pub fn stat_index(value: i16) -> usize {
    let ind = if value <= STAT_18 {
        value - 3
    } else if value <= STAT_18 + 219 {
        15 + (value - STAT_18) / 10
    } else {
        37
    };
    (ind.max(0) as usize).min(STAT_INDEX_COUNT - 1)
}

/// Display form of a raw stat (18/xx notation)
pub fn stat_string(value: i16) -> String {
    if value <= STAT_18 {
        value.to_string()
    } else if value < STAT_18 + 220 {
        format!("18/{}", value - STAT_18)
    } else {
        "18/***".to_string()
    }
}

/// To-damage by STR index
const ADJ_STR_TD: [i16; STAT_INDEX_COUNT] = [
    -2, -2, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 2, 3, 3, 3, 3, 3, 4, 5, 5, 6, 7, 8, 9,
    10, 11, 12, 13, 14, 15, 16,
];

/// To-hit by STR index
const ADJ_STR_TH: [i16; STAT_INDEX_COUNT] = [
    -3, -2, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 3, 4, 5, 6,
    7, 8, 9, 10, 11, 12, 13,
];

/// To-hit by DEX index
const ADJ_DEX_TH: [i16; STAT_INDEX_COUNT] = [
    -3, -2, -2, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 3, 3, 3, 3, 3, 3, 3, 4, 5, 6, 7, 8, 9,
    10, 11, 12, 13, 14, 15, 15,
];

/// To-AC by DEX index
const ADJ_DEX_TA: [i16; STAT_INDEX_COUNT] = [
    -4, -3, -2, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 4, 6, 7, 9, 10, 11, 12,
    13, 14, 15, 15, 15, 15, 15, 15,
];

/// Carrying capacity step by STR index, times 50 for tenth-pounds
const ADJ_STR_WGT: [i32; STAT_INDEX_COUNT] = [
    10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 22, 24, 26, 28, 30, 31, 31, 32, 32, 33, 33, 34, 34,
    35, 35, 36, 36, 37, 37, 38, 38, 39, 39, 40, 40, 41, 41,
];

/// Saving throw by WIS index
const ADJ_WIS_SAV: [i16; STAT_INDEX_COUNT] = [
    0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 5, 5, 6, 7, 8, 9, 10,
    11, 12, 13, 14, 15, 15,
];

/// Device skill by INT index
const ADJ_INT_DEV: [i16; STAT_INDEX_COUNT] = [
    0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 9, 10,
    11, 12, 13, 14, 15, 15,
];

/// Disarming by DEX index
const ADJ_DEX_DIS: [i16; STAT_INDEX_COUNT] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 2, 2, 4, 4, 4, 4, 5, 6, 6, 6, 7, 7, 8, 9,
    10, 11, 12, 13, 14, 15,
];

pub fn adj_str_td(ind: usize) -> i16 {
    ADJ_STR_TD[ind.min(STAT_INDEX_COUNT - 1)]
}

pub fn adj_str_th(ind: usize) -> i16 {
    ADJ_STR_TH[ind.min(STAT_INDEX_COUNT - 1)]
}

pub fn adj_dex_th(ind: usize) -> i16 {
    ADJ_DEX_TH[ind.min(STAT_INDEX_COUNT - 1)]
}

pub fn adj_dex_ta(ind: usize) -> i16 {
    ADJ_DEX_TA[ind.min(STAT_INDEX_COUNT - 1)]
}

pub fn adj_str_wgt(ind: usize) -> i32 {
    ADJ_STR_WGT[ind.min(STAT_INDEX_COUNT - 1)]
}

pub fn adj_wis_sav(ind: usize) -> i16 {
    ADJ_WIS_SAV[ind.min(STAT_INDEX_COUNT - 1)]
}

pub fn adj_int_dev(ind: usize) -> i16 {
    ADJ_INT_DEV[ind.min(STAT_INDEX_COUNT - 1)]
}

pub fn adj_dex_dis(ind: usize) -> i16 {
    ADJ_DEX_DIS[ind.min(STAT_INDEX_COUNT - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modify_stat_value_up() {
        assert_eq!(modify_stat_value(16, 1), 17);
        assert_eq!(modify_stat_value(17, 2), 28);
        assert_eq!(modify_stat_value(18, 3), 48);
        assert_eq!(modify_stat_value(10, 0), 10);
    }

    #[test]
    fn test_modify_stat_value_down() {
        assert_eq!(modify_stat_value(48, -3), 18);
        assert_eq!(modify_stat_value(23, -1), 18);
        assert_eq!(modify_stat_value(18, -2), 16);
        assert_eq!(modify_stat_value(4, -5), 3);
    }

    #[test]
    fn test_stat_index_breakpoints() {
        assert_eq!(stat_index(3), 0);
        assert_eq!(stat_index(18), 15);
        assert_eq!(stat_index(27), 15);
        assert_eq!(stat_index(28), 16);
        assert_eq!(stat_index(18 + 219), 36);
        assert_eq!(stat_index(18 + 220), 37);
        assert_eq!(stat_index(0), 0);
    }

    #[test]
    fn test_stat_string() {
        assert_eq!(stat_string(17), "17");
        assert_eq!(stat_string(18 + 50), "18/50");
        assert_eq!(stat_string(18 + 220), "18/***");
    }

    #[test]
    fn test_drain_and_restore() {
        let mut stats = Stats::new([18 + 40, 10, 10, 10, 10, 10]);
        stats.drain(Stat::Str);
        assert_eq!(stats.get(Stat::Str), 18 + 30);
        stats.restore(Stat::Str);
        assert_eq!(stats.get(Stat::Str), 18 + 40);
        stats.gain(Stat::Int);
        assert_eq!(stats.max[Stat::Int.index()], 11);
    }

    #[test]
    fn test_stat_flags() {
        assert_eq!(Stat::Dex.trait_flag(), TraitFlag::Dex);
        assert_eq!(Stat::Chr.sustain_flag(), TraitFlag::SustChr);
        for (i, stat) in Stat::ALL.iter().enumerate() {
            assert_eq!(Stat::from_index(i), Some(*stat));
        }
    }

    #[test]
    fn test_adjustment_tables_monotonic() {
        for i in 1..STAT_INDEX_COUNT {
            assert!(adj_str_td(i) >= adj_str_td(i - 1));
            assert!(adj_dex_ta(i) >= adj_dex_ta(i - 1));
            assert!(adj_str_wgt(i) >= adj_str_wgt(i - 1));
        }
        assert_eq!(adj_str_th(999), adj_str_th(STAT_INDEX_COUNT - 1));
    }
}
