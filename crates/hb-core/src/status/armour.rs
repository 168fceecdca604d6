//! Armour class (calc_base_ac / PlayerArmourBonus)
//!
//! Base AC is the printed armour value of what is worn. The bonus covers
//! everything else: enchantment, dexterity, martial arts, spells and forms.

use crate::flags::CurseFlags;
use crate::player::{BattleForm, EquipSlot, HexSpells, Mutation, PlayerClass, PlayerRace, Stat, adj_dex_ta};

use super::StatusView;
use super::burden::heavy_armor;
use super::resolver::StatusResolver;

/// Sum of the base armour of every worn item.
pub fn calc_base_ac(view: &StatusView<'_>) -> i16 {
    view.player.equipment.iter().map(|(_, item)| item.ac).sum()
}

/// Penalty from an item's low-AC curse.
fn low_ac_penalty(curses: CurseFlags) -> i16 {
    if !curses.contains(CurseFlags::LOW_AC) {
        0
    } else if curses.contains(CurseFlags::HEAVY_CURSE) {
        -30
    } else {
        -10
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArmourBonus;

impl StatusResolver for ArmourBonus {
    fn min_value(&self) -> i16 {
        -999
    }

    fn max_value(&self) -> i16 {
        999
    }

    fn default_value(&self, view: &StatusView<'_>) -> i16 {
        adj_dex_ta(view.stat_ind(Stat::Dex))
    }

    fn race_bonus(&self, view: &StatusView<'_>) -> i16 {
        match view.player.race {
            PlayerRace::Golem | PlayerRace::Android => 10 + view.player.lev as i16 * 2 / 5,
            _ => 0,
        }
    }

    /// Unarmoured martial artists harden where they wear nothing.
    fn class_bonus(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        if !matches!(p.class, PlayerClass::Monk | PlayerClass::ForceTrainer) || heavy_armor(p) {
            return 0;
        }
        let lev = p.lev as i16;
        let bare = |slot| p.equipment.is_empty(slot);
        let mut bonus = 0;
        if bare(EquipSlot::Body) {
            bonus += lev * 3 / 2;
        }
        if bare(EquipSlot::Outer) && lev > 15 {
            bonus += (lev - 13) / 3;
        }
        if bare(EquipSlot::SubHand) && lev > 10 {
            bonus += (lev - 8) / 3;
        }
        if bare(EquipSlot::Head) && lev > 4 {
            bonus += (lev - 2) / 3;
        }
        if bare(EquipSlot::Arms) {
            bonus += lev / 2;
        }
        if bare(EquipSlot::Feet) {
            bonus += lev / 3;
        }
        bonus
    }

    fn equipments_bonus(&self, view: &StatusView<'_>) -> i16 {
        view.player
            .equipment
            .iter()
            .map(|(_, item)| item.to_a + low_ac_penalty(item.curse_flags))
            .sum()
    }

    fn time_effect_bonus(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        let timed = &p.timed;
        let mut bonus = 0;
        if timed.is_ult_res() || p.battle_form == BattleForm::Musou {
            bonus += 100;
        } else if timed.shield > 0 || timed.magicdef > 0 {
            bonus += 50;
        }
        if timed.blessed > 0 {
            bonus += 5;
        }
        if p.is_shero() {
            bonus -= 10;
        }
        if timed.is_hexing(HexSpells::ICE_ARMOR) {
            bonus += 30;
        }
        bonus
    }

    fn battleform_bonus(&self, view: &StatusView<'_>) -> i16 {
        let lev = view.player.lev as i16;
        match view.player.battle_form {
            BattleForm::Genbu => lev * lev / 50,
            BattleForm::Byakko => -40,
            BattleForm::Seiryu | BattleForm::Koukijin => -50,
            _ => 0,
        }
    }

    fn mutation_bonus(&self, view: &StatusView<'_>) -> i16 {
        [(Mutation::WartSkin, 5), (Mutation::Scales, 10), (Mutation::IronSkin, 25)]
            .into_iter()
            .filter(|&(m, _)| view.has_mutation(m))
            .map(|(_, v)| v)
            .sum()
    }
}
