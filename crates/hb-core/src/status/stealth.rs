//! Stealth (PlayerStealth)

use crate::flags::TraitFlag;
use crate::player::{Mutation, Song};

use super::StatusView;
use super::resolver::StatusResolver;

#[derive(Debug, Clone, Copy, Default)]
pub struct Stealth;

impl StatusResolver for Stealth {
    fn tr_flag(&self) -> Option<TraitFlag> {
        Some(TraitFlag::Stealth)
    }

    fn min_value(&self) -> i16 {
        0
    }

    fn max_value(&self) -> i16 {
        30
    }

    fn race_bonus(&self, view: &StatusView<'_>) -> i16 {
        view.player.race.info().skills.stl
    }

    fn class_bonus(&self, view: &StatusView<'_>) -> i16 {
        let info = view.player.class.info();
        info.skills.stl + info.x_skills.stl * view.player.lev as i16 / 10
    }

    fn personality_bonus(&self, view: &StatusView<'_>) -> i16 {
        view.player.personality.info().skills.stl
    }

    fn time_effect_bonus(&self, view: &StatusView<'_>) -> i16 {
        let timed = &view.player.timed;
        if timed.tim_stealth > 0 || timed.song == Some(Song::Stealth) {
            99
        } else {
            0
        }
    }

    fn mutation_bonus(&self, view: &StatusView<'_>) -> i16 {
        let mut bonus = 0;
        if view.has_mutation(Mutation::XtraNois) {
            bonus -= 3;
        }
        if view.has_mutation(Mutation::Motion) {
            bonus += 1;
        }
        bonus
    }

    /// An aggravating Shadow-Fairy loses three points, or half, whichever
    /// hurts more.
    fn set_exception_value(&self, view: &StatusView<'_>, value: i32) -> i32 {
        if view.is_aggravated_s_fairy() {
            (value - 3).min((value + 2) / 2)
        } else {
            value
        }
    }
}
