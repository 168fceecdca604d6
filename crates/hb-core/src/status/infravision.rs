//! Infravision (PlayerInfravision)

use crate::flags::TraitFlag;
use crate::player::Mutation;

use super::StatusView;
use super::resolver::StatusResolver;

#[derive(Debug, Clone, Copy, Default)]
pub struct Infravision;

impl StatusResolver for Infravision {
    fn tr_flag(&self) -> Option<TraitFlag> {
        Some(TraitFlag::Infra)
    }

    fn min_value(&self) -> i16 {
        0
    }

    fn max_value(&self) -> i16 {
        99
    }

    fn race_bonus(&self, view: &StatusView<'_>) -> i16 {
        view.player.race.info().infra
    }

    fn time_effect_bonus(&self, view: &StatusView<'_>) -> i16 {
        if view.player.timed.tim_infra > 0 { 3 } else { 0 }
    }

    fn mutation_bonus(&self, view: &StatusView<'_>) -> i16 {
        if view.has_mutation(Mutation::Infravis) { 3 } else { 0 }
    }
}
