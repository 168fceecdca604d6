//! Numeric status pipeline (PlayerStatusBase)
//!
//! Every numeric attribute runs the same contribution steps in the same
//! order: default, race, class, personality, equipment, temporary effects,
//! battle form, mutations, then riding, carried weight and action. An
//! exception hook gets the raw sum last, and the result is clamped to the
//! resolver's bounds.
//!
//! Each step is a hook with a zero default, so a resolver only implements
//! the steps that matter to it.

use crate::flags::{CauseSet, TraitFlag};

use super::StatusView;

pub trait StatusResolver {
    /// The pval trait items use to modify this value, if any.
    fn tr_flag(&self) -> Option<TraitFlag> {
        None
    }

    fn min_value(&self) -> i16;
    fn max_value(&self) -> i16;

    fn default_value(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    fn race_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    fn class_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    fn personality_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    /// Sum of the pval of every worn item carrying [`tr_flag`](Self::tr_flag).
    fn equipments_bonus(&self, view: &StatusView<'_>) -> i16 {
        let Some(flag) = self.tr_flag() else {
            return 0;
        };
        view.equipment_flags()
            .filter(|(_, _, flags)| flags.has(flag))
            .map(|(_, item, _)| item.pval)
            .sum()
    }

    fn time_effect_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    fn battleform_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    fn mutation_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    fn riding_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    fn inventory_weight_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    fn action_bonus(&self, _view: &StatusView<'_>) -> i16 {
        0
    }

    /// Last word on the summed value, before clamping.
    fn set_exception_value(&self, _view: &StatusView<'_>, value: i32) -> i32 {
        value
    }

    /// Equipment slots whose contribution satisfies `pred`.
    fn equipments_flags(&self, view: &StatusView<'_>, pred: &dyn Fn(i16) -> bool) -> CauseSet {
        let Some(flag) = self.tr_flag() else {
            return CauseSet::NONE;
        };
        view.equipment_flags()
            .filter(|(_, item, flags)| flags.has(flag) && pred(item.pval))
            .fold(CauseSet::NONE, |acc, (slot, _, _)| acc | CauseSet::from_equipment_slot(slot))
    }

    /// Last word on the cause set, mirroring [`set_exception_value`](Self::set_exception_value).
    fn exception_flags(&self, _view: &StatusView<'_>, flags: CauseSet) -> CauseSet {
        flags
    }

    /// Run the pipeline.
    fn get_value(&self, view: &StatusView<'_>) -> i16 {
        let steps = [
            self.default_value(view),
            self.race_bonus(view),
            self.class_bonus(view),
            self.personality_bonus(view),
            self.equipments_bonus(view),
            self.time_effect_bonus(view),
            self.battleform_bonus(view),
            self.mutation_bonus(view),
            self.riding_bonus(view),
            self.inventory_weight_bonus(view),
            self.action_bonus(view),
        ];
        let sum: i32 = steps.iter().map(|&v| i32::from(v)).sum();
        let value = self.set_exception_value(view, sum);
        value.clamp(i32::from(self.min_value()), i32::from(self.max_value())) as i16
    }

    /// Causes whose step contribution satisfies `pred`.
    fn flags_where(&self, view: &StatusView<'_>, pred: &dyn Fn(i16) -> bool) -> CauseSet {
        let steps = [
            (CauseSet::RACE, self.race_bonus(view)),
            (CauseSet::CLASS, self.class_bonus(view)),
            (CauseSet::PERSONALITY, self.personality_bonus(view)),
            (CauseSet::MAGIC_TIME_EFFECT, self.time_effect_bonus(view)),
            (CauseSet::BATTLE_FORM, self.battleform_bonus(view)),
            (CauseSet::MUTATION, self.mutation_bonus(view)),
            (CauseSet::RIDING, self.riding_bonus(view)),
            (CauseSet::INVEN_PACK, self.inventory_weight_bonus(view)),
            (CauseSet::ACTION, self.action_bonus(view)),
        ];
        let flags = steps
            .into_iter()
            .filter(|&(_, v)| pred(v))
            .fold(self.equipments_flags(view, pred), |acc, (cause, _)| acc | cause);
        self.exception_flags(view, flags)
    }

    /// Every cause that moves the value either way.
    fn get_all_flags(&self, view: &StatusView<'_>) -> CauseSet {
        self.flags_where(view, &|v| v != 0)
    }

    fn get_good_flags(&self, view: &StatusView<'_>) -> CauseSet {
        self.flags_where(view, &|v| v > 0)
    }

    fn get_bad_flags(&self, view: &StatusView<'_>) -> CauseSet {
        self.flags_where(view, &|v| v < 0)
    }
}
