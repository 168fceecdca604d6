//! The six basic stats (PlayerBasicStatistics)
//!
//! The pipeline computes the total stat modifier. The used and top values
//! apply that modifier to the current and maximum raw stat.

use crate::flags::TraitFlag;
use crate::player::{HexSpells, Mutation, Stat, modify_stat_value};

use super::StatusView;
use super::resolver::StatusResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicStat(pub Stat);

impl BasicStat {
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Total modifier from every source.
    pub fn stat_add(&self, view: &StatusView<'_>) -> i16 {
        self.get_value(view)
    }

    /// The value in play: the current raw stat with its modifier applied.
    pub fn stat_use(&self, view: &StatusView<'_>) -> i16 {
        let p = view.player;
        let mut value = modify_stat_value(p.stats.cur[self.index()], self.stat_add(view));
        if self.0 == Stat::Chr && view.has_mutation(Mutation::IllNorm) {
            value = value.max(8 + 2 * p.lev as i16);
        }
        value
    }

    /// The best the stat could be once drains are restored.
    pub fn stat_top(&self, view: &StatusView<'_>) -> i16 {
        modify_stat_value(view.player.stats.max[self.index()], self.stat_add(view))
    }
}

impl StatusResolver for BasicStat {
    fn tr_flag(&self) -> Option<TraitFlag> {
        Some(self.0.trait_flag())
    }

    fn min_value(&self) -> i16 {
        -99
    }

    fn max_value(&self) -> i16 {
        99
    }

    fn race_bonus(&self, view: &StatusView<'_>) -> i16 {
        let race = view.player.race;
        race.info().r_adj[self.index()] + race.level_stat_bonus(self.index(), view.player.lev)
    }

    fn class_bonus(&self, view: &StatusView<'_>) -> i16 {
        view.player.class.info().c_adj[self.index()]
    }

    fn personality_bonus(&self, view: &StatusView<'_>) -> i16 {
        view.player.personality.info().a_adj[self.index()]
    }

    fn time_effect_bonus(&self, view: &StatusView<'_>) -> i16 {
        let timed = &view.player.timed;
        let mut bonus = 0;
        if timed.tsuyoshi > 0 && matches!(self.0, Stat::Str | Stat::Con) {
            bonus += 4;
        }
        if timed.is_hexing(HexSpells::XTRA_MIGHT) && self.0 == Stat::Str {
            bonus += 4;
        }
        if timed.is_hexing(HexSpells::BUILDING) && matches!(self.0, Stat::Str | Stat::Dex | Stat::Con) {
            bonus += 4;
        }
        bonus
    }

    fn battleform_bonus(&self, view: &StatusView<'_>) -> i16 {
        view.player.battle_form.stat_bonus()[self.index()]
    }

    fn mutation_bonus(&self, view: &StatusView<'_>) -> i16 {
        if view.config.mutations_enabled {
            view.player.mutations.stat_bonus(self.index())
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::consts::{A_MAX, STAT_18};
    use crate::flags::CauseSet;
    use crate::object::Catalog;
    use crate::object::catalog::{egos, kinds};
    use crate::player::{BattleForm, EquipSlot, Personality, Player, PlayerClass, PlayerRace};

    fn human_warrior() -> Player {
        Player::new(PlayerRace::Human, PlayerClass::Warrior, Personality::Ordinary, [14; A_MAX])
    }

    #[test]
    fn test_table_modifiers() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let p = Player::new(PlayerRace::HalfTroll, PlayerClass::Warrior, Personality::Mighty, [14; A_MAX]);
        let view = StatusView::new(&p, &catalog, &config);
        // 4 race, 4 class, 2 personality
        assert_eq!(BasicStat(Stat::Str).stat_add(&view), 10);
        assert_eq!(BasicStat(Stat::Str).stat_use(&view), STAT_18 + 60);
        assert_eq!(
            BasicStat(Stat::Str).get_good_flags(&view),
            CauseSet::RACE | CauseSet::CLASS | CauseSet::PERSONALITY
        );
    }

    #[test]
    fn test_equipment_pval_and_drain() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = human_warrior();
        p.equip(
            EquipSlot::MainHand,
            catalog.make_ego_item(kinds::LONG_SWORD, egos::WESTERNESSE, 2).unwrap(),
        );
        p.stats.drain(Stat::Dex);
        let view = StatusView::new(&p, &catalog, &config);
        let dex = BasicStat(Stat::Dex);
        assert_eq!(dex.stat_add(&view), 4);
        assert!(dex.stat_use(&view) < dex.stat_top(&view));
        assert!(dex.get_all_flags(&view).contains(CauseSet::MAIN_HAND));
    }

    #[test]
    fn test_timed_and_form_bonuses() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = human_warrior();
        p.timed.tsuyoshi = 10;
        p.battle_form = BattleForm::Byakko;
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(BasicStat(Stat::Str).stat_add(&view), 4 + 4 + 2);
        assert_eq!(BasicStat(Stat::Con).stat_add(&view), 2 + 4 - 3);
    }

    #[test]
    fn test_illusory_normal_charisma_floor() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = Player::new(PlayerRace::HalfTroll, PlayerClass::Warrior, Personality::Ordinary, [3; A_MAX]);
        p.lev = 20;
        p.mutations.insert(Mutation::IllNorm);
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(BasicStat(Stat::Chr).stat_use(&view), 48);
    }

    #[test]
    fn test_mutation_switch() {
        let catalog = Catalog::standard();
        let config = EngineConfig {
            mutations_enabled: false,
            ..EngineConfig::default()
        };
        let mut p = human_warrior();
        p.mutations.insert(Mutation::HyperStr);
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(BasicStat(Stat::Str).mutation_bonus(&view), 0);
    }
}
