//! The status pass (update_bonuses)
//!
//! Recomputes every derived number in dependency order. Stats go first
//! because carrying capacity, armour and to-hit read their table indices;
//! skills go last because they read the stealth just written.

use crate::config::EngineConfig;
use crate::object::Catalog;
use crate::player::{EquipSlot, Player, Stat, StatusState, UpdateFlags, stat_index};

use super::StatusView;
use super::alignment::calc_alignment;
use super::armour::{ArmourBonus, calc_base_ac};
use super::basic_stat::BasicStat;
use super::burden::{calc_weight_limit, heavy_armor};
use super::infravision::Infravision;
use super::light::calc_light_radius;
use super::melee::{DamageBonus, HitBonus};
use super::resolver::StatusResolver;
use super::skills::calc_skills;
use super::speed::Speed;
use super::stealth::Stealth;

/// Bring `player.derived` up to date and report the follow-up work the
/// caller owes: hit points, mana, spell list or light redraws.
pub fn update_bonuses(player: &mut Player, catalog: &Catalog, config: &EngineConfig) -> UpdateFlags {
    let mut update = UpdateFlags::empty();
    let first_pass = player.state == StatusState::Uninitialized;

    player.derived.curses = StatusView::new(player, catalog, config).curse_flags();

    let spell_stat = player.class.info().spell_stat;
    for stat in Stat::ALL {
        let (add, used, top) = {
            let view = StatusView::new(player, catalog, config);
            let resolver = BasicStat(stat);
            (resolver.stat_add(&view), resolver.stat_use(&view), resolver.stat_top(&view))
        };
        let i = stat.index();
        let ind = stat_index(used);
        let derived = &mut player.derived;
        derived.stat_add[i] = add;
        derived.stat_use[i] = used;
        derived.stat_top[i] = top;
        if first_pass || derived.stat_ind[i] != ind {
            derived.stat_ind[i] = ind;
            if stat == Stat::Con {
                update |= UpdateFlags::HP;
            }
            if spell_stat == Some(stat) {
                update |= UpdateFlags::MANA | UpdateFlags::SPELLS;
            }
        }
    }

    let old_lite = player.derived.cur_lite;
    let mut derived = player.derived.clone();
    {
        let view = StatusView::new(player, catalog, config);
        derived.heavy_armor = heavy_armor(player);
        derived.weight = player.inventory_weight();
        derived.weight_limit = calc_weight_limit(&view);
        derived.speed = Speed.get_value(&view);
        derived.stealth = Stealth.get_value(&view);
        derived.infra = Infravision.get_value(&view);
        derived.cur_lite = calc_light_radius(&view);
        derived.ac = calc_base_ac(&view);
        derived.to_a = ArmourBonus.get_value(&view);
        for (i, hand) in [EquipSlot::MainHand, EquipSlot::SubHand].into_iter().enumerate() {
            derived.to_h[i] = HitBonus::new(hand).get_value(&view);
            derived.to_d[i] = DamageBonus::new(hand).get_value(&view);
        }
        derived.to_h_b = HitBonus::new(EquipSlot::Bow).get_value(&view);
    }
    player.derived = derived;

    if first_pass || player.derived.cur_lite != old_lite {
        update |= UpdateFlags::TORCH;
    }

    let (skills, align) = {
        let view = StatusView::new(player, catalog, config);
        (calc_skills(&view), calc_alignment(&view))
    };
    player.derived.skills = skills;
    player.derived.align = align;
    player.state = StatusState::Computed;

    tracing::debug!(
        speed = player.derived.speed,
        ac = player.derived.ac + player.derived.to_a,
        stealth = player.derived.stealth,
        update = ?update,
        "status recomputed"
    );
    update
}
