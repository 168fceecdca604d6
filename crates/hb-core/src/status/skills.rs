//! Skill values (calc_skills)
//!
//! Race, class and personality tables, class growth per ten levels, the
//! stat adjustment tables and a few item and mutation extras.

use crate::flags::TraitFlag;
use crate::player::{Mutation, Skills, Stat, adj_dex_dis, adj_int_dev, adj_wis_sav};

use super::StatusView;

pub fn calc_skills(view: &StatusView<'_>) -> Skills {
    let p = view.player;
    let race = p.race.info().skills;
    let class = p.class.info();
    let pers = p.personality.info().skills;
    let (c, x) = (class.skills, class.x_skills);
    let lev = p.lev;

    let table = |r: i16, c: i16, a: i16, x: i16| i32::from(r) + i32::from(c) + i32::from(a) + i32::from(x) * lev / 10;

    let mut skills = Skills {
        disarm: table(race.dis, c.dis, pers.dis, x.dis),
        device: table(race.dev, c.dev, pers.dev, x.dev),
        save: table(race.sav, c.sav, pers.sav, x.sav),
        stealth: i32::from(p.derived.stealth),
        search: table(race.srh, c.srh, pers.srh, x.srh),
        perception: table(race.fos, c.fos, pers.fos, x.fos),
        melee: table(race.thn, c.thn, pers.thn, x.thn),
        bows: table(race.thb, c.thb, pers.thb, x.thb),
    };

    skills.disarm += i32::from(adj_dex_dis(view.stat_ind(Stat::Dex)));
    skills.device += i32::from(adj_int_dev(view.stat_ind(Stat::Int)));
    skills.save += i32::from(adj_wis_sav(view.stat_ind(Stat::Wis)));

    let searching: i32 = view
        .equipment_flags()
        .filter(|(_, _, flags)| flags.has(TraitFlag::Searching))
        .map(|(_, item, _)| i32::from(item.pval) * 5)
        .sum();
    skills.search += searching;
    skills.perception += searching;

    if view.has_mutation(Mutation::MagicRes) {
        skills.save += 15 + lev / 5;
    }
    skills
}
