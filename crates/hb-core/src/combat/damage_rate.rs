//! Damage rates against the player (calc_*_damage_rate)
//!
//! Every rate is a percentage of the incoming damage. Zero means immune;
//! more than 100 means vulnerable.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::flags::{CauseSet, Element, TraitFlag};
use crate::rng::{GameRng, RateMode};
use crate::status::StatusView;

/// What the incoming damage is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum DamageKind {
    Acid,
    Elec,
    Fire,
    Cold,
    Poison,
    Light,
    Dark,
    Shards,
    Sound,
    Confusion,
    Chaos,
    Nether,
    Nexus,
    Disenchant,
    Time,
    Water,
    HolyFire,
    HellFire,
    Gravity,
    Void,
    Abyss,
}

impl DamageKind {
    /// The base element, for the four elemental kinds.
    pub const fn element(self) -> Option<Element> {
        match self {
            DamageKind::Acid => Some(Element::Acid),
            DamageKind::Elec => Some(Element::Elec),
            DamageKind::Fire => Some(Element::Fire),
            DamageKind::Cold => Some(Element::Cold),
            _ => None,
        }
    }
}

/// Percentage of `kind` damage that reaches the player.
pub fn damage_rate(view: &StatusView<'_>, kind: DamageKind, mode: RateMode, rng: &mut GameRng) -> i32 {
    if let Some(element) = kind.element() {
        return element_rate(view, element);
    }

    let timed = &view.player.timed;
    let levitating = view.has_levitation().is_present();
    let rate = match kind {
        DamageKind::Poison => {
            let mut per = 100;
            if view.get_player_flags(TraitFlag::ResPois).is_present() {
                per = (per + 2) / 3;
            }
            if view.is_oppose_pois() {
                per = (per + 2) / 3;
            }
            per
        }
        DamageKind::Light => {
            // Wraith form doubles on its own below
            let causes = view.has_vuln_lite() - CauseSet::MAGIC_TIME_EFFECT;
            let mut per = vulnerability_rate(100, causes);
            if view.get_player_flags(TraitFlag::ResLite).is_present() {
                per = per * 4 / rng.rate_roll(4, 7, mode);
            }
            if timed.is_wraith() {
                per *= 2;
            }
            per
        }
        DamageKind::Dark => {
            if view.has_immune_dark().is_present() {
                0
            } else {
                resisted_status(view.has_resist_dark(), 400, mode, rng)
            }
        }
        DamageKind::Shards => status_rate(view, TraitFlag::ResShards, 600, mode, rng),
        DamageKind::Sound => status_rate(view, TraitFlag::ResSound, 500, mode, rng),
        DamageKind::Confusion => status_rate(view, TraitFlag::ResConf, 500, mode, rng),
        DamageKind::Chaos => status_rate(view, TraitFlag::ResChaos, 600, mode, rng),
        DamageKind::Disenchant => status_rate(view, TraitFlag::ResDisen, 600, mode, rng),
        DamageKind::Nexus => status_rate(view, TraitFlag::ResNexus, 600, mode, rng),
        DamageKind::Time => status_rate(view, TraitFlag::ResTime, 400, mode, rng),
        DamageKind::Water => status_rate(view, TraitFlag::ResWater, 400, mode, rng),
        DamageKind::Nether => {
            let numerator = if view.absorbs_nether() { 100 } else { 600 };
            resisted_status(view.has_resist_neth(), numerator, mode, rng)
        }
        DamageKind::HolyFire => {
            let align = view.player.derived.align;
            if align > 10 {
                50
            } else if align < -10 {
                200
            } else {
                100
            }
        }
        DamageKind::HellFire => {
            if view.player.derived.align > 10 { 200 } else { 100 }
        }
        DamageKind::Gravity => {
            if levitating { 100 * 2 / 3 } else { 100 }
        }
        DamageKind::Void => {
            let mut per = 100;
            if levitating {
                per = per * 2 / 3;
            }
            if view.has_pass_wall().is_present() {
                per = per * 2 / 3;
            }
            per
        }
        DamageKind::Abyss => {
            let mut per = 100;
            if levitating {
                per = per * 2 / 3;
            }
            if view.get_player_flags(TraitFlag::NoTele).is_present() {
                per = per * 2 / 3;
            }
            per
        }
        DamageKind::Acid | DamageKind::Elec | DamageKind::Fire | DamageKind::Cold => 100,
    };
    rate.max(0)
}

/// Immunity first, then every vulnerability cause, then resistance and
/// the temporary opposition, each a third off.
fn element_rate(view: &StatusView<'_>, element: Element) -> i32 {
    if view.has_immune(element).is_present() {
        return 0;
    }
    let mut per = vulnerability_rate(100, view.has_vuln(element));
    if view.has_resist(element).is_present() {
        per = (per + 2) / 3;
    }
    if view.is_oppose(element) {
        per = (per + 2) / 3;
    }
    per
}

/// Compound one step per cause bit, lowest bit first. A mutation doubles;
/// anything else adds a third.
fn vulnerability_rate(mut per: i32, causes: CauseSet) -> i32 {
    for cause in causes.causes() {
        if cause == CauseSet::MUTATION {
            per *= 2;
        } else {
            per += per / 3;
        }
    }
    per
}

fn status_rate(view: &StatusView<'_>, flag: TraitFlag, numerator: i32, mode: RateMode, rng: &mut GameRng) -> i32 {
    resisted_status(view.get_player_flags(flag), numerator, mode, rng)
}

fn resisted_status(resist: CauseSet, numerator: i32, mode: RateMode, rng: &mut GameRng) -> i32 {
    if resist.is_present() {
        numerator / rng.rate_roll(4, 7, mode)
    } else {
        100
    }
}
