//! Critical hits (critical_norm / critical_shot / critical_attack)
//!
//! Melee criticals roll against the blow's power and land in one of five
//! tiers. Shots have their own three tiers. Poison needles and the
//! pressure-point technique skip all of that and go for a fatal spot, and
//! Ninja have a separate path built around backstabs.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::CRITICAL_DIE;
use crate::flags::TraitFlag;
use crate::monster::Monster;
use crate::object::catalog::kinds;
use crate::object::{Item, ItemTval, object_flags};
use crate::player::{EquipSlot, PlayerClass};
use crate::rng::GameRng;
use crate::status::StatusView;

/// Sword-technique modes that change how a blow crits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum SpecialAttack {
    #[default]
    None,
    /// Always crits and rolls the die twice
    Majin,
    /// Triple strike, same crit rules as Majin
    Sandan,
    /// Pressure point: a fatal-spot attempt instead of damage
    Kyusho,
}

impl SpecialAttack {
    const fn forces_critical(self) -> bool {
        matches!(self, SpecialAttack::Majin | SpecialAttack::Sandan)
    }
}

/// Sound cue played with a critical message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum BattleSound {
    GoodHit,
    GreatHit,
    SuperbHit,
    StarGreatHit,
    StarSuperbHit,
}

/// How hard a critical landed, weakest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum CriticalTier {
    Good,
    Great,
    Superb,
    StarGreat,
    StarSuperb,
}

impl CriticalTier {
    /// Key of the flavour message shown for this tier.
    pub const fn message_key(self) -> &'static str {
        match self {
            CriticalTier::Good => "critical.good_hit",
            CriticalTier::Great => "critical.great_hit",
            CriticalTier::Superb => "critical.superb_hit",
            CriticalTier::StarGreat => "critical.star_great_hit",
            CriticalTier::StarSuperb => "critical.star_superb_hit",
        }
    }

    pub const fn sound(self) -> BattleSound {
        match self {
            CriticalTier::Good => BattleSound::GoodHit,
            CriticalTier::Great => BattleSound::GreatHit,
            CriticalTier::Superb => BattleSound::SuperbHit,
            CriticalTier::StarGreat => BattleSound::StarGreatHit,
            CriticalTier::StarSuperb => BattleSound::StarSuperbHit,
        }
    }
}

/// Damage after a critical roll. `tier` is `None` when nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriticalHit {
    pub damage: i32,
    pub tier: Option<CriticalTier>,
}

impl CriticalHit {
    const fn plain(damage: i32) -> Self {
        Self { damage, tier: None }
    }

    pub fn message_key(&self) -> Option<&'static str> {
        self.tier.map(CriticalTier::message_key)
    }

    pub fn sound(&self) -> Option<BattleSound> {
        self.tier.map(CriticalTier::sound)
    }
}

/// Tier and damage for a critical roll of `k`. `mult` scales the flat
/// part so fixed-point callers stay consistent.
pub fn apply_critical_norm_damage(k: i32, dam: i32, mult: i32) -> (i32, CriticalTier) {
    if k < 400 {
        (2 * dam + 5 * mult, CriticalTier::Good)
    } else if k < 700 {
        (2 * dam + 10 * mult, CriticalTier::Great)
    } else if k < 900 {
        (3 * dam + 15 * mult, CriticalTier::Superb)
    } else if k < 1300 {
        (3 * dam + 20 * mult, CriticalTier::StarGreat)
    } else {
        (7 * dam / 2 + 25 * mult, CriticalTier::StarSuperb)
    }
}

/// The inputs a melee critical reads from the weapon and its wielder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blow {
    /// Weapon weight in tenths of a pound
    pub weight: i32,
    /// The weapon's own to-hit
    pub plus: i32,
    /// The wielder's to-hit for this hand
    pub meichuu: i32,
    pub impact: bool,
    pub mode: SpecialAttack,
}

impl Blow {
    /// Blow with the weapon in `hand`, or `None` for an empty hand.
    pub fn with_weapon(view: &StatusView<'_>, hand: EquipSlot) -> Option<Blow> {
        let item = view.player.equipment.weapon(hand)?;
        Some(Blow {
            weight: item.weight,
            plus: item.to_h as i32,
            meichuu: view.player.derived.to_h[hand.index()] as i32,
            impact: object_flags(item, view.catalog).has(TraitFlag::Impact),
            mode: SpecialAttack::None,
        })
    }

    pub fn with_mode(mut self, mode: SpecialAttack) -> Self {
        self.mode = mode;
        self
    }

    /// Trigger chance, out of `critical_die_size`.
    pub fn power(&self, view: &StatusView<'_>) -> i32 {
        self.weight + self.meichuu * 3 + self.plus * 5 + view.player.derived.skills.melee
    }

    /// Sides of the trigger die.
    pub fn critical_die_size(&self, view: &StatusView<'_>) -> i32 {
        let pow = if view.player.class == PlayerClass::Ninja { 4444 } else { 5000 };
        if self.impact { pow / 2 } else { pow }
    }

    fn rolls_twice(&self) -> bool {
        self.impact || self.mode.forces_critical()
    }
}

/// Roll a melee critical for a blow that hit for `dam`.
pub fn critical_norm(view: &StatusView<'_>, blow: &Blow, dam: i32, rng: &mut GameRng) -> CriticalHit {
    let triggered = rng.randint1(blow.critical_die_size(view)) <= blow.power(view) || blow.mode.forces_critical();
    if !triggered {
        return CriticalHit::plain(dam);
    }

    let mut k = blow.weight + rng.randint1(CRITICAL_DIE);
    if blow.rolls_twice() {
        k += rng.randint1(CRITICAL_DIE);
    }
    let (damage, tier) = apply_critical_norm_damage(k, dam, 1);
    tracing::debug!(k, %tier, damage, "melee critical");
    CriticalHit {
        damage,
        tier: Some(tier),
    }
}

/// Roll a critical for `ammo` fired from a bow with `plus_bow` to-hit.
pub fn critical_shot(
    view: &StatusView<'_>,
    ammo: &Item,
    plus_bow: i32,
    dam: i32,
    rng: &mut GameRng,
) -> CriticalHit {
    let p = view.player;
    let mut power = p.derived.skills.bows + (p.derived.to_h_b as i32 + ammo.to_h as i32 + plus_bow) * 3;
    if p.class == PlayerClass::Sniper && ammo.tval == ItemTval::Bolt {
        power *= 2;
    }
    if rng.randint1(10000) > power {
        return CriticalHit::plain(dam);
    }

    let k = ammo.weight * rng.randint1(500);
    let (damage, tier) = if k < 900 {
        (dam + dam / 2, CriticalTier::Good)
    } else if k < 1350 {
        (dam * 2, CriticalTier::Great)
    } else {
        (dam * 3, CriticalTier::Superb)
    };
    tracing::debug!(k, %tier, damage, "missile critical");
    CriticalHit {
        damage,
        tier: Some(tier),
    }
}

/// Circumstances of a blow that the Ninja path reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrikeContext {
    pub mode: SpecialAttack,
    /// Target was asleep
    pub backstab: bool,
    /// Target was fleeing
    pub stab_fleeing: bool,
    /// Target had not noticed the attacker
    pub surprise_attack: bool,
    /// Blows per round, both hands together
    pub blows: i32,
}

/// Damage and life drain of one blow, with any extra message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub damage: i32,
    pub drain: i32,
    pub message: Option<&'static str>,
}

impl Strike {
    pub const fn new(damage: i32, drain: i32) -> Self {
        Self {
            damage,
            drain,
            message: None,
        }
    }
}

/// Whether `item` is the poison needle, which only ever strikes for a
/// fatal spot.
pub fn is_poison_needle(item: &Item) -> bool {
    item.kind == kinds::POISON_NEEDLE
}

/// Record that the player has seen `target` shrug off an instant kill.
fn learn_instant_death_resistance(view: &StatusView<'_>, target: &mut Monster) {
    if view.config.monster_learning && !target.learned_no_instant_death {
        target.learned_no_instant_death = true;
        tracing::debug!(monster = %target.race.name, "learned instant-death resistance");
    }
}

/// Fatal-spot attempt. Success leaves the target one blow from death; any
/// other outcome deals a single point.
pub fn fatal_spot(view: &StatusView<'_>, target: &mut Monster, strike: Strike, rng: &mut GameRng) -> Strike {
    let odds = rng.randint1(target.level() / 7) + 5;
    let hit = rng.randint1(odds) == 1;
    if hit && !target.resists_instant_death() {
        tracing::debug!(monster = %target.race.name, hp = target.hp, "fatal spot");
        return Strike {
            damage: target.hp + 1,
            message: Some("critical.fatal_spot"),
            ..strike
        };
    }
    if hit {
        learn_instant_death_resistance(view, target);
    }
    Strike {
        damage: 1,
        ..strike
    }
}

/// The Ninja's critical, tried on blows struck from darkness.
pub fn ninja_critical(
    view: &StatusView<'_>,
    target: &mut Monster,
    ctx: &StrikeContext,
    mut strike: Strike,
    rng: &mut GameRng,
) -> Strike {
    let odds = if ctx.backstab {
        13
    } else if ctx.stab_fleeing || ctx.surprise_attack {
        15
    } else {
        27
    };
    if rng.one_in(odds) {
        strike.damage *= 5;
        strike.drain *= 2;
        strike.message = Some("critical.critically_injured");
        return strike;
    }

    let wounded = target.hp < target.maxhp / 2;
    let resists = target.resists_instant_death();
    let finisher = wounded && rng.one_in((ctx.blows + 1) * 10);
    let assassination =
        (rng.one_in(666) || ((ctx.backstab || ctx.surprise_attack) && rng.one_in(11))) && !resists;
    if !(finisher || assassination) {
        return strike;
    }

    if resists || !wounded {
        if resists {
            learn_instant_death_resistance(view, target);
        }
        strike.damage = (strike.damage * 5).max(target.hp / 2);
        strike.drain *= 2;
        strike.message = Some("critical.fatally_injured");
    } else {
        strike.damage = target.hp + 1;
        strike.message = Some("critical.fatal_spot");
    }
    tracing::debug!(monster = %target.race.name, damage = strike.damage, "ninja critical");
    strike
}

/// Post-hit special criticals for the weapon in `hand`.
pub fn critical_attack(
    view: &StatusView<'_>,
    hand: EquipSlot,
    ctx: &StrikeContext,
    target: &mut Monster,
    strike: Strike,
    rng: &mut GameRng,
) -> Strike {
    let weapon = view.player.equipment.weapon(hand);
    if weapon.is_some_and(is_poison_needle) || ctx.mode == SpecialAttack::Kyusho {
        return fatal_spot(view, target, strike, rng);
    }
    let p = view.player;
    if p.class == PlayerClass::Ninja && weapon.is_some() && (p.derived.cur_lite <= 0 || rng.one_in(7)) {
        return ninja_critical(view, target, ctx, strike, rng);
    }
    strike
}
