//! Combat numbers
//!
//! How much elemental and status damage reaches the player, critical hits
//! for melee and missiles, slay and brand multipliers, and the expected
//! blow damage that weapon comparisons show.

mod critical;
mod damage_rate;
mod expect;
mod slay;

pub use critical::{
    BattleSound, Blow, CriticalHit, CriticalTier, SpecialAttack, Strike, StrikeContext, apply_critical_norm_damage,
    critical_attack, critical_norm, critical_shot, fatal_spot, is_poison_needle, ninja_critical,
};
pub use damage_rate::{DamageKind, damage_rate};
pub use expect::{calc_expect_crit, calc_expect_dice, calc_slaydam, expected_blow_damage, vorpal_ratio};
pub use slay::{NO_SLAY, best_multiplier, brand_multiplier, slay_multiplier};
