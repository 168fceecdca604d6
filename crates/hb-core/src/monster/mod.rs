//! Monster records seen by the status engine
//!
//! A ridden mount and the target of an attack. The dungeon subsystem owns
//! the real monster list and hands these over by value or reference.

mod race;

use serde::{Deserialize, Serialize};

pub use race::{MonsterFlags, MonsterKind, MonsterRace};

/// One monster instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub race: MonsterRace,
    pub hp: i32,
    pub maxhp: i32,
    /// Individual speed, the race speed plus birth variance
    pub mspeed: i16,
    /// Haste timer
    pub fast: i32,
    /// Slow timer
    pub slow: i32,
    /// Fear timer
    pub monfear: i32,
    /// Sleep counter
    pub csleep: i32,
    /// The player has seen a fatal-spot strike fail against this monster
    pub learned_no_instant_death: bool,
}

impl Monster {
    pub fn new(race: MonsterRace, maxhp: i32) -> Self {
        let mspeed = race.speed;
        Self {
            race,
            hp: maxhp,
            maxhp,
            mspeed,
            fast: 0,
            slow: 0,
            monfear: 0,
            csleep: 0,
            learned_no_instant_death: false,
        }
    }

    pub fn level(&self) -> i32 {
        self.race.level
    }

    pub fn is_fast(&self) -> bool {
        self.fast > 0
    }

    pub fn is_slow(&self) -> bool {
        self.slow > 0
    }

    pub fn is_fearful(&self) -> bool {
        self.monfear > 0
    }

    pub fn is_asleep(&self) -> bool {
        self.csleep > 0
    }

    pub fn can_fly(&self) -> bool {
        self.race.can_fly()
    }

    pub fn is_unique(&self) -> bool {
        self.race.is_unique()
    }

    /// Whether an instant-death strike can kill this monster outright.
    pub fn resists_instant_death(&self) -> bool {
        self.race.flags.intersects(MonsterFlags::UNIQUE | MonsterFlags::NO_INSTANT_DEATH)
    }
}
