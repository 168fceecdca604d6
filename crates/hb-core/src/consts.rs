//! Core game constants
//!
//! Speed, level, stat and skill-experience limits shared by the resolvers.

/// Speed of a normal-speed creature
pub const STANDARD_SPEED: i16 = 110;

/// Maximum player level
pub const PY_MAX_LEVEL: i32 = 50;

/// Number of basic stats (STR, INT, WIS, DEX, CON, CHR)
pub const A_MAX: usize = 6;

/// Number of equipment slots
pub const EQUIP_SLOTS: usize = 12;

/// Number of virtue slots a character holds
pub const VIRTUE_SLOTS: usize = 8;

/// Virtue value bound
pub const VIRTUE_MAX: i16 = 125;

/// Stat values above 18 use the 18/xx notation (18/10 == 28)
pub const STAT_18: i16 = 18;

/// Highest raw stat value (18/220)
pub const STAT_MAX: i16 = 18 + 220;

/// Number of stat-index buckets in the adjustment tables
pub const STAT_INDEX_COUNT: usize = 38;

/// Food counter at which the player is gorged
pub const PY_FOOD_MAX: i32 = 15000;

/// Food counter of a well-fed character
pub const PY_FOOD_FULL: i32 = 10000;

/// Riding skill experience thresholds
pub const RIDING_EXP_UNSKILLED: i32 = 0;
pub const RIDING_EXP_BEGINNER: i32 = 500;
pub const RIDING_EXP_SKILLED: i32 = 2000;
pub const RIDING_EXP_EXPERT: i32 = 5000;
pub const RIDING_EXP_MASTER: i32 = 8000;

/// Light-speed haste, clamped away by the speed bounds
pub const LIGHTSPEED_BONUS: i16 = 999;

/// Fixed-point scale of the expected-damage tooling
pub const EXPECT_SCALE: i32 = 100;

/// Side count of the melee critical die
pub const CRITICAL_DIE: i32 = 650;
