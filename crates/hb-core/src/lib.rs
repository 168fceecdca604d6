//! hb-core: character status engine for a Hengband-style roguelike
//!
//! Works out what a character can do and why: trait flags with their
//! causes, derived numbers (stats, speed, stealth, armour, to-hit, skills),
//! damage rates against the character, and critical-hit and expected
//! damage numbers for its attacks.
//!
//! The crate performs no I/O. Callers hand in the character, the item
//! catalog and the engine configuration and get plain values back.

pub mod combat;
pub mod config;
pub mod error;
pub mod flags;
pub mod monster;
pub mod object;
pub mod player;
pub mod status;

mod consts;
mod rng;

pub use config::EngineConfig;
pub use consts::*;
pub use error::{CatalogError, ConfigError};
pub use rng::{GameRng, RateMode};
pub use status::{StatusView, update_bonuses};
