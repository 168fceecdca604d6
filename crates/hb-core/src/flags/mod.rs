//! Capability flag model
//!
//! Trait flags name what a character can do; cause sets say why.

mod cause;
mod curse;
mod trait_flag;

pub use cause::CauseSet;
pub use curse::CurseFlags;
pub use trait_flag::{Element, TraitFlag, TraitSet};
