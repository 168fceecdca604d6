//! Object system
//!
//! Item kinds and their catalog, item instances, and trait-flag extraction.

pub mod catalog;
mod flags;
mod item;
mod kind;

pub use catalog::Catalog;
pub use flags::{light_radius, object_flags, object_flags_known};
pub use item::{IdentState, Item};
pub use kind::{Artifact, ArtifactId, BaseItem, BaseItemId, Ego, EgoId, ItemTval};
