//! Object flag extraction (object_flags / object_flags_known)

use super::{Catalog, Item};
use crate::flags::{TraitFlag, TraitSet};

/// Every trait an item grants: base kind, fixed artifact, ego and
/// instance flags. A fuel-burning light with no fuel left loses its
/// light-radius flags.
pub fn object_flags(item: &Item, catalog: &Catalog) -> TraitSet {
    let mut flags = TraitSet::new();
    if let Some(base) = catalog.base(item.kind) {
        flags |= base.flags;
    }
    if let Some(art) = item.artifact.and_then(|id| catalog.artifact(id)) {
        flags |= art.flags;
    }
    if let Some(ego) = item.ego.and_then(|id| catalog.ego(id)) {
        flags |= ego.flags;
    }
    flags |= item.art_flags;

    if flags.has(TraitFlag::LiteFuel) && item.fuel <= 0 {
        suppress_light(&mut flags);
    }
    flags
}

/// The traits the player can see on an item.
///
/// Unidentified items show only their kind's flags; an identified item adds
/// its ego, and only a fully identified item reveals artifact and instance
/// flags.
pub fn object_flags_known(item: &Item, catalog: &Catalog) -> TraitSet {
    if item.ident.is_fully_known() {
        return object_flags(item, catalog);
    }

    let mut flags = TraitSet::new();
    if let Some(base) = catalog.base(item.kind) {
        flags |= base.flags;
    }
    if item.ident.is_known() {
        if let Some(ego) = item.ego.and_then(|id| catalog.ego(id)) {
            flags |= ego.flags;
        }
    }
    if flags.has(TraitFlag::LiteFuel) && item.fuel <= 0 {
        suppress_light(&mut flags);
    }
    flags
}

fn suppress_light(flags: &mut TraitSet) {
    for flag in [
        TraitFlag::Lite1,
        TraitFlag::Lite2,
        TraitFlag::Lite3,
        TraitFlag::LiteM1,
        TraitFlag::LiteM2,
        TraitFlag::LiteM3,
    ] {
        flags.reset(flag);
    }
}

/// Light radius an item provides, counting darkness flags as negative.
pub fn light_radius(flags: &TraitSet) -> i32 {
    let mut rad = 0;
    if flags.has(TraitFlag::Lite1) {
        rad += 1;
    }
    if flags.has(TraitFlag::Lite2) {
        rad += 2;
    }
    if flags.has(TraitFlag::Lite3) {
        rad += 3;
    }
    if flags.has(TraitFlag::LiteM1) {
        rad -= 1;
    }
    if flags.has(TraitFlag::LiteM2) {
        rad -= 2;
    }
    if flags.has(TraitFlag::LiteM3) {
        rad -= 3;
    }
    rad
}
