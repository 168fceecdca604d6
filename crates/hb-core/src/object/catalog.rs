//! Item catalog: base kinds, fixed artifacts and ego templates
//!
//! Built once at startup from the standard set plus optional JSON
//! extensions, then only read.

use hashbrown::HashMap;
use serde::Deserialize;

use super::{Artifact, ArtifactId, BaseItem, BaseItemId, Ego, EgoId, IdentState, Item, ItemTval};
use crate::error::CatalogError;
use crate::flags::{CurseFlags, TraitFlag, TraitSet};

/// Base item ids of the standard catalog
pub mod kinds {
    use super::BaseItemId;

    pub const DAGGER: BaseItemId = BaseItemId(1);
    pub const MAIN_GAUCHE: BaseItemId = BaseItemId(2);
    pub const RAPIER: BaseItemId = BaseItemId(3);
    pub const LONG_SWORD: BaseItemId = BaseItemId(4);
    pub const KATANA: BaseItemId = BaseItemId(5);
    pub const WAKIZASHI: BaseItemId = BaseItemId(6);
    pub const POISON_NEEDLE: BaseItemId = BaseItemId(7);
    pub const MACE: BaseItemId = BaseItemId(8);
    pub const WAR_HAMMER: BaseItemId = BaseItemId(9);
    pub const LANCE: BaseItemId = BaseItemId(10);
    pub const HEAVY_LANCE: BaseItemId = BaseItemId(11);
    pub const SHORT_BOW: BaseItemId = BaseItemId(12);
    pub const LIGHT_CROSSBOW: BaseItemId = BaseItemId(13);
    pub const ARROW: BaseItemId = BaseItemId(14);
    pub const BOLT: BaseItemId = BaseItemId(15);
    pub const SOFT_LEATHER_ARMOUR: BaseItemId = BaseItemId(16);
    pub const METAL_SCALE_MAIL: BaseItemId = BaseItemId(17);
    pub const CLOAK: BaseItemId = BaseItemId(18);
    pub const LEATHER_SHIELD: BaseItemId = BaseItemId(19);
    pub const HARD_LEATHER_CAP: BaseItemId = BaseItemId(20);
    pub const LEATHER_GLOVES: BaseItemId = BaseItemId(21);
    pub const LEATHER_BOOTS: BaseItemId = BaseItemId(22);
    pub const WOODEN_TORCH: BaseItemId = BaseItemId(23);
    pub const BRASS_LANTERN: BaseItemId = BaseItemId(24);
    pub const RING_OF_SPEED: BaseItemId = BaseItemId(25);
    pub const RING_OF_FREE_ACTION: BaseItemId = BaseItemId(26);
    pub const RING_OF_RESIST_FIRE_COLD: BaseItemId = BaseItemId(27);
    pub const RING_OF_REGENERATION: BaseItemId = BaseItemId(28);
    pub const AMULET_OF_ESP: BaseItemId = BaseItemId(29);
    pub const RING_OF_RESIST_POISON: BaseItemId = BaseItemId(30);
    pub const PHIAL: BaseItemId = BaseItemId(31);
    pub const POTION_OF_SPEED: BaseItemId = BaseItemId(32);
    pub const FULL_PLATE_ARMOUR: BaseItemId = BaseItemId(33);
    pub const RATION: BaseItemId = BaseItemId(34);
    pub const RING_OF_ACID_IMMUNITY: BaseItemId = BaseItemId(35);
}

/// Fixed artifact ids of the standard catalog
pub mod artifacts {
    use super::ArtifactId;

    pub const PHIAL_OF_GALADRIEL: ArtifactId = ArtifactId(1);
    pub const QUICKTHORN: ArtifactId = ArtifactId(2);
    pub const TINYTHORN: ArtifactId = ArtifactId(3);
    pub const ICINGDEATH: ArtifactId = ArtifactId(4);
    pub const TWINKLE: ArtifactId = ArtifactId(5);
    pub const VORPAL_BLADE: ArtifactId = ArtifactId(6);
    pub const CHAINSWORD: ArtifactId = ArtifactId(7);
    pub const MUSASI_KATANA: ArtifactId = ArtifactId(8);
    pub const MUSASI_WAKIZASI: ArtifactId = ArtifactId(9);
    pub const RINGIL: ArtifactId = ArtifactId(10);
}

/// Ego ids of the standard catalog
pub mod egos {
    use super::EgoId;

    pub const SPEED: EgoId = EgoId(1);
    pub const HOLY_AVENGER: EgoId = EgoId(2);
    pub const RESISTANCE: EgoId = EgoId(3);
    pub const ELVENKIND: EgoId = EgoId(4);
    pub const WESTERNESSE: EgoId = EgoId(5);
    pub const BURNING: EgoId = EgoId(6);
    pub const TELEPATHY: EgoId = EgoId(7);
    pub const LEVITATION: EgoId = EgoId(8);
    pub const MORGUL: EgoId = EgoId(9);
    pub const SLAY_DRAGON: EgoId = EgoId(10);
}

/// Shape of a JSON catalog extension.
#[derive(Debug, Default, Deserialize)]
struct CatalogData {
    #[serde(default)]
    base_items: Vec<BaseItem>,
    #[serde(default)]
    artifacts: Vec<Artifact>,
    #[serde(default)]
    egos: Vec<Ego>,
}

/// Read-only lookup of item definitions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    base_items: HashMap<BaseItemId, BaseItem>,
    artifacts: HashMap<ArtifactId, Artifact>,
    egos: HashMap<EgoId, Ego>,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in item set.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for item in standard_base_items() {
            catalog.base_items.insert(item.id, item);
        }
        for art in standard_artifacts() {
            catalog.artifacts.insert(art.id, art);
        }
        for ego in standard_egos() {
            catalog.egos.insert(ego.id, ego);
        }
        catalog
    }

    pub fn base(&self, id: BaseItemId) -> Option<&BaseItem> {
        self.base_items.get(&id)
    }

    pub fn artifact(&self, id: ArtifactId) -> Option<&Artifact> {
        self.artifacts.get(&id)
    }

    pub fn ego(&self, id: EgoId) -> Option<&Ego> {
        self.egos.get(&id)
    }

    pub fn len(&self) -> usize {
        self.base_items.len() + self.artifacts.len() + self.egos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a base item, rejecting duplicates and zero-sided dice.
    pub fn insert_base(&mut self, item: BaseItem) -> Result<(), CatalogError> {
        if self.base_items.contains_key(&item.id) {
            return Err(CatalogError::DuplicateBaseItem(item.id));
        }
        if item.dd > 0 && item.ds <= 0 {
            return Err(CatalogError::ZeroSidedDice {
                name: item.name,
                dd: item.dd,
            });
        }
        self.base_items.insert(item.id, item);
        Ok(())
    }

    /// Add an artifact whose base kind must already be known.
    pub fn insert_artifact(&mut self, art: Artifact) -> Result<(), CatalogError> {
        if self.artifacts.contains_key(&art.id) {
            return Err(CatalogError::DuplicateArtifact(art.id));
        }
        if !self.base_items.contains_key(&art.base) {
            return Err(CatalogError::UnknownBaseItem {
                artifact: art.name,
                base: art.base,
            });
        }
        self.artifacts.insert(art.id, art);
        Ok(())
    }

    pub fn insert_ego(&mut self, ego: Ego) -> Result<(), CatalogError> {
        if self.egos.contains_key(&ego.id) {
            return Err(CatalogError::DuplicateEgo(ego.id));
        }
        self.egos.insert(ego.id, ego);
        Ok(())
    }

    /// Extend the catalog from a JSON document with optional `base_items`,
    /// `artifacts` and `egos` arrays. Base items are added first so
    /// artifacts may refer to them.
    pub fn extend_from_json(&mut self, json: &str) -> Result<(), CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        let counts = (data.base_items.len(), data.artifacts.len(), data.egos.len());
        for item in data.base_items {
            self.insert_base(item)?;
        }
        for art in data.artifacts {
            self.insert_artifact(art)?;
        }
        for ego in data.egos {
            self.insert_ego(ego)?;
        }
        tracing::debug!(
            base_items = counts.0,
            artifacts = counts.1,
            egos = counts.2,
            "extended item catalog"
        );
        Ok(())
    }

    /// A fresh, fully-fuelled instance of a base kind.
    pub fn make_item(&self, id: BaseItemId) -> Option<Item> {
        let base = self.base(id)?;
        let mut item = Item::new(id, base.tval, base.sval);
        item.pval = base.pval;
        item.to_h = base.to_h;
        item.to_d = base.to_d;
        item.to_a = base.to_a;
        item.ac = base.ac;
        item.dd = base.dd;
        item.ds = base.ds;
        item.weight = base.weight;
        item.curse_flags = base.curses;
        item.fuel = base.max_fuel;
        Some(item)
    }

    /// An instance of a fixed artifact, already identified.
    pub fn make_artifact(&self, id: ArtifactId) -> Option<Item> {
        let art = self.artifact(id)?;
        let mut item = self.make_item(art.base)?;
        item.artifact = Some(id);
        item.pval = art.pval;
        item.to_h = art.to_h;
        item.to_d = art.to_d;
        item.to_a = art.to_a;
        if art.ac != 0 {
            item.ac = art.ac;
        }
        if art.dd != 0 {
            item.dd = art.dd;
            item.ds = art.ds;
        }
        if art.weight != 0 {
            item.weight = art.weight;
        }
        item.curse_flags |= art.curses;
        item.ident = IdentState::FullyKnown;
        Some(item)
    }

    /// Base kind with an ego template applied.
    pub fn make_ego_item(&self, id: BaseItemId, ego: EgoId, pval: i16) -> Option<Item> {
        let template = self.ego(ego)?;
        let mut item = self.make_item(id)?;
        item.ego = Some(ego);
        item.pval = pval;
        item.curse_flags |= template.curses;
        Some(item)
    }
}

#[allow(clippy::too_many_arguments)]
fn base(
    id: BaseItemId,
    name: &str,
    tval: ItemTval,
    sval: u8,
    dice: (i16, i16),
    weight: i32,
    ac: i16,
    flags: &[TraitFlag],
) -> BaseItem {
    BaseItem {
        id,
        name: name.to_string(),
        tval,
        sval,
        pval: 0,
        to_h: 0,
        to_d: 0,
        to_a: 0,
        ac,
        dd: dice.0,
        ds: dice.1,
        weight,
        flags: TraitSet::from_flags(flags),
        curses: CurseFlags::empty(),
        max_fuel: 0,
    }
}

fn fuelled(mut item: BaseItem, max_fuel: i32) -> BaseItem {
    item.max_fuel = max_fuel;
    item
}

fn standard_base_items() -> Vec<BaseItem> {
    use ItemTval::*;
    use TraitFlag::*;
    use kinds::*;

    vec![
        base(DAGGER, "Dagger", Sword, 4, (1, 4), 12, 0, &[Throw]),
        base(MAIN_GAUCHE, "Main Gauche", Sword, 5, (1, 5), 30, 0, &[]),
        base(RAPIER, "Rapier", Sword, 7, (1, 6), 40, 0, &[]),
        base(LONG_SWORD, "Long Sword", Sword, 17, (2, 5), 130, 0, &[]),
        base(KATANA, "Katana", Sword, 22, (3, 5), 120, 0, &[]),
        base(WAKIZASHI, "Wakizashi", Sword, 9, (2, 4), 50, 0, &[]),
        base(POISON_NEEDLE, "Poison Needle", Sword, 1, (1, 1), 1, 0, &[]),
        base(MACE, "Mace", Hafted, 5, (2, 4), 120, 0, &[]),
        base(WAR_HAMMER, "War Hammer", Hafted, 8, (3, 3), 120, 0, &[]),
        base(LANCE, "Lance", Polearm, 20, (2, 8), 300, 0, &[Riding]),
        base(HEAVY_LANCE, "Heavy Lance", Polearm, 21, (4, 8), 400, 0, &[Riding]),
        base(SHORT_BOW, "Short Bow", Bow, 12, (0, 0), 30, 0, &[]),
        base(LIGHT_CROSSBOW, "Light Crossbow", Bow, 23, (0, 0), 110, 0, &[]),
        base(ARROW, "Arrow", Arrow, 1, (1, 4), 2, 0, &[]),
        base(BOLT, "Bolt", Bolt, 1, (1, 5), 3, 0, &[]),
        base(SOFT_LEATHER_ARMOUR, "Soft Leather Armour", SoftArmor, 4, (0, 0), 80, 8, &[]),
        base(METAL_SCALE_MAIL, "Metal Scale Mail", HardArmor, 4, (0, 0), 250, 38, &[]),
        base(FULL_PLATE_ARMOUR, "Full Plate Armour", HardArmor, 15, (0, 0), 380, 60, &[]),
        base(CLOAK, "Cloak", Cloak, 1, (0, 0), 10, 1, &[]),
        base(LEATHER_SHIELD, "Leather Shield", Shield, 8, (0, 0), 60, 8, &[]),
        base(HARD_LEATHER_CAP, "Hard Leather Cap", Helm, 2, (0, 0), 15, 2, &[]),
        base(LEATHER_GLOVES, "Set of Leather Gloves", Gloves, 1, (0, 0), 10, 1, &[]),
        base(LEATHER_BOOTS, "Pair of Leather Boots", Boots, 2, (0, 0), 20, 2, &[]),
        fuelled(base(WOODEN_TORCH, "Wooden Torch", Light, 0, (1, 1), 30, 0, &[Lite2, LiteFuel]), 5000),
        fuelled(base(BRASS_LANTERN, "Brass Lantern", Light, 1, (1, 1), 50, 0, &[Lite2, LiteFuel]), 15000),
        base(PHIAL, "Phial", Light, 4, (1, 1), 10, 0, &[Lite3, Activate]),
        base(RING_OF_SPEED, "Ring of Speed", Ring, 31, (0, 0), 1, 0, &[Speed]),
        base(RING_OF_FREE_ACTION, "Ring of Free Action", Ring, 24, (0, 0), 1, 0, &[FreeAct]),
        base(RING_OF_RESIST_FIRE_COLD, "Ring of Resist Fire and Cold", Ring, 12, (0, 0), 1, 0, &[ResFire, ResCold]),
        base(RING_OF_REGENERATION, "Ring of Regeneration", Ring, 28, (0, 0), 1, 0, &[Regen]),
        base(RING_OF_RESIST_POISON, "Ring of Resist Poison", Ring, 16, (0, 0), 1, 0, &[ResPois]),
        base(RING_OF_ACID_IMMUNITY, "Ring of Acid", Ring, 19, (0, 0), 1, 0, &[ImAcid, ResAcid, IgnoreAcid]),
        base(AMULET_OF_ESP, "Amulet of ESP", Amulet, 7, (0, 0), 3, 0, &[Telepathy]),
        base(POTION_OF_SPEED, "Potion of Speed", Potion, 29, (0, 0), 4, 0, &[]),
        base(RATION, "Ration of Food", Food, 35, (0, 0), 8, 0, &[]),
    ]
}

fn artifact(id: ArtifactId, name: &str, base: BaseItemId, bonus: (i16, i16, i16), pval: i16, flags: &[TraitFlag]) -> Artifact {
    Artifact {
        id,
        name: name.to_string(),
        base,
        pval,
        to_h: bonus.0,
        to_d: bonus.1,
        to_a: bonus.2,
        ac: 0,
        dd: 0,
        ds: 0,
        weight: 0,
        flags: TraitSet::from_flags(flags),
        curses: CurseFlags::empty(),
    }
}

fn standard_artifacts() -> Vec<Artifact> {
    use TraitFlag::*;
    use artifacts::*;

    vec![
        artifact(PHIAL_OF_GALADRIEL, "of Galadriel", kinds::PHIAL, (0, 0, 0), 0, &[Lite3, Activate, IgnoreFire, IgnoreAcid]),
        artifact(QUICKTHORN, "'Quickthorn'", kinds::MAIN_GAUCHE, (12, 14, 0), 0, &[SlayAnimal, ResFire, FreeAct, IgnoreAcid]),
        artifact(TINYTHORN, "'Tinythorn'", kinds::DAGGER, (10, 12, 0), 0, &[SlayOrc, ResCold, SeeInvis, IgnoreAcid]),
        artifact(ICINGDEATH, "'Icingdeath'", kinds::LONG_SWORD, (12, 16, 0), 0, &[BrandCold, ResCold, ImCold, SlayDemon]),
        artifact(TWINKLE, "'Twinkle'", kinds::RAPIER, (15, 15, 0), 0, &[SlayEvil, Lite1, ResLite, SeeInvis]),
        artifact(VORPAL_BLADE, "'Vorpal Blade'", kinds::LONG_SWORD, (32, 32, 0), 2, &[Vorpal, SlayEvil, Blows, HoldExp, FreeAct]),
        artifact(CHAINSWORD, "'Chainsword'", kinds::LONG_SWORD, (18, 28, 0), 0, &[Vorpal, Chaotic, ResChaos, Aggravate]),
        artifact(MUSASI_KATANA, "'Musashi'", kinds::KATANA, (20, 20, 0), 0, &[SlayEvil, FreeAct, ResFear]),
        artifact(MUSASI_WAKIZASI, "'Musashi'", kinds::WAKIZASHI, (20, 20, 0), 0, &[SlayEvil, FreeAct, ResFear]),
        artifact(RINGIL, "'Ringil'", kinds::LONG_SWORD, (22, 25, 0), 10, &[Speed, BrandCold, SlayEvil, ImCold, Lite1]),
    ]
}

fn ego(id: EgoId, name: &str, flags: &[TraitFlag], curses: CurseFlags) -> Ego {
    Ego {
        id,
        name: name.to_string(),
        flags: TraitSet::from_flags(flags),
        curses,
    }
}

fn standard_egos() -> Vec<Ego> {
    use TraitFlag::*;
    use egos::*;

    vec![
        ego(SPEED, "of Speed", &[Speed], CurseFlags::empty()),
        ego(HOLY_AVENGER, "(Holy Avenger)", &[Wis, SlayEvil, SlayUndead, SlayDemon, SeeInvis, Blessed], CurseFlags::empty()),
        ego(RESISTANCE, "of Resistance", &[ResAcid, ResElec, ResFire, ResCold], CurseFlags::empty()),
        ego(ELVENKIND, "of Elvenkind", &[Stealth, ResAcid, ResElec, ResFire, ResCold], CurseFlags::empty()),
        ego(WESTERNESSE, "(Westernesse)", &[Str, Dex, Con, SlayOrc, SlayTroll, SlayGiant, FreeAct, SeeInvis], CurseFlags::empty()),
        ego(BURNING, "of Burning", &[BrandFire, ResFire, IgnoreFire], CurseFlags::empty()),
        ego(TELEPATHY, "of Telepathy", &[Telepathy], CurseFlags::empty()),
        ego(LEVITATION, "of Levitation", &[Levitation], CurseFlags::empty()),
        ego(
            MORGUL,
            "(Morgul)",
            &[SlayUndead, SeeInvis, ResCold, ResNether, Aggravate],
            CurseFlags::CURSED | CurseFlags::HEAVY_CURSE | CurseFlags::TY_CURSE,
        ),
        ego(SLAY_DRAGON, "of Slay Dragon", &[SlayDragon, KillDragon], CurseFlags::empty()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_consistent() {
        let catalog = Catalog::standard();
        assert!(!catalog.is_empty());
        for id in 1..=10 {
            let art = catalog.artifact(ArtifactId(id)).unwrap();
            assert!(catalog.base(art.base).is_some(), "{} has no base", art.name);
        }
    }

    #[test]
    fn test_make_item_copies_base() {
        let catalog = Catalog::standard();
        let torch = catalog.make_item(kinds::WOODEN_TORCH).unwrap();
        assert_eq!(torch.tval, ItemTval::Light);
        assert_eq!(torch.fuel, 5000);
        assert_eq!(torch.weight, 30);
        assert!(catalog.make_item(BaseItemId(999)).is_none());
    }

    #[test]
    fn test_make_artifact_overrides() {
        let catalog = Catalog::standard();
        let ringil = catalog.make_artifact(artifacts::RINGIL).unwrap();
        assert_eq!(ringil.pval, 10);
        assert_eq!(ringil.to_h, 22);
        assert_eq!(ringil.dd, 2);
        assert!(ringil.ident.is_fully_known());
    }

    #[test]
    fn test_make_ego_item_carries_curse() {
        let catalog = Catalog::standard();
        let morgul = catalog.make_ego_item(kinds::LONG_SWORD, egos::MORGUL, 0).unwrap();
        assert!(morgul.is_cursed());
        assert!(morgul.curse_flags.contains(CurseFlags::TY_CURSE));
    }

    #[test]
    fn test_extend_from_json() {
        let mut catalog = Catalog::standard();
        let json = r#"{
            "base_items": [
                {"id": 200, "name": "Blade of Chaos", "tval": "Sword", "sval": 30,
                 "dd": 6, "ds": 5, "weight": 180, "flags": ["ResChaos"]}
            ],
            "artifacts": [
                {"id": 200, "name": "'Doomcaller'", "base": 200, "pval": -5,
                 "flags": ["Aggravate", "KillEvil"]}
            ]
        }"#;
        catalog.extend_from_json(json).unwrap();
        assert!(catalog.base(BaseItemId(200)).unwrap().flags.has(TraitFlag::ResChaos));
        let art = catalog.artifact(ArtifactId(200)).unwrap();
        assert!(art.flags.has(TraitFlag::KillEvil));
    }

    #[test]
    fn test_extend_rejects_duplicates() {
        let mut catalog = Catalog::standard();
        let json = r#"{"base_items": [{"id": 1, "name": "Dagger", "tval": "Sword"}]}"#;
        let err = catalog.extend_from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBaseItem(BaseItemId(1))));
    }

    #[test]
    fn test_extend_rejects_unknown_base() {
        let mut catalog = Catalog::standard();
        let json = r#"{"artifacts": [{"id": 77, "name": "'Nowhere'", "base": 999}]}"#;
        let err = catalog.extend_from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownBaseItem { .. }));
    }

    #[test]
    fn test_extend_rejects_zero_sided_dice() {
        let mut catalog = Catalog::new();
        let json = r#"{"base_items": [{"id": 5, "name": "Stub", "tval": "Hafted", "dd": 2, "ds": 0}]}"#;
        let err = catalog.extend_from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroSidedDice { dd: 2, .. }));
    }

    #[test]
    fn test_extend_rejects_malformed_json() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.extend_from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
