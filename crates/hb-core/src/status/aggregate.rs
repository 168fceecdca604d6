//! Flag aggregation (get_player_flags and friends)
//!
//! Each trait combines its providers with its own rule. Most use the common
//! pattern of equipment, race, class and battle form; the functions below
//! add the extra sources and overrides individual traits need.

use strum::IntoEnumIterator;

use crate::flags::{CauseSet, Element, TraitFlag, TraitSet};
use crate::player::{HexSpells, Mutation, PlayerClass, PlayerRace, Personality, Song, Stat};

use super::StatusView;
use super::basic_stat::BasicStat;
use super::infravision::Infravision;
use super::resolver::StatusResolver;

const IMMUNITIES: [TraitFlag; 5] = [
    TraitFlag::ImAcid,
    TraitFlag::ImElec,
    TraitFlag::ImFire,
    TraitFlag::ImCold,
    TraitFlag::ImDark,
];

impl StatusView<'_> {
    /// Equipment, race, class and battle form.
    pub fn common_cause_flags(&self, flag: TraitFlag) -> CauseSet {
        self.equipment_causes(flag)
            | CauseSet::from_race(self.race_has(flag))
            | CauseSet::from_class(self.class_has(flag))
            | CauseSet::from_battle_form(self.battle_form_has(flag))
    }

    /// The common pattern plus personality.
    fn innate_cause_flags(&self, flag: TraitFlag) -> CauseSet {
        self.common_cause_flags(flag) | CauseSet::from_personality(self.personality_has(flag))
    }

    fn ult_res(&self) -> CauseSet {
        CauseSet::from_time_effect(self.player.timed.is_ult_res())
    }

    fn from_mutation(&self, mutation: Mutation) -> CauseSet {
        CauseSet::from_mutation(self.has_mutation(mutation))
    }

    /// Every cause currently granting `flag`. Zero means absent.
    pub fn get_player_flags(&self, flag: TraitFlag) -> CauseSet {
        use TraitFlag::*;
        match flag {
            Str => BasicStat(Stat::Str).get_all_flags(self),
            Int => BasicStat(Stat::Int).get_all_flags(self),
            Wis => BasicStat(Stat::Wis).get_all_flags(self),
            Dex => BasicStat(Stat::Dex).get_all_flags(self),
            Con => BasicStat(Stat::Con).get_all_flags(self),
            Chr => BasicStat(Stat::Chr).get_all_flags(self),
            Stealth => super::stealth::Stealth.get_all_flags(self),
            Infra => Infravision.get_all_flags(self),
            Speed => super::speed::Speed.get_all_flags(self),

            SustStr | SustInt | SustWis | SustDex | SustCon | SustChr => self.has_sustain(flag),

            ImAcid => self.has_immune(Element::Acid),
            ImElec => self.has_immune(Element::Elec),
            ImFire => self.has_immune(Element::Fire),
            ImCold => self.has_immune(Element::Cold),
            ImDark => self.has_immune_dark(),

            ResAcid => self.has_resist(Element::Acid),
            ResElec => self.has_resist(Element::Elec),
            ResFire => self.has_resist(Element::Fire),
            ResCold => self.has_resist(Element::Cold),
            ResPois | ResLite | ResSound | ResShards | ResNexus | ResChaos | ResDisen | ResWater
            | ResCurse => self.innate_cause_flags(flag) | self.ult_res(),
            ResDark => self.has_resist_dark(),
            ResFear => self.has_resist_fear(),
            ResBlind | ResConf => self.has_resist_mind(flag),
            ResNether => self.has_resist_neth(),
            ResTime => self.has_resist_time(),

            VulAcid => self.has_vuln(Element::Acid),
            VulElec => self.has_vuln(Element::Elec),
            VulFire => self.has_vuln(Element::Fire),
            VulCold => self.has_vuln(Element::Cold),
            VulLite => self.has_vuln_lite(),

            Reflect => self.has_reflect(),
            FreeAct => self.has_free_act(),
            HoldExp | SlowDigest => self.innate_cause_flags(flag) | self.ult_res(),
            SeeInvis => self.has_see_invisible(),
            Levitation => self.has_levitation(),
            Regen => self.has_regenerate(),
            PassWall => self.has_pass_wall(),

            ShFire => self.has_sh_fire(),
            ShElec => self.has_sh_elec(),
            ShCold => self.has_sh_cold(),

            Lite1 | Lite2 | Lite3 => self.has_lite(),

            Telepathy => self.has_esp_telepathy(),
            EspAnimal | EspUndead | EspDemon | EspOrc | EspTroll | EspGiant | EspDragon | EspHuman
            | EspEvil | EspGood | EspNonliving | EspUnique => self.common_cause_flags(flag),

            TyCurse | DrainExp | Teleport | Aggravate => {
                self.equipment_causes(flag) | CauseSet::when(self.curse_has(flag), CauseSet::CURSE)
            }

            NoTele | NoMagic | DecMana | Warning | Blessed | XtraMight | XtraShots | InvulnArrow
            | EasySpell => self.common_cause_flags(flag),

            // Weapon, light-shape and activation flags only ever come from items
            _ => self.equipment_causes(flag),
        }
    }

    fn has_sustain(&self, flag: TraitFlag) -> CauseSet {
        self.innate_cause_flags(flag) | self.ult_res()
    }

    /// Immunity, including the temporary elemental-immunity spell.
    pub fn has_immune(&self, element: Element) -> CauseSet {
        self.common_cause_flags(element.immune())
            | CauseSet::from_time_effect(self.player.timed.is_ele_immune(element))
    }

    pub fn has_immune_dark(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::ImDark) | CauseSet::from_time_effect(self.player.timed.is_wraith())
    }

    /// Resistance. An immunity always implies the matching resistance.
    pub fn has_resist(&self, element: Element) -> CauseSet {
        self.common_cause_flags(element.resist()) | self.ult_res() | self.has_immune(element)
    }

    pub fn has_resist_dark(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::ResDark) | self.ult_res() | self.has_immune_dark()
    }

    pub fn has_resist_fear(&self) -> CauseSet {
        let timed = &self.player.timed;
        self.innate_cause_flags(TraitFlag::ResFear)
            | self.from_mutation(Mutation::Fearless)
            | CauseSet::from_time_effect(timed.is_hero() || self.player.is_shero() || timed.is_ult_res())
    }

    /// Blindness and confusion resistance, which anti-magic shielding grants.
    fn has_resist_mind(&self, flag: TraitFlag) -> CauseSet {
        self.innate_cause_flags(flag)
            | CauseSet::from_time_effect(self.player.timed.magicdef > 0)
            | self.ult_res()
    }

    pub fn has_resist_neth(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::ResNether)
            | CauseSet::from_time_effect(self.player.timed.tim_res_nether > 0)
            | self.ult_res()
    }

    pub fn has_resist_time(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::ResTime)
            | CauseSet::from_time_effect(self.player.timed.tim_res_time > 0)
            | self.ult_res()
    }

    /// Raw vulnerability causes; immunity is handled by the callers.
    pub fn has_vuln(&self, element: Element) -> CauseSet {
        self.common_cause_flags(element.vulnerable()) | self.from_mutation(Mutation::VulnElem)
    }

    pub fn has_vuln_lite(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::VulLite) | CauseSet::from_time_effect(self.player.timed.is_wraith())
    }

    pub fn has_reflect(&self) -> CauseSet {
        let timed = &self.player.timed;
        self.common_cause_flags(TraitFlag::Reflect)
            | CauseSet::from_time_effect(
                timed.tim_reflect > 0 || timed.magicdef > 0 || timed.is_wraith() || timed.is_ult_res(),
            )
    }

    pub fn has_free_act(&self) -> CauseSet {
        self.innate_cause_flags(TraitFlag::FreeAct)
            | self.from_mutation(Mutation::Motion)
            | CauseSet::from_time_effect(self.player.timed.magicdef > 0)
            | self.ult_res()
    }

    pub fn has_see_invisible(&self) -> CauseSet {
        self.innate_cause_flags(TraitFlag::SeeInvis)
            | CauseSet::from_time_effect(self.player.timed.tim_invis > 0)
            | self.ult_res()
    }

    /// Levitation. While mounted only the mount's flight counts.
    pub fn has_levitation(&self) -> CauseSet {
        if let Some(riding) = self.riding_levitation() {
            return riding;
        }
        let timed = &self.player.timed;
        self.common_cause_flags(TraitFlag::Levitation)
            | self.from_mutation(Mutation::Wings)
            | CauseSet::from_time_effect(timed.tim_levitation > 0 || timed.magicdef > 0 || timed.is_ult_res())
    }

    /// Regeneration. Flesh rot cancels every source.
    pub fn has_regenerate(&self) -> CauseSet {
        let result = self.common_cause_flags(TraitFlag::Regen)
            | self.from_mutation(Mutation::Regen)
            | CauseSet::from_time_effect(self.player.timed.tim_regen > 0)
            | self.ult_res();
        if self.has_mutation(Mutation::FleshRot) {
            return CauseSet::NONE;
        }
        result
    }

    pub fn has_pass_wall(&self) -> CauseSet {
        let timed = &self.player.timed;
        self.common_cause_flags(TraitFlag::PassWall)
            | CauseSet::from_time_effect(timed.is_wraith() || timed.tim_pass_wall > 0)
    }

    fn is_hexing(&self, hex: HexSpells) -> bool {
        self.player.timed.is_hexing(hex)
    }

    pub fn has_sh_fire(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::ShFire)
            | self.from_mutation(Mutation::FireBody)
            | CauseSet::from_time_effect(
                self.player.timed.tim_sh_fire > 0 || self.is_hexing(HexSpells::DEMON_AURA),
            )
            | self.ult_res()
    }

    pub fn has_sh_elec(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::ShElec)
            | self.from_mutation(Mutation::ElecTouc)
            | CauseSet::from_time_effect(self.is_hexing(HexSpells::SHOCK_CLOAK))
            | self.ult_res()
    }

    pub fn has_sh_cold(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::ShCold)
            | CauseSet::from_time_effect(self.is_hexing(HexSpells::ICE_ARMOR))
            | self.ult_res()
    }

    /// Innate light. Ninjas never shine; a fire aura always does.
    pub fn has_lite(&self) -> CauseSet {
        if self.player.class == PlayerClass::Ninja {
            return CauseSet::NONE;
        }
        CauseSet::from_personality(self.player.personality == Personality::Munchkin)
            | CauseSet::from_race(self.race_has(TraitFlag::Lite1))
            | self.ult_res()
            | self.has_sh_fire()
    }

    pub fn has_esp_telepathy(&self) -> CauseSet {
        self.common_cause_flags(TraitFlag::Telepathy)
            | self.from_mutation(Mutation::Esp)
            | CauseSet::from_time_effect(self.player.timed.tim_esp > 0)
            | self.ult_res()
    }

    /// Active temporary resistance to an element: the potion or spell
    /// counter, the resistance song, or the Musou kata.
    pub fn is_oppose(&self, element: Element) -> bool {
        self.player.timed.oppose(element) > 0 || self.opposing_generally()
    }

    pub fn is_oppose_pois(&self) -> bool {
        self.player.timed.oppose_pois > 0 || self.opposing_generally()
    }

    fn opposing_generally(&self) -> bool {
        self.player.timed.song == Some(Song::Resistance)
            || self.player.battle_form == crate::player::BattleForm::Musou
    }

    /// Traits held through a temporary effect or a battle form.
    pub fn tim_player_flags(&self) -> TraitSet {
        let mut flags = TraitSet::new();
        for flag in TraitFlag::iter() {
            if self.get_player_flags(flag).intersects(CauseSet::TEMPORARY) {
                flags.set(flag);
            }
        }
        for element in Element::iter() {
            if self.is_oppose(element) {
                flags.set(element.resist());
            }
        }
        if self.is_oppose_pois() {
            flags.set(TraitFlag::ResPois);
        }
        flags
    }

    /// Immunities the character has by nature.
    pub fn player_immunity(&self) -> TraitSet {
        let innate = CauseSet::RACE | CauseSet::CLASS | CauseSet::PERSONALITY | CauseSet::MUTATION;
        self.immunities_where(innate)
    }

    /// Immunities from temporary effects and battle forms.
    pub fn tim_player_immunity(&self) -> TraitSet {
        self.immunities_where(CauseSet::TEMPORARY)
    }

    fn immunities_where(&self, causes: CauseSet) -> TraitSet {
        let mut flags = TraitSet::new();
        for flag in IMMUNITIES {
            if self.get_player_flags(flag).intersects(causes) {
                flags.set(flag);
            }
        }
        flags
    }

    /// Immunities visible on identified equipment.
    pub fn known_obj_immunity(&self) -> TraitSet {
        let mut flags = TraitSet::new();
        for (_, item) in self.player.equipment.iter() {
            if !item.ident.is_known() {
                continue;
            }
            let known = crate::object::object_flags_known(item, self.catalog);
            for flag in IMMUNITIES {
                if known.has(flag) {
                    flags.set(flag);
                }
            }
        }
        flags
    }

    /// Vulnerabilities that are not cancelled by an immunity.
    pub fn player_vulnerability_flags(&self) -> TraitSet {
        let mut flags = TraitSet::new();
        for element in Element::iter() {
            if self.has_vuln(element).is_present() && !self.has_immune(element).is_present() {
                flags.set(element.vulnerable());
            }
        }
        if self.has_vuln_lite().is_present() {
            flags.set(TraitFlag::VulLite);
        }
        flags
    }

    /// Traits the mount gives and takes away, as `(gained, lost)`.
    pub fn riding_flags(&self) -> (TraitSet, TraitSet) {
        let mut gained = TraitSet::new();
        let mut lost = TraitSet::new();
        let Some(mount) = self.mount() else {
            return (gained, lost);
        };
        if mount.can_fly() {
            gained.set(TraitFlag::Levitation);
        } else {
            lost.set(TraitFlag::Levitation);
        }
        match super::speed::Speed.riding_bonus(self).signum() {
            1 => gained.set(TraitFlag::Speed),
            -1 => lost.set(TraitFlag::Speed),
            _ => {}
        }
        (gained, lost)
    }

    /// Spectres feed on nether instead of being hurt by it.
    pub fn absorbs_nether(&self) -> bool {
        self.player.race == PlayerRace::Spectre
    }

    /// Shadow-Fairies are hunted once something makes them aggravate.
    pub fn is_aggravated_s_fairy(&self) -> bool {
        self.player.race == PlayerRace::ShadowFairy
            && self.player.personality != Personality::Sexy
            && self.curse_flags().contains(crate::flags::CurseFlags::AGGRAVATE)
    }

    pub fn stealth_flags(&self) -> CauseSet {
        super::stealth::Stealth.get_all_flags(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::consts::A_MAX;
    use crate::monster::{Monster, MonsterRace};
    use crate::object::Catalog;
    use crate::object::catalog::{egos, kinds};
    use crate::player::{BattleForm, EquipSlot, Player};

    fn player(race: PlayerRace, class: PlayerClass) -> Player {
        Player::new(race, class, Personality::Ordinary, [14; A_MAX])
    }

    #[test]
    fn test_immunity_implies_resistance() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        p.timed.ele_immune = 5;
        p.timed.ele_immune_type = Some(Element::Fire);
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(view.get_player_flags(TraitFlag::ImFire), CauseSet::MAGIC_TIME_EFFECT);
        assert!(view.get_player_flags(TraitFlag::ResFire).is_present());
        assert!(!view.get_player_flags(TraitFlag::ResCold).is_present());
    }

    #[test]
    fn test_ninja_never_has_light() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Sprite, PlayerClass::Ninja);
        p.timed.ult_res = 10;
        let view = StatusView::new(&p, &catalog, &config);
        assert!(view.get_player_flags(TraitFlag::Lite1).is_empty());

        let sprite = player(PlayerRace::Sprite, PlayerClass::Mage);
        let view = StatusView::new(&sprite, &catalog, &config);
        assert_eq!(view.get_player_flags(TraitFlag::Lite1), CauseSet::RACE);
    }

    #[test]
    fn test_fire_aura_brings_light() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Mage);
        p.mutations.insert(Mutation::FireBody);
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(view.has_lite(), CauseSet::MUTATION);
    }

    #[test]
    fn test_telepathy_sources() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        p.mutations.insert(Mutation::Esp);
        p.timed.tim_esp = 3;
        p.equip(EquipSlot::Neck, catalog.make_item(kinds::AMULET_OF_ESP).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        assert_eq!(
            view.get_player_flags(TraitFlag::Telepathy),
            CauseSet::NECK | CauseSet::MUTATION | CauseSet::MAGIC_TIME_EFFECT
        );
    }

    #[test]
    fn test_mutation_switch_hides_mutation_causes() {
        let catalog = Catalog::standard();
        let config = EngineConfig {
            mutations_enabled: false,
            ..EngineConfig::default()
        };
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        p.mutations.insert(Mutation::Wings);
        let view = StatusView::new(&p, &catalog, &config);
        assert!(view.get_player_flags(TraitFlag::Levitation).is_empty());
    }

    #[test]
    fn test_mount_overrides_levitation() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Cavalry);
        p.equip(
            EquipSlot::Feet,
            catalog.make_ego_item(kinds::LEATHER_BOOTS, egos::LEVITATION, 0).unwrap(),
        );
        assert_eq!(
            StatusView::new(&p, &catalog, &config).get_player_flags(TraitFlag::Levitation),
            CauseSet::FEET
        );

        p.set_riding(Some(Monster::new(MonsterRace::new("Wild horse", 10, 120), 30)));
        let view = StatusView::new(&p, &catalog, &config);
        assert!(view.get_player_flags(TraitFlag::Levitation).is_empty());
        let (gained, lost) = view.riding_flags();
        assert!(lost.has(TraitFlag::Levitation));
        assert!(!gained.has(TraitFlag::Levitation));
    }

    #[test]
    fn test_tim_player_flags_reports_oppose_and_forms() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Monk);
        p.timed.oppose_cold = 4;
        p.battle_form = BattleForm::Suzaku;
        let view = StatusView::new(&p, &catalog, &config);
        let flags = view.tim_player_flags();
        assert!(flags.has(TraitFlag::ResCold));
        assert!(flags.has(TraitFlag::Levitation));
        assert!(!flags.has(TraitFlag::ResFire));
    }

    #[test]
    fn test_vulnerability_masked_by_immunity() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Warrior);
        p.mutations.insert(Mutation::VulnElem);
        p.equip(EquipSlot::MainRing, catalog.make_item(kinds::RING_OF_ACID_IMMUNITY).unwrap());
        let view = StatusView::new(&p, &catalog, &config);
        let vuln = view.player_vulnerability_flags();
        assert!(!vuln.has(TraitFlag::VulAcid));
        assert!(vuln.has(TraitFlag::VulFire));
        assert!(view.get_player_flags(TraitFlag::VulAcid).is_present());
    }

    #[test]
    fn test_immunity_partitions() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Vampire, PlayerClass::Warrior);
        p.timed.ele_immune = 2;
        p.timed.ele_immune_type = Some(Element::Cold);
        let mut ring = catalog.make_item(kinds::RING_OF_ACID_IMMUNITY).unwrap();
        ring.ident = crate::object::IdentState::Known;
        p.equip(EquipSlot::MainRing, ring);

        let view = StatusView::new(&p, &catalog, &config);
        assert!(view.player_immunity().has(TraitFlag::ImDark));
        assert!(!view.player_immunity().has(TraitFlag::ImAcid));
        assert!(view.tim_player_immunity().has(TraitFlag::ImCold));
        assert!(view.known_obj_immunity().has(TraitFlag::ImAcid));
    }

    #[test]
    fn test_musou_opposes_everything() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human, PlayerClass::Samurai);
        p.battle_form = BattleForm::Musou;
        let view = StatusView::new(&p, &catalog, &config);
        assert!(view.is_oppose(Element::Acid));
        assert!(view.is_oppose_pois());
    }

    #[test]
    fn test_aggravated_shadow_fairy() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::ShadowFairy, PlayerClass::Mage);
        assert!(!StatusView::new(&p, &catalog, &config).is_aggravated_s_fairy());
        let mut ring = catalog.make_item(kinds::RING_OF_SPEED).unwrap();
        ring.curse_flags = crate::flags::CurseFlags::AGGRAVATE;
        p.equip(EquipSlot::MainRing, ring);
        assert!(StatusView::new(&p, &catalog, &config).is_aggravated_s_fairy());
    }
}
