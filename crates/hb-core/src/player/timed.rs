//! Timed effects, songs and hexes
//!
//! Every counter is turns remaining; zero means inactive.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::flags::Element;

/// Song a bard is currently singing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Song {
    Speed,
    Heroism,
    Resistance,
    Stealth,
}

bitflags! {
    /// Hexes being maintained
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct HexSpells: u32 {
        const DEMON_AURA = 1 << 0;
        const SHOCK_CLOAK = 1 << 1;
        const XTRA_MIGHT = 1 << 2;
        const BUILDING = 1 << 3;
        const ICE_ARMOR = 1 << 4;
    }
}

// Manual serde impl for HexSpells
impl Serialize for HexSpells {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HexSpells {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(HexSpells::from_bits_truncate(bits))
    }
}

/// Temporary effect counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimedEffects {
    pub fast: i32,
    pub slow: i32,
    pub blind: i32,
    pub confused: i32,
    pub afraid: i32,
    pub hero: i32,
    pub shero: i32,
    pub blessed: i32,
    pub shield: i32,
    pub magicdef: i32,
    pub invuln: i32,
    /// Potion of Tsuyoshi
    pub tsuyoshi: i32,
    pub tim_invis: i32,
    pub tim_infra: i32,
    pub tim_regen: i32,
    pub tim_stealth: i32,
    pub tim_levitation: i32,
    pub tim_esp: i32,
    pub tim_reflect: i32,
    pub tim_res_nether: i32,
    pub tim_res_time: i32,
    pub tim_sh_fire: i32,
    pub tim_pass_wall: i32,
    pub wraith_form: i32,
    /// Ultimate resistance
    pub ult_res: i32,
    pub lightspeed: i32,

    pub oppose_acid: i32,
    pub oppose_elec: i32,
    pub oppose_fire: i32,
    pub oppose_cold: i32,
    pub oppose_pois: i32,

    /// Elemental immunity spell and its element
    pub ele_immune: i32,
    pub ele_immune_type: Option<Element>,

    pub song: Option<Song>,
    pub hexes: HexSpells,
}

impl TimedEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fast(&self) -> bool {
        self.fast > 0 || self.song == Some(Song::Speed)
    }

    pub fn is_hero(&self) -> bool {
        self.hero > 0 || self.song == Some(Song::Heroism)
    }

    /// Berserk rage; Berserkers are always enraged, see `Player::is_shero`.
    pub fn is_shero(&self) -> bool {
        self.shero > 0
    }

    pub fn is_ult_res(&self) -> bool {
        self.ult_res > 0
    }

    pub fn is_wraith(&self) -> bool {
        self.wraith_form > 0
    }

    /// Counter for a temporary elemental resistance.
    pub fn oppose(&self, element: Element) -> i32 {
        match element {
            Element::Acid => self.oppose_acid,
            Element::Elec => self.oppose_elec,
            Element::Fire => self.oppose_fire,
            Element::Cold => self.oppose_cold,
        }
    }

    /// Temporary elemental immunity to `element`.
    pub fn is_ele_immune(&self, element: Element) -> bool {
        self.ele_immune > 0 && self.ele_immune_type == Some(element)
    }

    pub fn is_hexing(&self, hex: HexSpells) -> bool {
        self.hexes.contains(hex)
    }

    /// Count down every counter by one turn.
    ///
    /// Returns true if any effect ran out, which invalidates derived status.
    pub fn decrement(&mut self) -> bool {
        let mut expired = false;
        for counter in [
            &mut self.fast,
            &mut self.slow,
            &mut self.blind,
            &mut self.confused,
            &mut self.afraid,
            &mut self.hero,
            &mut self.shero,
            &mut self.blessed,
            &mut self.shield,
            &mut self.magicdef,
            &mut self.invuln,
            &mut self.tsuyoshi,
            &mut self.tim_invis,
            &mut self.tim_infra,
            &mut self.tim_regen,
            &mut self.tim_stealth,
            &mut self.tim_levitation,
            &mut self.tim_esp,
            &mut self.tim_reflect,
            &mut self.tim_res_nether,
            &mut self.tim_res_time,
            &mut self.tim_sh_fire,
            &mut self.tim_pass_wall,
            &mut self.wraith_form,
            &mut self.ult_res,
            &mut self.lightspeed,
            &mut self.oppose_acid,
            &mut self.oppose_elec,
            &mut self.oppose_fire,
            &mut self.oppose_cold,
            &mut self.oppose_pois,
            &mut self.ele_immune,
        ] {
            if *counter > 0 {
                *counter -= 1;
                if *counter == 0 {
                    expired = true;
                }
            }
        }
        if self.ele_immune == 0 {
            self.ele_immune_type = None;
        }
        expired
    }
}
