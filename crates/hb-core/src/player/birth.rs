//! Character creation (player_birth / player_outfit)
//!
//! Only the part that feeds the status engine: identity, the rolled stats,
//! virtue slots and the starting kit.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::consts::A_MAX;
use crate::object::catalog::kinds;
use crate::object::{BaseItemId, Catalog, IdentState, Item};
use crate::rng::GameRng;

use super::class::{PlayerClass, Realm};
use super::equipment::EquipSlot;
use super::personality::Personality;
use super::race::PlayerRace;
use super::Player;

/// Choices made on the birth screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthChoices {
    pub name: String,
    pub race: PlayerRace,
    pub class: PlayerClass,
    pub personality: Personality,
    pub realm1: Option<Realm>,
    pub realm2: Option<Realm>,
    pub stats: [i16; A_MAX],
}

/// Per-character changes to the shared starting-kit table.
///
/// `Some(id)` swaps an entry for another kind; `None` drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitOverrides {
    replace: HashMap<BaseItemId, Option<BaseItemId>>,
}

impl KitOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn substitute(&mut self, from: BaseItemId, to: BaseItemId) {
        self.replace.insert(from, Some(to));
    }

    pub fn remove(&mut self, id: BaseItemId) {
        self.replace.insert(id, None);
    }

    /// The kind to hand out in place of `id`, if any.
    pub fn resolve(&self, id: BaseItemId) -> Option<BaseItemId> {
        match self.replace.get(&id) {
            Some(over) => *over,
            None => Some(id),
        }
    }
}

/// Kit every character receives
const COMMON_KIT: &[(BaseItemId, i32)] = &[(kinds::RATION, 4), (kinds::WOODEN_TORCH, 1)];

fn class_kit(class: PlayerClass) -> &'static [(BaseItemId, i32)] {
    use PlayerClass::*;
    match class {
        Warrior | Berserker | Samurai => &[
            (kinds::LONG_SWORD, 1),
            (kinds::SOFT_LEATHER_ARMOUR, 1),
            (kinds::LEATHER_SHIELD, 1),
        ],
        Paladin | ChaosWarrior | WarriorMage | RedMage => {
            &[(kinds::LONG_SWORD, 1), (kinds::SOFT_LEATHER_ARMOUR, 1)]
        }
        Priest | Smith => &[(kinds::MACE, 1), (kinds::SOFT_LEATHER_ARMOUR, 1)],
        Rogue | Ninja => &[(kinds::DAGGER, 1), (kinds::SOFT_LEATHER_ARMOUR, 1)],
        Ranger | Archer => &[
            (kinds::DAGGER, 1),
            (kinds::SHORT_BOW, 1),
            (kinds::ARROW, 40),
        ],
        Sniper => &[(kinds::DAGGER, 1), (kinds::LIGHT_CROSSBOW, 1), (kinds::BOLT, 30)],
        Cavalry | Beastmaster => &[(kinds::LANCE, 1), (kinds::SOFT_LEATHER_ARMOUR, 1)],
        Monk | ForceTrainer => &[(kinds::SOFT_LEATHER_ARMOUR, 1)],
        Mage | HighMage | Sorcerer | BlueMage | MagicEater | Mindcrafter | Imitator | Bard
        | Tourist | MirrorMaster | Elementalist => &[(kinds::DAGGER, 1), (kinds::CLOAK, 1)],
    }
}

/// Roll up a new character.
pub fn birth(choices: &BirthChoices, overrides: &KitOverrides, catalog: &Catalog, rng: &mut GameRng) -> Player {
    let mut player = Player::new(choices.race, choices.class, choices.personality, choices.stats);
    player.name = choices.name.clone();
    player.realm1 = choices.realm1;
    player.realm2 = choices.realm2;

    player
        .virtues
        .initialize(player.class, player.race, player.realms(), rng);
    outfit(&mut player, overrides, catalog);

    tracing::debug!(
        name = %player.name,
        race = %player.race.name(),
        class = %player.class.name(),
        items = player.inventory.len(),
        "character born"
    );
    player
}

/// Hand out the starting kit, wearing what fits.
pub fn outfit(player: &mut Player, overrides: &KitOverrides, catalog: &Catalog) {
    let kit = class_kit(player.class).iter().chain(COMMON_KIT);
    for &(id, count) in kit {
        let Some(id) = overrides.resolve(id) else {
            continue;
        };
        let Some(mut item) = catalog.make_item(id) else {
            tracing::warn!(?id, "starting kit names an unknown item");
            continue;
        };
        item.number = count;
        item.ident = IdentState::Known;
        add_outfit(player, item);
    }
}

fn add_outfit(player: &mut Player, item: Item) {
    if item.number == 1
        && let Some(slot) = free_slot(player, &item)
    {
        player.equipment.wear(slot, item);
        return;
    }
    player.inventory.push(item);
}

fn free_slot(player: &Player, item: &Item) -> Option<EquipSlot> {
    let slot = EquipSlot::for_tval(item.tval)?;
    if player.equipment.is_empty(slot) {
        return Some(slot);
    }
    match slot {
        EquipSlot::MainRing if player.equipment.is_empty(EquipSlot::SubRing) => Some(EquipSlot::SubRing),
        _ => None,
    }
}
