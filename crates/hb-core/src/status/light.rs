//! Light radius (calc_light_radius)

use crate::object::light_radius;

use super::StatusView;

const MAX_LIGHT_RADIUS: i32 = 4;

/// Radius lit by worn equipment. Innate light guarantees at least one
/// square even when darkness flags cancel the items out.
pub fn calc_light_radius(view: &StatusView<'_>) -> i32 {
    let radius: i32 = view.equipment_flags().map(|(_, _, flags)| light_radius(&flags)).sum();
    if radius <= 0 && view.has_lite().is_present() {
        return 1;
    }
    radius.clamp(0, MAX_LIGHT_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::consts::A_MAX;
    use crate::object::Catalog;
    use crate::object::catalog::{artifacts, kinds};
    use crate::player::{EquipSlot, Personality, Player, PlayerClass, PlayerRace};

    fn player(race: PlayerRace) -> Player {
        Player::new(race, PlayerClass::Warrior, Personality::Ordinary, [14; A_MAX])
    }

    #[test]
    fn test_torch_and_empty_torch() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human);
        p.equip(EquipSlot::Lite, catalog.make_item(kinds::WOODEN_TORCH).unwrap());
        assert_eq!(calc_light_radius(&StatusView::new(&p, &catalog, &config)), 2);

        if let Some(torch) = p.equipment.get_mut(EquipSlot::Lite) {
            torch.fuel = 0;
        }
        assert_eq!(calc_light_radius(&StatusView::new(&p, &catalog, &config)), 0);
    }

    #[test]
    fn test_innate_light_floor() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let p = player(PlayerRace::Sprite);
        assert_eq!(calc_light_radius(&StatusView::new(&p, &catalog, &config)), 1);
    }

    #[test]
    fn test_radius_capped() {
        let catalog = Catalog::standard();
        let config = EngineConfig::default();
        let mut p = player(PlayerRace::Human);
        p.equip(EquipSlot::Lite, catalog.make_artifact(artifacts::PHIAL_OF_GALADRIEL).unwrap());
        p.equip(EquipSlot::MainHand, catalog.make_artifact(artifacts::RINGIL).unwrap());
        p.equip(EquipSlot::SubHand, catalog.make_artifact(artifacts::TWINKLE).unwrap());
        assert_eq!(calc_light_radius(&StatusView::new(&p, &catalog, &config)), 4);
    }
}
