//! Alignment (update_alignment)

use crate::player::Virtue;

use super::StatusView;

const ALIGN_LIMIT: i32 = 9999;

/// Kill-driven base alignment shifted by the character's virtues and race.
pub fn calc_alignment(view: &StatusView<'_>) -> i32 {
    let p = view.player;
    let mut align = p.align_base;
    for (virtue, value) in p.virtues.iter() {
        let value = i32::from(value);
        align += match virtue {
            Virtue::Justice => value * 2,
            Virtue::Honour | Virtue::Faith | Virtue::Compassion => value,
            Virtue::Unlife => -value,
            _ => 0,
        };
    }
    align += p.race.info().align_bias;
    align.clamp(-ALIGN_LIMIT, ALIGN_LIMIT)
}
