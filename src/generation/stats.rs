//! Stat allocation: points budget, stat rolls, ability costs.
//!
//! Cards in a series start weaker and grow stronger with each stage. Only
//! HP scales with the budget; attack, resistance and speed are flat rolls
//! whatever the rarity.

use smallvec::{smallvec, SmallVec};

use crate::cards::Stats;
use crate::core::ForgeRng;

/// Points every card starts with.
pub const BASE_POINTS: i32 = 4;

/// HP points bought by one ability point.
pub const ABILITY_TO_HP_PTS: i32 = 2;

/// Inclusive range of the HP multiplier.
pub const HP_MULTIPLIER: (i32, i32) = (1, 10);
/// Inclusive attack range.
pub const ATK_RANGE: (i32, i32) = (4, 10);
/// Inclusive resistance range.
pub const RES_RANGE: (i32, i32) = (1, 8);
/// Inclusive speed range.
pub const SPD_RANGE: (i32, i32) = (1, 10);

/// Ability costs. Never more than two entries.
pub type AbilityCosts = SmallVec<[i32; 2]>;

/// Points budget for a card.
///
/// `series_index` is the series stage, or `1` for a standalone card (which
/// contributes no bonus).
///
/// ```
/// use card_forge::generation::stats::points_budget;
///
/// assert_eq!(points_budget(2, 1), 6);
/// assert_eq!(points_budget(0, 3), 6);
/// ```
#[must_use]
pub fn points_budget(rarity_index: u32, series_index: u32) -> i32 {
    let rarity_bonus = rarity_index as i32;
    let series_bonus = series_index as i32 - 1;
    BASE_POINTS + rarity_bonus + series_bonus
}

/// Roll stats from a budget.
///
/// Draw order is fixed (HP points, HP multiplier, attack, resistance,
/// speed) so a seed always reproduces the same card.
pub fn allocate_stats(budget: i32, rng: &mut ForgeRng) -> Stats {
    let hp_points = rng.roll(0, (budget / 2).max(0));
    let bonus_hp_points = budget + hp_points * ABILITY_TO_HP_PTS;
    let hp = rng.roll(HP_MULTIPLIER.0, HP_MULTIPLIER.1) * bonus_hp_points;

    let atk = rng.roll(ATK_RANGE.0, ATK_RANGE.1);
    let res = rng.roll(RES_RANGE.0, RES_RANGE.1);
    let spd = rng.roll(SPD_RANGE.0, SPD_RANGE.1);

    Stats { hp, atk, res, spd }
}

/// Split ability points into per-ability costs.
///
/// The result always sums to `points`.
pub fn ability_point_costs(points: i32, rarity_index: u32, rng: &mut ForgeRng) -> AbilityCosts {
    if points >= 6 {
        smallvec![4, points - 4]
    } else if points >= 4 {
        let first_cost = if rng.gen_bool(0.5) { 3 } else { 4 };
        if first_cost == points {
            smallvec![points]
        } else {
            smallvec![first_cost, points - first_cost]
        }
    } else if points == 3 {
        if rarity_index < 1 || !rng.gen_bool(0.5) {
            smallvec![2, 1]
        } else {
            smallvec![3]
        }
    } else {
        smallvec![points]
    }
}
