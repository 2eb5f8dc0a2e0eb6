//! Month schedule construction.

use dailydoku_core::Difficulty;
use log::debug;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{
    ScheduleError, SchedulePolicy,
    date::{DateKey, days_in_month},
};

/// One day of a monthly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The calendar day.
    pub date_key: DateKey,
    /// The difficulty assigned to that day.
    pub difficulty: Difficulty,
}

/// Builds the difficulty schedule for one month.
///
/// The result covers every day of the month in order and is a pure function
/// of the arguments: the random seed is derived by hashing `policy_version`
/// together with the calendar position, so republishing a month always
/// reproduces it.
///
/// Allocation proceeds in three phases. Percentage targets are first rounded
/// to whole-day quotas by largest remainder so they sum exactly to the days
/// in the month. If the policy reserves the fiendish block and the quotas
/// can pay for it, a 3-day `expert → fiendish → expert` run is pinned at a
/// seeded day, with expert banned within two days of the block's edges. The
/// remaining days are then filled left to right by a seeded weighted pick
/// among difficulties still under quota, subject to two guardrails: adjacent
/// days never differ by more than one tier, and expert never lands on two
/// consecutive days. A pick that leaves the rest of the month unfillable is
/// backtracked and the next candidate tried, so a single attempt fails only
/// when the pinned block admits no valid fill at all; such an attempt
/// restarts the month under a shifted seed, up to `policy.max_attempts`
/// times.
///
/// # Errors
///
/// - [`ScheduleError::Date`] if `(year, month)` is not a real month.
/// - [`ScheduleError::InvalidPolicy`] if the targets do not sum to 100.
/// - [`ScheduleError::AttemptsExhausted`] if every rebuild dead-ends.
pub fn build_schedule_for_month(
    year: u16,
    month: u8,
    policy_version: &str,
    policy: &SchedulePolicy,
) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    policy.validate()?;
    // Also validates `(year, month)`.
    let first_day = DateKey::new(year, month, 1)?;
    let days = days_in_month(year, month);
    let quotas = quotas_for_month(policy, days);
    let seed = derive_seed(policy_version, year, month);

    for attempt in 0..policy.max_attempts {
        let mut rng = Pcg64Mcg::seed_from_u64(seed.wrapping_add(attempt as u64));
        if let Some(difficulties) = try_fill_month(&mut rng, first_day, days, quotas, policy) {
            return Ok(difficulties
                .into_iter()
                .enumerate()
                .map(|(index, difficulty)| ScheduleEntry {
                    date_key: day_key(first_day, index),
                    difficulty,
                })
                .collect());
        }
        debug!("schedule fill for {year}-{month:02} dead-ended on attempt {attempt}");
    }
    Err(ScheduleError::AttemptsExhausted {
        year,
        month,
        attempts: policy.max_attempts,
    })
}

/// Returns the difficulty scheduled for a single day.
///
/// Rebuilds the owning month's schedule and indexes into it; scheduling
/// holds no per-day state.
///
/// # Errors
///
/// Same failure modes as [`build_schedule_for_month`].
pub fn get_difficulty_for_date(
    date_key: DateKey,
    policy_version: &str,
    policy: &SchedulePolicy,
) -> Result<Difficulty, ScheduleError> {
    let schedule =
        build_schedule_for_month(date_key.year(), date_key.month(), policy_version, policy)?;
    Ok(schedule[usize::from(date_key.day()) - 1].difficulty)
}

/// Hashes the policy version and calendar position into the month seed.
fn derive_seed(policy_version: &str, year: u16, month: u8) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(policy_version.as_bytes());
    hasher.update([0]);
    hasher.update(year.to_le_bytes());
    hasher.update([month]);
    let digest = hasher.finalize();
    let mut bytes = [0; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Largest-remainder rounding of the percentage targets to whole days.
///
/// The resulting quotas always sum to exactly `days`.
fn quotas_for_month(policy: &SchedulePolicy, days: u8) -> [u8; 6] {
    let days = u32::from(days);
    let mut quotas = [0_u8; 6];
    let mut remainders = [0_u32; 6];
    let mut assigned = 0;
    for (tier, &percent) in policy.target_percent.iter().enumerate() {
        let scaled = days * u32::from(percent);
        #[expect(clippy::cast_possible_truncation)]
        let floor = (scaled / 100) as u8;
        quotas[tier] = floor;
        remainders[tier] = scaled % 100;
        assigned += u32::from(floor);
    }
    // Hand the leftover days to the largest remainders, lowest tier first on
    // ties, so rounding is deterministic.
    for _ in assigned..days {
        let (tier, _) = remainders
            .iter()
            .enumerate()
            .max_by_key(|&(tier, &remainder)| (remainder, usize::MAX - tier))
            .unwrap_or((0, &0));
        quotas[tier] += 1;
        remainders[tier] = 0;
    }
    quotas
}

/// Weekday-shaped base weights per tier, gentler Monday through Thursday.
///
/// Fiendish and ultimate carry no weight: fiendish exists only inside the
/// reserved block, and ultimate sits beyond the adjacency reach of anything
/// the fill can place next to it.
fn base_weights(weekday: u8) -> [u32; 6] {
    if weekday < 4 {
        [32, 30, 22, 8, 0, 0]
    } else {
        [12, 22, 30, 24, 0, 0]
    }
}

/// One whole-month fill attempt. Returns `None` when the pinned block
/// admits no valid fill.
fn try_fill_month(
    rng: &mut Pcg64Mcg,
    first_day: DateKey,
    days: u8,
    quotas: [u8; 6],
    policy: &SchedulePolicy,
) -> Option<Vec<Difficulty>> {
    let days = usize::from(days);
    let mut assigned: Vec<Option<Difficulty>> = vec![None; days];
    let mut rem = quotas;

    let expert = usize::from(Difficulty::Expert.tier());
    let fiendish = usize::from(Difficulty::Fiendish.tier());

    // Reserve the fiendish block if the policy wants it and the quotas can
    // pay for its two expert flanks and one fiendish center.
    let mut block_center = None;
    if policy.fiendish_block && rem[fiendish] >= 1 && rem[expert] >= 2 {
        let center = rng.random_range(1..days - 1);
        assigned[center - 1] = Some(Difficulty::Expert);
        assigned[center] = Some(Difficulty::Fiendish);
        assigned[center + 1] = Some(Difficulty::Expert);
        rem[expert] -= 2;
        rem[fiendish] -= 1;
        block_center = Some(center);
    }
    // Fiendish appears only inside the block, so any quota left over is
    // upgraded-adjacent demand: fold it into expert.
    rem[expert] += rem[fiendish];
    rem[fiendish] = 0;

    if fill_from(rng, first_day, &mut assigned, &mut rem, 0, block_center) {
        Some(assigned.into_iter().flatten().collect())
    } else {
        None
    }
}

/// Fills days `day..` by seeded weighted choice with backtracking.
///
/// Candidates at each day are tried in a weighted random order; a choice
/// whose suffix cannot be completed is undone and the next candidate tried.
/// The search is exhaustive, so `false` means no guardrail-satisfying,
/// quota-exact completion exists for the current prefix.
fn fill_from(
    rng: &mut Pcg64Mcg,
    first_day: DateKey,
    assigned: &mut [Option<Difficulty>],
    rem: &mut [u8; 6],
    day: usize,
    block_center: Option<usize>,
) -> bool {
    if day == assigned.len() {
        return true;
    }
    if assigned[day].is_some() {
        return fill_from(rng, first_day, assigned, rem, day + 1, block_center);
    }

    let weights = base_weights(day_key(first_day, day).weekday());
    let prev = day.checked_sub(1).and_then(|d| assigned[d]);
    let next = assigned.get(day + 1).copied().flatten();
    let mut candidates: Vec<Difficulty> = Difficulty::ALL
        .into_iter()
        .filter(|&difficulty| eligible(difficulty, prev, next, rem, day, block_center))
        .collect();

    while !candidates.is_empty() {
        let picked = draw_weighted(rng, &weights, rem, &candidates);
        candidates.retain(|&difficulty| difficulty != picked);
        let tier = usize::from(picked.tier());
        rem[tier] -= 1;
        assigned[day] = Some(picked);
        if fill_from(rng, first_day, assigned, rem, day + 1, block_center) {
            return true;
        }
        assigned[day] = None;
        rem[tier] += 1;
    }
    false
}

/// Guardrail and quota check for placing one difficulty on one day.
fn eligible(
    difficulty: Difficulty,
    prev: Option<Difficulty>,
    next: Option<Difficulty>,
    rem: &[u8; 6],
    day: usize,
    block_center: Option<usize>,
) -> bool {
    if rem[usize::from(difficulty.tier())] == 0 || difficulty == Difficulty::Fiendish {
        return false;
    }
    for neighbor in [prev, next].into_iter().flatten() {
        if difficulty.tier_distance(neighbor) > 1 {
            return false;
        }
        if difficulty == Difficulty::Expert && neighbor == Difficulty::Expert {
            return false;
        }
    }
    if difficulty == Difficulty::Expert
        && let Some(center) = block_center
        && in_isolation_window(day, center)
    {
        return false;
    }
    true
}

/// Returns `true` for days within two days of the block's edges, where
/// expert may not appear outside the block itself.
fn in_isolation_window(day: usize, center: usize) -> bool {
    let edge_distance = if day + 1 < center {
        (center - 1) - day
    } else if day > center + 1 {
        day - (center + 1)
    } else {
        // Block days themselves; they are pre-assigned and never filled.
        return true;
    };
    edge_distance <= 2
}

/// Seeded weighted choice among the candidate difficulties.
///
/// Each candidate's weight is its weekday base weight scaled by its
/// remaining quota, which drains quotas roughly in proportion. If every
/// candidate's base weight is zero the choice falls back to quota-only
/// weights, which are positive for every candidate.
fn draw_weighted(
    rng: &mut Pcg64Mcg,
    weights: &[u32; 6],
    rem: &[u8; 6],
    candidates: &[Difficulty],
) -> Difficulty {
    let weight_of = |difficulty: Difficulty| {
        let tier = usize::from(difficulty.tier());
        weights[tier] * u32::from(rem[tier])
    };
    let mut total: u32 = candidates.iter().map(|&d| weight_of(d)).sum();
    let use_fallback = total == 0;
    if use_fallback {
        total = candidates
            .iter()
            .map(|&d| u32::from(rem[usize::from(d.tier())]))
            .sum();
    }
    let mut roll = rng.random_range(0..total);
    for &candidate in candidates {
        let weight = if use_fallback {
            u32::from(rem[usize::from(candidate.tier())])
        } else {
            weight_of(candidate)
        };
        if roll < weight {
            return candidate;
        }
        roll -= weight;
    }
    unreachable!("the roll never reaches the total weight");
}

fn day_key(first_day: DateKey, index: usize) -> DateKey {
    #[expect(clippy::cast_possible_truncation)]
    let day = (index + 1) as u8;
    // The index is always within the month, so this cannot fail.
    DateKey::new(first_day.year(), first_day.month(), day)
        .unwrap_or(first_day)
}
