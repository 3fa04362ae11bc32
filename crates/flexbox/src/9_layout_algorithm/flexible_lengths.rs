//! Resolving flexible lengths along the main axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>
//!
//! Free space is handed out in proportion to each item's factor. Items whose share would break
//! their min/max bound are frozen at the bound and leave the pool; the rest of the free space
//! is shared again among the items still in it.

use log::debug;

/// Main-axis inputs of one visible item in a line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexInput {
    /// Flex base size (hypothetical main size, already clamped to the bounds).
    pub basis: i32,
    pub min: i32,
    pub max: i32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
}

/// An item still sharing free space.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    slot: usize,
    basis: f64,
    weight: f64,
    min: f64,
    max: f64,
}

/// Whether free space is being added or removed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum FlexMode {
    Grow,
    Shrink,
}

/// Resolve the main sizes of one line's visible items given `free_space`
/// (target main size minus the line's content size).
///
/// Grow weights are `flex_grow`; shrink weights are `flex_shrink * basis`. When no item can
/// absorb the free space the bases are returned unchanged and the slack is left for
/// justify-content.
pub fn resolve_flexible_lengths(inputs: &[FlexInput], free_space: i32) -> Vec<i32> {
    let mode = match free_space {
        0 => return inputs.iter().map(|input| input.basis).collect(),
        space if space > 0 => FlexMode::Grow,
        _ => FlexMode::Shrink,
    };
    let pool: Vec<Candidate> = inputs
        .iter()
        .enumerate()
        .filter_map(|(slot, input)| {
            let weight = match mode {
                FlexMode::Grow => f64::from(input.flex_grow),
                FlexMode::Shrink => f64::from(input.flex_shrink) * f64::from(input.basis.max(0)),
            };
            (weight > 0.0).then_some(Candidate {
                slot,
                basis: f64::from(input.basis),
                weight,
                min: f64::from(input.min),
                max: f64::from(input.max),
            })
        })
        .collect();
    if pool.is_empty() {
        return inputs.iter().map(|input| input.basis).collect();
    }
    let mut sizes: Vec<f64> = inputs.iter().map(|input| f64::from(input.basis)).collect();
    for (slot, size) in distribute(pool, f64::from(free_space)) {
        if let Some(target) = sizes.get_mut(slot) {
            *target = size;
        }
    }
    debug!(
        target: "flexbox::flex",
        "[FLEX-{}] free_space={} sizes={:?}",
        if mode == FlexMode::Grow { "GROW" } else { "SHRINK" },
        free_space,
        sizes
    );
    round_cumulative(&sizes)
}

/// Freeze-on-clamp loop over an owned pool. Returns `(slot, size)` for every pooled candidate.
///
/// Each pass either resolves the whole pool or freezes at least one more candidate, so the loop
/// runs at most `pool.len()` times.
fn distribute(mut pool: Vec<Candidate>, free_space: f64) -> Vec<(usize, f64)> {
    let mut resolved: Vec<(usize, f64)> = Vec::with_capacity(pool.len());
    let mut remaining = free_space;
    while !pool.is_empty() {
        let total_weight: f64 = pool.iter().map(|candidate| candidate.weight).sum();
        let (frozen, still_flexing): (Vec<Candidate>, Vec<Candidate>) =
            pool.into_iter().partition(|candidate| {
                let target = candidate.basis + remaining * candidate.weight / total_weight;
                target < candidate.min || target > candidate.max
            });
        if frozen.is_empty() {
            resolved.extend(still_flexing.iter().map(|candidate| {
                let share = remaining * candidate.weight / total_weight;
                (candidate.slot, candidate.basis + share)
            }));
            break;
        }
        for candidate in &frozen {
            let target = candidate.basis + remaining * candidate.weight / total_weight;
            let clamped = target.clamp(candidate.min, candidate.max);
            remaining -= clamped - candidate.basis;
            resolved.push((candidate.slot, clamped));
        }
        pool = still_flexing;
    }
    resolved
}

/// Round to whole units carrying the error forward, so the rounded sizes add up to the rounded
/// total and each size stays within one unit of its exact value.
fn round_cumulative(sizes: &[f64]) -> Vec<i32> {
    let mut exact_total = 0.0f64;
    let mut rounded_total = 0i64;
    sizes
        .iter()
        .map(|&size| {
            exact_total += size;
            let next_total = exact_total.round() as i64;
            let rounded = next_total - rounded_total;
            rounded_total = next_total;
            rounded as i32
        })
        .collect()
}
