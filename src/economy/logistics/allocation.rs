use std::collections::BTreeMap;

use super::plan::AllocationPlan;
use crate::economy::goods::Good;

/// Decide how many units of each good to ship.
///
/// Plan entries are served first in insertion order, each bounded by what
/// was collected and by the capacity left. Whatever capacity remains is
/// then filled greedily in `Good` order. The result never exceeds
/// `capacity` in total nor `collected` per good.
pub fn choose_allocation(
    collected: &BTreeMap<Good, u32>,
    capacity: u32,
    plan: Option<&AllocationPlan>,
) -> BTreeMap<Good, u32> {
    let mut remaining = collected.clone();
    let mut capacity_left = capacity;
    let mut chosen: BTreeMap<Good, u32> = BTreeMap::new();

    let mut ship = |good: Good, wanted: u32, remaining: &mut BTreeMap<Good, u32>| {
        let available = remaining.get(&good).copied().unwrap_or(0);
        let take = wanted.min(available).min(capacity_left);
        if take > 0 {
            remaining.insert(good, available - take);
            capacity_left -= take;
            *chosen.entry(good).or_default() += take;
        }
    };

    if let Some(plan) = plan {
        for (good, requested) in plan.iter() {
            ship(good, requested, &mut remaining);
        }
    }

    let goods: Vec<Good> = remaining.keys().copied().collect();
    for good in goods {
        ship(good, u32::MAX, &mut remaining);
    }

    chosen
}

/// Bring a plan within what can be shipped.
///
/// Each request is first cut to the amount collected. If the total still
/// exceeds `capacity`, the overflow is removed starting from the most
/// recently added entry. Entries that drop to zero are kept. Applying the
/// clamp twice gives the same plan, and no entry ever grows.
pub fn clamp_plan(
    plan: &AllocationPlan,
    collected: &BTreeMap<Good, u32>,
    capacity: u32,
) -> AllocationPlan {
    let mut clamped = plan.clone();
    for (good, requested) in clamped.entries_mut() {
        let available = collected.get(&*good).copied().unwrap_or(0);
        *requested = (*requested).min(available);
    }

    let mut overflow = clamped.total().saturating_sub(u64::from(capacity));
    for (_, requested) in clamped.entries_mut().iter_mut().rev() {
        if overflow == 0 {
            break;
        }
        let cut = u64::from(*requested).min(overflow);
        // cut <= requested, so it fits in u32
        *requested -= cut as u32;
        overflow -= cut;
    }

    clamped
}
