//! Order scoring.
//!
//! The scorer is a pure function of the order, the placed set, the time
//! left and the tip bonus. It tallies both sides into multisets, records
//! shortfalls as `missing` and surpluses as `extra`, then picks a reward
//! tier:
//!
//! | Tier | Condition | Reward |
//! |------|-----------|--------|
//! | Perfect | nothing missing, nothing extra | base + time bonus + tip |
//! | OverProvisioned | nothing missing, some extra | base * (1 - penalty * extra) |
//! | Partial | something missing, accuracy >= threshold | base * accuracy / 100 |
//! | Failed | accuracy < threshold | 0 |

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::order::{Order, PlacedComponent};
use crate::core::ScoringRules;

/// Reward branch a submission landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Exact match.
    Perfect,
    /// Everything required plus surplus.
    OverProvisioned,
    /// Incomplete but above the partial threshold.
    Partial,
    /// Below the partial threshold.
    Failed,
}

/// Scorer output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    /// Whether the customer pays anything.
    pub success: bool,
    /// Reward branch.
    pub tier: Tier,
    /// Share of required units satisfied, 0-100.
    pub accuracy: u32,
    /// Total payout, tip included.
    pub cash_earned: u64,
    /// Tip portion of `cash_earned` (perfect orders only).
    pub tip: u64,
    /// Feedback line for the player.
    pub message: String,
    /// One entry per missing unit.
    pub missing: Vec<String>,
    /// One entry per surplus unit.
    pub extra: Vec<String>,
}

/// Multiset of type keys that remembers first-seen order.
#[derive(Default)]
struct Tally<'a> {
    order: Vec<&'a str>,
    counts: FxHashMap<&'a str, u32>,
}

impl<'a> Tally<'a> {
    fn add(&mut self, key: &'a str, n: u32) {
        if let Some(count) = self.counts.get_mut(key) {
            *count = count.saturating_add(n);
        } else {
            self.order.push(key);
            self.counts.insert(key, n);
        }
    }

    fn get(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    fn iter(&self) -> impl Iterator<Item = (&'a str, u32)> + '_ {
        self.order.iter().map(move |k| (*k, self.get(k)))
    }

    fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Score a placed set against an order.
///
/// `tip_bonus` (from purchased upgrades) is added to the customer's tip
/// multiplier and only affects the perfect tier.
#[must_use]
pub fn score_order(
    order: &Order,
    placed: &[PlacedComponent],
    time_remaining: u32,
    tip_bonus: f64,
    rules: &ScoringRules,
) -> OrderResult {
    let mut required = Tally::default();
    for line in &order.required {
        required.add(&line.component_type, line.quantity);
    }
    let mut submitted = Tally::default();
    for item in placed {
        submitted.add(item.component_type(), 1);
    }

    let mut missing = Vec::new();
    for (key, need) in required.iter() {
        let have = submitted.get(key);
        missing.extend(std::iter::repeat(key.to_string()).take(need.saturating_sub(have) as usize));
    }
    let mut extra = Vec::new();
    for (key, have) in submitted.iter() {
        let need = required.get(key);
        extra.extend(std::iter::repeat(key.to_string()).take(have.saturating_sub(need) as usize));
    }

    let total = required.total();
    let missing_units = u32::try_from(missing.len()).unwrap_or(u32::MAX);
    let accuracy = accuracy_percent(total, missing_units);

    let base = f64::from(order.base_reward);
    let (tier, cash_earned, tip, message) = if missing.is_empty() && extra.is_empty() {
        let time_bonus = if order.time_limit_sec == 0 {
            0.0
        } else {
            f64::from(time_remaining) / f64::from(order.time_limit_sec)
                * rules.time_bonus_fraction
                * base
        };
        let time_bonus = non_negative_round(time_bonus);
        let tip = non_negative_round(base * (order.customer.tip_multiplier + tip_bonus - 1.0));
        let cash = u64::from(order.base_reward) + time_bonus + tip;
        let message = format!(
            "Perfect infrastructure! {} is impressed! +${tip} tip!",
            order.customer.name
        );
        (Tier::Perfect, cash, tip, message)
    } else if missing.is_empty() {
        let extra_units = extra.len() as f64;
        let cash = non_negative_round(base * (1.0 - rules.over_provision_penalty * extra_units));
        let message = format!(
            "Good work, but you added {} unnecessary component(s). Slightly over-provisioned!",
            extra.len()
        );
        (Tier::OverProvisioned, cash, 0, message)
    } else if accuracy >= rules.partial_threshold {
        let cash = non_negative_round(base * f64::from(accuracy) / 100.0);
        let message = format!(
            "Incomplete infrastructure. Missing: {}. Partial payment.",
            missing.join(", ")
        );
        (Tier::Partial, cash, 0, message)
    } else {
        let message = format!(
            "Order failed! Missing too many components: {}",
            missing.join(", ")
        );
        (Tier::Failed, 0, 0, message)
    };

    debug!(
        order_id = %order.order_id,
        ?tier,
        accuracy,
        cash_earned,
        missing = missing.len(),
        extra = extra.len(),
        "scored order"
    );

    OrderResult {
        success: tier != Tier::Failed,
        tier,
        accuracy,
        cash_earned,
        tip,
        message,
        missing,
        extra,
    }
}

/// Score an order whose timer ran out.
///
/// Scored like an empty submission (zero accuracy, every required unit
/// listed as missing) but always in the failed tier, whatever the partial
/// threshold.
#[must_use]
pub fn score_timeout(order: &Order, rules: &ScoringRules) -> OrderResult {
    let mut result = score_order(order, &[], 0, 0.0, rules);
    result.success = false;
    result.tier = Tier::Failed;
    result.cash_earned = 0;
    result.tip = 0;
    result.message = format!("Time's up! {} left disappointed.", order.customer.name);
    result
}

/// `round(100 * (total - missing) / total)`, half rounding up; 0 when
/// nothing is required.
fn accuracy_percent(total: u32, missing: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let satisfied = u64::from(total.saturating_sub(missing));
    let total = u64::from(total);
    let pct = (200 * satisfied + total) / (2 * total);
    u32::try_from(pct).unwrap_or(100).min(100)
}

fn non_negative_round(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
