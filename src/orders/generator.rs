//! Order generator.
//!
//! Draws, in this order:
//! 1. a customer, uniformly
//! 2. the premium roll (only when premium is unlocked)
//! 3. a scenario, uniformly from the chosen pool
//! 4. one of the scenario's canned descriptions
//!
//! and derives the time limit:
//!
//! ```text
//! max(floor, base + (patience - neutral) * step - requirement_lines * penalty)
//! ```

use tracing::debug;

use super::order::{Order, UnlockFlags};
use crate::catalog::{Customer, CustomerRoster, Scenario, ScenarioBook, ScenarioTier};
use crate::core::{EngineError, GameRng, IdCounter, OrderTiming, Result};

/// Generates orders from a scenario book and customer roster.
///
/// Owns the order id counter; each session owns one generator.
#[derive(Clone, Debug)]
pub struct OrderGenerator {
    scenarios: ScenarioBook,
    customers: CustomerRoster,
    timing: OrderTiming,
    ids: IdCounter,
}

impl OrderGenerator {
    /// Create a generator over the given catalogs.
    pub fn new(scenarios: ScenarioBook, customers: CustomerRoster, timing: OrderTiming) -> Self {
        let ids = IdCounter::new(timing.id_prefix.clone());
        Self {
            scenarios,
            customers,
            timing,
            ids,
        }
    }

    /// Generate the next order.
    ///
    /// Fails with `EmptyCatalog` when there is no customer or no eligible
    /// scenario. An empty premium pool falls back to the standard pool.
    /// The id counter only advances on success.
    pub fn generate(&mut self, rng: &mut GameRng, flags: UnlockFlags) -> Result<Order> {
        let customer = rng
            .choose(self.customers.as_slice())
            .ok_or(EngineError::EmptyCatalog { pool: "customers" })?
            .clone();

        let premium = !self.scenarios.pool(ScenarioTier::Premium).is_empty()
            && flags.premium_orders
            && rng.gen_bool(self.timing.premium_chance);
        let tier = if premium {
            ScenarioTier::Premium
        } else {
            ScenarioTier::Standard
        };

        let scenario = rng
            .choose(self.scenarios.pool(tier))
            .ok_or(EngineError::EmptyCatalog { pool: "scenarios" })?;
        let text = rng
            .choose(&scenario.descriptions)
            .ok_or(EngineError::EmptyCatalog { pool: "descriptions" })?;

        let time_limit_sec = time_limit(&self.timing, &customer, scenario);
        let description = if customer.personality.is_empty() {
            text.clone()
        } else {
            format!("{text} {}", customer.personality)
        };

        let order = Order {
            order_id: self.ids.next_id(),
            scenario_id: scenario.id.clone(),
            scenario: scenario.title.clone(),
            description,
            required: scenario.requirements.clone(),
            time_limit_sec,
            base_reward: scenario.base_reward,
            customer,
        };

        debug!(
            order_id = %order.order_id,
            scenario = %order.scenario_id,
            customer = %order.customer.id,
            premium,
            time_limit_sec,
            "generated order"
        );
        Ok(order)
    }

    /// Reset the id counter; the next order is `order_001`.
    pub fn reset_counter(&mut self) {
        self.ids.reset();
    }

    /// Orders issued since the last reset.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.ids.issued()
    }

    /// Current id counter, for snapshots.
    #[must_use]
    pub fn counter(&self) -> &IdCounter {
        &self.ids
    }

    /// Replace the id counter, when restoring a snapshot.
    pub fn restore_counter(&mut self, ids: IdCounter) {
        self.ids = ids;
    }

    /// The scenario book orders are drawn from.
    #[must_use]
    pub fn scenarios(&self) -> &ScenarioBook {
        &self.scenarios
    }

    /// The customer roster orders are placed by.
    #[must_use]
    pub fn customers(&self) -> &CustomerRoster {
        &self.customers
    }
}

/// Time limit for a customer and scenario, never below the floor.
#[must_use]
pub fn time_limit(timing: &OrderTiming, customer: &Customer, scenario: &Scenario) -> u32 {
    let patience_bonus = (i64::from(customer.patience) - i64::from(timing.neutral_patience))
        * i64::from(timing.patience_step_sec);
    let lines = i64::try_from(scenario.requirements.len()).unwrap_or(i64::MAX);
    let complexity_penalty = lines.saturating_mul(i64::from(timing.complexity_penalty_sec));

    let raw = i64::from(timing.base_time_sec) + patience_bonus - complexity_penalty;
    let clamped = raw.max(i64::from(timing.floor_sec));
    u32::try_from(clamped).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn generator() -> OrderGenerator {
        OrderGenerator::new(
            builtin::scenarios().unwrap(),
            builtin::customers().unwrap(),
            OrderTiming::default(),
        )
    }

    fn scenario_with_lines(lines: usize) -> Scenario {
        (0..lines).fold(
            Scenario::new("s", "S", 100).with_description("x"),
            |s, i| s.requires(format!("c{i}"), 1),
        )
    }

    #[test]
    fn test_time_limit_formula() {
        let timing = OrderTiming::default();

        // Neutral patience, 4 lines: 60 - 8
        let neutral = Customer::new("a", "A").with_patience(3);
        assert_eq!(time_limit(&timing, &neutral, &scenario_with_lines(4)), 52);

        // Patient customer, 5 lines: 60 + 10 - 10
        let patient = Customer::new("b", "B").with_patience(4);
        assert_eq!(time_limit(&timing, &patient, &scenario_with_lines(5)), 60);

        // Impatient customer, 7 lines: 60 - 10 - 14
        let impatient = Customer::new("c", "C").with_patience(2);
        assert_eq!(time_limit(&timing, &impatient, &scenario_with_lines(7)), 36);
    }

    #[test]
    fn test_time_limit_floor() {
        let timing = OrderTiming::default();
        let hasty = Customer::new("a", "A").with_patience(1);
        assert_eq!(time_limit(&timing, &hasty, &scenario_with_lines(10)), 30);
    }

    #[test]
    fn test_ids_increment_and_reset() {
        let mut generator = generator();
        let mut rng = GameRng::new(42);

        let first = generator.generate(&mut rng, UnlockFlags::default()).unwrap();
        let second = generator.generate(&mut rng, UnlockFlags::default()).unwrap();
        assert_eq!(first.order_id, "order_001");
        assert_eq!(second.order_id, "order_002");

        generator.reset_counter();
        let third = generator.generate(&mut rng, UnlockFlags::default()).unwrap();
        assert_eq!(third.order_id, "order_001");
    }

    #[test]
    fn test_same_seed_same_orders() {
        let mut a = generator();
        let mut b = generator();
        let mut rng_a = GameRng::new(7);
        let mut rng_b = GameRng::new(7);

        for _ in 0..20 {
            assert_eq!(
                a.generate(&mut rng_a, UnlockFlags::premium()).unwrap(),
                b.generate(&mut rng_b, UnlockFlags::premium()).unwrap()
            );
        }
    }

    #[test]
    fn test_locked_premium_never_drawn() {
        let mut generator = generator();
        let mut rng = GameRng::new(3);

        for _ in 0..200 {
            let order = generator.generate(&mut rng, UnlockFlags::default()).unwrap();
            let scenario = generator.scenarios().by_id(&order.scenario_id).unwrap();
            assert_eq!(scenario.tier, ScenarioTier::Standard);
        }
    }

    #[test]
    fn test_certain_premium_always_drawn() {
        let timing = OrderTiming {
            premium_chance: 1.0,
            ..OrderTiming::default()
        };
        let mut generator =
            OrderGenerator::new(builtin::scenarios().unwrap(), builtin::customers().unwrap(), timing);
        let mut rng = GameRng::new(3);

        for _ in 0..50 {
            let order = generator.generate(&mut rng, UnlockFlags::premium()).unwrap();
            let scenario = generator.scenarios().by_id(&order.scenario_id).unwrap();
            assert_eq!(scenario.tier, ScenarioTier::Premium);
        }
    }

    #[test]
    fn test_description_carries_personality() {
        let mut generator = generator();
        let mut rng = GameRng::new(11);
        let order = generator.generate(&mut rng, UnlockFlags::default()).unwrap();

        assert!(order.description.ends_with(&order.customer.personality));
        let scenario = generator.scenarios().by_id(&order.scenario_id).unwrap();
        assert!(scenario.descriptions.iter().any(|d| order.description.starts_with(d.as_str())));
    }

    #[test]
    fn test_empty_catalogs() {
        let mut rng = GameRng::new(1);

        let mut no_customers = OrderGenerator::new(
            builtin::scenarios().unwrap(),
            CustomerRoster::new(),
            OrderTiming::default(),
        );
        let err = no_customers.generate(&mut rng, UnlockFlags::default()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyCatalog { pool: "customers" }));

        let mut no_scenarios = OrderGenerator::new(
            ScenarioBook::new(),
            builtin::customers().unwrap(),
            OrderTiming::default(),
        );
        let err = no_scenarios.generate(&mut rng, UnlockFlags::premium()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyCatalog { pool: "scenarios" }));
        assert_eq!(no_scenarios.issued(), 0);
    }
}
