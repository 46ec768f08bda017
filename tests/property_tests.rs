//! Property tests for generation and scoring.

use proptest::prelude::*;

use rainmaker::catalog::{builtin, ComponentCatalog, Customer, Requirement, Scenario};
use rainmaker::core::{GameRng, OrderTiming, ScoringRules};
use rainmaker::orders::{
    score_order, time_limit, Order, OrderGenerator, PlacedComponent, Tier, UnlockFlags,
};

const TYPES: [&str; 6] = ["droplet-general", "postgres", "redis", "vpc", "spaces", "load-balancer"];

fn catalog() -> ComponentCatalog {
    builtin::components().unwrap()
}

fn order(required: &[(usize, u32)], reward: u32, limit: u32) -> Order {
    Order {
        order_id: "order_001".into(),
        customer: Customer::new("acme", "Acme"),
        scenario_id: "custom".into(),
        scenario: "Custom".into(),
        description: String::new(),
        required: required
            .iter()
            .map(|&(t, q)| Requirement::new(TYPES[t], q))
            .collect(),
        time_limit_sec: limit,
        base_reward: reward,
    }
}

fn place(catalog: &ComponentCatalog, picks: &[usize]) -> Vec<PlacedComponent> {
    picks
        .iter()
        .enumerate()
        .map(|(i, &t)| PlacedComponent::new(format!("p{i}"), catalog.resolve(TYPES[t]).unwrap().clone()))
        .collect()
}

proptest! {
    #[test]
    fn scoring_is_deterministic(
        required in prop::collection::vec((0..TYPES.len(), 1u32..4), 1..5),
        picks in prop::collection::vec(0..TYPES.len(), 0..12),
        time in 0u32..120,
    ) {
        let catalog = catalog();
        let order = order(&required, 400, 60);
        let placed = place(&catalog, &picks);
        let rules = ScoringRules::default();

        let first = score_order(&order, &placed, time, 0.2, &rules);
        let second = score_order(&order, &placed, time, 0.2, &rules);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn accuracy_is_a_percentage_and_tiers_agree(
        required in prop::collection::vec((0..TYPES.len(), 1u32..4), 1..5),
        picks in prop::collection::vec(0..TYPES.len(), 0..12),
    ) {
        let catalog = catalog();
        let order = order(&required, 500, 60);
        let result = score_order(&order, &place(&catalog, &picks), 30, 0.0, &ScoringRules::default());

        prop_assert!(result.accuracy <= 100);
        prop_assert_eq!(result.missing.is_empty(), result.accuracy == 100);
        prop_assert_eq!(result.success, result.accuracy >= 50);
        if !result.success {
            prop_assert_eq!(result.cash_earned, 0);
        }
    }

    #[test]
    fn adding_a_missing_unit_never_lowers_accuracy(
        required in prop::collection::vec((0..TYPES.len(), 1u32..4), 1..5),
        picks in prop::collection::vec(0..TYPES.len(), 0..8),
    ) {
        let catalog = catalog();
        let order = order(&required, 300, 60);
        let rules = ScoringRules::default();
        let before = score_order(&order, &place(&catalog, &picks), 0, 0.0, &rules);

        if let Some(missing) = before.missing.first() {
            let index = TYPES.iter().position(|t| *t == missing.as_str()).unwrap();
            let mut more = picks.clone();
            more.push(index);
            let after = score_order(&order, &place(&catalog, &more), 0, 0.0, &rules);
            prop_assert!(after.accuracy >= before.accuracy);
        }
    }

    #[test]
    fn more_time_never_pays_less(
        required in prop::collection::vec((0..TYPES.len(), 1u32..4), 1..5),
        picks in prop::collection::vec(0..TYPES.len(), 0..12),
        earlier in 0u32..=60,
        later in 0u32..=60,
    ) {
        let (low, high) = (earlier.min(later), earlier.max(later));
        let catalog = catalog();
        let order = order(&required, 400, 60);
        let rules = ScoringRules::default();

        // exact builds land in the perfect tier, arbitrary picks anywhere
        let mut exact = Vec::new();
        for &(t, q) in &required {
            exact.extend(std::iter::repeat(t).take(q as usize));
        }
        for build in [exact, picks] {
            let placed = place(&catalog, &build);
            let slow = score_order(&order, &placed, low, 0.0, &rules);
            let fast = score_order(&order, &placed, high, 0.0, &rules);

            prop_assert_eq!(slow.tier, fast.tier);
            if fast.tier == Tier::Perfect {
                prop_assert!(fast.cash_earned >= slow.cash_earned);
            } else {
                prop_assert_eq!(fast.cash_earned, slow.cash_earned);
            }
        }
    }

    #[test]
    fn time_limit_never_below_floor(patience in 1u8..=5, lines in 1usize..40) {
        let mut scenario = Scenario::new("s", "S", 100).with_description("x");
        for i in 0..lines {
            scenario = scenario.requires(format!("part-{i}"), 1);
        }
        let customer = Customer::new("c", "C").with_patience(patience);
        let timing = OrderTiming::default();

        prop_assert!(time_limit(&timing, &customer, &scenario) >= timing.floor_sec);
    }

    #[test]
    fn generated_orders_are_playable(seed in any::<u64>()) {
        let mut generator = OrderGenerator::new(
            builtin::scenarios().unwrap(),
            builtin::customers().unwrap(),
            OrderTiming::default(),
        );
        let mut rng = GameRng::new(seed);

        for _ in 0..10 {
            let order = generator.generate(&mut rng, UnlockFlags::premium()).unwrap();
            prop_assert!(order.total_units() > 0);
            prop_assert!(order.time_limit_sec >= 30);
            prop_assert!(order.base_reward > 0);
        }
    }
}
