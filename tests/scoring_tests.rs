//! Scorer integration tests.
//!
//! Orders are built by hand so each test controls the reward inputs; the
//! placed components come from the shipped catalog.

use rainmaker::catalog::{builtin, ComponentCatalog, Customer, Requirement};
use rainmaker::core::ScoringRules;
use rainmaker::orders::{
    resolve_submission, score_order, score_timeout, Order, PlacedComponent, SubmittedComponent,
    Tier,
};

fn catalog() -> ComponentCatalog {
    builtin::components().unwrap()
}

fn order_with(customer: Customer, required: &[(&str, u32)]) -> Order {
    Order {
        order_id: "order_001".into(),
        customer,
        scenario_id: "web-app".into(),
        scenario: "Web Application Stack".into(),
        description: "Needs a database and two droplets.".into(),
        required: required
            .iter()
            .map(|(t, q)| Requirement::new(*t, *q))
            .collect(),
        time_limit_sec: 60,
        base_reward: 400,
    }
}

/// `{postgres: 1, droplet-general: 2}`, reward 400, 60 seconds.
fn standard_order() -> Order {
    order_with(
        Customer::new("acme", "Acme"),
        &[("postgres", 1), ("droplet-general", 2)],
    )
}

fn place(catalog: &ComponentCatalog, types: &[&str]) -> Vec<PlacedComponent> {
    types
        .iter()
        .enumerate()
        .map(|(i, t)| PlacedComponent::new(format!("p{i}"), catalog.resolve(t).unwrap().clone()))
        .collect()
}

// =============================================================================
// Reward Tiers
// =============================================================================

#[test]
fn test_exact_build_is_perfect() {
    let catalog = catalog();
    let placed = place(&catalog, &["postgres", "droplet-general", "droplet-general"]);

    let result = score_order(&standard_order(), &placed, 30, 0.0, &ScoringRules::default());

    assert!(result.success);
    assert_eq!(result.tier, Tier::Perfect);
    assert_eq!(result.accuracy, 100);
    assert!(result.missing.is_empty());
    assert!(result.extra.is_empty());
    // 400 + round(30/60 * 0.25 * 400), no tip at multiplier 1.0
    assert_eq!(result.cash_earned, 450);
    assert_eq!(result.tip, 0);
}

#[test]
fn test_placement_order_does_not_matter() {
    let catalog = catalog();
    let a = place(&catalog, &["postgres", "droplet-general", "droplet-general"]);
    let b = place(&catalog, &["droplet-general", "postgres", "droplet-general"]);
    let rules = ScoringRules::default();

    let order = standard_order();
    assert_eq!(
        score_order(&order, &a, 12, 0.0, &rules),
        score_order(&order, &b, 12, 0.0, &rules)
    );
}

#[test]
fn test_perfect_tip_from_customer_and_upgrades() {
    let catalog = catalog();
    let placed = place(&catalog, &["postgres", "droplet-general", "droplet-general"]);
    let generous = order_with(
        Customer::new("whale", "Whale Corp").with_tip_multiplier(1.5),
        &[("postgres", 1), ("droplet-general", 2)],
    );
    let rules = ScoringRules::default();

    let result = score_order(&generous, &placed, 0, 0.0, &rules);
    assert_eq!(result.tip, 200);
    assert_eq!(result.cash_earned, 600);
    assert_eq!(result.message, "Perfect infrastructure! Whale Corp is impressed! +$200 tip!");

    let boosted = score_order(&standard_order(), &placed, 0, 0.4, &rules);
    assert_eq!(boosted.tip, 160);
    assert_eq!(boosted.cash_earned, 560);
}

#[test]
fn test_missing_components_fail() {
    let catalog = catalog();
    let placed = place(&catalog, &["postgres"]);

    let result = score_order(&standard_order(), &placed, 30, 0.0, &ScoringRules::default());

    assert!(!result.success);
    assert_eq!(result.tier, Tier::Failed);
    assert_eq!(result.accuracy, 33);
    assert_eq!(result.cash_earned, 0);
    assert_eq!(result.missing, vec!["droplet-general", "droplet-general"]);
    assert_eq!(
        result.message,
        "Order failed! Missing too many components: droplet-general, droplet-general"
    );
}

#[test]
fn test_extra_component_penalized() {
    let catalog = catalog();
    let placed = place(&catalog, &["postgres", "droplet-general", "droplet-general", "vpc"]);

    let result = score_order(&standard_order(), &placed, 30, 0.0, &ScoringRules::default());

    assert!(result.success);
    assert_eq!(result.tier, Tier::OverProvisioned);
    assert_eq!(result.accuracy, 100);
    assert_eq!(result.extra, vec!["vpc"]);
    assert_eq!(result.cash_earned, 380);
}

#[test]
fn test_heavy_over_provisioning_never_goes_negative() {
    let catalog = catalog();
    let mut types = vec!["postgres", "droplet-general", "droplet-general"];
    types.extend(std::iter::repeat("vpc").take(25));
    let placed = place(&catalog, &types);

    let result = score_order(&standard_order(), &placed, 30, 0.0, &ScoringRules::default());

    assert_eq!(result.tier, Tier::OverProvisioned);
    assert_eq!(result.extra.len(), 25);
    assert_eq!(result.cash_earned, 0);
}

// =============================================================================
// Partial Threshold
// =============================================================================

#[test]
fn test_partial_threshold_boundary() {
    let catalog = catalog();
    let order = order_with(Customer::new("acme", "Acme"), &[("droplet-general", 100)]);
    let rules = ScoringRules::default();

    let fifty = place(&catalog, &["droplet-general"; 50]);
    let result = score_order(&order, &fifty, 30, 0.0, &rules);
    assert!(result.success);
    assert_eq!(result.tier, Tier::Partial);
    assert_eq!(result.accuracy, 50);
    assert_eq!(result.cash_earned, 200);
    assert!(result.message.starts_with("Incomplete infrastructure. Missing: droplet-general"));

    let forty_nine = place(&catalog, &["droplet-general"; 49]);
    let result = score_order(&order, &forty_nine, 30, 0.0, &rules);
    assert!(!result.success);
    assert_eq!(result.tier, Tier::Failed);
    assert_eq!(result.accuracy, 49);
    assert_eq!(result.cash_earned, 0);
}

#[test]
fn test_partial_with_extras_still_partial() {
    let catalog = catalog();
    let order = order_with(
        Customer::new("acme", "Acme"),
        &[("postgres", 1), ("droplet-general", 1)],
    );
    let placed = place(&catalog, &["postgres", "redis"]);

    let result = score_order(&order, &placed, 30, 0.0, &ScoringRules::default());

    assert_eq!(result.tier, Tier::Partial);
    assert_eq!(result.accuracy, 50);
    assert_eq!(result.missing, vec!["droplet-general"]);
    assert_eq!(result.extra, vec!["redis"]);
    assert_eq!(result.cash_earned, 200);
}

// =============================================================================
// Timeouts and Submission Resolution
// =============================================================================

#[test]
fn test_timeout_lists_everything_missing() {
    let result = score_timeout(&standard_order(), &ScoringRules::default());

    assert!(!result.success);
    assert_eq!(result.accuracy, 0);
    assert_eq!(result.cash_earned, 0);
    assert_eq!(result.missing.len(), 3);
    assert_eq!(result.message, "Time's up! Acme left disappointed.");
}

#[test]
fn test_unknown_keys_are_dropped_before_scoring() {
    let catalog = catalog();
    let submitted = vec![
        SubmittedComponent::new("a", "postgres"),
        SubmittedComponent::new("b", "droplet-general"),
        SubmittedComponent::new("c", "quantum-mainframe"),
        SubmittedComponent::new("d", "droplet-general"),
    ];

    let resolved = resolve_submission(&catalog, &submitted);
    assert_eq!(resolved.placed.len(), 3);
    assert_eq!(resolved.unrecognized, vec!["quantum-mainframe"]);

    let result = score_order(
        &standard_order(),
        &resolved.placed,
        30,
        0.0,
        &ScoringRules::default(),
    );
    assert_eq!(result.tier, Tier::Perfect);
}

#[test]
fn test_result_wire_shape() {
    let result = score_timeout(&standard_order(), &ScoringRules::default());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["tier"], "Failed");
    assert_eq!(json["cash_earned"], 0);
    assert_eq!(json["missing"][0], "postgres");
}
