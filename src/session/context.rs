//! The session context.
//!
//! A `Session` owns every piece of mutable state one player touches: the
//! injected RNG streams, both id counters, the live cluster, shop levels,
//! the economy and the current work item. Nothing is global, so any number
//! of sessions can coexist in one process.

use tracing::{info, warn};

use super::phase::{GamePhase, PhaseEvent, RoundRating, RoundSummary};
use super::snapshot::SessionSnapshot;
use crate::catalog::{builtin, ComponentCatalog, CustomerRoster, ScenarioBook};
use crate::cluster::{apply_action, ActionResult, ClusterAction, ClusterState, Ticket, TicketGenerator};
use crate::core::{EngineConfig, EngineError, GameRng, Result};
use crate::orders::{
    resolve_submission, score_order, score_timeout, Order, OrderGenerator, OrderResult,
    PlacedComponent, SubmittedComponent,
};
use crate::shop::{ShopState, UpgradeKind};

const CLUSTER_STREAM: &str = "cluster";

/// One player's game.
#[derive(Clone, Debug)]
pub struct Session {
    config: EngineConfig,
    catalog: ComponentCatalog,
    orders: OrderGenerator,
    tickets: TicketGenerator,
    /// Order generation stream.
    rng: GameRng,
    /// Ticket and pod-name stream.
    cluster_rng: GameRng,
    cluster: ClusterState,
    shop: ShopState,
    phase: GamePhase,
    cash: u64,
    round: u32,
    orders_completed: u32,
    perfect_orders: u32,
    ticket_points: u64,
    current_order: Option<Order>,
    pre_placed: Vec<PlacedComponent>,
    last_result: Option<OrderResult>,
    current_ticket: Option<Ticket>,
}

impl Session {
    /// Create a session over the shipped catalogs.
    pub fn new(seed: u64, config: EngineConfig) -> Result<Self> {
        Self::with_catalogs(
            seed,
            config,
            builtin::components()?,
            builtin::scenarios()?,
            builtin::customers()?,
        )
    }

    /// Create a session over custom catalogs.
    pub fn with_catalogs(
        seed: u64,
        config: EngineConfig,
        catalog: ComponentCatalog,
        scenarios: ScenarioBook,
        customers: CustomerRoster,
    ) -> Result<Self> {
        config.validate()?;
        // Reported, not rejected: such scenarios are simply unwinnable.
        let dangling = catalog.dangling_requirements(&scenarios).len();
        if dangling > 0 {
            warn!(dangling, "some scenarios can never be completed with this catalog");
        }

        let rng = GameRng::new(seed);
        let mut cluster_rng = rng.for_context(CLUSTER_STREAM);
        let cluster = ClusterState::initial(config.tickets.namespace.clone(), &mut cluster_rng);

        Ok(Self {
            orders: OrderGenerator::new(scenarios, customers, config.timing.clone()),
            tickets: TicketGenerator::new(config.tickets.clone()),
            catalog,
            rng,
            cluster_rng,
            cluster,
            shop: ShopState::default(),
            phase: GamePhase::Menu,
            cash: 0,
            round: 1,
            orders_completed: 0,
            perfect_orders: 0,
            ticket_points: 0,
            current_order: None,
            pre_placed: Vec::new(),
            last_result: None,
            current_ticket: None,
            config,
        })
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Cash on hand.
    #[must_use]
    pub fn cash(&self) -> u64 {
        self.cash
    }

    /// Round number, from 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Orders played in the current round.
    #[must_use]
    pub fn orders_completed(&self) -> u32 {
        self.orders_completed
    }

    /// Orders with 100% accuracy in the current round.
    #[must_use]
    pub fn perfect_orders(&self) -> u32 {
        self.perfect_orders
    }

    /// Points earned from cluster tickets.
    #[must_use]
    pub fn ticket_points(&self) -> u64 {
        self.ticket_points
    }

    /// Order on the clock, if any.
    #[must_use]
    pub fn current_order(&self) -> Option<&Order> {
        self.current_order.as_ref()
    }

    /// Components the auto-complete upgrade placed on the current order.
    #[must_use]
    pub fn pre_placed(&self) -> &[PlacedComponent] {
        &self.pre_placed
    }

    /// Most recent order result.
    #[must_use]
    pub fn last_result(&self) -> Option<&OrderResult> {
        self.last_result.as_ref()
    }

    /// Ticket in play, if any.
    #[must_use]
    pub fn current_ticket(&self) -> Option<&Ticket> {
        self.current_ticket.as_ref()
    }

    /// Upgrade levels.
    #[must_use]
    pub fn shop(&self) -> &ShopState {
        &self.shop
    }

    /// Live cluster.
    #[must_use]
    pub fn cluster(&self) -> &ClusterState {
        &self.cluster
    }

    /// Component catalog used to resolve submissions.
    #[must_use]
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Order flow ===

    /// Start a new game: wipe economy, upgrades, counters and cluster, then
    /// put the first order on the clock.
    pub fn start_game(&mut self) -> Result<&Order> {
        let next = self.phase.next(PhaseEvent::StartGame)?;

        self.cash = 0;
        self.round = 1;
        self.orders_completed = 0;
        self.perfect_orders = 0;
        self.shop = ShopState::default();
        self.last_result = None;
        self.orders.reset_counter();
        self.reset_cluster();

        self.deal_order()?;
        self.enter(next);
        self.active_order()
    }

    /// Score the player's build for the current order.
    ///
    /// Unknown component keys are dropped with a warning before scoring.
    /// `time_remaining` is capped at the order's time limit.
    pub fn submit(
        &mut self,
        submitted: &[SubmittedComponent],
        time_remaining: u32,
    ) -> Result<OrderResult> {
        let order = self.current_order.as_ref().ok_or(EngineError::MissingActiveOrder)?;
        let next = self.phase.next(PhaseEvent::Submit)?;

        let resolved = resolve_submission(&self.catalog, submitted);
        let result = score_order(
            order,
            &resolved.placed,
            time_remaining.min(order.time_limit_sec),
            self.shop.tip_bonus(),
            &self.config.scoring,
        );

        self.record(&result);
        self.enter(next);
        Ok(result)
    }

    /// The timer ran out on the current order.
    pub fn timeout(&mut self) -> Result<OrderResult> {
        let order = self.current_order.as_ref().ok_or(EngineError::MissingActiveOrder)?;
        let next = self.phase.next(PhaseEvent::Timeout)?;

        let result = score_timeout(order, &self.config.scoring);

        self.record(&result);
        self.enter(next);
        Ok(result)
    }

    /// Leave feedback: deal the next order, or end the round once the
    /// quota is reached.
    pub fn advance(&mut self) -> Result<GamePhase> {
        let round_over = self.orders_completed >= self.config.rounds.orders_per_round;
        let next = self.phase.next(PhaseEvent::Advance { round_over })?;

        if round_over {
            self.current_order = None;
            self.pre_placed.clear();
        } else {
            self.deal_order()?;
        }
        self.enter(next);
        Ok(next)
    }

    /// Enter the upgrade shop.
    pub fn open_shop(&mut self) -> Result<()> {
        let next = self.phase.next(PhaseEvent::OpenShop)?;
        self.enter(next);
        Ok(())
    }

    /// Buy the next level of an upgrade. Returns the price paid.
    pub fn purchase(&mut self, kind: UpgradeKind) -> Result<u64> {
        self.phase.next(PhaseEvent::Purchase)?;
        Ok(self.shop.purchase(kind, &mut self.cash)?)
    }

    /// Start the next round with the first order already dealt.
    pub fn next_round(&mut self) -> Result<&Order> {
        let next = self.phase.next(PhaseEvent::NextRound)?;

        self.deal_order()?;
        self.round += 1;
        self.orders_completed = 0;
        self.perfect_orders = 0;
        self.enter(next);
        self.active_order()
    }

    /// Return to the title screen.
    pub fn back_to_menu(&mut self) -> Result<()> {
        let next = self.phase.next(PhaseEvent::BackToMenu)?;
        self.current_order = None;
        self.pre_placed.clear();
        self.enter(next);
        Ok(())
    }

    /// Summary of the round so far.
    #[must_use]
    pub fn round_summary(&self) -> RoundSummary {
        RoundSummary {
            round: self.round,
            orders_completed: self.orders_completed,
            perfect_orders: self.perfect_orders,
            cash: self.cash,
            rating: RoundRating::for_perfect_orders(self.perfect_orders),
        }
    }

    /// Restart order ids at `order_001`.
    pub fn reset_order_counter(&mut self) {
        self.orders.reset_counter();
    }

    // === Cluster tickets ===

    /// Put a new ticket in play against the live cluster.
    pub fn next_ticket(&mut self) -> Result<&Ticket> {
        let ticket = self.tickets.generate(&mut self.cluster_rng, &self.cluster)?;
        Ok(&*self.current_ticket.insert(ticket))
    }

    /// Apply the player's action to the ticket in play.
    ///
    /// The ticket is consumed whether or not the action matched.
    pub fn apply_ticket_action(
        &mut self,
        action: &ClusterAction,
        time_remaining: u32,
    ) -> Result<ActionResult> {
        let ticket = self.current_ticket.take().ok_or(EngineError::MissingActiveTicket)?;
        let result = apply_action(
            &ticket,
            action,
            time_remaining.min(ticket.time_limit_sec),
            &self.config.tickets,
            &mut self.cluster,
            &mut self.cluster_rng,
        );
        self.ticket_points += result.points;
        Ok(result)
    }

    /// Restart ticket ids at `t_001`.
    pub fn reset_ticket_counter(&mut self) {
        self.tickets.reset_counter();
    }

    /// Restore the starting cluster and restart ticket ids.
    pub fn reset_cluster(&mut self) {
        self.cluster =
            ClusterState::initial(self.config.tickets.namespace.clone(), &mut self.cluster_rng);
        self.tickets.reset_counter();
        self.current_ticket = None;
        self.ticket_points = 0;
    }

    // === Snapshots ===

    /// Capture the whole session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rng: self.rng.state(),
            cluster_rng: self.cluster_rng.state(),
            order_ids: self.orders.counter().clone(),
            ticket_ids: self.tickets.counter().clone(),
            cluster: self.cluster.clone(),
            shop: self.shop.clone(),
            phase: self.phase,
            cash: self.cash,
            round: self.round,
            orders_completed: self.orders_completed,
            perfect_orders: self.perfect_orders,
            ticket_points: self.ticket_points,
            current_order: self.current_order.clone(),
            last_result: self.last_result.clone(),
            current_ticket: self.current_ticket.clone(),
        }
    }

    /// Rewind the session to a snapshot taken from a session with the same
    /// catalogs and configuration.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.rng = GameRng::from_state(&snapshot.rng);
        self.cluster_rng = GameRng::from_state(&snapshot.cluster_rng);
        self.orders.restore_counter(snapshot.order_ids);
        self.tickets.restore_counter(snapshot.ticket_ids);
        self.cluster = snapshot.cluster;
        self.shop = snapshot.shop;
        self.phase = snapshot.phase;
        self.cash = snapshot.cash;
        self.round = snapshot.round;
        self.orders_completed = snapshot.orders_completed;
        self.perfect_orders = snapshot.perfect_orders;
        self.ticket_points = snapshot.ticket_points;
        self.pre_placed = snapshot
            .current_order
            .as_ref()
            .map(|order| self.shop.auto_complete(order, &self.catalog))
            .unwrap_or_default();
        self.current_order = snapshot.current_order;
        self.last_result = snapshot.last_result;
        self.current_ticket = snapshot.current_ticket;
    }

    // === Internals ===

    fn deal_order(&mut self) -> Result<()> {
        let mut order = self.orders.generate(&mut self.rng, self.shop.unlock_flags())?;
        order.time_limit_sec = order.time_limit_sec.saturating_add(self.shop.time_bonus_sec());
        self.pre_placed = self.shop.auto_complete(&order, &self.catalog);
        self.current_order = Some(order);
        Ok(())
    }

    fn active_order(&self) -> Result<&Order> {
        self.current_order.as_ref().ok_or(EngineError::MissingActiveOrder)
    }

    fn record(&mut self, result: &OrderResult) {
        self.cash = self.cash.saturating_add(result.cash_earned);
        self.orders_completed += 1;
        if result.accuracy == 100 {
            self.perfect_orders += 1;
        }
        self.last_result = Some(result.clone());
    }

    fn enter(&mut self, next: GamePhase) {
        if next != self.phase {
            info!(from = %self.phase, to = %next, round = self.round, "phase change");
        }
        self.phase = next;
    }
}
