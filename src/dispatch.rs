//! Routing lookup outcomes onto the screen.
//!
//! Lookups are never cancelled, so several can be in flight and complete in
//! any order. Each one is tagged with a [`LookupTicket`]; the
//! [`Dispatcher`]'s [`StalePolicy`] decides whether a completion that is not
//! the newest issued request may still change the view.

use std::str::FromStr;

use tracing::debug;

use crate::OrderViewError;
use crate::lookup::LookupOutcome;
use crate::models::OrderId;
use crate::view::{Screen, ViewState, render_not_found, render_order};

/// What to do with a completion whose request has since been superseded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Every completion renders; the last one to arrive decides the view.
    #[default]
    LastResponseWins,
    /// Only the newest issued request may render; older completions are
    /// dropped.
    LatestRequestWins,
}

impl StalePolicy {
    /// Returns the configuration spelling of the policy.
    pub fn label(&self) -> &'static str {
        match self {
            StalePolicy::LastResponseWins => "last-response",
            StalePolicy::LatestRequestWins => "latest-request",
        }
    }
}

impl FromStr for StalePolicy {
    type Err = OrderViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-response" => Ok(StalePolicy::LastResponseWins),
            "latest-request" => Ok(StalePolicy::LatestRequestWins),
            other => Err(OrderViewError::Config(format!(
                "ORDERVIEW_STALE_POLICY must be last-response or latest-request (got {other:?})"
            ))),
        }
    }
}

/// One issued lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTicket {
    /// Strictly increasing per [`Dispatcher`], starting at 1.
    pub seq: u64,
    pub order_id: OrderId,
}

/// Result of handing one outcome to the screen.
#[derive(Debug)]
pub enum Dispatch {
    /// A renderer ran and the screen now shows this state.
    Rendered(ViewState),
    /// The lookup failed; the screen was not touched.
    TransportFailed(OrderViewError),
    /// The completion was superseded and dropped by the policy.
    Stale,
}

/// Runs the renderer matching `outcome`.
///
/// `TransportError` renders nothing, so whatever was visible stays visible.
pub fn dispatch(screen: &mut Screen, outcome: LookupOutcome) -> Dispatch {
    match outcome {
        LookupOutcome::Found(order) => {
            render_order(screen, &order);
            Dispatch::Rendered(screen.state())
        }
        LookupOutcome::NotFound(order_id) => {
            render_not_found(screen, &order_id);
            Dispatch::Rendered(screen.state())
        }
        LookupOutcome::TransportError(e) => Dispatch::TransportFailed(e),
    }
}

/// Issues tickets and applies the stale policy to completions.
#[derive(Debug, Default)]
pub struct Dispatcher {
    policy: StalePolicy,
    issued: u64,
    in_flight: usize,
}

impl Dispatcher {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Number of issued lookups that have not completed yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Sequence number of the newest issued ticket, 0 before the first.
    pub fn latest(&self) -> u64 {
        self.issued
    }

    /// Records a new lookup for `order_id`.
    pub fn issue(&mut self, order_id: OrderId) -> LookupTicket {
        self.issued += 1;
        self.in_flight += 1;
        LookupTicket {
            seq: self.issued,
            order_id,
        }
    }

    /// Hands the outcome of ticket `seq` to the screen, subject to the policy.
    pub fn complete(&mut self, screen: &mut Screen, seq: u64, outcome: LookupOutcome) -> Dispatch {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.policy == StalePolicy::LatestRequestWins && seq < self.issued {
            debug!(
                seq,
                latest = self.issued,
                outcome = outcome.label(),
                "Discarding stale lookup result"
            );
            return Dispatch::Stale;
        }

        dispatch(screen, outcome)
    }
}
