//! Order lookup pipeline.
//!
//! A commit from the input field becomes at most one [`lookup`] call, which
//! issues one request through an [`OrderTransport`] and classifies the reply
//! into exactly one [`LookupOutcome`]. Failures never escape as `Err`; they
//! are logged and carried in [`LookupOutcome::TransportError`].

pub mod http;

use std::future::Future;

use serde::de::{self, Unexpected};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::OrderViewError;
use crate::models::{Order, OrderId};

pub use http::HttpTransport;

/// Status and body of one order request, before classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Read access to the order server.
///
/// Implementations perform exactly one request per call and report
/// transport-level failures (connect, read) as `Err`. Status codes are
/// returned as-is for [`classify`] to interpret.
pub trait OrderTransport: Send + Sync {
    fn get_order(
        &self,
        order_id: &OrderId,
    ) -> impl Future<Output = crate::Result<RawResponse>> + Send;
}

/// The single result of one lookup.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The server returned an order document.
    Found(Order),
    /// The server answered 404 (or a `null` document) for this identifier.
    NotFound(OrderId),
    /// Network failure, unexpected status, or an unreadable body.
    TransportError(OrderViewError),
}

impl LookupOutcome {
    /// Short name used in logs and the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            LookupOutcome::Found(_) => "found",
            LookupOutcome::NotFound(_) => "not found",
            LookupOutcome::TransportError(_) => "transport error",
        }
    }
}

/// Reads a committed input value.
///
/// Returns the identifier to look up, or `None` for the empty string, which
/// is ignored without touching the network.
pub fn commit_input(value: &str) -> Option<OrderId> {
    let order_id = OrderId::new(value);
    if order_id.is_none() {
        info!("Empty order_uid is ignored");
    }
    order_id
}

/// Fetches one order and classifies the reply.
pub async fn lookup<T: OrderTransport>(transport: &T, order_id: OrderId) -> LookupOutcome {
    debug!(order_uid = %order_id, "Fetching order");

    let outcome = match transport.get_order(&order_id).await {
        Ok(response) => classify(order_id.clone(), response),
        Err(e) => LookupOutcome::TransportError(e),
    };

    match &outcome {
        LookupOutcome::Found(order) => {
            info!(order_uid = %order_id, items = order.items.len(), "Order found");
        }
        LookupOutcome::NotFound(_) => info!(order_uid = %order_id, "Order not found"),
        LookupOutcome::TransportError(e) => {
            error!(order_uid = %order_id, error = %e, "Error fetching order");
        }
    }

    outcome
}

/// Maps a raw reply onto a [`LookupOutcome`].
///
/// - 404 is `NotFound` whatever the body says.
/// - 2xx with an order document is `Found`; 2xx with JSON `null` is
///   `NotFound`.
/// - Any other status, or a 2xx body that is not an order, is a
///   `TransportError`.
pub fn classify(order_id: OrderId, response: RawResponse) -> LookupOutcome {
    if response.status == 404 {
        return LookupOutcome::NotFound(order_id);
    }

    if !(200..300).contains(&response.status) {
        return LookupOutcome::TransportError(OrderViewError::UnexpectedStatus(response.status));
    }

    match parse_order(&response.body) {
        Ok(Some(order)) => LookupOutcome::Found(order),
        Ok(None) => LookupOutcome::NotFound(order_id),
        Err(e) => LookupOutcome::TransportError(e.into()),
    }
}

/// Parses a 2xx body: `null` is no order, an object is an order, anything
/// else (including an array of orders) is an error.
fn parse_order(body: &[u8]) -> Result<Option<Order>, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Ok(None),
        Value::Object(map) => serde_json::from_value(Value::Object(map)).map(Some),
        Value::Bool(b) => Err(not_an_order(Unexpected::Bool(b))),
        Value::Number(_) => Err(not_an_order(Unexpected::Other("number"))),
        Value::String(s) => Err(not_an_order(Unexpected::Str(&s))),
        Value::Array(_) => Err(not_an_order(Unexpected::Seq)),
    }
}

fn not_an_order(unexpected: Unexpected) -> serde_json::Error {
    <serde_json::Error as de::Error>::invalid_type(unexpected, &"an order object")
}
