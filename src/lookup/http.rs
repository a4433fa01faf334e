//! `reqwest`-backed [`OrderTransport`].

use reqwest::Url;
use tracing::debug;

use super::{OrderTransport, RawResponse};
use crate::models::OrderId;

/// Fetches orders from `{base_url}/orders/{order_uid}`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Builds a transport rooted at `base_url`.
    ///
    /// Any query or fragment on `base_url` is dropped. No request timeout is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns [`OrderViewError::Config`](crate::OrderViewError::Config) if
    /// `base_url` is not an absolute URL that can carry a path, or if the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let mut url = Url::parse(base_url).map_err(|e| {
            crate::OrderViewError::Config(format!("invalid base url {base_url:?}: {e}"))
        })?;
        if url.cannot_be_a_base() {
            return Err(crate::OrderViewError::Config(format!(
                "base url {base_url:?} cannot carry a path"
            )));
        }
        url.set_query(None);
        url.set_fragment(None);

        let client = reqwest::Client::builder().build().map_err(|e| {
            crate::OrderViewError::Config(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    /// Returns the URL for one order.
    ///
    /// The identifier is appended as a single percent-encoded path segment,
    /// so `/`, `?` and `#` inside it cannot change the route.
    ///
    /// Returns `None` for `.` and `..`: URL parsing resolves those (and their
    /// `%2E` spellings) as dot segments, so no URL names them as an order.
    pub fn order_url(&self, order_id: &OrderId) -> Option<Url> {
        if is_dot_segment(order_id.as_str()) {
            return None;
        }
        let mut url = self.base_url.clone();
        // `new` rejected cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("orders").push(order_id.as_str());
        }
        Some(url)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

impl OrderTransport for HttpTransport {
    async fn get_order(&self, order_id: &OrderId) -> crate::Result<RawResponse> {
        let Some(url) = self.order_url(order_id) else {
            debug!(order_uid = %order_id, "Dot-segment order_uid has no order route");
            return Ok(RawResponse {
                status: 404,
                body: Vec::new(),
            });
        };
        debug!(%url, "GET order");

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
