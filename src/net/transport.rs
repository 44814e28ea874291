//! HTTP dispatch behind the gateway.
//!
//! Client-side (csr): `fetch` via `gloo-net`. The whole exchange, body
//! included, is raced against one `gloo-timers` timeout that aborts the
//! request.
//! Native builds: a stub that fails every request, since there is no browser
//! to talk to.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::TransportError;
use super::request::{ApiResponse, OutboundRequest};

/// Sends one prepared request and returns whatever status came back.
///
/// Implementations report non-2xx responses as `Ok`; status classification
/// is the gateway's job.
pub trait Transport {
    async fn execute(&self, request: OutboundRequest) -> Result<ApiResponse, TransportError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    #[cfg(feature = "csr")]
    async fn execute(&self, request: OutboundRequest) -> Result<ApiResponse, TransportError> {
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        use super::request::Method;

        let controller = web_sys::AbortController::new()
            .map_err(|_| TransportError::Network("AbortController unavailable".to_owned()))?;
        let signal = controller.signal();

        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        let timeout_ms = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);
        let exchange = async {
            let resp = prepared
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok::<_, TransportError>(ApiResponse { status, body })
        };
        let timer = gloo_timers::future::TimeoutFuture::new(timeout_ms);
        within_deadline(exchange, timer, request.timeout, || controller.abort()).await
    }

    #[cfg(not(feature = "csr"))]
    async fn execute(&self, request: OutboundRequest) -> Result<ApiResponse, TransportError> {
        let _ = request;
        Err(TransportError::Network("not available outside the browser".to_owned()))
    }
}

/// Race a whole exchange, headers and body alike, against `deadline`.
/// `on_timeout` runs only when the deadline wins.
#[cfg(any(feature = "csr", test))]
async fn within_deadline<F, D>(
    exchange: F,
    deadline: D,
    timeout: std::time::Duration,
    on_timeout: impl FnOnce(),
) -> Result<ApiResponse, TransportError>
where
    F: Future<Output = Result<ApiResponse, TransportError>>,
    D: Future<Output = ()>,
{
    use futures::future::{Either, select};

    futures::pin_mut!(exchange);
    futures::pin_mut!(deadline);
    match select(exchange, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            on_timeout();
            Err(TransportError::Timeout(timeout))
        }
    }
}
