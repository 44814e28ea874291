//! Test doubles shared by the net test modules.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::config::ClientConfig;
use super::error::TransportError;
use super::gateway::Gateway;
use super::request::{ApiResponse, OutboundRequest};
use super::session::{MemoryStore, Session};
use super::transport::Transport;

/// Records every request and replays scripted outcomes (default `200 {}`).
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Rc<RefCell<Vec<OutboundRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
}

impl RecordingTransport {
    pub fn reply(&self, outcome: Result<ApiResponse, TransportError>) {
        self.replies.borrow_mut().push_back(outcome);
    }

    pub fn sent(&self) -> Vec<OutboundRequest> {
        self.sent.borrow().clone()
    }

    pub fn only_request(&self) -> OutboundRequest {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one request, got {sent:?}");
        sent.into_iter().next().expect("one request")
    }
}

impl Transport for RecordingTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<ApiResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies.borrow_mut().pop_front().unwrap_or_else(|| Ok(ApiResponse::new(200, "{}")))
    }
}

/// Gateway over an in-memory store, a recording transport and a counter of
/// session-expired callbacks.
pub struct Harness {
    pub gateway: Gateway<RecordingTransport>,
    pub store: Rc<MemoryStore>,
    pub transport: RecordingTransport,
    pub expired: Rc<Cell<u32>>,
}

impl Harness {
    pub fn new() -> Self {
        let store = Rc::new(MemoryStore::new());
        let transport = RecordingTransport::default();
        let expired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&expired);
        let gateway = Gateway::new(
            ClientConfig::default(),
            Session::new(store.clone()),
            transport.clone(),
            move || counter.set(counter.get() + 1),
        );
        Self { gateway, store, transport, expired }
    }
}
