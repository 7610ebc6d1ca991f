use async_trait::async_trait;
use axum::Router;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::features::book_demo::clients::{CrmError, LeadSink};
use crate::features::book_demo::dialog::{
    BookingTransport, EscapeHandler, FormState, PageHost, ScopedEffect, TransportError,
    TransportResponse,
};
use crate::features::book_demo::dtos::CrmLeadPayload;

/// Serves `router` on an ephemeral local port and returns its base URL
pub async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a local port nobody listens on
pub async fn unused_local_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

// =============================================================================
// LEAD SINK
// =============================================================================

/// What a [`RecordingSink`] answers with
#[derive(Clone)]
pub enum SinkReply {
    Created,
    Rejected(u16, &'static str),
    Unreachable,
    Timeout,
}

/// Lead sink that records every payload it receives
pub struct RecordingSink {
    reply: SinkReply,
    calls: AtomicUsize,
    payloads: Mutex<Vec<CrmLeadPayload>>,
}

impl RecordingSink {
    pub fn new(reply: SinkReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<CrmLeadPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadSink for RecordingSink {
    async fn create_lead(&self, payload: &CrmLeadPayload) -> Result<(), CrmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());

        match &self.reply {
            SinkReply::Created => Ok(()),
            SinkReply::Rejected(status, body) => Err(CrmError::Rejected {
                status: *status,
                body: body.to_string(),
            }),
            SinkReply::Unreachable => Err(CrmError::Unreachable("connection refused".into())),
            SinkReply::Timeout => Err(CrmError::Timeout(std::time::Duration::from_secs(10))),
        }
    }
}

// =============================================================================
// DIALOG TRANSPORT
// =============================================================================

/// Transport that replays queued responses and can hold requests until released
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    sent: Mutex<Vec<FormState>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub fn replying(
        replies: impl IntoIterator<Item = Result<TransportResponse, TransportError>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        })
    }

    /// Every request waits for `gate.notify_one()` before answering
    pub fn gated(
        gate: Arc<Notify>,
        replies: impl IntoIterator<Item = Result<TransportResponse, TransportError>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
            gate: Some(gate),
        })
    }

    pub fn sent(&self) -> Vec<FormState> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingTransport for ScriptedTransport {
    async fn post_booking(&self, form: &FormState) -> Result<TransportResponse, TransportError> {
        self.sent.lock().unwrap().push(form.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(200, r#"{"ok":true}"#)))
    }
}

// =============================================================================
// PAGE HOST
// =============================================================================

/// In-memory page: tracks body overflow and escape listeners like a browser document
pub struct RecordingPageHost {
    overflow: Arc<Mutex<String>>,
    listeners: Arc<Mutex<Vec<(u64, EscapeHandler)>>>,
    next_id: AtomicU64,
}

impl RecordingPageHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            overflow: Arc::new(Mutex::new("auto".to_string())),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(0),
        })
    }

    pub fn overflow(&self) -> String {
        self.overflow.lock().unwrap().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    pub fn press_escape(&self) {
        let handlers: Vec<EscapeHandler> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }
}

impl PageHost for RecordingPageHost {
    fn suppress_scroll(&self) -> ScopedEffect {
        let overflow = Arc::clone(&self.overflow);
        let original = std::mem::replace(&mut *overflow.lock().unwrap(), "hidden".to_string());
        ScopedEffect::new(move || {
            *overflow.lock().unwrap() = original;
        })
    }

    fn on_escape(&self, handler: EscapeHandler) -> ScopedEffect {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().unwrap().push((id, handler));

        let listeners = Arc::clone(&self.listeners);
        ScopedEffect::new(move || {
            listeners.lock().unwrap().retain(|(other, _)| *other != id);
        })
    }
}
