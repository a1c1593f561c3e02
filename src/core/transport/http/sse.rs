//! Legacy SSE transport (`GET /sse` + `POST /message`).
//!
//! Each `GET /sse` opens a session: an rmcp service is started on one end of
//! an in-memory duplex pipe, and the other end is bridged to HTTP. Messages
//! POSTed to `/message?sessionId=<id>` are written into the pipe as single
//! lines; every line the server writes back is pushed to the client as a
//! `message` event. The first event on the stream is `endpoint`, carrying
//! the URL to POST to.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, RwLock};

use axum::{
    Json,
    extract::{Query, State},
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use http::StatusCode;
use rmcp::ServiceExt;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, ReadHalf, WriteHalf};
use tokio::sync::{Mutex, mpsc};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{AppState, routes};

/// Buffer size of the in-memory pipe between HTTP and the rmcp service.
const PIPE_BUFFER: usize = 64 * 1024;

/// Number of events buffered per SSE client.
const EVENT_BUFFER: usize = 32;

type SessionWriter = Arc<Mutex<WriteHalf<DuplexStream>>>;

/// Open SSE sessions, keyed by session id.
#[derive(Clone, Default)]
pub struct SseSessions {
    inner: Arc<RwLock<HashMap<String, SessionWriter>>>,
}

impl SseSessions {
    fn insert(&self, id: String, writer: SessionWriter) {
        if let Ok(mut sessions) = self.inner.write() {
            sessions.insert(id, writer);
        }
    }

    fn get(&self, id: &str) -> Option<SessionWriter> {
        self.inner.read().ok()?.get(id).cloned()
    }

    fn remove(&self, id: &str) {
        if let Ok(mut sessions) = self.inner.write() {
            sessions.remove(id);
        }
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.inner.read().map(|s| s.len()).unwrap_or_default()
    }

    /// Whether no session is open.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removes a session once its event stream is dropped.
struct SessionGuard {
    id: String,
    sessions: SseSessions,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.sessions.remove(&self.id);
        info!("SSE session {} disconnected", self.id);
    }
}

/// Query string of `POST /message`.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Open a new SSE session.
pub async fn handle_sse(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session_id = Uuid::new_v4().to_string();
    let (server_io, client_io) = tokio::io::duplex(PIPE_BUFFER);
    let (client_read, client_write) = tokio::io::split(client_io);

    state
        .sessions
        .insert(session_id.clone(), Arc::new(Mutex::new(client_write)));
    info!("SSE session {} opened", session_id);

    let server = state.server().clone();
    let id = session_id.clone();
    tokio::spawn(async move {
        let service = match server.serve(server_io).await {
            Ok(service) => service,
            Err(e) => {
                warn!("SSE session {} failed to initialize: {}", id, e);
                return;
            }
        };
        if let Err(e) = service.waiting().await {
            warn!("SSE session {} ended with error: {}", id, e);
        }
    });

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let endpoint = format!("{}?sessionId={}", routes::MESSAGE, session_id);
    // Fresh channel with spare capacity, so this cannot fail.
    let _ = tx.try_send(Event::default().event("endpoint").data(endpoint));
    tokio::spawn(forward_messages(client_read, tx, session_id.clone()));

    let guard = SessionGuard {
        id: session_id,
        sessions: state.sessions.clone(),
    };
    let stream = ReceiverStream::new(rx).map(move |event| {
        let _guard = &guard;
        Ok::<_, Infallible>(event)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Push every line the server writes as a `message` event.
///
/// Stops when the pipe closes or the client goes away.
async fn forward_messages(
    reader: ReadHalf<DuplexStream>,
    tx: mpsc::Sender<Event>,
    session_id: String,
) {
    let mut lines = BufReader::new(reader).lines();
    loop {
        tokio::select! {
            _ = tx.closed() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => {
                    if tx.send(Event::default().event("message").data(line)).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("SSE session {} read error: {}", session_id, e);
                    break;
                }
            },
        }
    }
    debug!("SSE session {} forwarder stopped", session_id);
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Accept one JSON-RPC message for an SSE session.
pub async fn handle_message(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
    body: Bytes,
) -> Response {
    let Some(session_id) = query.session_id else {
        return error_response(StatusCode::BAD_REQUEST, "Missing sessionId");
    };
    let Some(writer) = state.sessions.get(&session_id) else {
        warn!("Message for unknown SSE session {}", session_id);
        return error_response(StatusCode::NOT_FOUND, "Session not found");
    };

    // Re-encode so the message is exactly one line on the pipe.
    let mut line = match serde_json::from_slice::<Value>(&body)
        .and_then(|message| serde_json::to_string(&message))
    {
        Ok(line) => line,
        Err(e) => {
            warn!("Invalid message for SSE session {}: {}", session_id, e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON-RPC message");
        }
    };
    line.push('\n');

    let mut writer = writer.lock().await;
    let written = match writer.write_all(line.as_bytes()).await {
        Ok(()) => writer.flush().await,
        Err(e) => Err(e),
    };

    match written {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => {
            warn!("SSE session {} write failed: {}", session_id, e);
            error_response(StatusCode::GONE, "Session closed")
        }
    }
}
