//! HTTP + WebSocket API for lab sessions
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /session/new - Create new session
//! - GET /session/{id} - Get session status
//! - POST /session/{id}/frame - Feed one pose, get render plan + report
//! - DELETE /session/{id} - End session
//! - WS /ws/{id} - Live frame reports

use axum::{
    extract::{Path, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{info, warn};

use crate::core::{FrameOutput, LabConfig, VirtualLabSession};
use crate::types::{FrameReport, PoseSample, ReactionState, ReactionVariant, TrajectoryStrategy};

/// A session plus its live-update channel
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub lab: VirtualLabSession,
    pub update_tx: broadcast::Sender<FrameReport>,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, Session>>,
    /// Template for new sessions; requests may override variant and strategy
    pub base_config: LabConfig,
}

/// Create new session request
#[derive(Debug, Default, Deserialize)]
pub struct NewSessionRequest {
    pub variant: Option<String>,
    pub strategy: Option<String>,
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub websocket_url: String,
    pub variant: ReactionVariant,
    pub strategy: TrajectoryStrategy,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub variant: ReactionVariant,
    pub strategy: TrajectoryStrategy,
    pub frame_count: u64,
    pub reaction: ReactionState,
    pub triggered_at: Option<u64>,
}

/// One frame's pose; `null` or missing means no hand
#[derive(Debug, Deserialize)]
pub struct FrameRequest {
    #[serde(default)]
    pub pose: Option<PoseSample>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Create the API router with default session settings
pub fn create_router() -> Router {
    create_router_with_config(LabConfig::default())
}

/// Create the API router, new sessions start from `base_config`
pub fn create_router_with_config(base_config: LabConfig) -> Router {
    let state = Arc::new(AppState {
        sessions: RwLock::new(HashMap::new()),
        base_config,
    });

    Router::new()
        .route("/health", get(health))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session).delete(end_session))
        .route("/session/:id/frame", post(submit_frame))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

/// Create new session. Unknown variant or strategy names are a 400.
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewSessionRequest>,
) -> Result<Json<NewSessionResponse>, StatusCode> {
    let mut config = state.base_config.clone();
    if let Some(raw) = req.variant.as_deref() {
        config.variant = raw.parse().map_err(|e| {
            warn!("rejecting session: {}", e);
            StatusCode::BAD_REQUEST
        })?;
    }
    if let Some(raw) = req.strategy.as_deref() {
        config.strategy = raw.parse().map_err(|e| {
            warn!("rejecting session: {}", e);
            StatusCode::BAD_REQUEST
        })?;
    }

    let lab = VirtualLabSession::new(config).map_err(|e| {
        warn!("rejecting session: {}", e);
        StatusCode::BAD_REQUEST
    })?;
    let variant = lab.config().variant;
    let strategy = lab.config().strategy;

    let session_id = generate_session_id();
    let (tx, _) = broadcast::channel(100);
    let session = Session {
        id: session_id.clone(),
        lab,
        update_tx: tx,
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), session);
    info!(session = %session_id, %variant, %strategy, "session created");

    Ok(Json(NewSessionResponse {
        websocket_url: format!("/ws/{}", session_id),
        session_id,
        variant,
        strategy,
    }))
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(SessionStatusResponse {
        session_id: session.id.clone(),
        variant: session.lab.config().variant,
        strategy: session.lab.config().strategy,
        frame_count: session.lab.frame_count(),
        reaction: session.lab.reaction_state(),
        triggered_at: session.lab.triggered_at(),
    }))
}

/// Feed one frame. The write lock serialises frames within a session.
async fn submit_frame(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<FrameRequest>,
) -> Result<Json<FrameOutput>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let output = session.lab.advance(req.pose.as_ref());
    if output.report.hit {
        info!(session = %id, frame = output.report.frame, "litmus reaction complete");
    }

    // No subscribers is fine
    let _ = session.update_tx.send(output.report.clone());

    Ok(Json(output))
}

/// End a session
async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut sessions = state.sessions.write().await;
    match sessions.remove(&id) {
        Some(session) => {
            info!(session = %id, frames = session.lab.frame_count(), "session ended");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = session.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Push frame reports until the client leaves or the session ends
async fn handle_websocket(socket: WebSocket, mut rx: broadcast::Receiver<FrameReport>) {
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            update = rx.recv() => match update {
                Ok(report) => {
                    let json = serde_json::to_string(&report).unwrap_or_default();
                    if sender.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "websocket client lagging, frames dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }
}

/// Generate session ID
fn generate_session_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let millis = chrono::Utc::now().timestamp_millis() as u64;
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("lab_{:x}_{:x}", millis, seq)
}

/// Run the API server
pub async fn run_server(addr: &str, base_config: LabConfig) -> crate::Result<()> {
    base_config.validate()?;
    let router = create_router_with_config(base_config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "lab API listening");
    println!("🧪 Virtual Lab API running on {}", addr);
    println!("  POST   /session/new       - Create session");
    println!("  GET    /session/:id       - Get status");
    println!("  POST   /session/:id/frame - Submit pose");
    println!("  DELETE /session/:id       - End session");
    println!("  WS     /ws/:id            - Live frame reports");
    println!("  GET    /health            - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
