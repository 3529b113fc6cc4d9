use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::{resolve_rows, Dijkstra};
use crate::algorithm::{reconstruct_path, ShortestPathAlgorithm, Vertex};
use crate::graph::{AdjacencyMatrix, Graph};
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    pub session_timeout_minutes: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&ServerConfig::default())
    }

    pub fn with_config(config: &ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: config.max_sessions.max(1),
            session_timeout_minutes: config.session_timeout_minutes,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_unavailable",
                "Session store lock was poisoned".to_string(),
            )
        })
    }

    /// Stores a session, dropping expired ones and evicting the oldest when full
    fn insert_session(&self, session: Session) -> Result<(), ApiError> {
        let mut sessions = self.sessions()?;
        let now = Utc::now();
        let timeout = self.session_timeout_minutes;
        sessions.retain(|_, s| ((now - s.created_at).num_minutes().max(0) as u64) < timeout);

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id);
            match oldest {
                Some(id) => {
                    warn!("Session limit {} reached, evicting {}", self.max_sessions, id);
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        sessions.insert(session.id, session);
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/run", post(run_on_graph))
        .route("/api/shortest-paths", post(shortest_paths))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Store a graph for later queries
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphRequest>,
) -> Result<Json<Session>, ApiError> {
    let (graph, names) = prepare_graph(request.matrix, request.names)?;

    let session = Session::new(graph.into_rows(), names);
    info!("Created session {} with {} vertices", session.id, session.names.len());
    state.insert_session(session.clone())?;

    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.sessions()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Run Dijkstra on a stored graph
pub async fn run_on_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    let (matrix, names) = {
        let sessions = state.sessions()?;
        match sessions.get(&session_id) {
            Some(session) => (session.matrix.clone(), session.names.clone()),
            None => return Err(session_not_found()),
        }
    };

    let graph = AdjacencyMatrix::from_rows(matrix).map_err(error_response)?;
    let response = execute(&graph, &names, request.source, request.destination)?;

    {
        let mut sessions = state.sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// Run Dijkstra on a graph supplied with the request
pub async fn shortest_paths(Json(request): Json<OneShotRequest>) -> Result<Json<RunResponse>, ApiError> {
    let (graph, names) = prepare_graph(request.matrix, request.names)?;
    let response = execute(&graph, &names, request.source, request.destination)?;
    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.sessions()?;
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

/// Validates the matrix shape and vertex names, defaulting names to row indices
fn prepare_graph(
    matrix: Vec<Vec<i64>>,
    names: Option<Vec<String>>,
) -> Result<(AdjacencyMatrix<i64>, Vec<String>), ApiError> {
    let graph = AdjacencyMatrix::from_rows(matrix).map_err(error_response)?;
    let n = graph.vertex_count();
    let names = names.unwrap_or_else(|| (0..n).map(|i| i.to_string()).collect());

    if names.len() != n {
        return Err(error_response(Error::VertexCountMismatch {
            vertices: names.len(),
            graph: n,
        }));
    }
    let vertices: Vec<Vertex<i64>> = names.iter().map(Vertex::new).collect();
    resolve_rows(&vertices, n).map_err(error_response)?;

    Ok((graph, names))
}

fn execute(
    graph: &AdjacencyMatrix<i64>,
    names: &[String],
    source: usize,
    destination: Option<usize>,
) -> Result<RunResponse, ApiError> {
    let dijkstra = Dijkstra::new();
    let mut vertices: Vec<Vertex<i64>> = names.iter().map(Vertex::new).collect();

    let start_time = Instant::now();
    let summary = dijkstra
        .run(&mut vertices, graph, source)
        .map_err(error_response)?;
    let execution_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    let (path, path_error) = match destination {
        None => (None, None),
        Some(destination) => match reconstruct_path(&vertices, source, destination) {
            Ok(steps) => (
                Some(
                    steps
                        .into_iter()
                        .map(|step| PathStepReport {
                            vertex: step.vertex,
                            distance: step.distance,
                        })
                        .collect(),
                ),
                None,
            ),
            Err(err @ Error::Unreachable(_)) => (None, Some(err.to_string())),
            Err(err) => return Err(error_response(err)),
        },
    };

    let reports = vertices
        .iter()
        .enumerate()
        .map(|(id, vertex)| VertexReport {
            id,
            name: vertex.name.clone(),
            distance: vertex.is_reachable().then_some(vertex.distance),
            parent: vertex.parent,
        })
        .collect();

    Ok(RunResponse {
        execution_id: Uuid::new_v4(),
        algorithm: <Dijkstra as ShortestPathAlgorithm<i64, AdjacencyMatrix<i64>>>::name(&dijkstra).to_string(),
        source,
        execution_time_ms,
        metrics: RunMetrics {
            vertices_settled: summary.settled.len(),
            edges_relaxed: summary.edges_relaxed,
            priority_updates: summary.priority_updates,
            edge_count: graph.edge_count(),
        },
        settled_order: summary.settled,
        vertices: reports,
        destination,
        path,
        path_error,
    })
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn error_response(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::InvalidVertexName(_) => (StatusCode::BAD_REQUEST, "invalid_vertex_name"),
        Error::VertexCountMismatch { .. } => (StatusCode::BAD_REQUEST, "vertex_count_mismatch"),
        Error::MalformedMatrix { .. } => (StatusCode::BAD_REQUEST, "malformed_matrix"),
        Error::Unreachable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unreachable"),
        Error::EmptyQueue => (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_failed"),
    };
    api_error(status, code, err.to_string())
}
