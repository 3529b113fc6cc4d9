use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A graph submitted for shortest path queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphRequest {
    /// Square weight matrix; `matrix[i][j] > 0` is an edge `i -> j`
    pub matrix: Vec<Vec<i64>>,
    /// Optional vertex names, one per row. Each must parse to a row index.
    #[serde(default)]
    pub names: Option<Vec<String>>,
}

/// Parameters for algorithm execution on a stored graph
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    pub source: usize,
    #[serde(default)]
    pub destination: Option<usize>,
}

/// Graph and query in a single body
#[derive(Debug, Clone, Deserialize)]
pub struct OneShotRequest {
    pub matrix: Vec<Vec<i64>>,
    #[serde(default)]
    pub names: Option<Vec<String>>,
    pub source: usize,
    #[serde(default)]
    pub destination: Option<usize>,
}

/// Final state of one vertex
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexReport {
    pub id: usize,
    pub name: String,
    /// None when the vertex is unreachable
    pub distance: Option<i64>,
    pub parent: Option<usize>,
}

/// One vertex on the requested path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathStepReport {
    pub vertex: usize,
    pub distance: i64,
}

/// Counters collected during algorithm execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    pub vertices_settled: usize,
    pub edges_relaxed: usize,
    pub priority_updates: usize,
    pub edge_count: usize,
}

/// Response containing algorithm execution results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub execution_time_ms: f64,
    pub settled_order: Vec<usize>,
    pub vertices: Vec<VertexReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathStepReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_error: Option<String>,
    pub metrics: RunMetrics,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing a stored graph and its last run
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub matrix: Vec<Vec<i64>>,
    pub names: Vec<String>,
    pub last_result: Option<RunResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(matrix: Vec<Vec<i64>>, names: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            matrix,
            names,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
