#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("No graph provided")]
    MissingGraph,
    #[error("Cannot return score of unknown vertex {0}")]
    UnknownVertex(String),
}

impl ScoringError {
    pub fn unknown_vertex(v: &impl std::fmt::Debug) -> Self {
        ScoringError::UnknownVertex(format!("{v:?}"))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Edge probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("No vertex id left after {0}")]
    VertexIdOverflow(u64),
}
