pub mod core;

use serde::{Deserialize, Serialize};

/// Whether the edges of a graph have an orientation.
#[derive(Clone, Copy, PartialOrd, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum GraphType {
    #[default]
    Directed,
    Undirected,
}

impl GraphType {
    pub fn is_undirected(&self) -> bool {
        matches!(self, GraphType::Undirected)
    }
}
