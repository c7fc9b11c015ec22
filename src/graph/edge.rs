//! 边定义

use crate::graph::vertex::VertexId;
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 邻接表中的一项：目标顶点和可选权重
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    pub target: VertexId,
    pub weight: Option<Weight>,
}

impl Adjacency {
    pub fn new(target: VertexId, weight: Option<Weight>) -> Self {
        Self { target, weight }
    }
}

/// 完整的边 (origin, destination[, weight])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub origin: VertexId,
    pub destination: VertexId,
    pub weight: Option<Weight>,
}

impl Edge {
    pub fn new(origin: VertexId, destination: VertexId, weight: Option<Weight>) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    pub fn weighted(origin: usize, destination: usize, weight: Weight) -> Self {
        Self::new(VertexId(origin), VertexId(destination), Some(weight))
    }

    pub fn unweighted(origin: usize, destination: usize) -> Self {
        Self::new(VertexId(origin), VertexId(destination), None)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} -> {} ({})", self.origin, self.destination, w),
            None => write!(f, "{} -> {}", self.origin, self.destination),
        }
    }
}
