//! 图核心模块
//!
//! 定义顶点、边以及邻接表/邻接矩阵两种图结构

mod edge;
mod graph;
mod matrix;
mod ops;
mod vertex;

pub use edge::{Adjacency, Edge};
pub use graph::{AdjacencyList, Graph};
pub use matrix::AdjacencyMatrixGraph;
pub use ops::EdgeStore;
pub use vertex::{VertexId, VertexIndex};
