//! graphcore - 通用图抽象数据类型
//!
//! 支持有向/无向、带权/无权的邻接表与邻接矩阵图，提供：
//! - 深度优先遍历与连通分量
//! - 带 3 步门锁规则的广度优先搜索
//! - Prim 最小生成树
//!
//! 使用流程：构建 -> 插入边 -> 运行一个算法 -> 读取结果

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use algorithm::{BfsOutcome, Components, PrimMst, SpanningTree, TreeParent};
pub use error::{Error, Result};
pub use graph::{AdjacencyMatrixGraph, Edge, EdgeStore, Graph, VertexId, VertexIndex};
pub use types::{GraphConfig, VertexName, VertexNamingConvention, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
