//! 边级操作契约
//!
//! 邻接表和邻接矩阵两种存储共享同一套边操作语义

use crate::error::Result;
use crate::graph::edge::Edge;
use crate::graph::vertex::VertexId;
use crate::types::{GraphConfig, Weight};

/// 边存储
pub trait EdgeStore {
    /// 图配置
    fn config(&self) -> &GraphConfig;

    /// 顶点数（未设置时为 0）
    fn vertex_count(&self) -> usize;

    /// 插入边 origin -> destination；无向图同时写入反向
    fn insert_edge(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        weight: Option<Weight>,
    ) -> Result<()>;

    /// 删除边 origin -> destination；无向图同时删除反向
    fn remove_edge(&mut self, origin: VertexId, destination: VertexId) -> Result<()>;

    /// 是否存在边 origin -> destination
    fn has_edge(&self, origin: VertexId, destination: VertexId) -> Result<bool>;

    /// 邻居列表（副本）
    fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>>;

    fn is_directed(&self) -> bool {
        self.config().directed
    }

    fn is_undirected(&self) -> bool {
        self.config().undirected()
    }

    fn is_weighted(&self) -> bool {
        self.config().weighted
    }

    /// 批量插入边
    fn insert_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge>,
        Self: Sized,
    {
        for edge in edges {
            self.insert_edge(edge.origin, edge.destination, edge.weight)?;
        }
        Ok(())
    }
}
