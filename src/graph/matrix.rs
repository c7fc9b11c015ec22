//! 邻接矩阵图
//!
//! 与邻接表相同的边操作语义，基于稠密 `n × n` 矩阵。
//! 适合顶点少、边查询多于邻居枚举的场景。重边会合并为一条（后写覆盖）。

use super::ops::EdgeStore;
use super::vertex::{VertexId, VertexIndex};
use crate::error::{Error, Result};
use crate::types::{GraphConfig, Weight};
use std::fmt;

/// 无权图中表示"有边"的单元值
const UNIT: Weight = 1;

/// 邻接矩阵图
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    config: GraphConfig,
    index: VertexIndex,
    /// 行优先存储，`None` 表示无边
    cells: Vec<Option<Weight>>,
}

impl AdjacencyMatrixGraph {
    pub fn new(config: GraphConfig, vertex_count: usize) -> Result<Self> {
        let index = VertexIndex::new(config.naming, vertex_count)?;
        Ok(Self {
            config,
            index,
            cells: vec![None; vertex_count * vertex_count],
        })
    }

    pub fn vertex_index(&self) -> &VertexIndex {
        &self.index
    }

    /// 边权重；无权图的边返回 `None`
    pub fn weight(&self, origin: VertexId, destination: VertexId) -> Result<Option<Weight>> {
        let cell = self.cell(origin, destination)?;
        Ok(if self.config.weighted {
            self.cells[cell]
        } else {
            None
        })
    }

    fn cell(&self, origin: VertexId, destination: VertexId) -> Result<usize> {
        self.index.check(origin)?;
        self.index.check(destination)?;
        Ok(origin.0 * self.index.len() + destination.0)
    }
}

impl EdgeStore for AdjacencyMatrixGraph {
    fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn vertex_count(&self) -> usize {
        self.index.len()
    }

    fn insert_edge(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        weight: Option<Weight>,
    ) -> Result<()> {
        let forward = self.cell(origin, destination)?;
        self.config.check_weight(weight)?;

        let value = Some(weight.unwrap_or(UNIT));
        self.cells[forward] = value;
        if self.config.undirected() {
            let backward = self.cell(destination, origin)?;
            self.cells[backward] = value;
        }
        Ok(())
    }

    fn remove_edge(&mut self, origin: VertexId, destination: VertexId) -> Result<()> {
        let forward = self.cell(origin, destination)?;
        if self.cells[forward].is_none() {
            return Err(Error::EdgeNotFound {
                origin: self.index.name_of(origin)?.to_string(),
                destination: self.index.name_of(destination)?.to_string(),
            });
        }

        self.cells[forward] = None;
        if self.config.undirected() {
            let backward = self.cell(destination, origin)?;
            self.cells[backward] = None;
        }
        Ok(())
    }

    fn has_edge(&self, origin: VertexId, destination: VertexId) -> Result<bool> {
        Ok(self.cells[self.cell(origin, destination)?].is_some())
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.index.check(vertex)?;
        let n = self.index.len();
        let row = &self.cells[vertex.0 * n..(vertex.0 + 1) * n];
        Ok(row
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(i, _)| VertexId(i))
            .collect())
    }
}

/// 打印 0/1 矩阵
impl fmt::Display for AdjacencyMatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index.is_empty() {
            return Ok(());
        }
        let n = self.index.len();
        for row in self.cells.chunks(n) {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| if cell.is_some() { "1" } else { "0" })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_matrix_undirected_mirror() {
        let mut graph = AdjacencyMatrixGraph::new(GraphConfig::new(), 3).unwrap();
        graph.insert_edge(v(0), v(2), None).unwrap();

        assert!(graph.has_edge(v(0), v(2)).unwrap());
        assert!(graph.has_edge(v(2), v(0)).unwrap());
        assert_eq!(graph.neighbors(v(2)).unwrap(), vec![v(0)]);
        assert_eq!(graph.to_string(), "0 0 1\n0 0 0\n1 0 0\n");

        graph.remove_edge(v(2), v(0)).unwrap();
        assert!(!graph.has_edge(v(0), v(2)).unwrap());
        assert!(!graph.has_edge(v(2), v(0)).unwrap());
    }

    #[test]
    fn test_matrix_directed() {
        let config = GraphConfig::new().with_directed(true);
        let mut graph = AdjacencyMatrixGraph::new(config, 3).unwrap();
        graph.insert_edge(v(1), v(0), None).unwrap();
        graph.insert_edge(v(1), v(2), None).unwrap();

        assert_eq!(graph.neighbors(v(1)).unwrap(), vec![v(0), v(2)]);
        assert!(!graph.has_edge(v(0), v(1)).unwrap());
        assert!(matches!(
            graph.remove_edge(v(0), v(1)),
            Err(Error::EdgeNotFound { .. })
        ));
    }

    #[test]
    fn test_matrix_weights() {
        let config = GraphConfig::new().with_weighted(true);
        let mut graph = AdjacencyMatrixGraph::new(config, 2).unwrap();
        assert!(matches!(
            graph.insert_edge(v(0), v(1), None),
            Err(Error::WeightRequired)
        ));
        graph.insert_edge(v(0), v(1), Some(4)).unwrap();
        graph.insert_edge(v(0), v(1), Some(6)).unwrap();
        assert_eq!(graph.weight(v(1), v(0)).unwrap(), Some(6));

        let empty = AdjacencyMatrixGraph::new(GraphConfig::new(), 0).unwrap();
        assert!(empty.vertex_index().is_empty());
        assert_eq!(empty.to_string(), "");

        let plain = AdjacencyMatrixGraph::new(GraphConfig::new(), 2).unwrap();
        assert!(matches!(plain.has_edge(v(0), v(5)), Err(Error::UnknownVertex(_))));
    }
}
