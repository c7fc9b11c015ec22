//! 邻接表图
//!
//! 按有向/无向、带权/无权参数化的邻接表结构

use super::edge::{Adjacency, Edge};
use super::ops::EdgeStore;
use super::vertex::{VertexId, VertexIndex};
use crate::error::{Error, Result};
use crate::types::{GraphConfig, VertexName, Weight};
use smallvec::SmallVec;
use std::fmt;
use tracing::{debug, trace};

/// 单个顶点的邻接序列，保留插入顺序
pub type AdjacencyList = SmallVec<[Adjacency; 4]>;

/// 邻接表图
#[derive(Debug, Clone)]
pub struct Graph {
    /// 有向/带权/命名规则
    config: GraphConfig,
    /// 顶点名称映射，顶点数确定后生成
    index: Option<VertexIndex>,
    /// 顶点 -> 邻接序列
    adjacency: Vec<AdjacencyList>,
}

impl Graph {
    /// 创建图；`vertex_count` 可延后通过 [`Graph::set_vertex_count`] 设置
    pub fn new(config: GraphConfig, vertex_count: Option<usize>) -> Result<Self> {
        let mut graph = Self {
            config,
            index: None,
            adjacency: Vec::new(),
        };
        if let Some(n) = vertex_count {
            graph.set_vertex_count(n)?;
        }
        Ok(graph)
    }

    /// 从边集合直接构建
    pub fn from_edges<I>(config: GraphConfig, vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new(config, Some(vertex_count))?;
        graph.insert_edges(edges)?;
        Ok(graph)
    }

    /// 设置顶点数，只能设置一次；以相同值重复调用无副作用
    pub fn set_vertex_count(&mut self, n: usize) -> Result<()> {
        if let Some(index) = &self.index {
            if index.len() == n {
                return Ok(());
            }
            return Err(Error::VertexCountAlreadySet {
                current: index.len(),
                requested: n,
            });
        }

        let index = VertexIndex::new(self.config.naming, n)?;
        self.adjacency = vec![AdjacencyList::new(); n];
        self.index = Some(index);
        debug!(
            vertices = n,
            directed = self.config.directed,
            weighted = self.config.weighted,
            "顶点数已设置"
        );
        Ok(())
    }

    /// 顶点名称映射
    pub fn vertex_index(&self) -> Result<&VertexIndex> {
        self.index.as_ref().ok_or(Error::VertexCountUnset)
    }

    /// 名称 -> 顶点
    pub fn vertex(&self, name: &VertexName) -> Result<VertexId> {
        self.vertex_index()?.id_of(name)
    }

    /// 顶点 -> 名称
    pub fn name_of(&self, vertex: VertexId) -> Result<VertexName> {
        self.vertex_index()?.name_of(vertex)
    }

    /// 按下标顺序遍历所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.adjacency.len()).map(VertexId)
    }

    /// 边数，无向边只计一次
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(|list| list.len()).sum();
        if self.config.directed {
            entries
        } else {
            entries / 2
        }
    }

    /// 出度
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.adjacency(vertex)?.len())
    }

    /// 邻居和对应权重（平行数组，顺序一致），仅带权图可用
    pub fn neighbors_with_weights(
        &self,
        vertex: VertexId,
    ) -> Result<(Vec<VertexId>, Vec<Weight>)> {
        if !self.config.weighted {
            return Err(Error::InvalidGraphForAlgorithm("无权图没有边权重".to_string()));
        }
        Ok(self
            .adjacency(vertex)?
            .iter()
            .map(|a| (a.target, a.weight.unwrap_or_default()))
            .unzip())
    }

    /// 邻接序列的只读视图
    pub(crate) fn adjacency(&self, vertex: VertexId) -> Result<&[Adjacency]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex.0])
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        self.vertex_index()?.check(vertex)
    }

    fn edge_not_found(&self, origin: VertexId, destination: VertexId) -> Error {
        let label = |v: VertexId| {
            self.name_of(v)
                .map(|n| n.to_string())
                .unwrap_or_else(|_| v.to_string())
        };
        Error::EdgeNotFound {
            origin: label(origin),
            destination: label(destination),
        }
    }
}

impl EdgeStore for Graph {
    fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn insert_edge(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        weight: Option<Weight>,
    ) -> Result<()> {
        self.check_vertex(origin)?;
        self.check_vertex(destination)?;
        self.config.check_weight(weight)?;

        self.adjacency[origin.0].push(Adjacency::new(destination, weight));
        if self.config.undirected() {
            self.adjacency[destination.0].push(Adjacency::new(origin, weight));
        }
        trace!(%origin, %destination, ?weight, "插入边");
        Ok(())
    }

    fn remove_edge(&mut self, origin: VertexId, destination: VertexId) -> Result<()> {
        self.check_vertex(origin)?;
        self.check_vertex(destination)?;

        let pos = self.adjacency[origin.0]
            .iter()
            .position(|a| a.target == destination)
            .ok_or_else(|| self.edge_not_found(origin, destination))?;

        if self.config.directed {
            self.adjacency[origin.0].remove(pos);
            return Ok(());
        }

        // 反向项须与被删项权重一致；自环时两项位于同一序列
        let weight = self.adjacency[origin.0][pos].weight;
        let mirror = self.adjacency[destination.0]
            .iter()
            .enumerate()
            .position(|(i, a)| {
                a.target == origin && a.weight == weight && !(origin == destination && i == pos)
            })
            .ok_or_else(|| self.edge_not_found(destination, origin))?;

        if origin == destination {
            let list = &mut self.adjacency[origin.0];
            list.remove(pos.max(mirror));
            list.remove(pos.min(mirror));
        } else {
            self.adjacency[origin.0].remove(pos);
            self.adjacency[destination.0].remove(mirror);
        }
        trace!(%origin, %destination, "删除边");
        Ok(())
    }

    fn has_edge(&self, origin: VertexId, destination: VertexId) -> Result<bool> {
        self.check_vertex(destination)?;
        Ok(self
            .adjacency(origin)?
            .iter()
            .any(|a| a.target == destination))
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.adjacency(vertex)?.iter().map(|a| a.target).collect())
    }
}

/// 每行 `name: n1 n2 ...`，带权图写作 `n1(w)`
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(index) = &self.index else {
            return Ok(());
        };
        for (i, list) in self.adjacency.iter().enumerate() {
            let name = index.name_of(VertexId(i)).map_err(|_| fmt::Error)?;
            write!(f, "{}:", name)?;
            for a in list {
                let target = index.name_of(a.target).map_err(|_| fmt::Error)?;
                match a.weight {
                    Some(w) => write!(f, " {}({})", target, w)?,
                    None => write!(f, " {}", target)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VertexNamingConvention;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new(GraphConfig::new(), Some(3)).unwrap();
        graph.insert_edge(v(0), v(1), None).unwrap();
        graph.insert_edge(v(0), v(2), None).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge(v(0), v(1)).unwrap());
        assert!(graph.has_edge(v(1), v(0)).unwrap());
        assert!(!graph.has_edge(v(1), v(2)).unwrap());
        assert_eq!(graph.neighbors(v(0)).unwrap(), vec![v(1), v(2)]);
        assert_eq!(graph.degree(v(2)).unwrap(), 1);
    }

    #[test]
    fn test_directed_no_mirror() {
        let config = GraphConfig::new().with_directed(true);
        let mut graph = Graph::new(config, Some(2)).unwrap();
        graph.insert_edge(v(0), v(1), None).unwrap();

        assert!(graph.has_edge(v(0), v(1)).unwrap());
        assert!(!graph.has_edge(v(1), v(0)).unwrap());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_undirected_remove_restores() {
        let config = GraphConfig::new().with_weighted(true);
        let mut graph = Graph::new(config, Some(4)).unwrap();
        for (a, b) in [(0, 1), (1, 2), (3, 0), (2, 2)] {
            graph.insert_edge(v(a), v(b), Some(5)).unwrap();
            graph.remove_edge(v(a), v(b)).unwrap();
            assert!(!graph.has_edge(v(a), v(b)).unwrap());
            assert!(!graph.has_edge(v(b), v(a)).unwrap());
        }
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_keeps_matching_mirror() {
        let config = GraphConfig::new().with_weighted(true);
        let mut graph = Graph::new(config, Some(2)).unwrap();
        graph.insert_edge(v(0), v(1), Some(3)).unwrap();
        graph.insert_edge(v(1), v(0), Some(7)).unwrap();

        graph.remove_edge(v(0), v(1)).unwrap();

        assert_eq!(graph.neighbors_with_weights(v(0)).unwrap(), (vec![v(1)], vec![7]));
        assert_eq!(graph.neighbors_with_weights(v(1)).unwrap(), (vec![v(0)], vec![7]));
    }

    #[test]
    fn test_multi_edges_allowed() {
        let config = GraphConfig::new().with_directed(true);
        let mut graph = Graph::new(config, Some(2)).unwrap();
        graph.insert_edge(v(0), v(1), None).unwrap();
        graph.insert_edge(v(0), v(1), None).unwrap();
        assert_eq!(graph.neighbors(v(0)).unwrap(), vec![v(1), v(1)]);

        graph.remove_edge(v(0), v(1)).unwrap();
        assert!(graph.has_edge(v(0), v(1)).unwrap());
    }

    #[test]
    fn test_edge_errors() {
        let mut graph = Graph::new(GraphConfig::new(), Some(2)).unwrap();
        assert!(matches!(
            graph.insert_edge(v(0), v(2), None),
            Err(Error::UnknownVertex(_))
        ));
        assert!(matches!(
            graph.insert_edge(v(0), v(1), Some(1)),
            Err(Error::WeightUnexpected)
        ));
        assert!(matches!(
            graph.remove_edge(v(0), v(1)),
            Err(Error::EdgeNotFound { .. })
        ));
        assert!(matches!(
            graph.neighbors_with_weights(v(0)),
            Err(Error::InvalidGraphForAlgorithm(_))
        ));

        let mut weighted = Graph::new(GraphConfig::new().with_weighted(true), Some(2)).unwrap();
        assert!(matches!(
            weighted.insert_edge(v(0), v(1), None),
            Err(Error::WeightRequired)
        ));
    }

    #[test]
    fn test_deferred_vertex_count() {
        let mut graph = Graph::new(GraphConfig::new(), None).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert!(matches!(
            graph.insert_edge(v(0), v(1), None),
            Err(Error::VertexCountUnset)
        ));

        graph.set_vertex_count(3).unwrap();
        graph.insert_edge(v(0), v(1), None).unwrap();
        graph.set_vertex_count(3).unwrap();
        assert!(graph.has_edge(v(0), v(1)).unwrap());

        assert!(matches!(
            graph.set_vertex_count(4),
            Err(Error::VertexCountAlreadySet {
                current: 3,
                requested: 4
            })
        ));
    }

    #[test]
    fn test_letter_naming() {
        let config = GraphConfig::new().with_naming(VertexNamingConvention::LowercaseLetters);
        assert!(matches!(
            Graph::new(config, Some(27)),
            Err(Error::NamingConventionOverflow(27))
        ));

        let mut graph = Graph::new(config, Some(3)).unwrap();
        let a = graph.vertex(&VertexName::Letter('a')).unwrap();
        let c = graph.vertex(&VertexName::Letter('c')).unwrap();
        graph.insert_edge(a, c, None).unwrap();
        assert_eq!(graph.name_of(c).unwrap(), VertexName::Letter('c'));
        assert_eq!(graph.to_string(), "a: c\nb:\nc: a\n");
    }

    #[test]
    fn test_display_weighted() {
        let config = GraphConfig::new()
            .with_directed(true)
            .with_weighted(true)
            .with_naming(VertexNamingConvention::SequentialFromOne);
        let graph = Graph::from_edges(config, 2, [Edge::weighted(0, 1, 9)]).unwrap();
        assert_eq!(graph.to_string(), "1: 2(9)\n2:\n");
    }

    #[test]
    fn test_neighbors_is_copy() {
        let mut graph = Graph::new(GraphConfig::new(), Some(2)).unwrap();
        graph.insert_edge(v(0), v(1), None).unwrap();
        let mut copy = graph.neighbors(v(0)).unwrap();
        copy.clear();
        assert_eq!(graph.neighbors(v(0)).unwrap(), vec![v(1)]);
    }
}
