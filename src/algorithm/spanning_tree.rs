//! 最小生成树（Prim 算法）
//!
//! 朴素的 O(V²) 选点实现：每轮线性扫描未入树顶点中代价最小者。

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeStore, Graph, VertexId};
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 生成树中的前驱
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeParent {
    /// 尚未到达
    Unset,
    /// 树根
    Root,
    /// 通过该顶点接入树
    Vertex(VertexId),
}

/// 生成树结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// 总权重
    pub total_weight: Weight,
    /// 每个顶点的前驱
    pub parent: Vec<TreeParent>,
    /// 按入树顺序排列的树边
    pub edges: Vec<Edge>,
}

/// Prim 算法
pub struct PrimMst<'a> {
    graph: &'a Graph,
    root: VertexId,
}

impl<'a> PrimMst<'a> {
    /// 以顶点 0 为根
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            root: VertexId::new(0),
        }
    }

    /// 指定树根
    pub fn with_root(mut self, root: VertexId) -> Self {
        self.root = root;
        self
    }

    /// 计算最小生成树；图必须无向、带权且连通
    pub fn run(&self) -> Result<SpanningTree> {
        let graph = self.graph;
        if !graph.is_weighted() || graph.is_directed() {
            warn!(
                directed = graph.is_directed(),
                weighted = graph.is_weighted(),
                "拒绝计算最小生成树"
            );
            return Err(Error::InvalidGraphForAlgorithm(
                "最小生成树需要无向带权图".to_string(),
            ));
        }

        graph.vertex_index()?;
        let n = graph.vertex_count();
        if n == 0 {
            return Ok(SpanningTree {
                total_weight: 0,
                parent: Vec::new(),
                edges: Vec::new(),
            });
        }
        graph.adjacency(self.root)?;

        // None 表示 +∞
        let mut cost: Vec<Option<Weight>> = vec![None; n];
        let mut in_tree = vec![false; n];
        let mut parent = vec![TreeParent::Unset; n];
        let mut edges = Vec::with_capacity(n - 1);
        let mut total: Weight = 0;

        cost[self.root.0] = Some(0);
        parent[self.root.0] = TreeParent::Root;

        for _ in 0..n {
            let u = select_min(&cost, &in_tree).ok_or_else(|| {
                let reached = in_tree.iter().filter(|&&t| t).count();
                warn!(reached, vertices = n, "图不连通");
                Error::InvalidGraphForAlgorithm(format!(
                    "图不连通: 只能覆盖 {}/{} 个顶点",
                    reached, n
                ))
            })?;

            in_tree[u.0] = true;
            let c = cost[u.0].unwrap_or_default();
            total = total.checked_add(c).ok_or_else(|| {
                warn!(total, weight = c, "生成树权重溢出");
                Error::InvalidGraphForAlgorithm("生成树总权重溢出".to_string())
            })?;
            if let TreeParent::Vertex(p) = parent[u.0] {
                edges.push(Edge::new(p, u, Some(c)));
            }

            for a in graph.adjacency(u)? {
                let v = a.target;
                let w = a.weight.unwrap_or_default();
                if !in_tree[v.0] && cost[v.0].map_or(true, |c| w < c) {
                    cost[v.0] = Some(w);
                    parent[v.0] = TreeParent::Vertex(u);
                }
            }
        }

        debug!(total, edges = edges.len(), "最小生成树完成");
        Ok(SpanningTree {
            total_weight: total,
            parent,
            edges,
        })
    }
}

/// 未入树且代价有限的最小者；并列时取下标最小的
fn select_min(cost: &[Option<Weight>], in_tree: &[bool]) -> Option<VertexId> {
    let mut best: Option<(usize, Weight)> = None;
    for (i, c) in cost.iter().enumerate() {
        if in_tree[i] {
            continue;
        }
        if let Some(c) = *c {
            if best.map_or(true, |(_, b)| c < b) {
                best = Some((i, c));
            }
        }
    }
    best.map(|(i, _)| VertexId::new(i))
}

impl Graph {
    /// 最小生成树总权重
    pub fn minimum_spanning_tree(&self) -> Result<Weight> {
        PrimMst::new(self).run().map(|tree| tree.total_weight)
    }
}
