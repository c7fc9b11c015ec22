//! 深度优先遍历与连通分量
//!
//! 有向图上只沿出边扩展：从某个根出发能到达的顶点即算作同一分量，
//! 这与强连通/弱连通都不同，调用方需要自行留意。

use crate::error::Result;
use crate::graph::{EdgeStore, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// 连通分量结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    /// 每个分量内的顶点，升序
    pub components: Vec<Vec<VertexId>>,
    /// 分量个数
    pub count: usize,
}

impl Graph {
    /// 从 `start` 做深度优先遍历，返回本次新访问到的顶点（升序）
    ///
    /// 使用显式栈，访问顺序与递归版本的前序一致；`visited` 在多次调用间共享。
    pub fn depth_first_search(
        &self,
        visited: &mut HashSet<VertexId>,
        start: VertexId,
    ) -> Result<Vec<VertexId>> {
        self.adjacency(start)?;

        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current);

            // 逆序压栈，保证按邻接顺序出栈
            for a in self.adjacency(current)?.iter().rev() {
                if !visited.contains(&a.target) {
                    stack.push(a.target);
                }
            }
        }

        order.sort_unstable();
        Ok(order)
    }

    /// 连通分量划分
    pub fn connected_components(&self) -> Result<Components> {
        self.vertex_index()?;
        let mut visited = HashSet::with_capacity(self.vertex_count());
        let mut components = Vec::new();

        for vertex in self.vertices() {
            if visited.contains(&vertex) {
                continue;
            }
            let component = self.depth_first_search(&mut visited, vertex)?;
            debug!(root = %vertex, size = component.len(), "发现连通分量");
            components.push(component);
        }

        Ok(Components {
            count: components.len(),
            components,
        })
    }
}
