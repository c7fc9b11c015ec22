//! 带时间约束的广度优先搜索
//!
//! 门锁按 3 步周期切换：第 `t` 个出队的顶点（从 0 计）只能走
//! `t % 3 == 0` 时权重为 1 的边，其余时刻只能走权重为 0 的边。
//! 这是针对特定题目的规则，保留为单独命名的算法，不并入普通 BFS。

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeStore, Graph, VertexId};
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// 锁的切换周期
pub const LOCK_PERIOD: usize = 3;

/// 边准入规则
pub trait AdmissionRule {
    /// `step` 为当前出队顶点之前已出队的顶点数
    fn admits(&self, step: usize, weight: Option<Weight>) -> bool;
}

/// 3 步周期门锁规则
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedLockRule;

impl AdmissionRule for TimedLockRule {
    fn admits(&self, step: usize, weight: Option<Weight>) -> bool {
        match weight {
            Some(w) if step % LOCK_PERIOD == 0 => w == 1,
            Some(w) => w == 0,
            None => false,
        }
    }
}

/// 不加限制的普通 BFS
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl AdmissionRule for Unrestricted {
    fn admits(&self, _step: usize, _weight: Option<Weight>) -> bool {
        true
    }
}

/// 三色标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// 未发现
    White,
    /// 在队列中
    Gray,
    /// 已处理
    Black,
}

/// BFS 结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsOutcome {
    /// 到各顶点的距离，`None` 表示不可达
    pub distance: Vec<Option<usize>>,
    /// 各顶点的前驱，起点和未到达的顶点为 `None`
    pub parent: Vec<Option<VertexId>>,
    /// 按准入顺序记录的树边
    pub admitted: Vec<Edge>,
    /// 起点到终点的路径，不可达时为 `None`
    pub path: Option<Vec<VertexId>>,
}

impl BfsOutcome {
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }

    /// 终点距离
    pub fn goal_distance(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

impl Graph {
    /// 按门锁规则做 BFS，仅带权图可用
    pub fn breadth_first_search(&self, start: VertexId, goal: VertexId) -> Result<BfsOutcome> {
        if !self.is_weighted() {
            return Err(Error::InvalidGraphForAlgorithm(
                "门锁 BFS 需要带权图".to_string(),
            ));
        }
        self.breadth_first_search_with(&TimedLockRule, start, goal)
    }

    /// 按任意准入规则做 BFS
    pub fn breadth_first_search_with<R: AdmissionRule>(
        &self,
        rule: &R,
        start: VertexId,
        goal: VertexId,
    ) -> Result<BfsOutcome> {
        self.adjacency(start)?;
        self.adjacency(goal)?;

        let n = self.vertex_count();
        let mut color = vec![Color::White; n];
        let mut distance = vec![None; n];
        let mut parent = vec![None; n];
        let mut admitted = Vec::new();
        let mut queue = VecDeque::new();

        color[start.0] = Color::Gray;
        distance[start.0] = Some(0);
        queue.push_back(start);

        let mut step = 0;
        while let Some(current) = queue.pop_front() {
            for a in self.adjacency(current)? {
                if !rule.admits(step, a.weight) {
                    trace!(step, %current, target = %a.target, weight = ?a.weight, "边被门锁拒绝");
                    continue;
                }
                if color[a.target.0] != Color::White {
                    continue;
                }
                color[a.target.0] = Color::Gray;
                distance[a.target.0] = distance[current.0].map(|d: usize| d + 1);
                parent[a.target.0] = Some(current);
                admitted.push(Edge::new(current, a.target, a.weight));
                queue.push_back(a.target);
            }
            color[current.0] = Color::Black;
            step += 1;
        }

        let path = reconstruct_path(start, goal, &parent);
        debug!(%start, %goal, reachable = path.is_some(), dequeued = step, "BFS 完成");

        Ok(BfsOutcome {
            distance,
            parent,
            admitted,
            path,
        })
    }
}

/// 沿 parent 从终点回溯到起点
fn reconstruct_path(
    start: VertexId,
    goal: VertexId,
    parent: &[Option<VertexId>],
) -> Option<Vec<VertexId>> {
    if start == goal {
        return Some(vec![start]);
    }
    parent[goal.0]?;

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = parent[current.0]?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}
