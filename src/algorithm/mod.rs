//! 图算法模块
//!
//! 包含深度优先遍历/连通分量、门锁 BFS 和 Prim 最小生成树

mod spanning_tree;
mod timed_lock;
mod traversal;

pub use spanning_tree::{PrimMst, SpanningTree, TreeParent};
pub use timed_lock::{AdmissionRule, BfsOutcome, TimedLockRule, Unrestricted, LOCK_PERIOD};
pub use traversal::Components;
