//! 顶点定义
//!
//! 内部统一使用 0 起始的整数下标，对外名称通过 [`VertexIndex`] 双向映射

use crate::error::{Error, Result};
use crate::types::{VertexName, VertexNamingConvention};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（内部下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 顶点名称 <-> 内部下标 的映射表
///
/// 顶点集合确定后一次性生成，之后不再变化
#[derive(Debug, Clone)]
pub struct VertexIndex {
    naming: VertexNamingConvention,
    names: IndexSet<VertexName>,
}

impl VertexIndex {
    /// 为 `count` 个顶点生成映射
    pub fn new(naming: VertexNamingConvention, count: usize) -> Result<Self> {
        naming.check_capacity(count)?;
        let names = (0..count)
            .map(|i| naming.name(i))
            .collect::<Result<IndexSet<_>>>()?;
        Ok(Self { naming, names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 名称 -> 下标
    pub fn id_of(&self, name: &VertexName) -> Result<VertexId> {
        self.names
            .get_index_of(name)
            .map(VertexId)
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    /// 下标 -> 名称
    pub fn name_of(&self, id: VertexId) -> Result<VertexName> {
        self.names
            .get_index(id.0)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(id.to_string()))
    }

    /// 校验下标在范围内
    pub fn check(&self, id: VertexId) -> Result<()> {
        if id.0 < self.names.len() {
            Ok(())
        } else {
            Err(Error::UnknownVertex(id.to_string()))
        }
    }

    /// 解析输入记号并映射到下标
    pub fn resolve(&self, token: &str) -> Result<VertexId> {
        let name = self.naming.parse(token)?;
        self.id_of(&name)
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.names.len()).map(VertexId)
    }
}
