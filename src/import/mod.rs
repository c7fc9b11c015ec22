//! 边列表导入模块
//!
//! 输入格式：先是顶点数和边数，随后是 `origin destination [weight]` 描述，
//! 以空白分隔，换行和空行不影响解析。顶点记号按命名规则解析。

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeStore, Graph, VertexIndex};
use crate::types::{GraphConfig, Weight};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub duration_ms: u64,
}

/// 解析后的边列表
#[derive(Debug, Clone)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

/// 边列表读取器
pub struct EdgeListReader {
    config: GraphConfig,
}

impl EdgeListReader {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// 从文件读取
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<EdgeList> {
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// 从任意输入流读取
    pub fn read<R: BufRead>(&self, mut reader: R) -> Result<EdgeList> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse(&text)
    }

    /// 解析文本
    pub fn parse(&self, text: &str) -> Result<EdgeList> {
        let mut tokens = text.split_whitespace();

        let vertex_count = next_number(&mut tokens, "顶点数")?;
        let edge_count = next_number(&mut tokens, "边数")?;
        let index = VertexIndex::new(self.config.naming, vertex_count)?;

        let mut edges = Vec::with_capacity(edge_count);
        for i in 0..edge_count {
            let origin = next_token(&mut tokens, i)?;
            let destination = next_token(&mut tokens, i)?;
            let weight = if self.config.weighted {
                let token = next_token(&mut tokens, i)?;
                Some(token.parse::<Weight>().map_err(|_| {
                    Error::ParseError(format!("第 {} 条边的权重无效: {}", i + 1, token))
                })?)
            } else {
                None
            };
            edges.push(Edge::new(
                index.resolve(origin)?,
                index.resolve(destination)?,
                weight,
            ));
        }

        if let Some(extra) = tokens.next() {
            return Err(Error::ParseError(format!("多余的输入: {}", extra)));
        }

        Ok(EdgeList {
            vertex_count,
            edges,
        })
    }

    /// 读取并构建邻接表图
    pub fn load<R: BufRead>(&self, reader: R) -> Result<(Graph, ImportStats)> {
        let start = std::time::Instant::now();
        let list = self.read(reader)?;
        let graph = Graph::from_edges(self.config, list.vertex_count, list.edges)?;

        let stats = ImportStats {
            vertices_imported: graph.vertex_count(),
            edges_imported: graph.edge_count(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            "边列表导入完成"
        );
        Ok((graph, stats))
    }
}

fn next_number<'a, I>(tokens: &mut I, what: &str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::ParseError(format!("缺少{}", what)))?;
    token
        .parse()
        .map_err(|_| Error::ParseError(format!("{}无效: {}", what, token)))
}

fn next_token<'a, I>(tokens: &mut I, edge: usize) -> Result<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .next()
        .ok_or_else(|| Error::ParseError(format!("第 {} 条边不完整", edge + 1)))
}
