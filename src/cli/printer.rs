//! 结果打印器
//!
//! 把算法返回的结构化结果格式化为文本、表格或 JSON，
//! 顶点一律以对外名称显示

use crate::algorithm::{BfsOutcome, Components, SpanningTree, TreeParent};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::{VertexName, Weight};
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 纯文本
    Text,
    /// 表格
    Table,
    /// JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::ParseError(format!("未知的输出格式: {}", s))),
        }
    }
}

#[derive(Serialize)]
struct ComponentsReport {
    count: usize,
    components: Vec<Vec<VertexName>>,
}

#[derive(Serialize)]
struct BfsRow {
    vertex: VertexName,
    distance: Option<usize>,
    parent: Option<VertexName>,
}

#[derive(Serialize)]
struct BfsReport {
    reachable: bool,
    path: Option<Vec<VertexName>>,
    admitted: Vec<(VertexName, VertexName, Option<Weight>)>,
    vertices: Vec<BfsRow>,
}

#[derive(Serialize)]
struct MstReport {
    total_weight: Weight,
    edges: Vec<(VertexName, VertexName, Option<Weight>)>,
}

/// 结果打印器
pub struct Printer<'a> {
    graph: &'a Graph,
    format: OutputFormat,
}

impl<'a> Printer<'a> {
    pub fn new(graph: &'a Graph, format: OutputFormat) -> Self {
        Self { graph, format }
    }

    /// 打印连通分量
    pub fn print_components(&self, result: &Components) -> Result<String> {
        let components = result
            .components
            .iter()
            .map(|c| self.names(c))
            .collect::<Result<Vec<_>>>()?;

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&ComponentsReport {
                count: result.count,
                components,
            })?),
            OutputFormat::Table => {
                let mut table = Self::table(row!["#", "Vertices"]);
                for (i, c) in components.iter().enumerate() {
                    table.add_row(row![i + 1, join(c)]);
                }
                Ok(format!("{}{} component(s)\n", table, result.count))
            }
            OutputFormat::Text => {
                let mut output = String::new();
                for c in &components {
                    output.push_str(&join(c));
                    output.push('\n');
                }
                output.push_str(&format!("{} connected components\n", result.count));
                Ok(output)
            }
        }
    }

    /// 打印 BFS 结果
    pub fn print_bfs(&self, outcome: &BfsOutcome) -> Result<String> {
        let path = outcome.path.as_ref().map(|p| self.names(p)).transpose()?;

        match self.format {
            OutputFormat::Json => {
                let admitted = outcome
                    .admitted
                    .iter()
                    .map(|e| Ok((self.name(e.origin)?, self.name(e.destination)?, e.weight)))
                    .collect::<Result<Vec<_>>>()?;
                let vertices = self
                    .graph
                    .vertices()
                    .map(|v| {
                        Ok(BfsRow {
                            vertex: self.name(v)?,
                            distance: outcome.distance[v.0],
                            parent: outcome.parent[v.0].map(|p| self.name(p)).transpose()?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(serde_json::to_string_pretty(&BfsReport {
                    reachable: path.is_some(),
                    path,
                    admitted,
                    vertices,
                })?)
            }
            OutputFormat::Table => {
                let mut table = Self::table(row!["Vertex", "Distance", "Parent"]);
                for v in self.graph.vertices() {
                    let distance = outcome.distance[v.0]
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "∞".to_string());
                    let parent = match outcome.parent[v.0] {
                        Some(p) => self.name(p)?.to_string(),
                        None => "-".to_string(),
                    };
                    table.add_row(Row::new(vec![
                        Cell::new(&self.name(v)?.to_string()),
                        Cell::new(&distance),
                        Cell::new(&parent),
                    ]));
                }
                Ok(format!("{}{}\n", table, path_line(path.as_deref())))
            }
            OutputFormat::Text => Ok(format!("{}\n", path_line(path.as_deref()))),
        }
    }

    /// 打印最小生成树
    pub fn print_mst(&self, tree: &SpanningTree) -> Result<String> {
        let edges = tree
            .edges
            .iter()
            .map(|e| Ok((self.name(e.origin)?, self.name(e.destination)?, e.weight)))
            .collect::<Result<Vec<_>>>()?;

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&MstReport {
                total_weight: tree.total_weight,
                edges,
            })?),
            OutputFormat::Table => {
                let mut table = Self::table(row!["Vertex", "Parent"]);
                for v in self.graph.vertices() {
                    let parent = match tree.parent[v.0] {
                        TreeParent::Root => "(root)".to_string(),
                        TreeParent::Unset => "-".to_string(),
                        TreeParent::Vertex(p) => self.name(p)?.to_string(),
                    };
                    table.add_row(row![self.name(v)?.to_string(), parent]);
                }
                Ok(format!("{}total weight: {}\n", table, tree.total_weight))
            }
            OutputFormat::Text => Ok(format!("{}\n", tree.total_weight)),
        }
    }

    /// 打印邻接表
    pub fn print_graph(&self) -> String {
        self.graph.to_string()
    }

    /// 打印统计信息
    pub fn print_stats(&self) -> String {
        let mut table = Self::table(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", self.graph.vertices().count()]);
        table.add_row(row!["Edge Count", self.graph.edge_count()]);
        table.to_string()
    }

    fn table(titles: Row) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(titles);
        table
    }

    fn name(&self, vertex: VertexId) -> Result<VertexName> {
        self.graph.name_of(vertex)
    }

    fn names(&self, vertices: &[VertexId]) -> Result<Vec<VertexName>> {
        vertices.iter().map(|&v| self.name(v)).collect()
    }
}

fn join(names: &[VertexName]) -> String {
    names
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn path_line(path: Option<&[VertexName]>) -> String {
    match path {
        Some(p) => format!("path: {} (length {})", join(p), p.len() - 1),
        None => "unreachable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::types::{GraphConfig, VertexNamingConvention};

    #[test]
    fn test_print_components_text() {
        let config = GraphConfig::new().with_naming(VertexNamingConvention::LowercaseLetters);
        let graph = Graph::from_edges(config, 3, [Edge::unweighted(0, 2)]).unwrap();
        let result = graph.connected_components().unwrap();

        let output = Printer::new(&graph, OutputFormat::Text)
            .print_components(&result)
            .unwrap();
        assert_eq!(output, "a c\nb\n2 connected components\n");
    }

    #[test]
    fn test_print_components_json() {
        let config = GraphConfig::new().with_naming(VertexNamingConvention::SequentialFromOne);
        let graph = Graph::from_edges(config, 3, [Edge::unweighted(1, 2)]).unwrap();
        let result = graph.connected_components().unwrap();

        let output = Printer::new(&graph, OutputFormat::Json)
            .print_components(&result)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["components"][1], serde_json::json!([2, 3]));
    }

    #[test]
    fn test_print_bfs_and_mst() {
        let config = GraphConfig::new().with_weighted(true);
        let edges = [Edge::weighted(0, 1, 1), Edge::weighted(1, 2, 0)];
        let graph = Graph::from_edges(config, 3, edges).unwrap();

        let outcome = graph
            .breadth_first_search(VertexId::new(0), VertexId::new(2))
            .unwrap();
        let printer = Printer::new(&graph, OutputFormat::Text);
        assert_eq!(printer.print_bfs(&outcome).unwrap(), "path: 0 1 2 (length 2)\n");

        let tree = crate::algorithm::PrimMst::new(&graph).run().unwrap();
        assert_eq!(printer.print_mst(&tree).unwrap(), "1\n");

        let table = Printer::new(&graph, OutputFormat::Table)
            .print_mst(&tree)
            .unwrap();
        assert!(table.contains("(root)"));
        assert!(table.ends_with("total weight: 1\n"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
