//! graphcore 命令行工具
//!
//! 读取边列表，运行一个算法并输出结果

use anyhow::Context;
use clap::{Parser, Subcommand};
use graphcore::algorithm::PrimMst;
use graphcore::cli::{OutputFormat, Printer};
use graphcore::import::EdgeListReader;
use graphcore::types::{GraphConfig, VertexNamingConvention};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphcore-cli")]
#[command(about = "graphcore 图算法命令行工具")]
struct Args {
    /// 输入文件路径，缺省读取标准输入
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 有向图
    #[arg(short, long)]
    directed: bool,

    /// 带权图
    #[arg(short, long)]
    weighted: bool,

    /// 顶点命名: zero, one, letters
    #[arg(short, long, default_value = "zero")]
    naming: VertexNamingConvention,

    /// 输出格式: text, table, json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 连通分量
    Components,
    /// 门锁 BFS
    Bfs {
        /// 起点
        #[arg(long)]
        start: String,
        /// 终点
        #[arg(long)]
        goal: String,
    },
    /// 最小生成树
    Mst,
    /// 打印邻接表和统计信息
    Show,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GraphConfig::new()
        .with_directed(args.directed)
        .with_weighted(args.weighted)
        .with_naming(args.naming);
    let reader = EdgeListReader::new(config);

    let (graph, stats) = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("无法打开输入文件 {:?}", path))?;
            reader.load(BufReader::new(file))?
        }
        None => reader.load(io::stdin().lock())?,
    };
    info!(
        vertices = stats.vertices_imported,
        edges = stats.edges_imported,
        ms = stats.duration_ms,
        "图已加载"
    );

    let printer = Printer::new(&graph, args.format);
    let output = match &args.command {
        Command::Components => printer.print_components(&graph.connected_components()?)?,
        Command::Bfs { start, goal } => {
            let index = graph.vertex_index()?;
            let start = index.resolve(start).context("起点无效")?;
            let goal = index.resolve(goal).context("终点无效")?;
            printer.print_bfs(&graph.breadth_first_search(start, goal)?)?
        }
        Command::Mst => printer.print_mst(&PrimMst::new(&graph).run()?)?,
        Command::Show => format!("{}\n{}", printer.print_graph(), printer.print_stats()),
    };

    print!("{}", output);
    Ok(())
}
