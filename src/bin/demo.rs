//! undigraph 演示程序
//!
//! 构建一条路径图，打印顶点和边，删除一个顶点后再次打印

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use undigraph::cli::{PrintMode, Printer};
use undigraph::{EdgeId, UndirectedGraph, VertexId};

/// 演示图的最大顶点数
const MAX_VERTICES: i64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "undigraph-demo")]
#[command(about = "undigraph 无向图演示")]
struct Args {
    /// 路径图的顶点数
    #[arg(
        short = 'n',
        long,
        default_value = "3",
        value_parser = clap::value_parser!(i64).range(0..=MAX_VERTICES)
    )]
    vertices: i64,

    /// 要删除的顶点 ID
    #[arg(short, long, default_value = "2")]
    delete: i64,

    /// 以 JSON 输出操作统计
    #[arg(long, conflicts_with = "prometheus")]
    json: bool,

    /// 以 Prometheus 文本格式输出操作统计
    #[arg(long)]
    prometheus: bool,

    /// 垂直显示结果
    #[arg(short = 'G', long)]
    vertical: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("无效的日志级别")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("undigraph {} - 无向图演示", undigraph::VERSION);
    println!("==============================");

    let capacity = args.vertices as usize;
    let mut graph: UndirectedGraph<String, EdgeId, String> =
        UndirectedGraph::with_capacity(capacity, capacity.saturating_sub(1));

    for id in 1..=args.vertices {
        graph.insert_vertex(VertexId::new(id), format!("v{}", id));
    }
    for id in 1..args.vertices {
        let (a, b) = (VertexId::new(id), VertexId::new(id + 1));
        graph.insert_edge(a, b, format!("e{}{}", id, id + 1))?;
    }

    info!(
        vertices = graph.n_vertices(),
        edges = graph.n_edges(),
        "路径图构建完成"
    );

    let mode = if args.vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(mode);

    println!("\n顶点:");
    print!("{}", printer.print_vertices(&graph));
    println!("\n边:");
    print!("{}", printer.print_edges(&graph));

    let target = VertexId::new(args.delete);
    if graph.delete_vertex(target) {
        info!(vertex = %target, "已删除顶点");
    } else {
        info!(vertex = %target, "顶点不存在，未删除");
    }

    println!("\n删除顶点 {} 后:", target);
    print!("{}", printer.print_vertices(&graph));
    print!("{}", printer.print_edges(&graph));

    println!("\n统计:");
    if args.json {
        println!("{}", serde_json::to_string_pretty(graph.stats())?);
    } else if args.prometheus {
        print!("{}", graph.stats().to_prometheus());
    } else {
        print!(
            "{}",
            printer.print_stats(graph.n_vertices(), graph.n_edges(), graph.stats())
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["undigraph-demo"]).unwrap();

        assert_eq!(args.vertices, 3);
        assert_eq!(args.delete, 2);
        assert!(!args.json && !args.prometheus);
    }

    #[test]
    fn test_args_vertices_range() {
        assert!(Args::try_parse_from(["undigraph-demo", "-n", "1000000"]).is_ok());
        assert!(Args::try_parse_from(["undigraph-demo", "-n", "1000001"]).is_err());
        assert!(Args::try_parse_from(["undigraph-demo", "-n", "1000000000000"]).is_err());
        assert!(Args::try_parse_from(["undigraph-demo", "--vertices=-1"]).is_err());
    }

    #[test]
    fn test_args_stats_format_conflict() {
        assert!(Args::try_parse_from(["undigraph-demo", "--json", "--prometheus"]).is_err());
        assert!(Args::try_parse_from(["undigraph-demo", "--prometheus"]).unwrap().prometheus);
    }
}
