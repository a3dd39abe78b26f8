//! 结果打印器
//!
//! 以表格或垂直格式输出图的顶点、边和统计信息

use crate::graph::{EdgeKey, UndirectedGraph, VertexId};
use crate::metrics::GraphStats;
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 打印所有顶点及其邻居（按顶点 ID 排序）
    pub fn print_vertices<V, K, E>(&self, graph: &UndirectedGraph<V, K, E>) -> String
    where
        V: Display,
        K: EdgeKey,
    {
        let mut vertices: Vec<_> = graph.vertices().collect();
        vertices.sort_by_key(|(id, _)| **id);

        let rows: Vec<Vec<String>> = vertices
            .into_iter()
            .map(|(id, data)| {
                let neighbors = graph
                    .neighbors(*id)
                    .map(|adj| join_ids(adj))
                    .unwrap_or_default();
                vec![id.to_string(), data.to_string(), neighbors]
            })
            .collect();

        self.print_result(&columns(&["id", "data", "neighbors"]), &rows)
    }

    /// 打印所有边（按端点排序）
    pub fn print_edges<V, K, E>(&self, graph: &UndirectedGraph<V, K, E>) -> String
    where
        K: EdgeKey,
        E: Display,
    {
        let mut edges: Vec<_> = graph
            .edges()
            .map(|(id, data)| (id.endpoints(), data))
            .collect();
        edges.sort_by_key(|((a, b), _)| (*a, *b));

        let rows: Vec<Vec<String>> = edges
            .into_iter()
            .map(|((a, b), data)| vec![a.to_string(), b.to_string(), data.to_string()])
            .collect();

        self.print_result(&columns(&["a", "b", "data"]), &rows)
    }

    /// 打印结果
    pub fn print_result(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}\n{} row(s) in set\n", output, rows.len())
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize, stats: &GraphStats) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.add_row(row!["Vertices Inserted", stats.vertices_inserted.to_string()]);
        table.add_row(row!["Vertices Deleted", stats.vertices_deleted.to_string()]);
        table.add_row(row!["Edges Inserted", stats.edges_inserted.to_string()]);
        table.add_row(row!["Edges Deleted", stats.edges_deleted.to_string()]);
        table.add_row(row!["Rejected Inserts", stats.rejected_inserts().to_string()]);
        table.to_string()
    }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn join_ids(ids: impl Iterator<Item = VertexId>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}
