//! 图操作统计
//!
//! 记录图结构变更与被拒绝的插入，用于诊断输出

use serde::{Deserialize, Serialize};

/// 图操作累计计数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// 顶点插入数
    pub vertices_inserted: u64,
    /// 顶点删除数
    pub vertices_deleted: u64,
    /// 边插入数
    pub edges_inserted: u64,
    /// 边删除数（包括随顶点删除的边）
    pub edges_deleted: u64,
    /// 重复顶点插入数
    pub duplicate_vertices: u64,
    /// 重复边插入数
    pub duplicate_edges: u64,
    /// 端点缺失的边插入数
    pub missing_endpoints: u64,
    /// 被拒绝的自环边数
    pub self_loops_rejected: u64,
    /// 清空次数
    pub clears: u64,
}

impl GraphStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_vertex_insert(&mut self) {
        self.vertices_inserted += 1;
    }

    pub fn record_vertex_delete(&mut self) {
        self.vertices_deleted += 1;
    }

    pub fn record_edge_insert(&mut self) {
        self.edges_inserted += 1;
    }

    pub fn record_edge_delete(&mut self, count: u64) {
        self.edges_deleted += count;
    }

    pub fn record_duplicate_vertex(&mut self) {
        self.duplicate_vertices += 1;
    }

    pub fn record_duplicate_edge(&mut self) {
        self.duplicate_edges += 1;
    }

    pub fn record_missing_endpoint(&mut self) {
        self.missing_endpoints += 1;
    }

    pub fn record_self_loop(&mut self) {
        self.self_loops_rejected += 1;
    }

    pub fn record_clear(&mut self) {
        self.clears += 1;
    }

    /// 被拒绝的插入总数
    pub fn rejected_inserts(&self) -> u64 {
        self.duplicate_vertices
            + self.duplicate_edges
            + self.missing_endpoints
            + self.self_loops_rejected
    }

    /// 导出为 Prometheus 文本格式
    pub fn to_prometheus(&self) -> String {
        let counters = [
            ("vertices_inserted_total", "Total vertices inserted", self.vertices_inserted),
            ("vertices_deleted_total", "Total vertices deleted", self.vertices_deleted),
            ("edges_inserted_total", "Total edges inserted", self.edges_inserted),
            ("edges_deleted_total", "Total edges deleted", self.edges_deleted),
            ("rejected_inserts_total", "Inserts rejected as duplicate or invalid", self.rejected_inserts()),
        ];

        let mut content = String::new();
        for (name, help, value) in counters {
            content.push_str(&format!("# HELP undigraph_{} {}\n", name, help));
            content.push_str(&format!("# TYPE undigraph_{} counter\n", name));
            content.push_str(&format!("undigraph_{} {}\n", name, value));
        }
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counters() {
        let mut stats = GraphStats::new();

        stats.record_vertex_insert();
        stats.record_vertex_insert();
        stats.record_edge_insert();
        stats.record_edge_delete(3);
        stats.record_duplicate_vertex();
        stats.record_self_loop();

        assert_eq!(stats.vertices_inserted, 2);
        assert_eq!(stats.edges_deleted, 3);
        assert_eq!(stats.rejected_inserts(), 2);
    }

    #[test]
    fn test_prometheus_export() {
        let mut stats = GraphStats::new();
        stats.record_vertex_insert();

        let content = stats.to_prometheus();
        assert!(content.contains("undigraph_vertices_inserted_total 1"));
        assert!(content.contains("# TYPE undigraph_edges_deleted_total counter"));
    }

    #[test]
    fn test_stats_json() {
        let mut stats = GraphStats::new();
        stats.record_edge_insert();

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["edges_inserted"], 1);
    }
}
