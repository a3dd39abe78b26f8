//! 邻接索引
//!
//! 每个顶点维护一个按插入顺序排列的邻居集合

use crate::graph::vertex::VertexId;
use indexmap::IndexSet;
use std::collections::HashMap;

/// 邻接表
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// 顶点 ID 到邻居集合的映射
    rows: HashMap<VertexId, IndexSet<VertexId>>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// 按预计顶点数创建
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: HashMap::with_capacity(capacity),
        }
    }

    /// 为顶点创建空行，已存在时返回 false
    pub fn add_vertex(&mut self, vertex_id: VertexId) -> bool {
        if self.rows.contains_key(&vertex_id) {
            return false;
        }
        self.rows.insert(vertex_id, IndexSet::new());
        true
    }

    /// 移除顶点所在行，并从所有邻居行中移除该顶点
    ///
    /// 返回被移除顶点的邻居列表（按插入顺序）
    pub fn remove_vertex(&mut self, vertex_id: VertexId) -> Vec<VertexId> {
        let Some(row) = self.rows.remove(&vertex_id) else {
            return Vec::new();
        };

        for other in &row {
            if let Some(other_row) = self.rows.get_mut(other) {
                other_row.shift_remove(&vertex_id);
            }
        }

        row.into_iter().collect()
    }

    /// 双向连接两个顶点
    pub fn link(&mut self, a: VertexId, b: VertexId) {
        self.rows.entry(a).or_default().insert(b);
        self.rows.entry(b).or_default().insert(a);
    }

    /// 双向断开两个顶点
    pub fn unlink(&mut self, a: VertexId, b: VertexId) {
        if let Some(row) = self.rows.get_mut(&a) {
            row.shift_remove(&b);
        }
        if let Some(row) = self.rows.get_mut(&b) {
            row.shift_remove(&a);
        }
    }

    /// 获取邻居行
    pub fn row(&self, vertex_id: VertexId) -> Option<&IndexSet<VertexId>> {
        self.rows.get(&vertex_id)
    }

    /// 两顶点是否相邻
    pub fn is_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.rows
            .get(&a)
            .map(|row| row.contains(&b))
            .unwrap_or(false)
    }

    /// 获取顶点的度
    pub fn degree(&self, vertex_id: VertexId) -> Option<usize> {
        self.rows.get(&vertex_id).map(|row| row.len())
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
