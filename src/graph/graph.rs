//! 无向图数据结构
//!
//! 顶点表、边表与邻接索引作为一个整体维护，所有变更操作保证三者一致

use super::edge::{EdgeId, EdgeKey};
use super::index::AdjacencyIndex;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use crate::metrics::GraphStats;
use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;
use tracing::{debug, trace};

/// 邻居迭代器（按建边顺序）
pub type Neighbors<'a> = std::iter::Copied<indexmap::set::Iter<'a, VertexId>>;

/// 无向图
///
/// - `V`: 顶点数据
/// - `K`: 边标识，由无序端点对确定
/// - `E`: 边数据
///
/// 不允许自环，同一对顶点之间最多一条边。迭代期间无法修改图结构
/// （迭代器借用 `&self`）。
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, K = EdgeId, E = ()> {
    /// 顶点表
    vertices: HashMap<VertexId, V>,
    /// 边表
    edges: HashMap<K, E>,
    /// 邻接索引
    adjacency: AdjacencyIndex,
    /// 操作统计
    stats: GraphStats,
}

impl<V, K: EdgeKey, E> Default for UndirectedGraph<V, K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K: EdgeKey, E> UndirectedGraph<V, K, E> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edges: HashMap::new(),
            adjacency: AdjacencyIndex::new(),
            stats: GraphStats::new(),
        }
    }

    /// 按预计规模创建空图
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(vertices),
            edges: HashMap::with_capacity(edges),
            adjacency: AdjacencyIndex::with_capacity(vertices),
            stats: GraphStats::new(),
        }
    }

    /// 由两个端点生成边 ID（与端点顺序无关）
    pub fn make_edge_id(a: VertexId, b: VertexId) -> K {
        K::from_endpoints(a, b)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 获取顶点数量
    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// 获取操作统计
    pub fn stats(&self) -> &GraphStats {
        &self.stats
    }

    // ==================== 查询 ====================

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn contains_edge(&self, id: &K) -> bool {
        self.edges.contains_key(id)
    }

    /// 获取顶点数据，不存在时返回 `VertexNotFound`
    pub fn at_vertex(&self, id: VertexId) -> Result<&V> {
        self.vertices.get(&id).ok_or(Error::VertexNotFound(id))
    }

    pub fn at_vertex_mut(&mut self, id: VertexId) -> Result<&mut V> {
        self.vertices.get_mut(&id).ok_or(Error::VertexNotFound(id))
    }

    /// 获取边数据，不存在时返回 `EdgeNotFound`
    pub fn at_edge(&self, id: &K) -> Result<&E> {
        self.edges.get(id).ok_or_else(|| edge_not_found(id))
    }

    pub fn at_edge_mut(&mut self, id: &K) -> Result<&mut E> {
        match self.edges.get_mut(id) {
            Some(data) => Ok(data),
            None => Err(edge_not_found(id)),
        }
    }

    /// 查找顶点
    pub fn find_vertex(&self, id: VertexId) -> Option<(&VertexId, &V)> {
        self.vertices.get_key_value(&id)
    }

    pub fn find_vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(&id)
    }

    /// 查找边
    pub fn find_edge(&self, id: &K) -> Option<(&K, &E)> {
        self.edges.get_key_value(id)
    }

    pub fn find_edge_mut(&mut self, id: &K) -> Option<&mut E> {
        self.edges.get_mut(id)
    }

    /// 获取两点之间的边
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&E> {
        self.edges.get(&K::from_endpoints(a, b))
    }

    /// 遍历所有顶点（无顺序保证）
    pub fn vertices(&self) -> hash_map::Iter<'_, VertexId, V> {
        self.vertices.iter()
    }

    pub fn vertices_mut(&mut self) -> hash_map::IterMut<'_, VertexId, V> {
        self.vertices.iter_mut()
    }

    /// 遍历所有顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 遍历所有边（无顺序保证）
    pub fn edges(&self) -> hash_map::Iter<'_, K, E> {
        self.edges.iter()
    }

    pub fn edges_mut(&mut self) -> hash_map::IterMut<'_, K, E> {
        self.edges.iter_mut()
    }

    /// 获取顶点的邻居
    pub fn neighbors(&self, id: VertexId) -> Result<Neighbors<'_>> {
        self.adjacency
            .row(id)
            .map(|row| row.iter().copied())
            .ok_or(Error::VertexNotFound(id))
    }

    /// 获取顶点的度
    pub fn degree(&self, id: VertexId) -> Result<usize> {
        self.adjacency.degree(id).ok_or(Error::VertexNotFound(id))
    }

    // ==================== 变更 ====================

    /// 清空图
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.stats.record_clear();
        debug!("清空图");
    }

    /// 插入顶点
    ///
    /// 顶点已存在时不做任何修改，丢弃 `data`，返回已有数据与 `false`。
    pub fn insert_vertex(&mut self, id: VertexId, data: V) -> (&mut V, bool) {
        match self.vertices.entry(id) {
            Entry::Occupied(entry) => {
                trace!(vertex = %id, "顶点已存在，忽略插入");
                self.stats.record_duplicate_vertex();
                (entry.into_mut(), false)
            }
            Entry::Vacant(entry) => {
                self.adjacency.add_vertex(id);
                self.stats.record_vertex_insert();
                debug!(vertex = %id, "插入顶点");
                (entry.insert(data), true)
            }
        }
    }

    /// 插入边
    ///
    /// - 任一端点不存在：返回 `(None, false)`，不修改图
    /// - `v1 == v2`：返回 `SelfLoop` 错误
    /// - 边已存在：返回已有数据与 `false`，丢弃 `data`
    pub fn insert_edge(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        data: E,
    ) -> Result<(Option<&mut E>, bool)> {
        if !self.vertices.contains_key(&v1) || !self.vertices.contains_key(&v2) {
            trace!(v1 = %v1, v2 = %v2, "端点不存在，忽略插入");
            self.stats.record_missing_endpoint();
            return Ok((None, false));
        }

        if v1 == v2 {
            debug!(vertex = %v1, "拒绝自环边");
            self.stats.record_self_loop();
            return Err(Error::SelfLoop(v1));
        }

        match self.edges.entry(K::from_endpoints(v1, v2)) {
            Entry::Occupied(entry) => {
                trace!(v1 = %v1, v2 = %v2, "边已存在，忽略插入");
                self.stats.record_duplicate_edge();
                Ok((Some(entry.into_mut()), false))
            }
            Entry::Vacant(entry) => {
                self.adjacency.link(v1, v2);
                self.stats.record_edge_insert();
                debug!(v1 = %v1, v2 = %v2, "插入边");
                Ok((Some(entry.insert(data)), true))
            }
        }
    }

    /// 删除顶点及其所有关联边，返回顶点数据
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<V> {
        let data = self.vertices.remove(&id)?;

        let neighbors = self.adjacency.remove_vertex(id);
        for &other in &neighbors {
            self.edges.remove(&K::from_endpoints(id, other));
        }

        self.stats.record_vertex_delete();
        self.stats.record_edge_delete(neighbors.len() as u64);
        debug!(vertex = %id, removed_edges = neighbors.len(), "删除顶点");

        Some(data)
    }

    /// 删除顶点，不存在时返回 false
    pub fn delete_vertex(&mut self, id: VertexId) -> bool {
        self.remove_vertex(id).is_some()
    }

    /// 删除边并断开两端点的邻接关系，返回边数据
    pub fn remove_edge(&mut self, id: &K) -> Option<E> {
        let data = self.edges.remove(id)?;

        let (a, b) = id.endpoints();
        self.adjacency.unlink(a, b);

        self.stats.record_edge_delete(1);
        debug!(v1 = %a, v2 = %b, "删除边");

        Some(data)
    }

    /// 删除边，不存在时返回 false
    pub fn delete_edge(&mut self, id: &K) -> bool {
        self.remove_edge(id).is_some()
    }
}

fn edge_not_found<K: EdgeKey>(id: &K) -> Error {
    let (a, b) = id.endpoints();
    Error::EdgeNotFound(format!("{}-{}", a, b))
}
