//! undigraph - 泛型无向图容器
//!
//! 以整数顶点 ID 为键，存储顶点数据与边数据：
//! - 顶点表、边表与邻接索引始终保持一致
//! - 边 ID 由无序端点对确定，同一对顶点之间最多一条边
//! - 不允许自环
//! - 删除顶点时同时删除其关联边

pub mod cli;
pub mod error;
pub mod graph;
pub mod metrics;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{AdjacencyIndex, EdgeId, EdgeKey, Neighbors, UndirectedGraph, VertexId};
pub use metrics::GraphStats;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
