//! 图核心模块
//!
//! 定义顶点、边标识、邻接索引和无向图容器

mod edge;
mod graph;
mod index;
mod vertex;

pub use edge::{EdgeId, EdgeKey};
pub use graph::{Neighbors, UndirectedGraph};
pub use index::AdjacencyIndex;
pub use vertex::VertexId;
