//! 顶点标识定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内唯一）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct VertexId(pub i64);

impl VertexId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for VertexId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<VertexId> for i64 {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(42);
        assert_eq!(v.as_i64(), 42);
        assert_eq!(VertexId::from(42), v);
        assert_eq!(i64::from(v), 42);
        assert_eq!(v.to_string(), "42");
    }

    #[test]
    fn test_vertex_id_ordering() {
        assert!(VertexId::new(-1) < VertexId::new(0));
        assert!(VertexId::new(3) > VertexId::new(2));
    }
}
