//! 边标识定义
//!
//! 无向边由一对无序顶点确定，边 ID 必须与端点顺序无关

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// 可作为边表键的边标识
///
/// 实现必须满足 `from_endpoints(a, b) == from_endpoints(b, a)`，
/// 否则同一对顶点之间可能出现两条边。
pub trait EdgeKey: Eq + Hash + Clone {
    /// 由两个端点构造边标识
    fn from_endpoints(a: VertexId, b: VertexId) -> Self;

    /// 获取边的两个端点
    fn endpoints(&self) -> (VertexId, VertexId);
}

/// 规范化的边 ID，始终满足 `a <= b`
///
/// 字段不公开，只能经 `new` 或反序列化（同样经过 `new`）构造。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawEdgeId")]
pub struct EdgeId {
    a: VertexId,
    b: VertexId,
}

/// 反序列化时的未规范化形式
#[derive(Deserialize)]
struct RawEdgeId {
    a: VertexId,
    b: VertexId,
}

impl From<RawEdgeId> for EdgeId {
    fn from(raw: RawEdgeId) -> Self {
        Self::new(raw.a, raw.b)
    }
}

impl EdgeId {
    /// 创建边 ID（端点按升序排列）
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// 较小的端点
    pub fn a(&self) -> VertexId {
        self.a
    }

    /// 较大的端点
    pub fn b(&self) -> VertexId {
        self.b
    }

    /// 边是否与顶点相连
    pub fn contains(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// 获取另一端点
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

impl EdgeKey for EdgeId {
    fn from_endpoints(a: VertexId, b: VertexId) -> Self {
        Self::new(a, b)
    }

    fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }
}

impl From<(i64, i64)> for EdgeId {
    fn from((a, b): (i64, i64)) -> Self {
        Self::new(VertexId(a), VertexId(b))
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_canonical() {
        let e1 = EdgeId::new(VertexId::new(2), VertexId::new(1));
        let e2 = EdgeId::new(VertexId::new(1), VertexId::new(2));

        assert_eq!(e1, e2);
        assert_eq!(e1.a().as_i64(), 1);
        assert_eq!(e1.b().as_i64(), 2);
        assert_eq!(EdgeId::from((5, 3)), EdgeId::from((3, 5)));
    }

    #[test]
    fn test_edge_key_symmetric() {
        let a = VertexId::new(10);
        let b = VertexId::new(-4);

        assert_eq!(EdgeId::from_endpoints(a, b), EdgeId::from_endpoints(b, a));
        assert_eq!(EdgeId::from_endpoints(a, b).endpoints(), (b, a));
    }

    #[test]
    fn test_edge_id_deserialize_canonical() {
        let e: EdgeId = serde_json::from_str(r#"{"a":2,"b":1}"#).unwrap();

        assert_eq!(e, EdgeId::from((1, 2)));
        assert_eq!(e.endpoints(), (VertexId::new(1), VertexId::new(2)));

        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);
        assert_eq!(serde_json::from_str::<EdgeId>(&json).unwrap(), e);
    }

    #[test]
    fn test_edge_id_other() {
        let e = EdgeId::from((1, 2));

        assert!(e.contains(VertexId::new(1)));
        assert!(!e.contains(VertexId::new(3)));
        assert_eq!(e.other(VertexId::new(1)), Some(VertexId::new(2)));
        assert_eq!(e.other(VertexId::new(2)), Some(VertexId::new(1)));
        assert_eq!(e.other(VertexId::new(3)), None);
        assert_eq!(e.to_string(), "1-2");
    }
}
