//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("无效参数: 不允许自环边 ({0}-{0})")]
    SelfLoop(VertexId),
}

impl Error {
    /// 是否为查找失败（顶点或边不存在）
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_) | Error::EdgeNotFound(_))
    }

    /// 是否为参数错误
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::SelfLoop(_))
    }
}
