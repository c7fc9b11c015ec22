//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    UnknownVertex(String),

    #[error("边不存在: {origin} -> {destination}")]
    EdgeNotFound { origin: String, destination: String },

    #[error("带权图的边必须提供权重")]
    WeightRequired,

    #[error("无权图的边不能携带权重")]
    WeightUnexpected,

    #[error("算法不适用于当前图: {0}")]
    InvalidGraphForAlgorithm(String),

    #[error("字母命名最多支持 26 个顶点, 实际 {0}")]
    NamingConventionOverflow(usize),

    #[error("顶点数尚未设置")]
    VertexCountUnset,

    #[error("顶点数已设置为 {current}, 不能改为 {requested}")]
    VertexCountAlreadySet { current: usize, requested: usize },

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
