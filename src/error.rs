use thiserror::Error;

use crate::scenegraph::NodeId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid scale: {0}")]
    InvalidScale(String),

    #[error("unknown display object: {0:?}")]
    UnknownNode(NodeId),

    #[error("drawing backend failure: {0}")]
    Backend(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
