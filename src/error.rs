use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("invalid view size: width={width}, height={height}")]
    InvalidViewSize { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("no viewport is attached to the graph view")]
    ViewportNotAttached,
}
