use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid input data: {0}")]
    InvalidInput(String),

    #[error("invalid chart options: {0}")]
    InvalidOptions(String),
}
